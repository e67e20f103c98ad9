use std::fmt;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tracing::info;

use crate::error::Result;
use crate::segment::Segment;

/// Subtitle timestamp (HH:MM:SS,mmm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SrtTime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
}

impl SrtTime {
    pub fn total_milliseconds(&self) -> u64 {
        self.hours * 3_600_000 + self.minutes * 60_000 + self.seconds * 1_000 + self.milliseconds
    }
}

impl From<Duration> for SrtTime {
    /// Sub-millisecond remainders are truncated, never rounded.
    fn from(duration: Duration) -> Self {
        let total_milliseconds = duration.as_millis() as u64;
        Self {
            hours: total_milliseconds / 3_600_000,
            minutes: (total_milliseconds / 60_000) % 60,
            seconds: (total_milliseconds / 1_000) % 60,
            milliseconds: total_milliseconds % 1_000,
        }
    }
}

impl fmt::Display for SrtTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}

/// One numbered cue of a subtitle track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleItem {
    pub index: usize,
    pub start: SrtTime,
    pub end: SrtTime,
    pub text: String,
}

impl fmt::Display for SubtitleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.start, self.end)?;
        // A blank line ends the cue
        for line in self.text.lines().filter(|line| !line.trim().is_empty()) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleTrack {
    pub items: Vec<SubtitleItem>,
}

impl SubtitleTrack {
    /// Number cues 1..N in segment order
    pub fn from_segments(segments: &[Segment]) -> Self {
        let items = segments
            .iter()
            .enumerate()
            .map(|(i, segment)| SubtitleItem {
                index: i + 1,
                start: segment.start.into(),
                end: segment.end.into(),
                text: segment.text.clone(),
            })
            .collect();

        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render as SubRip text
    pub fn to_srt(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{}\n", item))
            .collect()
    }
}

/// Generate SRT subtitle file from segments
pub async fn generate_srt<P: AsRef<Path>>(segments: &[Segment], output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    info!("Generating SRT file: {}", output_path.display());

    let track = SubtitleTrack::from_segments(segments);
    fs::write(output_path, track.to_srt()).await?;

    info!("SRT file generated with {} entries", track.len());
    Ok(())
}

/// Write the plain-text transcript, one segment per line
pub async fn generate_transcript<P: AsRef<Path>>(segments: &[Segment], output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    info!("Writing transcript: {}", output_path.display());

    let mut content = String::new();
    for segment in segments {
        let line = segment.text
            .lines()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        content.push_str(&line);
        content.push('\n');
    }

    fs::write(output_path, content).await?;
    Ok(())
}
