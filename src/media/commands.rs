use std::path::Path;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AutosubError, Result};
use super::is_audio_file;

/// Abstract media processing command representation
#[derive(Debug, Clone)]
pub struct MediaCommand {
    pub binary_path: String,
    pub args: Vec<String>,
    pub description: String,
}

impl MediaCommand {
    /// Create a new media processing command
    pub fn new<S1: Into<String>, S2: Into<String>>(binary_path: S1, description: S2) -> Self {
        Self {
            binary_path: binary_path.into(),
            args: Vec::new(),
            description: description.into(),
        }
    }

    /// Add an argument
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add input file
    pub fn input<P: AsRef<Path>>(self, path: P) -> Self {
        self.arg("-i").arg(path.as_ref().to_string_lossy().to_string())
    }

    /// Add output file
    pub fn output<P: AsRef<Path>>(self, path: P) -> Self {
        self.arg(path.as_ref().to_string_lossy().to_string())
    }

    /// Force overwrite output
    pub fn overwrite(self) -> Self {
        self.arg("-y")
    }

    /// Set video codec
    pub fn video_codec<S: Into<String>>(self, codec: S) -> Self {
        self.arg("-c:v").arg(codec)
    }

    /// Set audio codec
    pub fn audio_codec<S: Into<String>>(self, codec: S) -> Self {
        self.arg("-c:a").arg(codec)
    }

    /// Set audio sample rate
    pub fn audio_sample_rate(self, rate: u32) -> Self {
        self.arg("-ar").arg(rate.to_string())
    }

    /// Set audio channels
    pub fn audio_channels(self, channels: u32) -> Self {
        self.arg("-ac").arg(channels.to_string())
    }

    /// Add video filter
    pub fn video_filter<S: Into<String>>(self, filter: S) -> Self {
        self.arg("-vf").arg(filter)
    }

    /// Execute the command; a spawn failure or non-zero exit is mapped
    /// through `on_failure`
    pub async fn execute(&self, on_failure: fn(String) -> AutosubError) -> Result<()> {
        debug!("Executing media processing command: {} {:?}", self.binary_path, self.args);
        debug!("Description: {}", self.description);

        let output = Command::new(&self.binary_path)
            .args(&self.args)
            .output()
            .await
            .map_err(|e| on_failure(format!("Failed to execute {}: {}", self.binary_path, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(on_failure(format!(
                "{} exited with {}: {}",
                self.description,
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

/// Builder for the media operations the pipeline needs
pub struct MediaCommandBuilder {
    binary_path: String,
}

impl MediaCommandBuilder {
    pub fn new<S: Into<String>>(binary_path: S) -> Self {
        Self {
            binary_path: binary_path.into(),
        }
    }

    /// Build the extraction command for `input_path`, picking the audio
    /// normalization or video demux variant by extension
    pub fn extract_audio<P: AsRef<Path>>(&self, input_path: P, audio_path: P) -> MediaCommand {
        if is_audio_file(input_path.as_ref()) {
            self.normalize_audio(input_path, audio_path)
        } else {
            self.demux_audio(input_path, audio_path)
        }
    }

    /// Convert an audio file to 16kHz mono 16-bit PCM
    pub fn normalize_audio<P: AsRef<Path>>(&self, input_path: P, audio_path: P) -> MediaCommand {
        MediaCommand::new(&self.binary_path, "Audio normalization")
            .overwrite()
            .input(input_path)
            .audio_sample_rate(16000)
            .audio_channels(1)
            .audio_codec("pcm_s16le")
            .output(audio_path)
    }

    /// Demux the audio track of a video container at original quality
    pub fn demux_audio<P: AsRef<Path>>(&self, video_path: P, audio_path: P) -> MediaCommand {
        MediaCommand::new(&self.binary_path, "Audio extraction")
            .overwrite()
            .input(video_path)
            .arg("-q:a").arg("0")
            .arg("-map").arg("a")
            .output(audio_path)
    }

    /// Burn subtitles into the video with the fixed H.264/AAC re-encode profile
    pub fn embed_subtitles<P: AsRef<Path>>(
        &self,
        video_path: P,
        subtitle_path: P,
        output_path: P,
    ) -> MediaCommand {
        MediaCommand::new(&self.binary_path, "Subtitle embedding")
            .overwrite()
            .input(video_path)
            .video_filter(format!("subtitles={}", escape_filter_path(subtitle_path.as_ref())))
            .video_codec("libx264")
            .arg("-crf").arg("23")
            .audio_codec("aac")
            .output(output_path)
    }

    /// Build version check command
    pub fn version_check(&self) -> MediaCommand {
        MediaCommand::new(&self.binary_path, "Version check")
            .arg("-version")
    }
}

/// Escape a path for use as a filter option value
fn escape_filter_path(path: &Path) -> String {
    let mut escaped = String::new();
    for c in path.to_string_lossy().chars() {
        if matches!(c, '\\' | ':' | '\'') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_input_is_normalized() {
        let builder = MediaCommandBuilder::new("ffmpeg");
        let cmd = builder.extract_audio("talk.MP3", "temp_audio.wav");

        assert_eq!(cmd.description, "Audio normalization");
        assert_eq!(
            cmd.args,
            ["-y", "-i", "talk.MP3", "-ar", "16000", "-ac", "1", "-c:a", "pcm_s16le", "temp_audio.wav"]
        );
    }

    #[test]
    fn test_video_input_is_demuxed() {
        let builder = MediaCommandBuilder::new("ffmpeg");
        let cmd = builder.extract_audio("movie.mkv", "temp_audio.wav");

        assert_eq!(cmd.description, "Audio extraction");
        assert_eq!(
            cmd.args,
            ["-y", "-i", "movie.mkv", "-q:a", "0", "-map", "a", "temp_audio.wav"]
        );
    }

    #[test]
    fn test_embed_profile() {
        let builder = MediaCommandBuilder::new("/usr/local/bin/ffmpeg");
        let cmd = builder.embed_subtitles("in.mp4", "out.srt", "out.mp4");

        assert_eq!(cmd.binary_path, "/usr/local/bin/ffmpeg");
        assert_eq!(
            cmd.args,
            [
                "-y", "-i", "in.mp4", "-vf", "subtitles=out.srt", "-c:v", "libx264", "-crf", "23",
                "-c:a", "aac", "out.mp4"
            ]
        );
    }

    #[test]
    fn test_escape_filter_path() {
        assert_eq!(escape_filter_path(Path::new("C:\\subs\\it's.srt")), "C\\:\\\\subs\\\\it\\'s.srt");
        assert_eq!(escape_filter_path(Path::new("plain/out.srt")), "plain/out.srt");
    }

    #[tokio::test]
    async fn test_missing_binary_maps_to_stage_error() {
        let cmd = MediaCommand::new("definitely-not-a-media-tool-binary", "Audio extraction")
            .arg("-version");

        let result = cmd.execute(AutosubError::ExtractionFailed).await;
        assert!(matches!(result, Err(AutosubError::ExtractionFailed(_))));
    }
}
