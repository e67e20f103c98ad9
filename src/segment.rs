use std::time::Duration;

/// A timestamped span of transcribed or translated text.
///
/// Offsets are measured from the start of the media. Segments are kept in
/// the order the recognizer emitted them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start: Duration,
    pub end: Duration,
    pub text: String,
}

impl Segment {
    pub fn new(start: Duration, end: Duration, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Build a segment from engine timestamps in seconds. Missing or
    /// unrepresentable timestamps become zero.
    pub fn from_secs(start: Option<f64>, end: Option<f64>, text: &str) -> Self {
        Self::new(secs_or_zero(start), secs_or_zero(end), text.trim())
    }

    /// Same segment timing with replacement text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::new(self.start, self.end, text)
    }
}

fn secs_or_zero(seconds: Option<f64>) -> Duration {
    seconds
        .and_then(|s| Duration::try_from_secs_f64(s).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_timestamps_default_to_zero() {
        let segment = Segment::from_secs(None, Some(2.5), "  hello ");
        assert_eq!(segment.start, Duration::ZERO);
        assert_eq!(segment.end, Duration::from_millis(2500));
        assert_eq!(segment.text, "hello");

        let segment = Segment::from_secs(Some(1.0), None, "tail");
        assert_eq!(segment.end, Duration::ZERO);
    }

    #[test]
    fn test_negative_timestamp_is_zero() {
        let segment = Segment::from_secs(Some(-0.5), Some(f64::NAN), "x");
        assert_eq!(segment.start, Duration::ZERO);
        assert_eq!(segment.end, Duration::ZERO);
    }

    #[test]
    fn test_with_text_keeps_timing() {
        let segment = Segment::new(Duration::from_secs(3), Duration::from_secs(4), "bonjour");
        let replaced = segment.with_text("hello");
        assert_eq!(replaced.start, segment.start);
        assert_eq!(replaced.end, segment.end);
        assert_eq!(replaced.text, "hello");
    }
}
