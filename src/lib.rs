//! Autosubber - Translated Subtitle Generation
//!
//! Converts a video or audio file into translated subtitles using a Whisper
//! engine for speech recognition, a translation service, and ffmpeg, and can
//! burn the result into a new video.

pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod media;
pub mod segment;
pub mod subtitle;
pub mod transcribe;
pub mod translate;
pub mod workflow;
