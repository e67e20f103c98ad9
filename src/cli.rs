use clap::Parser;
use std::path::PathBuf;

use crate::workflow::RunRequest;

/// Generate translated subtitles for a video or audio file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to input video or audio file
    pub input_file: PathBuf,

    /// Path to output file (video, or base name for the SRT)
    pub output: PathBuf,

    /// Source language code (e.g., en)
    pub src_lang: String,

    /// Target language code (e.g., fr)
    pub tgt_lang: String,

    /// Generate SRT file only (no video embedding)
    #[arg(long)]
    pub srt_only: bool,
}

impl Args {
    pub fn run_request(&self) -> RunRequest {
        RunRequest {
            input_path: self.input_file.clone(),
            output_path: self.output.clone(),
            source_language: self.src_lang.clone(),
            target_language: self.tgt_lang.clone(),
            srt_only: self.srt_only,
        }
    }
}
