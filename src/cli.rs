// src/cli.rs
use clap::Parser;

/// Interactive mood journal. All interaction happens through the numbered
/// menu; the flags only tune the suggestion backend.
#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(version)]
#[command(about = "Log your mood and get AI activity suggestions")]
pub struct Args {
    /// Chat-completion model to request suggestions from
    #[arg(long)]
    pub model: Option<String>,

    /// Token limit for the suggestion response
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Chat-completion endpoint URL
    #[arg(long)]
    pub url: Option<String>,
}
