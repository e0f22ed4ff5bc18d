// main.rs
mod ai_provider;
mod cli;
mod config;
mod journal;
mod shell;

use anyhow::Result;
use clap::Parser;

use cli::Args;
use config::SuggestionConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = SuggestionConfig::from_args(&args);

    shell::run(config).await
}
