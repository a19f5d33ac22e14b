use crate::models::Mode;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "veriscan")]
#[command(
    author,
    version,
    about = "Scam & misinformation detector demo server"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the demo server with the embedded web UI
    Serve {
        /// Listen port
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Listen address
        #[arg(short, long, default_value = "127.0.0.1")]
        address: String,

        /// Classifier backend: ml or lexicon
        #[arg(short, long, default_value = "ml", value_parser = parse_mode)]
        mode: Mode,

        /// Hugging Face repo of the sentiment checkpoint
        #[arg(
            long,
            default_value = "distilbert-base-uncased-finetuned-sst-2-english"
        )]
        model: String,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    s.parse()
}
