//! Command-line interface for kidney-match.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **match**: run one recipient against a list of candidate donors
//! - **score**: evaluate a single donor/recipient pair in detail
//! - **serve**: start the HTTP matching service
//!
//! ## Usage
//!
//! ```text
//! # Match a recipient against a donor pool
//! kidney-match match --recipient recipient.json --donors donors.json
//!
//! # JSON output for scripting
//! kidney-match match --recipient recipient.json --donors donors.json --format json
//!
//! # Inspect one pair, locus by locus
//! kidney-match score --recipient recipient.json --donor donor.json
//!
//! # Start the HTTP service
//! kidney-match serve --port 8080
//! ```

use clap::{Parser, Subcommand};

pub mod batch;
pub mod score;

#[derive(Parser)]
#[command(name = "kidney-match")]
#[command(version)]
#[command(about = "Deterministic donor-recipient compatibility matching")]
#[command(
    long_about = "kidney-match evaluates candidate kidney donors against a recipient profile.\n\nBlood type and crossmatch act as hard vetoes; HLA agreement and the recipient's PRA grade the remaining candidates. Donors carrying an antigen on the recipient's unacceptable list are excluded outright.\n\nAll matches must be verified by laboratory testing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a recipient against a list of candidate donors
    Match(batch::MatchArgs),

    /// Score a single donor/recipient pair with a per-locus breakdown
    Score(score::ScoreArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
