use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cmpr",
    about = "cmpr — structural diff reports for JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with report limits
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two JSON documents and report where they differ
    Diff(DiffArgs),
    /// Show the effective report configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    /// Override the byte limit on reported differences
    #[arg(long)]
    pub max_bytes: Option<usize>,
    /// Override the line limit on reported differences
    #[arg(long)]
    pub max_lines: Option<usize>,
    /// Object keys to skip, at any depth
    #[arg(long = "ignore")]
    pub ignore: Vec<String>,
}

#[derive(Args)]
pub struct ConfigArgs {}
