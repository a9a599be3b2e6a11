use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dsep",
    about = "Test d-separation between nodes of a DAG given as an adjacency matrix",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with matrix layout and numbering settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Treat node numbers as 0-based instead of 1-based
    #[arg(long, global = true)]
    pub zero_based: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print TRUE if source and target are d-separated given the observed nodes
    Check(CheckArgs),
    /// List every node d-connected to the source given the observed nodes
    Reachable(ReachableArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// File containing the DAG in matrix form
    #[arg(short = 'f', long)]
    pub graph_file: PathBuf,
    #[arg(short, long)]
    pub source: usize,
    #[arg(short, long)]
    pub target: usize,
    /// Conditioned (observed) nodes
    #[arg(short, long, num_args = 0..)]
    pub given: Vec<usize>,
}

#[derive(Args)]
pub struct ReachableArgs {
    /// File containing the DAG in matrix form
    #[arg(short = 'f', long)]
    pub graph_file: PathBuf,
    #[arg(short, long)]
    pub source: usize,
    /// Conditioned (observed) nodes
    #[arg(short, long, num_args = 0..)]
    pub given: Vec<usize>,
}
