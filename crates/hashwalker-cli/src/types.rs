//! Command line types shared between main and library

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "hashwalker")]
#[command(author, version, about = "Point the walker to the starting directory", long_about = None)]
pub struct Cli {
    /// Directory to walk
    pub root: PathBuf,

    /// Prefix to strip from every reported path
    #[arg(short, long, default_value = "")]
    pub trim: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
