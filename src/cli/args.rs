//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Think of a character; akinator narrows it down with yes/no questions
#[derive(Parser, Debug)]
#[command(name = "akinator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Dataset to play with (CSV, header row first)
    #[arg(value_hint = ValueHint::FilePath)]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the question tree built from a dataset
    Tree {
        /// Dataset file
        #[arg(value_hint = ValueHint::FilePath)]
        dataset: PathBuf,
    },

    /// Show size and depth of the question tree
    Stats {
        /// Dataset file
        #[arg(value_hint = ValueHint::FilePath)]
        dataset: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show {
        /// Include the local config next to this dataset
        #[arg(value_hint = ValueHint::FilePath)]
        dataset: Option<PathBuf>,
    },

    /// Create config template
    Init {
        /// Create global config instead of ./.akinator.toml
        #[arg(short, long)]
        global: bool,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
