//! # CLI Argument Definitions
//!
//! Command-line structure for the `preface` binary, built with `clap` derive.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "preface")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Pick, render and list the license a project carries")]
pub struct Cli {
    /// Configuration file to read instead of ./.preface.{toml,yaml,json}
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write log files into this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Resolve the effective license and print its text
    Resolve {
        /// License name or alias (e.g. 'MIT', 'apache', 'GPLv3'); wins over configuration
        #[arg(short, long)]
        license: Option<String>,

        #[command(flatten)]
        stamp: StampArgs,

        /// Print the short source-file header instead of the full text
        #[arg(long)]
        header: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Print the copyright line
    Copyright {
        #[command(flatten)]
        stamp: StampArgs,
    },
    /// List the built-in licenses with their aliases
    List {},
}

/// Values that end up in the copyright line.
#[derive(Debug, Args)]
pub struct StampArgs {
    /// Copyright holder (overrides the 'author' config key)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Copyright year (overrides the 'year' config key)
    #[arg(long)]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
