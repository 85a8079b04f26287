#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{copyright, list, resolve};
use crate::models::args::{AppCommands, Cli, StampArgs};

use anyhow::{Context, Result};
use clap::Parser;
use preface_domain::config::keys;
use preface_kernel::config::{Settings, SettingsSource};
use preface_logger::{Logger, verbosity_level};

const APP_NAME: &str = "preface";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = Logger::builder().name(APP_NAME).level(verbosity_level(cli.verbose));
    if let Some(dir) = &cli.log_dir {
        logger = logger.path(dir);
    }
    let _logger = logger.init().context("Failed to initialize logging")?;

    match cli.command {
        AppCommands::Resolve { license, stamp, header, format } => {
            let settings = load_settings(cli.config, stamp)?;
            resolve::resolve_license(&settings, license.as_deref().unwrap_or_default(), header, format)?;
        },
        AppCommands::Copyright { stamp } => {
            let settings = load_settings(cli.config, stamp)?;
            copyright::print_copyright(&settings);
        },
        AppCommands::List {} => list::list_licenses()?,
    }

    Ok(())
}

fn load_settings(config: Option<std::path::PathBuf>, stamp: StampArgs) -> Result<Settings> {
    let mut source =
        SettingsSource::new().set_opt(keys::AUTHOR, stamp.author).set_opt(keys::YEAR, stamp.year);
    if let Some(path) = config {
        source = source.file(path);
    }

    Settings::load(source).context("Configuration is malformed")
}
