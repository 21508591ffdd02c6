//! Story catalog for the accordion widget.
//!
//! Each story builds an accordion in one configuration. Left/Right (or the
//! number keys) switch stories, Tab and the arrow keys move between headers,
//! Enter/Space/click toggle, `q` quits.
//!
//! Logs go to `latest.log` in the platform cache directory. Set
//! `ACCORDION_LOG` to `error`, `warn`, `info`, `debug` or `trace` to change
//! the level.

mod app;
mod error;
mod paths;
mod stories;

use std::fs::File;
use std::process::ExitCode;

use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};

use crate::app::Catalog;
use crate::error::StoryError;

const LOG_LEVEL_VAR: &str = "ACCORDION_LOG";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), StoryError> {
    init_logging()?;
    let mut catalog = Catalog::new(stories::all())?;
    catalog.run()
}

/// Log to a file; the terminal is in raw mode while the catalog runs.
/// Without a home directory there is nowhere to put the file, so logging
/// stays off.
fn init_logging() -> Result<(), StoryError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };

    let level = std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Debug);

    WriteLogger::init(level, Config::default(), File::create(&path)?)?;
    info!("logging to {} at {level}", path.display());
    Ok(())
}
