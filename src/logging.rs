//! File logging for the terminal binary.
//!
//! The terminal is owned by the renderer, so nothing is ever logged to
//! stdout/stderr. When a log path is configured, a `log4rs` file appender
//! receives everything at `info` and above; per-frame JSON trace lines arrive
//! under the `frame` target.

use anyhow::Result;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";

/// Install the global logger. With no path, logging stays disabled.
pub fn init(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(Root::builder().appender("file").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}
