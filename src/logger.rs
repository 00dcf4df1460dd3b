use anyhow::{Context, Result};
use simple_logger::init_with_level;

/// Installs a stderr logger for hosts that do not bring their own `log` implementation.
pub fn init(level: log::Level) -> Result<()> {
    init_with_level(level).context("Cannot install the logger")?;

    Ok(())
}
