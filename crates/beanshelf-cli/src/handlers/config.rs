use crate::context::ExecutionContext;
use anyhow::{Result, bail};
use std::io::Write;
use tracing::info;

pub fn init<W: Write>(ctx: &ExecutionContext, force: bool, out: &mut W) -> Result<()> {
    let path = ctx.config_path();
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let config = ctx.config()?;
    config.save_to(&path)?;
    info!(path = %path.display(), "config written");

    writeln!(out, "Wrote {}", path.display())?;
    Ok(())
}

pub fn show<W: Write>(ctx: &ExecutionContext, out: &mut W) -> Result<()> {
    let config = ctx.config()?;
    let path = ctx.config_path();
    let origin = if path.exists() { "" } else { " (not written yet)" };

    writeln!(out, "# {}{}", path.display(), origin)?;
    write!(out, "{}", toml::to_string_pretty(config)?)?;
    Ok(())
}
