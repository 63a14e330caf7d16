//! `fsdelete describe`: prints the registration record for plugin discovery.

use anyhow::{Context, Result};
use std::io::{self, Write};

use fsdelete_core::descriptor;

pub fn run_describe() -> Result<()> {
    let json = descriptor()
        .to_json_pretty()
        .context("Failed to serialize the plugin descriptor")?;
    writeln!(io::stdout().lock(), "{}", json)?;
    Ok(())
}
