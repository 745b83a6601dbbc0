//! Write a default configuration file.

use std::path::Path;

use crate::config::{self, Config};

/// Write the default config to `path`, or to the OS config directory
pub fn cmd_init_config(path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => config::config_path().ok_or(config::ConfigError::NoConfigDir)?,
    };

    if target.exists() && !force {
        anyhow::bail!(
            "Config file {} already exists (use --force to overwrite)",
            target.display()
        );
    }

    config::save_to(&Config::default(), &target)?;
    println!("Wrote default configuration to {}", target.display());
    Ok(())
}
