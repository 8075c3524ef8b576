use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Rentmap Configuration

# Component weights for the value score. The vector is normalized to
# sum 1.0 before use, so only the proportions matter. Omitting the
# whole table applies the defaults below; a partial table must still
# name every key except `schools`.
[weights]
affordability = 0.30
amenities = 0.20
transit = 0.20
safety = 0.20
schools = 0.10
growth = 0.10

[output]
default_format = "terminal"
"#;

    fs::write(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
