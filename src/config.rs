use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".arbgenrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory scanned for `strings_<locale>.arb` files.
    #[serde(default = "default_res_dir")]
    pub res_dir: String,
    /// Path of the generated Dart file.
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_res_dir() -> String {
    "res/values".to_string()
}

fn default_output_file() -> String {
    "lib/generated/i18n.dart".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            res_dir: default_res_dir(),
            output_file: default_output_file(),
        }
    }
}

impl Config {
    /// Load configuration from `.arbgenrc.json` in the given directory.
    ///
    /// Falls back to the default configuration when no config file exists.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.res_dir.is_empty() {
            bail!("'resDir' must not be empty");
        }
        if self.output_file.is_empty() {
            bail!("'outputFile' must not be empty");
        }
        if !self.output_file.ends_with(".dart") {
            bail!(
                "'outputFile' must be a .dart file, got \"{}\"",
                self.output_file
            );
        }
        Ok(())
    }
}

/// Serialize the default configuration with 2-space indentation.
pub fn default_config_json() -> Result<String> {
    let content = serde_json::to_string_pretty(&Config::default())
        .context("Failed to serialize default config")?;
    Ok(format!("{}\n", content))
}
