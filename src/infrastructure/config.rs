use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::domain::wikitext::{RenderOptions, RenderTablesConfig};
use crate::presentation::config::{keybindings, styles};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const DEFAULT_LANG: &str = "en";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default, flatten)]
    pub tables: RenderTablesConfig,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dir(&utils::get_config_dir())
    }

    /// Loads the embedded defaults overlaid with any `config.*` file found in
    /// `config_dir`. A missing user file is not an error.
    pub fn from_dir(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let data_dir = utils::get_data_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles.entry(*style_key).or_insert(*style);
        }

        if cfg.lang.trim().is_empty() {
            cfg.lang = if default_config.lang.is_empty() {
                DEFAULT_LANG.to_string()
            } else {
                default_config.lang.clone()
            };
        }

        Ok(cfg)
    }

    /// Built-in render tables extended with the configured entries.
    pub fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::default();
        options.extend(&self.tables);
        options
    }
}
