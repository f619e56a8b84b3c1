use std::path::PathBuf;

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

pub const DEFAULT_URL: &str = "https://portalseven.com/lottery/powerball_jackpot_winners.jsp";
const CONFIG_FILE: &str = "powerball";
const ENV_PREFIX: &str = "POWERBALL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub url: String,
    pub output_dir: PathBuf,
    pub drawings_file: String,
    pub winners_file: String,
    /// Off: detail rows are ignored and drawings carry no winners.
    pub parse_winners: bool,
}

impl Settings {
    /// Defaults, then `powerball.toml` if present, then `POWERBALL_*` variables.
    pub fn load() -> Result<Self> {
        defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn drawings_path(&self) -> PathBuf {
        self.output_dir.join(&self.drawings_file)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("url", DEFAULT_URL)?
        .set_default("output_dir", ".")?
        .set_default("drawings_file", "scraped_data.csv")?
        .set_default("winners_file", "scraped_winners.csv")?
        .set_default("parse_winners", true)?)
}
