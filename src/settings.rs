//! Run settings, layered with the `config` crate.
//!
//! Lowest to highest precedence:
//! * built-in defaults (`input = "data.txt"`, `decimal_separator = ","`)
//! * an optional `meanstd.{toml,json,yaml,...}` file in the working directory
//! * `MEANSTD_*` environment variables, e.g. `MEANSTD_INPUT=numbers.txt`

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::error::{MeanStdError, Result};
use crate::report::DEFAULT_DECIMAL_SEPARATOR;

pub const DEFAULT_INPUT: &str = "data.txt";
pub const CONFIG_BASENAME: &str = "meanstd";
pub const ENV_PREFIX: &str = "MEANSTD";

#[derive(Debug, Deserialize)]
struct RawSettings {
    input: PathBuf,
    decimal_separator: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    input: PathBuf,
    decimal_separator: char,
}

impl Settings {
    pub fn new(input: PathBuf, decimal_separator: char) -> Self {
        Self {
            input,
            decimal_separator,
        }
    }
    /// Reads defaults, the optional settings file and the environment.
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .set_default("input", DEFAULT_INPUT)?
            .set_default("decimal_separator", DEFAULT_DECIMAL_SEPARATOR.to_string())?
            .add_source(File::with_name(CONFIG_BASENAME).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        let settings = Self::from_config(config)?;
        debug!(?settings, "loaded settings");
        Ok(settings)
    }
    pub fn from_config(config: Config) -> Result<Self> {
        let raw: RawSettings = config.try_deserialize()?;
        let mut chars = raw.decimal_separator.chars();
        let decimal_separator = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(MeanStdError::Config(format!(
                    "decimal_separator must be a single character, got '{}'",
                    raw.decimal_separator
                )));
            }
        };
        Ok(Self::new(raw.input, decimal_separator))
    }
    pub fn input(&self) -> &PathBuf {
        &self.input
    }
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_INPUT), DEFAULT_DECIMAL_SEPARATOR)
    }
}
