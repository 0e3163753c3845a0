//! Ceremony and driver options (relicrc)
//!
//! Options live in an rc file made of `OPTIONS=` lines:
//!
//! ```text
//! # relicrc
//! OPTIONS=ceremony_ms:250,!verbose
//! OPTIONS=area_of_effect=8
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading options
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Missing value for option: {0}")]
    MissingValue(String),
}

/// User-configurable options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelicOptions {
    /// Length of the blessing ceremony in milliseconds
    pub ceremony_ms: u64,

    /// Show the intermediate progress line during the ceremony
    pub verbose: bool,

    /// Area of effect given to newly forged artifacts
    pub area_of_effect: u32,
}

impl Default for RelicOptions {
    fn default() -> Self {
        Self {
            ceremony_ms: 1000,
            verbose: true,
            area_of_effect: 5,
        }
    }
}

impl RelicOptions {
    pub fn ceremony(&self) -> Duration {
        Duration::from_millis(self.ceremony_ms)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::Io(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Parse options from an rc string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                    options.parse_option(opt)?;
                }
            } else {
                return Err(OptionsError::UnknownOption(line.to_string()));
            }
        }

        Ok(options)
    }

    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':').or_else(|| opt.split_once('=')) {
            return self.set_option(key.trim(), value.trim());
        }

        let (negated, name) = if let Some(name) = opt.strip_prefix('!') {
            (true, name)
        } else if let Some(name) = opt.strip_prefix("no") {
            (true, name)
        } else {
            (false, opt)
        };

        match name {
            "verbose" => self.verbose = !negated,
            "ceremony_ms" | "area_of_effect" => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(opt.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, key: &str, value: &str) -> Result<(), OptionsError> {
        if value.is_empty() {
            return Err(OptionsError::MissingValue(key.to_string()));
        }
        let invalid = || OptionsError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "ceremony_ms" => self.ceremony_ms = value.parse().map_err(|_| invalid())?,
            "area_of_effect" => self.area_of_effect = value.parse().map_err(|_| invalid())?,
            "verbose" => {
                self.verbose = match value {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    _ => return Err(invalid()),
                }
            }
            _ => return Err(OptionsError::UnknownOption(key.to_string())),
        }
        Ok(())
    }

    pub fn to_config_string(&self) -> String {
        let mut lines = vec!["# relic configuration file".to_string(), String::new()];
        lines.push(format!("OPTIONS=ceremony_ms:{}", self.ceremony_ms));
        lines.push(format!("OPTIONS=area_of_effect:{}", self.area_of_effect));
        lines.push(format!(
            "OPTIONS={}verbose",
            if self.verbose { "" } else { "!" }
        ));
        lines.join("\n") + "\n"
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        std::fs::write(path, self.to_config_string()).map_err(|e| OptionsError::Io(e.to_string()))
    }
}
