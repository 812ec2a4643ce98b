//! Settings file.
//!
//! Every key is optional, values that are present replace the
//! defaults and are in turn replaced by command line flags.
//!
//! ```toml
//! algorithm = 1
//! mode = "LUNS"
//! min_length = 16
//! max_length = 24
//! exclude_chars = "'\"`"
//!
//! [hashcheck]
//! enabled = true
//! timeout = 5
//! ```
use passgen_password::{Algorithm, Config, ModeMask};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

use crate::{Error, Result};

/// Settings loaded from a TOML file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Algorithm number.
    pub algorithm: Option<i64>,
    /// Mode string for the character classes.
    pub mode: Option<String>,
    /// Minimum password length.
    pub min_length: Option<i64>,
    /// Maximum password length.
    pub max_length: Option<i64>,
    /// Fixed password length.
    pub fixed_length: Option<i64>,
    /// Number of passwords.
    pub number_pass: Option<i64>,
    /// Characters to exclude.
    pub exclude_chars: Option<String>,
    /// Minimum lower-case characters.
    pub min_lower_case: Option<i64>,
    /// Minimum upper-case characters.
    pub min_upper_case: Option<i64>,
    /// Minimum numeric characters.
    pub min_numeric: Option<i64>,
    /// Minimum special characters.
    pub min_special: Option<i64>,
    /// Group characters for mobile keyboards.
    pub mobile_grouping: bool,
    /// Hex output for binary secrets.
    pub binary_hex_mode: bool,
    /// Newline after binary secrets.
    pub binary_newline: bool,
    /// Spell passwords.
    pub spell_password: bool,
    /// Spell pronounceable passwords as syllables.
    pub spell_pronounceable: bool,
    /// Retry bound for the minimum requirements.
    pub max_attempts: Option<u32>,
    /// Breach check settings.
    pub hashcheck: HashCheckSettings,
}

/// Settings for the leaked password check.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HashCheckSettings {
    /// Check generated passwords.
    pub enabled: bool,
    /// Endpoint for range queries.
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

impl HashCheckSettings {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
            .map(Duration::from_secs)
            .unwrap_or(passgen_hashcheck::TIMEOUT)
    }
}

impl Settings {
    /// Load settings from a file path.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !tokio::fs::try_exists(path.as_ref()).await? {
            return Err(Error::NotFile(path.as_ref().to_path_buf()));
        }
        let contents = tokio::fs::read_to_string(path.as_ref()).await?;
        Ok(toml::from_str(&contents)?)
    }

    /// Apply these settings to a config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(algorithm) = self.algorithm {
            config.algorithm = Algorithm::from(algorithm);
        }
        if let Some(mode) = &self.mode {
            config.mode = ModeMask::from_mode_string(mode);
        }
        if let Some(length) = self.min_length {
            config.min_length = length;
        }
        if let Some(length) = self.max_length {
            config.max_length = length;
        }
        if let Some(length) = self.fixed_length {
            config.fixed_length = length;
        }
        if let Some(amount) = self.number_pass {
            config.number_pass = amount;
        }
        if let Some(chars) = &self.exclude_chars {
            config.exclude_chars = chars.clone();
        }
        if let Some(amount) = self.min_lower_case {
            config.min_lower_case = amount;
        }
        if let Some(amount) = self.min_upper_case {
            config.min_upper_case = amount;
        }
        if let Some(amount) = self.min_numeric {
            config.min_numeric = amount;
        }
        if let Some(amount) = self.min_special {
            config.min_special = amount;
        }
        if let Some(attempts) = self.max_attempts {
            config.max_attempts = attempts;
        }
        config.mobile_grouping |= self.mobile_grouping;
        config.binary_hex_mode |= self.binary_hex_mode;
        config.binary_newline |= self.binary_newline;
        config.spell_password |= self.spell_password;
        config.spell_pronounceable |= self.spell_pronounceable;
        config.check_hibp |= self.hashcheck.enabled;
        config
    }
}
