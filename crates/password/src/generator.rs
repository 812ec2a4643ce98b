//! Utility for generating passwords.
use crate::{
    charset::{self, NUMERIC_HUMAN, SPECIAL_HUMAN},
    group_for_mobile, length, random, Algorithm, Config, Error, Result,
    DEFAULT_BINARY_SIZE, SYLLABLES,
};
use secrecy::{ExposeSecret, SecretSlice, SecretString};

/// Generated secret.
#[derive(Debug)]
pub enum Secret {
    /// Textual password.
    Text(SecretString),
    /// Raw random bytes.
    Binary(SecretSlice<u8>),
}

impl Secret {
    /// Textual password, `None` for raw bytes.
    pub fn as_text(&self) -> Option<&SecretString> {
        match self {
            Self::Text(value) => Some(value),
            Self::Binary(_) => None,
        }
    }

    /// Bytes of the secret.
    pub fn expose_bytes(&self) -> &[u8] {
        match self {
            Self::Text(value) => value.expose_secret().as_bytes(),
            Self::Binary(value) => value.expose_secret(),
        }
    }

    /// Length of the secret in bytes.
    pub fn len(&self) -> usize {
        self.expose_bytes().len()
    }

    /// Determine if the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of a single generation.
#[derive(Debug)]
pub struct Generated {
    /// The generated secret.
    pub secret: Secret,
    /// Syllables of a pronounceable password in the order
    /// they were drawn, empty for other algorithms.
    pub syllables: Vec<String>,
}

impl From<SecretString> for Generated {
    fn from(value: SecretString) -> Self {
        Self {
            secret: Secret::Text(value),
            syllables: Vec::new(),
        }
    }
}

/// Password generator.
///
/// Holds no state between calls so a single generator may be
/// shared by reference.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    config: &'a Config,
}

impl<'a> Generator<'a> {
    /// Create a new password generator.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Configuration for this generator.
    pub fn config(&self) -> &Config {
        self.config
    }

    /// Generate a secret using the configured algorithm.
    pub fn generate(&self) -> Result<Generated> {
        tracing::debug!(
            algorithm = %self.config.algorithm,
            "generate");
        match self.config.algorithm {
            Algorithm::Random => Ok(self.random()?.into()),
            Algorithm::Pronounceable => {
                let (password, syllables) = self.pronounceable()?;
                Ok(Generated {
                    secret: Secret::Text(password),
                    syllables,
                })
            }
            Algorithm::CoinFlip => Ok(self.coin_flip()?.into()),
            Algorithm::Binary => Ok(Generated {
                secret: self.binary()?,
                syllables: Vec::new(),
            }),
            Algorithm::Unsupported => Err(Error::UnsupportedAlgorithm),
        }
    }

    /// Number of secrets produced by [Generator::many].
    ///
    /// The binary algorithm always produces exactly one secret.
    pub fn count(&self) -> usize {
        match self.config.algorithm {
            Algorithm::Binary => 1,
            _ => self.config.number_pass.max(0) as usize,
        }
    }

    /// Generate the configured number of secrets.
    ///
    /// Stops at the first error.
    pub fn many(&self) -> Result<Vec<Generated>> {
        let count = self.count();
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.generate()?);
        }
        Ok(results)
    }

    /// Random password drawn from the configured character classes.
    ///
    /// Candidates that do not meet the minimum character
    /// requirements are discarded and a new candidate is drawn,
    /// up to the configured number of attempts (at least one).
    pub fn random(&self) -> Result<SecretString> {
        let pool = charset::character_range(
            self.config.mode,
            &self.config.exclude_chars,
        )?;
        let attempts = self.config.max_attempts.max(1);
        for attempt in 1..=attempts {
            let length = length::resolve(self.config)?;
            let mut candidate =
                random::random_string(&pool, length as usize)?;
            if self.config.mobile_grouping {
                candidate = group_for_mobile(&candidate);
            }
            let candidate = SecretString::from(candidate);
            if self.meets_requirements(candidate.expose_secret()) {
                tracing::debug!(
                    attempt = %attempt,
                    length = %length,
                    "random password");
                return Ok(candidate);
            }
        }
        tracing::warn!(
            attempts = %attempts,
            "minimum character requirements not met");
        Err(Error::MinimumRequirementsInfeasible { attempts })
    }

    /// Pronounceable password assembled from syllables.
    ///
    /// Syllables, human readable digits and special characters are
    /// drawn until the password reaches the target length, the last
    /// syllable may take it past the target. Each draw has one of its
    /// characters capitalized with a probability of one half.
    ///
    /// Returns the password and the syllables it was built from.
    pub fn pronounceable(&self) -> Result<(SecretString, Vec<String>)> {
        let singles: Vec<String> = NUMERIC_HUMAN
            .chars()
            .chain(SPECIAL_HUMAN.chars())
            .map(String::from)
            .collect();
        let pool: Vec<&str> = SYLLABLES
            .iter()
            .copied()
            .chain(singles.iter().map(|s| s.as_str()))
            .collect();

        let target = length::resolve(self.config)?;
        let mut password = String::new();
        let mut syllables = Vec::new();
        while (password.len() as i64) < target {
            let index = random::uniform_int(pool.len() as i64)? as usize;
            let mut syllable = pool[index].to_owned();
            if random::coin_flip_bool()? {
                let position =
                    random::uniform_int(syllable.len() as i64)? as usize;
                syllable = capitalize_at(&syllable, position);
            }
            password.push_str(&syllable);
            syllables.push(syllable);
        }
        tracing::debug!(
            target = %target,
            length = %password.len(),
            "pronounceable password");
        Ok((SecretString::from(password), syllables))
    }

    /// Flip a coin, either `Heads` or `Tails`.
    pub fn coin_flip(&self) -> Result<SecretString> {
        let side = if random::coin_flip_bool()? {
            "Heads"
        } else {
            "Tails"
        };
        Ok(SecretString::from(side.to_owned()))
    }

    /// Raw random bytes.
    ///
    /// Uses the fixed length when set, otherwise
    /// [DEFAULT_BINARY_SIZE] bytes.
    pub fn binary(&self) -> Result<Secret> {
        let length = if self.config.fixed_length > 0 {
            self.config.fixed_length
        } else {
            DEFAULT_BINARY_SIZE
        };
        let mut bytes = random::random_bytes(length)?;
        if self.config.binary_hex_mode {
            let bytes = SecretSlice::from(bytes);
            let mut value = hex::encode(bytes.expose_secret());
            if self.config.binary_newline {
                value.push('\n');
            }
            Ok(Secret::Text(SecretString::from(value)))
        } else {
            if self.config.binary_newline {
                bytes.push(b'\n');
            }
            Ok(Secret::Binary(SecretSlice::from(bytes)))
        }
    }

    /// Determine if a password satisfies the minimum amount of
    /// lower-case, upper-case, numeric and special characters.
    pub fn meets_requirements(&self, password: &str) -> bool {
        if !self.config.has_minimums() {
            return true;
        }

        let (mut lower, mut upper, mut numeric, mut special) =
            (0i64, 0i64, 0i64, 0i64);
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                lower += 1;
            } else if c.is_ascii_uppercase() {
                upper += 1;
            } else if c.is_ascii_digit() {
                numeric += 1;
            } else if c.is_ascii_punctuation() {
                special += 1;
            }
        }

        lower >= self.config.min_lower_case
            && upper >= self.config.min_upper_case
            && numeric >= self.config.min_numeric
            && special >= self.config.min_special
    }
}

fn capitalize_at(value: &str, position: usize) -> String {
    value
        .chars()
        .enumerate()
        .map(|(index, c)| {
            if index == position {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}
