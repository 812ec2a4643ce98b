//! Configuration for password generation.
use crate::{Algorithm, ModeMask};

/// Default minimum length of a generated password.
pub const DEFAULT_MIN_LENGTH: i64 = 12;

/// Default maximum length of a generated password.
pub const DEFAULT_MAX_LENGTH: i64 = 20;

/// Default number of bytes for the binary algorithm.
pub const DEFAULT_BINARY_SIZE: i64 = 32;

/// Default number of passwords to generate.
pub const DEFAULT_NUMBER_PASS: i64 = 6;

/// Default number of candidates the random algorithm
/// generates before giving up on the minimum character
/// requirements.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// Default character classes for the random algorithm.
pub const DEFAULT_MODE: ModeMask = ModeMask::LOWER_CASE
    .union(ModeMask::UPPER_CASE)
    .union(ModeMask::NUMERIC);

/// Parameters for a password generator.
///
/// Create a config with the default values and override
/// them using the builder methods:
///
/// ```
/// use passgen_password::{Algorithm, Config};
///
/// let config = Config::default()
///     .algorithm(Algorithm::Random)
///     .min_length(8)
///     .max_length(10)
///     .min_numeric(2);
/// assert_eq!(8, config.min_length);
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    /// Algorithm used to generate passwords.
    pub algorithm: Algorithm,
    /// Output the binary algorithm as a hex string.
    pub binary_hex_mode: bool,
    /// Append a newline to the output of the binary algorithm.
    pub binary_newline: bool,
    /// Check generated passwords against a database
    /// of leaked passwords.
    pub check_hibp: bool,
    /// Characters that must never appear in a generated password.
    pub exclude_chars: String,
    /// Fixed password length; when greater than zero the
    /// minimum and maximum lengths are ignored.
    pub fixed_length: i64,
    /// Maximum password length.
    pub max_length: i64,
    /// Minimum password length.
    pub min_length: i64,
    /// Minimum number of lower-case characters.
    pub min_lower_case: i64,
    /// Minimum number of numeric characters.
    pub min_numeric: i64,
    /// Minimum number of special characters.
    pub min_special: i64,
    /// Minimum number of upper-case characters.
    pub min_upper_case: i64,
    /// Group characters by class for easier entry
    /// on mobile keyboards.
    pub mobile_grouping: bool,
    /// Character classes for the random algorithm.
    pub mode: ModeMask,
    /// Number of passwords to generate.
    pub number_pass: i64,
    /// Spell generated passwords using the phonetic alphabet.
    pub spell_password: bool,
    /// Spell pronounceable passwords as their syllables.
    pub spell_pronounceable: bool,
    /// Upper bound on random candidates generated while
    /// looking for one that meets the minimum requirements.
    pub max_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Default::default(),
            binary_hex_mode: false,
            binary_newline: false,
            check_hibp: false,
            exclude_chars: String::new(),
            fixed_length: 0,
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            min_lower_case: 0,
            min_numeric: 0,
            min_special: 0,
            min_upper_case: 0,
            mobile_grouping: false,
            mode: DEFAULT_MODE,
            number_pass: DEFAULT_NUMBER_PASS,
            spell_password: false,
            spell_pronounceable: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    /// Set the algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Output binary secrets as hex.
    pub fn binary_hex_mode(mut self) -> Self {
        self.binary_hex_mode = true;
        self
    }

    /// Append a newline to binary secrets.
    pub fn binary_newline(mut self) -> Self {
        self.binary_newline = true;
        self
    }

    /// Check passwords against the leaked password database.
    pub fn check_hibp(mut self) -> Self {
        self.check_hibp = true;
        self
    }

    /// Set the characters to exclude.
    pub fn exclude_chars(mut self, chars: impl Into<String>) -> Self {
        self.exclude_chars = chars.into();
        self
    }

    /// Set a fixed length.
    pub fn fixed_length(mut self, length: i64) -> Self {
        self.fixed_length = length;
        self
    }

    /// Set the maximum length.
    pub fn max_length(mut self, length: i64) -> Self {
        self.max_length = length;
        self
    }

    /// Set the minimum length.
    pub fn min_length(mut self, length: i64) -> Self {
        self.min_length = length;
        self
    }

    /// Set the minimum amount of lower-case characters.
    ///
    /// Large values relative to the password length
    /// cause many candidates to be discarded.
    pub fn min_lower_case(mut self, amount: i64) -> Self {
        self.min_lower_case = amount;
        self
    }

    /// Set the minimum amount of numeric characters.
    pub fn min_numeric(mut self, amount: i64) -> Self {
        self.min_numeric = amount;
        self
    }

    /// Set the minimum amount of special characters.
    pub fn min_special(mut self, amount: i64) -> Self {
        self.min_special = amount;
        self
    }

    /// Set the minimum amount of upper-case characters.
    pub fn min_upper_case(mut self, amount: i64) -> Self {
        self.min_upper_case = amount;
        self
    }

    /// Enable mobile friendly grouping.
    pub fn mobile_grouping(mut self) -> Self {
        self.mobile_grouping = true;
        self
    }

    /// Set the character classes.
    pub fn mode(mut self, mode: ModeMask) -> Self {
        self.mode = mode;
        self
    }

    /// Set the number of passwords.
    pub fn number_pass(mut self, amount: i64) -> Self {
        self.number_pass = amount;
        self
    }

    /// Spell passwords using the phonetic alphabet.
    pub fn spell_password(mut self) -> Self {
        self.spell_password = true;
        self
    }

    /// Spell pronounceable passwords as syllables.
    pub fn spell_pronounceable(mut self) -> Self {
        self.spell_pronounceable = true;
        self
    }

    /// Set the retry bound for the minimum requirements.
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Determine if any character class minimum is configured.
    pub fn has_minimums(&self) -> bool {
        self.min_lower_case > 0
            || self.min_upper_case > 0
            || self.min_numeric > 0
            || self.min_special > 0
    }

    /// Determine if any single character class minimum
    /// exceeds half of the minimum length.
    ///
    /// Such configurations are likely to need a large
    /// number of attempts or never succeed at all.
    pub fn has_excessive_minimums(&self) -> bool {
        let half = self.min_length / 2;
        [
            self.min_lower_case,
            self.min_upper_case,
            self.min_numeric,
            self.min_special,
        ]
        .iter()
        .any(|amount| *amount > half)
    }
}
