use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the upper bound for a random
    /// number is not a positive integer.
    #[error("upper bound for a random number must be positive, got {0}")]
    InvalidBound(i64),

    /// Error generated when a length is negative.
    #[error("length must not be negative, got {0}")]
    InvalidLength(i64),

    /// Error generated when no characters remain to
    /// build a password from.
    #[error("character pool is empty, enable a character class or exclude fewer characters")]
    EmptyCharacterPool,

    /// Error generated when the algorithm is not supported.
    #[error("unsupported password generation algorithm")]
    UnsupportedAlgorithm,

    /// Error generated when a character has no spelled name.
    #[error("character {0:?} cannot be spelled")]
    UnsupportedCharacter(char),

    /// Error generated when no password satisfying the
    /// minimum character class requirements was found.
    #[error("minimum character requirements not met after {attempts} attempts")]
    MinimumRequirementsInfeasible {
        /// Number of candidates that were generated.
        attempts: u32,
    },

    /// Error generated by the operating system entropy source.
    #[error(transparent)]
    RandomSource(#[from] rand::Error),
}
