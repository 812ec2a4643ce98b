use std::fmt;

/// Password generation algorithm.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Algorithm {
    /// Pronounceable passwords built from syllables.
    #[default]
    Pronounceable,
    /// Random characters drawn from the configured
    /// character classes.
    Random,
    /// Coin flip returning either heads or tails.
    CoinFlip,
    /// Raw random bytes.
    Binary,
    /// Algorithm that cannot be used to generate
    /// a password.
    Unsupported,
}

impl From<i64> for Algorithm {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::Pronounceable,
            1 => Self::Random,
            2 => Self::CoinFlip,
            3 => Self::Binary,
            _ => Self::Unsupported,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Pronounceable => "pronounceable",
                Self::Random => "random",
                Self::CoinFlip => "coinflip",
                Self::Binary => "binary",
                Self::Unsupported => "unsupported",
            }
        )
    }
}
