//! Character ranges for the random algorithm.
use crate::{Error, ModeMask, Result};

/// Lower-case letters.
pub const ALPHA_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
/// Lower-case letters without easily confused glyphs.
pub const ALPHA_LOWER_HUMAN: &str = "abcdefghjkmnpqrstuvwxyz";
/// Upper-case letters.
pub const ALPHA_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Upper-case letters without easily confused glyphs.
pub const ALPHA_UPPER_HUMAN: &str = "ABCDEFGHJKMNPQRSTUVWXYZ";
/// Numeric digits.
pub const NUMERIC: &str = "1234567890";
/// Numeric digits without easily confused glyphs.
pub const NUMERIC_HUMAN: &str = "23456789";
/// Printable ASCII punctuation except the grave accent.
pub const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_{|}~";
/// Punctuation that is hard to misread.
pub const SPECIAL_HUMAN: &str = "#%*+-:;=";

/// Character pool for a mode mask.
///
/// Classes are concatenated in the order lower-case, upper-case,
/// numeric and special. Every character that appears in `exclude`
/// is removed from the pool.
pub fn character_range(mode: ModeMask, exclude: &str) -> Result<Vec<char>> {
    let human = mode.has_mode(ModeMask::HUMAN_READABLE);
    let classes = [
        (ModeMask::LOWER_CASE, ALPHA_LOWER, ALPHA_LOWER_HUMAN),
        (ModeMask::UPPER_CASE, ALPHA_UPPER, ALPHA_UPPER_HUMAN),
        (ModeMask::NUMERIC, NUMERIC, NUMERIC_HUMAN),
        (ModeMask::SPECIAL, SPECIAL, SPECIAL_HUMAN),
    ];

    let mut pool = Vec::new();
    for (class, standard, readable) in classes {
        if mode.has_mode(class) {
            let chars = if human { readable } else { standard };
            pool.extend(chars.chars());
        }
    }
    pool.retain(|c| !exclude.contains(*c));

    if pool.is_empty() {
        return Err(Error::EmptyCharacterPool);
    }
    Ok(pool)
}
