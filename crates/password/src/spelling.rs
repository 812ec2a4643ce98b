//! Spell passwords using the phonetic alphabet.
use crate::{syllables::is_syllable, Error, Result};

/// Phonetic alphabet word for an upper-case ASCII letter.
fn alphabet_name(c: char) -> Option<&'static str> {
    let name = match c {
        'A' => "Alfa",
        'B' => "Bravo",
        'C' => "Charlie",
        'D' => "Delta",
        'E' => "Echo",
        'F' => "Foxtrot",
        'G' => "Golf",
        'H' => "Hotel",
        'I' => "India",
        'J' => "Juliett",
        'K' => "Kilo",
        'L' => "Lima",
        'M' => "Mike",
        'N' => "November",
        'O' => "Oscar",
        'P' => "Papa",
        'Q' => "Quebec",
        'R' => "Romeo",
        'S' => "Sierra",
        'T' => "Tango",
        'U' => "Uniform",
        'V' => "Victor",
        'W' => "Whiskey",
        'X' => "X_ray",
        'Y' => "Yankee",
        'Z' => "Zulu",
        _ => return None,
    };
    Some(name)
}

/// Name of a digit or ASCII punctuation character.
fn symbol_name(c: char) -> Option<&'static str> {
    let name = match c {
        '0' => "ZERO",
        '1' => "ONE",
        '2' => "TWO",
        '3' => "THREE",
        '4' => "FOUR",
        '5' => "FIVE",
        '6' => "SIX",
        '7' => "SEVEN",
        '8' => "EIGHT",
        '9' => "NINE",
        '!' => "EXCLAMATION_POINT",
        '"' => "QUOTATION_MARK",
        '#' => "CROSSHATCH",
        '$' => "DOLLAR_SIGN",
        '%' => "PERCENT_SIGN",
        '&' => "AMPERSAND",
        '\'' => "APOSTROPHE",
        '(' => "LEFT_PARENTHESIS",
        ')' => "RIGHT_PARENTHESIS",
        '*' => "ASTERISK",
        '+' => "PLUS_SIGN",
        ',' => "COMMA",
        '-' => "HYPHEN",
        '.' => "PERIOD",
        '/' => "SLASH",
        ':' => "COLON",
        ';' => "SEMICOLON",
        '<' => "LESS_THAN",
        '=' => "EQUAL_SIGN",
        '>' => "GREATER_THAN",
        '?' => "QUESTION_MARK",
        '@' => "AT_SIGN",
        '[' => "LEFT_BRACKET",
        '\\' => "BACKSLASH",
        ']' => "RIGHT_BRACKET",
        '^' => "CIRCUMFLEX",
        '_' => "UNDERSCORE",
        '`' => "GRAVE",
        '{' => "LEFT_BRACE",
        '|' => "VERTICAL_BAR",
        '}' => "RIGHT_BRACE",
        '~' => "TILDE",
        _ => return None,
    };
    Some(name)
}

/// Spelled name of a single character.
///
/// Upper-case letters map to the capitalized phonetic word,
/// lower-case letters to the lower-cased word and digits or
/// punctuation to an upper-case symbol name.
pub fn convert_char_to_name(c: char) -> Result<String> {
    let name = if c.is_ascii_uppercase() {
        alphabet_name(c).map(|name| name.to_owned())
    } else if c.is_ascii_lowercase() {
        alphabet_name(c.to_ascii_uppercase())
            .map(|name| name.to_lowercase())
    } else {
        symbol_name(c).map(|name| name.to_owned())
    };
    name.ok_or(Error::UnsupportedCharacter(c))
}

/// Spell every character of a string, joined with a slash.
pub fn spell_string(value: &str) -> Result<String> {
    let words = value
        .chars()
        .map(convert_char_to_name)
        .collect::<Result<Vec<_>>>()?;
    Ok(words.join("/"))
}

/// Spell the syllables of a pronounceable password, joined
/// with a hyphen.
///
/// Known syllables are kept as they are, any other token is
/// replaced with the name of its first character.
pub fn spell_syllables<S: AsRef<str>>(syllables: &[S]) -> Result<String> {
    let mut words = Vec::with_capacity(syllables.len());
    for syllable in syllables {
        let syllable = syllable.as_ref();
        if is_syllable(syllable) {
            words.push(syllable.to_owned());
            continue;
        }
        if let Some(c) = syllable.chars().next() {
            words.push(convert_char_to_name(c)?);
        }
    }
    Ok(words.join("-"))
}
