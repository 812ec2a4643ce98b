//! Resolve the target length of a password.
use crate::{random, Config, Error, Result};

/// Target length for the next password.
///
/// A fixed length greater than zero always wins. Otherwise a
/// length is chosen uniformly from the inclusive range between
/// the minimum and maximum length.
///
/// When the minimum length is greater than the maximum length
/// the minimum length is returned rather than an error; the
/// bounds are not swapped. A range too wide to sample is an
/// [Error::InvalidLength] for the maximum length.
pub fn resolve(config: &Config) -> Result<i64> {
    if config.fixed_length > 0 {
        return Ok(config.fixed_length);
    }
    if config.min_length < 0 {
        return Err(Error::InvalidLength(config.min_length));
    }
    if config.min_length >= config.max_length {
        return Ok(config.min_length);
    }
    let span = config
        .max_length
        .checked_sub(config.min_length)
        .and_then(|span| span.checked_add(1))
        .ok_or(Error::InvalidLength(config.max_length))?;
    Ok(config.min_length + random::uniform_int(span)?)
}
