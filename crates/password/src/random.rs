//! Cryptographically secure random numbers and bytes.
//!
//! Every value is drawn from the operating system entropy
//! source; failures are returned to the caller.
use crate::{Error, Result};
use rand::{rngs::OsRng, CryptoRng, RngCore};

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl CryptoRng + RngCore {
    OsRng
}

fn next_u64(rng: &mut impl RngCore) -> Result<u64> {
    let mut buffer = [0u8; 8];
    rng.try_fill_bytes(&mut buffer)?;
    Ok(u64::from_be_bytes(buffer))
}

/// Uniformly distributed integer in the range `[0, max_exclusive)`.
///
/// Draws that fall into the incomplete final bucket of the
/// 64-bit space are rejected and drawn again so the result
/// carries no modulo bias. `Rng::gen_range` is not used as it
/// panics when the entropy source fails.
pub fn uniform_int(max_exclusive: i64) -> Result<i64> {
    if max_exclusive <= 0 {
        return Err(Error::InvalidBound(max_exclusive));
    }
    let bound = max_exclusive as u64;
    // 2^64 mod bound
    let remainder = (u64::MAX % bound + 1) % bound;
    let rng = &mut csprng();
    loop {
        let value = next_u64(rng)?;
        if remainder == 0 || value <= u64::MAX - remainder {
            return Ok((value % bound) as i64);
        }
    }
}

/// Random bytes of the given length.
pub fn random_bytes(length: i64) -> Result<Vec<u8>> {
    if length < 0 {
        return Err(Error::InvalidLength(length));
    }
    let mut bytes = vec![0u8; length as usize];
    if !bytes.is_empty() {
        csprng().try_fill_bytes(&mut bytes)?;
    }
    Ok(bytes)
}

/// Flip a coin, returns either zero or one.
pub fn coin_flip() -> Result<u8> {
    Ok(uniform_int(2)? as u8)
}

/// Flip a coin, returns `true` for one.
pub fn coin_flip_bool() -> Result<bool> {
    Ok(coin_flip()? == 1)
}

/// String of `length` characters sampled with replacement
/// from `pool`.
pub fn random_string(pool: &[char], length: usize) -> Result<String> {
    if pool.is_empty() {
        return Err(Error::EmptyCharacterPool);
    }
    let mut value = String::with_capacity(length);
    for _ in 0..length {
        let index = uniform_int(pool.len() as i64)?;
        value.push(pool[index as usize]);
    }
    Ok(value)
}
