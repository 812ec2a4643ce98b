use anyhow::Result;
use passgen_password::{
    charset::SPECIAL, Algorithm, Config, Error, Generator, ModeMask,
};
use secrecy::ExposeSecret;

fn text(config: &Config) -> Result<String> {
    let generated = Generator::new(config).generate()?;
    let password = generated
        .secret
        .as_text()
        .map(|value| value.expose_secret().to_owned())
        .unwrap_or_default();
    Ok(password)
}

#[test]
fn random_length_within_bounds() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::Random)
        .min_length(6)
        .max_length(9);
    for _ in 0..500 {
        let password = text(&config)?;
        assert!((6..=9).contains(&password.len()));
    }
    Ok(())
}

#[test]
fn random_excluded_characters_never_appear() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::Random)
        .mode(ModeMask::COMPLEX)
        .exclude_chars("abcXYZ0123!#")
        .fixed_length(32);
    for _ in 0..1000 {
        let password = text(&config)?;
        assert!(!password.chars().any(|c| "abcXYZ0123!#".contains(c)));
    }
    Ok(())
}

#[test]
fn random_meets_minimums() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::Random)
        .mode(ModeMask::COMPLEX)
        .fixed_length(12)
        .min_lower_case(2)
        .min_upper_case(1)
        .min_numeric(1)
        .min_special(1);
    for _ in 0..200 {
        let password = text(&config)?;
        let count = |f: fn(&char) -> bool| password.chars().filter(f).count();
        assert!(count(char::is_ascii_lowercase) >= 2);
        assert!(count(char::is_ascii_uppercase) >= 1);
        assert!(count(char::is_ascii_digit) >= 1);
        assert!(count(|c| SPECIAL.contains(*c)) >= 1);
    }
    Ok(())
}

#[test]
fn random_infeasible_minimums() {
    let config = Config::default()
        .algorithm(Algorithm::Random)
        .mode(ModeMask::LOWER_CASE)
        .fixed_length(8)
        .min_numeric(1)
        .max_attempts(25);
    assert!(matches!(
        Generator::new(&config).generate(),
        Err(Error::MinimumRequirementsInfeasible { attempts: 25 })
    ));
}

#[test]
fn random_human_readable() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::Random)
        .mode(ModeMask::COMPLEX | ModeMask::HUMAN_READABLE)
        .fixed_length(64);
    for _ in 0..100 {
        let password = text(&config)?;
        assert!(!password.chars().any(|c| "lIO01".contains(c)));
    }
    Ok(())
}

#[test]
fn random_empty_pool() {
    let config = Config::default()
        .algorithm(Algorithm::Random)
        .mode(ModeMask::NUMERIC)
        .exclude_chars("0123456789");
    assert!(matches!(
        Generator::new(&config).generate(),
        Err(Error::EmptyCharacterPool)
    ));
}

#[test]
fn pronounceable_reaches_length() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::Pronounceable)
        .fixed_length(15);
    for _ in 0..200 {
        let generated = Generator::new(&config).generate()?;
        let password = generated.secret.as_text().map(|s| s.expose_secret());
        let password = password.unwrap_or_default();
        assert!(password.len() >= 15);
        assert_eq!(password, generated.syllables.concat());
    }
    Ok(())
}

#[test]
fn coin_flip_sides() -> Result<()> {
    let config = Config::default().algorithm(Algorithm::CoinFlip);
    for _ in 0..50 {
        let side = text(&config)?;
        assert!(side == "Heads" || side == "Tails");
    }
    Ok(())
}

#[test]
fn binary_sizes() -> Result<()> {
    let config = Config::default().algorithm(Algorithm::Binary);
    let generated = Generator::new(&config).generate()?;
    assert!(generated.secret.as_text().is_none());
    assert_eq!(32, generated.secret.len());

    let config = config.fixed_length(8).binary_hex_mode().binary_newline();
    let hex = text(&config)?;
    assert_eq!(17, hex.len());
    assert!(hex.ends_with('\n'));
    assert!(hex.trim_end().chars().all(|c| c.is_ascii_hexdigit()));
    Ok(())
}

#[test]
fn binary_generates_once() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::Binary)
        .number_pass(10);
    assert_eq!(1, Generator::new(&config).many()?.len());
    Ok(())
}

#[test]
fn many_uses_number_pass() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::CoinFlip)
        .number_pass(4);
    assert_eq!(4, Generator::new(&config).many()?.len());
    let config = config.number_pass(-1);
    assert!(Generator::new(&config).many()?.is_empty());
    Ok(())
}

#[test]
fn unsupported_algorithm() {
    let config = Config::default().algorithm(Algorithm::from(99));
    assert!(matches!(
        Generator::new(&config).generate(),
        Err(Error::UnsupportedAlgorithm)
    ));
}
