use anyhow::Result;
use passgen::output::{annotation, write_passwords};
use passgen_hashcheck::BreachCheck;
use passgen_password::{Algorithm, Config, Generator};
use passgen_unit_tests::{AlwaysLeaked, Unreachable};

#[tokio::test]
async fn output_one_line_per_password() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::Random)
        .fixed_length(10)
        .number_pass(5);
    let mut out = Vec::new();
    let summary = write_passwords(&config, None, &mut out).await?;
    let text = String::from_utf8(out)?;
    assert_eq!(5, summary.written);
    assert_eq!(5, text.lines().count());
    assert!(text.lines().all(|line| line.len() == 10));
    Ok(())
}

#[tokio::test]
async fn output_binary_once() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::Binary)
        .fixed_length(16)
        .number_pass(6);
    let mut out = Vec::new();
    let summary = write_passwords(&config, None, &mut out).await?;
    assert_eq!(1, summary.written);
    assert_eq!(16, out.len());
    Ok(())
}

#[tokio::test]
async fn output_spelled() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::CoinFlip)
        .number_pass(3)
        .spell_password();
    let mut out = Vec::new();
    write_passwords(&config, None, &mut out).await?;
    let text = String::from_utf8(out)?;
    for line in text.lines() {
        assert!(
            line == "Heads (Hotel/echo/alfa/delta/sierra)"
                || line == "Tails (Tango/alfa/india/lima/sierra)"
        );
    }
    Ok(())
}

#[test]
fn output_syllable_annotation() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::Pronounceable)
        .spell_pronounceable();
    let generated = Generator::new(&config).generate()?;
    assert!(annotation(&config, &generated)?.is_some());

    let config = config.algorithm(Algorithm::CoinFlip);
    let generated = Generator::new(&config).generate()?;
    assert!(annotation(&config, &generated)?.is_none());
    Ok(())
}

#[tokio::test]
async fn output_reports_leaks() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::Random)
        .number_pass(3)
        .check_hibp();
    let checker = AlwaysLeaked::default();
    let mut out = Vec::new();
    let summary = write_passwords(
        &config,
        Some(&checker as &dyn BreachCheck),
        &mut out,
    )
    .await?;
    assert_eq!(3, checker.calls());
    assert_eq!(vec![0, 1, 2], summary.leaked);
    assert_eq!(3, String::from_utf8(out)?.lines().count());
    Ok(())
}

#[tokio::test]
async fn output_skips_check_for_other_algorithms() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::Pronounceable)
        .number_pass(2)
        .check_hibp();
    let checker = AlwaysLeaked::default();
    let mut out = Vec::new();
    let summary = write_passwords(
        &config,
        Some(&checker as &dyn BreachCheck),
        &mut out,
    )
    .await?;
    assert_eq!(0, checker.calls());
    assert!(summary.leaked.is_empty());
    Ok(())
}

#[tokio::test]
async fn output_continues_after_check_failure() -> Result<()> {
    let config = Config::default()
        .algorithm(Algorithm::Random)
        .number_pass(4)
        .check_hibp();
    let mut out = Vec::new();
    let summary = write_passwords(
        &config,
        Some(&Unreachable as &dyn BreachCheck),
        &mut out,
    )
    .await?;
    assert_eq!(4, summary.written);
    assert_eq!(4, summary.check_failures);
    assert_eq!(4, String::from_utf8(out)?.lines().count());
    Ok(())
}
