use anyhow::Result;
use passgen::{settings::Settings, Error};
use passgen_password::{Algorithm, Config, ModeMask};
use std::time::Duration;
use tempfile::tempdir;

#[tokio::test]
async fn settings_load_and_apply() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("passgen.toml");
    std::fs::write(
        &path,
        r#"
algorithm = 0
mode = "LUNS"
min_length = 16
max_length = 24
exclude_chars = "'\""
spell_pronounceable = true

[hashcheck]
enabled = true
endpoint = "http://localhost:9000"
timeout = 5
"#,
    )?;

    let settings = Settings::load(&path).await?;
    let config = settings.apply(Config::default());
    assert_eq!(Algorithm::Pronounceable, config.algorithm);
    assert_eq!(ModeMask::COMPLEX, config.mode);
    assert_eq!(16, config.min_length);
    assert_eq!(24, config.max_length);
    assert_eq!("'\"", config.exclude_chars);
    assert!(config.spell_pronounceable);
    assert!(config.check_hibp);
    assert_eq!(Duration::from_secs(5), settings.hashcheck.timeout());
    assert_eq!(
        Some("http://localhost:9000"),
        settings.hashcheck.endpoint.as_deref()
    );
    Ok(())
}

#[tokio::test]
async fn settings_empty_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "")?;
    let settings = Settings::load(&path).await?;
    assert_eq!(Config::default(), settings.apply(Config::default()));
    assert_eq!(
        passgen_hashcheck::TIMEOUT,
        settings.hashcheck.timeout()
    );
    Ok(())
}

#[tokio::test]
async fn settings_missing_file() -> Result<()> {
    let dir = tempdir()?;
    let result = Settings::load(dir.path().join("missing.toml")).await;
    assert!(matches!(result, Err(Error::NotFile(_))));
    Ok(())
}

#[tokio::test]
async fn settings_invalid_toml() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("invalid.toml");
    std::fs::write(&path, "min_length = \"twelve\"")?;
    let result = Settings::load(&path).await;
    assert!(matches!(result, Err(Error::Toml(_))));
    Ok(())
}
