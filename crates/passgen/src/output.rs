//! Generate passwords and write them to an output stream.
use passgen_cli_helpers::messages::{fail, warn};
use passgen_hashcheck::BreachCheck;
use passgen_password::{
    spelling, Algorithm, Config, Generated, Generator, Secret,
};
use secrecy::ExposeSecret;
use std::io::Write;

use crate::{Result, TARGET};

/// Summary of a run.
#[derive(Debug, Default)]
pub struct Summary {
    /// Number of secrets written.
    pub written: usize,
    /// Positions of passwords found in the leaked password database.
    pub leaked: Vec<usize>,
    /// Number of breach checks that failed.
    pub check_failures: usize,
}

/// Annotation printed in parentheses after a password.
pub fn annotation(
    config: &Config,
    generated: &Generated,
) -> Result<Option<String>> {
    let Some(password) = generated.secret.as_text() else {
        return Ok(None);
    };
    if config.spell_password {
        return Ok(Some(spelling::spell_string(password.expose_secret())?));
    }
    if config.spell_pronounceable
        && config.algorithm == Algorithm::Pronounceable
    {
        return Ok(Some(spelling::spell_syllables(&generated.syllables)?));
    }
    Ok(None)
}

/// Generate passwords for the config and write them to `out`.
///
/// Text secrets are written one per line, binary secrets are
/// written as they are. When a breach checker is given and
/// the config enables it, every random password is checked;
/// leaks and failed checks are reported without stopping.
pub async fn write_passwords<W: Write>(
    config: &Config,
    checker: Option<&dyn BreachCheck>,
    out: &mut W,
) -> Result<Summary> {
    let generator = Generator::new(config);
    let mut summary = Summary::default();
    for index in 0..generator.count() {
        let generated = generator.generate()?;
        match &generated.secret {
            Secret::Binary(bytes) => {
                out.write_all(bytes.expose_secret())?;
            }
            Secret::Text(password) => {
                let password = password.expose_secret();
                if config.algorithm == Algorithm::Binary {
                    write!(out, "{}", password)?;
                } else if let Some(note) = annotation(config, &generated)? {
                    writeln!(out, "{} ({})", password, note)?;
                } else {
                    writeln!(out, "{}", password)?;
                }

                if let (true, Algorithm::Random, Some(checker)) =
                    (config.check_hibp, config.algorithm, checker)
                {
                    out.flush()?;
                    match checker.is_leaked(password).await {
                        Ok(true) => {
                            warn(
                                "^-- the password above was found in a \
                                 leaked password database, do not use it",
                            );
                            summary.leaked.push(index);
                        }
                        Ok(false) => {}
                        Err(e) => {
                            tracing::warn!(
                                target: TARGET,
                                error = %e,
                                "hashcheck");
                            fail(format!(
                                "unable to check the leaked password \
                                 database: {}",
                                e
                            ));
                            summary.check_failures += 1;
                        }
                    }
                }
            }
        }
        summary.written += 1;
    }
    out.flush()?;
    Ok(summary)
}
