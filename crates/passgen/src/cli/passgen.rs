use clap::Parser;
use passgen_cli_helpers::messages::warn;
use passgen_hashcheck::{BreachCheck, HashCheck};
use passgen_password::{Algorithm, Config, ModeMask};
use std::path::PathBuf;

use crate::{output, settings::Settings, Result, TARGET};

/// Generate random, pronounceable and binary passwords.
///
/// Mode strings enable character classes with upper-case
/// letters and disable them with lower-case letters:
/// L (lower case), U (upper case), N (numeric), S (special),
/// H (human readable) and C (complex).
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Passgen {
    /// Algorithm: 0 pronounceable, 1 random, 2 coin flip, 3 binary.
    #[clap(short, long = "algorithm", value_name = "ALGO")]
    algorithm: Option<i64>,

    /// Minimum password length.
    #[clap(short = 'm', long)]
    min_length: Option<i64>,

    /// Maximum password length.
    #[clap(short = 'x', long)]
    max_length: Option<i64>,

    /// Fixed password length, overrides minimum and maximum.
    #[clap(short = 'f', long)]
    fixed_length: Option<i64>,

    /// Number of passwords to generate.
    #[clap(short = 'n', long)]
    number: Option<i64>,

    /// Characters to exclude from passwords.
    #[clap(short = 'E', long, value_name = "CHARS")]
    exclude: Option<String>,

    /// Mode string for the character classes.
    #[clap(short = 'M', long, value_name = "MODE")]
    mode: Option<String>,

    /// Toggle lower-case letters.
    #[clap(short = 'L', long)]
    lower_case: bool,

    /// Toggle upper-case letters.
    #[clap(short = 'U', long)]
    upper_case: bool,

    /// Toggle numeric digits.
    #[clap(short = 'N', long)]
    numeric: bool,

    /// Toggle special characters.
    #[clap(short = 'S', long)]
    special: bool,

    /// Toggle human readable characters.
    #[clap(short = 'H', long)]
    human_readable: bool,

    /// Use all four character classes.
    #[clap(short = 'C', long)]
    complex: bool,

    /// Minimum number of lower-case characters.
    #[clap(long, value_name = "AMOUNT")]
    min_lower: Option<i64>,

    /// Minimum number of upper-case characters.
    #[clap(long, value_name = "AMOUNT")]
    min_upper: Option<i64>,

    /// Minimum number of numeric characters.
    #[clap(long, value_name = "AMOUNT")]
    min_numeric: Option<i64>,

    /// Minimum number of special characters.
    #[clap(long, value_name = "AMOUNT")]
    min_special: Option<i64>,

    /// Group characters by class for mobile keyboards.
    #[clap(short = 't', long)]
    mobile: bool,

    /// Spell passwords using the phonetic alphabet.
    #[clap(short = 'l', long)]
    spell: bool,

    /// Spell pronounceable passwords as syllables.
    #[clap(long)]
    spell_syllables: bool,

    /// Check passwords against the leaked password database.
    #[clap(short = 'p', long)]
    hibp: bool,

    /// Print binary secrets as hex.
    #[clap(long)]
    hex: bool,

    /// Print a newline after binary secrets.
    #[clap(long)]
    newline: bool,

    /// Settings file.
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Passgen {
    /// Build the generator config from these arguments
    /// layered over optional settings.
    pub fn to_config(&self, settings: Option<&Settings>) -> Config {
        let mut config = Config::default().algorithm(Algorithm::Random);
        if let Some(settings) = settings {
            config = settings.apply(config);
        }

        if let Some(algorithm) = self.algorithm {
            config.algorithm = Algorithm::from(algorithm);
        }
        if let Some(length) = self.min_length {
            config.min_length = length;
        }
        if let Some(length) = self.max_length {
            config.max_length = length;
        }
        if let Some(length) = self.fixed_length {
            config.fixed_length = length;
        }
        if let Some(number) = self.number {
            config.number_pass = number;
        }
        if let Some(exclude) = &self.exclude {
            config.exclude_chars = exclude.clone();
        }
        if let Some(amount) = self.min_lower {
            config.min_lower_case = amount;
        }
        if let Some(amount) = self.min_upper {
            config.min_upper_case = amount;
        }
        if let Some(amount) = self.min_numeric {
            config.min_numeric = amount;
        }
        if let Some(amount) = self.min_special {
            config.min_special = amount;
        }

        let toggles = [
            (self.lower_case, ModeMask::LOWER_CASE),
            (self.upper_case, ModeMask::UPPER_CASE),
            (self.numeric, ModeMask::NUMERIC),
            (self.special, ModeMask::SPECIAL),
            (self.human_readable, ModeMask::HUMAN_READABLE),
        ];
        for (enabled, mode) in toggles {
            if enabled {
                config.mode = config.mode.toggle_mode(mode);
            }
        }
        if self.complex {
            config.mode = config
                .mode
                .set_mode(ModeMask::COMPLEX)
                .clear_mode(ModeMask::HUMAN_READABLE);
        }
        if let Some(mode) = &self.mode {
            config.mode = ModeMask::from_mode_string(mode);
        }

        config.mobile_grouping |= self.mobile;
        config.spell_password |= self.spell;
        config.spell_pronounceable |= self.spell_syllables;
        config.check_hibp |= self.hibp;
        config.binary_hex_mode |= self.hex;
        config.binary_newline |= self.newline;
        config
    }
}

pub async fn run() -> Result<()> {
    let args = Passgen::parse();

    let settings = match &args.config {
        Some(path) => Some(Settings::load(path).await?),
        None => None,
    };
    let config = args.to_config(settings.as_ref());
    tracing::debug!(
        target: TARGET,
        algorithm = %config.algorithm,
        mode = ?config.mode.describe(),
        "config");

    if config.has_excessive_minimums() {
        warn(
            "a minimum character requirement exceeds half of the \
             minimum length, generation may be slow or fail",
        );
    }

    let checker = if config.check_hibp {
        let hashcheck = settings.map(|s| s.hashcheck).unwrap_or_default();
        Some(HashCheck::new(hashcheck.endpoint.clone(), hashcheck.timeout())?)
    } else {
        None
    };

    let mut stdout = std::io::stdout().lock();
    let summary = output::write_passwords(
        &config,
        checker.as_ref().map(|c| c as &dyn BreachCheck),
        &mut stdout,
    )
    .await?;
    tracing::debug!(
        target: TARGET,
        written = summary.written,
        leaked = summary.leaked.len(),
        check_failures = summary.check_failures,
        "done");
    Ok(())
}
