//! Password generation core for the passgen password generator.
//!
//! Passwords are produced by a [Generator] borrowing a [Config].
//! Four algorithms are supported: random characters drawn from
//! a configurable character pool, pronounceable passwords assembled
//! from syllables, a coin flip and raw binary secrets.
//!
//! ```no_run
//! use passgen_password::{Algorithm, Config, Generator, ModeMask};
//! use secrecy::ExposeSecret;
//!
//! let config = Config::default()
//!     .algorithm(Algorithm::Random)
//!     .mode(ModeMask::COMPLEX)
//!     .fixed_length(16);
//! let generated = Generator::new(&config).generate()?;
//! println!("{}", generated.secret.as_text().unwrap().expose_secret());
//! # Ok::<(), passgen_password::Error>(())
//! ```
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

mod algorithm;
pub mod charset;
mod config;
mod error;
mod generator;
mod grouping;
pub mod length;
mod mode;
pub mod random;
pub mod spelling;
mod syllables;

pub use algorithm::Algorithm;
pub use config::*;
pub use error::Error;
pub use generator::{Generated, Generator, Secret};
pub use grouping::group_for_mobile;
pub use mode::ModeMask;
pub use syllables::SYLLABLES;

pub use secrecy;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
