//! Coloured messages written to standard error.
//!
//! Generated passwords go to standard output so that they can
//! be piped; everything else printed by the executable uses
//! these helpers.
use colored::Colorize;

const WARNING: &str = "Warning:";
const ERROR: &str = "Error:";

/// Print a warning message.
pub fn warn(msg: impl AsRef<str>) {
    let out = format!("{} {}", WARNING.yellow(), msg.as_ref());
    eprintln!("{}", out);
}

/// Print an error message for failure.
pub fn fail(msg: impl AsRef<str>) {
    let out = format!("{} {}", ERROR.red(), msg.as_ref());
    eprintln!("{}", out);
}
