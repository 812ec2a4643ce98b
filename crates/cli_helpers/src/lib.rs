//! Helper functions for the passgen command line executable.

pub mod messages;
