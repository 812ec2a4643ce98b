//! Helpers shared by the unit tests.
use async_trait::async_trait;
use passgen_hashcheck::{BreachCheck, Error, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Breach checker that reports every password as leaked.
#[derive(Default)]
pub struct AlwaysLeaked {
    calls: AtomicUsize,
}

impl AlwaysLeaked {
    /// Number of passwords checked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BreachCheck for AlwaysLeaked {
    async fn is_leaked(&self, _password: &str) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

/// Breach checker whose every request fails.
pub struct Unreachable;

#[async_trait]
impl BreachCheck for Unreachable {
    async fn is_leaked(&self, _password: &str) -> Result<bool> {
        Err(Error::MalformedResponse("unreachable".to_owned()))
    }
}

/// Breach checker backed by a canned range response.
pub struct CannedRange(pub String);

#[async_trait]
impl BreachCheck for CannedRange {
    async fn is_leaked(&self, password: &str) -> Result<bool> {
        let hash = passgen_hashcheck::password_hash(password);
        let (_, suffix) = passgen_hashcheck::split_hash(&hash);
        passgen_hashcheck::is_listed(&self.0, suffix)
    }
}
