//! Deterministic sources for tests. Never used by [`super::SystemEntropy`].

use super::{EntropySource, ENTROPY_LEN};
use crate::error::EntropyError;

/// Supplies the same bytes on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedEntropy(pub [u8; ENTROPY_LEN]);

impl EntropySource for FixedEntropy {
    fn fill_bytes(&self, dest: &mut [u8; ENTROPY_LEN]) -> Result<(), EntropyError> {
        *dest = self.0;
        Ok(())
    }
}

/// Always fails, as a platform source does when it cannot supply bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingEntropy;

impl FailingEntropy {
    pub const BACKEND: &'static str = "failing";
    pub const CODE: u32 = 1;
}

impl EntropySource for FailingEntropy {
    fn fill_bytes(&self, _dest: &mut [u8; ENTROPY_LEN]) -> Result<(), EntropyError> {
        Err(EntropyError::source_failed(Self::BACKEND, Self::CODE))
    }
}
