use super::{EntropySource, ENTROPY_LEN};
use crate::error::EntropyError;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
const BACKEND: &str = "crypto.getRandomValues";

#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
const BACKEND: &str = "getrandom";

/// Random bytes from the operating system, via the [`getrandom`] crate.
///
/// On `wasm32-unknown-unknown` this is the Web Crypto API. Targets getrandom
/// has no implementation for fail to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl OsEntropy {
    /// Name of the platform facility in use, as reported in errors.
    pub const fn backend(&self) -> &'static str {
        BACKEND
    }
}

impl EntropySource for OsEntropy {
    fn fill_bytes(&self, dest: &mut [u8; ENTROPY_LEN]) -> Result<(), EntropyError> {
        let mut scratch = [0u8; ENTROPY_LEN];
        getrandom::getrandom(&mut scratch)
            .map_err(|e| EntropyError::source_failed(BACKEND, e.code().get()))?;
        *dest = scratch;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_the_whole_buffer() {
        // The odds of 16 zero bytes from a working source are 2^-128.
        let mut buf = [0u8; ENTROPY_LEN];
        OsEntropy.fill_bytes(&mut buf).unwrap();
        assert_ne!(buf, [0u8; ENTROPY_LEN]);
    }

    #[test]
    fn successive_fills_differ() {
        let (mut a, mut b) = ([0u8; ENTROPY_LEN], [0u8; ENTROPY_LEN]);
        OsEntropy.fill_bytes(&mut a).unwrap();
        OsEntropy.fill_bytes(&mut b).unwrap();
        assert_ne!(a, b);
    }
}
