//! Secure random sources.
//!
//! Generation only ever asks a source for 16 bytes. Which source backs
//! [`SystemEntropy`] is decided at build time by cargo features; a build with
//! no backend enabled does not compile.

use crate::error::EntropyError;

#[cfg(feature = "getrandom")]
mod os;
#[cfg(any(test, feature = "testing"))]
#[cfg_attr(docsrs, doc(cfg(feature = "testing")))]
pub mod testing;

#[cfg(feature = "getrandom")]
pub use os::OsEntropy;

/// Number of random bytes a source supplies per identifier.
pub const ENTROPY_LEN: usize = 16;

/// A cryptographically secure source of random bytes.
///
/// Implementations must either fill all of `dest` and return `Ok`, or leave
/// `dest` untouched and return [`EntropyError`]. They must be safe to call
/// from several threads at once and must never substitute a
/// non-cryptographic generator when the secure facility fails.
pub trait EntropySource {
    /// Fill `dest` with random bytes.
    fn fill_bytes(&self, dest: &mut [u8; ENTROPY_LEN]) -> Result<(), EntropyError>;
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn fill_bytes(&self, dest: &mut [u8; ENTROPY_LEN]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

/// The secure random source this build was configured with.
#[cfg(feature = "getrandom")]
pub type SystemEntropy = OsEntropy;

#[cfg(not(feature = "getrandom"))]
compile_error!(
    "uuid4 needs a secure random backend: enable the `getrandom` feature \
     (on by default)"
);
