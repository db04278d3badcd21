//! The identifier value, its generation and its canonical rendering.

use core::fmt;

use tracing::{trace, warn};

use crate::{
    entropy::{EntropySource, SystemEntropy, ENTROPY_LEN},
    error::EntropyError,
    prelude::*,
};

const HEX: [u8; 16] = *b"0123456789abcdef";

/// Length of the canonical string form.
pub const CANONICAL_LEN: usize = 36;

/// Byte offsets after which the canonical form carries a hyphen.
const GROUP_ENDS: [usize; 4] = [3, 5, 7, 9];

/// Generate a new random identifier from the system's secure random source.
///
/// Fails only if the source does; see [`EntropyError`].
pub fn generate_v4() -> Result<Uuid, EntropyError> {
    Uuid::new_v4()
}

/// A version 4, RFC 4122 variant universally unique identifier.
///
/// The 16 bytes are in network order, the same order they appear in the
/// canonical string. Byte 6 always has `0100` as its high nibble and byte 8
/// always has `01` as its two high bits; every other bit came from a secure
/// random source. Values can only be obtained through generation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid([u8; ENTROPY_LEN]);

impl Uuid {
    /// The version number carried in the high nibble of byte 6.
    pub const VERSION: u8 = 4;

    /// Variant bit set in byte 8; the bit above it is always cleared.
    pub const VARIANT_RFC4122: u8 = 0x40;

    /// Generate a new identifier from [`SystemEntropy`].
    pub fn new_v4() -> Result<Self, EntropyError> {
        Self::generate_from(SystemEntropy::default())
    }

    /// Generate a new identifier from the given source.
    ///
    /// The version and variant bits are forced regardless of what the source
    /// supplies. Only available to tests, so production identifiers always
    /// come from [`SystemEntropy`].
    #[cfg(any(test, feature = "testing"))]
    #[cfg_attr(docsrs, doc(cfg(feature = "testing")))]
    pub fn new_v4_from<S: EntropySource>(source: S) -> Result<Self, EntropyError> {
        Self::generate_from(source)
    }

    fn generate_from<S: EntropySource>(source: S) -> Result<Self, EntropyError> {
        let mut bytes = [0u8; ENTROPY_LEN];
        if let Err(e) = source.fill_bytes(&mut bytes) {
            warn!("could not generate uuid: {}", e);
            return Err(e);
        }

        bytes[6] = (bytes[6] & 0x0F) | (Self::VERSION << 4);
        bytes[8] = (bytes[8] & 0x7F) | Self::VARIANT_RFC4122;

        let uuid = Self(bytes);
        trace!("generated uuid {}", uuid);
        Ok(uuid)
    }

    /// The version number, always 4.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// A copy of the 16 bytes, in the order they are rendered.
    pub const fn to_bytes(&self) -> [u8; ENTROPY_LEN] {
        self.0
    }

    /// Render as `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, lowercase.
    pub fn to_canonical_string(&self) -> String {
        String::from(canonical_str(&self.encode_canonical()))
    }

    /// Render the canonical form into a fixed buffer of ASCII bytes.
    pub fn encode_canonical(&self) -> [u8; CANONICAL_LEN] {
        let mut out = [0u8; CANONICAL_LEN];
        let mut pos = 0;
        for (i, &b) in self.0.iter().enumerate() {
            out[pos] = HEX[(b >> 4) as usize];
            out[pos + 1] = HEX[(b & 0x0F) as usize];
            pos += 2;
            if GROUP_ENDS.contains(&i) {
                out[pos] = b'-';
                pos += 1;
            }
        }
        debug_assert_eq!(pos, CANONICAL_LEN);
        out
    }
}

/// View an encoded buffer as text. The buffer only ever holds hex digits and
/// hyphens.
pub(crate) fn canonical_str(buf: &[u8; CANONICAL_LEN]) -> &str {
    match core::str::from_utf8(buf) {
        Ok(s) => s,
        Err(_) => unreachable!("canonical uuid encoding produced non-ASCII output"),
    }
}

impl From<Uuid> for [u8; ENTROPY_LEN] {
    fn from(uuid: Uuid) -> Self {
        uuid.0
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(canonical_str(&self.encode_canonical()))
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self)
    }
}
