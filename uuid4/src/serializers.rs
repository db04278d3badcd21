//! Serde serialization of [`Uuid`].
//!
//! Human-readable formats get the canonical string, binary formats the 16 raw
//! bytes. There is no `Deserialize`: identifiers only come from generation.

use serde::{Serialize, Serializer};

use crate::uuid::{canonical_str, Uuid};

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for Uuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(canonical_str(&self.encode_canonical()))
        } else {
            serializer.serialize_bytes(&self.to_bytes())
        }
    }
}
