//! Random (version 4) UUIDs as described in [RFC 4122].
//!
//! Identifiers are produced by [`generate_v4`] (or [`Uuid::new_v4`]) from the
//! platform's cryptographically secure random source and rendered with
//! [`Uuid::to_canonical_string`] as 36 lowercase characters in 8-4-4-4-12
//! groups.
//!
//! The random source is chosen when the crate is built. The default
//! `getrandom` feature uses the operating system's entropy facility on native
//! targets and `crypto.getRandomValues` on `wasm32-unknown-unknown`. Building
//! without a backend is a compile error: there is no fallback to a weaker
//! generator.
//!
//! ```
//! let id = uuid4::generate_v4().expect("secure random source available");
//! let text = id.to_canonical_string();
//!
//! assert_eq!(text.len(), 36);
//! assert_eq!(&text[14..15], "4");
//! ```
//!
//! [RFC 4122]: https://www.rfc-editor.org/rfc/rfc4122

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod prelude;

pub mod entropy;
pub mod error;
mod uuid;

#[cfg(feature = "serde")]
mod serializers;

pub use crate::{
    entropy::{EntropySource, SystemEntropy},
    error::{EntropyError, EntropyErrorDetail},
    uuid::{generate_v4, Uuid, CANONICAL_LEN},
};
