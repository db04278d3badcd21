//! Error types
//!
//! Failing to obtain bytes from a secure random source is the only way
//! generating an identifier can fail. It is never retried internally and
//! never answered with a weaker source: retry policy belongs to the caller.

use flex_error::define_error;

define_error! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    EntropyError {
        SourceFailed
            { backend: &'static str, code: u32 }
            | e | {
                format_args!("secure random source `{}` failed (code {})",
                    e.backend, e.code)
            },
    }
}

impl EntropyError {
    /// Name of the backend that reported the failure.
    pub fn backend(&self) -> &'static str {
        match self.detail() {
            EntropyErrorDetail::SourceFailed(e) => e.backend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn source_failed_reports_backend_and_code() {
        let err = EntropyError::source_failed("os", 12);

        assert_eq!(err.backend(), "os");
        match err.detail() {
            EntropyErrorDetail::SourceFailed(e) => assert_eq!(e.code, 12),
        }
        assert!(err.to_string().contains("secure random source `os` failed"));
    }
}
