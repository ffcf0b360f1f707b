//! Content Hash Value Object
//!
//! SHA-256 fingerprint of a canonical document, rendered as lowercase hex.
//! Used for the identity header and for drift detection; never for ordering.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Holds the 64-character lowercase hex digest without any prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix used when the hash is embedded in output
    pub const PREFIX: &'static str = "sha256:";

    /// Compute SHA-256 of the exact bytes of `content`
    pub fn from_content(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(bytes)))
    }

    /// Lowercase hex digest
    pub fn hex(&self) -> &str {
        &self.0
    }

    /// Digest with the `sha256:` prefix
    pub fn prefixed(&self) -> String {
        format!("{}{}", Self::PREFIX, self.0)
    }

    /// One-line identity comment placed above a document
    pub fn header_line(&self) -> String {
        format!("<!-- prompt-id: {} -->", self.prefixed())
    }

    /// `document` with the identity header and a blank line prepended
    pub fn with_header(&self, document: &str) -> String {
        format!("{}\n\n{}", self.header_line(), document)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
