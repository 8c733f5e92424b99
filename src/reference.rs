//! Reference-hash validation and comparison.

use anyhow::{anyhow, Result};

use crate::algo::Algorithm;

/// A validated reference hash with its inferred algorithm.
///
/// The stored hex is normalized to lowercase at parse time so comparison
/// against a canonically-lowercase computed digest is plain equality.
pub(crate) struct ReferenceHash {
    algorithm: Algorithm,
    hex: String,
}

impl ReferenceHash {
    /// Validate a caller-supplied reference hash.
    ///
    /// Accepts non-empty, all-hexadecimal strings whose length matches one
    /// of the supported digest sizes. Upper and lower case are both valid.
    pub(crate) fn parse(value: &str) -> Result<ReferenceHash> {
        if value.is_empty() {
            return Err(anyhow!("hash is empty"));
        }
        let algorithm = Algorithm::from_hex_len(value.len()).ok_or_else(|| {
            anyhow!("hash length {} does not match a supported digest", value.len())
        })?;
        if !value.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow!("hash contains non-hexadecimal characters"));
        }
        Ok(ReferenceHash {
            algorithm,
            hex: value.to_ascii_lowercase(),
        })
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Normalized (lowercase) hex digest.
    pub(crate) fn hex(&self) -> &str {
        &self.hex
    }

    /// Compare against a lowercase computed digest.
    pub(crate) fn matches(&self, computed: &str) -> bool {
        self.hex == computed
    }
}
