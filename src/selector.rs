use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tiny_keccak::{Hasher, Keccak};

use crate::error::FindError;

static PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:0[xX])?([0-9a-fA-F]{0,8})$").expect("static selector pattern"));

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

/// First 4 bytes of `keccak256(signature)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector([u8; 4]);

impl Selector {
    pub fn from_signature(signature: &str) -> Selector {
        let hash = keccak256(signature.as_bytes());
        Selector([hash[0], hash[1], hash[2], hash[3]])
    }

    /// 8 lower-case hex characters, no `0x`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn starts_with(&self, prefix: &SelectorPrefix) -> bool {
        self.to_hex().starts_with(prefix.as_str())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A user-supplied selector, normalized for prefix comparison.
///
/// Accepts 0 to 8 hex digits in any case, with an optional leading `0x`.
/// The prefix is stored lower-cased and without the `0x`, so `0x1234ABCD`,
/// `1234abcd` and `1234` all compare against the rendered selector directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorPrefix(String);

impl SelectorPrefix {
    pub fn parse(input: &str) -> Result<SelectorPrefix, FindError> {
        let caps = PREFIX_RE.captures(input.trim()).ok_or_else(|| FindError::InvalidSelector {
            input: input.to_string(),
        })?;
        Ok(SelectorPrefix(caps[1].to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SelectorPrefix {
    type Err = FindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SelectorPrefix::parse(s)
    }
}

impl fmt::Display for SelectorPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
