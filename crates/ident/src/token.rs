//! Internal implementation of the canonical identity token.

use crate::{IdentError, IdentResult};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Maximum length of a canonical identity token.
///
/// Matches the length limit of the target wire format's resource ids, so a derived
/// identity can always be embedded into a reference string unchanged.
const MAX_LEN: usize = 64;

/// A canonical resource identity token (lowercase `[a-z0-9-]`, at most 64 characters).
///
/// Once constructed, the contained token is guaranteed to be in canonical form, which makes
/// it safe to embed in reference strings without further escaping.
///
/// # Construction
/// - [`ResourceId::derive`] is the one derivation function used by all mappers: it prefers
///   a natural key from the upstream record and falls back to a random token.
/// - [`ResourceId::random`] generates a fresh random token (32 lowercase hex characters).
/// - [`ResourceId::parse`] validates an externally supplied identity.
///
/// # Errors
/// [`ResourceId::parse`] returns [`IdentError::InvalidInput`] if the input is not already
/// canonical.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// Derives an identity from an optional upstream natural key.
    ///
    /// When `natural_key` is present and normalises to a non-empty token, the result is
    /// deterministic: the same upstream key always yields the same identity, so repeated
    /// aggregation runs over the same upstream data produce stable references.
    ///
    /// When `natural_key` is absent, or consists entirely of characters that cannot appear
    /// in a canonical token, a random identity is generated instead.
    pub fn derive(natural_key: Option<&str>) -> Self {
        natural_key
            .and_then(Self::from_natural_key)
            .unwrap_or_else(Self::random)
    }

    /// Generates a new random identity (32 lowercase hex characters).
    pub fn random() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Normalises an upstream natural key into a canonical token.
    ///
    /// Uppercase letters are lowercased, runs of any other disallowed characters collapse
    /// to a single `-`, and the result is truncated to the maximum token length. Returns
    /// `None` when nothing of the key survives normalisation.
    pub fn from_natural_key(key: &str) -> Option<Self> {
        let mut token = String::with_capacity(key.len().min(MAX_LEN));
        let mut pending_dash = false;

        for c in key.chars() {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                if pending_dash && !token.is_empty() {
                    token.push('-');
                }
                pending_dash = false;
                token.push(c);
            } else {
                pending_dash = true;
            }
            if token.len() >= MAX_LEN {
                break;
            }
        }

        token.truncate(MAX_LEN);
        while token.ends_with('-') {
            token.pop();
        }

        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// Validates and wraps an identity string that must already be in canonical form.
    ///
    /// This does **not** normalise: uppercase, overlong, or otherwise non-canonical input
    /// is rejected. Use [`ResourceId::derive`] to normalise upstream keys.
    ///
    /// # Errors
    ///
    /// Returns [`IdentError::InvalidInput`] if `input` is not in canonical form.
    pub fn parse(input: &str) -> IdentResult<Self> {
        if Self::is_canonical(input) {
            return Ok(Self(input.to_owned()));
        }
        Err(IdentError::InvalidInput(format!(
            "identity must be 1-64 characters of [a-z0-9-], not edged by '-', got: '{}'",
            input
        )))
    }

    /// Returns true if `input` is in canonical token form.
    ///
    /// Purely syntactic check:
    /// - 1 to 64 bytes long
    /// - only `a-z`, `0-9` and `-`
    /// - does not start or end with `-`
    pub fn is_canonical(input: &str) -> bool {
        !input.is_empty()
            && input.len() <= MAX_LEN
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'-'))
            && !input.starts_with('-')
            && !input.ends_with('-')
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ResourceId {
    type Err = IdentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceId::parse(s)
    }
}

impl serde::Serialize for ResourceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ResourceId::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_generates_canonical_token() {
        let id = ResourceId::random();
        assert_eq!(id.as_str().len(), 32);
        assert!(ResourceId::is_canonical(id.as_str()));
    }

    #[test]
    fn derive_prefers_natural_key() {
        let id = ResourceId::derive(Some("ORD-2024-001"));
        assert_eq!(id.as_str(), "ord-2024-001");
    }

    #[test]
    fn derive_is_deterministic_for_same_key() {
        let a = ResourceId::derive(Some("REQ 42/B"));
        let b = ResourceId::derive(Some("REQ 42/B"));
        assert_eq!(a, b);
    }

    #[test]
    fn derive_falls_back_to_random_without_key() {
        let a = ResourceId::derive(None);
        let b = ResourceId::derive(None);
        assert!(ResourceId::is_canonical(a.as_str()));
        assert_ne!(a, b);
    }

    #[test]
    fn derive_falls_back_when_key_normalises_to_nothing() {
        let id = ResourceId::derive(Some("///"));
        assert_eq!(id.as_str().len(), 32);
        assert!(ResourceId::is_canonical(id.as_str()));
    }

    #[test]
    fn natural_key_collapses_disallowed_runs() {
        let id = ResourceId::from_natural_key("AB__12  //34").expect("non-empty key");
        assert_eq!(id.as_str(), "ab-12-34");
    }

    #[test]
    fn natural_key_strips_edge_dashes() {
        let id = ResourceId::from_natural_key("--order-7--").expect("non-empty key");
        assert_eq!(id.as_str(), "order-7");
    }

    #[test]
    fn natural_key_truncates_to_bounded_length() {
        let long = "x".repeat(200);
        let id = ResourceId::from_natural_key(&long).expect("non-empty key");
        assert_eq!(id.as_str().len(), 64);
        assert!(ResourceId::is_canonical(id.as_str()));
    }

    #[test]
    fn parse_accepts_canonical_token() {
        let id = ResourceId::parse("lab-5512-a").expect("canonical token");
        assert_eq!(id.as_str(), "lab-5512-a");
    }

    #[test]
    fn parse_rejects_uppercase() {
        assert!(ResourceId::parse("ORD-1").is_err());
    }

    #[test]
    fn parse_rejects_edge_dash() {
        assert!(ResourceId::parse("-ord-1").is_err());
        assert!(ResourceId::parse("ord-1-").is_err());
    }

    #[test]
    fn parse_rejects_empty_and_overlong() {
        assert!(ResourceId::parse("").is_err());
        assert!(ResourceId::parse(&"a".repeat(65)).is_err());
    }

    #[test]
    fn serialises_as_plain_string() {
        let id = ResourceId::parse("ord-1").expect("canonical token");
        let json = serde_json::to_string(&id).expect("serialise id");
        assert_eq!(json, "\"ord-1\"");

        let back: ResourceId = serde_json::from_str(&json).expect("deserialise id");
        assert_eq!(back, id);
    }

    #[test]
    fn deserialise_rejects_non_canonical() {
        let result: Result<ResourceId, _> = serde_json::from_str("\"Not Canonical\"");
        assert!(result.is_err());
    }
}
