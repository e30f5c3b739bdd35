//! Owner access secret.
//!
//! The storefront gates its management view behind one shared code. This is a
//! capability flag for a UI view, not a security boundary: there is no per-user
//! identity, no hashing, and no confidentiality claim.

use std::fmt;

use zeroize::Zeroizing;

/// Code unlocking the owner view when no override is configured.
pub const DEFAULT_OWNER_SECRET: &str = "Bismillah";

/// Domain error returned when a configured secret is unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerSecretError {
    /// The secret was empty.
    Empty,
}

impl fmt::Display for OwnerSecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "owner secret must not be empty"),
        }
    }
}

impl std::error::Error for OwnerSecretError {}

/// Shared code compared verbatim against login attempts.
///
/// ## Invariants
/// - The secret is non-empty.
/// - Whitespace is significant; nothing is trimmed.
///
/// # Examples
/// ```
/// use storefront::OwnerSecret;
///
/// let secret = OwnerSecret::new("open sesame").unwrap();
/// assert!(secret.matches("open sesame"));
/// assert!(!secret.matches("open sesame "));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OwnerSecret(Zeroizing<String>);

impl OwnerSecret {
    /// Construct a secret from caller input.
    pub fn new(secret: &str) -> Result<Self, OwnerSecretError> {
        if secret.is_empty() {
            return Err(OwnerSecretError::Empty);
        }
        Ok(Self(Zeroizing::new(secret.to_owned())))
    }

    /// Whether `code` is exactly the shared secret.
    #[must_use]
    pub fn matches(&self, code: &str) -> bool {
        self.0.as_str() == code
    }
}

impl Default for OwnerSecret {
    fn default() -> Self {
        Self(Zeroizing::new(DEFAULT_OWNER_SECRET.to_owned()))
    }
}

impl fmt::Debug for OwnerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OwnerSecret(<redacted>)")
    }
}
