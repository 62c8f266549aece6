/// Typed key construction for token records
///
/// Token records are namespaced by purpose so an OTP can never be redeemed
/// as an invitation and vice versa. Keys follow the pattern
/// `{namespace}:{subject}`:
///
/// - `otp:{email}` - email verification code
/// - `reset-otp:{email}` - password reset code
/// - `invite:{invite_id}` - team invitation payload
///
/// For invitations the subject is a freshly generated high-entropy
/// identifier (see `codes::generate_invite_id`), not the invitee's email,
/// so invitation keys cannot be guessed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Purpose of a token record, doubling as its key namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Email verification code during registration
    Otp,

    /// Password reset code
    ResetOtp,

    /// Team invitation
    Invite,
}

impl TokenKind {
    /// Key namespace prefix for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Otp => "otp",
            TokenKind::ResetOtp => "reset-otp",
            TokenKind::Invite => "invite",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage key for a token record
///
/// Unique per namespace + subject; re-issuing for the same key overwrites
/// the previous record and resets its TTL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenKey(String);

impl TokenKey {
    /// Builds a key from a namespace and subject
    ///
    /// # Example
    ///
    /// ```
    /// use crewtask_core::tokens::{TokenKey, TokenKind};
    ///
    /// let key = TokenKey::new(TokenKind::Otp, "x@y.com");
    /// assert_eq!(key.as_str(), "otp:x@y.com");
    /// ```
    pub fn new(kind: TokenKind, subject: &str) -> Self {
        TokenKey(format!("{}:{}", kind.as_str(), subject))
    }

    /// The encoded key string as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TokenKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
