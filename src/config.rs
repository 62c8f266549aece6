/// Configuration management for the core library
///
/// Token TTLs are fixed policy with environment overrides for staging and
/// tests. Redis connection configuration lives with the client in
/// `storage::redis`.
///
/// # Environment Variables
///
/// - `OTP_TTL_SECS`: OTP validity window (default: 300)
/// - `INVITE_TTL_SECS`: Invitation validity window (default: 86400)
///
/// # Example
///
/// ```
/// use crewtask_core::config::TokenConfig;
///
/// let config = TokenConfig::default();
/// assert_eq!(config.otp_ttl_secs, 300);
/// assert_eq!(config.invite_ttl_secs, 86_400);
/// ```

use serde::{Deserialize, Serialize};
use std::env;

/// Default OTP validity window: 5 minutes
pub const DEFAULT_OTP_TTL_SECS: u64 = 300;

/// Default invitation validity window: 24 hours
pub const DEFAULT_INVITE_TTL_SECS: u64 = 86_400;

/// TTL policy for ephemeral tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Validity window for OTP and password-reset codes, in seconds
    pub otp_ttl_secs: u64,

    /// Validity window for team invitations, in seconds
    pub invite_ttl_secs: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            otp_ttl_secs: DEFAULT_OTP_TTL_SECS,
            invite_ttl_secs: DEFAULT_INVITE_TTL_SECS,
        }
    }
}

impl TokenConfig {
    /// Loads configuration from environment variables, falling back to the
    /// defaults for anything unset
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable is not a positive integer.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let otp_ttl_secs = match env::var("OTP_TTL_SECS") {
            Ok(s) => s.parse::<u64>()?,
            Err(_) => DEFAULT_OTP_TTL_SECS,
        };

        let invite_ttl_secs = match env::var("INVITE_TTL_SECS") {
            Ok(s) => s.parse::<u64>()?,
            Err(_) => DEFAULT_INVITE_TTL_SECS,
        };

        if otp_ttl_secs == 0 || invite_ttl_secs == 0 {
            anyhow::bail!("Token TTLs must be positive");
        }

        Ok(Self {
            otp_ttl_secs,
            invite_ttl_secs,
        })
    }
}
