/// Ephemeral token store
///
/// Short-lived, single-use tokens back three flows in CrewTask: email
/// verification OTPs, password-reset OTPs, and team invitations. Each token
/// is a key/payload pair with a TTL; a record is destroyed explicitly on
/// successful redemption or lazily on expiry.
///
/// # Lifecycle
///
/// ```text
/// Absent ──issue──> Active ──delete / expiry──> Absent
///                     │
///                     └──re-issue (payload replaced, TTL reset)──> Active
/// ```
///
/// Redemption is non-destructive: callers read the payload, compare it (the
/// OTP digits for codes, the payload identity for invitations), and only
/// then call `delete`. A failed guess therefore never invalidates the token,
/// and `delete` reporting whether the record was present makes consumption
/// at-most-once under concurrent requests.
///
/// # Example
///
/// ```no_run
/// use crewtask_core::storage::{RedisClient, RedisConfig};
/// use crewtask_core::tokens::{generate_otp, RedisTokenStore, TokenKind, TokenStore};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = RedisClient::new(RedisConfig::from_env()?).await?;
/// let store = RedisTokenStore::new(client);
///
/// let otp = generate_otp();
/// let key = store.issue(TokenKind::Otp, "user@example.com", &otp, 300).await?;
///
/// // Later, when the user submits the code:
/// if store.redeem(&key).await?.as_deref() == Some(otp.as_str()) {
///     store.delete(&key).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub mod codes;
pub mod invitation;
pub mod key;
pub mod memory;
pub mod store;

// Re-export common types for convenience
pub use codes::{codes_match, generate_invite_id, generate_otp};
pub use invitation::{InvitePayload, TeamRole};
pub use key::{TokenKey, TokenKind};
pub use memory::MemoryTokenStore;
pub use store::{RedisTokenStore, TokenStore, TokenStoreError};
