/// Token store trait and Redis backend
///
/// The store is deliberately small: `issue` writes a payload under a
/// namespaced key with a TTL, `redeem` reads it back without consuming it,
/// and `delete` removes it, reporting whether a record was actually there.
///
/// # Consumption protocol
///
/// `redeem` is non-destructive because the caller must compare the payload
/// before consuming (a wrong OTP guess must not invalidate the real code).
/// `delete` returns `true` only for the caller that observed the record as
/// present, so two concurrent requests racing on a single-use invitation
/// get at most one winner. On Redis this falls out of `DEL`'s deleted-count
/// reply; the in-memory backend gets the same guarantee from its map lock.
///
/// # Failure semantics
///
/// Storage unavailability is propagated verbatim; no operation retries
/// internally. Retry policy belongs to the calling layer.

use crate::storage::redis::{RedisClient, RedisClientError};
use crate::tokens::key::{TokenKey, TokenKind};
use async_trait::async_trait;
use redis::AsyncCommands;
use thiserror::Error;

/// Token store errors
#[derive(Error, Debug)]
pub enum TokenStoreError {
    /// Storage client error
    #[error("Storage error: {0}")]
    Storage(#[from] RedisClientError),

    /// Raw Redis command error
    #[error("Storage command error: {0}")]
    Command(#[from] redis::RedisError),
}

/// Ephemeral single-use token storage
///
/// Implemented by `RedisTokenStore` (production) and `MemoryTokenStore`
/// (tests and local development). Absent and expired records are
/// indistinguishable by design: both read back as `None`.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Issues a token: stores `payload` under `{kind}:{subject}` with the
    /// given TTL, overwriting any prior record for that key and resetting
    /// its expiry.
    ///
    /// Returns the key under which the token was stored.
    async fn issue(
        &self,
        kind: TokenKind,
        subject: &str,
        payload: &str,
        ttl_seconds: u64,
    ) -> Result<TokenKey, TokenStoreError>;

    /// Reads a token's payload without consuming it
    ///
    /// Returns `None` if the key is absent or its TTL has elapsed.
    async fn redeem(&self, key: &TokenKey) -> Result<Option<String>, TokenStoreError>;

    /// Removes a token record unconditionally
    ///
    /// Returns `true` if a record was present and is now gone, `false` if
    /// there was nothing to remove. Never errors on a missing key.
    async fn delete(&self, key: &TokenKey) -> Result<bool, TokenStoreError>;
}

/// Redis-backed token store
///
/// Expiry is delegated to Redis's native per-key TTL (`SET ... EX`), so no
/// background sweep is needed and `redeem` never has to check timestamps.
#[derive(Clone)]
pub struct RedisTokenStore {
    client: RedisClient,
}

impl RedisTokenStore {
    /// Creates a token store over an existing Redis client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use crewtask_core::storage::{RedisClient, RedisConfig};
    /// use crewtask_core::tokens::RedisTokenStore;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = RedisClient::new(RedisConfig::from_env()?).await?;
    /// let store = RedisTokenStore::new(client);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn issue(
        &self,
        kind: TokenKind,
        subject: &str,
        payload: &str,
        ttl_seconds: u64,
    ) -> Result<TokenKey, TokenStoreError> {
        let key = TokenKey::new(kind, subject);
        let mut conn = self.client.get_connection();

        // SET key value EX ttl (overwrites and resets TTL on re-issue)
        let _: () = conn
            .set_ex(key.as_str(), payload, ttl_seconds)
            .await?;

        tracing::trace!(key = %key, ttl = ttl_seconds, "Issued token");

        Ok(key)
    }

    async fn redeem(&self, key: &TokenKey) -> Result<Option<String>, TokenStoreError> {
        let mut conn = self.client.get_connection();

        let payload: Option<String> = conn.get(key.as_str()).await?;

        tracing::trace!(key = %key, found = payload.is_some(), "Redeemed token");

        Ok(payload)
    }

    async fn delete(&self, key: &TokenKey) -> Result<bool, TokenStoreError> {
        let mut conn = self.client.get_connection();

        // DEL replies with the number of keys removed; under concurrent
        // deletes exactly one caller sees 1.
        let removed: i64 = conn.del(key.as_str()).await?;

        tracing::trace!(key = %key, removed = removed > 0, "Deleted token");

        Ok(removed > 0)
    }
}
