/// In-memory token store
///
/// Test double and local-development backend for `TokenStore`. Records are
/// held in a map with an explicit `expires_at`; expiry is checked lazily on
/// every read, so an expired-but-still-present record reads back exactly
/// like a missing one, matching Redis TTL semantics.
///
/// Time can be advanced explicitly with `advance`, which lets tests cross
/// a TTL boundary without sleeping.
///
/// # Example
///
/// ```
/// use crewtask_core::tokens::{MemoryTokenStore, TokenKind, TokenStore};
///
/// # async fn example() -> Result<(), crewtask_core::tokens::TokenStoreError> {
/// let store = MemoryTokenStore::new();
/// let key = store.issue(TokenKind::Otp, "x@y.com", "123456", 300).await?;
///
/// assert_eq!(store.redeem(&key).await?.as_deref(), Some("123456"));
///
/// store.advance(chrono::Duration::seconds(301)).await;
/// assert_eq!(store.redeem(&key).await?, None);
/// # Ok(())
/// # }
/// ```

use crate::tokens::key::{TokenKey, TokenKind};
use crate::tokens::store::{TokenStore, TokenStoreError};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;

struct StoredToken {
    payload: String,
    expires_at: DateTime<Utc>,
}

/// HashMap-backed token store with lazy expiry
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, StoredToken>>,
    clock_offset: Mutex<Duration>,
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTokenStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock_offset: Mutex::new(Duration::zero()),
        }
    }

    /// Advances the store's clock, simulating elapsed time
    pub async fn advance(&self, by: Duration) {
        let mut offset = self.clock_offset.lock().await;
        *offset = *offset + by;
    }

    async fn now(&self) -> DateTime<Utc> {
        Utc::now() + *self.clock_offset.lock().await
    }

    /// Number of live (unexpired) records, for test assertions
    pub async fn live_count(&self) -> usize {
        let now = self.now().await;
        let entries = self.entries.lock().await;
        entries.values().filter(|t| t.expires_at > now).count()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn issue(
        &self,
        kind: TokenKind,
        subject: &str,
        payload: &str,
        ttl_seconds: u64,
    ) -> Result<TokenKey, TokenStoreError> {
        let key = TokenKey::new(kind, subject);
        let expires_at = self.now().await + Duration::seconds(ttl_seconds as i64);

        let mut entries = self.entries.lock().await;
        entries.insert(
            key.as_str().to_string(),
            StoredToken {
                payload: payload.to_string(),
                expires_at,
            },
        );

        Ok(key)
    }

    async fn redeem(&self, key: &TokenKey) -> Result<Option<String>, TokenStoreError> {
        let now = self.now().await;
        let entries = self.entries.lock().await;

        // Expired-but-present is treated as absent (lazy expiry)
        let payload = entries
            .get(key.as_str())
            .filter(|token| token.expires_at > now)
            .map(|token| token.payload.clone());

        Ok(payload)
    }

    async fn delete(&self, key: &TokenKey) -> Result<bool, TokenStoreError> {
        let now = self.now().await;
        let mut entries = self.entries.lock().await;

        // Removing an expired leftover counts as removing nothing
        match entries.remove(key.as_str()) {
            Some(token) => Ok(token.expires_at > now),
            None => Ok(false),
        }
    }
}
