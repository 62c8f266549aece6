/// Token lifecycle integration tests
///
/// The in-memory backend exercises the full issue/redeem/delete protocol,
/// including simulated-time expiry. The Redis-backed tests mirror the same
/// flows against a live instance and are ignored by default.

use chrono::Duration;
use crewtask_core::config::TokenConfig;
use crewtask_core::tokens::{
    codes_match, generate_invite_id, generate_otp, InvitePayload, MemoryTokenStore, TeamRole,
    TokenKey, TokenKind, TokenStore,
};
use uuid::Uuid;

#[tokio::test]
async fn test_otp_round_trip() {
    let store = MemoryTokenStore::new();
    let config = TokenConfig::default();

    let key = store
        .issue(TokenKind::Otp, "x@y.com", "123456", config.otp_ttl_secs)
        .await
        .unwrap();
    assert_eq!(key.as_str(), "otp:x@y.com");

    let payload = store.redeem(&key).await.unwrap();
    assert_eq!(payload.as_deref(), Some("123456"));
}

#[tokio::test]
async fn test_otp_expires_after_ttl() {
    let store = MemoryTokenStore::new();
    let key = store
        .issue(TokenKind::Otp, "x@y.com", "123456", 300)
        .await
        .unwrap();

    // t = 301s: the code is gone
    store.advance(Duration::seconds(301)).await;
    assert_eq!(store.redeem(&key).await.unwrap(), None);
}

#[tokio::test]
async fn test_otp_still_valid_just_before_ttl() {
    let store = MemoryTokenStore::new();
    let key = store
        .issue(TokenKind::Otp, "x@y.com", "123456", 300)
        .await
        .unwrap();

    store.advance(Duration::seconds(299)).await;
    assert_eq!(store.redeem(&key).await.unwrap().as_deref(), Some("123456"));
}

#[tokio::test]
async fn test_single_use_consumption() {
    let store = MemoryTokenStore::new();
    let key = store
        .issue(TokenKind::Otp, "x@y.com", "123456", 300)
        .await
        .unwrap();

    // Compare-then-consume: redeem, match, delete
    let stored = store.redeem(&key).await.unwrap().unwrap();
    assert!(codes_match("123456", &stored));
    assert!(store.delete(&key).await.unwrap());

    // A second consumer finds nothing
    assert_eq!(store.redeem(&key).await.unwrap(), None);
    assert!(!store.delete(&key).await.unwrap());
}

#[tokio::test]
async fn test_wrong_guess_does_not_invalidate() {
    let store = MemoryTokenStore::new();
    let key = store
        .issue(TokenKind::Otp, "x@y.com", "123456", 300)
        .await
        .unwrap();

    // A non-matching guess: the caller compares and does not delete
    let stored = store.redeem(&key).await.unwrap().unwrap();
    assert!(!codes_match("999999", &stored));

    // The real code still works
    let stored = store.redeem(&key).await.unwrap().unwrap();
    assert!(codes_match("123456", &stored));
}

#[tokio::test]
async fn test_reset_otp_is_separate_namespace() {
    let store = MemoryTokenStore::new();
    store
        .issue(TokenKind::Otp, "x@y.com", "111111", 300)
        .await
        .unwrap();
    store
        .issue(TokenKind::ResetOtp, "x@y.com", "222222", 300)
        .await
        .unwrap();

    let otp_key = TokenKey::new(TokenKind::Otp, "x@y.com");
    let reset_key = TokenKey::new(TokenKind::ResetOtp, "x@y.com");

    assert_eq!(store.redeem(&otp_key).await.unwrap().as_deref(), Some("111111"));
    assert_eq!(
        store.redeem(&reset_key).await.unwrap().as_deref(),
        Some("222222")
    );

    // Consuming one leaves the other intact
    store.delete(&otp_key).await.unwrap();
    assert!(store.redeem(&reset_key).await.unwrap().is_some());
}

#[tokio::test]
async fn test_invitation_flow() {
    let store = MemoryTokenStore::new();
    let config = TokenConfig::default();

    let payload = InvitePayload {
        email: "new@member.com".to_string(),
        user_id: Some(Uuid::new_v4()),
        role: TeamRole::Member,
        team_id: Uuid::new_v4(),
        inviter_name: "Alice".to_string(),
    };

    // Invitation subject is a fresh random identifier, not the email
    let invite_id = generate_invite_id();
    let key = store
        .issue(
            TokenKind::Invite,
            &invite_id,
            &payload.to_json().unwrap(),
            config.invite_ttl_secs,
        )
        .await
        .unwrap();
    assert_eq!(key.as_str(), format!("invite:{}", invite_id));

    // Accepting the invitation: read, decode, consume
    let stored = store.redeem(&key).await.unwrap().unwrap();
    let decoded = InvitePayload::from_json(&stored).unwrap();
    assert_eq!(decoded, payload);
    assert!(store.delete(&key).await.unwrap());

    // The link is single-use
    assert_eq!(store.redeem(&key).await.unwrap(), None);
}

#[tokio::test]
async fn test_invitation_expires_after_24h() {
    let store = MemoryTokenStore::new();
    let key = store
        .issue(TokenKind::Invite, &generate_invite_id(), "{}", 86_400)
        .await
        .unwrap();

    store.advance(Duration::seconds(86_401)).await;
    assert_eq!(store.redeem(&key).await.unwrap(), None);
}

#[tokio::test]
async fn test_reissue_replaces_previous_code() {
    let store = MemoryTokenStore::new();
    store
        .issue(TokenKind::Otp, "x@y.com", "111111", 300)
        .await
        .unwrap();
    let key = store
        .issue(TokenKind::Otp, "x@y.com", "222222", 300)
        .await
        .unwrap();

    // Only the latest code is valid
    let stored = store.redeem(&key).await.unwrap().unwrap();
    assert!(!codes_match("111111", &stored));
    assert!(codes_match("222222", &stored));
}

#[tokio::test]
async fn test_generated_otp_round_trips() {
    let store = MemoryTokenStore::new();
    let otp = generate_otp();

    let key = store
        .issue(TokenKind::Otp, "x@y.com", &otp, 300)
        .await
        .unwrap();
    let stored = store.redeem(&key).await.unwrap().unwrap();
    assert!(codes_match(&otp, &stored));
}

mod redis_backend {
    //! Same protocol against a live Redis. Run with:
    //! `cargo test -- --ignored`

    use crewtask_core::storage::{RedisClient, RedisConfig};
    use crewtask_core::tokens::{RedisTokenStore, TokenKind, TokenStore};

    async fn connect() -> RedisTokenStore {
        let config = RedisConfig {
            url: "redis://localhost:6379".to_string(),
            connection_timeout_secs: 5,
            command_timeout_secs: 10,
        };
        let client = RedisClient::new(config).await.expect("Redis connection");
        RedisTokenStore::new(client)
    }

    #[tokio::test]
    #[ignore] // Requires running Redis instance
    async fn test_redis_round_trip() {
        let store = connect().await;

        let key = store
            .issue(TokenKind::Otp, "it@example.com", "123456", 300)
            .await
            .unwrap();
        assert_eq!(store.redeem(&key).await.unwrap().as_deref(), Some("123456"));

        // Cleanup doubles as the single-use check
        assert!(store.delete(&key).await.unwrap());
        assert_eq!(store.redeem(&key).await.unwrap(), None);
        assert!(!store.delete(&key).await.unwrap());
    }

    #[tokio::test]
    #[ignore] // Requires running Redis instance
    async fn test_redis_ttl_applied() {
        let store = connect().await;

        // 1-second TTL; Redis expires the key on its own
        let key = store
            .issue(TokenKind::Otp, "ttl@example.com", "123456", 1)
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
        assert_eq!(store.redeem(&key).await.unwrap(), None);
    }
}
