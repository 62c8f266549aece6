/// Storage clients for the token store
///
/// The token store never owns a global connection singleton; a client from
/// this module is constructed once by the application and passed in
/// explicitly, so tests can substitute the in-memory backend.
///
/// # Example
///
/// ```no_run
/// use crewtask_core::storage::{RedisClient, RedisConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = RedisConfig::from_env()?;
/// let client = RedisClient::new(config).await?;
///
/// let healthy = client.ping().await?;
/// println!("Redis healthy: {}", healthy);
/// # Ok(())
/// # }
/// ```
pub mod redis;

pub use self::redis::{RedisClient, RedisClientError, RedisConfig};
