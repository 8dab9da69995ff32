use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    ttl: u64, // TTL in seconds
}

impl RedisObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;

        debug!(
            "RedisObjectCache created with prefix: '{}', TTL: {}s",
            redis_config.key_prefix, config.cache.default_ttl
        );

        let client = redis::Client::open(redis_config.url.clone())
            .map_err(|e| format!("Failed to create Redis client: {e}"))?;

        // 测试 Redis 连接 - 使用同步连接进行简单测试
        match client.get_connection() {
            Ok(mut conn) => match redis::cmd("PING").query::<String>(&mut conn) {
                Ok(response) => {
                    debug!("Redis connection test successful: {}", response);
                }
                Err(e) => {
                    error!(
                        "Failed to ping Redis server: {}. Check Redis server status and URL: {}",
                        e, redis_config.url
                    );
                    return Err(format!("Redis ping failed: {e}"));
                }
            },
            Err(e) => {
                error!(
                    "Failed to connect to Redis server: {}. Check Redis server status and URL: {}",
                    e, redis_config.url
                );
                return Err(format!("Redis connection failed: {e}"));
            }
        }

        Ok(Self {
            client,
            key_prefix: redis_config.key_prefix.clone(),
            ttl: config.cache.default_ttl,
        })
    }

    fn prefixed_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    async fn connection(&self) -> Result<MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let mut conn = match self.connection().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("Redis connection failed: {}", e);
                return CacheResult::Error(e.to_string());
            }
        };

        match conn.get::<_, Option<String>>(self.prefixed_key(key)).await {
            Ok(Some(value)) => CacheResult::Found(value),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                warn!("Redis GET failed for key {}: {}", key, e);
                CacheResult::Error(e.to_string())
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let mut conn = match self.connection().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("Redis connection failed: {}", e);
                return;
            }
        };

        let ttl = if ttl == 0 { self.ttl } else { ttl };
        if let Err(e) = conn
            .set_ex::<_, _, ()>(self.prefixed_key(&key), value, ttl)
            .await
        {
            warn!("Redis SETEX failed for key {}: {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        let mut conn = match self.connection().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("Redis connection failed: {}", e);
                return;
            }
        };

        if let Err(e) = conn.del::<_, ()>(self.prefixed_key(key)).await {
            warn!("Redis DEL failed for key {}: {}", key, e);
        }
    }

    async fn invalidate_all(&self) {
        let mut conn = match self.connection().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("Redis connection failed: {}", e);
                return;
            }
        };

        // 只清理带本前缀的键，避免影响同实例的其他业务
        let pattern = format!("{}*", self.key_prefix);
        match conn.keys::<_, Vec<String>>(pattern).await {
            Ok(keys) if !keys.is_empty() => {
                if let Err(e) = conn.del::<_, ()>(keys).await {
                    warn!("Redis DEL failed during invalidate_all: {}", e);
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Redis KEYS failed during invalidate_all: {}", e),
        }
    }
}
