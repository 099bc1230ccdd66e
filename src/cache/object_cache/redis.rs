use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use tracing::{debug, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;
use crate::errors::{Result, SchoolSystemError};

declare_object_cache_plugin!("redis", RedisCacheWrapper);

pub struct RedisCacheWrapper {
    conn: ConnectionManager,
    key_prefix: String,
    default_ttl: u64,
}

impl RedisCacheWrapper {
    /// 注册表使用的构造入口
    pub async fn create() -> Result<Box<dyn ObjectCache>> {
        let config = AppConfig::get();

        let client = redis::Client::open(config.cache.redis.url.as_str())
            .map_err(|e| SchoolSystemError::cache_connection(format!("Redis URL 无效: {e}")))?;

        let conn = client.get_connection_manager().await.map_err(|e| {
            SchoolSystemError::cache_connection(format!("Redis 连接失败: {e}"))
        })?;

        debug!("RedisCacheWrapper connected to {}", config.cache.redis.url);

        Ok(Box::new(Self {
            conn,
            key_prefix: config.cache.redis.key_prefix.clone(),
            default_ttl: config.cache.default_ttl,
        }))
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(self.full_key(key)).await {
            Ok(Some(value)) => CacheResult::Found(value),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                warn!("Redis GET failed for key {}: {}", key, e);
                CacheResult::Error(e.to_string())
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let ttl = if ttl == 0 { self.default_ttl } else { ttl };
        let mut conn = self.conn.clone();
        if let Err(e) = conn
            .set_ex::<_, _, ()>(self.full_key(&key), value, ttl)
            .await
        {
            warn!("Redis SETEX failed for key {}: {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        let mut conn = self.conn.clone();
        if let Err(e) = conn.del::<_, ()>(self.full_key(key)).await {
            warn!("Redis DEL failed for key {}: {}", key, e);
        }
    }

    async fn clear(&self) {
        // 按前缀 SCAN 后批量删除，避免 FLUSHDB 影响同库其他键
        let mut conn = self.conn.clone();
        let pattern = format!("{}*", self.key_prefix);
        let mut cursor: u64 = 0;

        loop {
            let scanned: std::result::Result<(u64, Vec<String>), _> = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await;

            match scanned {
                Ok((next_cursor, keys)) => {
                    if !keys.is_empty()
                        && let Err(e) = conn.del::<_, ()>(keys).await
                    {
                        warn!("Redis DEL failed during clear: {}", e);
                    }
                    if next_cursor == 0 {
                        break;
                    }
                    cursor = next_cursor;
                }
                Err(e) => {
                    warn!("Redis SCAN failed during clear: {}", e);
                    break;
                }
            }
        }
    }
}
