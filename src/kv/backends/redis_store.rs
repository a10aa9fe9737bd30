use redis::Commands;
use tracing::{debug, error};

use crate::errors::{Result, TrackerError};
use crate::kv::ByteStore;

/// Redis 存储，所有 key 加上配置的前缀
pub struct RedisByteStore {
    client: redis::Client,
    key_prefix: String,
}

impl RedisByteStore {
    pub fn connect(url: &str, key_prefix: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(|e| {
            TrackerError::backend_connection(format!("Invalid Redis URL '{url}': {e}"))
        })?;

        // 测试 Redis 连接
        match client.get_connection() {
            Ok(mut conn) => match redis::cmd("PING").query::<String>(&mut conn) {
                Ok(response) => {
                    debug!("Redis connection test successful: {}", response);
                }
                Err(e) => {
                    error!(
                        "Failed to ping Redis server: {}. Check Redis server status and URL: {}",
                        e, url
                    );
                    return Err(TrackerError::backend_connection(format!(
                        "Redis ping failed: {e}"
                    )));
                }
            },
            Err(e) => {
                error!(
                    "Failed to connect to Redis server: {}. Check Redis server status and URL: {}",
                    e, url
                );
                return Err(TrackerError::backend_connection(format!(
                    "Redis connection failed: {e}"
                )));
            }
        }

        debug!("RedisByteStore created with prefix: '{}'", key_prefix);

        Ok(Self {
            client,
            key_prefix: key_prefix.to_string(),
        })
    }

    fn make_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    fn connection(&self) -> Result<redis::Connection> {
        self.client.get_connection().map_err(|e| {
            error!("Failed to get Redis connection: {}", e);
            TrackerError::storage(format!("Redis connection failed: {e}"))
        })
    }
}

impl ByteStore for RedisByteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection()?;
        let value: Option<String> = conn.get(self.make_key(key))?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.connection()?;
        conn.set::<_, _, ()>(self.make_key(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut conn = self.connection()?;
        conn.del::<_, ()>(self.make_key(key))?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
