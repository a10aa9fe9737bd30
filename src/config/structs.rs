use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub storage: StorageConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
    pub seed_on_startup: bool, // 启动时是否写入演示用户
}

/// 存储后端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: String, // memory / file / redis
    pub file: FileStorageConfig,
    pub redis: RedisConfig,
}

/// 文件存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStorageConfig {
    pub dir: String, // 每个 key 对应该目录下的一个文件
}

/// Redis 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            file: FileStorageConfig {
                dir: "data".to_string(),
            },
            redis: RedisConfig {
                url: "redis://127.0.0.1:6379".to_string(),
                key_prefix: "tracker:".to_string(),
            },
        }
    }
}
