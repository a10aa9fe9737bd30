use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证没有配置文件时也能启动
            .set_default("app.system_name", "Assignment Manager")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("app.seed_on_startup", true)?
            .set_default("storage.backend", "memory")?
            .set_default("storage.file.dir", "data")?
            .set_default("storage.redis.url", "redis://127.0.0.1:6379")?
            .set_default("storage.redis.key_prefix", "tracker:")?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("TRACKER")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("storage.backend", std::env::var("STORAGE_BACKEND").ok())?
            .set_override_option("storage.file.dir", std::env::var("STORAGE_DIR").ok())?
            .set_override_option("storage.redis.url", std::env::var("REDIS_URL").ok())?
            .set_override_option(
                "storage.redis.key_prefix",
                std::env::var("REDIS_KEY_PREFIX").ok(),
            )?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        app_config.storage.backend = app_config.storage.backend.trim().to_lowercase();

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_falls_back_to_defaults() {
        let config = AppConfig::load().expect("defaults should always load");
        assert!(!config.app.system_name.is_empty());
        assert!(!config.storage.backend.is_empty());
        assert!(!config.storage.redis.key_prefix.is_empty());
    }

    #[test]
    fn test_environment_helpers() {
        let mut config = AppConfig::load().expect("defaults should always load");
        config.app.environment = "production".to_string();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
