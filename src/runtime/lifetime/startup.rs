use crate::config::{AppConfig, StorageConfig};
use crate::errors::Result;
use crate::kv::{ByteStore, create_byte_store};
use crate::storage::Store;
use std::sync::Arc;
use tracing::{debug, info, warn};

const FALLBACK_BACKEND: &str = "memory";

pub struct StartupContext {
    pub store: Store,
    pub seeded: bool,
}

/// 创建存储后端，配置的后端不可用时回退到内存存储
pub fn create_backend(config: &StorageConfig) -> Result<Arc<dyn ByteStore>> {
    let backend = &config.backend;

    warn!("Attempting to create {} storage backend", backend);

    match create_byte_store(config) {
        Ok(store) => {
            warn!("Successfully created {} storage backend", backend);
            Ok(store)
        }
        Err(e) if backend != FALLBACK_BACKEND => {
            warn!("Failed to create {} storage backend: {}", backend, e);
            warn!("Falling back to {} storage, data will not persist", FALLBACK_BACKEND);
            let fallback = StorageConfig {
                backend: FALLBACK_BACKEND.to_string(),
                ..config.clone()
            };
            let store = create_byte_store(&fallback)?;
            warn!("Successfully created fallback in-memory storage backend");
            Ok(store)
        }
        Err(e) => Err(e),
    }
}

/// 准备 Store：创建后端并按需写入种子数据
pub fn prepare_store(config: &AppConfig) -> Result<StartupContext> {
    if cfg!(debug_assertions) {
        crate::kv::register::debug_byte_store_registry();
        debug!("Debug mode: Byte store registry is enabled");
    }

    let backend = create_backend(&config.storage)?;
    let store = Store::new(backend);
    info!("Store initialized with {} backend", store.backend_name());

    let seeded = if config.app.seed_on_startup {
        store.initialize_seed_data()?
    } else {
        debug!("Seeding disabled by configuration");
        false
    };

    Ok(StartupContext { store, seeded })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_backend(backend: &str) -> AppConfig {
        let mut config = AppConfig::load().expect("defaults should always load");
        config.storage.backend = backend.to_string();
        config.app.seed_on_startup = true;
        config
    }

    #[test]
    fn test_prepare_store_seeds_memory_backend() {
        let ctx = prepare_store(&config_with_backend("memory")).unwrap();
        assert!(ctx.seeded);
        assert_eq!(ctx.store.backend_name(), "memory");
        assert_eq!(ctx.store.get_all_users().len(), 3);
    }

    #[test]
    fn test_unknown_backend_falls_back_to_memory() {
        let ctx = prepare_store(&config_with_backend("cassandra")).unwrap();
        assert_eq!(ctx.store.backend_name(), "memory");
    }

    #[test]
    fn test_file_backend_persists_across_startups() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_with_backend("file");
        config.storage.file.dir = dir.path().to_string_lossy().into_owned();

        let first = prepare_store(&config).unwrap();
        assert!(first.seeded);
        assert_eq!(first.store.backend_name(), "file");
        first.store.login("1").unwrap();

        let second = prepare_store(&config).unwrap();
        assert!(!second.seeded);
        assert_eq!(second.store.get_current_user().unwrap().id, "1");
    }

    #[test]
    fn test_seeding_can_be_disabled() {
        let mut config = config_with_backend("memory");
        config.app.seed_on_startup = false;
        let ctx = prepare_store(&config).unwrap();
        assert!(!ctx.seeded);
        assert!(ctx.store.get_all_users().is_empty());
    }
}
