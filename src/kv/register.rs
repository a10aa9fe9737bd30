use crate::config::StorageConfig;
use crate::errors::Result;
use crate::kv::ByteStore;
use crate::kv::backends::{FileByteStore, MemoryByteStore, RedisByteStore};
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

pub type ByteStoreConstructor =
    Arc<dyn Fn(&StorageConfig) -> Result<Box<dyn ByteStore>> + Send + Sync>;

static BYTE_STORE_REGISTRY: Lazy<RwLock<HashMap<String, ByteStoreConstructor>>> =
    Lazy::new(|| RwLock::new(builtin_plugins()));

fn builtin_plugins() -> HashMap<String, ByteStoreConstructor> {
    let mut plugins: HashMap<String, ByteStoreConstructor> = HashMap::new();
    plugins.insert(
        "memory".to_string(),
        Arc::new(|_| Ok(Box::new(MemoryByteStore::new()) as Box<dyn ByteStore>)),
    );
    plugins.insert(
        "file".to_string(),
        Arc::new(|config| {
            let store = FileByteStore::open(&config.file.dir)?;
            Ok(Box::new(store) as Box<dyn ByteStore>)
        }),
    );
    plugins.insert(
        "redis".to_string(),
        Arc::new(|config| {
            let store = RedisByteStore::connect(&config.redis.url, &config.redis.key_prefix)?;
            Ok(Box::new(store) as Box<dyn ByteStore>)
        }),
    );
    plugins
}

pub fn register_byte_store_plugin<S: Into<String>>(name: S, constructor: ByteStoreConstructor) {
    let name = name.into();
    let mut registry = BYTE_STORE_REGISTRY
        .write()
        .expect("Byte store registry lock poisoned");
    registry.insert(name, constructor);
}

pub fn get_byte_store_plugin(name: &str) -> Option<ByteStoreConstructor> {
    BYTE_STORE_REGISTRY
        .read()
        .expect("Byte store registry lock poisoned")
        .get(name)
        .cloned()
}

pub fn debug_byte_store_registry() {
    let registry = BYTE_STORE_REGISTRY
        .read()
        .expect("Byte store registry lock poisoned");
    if registry.is_empty() {
        tracing::debug!("No byte store plugins registered.");
    } else {
        tracing::debug!("Registered byte store plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_plugins_registered() {
        for name in ["memory", "file", "redis"] {
            assert!(get_byte_store_plugin(name).is_some(), "missing {name}");
        }
        assert!(get_byte_store_plugin("sled").is_none());
    }

    #[test]
    fn test_register_custom_plugin() {
        register_byte_store_plugin(
            "scratch",
            Arc::new(|_| Ok(Box::new(MemoryByteStore::new()) as Box<dyn ByteStore>)),
        );
        let constructor = get_byte_store_plugin("scratch").expect("just registered");
        let store = constructor(&StorageConfig::default()).unwrap();
        assert_eq!(store.backend_name(), "memory");
    }
}
