use dashmap::DashMap;
use tracing::debug;

use crate::errors::Result;
use crate::kv::ByteStore;

/// 进程内存储，进程退出后数据丢失，主要用于测试和演示
#[derive(Debug, Default)]
pub struct MemoryByteStore {
    inner: DashMap<String, String>,
}

impl MemoryByteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl MemoryByteStore {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl ByteStore for MemoryByteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.inner.get(key).map(|v| v.value().clone());
        if value.is_none() {
            debug!("Key not found in memory store: {}", key);
        }
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_before_set_is_none() {
        let store = MemoryByteStore::new();
        assert_eq!(store.get("assignments").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites_and_remove_clears() {
        let store = MemoryByteStore::new();
        store.set("currentUser", "\"1\"").unwrap();
        store.set("currentUser", "\"2\"").unwrap();
        assert_eq!(store.get("currentUser").unwrap().as_deref(), Some("\"2\""));
        assert_eq!(store.len(), 1);

        store.remove("currentUser").unwrap();
        assert_eq!(store.get("currentUser").unwrap(), None);
        // 删除不存在的 key 不报错
        store.remove("currentUser").unwrap();
    }
}
