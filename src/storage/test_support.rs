use std::sync::Arc;

use super::Store;
use crate::errors::{Result, TrackerError};
use crate::kv::ByteStore;

/// 已写入种子用户的内存 Store
pub(crate) fn seeded_store() -> Store {
    let store = Store::in_memory();
    store
        .initialize_seed_data()
        .expect("seeding an in-memory store never fails");
    store
}

/// 读写全部失败的后端
#[derive(Debug, Default)]
pub(crate) struct FailingByteStore;

impl ByteStore for FailingByteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Err(TrackerError::storage(format!("read of '{key}' failed")))
    }

    fn set(&self, key: &str, _value: &str) -> Result<()> {
        Err(TrackerError::storage(format!("write of '{key}' failed")))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Err(TrackerError::storage(format!("remove of '{key}' failed")))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

/// 指定 key 的读或写失败
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fault {
    Read,
    Write,
}

/// 复制已有 Store 的数据，只有指定 key 出错的内存后端
pub(crate) struct FaultyKeyStore {
    inner: crate::kv::MemoryByteStore,
    faulty_key: &'static str,
    fault: Fault,
}

impl FaultyKeyStore {
    pub(crate) fn wrap(store: &Store, faulty_key: &'static str, fault: Fault) -> Store {
        let inner = crate::kv::MemoryByteStore::new();
        for key in [
            super::USERS_KEY,
            super::ASSIGNMENTS_KEY,
            super::SUBMISSIONS_KEY,
            super::CURRENT_USER_KEY,
        ] {
            if let Some(raw) = store.backend().get(key).expect("memory read") {
                inner.set(key, &raw).expect("memory write");
            }
        }
        Store::new(Arc::new(Self {
            inner,
            faulty_key,
            fault,
        }))
    }
}

impl ByteStore for FaultyKeyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if key == self.faulty_key && self.fault == Fault::Read {
            return Err(TrackerError::storage(format!("'{key}' is unreadable")));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if key == self.faulty_key && self.fault == Fault::Write {
            return Err(TrackerError::storage(format!("'{key}' is read-only")));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key)
    }

    fn backend_name(&self) -> &'static str {
        "faulty-key"
    }
}
