//! 数据存储层
//!
//! [`Store`] 持有注入的 [`ByteStore`]，每个集合对应一个固定 key。
//! 所有操作都是同步的"整集合读取 → 内存修改 → 整集合写回"，
//! 不做并发控制，只适用于单会话场景。

mod assignments;
mod seed;
mod session;
mod stats;
mod submissions;
mod users;

#[cfg(test)]
pub(crate) mod test_support;

use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{error, warn};

use crate::errors::Result;
use crate::kv::{ByteStore, MemoryByteStore};

pub use seed::seed_users;

pub const USERS_KEY: &str = "users";
pub const ASSIGNMENTS_KEY: &str = "assignments";
pub const SUBMISSIONS_KEY: &str = "submissions";
pub const CURRENT_USER_KEY: &str = "currentUser";

/// 作业、提交、用户和当前会话的存储
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn ByteStore>,
}

impl Store {
    pub fn new(backend: Arc<dyn ByteStore>) -> Self {
        Self { backend }
    }

    /// 使用进程内存后端
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryByteStore::new()))
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    /// 读取整个集合
    ///
    /// key 不存在、读取失败或 JSON 损坏时都返回空集合，保证系统可用；
    /// 后两种情况会记录日志。
    pub(crate) fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Failed to read collection '{}': {}, treating as empty", key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<T>>>(&raw) {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                warn!("Collection '{}' is corrupt: {}, treating as empty", key, e);
                Vec::new()
            }
        }
    }

    /// 写回整个集合，写入失败直接返回错误
    pub(crate) fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(key, &raw).inspect_err(|e| {
            error!("Failed to write collection '{}': {}", key, e);
        })
    }

    pub(crate) fn backend(&self) -> &dyn ByteStore {
        self.backend.as_ref()
    }
}
