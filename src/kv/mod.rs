//! 键值存储层
//!
//! Store 只通过 [`ByteStore`] 访问持久化数据，每个集合对应一个固定的 key，
//! value 是完整的 JSON 字符串。具体后端由 [`register`] 中的插件表按名称构造。

pub mod backends;
pub mod register;

use std::sync::Arc;

use crate::config::StorageConfig;
use crate::errors::{Result, TrackerError};

pub use backends::{FileByteStore, MemoryByteStore, RedisByteStore};

/// 持久化字符串键值存储
///
/// 读取不存在的 key 返回 `Ok(None)`，不是错误。
pub trait ByteStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// 后端名称，用于日志
    fn backend_name(&self) -> &'static str;
}

/// 按配置名称创建存储后端
pub fn create_byte_store(config: &StorageConfig) -> Result<Arc<dyn ByteStore>> {
    let constructor = register::get_byte_store_plugin(&config.backend).ok_or_else(|| {
        TrackerError::backend_not_found(format!(
            "Storage backend '{}' is not registered",
            config.backend
        ))
    })?;
    let store = constructor(config)?;
    Ok(Arc::from(store))
}
