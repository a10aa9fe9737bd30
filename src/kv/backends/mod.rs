mod file;
mod memory;
mod redis_store;

pub use file::FileByteStore;
pub use memory::MemoryByteStore;
pub use redis_store::RedisByteStore;
