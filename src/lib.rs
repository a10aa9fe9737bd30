//! Assignment Tracker - 作业跟踪数据层
//!
//! 管理员发布作业，学生提交并汇报进度。所有状态保存在一个可插拔的
//! 字符串键值存储中，通过 [`storage::Store`] 同步读写。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `kv`: 键值存储后端（内存/文件/Redis）
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `storage`: Store 及统计
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod kv;
pub mod models;
pub mod runtime;
pub mod storage;
pub mod utils;

pub use errors::{Result, TrackerError};
pub use storage::Store;
