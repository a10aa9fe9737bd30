//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_tracker_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum TrackerError {
            $($variant(String),)*
        }

        impl TrackerError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TrackerError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TrackerError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TrackerError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TrackerError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TrackerError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_tracker_errors! {
    BackendConnection("E001", "Backend Connection Error"),
    BackendNotFound("E002", "Backend Not Found"),
    Config("E003", "Configuration Error"),
    Storage("E004", "Storage Error"),
    FileOperation("E005", "File Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
}

impl TrackerError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackerError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::Validation(_))
    }
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TrackerError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<redis::RedisError> for TrackerError {
    fn from(err: redis::RedisError) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TrackerError {
    fn from(err: chrono::ParseError) -> Self {
        TrackerError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for TrackerError {
    fn from(err: config::ConfigError) -> Self {
        TrackerError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TrackerError::backend_connection("test").code(), "E001");
        assert_eq!(TrackerError::storage("test").code(), "E004");
        assert_eq!(TrackerError::validation("test").code(), "E006");
        assert_eq!(TrackerError::not_found("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TrackerError::backend_not_found("test").error_type(),
            "Backend Not Found"
        );
        assert_eq!(
            TrackerError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = TrackerError::validation("Title is required");
        assert_eq!(err.message(), "Title is required");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_format_simple() {
        let err = TrackerError::not_found("Assignment abc not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Assignment abc not found"));
    }

    #[test]
    fn test_from_io_error_is_storage() {
        let io = std::io::Error::other("disk full");
        let err: TrackerError = io.into();
        assert_eq!(err.code(), "E004");
        assert!(err.message().contains("disk full"));
    }

    #[test]
    fn test_from_serde_error_is_serialization() {
        let parse = serde_json::from_str::<Vec<i32>>("{").unwrap_err();
        let err: TrackerError = parse.into();
        assert_eq!(err.error_type(), "Serialization Error");
    }
}
