use crate::errors::{Result, TrackerError};

/// 必填字段校验：不能为空或只有空白
pub fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// 百分比截断到 0-100，超出范围不报错
pub fn clamp_percentage(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}
