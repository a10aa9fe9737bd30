//! 截止日期解析
//!
//! 支持三种格式：
//! - RFC 3339，如 `2099-01-01T12:00:00Z`
//! - 不带时区的 `YYYY-MM-DDTHH:MM[:SS]`，按 UTC 处理
//! - 纯日期 `YYYY-MM-DD` 或 `MM/DD/YYYY`，整天都算按时（截止到当天 23:59:59.999999999 UTC）

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::{Result, TrackerError};

/// 解析截止时间，返回最后一个仍算按时的时刻
pub fn parse_due_date(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .map_err(|e| TrackerError::date_parse(format!("Invalid due date '{raw}': {e}")))?;
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TrackerError::date_parse(format!("Invalid due date '{raw}'")))
}

/// `now` 晚于截止时间即为迟交
pub fn is_late(due_date: &str, now: DateTime<Utc>) -> Result<bool> {
    Ok(now > parse_due_date(due_date)?)
}
