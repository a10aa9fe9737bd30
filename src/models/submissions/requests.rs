use serde::Deserialize;
use ts_rs::TS;

/// 评分请求，grade 超出 0-100 时会被截断
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct GradeSubmissionRequest {
    pub grade: i64,
    pub feedback: Option<String>,
}
