use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "assignment.ts")]
pub struct Assignment {
    // 唯一 ID，创建时生成
    pub id: String,
    // 作业标题
    pub title: String,
    // 作业描述
    #[serde(default)]
    pub description: String,
    // 截止日期，"YYYY-MM-DD" 或 RFC 3339
    pub due_date: String,
    // 资料链接（网盘等）
    #[serde(default)]
    pub drive_link: String,
    // 创建者用户 ID
    #[serde(default)]
    pub created_by: String,
}

/// 作业列表排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "assignment.ts")]
pub enum AssignmentSort {
    /// 截止日期升序
    #[default]
    DueDate,
    /// 提交率降序
    SubmissionRate,
}
