use serde::Deserialize;
use ts_rs::TS;

/// 创建作业请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: String,
    #[serde(default)]
    pub drive_link: String,
    #[serde(default)]
    pub created_by: String,
}

/// 更新作业请求，只合并提供的字段
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub drive_link: Option<String>,
}

impl UpdateAssignmentRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.drive_link.is_none()
    }
}
