use serde::Serialize;
use ts_rs::TS;

/// 单个作业的提交统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "stats.ts")]
pub struct SubmissionStats {
    // 系统中学生总数
    pub total: usize,
    pub submitted: usize,
    pub late: usize,
}

impl SubmissionStats {
    /// 提交率 (0.0 - 1.0)，没有学生时为 0
    pub fn submission_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.submitted as f64 / self.total as f64
        }
    }
}

/// 单个学生的进度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "stats.ts")]
pub struct StudentProgress {
    // 系统中作业总数
    pub total: usize,
    pub submitted: usize,
    pub average_progress: f64,
}

/// 管理员面板概览
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "stats.ts")]
pub struct DashboardOverview {
    pub assignments: usize,
    pub students: usize,
    pub total_submissions: usize,
    pub total_possible: usize,
    // 四舍五入后的百分比
    pub submission_rate: u32,
}
