//! 数据模型定义
//!
//! 持久化时字段名使用 camelCase，与存储中的 JSON 布局一致。

pub mod assignments;
pub mod stats;
pub mod submissions;
pub mod users;

pub use assignments::entities::{Assignment, AssignmentSort};
pub use assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
pub use stats::responses::{DashboardOverview, StudentProgress, SubmissionStats};
pub use submissions::entities::{Submission, SubmissionStatus, Upserted};
pub use submissions::requests::GradeSubmissionRequest;
pub use users::entities::{User, UserRole};
