//! 作业增删改查

use std::collections::HashSet;
use tracing::{debug, info};
use uuid::Uuid;

use super::{ASSIGNMENTS_KEY, SUBMISSIONS_KEY, Store};
use crate::errors::{Result, TrackerError};
use crate::models::{Assignment, CreateAssignmentRequest, Submission, UpdateAssignmentRequest};
use crate::utils::require_non_empty;

impl Store {
    pub fn get_all_assignments(&self) -> Vec<Assignment> {
        let assignments: Vec<Assignment> = self.load_collection(ASSIGNMENTS_KEY);
        debug!("Loaded {} assignment(s)", assignments.len());
        assignments
    }

    pub fn get_assignment(&self, assignment_id: &str) -> Option<Assignment> {
        self.get_all_assignments()
            .into_iter()
            .find(|a| a.id == assignment_id)
    }

    /// 创建作业，标题和截止日期必填
    pub fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        require_non_empty("title", &req.title)?;
        require_non_empty("dueDate", &req.due_date)?;

        let mut assignments = self.get_all_assignments();
        let existing: HashSet<&str> = assignments.iter().map(|a| a.id.as_str()).collect();
        let id = loop {
            let candidate = Uuid::new_v4().simple().to_string();
            if !existing.contains(candidate.as_str()) {
                break candidate;
            }
        };

        let assignment = Assignment {
            id,
            title: req.title,
            description: req.description,
            due_date: req.due_date,
            drive_link: req.drive_link,
            created_by: req.created_by,
        };
        assignments.push(assignment.clone());
        self.save_collection(ASSIGNMENTS_KEY, &assignments)?;

        info!(
            "Assignment {} '{}' created by '{}'",
            assignment.id, assignment.title, assignment.created_by
        );
        Ok(assignment)
    }

    /// 合并更新作业字段
    ///
    /// 提供了但为空的标题或截止日期同样视为缺失。
    pub fn update_assignment(
        &self,
        assignment_id: &str,
        update: UpdateAssignmentRequest,
    ) -> Result<Assignment> {
        if let Some(title) = &update.title {
            require_non_empty("title", title)?;
        }
        if let Some(due_date) = &update.due_date {
            require_non_empty("dueDate", due_date)?;
        }

        let mut assignments = self.get_all_assignments();
        let assignment = assignments
            .iter_mut()
            .find(|a| a.id == assignment_id)
            .ok_or_else(|| {
                TrackerError::not_found(format!("Assignment {assignment_id} not found"))
            })?;

        if update.is_empty() {
            return Ok(assignment.clone());
        }

        if let Some(title) = update.title {
            assignment.title = title;
        }
        if let Some(description) = update.description {
            assignment.description = description;
        }
        if let Some(due_date) = update.due_date {
            assignment.due_date = due_date;
        }
        if let Some(drive_link) = update.drive_link {
            assignment.drive_link = drive_link;
        }

        let updated = assignment.clone();
        self.save_collection(ASSIGNMENTS_KEY, &assignments)?;
        info!("Assignment {} updated", assignment_id);
        Ok(updated)
    }

    /// 删除作业并级联删除其全部提交
    pub fn delete_assignment(&self, assignment_id: &str) -> Result<()> {
        let mut assignments = self.get_all_assignments();
        let before = assignments.len();
        assignments.retain(|a| a.id != assignment_id);
        if assignments.len() == before {
            return Err(TrackerError::not_found(format!(
                "Assignment {assignment_id} not found"
            )));
        }

        // 先删提交，作业写入失败时也不会留下悬空的提交
        let mut submissions: Vec<Submission> = self.load_collection(SUBMISSIONS_KEY);
        let submissions_before = submissions.len();
        submissions.retain(|s| s.assignment_id != assignment_id);
        let removed = submissions_before - submissions.len();
        if removed > 0 {
            self.save_collection(SUBMISSIONS_KEY, &submissions)?;
        }

        self.save_collection(ASSIGNMENTS_KEY, &assignments)?;
        info!(
            "Assignment {} deleted along with {} submission(s)",
            assignment_id, removed
        );
        Ok(())
    }
}
