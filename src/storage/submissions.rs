//! 提交、进度与评分

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::{SUBMISSIONS_KEY, Store};
use crate::errors::{Result, TrackerError};
use crate::models::{Assignment, GradeSubmissionRequest, Submission, SubmissionStatus, Upserted};
use crate::utils::{clamp_percentage, is_late, require_non_empty};

impl Store {
    pub fn get_submissions_by_student(&self, student_id: &str) -> Vec<Submission> {
        let submissions: Vec<Submission> = self.load_collection(SUBMISSIONS_KEY);
        let filtered: Vec<Submission> = submissions
            .into_iter()
            .filter(|s| s.student_id == student_id)
            .collect();
        debug!(
            "Loaded {} submission(s) for student {}",
            filtered.len(),
            student_id
        );
        filtered
    }

    pub fn get_submission(&self, assignment_id: &str, student_id: &str) -> Option<Submission> {
        self.load_collection::<Submission>(SUBMISSIONS_KEY)
            .into_iter()
            .find(|s| s.matches(assignment_id, student_id))
    }

    /// 提交作业，按当前时间判断是否迟交
    pub fn submit_assignment(&self, assignment_id: &str, student_id: &str) -> Result<Upserted> {
        self.submit_assignment_at(assignment_id, student_id, Utc::now())
    }

    /// 以给定时间提交作业
    ///
    /// 重复提交只会更新已有记录，状态按本次时间重新计算。
    /// 截止日期无法解析时按时提交处理。
    pub fn submit_assignment_at(
        &self,
        assignment_id: &str,
        student_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Upserted> {
        let assignment = self.require_assignment(assignment_id)?;
        require_non_empty("studentId", student_id)?;

        let status = match is_late(&assignment.due_date, now) {
            Ok(true) => SubmissionStatus::Late,
            Ok(false) => SubmissionStatus::OnTime,
            Err(e) => {
                warn!(
                    "Assignment {} has an unreadable due date: {}, treating as on time",
                    assignment_id, e
                );
                SubmissionStatus::OnTime
            }
        };

        let outcome = self.upsert_submission(assignment_id, student_id, |submission| {
            submission.submitted = true;
            submission.status = status;
        })?;

        info!(
            "Student {} submitted assignment {} ({})",
            student_id, assignment_id, status
        );
        Ok(outcome)
    }

    /// 更新进度，超出 0-100 的值会被截断
    ///
    /// 不会修改已有记录的提交状态。
    pub fn update_submission_progress(
        &self,
        assignment_id: &str,
        student_id: &str,
        progress: i64,
    ) -> Result<Upserted> {
        self.require_assignment(assignment_id)?;
        require_non_empty("studentId", student_id)?;

        let progress = clamp_percentage(progress);
        let outcome = self.upsert_submission(assignment_id, student_id, |submission| {
            submission.progress = progress;
        })?;

        debug!(
            "Student {} progress on assignment {} set to {}%",
            student_id, assignment_id, progress
        );
        Ok(outcome)
    }

    /// 评分，只能对已提交的记录操作
    pub fn grade_submission(
        &self,
        assignment_id: &str,
        student_id: &str,
        req: GradeSubmissionRequest,
    ) -> Result<Submission> {
        let mut submissions: Vec<Submission> = self.load_collection(SUBMISSIONS_KEY);
        let submission = submissions
            .iter_mut()
            .find(|s| s.matches(assignment_id, student_id))
            .ok_or_else(|| {
                TrackerError::not_found(format!(
                    "Submission of assignment {assignment_id} by student {student_id} not found"
                ))
            })?;

        if !submission.submitted {
            return Err(TrackerError::validation(
                "Cannot grade a submission that has not been submitted",
            ));
        }

        submission.status = SubmissionStatus::Graded;
        submission.grade = Some(clamp_percentage(req.grade));
        submission.feedback = req.feedback.filter(|f| !f.trim().is_empty());
        let graded = submission.clone();

        self.save_collection(SUBMISSIONS_KEY, &submissions)?;
        info!(
            "Submission of assignment {} by student {} graded: {:?}",
            assignment_id, student_id, graded.grade
        );
        Ok(graded)
    }

    pub(crate) fn require_assignment(&self, assignment_id: &str) -> Result<Assignment> {
        self.get_assignment(assignment_id).ok_or_else(|| {
            TrackerError::not_found(format!("Assignment {assignment_id} not found"))
        })
    }

    /// 按 (assignment_id, student_id) 新建或修改提交记录并写回
    fn upsert_submission<F>(&self, assignment_id: &str, student_id: &str, apply: F) -> Result<Upserted>
    where
        F: FnOnce(&mut Submission),
    {
        let mut submissions: Vec<Submission> = self.load_collection(SUBMISSIONS_KEY);

        let outcome = match submissions
            .iter_mut()
            .find(|s| s.matches(assignment_id, student_id))
        {
            Some(existing) => {
                apply(existing);
                Upserted::Updated(existing.clone())
            }
            None => {
                let mut created = Submission::pending(assignment_id, student_id);
                apply(&mut created);
                submissions.push(created.clone());
                Upserted::Created(created)
            }
        };

        self.save_collection(SUBMISSIONS_KEY, &submissions)?;
        Ok(outcome)
    }
}
