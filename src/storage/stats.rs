//! 统计与派生视图

use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

use super::{SUBMISSIONS_KEY, Store};
use crate::errors::Result;
use crate::models::{
    Assignment, AssignmentSort, DashboardOverview, StudentProgress, Submission, SubmissionStats,
};
use crate::utils::parse_due_date;

/// 根据已加载的提交集合计算单个作业的统计
fn stats_for(assignment_id: &str, submissions: &[Submission], students: usize) -> SubmissionStats {
    let submitted: Vec<&Submission> = submissions
        .iter()
        .filter(|s| s.assignment_id == assignment_id && s.submitted)
        .collect();

    SubmissionStats {
        total: students,
        submitted: submitted.len(),
        late: submitted.iter().filter(|s| s.is_late()).count(),
    }
}

impl Store {
    /// 作业提交统计，total 为系统中的学生数
    pub fn get_submission_stats(&self, assignment_id: &str) -> Result<SubmissionStats> {
        self.require_assignment(assignment_id)?;
        let submissions: Vec<Submission> = self.load_collection(SUBMISSIONS_KEY);
        let students = self.get_students().len();
        Ok(stats_for(assignment_id, &submissions, students))
    }

    /// 学生进度
    ///
    /// 平均进度按全部作业计算，没有提交记录的作业按 0 计；没有作业时为 0。
    pub fn get_student_progress(&self, student_id: &str) -> StudentProgress {
        let assignments = self.get_all_assignments();
        let submissions = self.get_submissions_by_student(student_id);
        let total = assignments.len();

        let assignment_ids: HashSet<&str> = assignments.iter().map(|a| a.id.as_str()).collect();
        let relevant: Vec<&Submission> = submissions
            .iter()
            .filter(|s| assignment_ids.contains(s.assignment_id.as_str()))
            .collect();

        let submitted = relevant.iter().filter(|s| s.submitted).count();
        let progress_sum: u64 = relevant.iter().map(|s| u64::from(s.progress)).sum();
        let average_progress = if total == 0 {
            0.0
        } else {
            progress_sum as f64 / total as f64
        };

        debug!(
            "Student {} progress: {}/{} submitted, average {:.1}%",
            student_id, submitted, total, average_progress
        );

        StudentProgress {
            total,
            submitted,
            average_progress,
        }
    }

    /// 管理员面板概览
    pub fn get_dashboard_overview(&self) -> DashboardOverview {
        let assignments = self.get_all_assignments();
        let students = self.get_students().len();
        let submissions: Vec<Submission> = self.load_collection(SUBMISSIONS_KEY);

        let total_submissions: usize = assignments
            .iter()
            .map(|a| stats_for(&a.id, &submissions, students).submitted)
            .sum();
        let total_possible = assignments.len() * students;
        let submission_rate = if total_possible == 0 {
            0
        } else {
            (total_submissions as f64 / total_possible as f64 * 100.0).round() as u32
        };

        DashboardOverview {
            assignments: assignments.len(),
            students,
            total_submissions,
            total_possible,
            submission_rate,
        }
    }

    /// 排序后的作业列表
    ///
    /// 按截止日期升序时，无法解析的日期排在最后；按提交率降序时，提交率相同保持原顺序。
    pub fn list_assignments_sorted(&self, sort: AssignmentSort) -> Vec<Assignment> {
        let mut assignments = self.get_all_assignments();

        match sort {
            AssignmentSort::DueDate => {
                assignments.sort_by_key(|a| match parse_due_date(&a.due_date) {
                    Ok(due) => (false, Some(due)),
                    Err(_) => (true, None),
                });
            }
            AssignmentSort::SubmissionRate => {
                let submissions: Vec<Submission> = self.load_collection(SUBMISSIONS_KEY);
                let students = self.get_students().len();
                let mut rated: Vec<(f64, Assignment)> = assignments
                    .into_iter()
                    .map(|a| {
                        let rate = stats_for(&a.id, &submissions, students).submission_rate();
                        (rate, a)
                    })
                    .collect();
                rated.sort_by(|(ra, _), (rb, _)| rb.partial_cmp(ra).unwrap_or(Ordering::Equal));
                assignments = rated.into_iter().map(|(_, a)| a).collect();
            }
        }

        assignments
    }
}
