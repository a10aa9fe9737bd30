use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 提交状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "submission.ts")]
pub enum SubmissionStatus {
    #[default]
    OnTime,
    Late,
    Graded,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::OnTime => write!(f, "on-time"),
            SubmissionStatus::Late => write!(f, "late"),
            SubmissionStatus::Graded => write!(f, "graded"),
        }
    }
}

/// 提交记录，(assignment_id, student_id) 唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "submission.ts")]
pub struct Submission {
    pub assignment_id: String,
    pub student_id: String,
    #[serde(default)]
    pub submitted: bool,
    #[serde(default)]
    pub status: SubmissionStatus,
    // 0-100
    #[serde(default)]
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub grade: Option<u8>,
}

impl Submission {
    /// 尚未提交的空记录
    pub fn pending(assignment_id: &str, student_id: &str) -> Self {
        Self {
            assignment_id: assignment_id.to_string(),
            student_id: student_id.to_string(),
            submitted: false,
            status: SubmissionStatus::OnTime,
            progress: 0,
            feedback: None,
            grade: None,
        }
    }

    pub fn matches(&self, assignment_id: &str, student_id: &str) -> bool {
        self.assignment_id == assignment_id && self.student_id == student_id
    }

    pub fn is_late(&self) -> bool {
        self.status == SubmissionStatus::Late
    }
}

/// upsert 结果，标明记录是新建还是更新
#[derive(Debug, Clone, PartialEq)]
pub enum Upserted {
    Created(Submission),
    Updated(Submission),
}

impl Upserted {
    pub fn is_created(&self) -> bool {
        matches!(self, Upserted::Created(_))
    }

    pub fn submission(&self) -> &Submission {
        match self {
            Upserted::Created(s) | Upserted::Updated(s) => s,
        }
    }

    pub fn into_submission(self) -> Submission {
        match self {
            Upserted::Created(s) | Upserted::Updated(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::OnTime).unwrap(),
            "\"on-time\""
        );
        assert_eq!(
            serde_json::from_str::<SubmissionStatus>("\"late\"").unwrap(),
            SubmissionStatus::Late
        );
        assert_eq!(
            serde_json::from_str::<SubmissionStatus>("\"graded\"").unwrap(),
            SubmissionStatus::Graded
        );
        assert_eq!(SubmissionStatus::OnTime.to_string(), "on-time");
    }

    #[test]
    fn test_submission_field_names() {
        let mut submission = Submission::pending("a1", "1");
        submission.progress = 40;
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["assignmentId"], "a1");
        assert_eq!(json["studentId"], "1");
        assert_eq!(json["status"], "on-time");
        assert!(json.get("grade").is_none());
        assert!(json.get("feedback").is_none());
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let submission: Submission =
            serde_json::from_str(r#"{"assignmentId":"a1","studentId":"2"}"#).unwrap();
        assert!(!submission.submitted);
        assert_eq!(submission.status, SubmissionStatus::OnTime);
        assert_eq!(submission.progress, 0);
    }

    #[test]
    fn test_upserted_accessors() {
        let created = Upserted::Created(Submission::pending("a1", "1"));
        assert!(created.is_created());
        assert_eq!(created.submission().student_id, "1");
        let updated = Upserted::Updated(Submission::pending("a1", "2"));
        assert!(!updated.is_created());
        assert_eq!(updated.into_submission().student_id, "2");
    }
}
