use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "user.ts")]
pub enum UserRole {
    Student, // 学生
    Admin,   // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const ADMIN: &'static str = "admin";
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: student, admin"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

// 用户实体，只由种子数据创建
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }

    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
