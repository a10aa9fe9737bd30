//! 种子数据

use tracing::{debug, info, warn};

use super::{ASSIGNMENTS_KEY, SUBMISSIONS_KEY, Store, USERS_KEY};
use crate::errors::Result;
use crate::models::{Assignment, Submission, User, UserRole};

/// 固定的演示用户：两个学生、一个管理员
pub fn seed_users() -> Vec<User> {
    vec![
        User::new("1", "John Student", UserRole::Student),
        User::new("2", "Jane Student", UserRole::Student),
        User::new("3", "Prof. Admin", UserRole::Admin),
    ]
}

impl Store {
    /// 用户集合为空时写入种子用户，作业、提交集合不存在时写入空集合
    ///
    /// 每次启动都可以调用，已有用户时不做任何修改。读取失败直接返回错误，
    /// 不会在读失败时覆盖已有数据。返回是否写入了种子用户。
    pub fn initialize_seed_data(&self) -> Result<bool> {
        let users: Vec<User> = match self.backend().get(USERS_KEY)? {
            Some(raw) => serde_json::from_str::<Option<Vec<User>>>(&raw)
                .unwrap_or_else(|e| {
                    warn!("Users collection is corrupt: {}, reseeding users", e);
                    None
                })
                .unwrap_or_default(),
            None => Vec::new(),
        };
        if !users.is_empty() {
            debug!(
                "Store already has {} user(s), skipping seed data",
                users.len()
            );
            return Ok(false);
        }

        info!("No users found in store, writing seed data...");
        let seed = seed_users();
        self.save_collection(USERS_KEY, &seed)?;
        if self.backend().get(ASSIGNMENTS_KEY)?.is_none() {
            self.save_collection::<Assignment>(ASSIGNMENTS_KEY, &[])?;
        }
        if self.backend().get(SUBMISSIONS_KEY)?.is_none() {
            self.save_collection::<Submission>(SUBMISSIONS_KEY, &[])?;
        }
        info!("Seed data written: {} user(s)", seed.len());

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{Fault, FaultyKeyStore, seeded_store};
    use super::*;
    use crate::models::CreateAssignmentRequest;

    fn store_with_submitted_homework() -> Store {
        let store = seeded_store();
        let hw = store
            .create_assignment(CreateAssignmentRequest {
                title: "HW1".into(),
                due_date: "2099-01-01".into(),
                ..Default::default()
            })
            .unwrap();
        store.submit_assignment(&hw.id, "1").unwrap();
        store
    }

    #[test]
    fn test_seed_populates_two_students_one_admin() {
        let store = Store::in_memory();
        assert!(store.initialize_seed_data().unwrap());

        let users = store.get_all_users();
        assert_eq!(users.len(), 3);
        assert_eq!(users.iter().filter(|u| u.is_student()).count(), 2);
        assert_eq!(users.iter().filter(|u| u.is_admin()).count(), 1);
        assert!(store.get_all_assignments().is_empty());
    }

    #[test]
    fn test_seed_is_idempotent() {
        let store = Store::in_memory();
        assert!(store.initialize_seed_data().unwrap());
        store
            .create_assignment(CreateAssignmentRequest {
                title: "HW1".into(),
                due_date: "2099-01-01".into(),
                ..Default::default()
            })
            .unwrap();

        assert!(!store.initialize_seed_data().unwrap());
        assert_eq!(store.get_all_users().len(), 3);
        // 已有数据不会被清空
        assert_eq!(store.get_all_assignments().len(), 1);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let users = seed_users();
        let mut ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn test_users_read_failure_keeps_existing_data() {
        let store = store_with_submitted_homework();
        let broken = FaultyKeyStore::wrap(&store, USERS_KEY, Fault::Read);

        let err = broken.initialize_seed_data().unwrap_err();
        assert_eq!(err.code(), "E004");
        assert_eq!(broken.get_all_assignments().len(), 1);
        assert_eq!(broken.get_submissions_by_student("1").len(), 1);
    }

    #[test]
    fn test_corrupt_users_reseeds_without_touching_assignments() {
        let store = store_with_submitted_homework();
        store.backend().set(USERS_KEY, "{oops").unwrap();

        assert!(store.initialize_seed_data().unwrap());
        assert_eq!(store.get_all_users().len(), 3);
        assert_eq!(store.get_all_assignments().len(), 1);
        assert_eq!(store.get_submissions_by_student("1").len(), 1);
    }
}
