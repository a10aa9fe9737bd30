//! 用户查询

use tracing::debug;

use super::{Store, USERS_KEY};
use crate::models::User;

impl Store {
    /// 按存储顺序返回全部用户
    pub fn get_all_users(&self) -> Vec<User> {
        let users: Vec<User> = self.load_collection(USERS_KEY);
        debug!("Loaded {} user(s)", users.len());
        users
    }

    pub fn find_user(&self, user_id: &str) -> Option<User> {
        self.get_all_users().into_iter().find(|u| u.id == user_id)
    }

    pub fn get_students(&self) -> Vec<User> {
        self.get_all_users()
            .into_iter()
            .filter(User::is_student)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::seeded_store;
    use super::*;

    #[test]
    fn test_users_keep_insertion_order() {
        let store = seeded_store();
        let ids: Vec<_> = store.get_all_users().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_find_user_and_students() {
        let store = seeded_store();
        assert_eq!(store.find_user("1").unwrap().name, "John Student");
        assert!(store.find_user("nope").is_none());

        let students = store.get_students();
        assert_eq!(students.len(), 2);
        assert!(students.iter().all(|u| u.is_student()));
    }

    #[test]
    fn test_empty_store_has_no_users() {
        let store = Store::in_memory();
        assert!(store.get_all_users().is_empty());
        assert!(store.get_students().is_empty());
    }
}
