//! 当前登录用户

use tracing::{debug, info, warn};

use super::{CURRENT_USER_KEY, Store};
use crate::errors::{Result, TrackerError};
use crate::models::User;

impl Store {
    /// 读取当前会话用户，未登录或用户已不存在时返回 None
    pub fn get_current_user(&self) -> Option<User> {
        let raw = match self.backend().get(CURRENT_USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read current user: {}", e);
                return None;
            }
        };

        let user_id = match serde_json::from_str::<Option<String>>(&raw) {
            Ok(Some(id)) => id,
            Ok(None) => return None,
            Err(e) => {
                warn!("Current user pointer is corrupt: {}", e);
                return None;
            }
        };

        let user = self.find_user(&user_id);
        if user.is_none() {
            debug!("Current user '{}' no longer exists", user_id);
        }
        user
    }

    pub fn set_current_user(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(&user.id)?;
        self.backend().set(CURRENT_USER_KEY, &raw)?;
        info!("User {} ({}) logged in", user.id, user.role);
        Ok(())
    }

    /// 退出登录
    pub fn clear_current_user(&self) -> Result<()> {
        self.backend().remove(CURRENT_USER_KEY)?;
        info!("Current user cleared");
        Ok(())
    }

    /// 按 ID 选择用户登录
    pub fn login(&self, user_id: &str) -> Result<User> {
        let user = self
            .find_user(user_id)
            .ok_or_else(|| TrackerError::not_found(format!("User {user_id} not found")))?;
        self.set_current_user(&user)?;
        Ok(user)
    }
}
