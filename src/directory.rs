// Personnel directory: users grouped for the assignment pickers

use crate::api::{ApiError, JobsApi};
use crate::workflow::{Role, User};
use tracing::debug;

/// Users that belong in a picker for `role`, in backend order.
pub fn users_with_role(users: &[User], role: Role) -> Vec<User> {
    users
        .iter()
        .filter(|user| user.role() == Some(role))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Personnel {
    pub users: Vec<User>,
}

impl Personnel {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Fetches `GET /users` once; filtering happens locally.
    pub async fn load(api: &dyn JobsApi) -> Result<Self, ApiError> {
        let users = api.list_users().await?;
        debug!(count = users.len(), "Loaded personnel directory");
        Ok(Self::new(users))
    }

    pub fn surveyors(&self) -> Vec<User> {
        users_with_role(&self.users, Role::Surveyor)
    }

    pub fn drillers(&self) -> Vec<User> {
        users_with_role(&self.users, Role::Driller)
    }

    pub fn find(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == user_id)
    }
}
