use std::sync::Arc;

use crate::domain::{errors::ServiceError, models::User, repositories::UserRepository};

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i32) -> Result<Option<User>, ServiceError> {
        Ok(self.repo.get(id).await?)
    }
}
