use std::sync::Arc;

use crate::domain::{errors::ServiceError, repositories::UserRepository};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Succeeds whether or not a row existed.
    pub async fn execute(&self, id: i32) -> Result<(), ServiceError> {
        Ok(self.repo.delete(id).await?)
    }
}
