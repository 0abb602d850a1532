use std::sync::Arc;

use crate::domain::{errors::ServiceError, models::User, repositories::UserRepository};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct UpdateUserRequest {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Full-record update. Returns `None` when no row matched the id.
    pub async fn execute(&self, request: UpdateUserRequest) -> Result<Option<User>, ServiceError> {
        let name = require(request.name)?;
        let email = require(request.email)?;

        Ok(self.repo.update(request.id, &name, &email).await?)
    }
}

fn require(value: Option<String>) -> Result<String, ServiceError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ServiceError::Validation("name and email are required".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::in_memory::InMemoryUserRepository;

    #[tokio::test]
    async fn unknown_id_returns_none_and_creates_nothing() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let usecase = UpdateUserUseCase::new(repo.clone());

        let updated = usecase
            .execute(UpdateUserRequest {
                id: 42,
                name: Some("Ana".to_string()),
                email: Some("ana@x.com".to_string()),
            })
            .await
            .unwrap();

        assert!(updated.is_none());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_missing_name() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let usecase = UpdateUserUseCase::new(repo);

        let result = usecase
            .execute(UpdateUserRequest {
                id: 1,
                name: None,
                email: Some("ana@x.com".to_string()),
            })
            .await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
