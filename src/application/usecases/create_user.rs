use std::sync::Arc;

use crate::domain::{errors::ServiceError, models::User, repositories::UserRepository};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> Result<User, ServiceError> {
        let name = require(request.name)?;
        let email = require(request.email)?;

        Ok(self.repo.insert(&name, &email).await?)
    }
}

// Presence check only, mirroring the API contract: empty strings count as missing.
fn require(value: Option<String>) -> Result<String, ServiceError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ServiceError::Validation("name and email are required".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::in_memory::InMemoryUserRepository;

    fn usecase() -> (CreateUserUseCase, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        (CreateUserUseCase::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn creates_user_with_both_fields() {
        let (usecase, _repo) = usecase();

        let user = usecase
            .execute(CreateUserRequest {
                name: Some("Ana".to_string()),
                email: Some("ana@x.com".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name.as_deref(), Some("Ana"));
        assert_eq!(user.email.as_deref(), Some("ana@x.com"));
    }

    #[tokio::test]
    async fn rejects_missing_email_without_inserting() {
        let (usecase, repo) = usecase();

        let result = usecase
            .execute(CreateUserRequest {
                name: Some("Ana".to_string()),
                email: None,
            })
            .await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let (usecase, repo) = usecase();

        let result = usecase
            .execute(CreateUserRequest {
                name: Some(String::new()),
                email: Some("ana@x.com".to_string()),
            })
            .await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert!(repo.list().await.unwrap().is_empty());
    }
}
