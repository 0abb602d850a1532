use async_trait::async_trait;

use crate::domain::models::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<User>>;
    async fn get(&self, id: i32) -> anyhow::Result<Option<User>>;
    async fn insert(&self, name: &str, email: &str) -> anyhow::Result<User>;
    async fn update(&self, id: i32, name: &str, email: &str) -> anyhow::Result<Option<User>>;
    async fn delete(&self, id: i32) -> anyhow::Result<()>;
}
