use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{models::User, repositories::UserRepository};

#[derive(Default)]
struct Inner {
    users: BTreeMap<i32, User>,
    next_id: i32,
}

/// In-process stand-in for the Postgres repository; ids are assigned
/// sequentially the way SERIAL would.
#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> anyhow::Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn insert(&self, name: &str, email: &str) -> anyhow::Result<User> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let user = User {
            id: inner.next_id,
            name: Some(name.to_string()),
            email: Some(email.to_string()),
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, name: &str, email: &str) -> anyhow::Result<Option<User>> {
        let mut inner = self.inner.write().await;
        Ok(inner.users.get_mut(&id).map(|user| {
            user.name = Some(name.to_string());
            user.email = Some(email.to_string());
            user.clone()
        }))
    }

    async fn delete(&self, id: i32) -> anyhow::Result<()> {
        let mut inner = self.inner.write().await;
        inner.users.remove(&id);
        Ok(())
    }
}
