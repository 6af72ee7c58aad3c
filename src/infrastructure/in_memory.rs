use crate::domain::ports::UserUpdateStore;
use crate::domain::user::User;
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq)]
struct UpdateRecord {
    updated_at: DateTime<Utc>,
    user_id: String,
    user: User,
}

/// A thread-safe in-memory store for user-info updates.
///
/// Uses `Arc<RwLock<HashMap>>` for shared concurrent access. Update ids are
/// a monotonically increasing counter; reverting removes the record.
#[derive(Default, Clone)]
pub struct InMemoryUserUpdateStore {
    updates: Arc<RwLock<HashMap<String, UpdateRecord>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryUserUpdateStore {
    /// Creates a new, empty in-memory update store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the snapshot recorded under an update id.
    pub async fn get(&self, update_id: &str) -> Option<(DateTime<Utc>, String, User)> {
        let updates = self.updates.read().await;
        updates
            .get(update_id)
            .map(|r| (r.updated_at, r.user_id.clone(), r.user.clone()))
    }

    /// Number of updates currently held (reverted ones excluded).
    pub async fn len(&self) -> usize {
        self.updates.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.updates.read().await.is_empty()
    }
}

#[async_trait]
impl UserUpdateStore for InMemoryUserUpdateStore {
    async fn update_user_info(
        &self,
        updated_at: DateTime<Utc>,
        user_id: &str,
        user: User,
    ) -> Result<String, StoreError> {
        let update_id = format!("update-{}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let record = UpdateRecord {
            updated_at,
            user_id: user_id.to_string(),
            user,
        };
        let mut updates = self.updates.write().await;
        updates.insert(update_id.clone(), record);
        Ok(update_id)
    }

    async fn revert_update(&self, update_id: &str) -> Result<(), StoreError> {
        let mut updates = self.updates.write().await;
        updates
            .remove(update_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::UnknownUpdateId(update_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Tier;

    #[tokio::test]
    async fn test_update_returns_distinct_ids() {
        let store = InMemoryUserUpdateStore::new();
        let user = User::new("1", "test user", "testuser@gmail.com", Tier::Basic);

        let first = store
            .update_user_info(Utc::now(), "1", user.clone())
            .await
            .unwrap();
        let second = store.update_user_info(Utc::now(), "1", user).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_get_returns_stored_snapshot() {
        let store = InMemoryUserUpdateStore::new();
        let user = User::new("9", "test user", "testuser@gmail.com", Tier::Premium);
        let at = Utc::now();

        let id = store
            .update_user_info(at, "9", user.clone())
            .await
            .unwrap();
        let (stored_at, stored_id, stored_user) = store.get(&id).await.unwrap();
        assert_eq!(stored_at, at);
        assert_eq!(stored_id, "9");
        assert_eq!(stored_user, user);

        assert!(store.get("update-999").await.is_none());
    }

    #[tokio::test]
    async fn test_revert_removes_update() {
        let store = InMemoryUserUpdateStore::new();
        let user = User::new("1", "test user", "testuser@gmail.com", Tier::Basic);

        let id = store.update_user_info(Utc::now(), "1", user).await.unwrap();
        store.revert_update(&id).await.unwrap();
        assert!(store.is_empty().await);

        // Reverting twice surfaces the unknown id.
        assert_eq!(
            store.revert_update(&id).await,
            Err(StoreError::UnknownUpdateId(id))
        );
    }
}
