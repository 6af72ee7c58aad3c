use chrono::Utc;
use tierpay::domain::ports::{UserUpdateStore, UserUpdateStoreBox};
use tierpay::domain::user::{Tier, User};
use tierpay::error::StoreError;
use tierpay::infrastructure::in_memory::InMemoryUserUpdateStore;

#[tokio::test]
async fn test_store_as_trait_object() {
    let store: UserUpdateStoreBox = Box::new(InMemoryUserUpdateStore::new());
    let user = User::new("42", "test user", "testuser@gmail.com", Tier::Basic);

    // Verify Send + Sync by driving the boxed store from a spawned task.
    let handle = tokio::spawn(async move {
        let id = store
            .update_user_info(Utc::now(), "42", user)
            .await
            .unwrap();
        store.revert_update(&id).await.unwrap();
        store.revert_update(&id).await
    });

    let second_revert = handle.await.unwrap();
    assert!(matches!(second_revert, Err(StoreError::UnknownUpdateId(_))));
}

#[tokio::test]
async fn test_updates_are_independent() {
    let store = InMemoryUserUpdateStore::new();
    let user = User::new("7", "test user", "testuser@gmail.com", Tier::Premium);

    let first = store
        .update_user_info(Utc::now(), "7", user.clone())
        .await
        .unwrap();
    let second = store
        .update_user_info(Utc::now(), "7", user)
        .await
        .unwrap();

    store.revert_update(&first).await.unwrap();
    // The other update is untouched.
    assert_eq!(store.len().await, 1);
    store.revert_update(&second).await.unwrap();
    assert!(store.is_empty().await);
}
