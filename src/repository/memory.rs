use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::UserRepository;
use crate::{
    models::{user_id_bson, user_id_to_string, User, UserDocument},
    utils::error::AppError,
};

/// In-memory stand-in for the `users` collection, keyed the same way MongoDB is.
#[derive(Default)]
pub struct InMemoryUserRepository {
    documents: RwLock<BTreeMap<String, UserDocument>>,
}

/// Same normalization the `_id` goes through in MongoDB.
fn key(id: &str) -> String {
    user_id_to_string(&user_id_bson(id))
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> Result<User, AppError> {
        let mut document = UserDocument::from(user);
        let id = document
            .id
            .get_or_insert_with(|| Bson::ObjectId(ObjectId::new()))
            .clone();

        self.documents
            .write()
            .await
            .insert(user_id_to_string(&id), document.clone());

        Ok(User::from(document))
    }

    async fn update(&self, user: User) -> Result<Option<User>, AppError> {
        let document = UserDocument::from(user);
        let Some(id) = document.id.as_ref().map(user_id_to_string) else {
            return Ok(None);
        };

        let mut documents = self.documents.write().await;
        match documents.get_mut(&id) {
            Some(stored) => {
                *stored = document.clone();
                Ok(Some(User::from(document)))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let documents = self.documents.read().await;
        Ok(documents.values().cloned().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let documents = self.documents.read().await;
        Ok(documents.get(&key(id)).cloned().map(User::from))
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.documents.read().await.contains_key(&key(id)))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        self.documents.write().await.remove(&key(id));
        Ok(())
    }

    async fn ping(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_distinct_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(User::new("Alice", "R1")).await.unwrap();
        let second = repo.save(User::new("Bob", "R2")).await.unwrap();

        let first_id = first.user_id.unwrap();
        let second_id = second.user_id.unwrap();
        assert!(!first_id.is_empty());
        assert_ne!(first_id, second_id);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites() {
        let repo = InMemoryUserRepository::new();
        let mut saved = repo.save(User::new("Alice", "R1")).await.unwrap();

        saved.company = Some("Acme".into());
        saved.roll_number = None;
        repo.save(saved.clone()).await.unwrap();

        let id = saved.user_id.clone().unwrap();
        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found, saved);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_ids_miss() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_by_id("garbage").await.unwrap().is_none());
        assert!(!repo.exists_by_id("garbage").await.unwrap());
        assert!(repo.delete_by_id("garbage").await.is_ok());
    }

    #[tokio::test]
    async fn test_custom_string_id_round_trip() {
        let repo = InMemoryUserRepository::new();
        let custom = User {
            user_id: Some("R1-custom".into()),
            name: Some("Eve".into()),
            ..Default::default()
        };

        let saved = repo.save(custom.clone()).await.unwrap();
        assert_eq!(saved, custom);
        assert_eq!(repo.find_by_id("R1-custom").await.unwrap(), Some(custom));
        assert!(repo.exists_by_id("R1-custom").await.unwrap());

        repo.delete_by_id("R1-custom").await.unwrap();
        assert!(!repo.exists_by_id("R1-custom").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_does_not_resurrect_deleted() {
        let repo = InMemoryUserRepository::new();
        let mut saved = repo.save(User::new("Alice", "R1")).await.unwrap();
        let id = saved.user_id.clone().unwrap();

        saved.company = Some("Acme".into());
        assert_eq!(repo.update(saved.clone()).await.unwrap(), Some(saved.clone()));

        repo.delete_by_id(&id).await.unwrap();
        assert_eq!(repo.update(saved).await.unwrap(), None);
        assert!(!repo.exists_by_id(&id).await.unwrap());
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_delete_removes_document() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(User::new("Alice", "R1")).await.unwrap();
        let id = saved.user_id.unwrap();

        assert!(repo.exists_by_id(&id).await.unwrap());
        repo.delete_by_id(&id).await.unwrap();
        assert!(!repo.exists_by_id(&id).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
