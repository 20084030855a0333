// ==================== USER REPOSITORY ====================
// Adaptador da collection `users`: save / find / exists / delete

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;

use crate::{
    database::MongoDB,
    models::{user_id_bson, User, UserDocument},
    utils::error::AppError,
};

#[cfg(test)]
pub mod memory;

#[cfg(test)]
pub use memory::InMemoryUserRepository;

pub const USERS_COLLECTION: &str = "users";

/// CRUD primitives over the user collection, keyed by `userId`.
///
/// A `userId` that parses as an ObjectId is stored as one; any other string
/// is stored as-is, so lookups accept both forms.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts when `user_id` is `None`, otherwise replaces (upsert) the
    /// document with that id. Returns the record with its id set.
    async fn save(&self, user: User) -> Result<User, AppError>;

    /// Replaces an existing document without upserting. `None` when no
    /// document with `user.user_id` exists anymore.
    async fn update(&self, user: User) -> Result<Option<User>, AppError>;

    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn exists_by_id(&self, id: &str) -> Result<bool, AppError>;

    /// Callers check existence first.
    async fn delete_by_id(&self, id: &str) -> Result<(), AppError>;

    /// Store reachability, used by `/health`.
    async fn ping(&self) -> bool;
}

pub struct MongoUserRepository {
    db: MongoDB,
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(db: MongoDB) -> Self {
        let collection = db.collection::<UserDocument>(USERS_COLLECTION);
        Self { db, collection }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn save(&self, user: User) -> Result<User, AppError> {
        let mut document = UserDocument::from(user);

        match document.id.clone() {
            Some(id) => {
                self.collection
                    .replace_one(doc! { "_id": id.clone() }, &document)
                    .upsert(true)
                    .await?;
                log::debug!("💾 Replaced user document {}", id);
            }
            None => {
                let result = self.collection.insert_one(&document).await?;
                log::debug!("💾 Inserted user document {}", result.inserted_id);
                document.id = Some(result.inserted_id);
            }
        }

        Ok(User::from(document))
    }

    async fn update(&self, user: User) -> Result<Option<User>, AppError> {
        let document = UserDocument::from(user);
        let Some(id) = document.id.clone() else {
            return Ok(None);
        };

        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &document)
            .await?;

        if result.matched_count == 0 {
            return Ok(None);
        }
        Ok(Some(User::from(document)))
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<UserDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let found = self
            .collection
            .find_one(doc! { "_id": user_id_bson(id) })
            .await?;
        Ok(found.map(User::from))
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, AppError> {
        let count = self
            .collection
            .count_documents(doc! { "_id": user_id_bson(id) })
            .limit(1)
            .await?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": user_id_bson(id) })
            .await?;
        log::debug!("🗑️  Deleted {} user document(s) for {}", result.deleted_count, id);
        Ok(())
    }

    async fn ping(&self) -> bool {
        self.db.health_check().await
    }
}
