use async_trait::async_trait;
use bson::oid::ObjectId;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

use crate::{
    constants::EXPERIENCES_COLLECTION,
    entities::experience::Experience,
    errors::AppError,
    repositories::mongo_repo::MongoExperienceRepo,
};


#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create(&self, experience: &Experience) -> Result<ObjectId, AppError>;
    async fn list(&self) -> Result<Vec<Experience>, AppError>;
}

impl MongoExperienceRepo {
    pub fn new(db: Database) -> Self {
        MongoExperienceRepo { db }
    }

    fn collection(&self) -> Collection<Experience> {
        self.db.collection(EXPERIENCES_COLLECTION)
    }
}

#[async_trait]
impl ExperienceRepository for MongoExperienceRepo {
    async fn create(&self, experience: &Experience) -> Result<ObjectId, AppError> {
        let result = self
            .collection()
            .insert_one(experience)
            .await
            .map_err(AppError::from)?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("Inserted entry has no ObjectId".to_string()))
    }

    /// Returns entries in natural order; display ordering is applied by
    /// the caller.
    async fn list(&self) -> Result<Vec<Experience>, AppError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(AppError::from)?;

        cursor.try_collect().await.map_err(AppError::from)
    }
}
