use async_trait::async_trait;
use bson::oid::ObjectId;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

use crate::{
    constants::PROJECTS_COLLECTION,
    entities::project::Project,
    errors::AppError,
    repositories::mongo_repo::MongoProjectRepo,
};


#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, project: &Project) -> Result<ObjectId, AppError>;
    async fn list_newest_first(&self) -> Result<Vec<Project>, AppError>;
}

impl MongoProjectRepo {
    pub fn new(db: Database) -> Self {
        MongoProjectRepo { db }
    }

    fn collection(&self) -> Collection<Project> {
        self.db.collection(PROJECTS_COLLECTION)
    }
}

#[async_trait]
impl ProjectRepository for MongoProjectRepo {
    async fn create(&self, project: &Project) -> Result<ObjectId, AppError> {
        let result = self
            .collection()
            .insert_one(project)
            .await
            .map_err(AppError::from)?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("Inserted entry has no ObjectId".to_string()))
    }

    async fn list_newest_first(&self) -> Result<Vec<Project>, AppError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! {"createdAt": -1})
            .await
            .map_err(AppError::from)?;

        cursor.try_collect().await.map_err(AppError::from)
    }
}
