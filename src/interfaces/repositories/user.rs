use async_trait::async_trait;
use bson::oid::ObjectId;
use mongodb::{bson::doc, Collection, Database};

use crate::{
    constants::USERS_COLLECTION,
    entities::user::User,
    errors::AppError,
    repositories::mongo_repo::MongoUserRepo,
};


#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn create_user(&self, user: &User) -> Result<ObjectId, AppError>;
}

impl MongoUserRepo {
    pub fn new(db: Database) -> Self {
        MongoUserRepo { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection(USERS_COLLECTION)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        self.db
            .run_command(doc! {"ping": 1})
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! {"email": email})
            .await
            .map_err(AppError::from)
    }

    async fn create_user(&self, user: &User) -> Result<ObjectId, AppError> {
        let result = self
            .collection()
            .insert_one(user)
            .await
            .map_err(AppError::from)?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("Inserted user has no ObjectId".to_string()))
    }
}
