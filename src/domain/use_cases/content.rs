use bson::oid::ObjectId;

use crate::{
    entities::experience::SubmitExperienceRequest,
    entities::project::SubmitProjectRequest,
    errors::AppError,
    infrastructure::media::{ImageUpload, MediaGateway},
    repositories::experience::ExperienceRepository,
    repositories::project::ProjectRepository,
};

pub struct ContentHandler<E, P, M>
where
    E: ExperienceRepository,
    P: ProjectRepository,
    M: MediaGateway,
{
    pub experience_repo: E,
    pub project_repo: P,
    pub media: M,
}

impl<E, P, M> ContentHandler<E, P, M>
where
    E: ExperienceRepository,
    P: ProjectRepository,
    M: MediaGateway,
{
    pub fn new(experience_repo: E, project_repo: P, media: M) -> Self {
        ContentHandler {
            experience_repo,
            project_repo,
            media,
        }
    }

    /// Validates, normalizes, and stores one experience entry.
    pub async fn submit_experience(
        &self,
        request: SubmitExperienceRequest,
    ) -> Result<(), AppError> {
        let document = request.to_document()?;
        self.experience_repo.create(&document).await?;
        Ok(())
    }

    /// Validates and stores one project, returning the new entry id. The
    /// image only goes out to the media service once the text fields have
    /// passed, and an upload failure aborts the insert so no entry is
    /// left pointing nowhere.
    pub async fn submit_project(
        &self,
        request: SubmitProjectRequest,
        image: Option<ImageUpload>,
    ) -> Result<ObjectId, AppError> {
        let mut document = request.to_document()?;

        if let Some(image) = image {
            let url = self.media.upload_image(image).await.map_err(|e| {
                tracing::error!("Image upload failed: {}", e);
                AppError::UploadFailed
            })?;
            document.image_url = Some(url);
        }

        self.project_repo.create(&document).await
    }
}
