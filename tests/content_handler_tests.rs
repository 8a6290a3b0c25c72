use bson::oid::ObjectId;
use mockall::mock;

use portfolio_api::entities::experience::{Experience, SubmitExperienceRequest};
use portfolio_api::entities::project::{Project, SubmitProjectRequest};
use portfolio_api::errors::AppError;
use portfolio_api::media::{ImageUpload, MediaError, MediaGateway};
use portfolio_api::repositories::experience::ExperienceRepository;
use portfolio_api::repositories::project::ProjectRepository;
use portfolio_api::use_cases::content::ContentHandler;

mock! {
    pub ExperienceRepo {}

    #[async_trait::async_trait]
    impl ExperienceRepository for ExperienceRepo {
        async fn create(&self, experience: &Experience) -> Result<ObjectId, AppError>;
        async fn list(&self) -> Result<Vec<Experience>, AppError>;
    }
}

mock! {
    pub ProjectRepo {}

    #[async_trait::async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn create(&self, project: &Project) -> Result<ObjectId, AppError>;
        async fn list_newest_first(&self) -> Result<Vec<Project>, AppError>;
    }
}

mock! {
    pub MediaUploader {}

    #[async_trait::async_trait]
    impl MediaGateway for MediaUploader {
        async fn upload_image(&self, image: ImageUpload) -> Result<String, MediaError>;
    }
}

fn experience_request() -> SubmitExperienceRequest {
    SubmitExperienceRequest {
        company: " Acme Corp ".to_string(),
        position: "Backend Engineer".to_string(),
        location: "Remote".to_string(),
        start_date: "2021-03".to_string(),
        end_date: String::new(),
        present: true,
        description: "Built the billing service\n\n  Owned the deploy pipeline  ".to_string(),
        technologies: vec!["Rust".to_string(), "MongoDB".to_string()],
    }
}

fn project_request() -> SubmitProjectRequest {
    SubmitProjectRequest {
        title: "Inventory Tracker".to_string(),
        technologies: vec!["React".to_string(), "Rust".to_string()],
        description: "Tracks warehouse stock in real time".to_string(),
        features: "Live dashboard\nCSV export".to_string(),
        github_url: "https://github.com/example/inventory".to_string(),
        live_url: String::new(),
    }
}

#[tokio::test]
async fn experience_submission_is_normalized_before_storage() {
    let mut experiences = MockExperienceRepo::new();

    experiences
        .expect_create()
        .withf(|doc: &Experience| {
            doc.company == "Acme Corp"
                && doc.start == "Mar, 2021"
                && doc.end == "Present"
                && doc.description
                    == vec!["Built the billing service", "Owned the deploy pipeline"]
                && doc.technologies == vec!["Rust", "MongoDB"]
        })
        .returning(|_| Ok(ObjectId::new()));

    let handler = ContentHandler::new(experiences, MockProjectRepo::new(), MockMediaUploader::new());

    handler
        .submit_experience(experience_request())
        .await
        .expect("submission should succeed");
}

#[tokio::test]
async fn invalid_experience_never_reaches_storage() {
    let mut experiences = MockExperienceRepo::new();
    experiences.expect_create().never();

    let handler = ContentHandler::new(experiences, MockProjectRepo::new(), MockMediaUploader::new());

    let mut request = experience_request();
    request.company = String::new();
    let result = handler.submit_experience(request).await;

    match result {
        Err(AppError::InvalidInput(msg)) => assert_eq!(msg, "Company name is required"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn project_without_image_skips_the_uploader() {
    let mut projects = MockProjectRepo::new();
    let mut media = MockMediaUploader::new();
    let inserted_id = ObjectId::new();

    media.expect_upload_image().never();
    projects
        .expect_create()
        .withf(|doc: &Project| doc.title == "Inventory Tracker" && doc.image_url.is_none())
        .returning(move |_| Ok(inserted_id));

    let handler = ContentHandler::new(MockExperienceRepo::new(), projects, media);

    let id = handler
        .submit_project(project_request(), None)
        .await
        .expect("submission should succeed");
    assert_eq!(id, inserted_id);
}

#[tokio::test]
async fn uploaded_image_url_lands_on_the_stored_project() {
    let mut projects = MockProjectRepo::new();
    let mut media = MockMediaUploader::new();

    media
        .expect_upload_image()
        .withf(|image: &ImageUpload| {
            image.bytes == b"fake png bytes" && image.filename.as_deref() == Some("shot.png")
        })
        .returning(|_| Ok("https://res.cloudinary.com/demo/image/upload/shot.jpg".to_string()));

    projects
        .expect_create()
        .withf(|doc: &Project| {
            doc.image_url.as_deref()
                == Some("https://res.cloudinary.com/demo/image/upload/shot.jpg")
        })
        .returning(|_| Ok(ObjectId::new()));

    let handler = ContentHandler::new(MockExperienceRepo::new(), projects, media);

    let image = ImageUpload {
        bytes: b"fake png bytes".to_vec(),
        filename: Some("shot.png".to_string()),
    };
    handler
        .submit_project(project_request(), Some(image))
        .await
        .expect("submission should succeed");
}

#[tokio::test]
async fn failed_upload_aborts_the_submission() {
    let mut projects = MockProjectRepo::new();
    let mut media = MockMediaUploader::new();

    media
        .expect_upload_image()
        .returning(|_| Err(MediaError::Rejected(401, "bad signature".to_string())));
    projects.expect_create().never();

    let handler = ContentHandler::new(MockExperienceRepo::new(), projects, media);

    let image = ImageUpload {
        bytes: b"fake png bytes".to_vec(),
        filename: None,
    };
    let result = handler.submit_project(project_request(), Some(image)).await;

    assert!(matches!(result, Err(AppError::UploadFailed)));
}

#[tokio::test]
async fn invalid_project_skips_upload_and_storage() {
    let mut projects = MockProjectRepo::new();
    let mut media = MockMediaUploader::new();

    media.expect_upload_image().never();
    projects.expect_create().never();

    let handler = ContentHandler::new(MockExperienceRepo::new(), projects, media);

    let mut request = project_request();
    request.technologies = vec!["  ".to_string()];
    let image = ImageUpload {
        bytes: b"fake png bytes".to_vec(),
        filename: None,
    };
    let result = handler.submit_project(request, Some(image)).await;

    match result {
        Err(AppError::InvalidInput(msg)) => {
            assert_eq!(msg, "Please select at least one technology")
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}
