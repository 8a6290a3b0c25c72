use chrono::Utc;
use serde::Serialize;

use crate::{
    domain::content::{self, HomePayload},
    domain::month::{end_rank, start_rank},
    entities::experience::ExperienceView,
    entities::project::ProjectView,
    errors::AppError,
    repositories::experience::ExperienceRepository,
    repositories::project::ProjectRepository,
};

pub struct PortfolioHandler<E, P>
where
    E: ExperienceRepository,
    P: ProjectRepository,
{
    pub experience_repo: E,
    pub project_repo: P,
}

impl<E, P> PortfolioHandler<E, P>
where
    E: ExperienceRepository,
    P: ProjectRepository,
{
    pub fn new(experience_repo: E, project_repo: P) -> Self {
        PortfolioHandler {
            experience_repo,
            project_repo,
        }
    }

    /// Assembles the whole home document: static sections plus both
    /// collections. Experience is ordered most recent first, with ongoing
    /// roles ranked at the current month and ties broken by start date.
    pub async fn home_payload(&self) -> Result<HomePayload, AppError> {
        let mut experiences = self.experience_repo.list().await?;
        experiences.sort_by(|a, b| {
            end_rank(&b.end)
                .cmp(&end_rank(&a.end))
                .then_with(|| start_rank(&b.start).cmp(&start_rank(&a.start)))
        });

        let projects = self.project_repo.list_newest_first().await?;

        Ok(HomePayload {
            profile: content::profile(),
            about: content::about(),
            skills: content::skills(),
            contact: content::contact(),
            technology_options: content::technology_options(),
            experience: experiences.iter().map(ExperienceView::from).collect(),
            projects: projects.iter().map(ProjectView::from).collect(),
            generated_at: Utc::now(),
        })
    }

    /// Raw dump of one content collection for remote inspection. Only the
    /// two content collections are reachable; in particular there is no
    /// name that dumps user accounts.
    pub async fn collection_dump(&self, name: &str) -> Result<serde_json::Value, AppError> {
        match name {
            "experiences" => {
                let docs = self.experience_repo.list().await?;
                dump_payload("experiences", &docs)
            }
            "projects" => {
                let docs = self.project_repo.list_newest_first().await?;
                dump_payload("projects", &docs)
            }
            _ => Err(AppError::InvalidInput("Collection not available".to_string())),
        }
    }
}

fn dump_payload<T: Serialize>(name: &str, docs: &[T]) -> Result<serde_json::Value, AppError> {
    let data = serde_json::to_value(docs)
        .map_err(|e| AppError::InternalError(format!("Serialization error: {}", e)))?;
    Ok(serde_json::json!({
        "message": "Hello from API route",
        "collection": name,
        "count": docs.len(),
        "data": data,
    }))
}
