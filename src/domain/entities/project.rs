use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{LONG_FIELD_MAX, SHORT_FIELD_MAX};
use crate::domain::text::{newline_list, normalize_lines};
use crate::errors::AppError;

// ───── Database Models ───────────────────────────────────────────────

/// One entry of the `projects` collection. `description` and `features`
/// are newline-joined in storage and lists everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(with = "newline_list")]
    pub description: Vec<String>,
    #[serde(with = "newline_list")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

// ───── Input & Validation ───────────────────────────────────────────

/// Multipart submission form. Every text part is optional at the transport
/// level; missing parts fall through to the validation messages.
#[derive(Debug, MultipartForm)]
pub struct ProjectUpload {
    #[multipart(rename = "title")]
    pub title: Option<Text<String>>,

    #[multipart(rename = "technologies")]
    pub technologies: Option<Text<String>>,

    #[multipart(rename = "description")]
    pub description: Option<Text<String>>,

    #[multipart(rename = "features")]
    pub features: Option<Text<String>>,

    #[multipart(rename = "githubUrl")]
    pub github_url: Option<Text<String>>,

    #[multipart(rename = "liveUrl")]
    pub live_url: Option<Text<String>>,

    #[multipart(rename = "image", limit = "5MB")]
    pub image: Option<TempFile>,
}

impl ProjectUpload {
    /// Splits the form into the text payload and the optional image part.
    pub fn into_parts(self) -> (SubmitProjectRequest, Option<TempFile>) {
        let technologies = self
            .technologies
            .map(|t| parse_technologies(&t.into_inner()))
            .unwrap_or_default();
        let request = SubmitProjectRequest {
            title: text_value(self.title),
            technologies,
            description: text_value(self.description),
            features: text_value(self.features),
            github_url: text_value(self.github_url),
            live_url: text_value(self.live_url),
        };
        (request, self.image)
    }
}

fn text_value(field: Option<Text<String>>) -> String {
    field.map(|t| t.into_inner()).unwrap_or_default()
}

/// The technologies part carries a JSON-encoded string array. Anything
/// unparseable collapses to an empty list and fails the non-empty check.
fn parse_technologies(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

#[derive(Debug, Default)]
pub struct SubmitProjectRequest {
    pub title: String,
    pub technologies: Vec<String>,
    pub description: String,
    pub features: String,
    pub github_url: String,
    pub live_url: String,
}

impl SubmitProjectRequest {
    /// Validates in a fixed order with one message per failure, then
    /// normalizes into a storable document. Links are only checked when
    /// something was typed into them; empty links store as absent. The
    /// image URL starts out empty and is filled in after a successful
    /// upload, which only runs once the text fields have passed.
    pub fn to_document(&self) -> Result<Project, AppError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::InvalidInput("Project title is required".into()));
        }
        check_length(title, "Project title", SHORT_FIELD_MAX)?;

        let technologies: Vec<String> = self
            .technologies
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if technologies.is_empty() {
            return Err(AppError::InvalidInput(
                "Please select at least one technology".into(),
            ));
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(AppError::InvalidInput(
                "Project description is required".into(),
            ));
        }
        check_length(description, "Project description", LONG_FIELD_MAX)?;

        let features = self.features.trim();
        if features.is_empty() {
            return Err(AppError::InvalidInput("Project features are required".into()));
        }
        check_length(features, "Project features", LONG_FIELD_MAX)?;

        let github_url = optional_url(&self.github_url, "Please enter a valid GitHub URL")?;
        let live_url = optional_url(&self.live_url, "Please enter a valid live demo URL")?;

        Ok(Project {
            id: None,
            title: title.to_string(),
            technologies,
            description: normalize_lines(description),
            features: normalize_lines(features),
            github_url,
            live_url,
            image_url: None,
            created_at: Utc::now(),
        })
    }
}

fn check_length(value: &str, label: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::InvalidInput(format!(
            "{label} must be {max} characters or less"
        )));
    }
    Ok(())
}

fn optional_url(value: &str, message: &str) -> Result<Option<String>, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if Url::parse(value).is_err() {
        return Err(AppError::InvalidInput(message.into()));
    }
    Ok(Some(value.to_string()))
}

// ───── API Response Models ──────────────────────────────────────────

/// Display shape of one project card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub title: String,
    pub description: Vec<String>,
    pub features: Vec<String>,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        ProjectView {
            title: project.title.clone(),
            description: project.description.clone(),
            features: project.features.clone(),
            technologies: project.technologies.clone(),
            github_url: project.github_url.clone(),
            live_url: project.live_url.clone(),
            image_url: project.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubmitProjectRequest {
        SubmitProjectRequest {
            title: "Inventory Tracker".into(),
            technologies: vec!["React".into(), "Rust".into()],
            description: "Tracks warehouse stock in real time".into(),
            features: "Live dashboard\nCSV export".into(),
            github_url: "https://github.com/example/inventory".into(),
            live_url: String::new(),
        }
    }

    fn message(result: Result<Project, AppError>) -> String {
        match result {
            Err(AppError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn accepts_a_complete_submission() {
        let doc = valid_request().to_document().unwrap();
        assert_eq!(doc.title, "Inventory Tracker");
        assert_eq!(doc.features, vec!["Live dashboard", "CSV export"]);
        assert_eq!(doc.live_url, None);
        assert_eq!(doc.image_url, None);
    }

    #[test]
    fn fields_fail_in_declared_order() {
        let mut request = valid_request();
        request.title = " ".into();
        request.technologies.clear();
        assert_eq!(message(request.to_document()), "Project title is required");

        let mut request = valid_request();
        request.technologies.clear();
        assert_eq!(
            message(request.to_document()),
            "Please select at least one technology"
        );

        let mut request = valid_request();
        request.description = String::new();
        assert_eq!(
            message(request.to_document()),
            "Project description is required"
        );

        let mut request = valid_request();
        request.features = String::new();
        assert_eq!(message(request.to_document()), "Project features are required");
    }

    #[test]
    fn whitespace_only_technologies_count_as_none() {
        let mut request = valid_request();
        request.technologies = vec!["  ".into(), String::new()];
        assert_eq!(
            message(request.to_document()),
            "Please select at least one technology"
        );
    }

    #[test]
    fn links_are_validated_only_when_present() {
        let mut request = valid_request();
        request.github_url = "not a url".into();
        assert_eq!(
            message(request.to_document()),
            "Please enter a valid GitHub URL"
        );

        let mut request = valid_request();
        request.live_url = "example.com/demo".into();
        assert_eq!(
            message(request.to_document()),
            "Please enter a valid live demo URL"
        );

        let mut request = valid_request();
        request.github_url = String::new();
        request.live_url = "  ".into();
        let doc = request.to_document().unwrap();
        assert_eq!(doc.github_url, None);
        assert_eq!(doc.live_url, None);
    }

    #[test]
    fn title_cap_is_enforced() {
        let mut request = valid_request();
        request.title = "t".repeat(101);
        assert_eq!(
            message(request.to_document()),
            "Project title must be 100 characters or less"
        );
    }

    #[test]
    fn technologies_part_decodes_from_json() {
        assert_eq!(
            parse_technologies(r#"["React","Tailwind CSS"]"#),
            vec!["React", "Tailwind CSS"]
        );
        assert!(parse_technologies("not json").is_empty());
        assert!(parse_technologies("").is_empty());
    }
}
