use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::constants::{LONG_FIELD_MAX, SHORT_FIELD_MAX};
use crate::domain::month::{self, Month, PRESENT};
use crate::domain::text::{newline_list, normalize_lines};
use crate::errors::AppError;

// ───── Database Models ───────────────────────────────────────────────

/// One entry of the `experiences` collection. `description` is stored as
/// newline-joined text; the codec turns it into an ordered bullet list on
/// the way in and out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start: String,
    pub end: String,
    #[serde(with = "newline_list")]
    pub description: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

// ───── Input & Validation ───────────────────────────────────────────

/// Raw submission payload. Fields default to empty so an absent field
/// surfaces as the matching validation message instead of a decode error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitExperienceRequest {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub location: String,
    /// Month-picker value, `YYYY-MM`.
    #[serde(default)]
    pub start_date: String,
    /// Month-picker value, `YYYY-MM`. Ignored when `present` is set.
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub present: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl SubmitExperienceRequest {
    /// Validates field by field in a fixed order, short-circuiting on the
    /// first failure, then normalizes into a storable document. Date
    /// ordering is only checked once every field has passed.
    pub fn to_document(&self) -> Result<Experience, AppError> {
        let company = required_short(&self.company, "Company name")?;
        let position = required_short(&self.position, "Position")?;
        let location = required_short(&self.location, "Location")?;

        let start = parse_month(&self.start_date, "Start date")?;
        let end = if self.present {
            None
        } else {
            Some(parse_month(&self.end_date, "End date")?)
        };

        let description = self.description.trim();
        if description.is_empty() {
            return Err(AppError::InvalidInput("Job description is required".into()));
        }
        if description.chars().count() > LONG_FIELD_MAX {
            return Err(AppError::InvalidInput(format!(
                "Job description must be {LONG_FIELD_MAX} characters or less"
            )));
        }

        if let Some(end) = end {
            if end < start {
                return Err(AppError::InvalidInput(
                    "End date cannot be before start date".into(),
                ));
            }
        }

        Ok(Experience {
            id: None,
            company,
            position,
            location,
            start: start.to_string(),
            end: end.map_or_else(|| PRESENT.to_string(), |m| m.to_string()),
            description: normalize_lines(description),
            technologies: self.technologies.clone(),
        })
    }
}

fn required_short(value: &str, label: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidInput(format!("{label} is required")));
    }
    if value.chars().count() > SHORT_FIELD_MAX {
        return Err(AppError::InvalidInput(format!(
            "{label} must be {SHORT_FIELD_MAX} characters or less"
        )));
    }
    Ok(value.to_string())
}

fn parse_month(value: &str, label: &str) -> Result<Month, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidInput(format!("{label} is required")));
    }
    Month::from_picker(value)
        .ok_or_else(|| AppError::InvalidInput(format!("{label} is not a valid month")))
}

// ───── API Response Models ──────────────────────────────────────────

/// Display shape of one experience card.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceView {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

impl From<&Experience> for ExperienceView {
    fn from(exp: &Experience) -> Self {
        ExperienceView {
            title: exp.position.clone(),
            company: exp.company.clone(),
            period: month::period(&exp.start, &exp.end),
            location: exp.location.clone(),
            description: exp.description.clone(),
            technologies: exp.technologies.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubmitExperienceRequest {
        SubmitExperienceRequest {
            company: "Acme Corp".into(),
            position: "Backend Engineer".into(),
            location: "Remote".into(),
            start_date: "2021-03".into(),
            end_date: "2023-06".into(),
            present: false,
            description: "Built the billing service\nOwned the deploy pipeline".into(),
            technologies: vec!["Rust".into(), "PostgreSQL".into()],
        }
    }

    fn message(result: Result<Experience, AppError>) -> String {
        match result {
            Err(AppError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn accepts_a_complete_submission() {
        let doc = valid_request().to_document().unwrap();
        assert_eq!(doc.company, "Acme Corp");
        assert_eq!(doc.start, "Mar, 2021");
        assert_eq!(doc.end, "Jun, 2023");
        assert_eq!(
            doc.description,
            vec!["Built the billing service", "Owned the deploy pipeline"]
        );
    }

    #[test]
    fn company_is_checked_first() {
        let mut request = valid_request();
        request.company = "  ".into();
        request.position = String::new();
        assert_eq!(message(request.to_document()), "Company name is required");
    }

    #[test]
    fn fields_fail_in_declared_order() {
        let mut request = valid_request();
        request.position = String::new();
        assert_eq!(message(request.to_document()), "Position is required");

        let mut request = valid_request();
        request.location = String::new();
        assert_eq!(message(request.to_document()), "Location is required");

        let mut request = valid_request();
        request.start_date = String::new();
        assert_eq!(message(request.to_document()), "Start date is required");

        let mut request = valid_request();
        request.end_date = String::new();
        assert_eq!(message(request.to_document()), "End date is required");

        let mut request = valid_request();
        request.description = "\n ".into();
        assert_eq!(message(request.to_document()), "Job description is required");
    }

    #[test]
    fn length_caps_follow_each_presence_check() {
        let mut request = valid_request();
        request.company = "x".repeat(101);
        assert_eq!(
            message(request.to_document()),
            "Company name must be 100 characters or less"
        );

        let mut request = valid_request();
        request.description = "y".repeat(1001);
        assert_eq!(
            message(request.to_document()),
            "Job description must be 1000 characters or less"
        );
    }

    #[test]
    fn end_before_start_is_rejected_after_field_checks() {
        let mut request = valid_request();
        request.start_date = "2023-06".into();
        request.end_date = "2021-03".into();
        assert_eq!(
            message(request.to_document()),
            "End date cannot be before start date"
        );
    }

    #[test]
    fn same_month_range_is_allowed() {
        let mut request = valid_request();
        request.start_date = "2023-06".into();
        request.end_date = "2023-06".into();
        assert!(request.to_document().is_ok());
    }

    #[test]
    fn present_skips_the_end_date() {
        let mut request = valid_request();
        request.present = true;
        request.end_date = String::new();
        let doc = request.to_document().unwrap();
        assert_eq!(doc.end, "Present");
    }

    #[test]
    fn malformed_month_is_reported_in_field_order() {
        let mut request = valid_request();
        request.start_date = "March 2021".into();
        assert_eq!(message(request.to_document()), "Start date is not a valid month");
    }

    #[test]
    fn view_reshapes_for_display() {
        let doc = valid_request().to_document().unwrap();
        let view = ExperienceView::from(&doc);
        assert_eq!(view.title, "Backend Engineer");
        assert_eq!(view.period, "2021 - 2023");
    }

    #[test]
    fn bson_stores_description_as_one_string() {
        let doc = valid_request().to_document().unwrap();
        let stored = bson::to_document(&doc).unwrap();

        assert!(!stored.contains_key("_id"));
        assert_eq!(
            stored.get_str("description").unwrap(),
            "Built the billing service\nOwned the deploy pipeline"
        );

        let restored: Experience = bson::from_document(stored).unwrap();
        assert_eq!(restored.description, doc.description);
        assert_eq!(restored.technologies, doc.technologies);
    }
}
