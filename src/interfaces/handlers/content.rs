use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::MultipartForm;
use actix_web::{post, web, HttpResponse, Responder};

use crate::entities::experience::SubmitExperienceRequest;
use crate::entities::project::ProjectUpload;
use crate::errors::AppError;
use crate::infrastructure::media::ImageUpload;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

#[post("/experience")]
pub async fn submit_experience(
    _claims: AuthClaims,
    state: web::Data<AppState>,
    request: web::Json<SubmitExperienceRequest>,
) -> impl Responder {
    match state.content_handler.submit_experience(request.into_inner()).await {
        Ok(()) => {
            state.home_cache.invalidate();
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "message": "Experience added successfully",
            }))
        }
        Err(e) => submission_error(e, "Error adding experience"),
    }
}

#[post("/project")]
pub async fn submit_project(
    _claims: AuthClaims,
    state: web::Data<AppState>,
    form: MultipartForm<ProjectUpload>,
) -> impl Responder {
    let (request, image_part) = form.into_inner().into_parts();

    let image = match read_image(image_part).await {
        Ok(image) => image,
        Err(response) => return response,
    };

    match state.content_handler.submit_project(request, image).await {
        Ok(id) => {
            state.home_cache.invalidate();
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "message": "Project added successfully",
                "data": {"insertedId": id.to_hex()},
            }))
        }
        Err(e) => submission_error(e, "Error adding project"),
    }
}

/// Pulls the screenshot part off disk and sniffs its real type. An absent
/// or empty part simply means no image was attached.
async fn read_image(part: Option<TempFile>) -> Result<Option<ImageUpload>, HttpResponse> {
    let Some(file) = part else {
        return Ok(None);
    };
    if file.size == 0 {
        return Ok(None);
    }

    let bytes = match tokio::fs::read(file.file.path()).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to read uploaded file: {}", e);
            return Err(HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Error adding project",
            })));
        }
    };

    match infer::get(&bytes) {
        Some(kind) if kind.matcher_type() == infer::MatcherType::Image => {
            Ok(Some(ImageUpload { bytes, filename: file.file_name }))
        }
        _ => Err(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "message": "Uploaded file must be an image",
        }))),
    }
}

fn submission_error(e: AppError, fallback: &str) -> HttpResponse {
    match e {
        AppError::InvalidInput(message) => HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "message": message,
        })),
        AppError::UploadFailed => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "message": "Failed to upload image",
        })),
        other => {
            tracing::error!("Content submission failed: {}", other);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": fallback,
            }))
        }
    }
}
