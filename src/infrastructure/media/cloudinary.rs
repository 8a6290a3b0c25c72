use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart;
use serde::Deserialize;
use sha1::{Digest, Sha1};

use crate::settings::AppConfig;

use super::{ImageUpload, MediaError, MediaGateway};

/// Stored images are bounded to 800x600, recompressed, and delivered in
/// whatever format the requesting browser handles best.
const UPLOAD_TRANSFORMATION: &str = "c_limit,h_600,w_800/q_auto/f_auto";

#[derive(Clone)]
pub struct CloudinaryUploader {
    client: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    folder: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CloudinaryUploader {
    pub fn new(config: &AppConfig) -> Self {
        CloudinaryUploader {
            client: reqwest::Client::new(),
            cloud_name: config.cloudinary_cloud_name.clone(),
            api_key: config.cloudinary_api_key.clone(),
            api_secret: config.cloudinary_api_secret.clone(),
            folder: config.cloudinary_folder.clone(),
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

/// Signs the request the way the upload API verifies it: parameters
/// sorted by name, joined as `key=value` pairs with `&`, secret appended,
/// and the whole string SHA-1 hashed to lowercase hex. The file itself
/// and the api_key stay out of the signature.
fn sign_request(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by_key(|(key, _)| *key);

    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl MediaGateway for CloudinaryUploader {
    async fn upload_image(&self, image: ImageUpload) -> Result<String, MediaError> {
        let timestamp = Utc::now().timestamp().to_string();
        let params = [
            ("folder", self.folder.as_str()),
            ("timestamp", timestamp.as_str()),
            ("transformation", UPLOAD_TRANSFORMATION),
        ];
        let signature = sign_request(&params, &self.api_secret);

        let file_part = multipart::Part::bytes(image.bytes)
            .file_name(image.filename.unwrap_or_else(|| "upload".to_string()));
        let form = multipart::Form::new()
            .part("file", file_part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", self.folder.clone())
            .text("transformation", UPLOAD_TRANSFORMATION)
            .text("signature", signature);

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Cloudinary rejected upload ({}): {}", status, body);
            return Err(MediaError::Rejected(status.as_u16(), body));
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| MediaError::Malformed(e.to_string()))?;

        Ok(uploaded.secure_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_matches_known_vector() {
        let signature = sign_request(
            &[
                ("folder", "portfolio-projects"),
                ("timestamp", "1700000000"),
                ("transformation", UPLOAD_TRANSFORMATION),
            ],
            "test-secret",
        );
        assert_eq!(signature, "44a5ccbd0f7a6efa3c969ecdfd466c285605cd8d");
    }

    #[test]
    fn signature_is_order_independent() {
        let forward = sign_request(&[("a", "1"), ("b", "2")], "s");
        let reversed = sign_request(&[("b", "2"), ("a", "1")], "s");
        assert_eq!(forward, reversed);
    }

    #[test]
    fn signature_is_lowercase_hex() {
        let signature = sign_request(&[("timestamp", "1700000000")], "s");
        assert_eq!(signature.len(), 40);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
