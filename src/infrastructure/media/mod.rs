pub mod cloudinary;

pub use cloudinary::CloudinaryUploader;

use async_trait::async_trait;
use derive_more::Display;

/// Image bytes plus the client-supplied filename, handed over once the
/// content sniff has confirmed an actual image.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub filename: Option<String>,
}

#[derive(Debug, Display)]
pub enum MediaError {
    #[display("Upload request failed: {_0}")]
    Request(String),

    #[display("Upload rejected with status {_0}: {_1}")]
    Rejected(u16, String),

    #[display("Malformed upload response: {_0}")]
    Malformed(String),
}

#[async_trait]
pub trait MediaGateway: Send + Sync {
    /// Stores the image and returns its public URL.
    async fn upload_image(&self, image: ImageUpload) -> Result<String, MediaError>;
}
