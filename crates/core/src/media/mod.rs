//! Image bucket used by the editors for uploaded pictures.

pub mod local;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

pub use local::LocalBucket;

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("invalid object path: {0}")]
    InvalidPath(String),

    #[error("object already exists: {0}")]
    AlreadyExists(String),

    #[error("unsupported content type: {0}")]
    UnsupportedType(String),

    #[error("empty upload")]
    Empty,

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a successful upload, as stored in an `ImageRef`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedImage {
    pub src: String,
    pub path: String,
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    fn bucket(&self) -> &str;

    /// Write a new object. Fails with `AlreadyExists` rather than overwrite.
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<(), MediaError>;

    /// Delete an object. Deleting a missing object is not an error.
    async fn remove(&self, path: &str) -> Result<(), MediaError>;

    fn public_url(&self, path: &str) -> String;
}

/// Replace every character outside `[A-Za-z0-9._-]` with `-`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Fresh object path for an uploaded file.
pub fn storage_path(file_name: &str) -> String {
    format!("{}-{}", Uuid::new_v4(), sanitize_file_name(file_name))
}

/// Store an uploaded image under a generated path.
pub async fn upload_image(
    store: &dyn ImageStore,
    file_name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<UploadedImage, MediaError> {
    match content_type {
        Some(ct) if ct.starts_with("image/") => {}
        other => {
            return Err(MediaError::UnsupportedType(
                other.unwrap_or("unknown").to_string(),
            ))
        }
    }
    if bytes.is_empty() {
        return Err(MediaError::Empty);
    }

    let path = storage_path(file_name);
    store.upload(&path, bytes).await?;
    tracing::info!(bucket = store.bucket(), %path, size = bytes.len(), "image uploaded");

    Ok(UploadedImage {
        src: store.public_url(&path),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_file_names() {
        assert_eq!(sanitize_file_name("villa été (1).JPG"), "villa--t---1-.JPG");
        assert_eq!(sanitize_file_name("logo_v2-final.png"), "logo_v2-final.png");
        assert_eq!(sanitize_file_name("a/b\\c"), "a-b-c");
    }

    #[test]
    fn storage_path_prefixes_uuid() {
        let path = storage_path("plan masse.png");
        let (id, rest) = path.split_at(36);
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(rest, "-plan-masse.png");
        assert_ne!(storage_path("x.png"), storage_path("x.png"));
    }
}
