use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use super::{ImageStore, MediaError};

/// Bucket stored as a flat directory `<root>/<bucket>/`.
#[derive(Debug, Clone)]
pub struct LocalBucket {
    bucket: String,
    dir: PathBuf,
    public_base: String,
}

impl LocalBucket {
    /// Open the bucket directory, creating it if needed.
    pub async fn open(
        root: impl AsRef<Path>,
        bucket: &str,
        public_base: &str,
    ) -> Result<Self, MediaError> {
        let dir = root.as_ref().join(bucket);
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self {
            bucket: bucket.to_string(),
            dir,
            public_base: public_base.trim_end_matches('/').to_string(),
        })
    }

    /// Directory holding the objects.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn object_path(&self, path: &str) -> Result<PathBuf, MediaError> {
        let invalid = path.is_empty()
            || path.starts_with('.')
            || path.contains(['/', '\\'])
            || path.contains("..");
        if invalid {
            return Err(MediaError::InvalidPath(path.to_string()));
        }
        Ok(self.dir.join(path))
    }
}

#[async_trait]
impl ImageStore for LocalBucket {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<(), MediaError> {
        let target = self.object_path(path)?;
        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await
        {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(MediaError::AlreadyExists(path.to_string()))
            }
            Err(err) => return Err(err.into()),
        };
        file.write_all(bytes).await?;
        file.flush().await?;
        Ok(())
    }

    async fn remove(&self, path: &str) -> Result<(), MediaError> {
        let target = self.object_path(path)?;
        match tokio::fs::remove_file(&target).await {
            Ok(()) => {
                tracing::info!(bucket = %self.bucket, %path, "image removed");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/storage/{}/{}", self.public_base, self.bucket, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::upload_image;
    use uuid::Uuid;

    async fn bucket() -> LocalBucket {
        let root = std::env::temp_dir().join(format!("studio-media-{}", Uuid::new_v4()));
        LocalBucket::open(root, "site-images", "https://nounstudio.dz/")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn upload_then_remove() {
        let bucket = bucket().await;
        let image = upload_image(&bucket, "façade.webp", Some("image/webp"), b"RIFF")
            .await
            .unwrap();

        assert!(image.path.ends_with("-fa-ade.webp"));
        assert_eq!(
            image.src,
            format!("https://nounstudio.dz/storage/site-images/{}", image.path)
        );
        let stored = tokio::fs::read(bucket.dir().join(&image.path)).await.unwrap();
        assert_eq!(stored, b"RIFF");

        bucket.remove(&image.path).await.unwrap();
        assert!(!bucket.dir().join(&image.path).exists());
        // Already gone.
        bucket.remove(&image.path).await.unwrap();

        let _ = tokio::fs::remove_dir_all(bucket.dir()).await;
    }

    #[tokio::test]
    async fn never_overwrites() {
        let bucket = bucket().await;
        bucket.upload("logo.png", b"one").await.unwrap();
        let err = bucket.upload("logo.png", b"two").await.unwrap_err();
        assert!(matches!(err, MediaError::AlreadyExists(_)));
        let stored = tokio::fs::read(bucket.dir().join("logo.png")).await.unwrap();
        assert_eq!(stored, b"one");

        let _ = tokio::fs::remove_dir_all(bucket.dir()).await;
    }

    #[tokio::test]
    async fn rejects_paths_outside_bucket() {
        let bucket = bucket().await;
        for path in ["../secret", "a/b.png", ".env", ""] {
            assert!(matches!(
                bucket.remove(path).await,
                Err(MediaError::InvalidPath(_))
            ));
        }
    }

    #[tokio::test]
    async fn rejects_non_images() {
        let bucket = bucket().await;
        let err = upload_image(&bucket, "notes.txt", Some("text/plain"), b"hi")
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::UnsupportedType(_)));
        let err = upload_image(&bucket, "x.png", Some("image/png"), b"")
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::Empty));
    }
}
