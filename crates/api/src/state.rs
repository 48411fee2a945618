use std::sync::Arc;

use studio_cms_core::auth::SessionKeys;
use studio_cms_core::media::ImageStore;
use studio_cms_core::store::{ContentStore, ProfileStore};

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    content: Arc<dyn ContentStore>,
    profiles: Arc<dyn ProfileStore>,
    images: Arc<dyn ImageStore>,
    sessions: SessionKeys,
    config: AppConfig,
}

impl AppState {
    pub fn new(
        content: Arc<dyn ContentStore>,
        profiles: Arc<dyn ProfileStore>,
        images: Arc<dyn ImageStore>,
        config: AppConfig,
    ) -> Self {
        let sessions = SessionKeys::new(
            config.session_secret.as_bytes(),
            config.session_ttl,
        );
        Self {
            inner: Arc::new(InnerState {
                content,
                profiles,
                images,
                sessions,
                config,
            }),
        }
    }

    pub fn content(&self) -> &dyn ContentStore {
        self.inner.content.as_ref()
    }

    pub fn profiles(&self) -> &dyn ProfileStore {
        self.inner.profiles.as_ref()
    }

    pub fn images(&self) -> &dyn ImageStore {
        self.inner.images.as_ref()
    }

    pub fn sessions(&self) -> &SessionKeys {
        &self.inner.sessions
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
