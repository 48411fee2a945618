pub mod admin;
pub mod auth;
pub mod health;
pub mod media;
pub mod pages;

use axum::{middleware::from_fn_with_state, Router};
use tower_http::services::ServeDir;

use crate::middleware::admin_gate::admin_gate;
use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    let config = state.config();
    let bucket_dir = config.media_root.join(&config.media_bucket);
    let storage_path = format!("/storage/{}", config.media_bucket);

    let admin = Router::new()
        .merge(auth::routes())
        .merge(admin::routes())
        .merge(media::routes(config.max_upload_bytes))
        .route_layer(from_fn_with_state(state.clone(), admin_gate));

    Router::new()
        .merge(health::routes())
        .merge(pages::routes())
        .merge(admin)
        .nest_service(&storage_path, ServeDir::new(bucket_dir))
        .with_state(state)
}
