use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use studio_cms_core::media::{upload_image, UploadedImage};
use tower_http::limit::RequestBodyLimitLayer;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes(max_upload_bytes: usize) -> Router<AppState> {
    let uploads = Router::new()
        .route("/admin/images", post(upload))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes));

    Router::new()
        .merge(uploads)
        .route("/admin/images/{*path}", delete(remove))
}

/// Store the multipart `file` field in the bucket.
async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<UploadedImage>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("image").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let image =
            upload_image(state.images(), &file_name, content_type.as_deref(), &bytes).await?;
        return Ok((StatusCode::CREATED, Json(image)));
    }
    Err(ApiError::BadRequest("missing `file` field".into()))
}

async fn remove(State(state): State<AppState>, Path(path): Path<String>) -> ApiResult<StatusCode> {
    state.images().remove(&path).await?;
    Ok(StatusCode::NO_CONTENT)
}
