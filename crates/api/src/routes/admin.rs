//! Dashboard and page editors.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use studio_cms_core::content::architecture::ArchitecturePageContent;
use studio_cms_core::content::branding::BrandingPageContent;
use studio_cms_core::content::home::HomePageContent;
use studio_cms_core::content::portfolio::PortfolioPageContent;
use studio_cms_core::content::{PageContent, PageKey, SectionKey};
use studio_cms_core::dashboard::{load_dashboard, PageCard};
use studio_cms_core::editor::{EditorSession, SaveState, SectionStatus};

use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(dashboard))
        .route("/admin/{page}", get(editor))
        .route("/admin/{page}/{section}", axum::routing::put(save))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub pages: Vec<PageCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

async fn dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    let (pages, error) = load_dashboard(state.content()).await;
    Json(DashboardView { pages, error })
}

async fn editor(State(state): State<AppState>, Path(page): Path<String>) -> ApiResult<Response> {
    let page: PageKey = page.parse()?;
    Ok(match page {
        PageKey::Home => editor_view::<HomePageContent>(&state).await,
        PageKey::Portfolio => editor_view::<PortfolioPageContent>(&state).await,
        PageKey::Architecture => editor_view::<ArchitecturePageContent>(&state).await,
        PageKey::Branding => editor_view::<BrandingPageContent>(&state).await,
    })
}

async fn editor_view<C: PageContent>(state: &AppState) -> Response {
    let session = EditorSession::<C>::load(state.content()).await;
    Json(session.view()).into_response()
}

async fn save(
    State(state): State<AppState>,
    Path((page, section)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> ApiResult<Response> {
    let page: PageKey = page.parse()?;
    match page {
        PageKey::Home => save_section::<HomePageContent>(&state, &section, body).await,
        PageKey::Portfolio => save_section::<PortfolioPageContent>(&state, &section, body).await,
        PageKey::Architecture => {
            save_section::<ArchitecturePageContent>(&state, &section, body).await
        }
        PageKey::Branding => save_section::<BrandingPageContent>(&state, &section, body).await,
    }
}

/// Replace one section with the submitted value and persist it. The body
/// is that section's save state; other sections are untouched.
async fn save_section<C: PageContent>(
    state: &AppState,
    section: &str,
    value: Value,
) -> ApiResult<Response> {
    let section = C::parse_section(section)?;
    let mut session = EditorSession::new(C::defaults().clone());

    if let Err(err) = session.edit_section(section, value) {
        tracing::debug!(page = %C::PAGE, section = section.as_str(), error = %err, "rejected section content");
        return Ok(status_response(
            StatusCode::BAD_REQUEST,
            section.as_str(),
            SaveState::failed(err.to_string()),
        ));
    }

    let saved = session.save(state.content(), section).await.clone();
    let status = if saved.is_failed() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    Ok(status_response(status, section.as_str(), saved))
}

fn status_response(status: StatusCode, section: &'static str, state: SaveState) -> Response {
    (status, Json(SectionStatus { section, state })).into_response()
}
