//! Public pages, rendered as JSON view models of the merged content.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use studio_cms_core::content::architecture::ArchitecturePageContent;
use studio_cms_core::content::branding::BrandingPageContent;
use studio_cms_core::content::contact::{contact_page, ContactPage};
use studio_cms_core::content::home::HomePageContent;
use studio_cms_core::content::portfolio::{PortfolioPageContent, PreviewImage};
use studio_cms_core::content::PageContent;
use studio_cms_core::store::ContentStore;

use crate::state::AppState;

/// Banner shown when stored content could not be fetched.
pub const DEFAULTS_NOTICE: &str = "Content is temporarily unavailable; showing default content.";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/architecture", get(architecture))
        .route("/branding", get(branding))
        .route("/realisations", get(realisations))
        .route("/contact", get(contact))
        .route("/sitemap.xml", get(sitemap))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<C> {
    pub content: C,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub content: HomePageContent,
    pub gallery_preview: Vec<PreviewImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

/// Merged content of a page; pure defaults when the fetch fails.
async fn load_page<C: PageContent>(store: &dyn ContentStore) -> (C, bool) {
    match store.section_entries(C::PAGE).await {
        Ok(entries) => (C::merge_entries(&entries), true),
        Err(err) => {
            tracing::warn!(page = %C::PAGE, error = %err, "serving default content");
            (C::defaults().clone(), false)
        }
    }
}

fn notice(loaded: bool) -> Option<&'static str> {
    (!loaded).then_some(DEFAULTS_NOTICE)
}

async fn page_view<C: PageContent>(state: &AppState) -> Json<PageView<C>> {
    let (content, loaded) = load_page::<C>(state.content()).await;
    Json(PageView {
        content,
        notice: notice(loaded),
    })
}

async fn home(State(state): State<AppState>) -> Json<HomeView> {
    let ((content, home_loaded), (portfolio, portfolio_loaded)) = tokio::join!(
        load_page::<HomePageContent>(state.content()),
        load_page::<PortfolioPageContent>(state.content()),
    );
    Json(HomeView {
        content,
        gallery_preview: portfolio.preview_images(),
        notice: notice(home_loaded && portfolio_loaded),
    })
}

async fn architecture(State(state): State<AppState>) -> Json<PageView<ArchitecturePageContent>> {
    page_view(&state).await
}

async fn branding(State(state): State<AppState>) -> Json<PageView<BrandingPageContent>> {
    page_view(&state).await
}

async fn realisations(State(state): State<AppState>) -> Json<PageView<PortfolioPageContent>> {
    page_view(&state).await
}

async fn contact() -> Json<&'static ContactPage> {
    Json(contact_page())
}

struct SitemapEntry {
    path: &'static str,
    change_frequency: &'static str,
    priority: &'static str,
}

const SITEMAP: [SitemapEntry; 5] = [
    SitemapEntry { path: "", change_frequency: "weekly", priority: "1.0" },
    SitemapEntry { path: "/architecture", change_frequency: "monthly", priority: "0.9" },
    SitemapEntry { path: "/branding", change_frequency: "monthly", priority: "0.9" },
    SitemapEntry { path: "/realisations", change_frequency: "weekly", priority: "0.8" },
    SitemapEntry { path: "/contact", change_frequency: "monthly", priority: "0.8" },
];

pub fn sitemap_xml(site_url: &str, last_modified: &str) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in &SITEMAP {
        xml.push_str(&format!(
            "  <url>\n    <loc>{site_url}{}</loc>\n    <lastmod>{last_modified}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            entry.path, entry.change_frequency, entry.priority,
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap_xml(&state.config().site_url, &today),
    )
}
