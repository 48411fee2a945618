//! Admin dashboard: one card per editable page with its override count
//! and last update.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::content::PageKey;
use crate::store::{ContentStore, RowStamp, StoreError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageSummary {
    pub count: usize,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCard {
    pub key: PageKey,
    pub name: &'static str,
    pub description: &'static str,
    pub href: String,
    pub count: usize,
    pub last_updated: Option<DateTime<Utc>>,
}

fn page_info(page: PageKey) -> (&'static str, &'static str) {
    match page {
        PageKey::Home => (
            "Homepage",
            "Hero, services, testimonials, and contact CTA sections.",
        ),
        PageKey::Portfolio => (
            "Portfolio",
            "Hero copy, gallery filters, projects, and CTA messaging.",
        ),
        PageKey::Architecture => (
            "Architecture",
            "Hero, services, process steps, and page CTAs.",
        ),
        PageKey::Branding => (
            "Branding",
            "Hero, services, and cross-link content blocks.",
        ),
    }
}

/// Count rows and keep the newest timestamp per page. Rows of pages that
/// are not editable are ignored.
pub fn summarize(stamps: &[RowStamp]) -> BTreeMap<PageKey, PageSummary> {
    let mut summaries: BTreeMap<PageKey, PageSummary> =
        PageKey::ALL.iter().map(|p| (*p, PageSummary::default())).collect();

    for stamp in stamps {
        let Ok(page) = stamp.page.parse::<PageKey>() else {
            continue;
        };
        let summary = summaries.entry(page).or_default();
        summary.count += 1;
        summary.last_updated = summary.last_updated.max(stamp.updated_at);
    }
    summaries
}

pub fn page_cards(summaries: &BTreeMap<PageKey, PageSummary>) -> Vec<PageCard> {
    PageKey::ALL
        .iter()
        .map(|page| {
            let (name, description) = page_info(*page);
            let summary = summaries.get(page).copied().unwrap_or_default();
            PageCard {
                key: *page,
                name,
                description,
                href: format!("/admin/{}", page.editor_slug()),
                count: summary.count,
                last_updated: summary.last_updated,
            }
        })
        .collect()
}

/// Cards for every page. A failed read yields zero counts and the error
/// message alongside.
pub async fn load_dashboard(store: &dyn ContentStore) -> (Vec<PageCard>, Option<String>) {
    match store.row_stamps(&PageKey::ALL).await {
        Ok(stamps) => (page_cards(&summarize(&stamps)), None),
        Err(err) => {
            tracing::warn!(error = %err, "failed to load dashboard stats");
            (page_cards(&BTreeMap::new()), Some(dashboard_error(&err)))
        }
    }
}

fn dashboard_error(err: &StoreError) -> String {
    format!("Unable to load content stats: {err}")
}
