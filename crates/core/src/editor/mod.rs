//! Admin save path.
//!
//! An editor holds one page's merged content and a save state per section.
//! Each section is saved on its own as a single override row; a failed
//! save only marks its own section.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::content::{ContentError, PageContent, PageKey, SectionKey};
use crate::store::{ContentStore, SectionWrite, StoreError, TEXT_CONTENT};

pub const SAVED_MESSAGE: &str = "Saved successfully.";

/// How a section save reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Inserted(Uuid),
    Updated(Uuid),
}

impl SaveOutcome {
    pub fn id(&self) -> Uuid {
        match self {
            SaveOutcome::Inserted(id) | SaveOutcome::Updated(id) => *id,
        }
    }
}

/// Upsert one section of `content` as the override row for
/// `(C::PAGE, section)`.
pub async fn save_section<C: PageContent>(
    store: &dyn ContentStore,
    content: &C,
    section: C::Section,
) -> Result<SaveOutcome, StoreError> {
    let write = SectionWrite {
        page: C::PAGE,
        section: section.as_str(),
        content_type: TEXT_CONTENT,
        content: content.section_value(section),
        sort_order: section.sort_order(),
    };

    match store.find_section(C::PAGE, write.section).await? {
        Some(id) => {
            store.update_section(id, &write).await?;
            tracing::info!(page = %C::PAGE, section = write.section, %id, "section updated");
            Ok(SaveOutcome::Updated(id))
        }
        None => {
            let id = store.insert_section(&write).await?;
            tracing::info!(page = %C::PAGE, section = write.section, %id, "section created");
            Ok(SaveOutcome::Inserted(id))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveState {
    pub is_saving: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl SaveState {
    pub fn saving() -> Self {
        Self {
            is_saving: true,
            ..Self::default()
        }
    }

    pub fn saved() -> Self {
        Self {
            message: Some(SAVED_MESSAGE.to_string()),
            ..Self::default()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Save state of one section, as reported to the editor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionStatus {
    pub section: &'static str,
    #[serde(flatten)]
    pub state: SaveState,
}

/// Save states keyed by section. Sections never saved are idle.
#[derive(Debug, Clone)]
pub struct SaveBoard<S> {
    states: HashMap<S, SaveState>,
}

impl<S: SectionKey> SaveBoard<S> {
    pub fn new() -> Self {
        Self {
            states: S::ORDER.iter().map(|s| (*s, SaveState::default())).collect(),
        }
    }

    pub fn get(&self, section: S) -> &SaveState {
        // Every section is inserted by `new`.
        &self.states[&section]
    }

    pub fn set(&mut self, section: S, state: SaveState) {
        self.states.insert(section, state);
    }

    /// States of all sections, in save order.
    pub fn statuses(&self) -> Vec<SectionStatus> {
        S::ORDER
            .iter()
            .map(|section| SectionStatus {
                section: section.as_str(),
                state: self.get(*section).clone(),
            })
            .collect()
    }
}

impl<S: SectionKey> Default for SaveBoard<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot of an editor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView<C> {
    pub page: PageKey,
    pub sections: Vec<&'static str>,
    pub content: C,
    pub save_states: Vec<SectionStatus>,
    pub load_error: Option<String>,
}

/// One page's editable content plus its per-section save states.
#[derive(Debug, Clone)]
pub struct EditorSession<C: PageContent> {
    content: C,
    saves: SaveBoard<C::Section>,
    load_error: Option<String>,
}

impl<C: PageContent> EditorSession<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            saves: SaveBoard::new(),
            load_error: None,
        }
    }

    /// Load and merge the stored overrides. On failure the editor starts
    /// from the defaults and carries the error for display.
    pub async fn load(store: &dyn ContentStore) -> Self {
        match store.section_entries(C::PAGE).await {
            Ok(entries) => Self::new(C::merge_entries(&entries)),
            Err(err) => {
                tracing::warn!(page = %C::PAGE, error = %err, "failed to load page content");
                Self {
                    load_error: Some(format!("Unable to load {} content.", C::PAGE)),
                    ..Self::new(C::defaults().clone())
                }
            }
        }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn save_state(&self, section: C::Section) -> &SaveState {
        self.saves.get(section)
    }

    /// Replace one section of the in-memory content.
    pub fn edit_section(&mut self, section: C::Section, value: Value) -> Result<(), ContentError> {
        self.content.replace_section(section, value)
    }

    /// Save one section and record the outcome in its save state only.
    pub async fn save(&mut self, store: &dyn ContentStore, section: C::Section) -> &SaveState {
        self.saves.set(section, SaveState::saving());
        let state = match save_section(store, &self.content, section).await {
            Ok(_) => SaveState::saved(),
            Err(err) => {
                tracing::warn!(page = %C::PAGE, section = section.as_str(), error = %err, "section save failed");
                SaveState::failed(format!("Unable to save changes: {err}"))
            }
        };
        self.saves.set(section, state);
        self.saves.get(section)
    }

    pub fn view(&self) -> EditorView<C> {
        EditorView {
            page: C::PAGE,
            sections: C::Section::ORDER.iter().map(SectionKey::as_str).collect(),
            content: self.content.clone(),
            save_states: self.saves.statuses(),
            load_error: self.load_error.clone(),
        }
    }
}
