//! Page content model.
//!
//! Every editable page has a compiled-in default tree and a set of named
//! sections. Stored overrides are merged onto the defaults at request time:
//! - the merged tree always has exactly the shape of the defaults
//! - malformed override values fall back to the default they would replace
//! - structured lists keep the default list's length

pub mod architecture;
pub mod branding;
pub mod contact;
pub mod home;
pub mod merge;
pub mod portfolio;
pub mod service_page;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

pub use merge::Overrides;

/// Pages whose content is editable from the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    Home,
    Portfolio,
    Architecture,
    Branding,
}

impl PageKey {
    pub const ALL: [PageKey; 4] = [
        PageKey::Home,
        PageKey::Portfolio,
        PageKey::Architecture,
        PageKey::Branding,
    ];

    /// Value of the `page` column in `site_content`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::Portfolio => "portfolio",
            PageKey::Architecture => "architecture",
            PageKey::Branding => "branding",
        }
    }

    /// Path segment of the admin editor for this page.
    pub fn editor_slug(&self) -> &'static str {
        match self {
            PageKey::Home => "homepage",
            other => other.as_str(),
        }
    }

    /// Names of the sections of this page, in their save order.
    pub fn section_names(&self) -> Vec<&'static str> {
        fn names<S: SectionKey>() -> Vec<&'static str> {
            S::ORDER.iter().map(SectionKey::as_str).collect()
        }
        match self {
            PageKey::Home => names::<home::HomeSection>(),
            PageKey::Portfolio => names::<portfolio::PortfolioSection>(),
            PageKey::Architecture => names::<architecture::ArchitectureSection>(),
            PageKey::Branding => names::<branding::BrandingSection>(),
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKey {
    type Err = ContentError;

    /// Accepts the storage key and the editor slug (`homepage`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" | "homepage" => Ok(PageKey::Home),
            "portfolio" => Ok(PageKey::Portfolio),
            "architecture" => Ok(PageKey::Architecture),
            "branding" => Ok(PageKey::Branding),
            other => Err(ContentError::UnknownPage(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("unknown section `{section}` for page `{page}`")]
    UnknownSection { page: PageKey, section: String },

    #[error("invalid content for {page}.{section}: {source}")]
    InvalidSection {
        page: PageKey,
        section: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A stored override as seen by the merge: section name plus raw content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub section: String,
    pub content: Value,
}

impl SectionEntry {
    pub fn new(section: impl Into<String>, content: Value) -> Self {
        Self {
            section: section.into(),
            content,
        }
    }
}

/// Named sections of one page type.
pub trait SectionKey: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// All sections, in save order. The position is the row's `sort_order`.
    const ORDER: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse(name: &str) -> Option<Self> {
        Self::ORDER.iter().copied().find(|s| s.as_str() == name)
    }

    fn sort_order(&self) -> i32 {
        Self::ORDER
            .iter()
            .position(|s| s == self)
            .map_or(0, |index| index as i32)
    }
}

/// Content tree of one editable page.
pub trait PageContent: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Section: SectionKey;

    const PAGE: PageKey;

    /// Compiled-in defaults.
    fn defaults() -> &'static Self;

    /// Merge section overrides onto `defaults`. Never fails.
    fn merge(defaults: &Self, overrides: &Overrides<Self::Section>) -> Self;

    /// Serialized content of one section, as persisted in an override row.
    fn section_value(&self, section: Self::Section) -> Value;

    /// Replace one section with `value` parsed into the section's shape.
    fn replace_section(&mut self, section: Self::Section, value: Value)
        -> Result<(), ContentError>;

    /// Merge stored rows onto the compiled-in defaults.
    fn merge_entries(entries: &[SectionEntry]) -> Self {
        Self::merge(
            Self::defaults(),
            &Overrides::from_entries(Self::PAGE, entries),
        )
    }

    fn parse_section(name: &str) -> Result<Self::Section, ContentError> {
        Self::Section::parse(name).ok_or_else(|| ContentError::UnknownSection {
            page: Self::PAGE,
            section: name.to_string(),
        })
    }
}

/// A displayed image. `path` names the stored object when the image was
/// uploaded; bundled images have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub path: Option<String>,
}

impl ImageRef {
    pub fn bundled(src: &str, alt: &str) -> Self {
        Self {
            src: src.to_string(),
            alt: alt.to_string(),
            path: None,
        }
    }
}

/// Title and description pair used by most card lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
}

impl Card {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

pub(crate) fn to_section_value<T: Serialize>(section: &T) -> Value {
    serde_json::to_value(section).unwrap_or_default()
}

pub(crate) fn parse_section_value<T: DeserializeOwned>(
    page: PageKey,
    section: &'static str,
    value: Value,
) -> Result<T, ContentError> {
    serde_json::from_value(value).map_err(|source| ContentError::InvalidSection {
        page,
        section,
        source,
    })
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
