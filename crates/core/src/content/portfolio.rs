use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::merge::{field, merge_image, merge_list, merge_record, merge_string_list};
use super::{
    parse_section_value, strings, to_section_value, ContentError, ImageRef, Overrides,
    PageContent, PageKey, SectionEntry, SectionKey,
};

/// Number of projects shown in the home page gallery preview.
pub const PREVIEW_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortfolioSection {
    Hero,
    Gallery,
    Cta,
}

impl SectionKey for PortfolioSection {
    const ORDER: &'static [Self] = &[Self::Hero, Self::Gallery, Self::Cta];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Gallery => "gallery",
            Self::Cta => "cta",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHero {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub breadcrumb_home_label: String,
    pub breadcrumb_current_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub categories: Vec<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioCta {
    pub title: String,
    pub subtitle: String,
    pub primary_cta_label: String,
    pub primary_cta_href: String,
    pub email_label: String,
    pub email_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPageContent {
    pub hero: PortfolioHero,
    pub gallery: Gallery,
    pub cta: PortfolioCta,
}

/// One tile of the home page gallery preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewImage {
    pub src: String,
    pub alt: String,
    pub label: String,
}

impl PortfolioPageContent {
    /// First projects of the gallery, labelled with their category.
    pub fn preview_images(&self) -> Vec<PreviewImage> {
        self.gallery
            .projects
            .iter()
            .take(PREVIEW_LEN)
            .map(|project| PreviewImage {
                src: project.image.src.clone(),
                alt: project.image.alt.clone(),
                label: project.category.clone(),
            })
            .collect()
    }
}

fn merge_project(defaults: &Project, value: &Value) -> Project {
    Project {
        image: merge_image(&defaults.image, field(Some(value), "image")),
        ..merge_record(defaults, Some(value))
    }
}

impl PageContent for PortfolioPageContent {
    type Section = PortfolioSection;

    const PAGE: PageKey = PageKey::Portfolio;

    fn defaults() -> &'static Self {
        &DEFAULTS
    }

    fn merge(defaults: &Self, overrides: &Overrides<PortfolioSection>) -> Self {
        use PortfolioSection as S;

        let gallery = overrides.get(S::Gallery);
        Self {
            hero: merge_record(&defaults.hero, overrides.get(S::Hero)),
            gallery: Gallery {
                categories: merge_string_list(
                    &defaults.gallery.categories,
                    field(gallery, "categories"),
                ),
                projects: merge_list(
                    &defaults.gallery.projects,
                    field(gallery, "projects"),
                    merge_project,
                ),
            },
            cta: merge_record(&defaults.cta, overrides.get(S::Cta)),
        }
    }

    fn section_value(&self, section: PortfolioSection) -> Value {
        match section {
            PortfolioSection::Hero => to_section_value(&self.hero),
            PortfolioSection::Gallery => to_section_value(&self.gallery),
            PortfolioSection::Cta => to_section_value(&self.cta),
        }
    }

    fn replace_section(
        &mut self,
        section: PortfolioSection,
        value: Value,
    ) -> Result<(), ContentError> {
        let name = section.as_str();
        match section {
            PortfolioSection::Hero => self.hero = parse_section_value(Self::PAGE, name, value)?,
            PortfolioSection::Gallery => {
                self.gallery = parse_section_value(Self::PAGE, name, value)?
            }
            PortfolioSection::Cta => self.cta = parse_section_value(Self::PAGE, name, value)?,
        }
        Ok(())
    }
}

pub fn merge_portfolio_content(entries: &[SectionEntry]) -> PortfolioPageContent {
    PortfolioPageContent::merge_entries(entries)
}

fn project(
    title: &str,
    description: &str,
    location: &str,
    category: &str,
    src: &str,
    alt: &str,
) -> Project {
    Project {
        title: title.into(),
        description: description.into(),
        location: location.into(),
        category: category.into(),
        image: ImageRef::bundled(src, alt),
    }
}

static DEFAULTS: LazyLock<PortfolioPageContent> = LazyLock::new(|| PortfolioPageContent {
    hero: PortfolioHero {
        eyebrow: "Portfolio".into(),
        title: "Nos Réalisations".into(),
        subtitle: "Projets d'architecture, d'identité visuelle et de design réalisés en Algérie et en France.".into(),
        breadcrumb_home_label: "Accueil".into(),
        breadcrumb_current_label: "Portfolio".into(),
    },
    gallery: Gallery {
        categories: strings(&["Tous", "Architecture", "Branding", "Intérieur", "Rénovation"]),
        projects: vec![
            project(
                "Villa Contemporaine",
                "Conception complète d'une villa résidentielle avec terrasse panoramique et jardin méditerranéen.",
                "Alger",
                "Architecture",
                "/images/gallery-1.jpg",
                "Villa résidentielle contemporaine en Algérie par Noun Studio",
            ),
            project(
                "Branding Startup Tech",
                "Logo, charte graphique et supports de communication pour une startup technologique.",
                "Oran",
                "Branding",
                "/images/gallery-2.jpg",
                "Identité visuelle pour startup par Noun Studio",
            ),
            project(
                "Espace Commercial",
                "Aménagement intérieur d'un espace de coworking avec identité architecturale forte.",
                "Alger",
                "Intérieur",
                "/images/gallery-3.jpg",
                "Aménagement intérieur espace commercial par Noun Studio",
            ),
            project(
                "Restauration Patrimoniale",
                "Rénovation d'un bâtiment historique avec intégration d'éléments contemporains.",
                "Constantine",
                "Rénovation",
                "/images/gallery-4.jpg",
                "Rénovation patrimoine architectural algérien par Noun Studio",
            ),
            project(
                "Résidence Moderne",
                "Conception d'une résidence familiale aux lignes épurées avec optimisation de la lumière naturelle.",
                "Blida",
                "Architecture",
                "/images/hero-bg.jpg",
                "Architecture contemporaine par Noun Studio",
            ),
            project(
                "Boutique Retail",
                "Design intérieur d'une boutique haut de gamme avec mise en scène des produits.",
                "Alger",
                "Intérieur",
                "/images/gallery-6.jpg",
                "Design intérieur boutique par Noun Studio",
            ),
            project(
                "Branding Restaurant",
                "Création d'identité complète pour un restaurant : du nom à la décoration intérieure.",
                "Oran",
                "Branding",
                "/images/elagage-hero.jpg",
                "Identité visuelle restaurant par Noun Studio",
            ),
            project(
                "Visualisation 3D",
                "Rendu 3D photoréaliste d'un projet de villa avec piscine avant construction.",
                "Alger",
                "Architecture",
                "/images/gallery-5.jpg",
                "Visualisation 3D villa par Noun Studio",
            ),
            project(
                "Identité Cabinet Médical",
                "Branding complet pour un cabinet médical : logo, signalétique et décoration intérieure.",
                "Constantine",
                "Branding",
                "/images/why-us.jpg",
                "Studio d'architecture Noun Studio",
            ),
            project(
                "Complexe Résidentiel",
                "Conception architecturale d'un ensemble résidentiel de 12 logements.",
                "Blida",
                "Architecture",
                "/images/paysagiste-hero.jpg",
                "Plans architecturaux par Noun Studio",
            ),
            project(
                "Siège Social",
                "Rénovation et aménagement du siège social d'une entreprise de services.",
                "Alger",
                "Rénovation",
                "/images/contact-hero.jpg",
                "Aménagement bureaux par Noun Studio",
            ),
        ],
    },
    cta: PortfolioCta {
        title: "Votre projet est le prochain ?".into(),
        subtitle: "Contactez-nous pour discuter de votre projet et obtenir une consultation gratuite.".into(),
        primary_cta_label: "Discutons ensemble".into(),
        primary_cta_href: "/contact".into(),
        email_label: "contact@nounstudio.dz".into(),
        email_address: "contact@nounstudio.dz".into(),
    },
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_overrides_yields_defaults() {
        assert_eq!(merge_portfolio_content(&[]), *PortfolioPageContent::defaults());
    }

    #[test]
    fn categories_with_non_string_keep_defaults() {
        let merged = merge_portfolio_content(&[SectionEntry::new(
            "gallery",
            json!({"categories": ["Tous", 3, "Branding"]}),
        )]);
        assert_eq!(
            merged.gallery.categories,
            PortfolioPageContent::defaults().gallery.categories
        );
    }

    #[test]
    fn project_image_is_merged_per_field() {
        let merged = merge_portfolio_content(&[SectionEntry::new(
            "gallery",
            json!({
                "projects": [
                    {"image": {"src": "https://cdn.example/villa.jpg", "path": "abc-villa.jpg"}},
                    {"location": "Tlemcen", "image": "broken"}
                ]
            }),
        )]);
        let defaults = PortfolioPageContent::defaults();
        let first = &merged.gallery.projects[0];
        assert_eq!(first.image.src, "https://cdn.example/villa.jpg");
        assert_eq!(first.image.alt, defaults.gallery.projects[0].image.alt);
        assert_eq!(first.image.path.as_deref(), Some("abc-villa.jpg"));
        assert_eq!(first.title, defaults.gallery.projects[0].title);

        let second = &merged.gallery.projects[1];
        assert_eq!(second.location, "Tlemcen");
        assert_eq!(second.image, defaults.gallery.projects[1].image);
        assert_eq!(merged.gallery.projects.len(), 11);
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let merged = merge_portfolio_content(&[
            SectionEntry::new("projects", json!([{"title": "x"}])),
            SectionEntry::new("Gallery", json!({"categories": ["Tous"]})),
        ]);
        assert_eq!(merged, *PortfolioPageContent::defaults());
    }

    #[test]
    fn merge_is_repeatable() {
        let entries = vec![
            SectionEntry::new("cta", json!({"title": "Un projet ?"})),
            SectionEntry::new("gallery", json!({"projects": [{}, {"category": "Rénovation"}]})),
        ];
        let first = merge_portfolio_content(&entries);
        let second = merge_portfolio_content(&entries);
        assert_eq!(first, second);
        assert_eq!(first.cta.title, "Un projet ?");
        assert_eq!(first.gallery.projects[1].category, "Rénovation");
        assert_eq!(first.gallery.projects[0], PortfolioPageContent::defaults().gallery.projects[0]);
    }

    #[test]
    fn preview_uses_first_six_projects() {
        let preview = PortfolioPageContent::defaults().preview_images();
        assert_eq!(preview.len(), PREVIEW_LEN);
        assert_eq!(preview[0].label, "Architecture");
        assert_eq!(preview[1].src, "/images/gallery-2.jpg");
    }

    #[test]
    fn hero_has_no_nested_fields() {
        let merged = merge_portfolio_content(&[SectionEntry::new(
            "hero",
            json!({"eyebrow": "Projets", "backgroundImage": {"src": "/x.jpg"}}),
        )]);
        assert_eq!(merged.hero.eyebrow, "Projets");
        let value = merged.section_value(PortfolioSection::Hero);
        assert!(value.get("backgroundImage").is_none());
    }
}
