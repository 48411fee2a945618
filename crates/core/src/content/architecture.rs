use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::merge::{field, merge_record, merge_records};
use super::service_page::{
    merge_cross_links, merge_hero, merge_services, CallToAction, CrossLinks, Intro,
    ServiceHero, ServiceList, ServiceOffering,
};
use super::{
    parse_section_value, strings, to_section_value, Card, ContentError, ImageRef, Overrides,
    PageContent, PageKey, SectionKey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchitectureSection {
    Hero,
    Intro,
    Services,
    Process,
    Cta,
    CrossLinks,
}

impl SectionKey for ArchitectureSection {
    const ORDER: &'static [Self] = &[
        Self::Hero,
        Self::Intro,
        Self::Services,
        Self::Process,
        Self::Cta,
        Self::CrossLinks,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Intro => "intro",
            Self::Services => "services",
            Self::Process => "process",
            Self::Cta => "cta",
            Self::CrossLinks => "crossLinks",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitecturePageContent {
    pub hero: ServiceHero,
    pub intro: Intro,
    pub services: ServiceList,
    pub process: Process,
    pub cta: CallToAction,
    pub cross_links: CrossLinks,
}

impl PageContent for ArchitecturePageContent {
    type Section = ArchitectureSection;

    const PAGE: PageKey = PageKey::Architecture;

    fn defaults() -> &'static Self {
        &DEFAULTS
    }

    fn merge(defaults: &Self, overrides: &Overrides<ArchitectureSection>) -> Self {
        use ArchitectureSection as S;

        let process = overrides.get(S::Process);
        Self {
            hero: merge_hero(&defaults.hero, overrides.get(S::Hero)),
            intro: merge_record(&defaults.intro, overrides.get(S::Intro)),
            services: merge_services(&defaults.services, overrides.get(S::Services)),
            process: Process {
                steps: merge_records(&defaults.process.steps, field(process, "steps")),
                ..merge_record(&defaults.process, process)
            },
            cta: merge_record(&defaults.cta, overrides.get(S::Cta)),
            cross_links: merge_cross_links(&defaults.cross_links, overrides.get(S::CrossLinks)),
        }
    }

    fn section_value(&self, section: ArchitectureSection) -> Value {
        use ArchitectureSection as S;

        match section {
            S::Hero => to_section_value(&self.hero),
            S::Intro => to_section_value(&self.intro),
            S::Services => to_section_value(&self.services),
            S::Process => to_section_value(&self.process),
            S::Cta => to_section_value(&self.cta),
            S::CrossLinks => to_section_value(&self.cross_links),
        }
    }

    fn replace_section(
        &mut self,
        section: ArchitectureSection,
        value: Value,
    ) -> Result<(), ContentError> {
        use ArchitectureSection as S;

        let name = section.as_str();
        let page = Self::PAGE;
        match section {
            S::Hero => self.hero = parse_section_value(page, name, value)?,
            S::Intro => self.intro = parse_section_value(page, name, value)?,
            S::Services => self.services = parse_section_value(page, name, value)?,
            S::Process => self.process = parse_section_value(page, name, value)?,
            S::Cta => self.cta = parse_section_value(page, name, value)?,
            S::CrossLinks => self.cross_links = parse_section_value(page, name, value)?,
        }
        Ok(())
    }
}

/// Merge stored architecture overrides onto the compiled-in defaults.
pub fn merge_architecture_content(
    entries: &[super::SectionEntry],
) -> ArchitecturePageContent {
    ArchitecturePageContent::merge_entries(entries)
}

static DEFAULTS: LazyLock<ArchitecturePageContent> = LazyLock::new(|| ArchitecturePageContent {
    hero: ServiceHero {
        title: "Architecture & Gestion de Projet".into(),
        subtitle: "Du diagnostic à la livraison, un accompagnement complet pour vos projets architecturaux en Algérie et en France.".into(),
        breadcrumb_home_label: "Accueil".into(),
        breadcrumb_current_label: "Architecture".into(),
        background_image: ImageRef::bundled(
            "/images/paysagiste-hero.jpg",
            "Plans architecturaux et maquettes chez Noun Studio",
        ),
    },
    intro: Intro {
        title: "L'architecture au service de l'identité".into(),
        body: "Chez Noun Studio, l'architecture n'est pas seulement une question de construction technique. C'est une expression culturelle, un outil de branding et un médium de sensibilisation sociale. Chaque projet est conçu avec une attention particulière à l'identité du lieu et de ses habitants.".into(),
    },
    services: ServiceList {
        title: "Nos services d'architecture".into(),
        subtitle: "Un cycle complet de conception et de réalisation architecturale".into(),
        items: vec![
            ServiceOffering {
                title: "Architecture résidentielle".into(),
                description: "Conception de maisons individuelles, villas et résidences. Nous créons des espaces de vie qui reflètent votre identité tout en répondant aux exigences techniques et réglementaires locales.".into(),
                features: strings(&[
                    "Diagnostic et étude de faisabilité",
                    "Plans architecturaux complets",
                    "Visualisation 3D photoréaliste",
                    "Documentation réglementaire et administrative",
                ]),
                image: ImageRef::bundled(
                    "/images/gallery-1.jpg",
                    "Villa résidentielle contemporaine conçue par Noun Studio",
                ),
            },
            ServiceOffering {
                title: "Espaces commerciaux".into(),
                description: "Aménagement d'espaces professionnels, boutiques, restaurants et bureaux. Nous concevons des environnements qui renforcent votre image de marque et optimisent l'expérience de vos clients et collaborateurs.".into(),
                features: strings(&[
                    "Conception d'espaces de vente",
                    "Aménagement de bureaux et coworking",
                    "Design de restaurants et cafés",
                    "Intégration de l'identité de marque",
                ]),
                image: ImageRef::bundled(
                    "/images/gallery-3.jpg",
                    "Espace commercial moderne aménagé par Noun Studio",
                ),
            },
            ServiceOffering {
                title: "Rénovation & Restauration".into(),
                description: "Modernisation de bâtiments existants dans le respect du patrimoine. Nous allions techniques contemporaines et sensibilité historique pour redonner vie à des espaces tout en préservant leur caractère.".into(),
                features: strings(&[
                    "Diagnostic de l'état existant",
                    "Respect du patrimoine architectural",
                    "Intégration d'éléments contemporains",
                    "Réhabilitation et mise aux normes",
                ]),
                image: ImageRef::bundled(
                    "/images/gallery-4.jpg",
                    "Rénovation patrimoniale avec éléments contemporains par Noun Studio",
                ),
            },
            ServiceOffering {
                title: "Suivi de chantier".into(),
                description: "Accompagnement rigoureux de la construction, du premier coup de pioche à la réception finale. Nous assurons le respect des plans, des délais et du budget avec une documentation transparente à chaque étape.".into(),
                features: strings(&[
                    "Supervision de la construction",
                    "Contrôle qualité continu",
                    "Coordination des corps de métier",
                    "Documentation photographique du chantier",
                ]),
                image: ImageRef::bundled(
                    "/images/gallery-5.jpg",
                    "Suivi de chantier architectural par Noun Studio",
                ),
            },
        ],
    },
    process: Process {
        title: "Notre processus".into(),
        subtitle: "De la première consultation à la livraison, un accompagnement en 4 étapes.".into(),
        steps: vec![
            ProcessStep {
                step: "01".into(),
                title: "Consultation".into(),
                description: "Prise de contact et échange sur votre projet. Nous analysons vos besoins, votre terrain et votre budget pour définir le cadre du projet.".into(),
            },
            ProcessStep {
                step: "02".into(),
                title: "Conception".into(),
                description: "Esquisses, plans détaillés et visualisations 3D. Nous itérons ensemble jusqu'à obtenir le design qui vous correspond parfaitement.".into(),
            },
            ProcessStep {
                step: "03".into(),
                title: "Réalisation".into(),
                description: "Suivi rigoureux de la construction avec coordination des intervenants, contrôle qualité et respect des délais annoncés.".into(),
            },
            ProcessStep {
                step: "04".into(),
                title: "Livraison".into(),
                description: "Réception du projet, vérification finale et remise des documents. Vous profitez de votre nouvel espace en toute sérénité.".into(),
            },
        ],
    },
    cta: CallToAction {
        title: "Vous avez un projet architectural ?".into(),
        subtitle: "Décrivez-nous votre vision et recevez une consultation gratuite. Sans engagement.".into(),
    },
    cross_links: CrossLinks {
        title: "Nos autres expertises".into(),
        cards: vec![
            Card::new(
                "Identité Visuelle & Branding",
                "Logos, chartes graphiques et systèmes d'identité pour entreprises et startups.",
            ),
            Card::new(
                "Notre portfolio",
                "Parcourez nos projets d'architecture, de branding et de design.",
            ),
        ],
    },
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionEntry;
    use serde_json::json;

    fn defaults() -> &'static ArchitecturePageContent {
        ArchitecturePageContent::defaults()
    }

    #[test]
    fn no_overrides_yields_defaults() {
        assert_eq!(merge_architecture_content(&[]), *defaults());
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let merged = merge_architecture_content(&[
            SectionEntry::new("footer", json!({"title": "x"})),
            SectionEntry::new("Hero", json!({"title": "x"})),
        ]);
        assert_eq!(merged, *defaults());
    }

    #[test]
    fn hero_title_override_keeps_siblings() {
        let merged = merge_architecture_content(&[SectionEntry::new(
            "hero",
            json!({"title": "New Title"}),
        )]);
        assert_eq!(defaults().hero.title, "Architecture & Gestion de Projet");
        assert_eq!(merged.hero.title, "New Title");
        assert_eq!(merged.hero.subtitle, defaults().hero.subtitle);
        assert_eq!(merged.hero.background_image, defaults().hero.background_image);
    }

    #[test]
    fn short_service_list_merges_positionally() {
        let merged = merge_architecture_content(&[SectionEntry::new(
            "services",
            json!({"items": [{"title": "X"}]}),
        )]);
        let items = &merged.services.items;
        assert_eq!(defaults().services.items.len(), 4);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].title, "X");
        assert_eq!(items[0].description, defaults().services.items[0].description);
        assert_eq!(items[0].features, defaults().services.items[0].features);
        assert_eq!(&items[1..], &defaults().services.items[1..]);
        assert_eq!(merged.services.title, defaults().services.title);
    }

    #[test]
    fn long_step_list_is_truncated_to_defaults() {
        let steps: Vec<_> = (0..9).map(|i| json!({"title": format!("Step {i}")})).collect();
        let merged = merge_architecture_content(&[SectionEntry::new(
            "process",
            json!({"steps": steps, "title": "Méthode"}),
        )]);
        assert_eq!(merged.process.steps.len(), 4);
        assert_eq!(merged.process.steps[3].title, "Step 3");
        assert_eq!(merged.process.steps[3].step, "04");
        assert_eq!(merged.process.title, "Méthode");
    }

    #[test]
    fn later_duplicate_section_wins() {
        let merged = merge_architecture_content(&[
            SectionEntry::new("cta", json!({"title": "First"})),
            SectionEntry::new("cta", json!({"title": "Second"})),
        ]);
        assert_eq!(merged.cta.title, "Second");
    }

    #[test]
    fn merge_is_repeatable() {
        let entries = vec![
            SectionEntry::new("intro", json!({"body": "Corps"})),
            SectionEntry::new("crossLinks", json!({"cards": [null, {"title": "Galerie"}]})),
        ];
        let first = merge_architecture_content(&entries);
        let second = merge_architecture_content(&entries);
        assert_eq!(first, second);
        assert_eq!(first.cross_links.cards[0], defaults().cross_links.cards[0]);
        assert_eq!(first.cross_links.cards[1].title, "Galerie");
    }

    #[test]
    fn sections_round_trip_through_replace() {
        let mut content = defaults().clone();
        let mut hero = content.section_value(ArchitectureSection::Hero);
        hero["title"] = json!("Édité");
        content
            .replace_section(ArchitectureSection::Hero, hero)
            .unwrap();
        assert_eq!(content.hero.title, "Édité");

        let err = content
            .replace_section(ArchitectureSection::Cta, json!({"title": 1}))
            .unwrap_err();
        assert!(matches!(err, ContentError::InvalidSection { section: "cta", .. }));
    }
}
