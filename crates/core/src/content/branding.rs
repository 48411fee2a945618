use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::merge::merge_record;
use super::service_page::{
    merge_cross_links, merge_hero, merge_services, CallToAction, CrossLinks, Intro,
    ServiceHero, ServiceList, ServiceOffering,
};
use super::{
    parse_section_value, strings, to_section_value, Card, ContentError, ImageRef, Overrides,
    PageContent, PageKey, SectionEntry, SectionKey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandingSection {
    Hero,
    Intro,
    Services,
    Cta,
    CrossLinks,
}

impl SectionKey for BrandingSection {
    const ORDER: &'static [Self] = &[
        Self::Hero,
        Self::Intro,
        Self::Services,
        Self::Cta,
        Self::CrossLinks,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Intro => "intro",
            Self::Services => "services",
            Self::Cta => "cta",
            Self::CrossLinks => "crossLinks",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingPageContent {
    pub hero: ServiceHero,
    pub intro: Intro,
    pub services: ServiceList,
    pub cta: CallToAction,
    pub cross_links: CrossLinks,
}

impl PageContent for BrandingPageContent {
    type Section = BrandingSection;

    const PAGE: PageKey = PageKey::Branding;

    fn defaults() -> &'static Self {
        &DEFAULTS
    }

    fn merge(defaults: &Self, overrides: &Overrides<BrandingSection>) -> Self {
        use BrandingSection as S;

        Self {
            hero: merge_hero(&defaults.hero, overrides.get(S::Hero)),
            intro: merge_record(&defaults.intro, overrides.get(S::Intro)),
            services: merge_services(&defaults.services, overrides.get(S::Services)),
            cta: merge_record(&defaults.cta, overrides.get(S::Cta)),
            cross_links: merge_cross_links(&defaults.cross_links, overrides.get(S::CrossLinks)),
        }
    }

    fn section_value(&self, section: BrandingSection) -> Value {
        use BrandingSection as S;

        match section {
            S::Hero => to_section_value(&self.hero),
            S::Intro => to_section_value(&self.intro),
            S::Services => to_section_value(&self.services),
            S::Cta => to_section_value(&self.cta),
            S::CrossLinks => to_section_value(&self.cross_links),
        }
    }

    fn replace_section(&mut self, section: BrandingSection, value: Value) -> Result<(), ContentError> {
        use BrandingSection as S;

        let name = section.as_str();
        let page = Self::PAGE;
        match section {
            S::Hero => self.hero = parse_section_value(page, name, value)?,
            S::Intro => self.intro = parse_section_value(page, name, value)?,
            S::Services => self.services = parse_section_value(page, name, value)?,
            S::Cta => self.cta = parse_section_value(page, name, value)?,
            S::CrossLinks => self.cross_links = parse_section_value(page, name, value)?,
        }
        Ok(())
    }
}

pub fn merge_branding_content(entries: &[SectionEntry]) -> BrandingPageContent {
    BrandingPageContent::merge_entries(entries)
}

static DEFAULTS: LazyLock<BrandingPageContent> = LazyLock::new(|| BrandingPageContent {
    hero: ServiceHero {
        title: "Identité Visuelle & Branding".into(),
        subtitle: "Plus de 70 identités visuelles créées pour des entreprises et startups en Algérie et en France.".into(),
        breadcrumb_home_label: "Accueil".into(),
        breadcrumb_current_label: "Branding".into(),
        background_image: ImageRef::bundled(
            "/images/elagage-hero.jpg",
            "Design d'identité visuelle par Noun Studio",
        ),
    },
    intro: Intro {
        title: "Votre marque mérite une identité à la hauteur de votre ambition".into(),
        body: "Le branding n'est pas qu'un logo. C'est l'ensemble des signaux visuels qui communiquent qui vous êtes, ce que vous faites et pourquoi vous comptez. Chez Noun Studio, nous abordons chaque projet d'identité visuelle avec la même rigueur et la même sensibilité que nos projets d'architecture : analyse, conception, itération et livraison impeccable.".into(),
    },
    services: ServiceList {
        title: "Nos prestations de branding".into(),
        subtitle: "De la conception du logo à la déclinaison sur tous vos supports".into(),
        items: vec![
            ServiceOffering {
                title: "Conception de logo".into(),
                description: "Votre logo est la première impression que vous laissez. Nous concevons des logos distinctifs, mémorables et adaptés à tous les supports, du digital à l'enseigne physique.".into(),
                features: strings(&[
                    "Recherche et brainstorming créatif",
                    "Propositions multiples et itérations",
                    "Déclinaisons couleur, noir et blanc",
                    "Fichiers vectoriels tous formats",
                ]),
                image: ImageRef::bundled(
                    "/images/gallery-2.jpg",
                    "Conception de logo et identité visuelle par Noun Studio",
                ),
            },
            ServiceOffering {
                title: "Système d'identité".into(),
                description: "Au-delà du logo, nous créons un système visuel complet et cohérent : typographie, palette de couleurs, iconographie, grilles de mise en page et règles d'utilisation.".into(),
                features: strings(&[
                    "Palette typographique complète",
                    "Système de couleurs et motifs",
                    "Iconographie et éléments graphiques",
                    "Grilles de mise en page",
                ]),
                image: ImageRef::bundled(
                    "/images/elagage-hero.jpg",
                    "Système d'identité visuelle complet par Noun Studio",
                ),
            },
            ServiceOffering {
                title: "Charte graphique".into(),
                description: "La charte graphique est le guide de référence de votre marque. Nous produisons un document complet qui garantit la cohérence de votre communication sur tous les supports et à long terme.".into(),
                features: strings(&[
                    "Document de référence illustré",
                    "Règles d'utilisation détaillées",
                    "Exemples d'applications concrètes",
                    "Versions print et digitale",
                ]),
                image: ImageRef::bundled(
                    "/images/gallery-6.jpg",
                    "Charte graphique professionnelle par Noun Studio",
                ),
            },
            ServiceOffering {
                title: "Supports de communication".into(),
                description: "Cartes de visite, kits réseaux sociaux, supports marketing et signalétique. Nous déclinons votre identité sur tous les points de contact avec vos clients.".into(),
                features: strings(&[
                    "Cartes de visite et papeterie",
                    "Templates réseaux sociaux",
                    "Supports marketing print et digital",
                    "Signalétique et enseigne",
                ]),
                image: ImageRef::bundled(
                    "/images/contact-hero.jpg",
                    "Supports de communication et marketing par Noun Studio",
                ),
            },
        ],
    },
    cta: CallToAction {
        title: "Besoin d'une identité visuelle ?".into(),
        subtitle: "Décrivez-nous votre activité et vos objectifs. Nous vous proposerons une approche sur mesure.".into(),
    },
    cross_links: CrossLinks {
        title: "Nos autres expertises".into(),
        cards: vec![
            Card::new(
                "Architecture & Gestion de Projet",
                "Conception résidentielle et commerciale, rénovation et suivi de chantier.",
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
    use serde_json::json;

    #[test]
    fn no_overrides_yields_defaults() {
        assert_eq!(merge_branding_content(&[]), *BrandingPageContent::defaults());
    }

    #[test]
    fn architecture_only_sections_are_unknown_here() {
        let merged = merge_branding_content(&[SectionEntry::new(
            "process",
            json!({"title": "Étapes"}),
        )]);
        assert_eq!(merged, *BrandingPageContent::defaults());
    }

    #[test]
    fn malformed_sections_fall_back() {
        let defaults = BrandingPageContent::defaults();
        let merged = merge_branding_content(&[
            SectionEntry::new("hero", json!("just a string")),
            SectionEntry::new("intro", json!(["title"])),
            SectionEntry::new("services", json!({"items": {"title": "nope"}, "title": null})),
            SectionEntry::new("cta", json!({"title": 12, "subtitle": "Écrivez-nous"})),
        ]);
        assert_eq!(merged.hero, defaults.hero);
        assert_eq!(merged.intro, defaults.intro);
        assert_eq!(merged.services, defaults.services);
        assert_eq!(merged.cta.title, defaults.cta.title);
        assert_eq!(merged.cta.subtitle, "Écrivez-nous");
    }

    #[test]
    fn feature_list_replaced_wholesale() {
        let merged = merge_branding_content(&[SectionEntry::new(
            "services",
            json!({"items": [{}, {"features": ["Typographie"]}]}),
        )]);
        let defaults = BrandingPageContent::defaults();
        assert_eq!(merged.services.items[0], defaults.services.items[0]);
        assert_eq!(merged.services.items[1].features, vec!["Typographie"]);
        assert_eq!(merged.services.items[1].title, defaults.services.items[1].title);
    }
}
