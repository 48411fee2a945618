use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::merge::{field, merge_image, merge_record, merge_records, merge_string_list};
use super::{
    parse_section_value, strings, to_section_value, Card, ContentError, ImageRef, Overrides,
    PageContent, PageKey, SectionEntry, SectionKey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeSection {
    Hero,
    SocialProof,
    Services,
    WhyUs,
    Testimonials,
    GalleryPreview,
    LocalSeo,
    ContactCta,
}

impl SectionKey for HomeSection {
    const ORDER: &'static [Self] = &[
        Self::Hero,
        Self::SocialProof,
        Self::Services,
        Self::WhyUs,
        Self::Testimonials,
        Self::GalleryPreview,
        Self::LocalSeo,
        Self::ContactCta,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::SocialProof => "socialProof",
            Self::Services => "services",
            Self::WhyUs => "whyUs",
            Self::Testimonials => "testimonials",
            Self::GalleryPreview => "galleryPreview",
            Self::LocalSeo => "localSeo",
            Self::ContactCta => "contactCta",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeHero {
    pub badge_text: String,
    pub title: String,
    pub subtitle: String,
    pub trust_bullets: Vec<String>,
    pub primary_cta_label: String,
    pub secondary_cta_label: String,
    pub background_image: ImageRef,
}

/// A headline figure, e.g. `70+` / `identités visuelles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialProof {
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicesOverview {
    pub eyebrow: String,
    pub title: String,
    pub items: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyUs {
    pub eyebrow: String,
    pub title: String,
    pub image: ImageRef,
    pub floating_badge: Stat,
    pub benefits: Vec<Card>,
    pub cta_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub stars: u8,
    pub text: String,
    pub name: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonials {
    pub eyebrow: String,
    pub title: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPreview {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalSeo {
    pub eyebrow: String,
    pub title: String,
    pub body: String,
    pub highlights: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCta {
    pub title: String,
    pub subtitle: String,
    pub email_label: String,
    pub email_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageContent {
    pub hero: HomeHero,
    pub social_proof: SocialProof,
    pub services: ServicesOverview,
    pub why_us: WhyUs,
    pub testimonials: Testimonials,
    pub gallery_preview: GalleryPreview,
    pub local_seo: LocalSeo,
    pub contact_cta: ContactCta,
}

impl PageContent for HomePageContent {
    type Section = HomeSection;

    const PAGE: PageKey = PageKey::Home;

    fn defaults() -> &'static Self {
        &DEFAULTS
    }

    fn merge(defaults: &Self, overrides: &Overrides<HomeSection>) -> Self {
        use HomeSection as S;

        let hero = overrides.get(S::Hero);
        let services = overrides.get(S::Services);
        let why_us = overrides.get(S::WhyUs);
        let testimonials = overrides.get(S::Testimonials);
        let local_seo = overrides.get(S::LocalSeo);

        Self {
            hero: HomeHero {
                trust_bullets: merge_string_list(
                    &defaults.hero.trust_bullets,
                    field(hero, "trustBullets"),
                ),
                background_image: merge_image(
                    &defaults.hero.background_image,
                    field(hero, "backgroundImage"),
                ),
                ..merge_record(&defaults.hero, hero)
            },
            social_proof: SocialProof {
                stats: merge_records(
                    &defaults.social_proof.stats,
                    overrides.field(S::SocialProof, "stats"),
                ),
            },
            services: ServicesOverview {
                items: merge_records(&defaults.services.items, field(services, "items")),
                ..merge_record(&defaults.services, services)
            },
            why_us: WhyUs {
                image: merge_image(&defaults.why_us.image, field(why_us, "image")),
                floating_badge: merge_record(
                    &defaults.why_us.floating_badge,
                    field(why_us, "floatingBadge"),
                ),
                benefits: merge_records(&defaults.why_us.benefits, field(why_us, "benefits")),
                ..merge_record(&defaults.why_us, why_us)
            },
            testimonials: Testimonials {
                items: merge_records(&defaults.testimonials.items, field(testimonials, "items")),
                ..merge_record(&defaults.testimonials, testimonials)
            },
            gallery_preview: merge_record(
                &defaults.gallery_preview,
                overrides.get(S::GalleryPreview),
            ),
            local_seo: LocalSeo {
                highlights: merge_records(
                    &defaults.local_seo.highlights,
                    field(local_seo, "highlights"),
                ),
                ..merge_record(&defaults.local_seo, local_seo)
            },
            contact_cta: merge_record(&defaults.contact_cta, overrides.get(S::ContactCta)),
        }
    }

    fn section_value(&self, section: HomeSection) -> Value {
        use HomeSection as S;

        match section {
            S::Hero => to_section_value(&self.hero),
            S::SocialProof => to_section_value(&self.social_proof),
            S::Services => to_section_value(&self.services),
            S::WhyUs => to_section_value(&self.why_us),
            S::Testimonials => to_section_value(&self.testimonials),
            S::GalleryPreview => to_section_value(&self.gallery_preview),
            S::LocalSeo => to_section_value(&self.local_seo),
            S::ContactCta => to_section_value(&self.contact_cta),
        }
    }

    fn replace_section(&mut self, section: HomeSection, value: Value) -> Result<(), ContentError> {
        use HomeSection as S;

        let name = section.as_str();
        let page = Self::PAGE;
        match section {
            S::Hero => self.hero = parse_section_value(page, name, value)?,
            S::SocialProof => self.social_proof = parse_section_value(page, name, value)?,
            S::Services => self.services = parse_section_value(page, name, value)?,
            S::WhyUs => self.why_us = parse_section_value(page, name, value)?,
            S::Testimonials => self.testimonials = parse_section_value(page, name, value)?,
            S::GalleryPreview => self.gallery_preview = parse_section_value(page, name, value)?,
            S::LocalSeo => self.local_seo = parse_section_value(page, name, value)?,
            S::ContactCta => self.contact_cta = parse_section_value(page, name, value)?,
        }
        Ok(())
    }
}

pub fn merge_home_content(entries: &[SectionEntry]) -> HomePageContent {
    HomePageContent::merge_entries(entries)
}

fn testimonial(text: &str, name: &str, city: &str) -> Testimonial {
    Testimonial {
        stars: 5,
        text: text.into(),
        name: name.into(),
        city: city.into(),
    }
}

static DEFAULTS: LazyLock<HomePageContent> = LazyLock::new(|| HomePageContent {
    hero: HomeHero {
        badge_text: "Architecture · Branding · Contenu culturel".into(),
        title: "Architecture, Design & Identité Culturelle".into(),
        subtitle: "Noun Studio est un cabinet d'architecture et studio de design multidisciplinaire fondé par SAHNOUNE Mohammed. Nous concevons des espaces, des marques et des histoires.".into(),
        trust_bullets: strings(&[
            "Architecte agréé",
            "Plus de 70 identités visuelles livrées",
            "Projets en Algérie et en France",
            "Accompagnement du diagnostic à la livraison",
        ]),
        primary_cta_label: "Découvrir nos services".into(),
        secondary_cta_label: "Portfolio".into(),
        background_image: ImageRef::bundled(
            "/images/hero-bg.jpg",
            "Architecture contemporaine par Noun Studio",
        ),
    },
    social_proof: SocialProof {
        stats: vec![
            Stat::new("Architecte", "agréée"),
            Stat::new("70+", "identités visuelles"),
            Stat::new("2", "pays d'activité"),
            Stat::new("3", "experts en studio"),
        ],
    },
    services: ServicesOverview {
        eyebrow: "Nos expertises".into(),
        title: "Un studio multidisciplinaire au service de vos projets".into(),
        items: vec![
            Card::new(
                "Architecture",
                "Conception et suivi de projets architecturaux résidentiels, commerciaux et de rénovation. Du diagnostic à la livraison.",
            ),
            Card::new(
                "Identité Visuelle",
                "Création de logos, systèmes d'identité, chartes graphiques et kits de communication pour entreprises et startups.",
            ),
            Card::new(
                "Contenu Culturel",
                "Production de contenu autour de l'architecture, du patrimoine algérien et de la culture du design.",
            ),
        ],
    },
    why_us: WhyUs {
        eyebrow: "Notre approche".into(),
        title: "Pourquoi choisir Noun Studio ?".into(),
        image: ImageRef::bundled(
            "/images/why-us.jpg",
            "Architecte SAHNOUNE Mohammed au travail chez Noun Studio",
        ),
        floating_badge: Stat::new("70+", "clients satisfaits"),
        benefits: vec![
            Card::new(
                "Expertise technique",
                "Architecte agréé avec une maîtrise complète du cycle projet.",
            ),
            Card::new(
                "Sensibilité culturelle",
                "Chaque projet intègre une dimension identitaire et patrimoniale.",
            ),
            Card::new(
                "Vision stratégique",
                "L'architecture comme outil de branding et d'expression.",
            ),
            Card::new(
                "Écoute & sur-mesure",
                "Des solutions personnalisées selon vos besoins et votre contexte.",
            ),
            Card::new(
                "Approche intégrée",
                "Architecture, design et contenu dans une seule démarche cohérente.",
            ),
        ],
        cta_label: "Discutons de votre projet".into(),
    },
    testimonials: Testimonials {
        eyebrow: "Témoignages".into(),
        title: "Ce que disent nos clients".into(),
        items: vec![
            testimonial(
                "Noun Studio a conçu notre villa avec une sensibilité remarquable. Le projet respecte notre identité tout en apportant une modernité élégante. Un travail d'architecte exceptionnel.",
                "Karim B.",
                "Alger",
            ),
            testimonial(
                "L'identité visuelle créée pour notre startup est parfaite. Le logo, la charte graphique et les supports de communication sont cohérents et professionnels. Un vrai partenaire stratégique.",
                "Amina H.",
                "Oran",
            ),
            testimonial(
                "La rénovation de notre espace commercial a complètement transformé notre image. Mohammed et son équipe comprennent parfaitement la relation entre architecture et identité de marque.",
                "Yacine M.",
                "Constantine",
            ),
            testimonial(
                "Nous avons fait appel à Noun Studio pour le branding complet de notre restaurant. Du nom à la décoration intérieure, tout est pensé avec cohérence. Résultat impeccable.",
                "Sara T.",
                "Alger",
            ),
            testimonial(
                "Le suivi de chantier par Noun Studio est rigoureux et transparent. Chaque étape est documentée, les délais respectés et la qualité irréprochable. Je recommande vivement.",
                "Djamel F.",
                "Blida",
            ),
        ],
    },
    gallery_preview: GalleryPreview {
        eyebrow: "Portfolio".into(),
        title: "Nos réalisations".into(),
        subtitle: "Des projets qui témoignent de notre savoir-faire".into(),
        cta_label: "Voir tout le portfolio".into(),
    },
    local_seo: LocalSeo {
        eyebrow: "Présence locale".into(),
        title: "Basé à Oran, Algérie".into(),
        body: "Noun Studio est implanté à Oran et intervient à travers l'Algérie. Notre positionnement combine l'expertise technique en architecture avec le développement d'identités visuelles et la création de contenu culturel lié au patrimoine architectural algérien.".into(),
        highlights: vec![
            Card::new(
                "Architecture à Oran",
                "Résidentiel, commercial et rénovation à Oran. Des projets ancrés dans le patrimoine local avec une vision contemporaine.",
            ),
            Card::new(
                "Branding à Oran",
                "Identités visuelles et direction artistique pour des marques locales et nationales.",
            ),
            Card::new(
                "Contenu culturel",
                "Production de contenu autour de l'architecture algérienne, du patrimoine et de la culture du design.",
            ),
        ],
    },
    contact_cta: ContactCta {
        title: "Parlons de votre projet".into(),
        subtitle: "Consultation gratuite — réponse garantie sous 48h".into(),
        email_label: "Email".into(),
        email_address: "contact@nounstudio.dz".into(),
    },
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults() -> &'static HomePageContent {
        HomePageContent::defaults()
    }

    #[test]
    fn no_overrides_yields_defaults() {
        assert_eq!(merge_home_content(&[]), *defaults());
    }

    #[test]
    fn trust_bullets_need_only_strings() {
        let merged = merge_home_content(&[SectionEntry::new(
            "hero",
            json!({"trustBullets": ["Agréé", {"text": "x"}], "badgeText": "Studio"}),
        )]);
        assert_eq!(merged.hero.trust_bullets, defaults().hero.trust_bullets);
        assert_eq!(merged.hero.badge_text, "Studio");

        let merged = merge_home_content(&[SectionEntry::new(
            "hero",
            json!({"trustBullets": ["Agréé"]}),
        )]);
        assert_eq!(merged.hero.trust_bullets, vec!["Agréé"]);
    }

    #[test]
    fn testimonial_stars_must_be_integers() {
        let merged = merge_home_content(&[SectionEntry::new(
            "testimonials",
            json!({"items": [{"stars": 4}, {"stars": "4"}, {"stars": -1, "city": "Sétif"}]}),
        )]);
        let items = &merged.testimonials.items;
        assert_eq!(items[0].stars, 4);
        assert_eq!(items[1], defaults().testimonials.items[1]);
        assert_eq!(items[2].stars, 5);
        assert_eq!(items[2].city, "Sétif");
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn oversized_stars_keep_sibling_overrides() {
        let merged = merge_home_content(&[SectionEntry::new(
            "testimonials",
            json!({"items": [{"stars": 900, "text": "Nouveau texte"}]}),
        )]);
        let first = &merged.testimonials.items[0];
        assert_eq!(first.stars, defaults().testimonials.items[0].stars);
        assert_eq!(first.text, "Nouveau texte");
        assert_eq!(first.name, defaults().testimonials.items[0].name);
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let merged = merge_home_content(&[
            SectionEntry::new("footer", json!({"title": "x"})),
            SectionEntry::new("Hero", json!({"title": "x"})),
            SectionEntry::new("contact_cta", json!({"title": "x"})),
        ]);
        assert_eq!(merged, *defaults());
    }

    #[test]
    fn merge_is_repeatable() {
        let entries = vec![
            SectionEntry::new("hero", json!({"title": "Bienvenue"})),
            SectionEntry::new("services", json!({"items": [null, {"title": "Rénovation"}]})),
        ];
        let first = merge_home_content(&entries);
        let second = merge_home_content(&entries);
        assert_eq!(first, second);
        assert_eq!(first.hero.title, "Bienvenue");
        assert_eq!(first.services.items[0], defaults().services.items[0]);
        assert_eq!(first.services.items[1].title, "Rénovation");
    }

    #[test]
    fn why_us_nested_objects_merge_one_level() {
        let merged = merge_home_content(&[SectionEntry::new(
            "whyUs",
            json!({
                "floatingBadge": {"value": "80+"},
                "image": {"alt": "Atelier"},
                "benefits": [{"title": "Rigueur"}],
                "ctaLabel": "Écrivez-nous"
            }),
        )]);
        assert_eq!(merged.why_us.floating_badge.value, "80+");
        assert_eq!(merged.why_us.floating_badge.label, "clients satisfaits");
        assert_eq!(merged.why_us.image.alt, "Atelier");
        assert_eq!(merged.why_us.image.src, defaults().why_us.image.src);
        assert_eq!(merged.why_us.benefits[0].title, "Rigueur");
        assert_eq!(
            merged.why_us.benefits[0].description,
            defaults().why_us.benefits[0].description
        );
        assert_eq!(merged.why_us.cta_label, "Écrivez-nous");
    }

    #[test]
    fn social_proof_extra_stats_ignored() {
        let stats: Vec<_> = (0..7).map(|i| json!({"value": format!("#{i}")})).collect();
        let merged = merge_home_content(&[SectionEntry::new(
            "socialProof",
            json!({"stats": stats}),
        )]);
        assert_eq!(merged.social_proof.stats.len(), 4);
        assert_eq!(merged.social_proof.stats[3].value, "#3");
        assert_eq!(merged.social_proof.stats[3].label, "experts en studio");
    }

    #[test]
    fn every_section_round_trips() {
        for section in HomeSection::ORDER {
            let mut content = defaults().clone();
            let value = content.section_value(*section);
            content.replace_section(*section, value).unwrap();
            assert_eq!(content, *defaults());
        }
    }
}
