//! The contact page is not editable; its content is fixed here.

use std::sync::LazyLock;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactPage {
    pub title: &'static str,
    pub description: &'static str,
    pub channels: Vec<ContactChannel>,
    pub faqs: Vec<Faq>,
}

pub fn contact_page() -> &'static ContactPage {
    &CONTACT
}

static CONTACT: LazyLock<ContactPage> = LazyLock::new(|| ContactPage {
    title: "Contact — Consultation Gratuite",
    description: "Contactez Noun Studio pour discuter de votre projet d'architecture ou de branding. Consultation gratuite, réponse sous 48h.",
    channels: vec![
        ContactChannel {
            label: "Email",
            value: "contact@nounstudio.dz",
            href: Some("mailto:contact@nounstudio.dz"),
        },
        ContactChannel {
            label: "Localisation",
            value: "Algérie & France",
            href: None,
        },
    ],
    faqs: vec![
        Faq {
            question: "Quels types de projets réalisez-vous ?",
            answer: "Nous intervenons sur des projets d'architecture résidentielle et commerciale, de rénovation, de visualisation 3D, ainsi que sur la création d'identités visuelles complètes (logo, charte graphique, supports de communication). Chaque projet est traité sur mesure.",
        },
        Faq {
            question: "Comment démarre un projet ?",
            answer: "Tout commence par un échange par email ou via notre formulaire. Nous organisons ensuite une consultation gratuite pour comprendre vos besoins, votre terrain (pour l'architecture) ou votre activité (pour le branding), puis nous vous envoyons une proposition détaillée.",
        },
        Faq {
            question: "Intervenez-vous en France ?",
            answer: "Oui, notre studio est basé en Algérie mais notre portée professionnelle s'étend à la France, notamment pour les projets de branding et d'identité visuelle qui peuvent être réalisés à distance.",
        },
        Faq {
            question: "Quels sont vos tarifs ?",
            answer: "Nos tarifs varient selon la nature et la complexité du projet. Nous proposons systématiquement un devis détaillé et transparent après la consultation initiale. Il n'y a aucun engagement tant que vous n'avez pas validé la proposition.",
        },
        Faq {
            question: "Combien de temps dure un projet ?",
            answer: "Une identité visuelle complète prend généralement 3 à 6 semaines. Un projet d'architecture résidentiel, de la conception à la livraison des plans, peut prendre 2 à 4 mois. Le suivi de chantier dépend de la durée de construction.",
        },
    ],
});
