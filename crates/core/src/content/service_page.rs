//! Section shapes shared by the architecture and branding service pages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::merge::{field, merge_image, merge_list, merge_record, merge_records, merge_string_list};
use super::{Card, ImageRef};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHero {
    pub title: String,
    pub subtitle: String,
    pub breadcrumb_home_label: String,
    pub breadcrumb_current_label: String,
    pub background_image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intro {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceList {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<ServiceOffering>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossLinks {
    pub title: String,
    pub cards: Vec<Card>,
}

pub fn merge_hero(defaults: &ServiceHero, value: Option<&Value>) -> ServiceHero {
    ServiceHero {
        background_image: merge_image(
            &defaults.background_image,
            field(value, "backgroundImage"),
        ),
        ..merge_record(defaults, value)
    }
}

pub fn merge_offering(defaults: &ServiceOffering, value: &Value) -> ServiceOffering {
    let value = Some(value);
    ServiceOffering {
        features: merge_string_list(&defaults.features, field(value, "features")),
        image: merge_image(&defaults.image, field(value, "image")),
        ..merge_record(defaults, value)
    }
}

pub fn merge_services(defaults: &ServiceList, value: Option<&Value>) -> ServiceList {
    ServiceList {
        items: merge_list(&defaults.items, field(value, "items"), merge_offering),
        ..merge_record(defaults, value)
    }
}

pub fn merge_cross_links(defaults: &CrossLinks, value: Option<&Value>) -> CrossLinks {
    CrossLinks {
        cards: merge_records(&defaults.cards, field(value, "cards")),
        ..merge_record(defaults, value)
    }
}
