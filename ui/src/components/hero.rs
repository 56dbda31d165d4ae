use dioxus::prelude::*;

use super::{ButtonVariant, Feature, Features, FilterPreset, SectionButton, SectionImage};
use crate::i18n::use_i18n;

const HERO_IMAGE: Asset = asset!("/assets/images/hero.svg");

/// Anchors the hero's call-to-action buttons point at.
pub const SERVICES_ANCHOR: &str = "#services";
pub const CONTACT_ANCHOR: &str = "#contact";

#[component]
pub fn Hero() -> Element {
    let i18n = use_i18n();
    let features: Vec<Feature> = i18n.t("hero.features").list();

    rsx! {
        section { class: "hero",
            div { class: "hero-inner",
                div { class: "hero-text",
                    h1 { {i18n.t("hero.title").text()} }
                    p { class: "hero-subtitle", {i18n.t("hero.subtitle").text()} }
                    p { class: "hero-tagline", {i18n.t("hero.tagline").text()} }
                    div { class: "hero-buttons",
                        SectionButton {
                            variant: ButtonVariant::Primary,
                            href: SERVICES_ANCHOR.to_string(),
                            {i18n.t("hero.cta.services").text()}
                        }
                        SectionButton {
                            variant: ButtonVariant::Secondary,
                            href: CONTACT_ANCHOR.to_string(),
                            {i18n.t("hero.cta.sales").text()}
                        }
                    }
                }
                SectionImage {
                    src: HERO_IMAGE.to_string(),
                    alt: i18n.t("hero.image_alt").text(),
                    width: "560".to_string(),
                    height: "420".to_string(),
                    filter_preset: FilterPreset::Hero,
                    badge: rsx! {
                        span { class: "hero-badge", {i18n.t("hero.badge").text()} }
                    },
                }
            }
            Features { features }
        }
    }
}
