use dioxus::prelude::*;

use super::{
    AnimationDirection, Feature, Features, FilterPreset, ImageAlignment, SectionImage,
};
use crate::i18n::use_i18n;

const SERVICES_IMAGE: Asset = asset!("/assets/images/services.svg");

#[component]
pub fn Services() -> Element {
    let i18n = use_i18n();
    let items: Vec<Feature> = i18n.t("services.items").list();

    rsx! {
        section { id: "services", class: "services-section",
            div { class: "services-content",
                div { class: "section-text",
                    h2 { {i18n.t("services.title").text()} }
                    p { {i18n.t("services.intro").text()} }
                    p { {i18n.t("services.description").text()} }
                }
                SectionImage {
                    src: SERVICES_IMAGE.to_string(),
                    alt: i18n.t("services.image_alt").text(),
                    width: "480".to_string(),
                    height: "360".to_string(),
                    alignment: ImageAlignment::End,
                    filter_preset: FilterPreset::Services,
                    animate_on_scroll: true,
                    animation_direction: AnimationDirection::Right,
                    border_radius: "16px".to_string(),
                }
            }
            Features { features: items, force_two_lines: true }
        }
    }
}
