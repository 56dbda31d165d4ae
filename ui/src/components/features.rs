use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// One feature card. Lists of these come straight from the dictionaries
/// (`hero.features`, `services.items`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Iconify icon name, e.g. `mdi:code-braces`.
    pub icon: String,
    pub title: String,
    pub description: String,
}

pub fn features_class(force_two_lines: bool) -> &'static str {
    if force_two_lines {
        "features features-force-two-lines"
    } else {
        "features"
    }
}

/// Render key for a card. Titles alone may repeat, so the position is part of it.
pub fn feature_key(index: usize, feature: &Feature) -> String {
    format!("{index}-{}", feature.icon)
}

#[component]
pub fn Features(features: Vec<Feature>, #[props(default)] force_two_lines: bool) -> Element {
    let cards: Vec<(String, Feature)> = features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| (feature_key(index, &feature), feature))
        .collect();

    rsx! {
        div { class: features_class(force_two_lines),
            for (key, feature) in cards {
                article { key: "{key}", class: "feature-card",
                    div { class: "feature-icon-wrapper",
                        iconify-icon {
                            "icon": "{feature.icon}",
                            "width": "28",
                            "height": "28",
                            "aria-hidden": "true",
                        }
                    }
                    h3 { class: "feature-title", "{feature.title}" }
                    p { class: "feature-description", "{feature.description}" }
                }
            }
        }
    }
}
