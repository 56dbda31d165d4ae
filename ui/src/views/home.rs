use dioxus::prelude::*;

use crate::components::{FilterPreset, Hero, SectionImage, Services, SiteNavbar};
use crate::core::config::site;
use crate::i18n::{use_i18n, Locale};

const CONTACT_IMAGE: Asset = asset!("/assets/images/contact.svg");

#[cfg(debug_assertions)]
fn log_home_render(locale: Locale) {
    // Render trace for diagnosing locale refresh issues.
    tracing::debug!(%locale, "home render");
}

#[component]
pub fn Home() -> Element {
    let i18n = use_i18n();

    #[cfg(debug_assertions)]
    {
        log_home_render(i18n.locale());
    }

    let email = i18n.t("contact.email").text();

    rsx! {
        document::Title { {i18n.t("meta.title").text()} }
        document::Meta { name: "description", content: i18n.t("meta.description").text() }

        SiteNavbar {}
        main { class: "page page-home",
            Hero {}
            Services {}
            section { id: "contact", class: "contact-section",
                div { class: "section-text",
                    h2 { {i18n.t("contact.title").text()} }
                    p { {i18n.t("contact.body").text()} }
                    a { class: "contact-email", href: "mailto:{email}", "{email}" }
                }
                SectionImage {
                    src: CONTACT_IMAGE.to_string(),
                    alt: i18n.t("contact.title").text(),
                    filter_preset: FilterPreset::Contact,
                    animate_on_scroll: true,
                    max_width: "360px".to_string(),
                }
            }
        }
        footer { class: "site-footer",
            p { "© {site().brand}. " {i18n.t("footer.rights").text()} }
        }
    }
}
