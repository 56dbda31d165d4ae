use dioxus::prelude::*;

use super::hero::{CONTACT_ANCHOR, SERVICES_ANCHOR};
use crate::core::config::site;
use crate::i18n::{use_i18n, Locale};

/// Brand, in-page navigation and the locale switcher.
///
/// The switcher writes through the shared store; every component reading
/// `use_i18n()` re-renders from the store's change notification.
#[component]
pub fn SiteNavbar() -> Element {
    let i18n = use_i18n();
    let current = i18n.locale();
    let home = site().home_path(current);

    let on_change = {
        let i18n = i18n.clone();
        move |evt: FormEvent| {
            let tag = evt.value();
            if let Err(err) = i18n.set_locale_tag(&tag) {
                tracing::warn!(%err, "locale switch ignored");
            }
        }
    };

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    a { class: "navbar__brand-link", href: "{home}",
                        span { class: "navbar__brand-mark", "{site().brand}" }
                    }
                    span { class: "navbar__brand-subtitle", {i18n.t("nav.tagline").text()} }
                }

                nav { class: "navbar__links",
                    a { class: "navbar__link", href: SERVICES_ANCHOR, {i18n.t("nav.services").text()} }
                    a { class: "navbar__link", href: CONTACT_ANCHOR, {i18n.t("nav.contact").text()} }
                }

                div { class: "navbar__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {i18n.t("nav.language").text()}
                    }
                    select {
                        id: "locale-select",
                        value: "{current.tag()}",
                        oninput: on_change,
                        for locale in Locale::ALL {
                            option {
                                key: "{locale.tag()}",
                                value: "{locale.tag()}",
                                selected: locale == current,
                                "{locale.native_name()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
