use dioxus::prelude::*;

use ui::components::THEME_CSS;
use ui::core::config::site;
use ui::i18n::{use_i18n, I18nProvider, Locale};
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/:lang")]
    LocalizedHome { lang: String },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const ICONIFY_SCRIPT: &str = "https://code.iconify.design/iconify-icon/2.1.0/iconify-icon.min.js";

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: THEME_CSS }
        // <iconify-icon> used by the feature cards
        document::Script { src: ICONIFY_SCRIPT }

        I18nProvider {
            Router::<Route> {}
        }
    }
}

/// Shared head entries for every route: one `hreflang` alternate per locale.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        for locale in Locale::ALL {
            document::Link {
                key: "{locale.tag()}",
                rel: "alternate",
                hreflang: locale.tag().to_string(),
                href: site().canonical_url(locale),
            }
        }
        Outlet::<Route> {}
    }
}

/// `/:lang`: adopt the prefixed locale, then render the same home view.
/// Unknown prefixes keep whatever locale is active. The store is read without
/// subscribing so a later switch from the navbar is not undone.
#[component]
fn LocalizedHome(lang: String) -> Element {
    let i18n = use_i18n();

    use_effect(use_reactive((&lang,), move |(lang,)| {
        match Locale::from_tag(&lang) {
            Some(locale) if locale != i18n.handle().locale() => i18n.set_locale(locale),
            Some(_) => {}
            None => tracing::debug!(lang = %lang, "ignoring unknown locale prefix"),
        }
    }));

    rsx! { Home {} }
}
