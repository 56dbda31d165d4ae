//! Internationalization for the site: two locales, JSON dictionaries, dotted keys.
//!
//! Pieces:
//! - [`Locale`] – the closed set (`en`, `no`) and language-tag detection.
//! - [`Catalog`] – one embedded JSON dictionary per locale (`ui/i18n/<tag>.json`)
//!   and the dotted-path resolver returning a [`Translation`].
//! - [`LocaleStore`] – the active locale, its persistence through a [`LocaleHost`],
//!   and change subscriptions.
//! - [`I18n`] – store + catalog in one cloneable handle.
//! - [`I18nProvider`] / [`use_i18n`] – the Dioxus bridge: the handle is provided
//!   as context and mirrored into a `Signal<Locale>` so components re-render.
//!
//! Usage in a component (inside an `I18nProvider`):
//! ```ignore
//! let i18n = use_i18n();
//! rsx! { h1 { {i18n.t("hero.title").text()} } }
//! ```
//!
//! Missing keys never fail: `t("hero.missing")` renders `hero.missing`.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

mod catalog;
mod error;
mod hooks;
mod host;
mod locale;
mod store;

pub use catalog::{Catalog, Translation};
pub use error::I18nError;
pub use hooks::{use_i18n, I18nProvider, UseI18n};
pub use host::{BrowserHost, HeadlessHost, LocaleHost, MemoryHost};
pub use locale::Locale;
pub use store::{LocaleStore, SubscriptionId};

/// The active locale and the dictionaries, shared by reference.
#[derive(Clone)]
pub struct I18n {
    store: Rc<LocaleStore>,
    catalog: Rc<Catalog>,
}

impl I18n {
    pub fn new(store: LocaleStore, catalog: Catalog) -> Self {
        Self {
            store: Rc::new(store),
            catalog: Rc::new(catalog),
        }
    }

    /// Bundled dictionaries behind `host`, initialized. Broken dictionaries
    /// degrade to an empty catalog so every key renders as itself.
    pub fn bundled(host: impl LocaleHost + 'static) -> Self {
        let catalog = Catalog::bundled().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to an empty catalog");
            Catalog::empty()
        });
        Self::new(LocaleStore::initialized(host), catalog)
    }

    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn locale(&self) -> Locale {
        self.store.locale()
    }

    pub fn set_locale(&self, locale: Locale) {
        self.store.set_locale(locale);
    }

    pub fn set_locale_tag(&self, tag: &str) -> Result<(), I18nError> {
        self.store.set_locale_tag(tag)
    }

    /// Look `key` up in the active locale's dictionary.
    pub fn t(&self, key: &str) -> Translation {
        self.catalog.lookup(self.locale(), key)
    }

    /// The active locale's whole dictionary.
    pub fn messages(&self) -> Option<&Value> {
        self.catalog.messages(self.locale())
    }
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("locale", &self.locale())
            .finish_non_exhaustive()
    }
}
