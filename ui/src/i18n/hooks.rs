use dioxus::prelude::*;

use super::{BrowserHost, HeadlessHost, I18n, I18nError, Locale, Translation};
use crate::core::config::site;

/// Creates the site's [`I18n`] once, initializes it from the browser, and
/// provides it (plus a `Signal<Locale>` mirror) to every descendant.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let i18n = use_hook(|| I18n::bundled(BrowserHost::new(site().storage_key.as_str())));
    let locale = use_signal(|| i18n.locale());

    let subscription = use_hook({
        let i18n = i18n.clone();
        move || {
            i18n.store().subscribe(move |next| {
                let mut locale = locale;
                locale.set(next);
            })
        }
    });
    use_drop({
        let i18n = i18n.clone();
        move || {
            i18n.store().unsubscribe(subscription);
        }
    });

    use_context_provider(|| i18n.clone());
    use_context_provider(|| locale);

    rsx! { {children} }
}

/// Component-side view of the i18n handle. Reading through it subscribes the
/// calling component to locale changes.
#[derive(Clone, PartialEq)]
pub struct UseI18n {
    i18n: I18n,
    locale: Signal<Locale>,
}

impl UseI18n {
    /// Current locale (reactive).
    pub fn locale(&self) -> Locale {
        (self.locale)()
    }

    /// Resolve `key` in the current locale (reactive).
    pub fn t(&self, key: &str) -> Translation {
        let locale = (self.locale)();
        self.i18n.catalog().lookup(locale, key)
    }

    pub fn set_locale(&self, locale: Locale) {
        self.i18n.set_locale(locale);
    }

    pub fn set_locale_tag(&self, tag: &str) -> Result<(), I18nError> {
        self.i18n.set_locale_tag(tag)
    }

    pub fn handle(&self) -> &I18n {
        &self.i18n
    }
}

/// The provided i18n context. Outside an [`I18nProvider`] a headless instance
/// is used instead of panicking; it is created once and shared from the root
/// scope, so every component outside a provider sees the same locale.
pub fn use_i18n() -> UseI18n {
    use_hook(|| {
        match (
            try_consume_context::<I18n>(),
            try_consume_context::<Signal<Locale>>(),
        ) {
            (Some(i18n), Some(locale)) => UseI18n { i18n, locale },
            _ => headless_fallback(),
        }
    })
}

#[derive(Clone)]
struct HeadlessFallback(UseI18n);

fn headless_fallback() -> UseI18n {
    if let Some(HeadlessFallback(shared)) = try_consume_context::<HeadlessFallback>() {
        return shared;
    }
    tracing::warn!("use_i18n called outside I18nProvider; using a shared headless instance");
    let i18n = I18n::bundled(HeadlessHost);
    let locale = Signal::new_in_scope(i18n.locale(), ScopeId::ROOT);
    i18n.store().subscribe(move |next| {
        let mut locale = locale;
        locale.set(next);
    });
    let shared = UseI18n { i18n, locale };
    provide_root_context(HeadlessFallback(shared.clone()));
    shared
}
