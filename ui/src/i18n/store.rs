//! The single source of truth for the active locale.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::host::LocaleHost;
use super::{I18nError, Locale};

/// Handle returned by [`LocaleStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(Locale)>;

/// Active locale plus its subscribers.
///
/// Single-threaded: every call runs to completion, the last write wins, and
/// subscribers are notified synchronously from inside [`set_locale`](Self::set_locale).
pub struct LocaleStore {
    active: Cell<Locale>,
    host: Box<dyn LocaleHost>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("active", &self.active.get())
            .field("listeners", &self.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}

impl LocaleStore {
    /// A store on the default locale. Nothing is read from `host` until
    /// [`initialize`](Self::initialize).
    pub fn new(host: impl LocaleHost + 'static) -> Self {
        Self {
            active: Cell::new(Locale::DEFAULT),
            host: Box::new(host),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// [`new`](Self::new) followed by [`initialize`](Self::initialize).
    pub fn initialized(host: impl LocaleHost + 'static) -> Self {
        let store = Self::new(host);
        store.initialize();
        store
    }

    /// Adopt the persisted locale, else the environment's language, else the default,
    /// and reflect it onto the document. A no-op without an environment.
    pub fn initialize(&self) -> Locale {
        let Some(locale) = resolve_initial(self.host.as_ref()) else {
            tracing::debug!("no locale environment; keeping {}", self.active.get());
            return self.active.get();
        };
        self.active.set(locale);
        self.host.reflect_lang(locale.tag());
        tracing::debug!(%locale, "locale initialized");
        self.notify(locale);
        locale
    }

    pub fn locale(&self) -> Locale {
        self.active.get()
    }

    /// Switch the active locale, persist it and notify every subscriber.
    ///
    /// Redundant sets still notify.
    pub fn set_locale(&self, locale: Locale) {
        self.active.set(locale);
        if let Err(err) = self.host.persist_locale(locale.tag()) {
            tracing::debug!(%err, "locale not persisted");
        }
        self.host.reflect_lang(locale.tag());
        tracing::debug!(%locale, "locale changed");
        self.notify(locale);
    }

    /// String entry point (e.g. a `<select>` value). Unknown tags are rejected
    /// and leave the store untouched.
    pub fn set_locale_tag(&self, tag: &str) -> Result<(), I18nError> {
        let locale = tag.parse::<Locale>()?;
        self.set_locale(locale);
        Ok(())
    }

    pub fn toggle(&self) -> Locale {
        let next = self.locale().other();
        self.set_locale(next);
        next
    }

    pub fn subscribe(&self, listener: impl Fn(Locale) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self, locale: Locale) {
        // Snapshot so listeners may (un)subscribe while being called.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(locale);
        }
    }
}

fn resolve_initial(host: &dyn LocaleHost) -> Option<Locale> {
    if !host.is_available() {
        return None;
    }
    if let Some(saved) = host.persisted_locale() {
        match Locale::from_tag(&saved) {
            Some(locale) => return Some(locale),
            None => tracing::warn!(saved = %saved, "ignoring unknown persisted locale"),
        }
    }
    Some(
        host.language()
            .map(|tag| Locale::from_language_tag(&tag))
            .unwrap_or(Locale::DEFAULT),
    )
}
