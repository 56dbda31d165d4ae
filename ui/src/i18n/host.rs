//! The environment surface the locale store reads from and writes to.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::platform::{self, Platform};
use crate::core::storage::{self, StorageError};

/// Persistence, language detection and the document `lang` hook.
///
/// Every method is best-effort; an unavailable surface is a normal state.
pub trait LocaleHost {
    /// Whether there is a browser-like environment at all. When `false`,
    /// initialization keeps the default locale and touches nothing.
    fn is_available(&self) -> bool;

    /// Raw persisted tag, unvalidated.
    fn persisted_locale(&self) -> Option<String>;

    fn persist_locale(&self, tag: &str) -> Result<(), StorageError>;

    /// The environment's preferred language tag (e.g. `nb-NO`).
    fn language(&self) -> Option<String>;

    /// Mirror the active tag onto `<html lang>`.
    fn reflect_lang(&self, tag: &str);
}

/// `localStorage` + `navigator.language` + `document.documentElement`.
#[derive(Debug, Clone)]
pub struct BrowserHost {
    storage_key: String,
}

impl BrowserHost {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }
}

impl LocaleHost for BrowserHost {
    fn is_available(&self) -> bool {
        Platform::current().is_browser() && storage::is_available()
    }

    fn persisted_locale(&self) -> Option<String> {
        match storage::load_setting(&self.storage_key) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(%err, "no persisted locale");
                None
            }
        }
    }

    fn persist_locale(&self, tag: &str) -> Result<(), StorageError> {
        storage::save_setting(&self.storage_key, tag)
    }

    fn language(&self) -> Option<String> {
        platform::navigator_language()
    }

    fn reflect_lang(&self, tag: &str) {
        if !platform::set_root_attribute("lang", tag) {
            tracing::debug!(tag, "no document to reflect lang onto");
        }
    }
}

/// No environment: nothing persisted, nothing detected, nothing written.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessHost;

impl LocaleHost for HeadlessHost {
    fn is_available(&self) -> bool {
        false
    }

    fn persisted_locale(&self) -> Option<String> {
        None
    }

    fn persist_locale(&self, _tag: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn language(&self) -> Option<String> {
        None
    }

    fn reflect_lang(&self, _tag: &str) {}
}

#[derive(Debug, Default)]
struct MemoryState {
    persisted: Option<String>,
    language: Option<String>,
    lang_attribute: Option<String>,
    writes: usize,
}

/// In-memory host for previews and tests. Clones share state, so a test can
/// hand one clone to the store and inspect another.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_persisted(self, tag: impl Into<String>) -> Self {
        self.state.borrow_mut().persisted = Some(tag.into());
        self
    }

    pub fn with_language(self, tag: impl Into<String>) -> Self {
        self.state.borrow_mut().language = Some(tag.into());
        self
    }

    pub fn persisted(&self) -> Option<String> {
        self.state.borrow().persisted.clone()
    }

    pub fn lang_attribute(&self) -> Option<String> {
        self.state.borrow().lang_attribute.clone()
    }

    /// Number of `persist_locale` calls seen.
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }
}

impl LocaleHost for MemoryHost {
    fn is_available(&self) -> bool {
        true
    }

    fn persisted_locale(&self) -> Option<String> {
        self.persisted()
    }

    fn persist_locale(&self, tag: &str) -> Result<(), StorageError> {
        let mut state = self.state.borrow_mut();
        state.persisted = Some(tag.to_string());
        state.writes += 1;
        Ok(())
    }

    fn language(&self) -> Option<String> {
        self.state.borrow().language.clone()
    }

    fn reflect_lang(&self, tag: &str) {
        self.state.borrow_mut().lang_attribute = Some(tag.to_string());
    }
}
