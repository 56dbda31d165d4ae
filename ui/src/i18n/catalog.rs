//! Static translation dictionaries and dotted-key lookup.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use rust_embed::Embed;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{I18nError, Locale};

/// One JSON dictionary per locale, named `<tag>.json`.
#[derive(Embed)]
#[folder = "i18n"]
struct Dictionaries;

/// Every locale's dictionary, loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    dictionaries: BTreeMap<Locale, Value>,
}

impl Catalog {
    /// A catalog with no dictionaries; every lookup falls back to its key.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The dictionaries embedded from `ui/i18n/`.
    pub fn bundled() -> Result<Self, I18nError> {
        let mut catalog = Self::empty();
        for locale in Locale::ALL {
            let file = format!("{}.json", locale.tag());
            let asset = Dictionaries::get(&file).ok_or(I18nError::MissingDictionary(locale))?;
            let dictionary = serde_json::from_slice(&asset.data)
                .map_err(|source| I18nError::Dictionary { locale, source })?;
            catalog.insert(locale, dictionary);
        }
        Ok(catalog)
    }

    /// Build a catalog from JSON source text.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (Locale, &'a str)>,
    ) -> Result<Self, I18nError> {
        let mut catalog = Self::empty();
        for (locale, src) in sources {
            let dictionary = serde_json::from_str(src)
                .map_err(|source| I18nError::Dictionary { locale, source })?;
            catalog.insert(locale, dictionary);
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, locale: Locale, dictionary: Value) {
        self.dictionaries.insert(locale, dictionary);
    }

    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.dictionaries.keys().copied()
    }

    /// The whole dictionary tree for `locale`.
    pub fn messages(&self, locale: Locale) -> Option<&Value> {
        self.dictionaries.get(&locale)
    }

    /// Resolve a dotted key against `locale`'s dictionary.
    pub fn lookup(&self, locale: Locale, key: &str) -> Translation {
        let value = self
            .messages(locale)
            .and_then(|root| walk(root, key))
            .cloned();
        Translation {
            key: key.to_string(),
            value,
        }
    }

    /// Dotted paths of every leaf in `locale`'s dictionary. Arrays count as leaves,
    /// `null` leaves do not.
    pub fn key_paths(&self, locale: Locale) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        if let Some(root) = self.messages(locale) {
            collect_paths(root, &mut String::new(), &mut paths);
        }
        paths
    }

    /// Leaf paths of the default locale that `locale` does not provide.
    pub fn missing_keys(&self, locale: Locale) -> Vec<String> {
        let present = self.key_paths(locale);
        self.key_paths(Locale::DEFAULT)
            .into_iter()
            .filter(|path| !present.contains(path))
            .collect()
    }
}

/// Descend one level per `.`-separated segment. Numeric segments index arrays.
/// A `null` at the end of the path counts as absent.
fn walk<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.')
        .try_fold(root, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
        .filter(|value| !value.is_null())
}

fn collect_paths(node: &Value, prefix: &mut String, out: &mut BTreeSet<String>) {
    match node {
        Value::Object(map) if !map.is_empty() => {
            for (name, child) in map {
                let len = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(name);
                collect_paths(child, prefix, out);
                prefix.truncate(len);
            }
        }
        // Resolves as absent, so it is not a provided path either.
        Value::Null => {}
        _ => {
            if !prefix.is_empty() {
                out.insert(prefix.clone());
            }
        }
    }
}

/// Result of a lookup: the value at the key, or the key itself when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    key: String,
    value: Option<Value>,
}

impl Translation {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Text for display. Non-text values render as the key, so a wrong key is visible.
    pub fn text(&self) -> String {
        match &self.value {
            Some(Value::String(text)) => text.clone(),
            Some(scalar @ (Value::Number(_) | Value::Bool(_))) => scalar.to_string(),
            _ => self.key.clone(),
        }
    }

    /// The found value, or the key as a JSON string.
    pub fn into_value(self) -> Value {
        self.value.unwrap_or(Value::String(self.key))
    }

    /// Interpret the value as `T`. A missing key is tried as its fallback string.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, I18nError> {
        let result = match &self.value {
            Some(value) => serde_json::from_value(value.clone()),
            None => serde_json::from_value(Value::String(self.key.clone())),
        };
        result.map_err(|source| I18nError::Shape {
            key: self.key.clone(),
            source,
        })
    }

    /// Structured list content (feature cards and the like). Empty when the
    /// key is missing or the value is not a list of `T`.
    pub fn list<T: DeserializeOwned>(&self) -> Vec<T> {
        match self.deserialize::<Vec<T>>() {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(key = %self.key, %err, "expected a list translation");
                Vec::new()
            }
        }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
