use thiserror::Error;

use super::Locale;

#[derive(Debug, Error)]
pub enum I18nError {
    /// A tag outside the closed locale set.
    #[error("unknown locale tag '{0}'")]
    UnknownLocale(String),

    #[error("dictionary for '{locale}' is not valid JSON: {source}")]
    Dictionary {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    #[error("no embedded dictionary for '{0}'")]
    MissingDictionary(Locale),

    /// The value at `key` does not have the shape the caller asked for.
    #[error("translation '{key}' has an unexpected shape: {source}")]
    Shape {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
