//! The closed set of site locales and language-tag detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use super::I18nError;

/// Primary language subtags that select [`Locale::SECONDARY`].
/// Norwegian shows up as the macrolanguage `no` as well as Bokmål / Nynorsk.
const SECONDARY_LANGUAGES: &[&str] = &["no", "nb", "nn"];

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    No,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::No];
    pub const DEFAULT: Locale = Locale::En;
    pub const SECONDARY: Locale = Locale::No;

    /// Tag used for storage, the `lang` attribute and route prefixes.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::No => "no",
        }
    }

    /// Label shown in the language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::No => "Norsk",
        }
    }

    /// Exact tag match (`"en"` / `"no"`). Anything else is not a site locale.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.tag() == tag)
    }

    /// Pick a locale from an environment language tag such as `nb-NO` or `en-US`.
    ///
    /// Only the primary subtag is considered; unknown languages map to the default.
    pub fn from_language_tag(tag: &str) -> Self {
        let primary = primary_subtag(tag);
        if SECONDARY_LANGUAGES.contains(&primary.as_str()) {
            Self::SECONDARY
        } else {
            Self::DEFAULT
        }
    }

    pub fn other(self) -> Self {
        match self {
            Locale::En => Locale::No,
            Locale::No => Locale::En,
        }
    }
}

fn primary_subtag(tag: &str) -> String {
    match tag.trim().parse::<LanguageIdentifier>() {
        Ok(id) => id.language.as_str().to_string(),
        Err(_) => tag
            .split('-')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase(),
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| I18nError::UnknownLocale(s.to_string()))
    }
}
