//! Site-wide settings embedded from `site.toml`.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::i18n::Locale;

const SITE_TOML: &str = include_str!("../../site.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_url: String,
    pub brand: String,
    pub storage_key: String,
    pub unprefixed_locale: Locale,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: "https://purpeon.com".to_string(),
            brand: "Purpeon".to_string(),
            storage_key: "locale".to_string(),
            unprefixed_locale: Locale::No,
        }
    }
}

impl SiteConfig {
    pub fn parse(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }

    /// Route of `locale`'s home page: `/` for the unprefixed locale, `/<tag>` otherwise.
    pub fn home_path(&self, locale: Locale) -> String {
        if locale == self.unprefixed_locale {
            "/".to_string()
        } else {
            format!("/{}", locale.tag())
        }
    }

    pub fn canonical_url(&self, locale: Locale) -> String {
        format!(
            "{}{}",
            self.site_url.trim_end_matches('/'),
            self.home_path(locale)
        )
    }
}

static SITE: Lazy<SiteConfig> = Lazy::new(|| {
    SiteConfig::parse(SITE_TOML).unwrap_or_else(|err| {
        tracing::warn!(%err, "site.toml is invalid; using built-in defaults");
        SiteConfig::default()
    })
});

/// The embedded site configuration.
pub fn site() -> &'static SiteConfig {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let parsed = SiteConfig::parse(SITE_TOML).expect("site.toml parses");
        assert_eq!(&parsed, site());
        assert_eq!(parsed.storage_key, "locale");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let parsed = SiteConfig::parse("brand = \"Test\"").unwrap();
        assert_eq!(parsed.brand, "Test");
        assert_eq!(parsed.storage_key, "locale");
        assert_eq!(parsed.unprefixed_locale, Locale::No);
    }

    #[test]
    fn unknown_locale_is_rejected() {
        assert!(SiteConfig::parse("unprefixed_locale = \"de\"").is_err());
    }

    #[test]
    fn home_paths_prefix_all_but_one_locale() {
        let config = SiteConfig {
            site_url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.home_path(Locale::No), "/");
        assert_eq!(config.home_path(Locale::En), "/en");
        assert_eq!(config.canonical_url(Locale::No), "https://example.com/");
        assert_eq!(config.canonical_url(Locale::En), "https://example.com/en");

        let english_first = SiteConfig {
            unprefixed_locale: Locale::En,
            ..SiteConfig::default()
        };
        assert_eq!(english_first.home_path(Locale::En), "/");
        assert_eq!(english_first.home_path(Locale::No), "/no");
    }

    #[test]
    fn embedded_config_serves_norwegian_unprefixed() {
        assert_eq!(site().unprefixed_locale, Locale::No);
        assert_eq!(site().home_path(Locale::No), "/");
        assert_eq!(site().canonical_url(Locale::En), "https://purpeon.com/en");
    }
}
