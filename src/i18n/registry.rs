//! Locale registry: single source of truth for the site's locales.
//!
//! The set of locales is closed. Every `Locale` variant has exactly one
//! entry here, and this table is the only place locale codes are spelled
//! out. Exactly one entry is the base locale (`Locale::BASE`).

use std::sync::OnceLock;

use crate::i18n::Locale;

/// Metadata for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    pub locale: Locale,

    /// Code used in URL prefixes and translation file names (e.g. "es-es")
    pub code: &'static str,

    /// English name of the locale (e.g. "Spanish (Spain)")
    pub name: &'static str,

    /// Name of the locale in its own language (e.g. "Español (España)")
    pub native_name: &'static str,

    /// Whether this is the base locale (only one should be true)
    pub is_base: bool,
}

/// Global locale registry, initialized on first access and immutable thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Look up a locale by its exact code. Matching is case-sensitive,
    /// the same way URL segments and file stems are compared.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|config| config.code == code)
    }

    pub fn get_by_locale(&self, locale: Locale) -> Option<&LocaleConfig> {
        self.locales.iter().find(|config| config.locale == locale)
    }

    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            locale: Locale::En,
            code: "en",
            name: "English",
            native_name: "English",
            is_base: true,
        },
        LocaleConfig {
            locale: Locale::Es,
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_base: false,
        },
        LocaleConfig {
            locale: Locale::EsEs,
            code: "es-es",
            name: "Spanish (Spain)",
            native_name: "Español (España)",
            is_base: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_every_locale_variant_is_registered() {
        let registry = LocaleRegistry::get();
        for locale in Locale::ALL {
            let config = registry.get_by_locale(locale).expect("registered");
            assert_eq!(config.locale, locale);
            assert_eq!(registry.get_by_code(config.code).unwrap().locale, locale);
        }
        assert_eq!(registry.list_all().len(), Locale::ALL.len());
    }

    #[test]
    fn test_single_base_matches_constant() {
        let base: Vec<_> = LocaleRegistry::get()
            .list_all()
            .into_iter()
            .filter(|config| config.is_base)
            .collect();
        assert_eq!(base.len(), 1);
        assert_eq!(base[0].locale, Locale::BASE);
        assert_eq!(base[0].code, "en");
    }

    #[test]
    fn test_get_by_code_region_locale() {
        let config = LocaleRegistry::get().get_by_code("es-es").unwrap();
        assert_eq!(config.name, "Spanish (Spain)");
        assert!(!config.is_base);
    }

    #[test]
    fn test_get_by_code_is_case_sensitive() {
        let registry = LocaleRegistry::get();
        assert!(registry.get_by_code("ES").is_none());
        assert!(registry.get_by_code("es-ES").is_none());
    }

    #[test]
    fn test_is_supported() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_supported("en"));
        assert!(registry.is_supported("es-es"));
        assert!(!registry.is_supported("fr"));
        assert!(!registry.is_supported(""));
    }
}
