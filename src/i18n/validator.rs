//! Translation table consistency checks.
//!
//! Run once when the store is built. Problems found here are reported, not
//! fatal: a locale missing a key falls back to the base locale at lookup
//! time. The only error is a missing base table, since nothing could fall
//! back to it.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::i18n::Locale;

pub type TranslationTable = HashMap<Locale, HashMap<String, String>>;

/// Validation report containing errors and warnings about a set of tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

pub struct TranslationValidator;

static URL_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Check every locale's table against the base locale's table.
    ///
    /// Reports:
    /// - base keys missing from other locales (one warning per key)
    /// - keys present in a locale but not in the base locale
    /// - empty values (they fall back exactly like missing keys)
    /// - URLs in the base value that the translation does not keep
    pub fn validate(tables: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        let Some(base) = tables.get(&Locale::BASE) else {
            report
                .errors
                .push(format!("i18n: base locale \"{}\" has no translations", Locale::BASE));
            return report;
        };

        let mut base_keys: Vec<&String> = base.keys().collect();
        base_keys.sort();

        for key in &base_keys {
            let missing: Vec<&str> = Locale::ALL
                .iter()
                .filter(|locale| !tables.get(*locale).is_some_and(|table| table.contains_key(*key)))
                .map(|locale| locale.code())
                .collect();

            if !missing.is_empty() {
                report.warnings.push(format!(
                    "i18n: key \"{}\" is missing for locales: {}",
                    key,
                    missing.join(", ")
                ));
            }
        }

        for locale in Locale::ALL {
            let Some(table) = tables.get(&locale) else {
                continue;
            };

            let mut keys: Vec<&String> = table.keys().collect();
            keys.sort();

            for key in keys {
                let value = &table[key];
                match base.get(key) {
                    None => report.warnings.push(format!(
                        "i18n: key \"{}\" in {} does not exist in {}",
                        key,
                        locale,
                        Locale::BASE
                    )),
                    Some(_) if value.is_empty() => report.warnings.push(format!(
                        "i18n: key \"{}\" is empty in {}",
                        key, locale
                    )),
                    Some(base_value) if !locale.is_base() => {
                        let expected = Self::extract_urls(base_value);
                        let actual = Self::extract_urls(value);
                        if expected != actual {
                            report.warnings.push(format!(
                                "i18n: key \"{}\" in {} has URLs {:?}, expected {:?}",
                                key, locale, actual, expected
                            ));
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        report
    }

    fn extract_urls(text: &str) -> Vec<&str> {
        let regex = URL_REGEX.get_or_init(|| {
            Regex::new(r#"https?://[^\s)\]"'<>]+"#).expect("URL pattern is valid")
        });

        regex.find_iter(text).map(|m| m.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_tables() -> TranslationTable {
        HashMap::from([
            (Locale::En, table(&[("title", "Posts"), ("home", "Home")])),
            (Locale::Es, table(&[("title", "Artículos"), ("home", "Inicio")])),
            (Locale::EsEs, table(&[("title", "Artículos"), ("home", "Inicio")])),
        ])
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_new_is_clean() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_complete_tables_are_clean() {
        let report = TranslationValidator::validate(&full_tables());
        assert!(report.is_clean(), "unexpected report: {:?}", report);
    }

    #[test]
    fn test_missing_base_is_error() {
        let mut tables = full_tables();
        tables.remove(&Locale::En);

        let report = TranslationValidator::validate(&tables);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("base locale"));
    }

    #[test]
    fn test_missing_key_lists_locales() {
        let mut tables = full_tables();
        tables.get_mut(&Locale::Es).unwrap().remove("title");
        tables.get_mut(&Locale::EsEs).unwrap().remove("title");

        let report = TranslationValidator::validate(&tables);
        assert!(!report.has_errors());
        assert_eq!(
            report.warnings,
            vec!["i18n: key \"title\" is missing for locales: es, es-es".to_string()]
        );
    }

    #[test]
    fn test_missing_locale_table_reports_every_key() {
        let mut tables = full_tables();
        tables.remove(&Locale::EsEs);

        let report = TranslationValidator::validate(&tables);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings.iter().all(|w| w.ends_with("locales: es-es")));
    }

    #[test]
    fn test_orphan_key_warns() {
        let mut tables = full_tables();
        tables
            .get_mut(&Locale::Es)
            .unwrap()
            .insert("stale".to_string(), "Viejo".to_string());

        let report = TranslationValidator::validate(&tables);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("\"stale\" in es does not exist in en"));
    }

    #[test]
    fn test_empty_value_warns() {
        let mut tables = full_tables();
        tables
            .get_mut(&Locale::Es)
            .unwrap()
            .insert("home".to_string(), String::new());

        let report = TranslationValidator::validate(&tables);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("is empty in es"));
    }

    #[test]
    fn test_url_mismatch_warns() {
        let mut tables = full_tables();
        for locale in Locale::ALL {
            tables
                .get_mut(&locale)
                .unwrap()
                .insert("rss".to_string(), "Feed: https://example.com/rss.xml".to_string());
        }
        tables
            .get_mut(&Locale::EsEs)
            .unwrap()
            .insert("rss".to_string(), "Canal: https://example.com/es/rss.xml".to_string());

        let report = TranslationValidator::validate(&tables);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("\"rss\" in es-es has URLs"));
    }

    #[test]
    fn test_extract_urls() {
        let urls = TranslationValidator::extract_urls(
            "See (https://a.dev/x) and \"http://b.dev\" but not ftp://c.dev",
        );
        assert_eq!(urls, vec!["https://a.dev/x", "http://b.dev"]);
    }
}
