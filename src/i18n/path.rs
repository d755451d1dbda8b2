//! Locale prefixes on site paths.
//!
//! Localized pages live under a locale prefix (`/es/posts/test`); base
//! locale pages have no prefix (`/posts/test`). These helpers read, strip
//! and add that prefix while keeping the caller's slash convention.

use serde::Serialize;

use crate::i18n::{Locale, LocaleRegistry};

/// Find the locale a path is published under.
///
/// The first non-empty segment decides: if it is a locale code that locale
/// is returned, otherwise the path belongs to the base locale.
///
/// - `"/es/posts/test"` -> `es`
/// - `"/posts/test"` -> `en`
/// - `"es-es/posts/test"` -> `es-es`
pub fn resolve_locale(path: &str) -> Locale {
    path.split('/')
        .find(|segment| !segment.is_empty())
        .and_then(|segment| LocaleRegistry::get().get_by_code(segment))
        .map(|config| config.locale)
        .unwrap_or(Locale::BASE)
}

/// Remove the locale prefix from a path, preserving leading and trailing
/// slashes.
///
/// Every segment equal to the resolved locale's code is dropped. When the
/// path resolves to the base locale only literal `en` segments are dropped.
/// Stripping repeats until the result resolves to a locale it no longer
/// contains, so `strip_locale_prefix` is idempotent.
///
/// - `"/es/posts/test"` -> `"/posts/test"`
/// - `"/posts/test"` -> `"/posts/test"`
/// - `"es-es/posts/test"` -> `"posts/test"`
pub fn strip_locale_prefix(path: &str) -> String {
    let mut current = path.to_string();
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(path: &str) -> String {
    let code = resolve_locale(path).code();
    path.split('/')
        .filter(|segment| *segment != code)
        .collect::<Vec<_>>()
        .join("/")
}

/// Publish `path` under `locale`: an existing leading locale segment is
/// replaced, and the base locale gets no prefix at all. Segments after the
/// first are never touched, so a slug like `/posts/en` survives.
pub fn localize_path(path: &str, locale: Locale) -> String {
    let stripped = without_leading_locale(path);
    if locale.is_base() {
        return stripped;
    }

    let code = locale.code();
    match stripped.strip_prefix('/') {
        Some(rest) => format!("/{code}/{rest}"),
        None if stripped.is_empty() => code.to_string(),
        None => format!("{code}/{stripped}"),
    }
}

fn without_leading_locale(path: &str) -> String {
    let mut segments: Vec<&str> = path.split('/').collect();
    if let Some(index) = segments.iter().position(|segment| !segment.is_empty()) {
        if LocaleRegistry::get().is_supported(segments[index]) {
            segments.remove(index);
        }
    }
    segments.join("/")
}

/// A `<link rel="alternate" hreflang="..">` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

/// Alternate-language links for `path`, one per locale plus an
/// `x-default` entry pointing at the base locale.
pub fn alternate_links(site_url: &str, path: &str, locales: &[Locale]) -> Vec<AlternateLink> {
    let origin = site_url.trim_end_matches('/');
    let href = |locale: Locale| {
        let localized = localize_path(path, locale);
        if localized.starts_with('/') {
            format!("{origin}{localized}")
        } else {
            format!("{origin}/{localized}")
        }
    };

    let mut links: Vec<AlternateLink> = locales
        .iter()
        .map(|&locale| AlternateLink {
            hreflang: locale.code().to_string(),
            href: href(locale),
        })
        .collect();

    links.push(AlternateLink {
        hreflang: "x-default".to_string(),
        href: href(Locale::BASE),
    });

    links
}
