//! Picking the translated variant of a markdown page.
//!
//! A page is stored as `<stem>.md` for the base locale and
//! `<stem>.<locale>.md` for each translation, e.g. `about.md` and
//! `about.es-es.md`.

use std::path::Path;

use crate::i18n::{resolve_locale, Locale, LocaleRegistry};

/// The page variant chosen for a request, plus every locale the page is
/// available in.
#[derive(Debug)]
pub struct TranslatedPage<'a, T> {
    pub locales: Vec<Locale>,
    pub page: &'a T,
}

/// Locale of a markdown file, from its name.
///
/// Returns `None` for files that are not markdown or whose infix is not a
/// supported locale (`about.draft.md`).
pub fn page_locale(file: &Path) -> Option<Locale> {
    let name = file.file_name()?.to_str()?;
    let stem = name.strip_suffix(".md")?;

    match stem.rsplit_once('.') {
        Some((_, infix)) => LocaleRegistry::get()
            .get_by_code(infix)
            .map(|config| config.locale),
        None => Some(Locale::BASE),
    }
}

/// Select the variant of a page matching the locale of `path`, falling
/// back to the base locale variant.
///
/// `file_of` maps each item to its source file. Returns `None` when
/// neither the requested nor the base variant exists.
pub fn select_translated_page<'a, T, F>(
    path: &str,
    items: &'a [T],
    file_of: F,
) -> Option<TranslatedPage<'a, T>>
where
    F: Fn(&T) -> &Path,
{
    let locale = resolve_locale(path);
    let find = |wanted: Locale| {
        items
            .iter()
            .find(|item| page_locale(file_of(*item)) == Some(wanted))
    };

    let page = find(locale).or_else(|| find(Locale::BASE))?;

    let mut locales: Vec<Locale> = items
        .iter()
        .filter_map(|item| page_locale(file_of(item)))
        .collect();
    locales.sort();
    locales.dedup();

    Some(TranslatedPage { locales, page })
}
