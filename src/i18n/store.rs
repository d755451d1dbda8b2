//! Translation store: per-locale string tables loaded once at startup.
//!
//! The store is built by `TranslationStore::load` (or `from_tables`) and is
//! read-only afterwards, so it can be shared behind an `Arc` by any number
//! of page renders. Holding a store is the guarantee that loading finished.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::i18n::{
    resolve_locale, Locale, LookupMetrics, MetricsReport, TranslationTable, TranslationValidator,
    ValidationReport,
};

/// Anything that knows the path of the page being rendered.
pub trait RequestContext {
    fn pathname(&self) -> &str;
}

/// Minimal request context carrying only the URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub pathname: String,
}

impl PageContext {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
        }
    }
}

impl RequestContext for PageContext {
    fn pathname(&self) -> &str {
        &self.pathname
    }
}

impl RequestContext for str {
    fn pathname(&self) -> &str {
        self
    }
}

impl RequestContext for String {
    fn pathname(&self) -> &str {
        self
    }
}

#[derive(Debug)]
pub struct TranslationStore {
    tables: TranslationTable,
    source_dir: Option<PathBuf>,
    report: ValidationReport,
    metrics: LookupMetrics,
}

impl TranslationStore {
    /// Load every `<locale>.json` file in `dir`.
    ///
    /// Files whose name is not a supported locale are skipped, and a
    /// supported locale without a file only produces a warning. A missing
    /// base locale file is an error.
    pub async fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        let mut entries = tokio::fs::read_dir(dir).await.map_err(|source| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|source| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        })? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            match Locale::from_code(stem) {
                Ok(locale) => files.push((locale, path)),
                Err(_) => warn!(
                    "Skipping {}: \"{}\" is not a supported locale",
                    path.display(),
                    stem
                ),
            }
        }

        let tables: TranslationTable = try_join_all(
            files
                .into_iter()
                .map(|(locale, path)| async move { Ok::<_, Error>((locale, read_table(&path).await?)) }),
        )
        .await?
        .into_iter()
        .collect();

        if !tables.contains_key(&Locale::BASE) {
            return Err(Error::MissingBaseLocale {
                dir: dir.to_path_buf(),
                file: file_name(Locale::BASE),
            });
        }

        for locale in Locale::ALL {
            if !tables.contains_key(&locale) {
                warn!(
                    "i18n: {} is missing from {}, {} pages will use {}",
                    file_name(locale),
                    dir.display(),
                    locale,
                    Locale::BASE
                );
            }
        }

        let store = Self::build(tables, Some(dir.to_path_buf()));
        info!(
            "Loaded translations for {} locales from {}",
            store.tables.len(),
            dir.display()
        );
        Ok(store)
    }

    /// Build a store from tables already in memory. Runs the same
    /// consistency check as `load`.
    pub fn from_tables(tables: TranslationTable) -> Result<Self> {
        if !tables.contains_key(&Locale::BASE) {
            return Err(Error::MissingBaseLocale {
                dir: PathBuf::new(),
                file: file_name(Locale::BASE),
            });
        }
        Ok(Self::build(tables, None))
    }

    fn build(tables: TranslationTable, source_dir: Option<PathBuf>) -> Self {
        let report = TranslationValidator::validate(&tables);
        for warning in &report.warnings {
            warn!("{}", warning);
        }

        Self {
            tables,
            source_dir,
            report,
            metrics: LookupMetrics::new(),
        }
    }

    /// Translate `key` for the page in `ctx`.
    ///
    /// Falls back to the base locale (with a warning) when the page's locale
    /// has no value, or an empty one, for `key`. Fails with
    /// `Error::MissingTranslation` when the base locale has none either.
    pub fn translate<C>(&self, ctx: &C, key: &str) -> Result<&str>
    where
        C: RequestContext + ?Sized,
    {
        self.lookup(resolve_locale(ctx.pathname()), key)
    }

    /// Translate `key` for an already resolved locale.
    pub fn lookup(&self, locale: Locale, key: &str) -> Result<&str> {
        if let Some(value) = self.get(locale, key) {
            self.metrics.record_hit();
            return Ok(value);
        }

        warn!(
            "Translation key \"{}\" is not specified in {}",
            key,
            self.describe_file(locale)
        );

        match self.get(Locale::BASE, key) {
            Some(value) => {
                debug!("Using {} value for \"{}\"", Locale::BASE, key);
                self.metrics.record_fallback();
                Ok(value)
            }
            None => {
                self.metrics.record_miss();
                Err(Error::MissingTranslation {
                    key: key.to_string(),
                })
            }
        }
    }

    /// Raw value for `key` in `locale`, without fallback. Empty values
    /// count as absent.
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)?
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Locales that have a table, in registry order.
    pub fn locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.tables.contains_key(locale))
            .collect()
    }

    pub fn validation_report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }

    fn describe_file(&self, locale: Locale) -> String {
        match &self.source_dir {
            Some(dir) => dir.join(file_name(locale)).display().to_string(),
            None => file_name(locale),
        }
    }
}

fn file_name(locale: Locale) -> String {
    format!("{}.json", locale.code())
}

async fn read_table(path: &Path) -> Result<HashMap<String, String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

    let table: HashMap<String, String> =
        serde_json::from_str(&content).map_err(|source| Error::ParseFile {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Read {} keys from {}", table.len(), path.display());
    Ok(table)
}
