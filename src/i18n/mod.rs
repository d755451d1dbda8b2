//! Internationalization (i18n) for the site.
//!
//! # Architecture
//!
//! - `registry`: the closed set of supported locales and their metadata
//! - `locale`: the `Locale` enum, validated against the registry
//! - `path`: reading, stripping and adding locale prefixes on URL paths
//! - `open_graph`: locale codes in Open Graph form
//! - `store`: per-locale string tables, loaded once, with fallback lookup
//! - `validator`: consistency checks run when a store is built
//! - `metrics`: hit/fallback/miss counters for lookups
//!
//! # Example
//!
//! ```rust,ignore
//! use site_i18n::i18n::{resolve_locale, TranslationStore};
//!
//! let store = TranslationStore::load("content/data/i18n").await?;
//! let title = store.translate("/es/posts/test", "title")?;
//! assert_eq!(resolve_locale("/es/posts/test").code(), "es");
//! ```

mod locale;
mod metrics;
mod open_graph;
mod path;
mod registry;
mod store;
mod validator;

pub use locale::Locale;
pub use metrics::{LookupMetrics, MetricsReport};
pub use open_graph::to_open_graph_format;
pub use path::{alternate_links, localize_path, resolve_locale, strip_locale_prefix, AlternateLink};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use store::{PageContext, RequestContext, TranslationStore};
pub use validator::{TranslationTable, TranslationValidator, ValidationReport};
