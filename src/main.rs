//! Check the site's translation files and look up keys.
//!
//! Usage:
//!   site-i18n                          # Validate translations, print report
//!   site-i18n /es/posts/test title     # Also translate "title" for that page
//!
//! Optional environment variables:
//! - I18N_DIR (defaults to content/data/i18n)
//! - I18N_STRICT (defaults to false)
//! - SITE_URL (defaults to http://localhost:4321)

use anyhow::{bail, Context, Result};
use serde_json::json;
use tracing::{error, info};

use site_i18n::config::Config;
use site_i18n::i18n::{alternate_links, resolve_locale, TranslationStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored if absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_i18n=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() % 2 != 0 {
        bail!("Expected <path> <key> pairs, got {} arguments", args.len());
    }

    info!("Loading translations from {}", config.i18n_dir.display());
    let store = TranslationStore::load(&config.i18n_dir)
        .await
        .with_context(|| format!("Failed to load translations from {}", config.i18n_dir.display()))?;

    let report = store.validation_report();
    println!("{}", serde_json::to_string_pretty(report)?);

    let mut missing = 0;
    for pair in args.chunks(2) {
        let (path, key) = (&pair[0], &pair[1]);
        let locale = resolve_locale(path);
        match store.translate(path, key) {
            Ok(value) => {
                let output = json!({
                    "path": path,
                    "locale": locale,
                    "ogLocale": locale.open_graph(),
                    "key": key,
                    "value": value,
                    "alternates": alternate_links(&config.site_url, path, &store.locales()),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            Err(e) => {
                error!("{}: {}", path, e);
                missing += 1;
            }
        }
    }

    if !args.is_empty() {
        println!("{}", serde_json::to_string_pretty(&store.metrics())?);
    }

    if missing > 0 {
        bail!("{} translation(s) missing", missing);
    }
    if config.strict && !report.is_clean() {
        bail!(
            "Strict mode: {} error(s), {} warning(s) in translations",
            report.errors.len(),
            report.warnings.len()
        );
    }

    info!("Translations OK");
    Ok(())
}
