use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one `<locale>.json` file per locale
    pub i18n_dir: PathBuf,

    /// Treat translation warnings as failures
    pub strict: bool,

    /// Public origin of the site, used for alternate-language links
    pub site_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let site_url =
            std::env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:4321".to_string());
        if !(site_url.starts_with("http://") || site_url.starts_with("https://")) {
            bail!("SITE_URL must be an http(s) URL, got '{}'", site_url);
        }

        Ok(Self {
            i18n_dir: std::env::var("I18N_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("content/data/i18n")),
            strict: std::env::var("I18N_STRICT")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            site_url,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_truthy() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(parse_flag(value), "{value} should be true");
        }
    }

    #[test]
    fn test_parse_flag_falsy() {
        for value in ["0", "false", "", "no", "nope"] {
            assert!(!parse_flag(value), "{value} should be false");
        }
    }
}
