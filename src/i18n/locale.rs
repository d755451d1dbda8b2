//! Locale type: the closed set of languages the site is published in.
//!
//! Values coming from outside (URL segments, file names, front matter) are
//! validated through `Locale::from_code`; anything unrecognized is rejected
//! rather than becoming a new locale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::i18n::{to_open_graph_format, LocaleConfig, LocaleRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Locale {
    En,
    Es,
    EsEs,
}

impl Locale {
    /// The locale every other locale falls back to. Its translation table
    /// must contain every key used anywhere on the site.
    pub const BASE: Locale = Locale::En;

    pub const ALL: [Locale; 3] = [Locale::En, Locale::Es, Locale::EsEs];

    /// Parse a locale code (e.g. "es-es").
    ///
    /// # Example
    /// ```ignore
    /// let spain = Locale::from_code("es-es")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Locale> {
        LocaleRegistry::get()
            .get_by_code(code)
            .map(|config| config.locale)
            .ok_or_else(|| Error::UnknownLocale(code.to_string()))
    }

    pub fn code(self) -> &'static str {
        self.config().code
    }

    /// # Panics
    /// Panics if the variant is missing from the registry, which the
    /// registry tests rule out.
    pub fn config(self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_locale(self)
            .expect("every Locale variant is registered")
    }

    pub fn name(self) -> &'static str {
        self.config().name
    }

    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    pub fn is_base(self) -> bool {
        self.config().is_base
    }

    /// Locale in Open Graph form, e.g. "es_ES".
    pub fn open_graph(self) -> String {
        to_open_graph_format(self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::from_code(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Locale::from_code(&value)
    }
}

impl From<Locale> for &'static str {
    fn from(locale: Locale) -> Self {
        locale.code()
    }
}
