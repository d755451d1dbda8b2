pub mod config;
pub mod content;
pub mod error;
pub mod i18n;

pub use error::{Error, Result};
