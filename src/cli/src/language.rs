//! Translation of the core's text keys.
//!
//! The core only names texts through [`TextKey`]; the shell picks the words.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::str::FromStr;
use wifi_setup_core::TextKey;

/// Resolves a text key to user-facing text
pub trait Language {
    fn lang(&self, key: TextKey) -> String;
}

impl<F> Language for F
where
    F: Fn(TextKey) -> String,
{
    fn lang(&self, key: TextKey) -> String {
        self(key)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    fn source(self) -> &'static str {
        match self {
            Locale::En => include_str!("../locales/en.json"),
            Locale::Zh => include_str!("../locales/zh.json"),
        }
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            other => bail!("unsupported language: {other} (expected en or zh)"),
        }
    }
}

/// Translation table of one locale
#[derive(Clone, Debug)]
pub struct Translations {
    texts: Value,
}

impl Translations {
    pub fn load(locale: Locale) -> Result<Self> {
        let texts = serde_json::from_str(locale.source())
            .with_context(|| format!("failed to parse translations for {locale:?}"))?;

        Ok(Self { texts })
    }

    /// Look up a dotted path like `form.button.connect`
    pub fn lookup(&self, path: &str) -> Option<&str> {
        path.split('.')
            .try_fold(&self.texts, |node, segment| node.get(segment))?
            .as_str()
    }
}

impl Language for Translations {
    fn lang(&self, key: TextKey) -> String {
        match self.lookup(key.as_str()) {
            Some(text) => text.to_string(),
            None => {
                log::warn!("missing translation for {key}");
                key.as_str().to_string()
            }
        }
    }
}
