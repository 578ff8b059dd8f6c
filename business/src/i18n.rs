//! Locale-aware formatting.
//!
//! Only dates are formatted here; translated strings come from elsewhere.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use quire_states::State;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "fr")]
    Fr,
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::EnUs => write!(f, "en-US"),
            Locale::EnGb => write!(f, "en-GB"),
            Locale::De => write!(f, "de"),
            Locale::Fr => write!(f, "fr"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de" | "de-de" => Ok(Locale::De),
            "fr" | "fr-fr" => Ok(Locale::Fr),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Formatter handed to views that render user-facing dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct I18n {
    locale: Locale,
}

impl State for I18n {}

impl I18n {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Short numeric date in the conventions of the current locale.
    pub fn date(&self, ts: &DateTime<Utc>) -> String {
        let (day, month, year) = (ts.day(), ts.month(), ts.year());
        match self.locale {
            Locale::EnUs => format!("{month}/{day}/{year}"),
            Locale::EnGb | Locale::Fr => format!("{day:02}/{month:02}/{year}"),
            Locale::De => format!("{day}.{month}.{year}"),
        }
    }
}
