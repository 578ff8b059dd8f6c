use std::env::vars;

use log::info;
use quire_states::State;
use serde::Deserialize;
use ustr::Ustr;

use crate::i18n::Locale;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TEAM_ID: u64 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Team whose settings the app opens on.
    pub team_id: u64,
    pub locale: Locale,
    /// Initial value of the `billing` flag until the server's flags are fetched.
    pub feature_billing: bool,
}

impl State for BusinessConfig {}

// Intermediate struct for the environment, every variable optional.
#[derive(Debug, Deserialize)]
struct RawConfig {
    quire_api_base_url: Option<String>,
    quire_team_id: Option<u64>,
    quire_locale: Option<String>,
    quire_feature_billing: Option<bool>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url.trim_end_matches('/')))
        }
    }

    /// Reads `QUIRE_*` variables from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");

        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            quire_api_base_url,
            quire_team_id,
            quire_locale,
            quire_feature_billing,
        } = raw;

        let api_base_url = match quire_api_base_url {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") || url.is_empty() => url,
            Some(url) => anyhow::bail!("QUIRE_API_BASE_URL must be an http(s) URL, got {url:?}"),
            None => {
                info!("QUIRE_API_BASE_URL not set, defaulting to {DEFAULT_API_BASE_URL}");
                DEFAULT_API_BASE_URL.to_string()
            }
        };

        let team_id = match quire_team_id {
            Some(0) => anyhow::bail!("QUIRE_TEAM_ID must be a positive team id"),
            Some(id) => id,
            None => DEFAULT_TEAM_ID,
        };

        let locale = match quire_locale {
            Some(raw) => raw.parse::<Locale>()?,
            None => Locale::default(),
        };

        Ok(Self {
            api_base_url,
            team_id,
            locale,
            feature_billing: quire_feature_billing.unwrap_or(false),
        })
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            // Same-origin API when served to the browser.
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                DEFAULT_API_BASE_URL.to_string()
            },
            team_id: DEFAULT_TEAM_ID,
            locale: Locale::default(),
            feature_billing: false,
        }
    }
}
