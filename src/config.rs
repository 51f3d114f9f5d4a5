use crate::core::error::{PayTrError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Language of the hosted payment page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }
}

/// Merchant credentials and account-level switches
///
/// Immutable once the client is constructed. The key and salt are shared
/// secrets; `Debug` redacts them and the struct is deliberately not
/// serializable.
#[derive(Clone)]
pub struct MerchantConfig {
    pub merchant_id: String,
    pub merchant_key: String,
    pub merchant_salt: String,
    pub test_mode: bool,
    pub debug_mode: bool,
    pub language: Language,
}

impl MerchantConfig {
    pub fn new(
        merchant_id: impl Into<String>,
        merchant_key: impl Into<String>,
        merchant_salt: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            merchant_key: merchant_key.into(),
            merchant_salt: merchant_salt.into(),
            test_mode: false,
            debug_mode: false,
            language: Language::default(),
        }
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Reads configuration from `PAYTR_MERCHANT_ID`, `PAYTR_MERCHANT_KEY`,
    /// `PAYTR_MERCHANT_SALT` plus the optional `PAYTR_TEST_MODE` and
    /// `PAYTR_DEBUG_MODE` flags (`1` or `true`).
    pub fn from_env() -> Result<Self> {
        let merchant_id = require_env("PAYTR_MERCHANT_ID")?;
        let merchant_key = require_env("PAYTR_MERCHANT_KEY")?;
        let merchant_salt = require_env("PAYTR_MERCHANT_SALT")?;

        Ok(Self::new(merchant_id, merchant_key, merchant_salt)
            .with_test_mode(env_flag("PAYTR_TEST_MODE"))
            .with_debug_mode(env_flag("PAYTR_DEBUG_MODE")))
    }
}

fn require_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| PayTrError::configuration(format!("{} not set", name)))
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.as_str(), "1" | "true"))
        .unwrap_or(false)
}

impl fmt::Debug for MerchantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerchantConfig")
            .field("merchant_id", &self.merchant_id)
            .field("merchant_key", &"***")
            .field("merchant_salt", &"***")
            .field("test_mode", &self.test_mode)
            .field("debug_mode", &self.debug_mode)
            .field("language", &self.language)
            .finish()
    }
}
