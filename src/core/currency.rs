use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies accepted by the gateway
///
/// The wire codes are the gateway's own: Turkish lira travels as `TL`,
/// not the ISO `TRY`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Turkish Lira
    #[default]
    Tl,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
}

impl Currency {
    /// Returns the wire code used in form fields and canonical strings
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Tl => "TL",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TL" | "TRY" => Ok(Currency::Tl),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
