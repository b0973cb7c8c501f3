use std::fmt;

use serde::{Deserialize, Serialize};

/// Currency of a project's total value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    Eur,
    Cad,
    Usd,
    Mzn,
    Gbp,
    Jpy,
    Chf,
    Aud,
    Brl,
    Nok,
    Sek,
    Dkk,
    Nzd,
    Zar,
}

static ALL_CURRENCIES: &[Currency] = &[
    Currency::Eur,
    Currency::Cad,
    Currency::Usd,
    Currency::Mzn,
    Currency::Gbp,
    Currency::Jpy,
    Currency::Chf,
    Currency::Aud,
    Currency::Brl,
    Currency::Nok,
    Currency::Sek,
    Currency::Dkk,
    Currency::Nzd,
    Currency::Zar,
];

impl Currency {
    /// Returns the ISO 4217 code the remote table expects.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Cad => "CAD",
            Currency::Usd => "USD",
            Currency::Mzn => "MZN",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Chf => "CHF",
            Currency::Aud => "AUD",
            Currency::Brl => "BRL",
            Currency::Nok => "NOK",
            Currency::Sek => "SEK",
            Currency::Dkk => "DKK",
            Currency::Nzd => "NZD",
            Currency::Zar => "ZAR",
        }
    }

    /// Returns all currencies in the order the form offers them.
    pub fn all() -> &'static [Currency] {
        ALL_CURRENCIES
    }
}

#[mutants::skip]
impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
