use std::fmt;

use serde::{Deserialize, Serialize};

/// Funding partner, one of the fixed set the remote table accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FundingPartner {
    #[default]
    ArabBank,
    GatesFoundation,
    Canada,
    EuropeanCommission,
    Finland,
    Flanders,
    FundoSaudita,
    Gavi,
    GlobalFinancingFacility,
    GlobalFund,
    IomHq,
    Ireland,
    IslamicDevelopmentBank,
    ItalyAics,
    Jica,
    Koica,
    Norway,
    Pepfar,
    RotaryInternational,
    Spain,
    Sweden,
    UnfpaHq,
    UnicefHq,
    Unitaid,
    UnitedKingdomFcdo,
    UsCdc,
    Usaid,
    WorldBank,
}

static ALL_PARTNERS: &[FundingPartner] = &[
    FundingPartner::ArabBank,
    FundingPartner::GatesFoundation,
    FundingPartner::Canada,
    FundingPartner::EuropeanCommission,
    FundingPartner::Finland,
    FundingPartner::Flanders,
    FundingPartner::FundoSaudita,
    FundingPartner::Gavi,
    FundingPartner::GlobalFinancingFacility,
    FundingPartner::GlobalFund,
    FundingPartner::IomHq,
    FundingPartner::Ireland,
    FundingPartner::IslamicDevelopmentBank,
    FundingPartner::ItalyAics,
    FundingPartner::Jica,
    FundingPartner::Koica,
    FundingPartner::Norway,
    FundingPartner::Pepfar,
    FundingPartner::RotaryInternational,
    FundingPartner::Spain,
    FundingPartner::Sweden,
    FundingPartner::UnfpaHq,
    FundingPartner::UnicefHq,
    FundingPartner::Unitaid,
    FundingPartner::UnitedKingdomFcdo,
    FundingPartner::UsCdc,
    FundingPartner::Usaid,
    FundingPartner::WorldBank,
];

impl FundingPartner {
    /// Returns the partner name exactly as the remote table expects it.
    pub fn label(&self) -> &'static str {
        match self {
            FundingPartner::ArabBank => "Arab Bank for Economic Development in Africa",
            FundingPartner::GatesFoundation => "Bill and Melinda Gates Foundation",
            FundingPartner::Canada => "Canada",
            FundingPartner::EuropeanCommission => "European Commission",
            FundingPartner::Finland => "Finland",
            FundingPartner::Flanders => "Flanders",
            FundingPartner::FundoSaudita => "Fundo Saudita para o Desenvolvimento",
            FundingPartner::Gavi => "Gavi",
            FundingPartner::GlobalFinancingFacility => "Global Financing Facility",
            FundingPartner::GlobalFund => "Global Fund",
            FundingPartner::IomHq => "IOM HQ",
            FundingPartner::Ireland => "Ireland",
            FundingPartner::IslamicDevelopmentBank => "Islamic Development Bank",
            FundingPartner::ItalyAics => "Italy -AICS",
            FundingPartner::Jica => "JICA",
            FundingPartner::Koica => "KOICA",
            FundingPartner::Norway => "Norway",
            FundingPartner::Pepfar => "PEPFAR",
            FundingPartner::RotaryInternational => "Rotary International",
            FundingPartner::Spain => "Spain",
            FundingPartner::Sweden => "Sweden",
            FundingPartner::UnfpaHq => "UNFPA HQ/Regional",
            // The trailing paren matches the remote table's option verbatim.
            FundingPartner::UnicefHq => "UNICEF HQ/Thematic Funds/NatComs)",
            FundingPartner::Unitaid => "UNITAID",
            FundingPartner::UnitedKingdomFcdo => "United Kingdom - FCDO",
            FundingPartner::UsCdc => "US CDC",
            FundingPartner::Usaid => "USAID",
            FundingPartner::WorldBank => "World Bank",
        }
    }

    /// Returns all partners in the order the form offers them.
    pub fn all() -> &'static [FundingPartner] {
        ALL_PARTNERS
    }
}

#[mutants::skip]
impl fmt::Display for FundingPartner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
