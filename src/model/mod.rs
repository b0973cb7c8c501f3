mod currency;
pub mod geo;
mod partner;
mod record;
mod selection;
mod validation;

pub use currency::Currency;
pub use partner::FundingPartner;
pub use record::ProjectRecord;
pub use selection::{DistrictChoice, SelectionState};
pub use validation::{
    ValidationError, YEAR_MAX, YEAR_MIN, parse_last_modified, parse_total_value, parse_year,
    validate_name, validate_provinces,
};
