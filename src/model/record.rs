use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::{Currency, FundingPartner};

/// One complete project entry, snapshotted from the form at submit time.
///
/// `provinces` and `districts` are kept in selection order; the remote
/// schema stores both as joined strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub funding_partner: FundingPartner,
    pub implementing_partner: String,
    pub currency: Currency,
    pub total_value: f64,
    pub year_started: i32,
    pub year_ending: i32,
    pub notes: String,
    pub url: String,
    pub contact: String,
    pub last_modified: NaiveDate,
    pub provinces: Vec<String>,
    pub districts: Vec<String>,
}

impl Default for ProjectRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            funding_partner: FundingPartner::default(),
            implementing_partner: String::new(),
            currency: Currency::default(),
            total_value: 0.0,
            year_started: crate::model::validation::YEAR_MIN,
            year_ending: crate::model::validation::YEAR_MIN,
            notes: String::new(),
            url: String::new(),
            contact: String::new(),
            last_modified: Local::now().date_naive(),
            provinces: Vec::new(),
            districts: Vec::new(),
        }
    }
}
