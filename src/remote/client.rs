//! Record submission to the hosted table service.
//!
//! One record maps to one `POST {base_url}/Projects` call with the service's
//! `{"records": [{"fields": {...}}]}` envelope. Field names must match the
//! remote schema exactly, including the spaces.

use std::time::Duration;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::error::SubmitError;
use crate::model::{ProjectRecord, validate_name, validate_provinces};

/// Name of the table all records go to.
pub const TABLE_NAME: &str = "Projects";

/// How long a single submission may take before it fails.
///
/// One attempt only; a timed-out submission is reported to the user with the
/// form intact, and retrying is their call.
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct RecordFields<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Funding Partner")]
    funding_partner: &'static str,
    #[serde(rename = "Implementing Partner")]
    implementing_partner: &'a str,
    #[serde(rename = "Currency")]
    currency: &'static str,
    #[serde(rename = "Total Value")]
    total_value: f64,
    #[serde(rename = "Year Started")]
    year_started: i32,
    #[serde(rename = "Year Ending (Estimate)")]
    year_ending: i32,
    #[serde(rename = "Notes")]
    notes: &'a str,
    #[serde(rename = "URL")]
    url: &'a str,
    #[serde(rename = "Contact")]
    contact: &'a str,
    #[serde(rename = "Last Modified")]
    last_modified: String,
    #[serde(rename = "Province")]
    province: String,
    #[serde(rename = "District")]
    district: String,
}

#[derive(Debug, Serialize)]
struct RecordEntry<'a> {
    fields: RecordFields<'a>,
}

#[derive(Debug, Serialize)]
struct CreateRecords<'a> {
    records: Vec<RecordEntry<'a>>,
}

fn build_payload(record: &ProjectRecord) -> CreateRecords<'_> {
    CreateRecords {
        records: vec![RecordEntry {
            fields: RecordFields {
                name: &record.name,
                funding_partner: record.funding_partner.label(),
                implementing_partner: &record.implementing_partner,
                currency: record.currency.code(),
                total_value: record.total_value,
                year_started: record.year_started,
                year_ending: record.year_ending,
                notes: &record.notes,
                url: &record.url,
                contact: &record.contact,
                last_modified: record.last_modified.format("%Y-%m-%d").to_string(),
                province: record.provinces.join(", "),
                district: record.districts.join(", "),
            },
        }],
    }
}

/// Client for creating records in the remote table.
#[derive(Clone)]
pub struct TableClient {
    client: reqwest::Client,
    token: SecretString,
    endpoint: String,
}

impl std::fmt::Debug for TableClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableClient")
            .field("token", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl TableClient {
    /// Creates a client targeting `{base_url}/Projects`.
    pub fn new(base_url: &str, token: SecretString) -> Self {
        let endpoint = format!("{}/{TABLE_NAME}", base_url.trim_end_matches('/'));
        Self {
            client: reqwest::Client::new(),
            token,
            endpoint,
        }
    }

    /// Returns the full submit endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits one record.
    ///
    /// Required-field preconditions are checked locally first; a record with
    /// an empty name or no provinces never reaches the network. A 200 or 201
    /// response is success; anything else is [`SubmitError::Rejected`] with
    /// the raw body.
    pub async fn submit(&self, record: &ProjectRecord) -> Result<(), SubmitError> {
        validate_name(&record.name)?;
        validate_provinces(&record.provinces)?;

        let payload = build_payload(record);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.token.expose_secret())
            .timeout(SUBMIT_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::CREATED {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
