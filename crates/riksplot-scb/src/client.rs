//! PXWeb client for the SCB Riksdagsmandat table.
//!
//! SCB's PXWeb API takes a POSTed query describing the dimension selection
//! and answers with row-oriented data: each row keys a cell by
//! `[region, party, year]` and carries the seat count as a string. This
//! module builds the query, performs the request, and reshapes the rows into
//! a [`SeatTable`].

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{ScbError, SeatTable};

/// The PXWeb endpoint for seats in the Riksdag by electoral region and party.
pub const DEFAULT_BASE_URL: &str =
    "https://api.scb.se/OV0104/v1/doris/sv/ssd/START/ME/ME0104/ME0104C/Riksdagsmandat";

/// The PXWeb filter selecting whole-country electoral region totals.
const REGION_FILTER: &str = "vs:RegionValkretsTot99";

/// A client for the SCB seat-count table.
///
/// The endpoint URL is overridable so tests can point the client at a local
/// server.
#[derive(Debug, Clone)]
pub struct ScbClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ScbClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ScbClient {
    /// Creates a client against the production SCB endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom endpoint URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches seat counts for the given electoral region and party codes.
    ///
    /// # Errors
    ///
    /// Returns [`ScbError::Http`] on transport failures, [`ScbError::Status`]
    /// on a non-success HTTP status, and [`ScbError::Shape`] when the
    /// response rows do not carry the expected `[region, party, year]` key.
    pub async fn fetch_seats(
        &self,
        region: &str,
        parties: &[String],
    ) -> Result<SeatTable, ScbError> {
        let payload = seat_query(region, parties);
        info!(url = self.base_url, region; "Requesting seat data from SCB");

        let response = self.http.post(&self.base_url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScbError::Status {
                code: status.as_u16(),
            });
        }

        let body: SeatResponse = response.json().await?;
        debug!(rows = body.data.len(); "Received seat data rows");

        reshape(body)
    }
}

/// Builds the PXWeb query payload for a region and a set of party codes.
fn seat_query(region: &str, parties: &[String]) -> QueryPayload {
    QueryPayload {
        query: vec![
            Dimension {
                code: "Region".to_string(),
                selection: Selection {
                    filter: REGION_FILTER.to_string(),
                    values: vec![region.to_string()],
                },
            },
            Dimension {
                code: "Parti".to_string(),
                selection: Selection {
                    filter: "item".to_string(),
                    values: parties.to_vec(),
                },
            },
        ],
        response: ResponseFormat {
            format: "json".to_string(),
        },
    }
}

/// Reshapes row-oriented PXWeb data into `year -> party -> seat-string`.
///
/// Structural corruption (a short key, a row without values) is a hard
/// [`ScbError::Shape`] error; only numeric parsing of individual seat counts
/// is cleaned silently, and that happens downstream.
fn reshape(response: SeatResponse) -> Result<SeatTable, ScbError> {
    let mut table = SeatTable::new();
    for row in response.data {
        let [_region, party, year] = row.key.as_slice() else {
            return Err(ScbError::Shape(format!(
                "row has {} key components, expected 3",
                row.key.len()
            )));
        };
        let Some(seats) = row.values.first() else {
            return Err(ScbError::Shape(format!(
                "row for {party} in {year} has no value"
            )));
        };
        table
            .entry(year.clone())
            .or_default()
            .insert(party.clone(), seats.clone());
    }
    Ok(table)
}

#[derive(Debug, Serialize)]
struct QueryPayload {
    query: Vec<Dimension>,
    response: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct Dimension {
    code: String,
    selection: Selection,
}

#[derive(Debug, Serialize)]
struct Selection {
    filter: String,
    values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    format: String,
}

#[derive(Debug, Deserialize)]
struct SeatResponse {
    data: Vec<SeatRow>,
}

#[derive(Debug, Deserialize)]
struct SeatRow {
    key: Vec<String>,
    values: Vec<String>,
}
