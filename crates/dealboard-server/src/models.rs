//! API request and response models.

use serde::{Deserialize, Serialize};

use dealboard_core::ActiveDeal;

/// Query parameters for GET /api/deals.
#[derive(Debug, Deserialize)]
pub struct DealsQuery {
    /// The time to query, e.g. "3:00pm" or "15:00".
    #[serde(rename = "timeOfDay")]
    pub time_of_day: String,
}

/// Response body for GET /api/deals.
#[derive(Debug, Serialize)]
pub struct DealsListResponse {
    pub deals: Vec<ActiveDeal>,
}

/// Response body for GET /api/deals/peak-time. Times are 12-hour
/// lower-case meridiem strings, e.g. "1:00pm".
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakTimeResponse {
    pub peak_time_start: String,
    pub peak_time_end: String,
}
