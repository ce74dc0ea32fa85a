//! API route handlers.

use std::time::Instant;

use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use dealboard_core::{active_deals, peak_window};

use crate::error::Result;
use crate::models::{DealsListResponse, DealsQuery, PeakTimeResponse};
use crate::state::AppState;

/// GET /api/deals?timeOfDay=3:00pm - List deals active at a time of day.
pub async fn get_active_deals(
    State(state): State<AppState>,
    Query(query): Query<DealsQuery>,
) -> Result<Json<DealsListResponse>> {
    let started = Instant::now();
    info!(time_of_day = %query.time_of_day, "active deals request");

    let snapshot = state.feed.snapshot().await?;
    let deals = active_deals(&snapshot, &query.time_of_day)?;

    info!(
        count = deals.len(),
        latency_ms = started.elapsed().as_millis() as u64,
        "active deals response"
    );
    Ok(Json(DealsListResponse { deals }))
}

/// GET /api/deals/peak-time - Peak deal-availability window for the day.
pub async fn get_peak_time(State(state): State<AppState>) -> Result<Json<PeakTimeResponse>> {
    let started = Instant::now();
    info!("peak time request");

    let snapshot = state.feed.snapshot().await?;
    let peak = peak_window(&snapshot)?;

    let response = PeakTimeResponse {
        peak_time_start: peak.start.format_twelve_hour(),
        peak_time_end: peak.end.format_twelve_hour(),
    };

    info!(
        start = %response.peak_time_start,
        end = %response.peak_time_end,
        latency_ms = started.elapsed().as_millis() as u64,
        "peak time response"
    );
    Ok(Json(response))
}
