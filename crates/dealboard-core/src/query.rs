//! Deal queries over a snapshot: active deals at a time of day, and the
//! peak-concurrency window across the whole day.

use serde::Serialize;
use tracing::debug;

use crate::model::{Deal, Restaurant};
use crate::time::{TimeOfDay, TimeParseError, TimeRange};
use crate::window::EffectiveWindow;

/// Minute buckets in one day.
const MINUTES_PER_DAY: usize = 24 * 60;

/// Flattened restaurant + deal projection for reporting.
///
/// The serialized key set is an external compatibility contract,
/// including the `restarantSuburb` misspelling. All values pass through
/// as opaque strings from the source data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveDeal {
    pub restaurant_object_id: String,
    pub restaurant_name: String,
    pub restaurant_address1: String,
    // Misspelling is intentional and must be preserved.
    pub restarant_suburb: String,
    pub restaurant_open: String,
    pub restaurant_close: String,
    pub deal_object_id: String,
    pub discount: String,
    pub dine_in: String,
    pub lightning: String,
    pub qty_left: String,
}

impl ActiveDeal {
    fn from_pair(restaurant: &Restaurant, deal: &Deal) -> Self {
        Self {
            restaurant_object_id: restaurant.object_id.clone(),
            restaurant_name: restaurant.name.clone(),
            restaurant_address1: restaurant.address1.clone(),
            restarant_suburb: restaurant.suburb.clone(),
            restaurant_open: restaurant.open.clone(),
            restaurant_close: restaurant.close.clone(),
            deal_object_id: deal.object_id.clone(),
            discount: deal.discount.clone(),
            dine_in: deal.dine_in.clone(),
            lightning: deal.lightning.clone(),
            qty_left: deal.qty_left.clone(),
        }
    }
}

/// The contiguous minute range with the most simultaneously active deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Returns every deal active at the given time of day.
///
/// A deal is active when its restaurant is open at the query time and the
/// deal's effective window (deal times falling back to restaurant hours,
/// clipped to restaurant hours) contains it. Snapshot order is preserved:
/// restaurants in feed order, deals in each restaurant's list order.
///
/// Unparseable query text fails up front; unparseable restaurant or deal
/// times fail the whole query in the same validation class rather than
/// silently dropping records.
pub fn active_deals(
    restaurants: &[Restaurant],
    time_text: &str,
) -> Result<Vec<ActiveDeal>, TimeParseError> {
    let query_time = TimeOfDay::parse(time_text)?;

    let mut active = Vec::new();
    for restaurant in restaurants {
        let open = TimeOfDay::parse(&restaurant.open)?;
        let close = TimeOfDay::parse(&restaurant.close)?;

        if !TimeRange::new(open, close).contains(query_time) {
            debug!(restaurant = %restaurant.name, time = %query_time, "restaurant closed, skipping");
            continue;
        }

        for deal in &restaurant.deals {
            let window = EffectiveWindow::resolve(deal, open, close)?;
            if window.contains(query_time) {
                active.push(ActiveDeal::from_pair(restaurant, deal));
            }
        }
    }

    debug!(count = active.len(), time = %query_time, "active deals query complete");
    Ok(active)
}

/// Finds the peak deal-availability window across the day.
///
/// Builds a per-minute concurrency histogram from every deal's effective
/// window, then returns the FIRST contiguous run at the global maximum.
/// The scan stops at the first sub-maximal bucket after a run has
/// started; a later run at the same maximum is never considered, even
/// when it is longer. That first-run-wins rule is part of the external
/// contract and must not be replaced with a longest-run search.
pub fn peak_window(restaurants: &[Restaurant]) -> Result<PeakWindow, TimeParseError> {
    let mut deals_per_minute = [0u32; MINUTES_PER_DAY];

    for restaurant in restaurants {
        let open = TimeOfDay::parse(&restaurant.open)?;
        let close = TimeOfDay::parse(&restaurant.close)?;

        for deal in &restaurant.deals {
            let window = EffectiveWindow::resolve(deal, open, close)?;
            // An inverted window after clipping contributes nothing; the
            // inclusive range below is empty when open > close.
            for minute in window.open as usize..=window.close as usize {
                deals_per_minute[minute] += 1;
            }
        }
    }

    let max_deals = deals_per_minute.iter().copied().max().unwrap_or(0);
    if max_deals == 0 {
        // No deal covers any minute: report midnight-midnight.
        return Ok(PeakWindow {
            start: TimeOfDay::from_minutes(0),
            end: TimeOfDay::from_minutes(0),
        });
    }

    let mut peak_start = None;
    let mut peak_end = 0;
    for (minute, &count) in deals_per_minute.iter().enumerate() {
        if count == max_deals {
            if peak_start.is_none() {
                peak_start = Some(minute);
            }
            peak_end = minute;
        } else if peak_start.is_some() {
            break;
        }
    }

    // peak_start is set: max_deals > 0 was found in the histogram.
    let start = TimeOfDay::from_minutes(peak_start.unwrap_or(0) as u16);
    let end = TimeOfDay::from_minutes(peak_end as u16);

    debug!(
        start = %start,
        end = %end,
        max_deals,
        "peak window computed"
    );
    Ok(PeakWindow { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(id: &str, open: Option<&str>, close: Option<&str>) -> Deal {
        Deal {
            object_id: id.to_string(),
            discount: "30".to_string(),
            dine_in: "true".to_string(),
            lightning: "false".to_string(),
            qty_left: "5".to_string(),
            open: open.map(String::from),
            close: close.map(String::from),
            start: None,
            end: None,
        }
    }

    fn restaurant(id: &str, open: &str, close: &str, deals: Vec<Deal>) -> Restaurant {
        Restaurant {
            object_id: id.to_string(),
            name: format!("Restaurant {}", id),
            address1: "1 Test St".to_string(),
            suburb: "Testville".to_string(),
            cuisines: vec![],
            image_link: None,
            open: open.to_string(),
            close: close.to_string(),
            deals,
        }
    }

    // ==================== active_deals ====================

    #[test]
    fn open_restaurant_with_no_deals_yields_empty_list() {
        let snapshot = vec![restaurant("R1", "12:00pm", "9:00pm", vec![])];
        let active = active_deals(&snapshot, "3:00pm").unwrap();
        assert!(active.is_empty());
    }

    #[test]
    fn deal_window_bounds_the_query_time() {
        let snapshot = vec![restaurant(
            "R1",
            "11:00am",
            "10:00pm",
            vec![Deal {
                start: Some("2:00pm".to_string()),
                end: Some("5:00pm".to_string()),
                ..deal("D1", None, None)
            }],
        )];

        assert_eq!(active_deals(&snapshot, "3:00pm").unwrap().len(), 1);
        assert!(active_deals(&snapshot, "1:00pm").unwrap().is_empty());
    }

    #[test]
    fn deal_without_times_inherits_restaurant_hours() {
        let snapshot = vec![restaurant(
            "R1",
            "11:00am",
            "10:00pm",
            vec![deal("D1", None, None)],
        )];

        assert_eq!(active_deals(&snapshot, "9:00pm").unwrap().len(), 1);
        assert!(active_deals(&snapshot, "10:30pm").unwrap().is_empty());
    }

    #[test]
    fn closed_restaurant_contributes_no_deals() {
        // The deal's own window covers 11:00pm, but the restaurant is shut.
        let snapshot = vec![restaurant(
            "R1",
            "11:00am",
            "10:00pm",
            vec![deal("D1", Some("9:00pm"), Some("11:30pm"))],
        )];

        assert!(active_deals(&snapshot, "11:00pm").unwrap().is_empty());
    }

    #[test]
    fn restaurant_hours_are_inclusive() {
        let snapshot = vec![restaurant(
            "R1",
            "11:00am",
            "10:00pm",
            vec![deal("D1", None, None)],
        )];

        assert_eq!(active_deals(&snapshot, "11:00am").unwrap().len(), 1);
        assert_eq!(active_deals(&snapshot, "10:00pm").unwrap().len(), 1);
    }

    #[test]
    fn result_preserves_snapshot_order() {
        let snapshot = vec![
            restaurant(
                "R1",
                "9:00am",
                "9:00pm",
                vec![deal("D1", None, None), deal("D2", None, None)],
            ),
            restaurant("R2", "9:00am", "9:00pm", vec![deal("D3", None, None)]),
        ];

        let active = active_deals(&snapshot, "12:00pm").unwrap();
        let ids: Vec<&str> = active.iter().map(|d| d.deal_object_id.as_str()).collect();
        assert_eq!(ids, vec!["D1", "D2", "D3"]);
    }

    #[test]
    fn bad_query_time_is_a_validation_error() {
        let snapshot = vec![restaurant("R1", "9:00am", "9:00pm", vec![])];
        let err = active_deals(&snapshot, "25:00").unwrap_err();
        assert!(err.to_string().contains("25:00"));
        assert!(active_deals(&snapshot, "").is_err());
    }

    #[test]
    fn bad_restaurant_hours_are_a_validation_error() {
        let snapshot = vec![restaurant("R1", "junk", "9:00pm", vec![])];
        let err = active_deals(&snapshot, "3:00pm").unwrap_err();
        assert!(err.to_string().contains("junk"));
    }

    #[test]
    fn overnight_restaurant_hours_admit_late_queries() {
        let snapshot = vec![restaurant(
            "R1",
            "10:00pm",
            "2:00am",
            vec![deal("D1", None, None)],
        )];

        // Query inside the wrapped restaurant window. The clipped deal
        // window replicates the wrapping pair verbatim here.
        assert_eq!(active_deals(&snapshot, "11:00pm").unwrap().len(), 1);
        assert!(active_deals(&snapshot, "3:00am").unwrap().is_empty());
    }

    #[test]
    fn projection_carries_compat_field_names() {
        let snapshot = vec![restaurant(
            "R1",
            "11:00am",
            "10:00pm",
            vec![deal("D1", None, None)],
        )];

        let active = active_deals(&snapshot, "12:00pm").unwrap();
        let json = serde_json::to_value(&active[0]).unwrap();

        assert_eq!(json["restaurantObjectId"], "R1");
        assert_eq!(json["restarantSuburb"], "Testville");
        assert_eq!(json["restaurantOpen"], "11:00am");
        assert_eq!(json["dealObjectId"], "D1");
        assert_eq!(json["qtyLeft"], "5");
        assert!(json.get("restaurantSuburb").is_none());
    }

    // ==================== peak_window ====================

    #[test]
    fn overlap_of_two_deals_is_the_peak() {
        let snapshot = vec![restaurant(
            "R1",
            "9:00am",
            "9:00pm",
            vec![
                deal("D1", Some("12:00pm"), Some("2:00pm")),
                deal("D2", Some("1:00pm"), Some("4:00pm")),
            ],
        )];

        let peak = peak_window(&snapshot).unwrap();
        assert_eq!(peak.start.format_twelve_hour(), "1:00pm");
        assert_eq!(peak.end.format_twelve_hour(), "2:00pm");
    }

    #[test]
    fn first_maximal_run_wins_over_a_later_longer_one() {
        // Two deals overlap 12:00-1:00pm; two others overlap 5:00-8:00pm.
        // Both plateaus have count 2, so the earlier, shorter one is
        // reported and the scan never reaches the later run.
        let snapshot = vec![restaurant(
            "R1",
            "9:00am",
            "9:00pm",
            vec![
                deal("D1", Some("11:00am"), Some("1:00pm")),
                deal("D2", Some("12:00pm"), Some("2:00pm")),
                deal("D3", Some("5:00pm"), Some("8:00pm")),
                deal("D4", Some("5:00pm"), Some("8:00pm")),
            ],
        )];

        let peak = peak_window(&snapshot).unwrap();
        assert_eq!(peak.start.format_twelve_hour(), "12:00pm");
        assert_eq!(peak.end.format_twelve_hour(), "1:00pm");
    }

    #[test]
    fn single_deal_peak_spans_its_clipped_window() {
        let snapshot = vec![restaurant(
            "R1",
            "12:00pm",
            "9:00pm",
            vec![deal("D1", Some("9:00am"), Some("3:00pm"))],
        )];

        let peak = peak_window(&snapshot).unwrap();
        assert_eq!(peak.start.format_twelve_hour(), "12:00pm");
        assert_eq!(peak.end.format_twelve_hour(), "3:00pm");
    }

    #[test]
    fn empty_snapshot_reports_midnight_to_midnight() {
        let peak = peak_window(&[]).unwrap();
        assert_eq!(peak.start, TimeOfDay::new(0, 0));
        assert_eq!(peak.end, TimeOfDay::new(0, 0));
        assert_eq!(peak.start.format_twelve_hour(), "12:00am");
    }

    #[test]
    fn dealless_restaurants_report_midnight_to_midnight() {
        let snapshot = vec![restaurant("R1", "9:00am", "9:00pm", vec![])];
        let peak = peak_window(&snapshot).unwrap();
        assert_eq!(peak.start, TimeOfDay::new(0, 0));
        assert_eq!(peak.end, TimeOfDay::new(0, 0));
    }

    #[test]
    fn disjoint_clipped_window_contributes_nothing() {
        // D1's window lies entirely before opening; only D2 counts.
        let snapshot = vec![restaurant(
            "R1",
            "5:00pm",
            "10:00pm",
            vec![
                deal("D1", Some("9:00am"), Some("11:00am")),
                deal("D2", Some("6:00pm"), Some("7:00pm")),
            ],
        )];

        let peak = peak_window(&snapshot).unwrap();
        assert_eq!(peak.start.format_twelve_hour(), "6:00pm");
        assert_eq!(peak.end.format_twelve_hour(), "7:00pm");
    }

    #[test]
    fn bad_restaurant_hours_fail_the_scan() {
        let snapshot = vec![restaurant("R1", "9:00am", "closed", vec![])];
        let err = peak_window(&snapshot).unwrap_err();
        assert!(err.to_string().contains("closed"));
    }
}
