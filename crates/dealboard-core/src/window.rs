//! Effective active-window resolution for a deal.
//!
//! A deal's effective window is its own time pair when present, else the
//! owning restaurant's hours, then intersected with the restaurant's
//! hours. The intersection applies even when the deal supplies explicit
//! times: a deal is never active while its restaurant is closed.

use crate::model::Deal;
use crate::time::{TimeOfDay, TimeParseError, TimeRange};

/// A deal's resolved active window, in minutes since midnight.
///
/// No open <= close ordering is enforced; containment handles both
/// orderings, and the peak scanner treats open > close as an empty
/// contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveWindow {
    /// Effective opening minute, in [0, 1439].
    pub open: u16,
    /// Effective closing minute, in [0, 1439].
    pub close: u16,
}

impl EffectiveWindow {
    /// Resolves a deal's effective window against its restaurant's hours.
    ///
    /// Fallback: the deal's own open (`open` else `start`) when present,
    /// else the restaurant's open; independently for close. The result is
    /// then clipped to restaurant hours with plain integer max/min on
    /// minutes since midnight.
    ///
    /// The clip is minute-wise only: when the restaurant's hours wrap
    /// midnight and the deal's do not (or vice versa), max/min does not
    /// re-derive a true wrapped intersection. Callers depend on these
    /// exact minute values, so any corrected rule has to land here, not
    /// in a caller.
    pub fn resolve(
        deal: &Deal,
        restaurant_open: TimeOfDay,
        restaurant_close: TimeOfDay,
    ) -> Result<Self, TimeParseError> {
        let candidate_open = match deal.window_open() {
            Some(text) => TimeOfDay::parse(text)?,
            None => restaurant_open,
        };
        let candidate_close = match deal.window_close() {
            Some(text) => TimeOfDay::parse(text)?,
            None => restaurant_close,
        };

        Ok(Self {
            open: candidate_open.to_minutes().max(restaurant_open.to_minutes()),
            close: candidate_close.to_minutes().min(restaurant_close.to_minutes()),
        })
    }

    /// Checks whether a time falls within this window, inclusive at both
    /// ends, with midnight wraparound when open > close.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        TimeRange::new(
            TimeOfDay::from_minutes(self.open),
            TimeOfDay::from_minutes(self.close),
        )
        .contains(time)
    }
}
