//! Dealboard Core - Time-window computation for restaurant deals.
//!
//! Pure query logic over an immutable restaurant snapshot: which deals
//! are active at a time of day, and which contiguous time-of-day window
//! has the most simultaneously active deals. No I/O happens here; the
//! snapshot arrives already deserialized and results go back as plain
//! values. Multiple concurrent queries over the same snapshot need no
//! locking.

pub mod model;
pub mod query;
pub mod time;
pub mod window;

pub use model::{Deal, DealFeed, Restaurant};
pub use query::{active_deals, peak_window, ActiveDeal, PeakWindow};
pub use time::{TimeOfDay, TimeParseError, TimeRange};
pub use window::EffectiveWindow;
