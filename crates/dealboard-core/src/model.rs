//! Snapshot data model for the upstream restaurant feed.
//!
//! Field names follow the upstream JSON payload. Times arrive as raw
//! strings and stay raw here; parsing happens at query time so that a bad
//! value surfaces against the record that carries it.

use serde::{Deserialize, Serialize};

/// Envelope of the upstream feed payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealFeed {
    pub restaurants: Vec<Restaurant>,
}

/// A restaurant record from the upstream feed.
///
/// `open`/`close` are always expected to be present and parseable;
/// a missing or malformed value is a data error, not "always open".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub object_id: String,
    pub name: String,
    pub address1: String,
    pub suburb: String,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    pub open: String,
    pub close: String,
    #[serde(default)]
    pub deals: Vec<Deal>,
}

/// A deal record from the upstream feed.
///
/// Some deals carry an `open`/`close` pair, others `start`/`end`; at most
/// one pair is populated. A deal with neither inherits its restaurant's
/// hours. Discount and quantity are opaque strings passed through as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub object_id: String,
    pub discount: String,
    pub dine_in: String,
    pub lightning: String,
    pub qty_left: String,
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl Deal {
    /// The deal's own opening time text, if any: `open` wins over `start`.
    /// `None` means the restaurant's opening time applies.
    pub fn window_open(&self) -> Option<&str> {
        self.open.as_deref().or(self.start.as_deref())
    }

    /// The deal's own closing time text, if any: `close` wins over `end`.
    /// `None` means the restaurant's closing time applies.
    pub fn window_close(&self) -> Option<&str> {
        self.close.as_deref().or(self.end.as_deref())
    }
}
