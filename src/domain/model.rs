use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One purchase receipt ("check") as listed by the `checks` query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Kept verbatim; it is sent back as `creationDate` when fetching items.
    pub created: String,
    #[serde(rename = "storeId")]
    pub store_id: i32,
}

/// One purchased line within a check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub unit: String,
    pub count: f32,
    pub price: f32,
}

/// Half-open month range `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeWindow {
    /// The API rejects timestamps without milliseconds.
    pub fn from_param(&self) -> String {
        self.from.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn to_param(&self) -> String {
        self.to.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}",
            self.from.format("%Y-%m-%d"),
            self.to.format("%Y-%m-%d")
        )
    }
}

/// Offset/limit pair sent with every `checks` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub offset: i32,
    pub limit: i32,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            offset: 1,
            limit: 40,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub windows: usize,
    pub orders: usize,
    pub items: usize,
    /// Windows whose single page came back full; later orders were not fetched.
    pub full_pages: usize,
}
