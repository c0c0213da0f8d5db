use serde::{Deserialize, Serialize};
use time::{macros::format_description, OffsetDateTime};

use super::pricing::CalculationInputs;

/// Number of saved calculations kept around.
pub const HISTORY_CAP: usize = 10;

/// A saved calculation. Created only by an explicit save, never edited.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(flatten)]
    pub inputs: CalculationInputs,
    /// Final price rounded to whole units of the target currency.
    pub final_price: f64,
}

impl HistoryEntry {
    pub fn new(timestamp: OffsetDateTime, inputs: CalculationInputs, final_price: f64) -> Self {
        let final_price = if final_price.is_finite() {
            final_price.round()
        } else {
            0.0
        };
        Self {
            timestamp,
            inputs,
            final_price,
        }
    }

    /// Timestamp as shown in the history list, e.g. `2024-03-09 18:42`.
    pub fn timestamp_label(&self) -> String {
        self.timestamp
            .format(format_description!(
                "[year]-[month]-[day] [hour]:[minute]"
            ))
            .unwrap_or_else(|_| self.timestamp.to_string())
    }
}

/// Newest-first list of saved calculations, never longer than [`HISTORY_CAP`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Build from stored entries, dropping anything beyond the cap.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_CAP);
        Self { entries }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<HistoryEntry>>(raw).map(Self::from_entries)
    }
}
