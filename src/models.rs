use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::phase::Phase;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// One saved cycle. Immutable once persisted; an edit loads it back into
/// the inputs and a re-save prepends a fresh entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleEntry {
    /// First day of the tracked period, ISO `YYYY-MM-DD`.
    pub start: String,
    pub cycle: u32,
    #[serde(rename = "periodLen")]
    pub period_len: u32,
    /// Phase label snapshot taken at save time, not recomputed on load.
    pub phase: String,
    /// RFC 3339 save timestamp, display only.
    pub created: String,
}

/// Last-used inputs plus theme, persisted as a single record and
/// overwritten wholesale on every save. Cycle and period length keep the
/// raw form-value strings; empty means unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default, rename = "lastDate")]
    pub last_date: String,
    #[serde(default)]
    pub cycle: String,
    #[serde(default, rename = "periodLen")]
    pub period_len: String,
}

/// Raw user inputs as entered, before defaulting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleInput {
    pub last_date: String,
    pub cycle: String,
    pub period_len: String,
}

/// Everything the calculator derives for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleResult {
    pub last: NaiveDate,
    pub next: NaiveDate,
    pub cycle: u32,
    pub period_len: u32,
    pub days_since: i64,
    pub progress_pct: u8,
    pub phase: Phase,
    pub ovulation: NaiveDate,
    pub fertile_start: NaiveDate,
    pub fertile_end: NaiveDate,
}
