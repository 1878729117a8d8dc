//! Monthly and daily message timelines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{MONTH_NAMES, Transcript};
use crate::stats::{Selection, selected};

/// One month's message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-based.
    pub month: u32,
    /// Display label, e.g. "January-2024".
    pub label: String,
    /// Messages in that month.
    pub messages: usize,
}

/// One day's message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// Calendar date.
    pub date: NaiveDate,
    /// Messages on that date.
    pub messages: usize,
}

/// Message counts grouped by calendar month, in chronological order.
///
/// Grouping is keyed by `(year, month_number)` in an ordered map, so the
/// output is chronological rather than alphabetical and no two entries
/// share a month.
pub fn monthly_timeline(selection: &Selection, transcript: &Transcript) -> Vec<MonthlyCount> {
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();

    for record in selected(selection, transcript) {
        *buckets.entry((record.year, record.month_number)).or_default() += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month), messages)| MonthlyCount {
            year,
            month,
            label: format!("{}-{year}", MONTH_NAMES[(month - 1) as usize]),
            messages,
        })
        .collect()
}

/// Message counts grouped by calendar date, in chronological order.
pub fn daily_timeline(selection: &Selection, transcript: &Transcript) -> Vec<DailyCount> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for record in selected(selection, transcript) {
        *buckets.entry(record.date_only).or_default() += 1;
    }

    buckets
        .into_iter()
        .map(|(date, messages)| DailyCount { date, messages })
        .collect()
}
