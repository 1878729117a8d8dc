//! Weekday/month activity maps and the day-by-period heatmap.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::record::{DAY_NAMES, MONTH_NAMES, Transcript, period_label, weekday_index};
use crate::stats::{Selection, selected};

/// Message count for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    /// English weekday name ("Monday").
    pub day: String,
    /// Messages on that weekday.
    pub messages: usize,
}

/// Message count for one month of the year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthActivity {
    /// English month name ("January").
    pub month: String,
    /// Messages in that month, across all years.
    pub messages: usize,
}

/// Messages per weekday, Monday through Sunday.
///
/// All seven days are present, zero-filled, so the output shape is stable
/// regardless of which days the chat covers.
pub fn week_activity_map(selection: &Selection, transcript: &Transcript) -> Vec<DayActivity> {
    let mut counts = [0usize; 7];

    for record in selected(selection, transcript) {
        counts[weekday_index(record.date_only.weekday())] += 1;
    }

    DAY_NAMES
        .iter()
        .zip(counts)
        .map(|(day, messages)| DayActivity {
            day: (*day).to_string(),
            messages,
        })
        .collect()
}

/// Messages per month name, January through December.
///
/// Zero-filled like [`week_activity_map`]; months repeat across years and
/// are tallied together.
pub fn month_activity_map(selection: &Selection, transcript: &Transcript) -> Vec<MonthActivity> {
    let mut counts = [0usize; 12];

    for record in selected(selection, transcript) {
        counts[(record.month_number - 1) as usize] += 1;
    }

    MONTH_NAMES
        .iter()
        .zip(counts)
        .map(|(month, messages)| MonthActivity {
            month: (*month).to_string(),
            messages,
        })
        .collect()
}

/// Message counts pivoted by weekday row and hour-period column.
///
/// Always 7 rows (Monday..Sunday) by 24 columns ("0-1".."23-0"); cells
/// with no messages hold zero rather than being absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    days: Vec<String>,
    periods: Vec<String>,
    cells: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Row labels, Monday first.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Column labels, "0-1" through "23-0".
    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    /// The 7x24 count matrix, rows in [`days`](Self::days) order.
    pub fn cells(&self) -> &[Vec<usize>] {
        &self.cells
    }

    /// Count for a (weekday row, hour column) cell.
    pub fn get(&self, day_index: usize, hour: usize) -> usize {
        self.cells[day_index][hour]
    }

    /// Sum over all cells; equals the selection's message count.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }
}

/// Builds the weekday-by-period activity heatmap for a selection.
pub fn activity_heatmap(selection: &Selection, transcript: &Transcript) -> Heatmap {
    let mut cells = vec![vec![0usize; 24]; 7];

    for record in selected(selection, transcript) {
        cells[weekday_index(record.date_only.weekday())][record.hour as usize] += 1;
    }

    Heatmap {
        days: DAY_NAMES.iter().map(|d| (*d).to_string()).collect(),
        periods: (0..24).map(period_label).collect(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{MessageRecord, Sender};
    use chrono::NaiveDate;

    fn record(y: i32, mo: u32, d: u32, h: u32) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap();
        MessageRecord::new(ts, Sender::named("Alice"), "hi")
    }

    #[test]
    fn test_week_activity_map_shape() {
        // 2024-01-15 is a Monday, 2024-01-21 a Sunday
        let t = Transcript::new(
            vec![
                record(2024, 1, 15, 10),
                record(2024, 1, 15, 11),
                record(2024, 1, 21, 12),
            ],
            0,
        );

        let map = week_activity_map(&Selection::Overall, &t);
        assert_eq!(map.len(), 7);
        assert_eq!(map[0].day, "Monday");
        assert_eq!(map[0].messages, 2);
        assert_eq!(map[6].day, "Sunday");
        assert_eq!(map[6].messages, 1);
        assert_eq!(map[2].messages, 0);
    }

    #[test]
    fn test_month_activity_map_shape() {
        let t = Transcript::new(
            vec![
                record(2023, 3, 1, 9),
                record(2024, 3, 1, 9),
                record(2024, 7, 4, 9),
            ],
            0,
        );

        let map = month_activity_map(&Selection::Overall, &t);
        assert_eq!(map.len(), 12);
        assert_eq!(map[2].month, "March");
        // Same month across years tallied together
        assert_eq!(map[2].messages, 2);
        assert_eq!(map[6].messages, 1);
        assert_eq!(map[0].messages, 0);
    }

    #[test]
    fn test_heatmap_dimensions_and_total() {
        let t = Transcript::new(
            vec![
                record(2024, 1, 15, 0),
                record(2024, 1, 15, 23),
                record(2024, 1, 16, 14),
            ],
            0,
        );

        let heatmap = activity_heatmap(&Selection::Overall, &t);
        assert_eq!(heatmap.days().len(), 7);
        assert_eq!(heatmap.periods().len(), 24);
        assert_eq!(heatmap.cells().len(), 7);
        assert!(heatmap.cells().iter().all(|row| row.len() == 24));

        assert_eq!(heatmap.periods()[0], "0-1");
        assert_eq!(heatmap.periods()[23], "23-0");

        // Monday hour 0 and hour 23, Tuesday hour 14
        assert_eq!(heatmap.get(0, 0), 1);
        assert_eq!(heatmap.get(0, 23), 1);
        assert_eq!(heatmap.get(1, 14), 1);
        assert_eq!(heatmap.total(), t.len());
    }

    #[test]
    fn test_heatmap_empty_selection_is_zero() {
        let t = Transcript::new(vec![record(2024, 1, 15, 10)], 0);
        let heatmap = activity_heatmap(&Selection::user("Bob"), &t);
        assert_eq!(heatmap.total(), 0);
        assert_eq!(heatmap.days().len(), 7);
        assert_eq!(heatmap.periods().len(), 24);
    }
}
