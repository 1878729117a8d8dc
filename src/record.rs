//! Structured message records and the parsed transcript.
//!
//! This module provides [`MessageRecord`], the normalized representation of
//! one chat message, and [`Transcript`], the immutable ordered collection the
//! preprocessor produces.
//!
//! # Overview
//!
//! A record consists of:
//! - **Parsed**: `timestamp`, `sender`, `body`
//! - **Derived**: calendar fields (`year`, `month_name`, `day_name`, ...)
//!   computed once at parse time and cached on the record
//!
//! # Examples
//!
//! ```
//! use chatlens::record::{MessageRecord, Sender};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(14, 30, 0)
//!     .unwrap();
//! let rec = MessageRecord::new(ts, Sender::named("Alice"), "hello");
//!
//! assert_eq!(rec.day_name, "Monday");
//! assert_eq!(rec.month_name, "January");
//! assert_eq!(rec.period, "14-15");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// English weekday names, Monday first.
pub(crate) const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English month names, January first.
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the hour-range bucket label for a message hour.
///
/// Labels wrap at midnight: hour 23 maps to `"23-0"`, hour 0 to `"0-1"`.
pub(crate) fn period_label(hour: u32) -> String {
    match hour {
        23 => "23-0".to_string(),
        h => format!("{h}-{}", h + 1),
    }
}

/// Returns the Monday-first row index for a weekday.
pub(crate) fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

/// The author of a message: a named participant or the system itself.
///
/// System-generated lines (joins, leaves, subject changes, encryption
/// notices) carry no `"Name: "` separator in the export and have no human
/// sender. Representing them as an explicit variant instead of a sentinel
/// string keeps filtering mistakes out of the aggregation code.
///
/// The serialized form keeps the conventional `"group_notification"` label
/// for [`System`](Sender::System), so JSON consumers see the familiar
/// string; named senders serialize as their plain name.
///
/// # Example
///
/// ```
/// use chatlens::record::Sender;
///
/// let alice = Sender::named("Alice");
/// assert_eq!(alice.name(), Some("Alice"));
/// assert!(!alice.is_system());
///
/// assert!(Sender::System.is_system());
/// assert_eq!(Sender::System.to_string(), "group_notification");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sender {
    /// A system-generated line with no human sender.
    #[serde(rename = "group_notification")]
    System,

    /// A human participant, by display name.
    #[serde(untagged)]
    Named(String),
}

impl Sender {
    /// Creates a named sender.
    pub fn named(name: impl Into<String>) -> Self {
        Sender::Named(name.into())
    }

    /// Returns `true` for system-generated lines.
    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }

    /// Returns the sender name, or `None` for system lines.
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::System => None,
            Sender::Named(name) => Some(name),
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::System => write!(f, "group_notification"),
            Sender::Named(name) => write!(f, "{name}"),
        }
    }
}

/// A parsed chat message with cached calendar fields.
///
/// All derived fields are computed once in [`MessageRecord::new`] from the
/// timestamp; aggregation passes read them without touching chrono again.
///
/// | Field | Description |
/// |-------|-------------|
/// | `timestamp` | Absolute date-time of the message |
/// | `sender` | [`Sender::Named`] or [`Sender::System`] |
/// | `body` | Message text, trimmed, multi-line bodies merged |
/// | `year`..`minute` | Calendar components of `timestamp` |
/// | `date_only` | Calendar date without time |
/// | `period` | Hour-range heatmap bucket, e.g. `"14-15"` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Absolute date-time of the message.
    pub timestamp: NaiveDateTime,

    /// Message author.
    pub sender: Sender,

    /// Message text. May contain newlines for multiline messages.
    pub body: String,

    /// Calendar year.
    pub year: i32,

    /// English month name ("January").
    pub month_name: String,

    /// Month number, 1-based.
    pub month_number: u32,

    /// Day of month, 1-based.
    pub day: u32,

    /// English weekday name ("Monday").
    pub day_name: String,

    /// Hour of day, 0-23.
    pub hour: u32,

    /// Minute of hour, 0-59.
    pub minute: u32,

    /// Calendar date without time.
    pub date_only: NaiveDate,

    /// Hour-range bucket label, e.g. "14-15"; wraps as "23-0".
    pub period: String,
}

impl MessageRecord {
    /// Creates a record and derives all calendar fields from the timestamp.
    pub fn new(timestamp: NaiveDateTime, sender: Sender, body: impl Into<String>) -> Self {
        let date_only = timestamp.date();
        let hour = timestamp.hour();
        Self {
            timestamp,
            sender,
            body: body.into(),
            year: timestamp.year(),
            month_name: MONTH_NAMES[(timestamp.month() - 1) as usize].to_string(),
            month_number: timestamp.month(),
            day: timestamp.day(),
            day_name: DAY_NAMES[weekday_index(date_only.weekday())].to_string(),
            hour,
            minute: timestamp.minute(),
            date_only,
            period: period_label(hour),
        }
    }

    /// Appends a continuation line to the body.
    ///
    /// Used by the preprocessor for messages spanning multiple physical
    /// lines; everything until the next timestamp boundary belongs to the
    /// current record.
    pub(crate) fn append_line(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
    }

    /// Trims surrounding whitespace off the accumulated body.
    pub(crate) fn trim_body(&mut self) {
        let trimmed = self.body.trim();
        if trimmed.len() != self.body.len() {
            self.body = trimmed.to_string();
        }
    }
}

/// The immutable result of preprocessing one chat export.
///
/// Records are ordered by original appearance in the source text
/// (chronological in well-formed exports) and never mutated after parsing.
/// All aggregation functions take a `Transcript` as read-only input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    records: Vec<MessageRecord>,
    skipped_lines: usize,
}

impl Transcript {
    pub(crate) fn new(records: Vec<MessageRecord>, skipped_lines: usize) -> Self {
        Self {
            records,
            skipped_lines,
        }
    }

    /// Returns the parsed records in appearance order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records were parsed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of boundary lines dropped because their timestamp matched no
    /// supported format.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Iterates over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    /// Returns the sorted, deduplicated list of named senders.
    ///
    /// System lines are excluded. This is the list a dashboard sidebar
    /// offers next to "Overall".
    pub fn senders(&self) -> Vec<String> {
        let mut senders: Vec<String> = self
            .records
            .iter()
            .filter_map(|r| r.sender.name())
            .map(ToString::to_string)
            .collect();
        senders.sort();
        senders.dedup();
        senders
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
