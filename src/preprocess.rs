//! WhatsApp TXT export preprocessor.
//!
//! Exports vary by locale. The preprocessor auto-detects the timestamp
//! format by analyzing the first lines of the file, then walks the text
//! line by line: a line matching the format starts a new message, anything
//! else is a continuation of the previous message's body.
//!
//! Supported formats (all `date, time - ` prefixes):
//! - 12-hour: `1/15/24, 10:30 AM - Sender: Message`
//! - 24-hour slashes: `15/1/2024, 10:30 - Sender: Message`
//! - 24-hour dots: `15.01.2024, 10:30 - Sender: Message`
//!
//! Lines without a `"Name: "` separator after the prefix are group
//! notifications (joins, leaves, subject changes) and get
//! [`Sender::System`].

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::record::{MessageRecord, Sender, Transcript};

/// Detected timestamp format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// 12-hour with meridiem: `1/15/24, 10:30 AM - `
    SlashAmPm,
    /// 24-hour with slashes: `15/1/2024, 10:30 - `
    Slash24,
    /// 24-hour with dots: `15.01.2024, 10:30 - `
    Dot24,
}

impl DateFormat {
    /// Returns the boundary regex pattern for this format.
    ///
    /// Captures: date, time, remainder of the line. The meridiem is
    /// mandatory in the 12-hour pattern, which keeps the variants disjoint
    /// during detection.
    pub(crate) fn pattern(self) -> &'static str {
        match self {
            // 1/15/24, 10:30 AM - Sender: Message
            DateFormat::SlashAmPm => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?\s?[APap][Mm])\s-\s(.*)$"
            }
            // 15/1/2024, 10:30 - Sender: Message
            DateFormat::Slash24 => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?)\s-\s(.*)$"
            }
            // 15.01.2024, 10:30 - Sender: Message
            DateFormat::Dot24 => {
                r"^(\d{1,2}\.\d{1,2}\.\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?)\s-\s(.*)$"
            }
        }
    }

    /// Returns chrono format strings for this variant, tried in order.
    ///
    /// Priority is fixed and pinned by tests: two-digit years before
    /// four-digit, and for the ambiguous slash variants day-first before
    /// month-first (12-hour exports are month-first, matching their US
    /// origin).
    pub(crate) fn datetime_formats(self) -> &'static [&'static str] {
        match self {
            DateFormat::SlashAmPm => &[
                "%m/%d/%y, %I:%M %p",
                "%m/%d/%y, %I:%M:%S %p",
                "%m/%d/%Y, %I:%M %p",
                "%m/%d/%Y, %I:%M:%S %p",
                "%d/%m/%y, %I:%M %p",
                "%d/%m/%Y, %I:%M %p",
            ],
            DateFormat::Slash24 => &[
                "%d/%m/%y, %H:%M",
                "%d/%m/%y, %H:%M:%S",
                "%d/%m/%Y, %H:%M",
                "%d/%m/%Y, %H:%M:%S",
                "%m/%d/%y, %H:%M",
                "%m/%d/%Y, %H:%M",
            ],
            DateFormat::Dot24 => &[
                "%d.%m.%y, %H:%M",
                "%d.%m.%y, %H:%M:%S",
                "%d.%m.%Y, %H:%M",
                "%d.%m.%Y, %H:%M:%S",
            ],
        }
    }

    /// Returns all format variants, in detection tie-break order.
    pub fn all() -> &'static [DateFormat] {
        &[DateFormat::SlashAmPm, DateFormat::Slash24, DateFormat::Dot24]
    }
}

/// Detection patterns for format auto-detection.
struct FormatDetector {
    format: DateFormat,
    regex: Regex,
}

impl FormatDetector {
    fn new(format: DateFormat) -> Self {
        Self {
            format,
            regex: Regex::new(format.pattern()).unwrap(),
        }
    }

    fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// Auto-detect the timestamp format by scoring sample lines.
fn detect_format(lines: &[&str]) -> Option<DateFormat> {
    let detectors: Vec<FormatDetector> = DateFormat::all()
        .iter()
        .map(|&f| FormatDetector::new(f))
        .collect();

    let mut scores = vec![0usize; detectors.len()];

    for line in lines {
        for (i, detector) in detectors.iter().enumerate() {
            if detector.matches(line) {
                scores[i] += 1;
            }
        }
    }

    // Highest score wins; ties fall to the earlier variant
    let max_score = *scores.iter().max()?;
    if max_score == 0 {
        return None;
    }

    let winner_idx = scores.iter().position(|&s| s == max_score)?;
    Some(detectors[winner_idx].format)
}

/// Parse a timestamp from captured date and time strings.
///
/// iOS exports pad the meridiem with U+202F; normalized to a plain space
/// before handing the string to chrono.
fn parse_timestamp(date_str: &str, time_str: &str, format: DateFormat) -> Option<NaiveDateTime> {
    let time = time_str.replace(['\u{202f}', '\u{a0}'], " ");
    let datetime_str = format!("{date_str}, {}", time.trim());

    for parse_format in format.datetime_formats() {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&datetime_str, parse_format) {
            return Some(naive);
        }
    }

    None
}

/// Split the post-prefix remainder into sender and body.
///
/// The portion before the first `": "` is the sender; without the
/// separator the whole remainder is a group notification.
fn split_sender(rest: &str) -> (Sender, &str) {
    match rest.split_once(": ") {
        Some((name, body)) => (Sender::named(name.trim()), body),
        None => (Sender::System, rest),
    }
}

/// Preprocessor for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatlens::preprocess::Preprocessor;
///
/// let export = "15/1/2024, 10:30 - Alice: Hello\n15/1/2024, 10:31 - Bob: Hi";
/// let transcript = Preprocessor::new().preprocess(export)?;
/// assert_eq!(transcript.len(), 2);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub struct Preprocessor {
    config: ParserConfig,
}

impl Preprocessor {
    /// Creates a new preprocessor with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a preprocessor with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses raw uploaded bytes, decoding them as UTF-8 first.
    pub fn preprocess_bytes(&self, bytes: &[u8]) -> Result<Transcript> {
        let content =
            std::str::from_utf8(bytes).map_err(|e| ChatlensError::utf8("chat export", e))?;
        self.preprocess(content)
    }

    /// Parses the full text of one exported chat file.
    ///
    /// Best-effort semantics: boundary lines whose timestamp matches no
    /// supported format are skipped and counted on the transcript (unless
    /// `skip_invalid` is off, in which case the first one is an error).
    /// Lines not matching the boundary pattern at all are continuations of
    /// the previous message's body.
    ///
    /// # Errors
    ///
    /// [`ChatlensError::InvalidFormat`] when no timestamp format can be
    /// detected over a non-empty input.
    pub fn preprocess(&self, content: &str) -> Result<Transcript> {
        if content.trim().is_empty() {
            return Ok(Transcript::default());
        }

        let lines: Vec<&str> = content.lines().collect();

        let format = match self.config.format {
            Some(format) => format,
            None => {
                let sample_size = std::cmp::min(self.config.detection_sample, lines.len());
                detect_format(&lines[..sample_size]).ok_or_else(|| {
                    ChatlensError::invalid_format(
                        "could not detect the timestamp format. \
                         Make sure the file is a WhatsApp chat export.",
                    )
                })?
            }
        };

        let regex = Regex::new(format.pattern())
            .map_err(|e| ChatlensError::invalid_format(e.to_string()))?;

        let mut records: Vec<MessageRecord> = Vec::new();
        let mut skipped = 0usize;

        for (idx, line) in lines.iter().enumerate() {
            if let Some(caps) = regex.captures(line) {
                let date_str = caps.get(1).map_or("", |m| m.as_str());
                let time_str = caps.get(2).map_or("", |m| m.as_str());
                let rest = caps.get(3).map_or("", |m| m.as_str());

                match parse_timestamp(date_str, time_str, format) {
                    Some(timestamp) => {
                        let (sender, body) = split_sender(rest);
                        records.push(MessageRecord::new(timestamp, sender, body));
                    }
                    None if self.config.skip_invalid => skipped += 1,
                    None => {
                        return Err(ChatlensError::parse(
                            idx + 1,
                            format!("timestamp '{date_str}, {time_str}' matched no supported format"),
                        ));
                    }
                }
            } else if let Some(last) = records.last_mut() {
                // Continuation of a multiline message
                last.append_line(line);
            }
            // Orphan line before the first boundary: skip
        }

        for record in &mut records {
            record.trim_body();
        }

        Ok(Transcript::new(records, skipped))
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
