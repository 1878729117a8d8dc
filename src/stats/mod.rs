//! Aggregation functions over a parsed [`Transcript`].
//!
//! Every function here is pure: it takes the transcript (and, where
//! needed, a [`Lexicon`](crate::resources::Lexicon) handle) as read-only
//! input and returns a fresh summary value for the rendering layer. No
//! function has side effects on another, so call order never matters.
//!
//! Most functions take a [`Selection`] to scope the analysis to one sender
//! or to the whole chat:
//!
//! ```rust
//! use chatlens::preprocess::Preprocessor;
//! use chatlens::stats::{fetch_stats, Selection};
//!
//! let transcript = Preprocessor::new()
//!     .preprocess("15/1/2024, 10:30 - Alice: hello world")?;
//!
//! let overall = fetch_stats(&Selection::Overall, &transcript);
//! assert_eq!(overall.messages, 1);
//!
//! let alice = fetch_stats(&Selection::user("Alice"), &transcript);
//! assert_eq!(alice.words, 2);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

mod activity;
mod emoji;
mod overview;
mod report;
mod timeline;
mod users;
mod words;

pub use activity::{
    DayActivity, Heatmap, MonthActivity, activity_heatmap, month_activity_map, week_activity_map,
};
pub use emoji::{EmojiCount, emoji_helper};
pub use overview::{ChatStats, fetch_stats};
pub use report::Report;
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
pub use users::{BusyUsers, UserCount, UserShare, most_busy_users};
pub use words::{WordCloud, WordCount, create_wordcloud, most_common_words};

use serde::{Deserialize, Serialize};

use crate::record::{MessageRecord, Sender, Transcript};

/// The literal string WhatsApp substitutes for omitted media content.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// The sender scope of an analysis: one participant or the whole chat.
///
/// Parses from the strings the rendering layer passes around: `"Overall"`
/// selects everything, any other string selects that sender. The
/// serialized form is that same plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// All senders combined.
    Overall,
    /// A single named sender.
    #[serde(untagged)]
    User(String),
}

impl Selection {
    /// Creates a single-sender selection.
    pub fn user(name: impl Into<String>) -> Self {
        Selection::User(name.into())
    }

    /// Parses a selection label; `"Overall"` selects the whole chat.
    pub fn from_label(label: &str) -> Self {
        if label == "Overall" {
            Selection::Overall
        } else {
            Selection::User(label.to_string())
        }
    }

    /// Returns `true` if the record's sender falls inside this selection.
    ///
    /// `Overall` includes system lines; a user selection never matches
    /// them.
    pub fn matches(&self, sender: &Sender) -> bool {
        match self {
            Selection::Overall => true,
            Selection::User(name) => sender.name() == Some(name.as_str()),
        }
    }

    /// Returns the display label ("Overall" or the sender name).
    pub fn label(&self) -> &str {
        match self {
            Selection::Overall => "Overall",
            Selection::User(name) => name,
        }
    }
}

impl std::str::FromStr for Selection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selection::from_label(s))
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Records inside the selection, system lines included for `Overall`.
pub(crate) fn selected<'a>(
    selection: &'a Selection,
    transcript: &'a Transcript,
) -> impl Iterator<Item = &'a MessageRecord> + 'a {
    transcript.iter().filter(move |r| selection.matches(&r.sender))
}

/// Records inside the selection with system lines excluded.
///
/// Word, emoji, and user-ranking analyses operate on human messages only.
pub(crate) fn selected_named<'a>(
    selection: &'a Selection,
    transcript: &'a Transcript,
) -> impl Iterator<Item = &'a MessageRecord> + 'a {
    selected(selection, transcript).filter(|r| !r.sender.is_system())
}

/// Rounds to 2 decimal places, half away from zero (half-up for the
/// non-negative percentages used here).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
