//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports and computing the
//! descriptive statistics an analytics dashboard displays.
//!
//! ## Overview
//!
//! Chatlens has two halves:
//!
//! - **Preprocessing** — turns the raw text of an exported chat into an
//!   ordered [`Transcript`] of structured records (timestamp, sender, body,
//!   cached calendar fields), tolerating the locale differences between
//!   exports (12-hour and 24-hour timestamp variants) and merging multiline
//!   messages.
//! - **Analytics** — pure aggregation functions over the transcript:
//!   headline counters, monthly/daily timelines, weekday and month activity
//!   maps, a weekday-by-hour heatmap, sender ranking, word and emoji
//!   frequencies, and word cloud weights.
//!
//! The library has no opinion on rendering; every summary is a plain
//! serializable value for an external display layer. The bundled CLI is one
//! such layer.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = "15/1/2024, 10:30 - Alice: hello world\n\
//!                   15/1/2024, 10:31 - Bob: hi 😂";
//!
//!     let transcript = Preprocessor::new().preprocess(export)?;
//!
//!     let stats = fetch_stats(&Selection::Overall, &transcript);
//!     assert_eq!(stats.messages, 2);
//!
//!     // Or compute everything at once
//!     let report = Report::build(Selection::Overall, &transcript, Lexicon::builtin());
//!     assert_eq!(report.emoji[0].emoji, "😂");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`preprocess`] — [`Preprocessor`](preprocess::Preprocessor) and
//!   timestamp format detection
//! - [`record`] — [`MessageRecord`], [`Sender`], [`Transcript`]
//! - [`stats`] — aggregation functions and their summary types
//! - [`resources`] — stop-word [`Lexicon`](resources::Lexicon) and emoji
//!   classification
//! - [`config`] — [`ParserConfig`](config::ParserConfig),
//!   [`WordcloudConfig`](config::WordcloudConfig)
//! - [`cli`] — CLI argument types (feature `cli`)
//! - [`error`] — [`ChatlensError`] and [`Result`]
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod preprocess;
pub mod record;
pub mod resources;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use record::{MessageRecord, Sender, Transcript};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core data types
    pub use crate::record::{MessageRecord, Sender, Transcript};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Preprocessing
    pub use crate::preprocess::{DateFormat, Preprocessor};

    // Configuration
    pub use crate::config::{ParserConfig, WordcloudConfig};

    // Resources
    pub use crate::resources::Lexicon;

    // Analytics
    pub use crate::stats::{
        Report, Selection, activity_heatmap, create_wordcloud, daily_timeline, emoji_helper,
        fetch_stats, month_activity_map, monthly_timeline, most_busy_users, most_common_words,
        week_activity_map,
    };
}
