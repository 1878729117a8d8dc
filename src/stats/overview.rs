//! Headline counters: messages, words, media, links.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::record::Transcript;
use crate::stats::{MEDIA_PLACEHOLDER, Selection, selected};

static URL_RE: OnceLock<Regex> = OnceLock::new();

fn url_regex() -> &'static Regex {
    URL_RE.get_or_init(|| Regex::new(r"(?i)\bhttps?://\S+|\bwww\.\S+").unwrap())
}

/// Headline statistics for a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStats {
    /// Total messages in the selection.
    pub messages: usize,

    /// Whitespace-delimited tokens across all bodies, media placeholders
    /// excluded.
    pub words: usize,

    /// Messages whose body is the media-omitted placeholder.
    pub media: usize,

    /// URL matches across all bodies; a message with several links counts
    /// once per link.
    pub links: usize,
}

/// Computes the headline counters for the selected sender.
///
/// `Overall` includes group notifications in the message count, matching
/// the raw timeline semantics.
///
/// # Example
///
/// ```
/// use chatlens::preprocess::Preprocessor;
/// use chatlens::stats::{Selection, fetch_stats};
///
/// let transcript = Preprocessor::new().preprocess(
///     "1/1/24, 10:00 - Alice: hello world\n1/1/24, 10:05 - Bob: <Media omitted>",
/// )?;
/// let stats = fetch_stats(&Selection::Overall, &transcript);
/// assert_eq!(
///     (stats.messages, stats.words, stats.media, stats.links),
///     (2, 2, 1, 0)
/// );
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn fetch_stats(selection: &Selection, transcript: &Transcript) -> ChatStats {
    let mut stats = ChatStats::default();

    for record in selected(selection, transcript) {
        stats.messages += 1;
        if record.body == MEDIA_PLACEHOLDER {
            stats.media += 1;
        } else {
            stats.words += record.body.split_whitespace().count();
        }
        stats.links += url_regex().find_iter(&record.body).count();
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{MessageRecord, Sender};
    use chrono::NaiveDate;

    fn record(sender: Sender, body: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        MessageRecord::new(ts, sender, body)
    }

    fn transcript(records: Vec<MessageRecord>) -> Transcript {
        Transcript::new(records, 0)
    }

    #[test]
    fn test_fetch_stats_counts() {
        let t = transcript(vec![
            record(Sender::named("Alice"), "hello world"),
            record(Sender::named("Bob"), MEDIA_PLACEHOLDER),
            record(Sender::System, "Alice joined"),
        ]);

        let stats = fetch_stats(&Selection::Overall, &t);
        assert_eq!(stats.messages, 3);
        // Media placeholder contributes no words; system line does
        assert_eq!(stats.words, 4);
        assert_eq!(stats.media, 1);
        assert_eq!(stats.links, 0);
    }

    #[test]
    fn test_fetch_stats_per_user() {
        let t = transcript(vec![
            record(Sender::named("Alice"), "one two three"),
            record(Sender::named("Bob"), "four"),
        ]);

        let stats = fetch_stats(&Selection::user("Alice"), &t);
        assert_eq!(stats.messages, 1);
        assert_eq!(stats.words, 3);

        let stats = fetch_stats(&Selection::user("Nobody"), &t);
        assert_eq!(stats, ChatStats::default());
    }

    #[test]
    fn test_fetch_stats_counts_every_link() {
        let t = transcript(vec![record(
            Sender::named("Alice"),
            "see https://example.com and www.example.org too",
        )]);

        let stats = fetch_stats(&Selection::Overall, &t);
        assert_eq!(stats.links, 2);
    }

    #[test]
    fn test_url_regex_variants() {
        let re = url_regex();
        assert!(re.is_match("http://example.com"));
        assert!(re.is_match("HTTPS://EXAMPLE.COM/path?q=1"));
        assert!(re.is_match("www.example.com"));
        assert!(!re.is_match("example dot com"));
    }
}
