//! Word frequency analysis: common-word ranking and word cloud weights.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::config::WordcloudConfig;
use crate::error::{ChatlensError, Result};
use crate::record::Transcript;
use crate::resources::Lexicon;
use crate::stats::{MEDIA_PLACEHOLDER, Selection, selected_named};

/// How many words [`most_common_words`] returns.
const TOP_WORDS: usize = 20;

/// Frequency of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// Lower-cased word.
    pub word: String,
    /// Occurrences across the selection.
    pub count: usize,
}

/// Lower-cased contiguous alphabetic tokens of a body.
fn tokens(body: &str) -> impl Iterator<Item = String> + '_ {
    body.split(|c: char| !c.is_alphabetic())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// Counts tokens across the selection, preserving first-encounter order.
///
/// System lines and media placeholders are skipped; stop words are
/// dropped; the optional normalizer rewrites or drops what remains.
fn count_words(
    selection: &Selection,
    transcript: &Transcript,
    lexicon: &Lexicon,
    normalizer: Option<fn(&str) -> Option<String>>,
) -> Vec<WordCount> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in selected_named(selection, transcript) {
        if record.body == MEDIA_PLACEHOLDER {
            continue;
        }
        for token in tokens(&record.body) {
            if lexicon.is_stop_word(&token) {
                continue;
            }
            let word = match normalizer {
                Some(normalize) => match normalize(&token) {
                    Some(word) => word,
                    None => continue,
                },
                None => token,
            };
            let entry = counts.entry(word.clone()).or_insert(0);
            if *entry == 0 {
                order.push(word);
            }
            *entry += 1;
        }
    }

    let mut ranked: Vec<WordCount> = order
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            WordCount { word, count }
        })
        .collect();
    // Stable sort keeps first-encounter order among equal counts
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// The 20 most frequent non-stop words for a selection, descending.
///
/// An empty result means nothing to display, not an error.
pub fn most_common_words(
    selection: &Selection,
    transcript: &Transcript,
    lexicon: &Lexicon,
) -> Vec<WordCount> {
    let mut ranked = count_words(selection, transcript, lexicon, None);
    ranked.truncate(TOP_WORDS);
    ranked
}

/// Frequency-weighted word cloud input.
///
/// Maps each word to a weight in `(0, 1]`, the word's count divided by the
/// most frequent word's count. The ordered map keeps iteration
/// deterministic for renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordCloud {
    weights: BTreeMap<String, f64>,
}

impl WordCloud {
    /// The word-to-weight mapping.
    pub fn weights(&self) -> &BTreeMap<String, f64> {
        &self.weights
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the cloud has no words.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Builds word cloud weights for a selection.
///
/// # Errors
///
/// [`ChatlensError::EmptyVocabulary`] when no words survive filtering —
/// the "not enough data" condition the rendering layer reports to the
/// user.
pub fn create_wordcloud(
    selection: &Selection,
    transcript: &Transcript,
    lexicon: &Lexicon,
    config: &WordcloudConfig,
) -> Result<WordCloud> {
    let mut ranked = count_words(selection, transcript, lexicon, config.normalizer);

    if ranked.is_empty() {
        return Err(ChatlensError::empty_vocabulary(selection.label()));
    }

    if let Some(max_words) = config.max_words {
        ranked.truncate(max_words);
    }

    let max_count = ranked.first().map_or(1, |w| w.count) as f64;
    let weights = ranked
        .into_iter()
        .map(|w| (w.word, w.count as f64 / max_count))
        .collect();

    Ok(WordCloud { weights })
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

    fn transcript(bodies: &[&str]) -> Transcript {
        Transcript::new(
            bodies
                .iter()
                .map(|b| record(Sender::named("Alice"), b))
                .collect(),
            0,
        )
    }

    #[test]
    fn test_tokens_alphabetic_lowercase() {
        let words: Vec<String> = tokens("Hey! Pizza2night, pizza-time").collect();
        assert_eq!(words, vec!["hey", "pizza", "night", "pizza", "time"]);
    }

    #[test]
    fn test_most_common_words_ranking() {
        let t = transcript(&["pizza pizza burger", "pizza sushi", "the a an"]);
        let words = most_common_words(&Selection::Overall, &t, Lexicon::builtin());

        assert_eq!(words[0].word, "pizza");
        assert_eq!(words[0].count, 3);
        // Stop words never appear
        assert!(words.iter().all(|w| w.word != "the"));
        // Ties keep encounter order: burger before sushi
        assert_eq!(words[1].word, "burger");
        assert_eq!(words[2].word, "sushi");
    }

    #[test]
    fn test_most_common_words_caps_at_twenty() {
        let bodies: Vec<String> = (0u8..30)
            .map(|i| {
                format!(
                    "uniqueword{}{}",
                    char::from(b'a' + i / 26),
                    char::from(b'a' + i % 26)
                )
            })
            .collect();
        let refs: Vec<&str> = bodies.iter().map(String::as_str).collect();
        let t = transcript(&refs);

        let words = most_common_words(&Selection::Overall, &t, Lexicon::builtin());
        assert_eq!(words.len(), 20);
    }

    #[test]
    fn test_most_common_words_excludes_media_and_system() {
        let t = Transcript::new(
            vec![
                record(Sender::named("Alice"), MEDIA_PLACEHOLDER),
                record(Sender::System, "Alice changed the subject to pizza"),
            ],
            0,
        );
        let words = most_common_words(&Selection::Overall, &t, Lexicon::builtin());
        assert!(words.is_empty());
    }

    #[test]
    fn test_wordcloud_weights() {
        let t = transcript(&["pizza pizza pizza burger", "burger sushi"]);
        let cloud = create_wordcloud(
            &Selection::Overall,
            &t,
            Lexicon::builtin(),
            &WordcloudConfig::new(),
        )
        .unwrap();

        assert_eq!(cloud.len(), 3);
        assert_eq!(cloud.weights()["pizza"], 1.0);
        assert!((cloud.weights()["burger"] - 2.0 / 3.0).abs() < 1e-9);
        assert!((cloud.weights()["sushi"] - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_wordcloud_empty_vocabulary() {
        let t = transcript(&["the a an", MEDIA_PLACEHOLDER]);
        let err = create_wordcloud(
            &Selection::Overall,
            &t,
            Lexicon::builtin(),
            &WordcloudConfig::new(),
        )
        .unwrap_err();
        assert!(err.is_empty_vocabulary());
    }

    #[test]
    fn test_wordcloud_max_words() {
        let t = transcript(&["pizza pizza burger sushi"]);
        let config = WordcloudConfig::new().with_max_words(1);
        let cloud =
            create_wordcloud(&Selection::Overall, &t, Lexicon::builtin(), &config).unwrap();
        assert_eq!(cloud.len(), 1);
        assert!(cloud.weights().contains_key("pizza"));
    }

    #[test]
    fn test_wordcloud_normalizer() {
        fn drop_short(word: &str) -> Option<String> {
            (word.len() > 4).then(|| word.to_string())
        }

        let t = transcript(&["pizza cat dog burger"]);
        let config = WordcloudConfig::new().with_normalizer(drop_short);
        let cloud =
            create_wordcloud(&Selection::Overall, &t, Lexicon::builtin(), &config).unwrap();

        assert!(cloud.weights().contains_key("pizza"));
        assert!(cloud.weights().contains_key("burger"));
        assert!(!cloud.weights().contains_key("cat"));
    }
}
