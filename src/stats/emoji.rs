//! Emoji frequency analysis.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::Transcript;
use crate::resources::is_emoji;
use crate::stats::{Selection, selected_named};

/// Frequency of one emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    /// The emoji character.
    pub emoji: String,
    /// Occurrences across the selection.
    pub count: usize,
}

/// Counts emoji usage for a selection, descending by count.
///
/// Bodies are scanned character-by-character against the static Unicode
/// emoji table; system lines are excluded. An input without emoji yields
/// an empty sequence, not an error.
///
/// # Example
///
/// ```
/// use chatlens::preprocess::Preprocessor;
/// use chatlens::stats::{Selection, emoji_helper};
///
/// let transcript =
///     Preprocessor::new().preprocess("15/1/2024, 10:30 - Alice: good night 😂😂🌙")?;
/// let emoji = emoji_helper(&Selection::Overall, &transcript);
/// assert_eq!(emoji[0].emoji, "😂");
/// assert_eq!(emoji[0].count, 2);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn emoji_helper(selection: &Selection, transcript: &Transcript) -> Vec<EmojiCount> {
    let mut order: Vec<char> = Vec::new();
    let mut counts: HashMap<char, usize> = HashMap::new();

    for record in selected_named(selection, transcript) {
        for c in record.body.chars().filter(|&c| is_emoji(c)) {
            let entry = counts.entry(c).or_insert(0);
            if *entry == 0 {
                order.push(c);
            }
            *entry += 1;
        }
    }

    let mut ranked: Vec<EmojiCount> = order
        .into_iter()
        .map(|c| EmojiCount {
            emoji: c.to_string(),
            count: counts[&c],
        })
        .collect();
    // Stable sort keeps first-encounter order among equal counts
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}
