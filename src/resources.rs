//! Process-wide read-only analysis resources.
//!
//! Two static resources back the analytics functions:
//!
//! - **Stop words** ([`Lexicon`]): a membership set of words excluded from
//!   frequency analysis. A default English list is embedded in the binary;
//!   a custom list can be loaded from a file. Loaded once and passed into
//!   analytics functions as an explicit read-only handle rather than
//!   consulted through ambient global state.
//! - **Emoji classification** ([`is_emoji`]): the Unicode emoji table
//!   compiled into the `emojis` crate, queried per character.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::Result;

const BUILTIN_STOPWORDS: &str = include_str!("../resources/stopwords.txt");

static BUILTIN: OnceLock<Lexicon> = OnceLock::new();

/// A read-only stop-word list, queried by membership test.
///
/// # Example
///
/// ```
/// use chatlens::resources::Lexicon;
///
/// let lexicon = Lexicon::builtin();
/// assert!(lexicon.is_stop_word("the"));
/// assert!(!lexicon.is_stop_word("pizza"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    stop_words: HashSet<String>,
}

impl Lexicon {
    /// Returns the embedded default stop-word list.
    ///
    /// Built on first use and shared for the lifetime of the process.
    pub fn builtin() -> &'static Lexicon {
        BUILTIN.get_or_init(|| Lexicon::from_text(BUILTIN_STOPWORDS))
    }

    /// Builds a lexicon from stop-word text, one word per line.
    ///
    /// Words are lower-cased; blank lines and `#` comments are ignored.
    pub fn from_text(text: &str) -> Self {
        let stop_words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { stop_words }
    }

    /// Loads a lexicon from a stop-word file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Returns `true` if `word` is a stop word.
    ///
    /// The lookup is case-sensitive; analytics tokenizers lower-case
    /// tokens before querying.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Number of stop words in the list.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Returns `true` if the character is classified as emoji by the Unicode
/// emoji table.
///
/// Multi-codepoint sequences (skin tones, ZWJ families) are counted per
/// scalar value by callers scanning character-by-character.
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    emojis::get(c.encode_utf8(&mut buf)).is_some()
}
