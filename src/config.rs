//! Configuration types for the preprocessor and analytics.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::ParserConfig;
//! use chatlens::preprocess::Preprocessor;
//!
//! let config = ParserConfig::new()
//!     .with_detection_sample(50)
//!     .with_skip_invalid(false);
//!
//! let preprocessor = Preprocessor::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::preprocess::DateFormat;

/// Configuration for chat export preprocessing.
///
/// WhatsApp exports are TXT files with locale-specific timestamp formats.
/// The preprocessor auto-detects the format by analyzing the first
/// `detection_sample` lines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Number of leading lines analyzed for format detection (default: 20)
    pub detection_sample: usize,

    /// Skip lines whose timestamp matches no supported format instead of
    /// returning errors (default: true)
    pub skip_invalid: bool,

    /// Force a specific timestamp format, bypassing detection (default: auto)
    pub format: Option<DateFormat>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            detection_sample: 20,
            skip_invalid: true,
            format: None,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of lines analyzed for format detection.
    #[must_use]
    pub fn with_detection_sample(mut self, lines: usize) -> Self {
        self.detection_sample = lines;
        self
    }

    /// Sets whether to skip unparseable boundary lines.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    /// Forces a specific timestamp format.
    #[must_use]
    pub fn with_format(mut self, format: DateFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// A per-corpus token rewrite hook for word clouds.
///
/// Returning `None` drops the token; returning `Some` replaces it. The
/// input is already lower-cased and stop-word filtered.
pub type Normalizer = fn(&str) -> Option<String>;

/// Configuration for word cloud generation.
///
/// # Example
///
/// ```rust
/// use chatlens::config::WordcloudConfig;
///
/// fn strip_plural(word: &str) -> Option<String> {
///     Some(word.strip_suffix('s').unwrap_or(word).to_string())
/// }
///
/// let config = WordcloudConfig::new()
///     .with_max_words(100)
///     .with_normalizer(strip_plural);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordcloudConfig {
    /// Cap on the number of distinct words kept, by frequency (default: all)
    pub max_words: Option<usize>,

    /// Optional stemming/normalization hook applied per token
    pub normalizer: Option<Normalizer>,
}

impl WordcloudConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the vocabulary at the `max` most frequent words.
    #[must_use]
    pub fn with_max_words(mut self, max: usize) -> Self {
        self.max_words = Some(max);
        self
    }

    /// Sets the per-token normalization hook.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_default() {
        let config = ParserConfig::default();
        assert_eq!(config.detection_sample, 20);
        assert!(config.skip_invalid);
        assert!(config.format.is_none());
    }

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::new()
            .with_detection_sample(5)
            .with_skip_invalid(false)
            .with_format(DateFormat::Slash24);

        assert_eq!(config.detection_sample, 5);
        assert!(!config.skip_invalid);
        assert_eq!(config.format, Some(DateFormat::Slash24));
    }

    #[test]
    fn test_wordcloud_config_builder() {
        fn upper(word: &str) -> Option<String> {
            Some(word.to_uppercase())
        }

        let config = WordcloudConfig::new().with_max_words(10).with_normalizer(upper);
        assert_eq!(config.max_words, Some(10));
        let normalize = config.normalizer.unwrap();
        assert_eq!(normalize("hey"), Some("HEY".to_string()));
    }
}
