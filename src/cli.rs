//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - Report output format options

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Analyze a WhatsApp chat export: message counts, timelines, activity
/// maps, word and emoji frequencies.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt --format json
    chatlens chat.txt --stopwords my_stopwords.txt
    chatlens chat.txt --list-users")]
pub struct Args {
    /// Path to the exported chat file
    pub input: String,

    /// Sender to analyze, or "Overall" for the whole chat
    #[arg(short, long, default_value = "Overall")]
    pub user: String,

    /// Report output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Custom stop-word list, one word per line
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<String>,

    /// List the senders found in the export and exit
    #[arg(long)]
    pub list_users: bool,

    /// Fail on unparseable timestamp lines instead of skipping them
    #[arg(long)]
    pub strict: bool,
}

/// Report output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text report (default)
    #[default]
    Text,

    /// Full report as pretty-printed JSON
    #[cfg(feature = "json-output")]
    Json,
}

impl ReportFormat {
    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        if cfg!(feature = "json-output") {
            &["text", "json"]
        } else {
            &["text"]
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            #[cfg(feature = "json-output")]
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            #[cfg(feature = "json-output")]
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display() {
        assert_eq!(ReportFormat::Text.to_string(), "text");
        #[cfg(feature = "json-output")]
        assert_eq!(ReportFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("txt".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        #[cfg(feature = "json-output")]
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_args_parse() {
        use clap::Parser as _;
        let args = Args::parse_from(["chatlens", "chat.txt", "--user", "Alice"]);
        assert_eq!(args.input, "chat.txt");
        assert_eq!(args.user, "Alice");
        assert_eq!(args.format, ReportFormat::Text);
        assert!(!args.strict);
        assert!(!args.list_users);
    }
}
