//! One-call dashboard report.

use serde::{Deserialize, Serialize};

use crate::config::WordcloudConfig;
use crate::record::Transcript;
use crate::resources::Lexicon;
use crate::stats::{
    BusyUsers, ChatStats, DailyCount, DayActivity, EmojiCount, Heatmap, MonthActivity,
    MonthlyCount, Selection, WordCloud, WordCount, activity_heatmap, create_wordcloud,
    daily_timeline, emoji_helper, fetch_stats, month_activity_map, monthly_timeline,
    most_busy_users, most_common_words, week_activity_map,
};

/// Every aggregation for one selection, bundled.
///
/// This is what a dashboard computes when the user hits "show analysis":
/// the rendering layer takes the struct apart section by section. All
/// fields serialize, so the whole report can be shipped as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The analyzed selection.
    pub selection: Selection,

    /// Headline counters.
    pub stats: ChatStats,

    /// Messages per (year, month), chronological.
    pub monthly_timeline: Vec<MonthlyCount>,

    /// Messages per date, chronological.
    pub daily_timeline: Vec<DailyCount>,

    /// Messages per weekday, Monday..Sunday.
    pub week_activity: Vec<DayActivity>,

    /// Messages per month name, January..December.
    pub month_activity: Vec<MonthActivity>,

    /// Weekday-by-period heatmap.
    pub heatmap: Heatmap,

    /// Sender ranking; only present for [`Selection::Overall`].
    pub busy_users: Option<BusyUsers>,

    /// Top non-stop words, descending.
    pub common_words: Vec<WordCount>,

    /// Emoji usage, descending.
    pub emoji: Vec<EmojiCount>,

    /// Word cloud weights; `None` when the vocabulary is empty
    /// ("not enough data").
    pub wordcloud: Option<WordCloud>,
}

impl Report {
    /// Computes every summary for one selection.
    pub fn build(selection: Selection, transcript: &Transcript, lexicon: &Lexicon) -> Self {
        let busy_users = match selection {
            Selection::Overall => Some(most_busy_users(transcript)),
            Selection::User(_) => None,
        };
        let wordcloud =
            create_wordcloud(&selection, transcript, lexicon, &WordcloudConfig::new()).ok();

        Report {
            stats: fetch_stats(&selection, transcript),
            monthly_timeline: monthly_timeline(&selection, transcript),
            daily_timeline: daily_timeline(&selection, transcript),
            week_activity: week_activity_map(&selection, transcript),
            month_activity: month_activity_map(&selection, transcript),
            heatmap: activity_heatmap(&selection, transcript),
            busy_users,
            common_words: most_common_words(&selection, transcript, lexicon),
            emoji: emoji_helper(&selection, transcript),
            wordcloud,
            selection,
        }
    }
}
