//! Sender ranking across the whole chat.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::Transcript;
use crate::stats::round2;

/// Message count for one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCount {
    /// Sender display name.
    pub user: String,
    /// Messages from that sender.
    pub messages: usize,
}

/// Share of the chat for one sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    /// Sender display name.
    pub user: String,
    /// Percentage of all named messages, rounded half-up to 2 decimals.
    pub percent: f64,
}

/// The busiest-senders summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusyUsers {
    /// Top senders by message count, at most five, descending.
    pub top: Vec<UserCount>,

    /// Every sender's share of the chat, descending by count.
    pub shares: Vec<UserShare>,
}

/// Ranks senders by message count across the whole chat.
///
/// Group notifications are excluded from both the counts and the
/// percentage base. Ties keep the order senders first appeared in the
/// transcript. The ranking is inherently cross-user, so unlike the other
/// aggregations it takes no selection.
pub fn most_busy_users(transcript: &Transcript) -> BusyUsers {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for record in transcript.iter() {
        if let Some(name) = record.sender.name() {
            let entry = counts.entry(name).or_insert(0);
            if *entry == 0 {
                order.push(name);
            }
            *entry += 1;
        }
    }

    let total: usize = counts.values().sum();
    if total == 0 {
        return BusyUsers::default();
    }

    // Stable sort over encounter order keeps ties deterministic
    let mut ranked: Vec<UserCount> = order
        .into_iter()
        .map(|user| UserCount {
            user: user.to_string(),
            messages: counts[user],
        })
        .collect();
    ranked.sort_by(|a, b| b.messages.cmp(&a.messages));

    let shares = ranked
        .iter()
        .map(|uc| UserShare {
            user: uc.user.clone(),
            percent: round2(uc.messages as f64 / total as f64 * 100.0),
        })
        .collect();

    let top = ranked.into_iter().take(5).collect();

    BusyUsers { top, shares }
}
