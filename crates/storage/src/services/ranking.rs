use std::cmp::Ordering;

use crate::models::{RankedEntry, ScoreRecord};

/// Number of sorted records kept before placements are assigned
pub const RANKING_WINDOW: usize = 10;

/// Number of ranked entries returned by the leaderboard
pub const TOP_PLACEMENTS: usize = 5;

/// Builds the leaderboard: highest scores first, each with a 1-based placement.
///
/// The sort is stable, so records with equal scores keep the order they were
/// given in. `0.0` and `-0.0` count as equal. Returns at most [`TOP_PLACEMENTS`] entries.
pub fn rank_top_scores(records: Vec<ScoreRecord>) -> Vec<RankedEntry> {
    let mut sorted = records;
    sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    sorted.truncate(RANKING_WINDOW);

    sorted
        .into_iter()
        .zip(1..)
        .map(|(record, placement)| RankedEntry { placement, record })
        .take(TOP_PLACEMENTS)
        .collect()
}
