pub mod top_score;

pub use top_score::{RankedEntry, ScoreRecord};
