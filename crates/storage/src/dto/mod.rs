pub mod top_score;
