pub mod top_scores;
