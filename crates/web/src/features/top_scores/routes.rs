use axum::{
    Router,
    routing::{delete, get},
};

use super::handlers::{
    create_top_score, delete_all_top_scores, delete_top_score, get_top_five, get_top_score,
    list_top_scores, not_a_score_id, update_top_score,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_top_scores).post(create_top_score))
        .route(
            "/getFive",
            get(get_top_five)
                .patch(not_a_score_id)
                .delete(not_a_score_id),
        )
        .route(
            "/all",
            delete(delete_all_top_scores)
                .get(not_a_score_id)
                .patch(not_a_score_id),
        )
        .route(
            "/:id",
            get(get_top_score)
                .patch(update_top_score)
                .delete(delete_top_score),
        )
}
