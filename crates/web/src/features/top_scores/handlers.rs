use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use storage::{
    dto::top_score::{CreateScoreRequest, TopScoreBody, TopScoresBody, UpdateScoreRequest},
    models::{RankedEntry, ScoreRecord},
};

use crate::error::WebError;
use crate::middleware::ownership::Requester;
use crate::state::AppState;

use super::{pipeline, services};

#[utoipa::path(
    get,
    path = "/topScores",
    responses(
        (status = 200, description = "List all scores successfully", body = TopScoresBody<ScoreRecord>)
    ),
    tag = "topScores"
)]
pub async fn list_top_scores(State(state): State<AppState>) -> Result<Response, WebError> {
    let scores = services::list_scores(state.store.as_ref()).await?;

    Ok(Json(TopScoresBody::new(scores)).into_response())
}

#[utoipa::path(
    get,
    path = "/topScores/getFive",
    responses(
        (status = 200, description = "The five highest scores with their placement", body = TopScoresBody<RankedEntry>)
    ),
    tag = "topScores"
)]
pub async fn get_top_five(State(state): State<AppState>) -> Result<Response, WebError> {
    let ranked = services::top_five(state.store.as_ref()).await?;

    Ok(Json(TopScoresBody::new(ranked)).into_response())
}

#[utoipa::path(
    get,
    path = "/topScores/{id}",
    params(
        ("id" = String, Path, description = "Score id")
    ),
    responses(
        (status = 200, description = "Score found", body = TopScoreBody<ScoreRecord>),
        (status = 404, description = "Score not found")
    ),
    tag = "topScores"
)]
pub async fn get_top_score(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = pipeline::parse_id(&id)?;
    let score = services::get_score(state.store.as_ref(), id).await?;

    Ok(Json(TopScoreBody::new(score)).into_response())
}

#[utoipa::path(
    post,
    path = "/topScores",
    request_body = TopScoreBody<CreateScoreRequest>,
    responses(
        (status = 201, description = "Score created successfully", body = TopScoreBody<ScoreRecord>),
        (status = 400, description = "Validation error")
    ),
    tag = "topScores"
)]
pub async fn create_top_score(
    State(state): State<AppState>,
    body: Result<Json<TopScoreBody<Map<String, Value>>>, JsonRejection>,
) -> Result<Response, WebError> {
    let new_score = pipeline::parse_new_score(pipeline::top_score_fields(body)?)?;

    let score = services::create_score(state.store.as_ref(), &new_score).await?;

    Ok((StatusCode::CREATED, Json(TopScoreBody::new(score))).into_response())
}

#[utoipa::path(
    patch,
    path = "/topScores/{id}",
    params(
        ("id" = String, Path, description = "Score id")
    ),
    request_body = TopScoreBody<UpdateScoreRequest>,
    responses(
        (status = 204, description = "Score updated successfully"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Caller does not own the score"),
        (status = 404, description = "Score not found")
    ),
    tag = "topScores"
)]
pub async fn update_top_score(
    State(state): State<AppState>,
    Path(id): Path<String>,
    requester: Requester,
    body: Result<Json<TopScoreBody<Map<String, Value>>>, JsonRejection>,
) -> Result<Response, WebError> {
    let id = pipeline::parse_id(&id)?;
    let fields = pipeline::top_score_fields(body)?;
    let changes = pipeline::parse_changes(pipeline::strip_blank_fields(fields))?;

    services::update_score(state.store.as_ref(), id, &requester, &changes).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/topScores/all",
    responses(
        (status = 204, description = "All scores deleted")
    ),
    tag = "topScores"
)]
pub async fn delete_all_top_scores(State(state): State<AppState>) -> Result<Response, WebError> {
    services::delete_all_scores(state.store.as_ref()).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/topScores/{id}",
    params(
        ("id" = String, Path, description = "Score id")
    ),
    responses(
        (status = 204, description = "Score deleted successfully"),
        (status = 404, description = "Score not found")
    ),
    tag = "topScores"
)]
pub async fn delete_top_score(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = pipeline::parse_id(&id)?;
    services::delete_score(state.store.as_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Other methods on `getFive` and `all` treat the segment as an id, which never names a score
pub async fn not_a_score_id() -> WebError {
    WebError::NotFound
}
