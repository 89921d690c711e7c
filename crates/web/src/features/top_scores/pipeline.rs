//! Pure steps run on a request body before anything is written.

use axum::{Json, extract::rejection::JsonRejection};
use serde_json::{Map, Value};
use storage::dto::top_score::{
    CreateScoreRequest, NewScore, ScoreChanges, TopScoreBody, UpdateScoreRequest,
};
use uuid::Uuid;

use crate::error::WebError;

/// Unwraps the `topScore` object, reporting unreadable bodies as bad requests
pub fn top_score_fields(
    body: Result<Json<TopScoreBody<Map<String, Value>>>, JsonRejection>,
) -> Result<Map<String, Value>, WebError> {
    match body {
        Ok(Json(body)) => Ok(body.top_score),
        Err(rejection) => {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            Err(WebError::BadRequest(rejection.body_text()))
        }
    }
}

/// Turns the fields of a create request into a validated score
pub fn parse_new_score(fields: Map<String, Value>) -> Result<NewScore, WebError> {
    let request: CreateScoreRequest = serde_json::from_value(Value::Object(fields))
        .map_err(|e| WebError::BadRequest(format!("Invalid topScore: {}", e)))?;

    Ok(NewScore::try_from(request)?)
}

/// Drops string fields that are empty or whitespace only, so they never overwrite stored values
pub fn strip_blank_fields(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .filter(|(_, value)| !is_blank(value))
        .collect()
}

fn is_blank(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.trim().is_empty())
}

/// Turns the remaining fields into validated changes
pub fn parse_changes(fields: Map<String, Value>) -> Result<ScoreChanges, WebError> {
    let request: UpdateScoreRequest = serde_json::from_value(Value::Object(fields))
        .map_err(|e| WebError::BadRequest(format!("Invalid topScore: {}", e)))?;

    Ok(ScoreChanges::try_from(request)?)
}

/// A malformed id cannot name any stored record, so it is reported as not found
pub fn parse_id(raw: &str) -> Result<Uuid, WebError> {
    Uuid::parse_str(raw).map_err(|_| WebError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_strip_blank_fields_removes_empty_strings() {
        let fields = object(json!({ "name": "", "score": 12 }));

        let stripped = strip_blank_fields(fields);

        assert_eq!(Value::Object(stripped), json!({ "score": 12 }));
    }

    #[test]
    fn test_strip_blank_fields_removes_whitespace_strings() {
        let fields = object(json!({ "name": "   ", "score": "" }));

        assert!(strip_blank_fields(fields).is_empty());
    }

    #[test]
    fn test_strip_blank_fields_keeps_non_strings() {
        let fields = object(json!({ "name": "ada", "score": 0 }));

        let stripped = strip_blank_fields(fields.clone());

        assert_eq!(stripped, fields);
    }

    #[test]
    fn test_parse_changes_after_stripping() {
        let fields = strip_blank_fields(object(json!({ "name": "", "score": 55.5 })));

        let changes = parse_changes(fields).unwrap();

        assert_eq!(changes.name, None);
        assert_eq!(changes.score, Some(55.5));
    }

    #[test]
    fn test_parse_changes_rejects_textual_score() {
        let result = parse_changes(object(json!({ "score": "100" })));

        assert!(matches!(result, Err(WebError::BadRequest(_))));
    }

    #[test]
    fn test_parse_changes_ignores_unknown_fields() {
        let changes = parse_changes(object(json!({ "owner": "x", "name": "bo" }))).unwrap();

        assert_eq!(changes.name.as_deref(), Some("bo"));
        assert_eq!(changes.score, None);
    }

    #[test]
    fn test_parse_new_score_rejects_textual_score() {
        let result = parse_new_score(object(json!({ "name": "ada", "score": "100" })));

        assert!(matches!(result, Err(WebError::BadRequest(_))));
    }

    #[test]
    fn test_parse_new_score_reports_missing_fields() {
        let result = parse_new_score(Map::new());

        assert!(matches!(result, Err(WebError::Validation(_))));
    }

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
        assert!(matches!(parse_id("all-the-things"), Err(WebError::NotFound)));
    }
}
