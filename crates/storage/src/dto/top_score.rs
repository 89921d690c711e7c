use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// `{ "topScore": ... }` envelope used by single-record requests and responses.
///
/// A request without `topScore` deserializes to an empty payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopScoreBody<T> {
    #[serde(rename = "topScore", default)]
    pub top_score: T,
}

impl<T> TopScoreBody<T> {
    pub fn new(top_score: T) -> Self {
        Self { top_score }
    }
}

/// `{ "topScores": [...] }` envelope used by list responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopScoresBody<T> {
    #[serde(rename = "topScores")]
    pub top_scores: Vec<T>,
}

impl<T> TopScoresBody<T> {
    pub fn new(top_scores: Vec<T>) -> Self {
        Self { top_scores }
    }
}

/// Request payload for creating a new score
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateScoreRequest {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name must not be empty")
    )]
    pub name: Option<String>,

    #[validate(required(message = "Score is required"))]
    pub score: Option<f64>,
}

/// Request payload for a partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateScoreRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    pub score: Option<f64>,
}

/// A validated score ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewScore {
    pub name: String,
    pub score: f64,
}

/// Validated changes for an existing score; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreChanges {
    pub name: Option<String>,
    pub score: Option<f64>,
}

impl ScoreChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.score.is_none()
    }
}

impl TryFrom<CreateScoreRequest> for NewScore {
    type Error = ValidationErrors;

    fn try_from(request: CreateScoreRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        match (request.name, request.score) {
            (Some(name), Some(score)) => Ok(Self { name, score }),
            // validate() already rejects both of these
            _ => Err(ValidationErrors::new()),
        }
    }
}

impl TryFrom<UpdateScoreRequest> for ScoreChanges {
    type Error = ValidationErrors;

    fn try_from(request: UpdateScoreRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        Ok(Self {
            name: request.name,
            score: request.score,
        })
    }
}
