use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use std::convert::Infallible;
use storage::models::ScoreRecord;

use crate::error::WebError;

/// Identity of the caller as presented in `Authorization: Bearer <token>`.
///
/// The token is treated as an opaque identity and is not verified here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requester(pub Option<String>);

impl Requester {
    pub fn id(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Requester
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from);

        Ok(Self(token))
    }
}

/// Resources that may belong to a single caller
pub trait Owned {
    fn owner(&self) -> Option<&str>;
}

/// Score records carry no owner, so anyone may modify them
impl Owned for ScoreRecord {
    fn owner(&self) -> Option<&str> {
        None
    }
}

/// Fails with `OwnershipViolation` when the resource has an owner other than the requester
pub fn require_ownership(requester: &Requester, resource: &impl Owned) -> Result<(), WebError> {
    match resource.owner() {
        None => Ok(()),
        Some(owner) if requester.id() == Some(owner) => Ok(()),
        Some(_) => Err(WebError::OwnershipViolation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use chrono::Utc;
    use uuid::Uuid;

    struct OwnedThing(&'static str);

    impl Owned for OwnedThing {
        fn owner(&self) -> Option<&str> {
            Some(self.0)
        }
    }

    fn requester(id: &str) -> Requester {
        Requester(Some(id.to_string()))
    }

    #[test]
    fn test_unowned_score_passes_for_anyone() {
        let now = Utc::now();
        let record = ScoreRecord {
            id: Uuid::new_v4(),
            name: "ada".to_string(),
            score: 1.0,
            created_at: now,
            updated_at: now,
        };

        assert!(require_ownership(&Requester::default(), &record).is_ok());
        assert!(require_ownership(&requester("someone"), &record).is_ok());
    }

    #[test]
    fn test_owner_passes() {
        assert!(require_ownership(&requester("alice"), &OwnedThing("alice")).is_ok());
    }

    #[test]
    fn test_other_caller_is_rejected() {
        let result = require_ownership(&requester("bob"), &OwnedThing("alice"));
        assert!(matches!(result, Err(WebError::OwnershipViolation)));

        let result = require_ownership(&Requester::default(), &OwnedThing("alice"));
        assert!(matches!(result, Err(WebError::OwnershipViolation)));
    }

    #[tokio::test]
    async fn test_extracts_bearer_token() {
        let (mut parts, _) = Request::builder()
            .header(AUTHORIZATION, "Bearer abc123")
            .body(())
            .unwrap()
            .into_parts();

        let requester = Requester::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(requester.id(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_missing_header_is_anonymous() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

        let requester = Requester::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(requester, Requester::default());
    }
}
