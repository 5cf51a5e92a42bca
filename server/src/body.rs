//! Request body extraction for submitted animals.

use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde_json::{Map, Value};
use tracing::warn;

use crate::ApiError;

/// A submitted candidate as raw JSON, before validation.
///
/// URL-encoded form bodies are accepted alongside JSON. Form keys that
/// repeat or end in `[]` become arrays, so `personalityTraits[]=a` yields
/// `["a"]`. Anything that is neither parses to nothing and is rejected.
pub struct CandidateBody(pub Value);

impl<S> FromRequest<S> for CandidateBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| {
                    warn!("Rejected animal form: {}", e);
                    ApiError::InvalidAnimal
                })?;
            return Ok(Self(form_to_value(pairs)));
        }

        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| {
                warn!("Rejected animal body: {}", e);
                ApiError::InvalidAnimal
            })?;
        Ok(Self(value))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

/// Fold URL-encoded pairs into a JSON object.
pub(crate) fn form_to_value(pairs: Vec<(String, String)>) -> Value {
    let mut object = Map::new();
    for (key, value) in pairs {
        let (key, bracketed) = match key.strip_suffix("[]") {
            Some(stripped) => (stripped.to_string(), true),
            None => (key, false),
        };
        let value = Value::String(value);
        match object.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None if bracketed => {
                object.insert(key, Value::Array(vec![value]));
            }
            None => {
                object.insert(key, value);
            }
        }
    }
    Value::Object(object)
}
