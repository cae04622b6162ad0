//! Request body extraction for URL submissions.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;

/// A validated [`ShortenRequest`] taken from either a JSON or a
/// `application/x-www-form-urlencoded` body.
///
/// The body format is picked from `Content-Type`; anything that is not JSON is
/// decoded as a form. Undecodable bodies are rejected as invalid URLs.
#[derive(Debug)]
pub struct UrlSubmission(pub ShortenRequest);

impl<S> FromRequest<S> for UrlSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let payload = if is_json {
            let Json(payload) = Json::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|e| malformed_body(e.body_text()))?;
            payload
        } else {
            let Form(payload) = Form::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|e| malformed_body(e.body_text()))?;
            payload
        };

        payload.validate()?;

        Ok(Self(payload))
    }
}

fn malformed_body(reason: String) -> AppError {
    AppError::bad_request("Malformed request body", json!({ "reason": reason }))
}
