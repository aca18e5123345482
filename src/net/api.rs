//! Authenticated REST client for the catalog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning errors so pages and tests compile
//! without a browser.
//!
//! ERROR HANDLING
//! ==============
//! `request` is the single choke point: it injects the bearer token,
//! defaults the content type, and on a 401 tears the session down as a
//! side effect before raising. Callers still receive the error and
//! decide whether it is inline-surfaced, alerted, or swallowed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::RwSignal;
use thiserror::Error;

use super::types::{
    Artifact, ArtifactCreate, ArtifactField, Contact, ContactCreate, FieldCreate, JoinRequest,
    Team, TeamCreate,
};
use crate::state::session::SessionState;
use crate::state::team_view::RequestAction;

#[cfg(any(test, feature = "hydrate"))]
use super::types::AuthResponse;
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

/// Fixed, versioned base path of the backend REST contract.
pub const API_ROOT: &str = "/api/v1";

/// Failure raised by [`request`] and the typed wrappers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure before any HTTP status was available.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status, carrying the response body text (or the
    /// status text when the body was empty).
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for the globally intercepted auth failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

/// Decoded response body: JSON when the server says so, raw text otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiBody {
    Json(serde_json::Value),
    Text(String),
}

/// HTTP methods used by the backend contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// One request to the backend, path relative to [`API_ROOT`].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Caller-supplied headers; merged with the injected defaults.
    pub headers: Vec<(String, String)>,
    /// Pre-serialized body, if any.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), headers: Vec::new(), body: None }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self { method: Method::Post, path: path.into(), headers: Vec::new(), body: None }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), headers: Vec::new(), body: None }
    }

    /// Attach a JSON body. The content-type header is left unset so the
    /// merge step applies the JSON default (and an explicit caller
    /// header still wins).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the payload fails to serialize.
    pub fn json(mut self, payload: &impl serde::Serialize) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?);
        Ok(self)
    }
}

/// Merge caller headers with the injected defaults.
///
/// The bearer token is added when present and the caller did not set an
/// auth header of their own; a JSON content type is added when a body is
/// present and none was set. Header-name matches are case-insensitive.
#[cfg(any(test, feature = "hydrate"))]
fn merged_headers(
    token: Option<&str>,
    supplied: &[(String, String)],
    has_body: bool,
) -> Vec<(String, String)> {
    let has_header = |name: &str| supplied.iter().any(|(n, _)| n.eq_ignore_ascii_case(name));

    let mut headers: Vec<(String, String)> = supplied.to_vec();
    if let Some(token) = token {
        if !has_header("authorization") {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
    }
    if has_body && !has_header("content-type") {
        headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
    }
    headers
}

/// Decode a response body according to its content type.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when a JSON-typed body fails to parse.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body(content_type: Option<&str>, text: String) -> Result<ApiBody, ApiError> {
    if content_type.is_some_and(|ct| ct.contains("application/json")) {
        let value = serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        return Ok(ApiBody::Json(value));
    }
    Ok(ApiBody::Text(text))
}

/// Error text for a failed response: body text, or status text if empty.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(body_text: &str, status_text: &str) -> String {
    if body_text.is_empty() {
        status_text.to_owned()
    } else {
        body_text.to_owned()
    }
}

/// Human-facing form of an error message: the `error` field of a JSON
/// `{error: string}` body when present, the raw text otherwise.
pub fn display_error(raw: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) {
        if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
            return message.to_owned();
        }
    }
    raw.to_owned()
}

/// Decode a JSON body into a typed value.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] for text bodies or mismatched shapes.
#[cfg(any(test, feature = "hydrate"))]
fn decode_json<T: DeserializeOwned>(body: ApiBody) -> Result<T, ApiError> {
    match body {
        ApiBody::Json(value) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
        ApiBody::Text(_) => Err(ApiError::Decode("expected JSON body".to_owned())),
    }
}

/// Decode a list reply. Anything that is not a JSON array yields an
/// empty list, which the views render as the single placeholder row.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when array elements fail to decode.
#[cfg(any(test, feature = "hydrate"))]
fn list_from_body<T: DeserializeOwned>(body: ApiBody) -> Result<Vec<T>, ApiError> {
    match body {
        ApiBody::Json(value) if value.is_array() => {
            serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
        }
        _ => Ok(Vec::new()),
    }
}

// Path formatters for the team-scoped endpoints.

#[cfg(any(test, feature = "hydrate"))]
fn search_teams_path(encoded_term: &str) -> String {
    format!("/teams?search={encoded_term}")
}

#[cfg(any(test, feature = "hydrate"))]
fn join_team_path(team_id: i64) -> String {
    format!("/teams/{team_id}/join")
}

#[cfg(any(test, feature = "hydrate"))]
fn team_artifacts_path(team_id: i64) -> String {
    format!("/teams/{team_id}/artifacts")
}

#[cfg(any(test, feature = "hydrate"))]
fn artifact_path(team_id: i64, artifact_id: i64) -> String {
    format!("/teams/{team_id}/artifacts/{artifact_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn artifact_fields_path(team_id: i64, artifact_id: i64) -> String {
    format!("/teams/{team_id}/artifacts/{artifact_id}/fields")
}

#[cfg(any(test, feature = "hydrate"))]
fn team_contacts_path(team_id: i64) -> String {
    format!("/teams/{team_id}/contacts")
}

#[cfg(any(test, feature = "hydrate"))]
fn contact_path(team_id: i64, contact_id: i64) -> String {
    format!("/teams/{team_id}/contacts/{contact_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn team_requests_path(team_id: i64) -> String {
    format!("/teams/{team_id}/requests")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_decision_path(team_id: i64, request_id: i64, action: RequestAction) -> String {
    format!("/teams/{team_id}/requests/{request_id}/{}", action.as_str())
}

/// Issue one request against the backend.
///
/// Injects the bearer token and JSON content-type defaults, then
/// decodes the reply per its content type. On any 401 the session is
/// logged out as a side effect (the unauth redirect then shows the
/// login view); the error is still raised to the caller.
///
/// # Errors
///
/// [`ApiError::Network`] on transport failure, [`ApiError::Status`] on
/// a non-success HTTP status, [`ApiError::Decode`] on a malformed body.
pub async fn request(session: RwSignal<SessionState>, req: ApiRequest) -> Result<ApiBody, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::{GetUntracked, Update};

        let token = session.get_untracked().token().map(ToOwned::to_owned);
        let headers = merged_headers(token.as_deref(), &req.headers, req.body.is_some());
        let url = format!("{API_ROOT}{}", req.path);

        let mut builder = match req.method {
            Method::Get => gloo_net::http::Request::get(&url),
            Method::Post => gloo_net::http::Request::post(&url),
            Method::Delete => gloo_net::http::Request::delete(&url),
        };
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }

        let sent = match req.body {
            Some(body) => {
                builder
                    .body(body)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            if response.status() == 401 {
                // Token missing or invalid: tear the session down here so
                // every caller inherits the forced logout.
                session.update(|s| s.logout());
            }
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: response.status(),
                message: error_message(&text, &response.status_text()),
            });
        }

        let content_type = response.headers().get("content-type");
        let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(content_type.as_deref(), text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, req);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `POST /auth/login`: returns the issued token.
///
/// # Errors
///
/// Propagates [`request`] failures; 401 means bad credentials here.
pub async fn login(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let body = request(session, ApiRequest::post("/auth/login").json(&payload)?).await?;
        Ok(decode_json::<AuthResponse>(body)?.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, email, password);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `POST /auth/register`: returns the issued token.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn register(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
    name: &str,
) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password, "name": name });
        let body = request(session, ApiRequest::post("/auth/register").json(&payload)?).await?;
        Ok(decode_json::<AuthResponse>(body)?.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, email, password, name);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `GET /me/teams`: teams the current user belongs to.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn my_teams(session: RwSignal<SessionState>) -> Result<Vec<Team>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        list_from_body(request(session, ApiRequest::get("/me/teams")).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `GET /teams?search=<q>`: free-text team search.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn search_teams(session: RwSignal<SessionState>, term: &str) -> Result<Vec<Team>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let encoded = js_sys::encode_uri_component(term);
        let path = search_teams_path(&String::from(encoded));
        list_from_body(request(session, ApiRequest::get(path)).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, term);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `POST /teams`: create a team, returning the backend's record.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn create_team(session: RwSignal<SessionState>, payload: &TeamCreate) -> Result<Team, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        decode_json(request(session, ApiRequest::post("/teams").json(payload)?).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, payload);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `POST /teams/{id}/join`: file a membership request.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn join_team(session: RwSignal<SessionState>, team_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request(session, ApiRequest::post(join_team_path(team_id))).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, team_id);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `GET /teams/{id}/artifacts`.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn team_artifacts(session: RwSignal<SessionState>, team_id: i64) -> Result<Vec<Artifact>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        list_from_body(request(session, ApiRequest::get(team_artifacts_path(team_id))).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, team_id);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `POST /teams/{id}/artifacts`.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn create_artifact(
    session: RwSignal<SessionState>,
    team_id: i64,
    payload: &ArtifactCreate,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request(session, ApiRequest::post(team_artifacts_path(team_id)).json(payload)?).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, team_id, payload);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `DELETE /teams/{id}/artifacts/{artifactId}`.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn delete_artifact(
    session: RwSignal<SessionState>,
    team_id: i64,
    artifact_id: i64,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request(session, ApiRequest::delete(artifact_path(team_id, artifact_id))).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, team_id, artifact_id);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `GET /teams/{id}/artifacts/{artifactId}/fields`.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn artifact_fields(
    session: RwSignal<SessionState>,
    team_id: i64,
    artifact_id: i64,
) -> Result<Vec<ArtifactField>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        list_from_body(request(session, ApiRequest::get(artifact_fields_path(team_id, artifact_id))).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, team_id, artifact_id);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `POST /teams/{id}/artifacts/{artifactId}/fields`.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn create_field(
    session: RwSignal<SessionState>,
    team_id: i64,
    artifact_id: i64,
    payload: &FieldCreate,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request(
            session,
            ApiRequest::post(artifact_fields_path(team_id, artifact_id)).json(payload)?,
        )
        .await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, team_id, artifact_id, payload);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `GET /teams/{id}/contacts`.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn team_contacts(session: RwSignal<SessionState>, team_id: i64) -> Result<Vec<Contact>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        list_from_body(request(session, ApiRequest::get(team_contacts_path(team_id))).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, team_id);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `POST /teams/{id}/contacts`.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn create_contact(
    session: RwSignal<SessionState>,
    team_id: i64,
    payload: &ContactCreate,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request(session, ApiRequest::post(team_contacts_path(team_id)).json(payload)?).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, team_id, payload);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `DELETE /teams/{id}/contacts/{contactId}`.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn delete_contact(
    session: RwSignal<SessionState>,
    team_id: i64,
    contact_id: i64,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request(session, ApiRequest::delete(contact_path(team_id, contact_id))).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, team_id, contact_id);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `GET /teams/{id}/requests`: may fail with a forbidden-style error
/// for non-privileged roles; callers hide the tab on any failure.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn team_requests(session: RwSignal<SessionState>, team_id: i64) -> Result<Vec<JoinRequest>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        list_from_body(request(session, ApiRequest::get(team_requests_path(team_id))).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, team_id);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `POST /teams/{id}/requests/{id}/{approve|reject}`.
///
/// # Errors
///
/// Propagates [`request`] failures.
pub async fn decide_request(
    session: RwSignal<SessionState>,
    team_id: i64,
    request_id: i64,
    action: RequestAction,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request(session, ApiRequest::post(request_decision_path(team_id, request_id, action))).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, team_id, request_id, action);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}
