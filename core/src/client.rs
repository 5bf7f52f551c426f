//! Stateless HTTP request builder and response parser for the television
//! catalog collection.
//!
//! # Design
//! `TelevisionClient` holds only configuration and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; the executor runs the round trip in between. Every
//! operation is a single request with no retries and no caching.
//!
//! The remote store is loosely specified, so the parse methods normalize its
//! inconsistencies rather than surfacing them:
//!
//! - list: a success body that is not a JSON array of records is an empty
//!   catalog, never an error;
//! - update: an empty body on a success status confirms the write, and a
//!   malformed body on a success status is treated the same way — both
//!   synthesize the result from the submitted fields plus the id;
//! - delete: 200, 202 and 204 are all accepted (the store is not consistent
//!   about which it returns), and the accepted set is configurable so it can
//!   be confirmed against the store actually in use.

use crate::error::ApiError;
use crate::http::{reason_phrase, HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Television, TelevisionDraft};

const DEFAULT_COLLECTION: &str = "televisions";
const DEFAULT_DELETE_SUCCESS: &[u16] = &[200, 202, 204];

/// Stateless client for one television collection endpoint.
///
/// The base URL is injected at construction so tests can point it at a mock
/// store instead of the live one.
#[derive(Debug, Clone)]
pub struct TelevisionClient {
    base_url: String,
    collection: String,
    delete_success: Vec<u16>,
}

impl TelevisionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            delete_success: DEFAULT_DELETE_SUCCESS.to_vec(),
        }
    }

    /// Override the collection path segment.
    pub fn with_collection(mut self, collection: &str) -> Self {
        self.collection = collection.trim_matches('/').to_string();
        self
    }

    /// Override the statuses accepted as a successful delete.
    pub fn with_delete_success_statuses(mut self, statuses: &[u16]) -> Self {
        self.delete_success = statuses.to_vec();
        self
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}/{id}", self.base_url, self.collection)
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, draft: &TelevisionDraft) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(draft).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update(&self, id: &str, draft: &TelevisionDraft) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(draft).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Order is whatever the store returned; not guaranteed stable across
    /// calls. A body that does not parse as an array of records yields an
    /// empty catalog.
    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Television>, ApiError> {
        if !response.is_success() {
            return Err(status_error(&response, None));
        }
        Ok(serde_json::from_str(&response.body).unwrap_or_default())
    }

    /// The created record, including the store-assigned id.
    pub fn parse_create(&self, response: HttpResponse) -> Result<Television, ApiError> {
        if !response.is_success() {
            return Err(status_error(&response, None));
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Normalization policy for update replies, applied in order:
    ///
    /// 1. non-success status → `RemoteStatus`;
    /// 2. declared zero content length, or empty/whitespace body →
    ///    synthesize the result from `id` and the submitted `draft`;
    /// 3. otherwise parse the body as the updated record, falling back to
    ///    the same synthesized merge if it does not parse.
    ///
    /// A malformed body on a success status is never an error here.
    pub fn parse_update(
        &self,
        id: &str,
        draft: &TelevisionDraft,
        response: HttpResponse,
    ) -> Result<Television, ApiError> {
        if !response.is_success() {
            return Err(status_error(&response, None));
        }
        let body_absent =
            response.header("content-length") == Some("0") || response.body.trim().is_empty();
        if body_absent {
            return Ok(draft.clone().with_id(id));
        }
        match serde_json::from_str(&response.body) {
            Ok(updated) => Ok(updated),
            Err(_) => Ok(draft.clone().with_id(id)),
        }
    }

    /// Accepts any status in the configured success set; anything else fails
    /// with the response body text when the store sent one.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        if self.delete_success.contains(&response.status) {
            return Ok(());
        }
        let body = Some(response.body.trim())
            .filter(|b| !b.is_empty())
            .map(str::to_string);
        Err(status_error(&response, body))
    }
}

fn status_error(response: &HttpResponse, body: Option<String>) -> ApiError {
    ApiError::RemoteStatus {
        status: response.status,
        status_text: reason_phrase(response.status).to_string(),
        body,
    }
}
