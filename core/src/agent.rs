//! Blocking executor joining the build/parse halves over a real transport.
//!
//! # Design
//! `RemoteStore` owns a `ureq::Agent` with automatic status-code-as-error
//! behavior disabled, so 4xx/5xx responses come back as data and status
//! interpretation stays in `TelevisionClient`. Each operation performs
//! exactly one round trip; there are no retries, no caching and no
//! cancellation, and timeouts are whatever the transport defaults to.
//! Concurrent calls are independent — callers wanting to avoid duplicate
//! in-flight submissions must gate them on their side.

use crate::client::TelevisionClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Television, TelevisionDraft};

/// One-call CRUD surface for the television collection.
pub struct RemoteStore {
    client: TelevisionClient,
    agent: ureq::Agent,
}

impl RemoteStore {
    pub fn new(client: TelevisionClient) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { client, agent }
    }

    pub fn list(&self) -> Result<Vec<Television>, ApiError> {
        let req = self.client.build_list();
        self.client.parse_list(self.execute(req)?)
    }

    pub fn create(&self, draft: &TelevisionDraft) -> Result<Television, ApiError> {
        let req = self.client.build_create(draft)?;
        self.client.parse_create(self.execute(req)?)
    }

    pub fn update(&self, id: &str, draft: &TelevisionDraft) -> Result<Television, ApiError> {
        let req = self.client.build_update(id, draft)?;
        self.client.parse_update(id, draft, self.execute(req)?)
    }

    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        let req = self.client.build_delete(id);
        self.client.parse_delete(self.execute(req)?)
    }

    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };
        let mut response = result.map_err(transport_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        // Best effort: an unreadable body degrades to an empty one rather
        // than failing a response we already have a status for.
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Connectivity failures get an explicit message; everything else keeps the
/// transport's own wording.
fn transport_error(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Io(io) => {
            ApiError::Transport(format!("cannot reach the catalog store: {io}"))
        }
        other => ApiError::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_store_reports_transport_failure() {
        // Port 1 on localhost refuses connections.
        let store = RemoteStore::new(TelevisionClient::new("http://127.0.0.1:1"));
        let err = store.list().unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "{err}");
    }
}
