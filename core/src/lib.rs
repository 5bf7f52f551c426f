//! Client core for a remotely stored television catalog.
//!
//! # Overview
//! Maps four logical operations (list, create, update, delete) for a
//! television collection onto HTTP calls against a fixed base endpoint, and
//! normalizes the store's loosely specified responses into a consistent typed
//! result or error. All catalog state lives in the remote store; the client
//! is stateless between calls.
//!
//! # Design
//! - `TelevisionClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern), which keeps
//!   the normalization policy deterministic and testable.
//! - `RemoteStore` layers a blocking ureq transport on top for callers that
//!   want the one-call surface.
//! - The store's known inconsistencies — empty or non-JSON bodies on PUT,
//!   varying delete success statuses — are absorbed by an explicit, ordered
//!   normalization policy in `client` rather than surfaced to callers.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod agent;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use agent::RemoteStore;
pub use client::TelevisionClient;
pub use error::{ApiError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Television, TelevisionDraft};
