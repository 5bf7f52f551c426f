//! Error types for the television catalog client.
//!
//! # Design
//! `RemoteStatus` covers every non-success HTTP response; the body is carried
//! only when the operation reads it (delete), as `Option` so callers can tell
//! "no body" from "empty body". Transport failures are reported by the
//! executor, not by parse methods. There is no variant for a malformed body
//! on a successful update — the normalization policy in `client` swallows
//! that case by construction.

use std::fmt;

/// Errors returned by `TelevisionClient` and `RemoteStore` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The store answered with a status outside the operation's accepted set.
    RemoteStatus {
        status: u16,
        status_text: String,
        body: Option<String>,
    },

    /// Network-level failure (DNS, refused connection, timeout) from the
    /// underlying transport.
    Transport(String),

    /// A success-status body could not be deserialized where the contract
    /// requires one (create only).
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RemoteStatus {
                status,
                status_text,
                body: Some(body),
            } => write!(f, "remote request failed: {status} {status_text}: {body}"),
            ApiError::RemoteStatus {
                status,
                status_text,
                body: None,
            } => write!(f, "remote request failed: {status} {status_text}"),
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Rejections from the pre-submission checks on `TelevisionDraft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyBrand,
    EmptyModel,
    NonPositiveChannelCount,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyBrand => write!(f, "brand must not be empty"),
            ValidationError::EmptyModel => write!(f, "model must not be empty"),
            ValidationError::NonPositiveChannelCount => {
                write!(f, "channel count must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
