//! Domain DTOs for the television catalog.
//!
//! # Design
//! These types mirror the remote store's JSON schema but are defined
//! independently from the mock-server crate; integration tests catch schema
//! drift. The store names its fields `_id` and `channelCount`, so both
//! records and drafts carry explicit serde renames.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A television record as persisted by the remote store.
///
/// The store assigns `id` on creation; every persisted record carries a
/// non-empty one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Television {
    #[serde(rename = "_id")]
    pub id: String,
    pub brand: String,
    pub model: String,
    #[serde(rename = "channelCount")]
    pub channel_count: u32,
}

/// Field values for a television without the store-assigned id.
///
/// Used as the request payload for both create and update. Update sends a
/// full replacement, so no field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelevisionDraft {
    pub brand: String,
    pub model: String,
    #[serde(rename = "channelCount")]
    pub channel_count: u32,
}

impl TelevisionDraft {
    /// Form-boundary checks: brand and model must be non-blank, channel
    /// count must be positive. Client operations do not re-validate; callers
    /// run this before submitting.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.brand.trim().is_empty() {
            return Err(ValidationError::EmptyBrand);
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        if self.channel_count == 0 {
            return Err(ValidationError::NonPositiveChannelCount);
        }
        Ok(())
    }

    /// Merge the draft with a store-assigned id into a full record.
    pub fn with_id(self, id: impl Into<String>) -> Television {
        Television {
            id: id.into(),
            brand: self.brand,
            model: self.model,
            channel_count: self.channel_count,
        }
    }
}
