//! Error types for the sync layer.

use contentful_orm_model::SchemaError;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type for remote API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors returned by the remote content platform.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The content type does not exist. Selects the create path when
    /// returned by the initial fetch; fatal anywhere else.
    #[error("not found: {0}")]
    NotFound(String),

    /// Token missing, invalid or lacking access to the space.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The version sent with a mutation is no longer current.
    #[error("version conflict: {0}")]
    VersionConflict(String),

    #[error("rate limited: retry after {retry_after_secs:?}s")]
    RateLimited { retry_after_secs: Option<u64> },

    /// The platform rejected the payload (validation failure).
    #[error("rejected by platform ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

/// The remote step a reconciliation was performing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncStep {
    Fetch,
    Create,
    Unpublish,
    Refetch,
    Update,
    Publish,
}

impl SyncStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStep::Fetch => "fetch",
            SyncStep::Create => "create",
            SyncStep::Unpublish => "unpublish",
            SyncStep::Refetch => "re-fetch",
            SyncStep::Update => "update",
            SyncStep::Publish => "publish",
        }
    }
}

impl fmt::Display for SyncStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur in sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Connection parameters are absent. Lists the missing variable names.
    #[error("missing required environment variables: {}", .missing.join(", "))]
    MissingCredentials { missing: Vec<&'static str> },

    /// The entity has no content-type descriptor in the registry.
    #[error("no content type metadata found for {entity}")]
    NoMetadataFound { entity: String },

    /// The entity's metadata cannot be lowered to the wire shape.
    #[error("invalid schema for {entity} (content type '{content_type}'): {source}")]
    Schema {
        entity: String,
        content_type: String,
        #[source]
        source: SchemaError,
    },

    /// A remote call failed.
    #[error("{step} failed for {entity} (content type '{content_type}'): {source}")]
    Remote {
        entity: String,
        content_type: String,
        step: SyncStep,
        #[source]
        source: ApiError,
    },

    /// A remote call did not complete within the configured timeout.
    #[error("{step} timed out after {after:?} for {entity} (content type '{content_type}')")]
    Timeout {
        entity: String,
        content_type: String,
        step: SyncStep,
        after: Duration,
    },
}

impl SyncError {
    /// The entity the error belongs to, if it is entity-scoped.
    pub fn entity(&self) -> Option<&str> {
        match self {
            SyncError::MissingCredentials { .. } => None,
            SyncError::NoMetadataFound { entity }
            | SyncError::Schema { entity, .. }
            | SyncError::Remote { entity, .. }
            | SyncError::Timeout { entity, .. } => Some(entity),
        }
    }

    /// The remote step that failed, for remote and timeout errors.
    pub fn step(&self) -> Option<SyncStep> {
        match self {
            SyncError::Remote { step, .. } | SyncError::Timeout { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// Returns true when a field or array item uses a type outside the vocabulary.
    pub fn is_unmapped_field_type(&self) -> bool {
        matches!(self, SyncError::Schema { source, .. } if source.is_unmapped_type())
    }
}
