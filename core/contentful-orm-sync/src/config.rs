//! Connection and run configuration.

use crate::error::{SyncError, SyncResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const SPACE_ID_VAR: &str = "CONTENTFUL_SPACE_ID";
pub const ACCESS_TOKEN_VAR: &str = "CONTENTFUL_ACCESS_TOKEN";
pub const ENVIRONMENT_VAR: &str = "CONTENTFUL_ENVIRONMENT";

pub const DEFAULT_ENVIRONMENT: &str = "master";
pub const DEFAULT_API_BASE_URL: &str = "https://api.contentful.com";

/// Content Management API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentfulConfig {
    pub space_id: String,
    pub access_token: String,
    /// Environment within the space (e.g. `master`).
    pub environment_id: String,
    /// Base URL for the Content Management API.
    pub api_base_url: String,
}

impl Default for ContentfulConfig {
    fn default() -> Self {
        Self {
            space_id: String::new(),
            access_token: String::new(),
            environment_id: DEFAULT_ENVIRONMENT.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ContentfulConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            space_id: credentials.space_id,
            access_token: credentials.access_token,
            ..Self::default()
        }
    }

    pub fn with_environment(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = environment_id.into();
        self
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// URL of the environment's content type collection.
    pub(crate) fn content_types_url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}/content_types",
            self.api_base_url.trim_end_matches('/'),
            self.space_id,
            self.environment_id
        )
    }
}

/// What a batch does after an entity fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// Stop at the first failed entity.
    #[default]
    FailFast,
    /// Record the failure and move on to the next entity.
    ContinueOnError,
}

/// Synchronizer settings.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Deadline for each individual remote call.
    pub request_timeout: Duration,
    pub batch_policy: BatchPolicy,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            batch_policy: BatchPolicy::FailFast,
        }
    }
}

impl SyncConfig {
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn with_batch_policy(mut self, batch_policy: BatchPolicy) -> Self {
        self.batch_policy = batch_policy;
        self
    }
}

/// Space id and access token, both present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub space_id: String,
    pub access_token: String,
}

impl Credentials {
    /// Validates raw values from flags or the environment.
    ///
    /// Blank values count as missing. Every missing variable is reported,
    /// space id first.
    pub fn resolve(space_id: Option<String>, access_token: Option<String>) -> SyncResult<Self> {
        let space_id = space_id.filter(|v| !v.trim().is_empty());
        let access_token = access_token.filter(|v| !v.trim().is_empty());

        match (space_id, access_token) {
            (Some(space_id), Some(access_token)) => Ok(Self {
                space_id,
                access_token,
            }),
            (space_id, access_token) => {
                let mut missing = Vec::new();
                if space_id.is_none() {
                    missing.push(SPACE_ID_VAR);
                }
                if access_token.is_none() {
                    missing.push(ACCESS_TOKEN_VAR);
                }
                Err(SyncError::MissingCredentials { missing })
            }
        }
    }
}
