//! Content Management API client.

use super::api::ContentTypeApi;
use crate::config::ContentfulConfig;
use crate::error::{ApiError, ApiResult};
use crate::wire::{ContentTypePayload, RemoteContentType};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

const MANAGEMENT_MEDIA_TYPE: &str = "application/vnd.contentful.management.v1+json";
const VERSION_HEADER: &str = "X-Contentful-Version";
/// Added to the transport timeout so the synchronizer's per-call timeout
/// expires first.
const TRANSPORT_TIMEOUT_MARGIN: Duration = Duration::from_secs(1);

/// HTTP implementation of [`ContentTypeApi`].
pub struct ContentfulClient {
    config: ContentfulConfig,
    client: Client,
}

impl ContentfulClient {
    /// Creates a client for the configured space and environment whose
    /// requests give up shortly after `request_timeout`.
    pub fn new(config: ContentfulConfig, request_timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout + TRANSPORT_TIMEOUT_MARGIN)
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ContentfulConfig {
        &self.config
    }

    fn content_type_url(&self, id: &str) -> String {
        format!("{}/{}", self.config.content_types_url(), id)
    }

    fn published_url(&self, id: &str) -> String {
        format!("{}/published", self.content_type_url(id))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.config.access_token)
            .header(CONTENT_TYPE, MANAGEMENT_MEDIA_TYPE)
    }

    async fn send(&self, request: RequestBuilder, id: &str) -> ApiResult<RemoteContentType> {
        let response = self.authorized(request).send().await?;
        let response = check_status(response, id).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Maps a non-success response to the matching [`ApiError`].
async fn check_status(response: Response, id: &str) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after_secs = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok());
    let body = response.text().await.unwrap_or_default();
    debug!("content type {} request failed with {}: {}", id, status, body);

    Err(match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(id.to_string()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized(body),
        StatusCode::CONFLICT => ApiError::VersionConflict(body),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited { retry_after_secs },
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::Rejected {
            status: status.as_u16(),
            body,
        },
        _ => ApiError::Status {
            status: status.as_u16(),
            body,
        },
    })
}

#[async_trait]
impl ContentTypeApi for ContentfulClient {
    async fn get_content_type(&self, id: &str) -> ApiResult<RemoteContentType> {
        debug!("fetching content type {}", id);
        let request = self.client.get(self.content_type_url(id));
        self.send(request, id).await
    }

    async fn create_content_type_with_id(
        &self,
        id: &str,
        payload: &ContentTypePayload,
    ) -> ApiResult<RemoteContentType> {
        debug!("creating content type {}", id);
        let body = serde_json::to_vec(payload)?;
        let request = self.client.put(self.content_type_url(id)).body(body);
        self.send(request, id).await
    }

    async fn update_content_type(
        &self,
        current: &RemoteContentType,
        payload: &ContentTypePayload,
    ) -> ApiResult<RemoteContentType> {
        debug!(
            "updating content type {} at version {}",
            current.id(),
            current.version()
        );
        let body = serde_json::to_vec(payload)?;
        let request = self
            .client
            .put(self.content_type_url(current.id()))
            .header(VERSION_HEADER, current.version())
            .body(body);
        self.send(request, current.id()).await
    }

    async fn publish_content_type(
        &self,
        current: &RemoteContentType,
    ) -> ApiResult<RemoteContentType> {
        debug!(
            "publishing content type {} at version {}",
            current.id(),
            current.version()
        );
        let request = self
            .client
            .put(self.published_url(current.id()))
            .header(VERSION_HEADER, current.version());
        self.send(request, current.id()).await
    }

    async fn unpublish_content_type(
        &self,
        current: &RemoteContentType,
    ) -> ApiResult<RemoteContentType> {
        debug!(
            "unpublishing content type {} at version {}",
            current.id(),
            current.version()
        );
        let request = self
            .client
            .delete(self.published_url(current.id()))
            .header(VERSION_HEADER, current.version());
        self.send(request, current.id()).await
    }
}
