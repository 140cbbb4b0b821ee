//! Content type operations the synchronizer needs from the platform.

use crate::error::ApiResult;
use crate::wire::{ContentTypePayload, RemoteContentType};
use async_trait::async_trait;

/// Abstract content type management interface.
///
/// Mutations of an existing type take the current remote value so the
/// implementation can send its version; the returned value carries the
/// version after the mutation.
#[async_trait]
pub trait ContentTypeApi: Send + Sync {
    /// Fetches a content type by id. Returns [`ApiError::NotFound`] when it
    /// does not exist.
    ///
    /// [`ApiError::NotFound`]: crate::error::ApiError::NotFound
    async fn get_content_type(&self, id: &str) -> ApiResult<RemoteContentType>;

    /// Creates a content type under a caller-chosen id.
    async fn create_content_type_with_id(
        &self,
        id: &str,
        payload: &ContentTypePayload,
    ) -> ApiResult<RemoteContentType>;

    /// Replaces the definition of an existing content type.
    async fn update_content_type(
        &self,
        current: &RemoteContentType,
        payload: &ContentTypePayload,
    ) -> ApiResult<RemoteContentType>;

    async fn publish_content_type(&self, current: &RemoteContentType)
    -> ApiResult<RemoteContentType>;

    async fn unpublish_content_type(
        &self,
        current: &RemoteContentType,
    ) -> ApiResult<RemoteContentType>;
}
