//! Reconciles registered content types with the remote space.
//!
//! Per entity:
//! - not found remotely: create with id, then publish
//! - found: unpublish if published, re-fetch, update, then publish
//!
//! Entities are processed one at a time. Each remote call runs under the
//! configured request timeout.

use crate::config::{BatchPolicy, SyncConfig};
use crate::error::{ApiResult, SyncError, SyncResult, SyncStep};
use crate::remote::ContentTypeApi;
use crate::transform::transform;
use crate::wire::{ContentTypePayload, RemoteContentType};
use contentful_orm_model::MetadataRegistry;
use std::future::Future;
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};

/// How an entity was reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The content type did not exist and was created.
    Created,
    /// The content type existed and was updated.
    Updated { was_published: bool },
}

/// Result of a batch run, in processing order.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub synced: Vec<(String, SyncOutcome)>,
    pub failed: Vec<(String, SyncError)>,
}

impl SyncReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Drives the reconciliation state machine against a [`ContentTypeApi`].
pub struct Synchronizer<A: ContentTypeApi> {
    api: A,
    registry: Arc<MetadataRegistry>,
    config: SyncConfig,
}

/// Entity and content type names attached to every error of one reconciliation.
struct Target<'a> {
    entity: &'a str,
    content_type: &'a str,
}

impl<A: ContentTypeApi> Synchronizer<A> {
    pub fn new(api: A, registry: Arc<MetadataRegistry>, config: SyncConfig) -> Self {
        Self {
            api,
            registry,
            config,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn registry(&self) -> &MetadataRegistry {
        &self.registry
    }

    /// Returns the payload `sync_entity` would send, without remote calls.
    pub fn preview(&self, entity: &str) -> SyncResult<ContentTypePayload> {
        transform(&self.registry, entity)
    }

    /// Reconciles one entity.
    ///
    /// Schema errors surface before the first remote call. Remote failures
    /// are not retried; the error names the step that failed.
    pub async fn sync_entity(&self, entity: &str) -> SyncResult<SyncOutcome> {
        let payload = transform(&self.registry, entity)?;
        let target = Target {
            entity,
            content_type: &payload.name,
        };

        let span = info_span!("sync", entity, content_type = %payload.name);
        self.reconcile(&target, &payload).instrument(span).await
    }

    async fn reconcile(
        &self,
        target: &Target<'_>,
        payload: &ContentTypePayload,
    ) -> SyncResult<SyncOutcome> {
        let id = target.content_type;

        match self
            .call(target, SyncStep::Fetch, self.api.get_content_type(id))
            .await
        {
            Ok(existing) => self.update_existing(target, payload, existing).await,
            Err(SyncError::Remote { source, .. }) if source.is_not_found() => {
                self.create_new(target, payload).await
            }
            Err(e) => Err(e),
        }
    }

    async fn create_new(
        &self,
        target: &Target<'_>,
        payload: &ContentTypePayload,
    ) -> SyncResult<SyncOutcome> {
        info!("content type {} not found, creating", target.content_type);
        let created = self
            .call(
                target,
                SyncStep::Create,
                self.api
                    .create_content_type_with_id(target.content_type, payload),
            )
            .await?;

        self.call(
            target,
            SyncStep::Publish,
            self.api.publish_content_type(&created),
        )
        .await?;

        info!("created and published content type {}", target.content_type);
        Ok(SyncOutcome::Created)
    }

    async fn update_existing(
        &self,
        target: &Target<'_>,
        payload: &ContentTypePayload,
        existing: RemoteContentType,
    ) -> SyncResult<SyncOutcome> {
        let was_published = existing.is_published();
        if was_published {
            debug!(
                "unpublishing {} at version {}",
                target.content_type,
                existing.version()
            );
            self.call(
                target,
                SyncStep::Unpublish,
                self.api.unpublish_content_type(&existing),
            )
            .await?;
        }

        // Unpublishing advances the version; always update against a fresh copy.
        let current = self
            .call(
                target,
                SyncStep::Refetch,
                self.api.get_content_type(target.content_type),
            )
            .await?;

        let updated = self
            .call(
                target,
                SyncStep::Update,
                self.api.update_content_type(&current, payload),
            )
            .await?;

        self.call(
            target,
            SyncStep::Publish,
            self.api.publish_content_type(&updated),
        )
        .await?;

        info!("updated and published content type {}", target.content_type);
        Ok(SyncOutcome::Updated { was_published })
    }

    /// Runs one remote call under the request timeout, tagging any failure.
    async fn call<T>(
        &self,
        target: &Target<'_>,
        step: SyncStep,
        fut: impl Future<Output = ApiResult<T>>,
    ) -> SyncResult<T> {
        let after = self.config.request_timeout;
        match tokio::time::timeout(after, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(source)) => Err(SyncError::Remote {
                entity: target.entity.to_string(),
                content_type: target.content_type.to_string(),
                step,
                source,
            }),
            Err(_) => Err(SyncError::Timeout {
                entity: target.entity.to_string(),
                content_type: target.content_type.to_string(),
                step,
                after,
            }),
        }
    }

    /// Reconciles entities sequentially in the given order.
    ///
    /// With [`BatchPolicy::FailFast`] the first failure is returned as the
    /// error and the remaining entities are not attempted.
    pub async fn sync_all<I, S>(&self, entities: I) -> SyncResult<SyncReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = SyncReport::default();

        for entity in entities {
            let entity = entity.as_ref();
            match self.sync_entity(entity).await {
                Ok(outcome) => report.synced.push((entity.to_string(), outcome)),
                Err(e) => match self.config.batch_policy {
                    BatchPolicy::FailFast => return Err(e),
                    BatchPolicy::ContinueOnError => {
                        warn!("failed to sync {}: {}", entity, e);
                        report.failed.push((entity.to_string(), e));
                    }
                },
            }
        }

        info!(
            "sync finished: {} synced, {} failed",
            report.synced.len(),
            report.failed.len()
        );
        Ok(report)
    }

    /// Reconciles every registered entity that has a content type descriptor.
    pub async fn sync_registry(&self) -> SyncResult<SyncReport> {
        let entities: Vec<String> = self
            .registry
            .sync_candidates()
            .map(str::to_string)
            .collect();
        self.sync_all(entities).await
    }
}
