//! Shared test helpers for sync tests.

#![allow(dead_code)]

use async_trait::async_trait;
use contentful_orm_model::{ContentTypeDescriptor, FieldDescriptor, MetadataRegistry, Validation};
use contentful_orm_sync::{
    ApiError, ApiResult, ContentTypeApi, ContentTypePayload, RemoteContentType, RemoteSys,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Get,
    Create,
    Update,
    Publish,
    Unpublish,
}

/// In-memory content type store that records every call made against it.
#[derive(Default)]
pub struct RecordingApi {
    remote: Mutex<HashMap<String, RemoteContentType>>,
    calls: Mutex<Vec<(Call, String)>>,
    payloads: Mutex<Vec<ContentTypePayload>>,
    fail_on: Option<(Call, String)>,
    delay_on: Option<(Call, Duration)>,
    vanish_after_unpublish: bool,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an existing content type at version 3.
    pub fn with_existing(self, id: &str, published: bool) -> Self {
        let remote = RemoteContentType {
            sys: RemoteSys {
                id: id.to_string(),
                version: 3,
                published_version: published.then_some(2),
            },
            name: id.to_string(),
            display_field: None,
            description: None,
            fields: Vec::new(),
        };
        self.remote.lock().unwrap().insert(id.to_string(), remote);
        self
    }

    /// Makes `call` fail with a platform rejection for content type `id`.
    pub fn failing_on(mut self, call: Call, id: &str) -> Self {
        self.fail_on = Some((call, id.to_string()));
        self
    }

    /// Makes every `call` sleep for `delay` before answering.
    pub fn delayed_on(mut self, call: Call, delay: Duration) -> Self {
        self.delay_on = Some((call, delay));
        self
    }

    /// Simulates an external deletion racing with the update path.
    pub fn vanishing_after_unpublish(mut self) -> Self {
        self.vanish_after_unpublish = true;
        self
    }

    pub fn calls(&self) -> Vec<(Call, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_kinds(&self) -> Vec<Call> {
        self.calls().into_iter().map(|(call, _)| call).collect()
    }

    pub fn payloads(&self) -> Vec<ContentTypePayload> {
        self.payloads.lock().unwrap().clone()
    }

    pub fn remote(&self, id: &str) -> Option<RemoteContentType> {
        self.remote.lock().unwrap().get(id).cloned()
    }

    async fn enter(&self, call: Call, id: &str) -> ApiResult<()> {
        self.calls.lock().unwrap().push((call, id.to_string()));

        if let Some((delayed, delay)) = self.delay_on {
            if delayed == call {
                tokio::time::sleep(delay).await;
            }
        }

        match &self.fail_on {
            Some((failing, failing_id)) if *failing == call && failing_id == id => {
                Err(ApiError::Rejected {
                    status: 422,
                    body: format!("{call:?} rejected for {id}"),
                })
            }
            _ => Ok(()),
        }
    }

    /// Applies a versioned mutation to a stored content type.
    fn mutate(
        &self,
        current: &RemoteContentType,
        apply: impl FnOnce(&mut RemoteContentType),
    ) -> ApiResult<RemoteContentType> {
        let mut remote = self.remote.lock().unwrap();
        let stored = remote
            .get_mut(current.id())
            .ok_or_else(|| ApiError::NotFound(current.id().to_string()))?;
        if stored.sys.version != current.sys.version {
            return Err(ApiError::VersionConflict(format!(
                "expected version {}, got {}",
                stored.sys.version, current.sys.version
            )));
        }
        apply(stored);
        stored.sys.version += 1;
        Ok(stored.clone())
    }
}

#[async_trait]
impl ContentTypeApi for RecordingApi {
    async fn get_content_type(&self, id: &str) -> ApiResult<RemoteContentType> {
        self.enter(Call::Get, id).await?;
        self.remote
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn create_content_type_with_id(
        &self,
        id: &str,
        payload: &ContentTypePayload,
    ) -> ApiResult<RemoteContentType> {
        self.enter(Call::Create, id).await?;
        self.payloads.lock().unwrap().push(payload.clone());
        let created = RemoteContentType {
            sys: RemoteSys {
                id: id.to_string(),
                version: 1,
                published_version: None,
            },
            name: payload.name.clone(),
            display_field: Some(payload.display_field.clone()),
            description: payload.description.clone(),
            fields: raw_fields(payload),
        };
        self.remote
            .lock()
            .unwrap()
            .insert(id.to_string(), created.clone());
        Ok(created)
    }

    async fn update_content_type(
        &self,
        current: &RemoteContentType,
        payload: &ContentTypePayload,
    ) -> ApiResult<RemoteContentType> {
        self.enter(Call::Update, current.id()).await?;
        self.payloads.lock().unwrap().push(payload.clone());
        self.mutate(current, |stored| {
            stored.name = payload.name.clone();
            stored.display_field = Some(payload.display_field.clone());
            stored.description = payload.description.clone();
            stored.fields = raw_fields(payload);
        })
    }

    async fn publish_content_type(
        &self,
        current: &RemoteContentType,
    ) -> ApiResult<RemoteContentType> {
        self.enter(Call::Publish, current.id()).await?;
        self.mutate(current, |stored| {
            stored.sys.published_version = Some(stored.sys.version);
        })
    }

    async fn unpublish_content_type(
        &self,
        current: &RemoteContentType,
    ) -> ApiResult<RemoteContentType> {
        self.enter(Call::Unpublish, current.id()).await?;
        let result = self.mutate(current, |stored| {
            stored.sys.published_version = None;
        });
        if self.vanish_after_unpublish {
            self.remote.lock().unwrap().remove(current.id());
        }
        result
    }
}

fn raw_fields(payload: &ContentTypePayload) -> Vec<serde_json::Value> {
    payload
        .fields
        .iter()
        .map(|field| serde_json::to_value(field).unwrap())
        .collect()
}

/// The `Category` entity: name (Text, required, size 2-50) and slug
/// (Text, required, lowercase slug pattern).
pub fn category_registry() -> MetadataRegistry {
    let mut registry = MetadataRegistry::new();
    declare_category(&mut registry);
    registry
}

pub fn declare_category(registry: &mut MetadataRegistry) {
    registry
        .schema(
            "Category",
            ContentTypeDescriptor::new("category", "name")
                .with_description("Category for blog posts"),
        )
        .field(
            "name",
            FieldDescriptor::text()
                .required()
                .validation(Validation::size(2, 50)),
        )
        .field(
            "slug",
            FieldDescriptor::text()
                .required()
                .validation(Validation::regexp("^[a-z0-9-]+$")),
        );
}

pub fn declare_post(registry: &mut MetadataRegistry) {
    registry
        .schema("BlogPost", ContentTypeDescriptor::new("blogPost", "title"))
        .field("title", FieldDescriptor::text().required().localized())
        .field("body", FieldDescriptor::rich_text())
        .field("category", FieldDescriptor::reference())
        .field("hero", FieldDescriptor::media());
}
