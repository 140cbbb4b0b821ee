//! Content type synchronization for contentful-orm.
//!
//! Takes the metadata declared in a [`MetadataRegistry`] and makes the remote
//! space match it.
//!
//! ## Components
//!
//! - **Transform**: lowers registry metadata to the platform's field list
//! - **Remote**: the [`ContentTypeApi`] seam and its HTTP implementation
//! - **Synchronizer**: the per-entity create/update state machine
//!
//! # Example
//!
//! ```
//! use contentful_orm_model::{ContentTypeDescriptor, FieldDescriptor, MetadataRegistry, Validation};
//! use contentful_orm_sync::transform;
//!
//! let mut registry = MetadataRegistry::new();
//! registry
//!     .schema("Category", ContentTypeDescriptor::new("category", "name"))
//!     .field("name", FieldDescriptor::text().required().validation(Validation::size(2, 50)));
//!
//! let payload = transform(&registry, "Category").unwrap();
//! assert_eq!(payload.fields[0].field_type, "Symbol");
//! ```
//!
//! [`MetadataRegistry`]: contentful_orm_model::MetadataRegistry

pub mod config;
pub mod error;
pub mod remote;
pub mod synchronizer;
pub mod transform;
pub mod wire;

pub use config::{BatchPolicy, ContentfulConfig, Credentials, SyncConfig};
pub use error::{ApiError, ApiResult, SyncError, SyncResult, SyncStep};
pub use remote::{ContentTypeApi, ContentfulClient};
pub use synchronizer::{SyncOutcome, SyncReport, Synchronizer};
pub use transform::{build_payload, transform, transform_fields};
pub use wire::{ContentTypePayload, RemoteContentType, RemoteSys, WireField, WireItems};
