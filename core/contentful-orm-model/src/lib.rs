//! Content model declarations for contentful-orm.
//!
//! Defines everything needed to describe a content type locally:
//! - [`FieldType`] / [`LinkType`]: the field type vocabulary and its native names
//! - [`Validation`]: declarative constraints interpreted by the platform
//! - [`ContentTypeDescriptor`] / [`FieldDescriptor`]: per-entity and per-field options
//! - [`MetadataRegistry`]: explicit storage mapping entities to their metadata
//! - [`ContentTypeSchema`]: an immutable schema value, built in code or read from a document
//!
//! Nothing here performs I/O. The sync crate lowers registry contents to the
//! platform's wire shape and reconciles them with the remote space.

mod descriptor;
mod error;
mod field_type;
mod registry;
mod schema;
mod validation;

pub use descriptor::{ContentTypeDescriptor, FieldDescriptor};
pub use error::{SchemaError, SchemaResult};
pub use field_type::{FieldType, LinkType};
pub use registry::{FieldMap, MetadataRegistry, SchemaDeclaration};
pub use schema::{ContentTypeSchema, FieldDeclaration, SchemaBuilder};
pub use validation::{
    Mark, NodeType, RangeBounds, Regexp, SizeBounds, Validation, ValidationRule,
};
