//! Metadata storage for declared entities.
//!
//! The registry is an ordinary value: build one, declare entities into it,
//! then hand it (usually behind an `Arc`) to the synchronizer. Nothing is
//! global, so tests and independent tools can each keep their own.

use crate::descriptor::{ContentTypeDescriptor, FieldDescriptor};
use crate::schema::ContentTypeSchema;
use indexmap::IndexMap;

/// Ordered mapping of field name to descriptor. Iteration order is
/// declaration order, which is also the remote field order.
pub type FieldMap = IndexMap<String, FieldDescriptor>;

#[derive(Debug, Clone, Default)]
struct RegistryEntry {
    content_type: Option<ContentTypeDescriptor>,
    fields: FieldMap,
}

/// Maps each declared entity to its content-type descriptor and fields.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    entries: IndexMap<String, RegistryEntry>,
    empty_fields: FieldMap,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `descriptor` with `entity`, replacing any earlier one.
    pub fn declare_content_type(&mut self, entity: &str, descriptor: ContentTypeDescriptor) {
        self.entry(entity).content_type = Some(descriptor);
    }

    /// Declares a field on `entity`.
    ///
    /// Re-declaring a name replaces the earlier descriptor in place, so the
    /// field keeps the position of its first declaration.
    pub fn declare_field(&mut self, entity: &str, field_name: &str, descriptor: FieldDescriptor) {
        self.entry(entity)
            .fields
            .insert(field_name.to_string(), descriptor);
    }

    /// Declares every part of `schema`, content type first, then fields in order.
    pub fn register(&mut self, schema: ContentTypeSchema) {
        let (entity, content_type, fields) = schema.into_parts();
        self.declare_content_type(&entity, content_type);
        for (name, descriptor) in fields {
            self.declare_field(&entity, &name, descriptor);
        }
    }

    /// Starts a fluent declaration for `entity`.
    pub fn schema(
        &mut self,
        entity: &str,
        descriptor: ContentTypeDescriptor,
    ) -> SchemaDeclaration<'_> {
        self.declare_content_type(entity, descriptor);
        SchemaDeclaration {
            registry: self,
            entity: entity.to_string(),
        }
    }

    pub fn content_type_metadata(&self, entity: &str) -> Option<&ContentTypeDescriptor> {
        self.entries
            .get(entity)
            .and_then(|entry| entry.content_type.as_ref())
    }

    /// Fields declared on `entity`; empty when none were declared.
    pub fn fields_metadata(&self, entity: &str) -> &FieldMap {
        self.entries
            .get(entity)
            .map(|entry| &entry.fields)
            .unwrap_or(&self.empty_fields)
    }

    /// All known entities, in order of first declaration.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entities that carry a content-type descriptor, in declaration order.
    ///
    /// An entity with fields but no descriptor is never synchronized.
    pub fn sync_candidates(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.content_type.is_some())
            .map(|(entity, _)| entity.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&mut self, entity: &str) -> &mut RegistryEntry {
        self.entries.entry(entity.to_string()).or_default()
    }
}

/// Fluent field declaration bound to one entity of a registry.
///
/// ```
/// use contentful_orm_model::{ContentTypeDescriptor, FieldDescriptor, MetadataRegistry, Validation};
///
/// let mut registry = MetadataRegistry::new();
/// registry
///     .schema("Category", ContentTypeDescriptor::new("category", "name"))
///     .field("name", FieldDescriptor::text().required().validation(Validation::size(2, 50)))
///     .field("slug", FieldDescriptor::text().required().validation(Validation::regexp("^[a-z0-9-]+$")));
///
/// assert_eq!(registry.fields_metadata("Category").len(), 2);
/// ```
pub struct SchemaDeclaration<'a> {
    registry: &'a mut MetadataRegistry,
    entity: String,
}

impl SchemaDeclaration<'_> {
    pub fn field(self, field_name: &str, descriptor: FieldDescriptor) -> Self {
        self.registry
            .declare_field(&self.entity, field_name, descriptor);
        self
    }
}
