use crate::descriptor::{ContentTypeDescriptor, FieldDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A complete, immutable declaration of one entity: its content type and
/// its fields in declaration order.
///
/// Built in code with [`ContentTypeSchema::builder`] or deserialized from a
/// schema document:
///
/// ```yaml
/// name: category
/// displayField: name
/// description: Category for blog posts
/// fields:
///   - id: name
///     type: Text
///     required: true
///     validations:
///       - size: { min: 2, max: 50 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeSchema {
    /// Entity identity; defaults to the content type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    entity: Option<String>,
    #[serde(flatten)]
    content_type: ContentTypeDescriptor,
    #[serde(default)]
    fields: Vec<FieldDeclaration>,
    /// Keys a document carried that no setting claims.
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// One named field inside a [`ContentTypeSchema`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub id: String,
    #[serde(flatten)]
    pub descriptor: FieldDescriptor,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FieldDeclaration {
    pub fn new(id: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        Self {
            id: id.into(),
            descriptor,
            extra: BTreeMap::new(),
        }
    }
}

impl ContentTypeSchema {
    pub fn builder(entity: impl Into<String>, content_type: ContentTypeDescriptor) -> SchemaBuilder {
        SchemaBuilder {
            entity: entity.into(),
            content_type,
            fields: Vec::new(),
        }
    }

    pub fn entity(&self) -> &str {
        self.entity.as_deref().unwrap_or(&self.content_type.name)
    }

    pub fn content_type(&self) -> &ContentTypeDescriptor {
        &self.content_type
    }

    pub fn fields(&self) -> &[FieldDeclaration] {
        &self.fields
    }

    /// Unrecognized document keys, schema level first. Field keys are
    /// reported as `fields[<id>].<key>`.
    pub fn unknown_keys(&self) -> Vec<String> {
        let top = self.extra.keys().cloned();
        let nested = self.fields.iter().flat_map(|field| {
            field
                .extra
                .keys()
                .map(move |key| format!("fields[{}].{}", field.id, key))
        });
        top.chain(nested).collect()
    }

    /// Splits the schema into entity identity, descriptor and ordered fields.
    pub fn into_parts(self) -> (String, ContentTypeDescriptor, Vec<(String, FieldDescriptor)>) {
        let entity = self
            .entity
            .unwrap_or_else(|| self.content_type.name.clone());
        let fields = self
            .fields
            .into_iter()
            .map(|field| (field.id, field.descriptor))
            .collect();
        (entity, self.content_type, fields)
    }
}

/// Builder for [`ContentTypeSchema`].
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    entity: String,
    content_type: ContentTypeDescriptor,
    fields: Vec<FieldDeclaration>,
}

impl SchemaBuilder {
    /// Adds a field. A repeated name replaces the earlier declaration but
    /// keeps its position.
    pub fn field(mut self, id: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        let id = id.into();
        match self.fields.iter_mut().find(|field| field.id == id) {
            Some(existing) => existing.descriptor = descriptor,
            None => self.fields.push(FieldDeclaration::new(id, descriptor)),
        }
        self
    }

    pub fn build(self) -> ContentTypeSchema {
        ContentTypeSchema {
            entity: Some(self.entity),
            content_type: self.content_type,
            fields: self.fields,
            extra: BTreeMap::new(),
        }
    }
}
