//! Lowers registry metadata to the platform's wire shape.
//!
//! Everything here is pure. Errors are raised before any remote call.

use crate::error::{SyncError, SyncResult};
use crate::wire::{ContentTypePayload, WireField, WireItems};
use contentful_orm_model::{
    ContentTypeDescriptor, FieldDescriptor, FieldMap, FieldType, MetadataRegistry, SchemaError,
    SchemaResult, Validation,
};

/// Transforms a field map into wire fields, keeping declaration order.
pub fn transform_fields(fields: &FieldMap) -> SchemaResult<Vec<WireField>> {
    fields
        .iter()
        .map(|(name, descriptor)| transform_field(name, descriptor))
        .collect()
}

fn transform_field(name: &str, descriptor: &FieldDescriptor) -> SchemaResult<WireField> {
    let field_type = descriptor
        .field_type
        .native_type()
        .ok_or_else(|| SchemaError::UnmappedFieldType {
            field: name.to_string(),
            type_name: descriptor.field_type.to_string(),
        })?;

    let link_type = if descriptor.field_type.is_link() {
        descriptor
            .link_type
            .or_else(|| descriptor.field_type.default_link_type())
            .map(|l| l.as_str().to_string())
    } else {
        None
    };

    let items = match descriptor.field_type {
        FieldType::Array => Some(transform_items(name, descriptor)?),
        _ => None,
    };

    Ok(WireField {
        id: name.to_string(),
        name: name.to_string(),
        field_type: field_type.to_string(),
        required: descriptor.required,
        localized: descriptor.localized,
        validations: normalize_all(&descriptor.validations),
        link_type,
        items,
    })
}

fn transform_items(name: &str, descriptor: &FieldDescriptor) -> SchemaResult<WireItems> {
    let items_type = descriptor
        .items_type
        .as_ref()
        .ok_or_else(|| SchemaError::MissingItemsType {
            field: name.to_string(),
        })?;

    let item_type = items_type
        .native_type()
        .ok_or_else(|| SchemaError::UnmappedItemsType {
            field: name.to_string(),
            type_name: items_type.to_string(),
        })?;

    let link_type = if items_type.is_link() {
        descriptor
            .items_link_type
            .or_else(|| items_type.default_link_type())
            .map(|l| l.as_str().to_string())
    } else {
        None
    };

    Ok(WireItems {
        item_type: item_type.to_string(),
        link_type,
        validations: normalize_all(&descriptor.items_validations),
    })
}

fn normalize_all(validations: &[Validation]) -> Vec<Validation> {
    validations.iter().map(Validation::normalized).collect()
}

/// Builds a create/update request body from a descriptor and its wire fields.
pub fn build_payload(descriptor: &ContentTypeDescriptor, fields: Vec<WireField>) -> ContentTypePayload {
    ContentTypePayload {
        name: descriptor.name.clone(),
        display_field: descriptor.display_field.clone(),
        description: descriptor.description.clone(),
        fields,
    }
}

/// Transforms a registered entity into its full request payload.
pub fn transform(registry: &MetadataRegistry, entity: &str) -> SyncResult<ContentTypePayload> {
    let descriptor =
        registry
            .content_type_metadata(entity)
            .ok_or_else(|| SyncError::NoMetadataFound {
                entity: entity.to_string(),
            })?;

    let fields =
        transform_fields(registry.fields_metadata(entity)).map_err(|source| SyncError::Schema {
            entity: entity.to_string(),
            content_type: descriptor.name.clone(),
            source,
        })?;

    Ok(build_payload(descriptor, fields))
}
