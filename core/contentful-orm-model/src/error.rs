use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while lowering declared metadata to the wire shape.
///
/// All of these are detected locally, before any remote call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A field uses a type outside the vocabulary.
    #[error("field '{field}' has unmapped type '{type_name}'")]
    UnmappedFieldType { field: String, type_name: String },

    /// An array field's item type is outside the vocabulary.
    #[error("items of array field '{field}' have unmapped type '{type_name}'")]
    UnmappedItemsType { field: String, type_name: String },

    /// An array field declares no item type.
    #[error("array field '{field}' has no items type")]
    MissingItemsType { field: String },
}

impl SchemaError {
    /// The field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            SchemaError::UnmappedFieldType { field, .. }
            | SchemaError::UnmappedItemsType { field, .. }
            | SchemaError::MissingItemsType { field } => field,
        }
    }

    /// Returns true for both field-level and item-level unmapped types.
    pub fn is_unmapped_type(&self) -> bool {
        matches!(
            self,
            SchemaError::UnmappedFieldType { .. } | SchemaError::UnmappedItemsType { .. }
        )
    }
}
