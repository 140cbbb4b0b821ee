use crate::field_type::{FieldType, LinkType};
use crate::validation::Validation;
use serde::{Deserialize, Serialize};

/// Content-type level options for one declared entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeDescriptor {
    /// Remote identifier of the content type. Unique within a space.
    pub name: String,
    /// Field used as the human-readable label of entries.
    pub display_field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ContentTypeDescriptor {
    pub fn new(name: impl Into<String>, display_field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_field: display_field.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Options for one declared field.
///
/// `link_type` is only meaningful for [`FieldType::Reference`] and
/// [`FieldType::Media`]; the `items_*` options only for [`FieldType::Array`].
/// Options that do not apply to the field's type are kept but never reach
/// the wire payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub localized: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<Validation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_type: Option<FieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_link_type: Option<LinkType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items_validations: Vec<Validation>,
}

impl FieldDescriptor {
    /// A field of the given type with every option at its default.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            localized: false,
            validations: Vec::new(),
            link_type: None,
            items_type: None,
            items_link_type: None,
            items_validations: Vec::new(),
        }
    }

    pub fn text() -> Self {
        Self::new(FieldType::Text)
    }

    pub fn symbol() -> Self {
        Self::new(FieldType::Symbol)
    }

    pub fn rich_text() -> Self {
        Self::new(FieldType::RichText)
    }

    pub fn number() -> Self {
        Self::new(FieldType::Number)
    }

    pub fn integer() -> Self {
        Self::new(FieldType::Integer)
    }

    pub fn date() -> Self {
        Self::new(FieldType::Date)
    }

    pub fn location() -> Self {
        Self::new(FieldType::Location)
    }

    pub fn boolean() -> Self {
        Self::new(FieldType::Boolean)
    }

    pub fn object() -> Self {
        Self::new(FieldType::Object)
    }

    /// A link to another entry.
    pub fn reference() -> Self {
        Self {
            link_type: Some(LinkType::Entry),
            ..Self::new(FieldType::Reference)
        }
    }

    /// A link to an asset.
    pub fn media() -> Self {
        Self {
            link_type: Some(LinkType::Asset),
            ..Self::new(FieldType::Media)
        }
    }

    /// An array of `items_type`. Link items get their default link type.
    pub fn array(items_type: FieldType) -> Self {
        Self {
            items_link_type: items_type.default_link_type(),
            items_type: Some(items_type),
            ..Self::new(FieldType::Array)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn localized(mut self) -> Self {
        self.localized = true;
        self
    }

    pub fn validation(mut self, validation: Validation) -> Self {
        self.validations.push(validation);
        self
    }

    pub fn link_type(mut self, link_type: LinkType) -> Self {
        self.link_type = Some(link_type);
        self
    }

    pub fn items_link_type(mut self, link_type: LinkType) -> Self {
        self.items_link_type = Some(link_type);
        self
    }

    pub fn items_validation(mut self, validation: Validation) -> Self {
        self.items_validations.push(validation);
        self
    }
}
