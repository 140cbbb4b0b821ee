use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The abstract kind of a declared field.
///
/// Every known kind lowers to exactly one platform type name through
/// [`FieldType::native_type`]. Schema documents may name a type the
/// vocabulary does not know; those parse into [`FieldType::Other`] and are
/// rejected when the schema is transformed, never at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// Short text, lowered to `Symbol`.
    Text,
    RichText,
    Number,
    Integer,
    Date,
    Location,
    /// Link to an asset.
    Media,
    Boolean,
    /// Link to another entry.
    Reference,
    Array,
    Object,
    Symbol,
    /// A type name outside the vocabulary.
    Other(String),
}

impl FieldType {
    /// The platform-native type name, or `None` for [`FieldType::Other`].
    pub fn native_type(&self) -> Option<&'static str> {
        let native = match self {
            FieldType::Text | FieldType::Symbol => "Symbol",
            FieldType::RichText => "RichText",
            FieldType::Number => "Number",
            FieldType::Integer => "Integer",
            FieldType::Date => "Date",
            FieldType::Location => "Location",
            FieldType::Boolean => "Boolean",
            FieldType::Object => "Object",
            FieldType::Reference | FieldType::Media => "Link",
            FieldType::Array => "Array",
            FieldType::Other(_) => return None,
        };
        Some(native)
    }

    /// Returns true for kinds that lower to the native `Link` type.
    pub fn is_link(&self) -> bool {
        matches!(self, FieldType::Reference | FieldType::Media)
    }

    /// The link target a link kind points at when none is given explicitly.
    pub fn default_link_type(&self) -> Option<LinkType> {
        match self {
            FieldType::Reference => Some(LinkType::Entry),
            FieldType::Media => Some(LinkType::Asset),
            _ => None,
        }
    }

    /// The abstract name as written in schema documents.
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "Text",
            FieldType::RichText => "RichText",
            FieldType::Number => "Number",
            FieldType::Integer => "Integer",
            FieldType::Date => "Date",
            FieldType::Location => "Location",
            FieldType::Media => "Media",
            FieldType::Boolean => "Boolean",
            FieldType::Reference => "Reference",
            FieldType::Array => "Array",
            FieldType::Object => "Object",
            FieldType::Symbol => "Symbol",
            FieldType::Other(name) => name,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Text" => FieldType::Text,
            "RichText" => FieldType::RichText,
            "Number" => FieldType::Number,
            "Integer" => FieldType::Integer,
            "Date" => FieldType::Date,
            "Location" => FieldType::Location,
            "Media" => FieldType::Media,
            "Boolean" => FieldType::Boolean,
            // "Link" is the name older declarations used for references.
            "Reference" | "Link" => FieldType::Reference,
            "Array" => FieldType::Array,
            "Object" => FieldType::Object,
            "Symbol" => FieldType::Symbol,
            other => FieldType::Other(other.to_string()),
        })
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(field_type) => field_type,
            Err(never) => match never {},
        }
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.as_str().to_string()
    }
}

/// What a link field points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkType {
    Entry,
    Asset,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Entry => "Entry",
            LinkType::Asset => "Asset",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
