use serde::{Deserialize, Serialize};

/// A declarative constraint attached to a field.
///
/// Validations are never evaluated locally; the platform interprets them.
/// The serialized shape is the platform's own: one rule key, plus an
/// optional custom error `message`, e.g.
/// `{"size": {"min": 2, "max": 50}, "message": "too long"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    #[serde(flatten)]
    pub rule: ValidationRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The constraint itself. Exactly one rule per [`Validation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationRule {
    /// Length of text or number of array items.
    Size(SizeBounds),
    /// Numeric value range.
    Range(RangeBounds),
    Regexp(Regexp),
    Unique(bool),
    /// Enumerated allowed values.
    #[serde(rename = "in")]
    In(Vec<serde_json::Value>),
    LinkContentType(Vec<String>),
    LinkMimetypeGroup(Vec<String>),
    EnabledNodeTypes(Vec<NodeType>),
    EnabledMarks(Vec<Mark>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regexp {
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
}

/// Rich text block and inline node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    #[serde(rename = "document")]
    Document,
    #[serde(rename = "paragraph")]
    Paragraph,
    #[serde(rename = "heading-1")]
    Heading1,
    #[serde(rename = "heading-2")]
    Heading2,
    #[serde(rename = "heading-3")]
    Heading3,
    #[serde(rename = "heading-4")]
    Heading4,
    #[serde(rename = "heading-5")]
    Heading5,
    #[serde(rename = "heading-6")]
    Heading6,
    #[serde(rename = "ordered-list")]
    OrderedList,
    #[serde(rename = "unordered-list")]
    UnorderedList,
    #[serde(rename = "list-item")]
    ListItem,
    #[serde(rename = "hr")]
    Hr,
    #[serde(rename = "blockquote")]
    Blockquote,
    #[serde(rename = "embedded-entry-block")]
    EmbeddedEntryBlock,
    #[serde(rename = "embedded-asset-block")]
    EmbeddedAssetBlock,
    #[serde(rename = "hyperlink")]
    Hyperlink,
    #[serde(rename = "entry-hyperlink")]
    EntryHyperlink,
    #[serde(rename = "asset-hyperlink")]
    AssetHyperlink,
    #[serde(rename = "resource-hyperlink")]
    ResourceHyperlink,
}

/// Rich text inline marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
}

impl Validation {
    fn rule(rule: ValidationRule) -> Self {
        Self {
            rule,
            message: None,
        }
    }

    /// Shorthand for a size range with both bounds.
    pub fn size(min: u64, max: u64) -> Self {
        Self::rule(ValidationRule::Size(SizeBounds {
            min: Some(min),
            max: Some(max),
        }))
    }

    /// Shorthand for a size range with only a lower bound.
    pub fn min_size(min: u64) -> Self {
        Self::rule(ValidationRule::Size(SizeBounds {
            min: Some(min),
            max: None,
        }))
    }

    /// Shorthand for a size range with only an upper bound.
    pub fn max_size(max: u64) -> Self {
        Self::rule(ValidationRule::Size(SizeBounds {
            min: None,
            max: Some(max),
        }))
    }

    /// Shorthand for a numeric range with both bounds.
    pub fn range(min: f64, max: f64) -> Self {
        Self::rule(ValidationRule::Range(RangeBounds {
            min: Some(min),
            max: Some(max),
        }))
    }

    /// Shorthand for a numeric lower bound.
    pub fn min(min: f64) -> Self {
        Self::rule(ValidationRule::Range(RangeBounds {
            min: Some(min),
            max: None,
        }))
    }

    /// Shorthand for a numeric upper bound.
    pub fn max(max: f64) -> Self {
        Self::rule(ValidationRule::Range(RangeBounds {
            min: None,
            max: Some(max),
        }))
    }

    /// A regular expression without flags.
    pub fn regexp(pattern: impl Into<String>) -> Self {
        Self::rule(ValidationRule::Regexp(Regexp {
            pattern: pattern.into(),
            flags: None,
        }))
    }

    pub fn regexp_with_flags(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        Self::rule(ValidationRule::Regexp(Regexp {
            pattern: pattern.into(),
            flags: Some(flags.into()),
        }))
    }

    pub fn unique() -> Self {
        Self::rule(ValidationRule::Unique(true))
    }

    /// Restricts the value to one of `values`.
    pub fn one_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<serde_json::Value>,
    {
        Self::rule(ValidationRule::In(values.into_iter().map(Into::into).collect()))
    }

    /// Restricts entry links to the given content type ids.
    pub fn link_content_type<I, S>(content_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::rule(ValidationRule::LinkContentType(
            content_types.into_iter().map(Into::into).collect(),
        ))
    }

    /// Restricts asset links to the given mimetype groups (`image`, `video`, ...).
    pub fn link_mimetype_group<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::rule(ValidationRule::LinkMimetypeGroup(
            groups.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn enabled_node_types(node_types: impl IntoIterator<Item = NodeType>) -> Self {
        Self::rule(ValidationRule::EnabledNodeTypes(
            node_types.into_iter().collect(),
        ))
    }

    pub fn enabled_marks(marks: impl IntoIterator<Item = Mark>) -> Self {
        Self::rule(ValidationRule::EnabledMarks(marks.into_iter().collect()))
    }

    /// Attaches the error message the platform shows when the rule fails.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the wire-normalized form of this validation.
    ///
    /// A regexp without flags gets an empty flags string so the payload is
    /// identical whether or not the declaration spelled the flags out.
    pub fn normalized(&self) -> Self {
        match &self.rule {
            ValidationRule::Regexp(Regexp {
                pattern,
                flags: None,
            }) => Self {
                rule: ValidationRule::Regexp(Regexp {
                    pattern: pattern.clone(),
                    flags: Some(String::new()),
                }),
                message: self.message.clone(),
            },
            _ => self.clone(),
        }
    }
}

impl From<ValidationRule> for Validation {
    fn from(rule: ValidationRule) -> Self {
        Self::rule(rule)
    }
}
