//! CPE attribute names and three-valued attribute values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eleven named CPE attributes, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Part,
    Vendor,
    Product,
    Version,
    Update,
    Edition,
    Language,
    SwEdition,
    TargetSw,
    TargetHw,
    Other,
}

impl Attribute {
    /// All attributes in canonical order.
    pub const ALL: [Self; 11] = [
        Self::Part,
        Self::Vendor,
        Self::Product,
        Self::Version,
        Self::Update,
        Self::Edition,
        Self::Language,
        Self::SwEdition,
        Self::TargetSw,
        Self::TargetHw,
        Self::Other,
    ];

    /// The positional attributes carried by the CPE 2.2 URI form.
    pub const URI: [Self; 7] = [
        Self::Part,
        Self::Vendor,
        Self::Product,
        Self::Version,
        Self::Update,
        Self::Edition,
        Self::Language,
    ];

    /// Name used in WFN literals (`sw_edition`, `target_hw`, ...)
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Part => "part",
            Self::Vendor => "vendor",
            Self::Product => "product",
            Self::Version => "version",
            Self::Update => "update",
            Self::Edition => "edition",
            Self::Language => "language",
            Self::SwEdition => "sw_edition",
            Self::TargetSw => "target_sw",
            Self::TargetHw => "target_hw",
            Self::Other => "other",
        }
    }

    /// Position in the canonical field order
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Look up an attribute by its WFN name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|attr| attr.name() == name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical value of a single CPE attribute.
///
/// `Any` and `Na` are different values: `Any` matches everything, while `Na`
/// only matches another `Na`. Neither is the same as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    /// Wildcard: matches and is matched by any value
    Any,
    /// Not applicable / absent
    #[default]
    Na,
    /// A concrete string value. `Value("*")` is a literal asterisk.
    Value(String),
}

impl AttributeValue {
    /// Build a value from text, mapping the bare wildcard `*` to [`Self::Any`].
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value == "*" {
            Self::Any
        } else {
            Self::Value(value)
        }
    }

    /// Build a value from optional text; `None` is [`Self::Na`].
    pub fn from_option(value: Option<&str>) -> Self {
        value.map_or(Self::Na, Self::new)
    }

    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    #[must_use]
    pub const fn is_na(&self) -> bool {
        matches!(self, Self::Na)
    }

    /// The concrete string, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            Self::Any | Self::Na => None,
        }
    }

    /// Copy of this value with any concrete text lower-cased.
    #[must_use]
    pub fn to_lowercase(&self) -> Self {
        match self {
            Self::Value(v) => Self::Value(v.to_lowercase()),
            other => other.clone(),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Option<&str>> for AttributeValue {
    fn from(value: Option<&str>) -> Self {
        Self::from_option(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("ANY"),
            Self::Na => f.write_str("NA"),
            Self::Value(v) => f.write_str(v),
        }
    }
}
