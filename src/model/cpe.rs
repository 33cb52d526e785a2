//! The eleven-attribute CPE record.

use super::attribute::{Attribute, AttributeValue};
use crate::error::{CpeError, Result};
use crate::parsers::CpeFormat;
use crate::utils::Version;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A single CPE name.
///
/// Holds one [`AttributeValue`] per [`Attribute`]. Fields left unset are
/// [`AttributeValue::Na`]. The `part` value is lower-cased on the way in;
/// every other value keeps the case it was given.
///
/// `==` is structural equality. Use [`Cpe::matches`] for wildcard-aware
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Cpe {
    attrs: [AttributeValue; 11],
}

/// Typed view of the `part` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpePart {
    Application,
    OperatingSystem,
    Hardware,
}

impl CpePart {
    /// Single-letter code used in CPE names
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Application => "a",
            Self::OperatingSystem => "o",
            Self::Hardware => "h",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::OperatingSystem => "operating system",
            Self::Hardware => "hardware",
        }
    }
}

impl Cpe {
    /// Create a CPE with every attribute set to NA.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CPE with every attribute set to ANY.
    #[must_use]
    pub fn any() -> Self {
        Self {
            attrs: std::array::from_fn(|_| AttributeValue::Any),
        }
    }

    /// Create a [`CpeBuilder`].
    pub fn builder() -> CpeBuilder {
        CpeBuilder::default()
    }

    /// Value of an attribute
    #[must_use]
    pub fn get(&self, attr: Attribute) -> &AttributeValue {
        &self.attrs[attr.index()]
    }

    /// Replace the value of an attribute.
    pub fn set(&mut self, attr: Attribute, value: impl Into<AttributeValue>) {
        let mut value = value.into();
        if attr == Attribute::Part {
            value = value.to_lowercase();
        }
        self.attrs[attr.index()] = value;
    }

    /// Iterate `(attribute, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &AttributeValue)> + '_ {
        Attribute::ALL.iter().copied().zip(self.attrs.iter())
    }

    #[must_use]
    pub fn part(&self) -> &AttributeValue {
        self.get(Attribute::Part)
    }

    #[must_use]
    pub fn vendor(&self) -> &AttributeValue {
        self.get(Attribute::Vendor)
    }

    #[must_use]
    pub fn product(&self) -> &AttributeValue {
        self.get(Attribute::Product)
    }

    #[must_use]
    pub fn version(&self) -> &AttributeValue {
        self.get(Attribute::Version)
    }

    #[must_use]
    pub fn update(&self) -> &AttributeValue {
        self.get(Attribute::Update)
    }

    #[must_use]
    pub fn edition(&self) -> &AttributeValue {
        self.get(Attribute::Edition)
    }

    #[must_use]
    pub fn language(&self) -> &AttributeValue {
        self.get(Attribute::Language)
    }

    #[must_use]
    pub fn sw_edition(&self) -> &AttributeValue {
        self.get(Attribute::SwEdition)
    }

    #[must_use]
    pub fn target_sw(&self) -> &AttributeValue {
        self.get(Attribute::TargetSw)
    }

    #[must_use]
    pub fn target_hw(&self) -> &AttributeValue {
        self.get(Attribute::TargetHw)
    }

    #[must_use]
    pub fn other(&self) -> &AttributeValue {
        self.get(Attribute::Other)
    }

    /// Typed `part`, when it holds one of the three registered codes.
    ///
    /// Any other value (including ANY and NA) returns `None`; the model
    /// itself never rejects an unregistered part.
    #[must_use]
    pub fn part_kind(&self) -> Option<CpePart> {
        match self.part().as_str()? {
            "a" => Some(CpePart::Application),
            "o" => Some(CpePart::OperatingSystem),
            "h" => Some(CpePart::Hardware),
            _ => None,
        }
    }

    /// Serialize to the requested textual form.
    #[must_use]
    pub fn to_format(&self, format: CpeFormat) -> String {
        crate::writers::writer_for(format).write(self)
    }

    /// Bind to a WFN literal, `wfn:[part="a",...]`.
    #[must_use]
    pub fn to_wfn(&self) -> String {
        self.to_format(CpeFormat::Wfn)
    }

    /// Bind to a CPE 2.2 URI, `cpe:/a:vendor:product`.
    #[must_use]
    pub fn to_uri(&self) -> String {
        self.to_format(CpeFormat::Uri)
    }

    /// Bind to a CPE 2.3 formatted string, `cpe:2.3:a:vendor:...`.
    #[must_use]
    pub fn to_formatted_string(&self) -> String {
        self.to_format(CpeFormat::FormattedString)
    }

    /// Wildcard-aware match using the default rule.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        crate::matching::matches(self, other)
    }

    /// Compare the `version` attributes of two CPEs.
    ///
    /// ANY on either side compares equal, as does NA against NA. NA against a
    /// concrete version is incomparable and yields `Ok(None)`.
    pub fn compare_version(&self, other: &Self) -> Result<Option<Ordering>> {
        match (self.version(), other.version()) {
            (AttributeValue::Any, _) | (_, AttributeValue::Any) => Ok(Some(Ordering::Equal)),
            (AttributeValue::Na, AttributeValue::Na) => Ok(Some(Ordering::Equal)),
            (AttributeValue::Na, _) | (_, AttributeValue::Na) => Ok(None),
            (AttributeValue::Value(a), AttributeValue::Value(b)) => {
                let a = Version::parse(a)?;
                let b = Version::parse(b)?;
                Ok(Some(a.compare(&b)))
            }
        }
    }
}

impl fmt::Display for Cpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_formatted_string())
    }
}

impl FromStr for Cpe {
    type Err = CpeError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parsers::parse(s)
    }
}

impl Serialize for Cpe {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_formatted_string())
    }
}

impl<'de> Deserialize<'de> for Cpe {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for [`Cpe`]. Unset attributes are NA.
#[derive(Debug, Default)]
#[must_use]
pub struct CpeBuilder {
    cpe: Cpe,
}

macro_rules! builder_setters {
    ($($name:ident => $attr:ident),* $(,)?) => {
        $(
            #[doc = concat!("Set the `", stringify!($name), "` attribute.")]
            pub fn $name(mut self, value: impl Into<AttributeValue>) -> Self {
                self.cpe.set(Attribute::$attr, value);
                self
            }
        )*
    };
}

impl CpeBuilder {
    builder_setters! {
        part => Part,
        vendor => Vendor,
        product => Product,
        version => Version,
        update => Update,
        edition => Edition,
        language => Language,
        sw_edition => SwEdition,
        target_sw => TargetSw,
        target_hw => TargetHw,
        other => Other,
    }

    /// Set an attribute chosen at runtime.
    pub fn attr(mut self, attr: Attribute, value: impl Into<AttributeValue>) -> Self {
        self.cpe.set(attr, value);
        self
    }

    pub fn build(self) -> Cpe {
        self.cpe
    }
}
