use serde::{Deserialize, Serialize};

/// NGSI v2 attribute holding a text value.
///
/// Serializes as `{"type": "Text", "value": "..."}`. The kind tag
/// defaults on decode, so notification shorthand records that carry
/// only `{"value": "..."}` still parse; a record carrying a different
/// kind tag fails decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAttr {
    #[serde(rename = "type", default)]
    tag: TextTag,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
enum TextTag {
    #[default]
    Text,
}

impl TextAttr {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            tag: TextTag::Text,
            value: value.into(),
        }
    }

    /// Absence-aware factory: a reading field that was never supplied
    /// stays unset, while any present value (the empty string included)
    /// becomes a concrete attribute.
    pub fn opt(value: Option<impl Into<String>>) -> Option<Self> {
        value.map(Self::new)
    }
}

/// NGSI v2 attribute holding a numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberAttr {
    #[serde(rename = "type", default)]
    tag: NumberTag,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
enum NumberTag {
    #[default]
    Number,
}

impl NumberAttr {
    pub fn new(value: f64) -> Self {
        Self {
            tag: NumberTag::Number,
            value,
        }
    }

    /// Absence-aware factory: `None` stays unset, any present value
    /// (zero included) becomes a concrete attribute.
    pub fn opt(value: Option<f64>) -> Option<Self> {
        value.map(Self::new)
    }
}

/// NGSI v2 attribute holding a boolean value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanAttr {
    #[serde(rename = "type", default)]
    tag: BooleanTag,
    pub value: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
enum BooleanTag {
    #[default]
    Boolean,
}

impl BooleanAttr {
    pub fn new(value: bool) -> Self {
        Self {
            tag: BooleanTag::Boolean,
            value,
        }
    }

    /// Absence-aware factory: `None` stays unset, any present value
    /// (`false` included) becomes a concrete attribute.
    pub fn opt(value: Option<bool>) -> Option<Self> {
        value.map(Self::new)
    }
}
