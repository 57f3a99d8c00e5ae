use serde::Deserialize;

/// One field of an SObject, as reported by the platform's describe call.
///
/// Which size attributes are present depends on the field type. The
/// platform reports inapplicable sizes as `0`, so a zero and a missing value
/// mean the same thing to the translation rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    /// The field's API name
    pub name: String,

    /// The field's type tag, e.g. `string`, `double` or `reference`.
    #[serde(rename = "type")]
    pub ty: String,

    /// Maximum number of characters
    pub length: Option<u32>,

    /// Maximum number of digits of an integer field
    pub digits: Option<u32>,

    /// Total number of digits of a numeric field
    pub precision: Option<u32>,

    /// Number of digits right of the decimal point
    pub scale: Option<u32>,

    /// Maximum storage size in bytes
    pub byte_length: Option<u64>,

    /// True if values must be unique across records
    pub unique: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Field {
        Field {
            name: name.into(),
            ty: ty.into(),
            ..Field::default()
        }
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = Some(digits);
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_byte_length(mut self, byte_length: u64) -> Self {
        self.byte_length = Some(byte_length);
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Declared character length, `None` when missing or zero.
    pub fn declared_length(&self) -> Option<u32> {
        self.length.filter(|&n| n > 0)
    }

    pub fn declared_digits(&self) -> u32 {
        self.digits.unwrap_or(0)
    }

    pub fn declared_precision(&self) -> u32 {
        self.precision.unwrap_or(0)
    }

    pub fn declared_scale(&self) -> u32 {
        self.scale.unwrap_or(0)
    }

    pub fn declared_byte_length(&self) -> u64 {
        self.byte_length.unwrap_or(0)
    }
}
