use std::fmt;

/// Database-level storage types a translated column can be declared with.
///
/// These mirror the column methods of the migration builder that receives
/// the columns (`$table->string(...)`, `$table->bigInteger(...)`, ...). The
/// size tiers of the text types follow MySQL's limits:
///
/// ```text
/// Text        <= 65_535 bytes
/// MediumText  <= 16_777_215 bytes
/// LongText    anything larger
/// ```
///
/// Length and scale are not part of the type; they live in the column's
/// [`ColumnOptions`](super::ColumnOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Text with an explicit maximum length
    String,

    /// A boolean value
    Boolean,

    /// A 4-byte signed integer
    Integer,

    /// An 8-byte signed integer
    BigInteger,

    /// Fixed point number. Integer digits and scale come from the column
    /// options.
    Decimal,

    /// A civil date in the Gregorian calendar
    Date,

    /// A civil datetime in the Gregorian calendar
    DateTime,

    /// Unbounded text up to 64KiB
    Text,

    /// Unbounded text up to 16MiB
    MediumText,

    /// Unbounded text up to 4GiB
    LongText,
}

impl Type {
    /// Maximum byte length stored by [`Type::Text`].
    pub const TEXT_MAX_BYTES: u64 = 65_535;

    /// Maximum byte length stored by [`Type::MediumText`].
    pub const MEDIUM_TEXT_MAX_BYTES: u64 = 16_777_215;

    /// Picks the smallest text type able to hold `byte_length` bytes.
    ///
    /// Both thresholds are inclusive.
    pub fn text_for_byte_length(byte_length: u64) -> Type {
        if byte_length <= Self::TEXT_MAX_BYTES {
            Type::Text
        } else if byte_length <= Self::MEDIUM_TEXT_MAX_BYTES {
            Type::MediumText
        } else {
            Type::LongText
        }
    }

    /// The migration builder's name for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::String => "string",
            Type::Boolean => "boolean",
            Type::Integer => "integer",
            Type::BigInteger => "bigInteger",
            Type::Decimal => "decimal",
            Type::Date => "date",
            Type::DateTime => "dateTime",
            Type::Text => "text",
            Type::MediumText => "mediumText",
            Type::LongText => "longText",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Type::Text | Type::MediumText | Type::LongText)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
