use super::Rule;

use sfmigrate_core::schema::{db::Type, Column, Field};
use tracing::trace;

/// Default and maximum length of a `string` column before it becomes text.
const STRING_MAX_LENGTH: u32 = 255;

/// Formatted time strings, e.g. `13:45:00.000Z`.
const TIME_LENGTH: u32 = 16;

/// Record ids are 18 characters in their case-insensitive form.
const ID_LENGTH: u32 = 18;

/// Integers with this many digits or more no longer fit in 4 bytes.
const BIG_INTEGER_DIGITS: u32 = 10;

impl Rule {
    /// Applies this rule to `field`.
    ///
    /// Every produced column is nullable: the source does not guarantee that
    /// records carry a value for any field.
    pub fn translate(self, field: &Field) -> Column {
        match self {
            Rule::String => {
                let length = field.declared_length().unwrap_or(STRING_MAX_LENGTH);

                if length > STRING_MAX_LENGTH {
                    return self.delegate(Rule::Textarea, field);
                }

                Column::new(&field.name, Type::String).length(length)
            }
            Rule::Boolean => Column::new(&field.name, Type::Boolean),
            Rule::Int => {
                let ty = if field.declared_digits() < BIG_INTEGER_DIGITS {
                    Type::Integer
                } else {
                    Type::BigInteger
                };

                Column::new(&field.name, ty)
            }
            Rule::Double => {
                let scale = field.declared_scale();

                Column::new(&field.name, Type::Decimal)
                    .length(field.declared_precision().saturating_sub(scale))
                    .fractional(scale)
            }
            Rule::Date => Column::new(&field.name, Type::Date),
            Rule::Datetime => Column::new(&field.name, Type::DateTime),
            Rule::Time => Column::new(&field.name, Type::String).length(TIME_LENGTH),
            // Describe results carry no useful size for base64 content
            Rule::Base64 => Column::new(&field.name, Type::LongText),
            Rule::Id => Column::new(&field.name, Type::String)
                .length(ID_LENGTH)
                .unique(),
            // Foreign-key-like, but no constraint is emitted
            Rule::Reference => Column::new(&field.name, Type::String)
                .length(ID_LENGTH)
                .index(),
            Rule::Textarea => Column::new(
                &field.name,
                Type::text_for_byte_length(field.declared_byte_length()),
            ),
            Rule::Currency | Rule::Percent => self.delegate(Rule::Double, field),
            Rule::Phone
            | Rule::Url
            | Rule::Email
            | Rule::Encryptedstring
            | Rule::Combobox
            | Rule::Picklist
            | Rule::Location => self.delegate(Rule::String, field),
            Rule::Multipicklist => self.delegate(Rule::Picklist, field),
            Rule::Anytype | Rule::Address => self.delegate(Rule::Textarea, field),
        }
    }

    fn delegate(self, target: Rule, field: &Field) -> Column {
        debug_assert!(self.delegates_to().contains(&target));
        trace!(field = %field.name, from = %self, to = %target, "delegating translation rule");
        target.translate(field)
    }
}
