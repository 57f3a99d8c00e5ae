mod set;
pub use set::RuleSet;

mod translate;

use crate::resolve::RuleKey;

/// A translation rule: one per source field type.
///
/// Rules are pure functions from a [`Field`](sfmigrate_core::schema::Field)
/// to a [`Column`](sfmigrate_core::schema::Column). Many of them reuse
/// another rule's policy instead of defining their own; those edges are
/// listed by [`Rule::delegates_to`] and must never form a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    String,
    Boolean,
    Int,
    Double,
    Date,
    Datetime,
    Time,
    Base64,
    Id,
    Reference,
    Currency,
    Textarea,
    Percent,
    Phone,
    Url,
    Email,
    Encryptedstring,
    Combobox,
    Picklist,
    Multipicklist,
    Anytype,
    Location,
    Address,
}

impl Rule {
    /// Every rule, in catalogue order.
    pub const ALL: [Rule; 23] = [
        Rule::String,
        Rule::Boolean,
        Rule::Int,
        Rule::Double,
        Rule::Date,
        Rule::Datetime,
        Rule::Time,
        Rule::Base64,
        Rule::Id,
        Rule::Reference,
        Rule::Currency,
        Rule::Textarea,
        Rule::Percent,
        Rule::Phone,
        Rule::Url,
        Rule::Email,
        Rule::Encryptedstring,
        Rule::Combobox,
        Rule::Picklist,
        Rule::Multipicklist,
        Rule::Anytype,
        Rule::Location,
        Rule::Address,
    ];

    /// The source type tag this rule is registered under.
    pub fn name(self) -> &'static str {
        match self {
            Rule::String => "string",
            Rule::Boolean => "boolean",
            Rule::Int => "int",
            Rule::Double => "double",
            Rule::Date => "date",
            Rule::Datetime => "datetime",
            Rule::Time => "time",
            Rule::Base64 => "base64",
            Rule::Id => "id",
            Rule::Reference => "reference",
            Rule::Currency => "currency",
            Rule::Textarea => "textarea",
            Rule::Percent => "percent",
            Rule::Phone => "phone",
            Rule::Url => "url",
            Rule::Email => "email",
            Rule::Encryptedstring => "encryptedstring",
            Rule::Combobox => "combobox",
            Rule::Picklist => "picklist",
            Rule::Multipicklist => "multipicklist",
            Rule::Anytype => "anytype",
            Rule::Location => "location",
            Rule::Address => "address",
        }
    }

    pub fn key(self) -> RuleKey {
        RuleKey::new(self.name())
    }

    /// Rules this rule may hand its field to.
    ///
    /// `String` only delegates when the declared length exceeds 255.
    pub fn delegates_to(self) -> &'static [Rule] {
        match self {
            Rule::String => &[Rule::Textarea],
            Rule::Currency | Rule::Percent => &[Rule::Double],
            Rule::Phone
            | Rule::Url
            | Rule::Email
            | Rule::Encryptedstring
            | Rule::Combobox
            | Rule::Picklist
            | Rule::Location => &[Rule::String],
            Rule::Multipicklist => &[Rule::Picklist],
            Rule::Anytype | Rule::Address => &[Rule::Textarea],
            Rule::Boolean
            | Rule::Int
            | Rule::Double
            | Rule::Date
            | Rule::Datetime
            | Rule::Time
            | Rule::Base64
            | Rule::Id
            | Rule::Reference
            | Rule::Textarea => &[],
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
