use crate::{Rule, RuleSet};

use heck::ToUpperCamelCase;
use sfmigrate_core::{schema::Field, Error, Result};
use std::fmt;

/// Canonical lookup key for a field type tag.
///
/// The tag is first turned into its upper camel case form, so `date_time`
/// and `DateTime` agree, and then compared without regard to case, so
/// `encryptedString` finds the `encryptedstring` rule.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RuleKey(String);

impl RuleKey {
    pub fn new(ty: &str) -> RuleKey {
        RuleKey(ty.to_upper_camel_case().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for RuleKey {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "RuleKey({})", self.0)
    }
}

impl RuleSet {
    /// Finds the rule responsible for `field`'s type.
    ///
    /// Fails with an unknown field type error naming the field when no rule
    /// is registered. The caller decides whether that aborts the whole batch.
    pub fn resolve(&self, field: &Field) -> Result<Rule> {
        let key = RuleKey::new(&field.ty);

        self.get(&key)
            .ok_or_else(|| Error::unknown_field_type(&field.ty, &field.name))
    }
}
