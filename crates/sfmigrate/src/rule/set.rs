use super::Rule;
use crate::{resolve::RuleKey, verify};

use indexmap::IndexMap;
use sfmigrate_core::{
    schema::{Column, Field},
    Error, Result,
};
use tracing::debug;

/// The registered translation rules, keyed by [`RuleKey`].
///
/// Built once and shared; translating a field never mutates it.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: IndexMap<RuleKey, Rule>,
}

impl RuleSet {
    /// Registers the built-in catalogue and verifies its delegation graph.
    pub fn new() -> Result<RuleSet> {
        Self::from_rules(Rule::ALL)
    }

    /// Registers `rules`, in order.
    ///
    /// Fails if two rules normalize to the same key or if delegation among the
    /// registered rules forms a cycle.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Result<RuleSet> {
        let mut map = IndexMap::new();

        for rule in rules {
            if let Some(prev) = map.insert(rule.key(), rule) {
                return Err(Error::invalid_schema(format!(
                    "rules `{prev}` and `{rule}` share the key {:?}",
                    rule.key().as_str()
                )));
            }
        }

        let rule_set = RuleSet { rules: map };
        verify::delegation_is_acyclic(rule_set.rules(), Rule::delegates_to)?;
        Ok(rule_set)
    }

    pub fn get(&self, key: &RuleKey) -> Option<Rule> {
        self.rules.get(key).copied()
    }

    pub fn contains(&self, ty: &str) -> bool {
        self.rules.contains_key(&RuleKey::new(ty))
    }

    /// Registered keys, in catalogue order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &RuleKey> + '_ {
        self.rules.keys()
    }

    pub fn rules(&self) -> impl ExactSizeIterator<Item = Rule> + '_ {
        self.rules.values().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs `rule` against `field`.
    pub fn translate(&self, field: &Field, rule: Rule) -> Column {
        rule.translate(field)
    }

    /// Resolves the rule for `field` and translates it.
    pub fn translate_field(&self, field: &Field) -> Result<Column> {
        let rule = self.resolve(field)?;
        let column = self.translate(field, rule);

        debug!(
            field = %field.name,
            ty = %field.ty,
            rule = %rule,
            storage_ty = %column.ty,
            "translated field"
        );

        Ok(column)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new().expect("built-in translation rules must be valid")
    }
}
