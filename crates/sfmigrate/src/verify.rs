use crate::Rule;

use sfmigrate_core::{Error, Result};
use std::collections::HashMap;

struct Verify<F> {
    edges: F,
    state: HashMap<Rule, Visit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    /// Registered but not visited yet
    Pending,
    /// On the current DFS path
    Active,
    Done,
}

/// Checks that delegation among `rules` is closed and acyclic.
///
/// Every delegation target must itself be among `rules`, and following
/// delegation edges from any rule must terminate.
pub(crate) fn delegation_is_acyclic<F>(
    rules: impl IntoIterator<Item = Rule>,
    edges: F,
) -> Result<()>
where
    F: Fn(Rule) -> &'static [Rule],
{
    let state = rules.into_iter().map(|rule| (rule, Visit::Pending)).collect();
    Verify { edges, state }.verify()
}

impl<F> Verify<F>
where
    F: Fn(Rule) -> &'static [Rule],
{
    fn verify(mut self) -> Result<()> {
        let mut registered: Vec<_> = self.state.keys().copied().collect();
        // HashMap order is random; keep error messages stable
        registered.sort_by_key(|rule| rule.name());

        for rule in &registered {
            for target in (self.edges)(*rule) {
                if !self.state.contains_key(target) {
                    return Err(Error::invalid_schema(format!(
                        "rule `{rule}` delegates to unregistered rule `{target}`"
                    )));
                }
            }
        }

        let mut path = vec![];
        for rule in registered {
            self.visit(rule, &mut path)?;
        }

        Ok(())
    }

    fn visit(&mut self, rule: Rule, path: &mut Vec<Rule>) -> Result<()> {
        match self.state[&rule] {
            Visit::Done => return Ok(()),
            Visit::Active => {
                let start = path.iter().position(|r| *r == rule).unwrap_or(0);
                let cycle = path[start..]
                    .iter()
                    .chain(Some(&rule))
                    .map(|r| r.name())
                    .collect::<Vec<_>>()
                    .join(" -> ");

                return Err(Error::invalid_schema(format!(
                    "rule delegation cycle: {cycle}"
                )));
            }
            Visit::Pending => {}
        }

        self.state.insert(rule, Visit::Active);
        path.push(rule);

        for target in (self.edges)(rule) {
            self.visit(*target, path)?;
        }

        path.pop();
        self.state.insert(rule, Visit::Done);
        Ok(())
    }
}
