//! Declarative solve rules.
//!
//! A `Rule` binds one target variable to the ordered inputs a closed-form
//! formula needs. Rules are plain data: the classifier decides which rule
//! fires, the solver only evaluates it.

use crate::outcome::FormulaKey;
use crate::var_id::VarId;
use std::sync::Arc;

/// A formula over SI values given in the rule's input order.
pub type FormulaFn = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// One (target, inputs, formula) entry of a group's rule table.
///
/// # Examples
///
/// ```rust
/// use crashcalc::Rule;
///
/// let rule = Rule::solve("speed")
///     .from(["distance", "duration"])
///     .with(|x| x[0] / x[1]);
///
/// assert_eq!(rule.key().as_str(), "speed(distance,duration)");
/// assert_eq!(rule.evaluate(&[100.0, 4.0]), 25.0);
/// ```
#[derive(Clone)]
pub struct Rule {
    target: VarId,
    inputs: Vec<VarId>,
    formula: FormulaFn,
    key: FormulaKey,
}

/// Builder returned by [`Rule::solve`].
pub struct RuleBuilder {
    target: VarId,
}

/// Builder with the target and inputs set.
pub struct RuleBuilderWithInputs {
    target: VarId,
    inputs: Vec<VarId>,
}

impl Rule {
    /// Start a rule solving for `target`.
    pub fn solve(target: impl Into<VarId>) -> RuleBuilder {
        RuleBuilder {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &VarId {
        &self.target
    }

    /// Inputs in the order the formula receives them.
    pub fn inputs(&self) -> &[VarId] {
        &self.inputs
    }

    pub fn key(&self) -> &FormulaKey {
        &self.key
    }

    /// Whether `id` is one of the rule's inputs.
    pub fn requires(&self, id: &VarId) -> bool {
        self.inputs.contains(id)
    }

    /// Evaluate the formula on SI values in input order.
    pub fn evaluate(&self, args: &[f64]) -> f64 {
        (self.formula)(args)
    }

    /// Prefix the key with the owning group's name.
    pub(crate) fn qualify(mut self, group: &str) -> Self {
        self.key = FormulaKey::new(format!("{}.{}", group, self.key));
        self
    }

    fn local_key(target: &VarId, inputs: &[VarId]) -> FormulaKey {
        let joined = inputs
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        FormulaKey::new(format!("{}({})", target, joined))
    }
}

impl RuleBuilder {
    /// Set the required inputs, in the order the formula reads them.
    pub fn from<I, V>(self, inputs: I) -> RuleBuilderWithInputs
    where
        I: IntoIterator<Item = V>,
        V: Into<VarId>,
    {
        RuleBuilderWithInputs {
            target: self.target,
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }
}

impl RuleBuilderWithInputs {
    /// Attach the formula and finish the rule.
    pub fn with<F>(self, formula: F) -> Rule
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        let key = Rule::local_key(&self.target, &self.inputs);
        Rule {
            target: self.target,
            inputs: self.inputs,
            formula: Arc::new(formula),
            key,
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("target", &self.target)
            .field("inputs", &self.inputs)
            .field("key", &self.key)
            .finish()
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.target == other.target && self.inputs == other.inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_builder() {
        let rule = Rule::solve("duration")
            .from(["speed", "distance"])
            .with(|x| x[1] / x[0]);

        assert_eq!(rule.target().as_str(), "duration");
        assert_eq!(rule.inputs().len(), 2);
        assert!(rule.requires(&VarId::from_str("speed")));
        assert!(!rule.requires(&VarId::from_str("duration")));
        assert_eq!(rule.evaluate(&[10.0, 50.0]), 5.0);
    }

    #[test]
    fn test_rule_qualify() {
        let rule = Rule::solve("a").from(["b", "c"]).with(|x| x[0] + x[1]);
        let rule = rule.qualify("demo");
        assert_eq!(rule.key().as_str(), "demo.a(b,c)");
    }

    #[test]
    fn test_rule_debug_omits_formula() {
        let rule = Rule::solve("a").from(["b"]).with(|x| x[0]);
        let debug = format!("{:?}", rule);
        assert!(debug.contains("Rule"));
        assert!(debug.contains("a(b)"));
    }
}
