//! Formula groups.
//!
//! A `FormulaGroup` is a set of variables tied together by one physical
//! law, plus the declarative rule table that solves each variable from the
//! others. Groups also carry the policy used to detect over-determined
//! input sets, which differs between the kinematic groups and the smaller
//! geometry groups.

use crate::error::CalcError;
use crate::rule::Rule;
use crate::var_id::VarId;
use crate::variable::VarSpec;
use std::collections::HashSet;

/// How a group detects conflicting inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// A rule fires only when no variable outside its inputs (other than
    /// the target) is populated. A rule whose inputs are all present but
    /// which is blocked by such an extra value reports an error.
    Exclusive,
    /// A rule fires whenever its inputs are populated and the target is
    /// not. Conflicts are detected by the population count alone.
    Threshold,
}

/// A closed-form relationship among a fixed set of variables.
///
/// # Examples
///
/// ```rust
/// use crashcalc::{ConflictPolicy, Domain, FormulaGroup, Rule, Unit, VarSpec};
///
/// let group = FormulaGroup::builder("ohm")
///     .var(VarSpec::new("u", "Voltage", Unit::Factor, Domain::Any))
///     .var(VarSpec::new("r", "Resistance", Unit::Factor, Domain::Positive))
///     .var(VarSpec::new("i", "Current", Unit::Factor, Domain::Any))
///     .rule(Rule::solve("u").from(["r", "i"]).with(|x| x[0] * x[1]))
///     .rule(Rule::solve("i").from(["u", "r"]).with(|x| x[0] / x[1]))
///     .policy(ConflictPolicy::Threshold)
///     .max_populated(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(group.rules().len(), 2);
/// assert_eq!(group.rules()[0].key().as_str(), "ohm.u(r,i)");
/// ```
#[derive(Debug, Clone)]
pub struct FormulaGroup {
    name: String,
    vars: Vec<VarSpec>,
    rules: Vec<Rule>,
    policy: ConflictPolicy,
    max_populated: usize,
}

/// Builder for [`FormulaGroup`].
pub struct GroupBuilder {
    name: String,
    vars: Vec<VarSpec>,
    rules: Vec<Rule>,
    policy: ConflictPolicy,
    max_populated: Option<usize>,
}

impl FormulaGroup {
    /// Start building a group. The name prefixes every formula key.
    pub fn builder(name: impl Into<String>) -> GroupBuilder {
        GroupBuilder {
            name: name.into(),
            vars: Vec::new(),
            rules: Vec::new(),
            policy: ConflictPolicy::Exclusive,
            max_populated: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variables in declaration order.
    pub fn vars(&self) -> &[VarSpec] {
        &self.vars
    }

    pub fn var(&self, id: &VarId) -> Option<&VarSpec> {
        self.vars.iter().find(|spec| &spec.id == id)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules solving for `target`, in table order.
    pub fn rules_for<'a, 'b>(&'a self, target: &'b VarId) -> impl Iterator<Item = &'a Rule> + 'b
    where
        'a: 'b,
    {
        self.rules.iter().filter(move |rule| rule.target() == target)
    }

    /// Whether any rule solves for `id`.
    pub fn is_target(&self, id: &VarId) -> bool {
        self.rules.iter().any(|rule| rule.target() == id)
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Populated variables beyond this count make every target an error.
    pub fn max_populated(&self) -> usize {
        self.max_populated
    }

    /// Check the rule table against the declared variables.
    ///
    /// Rejects rules that reference undeclared variables, rules listing
    /// their own target or the same input twice, and duplicate
    /// (target, inputs) combinations.
    pub fn validate(&self) -> Result<(), CalcError> {
        let declared: HashSet<&VarId> = self.vars.iter().map(|spec| &spec.id).collect();
        let mut seen = HashSet::new();

        for rule in &self.rules {
            if !declared.contains(rule.target()) {
                return Err(CalcError::UnknownVariable(rule.target().clone()));
            }
            let mut inputs = HashSet::new();
            for input in rule.inputs() {
                if !declared.contains(input) {
                    return Err(CalcError::UnknownVariable(input.clone()));
                }
                if input == rule.target() {
                    return Err(CalcError::InvalidRule {
                        target: rule.target().clone(),
                        reason: "target listed as its own input".to_string(),
                    });
                }
                if !inputs.insert(input) {
                    return Err(CalcError::InvalidRule {
                        target: rule.target().clone(),
                        reason: format!("input {} listed twice", input),
                    });
                }
            }

            let mut combination: Vec<&str> = rule.inputs().iter().map(|id| id.as_str()).collect();
            combination.sort_unstable();
            if !seen.insert((rule.target().clone(), combination)) {
                return Err(CalcError::DuplicateRule(rule.key().to_string()));
            }
        }

        Ok(())
    }
}

impl GroupBuilder {
    /// Declare a variable.
    pub fn var(mut self, spec: VarSpec) -> Self {
        self.vars.push(spec);
        self
    }

    /// Add a rule; its key is prefixed with the group name.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule.qualify(&self.name));
        self
    }

    pub fn policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Defaults to one less than the number of variables.
    pub fn max_populated(mut self, count: usize) -> Self {
        self.max_populated = Some(count);
        self
    }

    /// Build and validate the group.
    pub fn build(self) -> Result<FormulaGroup, CalcError> {
        let group = self.build_unchecked();
        group.validate()?;
        Ok(group)
    }

    /// Build without validation; used for the built-in tables, which are
    /// validated by their tests.
    pub(crate) fn build_unchecked(self) -> FormulaGroup {
        let max_populated = self
            .max_populated
            .unwrap_or_else(|| self.vars.len().saturating_sub(1));
        FormulaGroup {
            name: self.name,
            vars: self.vars,
            rules: self.rules,
            policy: self.policy,
            max_populated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::{Domain, Unit};

    fn spec(id: &str) -> VarSpec {
        VarSpec::new(id, id, Unit::Meters, Domain::NonNegative)
    }

    #[test]
    fn test_default_max_populated() {
        let group = FormulaGroup::builder("g")
            .var(spec("a"))
            .var(spec("b"))
            .var(spec("c"))
            .build()
            .unwrap();
        assert_eq!(group.max_populated(), 2);
        assert_eq!(group.policy(), ConflictPolicy::Exclusive);
    }

    #[test]
    fn test_validate_unknown_input() {
        let result = FormulaGroup::builder("g")
            .var(spec("a"))
            .rule(Rule::solve("a").from(["missing"]).with(|x| x[0]))
            .build();
        assert_eq!(
            result.unwrap_err(),
            CalcError::UnknownVariable(VarId::from_str("missing"))
        );
    }

    #[test]
    fn test_validate_target_as_input() {
        let result = FormulaGroup::builder("g")
            .var(spec("a"))
            .var(spec("b"))
            .rule(Rule::solve("a").from(["a", "b"]).with(|x| x[0]))
            .build();
        assert!(matches!(result, Err(CalcError::InvalidRule { .. })));
    }

    #[test]
    fn test_validate_duplicate_combination() {
        let result = FormulaGroup::builder("g")
            .var(spec("a"))
            .var(spec("b"))
            .var(spec("c"))
            .rule(Rule::solve("a").from(["b", "c"]).with(|x| x[0] + x[1]))
            .rule(Rule::solve("a").from(["c", "b"]).with(|x| x[0] * x[1]))
            .build();
        assert!(matches!(result, Err(CalcError::DuplicateRule(_))));
    }

    #[test]
    fn test_rules_for_target() {
        let group = FormulaGroup::builder("g")
            .var(spec("a"))
            .var(spec("b"))
            .var(spec("c"))
            .rule(Rule::solve("a").from(["b", "c"]).with(|x| x[0] + x[1]))
            .rule(Rule::solve("b").from(["a", "c"]).with(|x| x[0] - x[1]))
            .build()
            .unwrap();
        let a = VarId::from_str("a");
        assert_eq!(group.rules_for(&a).count(), 1);
        assert!(group.is_target(&a));
        assert!(!group.is_target(&VarId::from_str("c")));
    }
}
