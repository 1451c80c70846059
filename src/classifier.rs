//! Variable-set classifier.
//!
//! Decides, from the set of usable inputs, whether a target variable can be
//! solved by exactly one rule of its group. One function serves every
//! group; the group's [`ConflictPolicy`] and population threshold select
//! between the two eligibility behaviours.

use crate::group::{ConflictPolicy, FormulaGroup};
use crate::inputs::Inputs;
use crate::rule::Rule;
use crate::var_id::VarId;
use tracing::debug;

/// Result of classifying one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification<'g> {
    /// Exactly one rule is eligible.
    Unique(&'g Rule),
    /// The target holds a usable value and no rule is eligible.
    Echo(f64),
    /// Nothing to solve with.
    Indeterminate,
    /// Too many inputs, or more than one way to read them.
    Conflict,
}

/// Classify `target` against the current inputs of `group`.
///
/// Order of checks:
/// 1. more usable values than the group's threshold is a conflict;
/// 2. exactly one eligible rule wins, several are a conflict;
/// 3. a populated target is echoed;
/// 4. under [`ConflictPolicy::Exclusive`], a rule whose inputs are present
///    but which is blocked by an extra populated variable is a conflict;
/// 5. otherwise the target is indeterminate.
///
/// # Examples
///
/// ```rust
/// use crashcalc::classifier::{classify, Classification};
/// use crashcalc::{groups, Inputs, VarId};
///
/// let group = groups::constant_motion();
/// let inputs = Inputs::new().with("distance", 100.0).with("duration", 4.0);
///
/// let speed = VarId::from_str("speed");
/// assert!(matches!(classify(&group, &inputs, &speed), Classification::Unique(_)));
///
/// let distance = VarId::from_str("distance");
/// assert_eq!(classify(&group, &inputs, &distance), Classification::Echo(100.0));
/// ```
pub fn classify<'g>(group: &'g FormulaGroup, inputs: &Inputs, target: &VarId) -> Classification<'g> {
    let populated = inputs.populated(group);

    if populated.len() > group.max_populated() {
        debug!(
            group = group.name(),
            target = %target,
            populated = populated.len(),
            max = group.max_populated(),
            "input set over-determined"
        );
        return Classification::Conflict;
    }

    let target_value = populated
        .iter()
        .find(|(id, _)| *id == target)
        .map(|(_, value)| *value);

    let mut eligible = Vec::new();
    let mut blocked = false;

    if target_value.is_none() {
        for rule in group.rules().iter().filter(|rule| rule.target() == target) {
            let complete = rule
                .inputs()
                .iter()
                .all(|input| populated.iter().any(|(id, _)| *id == input));
            if !complete {
                continue;
            }

            let has_extra = populated.iter().any(|(id, _)| !rule.requires(id));
            if group.policy() == ConflictPolicy::Exclusive && has_extra {
                blocked = true;
            } else {
                eligible.push(rule);
            }
        }
    }

    match eligible.as_slice() {
        [rule] => Classification::Unique(*rule),
        [] => match target_value {
            Some(value) => Classification::Echo(value),
            None if blocked => {
                debug!(group = group.name(), target = %target, "extra input blocks every rule");
                Classification::Conflict
            }
            None => Classification::Indeterminate,
        },
        rules => {
            debug!(
                group = group.name(),
                target = %target,
                candidates = rules.len(),
                "ambiguous rule selection"
            );
            Classification::Conflict
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use crate::variable::{Domain, Unit, VarSpec};

    fn four_var_group(policy: ConflictPolicy, max: usize) -> FormulaGroup {
        let mut builder = FormulaGroup::builder("g");
        for id in ["a", "b", "c", "d"] {
            builder = builder.var(VarSpec::new(id, id, Unit::Meters, Domain::NonNegative));
        }
        builder
            .rule(Rule::solve("a").from(["b", "c"]).with(|x| x[0] + x[1]))
            .rule(Rule::solve("a").from(["b", "d"]).with(|x| x[0] + x[1]))
            .rule(Rule::solve("a").from(["c", "d"]).with(|x| x[0] + x[1]))
            .policy(policy)
            .max_populated(max)
            .build()
            .unwrap()
    }

    #[test]
    fn test_unique_rule() {
        let group = four_var_group(ConflictPolicy::Exclusive, 3);
        let inputs = Inputs::new().with("b", 1.0).with("c", 2.0);
        match classify(&group, &inputs, &VarId::from_str("a")) {
            Classification::Unique(rule) => assert_eq!(rule.key().as_str(), "g.a(b,c)"),
            other => panic!("expected unique rule, got {:?}", other),
        }
    }

    #[test]
    fn test_exclusive_extra_input_is_conflict() {
        let group = four_var_group(ConflictPolicy::Exclusive, 3);
        let inputs = Inputs::new().with("b", 1.0).with("c", 2.0).with("d", 3.0);
        assert_eq!(
            classify(&group, &inputs, &VarId::from_str("a")),
            Classification::Conflict
        );
    }

    #[test]
    fn test_threshold_multiple_rules_is_conflict() {
        let group = four_var_group(ConflictPolicy::Threshold, 3);
        let inputs = Inputs::new().with("b", 1.0).with("c", 2.0).with("d", 3.0);
        assert_eq!(
            classify(&group, &inputs, &VarId::from_str("a")),
            Classification::Conflict
        );
    }

    #[test]
    fn test_threshold_exceeded() {
        let group = four_var_group(ConflictPolicy::Threshold, 2);
        let inputs = Inputs::new().with("a", 1.0).with("b", 1.0).with("c", 2.0);
        assert_eq!(
            classify(&group, &inputs, &VarId::from_str("a")),
            Classification::Conflict
        );
    }

    #[test]
    fn test_indeterminate_and_echo() {
        let group = four_var_group(ConflictPolicy::Exclusive, 3);
        let inputs = Inputs::new().with("a", 4.0);
        assert_eq!(
            classify(&group, &inputs, &VarId::from_str("a")),
            Classification::Echo(4.0)
        );

        let inputs = Inputs::new().with("b", 4.0);
        assert_eq!(
            classify(&group, &inputs, &VarId::from_str("a")),
            Classification::Indeterminate
        );
    }

    #[test]
    fn test_out_of_domain_counts_as_unset() {
        let group = four_var_group(ConflictPolicy::Exclusive, 3);
        let inputs = Inputs::new().with("b", 1.0).with("c", 2.0).with("d", -3.0);
        assert!(matches!(
            classify(&group, &inputs, &VarId::from_str("a")),
            Classification::Unique(_)
        ));
    }
}
