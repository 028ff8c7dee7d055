//! Builder for constructing validated transition tables.

use crate::builder::error::{BuildError, TableViolation};
use crate::core::{Label, Reward, Transition, TransitionTable};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// One row of a transition table before validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule<S: Label, A: Label> {
    pub from: S,
    pub action: A,
    pub to: S,
    pub reward: Reward,
}

/// Builder for transition tables with a fluent API.
///
/// `build` checks that the rules cover every declared (state, action) pair
/// exactly once and only mention declared labels. All violations are
/// accumulated and reported together.
///
/// # Example
///
/// ```rust
/// use clapwave::builder::{BuildError, TableBuilder};
/// use clapwave::label_enum;
///
/// label_enum! {
///     enum Lamp {
///         Off => "Off",
///         On => "On",
///     }
/// }
///
/// label_enum! {
///     enum Press {
///         Toggle => "toggle",
///     }
/// }
///
/// let table = TableBuilder::new()
///     .rule(Lamp::Off, Press::Toggle, Lamp::On, 1)
///     .rule(Lamp::On, Press::Toggle, Lamp::Off, 0)
///     .build()
///     .unwrap();
/// assert_eq!(table.len(), 2);
///
/// let incomplete = TableBuilder::new()
///     .rule(Lamp::Off, Press::Toggle, Lamp::On, 1)
///     .build();
/// assert!(matches!(incomplete, Err(BuildError::InvalidTable { .. })));
/// ```
pub struct TableBuilder<S: Label, A: Label> {
    rules: Vec<Rule<S, A>>,
}

impl<S: Label, A: Label> TableBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add one rule: taking `action` in `from` moves to `to` and earns
    /// `reward`.
    pub fn rule(mut self, from: S, action: A, to: S, reward: Reward) -> Self {
        self.rules.push(Rule {
            from,
            action,
            to,
            reward,
        });
        self
    }

    /// Add multiple rules at once.
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule<S, A>>,
    {
        self.rules.extend(rules);
        self
    }

    /// Build the table.
    /// Returns an error if the rule set is empty or not total.
    pub fn build(self) -> Result<TransitionTable<S, A>, BuildError> {
        if self.rules.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        if let Validation::Failure(errors) = validate(&self.rules) {
            let violations: Vec<TableViolation> = errors.iter().cloned().collect();
            tracing::warn!(
                violations = violations.len(),
                "rejected incomplete transition table"
            );
            return Err(BuildError::InvalidTable { violations });
        }

        let entries: HashMap<(S, A), Transition<S>> = self
            .rules
            .into_iter()
            .map(|rule| {
                (
                    (rule.from, rule.action),
                    Transition {
                        to: rule.to,
                        reward: rule.reward,
                    },
                )
            })
            .collect();

        tracing::debug!(entries = entries.len(), "built transition table");
        Ok(TransitionTable::from_entries(entries))
    }
}

impl<S: Label, A: Label> Default for TableBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Check domain membership and totality, accumulating ALL violations.
fn validate<S: Label, A: Label>(
    rules: &[Rule<S, A>],
) -> Validation<(), NonEmptyVec<TableViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<TableViolation>>> = Vec::new();

    // Labels missing from their `ALL` list, each reported once
    let mut undeclared: Vec<&'static str> = Vec::new();
    for rule in rules {
        let labels = [
            (rule.from.is_declared(), rule.from.name()),
            (rule.action.is_declared(), rule.action.name()),
            (rule.to.is_declared(), rule.to.name()),
        ];
        for (declared, name) in labels {
            if !declared && !undeclared.contains(&name) {
                undeclared.push(name);
            }
        }
    }
    for label in undeclared {
        checks.push(Validation::fail(TableViolation::OutOfDomain {
            label: label.to_string(),
        }));
    }

    let mut counts: HashMap<(S, A), usize> = HashMap::new();
    for rule in rules {
        *counts.entry((rule.from, rule.action)).or_insert(0) += 1;
    }

    for &state in S::ALL {
        for &action in A::ALL {
            let check = match counts.get(&(state, action)).copied().unwrap_or(0) {
                0 => Validation::fail(TableViolation::Missing {
                    state: state.name().to_string(),
                    action: action.name().to_string(),
                }),
                1 => Validation::success(()),
                count => Validation::fail(TableViolation::Duplicate {
                    state: state.name().to_string(),
                    action: action.name().to_string(),
                    count,
                }),
            };
            checks.push(check);
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
