//! Builder for validated transition tables.
//!
//! Validation accumulates every problem in the table instead of stopping at
//! the first one, so a misconfigured table is reported in a single pass.

use crate::builder::error::{BuildError, TableViolation};
use crate::core::{State, TableEntry, TransitionTable};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<TableViolation>>;

/// Builder for constructing transition tables with a fluent API.
///
/// # Example
///
/// ```
/// use waypoint::builder::TransitionTableBuilder;
/// use waypoint::flight::FlightPhase;
///
/// let table = TransitionTableBuilder::new()
///     .state(FlightPhase::AtGate, [FlightPhase::Taxiing])
///     .state(FlightPhase::Taxiing, [FlightPhase::AtGate])
///     .build()
///     .unwrap();
///
/// assert_eq!(table.len(), 2);
/// ```
pub struct TransitionTableBuilder<S: State> {
    entries: Vec<TableEntry<S>>,
}

impl<S: State> TransitionTableBuilder<S> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Start from rows parsed out of a JSON array of
    /// `{ "state": ..., "allowed": [...] }` objects.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let entries: Vec<TableEntry<S>> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Declare a state and its allowed successors.
    pub fn state<I>(mut self, state: S, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.entries.push(TableEntry {
            state,
            allowed: allowed.into_iter().collect(),
        });
        self
    }

    /// Add a single edge, declaring `from` if it has not been declared yet.
    pub fn allow(mut self, from: S, to: S) -> Self {
        match self.entries.iter_mut().find(|entry| entry.state == from) {
            Some(entry) => entry.allowed.push(to),
            None => self.entries.push(TableEntry {
                state: from,
                allowed: vec![to],
            }),
        }
        self
    }

    /// Validate and build the table.
    pub fn build(self) -> Result<TransitionTable<S>, BuildError> {
        match validate(&self.entries) {
            Validation::Success(_) => Ok(TransitionTable::from_entries(self.entries)),
            Validation::Failure(violations) => Err(BuildError::InvalidTable {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }
}

impl<S: State> Default for TransitionTableBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate<S: State>(entries: &[TableEntry<S>]) -> Check {
    if entries.is_empty() {
        return Validation::fail(TableViolation::NoStates);
    }

    let mut checks: Vec<Check> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let first_declaration = entries
            .iter()
            .position(|other| other.state == entry.state)
            == Some(index);
        checks.push(if first_declaration {
            Validation::success(())
        } else {
            Validation::fail(TableViolation::DuplicateState {
                state: entry.state.name().to_string(),
            })
        });

        for (edge, target) in entry.allowed.iter().enumerate() {
            if !entries.iter().any(|other| other.state == *target) {
                checks.push(Validation::fail(TableViolation::UnknownTarget {
                    from: entry.state.name().to_string(),
                    to: target.name().to_string(),
                }));
            }
            if entry.allowed[..edge].contains(target) {
                checks.push(Validation::fail(TableViolation::DuplicateEdge {
                    from: entry.state.name().to_string(),
                    to: target.name().to_string(),
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum Step {
            Start,
            Middle,
            End,
            Orphan,
        }
    }

    fn violations(result: Result<TransitionTable<Step>, BuildError>) -> Vec<TableViolation> {
        match result {
            Err(BuildError::InvalidTable { violations }) => violations,
            other => panic!("Expected invalid table, got {other:?}"),
        }
    }

    #[test]
    fn builder_requires_states() {
        let result = TransitionTableBuilder::<Step>::new().build();
        assert_eq!(violations(result), vec![TableViolation::NoStates]);
    }

    #[test]
    fn fluent_api_builds_table() {
        let table = TransitionTableBuilder::new()
            .state(Step::Start, [Step::Middle])
            .state(Step::Middle, [Step::End, Step::Start])
            .state(Step::End, [])
            .build()
            .unwrap();

        assert_eq!(table.len(), 3);
        assert!(table.is_allowed(&Step::Middle, &Step::Start));
    }

    #[test]
    fn allow_declares_missing_sources() {
        let table = TransitionTableBuilder::new()
            .allow(Step::Start, Step::End)
            .allow(Step::End, Step::Start)
            .allow(Step::Start, Step::Middle)
            .state(Step::Middle, [])
            .build()
            .unwrap();

        assert_eq!(
            table.allowed(&Step::Start),
            Some(&[Step::End, Step::Middle][..])
        );
    }

    #[test]
    fn build_accumulates_all_violations() {
        let result = TransitionTableBuilder::new()
            .state(Step::Start, [Step::Middle, Step::Orphan, Step::Middle])
            .state(Step::Middle, [Step::Start])
            .state(Step::Start, [])
            .build();

        assert_eq!(
            violations(result),
            vec![
                TableViolation::UnknownTarget {
                    from: "Start".to_string(),
                    to: "Orphan".to_string(),
                },
                TableViolation::DuplicateEdge {
                    from: "Start".to_string(),
                    to: "Middle".to_string(),
                },
                TableViolation::DuplicateState {
                    state: "Start".to_string(),
                },
            ]
        );
    }

    #[test]
    fn invalid_table_message_summarizes_violations() {
        let err = TransitionTableBuilder::new()
            .state(Step::Start, [Step::End])
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid transition table (1 violation(s)): Edge 'Start' -> 'End' points at an undeclared state"
        );
    }

    #[test]
    fn from_json_loads_rows() {
        let json = r#"[
            { "state": "Start", "allowed": ["Middle"] },
            { "state": "Middle", "allowed": ["End"] },
            { "state": "End" }
        ]"#;

        let table = TransitionTableBuilder::<Step>::from_json(json)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(table.len(), 3);
        assert!(table.allowed(&Step::End).unwrap().is_empty());
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let result = TransitionTableBuilder::<Step>::from_json(r#"[{ "state": "Nowhere" }]"#);
        assert!(matches!(result, Err(BuildError::Parse(_))));
    }
}
