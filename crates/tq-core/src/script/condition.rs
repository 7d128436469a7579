use crate::state::GameState;
use crate::value::Value;

use super::{fields, type_token};

/// A predicate over the game state gating a choice's availability.
///
/// Parsed once from the raw `Type:Arg...` form. Anything the
/// vocabulary does not cover parses to [`Condition::Unknown`], which
/// always evaluates false — a malformed gate blocks its choice rather
/// than silently passing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Condition {
    /// No gate; the choice is always available.
    #[default]
    Always,
    /// True iff the item is in the inventory.
    HasItem {
        /// Item name.
        item: String,
    },
    /// True iff the item is absent from the inventory.
    NotHasItem {
        /// Item name.
        item: String,
    },
    /// True iff the variable's display form equals the expected value.
    VariableEquals {
        /// Variable name.
        name: String,
        /// Expected value, compared as a string.
        value: String,
    },
    /// True iff both the variable and the threshold parse as integers
    /// and the variable is strictly greater.
    VariableGreater {
        /// Variable name.
        name: String,
        /// Integer threshold, kept raw so a malformed threshold fails
        /// the comparison instead of the parse.
        threshold: String,
    },
    /// True iff both the variable and the threshold parse as integers
    /// and the variable is strictly less.
    VariableLess {
        /// Variable name.
        name: String,
        /// Integer threshold (raw, see [`Condition::VariableGreater`]).
        threshold: String,
    },
    /// Unrecognized type token or missing arguments; evaluates false.
    Unknown(String),
}

impl Condition {
    /// Tokenize a raw condition string. Empty or blank input means no
    /// gate.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Always;
        }

        let parts = fields(raw);
        let arg = |i: usize| parts.get(i).map(|s| s.to_string());

        match (type_token(&parts).as_str(), arg(1), arg(2)) {
            ("hasitem", Some(item), _) => Self::HasItem { item },
            ("nothasitem", Some(item), _) => Self::NotHasItem { item },
            ("variable", Some(name), Some(value)) => Self::VariableEquals { name, value },
            ("variablegreater", Some(name), Some(threshold)) => {
                Self::VariableGreater { name, threshold }
            }
            ("variableless", Some(name), Some(threshold)) => {
                Self::VariableLess { name, threshold }
            }
            _ => Self::Unknown(raw.to_string()),
        }
    }

    /// Evaluate the condition against the current state. Read-only.
    pub fn evaluate(&self, state: &GameState) -> bool {
        match self {
            Self::Always => true,
            Self::HasItem { item } => state.has_item(item),
            Self::NotHasItem { item } => !state.has_item(item),
            Self::VariableEquals { name, value } => state
                .variable(name)
                .is_some_and(|v| v.to_string() == *value),
            Self::VariableGreater { name, threshold } => {
                Self::compare_int(state, name, threshold, |var, t| var > t)
            }
            Self::VariableLess { name, threshold } => {
                Self::compare_int(state, name, threshold, |var, t| var < t)
            }
            Self::Unknown(_) => false,
        }
    }

    fn compare_int(
        state: &GameState,
        name: &str,
        threshold: &str,
        cmp: impl Fn(i64, i64) -> bool,
    ) -> bool {
        let var = state.variable(name).and_then(Value::as_int);
        let threshold = threshold.trim().parse::<i64>().ok();
        match (var, threshold) {
            (Some(var), Some(t)) => cmp(var, t),
            _ => false,
        }
    }
}
