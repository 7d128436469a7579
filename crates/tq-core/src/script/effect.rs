use tracing::warn;

use crate::state::GameState;

use super::{fields, type_token};

/// A state mutation applied when a choice is taken.
///
/// Parsed once from the raw `Type:Arg...` form. Unrecognized or
/// malformed input lands in [`Effect::Unknown`], which mutates nothing
/// and reports the anomaly.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Add an item to the inventory (idempotent).
    AddItem {
        /// Item name.
        item: String,
    },
    /// Remove an item from the inventory (no-op when absent).
    RemoveItem {
        /// Item name.
        item: String,
    },
    /// Set a variable to a literal string value.
    SetVariable {
        /// Variable name.
        name: String,
        /// Literal value.
        value: String,
    },
    /// Add one to an integer variable (absent or non-numeric reads
    /// as 0).
    IncrementVariable {
        /// Variable name.
        name: String,
    },
    /// Subtract one from an integer variable (absent or non-numeric
    /// reads as 0).
    DecrementVariable {
        /// Variable name.
        name: String,
    },
    /// Craft: when both ingredients are carried, remove both and add
    /// the result. All-or-nothing; a missing ingredient leaves the
    /// inventory untouched.
    CombineItems {
        /// First ingredient.
        item1: String,
        /// Second ingredient.
        item2: String,
        /// Crafted result.
        result: String,
    },
    /// Unrecognized type token or missing arguments; applies no
    /// mutation.
    Unknown(String),
}

impl Effect {
    /// Tokenize a raw effect string. Empty or blank input means no
    /// effect at all.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        let parts = fields(raw);
        let arg = |i: usize| parts.get(i).map(|s| s.to_string());

        let effect = match (type_token(&parts).as_str(), arg(1), arg(2), arg(3)) {
            ("additem", Some(item), _, _) => Self::AddItem { item },
            ("removeitem", Some(item), _, _) => Self::RemoveItem { item },
            ("setvariable", Some(name), Some(value), _) => Self::SetVariable { name, value },
            ("incrementvariable", Some(name), _, _) => Self::IncrementVariable { name },
            ("decrementvariable", Some(name), _, _) => Self::DecrementVariable { name },
            ("combineitems", Some(item1), Some(item2), Some(result)) => Self::CombineItems {
                item1,
                item2,
                result,
            },
            _ => Self::Unknown(raw.to_string()),
        };
        Some(effect)
    }

    /// Apply the effect to the game state.
    ///
    /// Every variant either fully applies or leaves the state
    /// untouched; there is no partial mutation.
    pub fn apply(&self, state: &mut GameState) {
        match self {
            Self::AddItem { item } => {
                state.add_item(item.clone());
            }
            Self::RemoveItem { item } => {
                state.remove_item(item);
            }
            Self::SetVariable { name, value } => {
                state.set_variable(name.clone(), value.clone());
            }
            Self::IncrementVariable { name } => {
                let current = state.variable_int(name, 0);
                state.set_variable(name.clone(), current + 1);
            }
            Self::DecrementVariable { name } => {
                let current = state.variable_int(name, 0);
                state.set_variable(name.clone(), current - 1);
            }
            Self::CombineItems {
                item1,
                item2,
                result,
            } => {
                if state.has_item(item1) && state.has_item(item2) {
                    state.remove_item(item1);
                    state.remove_item(item2);
                    state.add_item(result.clone());
                }
            }
            Self::Unknown(raw) => {
                warn!(effect = %raw, "unknown effect, state unchanged");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use proptest::prelude::*;

    #[test]
    fn empty_effect_parses_to_none() {
        assert_eq!(Effect::parse(""), None);
        assert_eq!(Effect::parse("  "), None);
    }

    #[test]
    fn type_token_is_case_insensitive() {
        assert_eq!(
            Effect::parse("AddItem:Lantern"),
            Some(Effect::AddItem {
                item: "Lantern".to_string()
            })
        );
        assert_eq!(
            Effect::parse("COMBINEITEMS:Stick:Cloth:Torch"),
            Some(Effect::CombineItems {
                item1: "Stick".to_string(),
                item2: "Cloth".to_string(),
                result: "Torch".to_string()
            })
        );
    }

    #[test]
    fn add_item_is_idempotent() {
        let mut state = GameState::new();
        let effect = Effect::parse("additem:Lantern").unwrap();

        effect.apply(&mut state);
        effect.apply(&mut state);

        assert_eq!(state.inventory(), ["Lantern".to_string()]);
    }

    #[test]
    fn remove_item_tolerates_absence() {
        let mut state = GameState::new();
        Effect::parse("removeitem:Ghost").unwrap().apply(&mut state);
        assert!(state.inventory().is_empty());
    }

    #[test]
    fn set_variable_stores_literal_string() {
        let mut state = GameState::new();
        Effect::parse("setvariable:mood:grim")
            .unwrap()
            .apply(&mut state);
        assert_eq!(state.variable("mood"), Some(&Value::from("grim")));
    }

    #[test]
    fn increment_defaults_absent_to_zero() {
        let mut state = GameState::new();
        Effect::parse("incrementvariable:torches")
            .unwrap()
            .apply(&mut state);
        assert_eq!(state.variable("torches"), Some(&Value::Integer(1)));
    }

    #[test]
    fn decrement_defaults_non_numeric_to_zero() {
        let mut state = GameState::new();
        state.set_variable("torches", "plenty");
        Effect::parse("decrementvariable:torches")
            .unwrap()
            .apply(&mut state);
        assert_eq!(state.variable("torches"), Some(&Value::Integer(-1)));
    }

    #[test]
    fn combine_consumes_both_ingredients() {
        let mut state = GameState::new();
        state.add_item("Stick");
        state.add_item("Cloth");

        Effect::parse("combineitems:Stick:Cloth:Torch")
            .unwrap()
            .apply(&mut state);

        assert_eq!(state.inventory(), ["Torch".to_string()]);
    }

    #[test]
    fn combine_with_missing_ingredient_changes_nothing() {
        let mut state = GameState::new();
        state.add_item("Stick");

        Effect::parse("combineitems:Stick:Cloth:Torch")
            .unwrap()
            .apply(&mut state);

        assert_eq!(state.inventory(), ["Stick".to_string()]);
    }

    #[test]
    fn unknown_effect_mutates_nothing() {
        let mut state = GameState::new();
        state.add_item("Key");
        let before = state.clone();

        for raw in ["explode:everything", "additem", "combineitems:a:b", "setvariable:onlyname"] {
            let effect = Effect::parse(raw).unwrap();
            assert!(matches!(effect, Effect::Unknown(_)), "{raw}");
            effect.apply(&mut state);
        }

        assert_eq!(state, before);
    }

    #[test]
    fn surplus_arguments_are_ignored() {
        assert_eq!(
            Effect::parse("additem:Key:and:more"),
            Some(Effect::AddItem {
                item: "Key".to_string()
            })
        );
    }

    proptest! {
        // combineitems is atomic for any inventory contents.
        #[test]
        fn combine_is_atomic(
            inventory in proptest::collection::vec("[a-z]{1,6}", 0..6),
            item1 in "[a-z]{1,6}",
            item2 in "[a-z]{1,6}",
        ) {
            let mut state = GameState::new();
            for entry in &inventory {
                state.add_item(entry.clone());
            }
            let had_both = state.has_item(&item1) && state.has_item(&item2);
            let before = state.clone();

            Effect::CombineItems {
                item1: item1.clone(),
                item2: item2.clone(),
                result: "forged".to_string(),
            }
            .apply(&mut state);

            if had_both {
                prop_assert!(state.has_item("forged"));
                if item1 != item2 {
                    prop_assert!(!state.has_item(&item1));
                    prop_assert!(!state.has_item(&item2));
                }
            } else {
                prop_assert_eq!(state, before);
            }
        }

        // increment then decrement restores any integer-valued
        // variable (and absent variables end at 0).
        #[test]
        fn increment_decrement_round_trip(start in proptest::option::of(-1000i64..1000)) {
            let mut state = GameState::new();
            if let Some(n) = start {
                state.set_variable("v", n);
            }

            Effect::IncrementVariable { name: "v".to_string() }.apply(&mut state);
            Effect::DecrementVariable { name: "v".to_string() }.apply(&mut state);

            assert_eq!(state.variable_int("v", 0), start.unwrap_or(0));
        }
    }
}
