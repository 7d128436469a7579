//! The colon-delimited condition/effect mini-language.
//!
//! Choice gates and side-effects are encoded in scene data as
//! `Type:Arg1:Arg2:...` strings. This module tokenizes them once, at
//! load time, into tagged variants; evaluation and application never
//! re-parse. Unrecognized or malformed input lands in the `Unknown`
//! variants, which keeps the fail-closed (conditions) and no-op
//! (effects) defaults in one place.

mod condition;
mod effect;

pub use condition::Condition;
pub use effect::Effect;

/// Split a raw script string into its colon-delimited fields.
fn fields(raw: &str) -> Vec<&str> {
    raw.split(':').collect()
}

/// Lowercased type token of a raw script string.
fn type_token(parts: &[&str]) -> String {
    parts.first().map_or_else(String::new, |t| t.to_ascii_lowercase())
}
