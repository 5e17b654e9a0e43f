//! Joker substitution and the wildcard best-hand search.
//!
//! A black joker stands in for any spade or club, a red joker for any heart or
//! diamond. Jokers are resolved to concrete cards before anything is scored.

pub mod expand;
mod search;

pub use expand::{expand, joker_candidates, Expansion, CANDIDATES_PER_JOKER};
pub use search::{best_wild_hand, evaluate_seven_wild};
