//! poker-wild: best five-card hand out of seven, with optional jokers
//!
//! Goals:
//! - Deterministic evaluation; equal scores resolve to the first candidate found
//! - Black and red jokers that substitute any card of their color
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: pick the best five cards
//! ```
//! use poker_wild::cards::{parse_cards, parse_wild_cards};
//! use poker_wild::{best_hand, best_wild_hand};
//!
//! let cards = parse_cards("TD TC TH 7C 7D 8C 8S").unwrap();
//! let mut best = best_hand(&cards).unwrap().map(|c| c.to_string());
//! best.sort();
//! assert_eq!(best, ["8C", "8S", "TC", "TD", "TH"]);
//!
//! let cards = parse_wild_cards("6C 7C 8C 9C TC 5C ?B").unwrap();
//! let mut best = best_wild_hand(&cards).unwrap().map(|c| c.to_string());
//! best.sort();
//! assert_eq!(best, ["7C", "8C", "9C", "JC", "TC"]);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin best-hand -- TD TC 5H 5C 7C ?R ?B
//! ```

pub mod cards;
pub mod evaluator;
pub mod hand;
pub mod wild;

pub use evaluator::best_hand;
pub use wild::best_wild_hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
