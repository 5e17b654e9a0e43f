use super::expand::{lowest_substitution, Expansion};
use crate::cards::{Card, WildCard};
use crate::evaluator::{evaluate_five, stable_max, Combinations7Choose5, EvalError, Evaluation};
use crate::hand::WildHand;
use log::{debug, trace};

/// Best scoring expansion of one five-element subset, first one on ties.
fn best_in_subset(cards: &[WildCard; 7], indices: [usize; 5]) -> Evaluation {
    let subset = indices.map(|i| cards[i]);
    // The lowest substitution is also the first expansion, so it can seed the fold.
    let seed = evaluate_five(&lowest_substitution(&subset));
    Expansion::over(&subset).map(|hand| evaluate_five(&hand)).fold(seed, stable_max)
}

/// Evaluate seven elements that may include jokers.
///
/// Every 5-subset is expanded over all joker substitutions and every concrete
/// candidate is scored. Subsets are visited in lexicographic index order and
/// candidates in expansion order; the first candidate reaching the top score wins.
/// Without jokers this agrees with [`crate::evaluator::evaluate_seven`].
pub fn evaluate_seven_wild(hand: &WildHand) -> Evaluation {
    let cards = hand.as_array();
    trace!("searching {} joker(s)", hand.joker_count());

    // First candidate of the first subset.
    let first = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    let seed = evaluate_five(&lowest_substitution(&first));

    #[cfg(not(feature = "parallel"))]
    let best = Combinations7Choose5::new()
        .map(|indices| best_in_subset(cards, indices))
        .fold(seed, stable_max);

    #[cfg(feature = "parallel")]
    let best = {
        use rayon::prelude::*;

        let subsets: Vec<[usize; 5]> = Combinations7Choose5::new().collect();
        subsets
            .par_iter()
            .enumerate()
            .map(|(n, &indices)| (n, best_in_subset(cards, indices)))
            .reduce(
                || (usize::MAX, seed),
                |a, b| match b.1.cmp(&a.1) {
                    core::cmp::Ordering::Greater => b,
                    core::cmp::Ordering::Less => a,
                    core::cmp::Ordering::Equal => {
                        if a.0 <= b.0 {
                            a
                        } else {
                            b
                        }
                    }
                },
            )
            .1
    };

    best
}

/// Best five concrete cards out of seven elements, jokers allowed.
///
/// ```
/// use poker_wild::best_wild_hand;
/// use poker_wild::cards::parse_wild_cards;
///
/// let cards = parse_wild_cards("TD TC 5H 5C 7C ?R ?B").unwrap();
/// let mut best = best_wild_hand(&cards).unwrap().map(|c| c.to_string());
/// best.sort();
/// assert_eq!(best, ["7C", "TC", "TD", "TH", "TS"]);
/// ```
pub fn best_wild_hand(cards: &[WildCard]) -> Result<[Card; 5], EvalError> {
    let hand = WildHand::from_slice(cards)?;
    let eval = evaluate_seven_wild(&hand);
    debug!("best wild hand {eval}");
    Ok(eval.best_five)
}
