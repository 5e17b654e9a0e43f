pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

pub use combinations::{binomial, Combinations, Combinations7Choose5};
pub use hand_analysis::ranks;
pub use rank_groups::{kind, two_pair};
pub use straight_info::is_straight;
pub use suit_info::is_flush;

use crate::cards::{Card, Rank};
use crate::hand::{Hand, HandError};
use core::cmp::Ordering;
use log::{debug, trace};
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::Pair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compact, comparable hand strength. Higher is better.
///
/// Equivalent to comparing `(category, tiebreak ranks)` lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u64);

impl Score {
    /// Longest tiebreak list any category produces (two pair: 2 + 5).
    pub const MAX_TIEBREAK: usize = 7;

    // Layout (most significant -> least):
    // [ category (4) | r0 (4) | r1 (4) | ... | r6 (4) | unused (24) | tiebreak len (4) ]
    // Rank values are 0..=12 so a nibble per rank is enough. Each category always
    // produces the same tiebreak length, so the length nibble never decides an order.
    const CAT_SHIFT: u32 = 60;
    const RANK_STRIDE: u32 = 4;
    const NIBBLE: u64 = 0xF;

    /// Pack a category and its tiebreak ranks (most significant first).
    /// Ranks past [`Score::MAX_TIEBREAK`] are ignored.
    pub fn from_parts(category: Category, tiebreak: &[Rank]) -> Self {
        debug_assert!(tiebreak.len() <= Self::MAX_TIEBREAK);
        let len = tiebreak.len().min(Self::MAX_TIEBREAK);
        let mut v: u64 = (category.ordinal() as u64) << Self::CAT_SHIFT;
        for (i, r) in tiebreak.iter().take(len).enumerate() {
            v |= (r.value() as u64) << Self::rank_offset(i);
        }
        Score(v | len as u64)
    }

    const fn rank_offset(i: usize) -> u32 {
        Self::CAT_SHIFT - Self::RANK_STRIDE * (i as u32 + 1)
    }

    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    pub fn category(self) -> Category {
        let ordinal = (self.0 >> Self::CAT_SHIFT) as usize;
        Category::ALL.get(ordinal).copied().unwrap_or(Category::HighCard)
    }

    /// The tiebreak ranks, most significant first.
    pub fn tiebreak(self) -> Vec<Rank> {
        let len = (self.0 & Self::NIBBLE) as usize;
        (0..len)
            .filter_map(|i| Rank::from_value(((self.0 >> Self::rank_offset(i)) & Self::NIBBLE) as u8))
            .collect()
    }
}

/// Detailed evaluation result. `score` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    /// The scored cards, in the order they were enumerated.
    pub best_five: [Card; 5],
    score: Score,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    pub const fn score(&self) -> Score {
        self.score
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category)?;
        for card in &self.best_five {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Keep `best` unless `eval` is strictly better, so ties go to the earliest candidate.
pub(crate) fn stable_max(best: Evaluation, eval: Evaluation) -> Evaluation {
    if eval > best {
        eval
    } else {
        best
    }
}

/// Score exactly five cards.
///
/// ```
/// use poker_wild::cards::Rank;
/// use poker_wild::evaluator::{score, Category};
///
/// let cards = poker_wild::cards::parse_cards("TD TC TH 8C 8S").unwrap();
/// let s = score(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
/// assert_eq!(s.category(), Category::FullHouse);
/// assert_eq!(s.tiebreak(), vec![Rank::Ten, Rank::Eight]);
/// ```
pub fn score(cards: &[Card; 5]) -> Score {
    evaluate_five(cards).score()
}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    // Detectors run from strongest to weakest; HighCard always matches.
    let score = DETECTORS
        .iter()
        .find_map(|detector| detector.score(&analysis))
        .unwrap_or_else(|| Score::from_parts(Category::HighCard, &analysis.ranks));
    analysis.build_evaluation(score)
}

/// Evaluate seven cards: score all 21 five-card subsets and return the best.
/// On equal scores the earliest subset in lexicographic index order wins.
pub fn evaluate_seven(cards: &[Card; 7]) -> Evaluation {
    // The first subset is 0..5; seeding with it leaves the tie rule unchanged.
    let seed = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
    Combinations7Choose5::new()
        .map(|indices| {
            let eval = evaluate_five(&indices.map(|i| cards[i]));
            trace!("subset {indices:?} -> {eval}");
            eval
        })
        .fold(seed, stable_max)
}

/// Best five cards out of seven distinct cards.
///
/// ```
/// use poker_wild::best_hand;
/// use poker_wild::cards::parse_cards;
///
/// let cards = parse_cards("6C 7C 8C 9C TC 5C JS").unwrap();
/// let mut best = best_hand(&cards).unwrap().map(|c| c.to_string());
/// best.sort();
/// assert_eq!(best, ["6C", "7C", "8C", "9C", "TC"]);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<[Card; 5], EvalError> {
    let hand = Hand::from_slice(cards)?;
    let eval = evaluate_seven(hand.as_array());
    debug!("best hand {eval}");
    Ok(eval.best_five)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};

    fn five(s: &str) -> [Card; 5] {
        let cards = parse_cards(s).expect("valid cards");
        cards.as_slice().try_into().expect("five cards")
    }

    fn seven(s: &str) -> [Card; 7] {
        let cards = parse_cards(s).expect("valid cards");
        cards.as_slice().try_into().expect("seven cards")
    }

    #[test]
    fn score_round_trips_category_and_tiebreak() {
        let tb = [Rank::Ace, Rank::King, Rank::Ace, Rank::Ace, Rank::King, Rank::King, Rank::Two];
        let s = Score::from_parts(Category::TwoPair, &tb);
        assert_eq!(s.category(), Category::TwoPair);
        assert_eq!(s.tiebreak(), tb.to_vec());

        let s = Score::from_parts(Category::StraightFlush, &[Rank::Two]);
        assert_eq!(s.category(), Category::StraightFlush);
        assert_eq!(s.tiebreak(), vec![Rank::Two]);
    }

    #[test]
    fn score_orders_category_first() {
        let high = Score::from_parts(Category::Pair, &[Rank::Ace; 6]);
        let low = Score::from_parts(Category::TwoPair, &[Rank::Two; 7]);
        assert!(low > high);
    }

    #[test]
    fn score_orders_tiebreak_lexicographically() {
        let a = score(&five("AH 9H 7H 3H 2H"));
        let b = score(&five("AS 9S 7S 4S 2S"));
        assert!(b > a);
        let c = score(&five("KC QC JC 9C 8C"));
        assert!(a > c);
    }

    #[test]
    fn evaluate_five_categories() {
        let cases = [
            ("AS KS QS JS TS", Category::StraightFlush),
            ("KC KD KH KS 2S", Category::FourOfAKind),
            ("TC TD TH 2S 2H", Category::FullHouse),
            ("AH 9H 7H 3H 2H", Category::Flush),
            ("9C 8D 7H 6S 5C", Category::Straight),
            ("QC QD QH 9S 2C", Category::ThreeOfAKind),
            ("JC JD 9C 9H 2S", Category::TwoPair),
            ("AH AD TS 9C 2D", Category::Pair),
            ("AH KD 7S 5C 2D", Category::HighCard),
        ];
        for (hand, expected) in cases {
            let e = evaluate_five(&five(hand));
            assert_eq!(e.category, expected, "{hand}");
        }
    }

    #[test]
    fn ace_low_is_high_card() {
        let e = evaluate_five(&five("AC 2D 3H 4S 5C"));
        assert_eq!(e.category, Category::HighCard);
        assert_eq!(e.category.ordinal(), 0);
    }

    #[test]
    fn quads_kicker_breaks_ties() {
        let a = evaluate_five(&five("9C 9D 9H 9S AC"));
        let b = evaluate_five(&five("9C 9D 9H 9S KC"));
        assert!(a > b);
    }

    #[test]
    fn evaluate_seven_prefers_straight_flush() {
        let e = evaluate_seven(&seven("6C 7C 8C 9C TC 5C JS"));
        assert_eq!(e.category, Category::StraightFlush);
        assert_eq!(e.score().tiebreak(), vec![Rank::Ten]);
    }

    #[test]
    fn evaluate_seven_keeps_first_of_equal_subsets() {
        // AA KK with either queen as kicker scores the same; index order picks QS.
        let cards = seven("AC AD KC KD QS QH 2D");
        let e = evaluate_seven(&cards);
        assert_eq!(e.category, Category::TwoPair);
        assert_eq!(e.best_five, [cards[0], cards[1], cards[2], cards[3], cards[4]]);
    }

    #[test]
    fn stable_max_keeps_earlier_on_ties() {
        let first = evaluate_five(&five("AS KD 9C 7H 4S"));
        let same = evaluate_five(&five("AH KC 9D 7S 4C"));
        let better = evaluate_five(&five("AH AC 9D 7S 4C"));
        assert_eq!(stable_max(first, same).best_five, first.best_five);
        assert_eq!(stable_max(first, better).best_five, better.best_five);
        assert_eq!(stable_max(better, first).best_five, better.best_five);
    }

    #[test]
    fn best_hand_validates_input() {
        let cards = parse_cards("AS KS QS JS TS 9S").unwrap();
        assert_eq!(best_hand(&cards), Err(EvalError::InvalidHand(HandError::WrongSize(6))));

        let cards = parse_cards("AS KS QS JS TS 9S AS").unwrap();
        assert_eq!(
            best_hand(&cards),
            Err(EvalError::InvalidHand(HandError::DuplicateCard(Card::new(
                Rank::Ace,
                Suit::Spades
            ))))
        );
    }

    #[test]
    fn evaluation_display() {
        let e = evaluate_five(&five("TD TC TH 8C 8S"));
        assert_eq!(e.to_string(), "full house: TD TC TH 8C 8S");
    }
}
