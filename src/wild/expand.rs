use crate::cards::{Card, Color, Rank, WildCard};
use crate::evaluator::EvalError;
use crate::hand::{validate_distinct, HandError};

/// Cards a single joker can become: 13 ranks times the two suits of its color.
pub const CANDIDATES_PER_JOKER: usize = 26;

/// Every card a joker of `color` may stand in for, rank-major from Two to Ace.
///
/// ```
/// use poker_wild::cards::{Card, Color, Rank, Suit};
/// use poker_wild::wild::joker_candidates;
///
/// let black = joker_candidates(Color::Black);
/// assert_eq!(black[0], Card::new(Rank::Two, Suit::Spades));
/// assert_eq!(black[1], Card::new(Rank::Two, Suit::Clubs));
/// assert!(black.iter().all(|c| c.color() == Color::Black));
/// ```
pub fn joker_candidates(color: Color) -> [Card; CANDIDATES_PER_JOKER] {
    let suits = color.suits();
    core::array::from_fn(|i| Card::new(Rank::ALL[i / suits.len()], suits[i % suits.len()]))
}

/// `hand` with every joker replaced by its lowest substitute: the first
/// hand an [`Expansion`] yields.
pub(crate) fn lowest_substitution(hand: &[WildCard; 5]) -> [Card; 5] {
    hand.map(|element| match element {
        WildCard::Card(card) => card,
        WildCard::Joker(joker) => joker_candidates(joker.color())[0],
    })
}

/// Lazy iterator over the concrete hands a five-element hand can turn into.
///
/// With both jokers present the black one varies slowest, wherever the two sit
/// in the hand. Each substitute lands in its joker's slot; the other cards stay
/// where they are.
#[derive(Debug, Clone)]
pub struct Expansion {
    base: [Card; 5],
    slots: [usize; 2],
    candidates: [[Card; CANDIDATES_PER_JOKER]; 2],
    jokers: usize,
    next: usize,
    total: usize,
}

impl Expansion {
    /// Expansion of `hand` without any precondition checks.
    /// A joker-free hand yields itself once.
    pub(crate) fn over(hand: &[WildCard; 5]) -> Self {
        let mut slots = [0; 2];
        let mut colors = [Color::Black; 2];
        let mut jokers = 0;
        for (i, element) in hand.iter().enumerate() {
            if let WildCard::Joker(joker) = element {
                if jokers < slots.len() {
                    slots[jokers] = i;
                    colors[jokers] = joker.color();
                    jokers += 1;
                }
            }
        }
        if jokers == 2 && colors[0] > colors[1] {
            slots.swap(0, 1);
            colors.swap(0, 1);
        }
        let total = CANDIDATES_PER_JOKER.pow(jokers as u32);
        Self {
            base: lowest_substitution(hand),
            slots,
            candidates: colors.map(joker_candidates),
            jokers,
            next: 0,
            total,
        }
    }

    /// Number of jokers being substituted.
    pub fn jokers(&self) -> usize {
        self.jokers
    }
}

impl Iterator for Expansion {
    type Item = [Card; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let mut hand = self.base;
        let mut rest = self.next;
        for k in (0..self.jokers).rev() {
            hand[self.slots[k]] = self.candidates[k][rest % CANDIDATES_PER_JOKER];
            rest /= CANDIDATES_PER_JOKER;
        }
        self.next += 1;
        Some(hand)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Expansion {}

/// All concrete hands obtained by substituting every joker in `hand`.
///
/// One joker gives 26 hands, a black and a red joker give 26 x 26 = 676.
/// A hand without jokers is rejected with [`HandError::NoJoker`].
///
/// ```
/// use poker_wild::cards::parse_wild_cards;
/// use poker_wild::wild::expand;
///
/// let cards = parse_wild_cards("TD TC 7C ?R ?B").unwrap();
/// let hand = [cards[0], cards[1], cards[2], cards[3], cards[4]];
/// assert_eq!(expand(&hand).unwrap().len(), 676);
/// ```
pub fn expand(hand: &[WildCard; 5]) -> Result<Expansion, EvalError> {
    validate_distinct(*hand)?;
    if !hand.iter().any(|c| c.is_joker()) {
        return Err(HandError::NoJoker.into());
    }
    Ok(Expansion::over(hand))
}
