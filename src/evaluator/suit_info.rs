use crate::cards::{Card, Suit};

/// The suit shared by all five cards, if there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        Self { flush_suit: is_flush(cards).then(|| cards[0].suit()) }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}

/// True iff all five cards share one suit. Sharing a color is not enough.
///
/// ```
/// use poker_wild::cards::parse_cards;
/// use poker_wild::evaluator::is_flush;
///
/// let hearts = parse_cards("2H 7H 9H JH KH").unwrap();
/// assert!(is_flush(&[hearts[0], hearts[1], hearts[2], hearts[3], hearts[4]]));
/// ```
pub fn is_flush(cards: &[Card; 5]) -> bool {
    let [first, rest @ ..] = cards;
    rest.iter().all(|c| c.suit() == first.suit())
}
