use crate::cards::{parse_cards, parse_wild_cards, Card, Color, WildCard};
use std::collections::HashSet;
use std::str::FromStr;

/// Number of cards the evaluators choose the best five from.
pub const HAND_SIZE: usize = 7;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly seven cards, got {0}")]
    WrongSize(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("more than one {0} joker in hand")]
    DuplicateJoker(Color),
    #[error("hand has no joker to substitute")]
    NoJoker,
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Check that every card appears once and every joker color at most once.
pub fn validate_distinct<I>(cards: I) -> Result<(), HandError>
where
    I: IntoIterator<Item = WildCard>,
{
    let mut seen_cards = HashSet::new();
    let mut seen_jokers = HashSet::new();
    for card in cards {
        match card {
            WildCard::Card(c) => {
                if !seen_cards.insert(c) {
                    return Err(HandError::DuplicateCard(c));
                }
            }
            WildCard::Joker(j) => {
                if !seen_jokers.insert(j.color()) {
                    return Err(HandError::DuplicateJoker(j.color()));
                }
            }
        }
    }
    Ok(())
}

/// Seven distinct concrete cards.
///
/// ```
/// use poker_wild::hand::Hand;
///
/// let hand: Hand = "6C 7C 8C 9C TC 5C JS".parse().unwrap();
/// assert_eq!(hand.as_array().len(), 7);
/// assert!("6C 6C 8C 9C TC 5C JS".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        validate_distinct(cards.iter().copied().map(WildCard::Card))?;
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::WrongSize(slice.len()))?;
        Self::try_new(cards)
    }

    pub fn as_array(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Seven hand elements with at most one black and one red joker.
///
/// ```
/// use poker_wild::hand::WildHand;
///
/// let hand: WildHand = "TD TC 5H 5C 7C ?R ?B".parse().unwrap();
/// assert_eq!(hand.joker_count(), 2);
/// assert!("TD TC 5H 5C 7C ?B ?B".parse::<WildHand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WildHand([WildCard; HAND_SIZE]);

impl WildHand {
    pub fn try_new(cards: [WildCard; HAND_SIZE]) -> Result<Self, HandError> {
        validate_distinct(cards)?;
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[WildCard]) -> Result<Self, HandError> {
        let cards: [WildCard; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::WrongSize(slice.len()))?;
        Self::try_new(cards)
    }

    pub fn as_array(&self) -> &[WildCard; HAND_SIZE] {
        &self.0
    }

    pub fn joker_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_joker()).count()
    }
}

impl From<Hand> for WildHand {
    fn from(hand: Hand) -> Self {
        Self(hand.0.map(WildCard::Card))
    }
}

impl FromStr for WildHand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_wild_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Joker, Rank, Suit};

    #[test]
    fn hand_requires_seven_cards() {
        let cards = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Spades)];
        assert_eq!(Hand::from_slice(&cards), Err(HandError::WrongSize(2)));
        assert!(matches!("AS KS QS JS TS 9S".parse::<Hand>(), Err(HandError::WrongSize(6))));
    }

    #[test]
    fn hand_rejects_duplicates() {
        let err = "AS KS QS JS TS 9S AS".parse::<Hand>().unwrap_err();
        assert_eq!(err, HandError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades)));
    }

    #[test]
    fn hand_rejects_jokers_and_bad_tokens() {
        assert!(matches!("AS KS QS JS TS 9S ?B".parse::<Hand>(), Err(HandError::CardParse(_))));
        assert!(matches!("AS KS QS JS TS 9S 1X".parse::<Hand>(), Err(HandError::CardParse(_))));
    }

    #[test]
    fn wild_hand_limits_jokers_per_color() {
        let hand: WildHand = "TD TC 5H 5C 7C ?R ?B".parse().unwrap();
        assert_eq!(hand.joker_count(), 2);

        let err = "TD TC 5H 5C 7C ?R ?R".parse::<WildHand>().unwrap_err();
        assert_eq!(err, HandError::DuplicateJoker(Color::Red));
    }

    #[test]
    fn wild_hand_from_plain_hand() {
        let hand: Hand = "JD TC TH 7C 7D 7S 7H".parse().unwrap();
        let wild = WildHand::from(hand);
        assert_eq!(wild.joker_count(), 0);
        assert_eq!(wild.as_array()[0], WildCard::Card(Card::new(Rank::Jack, Suit::Diamonds)));
    }

    #[test]
    fn validate_distinct_accepts_one_joker_of_each_color() {
        let cards = [WildCard::Joker(Joker::BLACK), WildCard::Joker(Joker::RED)];
        assert!(validate_distinct(cards).is_ok());
    }
}
