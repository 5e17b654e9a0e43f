use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
///
/// The discriminant is the rank's position in the low-to-high sequence, so
/// `Two` is 0 and `Ace` is 12. Aces are always high: there is no ace-low rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

/// Rank symbols indexed by [`Rank::value`].
const RANK_SYMBOLS: &[u8; 13] = b"23456789TJQKA";

impl Rank {
    pub const ALL: [Rank; 13] = {
        use Rank::*;
        [Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace]
    };

    /// Position in the low-to-high rank sequence, `0..=12`.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rank::value`].
    pub const fn from_value(v: u8) -> Option<Rank> {
        if (v as usize) < Self::ALL.len() {
            Some(Self::ALL[v as usize])
        } else {
            None
        }
    }

    pub const fn to_char(self) -> char {
        RANK_SYMBOLS[self as usize] as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "10" {
            return Ok(Rank::Ten);
        }
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c).map_err(|_| RankParseError::Invalid(s.to_string())),
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let up = c.to_ascii_uppercase();
        RANK_SYMBOLS
            .iter()
            .position(|&b| b as char == up)
            .and_then(|i| Rank::from_value(i as u8))
            .ok_or_else(|| RankParseError::Invalid(c.to_string()))
    }
}

/// Joker and suit colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Black,
    Red,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::Red];

    /// The two suits of this color, in joker substitution order.
    pub const fn suits(self) -> [Suit; 2] {
        match self {
            Color::Black => [Suit::Spades, Suit::Clubs],
            Color::Red => [Suit::Hearts, Suit::Diamonds],
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Color::Black => 'B',
            Color::Red => 'R',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::Red => write!(f, "red"),
        }
    }
}

/// Four suits; order has no hand-strength meaning but is fixed for ordering: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Clubs and spades are black, diamonds and hearts are red.
    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: rank + suit.
///
/// ```
/// use poker_wild::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ten, Suit::Clubs);
/// assert_eq!(card.to_string(), "TC");
/// assert_eq!("tc".parse::<Card>().unwrap(), card);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }
    pub const fn color(self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // Rank is everything but the last char ("T" or "10"); suit is the last char.
        let mut chars = t.chars();
        let suit_ch = chars.next_back().ok_or_else(|| CardParseError::Invalid(s.to_string()))?;
        let rank_str = chars.as_str();
        if rank_str.is_empty() {
            return Err(CardParseError::Invalid(s.to_string()));
        }

        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// A joker: no rank and no suit, only a color.
///
/// A black joker stands in for any club or spade, a red joker for any diamond or heart.
///
/// ```
/// use poker_wild::cards::{Color, Joker};
///
/// let joker: Joker = "?B".parse().unwrap();
/// assert_eq!(joker.color(), Color::Black);
/// assert_eq!(Joker::RED.to_string(), "?R");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Joker {
    color: Color,
}

impl Joker {
    pub const BLACK: Joker = Joker::new(Color::Black);
    pub const RED: Joker = Joker::new(Color::Red);

    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    pub const fn color(self) -> Color {
        self.color
    }
}

impl fmt::Display for Joker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.color.to_char())
    }
}

impl FromStr for Joker {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "?B" => Ok(Joker::BLACK),
            "?R" => Ok(Joker::RED),
            _ => Err(CardParseError::Invalid(s.to_string())),
        }
    }
}

/// One element of a hand that may still contain jokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WildCard {
    Card(Card),
    Joker(Joker),
}

impl WildCard {
    pub const fn card(self) -> Option<Card> {
        match self {
            WildCard::Card(c) => Some(c),
            WildCard::Joker(_) => None,
        }
    }

    pub const fn joker(self) -> Option<Joker> {
        match self {
            WildCard::Joker(j) => Some(j),
            WildCard::Card(_) => None,
        }
    }

    pub const fn is_joker(self) -> bool {
        matches!(self, WildCard::Joker(_))
    }
}

impl From<Card> for WildCard {
    fn from(card: Card) -> Self {
        WildCard::Card(card)
    }
}

impl From<Joker> for WildCard {
    fn from(joker: Joker) -> Self {
        WildCard::Joker(joker)
    }
}

impl fmt::Display for WildCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WildCard::Card(c) => write!(f, "{c}"),
            WildCard::Joker(j) => write!(f, "{j}"),
        }
    }
}

impl FromStr for WildCard {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim_start().starts_with('?') {
            Joker::from_str(s).map(WildCard::Joker)
        } else {
            Card::from_str(s).map(WildCard::Card)
        }
    }
}

fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty())
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use poker_wild::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("AS, KD 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    tokens(input).map(Card::from_str).collect()
}

/// Like [`parse_cards`], but also accepts the joker tokens `?B` and `?R`.
///
/// ```
/// use poker_wild::cards::{parse_wild_cards, Joker, WildCard};
///
/// let cards = parse_wild_cards("TD TC ?R").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[2], WildCard::Joker(Joker::RED));
/// ```
pub fn parse_wild_cards(input: &str) -> Result<Vec<WildCard>, CardParseError> {
    tokens(input).map(WildCard::from_str).collect()
}
