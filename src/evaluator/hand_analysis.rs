use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Evaluation, Score};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub cards: [Card; 5],
    /// Ranks sorted high to low, duplicates kept.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let ranks = ranks(cards);
        let rank_groups = RankGroups::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { cards: *cards, ranks, rank_groups, suit_info, straight_info }
    }

    /// Attach a score to the analyzed cards. The cards keep their input order.
    pub fn build_evaluation(&self, score: Score) -> Evaluation {
        Evaluation { category: score.category(), best_five: self.cards, score }
    }
}

/// The five ranks of a hand, highest first.
///
/// ```
/// use poker_wild::cards::{parse_cards, Rank::*};
/// use poker_wild::evaluator::ranks;
///
/// let cards = parse_cards("7C TD 7H AS 2C").unwrap();
/// let hand = [cards[0], cards[1], cards[2], cards[3], cards[4]];
/// assert_eq!(ranks(&hand), [Ace, Ten, Seven, Seven, Two]);
/// ```
pub fn ranks(cards: &[Card; 5]) -> [Rank; 5] {
    let mut ranks = cards.map(Card::rank);
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks
}
