use crate::cards::Rank;

/// Top rank of a five-card run, if the ranks form one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Expects ranks sorted high to low. Aces only play high.
    pub fn detect(ranks_desc: &[Rank; 5]) -> Self {
        Self { top_rank: is_straight(ranks_desc).then_some(ranks_desc[0]) }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}

/// True iff each neighbour in the descending rank list is exactly one rank lower.
///
/// ```
/// use poker_wild::cards::Rank::*;
/// use poker_wild::evaluator::is_straight;
///
/// assert!(is_straight(&[Nine, Eight, Seven, Six, Five]));
/// assert!(!is_straight(&[Ace, Five, Four, Three, Two]));
/// ```
pub fn is_straight(ranks_desc: &[Rank; 5]) -> bool {
    ranks_desc.windows(2).all(|w| w[0].value() == w[1].value() + 1)
}
