use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, in descending rank order.
///
/// Example: KAAQA groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from five ranks in any order.
    pub fn from_ranks(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let mut groups: Vec<(Rank, u8)> = Vec::with_capacity(5);
        for rank in sorted {
            match groups.last_mut() {
                Some((last, count)) if *last == rank => *count += 1,
                _ => groups.push((rank, 1)),
            }
        }

        Self { groups }
    }

    /// Returns the rank that occurs exactly `n` times, if any.
    ///
    /// When several ranks share the count the highest one wins; callers that
    /// care about two pairs should use [`RankGroups::two_pair`].
    pub fn kind(&self, n: u8) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    /// Returns both pair ranks, higher first, when the hand has two pairs.
    pub fn two_pair(&self) -> Option<(Rank, Rank)> {
        let mut pairs = self.groups.iter().filter(|(_, count)| *count == 2).map(|(rank, _)| *rank);
        match (pairs.next(), pairs.next()) {
            (Some(high), Some(low)) => Some((high, low)),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

/// The rank occurring exactly `n` times among `ranks`, or `None`.
///
/// ```
/// use poker_wild::cards::Rank::*;
/// use poker_wild::evaluator::kind;
///
/// assert_eq!(kind(3, &[Ten, Ten, Ten, Seven, Seven]), Some(Ten));
/// assert_eq!(kind(4, &[Ten, Ten, Ten, Seven, Seven]), None);
/// ```
pub fn kind(n: u8, ranks: &[Rank; 5]) -> Option<Rank> {
    RankGroups::from_ranks(ranks).kind(n)
}

/// The two pair ranks, higher first, or `None` if the hand does not hold two pairs.
pub fn two_pair(ranks: &[Rank; 5]) -> Option<(Rank, Rank)> {
    RankGroups::from_ranks(ranks).two_pair()
}
