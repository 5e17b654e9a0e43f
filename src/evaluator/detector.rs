use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, Score};

/// Strategy pattern: each category detector scores the hand if it belongs to its category.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn score(&self, analysis: &HandAnalysis) -> Option<Score>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn score(&self, analysis: &HandAnalysis) -> Option<Score> {
        if !analysis.suit_info.is_flush() {
            return None;
        }
        let top = analysis.straight_info.top_rank?;
        Some(Score::from_parts(self.category(), &[top]))
    }
}

/// Four of a Kind: quad rank, then the kicker
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn score(&self, analysis: &HandAnalysis) -> Option<Score> {
        let quad = analysis.rank_groups.kind(4)?;
        let kicker = analysis.rank_groups.kind(1)?;
        Some(Score::from_parts(self.category(), &[quad, kicker]))
    }
}

/// Full House: trips rank, then pair rank
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn score(&self, analysis: &HandAnalysis) -> Option<Score> {
        let trips = analysis.rank_groups.kind(3)?;
        let pair = analysis.rank_groups.kind(2)?;
        Some(Score::from_parts(self.category(), &[trips, pair]))
    }
}

/// Flush: compared card by card
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn score(&self, analysis: &HandAnalysis) -> Option<Score> {
        analysis.suit_info.is_flush().then(|| Score::from_parts(self.category(), &analysis.ranks))
    }
}

/// Straight: compared by its top card
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn score(&self, analysis: &HandAnalysis) -> Option<Score> {
        let top = analysis.straight_info.top_rank?;
        Some(Score::from_parts(self.category(), &[top]))
    }
}

/// Three of a Kind: trips rank, then every rank high to low
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn score(&self, analysis: &HandAnalysis) -> Option<Score> {
        let trips = analysis.rank_groups.kind(3)?;
        let [r0, r1, r2, r3, r4] = analysis.ranks;
        Some(Score::from_parts(self.category(), &[trips, r0, r1, r2, r3, r4]))
    }
}

/// Two Pair: high pair, low pair, then every rank high to low
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn score(&self, analysis: &HandAnalysis) -> Option<Score> {
        let (high, low) = analysis.rank_groups.two_pair()?;
        let [r0, r1, r2, r3, r4] = analysis.ranks;
        Some(Score::from_parts(self.category(), &[high, low, r0, r1, r2, r3, r4]))
    }
}

/// One Pair: pair rank, then every rank high to low
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn score(&self, analysis: &HandAnalysis) -> Option<Score> {
        let pair = analysis.rank_groups.kind(2)?;
        let [r0, r1, r2, r3, r4] = analysis.ranks;
        Some(Score::from_parts(self.category(), &[pair, r0, r1, r2, r3, r4]))
    }
}

/// High Card: always matches
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn score(&self, analysis: &HandAnalysis) -> Option<Score> {
        Some(Score::from_parts(self.category(), &analysis.ranks))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
