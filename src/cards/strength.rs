use super::rank::Rank;
use super::ranking::Ranking;

/// A hand's strength.
///
/// Totally ordered by a fixed-width base-15 integer: the category occupies
/// the highest digit and exactly five kicker slots follow, zero-padded.
/// Fixed width means any higher category beats any lower one regardless
/// of kickers.
#[derive(Debug, Clone, Copy)]
pub struct Strength {
    value: Ranking,
    score: u32,
}

impl Strength {
    pub fn value(&self) -> Ranking {
        self.value
    }
    pub fn score(&self) -> u32 {
        self.score
    }
}

/// (Ranking, tiebreaks) packing
/// tiebreaks are the defining ranks followed by kickers, high to low
impl From<(Ranking, Vec<Rank>)> for Strength {
    fn from((value, tiebreaks): (Ranking, Vec<Rank>)) -> Self {
        assert!(tiebreaks.len() <= 5);
        let mut score = value.category();
        for slot in 0..5 {
            score = score * 15 + tiebreaks.get(slot).map(Rank::pips).unwrap_or(0);
        }
        Self { value, score }
    }
}

impl From<Strength> for u32 {
    fn from(s: Strength) -> u32 {
        s.score
    }
}

impl PartialEq for Strength {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}
impl Eq for Strength {}
impl PartialOrd for Strength {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Strength {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score.cmp(&other.score)
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_dominates_kickers() {
        let pair = Strength::from((Ranking::OnePair(Rank::Two), vec![Rank::Two]));
        let high = Strength::from((
            Ranking::HighCard(Rank::Ace),
            vec![Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine],
        ));
        assert!(pair > high);
    }

    #[test]
    fn kickers_break_ties() {
        let hi = Strength::from((Ranking::FourOAK(Rank::Ace), vec![Rank::Ace, Rank::King]));
        let lo = Strength::from((Ranking::FourOAK(Rank::Ace), vec![Rank::Ace, Rank::Queen]));
        assert!(hi > lo);
    }

    #[test]
    fn packing_is_fixed_width() {
        let straight = Strength::from((Ranking::Straight(Rank::Five), vec![Rank::Five]));
        assert!(straight.score() == 4 * 15u32.pow(5) + 5 * 15u32.pow(4));
    }
}
