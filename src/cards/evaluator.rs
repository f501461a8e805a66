use super::card::Card;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use super::suit::Suit;

type Masks = u16;
type Count = u8;

/// score any five cards
pub fn evaluate_5(cards: [Card; 5]) -> Strength {
    Strength::from(Evaluator::from(cards))
}

/// score seven cards as the best of their C(7,5) = 21 five-card subsets
pub fn evaluate_7(hole: [Card; 2], board: &[Card]) -> Strength {
    assert!(board.len() == 5);
    let all = [
        hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
    ];
    let mut best: Option<Strength> = None;
    for a in 0..7 {
        for b in a + 1..7 {
            let mut five = [all[0]; 5];
            let mut next = 0;
            for (i, card) in all.iter().enumerate() {
                if i != a && i != b {
                    five[next] = *card;
                    next += 1;
                }
            }
            let strength = evaluate_5(five);
            best = match best {
                Some(seen) if seen >= strength => Some(seen),
                _ => Some(strength),
            };
        }
    }
    best.expect("seven cards yield at least one subset")
}

/// A lazy evaluator for a five-card hand's strength.
///
/// Compact rank/suit tallies let every category check run on bitwise
/// operations and small array scans. The search walks categories from
/// strongest to weakest and stops at the first hit.
pub struct Evaluator {
    rank_masks: Masks,       // which ranks are in the hand, neglecting suit
    suit_masks: [Masks; 4],  // which ranks are in the hand, grouped by suit
    suit_count: [Count; 4],  // how many of suit (i) are in the hand
    rank_count: [Count; 13], // how many of rank (i) are in the hand
}

impl From<[Card; 5]> for Evaluator {
    fn from(cards: [Card; 5]) -> Self {
        Self {
            rank_masks: Self::rank_masks(&cards),
            suit_masks: Self::suit_masks(&cards),
            suit_count: Self::suit_count(&cards),
            rank_count: Self::rank_count(&cards),
        }
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_value();
        let kicks = evaluator.tiebreaks(&value);
        Self::from((value, kicks))
    }
}

impl Evaluator {
    fn rank_count(cards: &[Card]) -> [Count; 13] {
        cards
            .iter()
            .map(|c| c.rank())
            .map(|r| r as usize)
            .fold([0; 13], |mut counts, r| {
                counts[r] += 1;
                counts
            })
    }
    fn suit_count(cards: &[Card]) -> [Count; 4] {
        cards
            .iter()
            .map(|c| c.suit())
            .map(|s| s as usize)
            .fold([0; 4], |mut counts, s| {
                counts[s] += 1;
                counts
            })
    }
    fn suit_masks(cards: &[Card]) -> [Masks; 4] {
        cards
            .iter()
            .map(|c| (c.suit(), c.rank()))
            .map(|(s, r)| (s as usize, u16::from(r)))
            .fold([0; 4], |mut suits, (s, r)| {
                suits[s] |= r;
                suits
            })
    }
    fn rank_masks(cards: &[Card]) -> Masks {
        cards
            .iter()
            .map(|c| c.rank())
            .map(u16::from)
            .fold(0, |acc, r| acc | r)
    }

    ///

    fn find_value(&self) -> Ranking {
        self.find_flush()
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("five cards always carry a high card")
    }

    /// defining ranks followed by kickers, high to low, per category
    fn tiebreaks(&self, value: &Ranking) -> Vec<Rank> {
        match value {
            Ranking::Straight(hi) | Ranking::StraightFlush(hi) => vec![*hi],
            Ranking::FullHouse(trip, pair) => vec![*trip, *pair],
            Ranking::Flush(_) | Ranking::HighCard(_) => self.ranks_desc(),
            Ranking::FourOAK(quad) => std::iter::once(*quad)
                .chain(self.singles_desc())
                .collect(),
            Ranking::ThreeOAK(trip) => std::iter::once(*trip)
                .chain(self.singles_desc().into_iter().take(2))
                .collect(),
            Ranking::TwoPair(hi, lo) => vec![*hi, *lo]
                .into_iter()
                .chain(self.singles_desc().into_iter().take(1))
                .collect(),
            Ranking::OnePair(pair) => std::iter::once(*pair)
                .chain(self.singles_desc().into_iter().take(3))
                .collect(),
        }
    }

    ///

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1).map(Ranking::HighCard)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).and_then(|hi| {
            self.find_rank_of_n_oak_below(2, hi as usize)
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|three| {
            self.find_rank_of_n_oak_below(2, three as usize)
                .map(|two| Ranking::FullHouse(three, two))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.rank_masks)
            .map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            self.find_rank_of_straight(self.suit_masks[suit as usize])
                .map(Ranking::StraightFlush)
                .or_else(|| {
                    let mask = self.suit_masks[suit as usize];
                    Some(Ranking::Flush(Rank::from(mask)))
                })
        })
    }

    ///

    fn find_rank_of_straight(&self, ranks: Masks) -> Option<Rank> {
        const WHEEL: Masks = 0b1_0000_0000_1111;
        let mut mask = ranks;
        mask &= mask << 1;
        mask &= mask << 1;
        mask &= mask << 1;
        mask &= mask << 1;
        if mask > 0 {
            Some(Rank::from(mask))
        } else if WHEEL == (WHEEL & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        self.suit_count
            .iter()
            .position(|&n| n >= 5)
            .map(|i| Suit::from(i as u8))
    }
    fn find_rank_of_n_oak_below(&self, n: Count, high: usize) -> Option<Rank> {
        self.rank_count
            .iter()
            .take(high)
            .rev()
            .position(|&count| count >= n)
            .map(|i| high - i - 1)
            .map(|r| Rank::from(r as u8))
    }
    fn find_rank_of_n_oak(&self, n: Count) -> Option<Rank> {
        self.find_rank_of_n_oak_below(n, 13)
    }

    /// all five ranks high to low, with multiplicity
    fn ranks_desc(&self) -> Vec<Rank> {
        self.rank_count
            .iter()
            .enumerate()
            .rev()
            .flat_map(|(r, &count)| std::iter::repeat(Rank::from(r as u8)).take(count as usize))
            .collect()
    }
    /// unpaired ranks high to low
    fn singles_desc(&self) -> Vec<Rank> {
        self.rank_count
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, &count)| count == 1)
            .map(|(r, _)| Rank::from(r as u8))
            .collect()
    }
}
