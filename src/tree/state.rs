use super::abstraction::BettingAbstraction;
use crate::gameplay::spot::Spot;

/// the cards-free twin of the dealt-hand state. it shares the betting
/// face and adds the aggression counter the abstraction caps on; chance
/// is never realized, so equal betting lines collapse to one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeState {
    pub(crate) spot: Spot,
    pub(crate) raises_this_street: usize,
}

impl TreeState {
    /// the state after blinds, before any decision
    pub fn root(ab: &BettingAbstraction) -> Self {
        Self {
            spot: Spot::open(ab.starting_stack, ab.small_blind, ab.big_blind),
            raises_this_street: 0,
        }
    }

    pub fn spot(&self) -> &Spot {
        &self.spot
    }
    pub fn raises_this_street(&self) -> usize {
        self.raises_this_street
    }

    /// deterministic encoding of every field that can distinguish action
    /// menus or subtrees; the memo table hangs off this string
    pub fn key(&self) -> String {
        let s = &self.spot;
        format!(
            "{}|{}|{},{}|{}|{}|{}|{}|{},{}|{},{}|{},{}|{},{}|{}",
            u8::from(s.street()),
            s.pot(),
            s.stacks()[0],
            s.stacks()[1],
            s.to_act(),
            s.bet_to_call(),
            s.last_bet_size(),
            s.current_bet(),
            s.committed_this_round()[0],
            s.committed_this_round()[1],
            s.committed_total()[0],
            s.committed_total()[1],
            s.folded()[0] as u8,
            s.folded()[1] as u8,
            s.acted_this_round()[0] as u8,
            s.acted_this_round()[1] as u8,
            self.raises_this_street,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_posts_blinds_without_acting() {
        let root = TreeState::root(&BettingAbstraction::default());
        assert!(root.spot().pot() == 15);
        assert!(root.spot().to_act() == 0);
        assert!(root.spot().acted_this_round() == [false, false]);
        assert!(root.raises_this_street() == 0);
    }

    #[test]
    fn key_encodes_every_field() {
        let root = TreeState::root(&BettingAbstraction::default());
        assert!(root.key() == "0|15|995,990|0|5|5|10|5,10|5,10|0,0|0,0|0");
    }

    #[test]
    fn key_distinguishes_raise_counts() {
        let a = TreeState::root(&BettingAbstraction::default());
        let mut b = a;
        b.raises_this_street = 1;
        assert!(a.key() != b.key());
    }
}
