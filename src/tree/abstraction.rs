use crate::cards::street::Street;
use crate::Chips;

/// the discrete betting grid that keeps the game tree finite: pot-fraction
/// bet and raise menus per street, a per-street cap on aggression, and an
/// optional all-in.
#[derive(Debug, Clone)]
pub struct BettingAbstraction {
    pub starting_stack: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// hard cap on aggressive actions (bets and raises) per street
    pub max_raises_per_street: usize,
    pub allow_all_in: bool,
    /// sizes offered when there is nothing to call; indexed preflop..river
    pub bet_sizes_by_street: [Vec<f64>; 4],
    /// sizes offered when facing a bet; indexed preflop..river
    pub raise_sizes_by_street: [Vec<f64>; 4],
}

impl Default for BettingAbstraction {
    fn default() -> Self {
        let sizes = crate::POT_FRACTIONS.to_vec();
        Self {
            starting_stack: crate::STACK,
            small_blind: crate::S_BLIND,
            big_blind: crate::B_BLIND,
            max_raises_per_street: 2,
            allow_all_in: true,
            bet_sizes_by_street: [sizes.clone(), sizes.clone(), sizes.clone(), sizes.clone()],
            raise_sizes_by_street: [sizes.clone(), sizes.clone(), sizes.clone(), sizes],
        }
    }
}

impl BettingAbstraction {
    pub fn bets(&self, street: Street) -> &[f64] {
        let i = street.index().expect("betting street");
        &self.bet_sizes_by_street[i]
    }
    pub fn raises(&self, street: Street) -> &[f64] {
        let i = street.index().expect("betting street");
        &self.raise_sizes_by_street[i]
    }
}
