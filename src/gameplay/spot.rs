use crate::cards::street::Street;
use crate::Chips;
use crate::N;

/// Spot is the betting face shared by the dealt game and its cards-free
/// twin: blinds, stacks, per-round and whole-hand commitments, rotation,
/// and round closure.
///
/// A round is closed once both players have matched commitments this
/// street and both have voluntarily acted since the last aggression;
/// posting a blind does not count as acting, which preserves the big
/// blind's preflop option after a limp. Aggression clears the opponent's
/// acted flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spot {
    street: Street,
    pot: Chips,
    stacks: [Chips; N],
    to_act: usize,
    bet_to_call: Chips,
    last_bet_size: Chips,
    current_bet: Chips,
    committed_this_round: [Chips; N],
    committed_total: [Chips; N],
    folded: [bool; N],
    acted_this_round: [bool; N],
}

impl Spot {
    /// post blinds heads-up: player 0 is SB and acts first preflop
    pub fn open(stack: Chips, sblind: Chips, bblind: Chips) -> Self {
        Self {
            street: Street::Pref,
            pot: sblind + bblind,
            stacks: [stack - sblind, stack - bblind],
            to_act: 0,
            bet_to_call: bblind - sblind,
            last_bet_size: bblind - sblind,
            current_bet: bblind,
            committed_this_round: [sblind, bblind],
            committed_total: [sblind, bblind],
            folded: [false, false],
            acted_this_round: [false, false],
        }
    }

    //

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn stacks(&self) -> [Chips; N] {
        self.stacks
    }
    pub fn to_act(&self) -> usize {
        self.to_act
    }
    pub fn opponent(&self) -> usize {
        1 - self.to_act
    }
    pub fn bet_to_call(&self) -> Chips {
        self.bet_to_call
    }
    pub fn last_bet_size(&self) -> Chips {
        self.last_bet_size
    }
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }
    pub fn committed_this_round(&self) -> [Chips; N] {
        self.committed_this_round
    }
    pub fn committed_total(&self) -> [Chips; N] {
        self.committed_total
    }
    pub fn folded(&self) -> [bool; N] {
        self.folded
    }
    pub fn acted_this_round(&self) -> [bool; N] {
        self.acted_this_round
    }

    //

    /// chips the actor must add to continue
    pub fn to_call(&self) -> Chips {
        std::cmp::max(0, self.current_bet - self.committed_this_round[self.to_act])
    }
    /// smallest legal raise-to target
    pub fn min_raise_to(&self) -> Chips {
        self.current_bet + std::cmp::max(1, self.last_bet_size)
    }
    /// actions are only offered on the four betting streets
    pub fn is_betting(&self) -> bool {
        matches!(
            self.street,
            Street::Pref | Street::Flop | Street::Turn | Street::Rive
        )
    }
    /// either player folded, or commitments match and both have acted
    pub fn is_closed(&self) -> bool {
        self.folded[0]
            || self.folded[1]
            || (self.committed_this_round[0] == self.committed_this_round[1]
                && self.acted_this_round[0]
                && self.acted_this_round[1])
    }
    /// some live player is all-in; once commitments match, passive actions
    /// run the hand out instead of advancing street by street
    pub fn is_locked(&self) -> bool {
        !self.folded[0] && !self.folded[1] && (self.stacks[0] == 0 || self.stacks[1] == 0)
    }

    /// raise amounts (chips added this turn) for the given pot fractions:
    /// target = max(min raise-to, current bet + pot * x), kept only when
    /// it is a real raise the actor can make without going all-in
    pub fn raise_amounts(&self, fractions: &[f64]) -> Vec<Chips> {
        let call = self.to_call();
        let stack = self.stacks[self.to_act];
        let committed = self.committed_this_round[self.to_act];
        fractions
            .iter()
            .map(|x| (self.pot as f64 * x) as Chips)
            .map(|grown| std::cmp::max(self.min_raise_to(), self.current_bet + grown))
            .map(|target| target - committed)
            .filter(|needed| call < *needed && *needed < stack)
            .collect()
    }
    /// opening bet amounts for the given pot fractions, all-in excluded
    pub fn bet_amounts(&self, fractions: &[f64]) -> Vec<Chips> {
        let stack = self.stacks[self.to_act];
        fractions
            .iter()
            .map(|x| (self.pot as f64 * x) as Chips)
            .map(|amount| std::cmp::max(1, amount))
            .filter(|amount| *amount < stack)
            .collect()
    }

    //

    pub fn fold(&mut self) {
        self.folded[self.to_act] = true;
    }
    pub fn check(&mut self) {
        self.acted_this_round[self.to_act] = true;
    }
    pub fn call(&mut self, amount: Chips) {
        let put = std::cmp::min(amount, self.stacks[self.to_act]);
        self.commit(put);
        self.acted_this_round[self.to_act] = true;
    }
    pub fn raise(&mut self, amount: Chips) {
        let actor = self.to_act;
        let put = std::cmp::min(amount, self.stacks[actor]);
        self.commit(put);
        let prior = self.current_bet;
        self.current_bet = std::cmp::max(self.current_bet, self.committed_this_round[actor]);
        self.last_bet_size = std::cmp::max(1, self.current_bet - prior);
        self.acted_this_round[actor] = true;
        self.acted_this_round[1 - actor] = false;
    }

    /// hand the turn to the opponent, refreshing their price to continue
    pub fn pass(&mut self) {
        self.to_act = self.opponent();
        self.bet_to_call = self.to_call();
    }
    /// enter the next street: wipe round state, first action to player 0
    pub fn advance(&mut self, next: Street) {
        self.street = next;
        self.bet_to_call = 0;
        self.current_bet = 0;
        self.last_bet_size = 0;
        self.committed_this_round = [0; N];
        self.acted_this_round = [false; N];
        self.to_act = 0;
    }
    /// absorbing: no further actions will be offered
    pub fn terminate(&mut self) {
        self.advance(Street::Term);
    }

    fn commit(&mut self, chips: Chips) {
        let actor = self.to_act;
        assert!(chips <= self.stacks[actor]);
        self.stacks[actor] -= chips;
        self.committed_this_round[actor] += chips;
        self.committed_total[actor] += chips;
        self.pot += chips;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> Spot {
        Spot::open(crate::STACK, crate::S_BLIND, crate::B_BLIND)
    }

    #[test]
    fn blinds_posted() {
        let spot = open();
        assert!(spot.pot() == 15);
        assert!(spot.stacks() == [995, 990]);
        assert!(spot.committed_this_round() == [5, 10]);
        assert!(spot.current_bet() == 10);
        assert!(spot.bet_to_call() == 5);
        assert!(spot.last_bet_size() == 5);
        assert!(spot.to_act() == 0);
    }

    #[test]
    fn blinds_are_not_voluntary_actions() {
        let spot = open();
        assert!(spot.acted_this_round() == [false, false]);
        assert!(!spot.is_closed());
    }

    #[test]
    fn limp_keeps_round_open() {
        let mut spot = open();
        spot.call(spot.to_call());
        assert!(spot.committed_this_round() == [10, 10]);
        assert!(!spot.is_closed());
        spot.pass();
        assert!(spot.to_act() == 1);
        assert!(spot.to_call() == 0);
    }

    #[test]
    fn option_check_closes_round() {
        let mut spot = open();
        spot.call(spot.to_call());
        spot.pass();
        spot.check();
        assert!(spot.is_closed());
    }

    #[test]
    fn aggression_reopens_round() {
        let mut spot = open();
        spot.call(spot.to_call());
        spot.pass();
        spot.raise(20);
        assert!(spot.current_bet() == 30);
        assert!(spot.last_bet_size() == 20);
        assert!(spot.acted_this_round() == [false, true]);
        assert!(!spot.is_closed());
        spot.pass();
        assert!(spot.bet_to_call() == 20);
    }

    #[test]
    fn min_raise_tracks_last_bet() {
        let mut spot = open();
        assert!(spot.min_raise_to() == 15);
        spot.raise(25); // raise to 30
        spot.pass();
        assert!(spot.min_raise_to() == 50);
    }

    #[test]
    fn preflop_raise_menu() {
        let spot = open();
        // pot 15: targets max(15, 10 + 7) = 17, max(15, 25) = 25, max(15, 40) = 40
        assert!(spot.raise_amounts(&crate::POT_FRACTIONS) == vec![12, 20, 35]);
    }

    #[test]
    fn bet_menu_scales_with_pot() {
        let mut spot = open();
        spot.call(spot.to_call());
        spot.pass();
        spot.check();
        spot.advance(Street::Flop);
        // pot 20 postflop: 10, 20, 40 all live
        assert!(spot.bet_amounts(&crate::POT_FRACTIONS) == vec![10, 20, 40]);
        assert!(spot.to_call() == 0);
    }

    #[test]
    fn advance_resets_round_state() {
        let mut spot = open();
        spot.call(spot.to_call());
        spot.pass();
        spot.check();
        spot.advance(Street::Flop);
        assert!(spot.street() == Street::Flop);
        assert!(spot.current_bet() == 0);
        assert!(spot.bet_to_call() == 0);
        assert!(spot.last_bet_size() == 0);
        assert!(spot.committed_this_round() == [0, 0]);
        assert!(spot.acted_this_round() == [false, false]);
        assert!(spot.to_act() == 0);
        assert!(spot.pot() == 20);
        assert!(spot.committed_total() == [10, 10]);
    }

    #[test]
    fn chips_are_conserved() {
        let mut spot = open();
        spot.raise(100);
        spot.pass();
        spot.call(spot.to_call());
        for p in 0..crate::N {
            assert!(spot.stacks()[p] + spot.committed_total()[p] == crate::STACK);
        }
        assert!(spot.pot() == spot.committed_total()[0] + spot.committed_total()[1]);
    }

    #[test]
    fn all_in_locks_betting() {
        let mut spot = open();
        assert!(!spot.is_locked());
        spot.raise(995);
        spot.pass();
        assert!(spot.is_locked());
        assert!(spot.stacks() == [0, 990]);
        spot.call(spot.to_call());
        assert!(spot.is_locked());
        assert!(spot.stacks() == [0, 0]);
    }
}
