use super::action::sort_dedup;
use super::action::Action;
use super::action::ActionType;
use super::settlement::Outcome;
use super::settlement::TerminalResult;
use super::spot::Spot;
use super::state::State;
use crate::cards::deck::Deck;
use crate::cards::evaluator::evaluate_7;
use crate::cards::street::Street;
use crate::Chips;
use crate::N;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Engine drives one dealt hand at a time: it deals, offers legal actions
/// under pot-fraction sizing, applies them deterministically, and settles
/// the pot at the terminal street.
///
/// The engine owns the only rng; per-seed determinism holds per instance.
pub struct Engine {
    rng: StdRng,
}

impl Engine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// post blinds and deal two hole cards per player
    pub fn new_hand(&mut self, stack: Chips, sblind: Chips, bblind: Chips) -> State {
        let mut deck = Deck::new();
        let hole_cards = [
            [deck.draw(&mut self.rng), deck.draw(&mut self.rng)],
            [deck.draw(&mut self.rng), deck.draw(&mut self.rng)],
        ];
        State {
            spot: Spot::open(stack, sblind, bblind),
            deck,
            hole_cards,
            board: Vec::with_capacity(5),
            history: Vec::new(),
        }
    }

    /// the action menu for the player to act, sorted by (kind, amount)
    /// with exact repeats removed. empty once betting is over.
    pub fn legal_actions(&self, state: &State) -> Vec<Action> {
        let spot = &state.spot;
        let mut out = Vec::new();
        if !spot.is_betting() {
            return out;
        }
        let player = spot.to_act();
        let street = spot.street();
        let stack = spot.stacks()[player];
        let call = spot.to_call();
        if call > 0 {
            out.push(Action {
                player,
                kind: ActionType::Fold,
                amount: 0,
                to_call_before: call,
                street,
            });
            out.push(Action {
                player,
                kind: ActionType::Call,
                amount: std::cmp::min(call, stack),
                to_call_before: call,
                street,
            });
            if stack > call {
                for needed in spot.raise_amounts(&crate::POT_FRACTIONS) {
                    out.push(Action {
                        player,
                        kind: ActionType::Raise,
                        amount: needed,
                        to_call_before: call,
                        street,
                    });
                }
                out.push(Action {
                    player,
                    kind: ActionType::Raise,
                    amount: stack,
                    to_call_before: call,
                    street,
                });
            }
        } else {
            out.push(Action {
                player,
                kind: ActionType::Check,
                amount: 0,
                to_call_before: 0,
                street,
            });
            if stack > 0 {
                for amount in spot.bet_amounts(&crate::POT_FRACTIONS) {
                    out.push(Action {
                        player,
                        kind: ActionType::Bet,
                        amount,
                        to_call_before: 0,
                        street,
                    });
                }
                out.push(Action {
                    player,
                    kind: ActionType::Bet,
                    amount: stack,
                    to_call_before: 0,
                    street,
                });
            }
        }
        sort_dedup(&mut out);
        out
    }

    /// apply one action. rejects with no mutation unless the action's
    /// (player, kind, amount) triple is on the current menu.
    pub fn apply_action(&mut self, state: &mut State, action: &Action) -> bool {
        if !self.legal_actions(state).iter().any(|a| a.matches(action)) {
            return false;
        }
        state.history.push(*action);
        match action.kind {
            ActionType::Fold => {
                state.spot.fold();
                state.spot.terminate();
            }
            ActionType::Check => {
                state.spot.check();
                self.continue_round(state);
            }
            ActionType::Call => {
                state.spot.call(action.amount);
                self.continue_round(state);
            }
            ActionType::Bet | ActionType::Raise => {
                state.spot.raise(action.amount);
                // an unmatched all-in still owes the opponent a response;
                // the hand only runs out when nobody is left to act
                if state.spot.stacks()[state.spot.opponent()] == 0 {
                    self.runout(state);
                } else {
                    state.spot.pass();
                }
            }
        }
        true
    }

    /// settle a terminal hand. fold pays the survivor; otherwise the
    /// higher 7-card score takes the pot, ties split with the odd chip
    /// to player 0.
    pub fn terminal_payoff(&self, state: &State) -> TerminalResult {
        if !state.is_terminal() {
            return TerminalResult::zeroed();
        }
        let pot = state.pot();
        let folded = state.folded();
        let mut payout = [0 as Chips; N];
        let (winner, reason) = if folded[0] != folded[1] {
            let winner = if folded[0] { 1 } else { 0 };
            payout[winner] = pot;
            (winner as i32, Outcome::Fold)
        } else {
            let s0 = evaluate_7(state.hole_cards[0], &state.board);
            let s1 = evaluate_7(state.hole_cards[1], &state.board);
            if s0 > s1 {
                payout[0] = pot;
                (0, Outcome::Showdown)
            } else if s1 > s0 {
                payout[1] = pot;
                (1, Outcome::Showdown)
            } else {
                payout[0] = pot - pot / 2;
                payout[1] = pot / 2;
                (-1, Outcome::Showdown)
            }
        };
        let committed = state.committed_total();
        TerminalResult {
            is_terminal: true,
            winner,
            chip_delta: [payout[0] - committed[0], payout[1] - committed[1]],
            reason: Some(reason),
        }
    }

    /// uniform choice over the current menu
    pub fn random_legal_action(&mut self, state: &State) -> Option<Action> {
        let legals = self.legal_actions(state);
        match legals.len() {
            0 => None,
            n => Some(legals[self.rng.gen_range(0..n)]),
        }
    }

    //

    /// a passive action either locks an all-in runout, closes the round,
    /// or hands the turn across the table
    fn continue_round(&mut self, state: &mut State) {
        if state.spot.is_locked() {
            self.runout(state);
        } else if state.spot.is_closed() {
            self.advance_street(state);
        } else {
            state.spot.pass();
        }
    }

    fn advance_street(&mut self, state: &mut State) {
        let next = state.spot.street().next();
        state.spot.advance(next);
        for _ in 0..next.n_revealed() {
            let card = state.deck.draw(&mut self.rng);
            state.board.push(card);
        }
        // the river closing out goes straight through showdown to terminal
        if next == Street::Show {
            self.runout(state);
        }
    }

    /// deal whatever board remains and end the hand
    fn runout(&mut self, state: &mut State) {
        while state.board.len() < 5 {
            let card = state.deck.draw(&mut self.rng);
            state.board.push(card);
        }
        state.spot.terminate();
    }
}
