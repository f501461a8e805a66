use super::abstraction::BettingAbstraction;
use super::node::TerminalKind;
use super::state::TreeState;
use crate::cards::street::Street;
use crate::gameplay::action::sort_dedup;
use crate::gameplay::action::Action;
use crate::gameplay::action::ActionType;

/// outcome of one abstract action: the successor state, whether a chance
/// node sits between the rounds, and whether the hand ended.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub state: TreeState,
    pub via_chance: bool,
    pub is_terminal: bool,
    pub kind: TerminalKind,
}

impl TreeState {
    /// the abstract action menu: engine sizing rules, but sizes come from
    /// the abstraction and the per-street aggression cap gates bets and
    /// raises alike
    pub fn options(&self, ab: &BettingAbstraction) -> Vec<Action> {
        let spot = &self.spot;
        let mut out = Vec::new();
        if !spot.is_betting() {
            return out;
        }
        let street = spot.street();
        let player = spot.to_act();
        let stack = spot.stacks()[player];
        let call = spot.to_call();
        let capped = self.raises_this_street >= ab.max_raises_per_street;
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
            if stack > call && !capped {
                for needed in spot.raise_amounts(ab.raises(street)) {
                    out.push(Action {
                        player,
                        kind: ActionType::Raise,
                        amount: needed,
                        to_call_before: call,
                        street,
                    });
                }
                if ab.allow_all_in {
                    out.push(Action {
                        player,
                        kind: ActionType::Raise,
                        amount: stack,
                        to_call_before: call,
                        street,
                    });
                }
            }
        } else {
            out.push(Action {
                player,
                kind: ActionType::Check,
                amount: 0,
                to_call_before: 0,
                street,
            });
            if stack > 0 && !capped {
                for amount in spot.bet_amounts(ab.bets(street)) {
                    out.push(Action {
                        player,
                        kind: ActionType::Bet,
                        amount,
                        to_call_before: 0,
                        street,
                    });
                }
                if ab.allow_all_in {
                    out.push(Action {
                        player,
                        kind: ActionType::Bet,
                        amount: stack,
                        to_call_before: 0,
                        street,
                    });
                }
            }
        }
        sort_dedup(&mut out);
        out
    }

    /// apply an abstract action. callers feed actions straight off the
    /// menu, so no legality re-check happens here.
    pub fn apply(&self, action: &Action) -> Transition {
        let mut next = Transition {
            state: *self,
            via_chance: false,
            is_terminal: false,
            kind: TerminalKind::Showdown,
        };
        match action.kind {
            ActionType::Fold => {
                next.state.spot.fold();
                next.state.spot.terminate();
                next.is_terminal = true;
                next.kind = TerminalKind::Fold;
            }
            ActionType::Check => {
                next.state.spot.check();
                next.close_or_pass();
            }
            ActionType::Call => {
                next.state.spot.call(action.amount);
                if next.state.spot.is_locked() {
                    next.lock();
                } else {
                    next.close_or_pass();
                }
            }
            ActionType::Bet | ActionType::Raise => {
                next.state.spot.raise(action.amount);
                next.state.raises_this_street += 1;
                // an unmatched all-in still owes the opponent a response
                if next.state.spot.stacks()[next.state.spot.opponent()] == 0 {
                    next.lock();
                } else {
                    next.state.spot.pass();
                }
            }
        }
        next
    }
}

impl Transition {
    /// a closed round advances the street behind a chance node, except on
    /// the river where the hand ends outright; an open round passes across
    fn close_or_pass(&mut self) {
        if self.state.spot.is_closed() {
            let street = self.state.spot.street();
            let next = match street {
                Street::Rive => Street::Term,
                other => other.next(),
            };
            self.state.spot.advance(next);
            self.state.raises_this_street = 0;
            if next == Street::Term {
                self.is_terminal = true;
                self.kind = TerminalKind::Showdown;
            } else {
                self.via_chance = true;
            }
        } else {
            self.state.spot.pass();
        }
    }

    /// a live all-in ends the hand at once; no more decisions exist
    fn lock(&mut self) {
        self.state.spot.terminate();
        self.is_terminal = true;
        self.kind = TerminalKind::Showdown;
    }
}
