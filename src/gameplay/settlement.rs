use crate::Chips;
use crate::N;

/// how a hand reached its terminal street
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Fold,
    Showdown,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Fold => write!(f, "fold"),
            Outcome::Showdown => write!(f, "showdown"),
        }
    }
}

/// settlement of a finished hand. winner is -1 on a split pot; the odd
/// chip of an odd split goes to player 0. chip deltas always sum to zero.
///
/// requesting settlement of a live hand yields the zeroed sentinel with
/// is_terminal unset; callers check before trusting the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalResult {
    pub is_terminal: bool,
    pub winner: i32,
    pub chip_delta: [Chips; N],
    pub reason: Option<Outcome>,
}

impl TerminalResult {
    pub fn zeroed() -> Self {
        Self {
            is_terminal: false,
            winner: -1,
            chip_delta: [0; N],
            reason: None,
        }
    }
}

impl std::fmt::Display for TerminalResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.reason {
            None => write!(f, "unsettled"),
            Some(reason) => write!(
                f,
                "{} winner={} delta=[{}, {}]",
                reason, self.winner, self.chip_delta[0], self.chip_delta[1]
            ),
        }
    }
}
