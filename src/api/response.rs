use crate::gameplay::action::Action;
use crate::gameplay::settlement::TerminalResult;
use crate::gameplay::state::State;
use crate::Chips;
use crate::N;
use serde::Serialize;

/// wire form of one action record
#[derive(Debug, Serialize)]
pub struct ApiAction {
    pub player: usize,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub amount: Chips,
    pub to_call_before: Chips,
    pub street: u8,
}

impl From<&Action> for ApiAction {
    fn from(action: &Action) -> Self {
        Self {
            player: action.player,
            kind: action.kind.label(),
            amount: action.amount,
            to_call_before: action.to_call_before,
            street: u8::from(action.street),
        }
    }
}

/// wire form of the dealt-hand state; cards travel as deck indices 0..51
#[derive(Debug, Serialize)]
pub struct ApiState {
    pub street: u8,
    pub street_name: String,
    pub pot: Chips,
    pub stacks: [Chips; N],
    pub to_act: usize,
    pub bet_to_call: Chips,
    pub last_bet_size: Chips,
    pub committed_total: [Chips; N],
    pub hole_cards: [[u8; 2]; N],
    pub board: Vec<u8>,
    pub history: Vec<ApiAction>,
    pub is_terminal: bool,
}

impl From<&State> for ApiState {
    fn from(state: &State) -> Self {
        let hole = state.hole_cards();
        Self {
            street: u8::from(state.street()),
            street_name: state.street().to_string(),
            pot: state.pot(),
            stacks: state.stacks(),
            to_act: state.to_act(),
            bet_to_call: state.bet_to_call(),
            last_bet_size: state.last_bet_size(),
            committed_total: state.committed_total(),
            hole_cards: [
                [u8::from(hole[0][0]), u8::from(hole[0][1])],
                [u8::from(hole[1][0]), u8::from(hole[1][1])],
            ],
            board: state.board().iter().map(|c| u8::from(*c)).collect(),
            history: state.history().iter().map(ApiAction::from).collect(),
            is_terminal: state.is_terminal(),
        }
    }
}

/// wire form of a settlement; reason is empty until the hand ends
#[derive(Debug, Serialize)]
pub struct ApiResult {
    pub is_terminal: bool,
    pub winner: i32,
    pub reason: String,
    pub chip_delta: [Chips; N],
}

impl From<&TerminalResult> for ApiResult {
    fn from(result: &TerminalResult) -> Self {
        Self {
            is_terminal: result.is_terminal,
            winner: result.winner,
            reason: result
                .reason
                .map(|r| r.to_string())
                .unwrap_or_default(),
            chip_delta: result.chip_delta,
        }
    }
}
