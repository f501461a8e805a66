use super::action::Action;
use super::spot::Spot;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::street::Street;
use crate::Chips;
use crate::N;
use colored::Colorize;

/// the full state of one dealt hand: the shared betting face plus hole
/// cards, board, the action record, and the used-card set.
///
/// created by Engine::new_hand, mutated only through Engine::apply_action,
/// read-only once the street is Terminal.
#[derive(Debug, Clone)]
pub struct State {
    pub(crate) spot: Spot,
    pub(crate) deck: Deck,
    pub(crate) hole_cards: [[Card; 2]; N],
    pub(crate) board: Vec<Card>,
    pub(crate) history: Vec<Action>,
}

impl State {
    pub fn street(&self) -> Street {
        self.spot.street()
    }
    pub fn pot(&self) -> Chips {
        self.spot.pot()
    }
    pub fn stacks(&self) -> [Chips; N] {
        self.spot.stacks()
    }
    pub fn to_act(&self) -> usize {
        self.spot.to_act()
    }
    pub fn bet_to_call(&self) -> Chips {
        self.spot.bet_to_call()
    }
    pub fn last_bet_size(&self) -> Chips {
        self.spot.last_bet_size()
    }
    pub fn current_bet(&self) -> Chips {
        self.spot.current_bet()
    }
    pub fn committed_this_round(&self) -> [Chips; N] {
        self.spot.committed_this_round()
    }
    pub fn committed_total(&self) -> [Chips; N] {
        self.spot.committed_total()
    }
    pub fn folded(&self) -> [bool; N] {
        self.spot.folded()
    }
    pub fn hole_cards(&self) -> [[Card; 2]; N] {
        self.hole_cards
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn history(&self) -> &[Action] {
        &self.history
    }
    pub fn is_terminal(&self) -> bool {
        self.street() == Street::Term
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for p in 0..N {
            let seat = format!(
                "P{} {:>5}{}",
                p,
                self.stacks()[p],
                if self.folded()[p] { " F" } else { "  " },
            );
            write!(f, "{} ", seat.green())?;
        }
        let board = self
            .board
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join("");
        write!(
            f,
            "{}",
            format!("@ {:>5} {} {}", self.pot(), board, self.street()).bright_green()
        )
    }
}
