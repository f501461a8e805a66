use crate::cards::street::Street;
use crate::Chips;
use colored::Colorize;

/// the five voluntary action kinds.
/// variant order backs the canonical (kind, amount) sort of an action menu.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActionType {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl ActionType {
    /// wire spelling, shared by the JSON surface and the CLI
    pub fn label(&self) -> &'static str {
        match self {
            ActionType::Fold => "Fold",
            ActionType::Check => "Check",
            ActionType::Call => "Call",
            ActionType::Bet => "Bet",
            ActionType::Raise => "Raise",
        }
    }
    pub fn is_aggro(&self) -> bool {
        matches!(self, ActionType::Bet | ActionType::Raise)
    }
}

/// a record of one offered or applied action.
/// amount semantics vary by kind: zero for Fold/Check, chips put in this
/// turn for Call, chips added on top of this round's commitment for
/// Bet/Raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub player: usize,
    pub kind: ActionType,
    pub amount: Chips,
    pub to_call_before: Chips,
    pub street: Street,
}

impl Action {
    /// legality is judged on the identifying triple only
    pub fn matches(&self, other: &Action) -> bool {
        self.player == other.player && self.kind == other.kind && self.amount == other.amount
    }
}

/// canonical action menu order: sort by (kind, amount), drop exact repeats
pub fn sort_dedup(actions: &mut Vec<Action>) {
    actions.sort_by_key(|a| (a.kind, a.amount));
    actions.dedup_by(|a, b| a.kind == b.kind && a.amount == b.amount);
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            ActionType::Check => write!(f, "{}", "CHECK".cyan()),
            ActionType::Fold => write!(f, "{}", "FOLD".red()),
            ActionType::Call => write!(f, "{}", format!("CALL  {}", self.amount).yellow()),
            ActionType::Bet => write!(f, "{}", format!("BET   {}", self.amount).green()),
            ActionType::Raise => write!(f, "{}", format!("RAISE {}", self.amount).green()),
        }
    }
}
