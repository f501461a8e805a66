use super::state::TreeState;
use crate::gameplay::action::Action;
use crate::Chips;
use crate::N;

/// node id; ids equal positions in the tree's node vector
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Decision,
    Chance,
    Terminal,
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NodeType::Decision => write!(f, "Decision"),
            NodeType::Chance => write!(f, "Chance"),
            NodeType::Terminal => write!(f, "Terminal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalKind {
    Fold,
    Showdown,
}

impl std::fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TerminalKind::Fold => write!(f, "Fold"),
            TerminalKind::Showdown => write!(f, "Showdown"),
        }
    }
}

/// payoff-relevant facts at a leaf. fold leaves are fully settled here;
/// showdown leaves keep winner -1 and zero deltas for downstream equity
/// code to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalData {
    pub kind: TerminalKind,
    pub winner: i32,
    pub pot: Chips,
    pub committed_total: [Chips; N],
    pub chip_delta_if_forced: [Chips; N],
}

impl From<(&TreeState, TerminalKind)> for TerminalData {
    fn from((state, kind): (&TreeState, TerminalKind)) -> Self {
        let spot = state.spot();
        let committed = spot.committed_total();
        match kind {
            TerminalKind::Fold => {
                let winner = if spot.folded()[0] { 1 } else { 0 };
                let mut payout = [0 as Chips; N];
                payout[winner] = spot.pot();
                Self {
                    kind,
                    winner: winner as i32,
                    pot: spot.pot(),
                    committed_total: committed,
                    chip_delta_if_forced: [payout[0] - committed[0], payout[1] - committed[1]],
                }
            }
            TerminalKind::Showdown => Self {
                kind,
                winner: -1,
                pot: spot.pot(),
                committed_total: committed,
                chip_delta_if_forced: [0; N],
            },
        }
    }
}

/// one node of the abstract game DAG. append-only once inserted, except
/// that a parent's children vector fills in as its subtrees are built.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: NodeId,
    pub kind: NodeType,
    pub key: String,
    pub state: TreeState,
    /// Decision nodes: actions[i] leads to children[i]
    pub actions: Vec<Action>,
    pub children: Vec<NodeId>,
    pub terminal: Option<TerminalData>,
}

/// the built abstraction: a node-indexed DAG rooted at root_id, with
/// nodes[i].id == i throughout.
#[derive(Debug, Clone)]
pub struct GameTree {
    pub root_id: NodeId,
    pub nodes: Vec<TreeNode>,
}

impl GameTree {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn count_of(&self, kind: NodeType) -> usize {
        self.nodes.iter().filter(|n| n.kind == kind).count()
    }
    pub fn terminal_count_of(&self, kind: TerminalKind) -> usize {
        self.nodes
            .iter()
            .filter_map(|n| n.terminal)
            .filter(|t| t.kind == kind)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::abstraction::BettingAbstraction;

    #[test]
    fn fold_leaf_settles_in_place() {
        let ref ab = BettingAbstraction::default();
        let root = TreeState::root(ab);
        let fold = root.options(ab)[0];
        let t = root.apply(&fold);
        let data = TerminalData::from((&t.state, t.kind));
        assert!(data.kind == TerminalKind::Fold);
        assert!(data.winner == 1);
        assert!(data.pot == 15);
        assert!(data.chip_delta_if_forced == [-5, 5]);
    }

    #[test]
    fn showdown_leaf_defers_settlement() {
        let ref ab = BettingAbstraction::default();
        let root = TreeState::root(ab);
        let shove = *root.options(ab).last().unwrap();
        let t = root.apply(&shove);
        let call = t.state.options(ab)[1];
        let t = t.state.apply(&call);
        let data = TerminalData::from((&t.state, t.kind));
        assert!(data.kind == TerminalKind::Showdown);
        assert!(data.winner == -1);
        assert!(data.pot == 2000);
        assert!(data.chip_delta_if_forced == [0, 0]);
    }
}
