use super::abstraction::BettingAbstraction;
use super::node::GameTree;
use super::node::NodeId;
use super::node::NodeType;
use super::node::TerminalData;
use super::node::TerminalKind;
use super::node::TreeNode;
use super::state::TreeState;
use crate::cards::street::Street;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("tree build exceeded {0} nodes; refine the abstraction rather than raising the limit")]
    Budget(usize),
}

/// memoised recursive expansion of the abstract betting space into a
/// node-indexed DAG of Decision, Chance, and Terminal nodes.
///
/// every reachable state is keyed by its full field encoding; a revisit
/// returns the cached id, so betting lines that converge on the same
/// state share one subtree. exceeding the node budget is the one fatal
/// error in the crate.
pub struct TreeBuilder {
    abstraction: BettingAbstraction,
}

impl TreeBuilder {
    pub fn new(abstraction: BettingAbstraction) -> Self {
        Self { abstraction }
    }

    pub fn abstraction(&self) -> &BettingAbstraction {
        &self.abstraction
    }

    pub fn build(&self, max_nodes: usize) -> Result<GameTree, TreeError> {
        let mut build = Build {
            abstraction: &self.abstraction,
            max_nodes,
            nodes: Vec::new(),
            memo: HashMap::new(),
        };
        let root_id = build.decision(TreeState::root(&self.abstraction))?;
        log::debug!("built tree of {} nodes", build.nodes.len());
        Ok(GameTree {
            root_id,
            nodes: build.nodes,
        })
    }
}

struct Build<'a> {
    abstraction: &'a BettingAbstraction,
    max_nodes: usize,
    nodes: Vec<TreeNode>,
    memo: HashMap<String, NodeId>,
}

impl Build<'_> {
    /// parents are appended before their children; the id handed back is
    /// the node's index for the life of the tree
    fn insert(
        &mut self,
        key: String,
        kind: NodeType,
        state: TreeState,
        terminal: Option<TerminalData>,
    ) -> Result<NodeId, TreeError> {
        if self.nodes.len() >= self.max_nodes {
            return Err(TreeError::Budget(self.max_nodes));
        }
        let id = self.nodes.len();
        self.memo.insert(key.clone(), id);
        self.nodes.push(TreeNode {
            id,
            kind,
            key,
            state,
            actions: Vec::new(),
            children: Vec::new(),
            terminal,
        });
        Ok(id)
    }

    fn terminal(&mut self, state: TreeState, kind: TerminalKind) -> Result<NodeId, TreeError> {
        let key = match kind {
            TerminalKind::Fold => format!("T:F:{}", state.key()),
            TerminalKind::Showdown => format!("T:S:{}", state.key()),
        };
        if let Some(&id) = self.memo.get(&key) {
            return Ok(id);
        }
        let data = TerminalData::from((&state, kind));
        self.insert(key, NodeType::Terminal, state, Some(data))
    }

    fn chance(&mut self, state: TreeState) -> Result<NodeId, TreeError> {
        let key = format!("C:{}", state.key());
        if let Some(&id) = self.memo.get(&key) {
            return Ok(id);
        }
        let id = self.insert(key, NodeType::Chance, state, None)?;
        let child = self.decision(state)?;
        self.nodes[id].children.push(child);
        Ok(id)
    }

    fn decision(&mut self, state: TreeState) -> Result<NodeId, TreeError> {
        if state.spot().street() == Street::Term {
            let folded = state.spot().folded();
            let kind = if folded[0] || folded[1] {
                TerminalKind::Fold
            } else {
                TerminalKind::Showdown
            };
            return self.terminal(state, kind);
        }
        let key = format!("D:{}", state.key());
        if let Some(&id) = self.memo.get(&key) {
            return Ok(id);
        }
        let id = self.insert(key, NodeType::Decision, state, None)?;
        for action in state.options(self.abstraction) {
            let transition = state.apply(&action);
            let child = if transition.is_terminal {
                self.terminal(transition.state, transition.kind)?
            } else if transition.via_chance {
                self.chance(transition.state)?
            } else {
                self.decision(transition.state)?
            };
            self.nodes[id].actions.push(action);
            self.nodes[id].children.push(child);
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// the first solver grid: two raises per street, tapering sizes
    fn solver_abstraction() -> BettingAbstraction {
        BettingAbstraction {
            max_raises_per_street: 2,
            bet_sizes_by_street: [
                vec![0.5, 1.0],
                vec![0.5, 1.0],
                vec![1.0],
                vec![1.0],
            ],
            raise_sizes_by_street: [
                vec![0.5, 1.0],
                vec![0.5, 1.0],
                vec![1.0],
                vec![1.0],
            ],
            ..BettingAbstraction::default()
        }
    }

    #[test]
    fn smoke_build() {
        let tree = TreeBuilder::new(solver_abstraction())
            .build(300_000)
            .expect("within budget");
        assert!(tree.root_id == 0);
        assert!(tree.node_count() > 0);
        assert!(tree.count_of(NodeType::Decision) > 0);
        assert!(tree.count_of(NodeType::Chance) > 0);
        assert!(tree.count_of(NodeType::Terminal) > 0);
        assert!(tree.terminal_count_of(TerminalKind::Fold) > 0);
        assert!(tree.terminal_count_of(TerminalKind::Showdown) > 0);
    }

    #[test]
    fn ids_equal_indices() {
        let tree = TreeBuilder::new(solver_abstraction())
            .build(300_000)
            .unwrap();
        for (i, node) in tree.nodes.iter().enumerate() {
            assert!(node.id == i);
            for &child in node.children.iter() {
                assert!(child < tree.node_count());
            }
        }
    }

    #[test]
    fn node_arity_by_kind() {
        let tree = TreeBuilder::new(solver_abstraction())
            .build(300_000)
            .unwrap();
        for node in tree.nodes.iter() {
            match node.kind {
                NodeType::Decision => {
                    assert!(!node.actions.is_empty());
                    assert!(node.actions.len() == node.children.len());
                    assert!(node.terminal.is_none());
                }
                NodeType::Chance => {
                    assert!(node.actions.is_empty());
                    assert!(node.children.len() == 1);
                    assert!(node.terminal.is_none());
                }
                NodeType::Terminal => {
                    assert!(node.actions.is_empty());
                    assert!(node.children.is_empty());
                    assert!(node.terminal.is_some());
                }
            }
        }
    }

    #[test]
    fn memoisation_is_deterministic() {
        let builder = TreeBuilder::new(solver_abstraction());
        let one = builder.build(300_000).unwrap();
        let two = builder.build(300_000).unwrap();
        assert!(one.node_count() == two.node_count());
        for (a, b) in one.nodes.iter().zip(two.nodes.iter()) {
            assert!(a.key == b.key);
            assert!(a.kind == b.kind);
            assert!(a.children == b.children);
        }
    }

    #[test]
    fn memoisation_collapses_transpositions() {
        let tree = TreeBuilder::new(solver_abstraction())
            .build(300_000)
            .unwrap();
        let mut fanin = vec![0usize; tree.node_count()];
        for node in tree.nodes.iter() {
            for &child in node.children.iter() {
                fanin[child] += 1;
            }
        }
        // a DAG, not a tree: some node is reached along several lines
        assert!(fanin.iter().any(|&n| n > 1));
    }

    #[test]
    fn keys_are_unique() {
        let tree = TreeBuilder::new(solver_abstraction())
            .build(300_000)
            .unwrap();
        let mut keys = tree.nodes.iter().map(|n| n.key.as_str()).collect::<Vec<_>>();
        keys.sort();
        keys.dedup();
        assert!(keys.len() == tree.node_count());
    }

    #[test]
    fn budget_overflow_is_fatal() {
        let result = TreeBuilder::new(solver_abstraction()).build(10);
        assert!(matches!(result, Err(TreeError::Budget(10))));
    }

    #[test]
    fn root_is_a_preflop_decision() {
        let tree = TreeBuilder::new(solver_abstraction())
            .build(300_000)
            .unwrap();
        let root = &tree.nodes[tree.root_id];
        assert!(root.kind == NodeType::Decision);
        assert!(root.key.starts_with("D:0|15|"));
    }
}
