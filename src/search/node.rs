use crate::game::GameState;

use super::EPSILON;

/// Index of a node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A visited state of the search tree.
#[derive(Debug, Clone)]
pub struct Node<G: GameState> {
    pub state: G,
    /// `None` for the root
    pub parent: Option<NodeId>,
    /// The move that led from the parent to this node
    pub mv: Option<G::Move>,
    /// In expansion order
    pub children: Vec<NodeId>,
    /// Sum of the propagated results, may be negative
    pub wins: f64,
    pub visits: u32,
}

impl<G: GameState> Node<G> {
    pub fn new(state: G, parent: Option<NodeId>, mv: Option<G::Move>) -> Self {
        Self {
            state,
            parent,
            mv,
            children: Vec::new(),
            wins: 0.0,
            visits: 0,
        }
    }

    /// Average result, zero for unvisited nodes.
    pub fn mean(&self) -> f64 {
        self.wins / (self.visits as f64 + EPSILON)
    }

    /// UCT score of this node as a child of a parent with `parent_visits`.
    ///
    /// `mean + c * sqrt(ln(parent_visits + 1) / visits)`
    pub fn uct(&self, parent_visits: u32, exploration: f64) -> f64 {
        let visits = self.visits as f64 + EPSILON;
        self.mean() + exploration * ((parent_visits as f64 + 1.0).ln() / visits).sqrt()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::TicTacToe;

    #[test]
    fn node_mean() {
        let mut node = Node::new(TicTacToe::new(), None, None);
        assert_eq!(node.mean(), 0.0);

        node.visits = 4;
        node.wins = -2.0;
        assert!((node.mean() + 0.5).abs() < 1e-6);
    }

    #[test]
    fn node_uct() {
        let mut node = Node::new(TicTacToe::new(), Some(NodeId::ROOT), Some(0));
        node.visits = 10;
        node.wins = 5.0;

        // 0.5 + 1.41 * sqrt(ln(101) / 10) = 0.5 + 1.41 * 0.6793...
        let uct = node.uct(100, 1.41);
        assert!((uct - 1.457_879).abs() < 1e-3, "{uct}");

        // Without exploration only the mean counts
        assert!((node.uct(100, 0.0) - node.mean()).abs() < 1e-12);

        // Unvisited nodes are strongly preferred
        let fresh = Node::new(TicTacToe::new(), Some(NodeId::ROOT), Some(1));
        assert!(fresh.uct(100, 1.41) > 1000.0);
        assert_eq!(fresh.uct(0, 1.41), 0.0);
    }
}
