use std::ops::Index;

use crate::game::{GameState, Player};
use crate::util::argmax;

use super::{Node, NodeId, Perspective};

/// Search tree with all nodes stored in a single arena.
///
/// Children are owned through their index, parents are only referenced by
/// index. Nodes are never removed, the arena is dropped as a whole.
#[derive(Debug, Clone)]
pub struct Tree<G: GameState> {
    nodes: Vec<Node<G>>,
}

impl<G: GameState> Tree<G> {
    pub fn new(root: G) -> Self {
        Self {
            nodes: vec![Node::new(root, None, None)],
        }
    }

    pub fn root(&self) -> &Node<G> {
        &self.nodes[NodeId::ROOT.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<G>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node<G>> + '_ {
        self[id].children.iter().map(|&c| &self[c])
    }

    /// A node is fully expanded if every legal move has a child.
    pub fn is_fully_expanded(&self, id: NodeId) -> bool {
        self[id].children.len() >= self[id].state.legal_moves().len()
    }

    /// Legal moves that have not been expanded yet, in move order.
    pub fn unexplored(&self, id: NodeId) -> Vec<G::Move> {
        let mut moves = self[id].state.legal_moves();
        moves.retain(|&mv| !self.children(id).any(|c| c.mv == Some(mv)));
        moves
    }

    /// Appends the state reached by `mv` as new child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, mv: G::Move) -> NodeId {
        let state = self[parent].state.apply(mv);
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(state, Some(parent), Some(mv)));
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Child with the highest UCT score, the first one on ties.
    pub fn best_child(&self, id: NodeId, exploration: f64) -> Option<NodeId> {
        let parent = &self[id];
        argmax(
            self.children(id)
                .map(|child| child.uct(parent.visits, exploration)),
        )
        .map(|i| parent.children[i])
    }

    /// Adds a visit and the `result` to every node from `id` up to the root.
    ///
    /// `result` is seen from the maximizing player.
    pub fn backpropagate(&mut self, id: NodeId, result: f64, perspective: Perspective) {
        let mut current = Some(id);
        while let Some(id) = current {
            let node = &mut self.nodes[id.index()];
            let to_move_is_max = node.state.current_player().is_max();
            let credit_max = match perspective {
                Perspective::Mover => !to_move_is_max,
                Perspective::ToMove => to_move_is_max,
            };
            node.visits += 1;
            node.wins += if credit_max { result } else { -result };
            current = node.parent;
        }
    }

    /// Number of edges between the node and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self[id].parent;
        while let Some(id) = current {
            depth += 1;
            current = self[id].parent;
        }
        depth
    }
}

impl<G: GameState> Index<NodeId> for Tree<G> {
    type Output = Node<G>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}
