use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::direction::Direction;

/// Handle of a node inside the [`SearchTree`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A board together with how the search reached it.
///
/// Two nodes are equal when their boards are equal, whatever path produced
/// them. Ordering compares path cost first and is only there so frontier
/// entries with the same `f` still have a total order.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    board: Board,
    parent: Option<NodeId>,
    action: Option<Direction>,
    cost: u32,
}

impl Node {
    pub fn root(board: Board) -> Self {
        Self {
            board,
            parent: None,
            action: None,
            cost: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn action(&self) -> Option<Direction> {
        self.action
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.board.cmp(&other.board))
    }
}

/// Arena owning every node created by one search.
///
/// Parents are stored as [`NodeId`]s, so links only ever point from a child
/// back to an older node.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    /// Creates the arena with `board` as its root.
    pub fn new(board: Board) -> Self {
        Self {
            nodes: vec![Node::root(board)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn insert(&mut self, node: Node) -> NodeId {
        debug_assert!(node.parent.map_or(true, |p| p.0 < self.nodes.len()));
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Children of `id`, one per legal move, each one step costlier than
    /// its parent. The children are not inserted into the arena.
    pub fn expand(&self, id: NodeId) -> Vec<Node> {
        let parent = self.get(id);

        parent
            .board
            .successors()
            .into_iter()
            .map(|(action, board)| Node {
                board,
                parent: Some(id),
                action: Some(action),
                cost: parent.cost + 1,
            })
            .collect()
    }

    /// Moves from the root to `id`.
    ///
    /// A root node yields an empty path when it already is the goal and
    /// `None` otherwise.
    pub fn reconstruct_path(&self, id: NodeId) -> Option<Vec<Direction>> {
        let mut current = self.get(id);
        if current.is_root() {
            return current.board.is_goal().then(Vec::new);
        }

        let mut path = Vec::with_capacity(current.cost as usize);
        while let (Some(parent), Some(action)) = (current.parent, current.action) {
            path.push(action);
            current = self.get(parent);
        }

        path.reverse();
        Some(path)
    }
}
