//! Graph search over boards.
//!
//! All engines share the same machinery: nodes live in a [`SearchTree`]
//! arena, explored boards go into an `FxHashSet`, and a solved search walks
//! the arena back to the root to recover its moves. The engines differ only
//! in how the frontier is ordered.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::time::Instant;

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::{debug, trace};

use crate::board::Board;
use crate::direction::Direction;
use crate::heuristic::Heuristic;
use crate::node::{Node, NodeId, SearchTree};

const PROGRESS_INTERVAL: usize = 10_000;

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded.
    pub expanded: usize,
    /// Nodes created, the root included.
    pub generated: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Solved {
        actions: Vec<Direction>,
        stats: SearchStats,
    },
    /// The frontier emptied without reaching the goal.
    Exhausted { stats: SearchStats },
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }

    pub fn actions(&self) -> Option<&[Direction]> {
        match self {
            Outcome::Solved { actions, .. } => Some(actions.as_slice()),
            Outcome::Exhausted { .. } => None,
        }
    }

    pub fn into_actions(self) -> Option<Vec<Direction>> {
        match self {
            Outcome::Solved { actions, .. } => Some(actions),
            Outcome::Exhausted { .. } => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            Outcome::Solved { stats, .. } | Outcome::Exhausted { stats } => stats,
        }
    }
}

/// A* keyed on `f = g + h`, ties going to the cheaper node.
///
/// A board may sit on the frontier several times; the explored check at pop
/// time discards the stale copies. With a consistent heuristic the first
/// copy popped carries the cheapest path, so the returned solution is
/// optimal.
pub fn astar<H>(start: Board, heuristic: &H) -> Outcome
where
    H: Heuristic + ?Sized,
{
    let started = Instant::now();
    let mut tree = SearchTree::new(start);
    let mut stats = SearchStats {
        generated: 1,
        max_frontier: 1,
        ..SearchStats::default()
    };

    let root = tree.root();
    let root_h = heuristic.estimate(&start);
    debug!(event = "search_start", algorithm = "astar", start = %start, h = root_h);

    let mut open_list = BinaryHeap::<Reverse<(u32, Node, NodeId)>>::new();
    let mut closed_list: FxHashSet<Board> = FxHashSet::default();
    open_list.push(Reverse((root_h, *tree.get(root), root)));

    while let Some(Reverse((f, node, id))) = open_list.pop() {
        if node.board().is_goal() {
            return solved("astar", &tree, id, stats, started);
        }

        if !closed_list.insert(*node.board()) {
            continue;
        }

        stats.expanded += 1;
        trace!(event = "expand", state = %node.board(), g = node.cost(), f = f);
        log_progress("astar", &stats, open_list.len());

        for child in tree.expand(id) {
            if closed_list.contains(child.board()) {
                continue;
            }

            let f = child.cost() + heuristic.estimate(child.board());
            let child_id = tree.insert(child);
            open_list.push(Reverse((f, child, child_id)));
            stats.generated += 1;
        }

        stats.max_frontier = stats.max_frontier.max(open_list.len());
    }

    exhausted("astar", stats, started)
}

/// Breadth-first search. Boards are marked seen when generated, so each is
/// queued at most once; the first goal dequeued is at minimum depth.
pub fn breadth_first(start: Board) -> Outcome {
    let started = Instant::now();
    let mut tree = SearchTree::new(start);
    let mut stats = SearchStats {
        generated: 1,
        max_frontier: 1,
        ..SearchStats::default()
    };
    debug!(event = "search_start", algorithm = "breadth_first", start = %start);

    let mut queue = VecDeque::from([tree.root()]);
    let mut seen: FxHashSet<Board> = FxHashSet::default();
    seen.insert(start);

    while let Some(id) = queue.pop_front() {
        if tree.get(id).board().is_goal() {
            return solved("breadth_first", &tree, id, stats, started);
        }

        stats.expanded += 1;
        log_progress("breadth_first", &stats, queue.len());

        for child in tree.expand(id) {
            if seen.insert(*child.board()) {
                queue.push_back(tree.insert(child));
                stats.generated += 1;
            }
        }

        stats.max_frontier = stats.max_frontier.max(queue.len());
    }

    exhausted("breadth_first", stats, started)
}

/// Depth-first search with an explored set. Finishes on every board since
/// no board is expanded twice, but the path it finds is usually far from
/// the shortest one.
pub fn depth_first(start: Board) -> Outcome {
    let started = Instant::now();
    let mut tree = SearchTree::new(start);
    let mut stats = SearchStats {
        generated: 1,
        max_frontier: 1,
        ..SearchStats::default()
    };
    debug!(event = "search_start", algorithm = "depth_first", start = %start);

    let mut stack = vec![tree.root()];
    let mut explored: FxHashSet<Board> = FxHashSet::default();

    while let Some(id) = stack.pop() {
        let board = *tree.get(id).board();
        if board.is_goal() {
            return solved("depth_first", &tree, id, stats, started);
        }

        if !explored.insert(board) {
            continue;
        }

        stats.expanded += 1;
        log_progress("depth_first", &stats, stack.len());

        // pushed in reverse so the first successor is popped first
        for child in tree.expand(id).into_iter().rev() {
            if !explored.contains(child.board()) {
                stack.push(tree.insert(child));
                stats.generated += 1;
            }
        }

        stats.max_frontier = stats.max_frontier.max(stack.len());
    }

    exhausted("depth_first", stats, started)
}

fn log_progress(algorithm: &'static str, stats: &SearchStats, frontier: usize) {
    if stats.expanded % PROGRESS_INTERVAL == 0 {
        debug!(
            event = "progress",
            algorithm = algorithm,
            expanded = stats.expanded,
            generated = stats.generated,
            frontier = frontier,
        );
    }
}

fn solved(
    algorithm: &'static str,
    tree: &SearchTree,
    goal: NodeId,
    stats: SearchStats,
    started: Instant,
) -> Outcome {
    let actions = tree.reconstruct_path(goal).unwrap_or_default();
    debug!(
        event = "search_end",
        algorithm = algorithm,
        outcome = "solved",
        depth = actions.len(),
        expanded = stats.expanded,
        generated = stats.generated,
        max_frontier = stats.max_frontier,
        duration_ms = started.elapsed().as_millis() as u64,
    );

    Outcome::Solved { actions, stats }
}

fn exhausted(algorithm: &'static str, stats: SearchStats, started: Instant) -> Outcome {
    debug!(
        event = "search_end",
        algorithm = algorithm,
        outcome = "exhausted",
        expanded = stats.expanded,
        generated = stats.generated,
        max_frontier = stats.max_frontier,
        duration_ms = started.elapsed().as_millis() as u64,
    );

    Outcome::Exhausted { stats }
}
