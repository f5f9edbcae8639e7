use crate::collections::FxIndexSet;
use crate::errors::PathPlannerError;
use crate::metrics::{SearchOutcome, SearchStats};

use std::{hash::Hash, fmt::Debug};
use tracing::{debug, trace};


/// Iterative Deepening Search
/// https://en.wikipedia.org/wiki/Iterative_deepening_depth-first_search
///
/// Runs depth-limited searches with bounds 0, 1, 2, ... up to `max_depth` edges.
/// Only cells on the current root-to-leaf path are excluded, so a cell reached by
/// one branch may be visited again by another.
pub struct IterativeDeepening {
    /// Largest depth bound tried. On a graph with n nodes no simple path has more than n - 1 edges
    pub max_depth: usize,
}

/// Result of one depth-limited pass
enum Limited<N> {
    Found(Vec<N>),
    /// Some branch was pruned by the depth bound, a deeper pass may succeed
    Cutoff,
    /// Every simple path from the start was followed to its end
    Exhausted,
}

/// One level of the explicit DFS stack
/// The stack of frames, read bottom to top, is the path so far
struct Frame<N> {
    node: N,
    remaining: usize, // edges still allowed below this node
    children: std::vec::IntoIter<N>,
}

impl IterativeDeepening {

    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// From start Node, deepen the bound until the goal is found or `max_depth` is exceeded
    /// Costs are ignored, `total_cost` is never reported
    pub fn plan<N, C, IT, NN, G>(&self, start: N, neighbors: NN, goal_fn: G) -> Result<SearchOutcome<N, C>, PathPlannerError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = (N, C)>,
        G: Fn(&N) -> bool,
    {
        let mut stats = SearchStats::start();
        stats.iterations = 0;
        stats.explore(start.clone());

        let mut path = None;
        for depth in 0..=self.max_depth {
            stats.iterations += 1;

            match depth_limited(&start, depth, &neighbors, &goal_fn, &mut stats) {
                Limited::Found(found) => {
                    path = Some(found);
                    break;
                }
                Limited::Cutoff => {
                    trace!(depth, expanded = stats.expanded.len(), "depth bound reached, deepening");
                }
                Limited::Exhausted => {
                    // a deeper bound would walk the same tree again
                    trace!(depth, "search space exhausted below depth bound");
                    break;
                }
            }
        }

        let outcome = stats.finish(path, None);
        debug!(
            found = outcome.is_found(),
            iterations = outcome.metrics.iterations,
            expanded = outcome.metrics.expanded_nodes.len(),
            explored = outcome.metrics.explored_cells.len(),
            path_length = outcome.metrics.path_length,
            "iterative deepening search finished"
        );
        Ok(outcome)
    }
}


/// Depth-first search limited to `limit` edges, driven by an explicit stack
/// The goal is tested when a node is generated
fn depth_limited<N, C, IT, NN, G>(start: &N, limit: usize, neighbors: &NN, goal_fn: &G, stats: &mut SearchStats<N>) -> Limited<N>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    G: Fn(&N) -> bool,
{
    if goal_fn(start) {
        return Limited::Found(vec![start.clone()]);
    }
    if limit == 0 {
        return Limited::Cutoff;
    }

    let expand = |node: &N| -> std::vec::IntoIter<N> {
        neighbors(node).into_iter().map(|(n, _)| n).collect::<Vec<_>>().into_iter()
    };

    // cells on the current path, pruned to avoid cycles
    let mut on_path: FxIndexSet<N> = FxIndexSet::default();
    on_path.insert(start.clone());
    stats.expand(start.clone());

    let mut stack = vec![Frame {
        node: start.clone(),
        remaining: limit,
        children: expand(start),
    }];
    let mut cutoff = false;

    while let Some(frame) = stack.last_mut() {
        let Some(child) = frame.children.next() else {
            // backtrack
            if let Some(done) = stack.pop() {
                on_path.swap_remove(&done.node);
            }
            continue;
        };
        let remaining = frame.remaining - 1;

        stats.explore(child.clone());
        if on_path.contains(&child) {
            continue;
        }

        if goal_fn(&child) {
            let mut path: Vec<N> = stack.iter().map(|f| f.node.clone()).collect();
            path.push(child);
            return Limited::Found(path);
        }

        if remaining == 0 {
            cutoff = true;
            continue;
        }

        stats.expand(child.clone());
        on_path.insert(child.clone());
        let children = expand(&child);
        stack.push(Frame { node: child, remaining, children });
    }

    if cutoff { Limited::Cutoff } else { Limited::Exhausted }
}
