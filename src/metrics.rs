use crate::collections::{FxIndexMap, FxIndexSet};

use std::{hash::Hash, time::{Duration, Instant}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Result of one search invocation, owned by the caller
#[derive(Clone, Debug)]
pub struct SearchOutcome<N, C> {
    /// Start to goal, both inclusive. None when the goal is unreachable
    pub path: Option<Vec<N>>,
    pub metrics: SearchMetrics<N, C>,
}

impl<N, C> SearchOutcome<N, C> {

    /// Returns true if a path was found
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    pub fn into_path(self) -> Option<Vec<N>> {
        self.path
    }
}

impl<N: Eq + Hash + Clone, C> SearchOutcome<N, C> {

    /// Path as a mapping from each cell to the next one towards the goal
    /// Empty when no path was found
    pub fn forward_map(&self) -> FxIndexMap<N, N> {
        let mut map = FxIndexMap::default();
        if let Some(path) = &self.path {
            for pair in path.windows(2) {
                map.insert(pair[0].clone(), pair[1].clone());
            }
        }
        map
    }
}


/// Bookkeeping for a single search run
#[derive(Clone, Debug)]
pub struct SearchMetrics<N, C> {
    /// Nodes popped from the frontier and examined
    pub expanded_nodes: FxIndexSet<N>,
    /// Nodes discovered, whether or not they were later expanded
    pub explored_cells: FxIndexSet<N>,
    /// Number of edges in the returned path, 0 when none was found
    pub path_length: usize,
    /// Cumulative cost of the path - only for searches that track cost (UCS, A*)
    pub total_cost: Option<C>,
    pub elapsed: Duration,
    /// Number of passes over the graph: depth-limited passes for IDS, 1 otherwise
    pub iterations: usize,
}

impl<N, C: Copy> SearchMetrics<N, C> {

    /// Counts only, for tabulating and charting runs side by side
    pub fn summary(&self) -> MetricsSummary<C> {
        MetricsSummary {
            expanded_nodes: self.expanded_nodes.len(),
            explored_cells: self.explored_cells.len(),
            path_length: self.path_length,
            total_cost: self.total_cost,
            elapsed_secs: self.elapsed.as_secs_f64(),
            iterations: self.iterations,
        }
    }
}


#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetricsSummary<C> {
    pub expanded_nodes: usize,
    pub explored_cells: usize,
    pub path_length: usize,
    pub total_cost: Option<C>,
    pub elapsed_secs: f64,
    pub iterations: usize,
}


/// Accumulates expanded / explored sets while a search runs
#[derive(Debug)]
pub(crate) struct SearchStats<N> {
    started: Instant,
    pub(crate) expanded: FxIndexSet<N>,
    pub(crate) explored: FxIndexSet<N>,
    pub(crate) iterations: usize,
}

impl<N: Eq + Hash> SearchStats<N> {

    pub(crate) fn start() -> Self {
        Self {
            started: Instant::now(),
            expanded: FxIndexSet::default(),
            explored: FxIndexSet::default(),
            iterations: 1,
        }
    }

    /// Record a node as discovered
    pub(crate) fn explore(&mut self, node: N) {
        self.explored.insert(node);
    }

    /// Record a node as expanded, returns false if it already was
    pub(crate) fn expand(&mut self, node: N) -> bool {
        self.expanded.insert(node)
    }

    pub(crate) fn is_expanded(&self, node: &N) -> bool {
        self.expanded.contains(node)
    }

    /// Close the run and build the outcome
    pub(crate) fn finish<C>(self, path: Option<Vec<N>>, total_cost: Option<C>) -> SearchOutcome<N, C> {
        let path_length = path.as_ref().map_or(0, |p| p.len().saturating_sub(1));
        SearchOutcome {
            // cost only makes sense alongside a path
            metrics: SearchMetrics {
                expanded_nodes: self.expanded,
                explored_cells: self.explored,
                path_length,
                total_cost: path.as_ref().and(total_cost),
                elapsed: self.started.elapsed(),
                iterations: self.iterations,
            },
            path,
        }
    }
}
