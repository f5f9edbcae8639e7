use crate::errors::PathPlannerError;
use crate::metrics::{SearchOutcome, SearchStats};
use super::{GraphNodeMap, frontier::PriorityFrontier, shortest_path};

use std::{hash::Hash, fmt::Debug};
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::debug;


/// Greedy Best-First Search
/// https://en.wikipedia.org/wiki/Best-first_search#Greedy_BFS
///
/// Always expands the pending node with the lowest heuristic value. Costs are
/// ignored, so the path is valid but not necessarily the cheapest.
pub struct GreedyBestFirst {}

impl GreedyBestFirst {

    /// From start Node, expand towards the goal as ranked by `heuristic_fn`
    /// Terminates on any finite graph: each node is expanded at most once
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<SearchOutcome<N, C>, PathPlannerError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = (N, C)>, // edge costs are not used
        H: Fn(&N) -> C,
        C: Ord + Copy + Debug,
        G: Fn(&N) -> bool,
    {
        let mut stats = SearchStats::start();

        let (node_map, goal_index) = self.build_graph(start, neighbors, heuristic_fn, goal_fn, &mut stats);

        let path = match goal_index {
            Some(goal_index) => Some(shortest_path(&node_map, goal_index)?),
            None => None,
        };
        let outcome = stats.finish(path, None);

        debug!(
            found = outcome.is_found(),
            expanded = outcome.metrics.expanded_nodes.len(),
            explored = outcome.metrics.explored_cells.len(),
            path_length = outcome.metrics.path_length,
            "greedy best-first search finished"
        );
        Ok(outcome)
    }

    /// Returns the discovery tree (parent index, depth) and the index of the goal node
    fn build_graph<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G, stats: &mut SearchStats<N>) -> (GraphNodeMap<N, usize>, Option<usize>)
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = (N, C)>,
        H: Fn(&N) -> C,
        C: Ord + Copy + Debug,
        G: Fn(&N) -> bool,
    {
        // Pending nodes keyed by heuristic only
        let mut frontier: PriorityFrontier<C> = PriorityFrontier::new();

        // First discovery wins: a node's parent is never revised
        let mut node_map: GraphNodeMap<N, usize> = GraphNodeMap::default();

        let start_h = heuristic_fn(&start);
        stats.explore(start.clone());
        let start_index = node_map.insert_full(start, (usize::MAX, 0)).0;
        frontier.push(start_h, start_index);

        while let Some((_, index)) = frontier.pop() {
            let Some((node, &(_, depth))) = node_map.get_index(index) else {
                continue;
            };
            let node = node.clone();

            if !stats.expand(node.clone()) {
                continue;
            }

            if goal_fn(&node) {
                return (node_map, Some(index));
            }

            for (neighbor, _) in neighbors(&node) {
                if stats.is_expanded(&neighbor) {
                    continue;
                }

                match node_map.entry(neighbor) {
                    Vacant(e) => {
                        let h_score = heuristic_fn(e.key());
                        stats.explore(e.key().clone());
                        let neighbor_index = e.index();
                        e.insert((index, depth + 1));
                        frontier.push(h_score, neighbor_index);
                    }
                    // already pending with the same heuristic, an earlier entry pops first
                    Occupied(_) => continue,
                }
            }
        }

        (node_map, None)
    }
}
