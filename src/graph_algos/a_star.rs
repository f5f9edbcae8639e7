use crate::errors::PathPlannerError;
use crate::metrics::{SearchOutcome, SearchStats};
use super::{GraphNodeMap, frontier::PriorityFrontier, shortest_path};

use std::{
    hash::Hash,
    fmt::Debug,
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::{debug, trace};



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Frontier order is (f, h): among equal f the node closer to the goal pops first,
/// remaining ties pop in insertion order.
pub struct AStar {}

impl AStar {

    /// From start Node, traverse through graph until node meets goal criteria
    /// The returned path is optimal when the heuristic function is admissible and
    /// consistent (never overestimates the true cost to reach the goal)
    /// An unreachable goal is reported as `path: None`, not as an error
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<SearchOutcome<N, C>, PathPlannerError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> C, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        G: Fn(&N) -> bool, // node qualifier for goal
        {

        let mut stats = SearchStats::start();

        // build_a_star_graph
        let (node_map, goal_index) = self.build_graph(start, neighbors, heuristic_fn, goal_fn, &mut stats);

        // Return the shortest path
        let outcome = match goal_index {
            Some(goal_index) => {
                let path = shortest_path(&node_map, goal_index)?;
                let g_score = node_map[goal_index].1;
                stats.finish(Some(path), Some(g_score))
            }
            None => stats.finish(None, None),
        };

        debug!(
            found = outcome.is_found(),
            expanded = outcome.metrics.expanded_nodes.len(),
            explored = outcome.metrics.explored_cells.len(),
            cost = ?outcome.metrics.total_cost,
            "A* search finished"
        );
        Ok(outcome)
    }


    /// Traverses the graph using A* algorithm
    /// Returns a map of nodes with their smallest g_scores along with the index of the goal node
    fn build_graph<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G, stats: &mut SearchStats<N>) -> (GraphNodeMap<N, C>, Option<usize>)
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        H: Fn(&N) -> C, // heuristic function
        G: Fn(&N) -> bool // Returns true if goal is met
    {
        // Open List
        // Nodes that need to be evaluated, keyed by (f_score, h_score, g_score)
        // g_score is implied by f and h, it only travels along to detect stale entries
        let mut open_list: PriorityFrontier<(C, C, C)> = PriorityFrontier::new();

        // Best g_score found so far for every node seen
        // The tuple contains (parent_index, g_score) where parent_index is the index of the parent node in the closed_list
        // for the start node, parent_index is set to usize::MAX to indicate it has no parent
        let mut closed_list: GraphNodeMap<N, C> = GraphNodeMap::default();

        let start_h = heuristic_fn(&start);
        stats.explore(start.clone());
        let start_index = closed_list.insert_full(start, (usize::MAX, Zero::zero())).0;
        open_list.push((start_h, start_h, Zero::zero()), start_index);

        while let Some(((_, _, g_score), index)) = open_list.pop() {

            // fetch current best g_score for node
            let Some((node, &(_, best_g))) = closed_list.get_index(index) else {
                continue;
            };

            // A cheaper route to this node was pushed after this entry
            if g_score > best_g {
                trace!(?node, ?g_score, ?best_g, "discarding stale open list entry");
                continue;
            }

            let node = node.clone();
            stats.expand(node.clone());

            // Check if we've reached the goal
            if goal_fn(&node) {
                return (closed_list, Some(index));
            }

            // loop over neighbors
            for (neighbor, edge_cost) in neighbors(&node) {

                // tentative g = confirmed cost to this node + edge cost
                let tentative_g = best_g + edge_cost;

                // h is fixed per node, so f improves exactly when g does
                let h_score: C = heuristic_fn(&neighbor);

                let neighbor_index = match closed_list.entry(neighbor) {
                    Vacant(e) => {
                        // This is the first time we're seeing this neighbor
                        stats.explore(e.key().clone());
                        let neighbor_index = e.index();
                        e.insert((index, tentative_g));
                        neighbor_index
                    }
                    Occupied(mut e) => {
                        if e.get().1 > tentative_g {
                            // We've found a better path to this neighbor
                            e.insert((index, tentative_g));
                            e.index()
                        } else {
                            // The existing path is better, do nothing
                            continue;
                        }
                    }
                };

                // Only add to the queue if we've found a better path
                open_list.push((tentative_g + h_score, h_score, tentative_g), neighbor_index);
            }
        }
        (closed_list, None)
    }
}
