use crate::errors::PathPlannerError;
use crate::metrics::{SearchOutcome, SearchStats};
use super::{GraphNodeMap, frontier::PriorityFrontier, shortest_path};

use std::{hash::Hash, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::{debug, trace};




/// Uniform Cost Search - Dijkstra's Algorithm stopped at the goal
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
///
/// Edge costs must be non-negative. The returned path is the cheapest one and
/// `total_cost` holds its cost. An unreachable goal gives `path: None`.
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<SearchOutcome<N, C>, PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    let mut stats = SearchStats::start();

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal, &mut stats);

    let outcome = match goal_index {
        Some(goal_index) => {
            let path = shortest_path(&node_map, goal_index)?;
            let cost = node_map[goal_index].1;
            stats.finish(Some(path), Some(cost))
        }
        None => stats.finish(None, None),
    };

    debug!(
        found = outcome.is_found(),
        expanded = outcome.metrics.expanded_nodes.len(),
        explored = outcome.metrics.explored_cells.len(),
        cost = ?outcome.metrics.total_cost,
        "uniform cost search finished"
    );
    Ok(outcome)
}


/// Returns a full map of the graph, includes all (reachable) nodes and their cheapest costs
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> GraphNodeMap<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    {

    let mut stats = SearchStats::start();
    let (node_map, _) = build_dijkstra_graph(start, neighbors, |_| false, &mut stats);
    node_map
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G, stats: &mut SearchStats<N>) -> (GraphNodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Nodes to visit, cheapest cumulative cost first, FIFO among equal costs
    let mut nodes_to_visit: PriorityFrontier<C> = PriorityFrontier::new();

    // Best known cost for every node seen so far
    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    // Add start node to the map and queue
    stats.explore(start.clone());
    let start_index = nodes_map.insert_full(start, (usize::MAX, Zero::zero())).0;
    nodes_to_visit.push(Zero::zero(), start_index);

    // Loop over each node to visit, removing the smallest node
    while let Some((cost, index)) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // If cost of the popped entry is higher than the best cost, skip it
        // A cheaper path was pushed later and has already been expanded
        if cost > c {
            trace!(?node, ?cost, best = ?c, "discarding stale frontier entry");
            continue;
        }

        let node = node.clone();
        stats.expand(node.clone());

        // Check if we've reached the goal
        if goal_fn(&node) {
            return (nodes_map, Some(index));
        }

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(&node) {

            // new cost to reach this node = edge cost + node cost
            let new_cost = edge_cost + c;

            // Check if we've found a better path to this neighbor
            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    stats.explore(e.key().clone());
                    let neighbor_index = e.index();
                    e.insert((index, new_cost));
                    neighbor_index
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // We've found a better path to this neighbor
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        // The existing path is better, do nothing
                        continue;
                    }
                }
            };

            // Only add to the queue if we've found a better path
            nodes_to_visit.push(new_cost, neighbor_index);
        }
    }

    (nodes_map, None)
}
