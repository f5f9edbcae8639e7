use crate::errors::PathPlannerError;
use crate::metrics::{SearchOutcome, SearchStats};
use super::{GraphNodeMap, shortest_path};

use std::{hash::Hash, fmt::Debug};
use tracing::debug;


/// Depth-First Search over the whole graph
/// Each node is expanded once. The parent of a node is the node whose stack
/// entry was popped when it got expanded, so the path follows the DFS tree
pub fn depth_first<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> Result<SearchOutcome<N, C>, PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    G: Fn(&N) -> bool,
{
    let mut stats = SearchStats::start();

    // Expanded nodes only: (parent_index, depth)
    let mut node_map: GraphNodeMap<N, usize> = GraphNodeMap::default();

    // (node, parent_index) - neighbors are pushed in order, so the last one listed is tried first
    stats.explore(start.clone());
    let mut stack = vec![(start, usize::MAX)];

    let mut goal_index = None;
    while let Some((node, parent_index)) = stack.pop() {
        if !stats.expand(node.clone()) {
            continue;
        }

        let depth = node_map.get_index(parent_index).map_or(0, |(_, &(_, d))| d + 1);
        let index = node_map.insert_full(node.clone(), (parent_index, depth)).0;

        if goal_fn(&node) {
            goal_index = Some(index);
            break;
        }

        for (neighbor, _) in neighbors(&node) {
            if stats.is_expanded(&neighbor) {
                continue;
            }
            stats.explore(neighbor.clone());
            stack.push((neighbor, index));
        }
    }

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
        "depth-first search finished"
    );
    Ok(outcome)
}
