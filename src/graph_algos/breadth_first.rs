use crate::errors::PathPlannerError;
use crate::metrics::{SearchOutcome, SearchStats};
use super::{GraphNodeMap, shortest_path};

use std::{collections::VecDeque, hash::Hash, fmt::Debug};
use indexmap::map::Entry::Vacant;
use tracing::debug;


/// Breadth-First Search
/// Returns a path with the fewest edges, edge costs are ignored
pub fn breadth_first<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> Result<SearchOutcome<N, C>, PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    G: Fn(&N) -> bool,
{
    let mut stats = SearchStats::start();

    // (parent_index, depth), nodes enter on discovery
    let mut node_map: GraphNodeMap<N, usize> = GraphNodeMap::default();
    let mut queue = VecDeque::new();

    stats.explore(start.clone());
    queue.push_back(node_map.insert_full(start, (usize::MAX, 0)).0);

    let mut goal_index = None;
    while let Some(index) = queue.pop_front() {
        let Some((node, &(_, depth))) = node_map.get_index(index) else {
            continue;
        };
        let node = node.clone();
        stats.expand(node.clone());

        if goal_fn(&node) {
            goal_index = Some(index);
            break;
        }

        for (neighbor, _) in neighbors(&node) {
            if let Vacant(e) = node_map.entry(neighbor) {
                stats.explore(e.key().clone());
                queue.push_back(e.index());
                e.insert((index, depth + 1));
            }
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
        "breadth-first search finished"
    );
    Ok(outcome)
}
