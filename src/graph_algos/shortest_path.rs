use crate::errors::PathPlannerError;
use super::GraphNodeMap;

use std::{fmt::Debug, hash::Hash};


/// Construct the path from the start node to `goal`
/// Walks parent indices back from the goal until the root (parent usize::MAX)
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
///
/// Only call this after a search reached `goal`: a missing entry is a
/// programming error, reported as `MissingPredecessor`.
pub fn reconstruct_path<N, C>(node_map: &GraphNodeMap<N, C>, goal: &N) -> Result<Vec<N>, PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
{
    match node_map.get_index_of(goal) {
        Some(goal_index) => shortest_path(node_map, goal_index),
        None => Err(PathPlannerError::MissingPredecessor(format!("{goal:?}"))),
    }
}


/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>, PathPlannerError>
where
    N: Clone + Debug,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != usize::MAX {
        // Parent chains are acyclic, anything longer than the map is corrupt
        if path.len() > node_map.len() {
            return Err(PathPlannerError::MissingPredecessor(format!("cycle at index {current_index}")));
        }
        match node_map.get_index(current_index) {
            Some((node, &(parent_index, _))) => {
                path.push(node.clone());
                current_index = parent_index;
            }
            None => return Err(PathPlannerError::MissingPredecessor(format!("index {current_index}"))),
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}
