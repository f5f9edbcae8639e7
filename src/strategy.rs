use crate::config::SearchConfig;
use crate::errors::{PathPlannerError, Result};
use crate::graph_algos::{
    a_star::AStar,
    breadth_first::breadth_first,
    depth_first::depth_first,
    dijkstra::dijkstra,
    greedy::GreedyBestFirst,
    iterative_deepening::IterativeDeepening,
};
use crate::grid::{Cell, Grid};
use crate::metrics::SearchOutcome;

use std::{fmt, str::FromStr};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Outcome of a search on a grid
pub type GridOutcome = SearchOutcome<Cell, u32>;


/// Search strategy chosen by the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Cheapest path by cumulative edge cost
    UniformCost,
    /// Expands by Manhattan distance to the goal only
    GreedyBestFirst,
    /// Cheapest path, guided by Manhattan distance
    AStar,
    /// Depth-limited DFS with a growing bound
    IterativeDeepening,
    /// Fewest moves, ignores costs
    BreadthFirst,
    DepthFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::UniformCost,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
        Strategy::IterativeDeepening,
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
    ];

    /// The four strategies compared in the maze analysis
    pub const CLASSICAL: [Strategy; 4] = [
        Strategy::UniformCost,
        Strategy::IterativeDeepening,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::UniformCost => "UCS",
            Strategy::GreedyBestFirst => "GBFS",
            Strategy::AStar => "A*",
            Strategy::IterativeDeepening => "IDS",
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
        }
    }

    /// Informed strategies use the distance heuristic
    pub fn is_informed(self) -> bool {
        matches!(self, Strategy::GreedyBestFirst | Strategy::AStar)
    }

    /// Whether the returned path is guaranteed to be the cheapest
    pub fn is_optimal(self) -> bool {
        matches!(self, Strategy::UniformCost | Strategy::AStar)
    }

    /// Run this strategy on a grid
    /// Start and goal are checked against the grid before any search work
    pub fn search(self, grid: &Grid, config: &SearchConfig) -> Result<GridOutcome> {
        let (start, goal) = config.endpoints(grid)?;
        debug!(strategy = self.name(), %start, %goal, rows = grid.rows(), cols = grid.cols(), "starting search");

        let neighbors = |cell: &Cell| grid.neighbors(*cell).map(|edge| (edge.to, edge.cost));
        let goal_fn = |cell: &Cell| *cell == goal;

        // Manhattan distance scaled by the cheapest edge stays admissible under any cost layout
        let scale = grid.min_edge_cost();
        let heuristic = |cell: &Cell| cell.manhattan(&goal).saturating_mul(scale);

        match self {
            Strategy::UniformCost => dijkstra(start, neighbors, goal_fn),
            Strategy::GreedyBestFirst => GreedyBestFirst {}.plan(start, neighbors, heuristic, goal_fn),
            Strategy::AStar => AStar {}.plan(start, neighbors, heuristic, goal_fn),
            Strategy::IterativeDeepening => {
                IterativeDeepening::new(config.depth_cap(grid)).plan(start, neighbors, goal_fn)
            }
            Strategy::BreadthFirst => breadth_first(start, neighbors, goal_fn),
            Strategy::DepthFirst => depth_first(start, neighbors, goal_fn),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = PathPlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ucs" | "uniform_cost" | "dijkstra" => Ok(Strategy::UniformCost),
            "gbfs" | "greedy" => Ok(Strategy::GreedyBestFirst),
            "astar" | "a*" | "a_star" => Ok(Strategy::AStar),
            "ids" | "iterative_deepening" => Ok(Strategy::IterativeDeepening),
            "bfs" | "breadth_first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth_first" => Ok(Strategy::DepthFirst),
            _ => Err(PathPlannerError::UnknownStrategy(s.to_string())),
        }
    }
}


/// Run several strategies on the same grid and endpoints
/// Each run gets its own outcome, results keep the order of `strategies`
pub fn compare(grid: &Grid, config: &SearchConfig, strategies: &[Strategy]) -> Result<Vec<(Strategy, GridOutcome)>> {
    strategies
        .iter()
        .map(|&strategy| Ok((strategy, strategy.search(grid, config)?)))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{CostModel, Direction, costs::max_edge_cost};

    /// 3x3 grid with (1, 1) sealed off from everything else
    fn enclave() -> Grid {
        let mut grid = Grid::open(3, 3).unwrap();
        grid.set_passage(Cell::new(1, 1), Direction::East, false).unwrap();
        grid.set_passage(Cell::new(1, 1), Direction::South, false).unwrap();
        grid
    }

    #[test]
    fn test_open_3x3_scenario() {
        let grid = Grid::open(3, 3).unwrap();
        let config = SearchConfig::default();
        assert_eq!(Cell::new(3, 3).manhattan(&Cell::new(1, 1)), 4);

        for strategy in [Strategy::AStar, Strategy::UniformCost] {
            let outcome = strategy.search(&grid, &config).unwrap();
            let path = outcome.path.as_ref().unwrap();
            assert_eq!(path.len(), 5, "{strategy} path length");
            assert_eq!(outcome.metrics.total_cost, Some(4));
            assert_eq!(outcome.metrics.path_length, 4);
        }

        for strategy in [Strategy::GreedyBestFirst, Strategy::IterativeDeepening, Strategy::BreadthFirst, Strategy::DepthFirst] {
            let outcome = strategy.search(&grid, &config).unwrap();
            let path = outcome.path.unwrap();
            assert!(path.len() >= 5, "{strategy} path too short");
            assert_eq!(path.first(), Some(&Cell::new(3, 3)));
            assert_eq!(path.last(), Some(&Cell::new(1, 1)));
            assert!(grid.is_valid_path(&path), "{strategy} crossed a wall");
            assert_eq!(outcome.metrics.total_cost, None);
        }
    }

    #[test]
    fn test_sealed_goal_not_found() {
        let grid = enclave();
        for strategy in Strategy::ALL {
            let outcome = strategy.search(&grid, &SearchConfig::default()).unwrap();
            assert!(!outcome.is_found(), "{strategy} found a path into a sealed cell");
            assert!(!outcome.metrics.expanded_nodes.contains(&Cell::new(1, 1)));
        }
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let grid = Grid::open(3, 3).unwrap();
        let config = SearchConfig::default().with_start(Cell::new(4, 1));
        for strategy in Strategy::ALL {
            assert_eq!(
                strategy.search(&grid, &config).unwrap_err(),
                PathPlannerError::OutOfBounds { row: 4, col: 1, rows: 3, cols: 3 },
            );
        }
    }

    #[test]
    fn test_ucs_prefers_cheap_detour() {
        // 2x2 ring: both routes take two moves, seeded random costs decide which is cheaper
        let grid = Grid::open(2, 2).unwrap()
            .with_cost_model(&CostModel::Random { min: 1, max: 9, seed: 11 })
            .unwrap();

        let outcome = Strategy::UniformCost.search(&grid, &SearchConfig::default()).unwrap();
        let path = outcome.path.unwrap();
        let via_north = [Cell::new(2, 2), Cell::new(1, 2), Cell::new(1, 1)];
        let via_west = [Cell::new(2, 2), Cell::new(2, 1), Cell::new(1, 1)];
        let best = grid.path_cost(&via_north).unwrap().min(grid.path_cost(&via_west).unwrap());

        assert_eq!(outcome.metrics.total_cost, Some(best));
        assert_eq!(grid.path_cost(&path), Some(best));
    }

    #[test]
    fn test_largest_edge_costs_do_not_overflow() {
        let limit = max_edge_cost(9);
        let grid = Grid::open(3, 3).unwrap()
            .with_cost_model(&CostModel::Random { min: limit, max: limit, seed: 0 })
            .unwrap();

        for strategy in [Strategy::UniformCost, Strategy::AStar] {
            let outcome = strategy.search(&grid, &SearchConfig::default()).unwrap();
            assert_eq!(outcome.metrics.total_cost, Some(4 * limit), "{strategy}");
        }
    }

    #[test]
    fn test_informed_and_optimal() {
        let informed: Vec<_> = Strategy::ALL.into_iter().filter(|s| s.is_informed()).collect();
        assert_eq!(informed, vec![Strategy::GreedyBestFirst, Strategy::AStar]);

        let optimal: Vec<_> = Strategy::ALL.into_iter().filter(|s| s.is_optimal()).collect();
        assert_eq!(optimal, vec![Strategy::UniformCost, Strategy::AStar]);
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("UCS".parse::<Strategy>(), Ok(Strategy::UniformCost));
        assert_eq!("a*".parse::<Strategy>(), Ok(Strategy::AStar));
        assert_eq!(" ids ".parse::<Strategy>(), Ok(Strategy::IterativeDeepening));
        assert_eq!("Greedy".parse::<Strategy>(), Ok(Strategy::GreedyBestFirst));
        assert_eq!("bogo".parse::<Strategy>(), Err(PathPlannerError::UnknownStrategy("bogo".to_string())));

        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_compare_keeps_order() {
        let grid = Grid::open(4, 4).unwrap();
        let results = compare(&grid, &SearchConfig::default(), &Strategy::CLASSICAL).unwrap();

        let names: Vec<_> = results.iter().map(|(s, _)| s.name()).collect();
        assert_eq!(names, vec!["UCS", "IDS", "GBFS", "A*"]);
        assert!(results.iter().all(|(_, outcome)| outcome.is_found()));
    }
}
