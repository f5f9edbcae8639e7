//! Classical search strategies over 2D maze grids.
//!
//! The crate provides Uniform Cost Search, Greedy Best-First Search, A*,
//! Iterative Deepening Search, plus breadth- and depth-first search, over a
//! static 4-connected [`Grid`](grid::Grid).
//!
//! Each algorithm in [`graph_algos`] is generic over the node type and driven by
//! closures (neighbors, goal test, heuristic), so it can run on any graph.
//! [`Strategy`](strategy::Strategy) wires them to a grid:
//!
//! ```
//! use maze_search::{grid::Grid, config::SearchConfig, strategy::Strategy};
//!
//! let grid = Grid::open(3, 3).unwrap();
//! let outcome = Strategy::AStar.search(&grid, &SearchConfig::default()).unwrap();
//!
//! assert_eq!(outcome.metrics.total_cost, Some(4));
//! assert_eq!(outcome.path.unwrap().len(), 5);
//! ```
//!
//! A search either finds a path or reports `path: None`; errors are reserved for
//! malformed input and broken internal contracts.

pub mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod metrics;
pub mod strategy;

pub use config::SearchConfig;
pub use errors::{PathPlannerError, Result};
pub use grid::{Cell, CostModel, Direction, Grid};
pub use metrics::{MetricsSummary, SearchMetrics, SearchOutcome};
pub use strategy::{Strategy, compare};
