use crate::errors::Result;
use crate::grid::{Cell, Grid};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Where a search starts and ends, plus the IDS depth cap
/// Unset fields fall back to the grid conventions
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Defaults to (rows, cols)
    pub start: Option<Cell>,
    /// Defaults to (1, 1)
    pub goal: Option<Cell>,
    /// Largest depth bound IDS tries, defaults to rows * cols - 1
    pub max_depth: Option<usize>,
}

impl SearchConfig {

    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_goal(mut self, goal: Cell) -> Self {
        self.goal = Some(goal);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Resolve start and goal against a grid
    /// Fails before any search work if either lies outside the grid
    pub fn endpoints(&self, grid: &Grid) -> Result<(Cell, Cell)> {
        let start = self.start.unwrap_or_else(|| grid.default_start());
        let goal = self.goal.unwrap_or_else(|| grid.default_goal());
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        Ok((start, goal))
    }

    /// Depth cap for IDS
    /// A simple path visits each cell at most once, so it never needs more than rows * cols - 1 edges
    pub fn depth_cap(&self, grid: &Grid) -> usize {
        let longest = grid.len() - 1;
        self.max_depth.map_or(longest, |depth| depth.min(longest))
    }
}
