use super::{Cell, Grid};
use crate::errors::{PathPlannerError, Result};

use std::ops::RangeInclusive;
use rand::{Rng, SeedableRng, rngs::StdRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Inclusive range the UCS demos draw move costs from
pub const DEFAULT_COST_RANGE: RangeInclusive<u32> = 1..=10;


/// How a grid's edge costs are assigned
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CostModel {
    /// Every move costs 1
    #[default]
    Uniform,
    /// Every edge gets a cost drawn uniformly from min..=max by a generator seeded with `seed`
    Random { min: u32, max: u32, seed: u64 },
}

impl CostModel {
    /// Random costs in the default 1..=10 range
    pub fn random(seed: u64) -> Self {
        CostModel::Random {
            min: *DEFAULT_COST_RANGE.start(),
            max: *DEFAULT_COST_RANGE.end(),
            seed,
        }
    }
}


/// Per-edge costs, stored once per undirected edge and fixed before any search
/// east[i] is the cost between cell i and its eastern neighbor, south[i] likewise
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct EdgeCosts {
    cols: usize,
    east: Vec<u32>,
    south: Vec<u32>,
    min: u32,
}

impl EdgeCosts {

    pub(crate) fn uniform(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            east: vec![1; rows * cols],
            south: vec![1; rows * cols],
            min: 1,
        }
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.row - 1) * self.cols + (cell.col - 1)
    }

    /// Cost between two adjacent cells, in either direction
    pub(crate) fn between(&self, a: Cell, b: Cell) -> u32 {
        // normalise so `a` is the western / northern cell
        let (a, b) = if (b.row, b.col) < (a.row, a.col) { (b, a) } else { (a, b) };
        if a.row == b.row {
            self.east[self.index(a)]
        } else {
            self.south[self.index(a)]
        }
    }

    pub(crate) fn min(&self) -> u32 {
        self.min
    }
}


/// Largest edge cost a grid of `cells` cells accepts
/// A simple path has fewer than `cells` edges, a frontier entry adds at most one
/// more edge plus a heuristic no larger than another `cells` edges, so
/// 2 * cells * max_cost never exceeds u32::MAX
pub fn max_edge_cost(cells: usize) -> u32 {
    let bound = u64::from(u32::MAX) / (cells as u64).saturating_mul(2).max(1);
    u32::try_from(bound).unwrap_or(u32::MAX)
}


impl Grid {

    /// Assign every edge a cost drawn from `range` using the caller's generator
    /// Edges are visited in row-major order (east edge, then south edge) so a
    /// seeded generator always yields the same cost layout
    ///
    /// `range.end()` must keep every cumulative cost a search can form inside u32,
    /// see [`max_edge_cost`]
    pub fn randomize_costs<R>(&mut self, rng: &mut R, range: RangeInclusive<u32>) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        if range.is_empty() || *range.end() > max_edge_cost(self.len()) {
            return Err(PathPlannerError::InvalidCostRange {
                min: *range.start(),
                max: *range.end(),
            });
        }

        let (rows, cols) = (self.rows, self.cols);
        let mut min = u32::MAX;
        for row in 1..=rows {
            for col in 1..=cols {
                let idx = (row - 1) * cols + (col - 1);
                if col < cols {
                    let cost = rng.random_range(range.clone());
                    self.costs.east[idx] = cost;
                    min = min.min(cost);
                }
                if row < rows {
                    let cost = rng.random_range(range.clone());
                    self.costs.south[idx] = cost;
                    min = min.min(cost);
                }
            }
        }

        // 1x1 grids have no edges
        self.costs.min = if min == u32::MAX { *range.start() } else { min };
        Ok(())
    }

    /// Assign edge costs according to a cost model
    pub fn apply_cost_model(&mut self, model: &CostModel) -> Result<()> {
        match *model {
            CostModel::Uniform => {
                self.costs = EdgeCosts::uniform(self.rows, self.cols);
                Ok(())
            }
            CostModel::Random { min, max, seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.randomize_costs(&mut rng, min..=max)
            }
        }
    }

    /// Builder form of [`Grid::apply_cost_model`]
    pub fn with_cost_model(mut self, model: &CostModel) -> Result<Self> {
        self.apply_cost_model(model)?;
        Ok(self)
    }
}
