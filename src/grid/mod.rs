pub mod costs;

pub use costs::CostModel;
use costs::EdgeCosts;

use crate::errors::{PathPlannerError, Result};
use crate::geometry::manhattan_distance;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// (row, column) coordinate, 1-indexed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells
    /// Saturates at u32::MAX
    pub fn manhattan(&self, other: &Cell) -> u32 {
        u32::try_from(manhattan_distance(self.row, self.col, other.row, other.col)).unwrap_or(u32::MAX)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


/// Compass direction of a move
/// Row 1 is the northern edge, column 1 the western edge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    East,
    South,
    North,
    West,
}

impl Direction {
    /// Expansion order used by every search
    pub const ALL: [Direction; 4] = [Direction::East, Direction::South, Direction::North, Direction::West];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
        }
    }

    /// Cell reached by moving one step in this direction
    /// Returns None when the step would leave the positive quadrant
    pub fn step(self, cell: Cell) -> Option<Cell> {
        let Cell { row, col } = cell;
        match self {
            Direction::East => Some(Cell::new(row, col + 1)),
            Direction::South => Some(Cell::new(row + 1, col)),
            Direction::North => row.checked_sub(1).map(|r| Cell::new(r, col)),
            Direction::West => col.checked_sub(1).map(|c| Cell::new(row, c)),
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::East => 0b0001,
            Direction::South => 0b0010,
            Direction::North => 0b0100,
            Direction::West => 0b1000,
        }
    }
}


/// A traversable move out of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub direction: Direction,
    pub to: Cell,
    pub cost: u32,
}


/// Maze grid: per-cell open directions plus per-edge move costs
/// Built before any search runs, searches only read it
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    passages: Vec<u8>, // bitmask of open directions, row-major
    costs: EdgeCosts,
}

impl Grid {

    /// Create a grid with every wall closed and unit move costs
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(PathPlannerError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            passages: vec![0; rows * cols],
            costs: EdgeCosts::uniform(rows, cols),
        })
    }

    /// Create a grid with all internal walls removed
    pub fn open(rows: usize, cols: usize) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        for row in 1..=rows {
            for col in 1..=cols {
                let cell = Cell::new(row, col);
                if col < cols {
                    grid.set_passage(cell, Direction::East, true)?;
                }
                if row < rows {
                    grid.set_passage(cell, Direction::South, true)?;
                }
            }
        }
        Ok(grid)
    }

    /// Build a grid from the passages produced by a maze generator
    /// Each (cell, direction) pair opens the wall on both sides
    pub fn from_passages<I>(rows: usize, cols: usize, passages: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Cell, Direction)>,
    {
        let mut grid = Self::new(rows, cols)?;
        for (cell, direction) in passages {
            grid.set_passage(cell, direction, true)?;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells in the grid
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Conventional start cell: the south-east corner
    pub fn default_start(&self) -> Cell {
        Cell::new(self.rows, self.cols)
    }

    /// Conventional goal cell: the north-west corner
    pub fn default_goal(&self) -> Cell {
        Cell::new(1, 1)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (1..=self.rows).contains(&cell.row) && (1..=self.cols).contains(&cell.col)
    }

    /// Error unless the cell is on the grid
    pub fn check_bounds(&self, cell: Cell) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(PathPlannerError::OutOfBounds {
                row: cell.row,
                col: cell.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (1..=self.rows).flat_map(move |row| (1..=self.cols).map(move |col| Cell::new(row, col)))
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.row - 1) * self.cols + (cell.col - 1)
    }

    /// Destination of a move that stays inside the grid
    fn target(&self, cell: Cell, direction: Direction) -> Result<Cell> {
        self.check_bounds(cell)?;
        let next = direction.step(cell).unwrap_or(Cell::new(0, 0));
        self.check_bounds(next)?;
        Ok(next)
    }

    /// Open or close the wall between a cell and its neighbor, on both sides
    pub fn set_passage(&mut self, cell: Cell, direction: Direction, open: bool) -> Result<()> {
        let next = self.target(cell, direction)?;
        self.write_passage(cell, direction, open);
        self.write_passage(next, direction.opposite(), open);
        Ok(())
    }

    /// Open or close a wall on one side only
    /// Grids built this way are asymmetric: B may not lead back to A
    pub fn set_one_way(&mut self, cell: Cell, direction: Direction, open: bool) -> Result<()> {
        self.target(cell, direction)?;
        self.write_passage(cell, direction, open);
        Ok(())
    }

    fn write_passage(&mut self, cell: Cell, direction: Direction, open: bool) {
        let idx = self.index(cell);
        if open {
            self.passages[idx] |= direction.bit();
        } else {
            self.passages[idx] &= !direction.bit();
        }
    }

    /// Whether movement out of `cell` towards `direction` is permitted
    pub fn is_open(&self, cell: Cell, direction: Direction) -> bool {
        self.contains(cell) && self.passages[self.index(cell)] & direction.bit() != 0
    }

    /// Cost of the move out of `cell` towards `direction`, if that wall is open
    pub fn edge_cost(&self, cell: Cell, direction: Direction) -> Option<u32> {
        if !self.is_open(cell, direction) {
            return None;
        }
        let next = direction.step(cell)?;
        Some(self.costs.between(cell, next))
    }

    /// Smallest cost assigned to any edge - scales the grid heuristic
    pub fn min_edge_cost(&self) -> u32 {
        self.costs.min()
    }

    /// Open moves out of a cell in E, S, N, W order
    /// Cells outside the grid have no neighbors
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Edge> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            let cost = self.edge_cost(cell, direction)?;
            let to = direction.step(cell)?;
            Some(Edge { direction, to, cost })
        })
    }

    /// Direction of the open passage from `from` to `to`, if any
    pub fn passage_between(&self, from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| d.step(from) == Some(to) && self.is_open(from, d))
    }

    /// Every consecutive pair of cells is joined by an open passage
    pub fn is_valid_path(&self, path: &[Cell]) -> bool {
        !path.is_empty()
            && path.iter().all(|&cell| self.contains(cell))
            && path.windows(2).all(|pair| self.passage_between(pair[0], pair[1]).is_some())
    }

    /// Sum of edge costs along a path
    /// None if the path crosses a wall or its cost does not fit in u32
    pub fn path_cost(&self, path: &[Cell]) -> Option<u32> {
        if !self.is_valid_path(path) {
            return None;
        }
        path.windows(2).try_fold(0u32, |total, pair| {
            let direction = self.passage_between(pair[0], pair[1])?;
            total.checked_add(self.edge_cost(pair[0], direction)?)
        })
    }
}
