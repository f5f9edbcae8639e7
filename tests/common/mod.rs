//! Seeded maze generation for the integration tests.

#![allow(dead_code)]

use maze_search::{Cell, Direction, Grid};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};


/// Perfect maze by randomized depth-first carving, then `loop_percent` of the
/// remaining internal walls knocked down to create cycles
pub fn random_maze(rows: usize, cols: usize, loop_percent: u32, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(rows, cols).unwrap();

    let mut visited = vec![false; rows * cols];
    let index = |cell: Cell| (cell.row - 1) * cols + (cell.col - 1);

    let start = Cell::new(rows, cols);
    visited[index(start)] = true;
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        let mut options: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| {
                d.step(current)
                    .is_some_and(|next| grid.contains(next) && !visited[index(next)])
            })
            .collect();

        if options.is_empty() {
            stack.pop();
            continue;
        }

        options.shuffle(&mut rng);
        let direction = options[0];
        let next = direction.step(current).unwrap();
        grid.set_passage(current, direction, true).unwrap();
        visited[index(next)] = true;
        stack.push(next);
    }

    // extra openings
    for cell in grid.cells().collect::<Vec<_>>() {
        for direction in [Direction::East, Direction::South] {
            let inside = direction.step(cell).is_some_and(|next| grid.contains(next));
            if inside && !grid.is_open(cell, direction) && rng.random_range(0..100) < loop_percent {
                grid.set_passage(cell, direction, true).unwrap();
            }
        }
    }

    grid
}

/// Close every wall around a cell
pub fn seal(grid: &mut Grid, cell: Cell) {
    for direction in Direction::ALL {
        if direction.step(cell).is_some_and(|next| grid.contains(next)) {
            grid.set_passage(cell, direction, false).unwrap();
        }
    }
}

/// Cheapest cost over every simple path from `start` to `goal`, by exhaustive enumeration
pub fn brute_force_cost(grid: &Grid, start: Cell, goal: Cell) -> Option<u32> {
    fn walk(grid: &Grid, cell: Cell, goal: Cell, cost: u32, on_path: &mut Vec<Cell>, best: &mut Option<u32>) {
        if cell == goal {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for edge in grid.neighbors(cell) {
            if on_path.contains(&edge.to) {
                continue;
            }
            on_path.push(edge.to);
            walk(grid, edge.to, goal, cost + edge.cost, on_path, best);
            on_path.pop();
        }
    }

    let mut best = None;
    walk(grid, start, goal, 0, &mut vec![start], &mut best);
    best
}
