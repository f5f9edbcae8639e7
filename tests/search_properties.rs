mod common;

use common::{brute_force_cost, random_maze, seal};

use maze_search::graph_algos::{GraphNodeMap, dijkstra::dijkstra_nodes_full};
use maze_search::{Cell, CostModel, Grid, SearchConfig, Strategy, compare};

const SEEDS: std::ops::Range<u64> = 0..25;

/// Unit-cost distance from every reachable cell to `target`
fn distances_to(grid: &Grid, target: Cell) -> GraphNodeMap<Cell, u32> {
    // generated mazes are symmetric, so distances from the target equal distances to it
    dijkstra_nodes_full(target, |cell: &Cell| grid.neighbors(*cell).map(|e| (e.to, e.cost)))
}

#[test]
fn every_returned_path_is_valid() {
    for seed in SEEDS {
        let grid = random_maze(6, 6, 15, seed)
            .with_cost_model(&CostModel::random(seed))
            .unwrap();

        for strategy in Strategy::ALL {
            let outcome = strategy.search(&grid, &SearchConfig::default()).unwrap();
            let path = outcome.path.expect("generated mazes are connected");

            assert_eq!(path.first(), Some(&grid.default_start()));
            assert_eq!(path.last(), Some(&grid.default_goal()));
            assert!(grid.is_valid_path(&path), "{strategy} crossed a wall on seed {seed}");
            assert_eq!(outcome.metrics.path_length, path.len() - 1);
        }
    }
}

#[test]
fn connectivity_decides_found() {
    for seed in SEEDS {
        let mut grid = random_maze(5, 5, 20, seed);
        let goal = Cell::new(1 + (seed as usize % 5), 1 + (seed as usize / 5 % 5));
        if seed % 2 == 0 {
            seal(&mut grid, goal);
        }
        let config = SearchConfig::default().with_goal(goal);
        let reachable = distances_to(&grid, goal).contains_key(&grid.default_start());

        for strategy in Strategy::ALL {
            let outcome = strategy.search(&grid, &config).unwrap();
            assert_eq!(outcome.is_found(), reachable, "{strategy} on seed {seed}");
        }
    }
}

#[test]
fn ucs_and_astar_match_brute_force() {
    for seed in SEEDS {
        let grid = random_maze(4, 4, 40, seed)
            .with_cost_model(&CostModel::random(seed * 31))
            .unwrap();
        let expected = brute_force_cost(&grid, grid.default_start(), grid.default_goal());

        for strategy in [Strategy::UniformCost, Strategy::AStar] {
            let outcome = strategy.search(&grid, &SearchConfig::default()).unwrap();
            assert_eq!(outcome.metrics.total_cost, expected, "{strategy} on seed {seed}");

            let path = outcome.path.unwrap();
            assert_eq!(grid.path_cost(&path), expected);
        }
    }
}

#[test]
fn astar_optimal_on_unit_costs() {
    for seed in SEEDS {
        let grid = random_maze(4, 4, 50, seed);
        let expected = brute_force_cost(&grid, grid.default_start(), grid.default_goal());

        let astar = Strategy::AStar.search(&grid, &SearchConfig::default()).unwrap();
        let bfs = Strategy::BreadthFirst.search(&grid, &SearchConfig::default()).unwrap();

        assert_eq!(astar.metrics.total_cost, expected);
        assert_eq!(astar.metrics.path_length as u32, expected.unwrap());
        assert_eq!(bfs.metrics.path_length, astar.metrics.path_length);
    }
}

#[test]
fn manhattan_never_overestimates() {
    for seed in SEEDS {
        let grid = random_maze(7, 7, 15, seed);
        let goal = grid.default_goal();

        for (cell, &(_, distance)) in &distances_to(&grid, goal) {
            assert!(
                cell.manhattan(&goal) <= distance,
                "h{cell} = {} exceeds true distance {distance} on seed {seed}",
                cell.manhattan(&goal),
            );
        }
    }
}

#[test]
fn greedy_and_ids_are_valid_but_may_be_longer() {
    for seed in SEEDS {
        let grid = random_maze(5, 5, 25, seed);
        let optimal = Strategy::UniformCost.search(&grid, &SearchConfig::default()).unwrap();
        let optimal_len = optimal.metrics.path_length;

        for strategy in [Strategy::GreedyBestFirst, Strategy::IterativeDeepening, Strategy::DepthFirst] {
            let outcome = strategy.search(&grid, &SearchConfig::default()).unwrap();
            let path = outcome.path.unwrap();
            assert!(grid.is_valid_path(&path));
            assert!(outcome.metrics.path_length >= optimal_len);
        }
    }
}

#[test]
fn ids_finds_shallowest_path() {
    // goal is tested on generation, bounds grow one edge at a time
    for seed in SEEDS {
        let grid = random_maze(4, 5, 20, seed);
        let bfs = Strategy::BreadthFirst.search(&grid, &SearchConfig::default()).unwrap();
        let ids = Strategy::IterativeDeepening.search(&grid, &SearchConfig::default()).unwrap();

        assert_eq!(ids.metrics.path_length, bfs.metrics.path_length, "seed {seed}");
        assert_eq!(ids.metrics.iterations, ids.metrics.path_length + 1);
    }
}

#[test]
fn ids_respects_depth_bounds() {
    for seed in SEEDS {
        let mut grid = random_maze(4, 4, 20, seed);
        let goal = grid.default_goal();
        seal(&mut grid, goal);
        let cells = grid.len();

        let outcome = Strategy::IterativeDeepening.search(&grid, &SearchConfig::default()).unwrap();
        assert!(!outcome.is_found());
        assert!(outcome.metrics.iterations <= cells);
        assert!(outcome.metrics.expanded_nodes.len() <= cells);
        assert!(outcome.metrics.explored_cells.len() <= cells);
    }
}

#[test]
fn ids_depth_cap_can_cut_search_short() {
    let grid = Grid::open(4, 4).unwrap();

    // the goal is 6 moves away
    let capped = SearchConfig::default().with_max_depth(5);
    let outcome = Strategy::IterativeDeepening.search(&grid, &capped).unwrap();
    assert!(!outcome.is_found());
    assert_eq!(outcome.metrics.iterations, 6);

    let enough = SearchConfig::default().with_max_depth(6);
    let outcome = Strategy::IterativeDeepening.search(&grid, &enough).unwrap();
    assert_eq!(outcome.metrics.path_length, 6);
}

#[test]
fn repeated_runs_are_identical() {
    for seed in 0..5 {
        let grid = random_maze(6, 6, 10, seed)
            .with_cost_model(&CostModel::random(seed))
            .unwrap();

        for strategy in Strategy::ALL {
            let first = strategy.search(&grid, &SearchConfig::default()).unwrap();
            let second = strategy.search(&grid, &SearchConfig::default()).unwrap();

            assert_eq!(first.path, second.path, "{strategy}");
            assert_eq!(first.metrics.total_cost, second.metrics.total_cost);
            assert_eq!(first.metrics.iterations, second.metrics.iterations);
            assert!(first.metrics.expanded_nodes.iter().eq(second.metrics.expanded_nodes.iter()));
            assert!(first.metrics.explored_cells.iter().eq(second.metrics.explored_cells.iter()));
        }
    }
}

#[test]
fn same_seed_rebuilds_same_costs_and_path() {
    let build = |seed| random_maze(6, 6, 30, 99).with_cost_model(&CostModel::random(seed)).unwrap();

    let a = Strategy::UniformCost.search(&build(5), &SearchConfig::default()).unwrap();
    let b = Strategy::UniformCost.search(&build(5), &SearchConfig::default()).unwrap();
    assert_eq!(a.path, b.path);
    assert_eq!(a.metrics.total_cost, b.metrics.total_cost);
}

#[test]
fn searches_share_a_grid_across_threads() {
    let grid = random_maze(10, 10, 20, 3)
        .with_cost_model(&CostModel::random(3))
        .unwrap();
    let expected = Strategy::AStar.search(&grid, &SearchConfig::default()).unwrap().metrics.total_cost;

    std::thread::scope(|scope| {
        let handles: Vec<_> = [Strategy::AStar, Strategy::UniformCost]
            .into_iter()
            .map(|strategy| {
                let grid = &grid;
                scope.spawn(move || strategy.search(grid, &SearchConfig::default()).unwrap().metrics.total_cost)
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn comparison_summaries() {
    let grid = random_maze(6, 6, 10, 8);
    let results = compare(&grid, &SearchConfig::default(), &Strategy::CLASSICAL).unwrap();
    assert_eq!(results.len(), 4);

    for (strategy, outcome) in &results {
        let summary = outcome.metrics.summary();
        assert!(summary.expanded_nodes >= 1, "{strategy}");
        assert!(summary.explored_cells >= summary.path_length);
        assert_eq!(summary.total_cost.is_some(), strategy.is_optimal());
        assert!(summary.elapsed_secs >= 0.0);
    }
}
