use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use super::{FrontierCell, reconstruct_route};
use crate::maze::{Maze, get_neighbors};

/// Uniform-cost search (Dijkstra) from `start` to `goal`.
///
/// The frontier is ordered by cumulative traveled cost alone, with no
/// goal-directed bias; on a unit-cost grid this expands more cells than
/// the best-first search but returns a route of the same length.
/// Entries with equal cost pop in binary-heap order, which is
/// deterministic for a fixed maze, start, and goal.
pub fn solve_dijkstra(maze: &Maze, start: (u8, u8), goal: (u8, u8)) -> Vec<(u8, u8)> {
    if !maze.is_open(start) || !maze.is_open(goal) {
        return Vec::new();
    }

    // Using Reverse to turn the max-heap into a min-heap
    let mut frontier: BinaryHeap<Reverse<FrontierCell>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierCell {
        coord: start,
        traveling_cost: 0,
        heuristic_cost: 0,
    }));

    // Predecessor of each cell on its best known path
    let mut came_from: HashMap<(u8, u8), (u8, u8)> = HashMap::new();
    // Minimum known cost to reach each cell from the start
    let mut costs: HashMap<(u8, u8), usize> = HashMap::from([(start, 0)]);

    while let Some(Reverse(current)) = frontier.pop() {
        if current.coord == goal {
            return reconstruct_route(&came_from, goal);
        }

        let new_cost = current.traveling_cost + 1; // Uniform cost for each step
        for neighbor in get_neighbors(current.coord, maze) {
            if !maze.is_open(neighbor) {
                continue;
            }
            // Only relax neighbors reachable strictly cheaper than before
            let is_cheaper = match costs.get(&neighbor) {
                Some(&existing_cost) => new_cost < existing_cost,
                None => true,
            };
            if !is_cheaper {
                continue;
            }
            costs.insert(neighbor, new_cost);
            came_from.insert(neighbor, current.coord);
            frontier.push(Reverse(FrontierCell {
                coord: neighbor,
                traveling_cost: new_cost,
                heuristic_cost: 0,
            }));
        }
    }

    tracing::debug!(?start, ?goal, "goal unreachable from start");
    Vec::new()
}
