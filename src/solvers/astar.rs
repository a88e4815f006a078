use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use super::{FrontierCell, reconstruct_route};
use crate::maze::{Maze, get_neighbors};

/// Manhattan distance between two cells.
fn heuristic(a: (u8, u8), b: (u8, u8)) -> usize {
    a.0.abs_diff(b.0) as usize + a.1.abs_diff(b.1) as usize
}

/// Heuristic best-first search (A*) from `start` to `goal`.
///
/// The frontier is ordered by traveled cost plus the Manhattan estimate
/// to the goal; the estimate never overshoots on a 4-connected grid with
/// unit step costs, so the returned route is always a shortest one.
/// Entries with equal priority pop in binary-heap order, which is
/// deterministic for a fixed maze, start, and goal.
pub fn solve_astar(maze: &Maze, start: (u8, u8), goal: (u8, u8)) -> Vec<(u8, u8)> {
    if !maze.is_open(start) || !maze.is_open(goal) {
        return Vec::new();
    }

    // Using Reverse to turn the max-heap into a min-heap
    let mut frontier: BinaryHeap<Reverse<FrontierCell>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierCell {
        coord: start,
        traveling_cost: 0,
        heuristic_cost: heuristic(start, goal),
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
                heuristic_cost: heuristic(neighbor, goal),
            }));
        }
    }

    tracing::debug!(?start, ?goal, "goal unreachable from start");
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_is_manhattan() {
        assert_eq!(heuristic((0, 0), (3, 4)), 7);
        assert_eq!(heuristic((3, 4), (0, 0)), 7);
        assert_eq!(heuristic((5, 5), (5, 5)), 0);
    }
}
