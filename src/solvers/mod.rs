use std::{cmp::Ordering, collections::HashMap};

mod astar;
mod dijkstra;

pub use astar::solve_astar;
pub use dijkstra::solve_dijkstra;

use crate::maze::Maze;

/// Search algorithm an agent plans its routes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    AStar,
    Dijkstra,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::AStar => write!(f, "Best-First Search (A*)"),
            Solver::Dijkstra => write!(f, "Uniform-Cost Search (Dijkstra)"),
        }
    }
}

/// Find the shortest route between two cells with the selected algorithm.
///
/// The returned route excludes `start` and ends at `goal`. It is empty
/// when the goal is unreachable, when either endpoint is out of bounds or
/// a wall, and when `start == goal`.
pub fn find_path(maze: &Maze, start: (u8, u8), goal: (u8, u8), solver: Solver) -> Vec<(u8, u8)> {
    match solver {
        Solver::AStar => solve_astar(maze, start, goal),
        Solver::Dijkstra => solve_dijkstra(maze, start, goal),
    }
}

/// Frontier entry for the priority-queue searches.
#[derive(Debug, Clone, Copy)]
struct FrontierCell {
    /// Coordinates of the cell in the maze
    coord: (u8, u8),
    /// Cost to reach this cell from the search start
    traveling_cost: usize,
    /// Estimated remaining cost to the goal; zero for uniform-cost search
    heuristic_cost: usize,
}

impl FrontierCell {
    fn priority(&self) -> usize {
        self.traveling_cost + self.heuristic_cost
    }
}

impl Ord for FrontierCell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for FrontierCell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierCell {
    fn eq(&self, other: &Self) -> bool {
        self.priority() == other.priority()
    }
}

impl Eq for FrontierCell {}

/// Walk predecessor links from `goal` back to the search start, then
/// reverse into start-to-goal order. The start cell itself has no
/// predecessor entry and is excluded from the route.
fn reconstruct_route(came_from: &HashMap<(u8, u8), (u8, u8)>, goal: (u8, u8)) -> Vec<(u8, u8)> {
    let mut route = Vec::new();
    let mut current = goal;
    while let Some(&parent) = came_from.get(&current) {
        route.push(current);
        current = parent;
    }
    route.reverse();
    route
}
