use std::collections::VecDeque;

use super::history::MoveHistory;
use crate::{
    maze::Maze,
    solvers::{Solver, find_path},
};

/// Number of moves an agent can take back before the oldest are forgotten.
const MAX_UNDO_MOVES: usize = 100;

/// A search-driven racer on the maze.
///
/// The agent follows its planned route one cell per step, remembers where
/// it has been for undo, and keeps the full trail of cells it has left
/// for the host to display.
pub struct Agent {
    /// Algorithm used for every (re)plan
    solver: Solver,
    /// Cell the agent currently occupies
    current: (u8, u8),
    /// Remaining planned cells, next step at the front
    route: VecDeque<(u8, u8)>,
    /// Bounded undo stack of previously occupied cells
    history: MoveHistory,
    /// Every cell the agent has left, in visit order
    trail: Vec<(u8, u8)>,
}

impl Agent {
    /// Place an agent on `start` with a freshly planned route to `goal`.
    pub fn new(maze: &Maze, solver: Solver, start: (u8, u8), goal: (u8, u8)) -> Self {
        let mut agent = Agent {
            solver,
            current: start,
            route: VecDeque::new(),
            history: MoveHistory::new(MAX_UNDO_MOVES),
            trail: Vec::new(),
        };
        agent.replan(maze, goal);
        agent
    }

    pub fn solver(&self) -> Solver {
        self.solver
    }

    /// Cell the agent currently occupies.
    pub fn current(&self) -> (u8, u8) {
        self.current
    }

    /// Every cell the agent has left, in visit order.
    pub fn trail(&self) -> &[(u8, u8)] {
        &self.trail
    }

    /// Remaining planned cells, next step at the front.
    pub fn route(&self) -> &VecDeque<(u8, u8)> {
        &self.route
    }

    /// Advance one cell along the planned route and return the new cell,
    /// or None when no route is planned. The cell being left is recorded
    /// on the trail and the undo stack; once the route drains, a fresh
    /// one is planned toward `goal` from the new cell.
    pub fn step(&mut self, maze: &Maze, goal: (u8, u8)) -> Option<(u8, u8)> {
        let next = self.route.pop_front()?;
        self.trail.push(self.current);
        self.history.push(self.current);
        self.current = next;
        if self.route.is_empty() {
            self.replan(maze, goal);
        }
        tracing::debug!(solver = %self.solver, coord = ?self.current, "agent stepped");
        Some(self.current)
    }

    /// Move back to the most recently recorded cell, drop the trail tip,
    /// and replan toward `goal` from there. Returns the restored cell, or
    /// None when there is nothing left to undo.
    pub fn undo(&mut self, maze: &Maze, goal: (u8, u8)) -> Option<(u8, u8)> {
        let previous = self.history.pop()?;
        self.trail.pop();
        self.current = previous;
        self.replan(maze, goal);
        tracing::debug!(solver = %self.solver, coord = ?self.current, "agent move undone");
        Some(self.current)
    }

    /// Replace the planned route with a fresh one toward `target`.
    /// The trail and the undo history are left untouched.
    pub fn replan(&mut self, maze: &Maze, target: (u8, u8)) {
        self.route = find_path(maze, self.current, target, self.solver).into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;

    fn open_maze(width: u8, height: u8) -> Maze {
        let mut maze = Maze::new(width, height).unwrap();
        maze.clear_walls();
        maze
    }

    #[test]
    fn test_new_agent_has_planned_route() {
        let maze = open_maze(10, 10);
        for solver in [Solver::AStar, Solver::Dijkstra] {
            let agent = Agent::new(&maze, solver, (0, 0), (9, 9));
            assert_eq!(agent.current(), (0, 0));
            assert_eq!(agent.route().len(), 18);
            assert!(agent.trail().is_empty());
        }
    }

    #[test]
    fn test_step_then_undo_round_trip() {
        let maze = open_maze(10, 10);
        let goal = (9, 9);
        let mut agent = Agent::new(&maze, Solver::AStar, (0, 0), goal);
        for _ in 0..6 {
            assert!(agent.step(&maze, goal).is_some());
        }
        assert_ne!(agent.current(), (0, 0));
        for _ in 0..6 {
            assert!(agent.undo(&maze, goal).is_some());
        }
        assert_eq!(agent.current(), (0, 0));
        assert!(agent.trail().is_empty());
    }

    #[test]
    fn test_route_replans_when_drained() {
        let maze = open_maze(2, 2);
        let goal = (1, 1);
        let mut agent = Agent::new(&maze, Solver::Dijkstra, (0, 0), goal);
        assert!(agent.step(&maze, goal).is_some());
        assert_eq!(agent.step(&maze, goal), Some(goal));
        // At the goal the replanned route is empty, so stepping stops
        assert!(agent.route().is_empty());
        assert_eq!(agent.step(&maze, goal), None);
        assert_eq!(agent.current(), goal);
    }

    #[test]
    fn test_undo_with_empty_history_is_noop() {
        let maze = open_maze(5, 5);
        let mut agent = Agent::new(&maze, Solver::AStar, (0, 0), (4, 4));
        assert_eq!(agent.undo(&maze, (4, 4)), None);
        assert_eq!(agent.current(), (0, 0));
    }

    #[test]
    fn test_replan_keeps_trail_and_history() {
        let maze = open_maze(10, 10);
        let goal = (9, 9);
        let mut agent = Agent::new(&maze, Solver::AStar, (0, 0), goal);
        for _ in 0..4 {
            agent.step(&maze, goal);
        }
        let trail_before = agent.trail().to_vec();
        let position = agent.current();

        agent.replan(&maze, (0, 9));
        assert_eq!(agent.trail(), trail_before);
        assert_eq!(agent.current(), position);
        // Undo still works against the history recorded before the replan
        assert!(agent.undo(&maze, goal).is_some());
    }

    #[test]
    fn test_undo_stops_at_history_cap() {
        let maze = open_maze(10, 10);
        let corners = [(9, 9), (0, 0)];

        // Walk corner to corner until well past the 100-move cap
        let mut agent = Agent::new(&maze, Solver::AStar, (0, 0), corners[0]);
        let mut steps = 0;
        for leg in 0..7 {
            let target = corners[leg % 2];
            agent.replan(&maze, target);
            while agent.current() != target {
                agent.step(&maze, target);
                steps += 1;
            }
        }
        assert_eq!(steps, 7 * 18);
        assert_eq!(agent.trail().len(), steps);

        let mut undos = 0;
        while agent.undo(&maze, corners[0]).is_some() {
            undos += 1;
        }
        assert_eq!(undos, 100);
        assert_eq!(agent.trail().len(), steps - 100);
    }
}
