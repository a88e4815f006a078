pub mod agent;
mod history;

use agent::Agent;

use crate::{
    generators,
    maze::{Maze, MazeError},
    solvers::{Solver, find_path},
};

/// Cardinal movement directions for the human player.
#[derive(Debug, Copy, Clone)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One race session: the maze, the human player, and the two search
/// agents competing for the goal.
///
/// The session owns the maze; it is generated once per reset and read-only
/// in between. All mutation goes through the methods below, invoked one at
/// a time by the host between discrete events.
pub struct GameState {
    maze: Maze,
    /// Tracks where the player currently is
    player: (u8, u8),
    /// Goal position
    goal: (u8, u8),
    astar: Agent,
    dijkstra: Agent,
    /// Set once the player reaches the goal; freezes all movement
    game_over: bool,
}

impl GameState {
    /// Set up a session with a freshly generated maze and every token at
    /// the start cell. Both agents begin with planned routes to the goal.
    pub fn new(width: u8, height: u8, seed: Option<u64>) -> Result<Self, MazeError> {
        let maze = generators::generate(width, height, seed)?;
        let start = maze.start();
        let goal = maze.goal();
        let astar = Agent::new(&maze, Solver::AStar, start, goal);
        let dijkstra = Agent::new(&maze, Solver::Dijkstra, start, goal);
        tracing::info!(width, height, "race session initialized");
        Ok(GameState {
            maze,
            player: start,
            goal,
            astar,
            dijkstra,
            game_over: false,
        })
    }

    /// Replace the maze wholesale and put every token back at the start.
    /// Used both for plain resets and for dimension changes.
    pub fn reset(&mut self, width: u8, height: u8, seed: Option<u64>) -> Result<(), MazeError> {
        *self = GameState::new(width, height, seed)?;
        Ok(())
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> (u8, u8) {
        self.player
    }

    pub fn goal(&self) -> (u8, u8) {
        self.goal
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Check if the player has reached the goal.
    pub fn player_won(&self) -> bool {
        self.player == self.goal
    }

    /// The agent racing with the given algorithm.
    pub fn agent(&self, solver: Solver) -> &Agent {
        match solver {
            Solver::AStar => &self.astar,
            Solver::Dijkstra => &self.dijkstra,
        }
    }

    /// Check if the given agent's token sits on the goal cell.
    pub fn agent_goal_reached(&self, solver: Solver) -> bool {
        self.agent(solver).current() == self.goal
    }

    /// Attempt to move the player one cell in the given direction.
    /// Returns the new position, or None if the move leaves the maze or
    /// runs into a wall.
    pub fn move_player(&mut self, direction: Direction) -> Option<(u8, u8)> {
        if self.game_over {
            return None;
        }
        let (x, y) = self.player;
        let new_pos = match direction {
            Direction::Left => (x.checked_sub(1)?, y),
            Direction::Right => (x.checked_add(1)?, y),
            Direction::Up => (x, y.checked_sub(1)?),
            Direction::Down => (x, y.checked_add(1)?),
        };
        if !self.maze.is_open(new_pos) {
            return None;
        }
        self.player = new_pos;
        tracing::debug!(coord = ?new_pos, "player moved");
        if self.player == self.goal {
            self.game_over = true;
            tracing::info!("player reached the goal");
        }
        Some(new_pos)
    }

    /// Move the player a single cell along the best-first route toward
    /// `target`, as when the host reports a click on a distant cell.
    /// Returns the new position, or None when the target is unreachable.
    pub fn step_player_toward(&mut self, target: (u8, u8)) -> Option<(u8, u8)> {
        if self.game_over {
            return None;
        }
        let route = find_path(&self.maze, self.player, target, Solver::AStar);
        let &next = route.first()?;
        let direction = direction_between(self.player, next)?;
        self.move_player(direction)
    }

    /// Step the chosen agent one cell along its route. No-op once the
    /// player has won.
    pub fn step_agent(&mut self, solver: Solver) -> Option<(u8, u8)> {
        if self.game_over {
            return None;
        }
        let goal = self.goal;
        let (maze, agent) = self.maze_and_agent_mut(solver);
        agent.step(maze, goal)
    }

    /// Take back the chosen agent's last move. No-op once the player has
    /// won.
    pub fn undo_agent(&mut self, solver: Solver) -> Option<(u8, u8)> {
        if self.game_over {
            return None;
        }
        let goal = self.goal;
        let (maze, agent) = self.maze_and_agent_mut(solver);
        agent.undo(maze, goal)
    }

    /// Re-aim the chosen agent at an arbitrary target cell. The agent's
    /// trail and undo history are left untouched.
    pub fn replan_agent(&mut self, solver: Solver, target: (u8, u8)) {
        let (maze, agent) = self.maze_and_agent_mut(solver);
        agent.replan(maze, target);
    }

    fn maze_and_agent_mut(&mut self, solver: Solver) -> (&Maze, &mut Agent) {
        match solver {
            Solver::AStar => (&self.maze, &mut self.astar),
            Solver::Dijkstra => (&self.maze, &mut self.dijkstra),
        }
    }

    #[cfg(test)]
    /// Build a session over a hand-crafted maze for testing purposes.
    fn with_maze(maze: Maze) -> Self {
        let start = maze.start();
        let goal = maze.goal();
        let astar = Agent::new(&maze, Solver::AStar, start, goal);
        let dijkstra = Agent::new(&maze, Solver::Dijkstra, start, goal);
        GameState {
            maze,
            player: start,
            goal,
            astar,
            dijkstra,
            game_over: false,
        }
    }
}

/// Direction of a single axis-aligned step from `from` to `to`, if any.
fn direction_between(from: (u8, u8), to: (u8, u8)) -> Option<Direction> {
    let dx = to.0 as i16 - from.0 as i16;
    let dy = to.1 as i16 - from.1 as i16;
    match (dx, dy) {
        (-1, 0) => Some(Direction::Left),
        (1, 0) => Some(Direction::Right),
        (0, -1) => Some(Direction::Up),
        (0, 1) => Some(Direction::Down),
        _ => None,
    }
}
