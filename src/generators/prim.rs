use rand::Rng;

use crate::maze::{GridCell, Maze, get_neighbors};

/// Carves the maze with randomized frontier growth (Prim's style).
///
/// Wall cells bordering the carved region are kept in a candidate list,
/// each paired with the open cell it was reached from. Every round draws
/// one candidate uniformly at random and carves through it to the cell two
/// steps beyond its origin, provided that far cell is still a wall. A
/// candidate whose far cell lies outside the maze is opened on its own;
/// such a border cell stays attached to its origin without extending the
/// tree, so the open region remains connected but can pick up a cycle
/// along the border. The start and goal cells are forced open at the end,
/// which can give the goal a second entrance.
pub fn randomized_prim(maze: &mut Maze, seed: Option<u64>) {
    let mut rng = super::get_rng(seed);

    maze.fill_walls();

    let start = maze.start();
    maze.set(start, GridCell::Open);

    // Candidate walls paired with the open cell they border
    let mut frontier: Vec<((u8, u8), (u8, u8))> = get_neighbors(start, maze)
        .map(|coord| (coord, start))
        .collect();

    while !frontier.is_empty() {
        // Candidates are drawn uniformly at random, never in insertion order
        let index = rng.random_range(0..frontier.len());
        let (wall, origin) = frontier.swap_remove(index);

        match far_cell(wall, origin, maze) {
            Some(far) if maze[far] == GridCell::Wall => {
                // Carve a passage through the wall into the far cell
                maze.set(wall, GridCell::Open);
                maze.set(far, GridCell::Open);

                let new_candidates = get_neighbors(far, maze)
                    .filter(|&coord| maze[coord] == GridCell::Wall)
                    .map(|coord| (coord, far))
                    .collect::<Vec<_>>();
                frontier.extend(new_candidates);
            }
            // Far cell already carved; the candidate is simply dropped
            Some(_) => {}
            None => {
                // Far cell is out of bounds; the wall is opened anyway
                maze.set(wall, GridCell::Open);
            }
        }
    }

    // Guard against the goal being stranded as a wall when no carve lands
    // on it
    maze.set(start, GridCell::Open);
    maze.set(maze.goal(), GridCell::Open);

    tracing::debug!(
        width = maze.width(),
        height = maze.height(),
        "maze carved"
    );
}

/// Cell two steps from `origin` through `wall`, if it is in bounds.
fn far_cell(wall: (u8, u8), origin: (u8, u8), maze: &Maze) -> Option<(u8, u8)> {
    let fx = wall.0 as i16 * 2 - origin.0 as i16;
    let fy = wall.1 as i16 * 2 - origin.1 as i16;
    if (0..maze.width() as i16).contains(&fx) && (0..maze.height() as i16).contains(&fy) {
        Some((fx as u8, fy as u8))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;

    /// Flood fill over open cells starting from the maze's start cell.
    fn reachable_open_cells(maze: &Maze) -> HashSet<(u8, u8)> {
        let mut seen = HashSet::from([maze.start()]);
        let mut queue = VecDeque::from([maze.start()]);
        while let Some(coord) = queue.pop_front() {
            for neighbor in get_neighbors(coord, maze) {
                if maze.is_open(neighbor) && seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        seen
    }

    #[test]
    fn test_start_and_goal_open() {
        for seed in 0..5 {
            let mut maze = Maze::new(12, 9).unwrap();
            randomized_prim(&mut maze, Some(seed));
            assert!(maze.is_open(maze.start()));
            assert!(maze.is_open(maze.goal()));
        }
    }

    #[test]
    fn test_open_cells_form_one_component() {
        for (width, height) in [(2, 2), (5, 5), (13, 7), (20, 20)] {
            for seed in 0..5 {
                let mut maze = Maze::new(width, height).unwrap();
                randomized_prim(&mut maze, Some(seed));

                let reachable = reachable_open_cells(&maze);
                let open_count = maze.cells().iter().filter(|cell| cell.is_open()).count();
                assert_eq!(
                    reachable.len(),
                    open_count,
                    "disconnected open cell in {width}x{height} maze with seed {seed}"
                );
            }
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let mut first = Maze::new(15, 15).unwrap();
        randomized_prim(&mut first, Some(42));
        let mut second = Maze::new(15, 15).unwrap();
        randomized_prim(&mut second, Some(42));
        assert_eq!(first.cells(), second.cells());
    }

    #[test]
    fn test_single_cell_maze() {
        let mut maze = Maze::new(1, 1).unwrap();
        randomized_prim(&mut maze, Some(0));
        assert!(maze.is_open((0, 0)));
        assert_eq!(maze.start(), maze.goal());
    }
}
