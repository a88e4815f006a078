use rand::{SeedableRng, rngs::StdRng};

mod prim;

pub use prim::randomized_prim;

use crate::maze::{Maze, MazeError};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Build a freshly carved maze of the given dimensions.
///
/// Refuses zero-sized grids; any `width, height >= 1` always yields a
/// usable maze with the start and goal cells open.
pub fn generate(width: u8, height: u8, seed: Option<u64>) -> Result<Maze, MazeError> {
    let mut maze = Maze::new(width, height)?;
    randomized_prim(&mut maze, seed);
    Ok(maze)
}
