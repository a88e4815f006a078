use mazerace::{game::GameState, solvers::Solver};

/// Smallest maze dimension the host accepts, per axis.
const MIN_MAZE_SIZE: u8 = 10;
/// Largest maze dimension the host accepts, per axis.
const MAX_MAZE_SIZE: u8 = 30;

fn main() -> std::io::Result<()> {
    let _log_guard = init_logging();

    let mut input = String::new();
    println!(
        "Enter maze dimensions (width height). Sizes are clamped to {MIN_MAZE_SIZE}..={MAX_MAZE_SIZE}:"
    );
    std::io::stdin().read_line(&mut input)?;

    // Parse the input dimensions
    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<u8>().ok())
        .collect::<Vec<_>>();

    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for width and height.");
        return Ok(());
    }

    // Out-of-range sizes are recovered here at the host boundary; the
    // engine itself only refuses zero-sized grids
    let width = dims[0].clamp(MIN_MAZE_SIZE, MAX_MAZE_SIZE);
    let height = dims[1].clamp(MIN_MAZE_SIZE, MAX_MAZE_SIZE);

    println!("Enter a generation seed, or leave empty for a random maze:");
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    let seed = input.trim().parse::<u64>().ok();

    let mut game = match GameState::new(width, height, seed) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    println!(
        "Racing {} against {} on a {width}x{height} maze...",
        Solver::AStar,
        Solver::Dijkstra
    );

    let (winner, steps) = race(&mut game);
    println!("{winner} reached the goal first, after {steps} steps.");
    for solver in [Solver::AStar, Solver::Dijkstra] {
        println!(
            "  {solver}: visited {} cells",
            game.agent(solver).trail().len()
        );
    }
    Ok(())
}

/// Step both agents in lockstep until one of them reaches the goal.
/// Returns the winning algorithm and the number of rounds it took.
fn race(game: &mut GameState) -> (Solver, usize) {
    let mut rounds = 0;
    loop {
        rounds += 1;
        for solver in [Solver::AStar, Solver::Dijkstra] {
            game.step_agent(solver);
            if game.agent_goal_reached(solver) {
                tracing::info!(winner = %solver, rounds, "race finished");
                return (solver, rounds);
            }
        }
    }
}

/// Log to a file so stdout stays clean for the race report.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), "mazerace.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}
