use mazerace::{game::GameState, solvers::Solver};

/// Run full generate-and-race cycles at the largest supported size so the
/// engine can be profiled without any interactive input.
fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(100);

    for _ in 0..num_iters {
        let mut game = GameState::new(30, 30, None).expect("dimensions are non-zero");
        let mut rounds = 0usize;
        loop {
            rounds += 1;
            game.step_agent(Solver::AStar);
            game.step_agent(Solver::Dijkstra);
            if game.agent_goal_reached(Solver::AStar) || game.agent_goal_reached(Solver::Dijkstra) {
                break;
            }
        }
        tracing::debug!(rounds, "profiling race finished");
    }
}
