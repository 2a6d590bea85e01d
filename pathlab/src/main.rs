//! pathlab — compare BFS, Dijkstra and A* on an obstacle grid.
//!
//! Usage: `pathlab [MAZE_FILE]`. Without an argument the built-in demo maze
//! is used. Prints one stats line per engine and exports the A* path to
//! `exploration.csv`.

use std::path::Path;

use pathlab::{Algorithm, DEMO_MAZE, Session, explog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let maze = match std::env::args().nth(1) {
        Some(file) => std::fs::read_to_string(file)?,
        None => DEMO_MAZE.to_string(),
    };
    let mut session = Session::from_maze(&maze)?;

    for algo in Algorithm::ALL {
        session.run(algo);
        println!("{}", session.stats_line(algo));
    }

    if let Some(result) = session.result(Algorithm::AStar) {
        if result.found() {
            let out = Path::new("exploration.csv");
            // Best effort: a failed export never affects the results above.
            match explog::export(out, &result.path) {
                Ok(()) => println!("wrote {} path steps to {}", result.path.len(), out.display()),
                Err(err) => log::warn!("exploration log not written: {err}"),
            }
        }
    }

    Ok(())
}
