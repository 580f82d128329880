//! Solve a maze file with one or all strategies and print the result.
//!
//! Run: `cargo run --bin mazewalk -- demos/mazes/loops.txt --all`

use std::fs;

use mazewalk_core::{Event, Puzzle, Stepper};
use mazewalk_demos::{Command, Options, USAGE, init_logger};
use mazewalk_driver::{MazeStats, Player, Solver, TraceStats, render};

fn main() {
    init_logger();
    if let Err(e) = run() {
        eprintln!("mazewalk: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = match Options::parse(std::env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    let text = fs::read_to_string(&opts.maze)
        .map_err(|e| format!("{}: {e}", opts.maze.display()))?;
    let puzzle = Puzzle::parse(&text)?;
    log::info!(
        "loaded {}: start {}, end {}",
        opts.maze.display(),
        puzzle.start,
        puzzle.end
    );
    println!("{}", MazeStats::new(&puzzle.maze));

    let mut summary = Vec::with_capacity(opts.algorithms.len());
    for &algorithm in &opts.algorithms {
        let config = opts.solve_config(algorithm);
        let solver = Solver::for_puzzle(&config, &puzzle)?;
        println!("\n{} ({})", algorithm.label(), algorithm.complexity());

        let player = Player::new(config.delay);
        let playback = player.run(solver.solve(), |ev| {
            if let Event::TrainingProgress { message } = ev {
                println!("  {message}");
            }
        });

        println!("{}", render(&puzzle.maze, &playback.trace, puzzle.start, puzzle.end));
        let stats = TraceStats::new(algorithm, &puzzle.maze, &playback.trace, playback.elapsed);
        println!("{stats}");
        summary.push(stats);
    }

    if summary.len() > 1 {
        println!("\nsummary");
        for stats in &summary {
            println!("  {stats}");
        }
    }
    Ok(())
}
