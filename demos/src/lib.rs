//! Support code for the `mazewalk` command-line demo: argument parsing and
//! logging setup.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use mazewalk_driver::{Algorithm, SolveConfig, UnknownAlgorithm};
use tracing_subscriber::EnvFilter;

pub const USAGE: &str = "\
usage: mazewalk <maze-file> [--algo NAME] [--delay-ms N] [--seed N] [--all]

Maze files use `#` for walls, `.` or space for open cells, and exactly one
`S` and one `E`.

  --algo NAME     bfs, dfs, astar, dijkstra or q-learning (default bfs)
  --delay-ms N    pause between solver steps (default 0)
  --seed N        seed for Q-learning exploration
  --all           run every strategy and print a comparison
  -h, --help      show this message

Set MAZEWALK_LOG to a filter such as `debug` or `mazewalk_rl=trace` for
diagnostics on stderr.";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub maze: PathBuf,
    /// Strategies to run, in order.
    pub algorithms: Vec<Algorithm>,
    pub delay: Duration,
    pub seed: Option<u64>,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Options),
    Help,
}

/// A malformed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum UsageError {
    MissingMaze,
    MissingValue(&'static str),
    BadNumber { flag: &'static str, value: String },
    UnknownFlag(String),
    ExtraArgument(String),
    Algorithm(UnknownAlgorithm),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMaze => write!(f, "missing maze file"),
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::BadNumber { flag, value } => {
                write!(f, "{flag}: \u{201c}{value}\u{201d} is not a non-negative integer")
            }
            Self::UnknownFlag(flag) => write!(f, "unknown option {flag}"),
            Self::ExtraArgument(arg) => write!(f, "unexpected argument \u{201c}{arg}\u{201d}"),
            Self::Algorithm(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for UsageError {}

impl From<UnknownAlgorithm> for UsageError {
    fn from(e: UnknownAlgorithm) -> Self {
        Self::Algorithm(e)
    }
}

impl Options {
    /// Parse arguments, program name excluded.
    pub fn parse<I, S>(args: I) -> Result<Command, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut maze = None;
        let mut algorithm = Algorithm::default();
        let mut all = false;
        let mut delay = Duration::ZERO;
        let mut seed = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--all" => all = true,
                "--algo" => {
                    let v = args.next().ok_or(UsageError::MissingValue("--algo"))?;
                    algorithm = v.parse()?;
                }
                "--delay-ms" => {
                    let v = args.next().ok_or(UsageError::MissingValue("--delay-ms"))?;
                    delay = Duration::from_millis(number("--delay-ms", v)?);
                }
                "--seed" => {
                    let v = args.next().ok_or(UsageError::MissingValue("--seed"))?;
                    seed = Some(number("--seed", v)?);
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(UsageError::UnknownFlag(arg));
                }
                _ if maze.is_none() => maze = Some(PathBuf::from(arg)),
                _ => return Err(UsageError::ExtraArgument(arg)),
            }
        }

        let maze = maze.ok_or(UsageError::MissingMaze)?;
        let algorithms = if all {
            Algorithm::ALL.to_vec()
        } else {
            vec![algorithm]
        };
        Ok(Command::Run(Options {
            maze,
            algorithms,
            delay,
            seed,
        }))
    }

    /// Solve configuration for one of the selected strategies.
    pub fn solve_config(&self, algorithm: Algorithm) -> SolveConfig {
        SolveConfig {
            algorithm,
            delay: self.delay,
            seed: self.seed,
            ..Default::default()
        }
    }
}

fn number(flag: &'static str, value: String) -> Result<u64, UsageError> {
    value
        .parse()
        .map_err(|_| UsageError::BadNumber { flag, value })
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "MAZEWALK_LOG";

const DEFAULT_LOG: &str = "warn";

/// Filter built from `directives`, or `warn` when absent or malformed.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG))
}

/// Install a stderr subscriber filtered by `MAZEWALK_LOG`.
///
/// Records from the `log` facade used by the solver crates are bridged into
/// it. Does nothing if a subscriber is already installed.
pub fn init_logger() {
    let filter = log_filter(std::env::var(LOG_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Options {
        match Options::parse(args.iter().copied()) {
            Ok(Command::Run(o)) => o,
            other => panic!("expected options, got {other:?}"),
        }
    }

    #[test]
    fn defaults() {
        let o = run(&["maze.txt"]);
        assert_eq!(o.maze, PathBuf::from("maze.txt"));
        assert_eq!(o.algorithms, vec![Algorithm::Bfs]);
        assert_eq!(o.delay, Duration::ZERO);
        assert_eq!(o.seed, None);
    }

    #[test]
    fn all_flags() {
        let o = run(&["--algo", "A*", "m.txt", "--delay-ms", "25", "--seed", "7"]);
        assert_eq!(o.algorithms, vec![Algorithm::Astar]);
        assert_eq!(o.delay, Duration::from_millis(25));
        assert_eq!(o.seed, Some(7));
        let cfg = o.solve_config(Algorithm::QLearning);
        assert_eq!(cfg.algorithm, Algorithm::QLearning);
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn all_runs_every_strategy() {
        let o = run(&["m.txt", "--all"]);
        assert_eq!(o.algorithms, Algorithm::ALL.to_vec());
    }

    #[test]
    fn help() {
        assert_eq!(Options::parse(["-h"]), Ok(Command::Help));
        assert_eq!(Options::parse(["m.txt", "--help"]), Ok(Command::Help));
    }

    #[test]
    fn usage_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(Options::parse(empty), Err(UsageError::MissingMaze));
        assert_eq!(
            Options::parse(["m.txt", "--algo"]),
            Err(UsageError::MissingValue("--algo"))
        );
        assert!(matches!(
            Options::parse(["m.txt", "--delay-ms", "-3"]),
            Err(UsageError::BadNumber { flag: "--delay-ms", .. })
        ));
        assert_eq!(
            Options::parse(["m.txt", "--fast"]),
            Err(UsageError::UnknownFlag("--fast".into()))
        );
        assert_eq!(
            Options::parse(["a.txt", "b.txt"]),
            Err(UsageError::ExtraArgument("b.txt".into()))
        );
        assert_eq!(
            UsageError::ExtraArgument("b.txt".into()).to_string(),
            "unexpected argument \u{201c}b.txt\u{201d}"
        );
        let err = Options::parse(["m.txt", "--algo", "greedy"]).unwrap_err();
        assert!(matches!(err, UsageError::Algorithm(_)));
        assert!(err.to_string().contains("greedy"));
    }

    #[test]
    fn log_filters() {
        use tracing_subscriber::filter::LevelFilter;
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("mazewalk_rl=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
