use anyhow::{anyhow, Result};

use crate::types::DEFAULT_BOARD_SIZE;

/// Default cap on moves played by one autoplay run
pub const DEFAULT_MAX_MOVES: u32 = 100_000;

/// Default tracing filter for the runner
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const USAGE: &str = "\
usage: tui-2048 [--seed <u64>] [--size <n>] [--max-moves <n>] [--stop-at-win] [--json] [--log <filter>]

Plays one game of random legal moves and prints the final board.

  --seed <u64>       tile and move seed (random if omitted)
  --size <n>         board edge length, at least 2 (default 4)
  --max-moves <n>    stop after this many moves (default 100000)
  --stop-at-win      stop on reaching 2048 instead of continuing
  --json             print the final snapshot as JSON
  --log <filter>     tracing filter, e.g. \"info\" or \"tui_2048_core=debug\" (default warn)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub size: usize,
    pub max_moves: u32,
    pub stop_at_win: bool,
    pub json: bool,
    pub log: String,
    pub show_help: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            size: DEFAULT_BOARD_SIZE,
            max_moves: DEFAULT_MAX_MOVES,
            stop_at_win: false,
            json: false,
            log: DEFAULT_LOG_FILTER.to_string(),
            show_help: false,
        }
    }
}

/// Parse runner arguments (without the program name)
pub fn parse_run_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = value_for(args, i, "--seed")?;
                config.seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--size" => {
                i += 1;
                let v = value_for(args, i, "--size")?;
                config.size = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --size value: {}", v))?;
            }
            "--max-moves" => {
                i += 1;
                let v = value_for(args, i, "--max-moves")?;
                config.max_moves = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --max-moves value: {}", v))?;
            }
            "--log" => {
                i += 1;
                config.log = value_for(args, i, "--log")?.to_string();
            }
            "--stop-at-win" => config.stop_at_win = true,
            "--json" => config.json = true,
            "-h" | "--help" => config.show_help = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn value_for<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}
