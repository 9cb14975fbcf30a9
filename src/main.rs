//! Headless 2048 runner (default binary).
//!
//! Plays one game with random legal moves from a seed and prints the result.
//! There is no interactive front end here; input capture and rendering belong
//! to whatever embeds `tui_2048::core`.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tui_2048::autoplay::{autoplay, CHOOSER_SALT};
use tui_2048::config::{parse_run_args, USAGE};
use tui_2048::core::{seeded_rng, Session};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_run_args(&args)?;
    if config.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log.clone()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, size = config.size, "starting autoplay");

    let mut session = Session::new(config.size, seeded_rng(seed))?;
    let mut chooser = seeded_rng(seed ^ CHOOSER_SALT);
    let report = autoplay(&mut session, &mut chooser, &config, seed);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", session.state().board());
        println!(
            "score {}  max tile {}  moves {}  status {}  seed {}",
            report.snapshot.score,
            report.snapshot.max_tile,
            report.moves,
            report.snapshot.status.as_str(),
            report.seed
        );
    }

    Ok(())
}
