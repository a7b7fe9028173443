use anyhow::Context;
use clap::{ArgAction, Parser};
use log::{info, warn};
use ol3ditor::input::parse_script;
use ol3ditor::{Config, MeasureMode, MeasureToolbar, SessionState};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("OL3DITOR_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "ol3ditor")]
#[command(version = VERSION, about = "Replay pointer events through a map measuring tool")]
struct Cli {
    /// Quantity to measure (length, area or angle)
    #[arg(long, short = 'm', value_name = "MODE", default_value = "length")]
    mode: MeasureMode,

    /// Event script to replay, one `<move|click|dblclick|drag> <x> <y>` per line (stdin if omitted)
    #[arg(long, short = 'e', value_name = "FILE")]
    events: Option<PathBuf>,

    /// Print every session update as a JSON line instead of only the results
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Config file to use instead of ~/.config/ol3ditor/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let source = match &cli.events {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read events from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read events from stdin")?;
            buffer
        }
    };
    let events = parse_script(&source).context("Invalid event script")?;

    let mut toolbar = MeasureToolbar::from_config(&config);
    toolbar.activate(cli.mode);

    let mut stdout = io::stdout().lock();
    let mut finished = 0usize;
    for event in &events {
        for (_, update) in toolbar.dispatch(event) {
            if cli.json {
                serde_json::to_writer(&mut stdout, &update)?;
                writeln!(stdout)?;
            } else if let Some(result) = &update.result {
                writeln!(stdout, "{result}")?;
            }
            if update.result.is_some() {
                finished += 1;
            }
        }
    }

    if toolbar.session(cli.mode).state() == SessionState::Active {
        warn!("Script ended mid-measurement; discarding unfinished {} measurement", cli.mode);
    }
    toolbar.deactivate_all();

    info!(
        "Replayed {} events, {finished} {} measurement(s) finished",
        events.len(),
        cli.mode
    );
    if finished == 0 && cli.mode == MeasureMode::Angle {
        info!("Angle measurements finish on the third click (center, start, end)");
    }

    Ok(())
}
