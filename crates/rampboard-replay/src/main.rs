mod runner;

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::Parser;
use rampboard_core::config::Config;
use tracing::{info, warn};

use runner::{Outcome, Scenario, run_scenario};

#[derive(Parser, Debug)]
#[command(
    name = "rampboard-replay",
    about = "Replays task-board interaction scenarios without a browser"
)]
struct Args {
    #[arg(long, default_value = "crates/rampboard-replay/scenarios/shift_flow.json")]
    scenario: Vec<PathBuf>,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides `[log] level` from the config.
    #[arg(long)]
    log_level: Option<String>,

    /// Print the final board of each scenario as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = load_config(args.config.as_deref())?;
    init_tracing(args.log_level.as_deref().unwrap_or(&cfg.log.level))?;

    let scenarios = load_scenarios(&args.scenario)?;
    if scenarios.is_empty() {
        return Err(anyhow!("no scenarios loaded"));
    }

    for scenario in scenarios {
        let name = scenario.name.clone();
        let (lines, outcome) = run_scenario(scenario, &cfg.nav.default_target)
            .with_context(|| format!("scenario {name} failed"))?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            print_report(&lines, &outcome);
        }
    }

    info!("done");
    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(level)
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
        .map_err(|e| anyhow!("invalid log level: {e}"))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    Config::parse(&text).with_context(|| format!("failed to parse config {}", path.display()))
}

fn load_scenarios(paths: &[PathBuf]) -> anyhow::Result<Vec<Scenario>> {
    let mut out = Vec::new();

    for path in paths {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        let scenario: Scenario = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        if scenario.steps.is_empty() {
            warn!(scenario = %scenario.name, "scenario has no steps");
        }
        out.push(scenario);
    }

    Ok(out)
}

fn print_report(lines: &[String], outcome: &Outcome) {
    println!("Scenario: {}", outcome.scenario);
    for (idx, line) in lines.iter().enumerate() {
        println!("  {:>2}. {line}", idx + 1);
    }

    let board = &outcome.board;
    println!("  elapsed       : {}ms", outcome.elapsed_ms);
    println!("  active filter : {}", board.active_filter);
    println!(
        "  badge (new)   : {}{}",
        board.badge.count,
        if board.badge.visible { "" } else { " (hidden)" }
    );
    println!(
        "  counts        : new {} / in-progress {} / complete {}",
        board.counts.new, board.counts.in_progress, board.counts.complete
    );
    println!("  nav           : {}", board.nav.as_deref().unwrap_or("-"));

    for card in &board.cards {
        println!(
            "    [{}] #{} {:<12} {}{}",
            if card.hidden { " " } else { "x" },
            card.index,
            card.status,
            card.title.as_deref().unwrap_or("(untitled)"),
            if card.accepted { " (accepted)" } else { "" }
        );
    }

    for (idx, timings) in &outcome.timings {
        let rt = timings
            .rt
            .as_ref()
            .map(|rt| {
                format!(
                    "{} -> {}",
                    rt.old.as_deref().unwrap_or("-"),
                    rt.new.as_deref().unwrap_or("-")
                )
            })
            .unwrap_or_else(|| "-".to_string());
        println!(
            "    #{idx} ETD {} -> {}{}  RT {rt}",
            timings.etd.old.as_deref().unwrap_or("-"),
            timings.etd.new.as_deref().unwrap_or("-"),
            if timings.etd.updated { " (updated)" } else { "" }
        );
    }

    match &outcome.live_toast {
        Some((toast, phase)) => {
            println!("  toast         : {:?} {:?} {:?}", toast.kind, phase, toast.message)
        }
        None => println!("  toast         : none"),
    }
}
