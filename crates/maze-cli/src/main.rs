use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use maze_core::Grid;
use maze_paths::{Cost, MazeGraph, Solution};

mod config;

use config::Config;

/// Find the cheapest route through a reindeer maze, and every tile that lies
/// on some cheapest route.
#[derive(Parser, Debug)]
struct Cli {
    /// The puzzle input file.
    input: PathBuf,

    /// TOML config file with [glyphs] and [costs] tables.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Cost of one step forward (overrides config).
    #[arg(long, value_name = "COST")]
    step_cost: Option<Cost>,

    /// Cost of one 90° turn (overrides config).
    #[arg(long, value_name = "COST")]
    turn_cost: Option<Cost>,

    /// Print the maze with every optimal tile marked.
    #[arg(short, long, action = ArgAction::SetTrue)]
    render: bool,

    /// Print a JSON summary instead of plain text.
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Plain-text answer lines.
fn format_text(grid: &Grid, config: &Config, sol: &Solution, render: bool) -> String {
    let mut out = format!("cost: {}\ntiles: {}\n", sol.cost, sol.tile_count());
    if render {
        out.push('\n');
        out.push_str(&grid.render(&config.glyphs, |p| sol.paths.contains(p)));
        out.push('\n');
    }
    out
}

fn format_json(grid: &Grid, sol: &Solution) -> Result<String> {
    let summary = serde_json::json!({
        "cost": sol.cost,
        "tiles": sol.tile_count(),
        "start": grid.start(),
        "end": grid.end(),
        "witness": sol.witness,
        "stats": sol.stats,
    });
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Parse, solve and format one puzzle.
fn run(text: &str, config: &Config, render: bool, json: bool) -> Result<String> {
    let grid = maze_core::parse_with(text, &config.glyphs).context("could not parse maze")?;
    let graph = MazeGraph::new(&grid, config.costs)?;
    let sol = graph.solve()?;
    log::info!(
        "settled {} of {} discovered states",
        sol.stats.settled,
        sol.stats.discovered
    );
    if json {
        format_json(&grid, &sol)
    } else {
        Ok(format_text(&grid, config, &sol, render))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    config.override_costs(cli.step_cost, cli.turn_cost)?;
    log::debug!("using {:?}", config);

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("could not read input file at: {}", cli.input.display()))?;

    let out = run(&text, &config, cli.render, cli.json)?;
    print!("{out}");
    Ok(())
}
