//! Battle simulator binary.
//!
//! Loads action catalogs, a combat config and a scenario, runs one turn and
//! prints what happened. Every input falls back to the embedded content.
//!
//! ```bash
//! tactics-sim --scenario my_fight.ron --actions extra.ron --json
//! RUST_LOG=tactics_runtime=debug tactics-sim --friendly-fire
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tactics_content::{ActionCatalogLoader, ConfigLoader, ScenarioLoader};
use tactics_sim::{SimulationReport, Simulator, logging};

/// Run one turn of a tactics battle
#[derive(Parser)]
#[command(name = "tactics-sim")]
#[command(about = "Resolve one turn of a battle scenario", long_about = None)]
#[command(version)]
struct Cli {
    /// Action catalog files (RON). Defaults to the embedded catalogs
    #[arg(short, long, value_name = "FILE", num_args = 1..)]
    actions: Vec<PathBuf>,

    /// Scenario file (RON). Defaults to the embedded skirmish
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Combat config file (TOML). Defaults to the embedded config
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Let area attacks hit the caster's team unless the profile says otherwise
    #[arg(long)]
    friendly_fire: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(&cli.log_level)?;

    let registry = if cli.actions.is_empty() {
        ActionCatalogLoader::embedded()?
    } else {
        ActionCatalogLoader::load_registry(cli.actions.as_slice())?
    };

    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::embedded()?,
    };
    if cli.friendly_fire {
        config.friendly_fire_enabled = true;
    }

    let scenario = match &cli.scenario {
        Some(path) => ScenarioLoader::load(path)?,
        None => ScenarioLoader::embedded()?,
    };

    tracing::info!(
        actions = registry.len(),
        units = scenario.units.len(),
        orders = scenario.orders.len(),
        "Starting simulation"
    );

    let mut simulator = Simulator::new(registry, config)?;
    let (report, _) = simulator.run(&scenario)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &SimulationReport) {
    for rejected in &report.rejected {
        println!("rejected  {} {}: {}", rejected.unit, rejected.action, rejected.reason);
    }

    println!("Timeline:");
    for entry in &report.timeline {
        println!(
            "  {:>2}. {} {} ({:?})",
            entry.order, entry.unit, entry.action_name, entry.priority
        );
    }

    println!("Actions:");
    for action in &report.actions {
        if action.success {
            let effects: Vec<String> = action
                .effects_applied
                .iter()
                .map(|e| format!("{} {} {}", e.target, e.kind, e.amount))
                .collect();
            println!("  {} {}: {}", action.unit, action.action_id, effects.join(", "));
            for unit in &action.defeated {
                println!("    {unit} defeated");
            }
        } else {
            let reason = action
                .failure
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            println!(
                "  {} {} failed [{}]: {}",
                action.unit,
                action.action_id,
                action.failure_code.unwrap_or("UNKNOWN"),
                reason
            );
        }
    }

    if !report.area_attacks.is_empty() {
        println!("Area attacks:");
    }
    for attack in &report.area_attacks {
        match (&attack.report, &attack.error) {
            (Some(hits), _) => println!(
                "  {} at {}: {} hit(s), {} damage",
                attack.unit,
                attack.target,
                hits.hits.len(),
                hits.total_damage()
            ),
            (None, Some(err)) => println!("  {} at {} failed: {err}", attack.unit, attack.target),
            (None, None) => {}
        }
    }

    println!("Units:");
    for unit in &report.units {
        let status = if unit.alive { "" } else { " (defeated)" };
        println!(
            "  {} {} {}/{}{status}",
            unit.id, unit.team, unit.hp, unit.max_hp
        );
    }

    let stats = &report.statistics;
    println!(
        "Executed {} / failed {} ({:.0}% success), {} damage, {} healing, {} defeated",
        stats.actions_executed,
        stats.actions_failed,
        stats.success_rate,
        stats.total_damage,
        stats.total_healing,
        stats.units_defeated
    );
}
