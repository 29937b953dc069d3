//! Replay execution and summary printing.

use std::path::Path;

use quiver_core::config::TrackerConfig;
use quiver_core::events::EventProcessor;
use quiver_core::handlers::StatsLogger;
use quiver_core::session::TrackerSummary;
use quiver_types::formatting::{format_average, format_grouped};

use crate::script::{self, ScriptError, Step};

/// Run a session script and print the final summary.
pub fn run(path: &Path, json: bool) -> Result<(), ScriptError> {
    let script = script::load(path)?;
    let config = TrackerConfig::load();
    tracing::info!(path = %path.display(), steps = script.steps.len(), "replaying session script");

    let mut client = script::ScriptedClient::new(&script.host);
    let mut processor = EventProcessor::new(&config);
    processor.add_signal_handler(Box::new(StatsLogger::new()));

    for step in &script.steps {
        match step {
            Step::Start => processor.start_tracking(&client),
            Step::Stop => processor.stop_tracking(),
            Step::Tick { ammo, clear_ammo } => {
                if *clear_ammo {
                    client.clear_ammo();
                }
                if let Some(entry) = ammo {
                    client.set_ammo(*entry);
                }
                processor.handle_tick(&client);
            }
            Step::Xp { skill, value } => {
                client.set_experience(*skill, *value);
                processor.handle_stat_change(*skill, *value);
            }
        }
    }

    let summary = processor.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary, config.european_number_format);
    }

    Ok(())
}

/// Print the resolved configuration.
pub fn show_config() -> Result<(), ScriptError> {
    let config = TrackerConfig::load();
    println!("track_all_combat_xp = {}", config.track_all_combat_xp);
    println!("european_number_format = {}", config.european_number_format);
    Ok(())
}

fn print_summary(summary: &TrackerSummary, european: bool) {
    let status = if summary.tracking { "active" } else { "stopped" };
    println!("Tracking: {status}");
    println!(
        "Ammo: {} ({} remaining)",
        summary.ammo_label,
        format_grouped(summary.current_ammo_count, european)
    );
    println!("Ammo used: {}", format_grouped(summary.ammo_used, european));
    println!("XP gained: {}", format_grouped(summary.total_xp_gained, european));
    println!("Avg XP per ammo: {}", format_average(summary.avg_xp_per_ammo, european));

    let gains: Vec<_> = summary.skill_xp_gained.iter().filter(|g| g.gained != 0).collect();
    if !gains.is_empty() {
        println!("Per skill:");
        for gain in gains {
            println!("  {}: {}", gain.skill, format_grouped(gain.gained, european));
        }
    }
}
