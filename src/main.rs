//! # Safari Session Simulator
//!
//! Spawns encounters from the standard Kanto safari zone and plays a naive
//! turn loop against each one: throw bait or a rock, then a ball, and let
//! the catch/escape factors decide the outcome.

use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use safari::{
    BuiltinDex, LogNotifier, NoBonus, SafariEncounter, SafariResult, SafariZone, SpawnTable,
};
use std::cell::RefCell;
use std::collections::HashSet;

/// Turns before an encounter wanders off on its own.
const MAX_TURNS: u32 = 10;

/// Command line arguments for the safari simulator.
#[derive(Parser, Debug)]
#[command(name = "safari")]
#[command(about = "Safari zone encounter simulator")]
#[command(version)]
struct Args {
    /// Random seed for the session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of encounters to simulate
    #[arg(short, long, default_value_t = 10)]
    encounters: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// How one encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Captured,
    Fled,
    WanderedOff,
}

fn main() -> SafariResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting safari session, v{}", safari::VERSION);

    let seed = args.seed.unwrap_or(12345);
    let mut rng = StdRng::seed_from_u64(seed);
    info!("Session seed: {}", seed);

    let collection = RefCell::new(HashSet::new());
    let zone = SafariZone::new(
        SpawnTable::kanto_safari(),
        BuiltinDex::kanto_safari(),
        &collection,
        LogNotifier,
    );

    let mut captured = 0u32;
    let mut fled = 0u32;
    let mut shinies = 0u32;

    for number in 1..=args.encounters {
        let mut encounter = zone.random_encounter(&mut rng)?;
        info!(
            "Encounter {}: {} (#{}){}",
            number,
            encounter.name,
            encounter.id,
            if encounter.shiny { " ✨" } else { "" }
        );
        if encounter.shiny {
            shinies += 1;
        }

        match play_turns(&mut encounter, &mut rng) {
            Outcome::Captured => {
                captured += 1;
                collection.borrow_mut().insert(encounter.name.clone());
                info!("{} was caught!", encounter.name);
            }
            Outcome::Fled => {
                fled += 1;
                info!("{} fled!", encounter.name);
            }
            Outcome::WanderedOff => {
                info!("{} wandered off...", encounter.name);
            }
        }
    }

    info!(
        "Session over: {} captured, {} fled, {} shiny of {} encounters; {} species collected",
        captured,
        fled,
        shinies,
        args.encounters,
        collection.borrow().len()
    );

    Ok(())
}

/// Plays up to [`MAX_TURNS`] turns against one encounter.
fn play_turns(encounter: &mut SafariEncounter, rng: &mut StdRng) -> Outcome {
    for turn in 1..=MAX_TURNS {
        match rng.gen_range(0..5u32) {
            // Bait calms the encounter but makes it harder to catch.
            0 => {
                encounter.set_eating(rng.gen_range(2..6));
                debug!("turn {}: threw bait (eating {})", turn, encounter.eating());
            }
            // A rock angers it: easier to catch, likelier to flee.
            1 => {
                encounter.set_angry(rng.gen_range(2..6));
                debug!("turn {}: threw rock (angry {})", turn, encounter.angry());
            }
            _ => {
                let catch_factor = encounter.catch_factor(&NoBonus);
                debug!(
                    "turn {}: threw ball (catch {:.1}, escape {:.1})",
                    turn,
                    catch_factor,
                    encounter.escape_factor()
                );
                if rng.gen_range(0.0..100.0) < catch_factor {
                    return Outcome::Captured;
                }
                if rng.gen_range(0.0..100.0) < encounter.escape_factor() {
                    return Outcome::Fled;
                }
            }
        }

        encounter.set_eating(encounter.eating().saturating_sub(1));
        encounter.set_angry(encounter.angry().saturating_sub(1));
        encounter.steps += 1;
    }

    Outcome::WanderedOff
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
