//! lobby — a morning rush in a small office tower.
//!
//! Usage: `lobby [CONFIG.json] [SPEED]`
//!
//! Without a config file a 10-floor, 3-lift building is used.  `SPEED` runs
//! the simulation against the wall clock (1.0 = real time, 10.0 = ten times
//! faster); without it the run completes instantly in virtual time.  Set
//! `RUST_LOG=debug` to watch every dispatch.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lift_core::SimConfig;
use lift_output::{CsvWriter, EVENTS_FILE, EventRecorder};
use lift_schedule::WallClockPacer;
use lift_sim::{FnHooks, LiftCall, LiftHooksExt, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const CALL_COUNT:  usize = 24;
const SEED:        u64   = 42;
const MAX_GAP_MS:  u64   = 4_000; // between consecutive calls
const OUTPUT_DIR:  &str  = "output/lobby";

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig {
            lift_speed_per_floor_ms: 1_500,
            door_open_ms:            2_000,
            door_close_ms:           2_000,
            ..SimConfig::new(10, 3)
        });
    };
    let file = File::open(path).with_context(|| format!("opening {path}"))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::builder().filter_level(log::LevelFilter::Info).parse_default_env().init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let speed: Option<f64> = args
        .get(1)
        .map(|s| s.parse().with_context(|| format!("invalid speed {s:?}")))
        .transpose()?;

    println!("=== lobby — lift dispatch simulator ===");
    println!(
        "Floors: {}  |  Lifts: {}  |  Calls: {CALL_COUNT}  |  Seed: {SEED}",
        config.number_of_floors, config.number_of_lifts
    );
    println!(
        "Travel {} ms/floor, doors {} ms open / {} ms close",
        config.lift_speed_per_floor_ms, config.door_open_ms, config.door_close_ms
    );
    match speed {
        Some(s) => println!("Pacing: wall clock x{s}"),
        None => println!("Pacing: virtual"),
    }
    println!();

    // 1. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let recorder = EventRecorder::new(CsvWriter::new(Path::new(OUTPUT_DIR))?).shared();
    let chime = FnHooks::new().doors_open(|lift, _| {
        log::info!("ding: {} open at floor {}", lift.id, lift.current_floor);
    });

    // 2. Build sim.
    let floors = config.number_of_floors;
    let builder = SimBuilder::from_config(config).hooks(recorder.clone().then(chime));
    let builder = match speed {
        Some(s) => builder.pacer(WallClockPacer::new(s)),
        None => builder,
    };
    let mut sim = builder.build()?;

    // 3. Submit calls at random instants, half of them from the lobby.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let t0 = Instant::now();
    for _ in 0..CALL_COUNT {
        sim.advance_by(rng.gen_range(0..=MAX_GAP_MS));
        let floor = if rng.gen_bool(0.5) { 1 } else { rng.gen_range(1..=floors) };
        sim.call_lift(LiftCall::new(floor))?;
    }

    // 4. Let every lift come to rest.
    let end = sim.run_until_settled();
    let elapsed = t0.elapsed();

    recorder.finish().context("flushing event log")?;

    // 5. Summary.
    println!("Simulation settled at {end} in {:.3} s", elapsed.as_secs_f64());
    println!("  calls dispatched : {}", sim.dispatched_calls());
    println!("  calls completed  : {}", sim.completed_calls());
    println!("  hook failures    : {}", sim.hook_failures());
    println!(
        "  {EVENTS_FILE:<16} : {} rows",
        recorder.with(|r| r.recorded())
    );
    println!();

    println!("{:<10} {:<8} {:<8}", "Lift", "Floor", "Moving");
    println!("{}", "-".repeat(28));
    for lift in sim.lifts() {
        println!(
            "{:<10} {:<8} {:<8}",
            lift.id.0,
            lift.current_floor,
            if lift.is_moving { "yes" } else { "no" },
        );
    }

    Ok(())
}
