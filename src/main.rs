//! Fission Balls entry point
//!
//! Natively this is a headless frame clock: it seeds a scene and runs a fixed
//! number of ticks, logging population stats. The browser build is driven
//! from JS through `platform::web` instead.
//!
//! Usage: `fission-balls [settings.json | --defaults] [ticks]`

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_TICKS: u64 = 3600;

/// Log a stats line every this many ticks (one second at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const REPORT_INTERVAL: u64 = 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use fission_balls::Settings;
    use fission_balls::sim::{SimState, tick};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next().as_deref() {
        Some("--defaults") => {
            println!("{}", Settings::default().to_json());
            return;
        }
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    let ticks = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_TICKS);

    log::info!("Fission Balls (native) running {} ticks", ticks);
    let mut state = SimState::seeded(&settings);

    let (mut splits, mut collisions) = (0u64, 0u64);
    for _ in 0..ticks {
        let report = tick(&mut state);
        splits += u64::from(report.splits);
        collisions += u64::from(report.collisions);

        if state.time_ticks % REPORT_INTERVAL == 0 {
            log::info!(
                "tick {}: population {}, splits {}, collisions {}",
                state.time_ticks,
                report.population,
                splits,
                collisions
            );
        }
    }

    let deepest = state.bodies.iter().map(|b| b.generation).max().unwrap_or(0);
    println!(
        "{} ticks: {} bodies (deepest generation {}), {} splits, {} collisions",
        state.time_ticks,
        state.bodies.len(),
        deepest,
        splits,
        collisions
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
