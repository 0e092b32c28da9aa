//! Sky Climb entry point
//!
//! Native builds run a headless autopilot session: useful for soak-testing
//! generation and tuning files. The browser build drives the core through
//! `sky_climb::web` instead.
//!
//! Usage: `sky-climb [seed] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sky_climb::consts::TICK_RATE_HZ;
    use sky_climb::sim::{Autopilot, GameState};
    use sky_climb::Tuning;

    /// Stop after ten minutes of game time
    const MAX_TICKS: u64 = 10 * 60 * 60;
    /// Progress log interval (ticks)
    const REPORT_EVERY: u64 = 600;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                log::error!("Invalid seed `{}`", arg);
                std::process::exit(2);
            }
        },
        None => 0x5eed,
    };
    let tuning = match args.next() {
        Some(path) => match Tuning::from_file(&path) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::error!("{}", err);
                std::process::exit(2);
            }
        },
        None => Tuning::default(),
    };

    log::info!("Sky Climb (native) starting headless run...");

    let mut state = match GameState::with_tuning(seed, tuning) {
        Ok(state) => state,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(2);
        }
    };
    let mut pilot = Autopilot::new();

    let outcome = loop {
        let input = pilot.drive(&state);
        state.apply_input(&input);
        let outcome = state.step();

        if outcome.ended || state.frame() >= MAX_TICKS {
            break outcome;
        }
        if state.frame() % REPORT_EVERY == 0 {
            log::info!(
                "t={:.0}s height={}m camera_y={:.0} platforms={} {}",
                state.elapsed_secs(),
                outcome.score,
                state.camera_y(),
                state.platforms().len(),
                state.ability().status().label()
            );
        }
    };

    println!(
        "seed {}: {} after {} ticks ({:.1}s at {} Hz), height {}m",
        seed,
        if outcome.ended { "fell" } else { "still climbing" },
        state.frame(),
        state.elapsed_secs(),
        TICK_RATE_HZ,
        outcome.score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is sky_climb::web::start, this is just to satisfy the compiler
}
