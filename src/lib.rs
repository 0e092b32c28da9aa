//! Sky Climb - An endless vertical platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, platforms, camera, time slow)
//! - `tuning`: Data-driven game balance
//! - `web`: Browser boundary (wasm32 only)

pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use sim::{GameState, Snapshot, StepOutcome, TickInput};
pub use tuning::{Tuning, TuningError};

use rand::Rng;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Nominal simulation rate (one tick per rendered frame)
    pub const TICK_RATE_HZ: f32 = 60.0;

    /// World dimensions (y grows downward, the floor sits at VIEWPORT_HEIGHT)
    pub const WORLD_WIDTH: f32 = 600.0;
    pub const VIEWPORT_HEIGHT: f32 = 800.0;

    /// Player physics
    pub const GRAVITY: f32 = 0.8;
    pub const PLAYER_MAX_SPEED: f32 = 6.0;
    pub const PLAYER_JUMP_FORCE: f32 = -16.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;

    /// Platform generation
    pub const PLATFORM_GAP_MIN_Y: f32 = 100.0;
    pub const PLATFORM_GAP_MAX_Y: f32 = 250.0;
    pub const PLATFORM_WIDTH_MIN: f32 = 80.0;
    pub const PLATFORM_WIDTH_MAX: f32 = 200.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Minimum horizontal distance between consecutive platforms
    pub const PLATFORM_HORIZONTAL_BUFFER: f32 = 50.0;
    /// Platforms generated above the start platform on reset
    pub const INITIAL_PLATFORM_COUNT: usize = 15;
    /// Slack below the viewport before a platform is pruned
    pub const PRUNE_MARGIN: f32 = 50.0;
    /// Extra vertical slack for the declustering check
    pub const DECLUSTER_MARGIN_Y: f32 = 50.0;

    /// Camera scrolls once the player is above 40% of the viewport
    pub const CAMERA_SCROLL_FRACTION: f32 = 0.4;
    /// How far below the viewport top the player may fall before game over
    pub const FALL_MARGIN: f32 = 100.0;
    /// World units per "meter" of score
    pub const SCORE_UNIT: f32 = 10.0;

    /// Time slow (durations in ticks, ~3s and ~10s at 60 Hz)
    pub const TIME_SLOW_DURATION: u32 = 180;
    pub const TIME_SLOW_COOLDOWN: u32 = 600;
    /// Fraction of normal speed while slowed
    pub const TIME_SLOW_FACTOR: f32 = 0.4;
}

/// Uniform draw in `[lo, hi)`; a degenerate range yields `lo`
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + rng.random::<f32>() * (hi - lo)
}

/// Horizontal center of a span starting at `x`
#[inline]
pub fn center_x(x: f32, width: f32) -> f32 {
    x + width / 2.0
}

/// Largest integer an `f64` holds exactly
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

/// Seed from a JS number: whole, non-negative and exactly representable
pub fn seed_from_f64(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_EXACT_F64_INT {
        Some(value as u64)
    } else {
        None
    }
}
