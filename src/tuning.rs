//! Game balance tuning
//!
//! Every physics and generation constant the simulation reads, loadable from
//! JSON so balance can be tweaked without a rebuild. Missing fields fall back
//! to the defaults in [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Immutable world configuration for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub viewport_height: f32,

    // === Player ===
    pub gravity: f32,
    pub max_speed: f32,
    pub jump_force: f32,
    pub player_width: f32,
    pub player_height: f32,

    // === Platforms ===
    pub gap_min_y: f32,
    pub gap_max_y: f32,
    pub width_min: f32,
    pub width_max: f32,
    pub platform_height: f32,
    pub horizontal_buffer: f32,
    pub initial_platforms: usize,
    pub prune_margin: f32,
    pub decluster_margin_y: f32,

    // === Camera / scoring ===
    pub scroll_fraction: f32,
    pub fall_margin: f32,
    pub score_unit: f32,

    // === Time slow ===
    pub slow_duration: u32,
    pub slow_cooldown: u32,
    pub slow_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            gravity: GRAVITY,
            max_speed: PLAYER_MAX_SPEED,
            jump_force: PLAYER_JUMP_FORCE,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,

            gap_min_y: PLATFORM_GAP_MIN_Y,
            gap_max_y: PLATFORM_GAP_MAX_Y,
            width_min: PLATFORM_WIDTH_MIN,
            width_max: PLATFORM_WIDTH_MAX,
            platform_height: PLATFORM_HEIGHT,
            horizontal_buffer: PLATFORM_HORIZONTAL_BUFFER,
            initial_platforms: INITIAL_PLATFORM_COUNT,
            prune_margin: PRUNE_MARGIN,
            decluster_margin_y: DECLUSTER_MARGIN_Y,

            scroll_fraction: CAMERA_SCROLL_FRACTION,
            fall_margin: FALL_MARGIN,
            score_unit: SCORE_UNIT,

            slow_duration: TIME_SLOW_DURATION,
            slow_cooldown: TIME_SLOW_COOLDOWN,
            slow_factor: TIME_SLOW_FACTOR,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject configurations the simulation can't run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if self.world_width <= 0.0 {
            return invalid("world_width", "must be positive");
        }
        if self.viewport_height <= 0.0 {
            return invalid("viewport_height", "must be positive");
        }
        if self.player_width <= 0.0 || self.player_width > self.world_width {
            return invalid("player_width", "must be positive and fit the world");
        }
        if self.player_height <= 0.0 {
            return invalid("player_height", "must be positive");
        }
        if !(self.gravity > 0.0 && self.gravity.is_finite()) {
            return invalid("gravity", "must be positive");
        }
        if !(self.jump_force < 0.0 && self.jump_force.is_finite()) {
            return invalid("jump_force", "must be negative (upward)");
        }
        if !(self.max_speed >= 0.0 && self.max_speed.is_finite()) {
            return invalid("max_speed", "must not be negative");
        }
        if self.gap_min_y <= 0.0 {
            return invalid("gap_min_y", "must be positive");
        }
        if self.gap_min_y > self.gap_max_y {
            return invalid("gap_min_y", "must not exceed gap_max_y");
        }
        if self.width_min <= 0.0 {
            return invalid("width_min", "must be positive");
        }
        if self.width_min > self.width_max {
            return invalid("width_min", "must not exceed width_max");
        }
        if self.width_max > self.world_width {
            return invalid("width_max", "platform wider than the world");
        }
        if self.score_unit <= 0.0 {
            return invalid("score_unit", "must be positive");
        }
        if !(self.slow_factor > 0.0 && self.slow_factor <= 1.0) {
            return invalid("slow_factor", "must be in (0, 1]");
        }
        if self.slow_duration == 0 {
            return invalid("slow_duration", "must be at least one tick");
        }
        if self.slow_cooldown == 0 {
            return invalid("slow_cooldown", "must be at least one tick");
        }
        Ok(())
    }

    /// Viewport-relative y above which the camera starts to follow
    pub fn scroll_threshold(&self) -> f32 {
        self.viewport_height * self.scroll_fraction
    }

    /// Viewport-relative y past which the run ends
    pub fn fall_threshold(&self) -> f32 {
        self.viewport_height + self.fall_margin
    }

    /// World y of the floor (score zero line)
    pub fn world_floor_y(&self) -> f32 {
        self.viewport_height
    }

    /// Player spawn point: centered, standing on the start platform
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(
            self.world_width / 2.0 - self.player_width / 2.0,
            self.viewport_height - 100.0,
        )
    }
}
