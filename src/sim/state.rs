//! Game state and core simulation types
//!
//! One owned struct holds the whole run: player, platforms, camera, time slow
//! and the seeded RNG. Components in sibling modules borrow the pieces they
//! need; nothing outside `sim` mutates it except through the input methods.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ability::AbilityState;
use super::generator;
use super::snapshot::Snapshot;
use super::tick::{StepOutcome, TickInput, tick};
use crate::consts::TICK_RATE_HZ;
use crate::tuning::{Tuning, TuningError};

/// Axis-aligned rectangle in world units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        crate::center_x(self.x, self.width)
    }

    /// Strict overlap test: rectangles that only share an edge don't overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player fell out of view
    GameOver,
}

/// Platform variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Full-width floor the run starts on
    Start,
    #[default]
    Normal,
}

/// A landing-only platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32, kind: PlatformKind) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            kind,
        }
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.y
    }
}

/// Sprite selection for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPose {
    Idle,
    Jumping,
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    /// Set by jumping, cleared by landing
    pub is_airborne: bool,
    /// Best height in meters (never decreases)
    pub height_reached: u32,
    pub move_left: bool,
    pub move_right: bool,
}

impl Player {
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.player_spawn(),
            vel: Vec2::ZERO,
            width: tuning.player_width,
            height: tuning.player_height,
            is_airborne: false,
            height_reached: 0,
            move_left: false,
            move_right: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn pose(&self) -> PlayerPose {
        if self.is_airborne || self.vel.y != 0.0 {
            PlayerPose::Jumping
        } else {
            PlayerPose::Idle
        }
    }
}

/// Complete run state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    seed: u64,
    pub(crate) tuning: Tuning,
    pub(crate) rng: Pcg32,
    pub(crate) phase: GamePhase,
    pub(crate) player: Player,
    /// Creation order; the last entry is the most recently generated
    pub(crate) platforms: Vec<Platform>,
    /// World y mapped to the top edge of the viewport
    pub(crate) camera_y: f32,
    pub(crate) ability: AbilityState,
    /// Ticks since reset
    pub(crate) frame: u64,
}

impl GameState {
    /// Create a new run with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new run with custom tuning, rejecting values the simulation
    /// can't run with
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    /// `tuning` must already be valid
    fn build(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = generator::generate_initial(&tuning, &mut rng);
        let player = Player::spawn(&tuning);

        log::info!(
            "Run started: seed={}, platforms={}",
            seed,
            platforms.len()
        );

        Self {
            seed,
            tuning,
            rng,
            phase: GamePhase::Playing,
            player,
            platforms,
            camera_y: 0.0,
            ability: AbilityState::Ready,
            frame: 0,
        }
    }

    /// Restart the run with the same seed
    pub fn reset(&mut self) {
        self.reset_with_seed(self.seed);
    }

    /// Restart the run with a new seed
    pub fn reset_with_seed(&mut self, seed: u64) {
        let tuning = std::mem::take(&mut self.tuning);
        *self = Self::build(seed, tuning);
    }

    /// Advance exactly one tick
    pub fn step(&mut self) -> StepOutcome {
        tick(self)
    }

    /// Held direction flags (left wins if both are held)
    pub fn set_horizontal_intent(&mut self, left: bool, right: bool) {
        self.player.move_left = left;
        self.player.move_right = right;
    }

    /// Jump if standing on something
    pub fn request_jump(&mut self) {
        if self.phase != GamePhase::Playing || self.player.is_airborne {
            return;
        }
        self.player.vel.y = self.tuning.jump_force;
        self.player.is_airborne = true;
    }

    /// Trigger time slow if it's ready
    pub fn request_ability(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if self.ability.request(self.tuning.slow_duration) {
            log::info!("Time slow activated at frame {}", self.frame);
        }
    }

    /// Apply one tick's worth of adapter input
    pub fn apply_input(&mut self, input: &TickInput) {
        self.set_horizontal_intent(input.left, input.right);
        if input.jump {
            self.request_jump();
        }
        if input.ability {
            self.request_ability();
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn camera_y(&self) -> f32 {
        self.camera_y
    }

    /// Height score in meters
    pub fn score(&self) -> u32 {
        self.player.height_reached
    }

    pub fn ability(&self) -> AbilityState {
        self.ability
    }

    /// Gravity scale currently injected by time slow
    pub fn speed_multiplier(&self) -> f32 {
        self.ability.speed_multiplier(self.tuning.slow_factor)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run time at the nominal tick rate
    pub fn elapsed_secs(&self) -> f32 {
        self.frame as f32 / TICK_RATE_HZ
    }

    /// Smallest y among live platforms, if any
    pub fn topmost_platform_y(&self) -> Option<f32> {
        self.platforms.iter().map(Platform::y).reduce(f32::min)
    }

    /// Copy of everything a renderer or HUD needs this frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
