//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, timers counted in ticks
//! - Seeded RNG only
//! - Stable platform order (creation order)
//! - No rendering or platform dependencies

pub mod ability;
pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod generator;
pub mod maintenance;
pub mod physics;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use ability::{AbilityState, AbilityStatus};
pub use autopilot::Autopilot;
pub use maintenance::MaintenanceReport;
pub use snapshot::{AbilityView, PlayerView, Snapshot};
pub use state::{GamePhase, GameState, Platform, PlatformKind, Player, PlayerPose, Rect};
pub use tick::{StepOutcome, TickInput, tick};
