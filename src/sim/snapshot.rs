//! Read-only copies of the state for renderers and HUDs

use serde::Serialize;

use super::ability::AbilityStatus;
use super::state::{GamePhase, GameState, Platform, PlayerPose, Rect};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub dx: f32,
    pub dy: f32,
    pub airborne: bool,
    pub pose: PlayerPose,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilityView {
    pub status: AbilityStatus,
    /// Power bar fill in [0, 1]
    pub progress: f32,
    pub label: &'static str,
    /// Show the slow-motion tint
    pub overlay: bool,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub frame: u64,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub platforms: Vec<Platform>,
    pub camera_y: f32,
    pub score: u32,
    pub ability: AbilityView,
    pub speed_multiplier: f32,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = state.player();
        let tuning = state.tuning();
        let ability = state.ability();

        Self {
            frame: state.frame(),
            phase: state.phase(),
            player: PlayerView {
                rect: player.rect(),
                dx: player.vel.x,
                dy: player.vel.y,
                airborne: player.is_airborne,
                pose: player.pose(),
            },
            platforms: state.platforms().to_vec(),
            camera_y: state.camera_y(),
            score: state.score(),
            ability: AbilityView {
                status: ability.status(),
                progress: ability.progress(tuning.slow_duration, tuning.slow_cooldown),
                label: ability.status().label(),
                overlay: ability.is_active(),
            },
            speed_multiplier: state.speed_multiplier(),
        }
    }

    /// Viewport-relative y for a world y
    #[inline]
    pub fn to_screen_y(&self, world_y: f32) -> f32 {
        world_y - self.camera_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_fresh_run() {
        let state = GameState::new(4);
        let snap = state.snapshot();

        assert_eq!(snap.frame, 0);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.player.rect, Rect::new(275.0, 700.0, 50.0, 80.0));
        assert_eq!(snap.player.pose, PlayerPose::Idle);
        assert_eq!(snap.platforms.len(), state.platforms().len());
        assert_eq!(snap.ability.status, AbilityStatus::Ready);
        assert_eq!(snap.ability.progress, 1.0);
        assert!(!snap.ability.overlay);
        assert_eq!(snap.speed_multiplier, 1.0);
    }

    #[test]
    fn test_snapshot_is_detached_from_state() {
        let mut state = GameState::new(4);
        let snap = state.snapshot();
        state.request_jump();
        state.step();
        assert_eq!(snap.player.rect.y, 700.0);
        assert_ne!(state.player().pos.y, 700.0);
    }

    #[test]
    fn test_active_ability_view() {
        let mut state = GameState::new(4);
        state.request_ability();
        let snap = state.snapshot();
        assert_eq!(snap.ability.status, AbilityStatus::Active);
        assert_eq!(snap.ability.label, "Time Slow: ACTIVE!");
        assert!(snap.ability.overlay);
        assert_eq!(snap.speed_multiplier, 0.4);
    }

    #[test]
    fn test_serializes_to_json() {
        let snap = GameState::new(4).snapshot();
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["score"], 0);
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["player"]["rect"]["x"], 275.0);
        assert_eq!(snap.to_screen_y(700.0), 700.0);
    }
}
