//! Idle/demo mode - the game plays itself
//!
//! Picks the nearest platform above, walks under it without leaving the
//! current platform, then jumps. Gaps too tall for a normal jump are taken
//! with time slow, which stretches the jump arc; if it's cooling down the
//! autopilot waits on the ground.

use super::ability::AbilityStatus;
use super::state::{GameState, Platform, Rect};
use super::tick::TickInput;

/// Horizontal distance from which a jump is launched straight away
const JUMP_ALIGN: f32 = 120.0;
/// Safety margin on the computed jump apex
const REACH_MARGIN: f32 = 6.0;

/// Height gained by a jump before it starts falling (discrete, per tick)
///
/// Sums the per-tick rises `-(jump + k * gravity)` for every tick `k >= 1`
/// whose velocity is still upward.
pub fn apex_rise(jump_force: f32, gravity: f32) -> f32 {
    if !(gravity > 0.0 && jump_force < 0.0) {
        return 0.0;
    }
    let (jump, gravity) = (f64::from(jump_force), f64::from(gravity));
    let rising_ticks = ((-jump / gravity).ceil() - 1.0).max(0.0);
    let rise = -(rising_ticks * jump + gravity * rising_ticks * (rising_ticks + 1.0) / 2.0);
    rise as f32
}

/// Demo controller with a remembered target
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    target: Option<Rect>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform currently being aimed for
    pub fn target(&self) -> Option<Rect> {
        self.target
    }

    /// Decide this tick's input
    pub fn drive(&mut self, state: &GameState) -> TickInput {
        let mut input = TickInput::default();
        if state.is_over() {
            return input;
        }

        let player = state.player();
        let body = player.rect();
        let support = if player.is_airborne {
            None
        } else {
            support_under(body, state.platforms())
        };

        if support.is_some() {
            self.target = next_platform_above(body, state.platforms()).map(|p| p.rect);
        }
        let Some(target) = self.target else {
            return input;
        };

        let diff = target.center_x() - body.center_x();
        let speed = state.tuning().max_speed;

        let Some(support) = support else {
            // In the air: line up over the target
            steer(&mut input, diff, speed);
            return input;
        };

        let tuning = state.tuning();
        let need = body.y - target.bottom();
        let normal = apex_rise(tuning.jump_force, tuning.gravity) - REACH_MARGIN;
        let slowed =
            apex_rise(tuning.jump_force, tuning.gravity * tuning.slow_factor) - REACH_MARGIN;
        let ability = state.ability();
        let needs_slow = need >= normal && !ability.is_active();

        if need >= slowed || (needs_slow && ability.status() != AbilityStatus::Ready) {
            return input;
        }

        if diff.abs() > JUMP_ALIGN {
            let next_x = body.x + diff.signum() * speed;
            let stays_on = next_x + body.width > support.x && next_x < support.right();
            if stays_on {
                steer(&mut input, diff, speed);
                return input;
            }
        }

        input.jump = true;
        input.ability = needs_slow;
        steer(&mut input, diff, speed);
        input
    }
}

fn steer(input: &mut TickInput, diff: f32, speed: f32) {
    if diff > speed {
        input.right = true;
    } else if diff < -speed {
        input.left = true;
    }
}

/// Platform the body is standing on
fn support_under(body: Rect, platforms: &[Platform]) -> Option<Rect> {
    platforms
        .iter()
        .map(|p| p.rect)
        .find(|r| (r.y - body.bottom()).abs() < 0.5 && body.x < r.right() && body.right() > r.x)
}

/// Closest platform whose top is above the body's feet
fn next_platform_above(body: Rect, platforms: &[Platform]) -> Option<&Platform> {
    platforms
        .iter()
        .filter(|p| p.rect.y < body.bottom() - 1.0)
        .max_by(|a, b| a.rect.y.total_cmp(&b.rect.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{AbilityState, PlatformKind, generator};

    fn state_with_target(x: f32, y: f32, width: f32) -> GameState {
        let mut state = GameState::new(11);
        let start = generator::start_platform(state.tuning());
        state.platforms = vec![start, Platform::new(x, y, width, 20.0, PlatformKind::Normal)];
        state
    }

    #[test]
    fn test_apex_rise() {
        assert!((apex_rise(-16.0, 0.8) - 152.0).abs() < 0.01);
        assert!((apex_rise(-16.0, 0.32) - 392.0).abs() < 0.05);
        assert_eq!(apex_rise(-16.0, 0.0), 0.0);
        assert_eq!(apex_rise(4.0, 0.8), 0.0);
        assert_eq!(apex_rise(-0.5, 0.8), 0.0);
    }

    #[test]
    fn test_apex_rise_with_tiny_gravity() {
        // -16 + 1e-7 rounds back to -16 in f32
        let rise = apex_rise(-16.0, 1e-7);
        assert!(rise.is_finite());
        assert!(rise > 1.0e9);
    }

    #[test]
    fn test_drives_under_feather_gravity() {
        let tuning = crate::Tuning::from_json(r#"{ "gravity": 1e-7 }"#).unwrap();
        let mut state = GameState::with_tuning(1, tuning).unwrap();
        let start = generator::start_platform(state.tuning());
        state.platforms = vec![start, Platform::new(250.0, 600.0, 100.0, 20.0, PlatformKind::Normal)];

        let mut pilot = Autopilot::new();
        let input = pilot.drive(&state);
        assert!(input.jump);
        assert!(!input.ability);
        assert_eq!(pilot.target().map(|r| r.y), Some(600.0));
    }

    #[test]
    fn test_jumps_for_reachable_platform_overhead() {
        let state = state_with_target(250.0, 600.0, 100.0);
        let input = Autopilot::new().drive(&state);
        assert!(input.jump);
        assert!(!input.ability);
        assert!(!input.left && !input.right);
    }

    #[test]
    fn test_walks_toward_distant_platform() {
        let state = state_with_target(480.0, 600.0, 100.0);
        let input = Autopilot::new().drive(&state);
        assert!(input.right);
        assert!(!input.jump);
    }

    #[test]
    fn test_uses_time_slow_for_tall_gap() {
        let state = state_with_target(250.0, 450.0, 100.0);
        let input = Autopilot::new().drive(&state);
        assert!(input.jump);
        assert!(input.ability);
    }

    #[test]
    fn test_waits_for_cooldown_on_tall_gap() {
        let mut state = state_with_target(250.0, 450.0, 100.0);
        state.ability = AbilityState::Cooldown { remaining: 10 };
        let input = Autopilot::new().drive(&state);
        assert_eq!(input, TickInput::default());
    }

    #[test]
    fn test_idle_after_game_over() {
        let mut state = state_with_target(250.0, 600.0, 100.0);
        state.phase = crate::sim::GamePhase::GameOver;
        assert_eq!(Autopilot::new().drive(&state), TickInput::default());
    }

    #[test]
    fn test_long_run_invariants() {
        let mut state = GameState::new(2024);
        let mut pilot = Autopilot::new();

        let mut camera_y = state.camera_y();
        let mut score = state.score();
        for _ in 0..6000 {
            let input = pilot.drive(&state);
            state.apply_input(&input);
            let outcome = state.step();

            assert!(state.camera_y() <= camera_y);
            assert!(outcome.score >= score);
            // Something to climb onto is always above the view
            let top = state.topmost_platform_y().unwrap();
            assert!(top < state.camera_y());

            camera_y = state.camera_y();
            score = outcome.score;
            if outcome.ended {
                break;
            }
        }
    }
}
