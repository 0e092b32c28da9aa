//! Time slow ability
//!
//! `Ready -> Active -> Cooldown -> Ready`, counted in ticks. The active and
//! cooldown timers live inside the variants, so both can never run at once.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Coarse status for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityStatus {
    Ready,
    Active,
    Cooldown,
}

impl AbilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AbilityStatus::Ready => "Time Slow: READY",
            AbilityStatus::Active => "Time Slow: ACTIVE!",
            AbilityStatus::Cooldown => "Time Slow: COOLDOWN",
        }
    }
}

/// Time slow state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AbilityState {
    #[default]
    Ready,
    /// Slowing time; `remaining` is never zero
    Active { remaining: u32 },
    /// Recharging; `remaining` is never zero
    Cooldown { remaining: u32 },
}

impl AbilityState {
    /// Activate if ready. Returns false (and changes nothing) otherwise.
    pub fn request(&mut self, duration: u32) -> bool {
        if *self != AbilityState::Ready || duration == 0 {
            return false;
        }
        *self = AbilityState::Active {
            remaining: duration,
        };
        true
    }

    /// Count down one tick and return the speed multiplier for this tick.
    ///
    /// The multiplier is sampled before the countdown, so an activation
    /// slows exactly `slow_duration` ticks.
    pub fn advance(&mut self, tuning: &Tuning) -> f32 {
        let multiplier = self.speed_multiplier(tuning.slow_factor);

        *self = match *self {
            AbilityState::Ready => AbilityState::Ready,
            AbilityState::Active { remaining } if remaining > 1 => AbilityState::Active {
                remaining: remaining - 1,
            },
            AbilityState::Active { .. } => {
                log::info!("Time slow expired, cooling down");
                Self::cooldown(tuning.slow_cooldown)
            }
            AbilityState::Cooldown { remaining } if remaining > 1 => AbilityState::Cooldown {
                remaining: remaining - 1,
            },
            AbilityState::Cooldown { .. } => {
                log::debug!("Time slow ready");
                AbilityState::Ready
            }
        };

        multiplier
    }

    fn cooldown(ticks: u32) -> Self {
        if ticks == 0 {
            AbilityState::Ready
        } else {
            AbilityState::Cooldown { remaining: ticks }
        }
    }

    /// 1.0 normally, `factor` while active
    pub fn speed_multiplier(&self, factor: f32) -> f32 {
        match self {
            AbilityState::Active { .. } => factor,
            _ => 1.0,
        }
    }

    pub fn status(&self) -> AbilityStatus {
        match self {
            AbilityState::Ready => AbilityStatus::Ready,
            AbilityState::Active { .. } => AbilityStatus::Active,
            AbilityState::Cooldown { .. } => AbilityStatus::Cooldown,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, AbilityState::Active { .. })
    }

    /// Power bar fill in [0, 1]: drains while active, refills during cooldown
    pub fn progress(&self, duration: u32, cooldown: u32) -> f32 {
        match *self {
            AbilityState::Ready => 1.0,
            AbilityState::Active { remaining } => remaining as f32 / duration.max(1) as f32,
            AbilityState::Cooldown { remaining } => {
                1.0 - remaining as f32 / cooldown.max(1) as f32
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> Tuning {
        Tuning::default()
    }

    #[test]
    fn test_request_from_ready() {
        let mut ability = AbilityState::Ready;
        assert!(ability.request(180));
        assert_eq!(ability, AbilityState::Active { remaining: 180 });
        assert_eq!(ability.speed_multiplier(0.4), 0.4);
    }

    #[test]
    fn test_request_is_noop_while_active_or_cooling() {
        let mut ability = AbilityState::Active { remaining: 42 };
        assert!(!ability.request(180));
        assert_eq!(ability, AbilityState::Active { remaining: 42 });

        let mut ability = AbilityState::Cooldown { remaining: 7 };
        assert!(!ability.request(180));
        assert_eq!(ability, AbilityState::Cooldown { remaining: 7 });
    }

    #[test]
    fn test_full_cycle() {
        let t = tuning();
        let mut ability = AbilityState::Ready;
        ability.request(t.slow_duration);

        for _ in 0..t.slow_duration {
            assert_eq!(ability.advance(&t), t.slow_factor);
        }
        assert_eq!(
            ability,
            AbilityState::Cooldown {
                remaining: t.slow_cooldown
            }
        );

        for _ in 0..t.slow_cooldown {
            assert_eq!(ability.status(), AbilityStatus::Cooldown);
            assert_eq!(ability.advance(&t), 1.0);
        }
        assert_eq!(ability, AbilityState::Ready);
    }

    #[test]
    fn test_ready_stays_ready() {
        let t = tuning();
        let mut ability = AbilityState::Ready;
        assert_eq!(ability.advance(&t), 1.0);
        assert_eq!(ability, AbilityState::Ready);
    }

    #[test]
    fn test_progress() {
        assert_eq!(AbilityState::Ready.progress(180, 600), 1.0);
        assert_eq!(AbilityState::Active { remaining: 90 }.progress(180, 600), 0.5);
        assert_eq!(AbilityState::Cooldown { remaining: 600 }.progress(180, 600), 0.0);
        assert_eq!(AbilityState::Cooldown { remaining: 150 }.progress(180, 600), 0.75);
    }

    #[test]
    fn test_labels() {
        assert_eq!(AbilityStatus::Ready.label(), "Time Slow: READY");
        assert_eq!(
            AbilityState::Active { remaining: 1 }.status().label(),
            "Time Slow: ACTIVE!"
        );
    }
}
