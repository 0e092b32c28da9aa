//! Player kinematics
//!
//! Semi-implicit Euler at one step per tick: velocity first, then position.
//! Only gravity is scaled by time slow; horizontal speed is intent-driven.

use super::state::Player;
use crate::tuning::Tuning;

/// Horizontal velocity for the held direction. Left is checked first, so
/// holding both keys moves left.
pub fn intent_velocity(player: &Player, max_speed: f32) -> f32 {
    if player.move_left {
        -max_speed
    } else if player.move_right {
        max_speed
    } else {
        0.0
    }
}

/// Advance the player one tick
pub fn integrate(player: &mut Player, tuning: &Tuning, speed_multiplier: f32) {
    player.vel.x = intent_velocity(player, tuning.max_speed);
    player.pos.x += player.vel.x;

    // No terminal velocity
    player.vel.y += tuning.gravity * speed_multiplier;
    player.pos.y += player.vel.y;

    let max_x = (tuning.world_width - player.width).max(0.0);
    player.pos.x = player.pos.x.clamp(0.0, max_x);
}

/// True once the player has dropped far enough below the viewport top
pub fn has_fallen(player: &Player, camera_y: f32, tuning: &Tuning) -> bool {
    player.pos.y - camera_y > tuning.fall_threshold()
}
