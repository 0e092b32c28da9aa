//! Camera follow and height score

use super::state::Player;
use crate::tuning::Tuning;

/// Camera position after following the player. Only ever scrolls up.
pub fn follow(player: &Player, camera_y: f32, tuning: &Tuning) -> f32 {
    let threshold = tuning.scroll_threshold();
    if player.pos.y - camera_y < threshold {
        player.pos.y - threshold
    } else {
        camera_y
    }
}

/// Height above the floor in meters for a world y (zero below the floor)
pub fn height_meters(y: f32, tuning: &Tuning) -> u32 {
    ((tuning.world_floor_y() - y) / tuning.score_unit).floor().max(0.0) as u32
}

/// New camera y and running best height
pub fn update(player: &Player, camera_y: f32, tuning: &Tuning) -> (f32, u32) {
    let camera_y = follow(player, camera_y, tuning);
    let height = player
        .height_reached
        .max(height_meters(player.pos.y, tuning));
    (camera_y, height)
}
