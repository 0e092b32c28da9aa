//! Landing detection
//!
//! Platforms only catch a descending player. Side and ceiling contacts are
//! ignored, so the player jumps up through platforms from below.

use super::state::{Platform, Player};

/// Land the player on the first overlapping platform while descending.
///
/// Returns the index of the platform landed on. Landing zeroes the vertical
/// velocity, so later platforms in the same pass no longer qualify.
pub fn resolve_landings(player: &mut Player, platforms: &[Platform]) -> Option<usize> {
    let mut landed = None;

    for (index, platform) in platforms.iter().enumerate() {
        if player.vel.y > 0.0 && player.rect().overlaps(&platform.rect) {
            player.vel.y = 0.0;
            player.pos.y = platform.rect.y - player.height;
            player.is_airborne = false;
            landed = Some(index);
        }
    }

    landed
}
