//! Procedural platform generation
//!
//! Platforms are laid out upward from the floor with random gaps and widths.
//! A single-pass declustering rule pushes a new platform to the opposite half
//! of the world when it would sit right on top of the previous one. This
//! spreads the layout out but does not prove the next jump is possible.

use rand::Rng;

use super::state::{Platform, PlatformKind};
use crate::tuning::Tuning;
use crate::{center_x, uniform};

/// Random vertical distance to the next platform
pub fn next_gap<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> f32 {
    uniform(rng, tuning.gap_min_y, tuning.gap_max_y)
}

/// Roll a normal platform at world height `y`, declustered against `previous`
pub fn generate_at<R: Rng + ?Sized>(
    y: f32,
    previous: Option<&Platform>,
    tuning: &Tuning,
    rng: &mut R,
) -> Platform {
    let world_width = tuning.world_width;
    let width = uniform(rng, tuning.width_min, tuning.width_max);
    let mut x = uniform(rng, 0.0, world_width - width);

    if let Some(prev) = previous {
        let prev_center = prev.rect.center_x();
        let center = center_x(x, width);
        let horizontally_close =
            (center - prev_center).abs() < tuning.horizontal_buffer + width.max(prev.rect.width) / 2.0;
        let vertically_close =
            (y - prev.rect.y).abs() < tuning.gap_min_y + tuning.decluster_margin_y;

        if horizontally_close && vertically_close {
            let half = world_width / 2.0;
            let span = (half - width).max(0.0);
            x = if prev_center < half {
                half + uniform(rng, 0.0, span)
            } else {
                uniform(rng, 0.0, span)
            };
            x = x.clamp(0.0, world_width - width);
            log::trace!("Declustered platform at y={:.1} to x={:.1}", y, x);
        }
    }

    Platform::new(x, y, width, tuning.platform_height, PlatformKind::Normal)
}

/// Full-width floor at the bottom of the world
pub fn start_platform(tuning: &Tuning) -> Platform {
    Platform::new(
        0.0,
        tuning.world_floor_y() - tuning.platform_height,
        tuning.world_width,
        tuning.platform_height,
        PlatformKind::Start,
    )
}

/// Start platform plus a column of platforms climbing above it
pub fn generate_initial<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Vec<Platform> {
    let mut platforms = Vec::with_capacity(tuning.initial_platforms + 1);
    platforms.push(start_platform(tuning));

    let mut y = tuning.world_floor_y() - 100.0;
    for _ in 0..tuning.initial_platforms {
        y -= next_gap(tuning, rng);
        let platform = generate_at(y, platforms.last(), tuning, rng);
        platforms.push(platform);
    }

    log::debug!(
        "Generated {} initial platforms, topmost at y={:.1}",
        platforms.len(),
        y
    );
    platforms
}
