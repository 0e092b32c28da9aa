//! Keeps the play field populated as the camera climbs
//!
//! Each tick drops platforms that fell well below the viewport, then adds at
//! most one platform above the topmost one while it's still close to view.

use rand::Rng;

use super::generator::{generate_at, next_gap};
use super::state::Platform;
use crate::tuning::Tuning;

/// What a maintenance pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaintenanceReport {
    pub pruned: usize,
    /// World y of the platform added this pass
    pub generated_at: Option<f32>,
}

/// Topmost platform y, falling back to the world floor when the list is empty
pub fn topmost_y(platforms: &[Platform], tuning: &Tuning) -> f32 {
    platforms
        .iter()
        .map(Platform::y)
        .fold(tuning.world_floor_y(), f32::min)
}

/// Prune, then top up
pub fn maintain<R: Rng + ?Sized>(
    platforms: &mut Vec<Platform>,
    camera_y: f32,
    tuning: &Tuning,
    rng: &mut R,
) -> MaintenanceReport {
    let before = platforms.len();
    let cutoff = tuning.viewport_height + tuning.prune_margin;
    platforms.retain(|p| p.y() - camera_y < cutoff);
    let pruned = before - platforms.len();
    if pruned > 0 {
        log::debug!("Pruned {} platforms below camera_y={:.1}", pruned, camera_y);
    }

    let highest = topmost_y(platforms, tuning);
    let mut generated_at = None;
    if highest - camera_y > -tuning.gap_max_y {
        let y = highest - next_gap(tuning, rng);
        let platform = generate_at(y, platforms.last(), tuning, rng);
        log::debug!(
            "Generated platform at ({:.1}, {:.1}) w={:.1}",
            platform.rect.x,
            platform.rect.y,
            platform.rect.width
        );
        platforms.push(platform);
        generated_at = Some(y);
    }

    MaintenanceReport {
        pruned,
        generated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PlatformKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn platform_at(y: f32) -> Platform {
        Platform::new(100.0, y, 100.0, 20.0, PlatformKind::Normal)
    }

    #[test]
    fn test_prunes_below_view_preserving_order() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        // camera_y = -1000: cutoff is y < -150
        let mut platforms = vec![
            platform_at(-100.0),
            platform_at(-1200.0),
            platform_at(-150.0),
            platform_at(-1400.0),
            platform_at(-151.0),
        ];

        let report = maintain(&mut platforms, -1000.0, &tuning, &mut rng);

        assert_eq!(report.pruned, 2);
        assert_eq!(report.generated_at, None);
        let ys: Vec<f32> = platforms.iter().map(Platform::y).collect();
        assert_eq!(ys, vec![-1200.0, -1400.0, -151.0]);
    }

    #[test]
    fn test_generates_one_above_when_buffer_runs_low() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut platforms = vec![platform_at(400.0), platform_at(100.0)];

        let report = maintain(&mut platforms, 0.0, &tuning, &mut rng);

        assert_eq!(platforms.len(), 3);
        let y = report.generated_at.unwrap();
        assert_eq!(platforms[2].y(), y);
        assert!(y <= 0.0 && y >= -150.0 - 1e-3);
    }

    #[test]
    fn test_no_generation_when_buffer_is_full() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut platforms = vec![platform_at(400.0), platform_at(-250.0)];

        let report = maintain(&mut platforms, 0.0, &tuning, &mut rng);

        assert_eq!(report, MaintenanceReport::default());
        assert_eq!(platforms.len(), 2);
    }

    #[test]
    fn test_empty_field_regrows_from_floor() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(4);
        let mut platforms = Vec::new();

        maintain(&mut platforms, 0.0, &tuning, &mut rng);

        assert_eq!(platforms.len(), 1);
        assert!(platforms[0].y() <= 700.0);
    }

    #[test]
    fn test_camera_outrunning_generation_falls_back_to_floor() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(6);
        let mut platforms = crate::sim::generator::generate_initial(&tuning, &mut rng);
        let count = platforms.len();

        // Every platform is far below the view: the field restarts from the floor
        let camera_y = -5000.0;
        let report = maintain(&mut platforms, camera_y, &tuning, &mut rng);
        assert_eq!(report.pruned, count);
        assert_eq!(platforms.len(), 1);
        let y = report.generated_at.unwrap();
        assert!(y <= 700.0 + 1e-3 && y >= 550.0 - 1e-3, "y {y}");

        // And the floor-level replacement is pruned again next pass
        let report = maintain(&mut platforms, camera_y, &tuning, &mut rng);
        assert_eq!(report.pruned, 1);
        assert_eq!(platforms.len(), 1);
        assert!(platforms[0].y() >= 550.0 - 1e-3);
    }

    #[test]
    fn test_steady_state_keeps_buffer_above_view() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut platforms = crate::sim::generator::generate_initial(&tuning, &mut rng);

        // Camera climbing at jump speed
        let mut camera_y = 0.0;
        for _ in 0..2000 {
            camera_y -= 16.0;
            maintain(&mut platforms, camera_y, &tuning, &mut rng);
            let top = topmost_y(&platforms, &tuning);
            assert!(top - camera_y <= -tuning.gap_max_y);
            assert!(platforms.len() < 40);
        }
    }
}
