//! Target geometry: where targets spawn and what counts as a hit.

use rand::Rng;

use super::TARGET_RADIUS;

/// One circular target, in surface-local pixel coordinates.
///
/// Targets are replaced on every spawn, never mutated in place, so a
/// plain `Copy` bag of floats is all we need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Target {
    /// Spawn a target whose full circle stays inside a `width` × `height`
    /// surface: center is uniform in `[radius, width - radius]` (same for y).
    ///
    /// Degenerate surfaces (a dimension smaller than the target diameter)
    /// clamp that coordinate to the surface center instead of sampling.
    pub fn spawn(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let radius = TARGET_RADIUS;

        Self {
            x: sample_axis(width, radius, rng),
            y: sample_axis(height, radius, rng),
            radius,
        }
    }

    /// Hit test: Euclidean distance from the click to the center,
    /// inclusive at exactly `radius`.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        (dx * dx + dy * dy).sqrt() <= self.radius
    }
}

fn sample_axis(extent: f32, radius: f32, rng: &mut impl Rng) -> f32 {
    if extent > radius * 2.0 {
        rng.gen_range(radius..=extent - radius)
    } else {
        extent / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn spawn_keeps_full_circle_inside_bounds() {
        let sizes = [(800.0, 600.0), (41.0, 41.0), (1920.0, 1080.0), (100.0, 2000.0)];

        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for &(w, h) in &sizes {
                let t = Target::spawn(w, h, &mut rng);
                assert!(t.x >= t.radius && t.x <= w - t.radius, "x={} w={}", t.x, w);
                assert!(t.y >= t.radius && t.y <= h - t.radius, "y={} h={}", t.y, h);
            }
        }
    }

    #[test]
    fn spawn_clamps_degenerate_axis_to_center() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        // Width too small for a full circle, height fine.
        let t = Target::spawn(10.0, 600.0, &mut rng);
        assert_eq!(t.x, 5.0);
        assert!(t.y >= t.radius && t.y <= 600.0 - t.radius);
    }

    #[test]
    fn spawn_is_deterministic_for_a_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(Target::spawn(800.0, 600.0, &mut a), Target::spawn(800.0, 600.0, &mut b));
    }

    #[test]
    fn hit_test_is_inclusive_at_the_radius() {
        let t = Target { x: 100.0, y: 100.0, radius: 20.0 };

        assert!(t.contains(100.0, 100.0), "center is always a hit");
        assert!(t.contains(120.0, 100.0), "exactly on the edge is a hit");
        assert!(!t.contains(121.0, 100.0), "one pixel past the edge misses");
        assert!(!t.contains(115.0, 115.0), "diagonal past the edge misses");
    }
}
