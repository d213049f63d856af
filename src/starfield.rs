//! Random star placement around the planets.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::scene::SceneObject;

/// Half-width of the cube the stars are scattered in.
pub const STAR_EXTENT: f32 = 100.0;

/// Scatters `count` star objects with positions sampled independently per
/// axis in `[-STAR_EXTENT, STAR_EXTENT]`. Deterministic for a given seed.
pub fn scatter(count: usize, seed: u64) -> Vec<SceneObject> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    scatter_with(count, &mut rng)
}

/// Scatters stars using the caller's generator.
pub fn scatter_with<R: Rng>(count: usize, rng: &mut R) -> Vec<SceneObject> {
    (0..count)
        .map(|_| {
            let position = Vec3::new(
                rng.random_range(-STAR_EXTENT..=STAR_EXTENT),
                rng.random_range(-STAR_EXTENT..=STAR_EXTENT),
                rng.random_range(-STAR_EXTENT..=STAR_EXTENT),
            );
            SceneObject::star(position)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_exactly_the_requested_count() {
        assert_eq!(scatter(250, 1).len(), 250);
    }

    #[test]
    fn positions_stay_inside_the_extent() {
        for star in scatter(250, 99) {
            for axis in star.position.to_array() {
                assert!(
                    (-STAR_EXTENT..=STAR_EXTENT).contains(&axis),
                    "star axis {axis} outside extent"
                );
            }
        }
    }

    #[test]
    fn different_seeds_produce_different_skies() {
        let a = scatter(250, 1);
        let b = scatter(250, 2);
        let moved = a
            .iter()
            .zip(&b)
            .filter(|(x, y)| (x.position - y.position).length() > 0.01)
            .count();
        assert!(moved > 200, "only {moved}/250 stars differ between seeds");
    }

    #[test]
    fn stars_share_the_fixed_small_radius() {
        for star in scatter(10, 3) {
            assert_eq!(star.radius, 0.25);
        }
    }
}
