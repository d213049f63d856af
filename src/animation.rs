//! The per-frame scene update and the scroll-driven camera control.
//!
//! Two independently triggered handlers mutate the same [`SceneModel`]: the
//! animator runs once per frame, the scroll handler once per reported
//! scroll-offset change (plus once at startup). Both receive the model by
//! reference; neither owns any scene state besides the time accumulator.

use glam::Vec3;

use crate::camera::CameraPose;
use crate::model::SceneModel;
use crate::scene::{EARTH, MARS, MOON, VENUS};

/// Per-tick spin applied to each body's Y rotation, in radians.
pub const EARTH_SPIN: f32 = 0.0025;
pub const MARS_SPIN: f32 = -0.005;
pub const VENUS_SPIN: f32 = 0.005;
pub const MOON_SPIN: f32 = 0.005;

/// Advance of the orbit parameter per tick.
pub const TIME_STEP: f64 = 0.01;

/// Overflow guard for the time accumulator. The accumulator is reset to
/// zero once it reaches this limit; the exact value is not meaningful, it
/// only bounds numeric growth. The reset makes the moon jump back to the
/// orbit's start angle.
pub const TIME_LIMIT: f64 = 9_007_199_254_740_991.0;

/// Radius of the moon's circular orbit around the world origin, in the
/// X-Z plane.
pub const MOON_ORBIT_RADIUS: f64 = 20.0;

/// Scroll-offset factors applied to the camera pose.
pub const SCROLL_CAMERA_Z: f32 = -0.01;
pub const SCROLL_CAMERA_X: f32 = -0.002;
pub const SCROLL_CAMERA_YAW: f32 = -0.0002;

/// Extra moon spin applied on every scroll invocation. Cumulative, unlike
/// the camera mapping: the moon tumbles faster while the user scrolls.
pub const SCROLL_MOON_SPIN: Vec3 = Vec3::new(0.05, 0.075, 0.05);

/// Owns the time accumulator and advances the scene by one tick at a time.
#[derive(Debug, Default)]
pub struct Animator {
    t: f64,
    ticks: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the orbit parameter.
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Number of ticks applied so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Applies one animation tick to the model:
    ///
    /// 1. fixed rotation increments for the four bodies,
    /// 2. time accumulator advance (with the overflow reset),
    /// 3. moon position recomputed on its circular orbit.
    ///
    /// Orbit-control reconciliation and the redraw itself belong to the
    /// caller; no update here reads another body's updated value.
    pub fn tick(&mut self, model: &SceneModel) {
        model.spin_y(MOON, MOON_SPIN);
        model.spin_y(EARTH, EARTH_SPIN);
        model.spin_y(MARS, MARS_SPIN);
        model.spin_y(VENUS, VENUS_SPIN);

        if self.t >= TIME_LIMIT {
            self.t = 0.0;
        }
        self.t += TIME_STEP;

        let x = (MOON_ORBIT_RADIUS * self.t.cos()) as f32;
        let z = (MOON_ORBIT_RADIUS * self.t.sin()) as f32;
        model.update(MOON, |moon| {
            moon.position.x = x;
            moon.position.z = z;
        });

        self.ticks += 1;
    }

    /// Forces the accumulator to a given value. Test hook for exercising
    /// the overflow seam without running 2^53 ticks.
    #[doc(hidden)]
    pub fn set_time(&mut self, t: f64) {
        self.t = t;
    }
}

/// Applies one scroll-handler invocation for the given page offset.
///
/// The camera mapping is a pure function of the offset (re-applying the
/// same offset is idempotent); the moon spin is cumulative per call. The
/// offset follows the page-top convention: it decreases (goes negative) as
/// the user scrolls down, and positive offsets are handled the same way.
pub fn apply_scroll(offset: f32, model: &SceneModel, camera: &mut CameraPose) {
    model.spin(MOON, SCROLL_MOON_SPIN);

    // The `+ 0.0` folds the negative zero a zero offset would otherwise
    // leave in the reported camera position.
    camera.position.z = offset * SCROLL_CAMERA_Z + 0.0;
    camera.position.x = offset * SCROLL_CAMERA_X + 0.0;
    camera.yaw = offset * SCROLL_CAMERA_YAW + 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    fn solar_model() -> SceneModel {
        SceneModel::from_objects(Scene::solar(0).objects)
    }

    #[test]
    fn rotations_accumulate_linearly() {
        let model = solar_model();
        let mut animator = Animator::new();
        for _ in 0..400 {
            animator.tick(&model);
        }
        let earth = model.get(EARTH).unwrap();
        assert!((earth.rotation.y - 0.0025 * 400.0).abs() < 1e-4);
        let mars = model.get(MARS).unwrap();
        assert!((mars.rotation.y + 0.005 * 400.0).abs() < 1e-4);
    }

    #[test]
    fn moon_stays_on_its_orbit_circle() {
        let model = solar_model();
        let mut animator = Animator::new();
        for _ in 0..500 {
            animator.tick(&model);
            let moon = model.get(MOON).unwrap();
            let r2 = moon.position.x * moon.position.x + moon.position.z * moon.position.z;
            assert!((r2 - 400.0).abs() < 1e-2, "moon left the orbit: r^2={r2}");
        }
    }

    #[test]
    fn hundred_ticks_reach_the_expected_orbit_angle() {
        let model = solar_model();
        let mut animator = Animator::new();
        for _ in 0..100 {
            animator.tick(&model);
        }
        assert!((animator.time() - 1.0).abs() < 1e-9);
        let moon = model.get(MOON).unwrap();
        assert!((moon.position.x - 10.806).abs() < 1e-2);
        assert!((moon.position.z - 16.829).abs() < 1e-2);
    }

    #[test]
    fn overflow_reset_restarts_the_orbit() {
        let model = solar_model();
        let mut animator = Animator::new();
        animator.set_time(TIME_LIMIT);
        animator.tick(&model);
        assert_eq!(animator.time(), TIME_STEP);
        let moon = model.get(MOON).unwrap();
        // Discontinuous jump back to the orbit's start angle.
        assert!((moon.position.x as f64 - MOON_ORBIT_RADIUS * TIME_STEP.cos()).abs() < 1e-3);
        assert!((moon.position.z as f64 - MOON_ORBIT_RADIUS * TIME_STEP.sin()).abs() < 1e-3);
    }

    #[test]
    fn scroll_is_idempotent_for_the_camera_only() {
        let model = solar_model();
        let mut camera = CameraPose::startup();

        apply_scroll(-500.0, &model, &mut camera);
        let first = camera;
        let moon_after_one = model.get(MOON).unwrap().rotation;

        apply_scroll(-500.0, &model, &mut camera);
        assert_eq!(camera, first);
        let moon_after_two = model.get(MOON).unwrap().rotation;
        assert_eq!(moon_after_two - moon_after_one, SCROLL_MOON_SPIN);

        assert!((camera.position.z - 5.0).abs() < 1e-6);
        assert!((camera.position.x - 1.0).abs() < 1e-6);
        assert!((camera.yaw - 0.1).abs() < 1e-6);
    }

    #[test]
    fn startup_scroll_establishes_the_initial_pose() {
        let model = solar_model();
        let mut camera = CameraPose::startup();
        apply_scroll(0.0, &model, &mut camera);
        // x/z collapse to zero at the page top; y is untouched.
        assert_eq!(camera.position, glam::Vec3::new(0.0, 30.0, 0.0));
        assert_eq!(camera.yaw, 0.0);
    }

    #[test]
    fn zero_offset_yields_positive_zeros() {
        let model = solar_model();
        let mut camera = CameraPose::startup();
        apply_scroll(0.0, &model, &mut camera);
        // The negative factors would turn 0.0 into -0.0 without the fold,
        // and -0.0 survives into formatted output.
        assert!(camera.position.x.is_sign_positive());
        assert!(camera.position.z.is_sign_positive());
        assert!(camera.yaw.is_sign_positive());
        assert_eq!(format!("{:.2}", camera.position.z), "0.00");
    }
}
