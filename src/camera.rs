use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Camera placement: a position plus a yaw about the world Y axis.
///
/// The scroll handler rewrites position x/z and the yaw; the orbit controls
/// add their own offsets on top when the view matrix is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
}

impl CameraPose {
    /// Startup pose, before the initial scroll application.
    pub fn startup() -> Self {
        Self {
            position: Vec3::new(17.0, 30.0, 30.0),
            yaw: 0.0,
        }
    }

    /// Derives the combined view-projection matrix for the pose, with
    /// optional extra yaw/pitch contributed by the orbit controls.
    pub fn view_projection(&self, aspect: f32, extra_yaw: f32, extra_pitch: f32) -> Mat4 {
        let rotation =
            Mat4::from_rotation_y(self.yaw + extra_yaw) * Mat4::from_rotation_x(extra_pitch);
        let forward = (rotation * Vec3::NEG_Z.extend(0.0)).truncate();
        let up = (rotation * Vec3::Y.extend(0.0)).truncate();
        let view = Mat4::look_at_rh(self.position, self.position + forward, up);
        let projection = Mat4::perspective_rh(
            FOV_DEGREES.to_radians(),
            aspect.max(0.01),
            NEAR_PLANE,
            FAR_PLANE,
        );
        projection * view
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::startup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_pose_matches_scene_layout() {
        let pose = CameraPose::startup();
        assert_eq!(pose.position, Vec3::new(17.0, 30.0, 30.0));
        assert_eq!(pose.yaw, 0.0);
    }

    #[test]
    fn view_projection_is_finite() {
        let pose = CameraPose::startup();
        let vp = pose.view_projection(16.0 / 9.0, 0.1, -0.05);
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn zero_aspect_is_clamped() {
        let pose = CameraPose::startup();
        let vp = pose.view_projection(0.0, 0.0, 0.0);
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
