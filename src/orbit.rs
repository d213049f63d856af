use std::f32::consts::FRAC_PI_2;

use crate::input::PointerState;

/// Radians of camera rotation per pixel of drag.
pub const DRAG_SENSITIVITY: f32 = 0.005;

/// Pitch is clamped short of straight up/down to keep the view matrix
/// well conditioned.
pub const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Translates pointer-drag input into camera orientation offsets.
///
/// The offsets sit on top of the scroll-derived pose: reconciliation
/// happens once per tick, when the animator asks the controls to consume
/// whatever drag motion accumulated since the previous frame.
#[derive(Debug, Default)]
pub struct OrbitControls {
    yaw: f32,
    pitch: f32,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles pending pointer input. Cheap no-op when nothing was
    /// dragged since the last tick.
    pub fn update(&mut self, pointer: &PointerState) {
        let delta = pointer.take_drag_delta();
        if delta == glam::Vec2::ZERO {
            return;
        }
        self.yaw -= delta.x * DRAG_SENSITIVITY;
        self.pitch = (self.pitch - delta.y * DRAG_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}
