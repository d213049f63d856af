use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::starfield;

pub const EARTH: &str = "Earth";
pub const MARS: &str = "Mars";
pub const VENUS: &str = "Venus";
pub const MOON: &str = "Moon";

/// Number of stars scattered around the planets.
pub const STAR_COUNT: usize = 250;

/// Runtime representation of the solar scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub light: Light,
}

impl Scene {
    /// Builds the fixed solar scene: three planets, the orbiting moon and
    /// a random starfield. Star positions are drawn from `star_seed` so the
    /// same seed reproduces the same sky.
    pub fn solar(star_seed: u64) -> Self {
        let mut objects = vec![
            SceneObject::planet(EARTH, 12.0, Vec3::ZERO)
                .with_texture("earth.jpg")
                .with_normal_map("earthNormal.png"),
            SceneObject::planet(MARS, 7.0, Vec3::new(100.0, 0.0, -80.0))
                .with_texture("mars.jpg")
                .with_normal_map("marsNormal.jpg"),
            SceneObject::planet(VENUS, 10.0, Vec3::new(-100.0, 0.0, -30.0))
                .with_texture("venus.jpg"),
            SceneObject::moon(MOON, 3.0, Vec3::new(-10.0, 0.0, 30.0))
                .with_texture("moon.jpg")
                .with_normal_map("moonNormal.jpg"),
        ];
        objects.extend(starfield::scatter(STAR_COUNT, star_seed));
        Self {
            objects,
            light: Light::default(),
        }
    }
}

/// Kind of renderable body in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Planet,
    Moon,
    Star,
}

/// A single scene-graph node. Objects are created fully formed before the
/// first frame and live for the whole process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub kind: BodyKind,
    pub position: Vec3,
    /// Euler rotation in radians. Grows without bound; the renderer's own
    /// trigonometry wraps the angle.
    pub rotation: Vec3,
    pub radius: f32,
    #[serde(default = "default_color")]
    pub color: Vec3,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_map: Option<String>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, kind: BodyKind, radius: f32, position: Vec3) -> Self {
        Self {
            name: name.into(),
            kind,
            position,
            rotation: Vec3::ZERO,
            radius,
            color: default_color(),
            texture: None,
            normal_map: None,
        }
    }

    pub fn planet(name: &str, radius: f32, position: Vec3) -> Self {
        Self::new(name, BodyKind::Planet, radius, position)
    }

    pub fn moon(name: &str, radius: f32, position: Vec3) -> Self {
        Self::new(name, BodyKind::Moon, radius, position)
    }

    pub fn star(position: Vec3) -> Self {
        Self::new("Star", BodyKind::Star, 0.25, position)
    }

    pub fn with_texture(mut self, name: &str) -> Self {
        self.texture = Some(name.to_string());
        self
    }

    pub fn with_normal_map(mut self, name: &str) -> Self {
        self.normal_map = Some(name.to_string());
        self
    }
}

fn default_color() -> Vec3 {
    Vec3::ONE
}

/// Point light illuminating the planets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(20.0, 20.0, 20.0),
            color: Vec3::ONE,
            intensity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solar_scene_contains_all_bodies() {
        let scene = Scene::solar(7);
        for name in [EARTH, MARS, VENUS, MOON] {
            assert!(
                scene.objects.iter().any(|o| o.name == name),
                "missing {name}"
            );
        }
        let stars = scene
            .objects
            .iter()
            .filter(|o| o.kind == BodyKind::Star)
            .count();
        assert_eq!(stars, STAR_COUNT);
    }

    #[test]
    fn bodies_are_fully_formed_at_construction() {
        let scene = Scene::solar(7);
        for object in &scene.objects {
            assert!(object.radius > 0.0, "{} has no radius", object.name);
            assert_eq!(object.rotation, Vec3::ZERO);
        }
        let moon = scene.objects.iter().find(|o| o.name == MOON).unwrap();
        assert_eq!(moon.position, Vec3::new(-10.0, 0.0, 30.0));
        assert_eq!(moon.kind, BodyKind::Moon);
    }

    #[test]
    fn same_seed_reproduces_the_sky() {
        assert_eq!(Scene::solar(42), Scene::solar(42));
    }
}
