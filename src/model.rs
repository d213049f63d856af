use std::sync::Arc;

use glam::Vec3;
use parking_lot::RwLock;

use crate::scene::SceneObject;

/// Shared container for the mutable scene state.
///
/// The tick handler and the scroll handler both mutate the same objects, so
/// the state lives behind one lock and is handed to each trigger by
/// reference instead of being closed over.
#[derive(Debug, Default)]
pub struct SceneModel {
    objects: Arc<RwLock<Vec<SceneObject>>>,
}

impl Clone for SceneModel {
    fn clone(&self) -> Self {
        Self {
            objects: Arc::clone(&self.objects),
        }
    }
}

impl SceneModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model from the fully-constructed scene objects.
    pub fn from_objects(objects: Vec<SceneObject>) -> Self {
        Self {
            objects: Arc::new(RwLock::new(objects)),
        }
    }

    /// Returns a snapshot of all stored objects.
    pub fn all_objects(&self) -> Vec<SceneObject> {
        self.objects.read().clone()
    }

    /// Returns a clone of the requested object.
    pub fn get(&self, name: &str) -> Option<SceneObject> {
        self.objects
            .read()
            .iter()
            .find(|object| object.name == name)
            .cloned()
    }

    /// Applies a mutation to the requested object while holding the lock.
    pub fn update<F, R>(&self, name: &str, mut updater: F) -> Option<R>
    where
        F: FnMut(&mut SceneObject) -> R,
    {
        let mut guard = self.objects.write();
        let object = guard.iter_mut().find(|object| object.name == name)?;
        Some(updater(object))
    }

    pub fn spin_y(&self, name: &str, delta: f32) -> bool {
        self.update(name, |obj| obj.rotation.y += delta).is_some()
    }

    pub fn spin(&self, name: &str, delta: Vec3) -> bool {
        self.update(name, |obj| obj.rotation += delta).is_some()
    }

    pub fn set_position(&self, name: &str, position: Vec3) -> bool {
        self.update(name, |obj| obj.position = position).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{BodyKind, SceneObject};

    fn body(name: &str) -> SceneObject {
        SceneObject::new(name, BodyKind::Planet, 1.0, Vec3::ZERO)
    }

    #[test]
    fn spin_accumulates() {
        let model = SceneModel::from_objects(vec![body("Earth")]);
        model.spin_y("Earth", 0.5);
        model.spin_y("Earth", 0.25);
        assert_eq!(model.get("Earth").unwrap().rotation.y, 0.75);
    }

    #[test]
    fn missing_object_reports_false() {
        let model = SceneModel::new();
        assert!(!model.spin_y("Pluto", 0.1));
        assert!(!model.set_position("Pluto", Vec3::ONE));
    }

    #[test]
    fn clones_share_the_same_objects() {
        let model = SceneModel::from_objects(vec![body("Moon")]);
        let other = model.clone();
        other.set_position("Moon", Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            model.get("Moon").unwrap().position,
            Vec3::new(1.0, 2.0, 3.0)
        );
    }
}
