//! Scene module - shared models placed by per-instance transforms
//!
//! - Models are stored once and referenced by `ModelId`
//! - Instances live in a slot store addressed by `InstanceId`; removing one
//!   leaves a hole so other handles and the draw order stay put
//! - `RenderContext` runs one full render pass over a scene

mod geometry;
mod loader;
mod render;

pub use geometry::*;
pub use loader::*;
pub use render::*;

use crate::error::{Error, Result};

/// Handle to a model stored in a `Scene`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelId(usize);

/// Handle to an instance stored in a `Scene`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(usize);

/// A placement of a shared model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInstance {
    pub model: ModelId,
    pub transform: Transform,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    models: Vec<Model>,
    instances: Vec<Option<ModelInstance>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_model(&mut self, model: Model) -> ModelId {
        let id = ModelId(self.models.len());
        self.models.push(model);
        id
    }

    pub fn model(&self, id: ModelId) -> Option<&Model> {
        self.models.get(id.0)
    }

    pub fn find_model(&self, name: &str) -> Option<ModelId> {
        self.models.iter().position(|m| m.name() == name).map(ModelId)
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Place `model` in the scene; it is drawn after every existing instance
    pub fn add_instance(&mut self, model: ModelId, transform: Transform) -> Result<InstanceId> {
        if model.0 >= self.models.len() {
            return Err(Error::UnknownModelId(model.0));
        }
        let id = InstanceId(self.instances.len());
        self.instances.push(Some(ModelInstance { model, transform }));
        log::debug!("Added instance {} of model '{}'", id.0, self.models[model.0].name());
        Ok(id)
    }

    pub fn instance(&self, id: InstanceId) -> Option<&ModelInstance> {
        self.instances.get(id.0).and_then(Option::as_ref)
    }

    /// Mutate an instance in place (e.g. animate its transform)
    pub fn instance_mut(&mut self, id: InstanceId) -> Option<&mut ModelInstance> {
        self.instances.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn remove_instance(&mut self, id: InstanceId) -> Option<ModelInstance> {
        let removed = self.instances.get_mut(id.0).and_then(Option::take);
        if removed.is_some() {
            log::debug!("Removed instance {}", id.0);
        }
        removed
    }

    /// Live instances in draw order, paired with their model
    pub fn instances(&self) -> impl Iterator<Item = (InstanceId, &ModelInstance, &Model)> {
        self.instances.iter().enumerate().filter_map(move |(i, slot)| {
            let instance = slot.as_ref()?;
            let model = self.models.get(instance.model.0)?;
            Some((InstanceId(i), instance, model))
        })
    }

    /// Number of live instances
    pub fn len(&self) -> usize {
        self.instances.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
