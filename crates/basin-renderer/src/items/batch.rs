//! Grouping of ring items into per-model instanced draws.

use std::ops::Range;

use basin_scene::{ItemInstance, Scene};

use crate::mesh::InstanceRaw;

/// One instanced draw: every instance of `model` in `instances`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawBatch {
    pub model: usize,
    pub instances: Range<u32>,
}

/// Flatten the scene's items into an instance array sorted by model, plus the
/// draw ranges into it. Ring order is preserved within a model.
pub fn build_batches(scene: &Scene) -> (Vec<InstanceRaw>, Vec<DrawBatch>) {
    let mut items: Vec<ItemInstance> = scene.instances().collect();
    items.sort_by_key(|item| item.model);

    let mut raw = Vec::with_capacity(items.len());
    let mut batches: Vec<DrawBatch> = Vec::new();

    for (i, item) in items.iter().enumerate() {
        let i = i as u32;
        raw.push(InstanceRaw::from(item));
        match batches.last_mut() {
            Some(batch) if batch.model == item.model => batch.instances.end = i + 1,
            _ => batches.push(DrawBatch {
                model: item.model,
                instances: i..i + 1,
            }),
        }
    }

    (raw, batches)
}
