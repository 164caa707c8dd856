//! Asset completion polling.

use basin_scene::assets::AssetEvent;

use super::core::BasinApp;

impl BasinApp {
    /// Apply every finished asset load. Meshes are uploaded before the items
    /// are attached so an attached item always has geometry.
    pub(super) fn poll_assets(&mut self) {
        if self.loader.pending() == 0 {
            return;
        }
        let Some(ref mut rs) = self.render_state else {
            return;
        };

        for event in self.loader.poll() {
            match event {
                AssetEvent::ModelLoaded { index, mesh } => {
                    rs.upload_model(index, &mesh);
                    if !self.scene.attach_model(index) {
                        tracing::debug!(index, "Model was already attached");
                    }
                }
                AssetEvent::NormalMapLoaded(map) => rs.set_water_normals(&map),
                // Already logged by the loader; the item simply never appears.
                AssetEvent::ModelFailed { .. } | AssetEvent::NormalMapFailed { .. } => {}
            }
        }

        if self.loader.pending() == 0 {
            tracing::info!(
                models = rs.uploaded_models(),
                items = self.scene.item_count(),
                water_normals = rs.water_normals_loaded(),
                "All asset loads finished"
            );
        }
    }
}
