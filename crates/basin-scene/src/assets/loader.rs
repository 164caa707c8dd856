//! Background asset loader.
//!
//! Each request spawns a named thread that decodes one file and sends an
//! [`AssetEvent`] back. Every model request carries the index it was
//! requested for, so the receiver can place it without depending on the
//! order loads complete in.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use tracing::{debug, info, warn};

use super::obj::{load_obj, ModelMesh};
use super::texture::{load_normal_map, NormalMap};
use crate::error::AssetError;

#[derive(Debug)]
pub enum AssetEvent {
    ModelLoaded {
        index: usize,
        mesh: ModelMesh,
    },
    ModelFailed {
        index: usize,
        path: PathBuf,
        error: AssetError,
    },
    NormalMapLoaded(NormalMap),
    NormalMapFailed {
        path: PathBuf,
        error: AssetError,
    },
}

pub struct AssetLoader {
    tx: mpsc::Sender<AssetEvent>,
    rx: mpsc::Receiver<AssetEvent>,
    pending: usize,
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetLoader {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx, pending: 0 }
    }

    /// Load model `index` from `path` in the background.
    pub fn request_model(&mut self, index: usize, path: PathBuf) {
        debug!(index, path = %path.display(), "requesting model");
        let tx = self.tx.clone();
        let thread_path = path.clone();
        let spawned = thread::Builder::new()
            .name(format!("asset-model-{index}"))
            .spawn(move || {
                let event = match load_obj(&thread_path) {
                    Ok(mesh) => AssetEvent::ModelLoaded { index, mesh },
                    Err(error) => AssetEvent::ModelFailed {
                        index,
                        path: thread_path,
                        error,
                    },
                };
                let _ = tx.send(event);
            });
        self.pending += 1;
        if let Err(source) = spawned {
            let _ = self.tx.send(AssetEvent::ModelFailed {
                index,
                path: path.clone(),
                error: AssetError::Io { path, source },
            });
        }
    }

    /// Load the water normal map from `path` in the background.
    pub fn request_normal_map(&mut self, path: PathBuf) {
        debug!(path = %path.display(), "requesting normal map");
        let tx = self.tx.clone();
        let thread_path = path.clone();
        let spawned = thread::Builder::new()
            .name("asset-normals".to_string())
            .spawn(move || {
                let event = match load_normal_map(&thread_path) {
                    Ok(map) => AssetEvent::NormalMapLoaded(map),
                    Err(error) => AssetEvent::NormalMapFailed {
                        path: thread_path,
                        error,
                    },
                };
                let _ = tx.send(event);
            });
        self.pending += 1;
        if let Err(source) = spawned {
            let _ = self.tx.send(AssetEvent::NormalMapFailed {
                path: path.clone(),
                error: AssetError::Io { path, source },
            });
        }
    }

    /// Requests that have not reported back yet.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Drain finished loads without blocking.
    pub fn poll(&mut self) -> Vec<AssetEvent> {
        let events: Vec<AssetEvent> = self.rx.try_iter().collect();
        for event in &events {
            self.record(event);
        }
        events
    }

    /// Block until one load finishes or `timeout` passes.
    #[cfg(test)]
    fn wait(&mut self, timeout: std::time::Duration) -> Option<AssetEvent> {
        let event = self.rx.recv_timeout(timeout).ok()?;
        self.record(&event);
        Some(event)
    }

    fn record(&mut self, event: &AssetEvent) {
        self.pending = self.pending.saturating_sub(1);
        match event {
            AssetEvent::ModelLoaded { index, mesh } => {
                info!(
                    index,
                    triangles = mesh.triangle_count(),
                    "model loaded"
                );
            }
            AssetEvent::ModelFailed { index, path, error } => {
                warn!(index, path = %path.display(), "model failed to load: {error}");
            }
            AssetEvent::NormalMapLoaded(map) => {
                info!(width = map.width, height = map.height, "water normal map loaded");
            }
            AssetEvent::NormalMapFailed { path, error } => {
                warn!(path = %path.display(), "water normal map failed to load: {error}");
            }
        }
    }
}
