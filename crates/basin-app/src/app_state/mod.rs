//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates the scene, frame driver, asset loads, and renderer.

mod core;
mod event_handler;
mod init;
mod polling;

pub use self::core::BasinApp;
