//! Mouse wheel normalization.
//!
//! winit reports turning the wheel away from the user as a positive y
//! delta, in lines or pixels depending on the device. The frame driver
//! takes page-style units with the same sign, so only the line case needs
//! scaling.

use winit::event::MouseScrollDelta;

/// Convert a winit scroll delta into pixel units, positive when the wheel
/// turns away from the user. `line_delta` is the pixel size of one notch.
pub fn wheel_units(delta: MouseScrollDelta, line_delta: f32) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y * line_delta,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
    }
}
