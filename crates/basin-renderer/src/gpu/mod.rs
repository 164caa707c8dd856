mod context;
mod layout;
mod types;
mod uniforms;

pub use context::*;
pub use layout::*;
pub use types::*;
pub use uniforms::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_into_basin_error() {
        let err: basin_common::BasinError = RendererError::AdapterNotFound.into();
        assert_eq!(err.to_string(), "renderer error: no suitable GPU adapter found");
    }

    #[test]
    fn physical_size_clamps_to_one_pixel() {
        let size = PhysicalSize::clamped(0, 0);
        assert_eq!(
            size,
            PhysicalSize {
                width: 1,
                height: 1
            }
        );
        let b = size;
        assert_eq!(size, b);
    }
}
