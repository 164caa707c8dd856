//! Cylinder mesh generation for the water basin.
//!
//! The cylinder stands on the Y axis, centered at the origin, with the seam
//! at +Z. Side UVs wrap once around the circumference; cap UVs map the disc
//! onto the unit square.

use std::f32::consts::TAU;

use super::types::WaterVertex;

/// Generate a closed cylinder as a non-indexed triangle list.
///
/// Produces `radial * height_segments * 6` side vertices plus
/// `radial * 3` vertices per cap.
pub fn generate_cylinder_mesh(
    radius: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
    capped: bool,
) -> Vec<WaterVertex> {
    let radial = radial_segments.max(3);
    let rows = height_segments.max(1);
    let half = height * 0.5;

    let side = (radial * rows * 6) as usize;
    let caps = if capped { (radial * 6) as usize } else { 0 };
    let mut vertices = Vec::with_capacity(side + caps);

    let side_vertex = |x: u32, y: u32| -> WaterVertex {
        let u = x as f32 / radial as f32;
        let v = y as f32 / rows as f32;
        let theta = u * TAU;
        let (sin, cos) = theta.sin_cos();
        WaterVertex {
            position: [radius * sin, half - v * height, radius * cos],
            normal: [sin, 0.0, cos],
            uv: [u, 1.0 - v],
        }
    };

    for y in 0..rows {
        for x in 0..radial {
            let a = side_vertex(x, y);
            let b = side_vertex(x, y + 1);
            let c = side_vertex(x + 1, y + 1);
            let d = side_vertex(x + 1, y);
            vertices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    if capped {
        push_cap(&mut vertices, radius, half, radial, true);
        push_cap(&mut vertices, radius, -half, radial, false);
    }

    vertices
}

fn push_cap(vertices: &mut Vec<WaterVertex>, radius: f32, y: f32, radial: u32, top: bool) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = [0.0, sign, 0.0];
    let rim = |x: u32| -> WaterVertex {
        let theta = x as f32 / radial as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        WaterVertex {
            position: [radius * sin, y, radius * cos],
            normal,
            uv: [cos * 0.5 + 0.5, sin * 0.5 * sign + 0.5],
        }
    };
    let center = WaterVertex {
        position: [0.0, y, 0.0],
        normal,
        uv: [0.5, 0.5],
    };

    for x in 0..radial {
        let (a, b) = (rim(x), rim(x + 1));
        // Counter-clockwise when seen from outside the cylinder.
        if top {
            vertices.extend_from_slice(&[center, a, b]);
        } else {
            vertices.extend_from_slice(&[center, b, a]);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
