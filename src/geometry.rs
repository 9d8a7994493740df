//! Vertex data for the meshes the WebGL effects upload.

/// Indexed plane in the XY plane, interleaved `x y z u v`.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneMesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u16>,
}

pub const PLANE_STRIDE: usize = 5;

impl PlaneMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / PLANE_STRIDE
    }
}

/// `width × height` plane centered on the origin with `segments` quads per
/// axis. Rows run top to bottom; `v` is 1 on the top edge.
pub fn plane(width: f32, height: f32, segments: u16) -> PlaneMesh {
    let grid = segments.max(1) as usize;
    let row = grid + 1;
    let seg_w = width / grid as f32;
    let seg_h = height / grid as f32;

    let mut vertices = Vec::with_capacity(row * row * PLANE_STRIDE);
    for iy in 0..row {
        let y = height / 2.0 - iy as f32 * seg_h;
        for ix in 0..row {
            let x = ix as f32 * seg_w - width / 2.0;
            vertices.extend_from_slice(&[
                x,
                y,
                0.0,
                ix as f32 / grid as f32,
                1.0 - iy as f32 / grid as f32,
            ]);
        }
    }

    let mut indices = Vec::with_capacity(grid * grid * 6);
    for iy in 0..grid {
        for ix in 0..grid {
            let a = (ix + row * iy) as u16;
            let b = (ix + row * (iy + 1)) as u16;
            let c = (ix + 1 + row * (iy + 1)) as u16;
            let d = (ix + 1 + row * iy) as u16;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    PlaneMesh { vertices, indices }
}

pub const SOLID_STRIDE: usize = 6;

/// Non-indexed octahedron with flat face normals, interleaved
/// `x y z nx ny nz`.
pub fn octahedron(radius: f32) -> Vec<f32> {
    const AXES: [[f32; 3]; 6] = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];

    let mut out = Vec::with_capacity(8 * 3 * SOLID_STRIDE);
    for &x in &[0usize, 1] {
        for &y in &[2usize, 3] {
            for &z in &[4usize, 5] {
                let (px, py, pz) = (AXES[x], AXES[y], AXES[z]);
                let n = [px[0], py[1], pz[2]];
                let len = 3f32.sqrt();
                let normal = [n[0] / len, n[1] / len, n[2] / len];
                // Counter-clockwise seen from outside.
                let winding = if n[0] * n[1] * n[2] > 0.0 {
                    [px, py, pz]
                } else {
                    [px, pz, py]
                };
                for corner in winding {
                    out.extend_from_slice(&[
                        corner[0] * radius,
                        corner[1] * radius,
                        corner[2] * radius,
                    ]);
                    out.extend_from_slice(&normal);
                }
            }
        }
    }
    out
}
