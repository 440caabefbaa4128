/// Absolute transform parameters and the baseline recompute
use nalgebra::Vector3;

use crate::mesh::Vertex;

/// Scale factors at or below this value are rejected.
pub const MIN_SCALE: f32 = 0.1;

/// Absolute transform state applied to the baseline vertex buffer.
///
/// Each mutator replaces one of these fields outright rather than composing
/// with the previous value; the live buffer is always recomputed from the
/// untouched baseline, so repeated identical calls cannot drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    /// Offset added to every vertex, applied last.
    pub translate: Vector3<f32>,
    /// Per-axis rotation angles in degrees, applied as sequential plane
    /// rotations in X, Y, Z order.
    pub rotate: Vector3<f32>,
    /// Uniform scale factor, applied first.
    pub scale: f32,
}

impl TransformParams {
    pub fn identity() -> Self {
        Self {
            translate: Vector3::zeros(),
            rotate: Vector3::zeros(),
            scale: 1.0,
        }
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self::identity()
    }
}

/// Recompute a live vertex buffer from the baseline and the current
/// parameters.
///
/// The order is fixed no matter which parameter last changed: scale, then
/// rotation about X, Y, Z as three discrete plane rotations (each operating
/// on the coordinates already updated by the previous one), then
/// translation. The sequential rotations are an observable contract; a
/// single combined rotation matrix does not reproduce the same outputs.
pub fn apply(params: &TransformParams, baseline: &[Vertex]) -> Vec<Vertex> {
    let mut vertices = baseline.to_vec();

    if params.scale != 1.0 {
        for vertex in &mut vertices {
            vertex.position.coords *= params.scale;
        }
    }

    if params.rotate != Vector3::zeros() {
        let (sin_x, cos_x) = params.rotate.x.to_radians().sin_cos();
        let (sin_y, cos_y) = params.rotate.y.to_radians().sin_cos();
        let (sin_z, cos_z) = params.rotate.z.to_radians().sin_cos();

        for vertex in &mut vertices {
            let p = &mut vertex.position;

            if params.rotate.x != 0.0 {
                let y = p.y * cos_x - p.z * sin_x;
                let z = p.y * sin_x + p.z * cos_x;
                p.y = y;
                p.z = z;
            }

            if params.rotate.y != 0.0 {
                let x = p.x * cos_y + p.z * sin_y;
                let z = -p.x * sin_y + p.z * cos_y;
                p.x = x;
                p.z = z;
            }

            if params.rotate.z != 0.0 {
                let x = p.x * cos_z - p.y * sin_z;
                let y = p.x * sin_z + p.y * cos_z;
                p.x = x;
                p.y = y;
            }
        }
    }

    if params.translate != Vector3::zeros() {
        for vertex in &mut vertices {
            vertex.position += params.translate;
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(x: f32, y: f32, z: f32) -> Vec<Vertex> {
        vec![Vertex::new(x, y, z)]
    }

    #[test]
    fn test_identity_passthrough() {
        let baseline = single(1.0, 2.0, 3.0);
        let out = apply(&TransformParams::identity(), &baseline);
        assert_eq!(out, baseline);
    }

    #[test]
    fn test_scale() {
        let mut params = TransformParams::identity();
        params.scale = 2.0;

        let out = apply(&params, &single(1.0, -2.0, 3.0));
        assert_eq!(out[0], Vertex::new(2.0, -4.0, 6.0));
    }

    #[test]
    fn test_rotate_90_about_x() {
        let mut params = TransformParams::identity();
        params.rotate = Vector3::new(90.0, 0.0, 0.0);

        let out = apply(&params, &single(1.0, 1.0, 1.0));
        let p = out[0].position;
        assert!((p.x - 1.0).abs() < 1e-3);
        assert!((p.y + 1.0).abs() < 1e-3);
        assert!((p.z - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_rotations_are_sequential() {
        // X then Y on already-rotated coordinates: (1,1,1) -> (1,-1,1) -> (1,-1,-1)
        let mut params = TransformParams::identity();
        params.rotate = Vector3::new(90.0, 90.0, 0.0);

        let out = apply(&params, &single(1.0, 1.0, 1.0));
        let p = out[0].position;
        assert!((p.x - 1.0).abs() < 1e-3);
        assert!((p.y + 1.0).abs() < 1e-3);
        assert!((p.z + 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_fixed_order_scale_rotate_translate() {
        let params = TransformParams {
            translate: Vector3::new(1.0, 1.0, 1.0),
            rotate: Vector3::new(90.0, 0.0, 0.0),
            scale: 2.0,
        };

        let out = apply(&params, &single(1.0, 1.0, 1.0));
        let p = out[0].position;
        assert!((p.x - 3.0).abs() < 1e-3);
        assert!((p.y + 1.0).abs() < 1e-3);
        assert!((p.z - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_translate() {
        let mut params = TransformParams::identity();
        params.translate = Vector3::new(1.0, 2.0, 3.0);

        let out = apply(&params, &single(0.5, 0.5, 0.5));
        assert_eq!(out[0], Vertex::new(1.5, 2.5, 3.5));
    }
}
