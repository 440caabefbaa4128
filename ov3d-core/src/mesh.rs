/// Mesh entity: vertex/face storage and the transform mutators
use nalgebra::{Point3, Vector3};
use tracing::warn;

use crate::transform::{self, TransformParams, MIN_SCALE};

/// A vertex position in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }
}

/// A polygon face: an ordered loop of zero-based vertex indices.
///
/// The order defines the boundary loop for drawing. Every stored index is
/// in range for the mesh it belongs to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Face {
    pub indices: Vec<usize>,
}

/// A polygonal mesh with an immutable baseline.
///
/// `vertices` is the live buffer frontends read; it always equals the
/// baseline captured at load time run through the current transform
/// parameters. The baseline itself is never touched after a load, which is
/// what makes every mutator idempotent. Fields are private so collaborators
/// only ever get read-only views.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    original_vertices: Vec<Vertex>,
    faces: Vec<Face>,
    filename: String,
    edge_count: usize,
    params: TransformParams,
}

impl Mesh {
    /// Create an empty, unloaded mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze freshly parsed buffers into a loaded mesh.
    ///
    /// The vertex buffer becomes both the baseline and the initial live
    /// buffer; the edge count is derived here, once, as the sum of per-face
    /// index counts (transforms never change topology).
    pub(crate) fn from_parts(vertices: Vec<Vertex>, faces: Vec<Face>, filename: String) -> Self {
        let edge_count = faces.iter().map(|face| face.indices.len()).sum();
        Self {
            original_vertices: vertices.clone(),
            vertices,
            faces,
            filename,
            edge_count,
            params: TransformParams::default(),
        }
    }

    /// The live, transformed vertex buffer.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Path the mesh was loaded from; empty when no mesh is loaded.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Sum of per-face index counts, fixed at load time.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The current transform parameters.
    pub fn params(&self) -> &TransformParams {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Replace the translation offset and recompute from the baseline.
    ///
    /// The offset is absolute: calling this twice with the same arguments
    /// yields the same buffer as calling it once.
    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.params.translate = Vector3::new(dx, dy, dz);
        self.recompute();
    }

    /// Replace the rotation angles (in degrees) and recompute from the
    /// baseline.
    pub fn rotate(&mut self, ax: f32, ay: f32, az: f32) {
        self.params.rotate = Vector3::new(ax, ay, az);
        self.recompute();
    }

    /// Replace the scale factor and recompute from the baseline.
    ///
    /// Factors at or below [`MIN_SCALE`] are rejected with a warning; the
    /// previously accepted factor and the live buffer stay as they were.
    pub fn scale(&mut self, factor: f32) {
        if factor <= MIN_SCALE {
            warn!(
                "scale factor {} is at or below {}, keeping {}",
                factor, MIN_SCALE, self.params.scale
            );
            return;
        }
        self.params.scale = factor;
        self.recompute();
    }

    /// Reset to the empty, unloaded state, including the transform
    /// parameters. Valid from any state.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.original_vertices.clear();
        self.faces.clear();
        self.filename.clear();
        self.edge_count = 0;
        self.params = TransformParams::default();
    }

    fn recompute(&mut self) {
        self.vertices = transform::apply(&self.params, &self.original_vertices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> Mesh {
        let vertices = vec![
            Vertex::new(1.0, 1.0, 1.0),
            Vertex::new(-1.0, 1.0, 1.0),
            Vertex::new(-1.0, -1.0, 1.0),
            Vertex::new(1.0, -1.0, 1.0),
        ];
        let faces = vec![Face {
            indices: vec![0, 1, 2, 3],
        }];
        Mesh::from_parts(vertices, faces, "quad.obj".to_string())
    }

    #[test]
    fn test_from_parts_freezes_baseline() {
        let mesh = unit_quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.edge_count(), 4);
        assert_eq!(mesh.filename(), "quad.obj");
        assert_eq!(*mesh.params(), TransformParams::identity());
    }

    #[test]
    fn test_translate_is_absolute_not_cumulative() {
        let mut mesh = unit_quad();
        mesh.translate(1.0, 0.0, 0.0);
        let once = mesh.vertices().to_vec();

        mesh.translate(1.0, 0.0, 0.0);
        assert_eq!(mesh.vertices(), &once[..]);
        assert!((mesh.vertices()[0].position.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_mutator_order_does_not_matter() {
        // Recompute always runs scale -> rotate -> translate from baseline,
        // no matter which parameter was set last.
        let mut a = unit_quad();
        a.translate(1.0, 1.0, 1.0);
        a.rotate(90.0, 0.0, 0.0);
        a.scale(2.0);

        let mut b = unit_quad();
        b.scale(2.0);
        b.rotate(90.0, 0.0, 0.0);
        b.translate(1.0, 1.0, 1.0);

        assert_eq!(a.vertices(), b.vertices());
        let p = a.vertices()[0].position;
        assert!((p.x - 3.0).abs() < 1e-3);
        assert!((p.y + 1.0).abs() < 1e-3);
        assert!((p.z - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_rotate_is_idempotent() {
        let mut mesh = unit_quad();
        mesh.rotate(45.0, 30.0, 15.0);
        let once = mesh.vertices().to_vec();

        mesh.rotate(45.0, 30.0, 15.0);
        assert_eq!(mesh.vertices(), &once[..]);
    }

    #[test]
    fn test_scale_is_idempotent() {
        let mut mesh = unit_quad();
        mesh.scale(2.0);
        let once = mesh.vertices().to_vec();

        mesh.scale(2.0);
        assert_eq!(mesh.vertices(), &once[..]);
        assert!((mesh.vertices()[0].position.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_scale_below_threshold_is_a_no_op() {
        let mut mesh = unit_quad();
        mesh.scale(2.0);
        let before = mesh.vertices().to_vec();

        mesh.scale(0.05);
        assert_eq!(mesh.vertices(), &before[..]);
        assert_eq!(mesh.params().scale, 2.0);
    }

    #[test]
    fn test_scale_at_threshold_is_rejected() {
        let mut mesh = unit_quad();
        mesh.scale(MIN_SCALE);
        assert_eq!(mesh.params().scale, 1.0);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut mesh = unit_quad();
        mesh.translate(1.0, 2.0, 3.0);
        mesh.clear();

        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.edge_count(), 0);
        assert_eq!(mesh.filename(), "");
        assert_eq!(*mesh.params(), TransformParams::identity());

        // Idempotent from the empty state
        mesh.clear();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_mutators_on_empty_mesh_do_not_panic() {
        let mut mesh = Mesh::new();
        mesh.translate(1.0, 0.0, 0.0);
        mesh.rotate(90.0, 0.0, 0.0);
        mesh.scale(2.0);
        assert!(mesh.is_empty());
    }
}
