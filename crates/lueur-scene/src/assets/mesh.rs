use std::collections::HashMap;
use std::fmt;

use glam::Vec3;

/// Validation failure for host-delivered mesh data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Position array length is not a multiple of 3.
    RaggedPositions { len: usize },
    /// Index array length is not a multiple of 3.
    RaggedIndices { len: usize },
    /// An index points past the last vertex.
    IndexOutOfRange { index: u32, vertex_count: usize },
    /// A mesh with no triangles.
    Empty,
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::RaggedPositions { len } => {
                write!(f, "position array length {len} is not a multiple of 3")
            }
            MeshError::RaggedIndices { len } => {
                write!(f, "index array length {len} is not a multiple of 3")
            }
            MeshError::IndexOutOfRange { index, vertex_count } => {
                write!(f, "index {index} out of range for {vertex_count} vertices")
            }
            MeshError::Empty => write!(f, "mesh has no triangles"),
        }
    }
}

impl std::error::Error for MeshError {}

/// Triangle mesh data handed over by the host model loader.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Validate and convert the flat arrays delivered across the WASM boundary.
    pub fn from_raw(positions: &[f32], indices: &[u32]) -> Result<Self, MeshError> {
        if positions.len() % 3 != 0 {
            return Err(MeshError::RaggedPositions { len: positions.len() });
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::RaggedIndices { len: indices.len() });
        }
        if indices.is_empty() {
            return Err(MeshError::Empty);
        }
        let vertex_count = positions.len() / 3;
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfRange { index: bad, vertex_count });
        }
        let positions = positions
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            positions,
            indices: indices.to_vec(),
        })
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Vertical extent of the loaded model, computed once at load completion.
/// Feeds the edge-reveal shader's `min_y`/`max_y` uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelBounds {
    pub min_y: f32,
    pub max_y: f32,
}

impl ModelBounds {
    /// Empty bounds, used before any mesh has arrived.
    pub fn empty() -> Self {
        Self {
            min_y: 0.0,
            max_y: 0.0,
        }
    }

    /// Vertical midpoint.
    pub fn center_y(&self) -> f32 {
        0.5 * (self.min_y + self.max_y)
    }
}

/// Full axis-aligned bounding box, used to center the model group.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
    seeded: bool,
}

impl BoundingBox {
    pub fn empty() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
            seeded: false,
        }
    }

    pub fn extend(&mut self, mesh: &MeshData) {
        for p in &mesh.positions {
            if !self.seeded {
                self.min = *p;
                self.max = *p;
                self.seeded = true;
            } else {
                self.min = self.min.min(*p);
                self.max = self.max.max(*p);
            }
        }
    }

    pub fn center(&self) -> Vec3 {
        0.5 * (self.min + self.max)
    }

    pub fn vertical_bounds(&self) -> ModelBounds {
        ModelBounds {
            min_y: self.min.y,
            max_y: self.max.y,
        }
    }
}

/// Extract the feature edges of a mesh as line segments.
///
/// An edge is kept when it borders exactly one triangle (a boundary edge) or
/// when the dihedral angle between its two triangles exceeds the threshold.
/// 15° reproduces the overlay geometry the page derived on the engine side.
pub fn extract_edges(mesh: &MeshData, angle_threshold_degrees: f32) -> Vec<[Vec3; 2]> {
    let cos_threshold = angle_threshold_degrees.to_radians().cos();

    // Edge key (sorted vertex pair) -> normals of adjacent faces.
    let mut edge_faces: HashMap<(u32, u32), Vec<Vec3>> = HashMap::new();

    for tri in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        let pa = mesh.positions[a as usize];
        let pb = mesh.positions[b as usize];
        let pc = mesh.positions[c as usize];
        let normal = (pb - pa).cross(pc - pa).normalize_or_zero();

        for (u, v) in [(a, b), (b, c), (c, a)] {
            let key = if u < v { (u, v) } else { (v, u) };
            edge_faces.entry(key).or_default().push(normal);
        }
    }

    let mut segments = Vec::new();
    for ((u, v), normals) in edge_faces {
        let keep = match normals.as_slice() {
            [_] => true,
            [n1, n2] => n1.dot(*n2) < cos_threshold,
            // Non-manifold edge: always show it.
            _ => true,
        };
        if keep {
            segments.push([mesh.positions[u as usize], mesh.positions[v as usize]]);
        }
    }
    segments
}

/// Flatten segments into an xyz vertex stream for a GPU line-list buffer.
pub fn flatten_segments(segments: &[[Vec3; 2]]) -> Vec<f32> {
    let mut out = Vec::with_capacity(segments.len() * 6);
    for [a, b] in segments {
        out.extend_from_slice(&[a.x, a.y, a.z, b.x, b.y, b.z]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit cube: 8 vertices, 12 triangles.
    fn cube() -> MeshData {
        let positions: Vec<f32> = vec![
            0.0, 0.0, 0.0, // 0
            1.0, 0.0, 0.0, // 1
            1.0, 1.0, 0.0, // 2
            0.0, 1.0, 0.0, // 3
            0.0, 0.0, 1.0, // 4
            1.0, 0.0, 1.0, // 5
            1.0, 1.0, 1.0, // 6
            0.0, 1.0, 1.0, // 7
        ];
        let indices: Vec<u32> = vec![
            0, 2, 1, 0, 3, 2, // back
            4, 5, 6, 4, 6, 7, // front
            0, 1, 5, 0, 5, 4, // bottom
            3, 6, 2, 3, 7, 6, // top
            1, 2, 6, 1, 6, 5, // right
            0, 4, 7, 0, 7, 3, // left
        ];
        MeshData::from_raw(&positions, &indices).unwrap()
    }

    /// Two coplanar triangles sharing an edge.
    fn flat_quad() -> MeshData {
        let positions: Vec<f32> = vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            1.0, 1.0, 0.0, //
            0.0, 1.0, 0.0,
        ];
        let indices: Vec<u32> = vec![0, 1, 2, 0, 2, 3];
        MeshData::from_raw(&positions, &indices).unwrap()
    }

    #[test]
    fn from_raw_validates_lengths() {
        assert!(matches!(
            MeshData::from_raw(&[0.0, 0.0], &[0, 1, 2]),
            Err(MeshError::RaggedPositions { .. })
        ));
        assert!(matches!(
            MeshData::from_raw(&[0.0; 9], &[0, 1]),
            Err(MeshError::RaggedIndices { .. })
        ));
        assert!(matches!(
            MeshData::from_raw(&[0.0; 9], &[0, 1, 7]),
            Err(MeshError::IndexOutOfRange { index: 7, .. })
        ));
        assert!(matches!(MeshData::from_raw(&[0.0; 9], &[]), Err(MeshError::Empty)));
    }

    #[test]
    fn cube_has_twelve_feature_edges() {
        // Every cube edge sits between faces at 90°; the face diagonals are
        // coplanar and must be dropped.
        let edges = extract_edges(&cube(), 15.0);
        assert_eq!(edges.len(), 12);
    }

    #[test]
    fn flat_quad_keeps_only_boundary_edges() {
        // The shared diagonal is coplanar; the 4 outer edges are boundaries.
        let edges = extract_edges(&flat_quad(), 15.0);
        assert_eq!(edges.len(), 4);
    }

    #[test]
    fn bounds_from_cube() {
        let mut bbox = BoundingBox::empty();
        bbox.extend(&cube());
        assert_eq!(bbox.center(), Vec3::splat(0.5));
        let bounds = bbox.vertical_bounds();
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 1.0);
        assert_eq!(bounds.center_y(), 0.5);
    }

    #[test]
    fn bounds_seed_from_first_vertex() {
        // A mesh entirely above y=0 must not report min_y = 0.
        let positions: Vec<f32> = vec![0.0, 5.0, 0.0, 1.0, 6.0, 0.0, 0.0, 7.0, 1.0];
        let mesh = MeshData::from_raw(&positions, &[0, 1, 2]).unwrap();
        let mut bbox = BoundingBox::empty();
        bbox.extend(&mesh);
        let bounds = bbox.vertical_bounds();
        assert_eq!(bounds.min_y, 5.0);
        assert_eq!(bounds.max_y, 7.0);
    }

    #[test]
    fn flatten_produces_six_floats_per_segment() {
        let edges = extract_edges(&flat_quad(), 15.0);
        let flat = flatten_segments(&edges);
        assert_eq!(flat.len(), edges.len() * 6);
    }
}
