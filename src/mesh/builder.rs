//! Mesh construction from polygon soups.
//!
//! The builder consumes the raw (vertex positions, per-face vertex-index
//! lists) pair a mesh-loading collaborator produces and links it into a
//! fully navigable half-edge graph. Construction is all-or-nothing: every
//! structural problem in the input is rejected before a mesh is returned,
//! so no partially linked mesh ever escapes.

use std::collections::HashMap;

use nalgebra::Point3;

use super::halfedge::{Face, HalfEdge, HalfEdgeMesh};
use super::index::{FaceId, HalfEdgeId, MeshIndex, VertexId};
use crate::error::{MeshError, Result};

/// Build a half-edge mesh from vertices and arbitrary polygon faces.
///
/// # Arguments
/// * `vertices` - List of vertex positions
/// * `faces` - List of faces, each a list of at least three distinct
///   vertex indices in a consistent winding order
///
/// # Errors
/// * [`MeshError::EmptyMesh`] if `faces` is empty
/// * [`MeshError::InvalidVertexIndex`] for an out-of-range vertex index
/// * [`MeshError::FaceTooSmall`] for a face with fewer than 3 vertices
/// * [`MeshError::DegenerateFace`] for a face listing a vertex twice
/// * [`MeshError::NonManifoldEdge`] when two faces traverse the same
///   directed edge, which would silently corrupt twin linking if allowed
///
/// # Example
/// ```
/// use hedra::mesh::{build_from_polygons, HalfEdgeMesh};
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let faces = vec![vec![0, 1, 2, 3]];
///
/// let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &faces).unwrap();
/// assert_eq!(mesh.num_vertices(), 4);
/// assert_eq!(mesh.num_halfedges(), 4);
/// ```
pub fn build_from_polygons<I, F>(vertices: &[Point3<f64>], faces: &[F]) -> Result<HalfEdgeMesh<I>>
where
    I: MeshIndex,
    F: AsRef<[usize]>,
{
    if faces.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    // Validate before touching any mesh storage.
    for (fi, face) in faces.iter().enumerate() {
        let indices = face.as_ref();
        if indices.len() < 3 {
            return Err(MeshError::FaceTooSmall {
                face: fi,
                count: indices.len(),
            });
        }
        for (i, &vi) in indices.iter().enumerate() {
            if vi >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
            }
            if indices[i + 1..].contains(&vi) {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }
    }

    let num_halfedges: usize = faces.iter().map(|f| f.as_ref().len()).sum();
    let mut mesh = HalfEdgeMesh::with_capacity(vertices.len(), faces.len(), num_halfedges);

    let vertex_ids: Vec<VertexId<I>> = vertices.iter().map(|&pos| mesh.add_vertex(pos)).collect();

    // Directed edge (origin, destination) -> half-edge, used for twin
    // resolution below.
    let mut edge_map: HashMap<(usize, usize), HalfEdgeId<I>> = HashMap::with_capacity(num_halfedges);

    // First pass: one closed half-edge cycle per face.
    for face in faces {
        let indices = face.as_ref();
        let degree = indices.len();
        let base = mesh.num_halfedges();

        for _ in 0..degree {
            mesh.halfedges.push(HalfEdge::new());
        }

        let face_id = FaceId::<I>::new(mesh.num_faces());
        mesh.faces.push(Face::new(HalfEdgeId::new(base)));

        for k in 0..degree {
            let origin = indices[k];
            let dest = indices[(k + 1) % degree];
            let he_id = HalfEdgeId::<I>::new(base + k);

            {
                let he = mesh.halfedge_mut(he_id);
                he.head = vertex_ids[dest];
                he.next = HalfEdgeId::new(base + (k + 1) % degree);
                he.prev = HalfEdgeId::new(base + (k + degree - 1) % degree);
                he.face = face_id;
            }

            // First-seen representative: never reassigned once set.
            let origin_vertex = mesh.vertex_mut(vertex_ids[origin]);
            if !origin_vertex.halfedge.is_valid() {
                origin_vertex.halfedge = he_id;
            }

            if edge_map.insert((origin, dest), he_id).is_some() {
                // A second face traversing the same directed edge would
                // silently shadow the first in the lookup table and
                // corrupt twin linking, so reject it outright.
                return Err(MeshError::NonManifoldEdge { v0: origin, v1: dest });
            }
        }
    }

    // Second pass: resolve twins through the reverse directed key. Linking
    // is symmetric, so visiting each pair once (or twice) is idempotent;
    // keys with no reverse stay boundary half-edges with no twin.
    for (&(v0, v1), &he) in &edge_map {
        if let Some(&twin) = edge_map.get(&(v1, v0)) {
            mesh.halfedge_mut(he).opposite = twin;
            mesh.halfedge_mut(twin).opposite = he;
        }
    }

    Ok(mesh)
}

/// Build a half-edge mesh from vertices and triangle faces.
///
/// Convenience wrapper over [`build_from_polygons`] for the common
/// fixed-arity case.
///
/// # Example
/// ```
/// use hedra::mesh::{build_from_triangles, HalfEdgeMesh};
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let faces = vec![[0, 1, 2]];
///
/// let mesh: HalfEdgeMesh = build_from_triangles(&vertices, &faces).unwrap();
/// assert_eq!(mesh.num_faces(), 1);
/// ```
pub fn build_from_triangles<I: MeshIndex>(
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
) -> Result<HalfEdgeMesh<I>> {
    build_from_polygons(vertices, faces)
}

/// Build a half-edge mesh from vertices and quad faces.
///
/// Convenience wrapper over [`build_from_polygons`].
pub fn build_from_quads<I: MeshIndex>(
    vertices: &[Point3<f64>],
    faces: &[[usize; 4]],
) -> Result<HalfEdgeMesh<I>> {
    build_from_polygons(vertices, faces)
}

/// Convert a half-edge mesh back to a face-vertex representation.
///
/// Returns the (vertices, faces) pair, with faces of arbitrary degree and
/// vertices in arena order.
pub fn to_polygon_soup<I: MeshIndex>(mesh: &HalfEdgeMesh<I>) -> (Vec<Point3<f64>>, Vec<Vec<usize>>) {
    let vertices = mesh.positions();

    let faces: Vec<Vec<usize>> = mesh
        .face_ids()
        .map(|f| {
            // Tails, so the listing starts at the anchor's origin vertex
            // exactly as the input did.
            mesh.face_halfedges(f).map(|he| mesh.tail(he).index()).collect()
        })
        .collect();

    (vertices, faces)
}

impl<I: MeshIndex> HalfEdgeMesh<I> {
    /// Append a new vertex and return its ID.
    pub(crate) fn add_vertex(&mut self, position: Point3<f64>) -> VertexId<I> {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(super::halfedge::Vertex::new(position));
        id
    }
}
