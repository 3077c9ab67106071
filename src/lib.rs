//! # Hedra
//!
//! A half-edge polygon mesh topology engine.
//!
//! Hedra builds a connected boundary representation from a raw polygon
//! soup (vertex positions plus per-face vertex-index lists), links the
//! directed half-edges into faces and twin pairs, and exposes the
//! topology and geometry queries a rendering or selection layer consumes.
//!
//! ## Features
//!
//! - **Half-edge data structure**: O(1) adjacency queries with type-safe
//!   arena indices
//! - **Arbitrary polygon faces**: triangles, quads, and higher-degree
//!   faces in one soup
//! - **Boundary-aware**: edges traversed by a single face simply have no
//!   twin; navigation returns `Option` instead of inventing ghost edges
//! - **Strict construction**: out-of-range indices, short faces, and
//!   non-manifold directed edges are rejected before any linking escapes
//! - **Flexible indexing**: `u16`, `u32`, or `u64` backing indices
//!
//! ## Quick Start
//!
//! ```
//! use hedra::prelude::*;
//! use nalgebra::Point3;
//!
//! // A tetrahedron: 4 vertices, 4 triangular faces, outward winding.
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//!     Point3::new(0.5, 0.5, 1.0),
//! ];
//! let faces = vec![
//!     vec![0, 2, 1],
//!     vec![0, 1, 3],
//!     vec![1, 2, 3],
//!     vec![2, 0, 3],
//! ];
//!
//! let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &faces).unwrap();
//!
//! println!("vertices: {}", mesh.num_vertices());
//! println!("faces: {}", mesh.num_faces());
//!
//! for f in mesh.face_ids() {
//!     let normal = mesh.face_normal(f);
//!     println!("face {:?}: normal = {:?}", f, normal);
//! }
//!
//! // Undirected wireframe for a drawing layer.
//! let wire = mesh.edge_vertex_pairs();
//! assert_eq!(wire.len(), 6);
//! ```
//!
//! ## Navigating Half-Edges
//!
//! The interactive selection pattern — pick an edge, then step with
//! next/prev/opposite — is served by [`Cursor`](mesh::Cursor):
//!
//! ```
//! use hedra::prelude::*;
//! use nalgebra::Point3;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # let vertices = vec![
//! #     Point3::new(0.0, 0.0, 0.0),
//! #     Point3::new(1.0, 0.0, 0.0),
//! #     Point3::new(0.5, 1.0, 0.0),
//! # ];
//! # let faces = vec![vec![0, 1, 2]];
//! let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &faces).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut cursor = Cursor::new(mesh.random_halfedge(&mut rng).unwrap());
//!
//! cursor = cursor.advance(&mesh);            // next around the face
//! cursor = cursor.retreat(&mesh);            // back again
//! if let Some(flipped) = cursor.flip(&mesh) {
//!     cursor = flipped;                      // crossed to the twin
//! }
//! let [tail, head] = cursor.endpoints(&mesh);
//! assert_ne!(tail, head);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// ```
/// use hedra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        build_from_polygons, build_from_quads, build_from_triangles, to_polygon_soup, Cursor,
        Edge, Face, FaceId, HalfEdge, HalfEdgeId, HalfEdgeMesh, MeshIndex, Vertex, VertexId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::{Point3, Vector3};

    #[test]
    fn tetrahedron_end_to_end() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];

        let faces = vec![
            vec![0, 2, 1], // bottom
            vec![0, 1, 3], // front
            vec![1, 2, 3], // right
            vec![2, 0, 3], // left
        ];

        let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &faces).unwrap();

        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_faces(), 4);
        // 4 faces * 3 half-edges each, every edge shared.
        assert_eq!(mesh.num_halfedges(), 12);
        assert!(mesh.is_valid());

        // Closed mesh: every half-edge has a twin, no boundary vertices.
        for he in mesh.halfedge_ids() {
            assert!(mesh.opposite(he).is_some());
        }
        for v in mesh.vertex_ids() {
            assert!(!mesh.is_boundary_vertex(v), "vertex {:?} should not be on boundary", v);
        }

        // Outward winding: every face normal points away from the solid.
        let inner = Point3::new(0.5, 0.5, 0.25);
        for f in mesh.face_ids() {
            let n = mesh.face_normal(f);
            let c = mesh.face_centroid(f);
            assert!(n.dot(&(c - inner)) > 0.0, "face {:?} normal points inward", f);
        }
    }

    #[test]
    fn triangle_normal_matches_winding() {
        // A = (0,0,0), B = (1,0,0), C = (0,1,0) wound A -> B -> C gives a
        // +z normal.
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &[vec![0, 1, 2]]).unwrap();

        let n = mesh.face_normal(FaceId::new(0));
        assert!((n - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-12);
    }
}
