//! Core mesh data structures.
//!
//! This module provides the half-edge boundary representation and the
//! queries built on top of it.
//!
//! # Overview
//!
//! The primary type is [`HalfEdgeMesh`]: an arena that owns all vertices,
//! directed half-edges, and faces, built once from a polygon soup and then
//! read-only. Every adjacency step (`next`, `prev`, `opposite`, face
//! membership) is O(1).
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers —
//! [`VertexId`], [`HalfEdgeId`], [`FaceId`] — generic over the underlying
//! integer ([`MeshIndex`]), so `u16`, `u32`, or `u64` can back the indices
//! depending on mesh size.
//!
//! # Construction
//!
//! Meshes are built from vertex positions plus per-face index lists:
//!
//! ```
//! use hedra::mesh::{HalfEdgeMesh, build_from_polygons};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![vec![0, 1, 2]];
//!
//! let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &faces).unwrap();
//! assert!(mesh.is_valid());
//! ```

mod builder;
mod cursor;
mod halfedge;
mod index;

pub use builder::{build_from_polygons, build_from_quads, build_from_triangles, to_polygon_soup};
pub use cursor::Cursor;
pub use halfedge::{
    Edge, Face, FaceHalfEdgeIter, HalfEdge, HalfEdgeMesh, Vertex, VertexHalfEdgeIter,
};
pub use index::{FaceId, HalfEdgeId, MeshIndex, VertexId};
