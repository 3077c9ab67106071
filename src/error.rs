//! Error types for hedra.
//!
//! Construction-time structural problems are reported as values of
//! [`MeshError`] before any traversal is possible; a mesh that fails to
//! build is never returned in a partially linked state. Geometric
//! degeneracies (e.g. a collinear face with no well-defined normal) are
//! *not* errors — they surface as sentinel values local to the query.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while building a mesh from a polygon soup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The input has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references a vertex index outside the vertex array.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face's position in the input.
        face: usize,
        /// The out-of-range vertex index.
        vertex: usize,
    },

    /// A face lists fewer than three vertices and cannot bound a polygon.
    #[error("face {face} has only {count} vertices (minimum 3)")]
    FaceTooSmall {
        /// The face's position in the input.
        face: usize,
        /// How many vertices the face listed.
        count: usize,
    },

    /// A face lists the same vertex more than once.
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face's position in the input.
        face: usize,
    },

    /// Two faces traverse the same directed edge, which means either
    /// inconsistent winding or more than two faces meeting at one edge.
    #[error("directed edge ({v0}, {v1}) is shared by multiple faces (non-manifold or inconsistent winding)")]
    NonManifoldEdge {
        /// Origin vertex index of the duplicated directed edge.
        v0: usize,
        /// Destination vertex index of the duplicated directed edge.
        v1: usize,
    },
}
