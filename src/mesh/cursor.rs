//! Edge selection and navigation.
//!
//! An interactive layer highlights one half-edge at a time and steps it
//! around the mesh. Rather than a process-global "current selection", the
//! active half-edge is an explicit [`Cursor`] value the caller owns and
//! threads through navigation calls, keeping the core reentrant and
//! testable without a live viewer.

use rand::Rng;

use nalgebra::Point3;

use super::halfedge::{Edge, HalfEdgeMesh};
use super::index::{HalfEdgeId, MeshIndex};

/// A lightweight handle to the currently selected half-edge.
///
/// Copyable; navigation methods return a new cursor instead of mutating
/// shared state. The cursor is only meaningful for the mesh it was created
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<I: MeshIndex = u32> {
    halfedge: HalfEdgeId<I>,
}

impl<I: MeshIndex> Cursor<I> {
    /// Create a cursor at the given half-edge.
    pub fn new(halfedge: HalfEdgeId<I>) -> Self {
        Self { halfedge }
    }

    /// The half-edge this cursor points at.
    #[inline]
    pub fn halfedge(&self) -> HalfEdgeId<I> {
        self.halfedge
    }

    /// Step forward around the current face.
    pub fn advance(self, mesh: &HalfEdgeMesh<I>) -> Self {
        Self::new(mesh.next(self.halfedge))
    }

    /// Step backward around the current face.
    pub fn retreat(self, mesh: &HalfEdgeMesh<I>) -> Self {
        Self::new(mesh.prev(self.halfedge))
    }

    /// Jump to the opposite half-edge, or `None` if the cursor sits on a
    /// boundary edge with no twin. The caller keeps the old cursor in that
    /// case.
    pub fn flip(self, mesh: &HalfEdgeMesh<I>) -> Option<Self> {
        mesh.opposite(self.halfedge).map(Self::new)
    }

    /// The endpoint positions of the selected half-edge, tail first — what
    /// a highlighting layer re-queries after each step.
    pub fn endpoints(&self, mesh: &HalfEdgeMesh<I>) -> [Point3<f64>; 2] {
        mesh.halfedge_endpoints(self.halfedge)
    }
}

impl<I: MeshIndex> HalfEdgeMesh<I> {
    /// Select a half-edge uniformly at random from all *directed*
    /// half-edges, or `None` for an empty mesh.
    ///
    /// Note the sampling universe: an interior undirected edge is backed
    /// by two half-edges and a boundary edge by one, so as undirected
    /// edges, interior ones are twice as likely. Use [`random_edge`] for
    /// uniform undirected selection.
    ///
    /// [`random_edge`]: HalfEdgeMesh::random_edge
    pub fn random_halfedge<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<HalfEdgeId<I>> {
        if self.num_halfedges() == 0 {
            return None;
        }
        Some(HalfEdgeId::new(rng.random_range(0..self.num_halfedges())))
    }

    /// Select an undirected edge uniformly at random, or `None` for an
    /// empty mesh.
    pub fn random_edge<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Edge<I>> {
        let edges = self.edges();
        if edges.is_empty() {
            return None;
        }
        Some(edges[rng.random_range(0..edges.len())])
    }
}
