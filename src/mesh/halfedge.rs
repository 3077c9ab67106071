//! Half-edge mesh data structure.
//!
//! This module provides a half-edge (doubly-connected edge list)
//! representation for polygon meshes. Every face of at least three vertices
//! is bounded by a closed cycle of directed half-edges, which makes
//! adjacency queries O(1) and boundary walks O(degree).
//!
//! # Structure
//!
//! - Each undirected edge interior to the mesh is split into two
//!   **half-edges** pointing in opposite directions
//! - Each half-edge knows its **head** (destination vertex), **opposite**
//!   (twin half-edge, absent on the boundary), **next** and **prev** around
//!   its face, and the **face** it bounds
//! - Each vertex stores one representative outgoing half-edge
//! - Each face stores one half-edge on its boundary cycle
//!
//! # Boundary Handling
//!
//! No separate boundary half-edges are materialized: an edge traversed by
//! only one face simply leaves that half-edge's `opposite` unset. Absence
//! of a twin is a normal, expected state — callers navigate it through
//! [`HalfEdgeMesh::opposite`], which returns `Option`.

use nalgebra::{Point3, Vector3};

use super::index::{FaceId, HalfEdgeId, MeshIndex, VertexId};

/// A vertex in the half-edge mesh.
#[derive(Debug, Clone)]
pub struct Vertex<I: MeshIndex = u32> {
    /// The 3D position of this vertex. Fixed after construction.
    pub position: Point3<f64>,

    /// One outgoing half-edge from this vertex, assigned on first
    /// encounter during construction. Which of the outgoing half-edges
    /// ends up here is arbitrary; callers must not rely on a particular
    /// representative. Invalid for isolated vertices.
    pub halfedge: HalfEdgeId<I>,
}

impl<I: MeshIndex> Vertex<I> {
    /// Create a new vertex at the given position.
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            halfedge: HalfEdgeId::invalid(),
        }
    }

    /// Create a new vertex from coordinates.
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }
}

/// A directed half-edge, the atomic adjacency unit of the mesh.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdge<I: MeshIndex = u32> {
    /// The vertex this half-edge points at (its destination).
    pub head: VertexId<I>,

    /// The half-edge traversing the same undirected edge in the reverse
    /// direction. Invalid when this edge is on the mesh boundary.
    pub opposite: HalfEdgeId<I>,

    /// The following half-edge around the same face.
    pub next: HalfEdgeId<I>,

    /// The preceding half-edge around the same face. Derivable from
    /// `next`, cached for O(1) reverse traversal.
    pub prev: HalfEdgeId<I>,

    /// The face this half-edge bounds.
    pub face: FaceId<I>,
}

impl<I: MeshIndex> HalfEdge<I> {
    /// Create a new unlinked half-edge.
    pub fn new() -> Self {
        Self {
            head: VertexId::invalid(),
            opposite: HalfEdgeId::invalid(),
            next: HalfEdgeId::invalid(),
            prev: HalfEdgeId::invalid(),
            face: FaceId::invalid(),
        }
    }

    /// Whether this half-edge lies on the mesh boundary (has no twin).
    #[inline]
    pub fn is_boundary(&self) -> bool {
        !self.opposite.is_valid()
    }
}

impl<I: MeshIndex> Default for HalfEdge<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// A polygonal face, anchored by one of its boundary half-edges.
#[derive(Debug, Clone, Copy)]
pub struct Face<I: MeshIndex = u32> {
    /// One half-edge on the boundary cycle of this face. The full vertex
    /// list is reachable only by walking `next` from here.
    pub halfedge: HalfEdgeId<I>,
}

impl<I: MeshIndex> Face<I> {
    /// Create a new face anchored at the given half-edge.
    pub fn new(halfedge: HalfEdgeId<I>) -> Self {
        Self { halfedge }
    }
}

impl<I: MeshIndex> Default for Face<I> {
    fn default() -> Self {
        Self {
            halfedge: HalfEdgeId::invalid(),
        }
    }
}

/// An undirected edge: the pairing of two opposite half-edges.
///
/// A convenience view for callers that want undirected semantics (e.g.
/// drawing a wireframe); not required for topology correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<I: MeshIndex = u32> {
    /// The representative half-edge of this edge.
    pub he1: HalfEdgeId<I>,

    /// The opposite half-edge, or `None` for a boundary edge.
    pub he2: Option<HalfEdgeId<I>>,
}

impl<I: MeshIndex> Edge<I> {
    /// Whether this edge is traversed by only one face.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.he2.is_none()
    }
}

/// A half-edge mesh for polygon soups.
///
/// The mesh is the sole owner of its vertices, half-edges, and faces; all
/// cross-references between elements are arena indices that never outlive
/// it. Built once from input arrays, then treated as immutable by every
/// query.
#[derive(Debug, Clone)]
pub struct HalfEdgeMesh<I: MeshIndex = u32> {
    /// All vertices, in input order.
    pub(crate) vertices: Vec<Vertex<I>>,

    /// All half-edges, in creation order (face by face).
    pub(crate) halfedges: Vec<HalfEdge<I>>,

    /// All faces, in input order.
    pub(crate) faces: Vec<Face<I>>,
}

impl<I: MeshIndex> Default for HalfEdgeMesh<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MeshIndex> HalfEdgeMesh<I> {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            halfedges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity. `num_halfedges` should
    /// be the sum of face degrees.
    pub fn with_capacity(num_vertices: usize, num_faces: usize, num_halfedges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_vertices),
            halfedges: Vec::with_capacity(num_halfedges),
            faces: Vec::with_capacity(num_faces),
        }
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of directed half-edges. Equals the sum of face
    /// degrees.
    #[inline]
    pub fn num_halfedges(&self) -> usize {
        self.halfedges.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get a vertex by ID.
    #[inline]
    pub fn vertex(&self, id: VertexId<I>) -> &Vertex<I> {
        &self.vertices[id.index()]
    }

    /// Get a mutable vertex by ID.
    #[inline]
    pub(crate) fn vertex_mut(&mut self, id: VertexId<I>) -> &mut Vertex<I> {
        &mut self.vertices[id.index()]
    }

    /// Get a half-edge by ID.
    #[inline]
    pub fn halfedge(&self, id: HalfEdgeId<I>) -> &HalfEdge<I> {
        &self.halfedges[id.index()]
    }

    /// Get a mutable half-edge by ID.
    #[inline]
    pub(crate) fn halfedge_mut(&mut self, id: HalfEdgeId<I>) -> &mut HalfEdge<I> {
        &mut self.halfedges[id.index()]
    }

    /// Get a face by ID.
    #[inline]
    pub fn face(&self, id: FaceId<I>) -> &Face<I> {
        &self.faces[id.index()]
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId<I>) -> &Point3<f64> {
        &self.vertex(v).position
    }

    // ==================== Topology Queries ====================

    /// Get the opposite (twin) half-edge, or `None` on the boundary.
    #[inline]
    pub fn opposite(&self, he: HalfEdgeId<I>) -> Option<HalfEdgeId<I>> {
        let o = self.halfedge(he).opposite;
        o.is_valid().then_some(o)
    }

    /// Get the next half-edge around the face.
    #[inline]
    pub fn next(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.halfedge(he).next
    }

    /// Get the previous half-edge around the face.
    #[inline]
    pub fn prev(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.halfedge(he).prev
    }

    /// Get the head (destination) vertex of a half-edge.
    #[inline]
    pub fn head(&self, he: HalfEdgeId<I>) -> VertexId<I> {
        self.halfedge(he).head
    }

    /// Get the tail (origin) vertex of a half-edge.
    ///
    /// The tail is the head of the predecessor, which is always linked, so
    /// this works on boundary half-edges too.
    #[inline]
    pub fn tail(&self, he: HalfEdgeId<I>) -> VertexId<I> {
        self.head(self.prev(he))
    }

    /// Get the face a half-edge bounds.
    #[inline]
    pub fn face_of(&self, he: HalfEdgeId<I>) -> FaceId<I> {
        self.halfedge(he).face
    }

    /// Check if a half-edge is on the boundary (has no twin).
    #[inline]
    pub fn is_boundary_halfedge(&self, he: HalfEdgeId<I>) -> bool {
        self.halfedge(he).is_boundary()
    }

    /// Check if a vertex is on the boundary.
    ///
    /// Isolated vertices (no incident face) count as boundary.
    pub fn is_boundary_vertex(&self, v: VertexId<I>) -> bool {
        let start = self.vertex(v).halfedge;
        if !start.is_valid() {
            return true;
        }

        // Walk the outgoing half-edges around the vertex; if the orbit
        // cannot close because a twin is missing, the vertex is on the
        // boundary.
        let mut he = start;
        loop {
            match self.opposite(he) {
                None => return true,
                Some(o) => he = self.next(o),
            }
            if he == start {
                return false;
            }
        }
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        (0..self.vertices.len()).map(|i| VertexId::new(i))
    }

    /// Iterate over all vertices with their IDs.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId<I>, &Vertex<I>)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i), v))
    }

    /// Iterate over all half-edge IDs.
    pub fn halfedge_ids(&self) -> impl Iterator<Item = HalfEdgeId<I>> + '_ {
        (0..self.halfedges.len()).map(|i| HalfEdgeId::new(i))
    }

    /// Iterate over all half-edges with their IDs.
    pub fn halfedges(&self) -> impl Iterator<Item = (HalfEdgeId<I>, &HalfEdge<I>)> + '_ {
        self.halfedges
            .iter()
            .enumerate()
            .map(|(i, he)| (HalfEdgeId::new(i), he))
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId<I>> + '_ {
        (0..self.faces.len()).map(|i| FaceId::new(i))
    }

    /// Iterate over all faces with their IDs.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId<I>, &Face<I>)> + '_ {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, f)| (FaceId::new(i), f))
    }

    /// Iterate over the half-edges of a face's boundary cycle, starting at
    /// its anchor.
    pub fn face_halfedges(&self, f: FaceId<I>) -> FaceHalfEdgeIter<'_, I> {
        FaceHalfEdgeIter::new(self, f)
    }

    /// Iterate over the vertices of a face, in winding order.
    pub fn face_vertices(&self, f: FaceId<I>) -> impl Iterator<Item = VertexId<I>> + '_ {
        self.face_halfedges(f).map(|he| self.head(he))
    }

    /// The number of vertices (and edges) on a face's boundary.
    pub fn face_degree(&self, f: FaceId<I>) -> usize {
        self.face_halfedges(f).count()
    }

    /// Iterate over outgoing half-edges around a vertex.
    ///
    /// On boundary vertices the orbit covers the outgoing half-edges
    /// reachable through existing twins in both rotational directions from
    /// the representative; an edge wound only *toward* the vertex by a
    /// boundary face is not visited.
    pub fn vertex_halfedges(&self, v: VertexId<I>) -> VertexHalfEdgeIter<'_, I> {
        VertexHalfEdgeIter::new(self, v)
    }

    /// Iterate over vertices adjacent to a vertex.
    pub fn vertex_neighbors(&self, v: VertexId<I>) -> impl Iterator<Item = VertexId<I>> + '_ {
        self.vertex_halfedges(v).map(|he| self.head(he))
    }

    /// Iterate over faces incident to a vertex.
    pub fn vertex_faces(&self, v: VertexId<I>) -> impl Iterator<Item = FaceId<I>> + '_ {
        self.vertex_halfedges(v).map(|he| self.face_of(he))
    }

    // ==================== Geometry ====================

    /// Compute the unit normal of a face from its first three boundary
    /// vertices, oriented by winding order.
    ///
    /// Returns the unnormalized zero vector when those vertices are
    /// collinear or coincident; callers that need a direction must check
    /// for zero length. Faces with more than three vertices are not
    /// validated for planarity.
    pub fn face_normal(&self, f: FaceId<I>) -> Vector3<f64> {
        let he = self.face(f).halfedge;
        let p1 = self.position(self.head(he));
        let p2 = self.position(self.head(self.next(he)));
        let p3 = self.position(self.head(self.next(self.next(he))));

        let n = (p2 - p1).cross(&(p3 - p1));
        let len = n.norm();
        if len == 0.0 {
            n
        } else {
            n / len
        }
    }

    /// Compute the centroid of a face: the arithmetic mean of its boundary
    /// vertex positions.
    pub fn face_centroid(&self, f: FaceId<I>) -> Point3<f64> {
        let mut sum = Vector3::zeros();
        let mut count = 0usize;
        for he in self.face_halfedges(f) {
            sum += self.position(self.head(he)).coords;
            count += 1;
        }
        assert!(count > 0, "face {:?} has an empty boundary cycle", f);
        Point3::from(sum / count as f64)
    }

    /// Synthesize an apex point for a face: the centroid pushed along the
    /// negated face normal by the average boundary edge length.
    ///
    /// For a consistently wound closed mesh this lands inside the solid,
    /// making the point usable as a cap/inset vertex for subdivision- or
    /// extrusion-style operations.
    ///
    /// # Panics
    ///
    /// Panics if the face's boundary cycle is empty, which cannot happen
    /// for a mesh produced by the builder.
    pub fn face_apex(&self, f: FaceId<I>) -> Point3<f64> {
        let mut sum = Vector3::zeros();
        let mut total_length = 0.0;
        let mut edge_count = 0usize;
        for he in self.face_halfedges(f) {
            sum += self.position(self.head(he)).coords;
            total_length += self.edge_length(he);
            edge_count += 1;
        }
        assert!(edge_count > 0, "face {:?} has no boundary edges", f);

        let center = sum / edge_count as f64;
        let avg_length = total_length / edge_count as f64;
        let normal = self.face_normal(f);
        Point3::from(center - normal * avg_length)
    }

    /// Compute the length of a half-edge (distance from tail to head).
    pub fn edge_length(&self, he: HalfEdgeId<I>) -> f64 {
        let p0 = self.position(self.tail(he));
        let p1 = self.position(self.head(he));
        (p1 - p0).norm()
    }

    /// Compute the edge vector, from tail to head.
    pub fn edge_vector(&self, he: HalfEdgeId<I>) -> Vector3<f64> {
        let p0 = self.position(self.tail(he));
        let p1 = self.position(self.head(he));
        p1 - p0
    }

    /// Compute the midpoint of an edge.
    pub fn edge_midpoint(&self, he: HalfEdgeId<I>) -> Point3<f64> {
        let p0 = self.position(self.tail(he));
        let p1 = self.position(self.head(he));
        Point3::from((p0.coords + p1.coords) * 0.5)
    }

    /// The two endpoint positions of a half-edge, tail first.
    ///
    /// This is the pair a highlighting/drawing layer re-queries after each
    /// navigation step.
    pub fn halfedge_endpoints(&self, he: HalfEdgeId<I>) -> [Point3<f64>; 2] {
        [
            *self.position(self.tail(he)),
            *self.position(self.head(he)),
        ]
    }

    /// Compute the axis-aligned bounding box of the mesh, or `None` if it
    /// has no vertices.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut min = self.vertices[0].position;
        let mut max = self.vertices[0].position;

        for v in &self.vertices {
            for i in 0..3 {
                min[i] = min[i].min(v.position[i]);
                max[i] = max[i].max(v.position[i]);
            }
        }

        Some((min, max))
    }

    // ==================== Enumeration ====================

    /// Enumerate the undirected edges of the mesh, deduplicated.
    ///
    /// Each interior edge appears once, represented by the lower-indexed
    /// of its two half-edges; boundary edges appear with `he2` unset. The
    /// result is sorted by canonical (min, max) vertex-index pair, so the
    /// output is deterministic across runs.
    pub fn edges(&self) -> Vec<Edge<I>> {
        let mut edges: Vec<Edge<I>> = self
            .halfedge_ids()
            .filter_map(|he| match self.opposite(he) {
                Some(o) if o.index() < he.index() => None,
                other => Some(Edge { he1: he, he2: other }),
            })
            .collect();

        edges.sort_by_key(|e| self.edge_key(e.he1));
        edges
    }

    /// Enumerate undirected edges as canonical vertex-index pairs, the
    /// form a wireframe renderer consumes. Sorted, deduplicated.
    pub fn edge_vertex_pairs(&self) -> Vec<[VertexId<I>; 2]> {
        self.edges()
            .iter()
            .map(|e| {
                let (a, b) = self.edge_key(e.he1);
                [VertexId::new(a), VertexId::new(b)]
            })
            .collect()
    }

    /// All vertex positions, index-aligned with the vertex arena (i.e. in
    /// input order, no reordering).
    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Canonical (min, max) endpoint index pair of a half-edge.
    fn edge_key(&self, he: HalfEdgeId<I>) -> (usize, usize) {
        let t = self.tail(he).index();
        let h = self.head(he).index();
        (t.min(h), t.max(h))
    }

    // ==================== Validation ====================

    /// Check that every structural invariant holds:
    ///
    /// - vertex representatives originate at their vertex
    /// - `next`/`prev` are mutually inverse
    /// - `opposite` is an involution connecting reverse-oriented twins
    /// - every face's `next` chain is a single closed cycle through
    ///   half-edges that all reference that face
    /// - the half-edge count equals the sum of face degrees
    pub fn is_valid(&self) -> bool {
        for (vid, v) in self.vertices() {
            if v.halfedge.is_valid() && self.tail(v.halfedge) != vid {
                return false;
            }
        }

        for (heid, he) in self.halfedges() {
            if !he.next.is_valid() || !he.prev.is_valid() || !he.face.is_valid() {
                return false;
            }
            if self.halfedge(he.next).prev != heid {
                return false;
            }
            if self.halfedge(he.prev).next != heid {
                return false;
            }
            if he.opposite.is_valid() {
                let twin = self.halfedge(he.opposite);
                if twin.opposite != heid {
                    return false;
                }
                // Twins traverse the same undirected edge in reverse.
                if twin.head != self.tail(heid) || he.head != self.tail(he.opposite) {
                    return false;
                }
            }
        }

        let mut total_degree = 0usize;
        for (fid, f) in self.faces() {
            if !f.halfedge.is_valid() {
                return false;
            }
            let mut he = f.halfedge;
            let mut steps = 0usize;
            loop {
                if self.face_of(he) != fid {
                    return false;
                }
                steps += 1;
                // A sub-cycle that skips the anchor would loop forever.
                if steps > self.halfedges.len() {
                    return false;
                }
                he = self.next(he);
                if he == f.halfedge {
                    break;
                }
            }
            if steps < 3 {
                return false;
            }
            total_degree += steps;
        }

        total_degree == self.halfedges.len()
    }
}

/// Iterator over the half-edges of a face's boundary cycle.
pub struct FaceHalfEdgeIter<'a, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    done: bool,
}

impl<'a, I: MeshIndex> FaceHalfEdgeIter<'a, I> {
    fn new(mesh: &'a HalfEdgeMesh<I>, f: FaceId<I>) -> Self {
        let start = mesh.face(f).halfedge;
        Self {
            mesh,
            start,
            current: start,
            done: !start.is_valid(),
        }
    }
}

impl<I: MeshIndex> Iterator for FaceHalfEdgeIter<'_, I> {
    type Item = HalfEdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;
        self.current = self.mesh.next(self.current);

        if self.current == self.start {
            self.done = true;
        }

        Some(result)
    }
}

/// Iterator over the outgoing half-edges around a vertex.
///
/// Walks one rotational direction from the representative half-edge until
/// the orbit closes or hits the boundary, then resumes from the
/// representative in the other direction to pick up the remaining wedges.
pub struct VertexHalfEdgeIter<'a, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    phase: OrbitPhase,
}

enum OrbitPhase {
    Forward,
    Backward,
    Done,
}

impl<'a, I: MeshIndex> VertexHalfEdgeIter<'a, I> {
    fn new(mesh: &'a HalfEdgeMesh<I>, v: VertexId<I>) -> Self {
        let start = mesh.vertex(v).halfedge;
        Self {
            mesh,
            start,
            current: start,
            phase: if start.is_valid() {
                OrbitPhase::Forward
            } else {
                OrbitPhase::Done
            },
        }
    }

    /// Step to the next wedge clockwise: into the twin's face.
    fn step_forward(&self) -> Option<HalfEdgeId<I>> {
        let o = self.mesh.opposite(self.current)?;
        let he = self.mesh.next(o);
        (he != self.start).then_some(he)
    }

    /// Step to the next wedge counter-clockwise: out through the
    /// predecessor's twin.
    fn step_backward(&self, from: HalfEdgeId<I>) -> Option<HalfEdgeId<I>> {
        self.mesh.opposite(self.mesh.prev(from))
    }
}

impl<I: MeshIndex> Iterator for VertexHalfEdgeIter<'_, I> {
    type Item = HalfEdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            OrbitPhase::Done => None,
            OrbitPhase::Forward => {
                let result = self.current;
                match self.step_forward() {
                    Some(he) => self.current = he,
                    // Either the orbit closed (interior vertex) or we hit
                    // the boundary; in the latter case sweep the other way
                    // from the representative.
                    None => {
                        if self.mesh.opposite(self.current).is_none() {
                            match self.step_backward(self.start) {
                                Some(he) => {
                                    self.current = he;
                                    self.phase = OrbitPhase::Backward;
                                }
                                None => self.phase = OrbitPhase::Done,
                            }
                        } else {
                            self.phase = OrbitPhase::Done;
                        }
                    }
                }
                Some(result)
            }
            OrbitPhase::Backward => {
                let result = self.current;
                match self.step_backward(self.current) {
                    Some(he) => self.current = he,
                    None => self.phase = OrbitPhase::Done,
                }
                Some(result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_from_polygons;

    const EPS: f64 = 1e-12;

    fn triangle() -> HalfEdgeMesh<u32> {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        build_from_polygons(&vertices, &[vec![0, 1, 2]]).unwrap()
    }

    fn unit_square() -> HalfEdgeMesh<u32> {
        let vertices = vec![
            Point3::new(-0.5, -0.5, 0.0),
            Point3::new(0.5, -0.5, 0.0),
            Point3::new(0.5, 0.5, 0.0),
            Point3::new(-0.5, 0.5, 0.0),
        ];
        build_from_polygons(&vertices, &[vec![0, 1, 2, 3]]).unwrap()
    }

    #[test]
    fn vertex_creation() {
        let v = Vertex::<u32>::from_coords(1.0, 2.0, 3.0);
        assert_eq!(v.position, Point3::new(1.0, 2.0, 3.0));
        assert!(!v.halfedge.is_valid());
    }

    #[test]
    fn empty_mesh() {
        let mesh = HalfEdgeMesh::<u32>::new();
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.num_halfedges(), 0);
        assert_eq!(mesh.num_faces(), 0);
        assert!(mesh.is_valid());
        assert!(mesh.bounding_box().is_none());
    }

    #[test]
    fn triangle_normal_is_plus_z() {
        let mesh = triangle();
        let n = mesh.face_normal(FaceId::new(0));
        assert!((n - Vector3::new(0.0, 0.0, 1.0)).norm() < EPS);
    }

    #[test]
    fn degenerate_normal_is_zero_vector() {
        // Three collinear points: cross product has zero length.
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let mesh: HalfEdgeMesh<u32> = build_from_polygons(&vertices, &[vec![0, 1, 2]]).unwrap();
        let n = mesh.face_normal(FaceId::new(0));
        assert_eq!(n, Vector3::zeros());
    }

    #[test]
    fn face_centroid_of_square() {
        let mesh = unit_square();
        let c = mesh.face_centroid(FaceId::new(0));
        assert!(c.x.abs() < EPS);
        assert!(c.y.abs() < EPS);
        assert!(c.z.abs() < EPS);
    }

    #[test]
    fn face_apex_of_unit_square() {
        // CCW-wound unit square in the z=0 plane: normal (0,0,1), average
        // edge length 1, so the apex sits at the centroid minus one unit
        // of z.
        let mesh = unit_square();
        let apex = mesh.face_apex(FaceId::new(0));
        assert!(apex.x.abs() < EPS);
        assert!(apex.y.abs() < EPS);
        assert!((apex.z + 1.0).abs() < EPS);
    }

    #[test]
    fn edge_length_on_boundary() {
        // No twin needed: tail comes from the prev link.
        let mesh = triangle();
        for he in mesh.halfedge_ids() {
            assert!(mesh.is_boundary_halfedge(he));
            assert!(mesh.edge_length(he) > 0.0);
        }
        // Hypotenuse of the right triangle.
        let lengths: Vec<f64> = mesh.halfedge_ids().map(|he| mesh.edge_length(he)).collect();
        let max = lengths.iter().cloned().fold(0.0, f64::max);
        assert!((max - 2.0_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn halfedge_endpoints_match_edge_vector() {
        let mesh = unit_square();
        for he in mesh.halfedge_ids() {
            let [tail, head] = mesh.halfedge_endpoints(he);
            assert!((head - tail - mesh.edge_vector(he)).norm() < EPS);
            assert!((mesh.edge_midpoint(he).coords
                - (tail.coords + head.coords) * 0.5)
                .norm()
                < EPS);
        }
    }

    #[test]
    fn face_cycle_has_face_degree_steps() {
        let mesh = unit_square();
        let f = FaceId::new(0);
        assert_eq!(mesh.face_degree(f), 4);

        let anchor = mesh.face(f).halfedge;
        let mut he = anchor;
        for _ in 0..4 {
            assert_eq!(mesh.face_of(he), f);
            he = mesh.next(he);
        }
        assert_eq!(he, anchor);
    }

    #[test]
    fn face_vertices_in_winding_order() {
        let mesh = unit_square();
        let verts: Vec<usize> = mesh
            .face_vertices(FaceId::new(0))
            .map(|v| v.index())
            .collect();
        // Heads of the cycle starting at the anchor (0 -> 1).
        assert_eq!(verts, vec![1, 2, 3, 0]);
    }

    #[test]
    fn positions_pass_through() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mesh: HalfEdgeMesh<u32> = build_from_polygons(&vertices, &[vec![0, 1, 2]]).unwrap();
        assert_eq!(mesh.positions(), vertices);
    }

    #[test]
    fn bounding_box_of_square() {
        let mesh = unit_square();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, Point3::new(-0.5, -0.5, 0.0));
        assert_eq!(max, Point3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn vertex_orbit_covers_boundary_fan() {
        // Fan of three triangles around vertex 0, which sits on the
        // boundary. All three outgoing half-edges (and all three incident
        // faces) are reachable by sweeping both directions from the
        // representative; the edge wound only toward vertex 0 (4 -> 0)
        // contributes no outgoing half-edge, so 4 is not enumerated as a
        // neighbor.
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
        ];
        let faces = vec![vec![0, 1, 2], vec![0, 2, 3], vec![0, 3, 4]];
        let mesh: HalfEdgeMesh<u32> = build_from_polygons(&vertices, &faces).unwrap();

        let mut neighbors: Vec<usize> = mesh
            .vertex_neighbors(VertexId::new(0))
            .map(|v| v.index())
            .collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![1, 2, 3]);

        let mut faces_around: Vec<usize> = mesh
            .vertex_faces(VertexId::new(0))
            .map(|f| f.index())
            .collect();
        faces_around.sort_unstable();
        assert_eq!(faces_around, vec![0, 1, 2]);
    }

    #[test]
    fn vertex_orbit_closes_on_interior_vertex() {
        // Quad split into four triangles around a center vertex 4; the
        // center is interior, so its orbit closes and visits every
        // incident wedge exactly once.
        let vertices = vec![
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ];
        let faces = vec![
            vec![0, 1, 4],
            vec![1, 2, 4],
            vec![2, 3, 4],
            vec![3, 0, 4],
        ];
        let mesh: HalfEdgeMesh<u32> = build_from_polygons(&vertices, &faces).unwrap();

        assert!(!mesh.is_boundary_vertex(VertexId::new(4)));

        let mut neighbors: Vec<usize> = mesh
            .vertex_neighbors(VertexId::new(4))
            .map(|v| v.index())
            .collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![0, 1, 2, 3]);
        assert_eq!(mesh.vertex_faces(VertexId::new(4)).count(), 4);
    }

    #[test]
    fn boundary_classification() {
        let mesh = triangle();
        for v in mesh.vertex_ids() {
            assert!(mesh.is_boundary_vertex(v));
        }
    }
}
