//! Network graph structure.

use super::types::{EigenfunctionId, Edge, VertexId};

/// A nerve-fiber network ready for equation assembly.
///
/// Vertices are bare indices `0..num_vertices`; all annotation lives on the
/// edges. The id-indexed edge table doubles as the `id -> (source, target)`
/// lookup used during assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Network {
    /// Number of vertices (matrix rows)
    num_vertices: usize,

    /// Edge table, `edges[id - 1]` holds the edge with that id
    edges: Vec<Edge>,

    /// Outgoing edge ids per vertex, in discovery order
    outgoing: Vec<Vec<EigenfunctionId>>,

    /// Incoming edge ids per vertex, in discovery order
    incoming: Vec<Vec<EigenfunctionId>>,
}

impl Network {
    /// Create a network with `num_vertices` vertices and no edges.
    pub fn with_vertices(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            edges: Vec::new(),
            outgoing: vec![Vec::new(); num_vertices],
            incoming: vec![Vec::new(); num_vertices],
        }
    }

    /// Add the segment `source -> target` and return its freshly assigned id.
    ///
    /// Ids are handed out sequentially starting at 1.
    pub(crate) fn add_edge(&mut self, source: VertexId, target: VertexId) -> EigenfunctionId {
        debug_assert!(source.0 < self.num_vertices && target.0 < self.num_vertices);
        let id = EigenfunctionId(self.edges.len() + 1);
        self.edges.push(Edge { source, target, id });
        self.outgoing[source.0].push(id);
        self.incoming[target.0].push(id);
        id
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of edges, which is also the number of coefficient pairs.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Check if the network has no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    /// Iterate over all vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.num_vertices).map(VertexId)
    }

    /// All edges, ordered by id.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: EigenfunctionId) -> Option<&Edge> {
        id.0.checked_sub(1).and_then(|idx| self.edges.get(idx))
    }

    /// Ids of the segments leaving `vertex`.
    pub fn out_edges(&self, vertex: VertexId) -> &[EigenfunctionId] {
        self.outgoing.get(vertex.0).map_or(&[], Vec::as_slice)
    }

    /// Ids of the segments entering `vertex`.
    pub fn in_edges(&self, vertex: VertexId) -> &[EigenfunctionId] {
        self.incoming.get(vertex.0).map_or(&[], Vec::as_slice)
    }

    /// Check if `vertex` is a fiber terminal (no outgoing segments).
    pub fn is_leaf(&self, vertex: VertexId) -> bool {
        self.out_edges(vertex).is_empty()
    }
}
