//! Core types for network representation.

use std::fmt;

/// A vertex (junction or terminal) of the network.
/// Vertex 0 is the root unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    /// The default root vertex (always index 0).
    pub const ROOT: VertexId = VertexId(0);
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Identifier of a segment's eigenfunction coefficient pair.
/// Ids are dense and start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EigenfunctionId(pub usize);

impl EigenfunctionId {
    /// Zero-based offset of this id inside a coefficient block.
    pub fn offset(&self) -> usize {
        debug_assert!(self.0 > 0, "Eigenfunction ids start at 1");
        self.0 - 1
    }
}

impl fmt::Display for EigenfunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed transmission segment, oriented away from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Proximal (parent-side) vertex
    pub source: VertexId,
    /// Distal (child-side) vertex
    pub target: VertexId,
    /// Coefficient pair carried by this segment
    pub id: EigenfunctionId,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})#{}", self.source.0, self.target.0, self.id)
    }
}
