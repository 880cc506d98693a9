//! Network shape validation.

use crate::error::{QGraphError, Result};

use super::{Network, VertexId};

/// Validate that a network is a tree hanging off `root`.
///
/// Checks:
/// - The root exists and has no incoming segment
/// - Every other vertex has exactly one incoming segment
/// - Every vertex is reachable from the root
///
/// An empty network is trivially valid.
pub fn validate_tree(network: &Network, root: VertexId) -> Result<()> {
    if network.is_empty() {
        return Ok(());
    }

    if root.0 >= network.num_vertices() {
        return Err(QGraphError::invalid_parameter(format!(
            "root {} is out of range for a network of {} vertices",
            root,
            network.num_vertices()
        )));
    }

    for vertex in network.vertices() {
        let incoming = network.in_edges(vertex).len();
        if vertex == root {
            if incoming != 0 {
                return Err(QGraphError::structural(
                    vertex,
                    format!("root has {} incoming segments", incoming),
                ));
            }
        } else if incoming != 1 {
            return Err(QGraphError::structural(
                vertex,
                format!("expected exactly one incoming segment, found {}", incoming),
            ));
        }
    }

    // In-degree checks alone admit detached cycles
    let mut visited = vec![false; network.num_vertices()];
    let mut stack = vec![root];
    visited[root.0] = true;
    while let Some(vertex) = stack.pop() {
        for &id in network.out_edges(vertex) {
            if let Some(edge) = network.edge(id) {
                if !visited[edge.target.0] {
                    visited[edge.target.0] = true;
                    stack.push(edge.target);
                }
            }
        }
    }

    if let Some(idx) = visited.iter().position(|seen| !seen) {
        return Err(QGraphError::structural(
            VertexId(idx),
            format!("not reachable from root {}", root),
        ));
    }

    Ok(())
}
