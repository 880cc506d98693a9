//! Boundary-condition assembly over a network.

use std::fmt;

use tracing::{debug, info};

use crate::error::Result;
use crate::network::{validate_tree, EigenfunctionId, Network, VertexId};

use super::coefficients::{AssemblyConfig, CableModel, CoefficientModel};
use super::matrix_set::MatrixSet;

/// The condition encoded by one row of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// `A_segment = 0` for a segment leaving the root.
    Root { segment: EigenfunctionId },
    /// Field continuity between a parent segment and one child at a junction.
    Continuity {
        vertex: VertexId,
        parent: EigenfunctionId,
        child: EigenfunctionId,
    },
    /// Flux conservation between a parent segment and all children at a junction.
    Flux {
        vertex: VertexId,
        parent: EigenfunctionId,
    },
    /// No-flux terminal condition at a fiber end.
    Leaf {
        vertex: VertexId,
        segment: EigenfunctionId,
    },
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Root { segment } => write!(f, "root: A{} = 0", segment),
            Condition::Continuity { vertex, parent, child } => {
                write!(f, "continuity at {}: f{}(L{}) = f{}(0)", vertex, parent, parent, child)
            }
            Condition::Flux { vertex, parent } => {
                write!(f, "flux at {}: into segment {}", vertex, parent)
            }
            Condition::Leaf { vertex, segment } => {
                write!(f, "leaf at {}: f{}'(L{}) = 0", vertex, segment, segment)
            }
        }
    }
}

/// The assembled `2E x 2E` system with the condition behind each row.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationSystem {
    /// Combined matrix: columns `0..E` hold `A_1..A_E`, `E..2E` hold `B_1..B_E`
    pub matrix: MatrixSet,
    /// Condition label of each row, `None` for rows no condition claimed
    pub conditions: Vec<Option<Condition>>,
}

impl EquationSystem {
    /// Number of unknown coefficient pairs.
    pub fn num_segments(&self) -> usize {
        self.matrix.cols() / 2
    }

    /// Check if every row carries a condition.
    pub fn is_complete(&self) -> bool {
        self.conditions.iter().all(Option::is_some)
    }
}

/// Coefficient blocks of one row half.
///
/// Each half is split into the `A` columns and the `B` columns; both blocks
/// share row indices.
struct RowHalf {
    a: MatrixSet,
    b: MatrixSet,
    conditions: Vec<Option<Condition>>,
}

impl RowHalf {
    fn new(size: usize) -> Self {
        Self {
            a: MatrixSet::square(size),
            b: MatrixSet::square(size),
            conditions: vec![None; size],
        }
    }
}

/// Row blocks for the whole system.
///
/// Every segment owns two rows: its proximal row (the condition at its
/// source vertex) and its distal row (the condition at its target vertex).
struct Blocks {
    proximal: RowHalf,
    distal: RowHalf,
}

impl Blocks {
    fn new(size: usize) -> Self {
        Self {
            proximal: RowHalf::new(size),
            distal: RowHalf::new(size),
        }
    }

    /// Combine into the `2E x 2E` system: `[A | B]` columns, proximal rows first.
    fn combine(self) -> Result<EquationSystem> {
        let top = MatrixSet::hstack(&[&self.proximal.a, &self.proximal.b])?;
        let bottom = MatrixSet::hstack(&[&self.distal.a, &self.distal.b])?;
        let matrix = MatrixSet::vstack(&[&top, &bottom])?;

        let mut conditions = self.proximal.conditions;
        conditions.extend(self.distal.conditions);

        Ok(EquationSystem { matrix, conditions })
    }
}

/// Equation assembler for a nerve-fiber network.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    config: AssemblyConfig,
}

impl Assembler {
    /// Create an assembler with the given configuration.
    pub fn new(config: AssemblyConfig) -> Self {
        Self { config }
    }

    /// Assemble the combined system matrix.
    pub fn assemble(&self, network: &Network) -> Result<MatrixSet> {
        self.assemble_system(network).map(|system| system.matrix)
    }

    /// Assemble the combined system using the default cable-equation model.
    pub fn assemble_system(&self, network: &Network) -> Result<EquationSystem> {
        self.assemble_with(network, &CableModel::new(&self.config))
    }

    /// Assemble the combined system with coefficients from `model`.
    ///
    /// Fails without producing any matrix if the configuration is invalid or
    /// the network is not a tree hanging off the configured root.
    pub fn assemble_with<M: CoefficientModel>(
        &self,
        network: &Network,
        model: &M,
    ) -> Result<EquationSystem> {
        self.config.validate()?;
        validate_tree(network, self.config.root)?;

        let size = network.num_edges();
        let mut blocks = Blocks::new(size);

        for vertex in network.vertices() {
            let incoming = network.in_edges(vertex);
            let outgoing = network.out_edges(vertex);
            debug!(
                %vertex,
                incoming = incoming.len(),
                outgoing = outgoing.len(),
                "Visiting vertex"
            );

            if vertex == self.config.root {
                for &segment in outgoing {
                    stamp_root(&mut blocks, model, segment);
                }
                continue;
            }

            // validate_tree guarantees exactly one parent here
            let parent = incoming[0];
            if outgoing.is_empty() {
                stamp_leaf(&mut blocks, model, vertex, parent);
            } else {
                stamp_junction(&mut blocks, model, vertex, parent, outgoing);
            }
        }

        let system = blocks.combine()?;
        info!(
            vertices = network.num_vertices(),
            segments = size,
            rows = system.matrix.rows(),
            "Assembled boundary-condition system"
        );
        Ok(system)
    }
}

/// Stamp `A_segment = 0` into the segment's proximal row.
fn stamp_root<M: CoefficientModel>(blocks: &mut Blocks, model: &M, segment: EigenfunctionId) {
    let row = segment.offset();
    let half = &mut blocks.proximal;
    half.a.set(row, segment.offset(), model.root(segment));
    half.conditions[row] = Some(Condition::Root { segment });
}

/// Stamp the no-flux condition into the segment's distal row.
fn stamp_leaf<M: CoefficientModel>(
    blocks: &mut Blocks,
    model: &M,
    vertex: VertexId,
    segment: EigenfunctionId,
) {
    let row = segment.offset();
    let col = segment.offset();
    let (a, b) = model.leaf(segment);
    let half = &mut blocks.distal;
    half.a.set(row, col, a);
    half.b.set(row, col, b);
    half.conditions[row] = Some(Condition::Leaf { vertex, segment });
}

/// Stamp continuity into each child's proximal row and flux conservation
/// into the parent's distal row.
fn stamp_junction<M: CoefficientModel>(
    blocks: &mut Blocks,
    model: &M,
    vertex: VertexId,
    parent: EigenfunctionId,
    children: &[EigenfunctionId],
) {
    let p = parent.offset();

    // f_p(L_p) - f_c(0) = 0
    let (cos_p, sin_p) = model.continuity_parent(parent);
    for &child in children {
        let row = child.offset();
        let half = &mut blocks.proximal;
        half.a.set(row, p, cos_p.clone());
        half.b.set(row, p, sin_p.clone());
        half.a.set(row, child.offset(), model.continuity_child(child));
        half.conditions[row] = Some(Condition::Continuity {
            vertex,
            parent,
            child,
        });
    }

    // α f_p'(L_p) - β Σ f_c'(0) = 0
    let (a_p, b_p) = model.flux_parent(parent);
    let half = &mut blocks.distal;
    half.a.set(p, p, a_p);
    half.b.set(p, p, b_p);
    for &child in children {
        half.b.set(p, child.offset(), model.flux_child(child));
    }
    half.conditions[p] = Some(Condition::Flux { vertex, parent });
}
