//! Condition coefficients and assembly configuration.

use std::collections::HashMap;

use crate::error::{QGraphError, Result};
use crate::network::{EigenfunctionId, VertexId};
use crate::{DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_LAMBDA, DEFAULT_SEGMENT_LENGTH};

use super::matrix_set::Coefficient;

/// Configuration for the equation assembler.
#[derive(Debug, Clone)]
pub struct AssemblyConfig {
    /// Vertex acting as the fiber origin.
    pub root: VertexId,
    /// Transmission coefficient on the parent side of a junction.
    pub alpha: f64,
    /// Transmission coefficient on the child side of a junction.
    pub beta: f64,
    /// Shared eigen-parameter.
    pub lambda: f64,
    /// Length used for segments without an explicit entry in `lengths`.
    pub default_length: f64,
    /// Per-segment lengths.
    pub lengths: HashMap<EigenfunctionId, f64>,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            root: VertexId::ROOT,
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            lambda: DEFAULT_LAMBDA,
            default_length: DEFAULT_SEGMENT_LENGTH,
            lengths: HashMap::new(),
        }
    }
}

impl AssemblyConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root vertex.
    pub fn with_root(mut self, root: VertexId) -> Self {
        self.root = root;
        self
    }

    /// Set both transmission coefficients.
    pub fn with_transmission(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Set the eigen-parameter.
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Set the fallback segment length.
    pub fn with_default_length(mut self, length: f64) -> Self {
        self.default_length = length;
        self
    }

    /// Set the length of one segment.
    pub fn with_length(mut self, id: EigenfunctionId, length: f64) -> Self {
        self.lengths.insert(id, length);
        self
    }

    /// Length of segment `id`.
    pub fn length(&self, id: EigenfunctionId) -> f64 {
        self.lengths.get(&id).copied().unwrap_or(self.default_length)
    }

    /// Reject values the coefficient formulas cannot use.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta), ("lambda", self.lambda)] {
            if !value.is_finite() {
                return Err(QGraphError::invalid_parameter(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        let lengths = std::iter::once((None, self.default_length))
            .chain(self.lengths.iter().map(|(id, len)| (Some(*id), *len)));
        for (id, length) in lengths {
            if !(length.is_finite() && length > 0.0) {
                let which = id.map_or("default segment".to_string(), |id| {
                    format!("segment {}", id)
                });
                return Err(QGraphError::invalid_parameter(format!(
                    "{} length must be positive and finite, got {}",
                    which, length
                )));
            }
        }

        Ok(())
    }
}

/// Source of the coefficients placed by each boundary condition.
///
/// The assembler decides where a condition's cells go; a model decides what
/// they hold. Every method returns both the evaluated value and its formula.
pub trait CoefficientModel {
    /// Root condition, `A_i` column.
    fn root(&self, segment: EigenfunctionId) -> Coefficient;

    /// Continuity at a junction, parent `A_p` and `B_p` columns.
    fn continuity_parent(&self, parent: EigenfunctionId) -> (Coefficient, Coefficient);

    /// Continuity at a junction, child `A_c` column.
    fn continuity_child(&self, child: EigenfunctionId) -> Coefficient;

    /// Flux conservation at a junction, parent `A_p` and `B_p` columns.
    fn flux_parent(&self, parent: EigenfunctionId) -> (Coefficient, Coefficient);

    /// Flux conservation at a junction, child `B_c` column.
    fn flux_child(&self, child: EigenfunctionId) -> Coefficient;

    /// No-flux terminal condition, `A_i` and `B_i` columns.
    fn leaf(&self, segment: EigenfunctionId) -> (Coefficient, Coefficient);
}

/// Cable-equation coefficients for `f(x) = A cos(λx) + B sin(λx)`.
///
/// With `θ = λL`:
/// - `f(0) = A`, `f'(0) = λB`
/// - `f(L) = A cos θ + B sin θ`
/// - `f'(L) = -λA sin θ + λB cos θ`
#[derive(Debug, Clone)]
pub struct CableModel<'a> {
    config: &'a AssemblyConfig,
}

impl<'a> CableModel<'a> {
    /// Create a model reading parameters from `config`.
    pub fn new(config: &'a AssemblyConfig) -> Self {
        Self { config }
    }

    fn theta(&self, id: EigenfunctionId) -> f64 {
        self.config.lambda * self.config.length(id)
    }

    /// Derivative at the distal end, scaled by `weight` rendered as `prefix`.
    fn distal_derivative(
        &self,
        id: EigenfunctionId,
        weight: f64,
        prefix: &str,
    ) -> (Coefficient, Coefficient) {
        let theta = self.theta(id);
        let lambda = self.config.lambda;
        (
            Coefficient::new(
                -weight * lambda * theta.sin(),
                format!("-{}λ·sin(λ·L{})", prefix, id),
            ),
            Coefficient::new(
                weight * lambda * theta.cos(),
                format!("{}λ·cos(λ·L{})", prefix, id),
            ),
        )
    }
}

impl CoefficientModel for CableModel<'_> {
    fn root(&self, _segment: EigenfunctionId) -> Coefficient {
        Coefficient::new(1.0, "1")
    }

    fn continuity_parent(&self, parent: EigenfunctionId) -> (Coefficient, Coefficient) {
        let theta = self.theta(parent);
        (
            Coefficient::new(theta.cos(), format!("cos(λ·L{})", parent)),
            Coefficient::new(theta.sin(), format!("sin(λ·L{})", parent)),
        )
    }

    fn continuity_child(&self, _child: EigenfunctionId) -> Coefficient {
        Coefficient::new(-1.0, "-1")
    }

    fn flux_parent(&self, parent: EigenfunctionId) -> (Coefficient, Coefficient) {
        self.distal_derivative(parent, self.config.alpha, "α·")
    }

    fn flux_child(&self, _child: EigenfunctionId) -> Coefficient {
        Coefficient::new(-self.config.beta * self.config.lambda, "-β·λ")
    }

    fn leaf(&self, segment: EigenfunctionId) -> (Coefficient, Coefficient) {
        self.distal_derivative(segment, 1.0, "")
    }
}
