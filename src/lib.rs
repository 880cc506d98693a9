//! # QGraph Core
//!
//! Boundary-condition system assembly for branching nerve-fiber networks.
//!
//! This library provides:
//! - A reader for 0/1 adjacency matrices describing the fiber topology
//! - A directed network whose segments carry dense eigenfunction ids
//! - An assembler producing the `2E x 2E` root/junction/leaf condition system
//! - Paired numeric and symbolic matrices for solving and inspection
//!
//! ## Architecture
//!
//! - [`network`] - Network representation, adjacency parsing and tree validation
//! - [`assembly`] - Coefficient model, matrix storage and equation assembly
//! - [`error`] - Unified error type
//!
//! ## Usage
//!
//! ```bash
//! qgraph fiber.txt --lambda 1.5 --alpha 0.8 --beta 0.6
//! ```
//!
//! ```
//! use qgraph_core::{network, Assembler, AssemblyConfig};
//!
//! let net = network::parse_adjacency("0 1\n0 0").unwrap();
//! let system = Assembler::new(AssemblyConfig::default()).assemble(&net).unwrap();
//! assert_eq!(system.rows(), 2);
//! ```
//!
//! ## Equations
//!
//! Each segment carries `f(x) = A cos(λx) + B sin(λx)`. The root pins the
//! cosine coefficient of its segments to zero, every junction contributes
//! field continuity per child plus one flux-conservation row, and every
//! terminal contributes a no-flux row. Solving the system is left to the
//! caller.

pub mod assembly;
pub mod error;
pub mod network;

// Re-export main types for convenience
pub use assembly::{Assembler, AssemblyConfig, EquationSystem, MatrixSet};
pub use error::{QGraphError, Result};
pub use network::Network;

/// Default parent-side transmission coefficient
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Default child-side transmission coefficient
pub const DEFAULT_BETA: f64 = 1.0;

/// Default eigen-parameter
pub const DEFAULT_LAMBDA: f64 = 1.0;

/// Default segment length
pub const DEFAULT_SEGMENT_LENGTH: f64 = 1.0;
