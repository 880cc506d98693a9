//! Boundary-condition system assembly.
//!
//! Each segment `i` of the network carries `f_i(x) = A_i cos(λx) + B_i sin(λx)`.
//! The assembler visits every vertex and stamps the condition that holds
//! there into a square system over the unknowns `A_1..A_E, B_1..B_E`.
//!
//! ## Layout
//!
//! ```text
//!              A_1 .. A_E   B_1 .. B_E
//! proximal  [  A-prox       B-prox   ]   rows 0..E
//! distal    [  A-dist       B-dist   ]   rows E..2E
//! ```
//!
//! Segment `i` owns proximal row `i-1` and distal row `E+i-1`:
//!
//! | Vertex kind | Row | Condition |
//! |-------------|-----|-----------|
//! | root | proximal of each outgoing segment | `A_i = 0` |
//! | junction | proximal of each child | `f_p(L_p) - f_c(0) = 0` |
//! | junction | distal of the parent | `α f_p'(L_p) - β Σ f_c'(0) = 0` |
//! | leaf | distal of the parent | `f_p'(L_p) = 0` |
//!
//! Every cell is held in a [`MatrixSet`] as both an evaluated `f64` and a
//! formula string.

mod assembler;
mod coefficients;
mod matrix_set;

pub use assembler::{Assembler, Condition, EquationSystem};
pub use coefficients::{AssemblyConfig, CableModel, CoefficientModel};
pub use matrix_set::{Coefficient, MatrixSet, NumericDisplay, ZERO_SYMBOL};
