//! Nerve-fiber network representation and construction.
//!
//! A [`Network`] is a directed graph whose vertices are the junctions and
//! terminals of a branching fiber and whose edges are the transmission
//! segments between them. Every edge carries an [`EigenfunctionId`] that
//! names the `(A, B)` coefficient pair of its candidate solution.
//!
//! # Input Format
//!
//! Networks are read from a plain-text adjacency matrix, one row per vertex:
//!
//! ```text
//! # root with two terminal branches
//! 0 1 1
//! 0 0 0
//! 0 0 0
//! ```
//!
//! A `1` at row `i`, column `j` adds the segment `i -> j`. Ids are assigned
//! in row-major scan order starting at 1. Blank lines and lines starting
//! with `#` are ignored.

mod builder;
mod graph;
mod types;
mod validate;

pub use builder::{load_adjacency, parse_adjacency};
pub use graph::Network;
pub use types::*;
pub use validate::validate_tree;
