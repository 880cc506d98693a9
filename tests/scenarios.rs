//! End-to-end tests: adjacency file -> network -> assembled system.

use std::io::Write;

use approx::assert_relative_eq;
use qgraph_core::assembly::Condition;
use qgraph_core::network::{self, EigenfunctionId, VertexId};
use qgraph_core::{Assembler, AssemblyConfig, EquationSystem, QGraphError};
use tempfile::NamedTempFile;

fn write_matrix(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn assemble_file(content: &str) -> EquationSystem {
    let file = write_matrix(content);
    let net = network::load_adjacency(file.path()).unwrap();
    Assembler::default().assemble_system(&net).unwrap()
}

#[test]
fn root_with_one_leaf() {
    let system = assemble_file("0 1\n0 0\n");
    assert_eq!(system.num_segments(), 1);
    assert_eq!((system.matrix.rows(), system.matrix.cols()), (2, 2));
    assert_eq!(system.conditions[0], Some(Condition::Root { segment: EigenfunctionId(1) }));
    assert!(matches!(system.conditions[1], Some(Condition::Leaf { .. })));
    assert_eq!(system.matrix.numeric_row(0), &[1.0, 0.0]);
}

#[test]
fn root_with_two_leaves() {
    let system = assemble_file("0 1 1\n0 0 0\n0 0 0\n");
    assert_eq!((system.matrix.rows(), system.matrix.cols()), (4, 4));
    assert_eq!(system.conditions[0], Some(Condition::Root { segment: EigenfunctionId(1) }));
    assert_eq!(system.conditions[1], Some(Condition::Root { segment: EigenfunctionId(2) }));
    assert_eq!(
        system.conditions[2],
        Some(Condition::Leaf {
            vertex: VertexId(1),
            segment: EigenfunctionId(1)
        })
    );
    assert_eq!(
        system.conditions[3],
        Some(Condition::Leaf {
            vertex: VertexId(2),
            segment: EigenfunctionId(2)
        })
    );
    assert_eq!(system.matrix.numeric_row(1), &[0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn three_level_chain() {
    let system = assemble_file("0 1 0\n0 0 1\n0 0 0\n");
    assert_eq!(system.matrix.rows(), 4);
    assert_eq!(
        system.conditions,
        vec![
            Some(Condition::Root { segment: EigenfunctionId(1) }),
            Some(Condition::Continuity {
                vertex: VertexId(1),
                parent: EigenfunctionId(1),
                child: EigenfunctionId(2),
            }),
            Some(Condition::Flux {
                vertex: VertexId(1),
                parent: EigenfunctionId(1),
            }),
            Some(Condition::Leaf {
                vertex: VertexId(2),
                segment: EigenfunctionId(2),
            }),
        ]
    );
}

#[test]
fn empty_file_gives_empty_system() {
    let file = write_matrix("");
    let net = network::load_adjacency(file.path()).unwrap();
    assert_eq!(net.num_vertices(), 0);
    assert_eq!(net.num_edges(), 0);
    let matrix = Assembler::default().assemble(&net).unwrap();
    assert_eq!((matrix.rows(), matrix.cols()), (0, 0));
}

#[test]
fn two_parents_fail_assembly_only() {
    let file = write_matrix("0 1 1\n0 0 1\n0 0 0\n");
    let net = network::load_adjacency(file.path()).expect("construction succeeds");
    assert_eq!(net.num_edges(), 3);
    let err = Assembler::default().assemble(&net).unwrap_err();
    assert!(matches!(err, QGraphError::Structural { vertex: VertexId(2), .. }));
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = network::load_adjacency(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, QGraphError::FileRead { .. }));
}

#[test]
fn malformed_file() {
    let file = write_matrix("0 1\n0 x\n");
    let err = network::load_adjacency(file.path()).unwrap_err();
    assert!(matches!(err, QGraphError::Format { line: 2, column: 3, .. }));
}

#[test]
fn edge_count_matches_ones() {
    let input = "0 1 1 0 0 0\n0 0 0 1 1 0\n0 0 0 0 0 1\n0 0 0 0 0 0\n0 0 0 0 0 0\n0 0 0 0 0 0\n";
    let ones = input.split_whitespace().filter(|t| *t == "1").count();
    let net = network::parse_adjacency(input).unwrap();
    assert_eq!(net.num_edges(), ones);
    let mut ids: Vec<usize> = net.edges().iter().map(|e| e.id.0).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=ones).collect::<Vec<_>>());
}

#[test]
fn tree_system_is_square_complete_and_synchronized() {
    let input = "0 1 1 0 0 0\n0 0 0 1 1 0\n0 0 0 0 0 1\n0 0 0 0 0 0\n0 0 0 0 0 0\n0 0 0 0 0 0\n";
    let net = network::parse_adjacency(input).unwrap();
    let system = Assembler::default().assemble_system(&net).unwrap();
    let m = &system.matrix;
    let e = net.num_edges();

    assert!(m.is_square());
    assert_eq!(m.rows(), 2 * e);
    assert!(system.is_complete());

    for row in 0..m.rows() {
        assert!(!m.is_zero_row(row), "row {} is empty", row);
        for col in 0..m.cols() {
            let formula = m.symbolic(row, col);
            assert!(!formula.is_empty());
            if m.numeric(row, col) != 0.0 {
                assert_ne!(formula, "0", "cell ({}, {}) is numeric-only", row, col);
            }
        }
    }

    // Every non-root vertex is named by exactly one leaf or flux row
    for vertex in net.vertices().skip(1) {
        let owned = system
            .conditions
            .iter()
            .flatten()
            .filter(|c| match c {
                Condition::Leaf { vertex: v, .. } | Condition::Flux { vertex: v, .. } => {
                    *v == vertex
                }
                _ => false,
            })
            .count();
        assert_eq!(owned, 1, "vertex {}", vertex);
    }
}

#[test]
fn assembly_is_idempotent() {
    let net = network::parse_adjacency("0 1 0 0\n0 0 1 1\n0 0 0 0\n0 0 0 0").unwrap();
    let config = AssemblyConfig::new()
        .with_lambda(0.7)
        .with_transmission(0.9, 1.1);
    let assembler = Assembler::new(config);
    let first = assembler.assemble(&net).unwrap();
    let second = assembler.assemble(&net).unwrap();
    let bits = |m: &qgraph_core::MatrixSet| {
        m.numeric_data()
            .iter()
            .map(|v| v.to_bits())
            .collect::<Vec<_>>()
    };
    assert_eq!(bits(&first), bits(&second));
    assert_eq!(first.symbolic_data(), second.symbolic_data());
}

#[test]
fn segment_length_only_touches_its_cells() {
    let net = network::parse_adjacency("0 1 1\n0 0 0\n0 0 0").unwrap();
    let base = Assembler::default().assemble(&net).unwrap();
    let stretched = Assembler::new(AssemblyConfig::new().with_length(EigenfunctionId(2), 3.0))
        .assemble(&net)
        .unwrap();

    // Row 2 is the leaf of segment 1, row 3 the leaf of segment 2
    assert_eq!(base.numeric_row(2), stretched.numeric_row(2));
    assert_relative_eq!(stretched.numeric(3, 1), -(3.0_f64.sin()), epsilon = 1e-12);
    assert_relative_eq!(stretched.numeric(3, 3), 3.0_f64.cos(), epsilon = 1e-12);
    assert_eq!(base.symbolic_data(), stretched.symbolic_data());
}
