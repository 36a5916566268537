//! Structural invariants that hold regardless of puzzle content.

use gridlock_tests::prelude::*;
use proptest::prelude::*;

// ========== TEST: edge-count formulas ==========
#[test]
fn test_initial_and_terminal_edge_counts() {
    // M = 6 categories, N = 5 labels
    let problem = zebra();
    let solver = Solver::new(&problem);

    // M * N^2 * (M - 1) / 2
    assert_eq!(solver.edge_count(), 6 * 25 * 5 / 2);

    let mut solver = Solver::new(&problem);
    for rule in 0..ZEBRA_RULE_COUNT {
        apply_zebra_rule(&mut solver, rule).unwrap();
    }
    assert!(solver.solved());
    // N * M * (M - 1) / 2
    assert_eq!(solver.edge_count(), 5 * 6 * 5 / 2);
}

// ========== TEST: edges only ever fall ==========
#[test]
fn test_edge_count_is_monotone() {
    let problem = zebra();
    let mut solver = Solver::new(&problem);
    let mut previous = solver.edge_count();
    for rule in 0..ZEBRA_RULE_COUNT {
        apply_zebra_rule(&mut solver, rule).unwrap();
        let current = solver.edge_count();
        assert!(current <= previous, "rule {} added edges", rule);
        previous = current;
    }
}

fn zebra_edges(order: &[usize]) -> Vec<(NodeId, NodeId)> {
    let problem = zebra();
    let mut solver = Solver::new(&problem);
    for &rule in order {
        apply_zebra_rule(&mut solver, rule).unwrap();
    }
    solver.snapshot().edges
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // ========== TEST: rule order never changes the fixed point ==========
    #[test]
    fn prop_rule_order_is_confluent(
        order in Just((0..ZEBRA_RULE_COUNT).collect::<Vec<usize>>()).prop_shuffle()
    ) {
        let baseline: Vec<usize> = (0..ZEBRA_RULE_COUNT).collect();
        prop_assert_eq!(zebra_edges(&order), zebra_edges(&baseline));
    }
}
