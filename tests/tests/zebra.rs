//! The original zebra puzzle, end to end.

use gridlock_tests::prelude::*;

fn solve() -> (Problem, Vec<Vec<Label>>) {
    let problem = zebra();
    let mut solver = Solver::new(&problem);
    for rule in 0..ZEBRA_RULE_COUNT {
        apply_zebra_rule(&mut solver, rule).unwrap();
    }

    assert!(solver.solved(), "zebra puzzle left unsolved");
    assert_eq!(solver.assertion_count(), 0, "assertions left undischarged");

    let rows = solver.solution().unwrap();
    (problem, rows)
}

// ========== TEST: the fourteen clues pin the whole grid ==========
#[test]
fn test_zebra_puzzle_solves_completely() {
    let (problem, rows) = solve();
    let table = Table::new(&problem, rows);

    // the two questions the puzzle actually asks
    assert_eq!(
        table.value("pet", "ZEBRA", "nationality"),
        &Label::from("Japanese")
    );
    assert_eq!(
        table.value("drink", "WATER", "nationality"),
        &Label::from("Norwegian")
    );
}

// ========== TEST: every clue holds in the solved table ==========
#[test]
fn test_zebra_solution_satisfies_all_clues() {
    let (problem, rows) = solve();
    let table = Table::new(&problem, rows);

    assert_eq!(table.value("nationality", "Englishman", "color"), &Label::from("red"));
    assert_eq!(table.value("nationality", "Spaniard", "pet"), &Label::from("dog"));
    assert_eq!(table.value("drink", "coffee", "color"), &Label::from("green"));
    assert_eq!(table.value("nationality", "Ukrainian", "drink"), &Label::from("tea"));
    assert_eq!(
        table.rank("color", "green", "position") - table.rank("color", "ivory", "position"),
        1
    );
    assert_eq!(table.value("cigarette", "Old Gold", "pet"), &Label::from("snails"));
    assert_eq!(table.value("cigarette", "Kools", "color"), &Label::from("yellow"));
    assert_eq!(table.rank("drink", "milk", "position"), 3);
    assert_eq!(table.rank("nationality", "Norwegian", "position"), 1);
    assert_eq!(
        (table.rank("cigarette", "Chesterfields", "position")
            - table.rank("pet", "fox", "position"))
        .abs(),
        1
    );
    assert_eq!(
        (table.rank("cigarette", "Kools", "position") - table.rank("pet", "horse", "position"))
            .abs(),
        1
    );
    assert_eq!(
        table.value("cigarette", "Lucky Strikes", "drink"),
        &Label::from("orange juice")
    );
    assert_eq!(
        table.value("nationality", "Japanese", "cigarette"),
        &Label::from("Parliaments")
    );
    assert_eq!(
        (table.rank("nationality", "Norwegian", "position")
            - table.rank("color", "blue", "position"))
        .abs(),
        1
    );
}
