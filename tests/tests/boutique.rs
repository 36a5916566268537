//! The boutique queue puzzle, end to end.
//!
//! Five shoppers wait in line; thirteen clues plus one comparative clue
//! (5a) pin down everyone's age, top, color and size. Clue 5a compares
//! two not-yet-resolved neighbors, which the assertion machinery cannot
//! express directly, so it is applied as hand-derived corollaries the
//! way a puzzle author would.

use gridlock_tests::prelude::*;

fn apply_clues(solver: &mut Solver<'_>) {
    // 1. The top Dana wants to buy is size XL.
    solver.bind("Dana", "XL").unwrap();
    // 1a. She is ahead of, but not directly ahead of, someone buying black.
    solver
        .less_than("Dana", "black", "position", Gap::AtLeast(2))
        .unwrap();
    // 2. Jessica waits directly in front of the Poloshirt buyer.
    solver
        .less_than("Jessica", "Poloshirt", "position", Gap::Exactly(1))
        .unwrap();
    // 3. The second person wants a yellow top.
    solver.bind(2, "yellow").unwrap();
    // 4. The T-Shirt isn't red.
    solver.unbind("T-Shirt", "red").unwrap();
    // 5. Sören wants a Sweatshirt.
    solver.bind("Sören", "Sweatshirt").unwrap();
    // 6. Ingo needs size L.
    solver.bind("Ingo", "L").unwrap();
    // 7. The last person is 30.
    solver.bind(5, 30).unwrap();
    // 8. The oldest buys the smallest size.
    solver.bind(35, "XS").unwrap();
    // 9. The person directly behind Valerie buys red.
    solver
        .less_than("Valerie", "red", "position", Gap::Exactly(1))
        .unwrap();
    // 9a. The red top is bigger than S.
    solver.bind_among("red", ["M", "L", "XL"]).unwrap();
    // 10. The youngest buys yellow.
    solver.bind(26, "yellow").unwrap();
    // 11. Jessica buys a Blouse.
    solver.bind("Jessica", "Blouse").unwrap();
    // 12. The third person buys size M.
    solver.bind(3, "M").unwrap();
    // 13. The Poloshirt is red, yellow or green.
    solver
        .bind_among("Poloshirt", ["red", "yellow", "green"])
        .unwrap();
}

// 5a. The person directly in front of Sören is older than the person
// directly behind him.
fn apply_clue_5a(solver: &mut Solver<'_>) {
    // Sören has someone on both sides
    solver.unbind("Sören", 1).unwrap();
    solver.unbind("Sören", 5).unwrap();

    // the person in front of Sören is not the youngest
    if let Some(p) = position_of(solver, 26) {
        if p + 1 <= 5 {
            solver.unbind("Sören", p + 1).unwrap();
        }
    }
    // the person behind Sören is not the oldest
    if let Some(p) = position_of(solver, 35) {
        if p - 1 >= 1 {
            solver.unbind("Sören", p - 1).unwrap();
        }
    }

    let pos = position_of(solver, "Sören").expect("Sören's position undetermined");
    let missing: Vec<i64> = solver
        .find_missing("age")
        .unwrap()
        .iter()
        .filter_map(Label::as_int)
        .collect();
    if let (Some(&oldest), Some(&youngest)) = (missing.iter().max(), missing.iter().min()) {
        solver.bind(pos - 1, oldest).unwrap();
        solver.bind(pos + 1, youngest).unwrap();
    }
}

fn position_of(solver: &Solver<'_>, item: impl Into<ItemRef>) -> Option<i64> {
    solver
        .category_for(item, "position")
        .unwrap()
        .and_then(|label| label.as_int())
}

// ========== TEST: the clues resolve the whole queue ==========
#[test]
fn test_boutique_puzzle_solves_completely() {
    let problem = boutique();
    let mut solver = Solver::new(&problem);

    apply_clues(&mut solver);
    assert!(!solver.solved(), "clue 5a should still be needed");

    apply_clue_5a(&mut solver);
    assert!(solver.solved(), "boutique puzzle left unsolved");
    assert_eq!(solver.edge_count(), 75);
}

// ========== TEST: every clue holds in the solved table ==========
#[test]
fn test_boutique_solution_satisfies_all_clues() {
    let problem = boutique();
    let mut solver = Solver::new(&problem);
    apply_clues(&mut solver);
    apply_clue_5a(&mut solver);

    let table = Table::new(&problem, solver.solution().unwrap());

    assert_eq!(table.value("name", "Dana", "size"), &Label::from("XL"));
    assert!(table.rank("color", "black", "position") - table.rank("name", "Dana", "position") >= 2);
    assert_eq!(
        table.rank("top", "Poloshirt", "position") - table.rank("name", "Jessica", "position"),
        1
    );
    assert_eq!(table.value("position", 2, "color"), &Label::from("yellow"));
    assert_ne!(table.value("top", "T-Shirt", "color"), &Label::from("red"));
    assert_eq!(table.value("name", "Sören", "top"), &Label::from("Sweatshirt"));
    assert_eq!(table.value("name", "Ingo", "size"), &Label::from("L"));
    assert_eq!(table.value("position", 5, "age"), &Label::from(30));
    assert_eq!(table.value("age", 35, "size"), &Label::from("XS"));
    assert_eq!(
        table.rank("color", "red", "position") - table.rank("name", "Valerie", "position"),
        1
    );
    assert!(["M", "L", "XL"]
        .map(Label::from)
        .contains(table.value("color", "red", "size")));
    assert_eq!(table.value("age", 26, "color"), &Label::from("yellow"));
    assert_eq!(table.value("name", "Jessica", "top"), &Label::from("Blouse"));
    assert_eq!(table.value("position", 3, "size"), &Label::from("M"));
    assert!(["red", "yellow", "green"]
        .map(Label::from)
        .contains(table.value("top", "Poloshirt", "color")));

    // 5a itself: the neighbor in front of Sören outranks the one behind
    let soeren = table.rank("name", "Sören", "position");
    let front = table.value("position", soeren - 1, "age").as_int().unwrap();
    let behind = table.value("position", soeren + 1, "age").as_int().unwrap();
    assert!(front > behind);
}
