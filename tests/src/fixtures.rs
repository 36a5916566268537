//! Fixture puzzles.
//!
//! Two classics: a five-person boutique queue and the original zebra
//! puzzle. Both have a unique solution, which makes them good end-to-end
//! probes for the propagation machinery.

use gridlock_core::Problem;
use gridlock_solver::{Gap, Solver, SolverResult};

/// Five shoppers in line, six categories.
pub fn boutique() -> Problem {
    Problem::builder()
        .category("position", [1, 2, 3, 4, 5])
        .category("name", ["Dana", "Ingo", "Jessica", "Sören", "Valerie"])
        .category("age", [26, 27, 30, 33, 35])
        .category(
            "top",
            ["Blouse", "Poloshirt", "Pullover", "Sweatshirt", "T-Shirt"],
        )
        .category("color", ["blue", "yellow", "green", "red", "black"])
        .category("size", ["XS", "S", "M", "L", "XL"])
        .build()
        .unwrap()
}

/// Five houses, six categories.
pub fn zebra() -> Problem {
    Problem::builder()
        .category("position", [1, 2, 3, 4, 5])
        .category(
            "nationality",
            ["Englishman", "Spaniard", "Ukrainian", "Norwegian", "Japanese"],
        )
        .category("color", ["red", "green", "ivory", "yellow", "blue"])
        .category("pet", ["dog", "snails", "fox", "horse", "ZEBRA"])
        .category("drink", ["coffee", "tea", "milk", "orange juice", "WATER"])
        .category(
            "cigarette",
            ["Old Gold", "Kools", "Chesterfields", "Lucky Strikes", "Parliaments"],
        )
        .build()
        .unwrap()
}

/// Number of zebra clues.
pub const ZEBRA_RULE_COUNT: usize = 14;

/// Apply the `rule`-th zebra clue. The clues are independent, so any
/// application order must land on the same solution.
pub fn apply_zebra_rule(solver: &mut Solver<'_>, rule: usize) -> SolverResult<usize> {
    match rule {
        0 => solver.bind("Englishman", "red"),
        1 => solver.bind("Spaniard", "dog"),
        2 => solver.bind("coffee", "green"),
        3 => solver.bind("Ukrainian", "tea"),
        4 => solver.greater_than("green", "ivory", "position", Gap::Exactly(1)),
        5 => solver.bind("Old Gold", "snails"),
        6 => solver.bind("Kools", "yellow"),
        7 => solver.bind("milk", 3),
        8 => solver.bind("Norwegian", 1),
        9 => solver.adjacent_to("Chesterfields", "fox", "position", Gap::Exactly(1)),
        10 => solver.adjacent_to("Kools", "horse", "position", Gap::Exactly(1)),
        11 => solver.bind("Lucky Strikes", "orange juice"),
        12 => solver.bind("Japanese", "Parliaments"),
        13 => solver.adjacent_to("Norwegian", "blue", "position", Gap::Exactly(1)),
        _ => unreachable!("zebra has {} clues", ZEBRA_RULE_COUNT),
    }
}
