//! Solved-table verification.

use gridlock_core::{Label, Problem};

/// A solved puzzle laid out as one row per unit, validated on
/// construction: every category column must be a permutation of its
/// declared labels.
pub struct Table<'p> {
    problem: &'p Problem,
    rows: Vec<Vec<Label>>,
}

impl<'p> Table<'p> {
    pub fn new(problem: &'p Problem, rows: Vec<Vec<Label>>) -> Self {
        assert_eq!(rows.len(), problem.labels_per_category());
        for (c, cat) in problem.category_ids().enumerate() {
            let mut seen: Vec<&Label> = rows.iter().map(|row| &row[c]).collect();
            seen.sort();
            seen.dedup();
            assert_eq!(
                seen.len(),
                problem.labels_per_category(),
                "category '{}' repeats a label",
                problem.category_name(cat)
            );
        }
        Self { problem, rows }
    }

    fn column(&self, category: &str) -> usize {
        self.problem.category_id(category).unwrap().0 as usize
    }

    /// The row whose `category` column holds `label`.
    pub fn row_of(&self, category: &str, label: impl Into<Label>) -> &[Label] {
        let c = self.column(category);
        let label = label.into();
        self.rows
            .iter()
            .find(|row| row[c] == label)
            .unwrap_or_else(|| panic!("no row with {} = {}", category, label))
            .as_slice()
    }

    /// The `want` column of the row identified by (`category`, `label`).
    pub fn value(&self, category: &str, label: impl Into<Label>, want: &str) -> &Label {
        let w = self.column(want);
        &self.row_of(category, label)[w]
    }

    /// Integer shorthand for [`Table::value`], for ordering columns.
    pub fn rank(&self, category: &str, label: impl Into<Label>, ordering: &str) -> i64 {
        self.value(category, label, ordering)
            .as_int()
            .expect("ordering column is not numeric")
    }
}
