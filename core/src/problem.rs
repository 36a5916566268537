//! Problem definition.
//!
//! A problem is an ordered set of categories, each holding the same number
//! of distinct labels. It is immutable after construction via
//! [`ProblemBuilder`] and serves as the single source of truth for node
//! addressing and item lookup.

use std::collections::HashMap;

use crate::error::{ProblemError, ProblemResult};
use crate::id::{CategoryId, NodeId};
use crate::label::{ItemRef, Label};

/// One category and its ordered labels.
#[derive(Debug, Clone)]
struct CategoryDef {
    name: String,
    labels: Vec<Label>,
}

/// An immutable elimination problem: `m` categories of `n` labels each.
#[derive(Debug, Clone)]
pub struct Problem {
    categories: Vec<CategoryDef>,
    n: usize,
    /// Category lookup by name.
    by_name: HashMap<String, CategoryId>,
    /// Bare-label lookup. `None` marks a label that occurs in more than one
    /// category and therefore needs qualification.
    unique: HashMap<Label, Option<NodeId>>,
}

impl Problem {
    /// Start building a problem.
    pub fn builder() -> ProblemBuilder {
        ProblemBuilder::new()
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of labels per category.
    pub fn labels_per_category(&self) -> usize {
        self.n
    }

    /// Total number of nodes (`m * n`).
    pub fn node_count(&self) -> usize {
        self.categories.len() * self.n
    }

    /// Iterate over all category ids in declaration order.
    pub fn category_ids(&self) -> impl Iterator<Item = CategoryId> {
        (0..self.categories.len() as u16).map(CategoryId::new)
    }

    /// Look up a category by name.
    pub fn category_id(&self, name: &str) -> ProblemResult<CategoryId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ProblemError::UnknownCategory(name.to_string()))
    }

    /// Name of a category.
    pub fn category_name(&self, cat: CategoryId) -> &str {
        &self.categories[cat.index()].name
    }

    /// Labels of a category, in declaration order.
    pub fn labels_in(&self, cat: CategoryId) -> &[Label] {
        &self.categories[cat.index()].labels
    }

    /// Category a node belongs to.
    pub fn category_of(&self, node: NodeId) -> CategoryId {
        CategoryId::new((node.index() / self.n) as u16)
    }

    /// Label carried by a node.
    pub fn label_of(&self, node: NodeId) -> &Label {
        let def = &self.categories[node.index() / self.n];
        &def.labels[node.index() % self.n]
    }

    /// Node at a given offset within a category.
    pub fn node_at(&self, cat: CategoryId, offset: usize) -> NodeId {
        NodeId::new((cat.index() * self.n + offset) as u32)
    }

    /// Iterate over the nodes of one category.
    pub fn nodes_in(&self, cat: CategoryId) -> impl Iterator<Item = NodeId> {
        let start = cat.index() * self.n;
        (start..start + self.n).map(|i| NodeId::new(i as u32))
    }

    /// Position of a node's label within its category's declaration order.
    pub fn rank_of(&self, node: NodeId) -> i64 {
        (node.index() % self.n) as i64
    }

    /// Numeric value of a node's label, if it is an integer label.
    pub fn value_of(&self, node: NodeId) -> Option<i64> {
        self.label_of(node).as_int()
    }

    /// Whether every label of a category is an integer.
    pub fn is_numeric(&self, cat: CategoryId) -> bool {
        self.categories[cat.index()].labels.iter().all(Label::is_int)
    }

    /// Render a node as an unambiguous `(category, label)` string.
    pub fn describe(&self, node: NodeId) -> String {
        format!(
            "({}, {})",
            self.category_name(self.category_of(node)),
            self.label_of(node)
        )
    }

    /// Resolve an item reference to a node.
    ///
    /// Bare labels resolve only when they occur in exactly one category.
    pub fn resolve(&self, item: &ItemRef) -> ProblemResult<NodeId> {
        match item {
            ItemRef::Bare(label) => match self.unique.get(label) {
                Some(Some(node)) => Ok(*node),
                Some(None) => Err(ProblemError::AmbiguousItem(label.clone())),
                None => Err(ProblemError::UnknownItem(label.clone())),
            },
            ItemRef::Qualified(name, label) => {
                let cat = self.category_id(name)?;
                self.categories[cat.index()]
                    .labels
                    .iter()
                    .position(|l| l == label)
                    .map(|offset| self.node_at(cat, offset))
                    .ok_or_else(|| ProblemError::UnknownItem(label.clone()))
            }
        }
    }
}

/// Builder for [`Problem`]. Categories are added in order; `build` validates
/// the whole definition and freezes it.
#[derive(Debug, Default)]
pub struct ProblemBuilder {
    categories: Vec<CategoryDef>,
}

impl ProblemBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category with its ordered labels.
    pub fn category<L>(mut self, name: &str, labels: impl IntoIterator<Item = L>) -> Self
    where
        L: Into<Label>,
    {
        self.categories.push(CategoryDef {
            name: name.to_string(),
            labels: labels.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Validate and freeze the problem.
    pub fn build(self) -> ProblemResult<Problem> {
        if self.categories.len() < 2 {
            return Err(ProblemError::TooFewCategories);
        }

        let n = self.categories[0].labels.len();
        let mut by_name = HashMap::new();
        for (index, def) in self.categories.iter().enumerate() {
            if def.name.is_empty() {
                return Err(ProblemError::ReservedName("category name".to_string()));
            }
            if def.labels.is_empty() {
                return Err(ProblemError::EmptyCategory(def.name.clone()));
            }
            if def.labels.len() != n {
                return Err(ProblemError::UnevenCategories {
                    category: def.name.clone(),
                    expected: n,
                    got: def.labels.len(),
                });
            }
            for (i, label) in def.labels.iter().enumerate() {
                if matches!(label, Label::Text(s) if s.is_empty()) {
                    return Err(ProblemError::ReservedName(format!(
                        "label in category '{}'",
                        def.name
                    )));
                }
                if def.labels[..i].contains(label) {
                    return Err(ProblemError::DuplicateLabel {
                        category: def.name.clone(),
                        label: label.clone(),
                    });
                }
            }
            if by_name
                .insert(def.name.clone(), CategoryId::new(index as u16))
                .is_some()
            {
                return Err(ProblemError::DuplicateCategory(def.name.clone()));
            }
        }

        // Bare-label map: a label seen in two categories becomes ambiguous.
        let mut unique: HashMap<Label, Option<NodeId>> = HashMap::new();
        for (cat_index, def) in self.categories.iter().enumerate() {
            for (offset, label) in def.labels.iter().enumerate() {
                let node = NodeId::new((cat_index * n + offset) as u32);
                unique
                    .entry(label.clone())
                    .and_modify(|slot| *slot = None)
                    .or_insert(Some(node));
            }
        }

        Ok(Problem {
            categories: self.categories,
            n,
            by_name,
            unique,
        })
    }
}
