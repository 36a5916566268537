//! Rule orchestration over the pairing graph and assertion registry.

use tracing::debug;

use gridlock_constraint::{Assertion, AssertionRegistry, BoundKind, Direction};
use gridlock_core::{ItemRef, Label, NodeId, Problem};
use gridlock_graph::{LabelGraph, Mutation};

use crate::error::{SolverError, SolverResult};
use crate::rules::Gap;
use crate::snapshot::{CategoryView, Snapshot};

/// The puzzle engine.
///
/// Owns the [`LabelGraph`] and the [`AssertionRegistry`] exclusively. Every
/// rule method drives propagation to a fixed point before returning, so a
/// caller never observes a half-settled graph. All rule methods return the
/// number of edges severed, which doubles as a progress signal.
pub struct Solver<'p> {
    problem: &'p Problem,
    graph: LabelGraph<'p>,
    registry: AssertionRegistry,
}

impl<'p> Solver<'p> {
    /// Create a solver with a fully connected graph and no assertions.
    pub fn new(problem: &'p Problem) -> Self {
        Self {
            problem,
            graph: LabelGraph::new(problem),
            registry: AssertionRegistry::new(),
        }
    }

    /// The problem definition this solver was built from.
    pub fn problem(&self) -> &'p Problem {
        self.problem
    }

    // ==================== Explicit rules ====================

    /// Bind item `a` one-to-one with item `b`.
    ///
    /// Binding an item to itself is a no-op; binding two distinct items of
    /// one category is rejected before any mutation.
    pub fn bind(
        &mut self,
        a: impl Into<ItemRef>,
        b: impl Into<ItemRef>,
    ) -> SolverResult<usize> {
        let ra = self.resolve(a)?;
        let rb = self.resolve(b)?;
        if ra == rb {
            return Ok(0);
        }
        let ca = self.problem.category_of(ra);
        if ca == self.problem.category_of(rb) {
            return Err(SolverError::SameCategory {
                category: self.problem.category_name(ca).to_string(),
            });
        }
        debug!(a = %self.problem.describe(ra), b = %self.problem.describe(rb), "bind");
        let mutation = self.graph.match_one(ra, rb)?;
        self.finish(mutation)
    }

    /// Bind item `a` to exactly one of `targets`.
    ///
    /// All targets must come from one category, which must differ from
    /// `a`'s. Everything is resolved before the graph is touched.
    pub fn bind_among<T>(
        &mut self,
        a: impl Into<ItemRef>,
        targets: impl IntoIterator<Item = T>,
    ) -> SolverResult<usize>
    where
        T: Into<ItemRef>,
    {
        let ra = self.resolve(a)?;
        let mut resolved = Vec::new();
        for target in targets {
            resolved.push(self.resolve(target)?);
        }
        let Some(&first) = resolved.first() else {
            return Err(SolverError::NoTargets);
        };
        let target_cat = self.problem.category_of(first);
        if resolved
            .iter()
            .any(|&t| self.problem.category_of(t) != target_cat)
        {
            return Err(SolverError::CategoryMismatch);
        }
        if target_cat == self.problem.category_of(ra) {
            return Err(SolverError::SameCategory {
                category: self.problem.category_name(target_cat).to_string(),
            });
        }
        debug!(
            a = %self.problem.describe(ra),
            targets = resolved.len(),
            "bind_among"
        );
        let mutation = if let [only] = resolved.as_slice() {
            self.graph.match_one(ra, *only)?
        } else {
            self.graph.match_many(ra, &resolved)?
        };
        self.finish(mutation)
    }

    /// Sever the single edge between `a` and `b`.
    ///
    /// Idempotent: severing an already-absent edge is a no-op.
    pub fn unbind(
        &mut self,
        a: impl Into<ItemRef>,
        b: impl Into<ItemRef>,
    ) -> SolverResult<usize> {
        let ra = self.resolve(a)?;
        let rb = self.resolve(b)?;
        if ra == rb {
            return Err(SolverError::SelfReference);
        }
        debug!(a = %self.problem.describe(ra), b = %self.problem.describe(rb), "unbind");
        let mutation = self.graph.sever(ra, rb)?;
        self.finish(mutation)
    }

    // ==================== Implicit rules ====================

    /// Require `x`'s position in `ordering` to trail `y`'s by `gap`.
    pub fn less_than(
        &mut self,
        x: impl Into<ItemRef>,
        y: impl Into<ItemRef>,
        ordering: &str,
        gap: Gap,
    ) -> SolverResult<usize> {
        self.ordered(x, y, ordering, gap, Direction::Forward)
    }

    /// Require `x`'s position in `ordering` to lead `y`'s by `gap`.
    pub fn greater_than(
        &mut self,
        x: impl Into<ItemRef>,
        y: impl Into<ItemRef>,
        ordering: &str,
        gap: Gap,
    ) -> SolverResult<usize> {
        self.ordered(y, x, ordering, gap, Direction::Forward)
    }

    /// Require `x` and `y` to sit `gap` apart in `ordering`, either way
    /// around.
    pub fn adjacent_to(
        &mut self,
        x: impl Into<ItemRef>,
        y: impl Into<ItemRef>,
        ordering: &str,
        gap: Gap,
    ) -> SolverResult<usize> {
        self.ordered(x, y, ordering, gap, Direction::Symmetric)
    }

    fn ordered(
        &mut self,
        x: impl Into<ItemRef>,
        y: impl Into<ItemRef>,
        ordering: &str,
        gap: Gap,
        direction: Direction,
    ) -> SolverResult<usize> {
        let cat = self.problem.category_id(ordering)?;
        let rx = self.resolve(x)?;
        let ry = self.resolve(y)?;
        if rx == ry {
            return Err(SolverError::SelfReference);
        }
        if self.problem.category_of(rx) == cat && self.problem.category_of(ry) == cat {
            return Err(SolverError::BothInOrdering {
                category: ordering.to_string(),
            });
        }
        if gap.is_numeric() && !self.problem.is_numeric(cat) {
            return Err(SolverError::NonNumericOrdering {
                category: ordering.to_string(),
            });
        }
        debug!(
            x = %self.problem.describe(rx),
            y = %self.problem.describe(ry),
            ordering,
            ?gap,
            "ordering rule"
        );
        // Distinct items never share a slot, so the direct edge (if any)
        // goes first.
        let mut mutation = self.graph.sever(rx, ry)?;
        let assertion = Assertion::new(rx, ry, cat, gap.bound(), direction);
        let out = assertion.reevaluate(&mut self.graph)?;
        if !out.discharged {
            self.registry.insert(assertion);
        }
        mutation.merge(out.mutation);
        self.finish(mutation)
    }

    // ==================== Propagation ====================

    /// Re-run every assertion interested in a touched node until no edge
    /// falls. Discharged assertions are retired on the spot.
    fn settle(&mut self, mut pending: Vec<NodeId>) -> SolverResult<usize> {
        let mut removed = 0;
        while let Some(node) = pending.pop() {
            for id in self.registry.interested(node) {
                let Some(assertion) = self.registry.get(id).cloned() else {
                    continue;
                };
                let out = assertion.reevaluate(&mut self.graph)?;
                removed += out.mutation.removed;
                pending.extend(out.mutation.touched);
                if out.discharged {
                    debug!(%id, "assertion discharged");
                    self.registry.remove(id);
                }
            }
        }
        Ok(removed)
    }

    fn finish(&mut self, mutation: Mutation) -> SolverResult<usize> {
        let direct = mutation.removed;
        let settled = self.settle(mutation.touched)?;
        Ok(direct + settled)
    }

    // ==================== Queries ====================

    /// The label of `category` that `item` is bound to, if resolved.
    pub fn category_for(
        &self,
        item: impl Into<ItemRef>,
        category: &str,
    ) -> SolverResult<Option<Label>> {
        let node = self.resolve(item)?;
        let cat = self.problem.category_id(category)?;
        Ok(self
            .graph
            .resolved_in(node, cat)
            .map(|n| self.problem.label_of(n).clone()))
    }

    /// All labels of `category` that `item` could still bind to.
    pub fn available_for(
        &self,
        item: impl Into<ItemRef>,
        category: &str,
    ) -> SolverResult<Vec<Label>> {
        let node = self.resolve(item)?;
        let cat = self.problem.category_id(category)?;
        Ok(self
            .graph
            .neighbors_in(node, cat)
            .into_iter()
            .map(|n| self.problem.label_of(n).clone())
            .collect())
    }

    /// Labels of `category` still lacking a full one-to-one resolution,
    /// in declaration order.
    pub fn find_missing(&self, category: &str) -> SolverResult<Vec<Label>> {
        let cat = self.problem.category_id(category)?;
        let mut missing = Vec::new();
        for node in self.problem.nodes_in(cat) {
            let unresolved = self
                .problem
                .category_ids()
                .filter(|&other| other != cat)
                .any(|other| self.graph.neighbors_in(node, other).len() != 1);
            if unresolved {
                missing.push(self.problem.label_of(node).clone());
            }
        }
        Ok(missing)
    }

    /// Number of edges still standing.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True once every item is fully resolved.
    pub fn solved(&self) -> bool {
        self.graph.solved()
    }

    /// Number of registered, not-yet-discharged assertions.
    pub fn assertion_count(&self) -> usize {
        self.registry.len()
    }

    /// A read-only copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        let categories = self
            .problem
            .category_ids()
            .map(|cat| CategoryView {
                name: self.problem.category_name(cat).to_string(),
                labels: self.problem.labels_in(cat).to_vec(),
            })
            .collect();
        Snapshot {
            categories,
            edges: self.graph.edges(),
        }
    }

    /// The full solution as one row per unit: `rows[i][c]` is the label
    /// of category `c` bound to the `i`-th label of the first category.
    /// `None` until the puzzle is solved.
    pub fn solution(&self) -> Option<Vec<Vec<Label>>> {
        if !self.graph.solved() {
            return None;
        }
        let first = self.problem.category_ids().next()?;
        let mut rows = Vec::with_capacity(self.problem.labels_per_category());
        for anchor in self.problem.nodes_in(first) {
            let mut row = Vec::with_capacity(self.problem.category_count());
            for cat in self.problem.category_ids() {
                let bound = self.graph.resolved_in(anchor, cat)?;
                row.push(self.problem.label_of(bound).clone());
            }
            rows.push(row);
        }
        Some(rows)
    }

    fn resolve(&self, item: impl Into<ItemRef>) -> SolverResult<NodeId> {
        Ok(self.problem.resolve(&item.into())?)
    }
}

// ==================== Tests ====================
