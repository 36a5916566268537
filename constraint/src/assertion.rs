//! Deferred ordering assertions.

use std::ops::Bound;

use gridlock_core::{CategoryId, NodeId};
use gridlock_graph::{LabelGraph, Mutation};
use tracing::{debug, error};

use crate::error::{ConstraintError, ConstraintResult};

/// The bound an assertion places on `position(Y) - position(X)`, measured
/// through the ordering category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    /// The numeric difference is exactly `k`. `k = 1` models "directly
    /// after".
    Exact(i64),
    /// The numeric difference lies in an interval; either end may be open
    /// or unbounded.
    Range {
        lower: Bound<i64>,
        upper: Bound<i64>,
    },
    /// The difference in declaration-order rank is at least one and at most
    /// `width` if given. This is the "bigger than / smaller than" bound for
    /// categories whose labels are ordered but not numerically
    /// subtractable (shirt sizes, ranks).
    Banded { width: Option<i64> },
}

impl BoundKind {
    /// Whether a difference `d = measure(Y) - measure(X)` satisfies the
    /// bound in the forward direction.
    fn admits(&self, d: i64) -> bool {
        match *self {
            BoundKind::Exact(k) => d == k,
            BoundKind::Range { lower, upper } => {
                let lower_ok = match lower {
                    Bound::Included(l) => d >= l,
                    Bound::Excluded(l) => d > l,
                    Bound::Unbounded => true,
                };
                let upper_ok = match upper {
                    Bound::Included(u) => d <= u,
                    Bound::Excluded(u) => d < u,
                    Bound::Unbounded => true,
                };
                lower_ok && upper_ok
            }
            BoundKind::Banded { width } => d >= 1 && width.map_or(true, |w| d <= w),
        }
    }

    /// Whether this bound compares declaration-order ranks rather than
    /// numeric label values.
    fn uses_ranks(&self) -> bool {
        matches!(self, BoundKind::Banded { .. })
    }
}

/// Whether the bound fixes which endpoint is ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Y must be ahead of X per the bound.
    Forward,
    /// Either orientation satisfies; adjacency is `Exact(k)` + `Symmetric`.
    Symmetric,
}

/// The outcome of one re-evaluation pass.
#[derive(Debug, Default)]
pub struct Reevaluation {
    /// Edges severed (with the nodes they touched) while narrowing.
    pub mutation: Mutation,
    /// True once the assertion can never act again and may be retired.
    pub discharged: bool,
}

/// A deferred constraint between two endpoint nodes, mediated by an ordered
/// category.
///
/// All assertion state lives in the graph; the assertion itself is an
/// immutable predicate, which makes re-evaluation idempotent (severing an
/// already-severed edge is a no-op).
#[derive(Debug, Clone)]
pub struct Assertion {
    x: NodeId,
    y: NodeId,
    ordering: CategoryId,
    bound: BoundKind,
    direction: Direction,
}

impl Assertion {
    /// Create an assertion; endpoints must be distinct nodes.
    pub fn new(
        x: NodeId,
        y: NodeId,
        ordering: CategoryId,
        bound: BoundKind,
        direction: Direction,
    ) -> Self {
        Self {
            x,
            y,
            ordering,
            bound,
            direction,
        }
    }

    /// First endpoint.
    pub fn x(&self) -> NodeId {
        self.x
    }

    /// Second endpoint.
    pub fn y(&self) -> NodeId {
        self.y
    }

    /// The mediating ordering category.
    pub fn ordering(&self) -> CategoryId {
        self.ordering
    }

    fn measure(&self, graph: &LabelGraph<'_>, node: NodeId) -> ConstraintResult<i64> {
        let problem = graph.problem();
        if self.bound.uses_ranks() {
            Ok(problem.rank_of(node))
        } else {
            problem
                .value_of(node)
                .ok_or(ConstraintError::NonNumericLabels(self.ordering))
        }
    }

    fn holds(&self, mx: i64, my: i64) -> bool {
        match self.direction {
            Direction::Forward => self.bound.admits(my - mx),
            Direction::Symmetric => self.bound.admits(my - mx) || self.bound.admits(mx - my),
        }
    }

    /// Re-evaluate the assertion against the current graph.
    ///
    /// Severs every candidate of either endpoint that no longer has a
    /// consistent partner on the other side, looping until a pass removes
    /// nothing. Two distinct endpoints can never share one slot, so
    /// identical candidate pairs never count as consistent.
    pub fn reevaluate(&self, graph: &mut LabelGraph<'_>) -> ConstraintResult<Reevaluation> {
        let mut out = Reevaluation::default();

        // A fully-resolved pair is judged before any narrowing, so a
        // violated bound surfaces as a bound violation rather than as a
        // severance contradiction.
        self.check_discharge(graph, &mut out)?;
        if out.discharged {
            return Ok(out);
        }

        loop {
            let removed_before = out.mutation.removed;

            let xs = graph.neighbors_in(self.x, self.ordering);
            let ys = graph.neighbors_in(self.y, self.ordering);
            for &px in &xs {
                let mx = self.measure(graph, px)?;
                let mut consistent = false;
                for &py in &ys {
                    if py != px && self.holds(mx, self.measure(graph, py)?) {
                        consistent = true;
                        break;
                    }
                }
                if !consistent {
                    // An endpoint inside the ordering category is its own
                    // fixed slot; running out of partners there is a
                    // violation, not a severance.
                    if px == self.x {
                        return Err(self.violation(graph));
                    }
                    out.mutation.merge(graph.sever(self.x, px)?);
                }
            }

            let xs = graph.neighbors_in(self.x, self.ordering);
            let ys = graph.neighbors_in(self.y, self.ordering);
            for &py in &ys {
                let my = self.measure(graph, py)?;
                let mut consistent = false;
                for &px in &xs {
                    if px != py && self.holds(self.measure(graph, px)?, my) {
                        consistent = true;
                        break;
                    }
                }
                if !consistent {
                    if py == self.y {
                        return Err(self.violation(graph));
                    }
                    out.mutation.merge(graph.sever(self.y, py)?);
                }
            }

            if out.mutation.removed == removed_before {
                break;
            }
        }

        self.check_discharge(graph, &mut out)?;
        Ok(out)
    }

    fn violation(&self, graph: &LabelGraph<'_>) -> ConstraintError {
        error!(
            x = %graph.problem().describe(self.x),
            y = %graph.problem().describe(self.y),
            category = graph.problem().category_name(self.ordering),
            "assertion bound violated"
        );
        ConstraintError::BoundViolation {
            x: self.x,
            y: self.y,
            category: self.ordering,
        }
    }

    /// Decide whether the assertion is settled.
    ///
    /// Discharged when both endpoints resolved to a consistent pair, or
    /// when the bound has become vacuous: the candidate sets are disjoint
    /// and every surviving pair satisfies it, so no future narrowing can
    /// ever give this assertion anything to sever.
    fn check_discharge(
        &self,
        graph: &LabelGraph<'_>,
        out: &mut Reevaluation,
    ) -> ConstraintResult<()> {
        let rx = graph.resolved_in(self.x, self.ordering);
        let ry = graph.resolved_in(self.y, self.ordering);
        if let (Some(px), Some(py)) = (rx, ry) {
            if px != py && self.holds(self.measure(graph, px)?, self.measure(graph, py)?) {
                debug!(x = %self.x, y = %self.y, "assertion discharged");
                out.discharged = true;
                return Ok(());
            }
            return Err(self.violation(graph));
        }

        let xs = graph.neighbors_in(self.x, self.ordering);
        let ys = graph.neighbors_in(self.y, self.ordering);
        if xs.iter().any(|px| ys.contains(px)) {
            return Ok(());
        }
        for &px in &xs {
            let mx = self.measure(graph, px)?;
            for &py in &ys {
                if !self.holds(mx, self.measure(graph, py)?) {
                    return Ok(());
                }
            }
        }
        debug!(x = %self.x, y = %self.y, "assertion vacuous, discharged");
        out.discharged = true;
        Ok(())
    }
}
