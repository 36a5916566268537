//! Possible-pairing storage and implication propagation.

use gridlock_core::{CategoryId, GraphError, GraphResult, NodeId, Problem};
use tracing::{debug, error, trace};

/// The outcome of a mutating graph operation.
///
/// `touched` lists every node that lost at least one edge, with repeats;
/// callers deduplicate if they care.
#[derive(Debug, Default, Clone)]
pub struct Mutation {
    /// Number of edges removed.
    pub removed: usize,
    /// Endpoints of every removed edge.
    pub touched: Vec<NodeId>,
}

impl Mutation {
    fn record(&mut self, u: NodeId, v: NodeId) {
        self.removed += 1;
        self.touched.push(u);
        self.touched.push(v);
    }

    /// Fold another mutation into this one.
    pub fn merge(&mut self, other: Mutation) {
        self.removed += other.removed;
        self.touched.extend(other.touched);
    }
}

/// The possible-pairing graph.
///
/// Nodes are the `m * n` (category, label) pairs of a [`Problem`]; an edge
/// between two nodes of different categories means the two labels could
/// still co-occur in one solution row. Edges are only ever severed, never
/// added, so every operation moves the graph monotonically toward a
/// solution (or a contradiction).
#[derive(Debug)]
pub struct LabelGraph<'p> {
    problem: &'p Problem,
    /// Symmetric adjacency matrix. Same-category entries stay false.
    rows: Vec<Vec<bool>>,
    edge_count: usize,
}

impl<'p> LabelGraph<'p> {
    /// Create the fully-connected graph for a problem: every cross-category
    /// pairing starts out possible.
    pub fn new(problem: &'p Problem) -> Self {
        let total = problem.node_count();
        let n = problem.labels_per_category();
        let mut rows = vec![vec![true; total]; total];
        for (u, row) in rows.iter_mut().enumerate() {
            let block = u / n;
            for (v, cell) in row.iter_mut().enumerate() {
                if v / n == block {
                    *cell = false;
                }
            }
        }
        let m = problem.category_count();
        let edge_count = m * n * n * (m - 1) / 2;
        debug!(categories = m, labels = n, edges = edge_count, "new graph");
        Self {
            problem,
            rows,
            edge_count,
        }
    }

    /// The problem this graph was built for.
    pub fn problem(&self) -> &'p Problem {
        self.problem
    }

    /// Number of edges remaining.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edge count of a fully-resolved graph: `n * m * (m - 1) / 2`.
    pub fn terminal_edge_count(&self) -> usize {
        let m = self.problem.category_count();
        let n = self.problem.labels_per_category();
        n * m * (m - 1) / 2
    }

    /// Whether the graph has decomposed into one clique per solution row.
    pub fn solved(&self) -> bool {
        self.edge_count == self.terminal_edge_count()
    }

    /// Whether a pairing between two nodes is still possible. Defined as
    /// false for same-category pairs and for `u == v`.
    pub fn edge_exists(&self, u: NodeId, v: NodeId) -> bool {
        u != v
            && self.problem.category_of(u) != self.problem.category_of(v)
            && self.rows[u.index()][v.index()]
    }

    /// Surviving candidates for `u` in a category.
    ///
    /// A node trivially occupies its own slot, so asking for `u`'s
    /// candidates within its own category yields `u` itself.
    pub fn neighbors_in(&self, u: NodeId, cat: CategoryId) -> Vec<NodeId> {
        if self.problem.category_of(u) == cat {
            return vec![u];
        }
        self.problem
            .nodes_in(cat)
            .filter(|v| self.rows[u.index()][v.index()])
            .collect()
    }

    /// The unique candidate for `u` in a category, if exactly one survives.
    pub fn resolved_in(&self, u: NodeId, cat: CategoryId) -> Option<NodeId> {
        let neighbors = self.neighbors_in(u, cat);
        match neighbors.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    // ==================== Severing Operations ====================

    /// Sever a single pairing and propagate the implications.
    ///
    /// Severing an already-severed (or same-category) pairing is a no-op,
    /// not an error. Severing a node from itself is an error.
    pub fn sever(&mut self, u: NodeId, v: NodeId) -> GraphResult<Mutation> {
        if u == v {
            return Err(GraphError::SelfPairing(u));
        }
        let mut mutation = Mutation::default();
        if !self.edge_exists(u, v) {
            return Ok(mutation);
        }
        let mut work = Vec::new();
        self.remove_checked(u, v, &mut mutation, &mut work)?;
        self.implications(work, &mut mutation)?;
        Ok(mutation)
    }

    /// Establish a forced 1-to-1 binding between `u` and `v`.
    ///
    /// Severs every other edge from `u` into `v`'s category and from `v`
    /// into `u`'s category, then propagates; the propagation intersects
    /// their remaining neighborhoods in every other category.
    pub fn match_one(&mut self, u: NodeId, v: NodeId) -> GraphResult<Mutation> {
        if u == v {
            return Ok(Mutation::default());
        }
        let cat_u = self.problem.category_of(u);
        let cat_v = self.problem.category_of(v);
        if cat_u == cat_v {
            return Err(GraphError::SameCategory { a: u, b: v });
        }
        if !self.edge_exists(u, v) {
            error!(u = %u, v = %v, edges = self.edge_count, "binding an already-excluded pair");
            return Err(GraphError::Contradiction {
                node: u,
                category: cat_v,
            });
        }
        debug!(u = %self.problem.describe(u), v = %self.problem.describe(v), "match one");

        let mut mutation = Mutation::default();
        let mut work = vec![(u, cat_v), (v, cat_u)];
        for q in self.problem.nodes_in(cat_v) {
            if q != v && self.rows[u.index()][q.index()] {
                self.remove_checked(u, q, &mut mutation, &mut work)?;
            }
        }
        for q in self.problem.nodes_in(cat_u) {
            if q != u && self.rows[v.index()][q.index()] {
                self.remove_checked(v, q, &mut mutation, &mut work)?;
            }
        }
        self.implications(work, &mut mutation)?;
        Ok(mutation)
    }

    /// Restrict `u` to one of `targets`, all from a single category.
    ///
    /// Severs `u`'s edges to every node of that category outside `targets`
    /// as one batch, then propagates.
    pub fn match_many(&mut self, u: NodeId, targets: &[NodeId]) -> GraphResult<Mutation> {
        let first = *targets.first().ok_or(GraphError::NoTargets(u))?;
        let cat_t = self.problem.category_of(first);
        let cat_u = self.problem.category_of(u);
        if cat_t == cat_u {
            return Err(GraphError::SameCategory { a: u, b: first });
        }
        debug!(u = %self.problem.describe(u), targets = targets.len(), "match many");

        let mut mutation = Mutation::default();
        let mut work = vec![(u, cat_t)];
        for q in self.problem.nodes_in(cat_t) {
            if !targets.contains(&q) && self.rows[u.index()][q.index()] {
                self.remove_checked(u, q, &mut mutation, &mut work)?;
            }
        }
        self.implications(work, &mut mutation)?;
        Ok(mutation)
    }

    // ==================== Propagation ====================

    /// Remove one edge, record it, and fail fast if either endpoint just
    /// lost its last candidate in the other's category.
    fn remove_checked(
        &mut self,
        u: NodeId,
        v: NodeId,
        mutation: &mut Mutation,
        work: &mut Vec<(NodeId, CategoryId)>,
    ) -> GraphResult<()> {
        self.rows[u.index()][v.index()] = false;
        self.rows[v.index()][u.index()] = false;
        self.edge_count -= 1;
        mutation.record(u, v);
        trace!(u = %u, v = %v, edges = self.edge_count, "severed");
        work.push((u, self.problem.category_of(v)));
        work.push((v, self.problem.category_of(u)));
        self.check_not_empty(u, self.problem.category_of(v))?;
        self.check_not_empty(v, self.problem.category_of(u))?;
        Ok(())
    }

    fn check_not_empty(&self, u: NodeId, cat: CategoryId) -> GraphResult<()> {
        if self.neighbors_in(u, cat).is_empty() {
            error!(
                node = %self.problem.describe(u),
                category = self.problem.category_name(cat),
                edges = self.edge_count,
                "contradiction discovered"
            );
            return Err(GraphError::Contradiction { node: u, category: cat });
        }
        Ok(())
    }

    /// Drive the implications of the seeded severances to a fixed point.
    ///
    /// Each work item is a (node, category) pair to re-check: the node may
    /// only keep a candidate in that category if at least one of its
    /// surviving partners there also allows it elsewhere. Severing an edge
    /// queues both directions for re-checking; the loop terminates because
    /// every pass removes at least one edge and edges only ever decrease.
    /// Processing order does not affect the resulting fixed point.
    fn implications(
        &mut self,
        mut work: Vec<(NodeId, CategoryId)>,
        mutation: &mut Mutation,
    ) -> GraphResult<()> {
        let total = self.problem.node_count();
        while let Some((pos, cat)) = work.pop() {
            if self.problem.category_of(pos) == cat {
                continue;
            }
            let partners = self.neighbors_in(pos, cat);
            self.check_not_empty(pos, cat)?;

            // Union of everything the surviving partners still allow,
            // including the partners themselves.
            let mut allowed = vec![false; total];
            for &p in &partners {
                allowed[p.index()] = true;
                for q in 0..total {
                    if self.rows[p.index()][q] {
                        allowed[q] = true;
                    }
                }
            }

            for q in 0..total {
                if self.rows[pos.index()][q] && !allowed[q] {
                    self.remove_checked(pos, NodeId::new(q as u32), mutation, &mut work)?;
                }
            }

            // A unique partner means a 1-to-1 binding: the partner's own
            // neighborhood must shrink to the intersection as well.
            if let [mate] = partners.as_slice() {
                let mate = *mate;
                for q in 0..total {
                    if self.rows[mate.index()][q]
                        && q != pos.index()
                        && !self.rows[pos.index()][q]
                    {
                        self.remove_checked(mate, NodeId::new(q as u32), mutation, &mut work)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// All surviving edges, each reported once with the lower id first.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let total = self.problem.node_count();
        let mut out = Vec::with_capacity(self.edge_count);
        for u in 0..total {
            for v in (u + 1)..total {
                if self.rows[u][v] {
                    out.push((NodeId::new(u as u32), NodeId::new(v as u32)));
                }
            }
        }
        out
    }
}
