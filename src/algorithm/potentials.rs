use crate::graph::{AdjacencyMatrix, Weight};
use crate::{Error, Result};

/// Per-vertex reweighting values produced by Johnson's pre-pass.
///
/// Once built the vector is never modified. It is handed to Dijkstra
/// explicitly for each call that should run on reduced costs.
#[derive(Debug, Clone, PartialEq)]
pub struct Potentials<W>
where
    W: Weight,
{
    values: Vec<W>,
}

impl<W> Potentials<W>
where
    W: Weight,
{
    /// Wraps one potential per vertex
    pub fn new(values: Vec<W>) -> Self {
        Potentials { values }
    }

    /// Number of vertices covered
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Potential of a vertex
    pub fn get(&self, vertex: usize) -> Option<W> {
        self.values.get(vertex).copied()
    }

    pub fn as_slice(&self) -> &[W] {
        &self.values
    }

    /// Fails unless there is exactly one potential per vertex
    pub fn check_len(&self, vertex_count: usize) -> Result<()> {
        if self.values.len() != vertex_count {
            return Err(Error::PotentialMismatch {
                expected: vertex_count,
                actual: self.values.len(),
            });
        }
        Ok(())
    }

    /// `w(u, v) + P[u] - P[v]`
    ///
    /// Both vertices must be in range; callers check the length first.
    pub(crate) fn reduced_weight(&self, from: usize, to: usize, weight: W) -> W {
        weight
            .absorbing_add(self.values[from])
            .absorbing_sub(self.values[to])
    }

    /// Undoes the reweighting of a distance found on reduced costs
    pub(crate) fn restore_distance(&self, source: usize, target: usize, reduced: W) -> W {
        reduced
            .absorbing_sub(self.values[source])
            .absorbing_add(self.values[target])
    }

    /// Returns true if every edge of the graph has a non-negative reduced weight
    pub fn is_feasible_for(&self, graph: &AdjacencyMatrix<W>) -> bool {
        self.values.len() == graph.vertex_count()
            && graph
                .edges()
                .all(|(u, v, w)| self.reduced_weight(u, v, w) >= W::zero())
    }
}
