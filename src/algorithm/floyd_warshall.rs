use log::{debug, trace, warn};

use crate::algorithm::apsp::{AllPairsShortestPath, DistanceMatrix};
use crate::graph::{AdjacencyMatrix, ApspPlanes, Plane, Weight};
use crate::{Error, Result};

/// Floyd-Warshall all-pairs shortest paths over three distance planes.
///
/// Iteration k fills the current plane with
/// `min(previous(i, j), previous(i, k) + previous(k, j))`, then moves it to
/// the previous plane and reseeds current from the initial plane.
#[derive(Debug, Clone)]
pub struct FloydWarshall {
    /// Skip work that cannot change any distance
    early_exit: bool,
}

impl Default for FloydWarshall {
    fn default() -> Self {
        FloydWarshall { early_exit: true }
    }
}

impl FloydWarshall {
    /// Creates a new Floyd-Warshall instance with early exit enabled
    pub fn new() -> Self {
        FloydWarshall::default()
    }

    /// Enable or disable the early-exit optimisations
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    /// Relaxes the planes in place.
    ///
    /// With `restrict_to_first_row` only row 0 is computed, which is what
    /// Johnson's pre-pass needs: the distances from a virtual source at
    /// index 0. On success the answers are on the previous plane.
    pub fn run<W>(&self, planes: &mut ApspPlanes<W>, restrict_to_first_row: bool) -> Result<()>
    where
        W: Weight,
    {
        if restrict_to_first_row {
            self.relax_first_row(planes)
        } else {
            self.relax_all(planes)
        }
    }

    /// Full pass: every vertex takes one turn as the intermediate k.
    fn relax_all<W>(&self, planes: &mut ApspPlanes<W>) -> Result<()>
    where
        W: Weight,
    {
        let n = planes.size();

        for k in 0..n {
            if self.early_exit && !planes.can_route_through(k) {
                trace!("k = {}: no path passes through, skipped", k);
                continue;
            }

            let mut changed = false;
            for i in 0..n {
                for j in 0..n {
                    if relax(planes, i, j, k) {
                        changed = true;
                    }
                    if i == j && planes.at(i, j, Plane::Current) < W::zero() {
                        warn!("negative cycle through vertex {} found at k = {}", i, k);
                        return Err(Error::NegativeCycle);
                    }
                }
            }

            planes.promote(0..n);
            trace!("k = {}: changed = {}", k, changed);
        }

        Ok(())
    }

    /// Row-0 pass. Only the first row is updated, so a single sweep over k
    /// can miss paths whose intermediates appear in decreasing index order.
    /// Sweeps repeat until one changes nothing; since a shortest path has at
    /// most n - 1 edges that takes at most n - 1 sweeps, and a sweep after
    /// that still improving a distance proves a negative cycle.
    fn relax_first_row<W>(&self, planes: &mut ApspPlanes<W>) -> Result<()>
    where
        W: Weight,
    {
        let n = planes.size();

        for sweep in 1..n {
            if !self.sweep_first_row(planes)? && self.early_exit {
                debug!("first row converged after {} sweep(s)", sweep);
                return Ok(());
            }
        }

        if self.sweep_first_row(planes)? {
            warn!("first row still improving after {} sweeps", n - 1);
            return Err(Error::NegativeCycle);
        }

        Ok(())
    }

    fn sweep_first_row<W>(&self, planes: &mut ApspPlanes<W>) -> Result<bool>
    where
        W: Weight,
    {
        let n = planes.size();
        let mut changed = false;

        for k in 1..n {
            for j in 0..n {
                if relax(planes, 0, j, k) {
                    changed = true;
                }
            }
            if planes.at(0, 0, Plane::Current) < W::zero() {
                return Err(Error::NegativeCycle);
            }
            planes.promote(0..1);
        }

        Ok(changed)
    }

    /// Runs a full pass on a fresh plane set built from the matrix
    pub fn compute<W>(&self, graph: &AdjacencyMatrix<W>) -> Result<DistanceMatrix<W>>
    where
        W: Weight,
    {
        let mut planes = ApspPlanes::from_matrix(graph)?;
        self.run(&mut planes, false)?;
        Ok(DistanceMatrix::from_plane(&planes, Plane::Previous, 0))
    }
}

/// Writes `min(previous(i, j), previous(i, k) + previous(k, j))` to the
/// current plane and reports whether the path through k was shorter.
fn relax<W>(planes: &mut ApspPlanes<W>, i: usize, j: usize, k: usize) -> bool
where
    W: Weight,
{
    let inherited = planes.at(i, j, Plane::Previous);
    let through_k = planes
        .at(i, k, Plane::Previous)
        .absorbing_add(planes.at(k, j, Plane::Previous));

    if through_k < inherited {
        planes.put(i, j, Plane::Current, through_k);
        true
    } else {
        planes.put(i, j, Plane::Current, inherited);
        false
    }
}

impl<W> AllPairsShortestPath<W> for FloydWarshall
where
    W: Weight,
{
    fn all_pairs(&self, graph: &AdjacencyMatrix<W>) -> Result<DistanceMatrix<W>> {
        self.compute(graph)
    }

    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::apsp::ApspStatus;

    fn graph(n: usize, edges: Vec<(usize, usize, i64)>) -> AdjacencyMatrix<i64> {
        AdjacencyMatrix::from_edges(n, edges).unwrap()
    }

    #[test]
    fn classic_four_vertex_example() {
        let g = graph(
            4,
            vec![(0, 1, 1), (0, 2, 4), (0, 3, 10), (1, 2, 2), (1, 3, 2), (2, 3, 2)],
        );
        let dist = FloydWarshall::new().compute(&g).unwrap();
        assert_eq!(
            dist.rows(),
            vec![
                vec![Some(0), Some(1), Some(3), Some(3)],
                vec![None, Some(0), Some(2), Some(2)],
                vec![None, None, Some(0), Some(2)],
                vec![None, None, None, Some(0)],
            ]
        );
    }

    #[test]
    fn sums_past_the_weight_range_are_unreachable() {
        let big = i64::MAX / 2 + 10;
        let d = FloydWarshall::new()
            .compute(&graph(3, vec![(0, 1, big), (1, 2, big)]))
            .unwrap();
        assert_eq!(d.get(0, 1), Some(big));
        assert_eq!(d.get(1, 2), Some(big));
        assert_eq!(d.get(0, 2), None);
    }

    #[test]
    fn paths_through_vertex_zero() {
        // 1 -> 0 -> 2 only exists via the first vertex
        let g = graph(3, vec![(1, 0, 2), (0, 2, 3)]);
        for fw in [FloydWarshall::new(), FloydWarshall::new().with_early_exit(false)] {
            let dist = fw.compute(&g).unwrap();
            assert_eq!(dist.get(1, 2), Some(5));
            assert_eq!(dist.get(2, 1), None);
        }
    }

    #[test]
    fn negative_edge_without_cycle() {
        let g = graph(3, vec![(0, 1, 4), (1, 2, -2), (0, 2, 3)]);
        let dist = FloydWarshall::new().compute(&g).unwrap();
        assert_eq!(dist.get(0, 2), Some(2));
        assert_eq!(dist.shortest_shortest_path(), Some(-2));
    }

    #[test]
    fn negative_cycle_is_reported() {
        let g = graph(3, vec![(0, 1, 1), (1, 2, -3), (2, 0, 1)]);
        let err = FloydWarshall::new().compute(&g).unwrap_err();
        assert!(matches!(err, Error::NegativeCycle));
        assert_eq!(
            AllPairsShortestPath::status(&FloydWarshall::new(), &g).unwrap(),
            ApspStatus::NegativeCycle
        );
    }

    #[test]
    fn first_row_handles_decreasing_chains() {
        // Real vertices 2 -> 1 -> 0 with negative weights: index order is
        // the reverse of the path order
        let g = graph(3, vec![(2, 1, -1), (1, 0, -1)]);
        let mut planes = ApspPlanes::with_virtual_source(&g).unwrap();
        FloydWarshall::new().run(&mut planes, true).unwrap();

        assert_eq!(planes.get(0, 3, Plane::Previous).unwrap(), 0);
        assert_eq!(planes.get(0, 2, Plane::Previous).unwrap(), -1);
        assert_eq!(planes.get(0, 1, Plane::Previous).unwrap(), -2);
    }

    #[test]
    fn first_row_detects_negative_cycle() {
        let g = graph(3, vec![(0, 1, 1), (1, 2, -3), (2, 0, 1)]);
        let planes = ApspPlanes::with_virtual_source(&g).unwrap();
        for fw in [FloydWarshall::new(), FloydWarshall::new().with_early_exit(false)] {
            let mut planes = planes.clone();
            assert!(matches!(fw.run(&mut planes, true), Err(Error::NegativeCycle)));
        }
    }
}
