use log::{debug, trace};

use crate::algorithm::path::build_path;
use crate::algorithm::potentials::Potentials;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm with a linear vertex scan instead of a heap.
///
/// Each of the V rounds scans every vertex for the closest unvisited one,
/// which costs O(V²) overall and suits dense adjacency matrices.
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    /// Report `Error::UnreachableTarget` instead of a zero distance
    strict_unreachable: bool,
}

/// Answer to a single source -> target query
#[derive(Debug, Clone, PartialEq)]
pub struct PathQuery<W>
where
    W: Weight,
{
    pub source: usize,
    pub target: usize,
    /// Shortest distance, or zero when the target was not reached
    pub distance: W,
    /// Vertices from source to target inclusive; empty when the path was not
    /// built (same vertex, unreached target, or a reduced-cost query)
    pub path: Vec<usize>,
    /// Whether the target is reachable from the source
    pub reached: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Make unreachable targets an error rather than a distance of zero
    pub fn with_strict_unreachable(mut self, strict: bool) -> Self {
        self.strict_unreachable = strict;
        self
    }

    /// Computes distances from `source` to every vertex.
    ///
    /// With potentials, relaxation uses the reduced cost
    /// `dist[cur] + w(cur, j) + P[cur] - P[j]` and every finished distance is
    /// mapped back to the original weights.
    pub fn scan<W, G>(
        &self,
        graph: &G,
        source: usize,
        potentials: Option<&Potentials<W>>,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        if let Some(potentials) = potentials {
            potentials.check_len(n)?;
        }

        let mut tentative = vec![W::infinity(); n];
        let mut visited = vec![false; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];

        tentative[source] = W::zero();

        for _ in 0..n {
            // Closest unvisited vertex; the first one seen wins ties
            let mut closest: Option<usize> = None;
            for v in 0..n {
                if visited[v] {
                    continue;
                }
                let closer = match closest {
                    None => true,
                    Some(best) => tentative[v] < tentative[best],
                };
                if closer {
                    closest = Some(v);
                }
            }

            let current = match closest {
                Some(v) => v,
                None => break,
            };
            visited[current] = true;

            // Everything left is unreachable
            if tentative[current].is_infinity() {
                trace!("scan from {} stopped at unreachable vertex {}", source, current);
                break;
            }

            for (next, weight) in graph.outgoing_edges(current) {
                if visited[next] {
                    continue;
                }

                let step = match potentials {
                    Some(p) => p.reduced_weight(current, next, weight),
                    None => weight,
                };
                let candidate = tentative[current].absorbing_add(step);

                if candidate < tentative[next] {
                    tentative[next] = candidate;
                    predecessors[next] = Some(current);
                }
            }
        }

        let distances = tentative
            .into_iter()
            .enumerate()
            .map(|(v, d)| {
                let d = match potentials {
                    Some(p) if !d.is_infinity() => p.restore_distance(source, v, d),
                    _ => d,
                };
                if d.is_infinity() {
                    None
                } else {
                    Some(d)
                }
            })
            .collect();

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }

    /// Shortest distance and path between two vertices.
    ///
    /// `source == target` answers zero with an empty path without scanning.
    /// Reduced-cost queries (with potentials) skip path reconstruction.
    pub fn shortest_path<W, G>(
        &self,
        graph: &G,
        source: usize,
        target: usize,
        potentials: Option<&Potentials<W>>,
    ) -> Result<PathQuery<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }

        if source == target {
            return Ok(PathQuery {
                source,
                target,
                distance: W::zero(),
                path: Vec::new(),
                reached: true,
            });
        }

        let result = self.scan(graph, source, potentials)?;

        let (distance, reached) = match result.distances[target] {
            Some(distance) => (distance, true),
            None if self.strict_unreachable => {
                return Err(Error::UnreachableTarget {
                    from: source,
                    to: target,
                });
            }
            None => {
                debug!("no path from {} to {}, reporting distance 0", source, target);
                (W::zero(), false)
            }
        };

        let path = if potentials.is_none() {
            build_path(&result.predecessors, source, target)
        } else {
            Vec::new()
        };

        Ok(PathQuery {
            source,
            target,
            distance,
            path,
            reached,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.scan(graph, source, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyMatrix;

    #[test]
    fn equal_distances_prefer_lower_index() {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3 both cost 2
        let g = AdjacencyMatrix::from_edges(
            4,
            vec![(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)],
        )
        .unwrap();
        let query = Dijkstra::new().shortest_path(&g, 0, 3, None).unwrap();
        assert_eq!(query.distance, 2);
        assert_eq!(query.path, vec![0, 1, 3]);
    }

    #[test]
    fn potentials_are_undone_in_reported_distances() {
        let g = AdjacencyMatrix::from_edges(3, vec![(0, 1, 2), (1, 2, -1), (0, 2, 4)]).unwrap();
        // Feasible: reduced weights are 3, 0 and 6
        let p = Potentials::new(vec![0, -1, -2]);
        assert!(p.is_feasible_for(&g));

        let query = Dijkstra::new().shortest_path(&g, 0, 2, Some(&p)).unwrap();
        assert_eq!(query.distance, 1);
        assert!(query.reached);
        assert!(query.path.is_empty());
    }

    #[test]
    fn mismatched_potentials_are_rejected() {
        let g = AdjacencyMatrix::<i64>::new(3).unwrap();
        let p = Potentials::new(vec![0, 0]);
        let err = Dijkstra::new().scan(&g, 0, Some(&p)).unwrap_err();
        assert!(matches!(err, Error::PotentialMismatch { expected: 3, actual: 2 }));
    }

    #[test]
    fn near_max_weights_do_not_wrap() {
        let big = i64::MAX / 2 + 10;
        let g = AdjacencyMatrix::from_edges(3, vec![(0, 1, big), (1, 2, big)]).unwrap();

        let query = Dijkstra::new().shortest_path(&g, 0, 2, None).unwrap();
        assert!(!query.reached);
        assert_eq!(query.distance, 0);

        let result = Dijkstra::new().scan(&g, 0, None).unwrap();
        assert_eq!(result.distances, vec![Some(0), Some(big), None]);
    }

    #[test]
    fn scan_reports_every_vertex() {
        let g = AdjacencyMatrix::from_edges(3, vec![(0, 1, 5)]).unwrap();
        let result = Dijkstra::new().scan(&g, 0, None).unwrap();
        assert_eq!(result.distances, vec![Some(0), Some(5), None]);
        assert_eq!(result.predecessors, vec![None, Some(0), None]);
        assert_eq!(result.reached_count(), 2);
    }
}
