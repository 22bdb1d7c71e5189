use log::{debug, info};

use crate::algorithm::apsp::{AllPairsShortestPath, DistanceMatrix};
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::floyd_warshall::FloydWarshall;
use crate::algorithm::potentials::Potentials;
use crate::graph::{AdjacencyMatrix, ApspPlanes, Plane, Weight};
use crate::Result;

/// Johnson's all-pairs shortest paths for graphs with negative edges.
///
/// A virtual source with zero-weight edges to every vertex is added, the
/// row-restricted Floyd-Warshall pass computes its distances, and those
/// become vertex potentials. Dijkstra then runs from every vertex on the
/// reweighted (non-negative) costs.
#[derive(Debug, Clone, Default)]
pub struct Johnson {
    floyd_warshall: FloydWarshall,
    dijkstra: Dijkstra,
}

impl Johnson {
    /// Creates a new Johnson instance with default engines
    pub fn new() -> Self {
        Johnson::default()
    }

    /// Set the engine used for the potential pre-pass
    pub fn with_floyd_warshall(mut self, floyd_warshall: FloydWarshall) -> Self {
        self.floyd_warshall = floyd_warshall;
        self
    }

    /// Distances from the virtual source to every real vertex.
    ///
    /// Fails with `Error::NegativeCycle` when the graph has one, in which
    /// case no potentials exist.
    pub fn potentials<W>(&self, graph: &AdjacencyMatrix<W>) -> Result<Potentials<W>>
    where
        W: Weight,
    {
        let mut planes = ApspPlanes::with_virtual_source(graph)?;
        self.floyd_warshall.run(&mut planes, true)?;

        let values = (1..planes.size())
            .map(|v| planes.at(0, v, Plane::Previous))
            .collect::<Vec<_>>();
        debug!("potentials: {:?}", values);

        Ok(Potentials::new(values))
    }

    /// All-pairs distances on the original weights.
    ///
    /// One reduced-cost Dijkstra scan per source yields the whole row, which
    /// gives the same distances as one query per ordered pair.
    pub fn compute<W>(&self, graph: &AdjacencyMatrix<W>) -> Result<DistanceMatrix<W>>
    where
        W: Weight,
    {
        let potentials = self.potentials(graph)?;
        let n = graph.vertex_count();
        let mut distances = DistanceMatrix::new(n);

        for source in 0..n {
            let result = self.dijkstra.scan(graph, source, Some(&potentials))?;
            for (target, distance) in result.distances.into_iter().enumerate() {
                if target != source {
                    distances.set(source, target, distance);
                }
            }
        }

        info!(
            "johnson finished on {} vertices, shortest-shortest path {:?}",
            n,
            distances.shortest_shortest_path()
        );
        Ok(distances)
    }
}

impl<W> AllPairsShortestPath<W> for Johnson
where
    W: Weight,
{
    fn all_pairs(&self, graph: &AdjacencyMatrix<W>) -> Result<DistanceMatrix<W>> {
        self.compute(graph)
    }

    fn name(&self) -> &'static str {
        "Johnson"
    }
}
