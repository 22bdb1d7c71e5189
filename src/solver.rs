//! Query and command surface over a single adjacency matrix.

use log::{info, warn};

use crate::algorithm::apsp::{AllPairsShortestPath, ApspStatus, DistanceMatrix};
use crate::algorithm::dijkstra::{Dijkstra, PathQuery};
use crate::algorithm::floyd_warshall::FloydWarshall;
use crate::algorithm::johnson::Johnson;
use crate::graph::{AdjacencyMatrix, Weight};
use crate::{Error, Result};

/// Owns a graph and the engines that answer questions about it.
///
/// The last successful all-pairs result is kept until the next edge
/// mutation or the next all-pairs run.
#[derive(Debug, Clone)]
pub struct ShortestPaths<W>
where
    W: Weight,
{
    graph: AdjacencyMatrix<W>,
    dijkstra: Dijkstra,
    floyd_warshall: FloydWarshall,
    all_pairs: Option<DistanceMatrix<W>>,
}

impl<W> ShortestPaths<W>
where
    W: Weight,
{
    pub fn new(graph: AdjacencyMatrix<W>) -> Self {
        ShortestPaths {
            graph,
            dijkstra: Dijkstra::new(),
            floyd_warshall: FloydWarshall::new(),
            all_pairs: None,
        }
    }

    /// Set the engine used for single-pair queries
    pub fn with_dijkstra(mut self, dijkstra: Dijkstra) -> Self {
        self.dijkstra = dijkstra;
        self
    }

    /// Set the engine used by `floyd_warshall` and Johnson's pre-pass
    pub fn with_floyd_warshall(mut self, floyd_warshall: FloydWarshall) -> Self {
        self.floyd_warshall = floyd_warshall;
        self
    }

    pub fn graph(&self) -> &AdjacencyMatrix<W> {
        &self.graph
    }

    pub fn into_graph(self) -> AdjacencyMatrix<W> {
        self.graph
    }

    pub fn num_vertices(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn num_edges(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn density(&self) -> f64 {
        self.graph.density()
    }

    pub fn is_connected(&self) -> bool {
        self.graph.is_connected()
    }

    pub fn adjacent(&self, x: usize, y: usize) -> bool {
        self.graph.adjacent(x, y)
    }

    pub fn weight(&self, x: usize, y: usize) -> Result<W> {
        self.graph.weight(x, y)
    }

    pub fn set_weight(&mut self, x: usize, y: usize, weight: W) -> Result<()> {
        self.graph.set_weight(x, y, weight)?;
        self.all_pairs = None;
        Ok(())
    }

    pub fn remove_edge(&mut self, x: usize, y: usize) -> Result<bool> {
        let removed = self.graph.remove_edge(x, y)?;
        if removed {
            self.all_pairs = None;
        }
        Ok(removed)
    }

    /// Shortest distance and path between two vertices on the plain weights
    pub fn dijkstra(&self, source: usize, target: usize) -> Result<PathQuery<W>> {
        self.dijkstra.shortest_path(&self.graph, source, target, None)
    }

    /// Runs Floyd-Warshall and keeps the distances on success
    pub fn floyd_warshall(&mut self) -> Result<ApspStatus> {
        let engine = self.floyd_warshall.clone();
        self.run_all_pairs(&engine)
    }

    /// Runs Johnson's algorithm and keeps the distances on success
    pub fn johnson(&mut self) -> Result<ApspStatus> {
        let engine = Johnson::new().with_floyd_warshall(self.floyd_warshall.clone());
        self.run_all_pairs(&engine)
    }

    fn run_all_pairs<A>(&mut self, algorithm: &A) -> Result<ApspStatus>
    where
        A: AllPairsShortestPath<W>,
    {
        self.all_pairs = None;
        match algorithm.all_pairs(&self.graph) {
            Ok(distances) => {
                info!("{} finished on {} vertices", algorithm.name(), self.graph.vertex_count());
                self.all_pairs = Some(distances);
                Ok(ApspStatus::Ok)
            }
            Err(Error::NegativeCycle) => {
                warn!("{} aborted: negative-weight cycle", algorithm.name());
                Ok(ApspStatus::NegativeCycle)
            }
            Err(e) => Err(e),
        }
    }

    /// Last all-pairs result, if the last run succeeded and the graph has
    /// not changed since
    pub fn all_pairs(&self) -> Option<&DistanceMatrix<W>> {
        self.all_pairs.as_ref()
    }

    /// Smallest distance between two distinct vertices in the last
    /// all-pairs result
    pub fn shortest_shortest_path(&self) -> Option<W> {
        self.all_pairs.as_ref().and_then(|d| d.shortest_shortest_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver() -> ShortestPaths<i64> {
        let g = AdjacencyMatrix::from_edges(4, vec![(0, 1, 1), (1, 2, 2), (0, 2, 5)]).unwrap();
        ShortestPaths::new(g)
    }

    #[test]
    fn exposes_graph_queries() {
        let s = solver();
        assert_eq!(s.num_vertices(), 4);
        assert_eq!(s.num_edges(), 3);
        assert!(s.adjacent(0, 1));
        assert_eq!(s.weight(0, 2).unwrap(), 5);
        assert!(!s.is_connected());
    }

    #[test]
    fn mutation_discards_all_pairs_result() {
        let mut s = solver();
        assert_eq!(s.floyd_warshall().unwrap(), ApspStatus::Ok);
        assert_eq!(s.shortest_shortest_path(), Some(1));

        s.set_weight(2, 3, -1).unwrap();
        assert!(s.all_pairs().is_none());
        assert_eq!(s.johnson().unwrap(), ApspStatus::Ok);
        assert_eq!(s.shortest_shortest_path(), Some(-1));
        assert_eq!(s.all_pairs().unwrap().get(0, 3), Some(2));
    }

    #[test]
    fn negative_cycle_leaves_no_result() {
        let mut s = solver();
        s.set_weight(2, 0, -4).unwrap();
        assert_eq!(s.floyd_warshall().unwrap(), ApspStatus::NegativeCycle);
        assert!(s.all_pairs().is_none());
        assert_eq!(s.johnson().unwrap(), ApspStatus::NegativeCycle);
        assert_eq!(s.shortest_shortest_path(), None);
    }

    #[test]
    fn strict_dijkstra_reports_unreachable() {
        let s = solver().with_dijkstra(Dijkstra::new().with_strict_unreachable(true));
        assert!(matches!(
            s.dijkstra(0, 3),
            Err(Error::UnreachableTarget { from: 0, to: 3 })
        ));
    }
}
