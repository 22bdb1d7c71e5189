use log::trace;
use num_traits::{One, Zero};

use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result, MIN_VERTICES};

/// A directed graph stored as a dense V×V adjacency matrix.
///
/// A stored value of zero means "no edge", so a genuine zero-weight edge
/// cannot be represented. Writing zero over an edge removes it.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix<W>
where
    W: Weight,
{
    /// Number of vertices (rows and columns)
    vertex_count: usize,

    /// Number of non-zero entries
    edge_count: usize,

    /// Row-major weights: entry (x, y) lives at x * vertex_count + y
    weights: Vec<W>,
}

impl<W> AdjacencyMatrix<W>
where
    W: Weight,
{
    /// Creates an edgeless matrix with the given number of vertices
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_VERTICES {
            return Err(Error::InvalidSize(size));
        }

        let cells = size.checked_mul(size).ok_or(Error::InvalidSize(size))?;
        Ok(AdjacencyMatrix {
            vertex_count: size,
            edge_count: 0,
            weights: vec![W::zero(); cells],
        })
    }

    /// Creates a matrix and populates it from (tail, head, weight) triples
    pub fn from_edges<I>(size: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut matrix = Self::new(size)?;
        for (tail, head, weight) in edges {
            matrix.set_weight(tail, head, weight)?;
        }
        Ok(matrix)
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of stored edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.vertex_count {
            return Err(Error::InvalidVertex(x));
        }
        if y >= self.vertex_count {
            return Err(Error::InvalidVertex(y));
        }
        Ok(x * self.vertex_count + y)
    }

    fn row_slice(&self, x: usize) -> Result<&[W]> {
        if x >= self.vertex_count {
            return Err(Error::InvalidVertex(x));
        }
        let start = x * self.vertex_count;
        Ok(&self.weights[start..start + self.vertex_count])
    }

    /// Returns true if an x -> y edge exists. Out-of-range indices are never adjacent.
    pub fn adjacent(&self, x: usize, y: usize) -> bool {
        self.index(x, y)
            .map(|idx| !self.weights[idx].is_zero())
            .unwrap_or(false)
    }

    /// Returns the stored x -> y value, zero when there is no edge
    pub fn weight(&self, x: usize, y: usize) -> Result<W> {
        let idx = self.index(x, y)?;
        Ok(self.weights[idx])
    }

    /// Sets the x -> y value, keeping the edge count in step with the
    /// zero sentinel
    pub fn set_weight(&mut self, x: usize, y: usize, weight: W) -> Result<()> {
        let idx = self.index(x, y)?;
        let existed = !self.weights[idx].is_zero();
        let exists = !weight.is_zero();

        match (existed, exists) {
            (false, true) => self.edge_count += 1,
            (true, false) => self.edge_count -= 1,
            _ => {}
        }

        self.weights[idx] = weight;
        Ok(())
    }

    /// Adds an x -> y edge of unit weight
    pub fn add_edge(&mut self, x: usize, y: usize) -> Result<()> {
        self.set_weight(x, y, W::one())
    }

    /// Removes the x -> y edge. Returns false if there was nothing to remove.
    pub fn remove_edge(&mut self, x: usize, y: usize) -> Result<bool> {
        let existed = self.adjacent(x, y);
        self.set_weight(x, y, W::zero())?;
        Ok(existed)
    }

    /// Indices of the vertices reachable from x over a single edge
    pub fn neighbors(&self, x: usize) -> Result<Vec<usize>> {
        Ok(self
            .row_slice(x)?
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_zero())
            .map(|(y, _)| y)
            .collect())
    }

    /// Weights of the non-zero entries in row x, in column order
    pub fn neighbor_weights(&self, x: usize) -> Result<Vec<W>> {
        Ok(self
            .row_slice(x)?
            .iter()
            .copied()
            .filter(|w| !w.is_zero())
            .collect())
    }

    /// Iterates every stored edge as (tail, head, weight) in row-major order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        let n = self.vertex_count;
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_zero())
            .map(move |(idx, w)| (idx / n, idx % n, *w))
    }

    /// Edges divided by the number of matrix entries (V²)
    pub fn density(&self) -> f64 {
        self.edge_count as f64 / (self.vertex_count * self.vertex_count) as f64
    }

    /// Returns true if every vertex is reachable from vertex 0 along
    /// directed edges.
    ///
    /// This is reachability from the first vertex, not strong or weak
    /// connectivity: a graph whose only edges point into vertex 0 is reported
    /// as disconnected.
    pub fn is_connected(&self) -> bool {
        let mut reached = vec![false; self.vertex_count];
        let mut stack = vec![0];
        let mut count = 0;

        reached[0] = true;
        while let Some(node) = stack.pop() {
            count += 1;
            // Push in reverse so lower indices are explored first
            for next in (0..self.vertex_count).rev() {
                if !reached[next] && self.adjacent(node, next) {
                    reached[next] = true;
                    stack.push(next);
                }
            }
        }

        trace!("reached {} of {} vertices from vertex 0", count, self.vertex_count);
        count == self.vertex_count
    }
}

impl<W> Graph<W> for AdjacencyMatrix<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.row_slice(vertex) {
            Ok(row) => Box::new(
                row.iter()
                    .copied()
                    .enumerate()
                    .filter(|(_, w)| !w.is_zero()),
            ),
            Err(_) => Box::new(std::iter::empty()),
        }
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if vertex >= self.vertex_count {
            return Box::new(std::iter::empty());
        }
        let n = self.vertex_count;
        Box::new(
            (0..n)
                .map(move |x| (x, self.weights[x * n + vertex]))
                .filter(|(_, w)| !w.is_zero()),
        )
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacent(from, to)
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.weight(from, to).ok().filter(|w| !w.is_zero())
    }
}

impl<W> MutableGraph<W> for AdjacencyMatrix<W>
where
    W: Weight,
{
    fn set_edge_weight(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.set_weight(from, to, weight)
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool> {
        AdjacencyMatrix::remove_edge(self, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdjacencyMatrix<i64> {
        AdjacencyMatrix::from_edges(4, vec![(0, 1, 1), (1, 2, 2), (0, 2, 5)]).unwrap()
    }

    #[test]
    fn rejects_too_small_sizes() {
        assert!(matches!(AdjacencyMatrix::<i64>::new(0), Err(Error::InvalidSize(0))));
        assert!(matches!(AdjacencyMatrix::<i64>::new(1), Err(Error::InvalidSize(1))));
        assert!(AdjacencyMatrix::<i64>::new(2).is_ok());
    }

    #[test]
    fn rejects_sizes_whose_square_overflows() {
        let err = AdjacencyMatrix::<i64>::new(1usize << 33).unwrap_err();
        assert!(matches!(err, Error::InvalidSize(n) if n == 1usize << 33));
    }

    #[test]
    fn set_weight_tracks_edge_count() {
        let mut g = AdjacencyMatrix::<i64>::new(3).unwrap();
        g.set_weight(0, 1, 4).unwrap();
        assert_eq!(g.edge_count(), 1);

        // Same edge again, different value: still one edge
        g.set_weight(0, 1, 4).unwrap();
        g.set_weight(0, 1, 7).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight(0, 1).unwrap(), 7);

        // Writing the sentinel removes it
        g.set_weight(0, 1, 0).unwrap();
        assert_eq!(g.edge_count(), 0);
        assert!(!g.adjacent(0, 1));
    }

    #[test]
    fn remove_missing_edge_is_noop() {
        let mut g = sample();
        assert!(!g.remove_edge(3, 0).unwrap());
        assert_eq!(g.edge_count(), 3);

        assert!(g.remove_edge(0, 2).unwrap());
        assert_eq!(g.edge_count(), 2);
        assert!(!g.remove_edge(0, 2).unwrap());
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn add_edge_uses_unit_weight() {
        let mut g = AdjacencyMatrix::<i64>::new(2).unwrap();
        g.add_edge(1, 0).unwrap();
        g.add_edge(1, 0).unwrap();
        assert_eq!(g.weight(1, 0).unwrap(), 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn out_of_range_indices() {
        let mut g = sample();
        assert!(!g.adjacent(4, 0));
        assert!(!g.adjacent(0, 9));
        assert!(matches!(g.weight(0, 4), Err(Error::InvalidVertex(4))));
        assert!(matches!(g.set_weight(5, 0, 1), Err(Error::InvalidVertex(5))));
        assert!(matches!(g.neighbors(4), Err(Error::InvalidVertex(4))));
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.get_edge_weight(7, 7), None);
        assert_eq!(g.outgoing_edges(7).count(), 0);
    }

    #[test]
    fn neighbor_accessors() {
        let g = sample();
        assert_eq!(g.neighbors(0).unwrap(), vec![1, 2]);
        assert_eq!(g.neighbor_weights(0).unwrap(), vec![1, 5]);
        assert!(g.neighbors(3).unwrap().is_empty());

        let incoming: Vec<_> = g.incoming_edges(2).collect();
        assert_eq!(incoming, vec![(0, 5), (1, 2)]);
    }

    #[test]
    fn density_and_edges() {
        let g = sample();
        assert!((g.density() - 3.0 / 16.0).abs() < 1e-12);
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(0, 1, 1), (0, 2, 5), (1, 2, 2)]);
    }

    #[test]
    fn connectivity_is_reachability_from_first_vertex() {
        let empty = AdjacencyMatrix::<i64>::new(3).unwrap();
        assert!(!empty.is_connected());
        assert_eq!(empty.density(), 0.0);

        let chain = AdjacencyMatrix::from_edges(3, vec![(0, 1, 1), (1, 2, 1)]).unwrap();
        assert!(chain.is_connected());

        // Every vertex reaches 0, but 0 reaches nothing
        let inward = AdjacencyMatrix::from_edges(3, vec![(1, 0, 1), (2, 0, 1)]).unwrap();
        assert!(!inward.is_connected());
    }
}
