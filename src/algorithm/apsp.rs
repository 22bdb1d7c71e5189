use std::fmt;

use crate::graph::{AdjacencyMatrix, ApspPlanes, Plane, Weight};
use crate::{Error, Result};

/// Outcome of an all-pairs run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApspStatus {
    /// Distances are final
    Ok,
    /// A negative-weight cycle exists; no distances are available
    NegativeCycle,
}

impl fmt::Display for ApspStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApspStatus::Ok => write!(f, "OK"),
            ApspStatus::NegativeCycle => write!(f, "NEGATIVE_CYCLE"),
        }
    }
}

/// V×V shortest distances. `None` means there is no path.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<W>
where
    W: Weight,
{
    size: usize,
    distances: Vec<Option<W>>,
}

impl<W> DistanceMatrix<W>
where
    W: Weight,
{
    /// Creates a matrix with zero on the diagonal and no other paths
    pub fn new(size: usize) -> Self {
        let mut distances = vec![None; size * size];
        for i in 0..size {
            distances[i * size + i] = Some(W::zero());
        }
        DistanceMatrix { size, distances }
    }

    /// Reads one plane, mapping the infinity sentinel to `None`.
    /// `offset` skips leading rows and columns (the virtual source).
    pub fn from_plane(planes: &ApspPlanes<W>, plane: Plane, offset: usize) -> Self {
        let size = planes.size().saturating_sub(offset);
        let mut matrix = DistanceMatrix::new(size);
        for i in 0..size {
            for j in 0..size {
                let value = planes.at(i + offset, j + offset, plane);
                matrix.distances[i * size + j] = if value.is_infinity() { None } else { Some(value) };
            }
        }
        matrix
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from i to j; `None` when unreachable or out of range
    pub fn get(&self, i: usize, j: usize) -> Option<W> {
        if i >= self.size || j >= self.size {
            return None;
        }
        self.distances[i * self.size + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, distance: Option<W>) {
        self.distances[i * self.size + j] = distance;
    }

    /// Row i as a slice
    pub fn row(&self, i: usize) -> Option<&[Option<W>]> {
        if i >= self.size {
            return None;
        }
        let start = i * self.size;
        Some(&self.distances[start..start + self.size])
    }

    /// All rows, copied out
    pub fn rows(&self) -> Vec<Vec<Option<W>>> {
        self.distances
            .chunks(self.size.max(1))
            .map(|row| row.to_vec())
            .collect()
    }

    /// Smallest distance over all ordered pairs of distinct, connected vertices.
    ///
    /// The zero diagonal and unreachable pairs are left out, so this is not
    /// the plain minimum of the matrix: a graph whose edges are all positive
    /// reports its lightest path, and one with no path at all reports `None`.
    pub fn shortest_shortest_path(&self) -> Option<W> {
        let n = self.size;
        self.distances
            .iter()
            .enumerate()
            .filter(|(idx, _)| idx / n != idx % n)
            .filter_map(|(_, d)| *d)
            .fold(None, |best: Option<W>, d| match best {
                Some(b) if d < b => Some(d),
                Some(b) => Some(b),
                None => Some(d),
            })
    }

    /// Every finite distance is at most the sum over any intermediate vertex
    pub fn satisfies_triangle_inequality(&self) -> bool {
        let n = self.size;
        for u in 0..n {
            for v in 0..n {
                for w in 0..n {
                    if let (Some(uw), Some(uv), Some(vw)) = (self.get(u, w), self.get(u, v), self.get(v, w)) {
                        if uv + vw < uw {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }
}

/// Trait for all-pairs shortest path algorithms over a dense matrix
pub trait AllPairsShortestPath<W>
where
    W: Weight,
{
    /// Computes every pairwise distance, or `Error::NegativeCycle`
    fn all_pairs(&self, graph: &AdjacencyMatrix<W>) -> Result<DistanceMatrix<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Runs the algorithm and reports only whether it succeeded
    fn status(&self, graph: &AdjacencyMatrix<W>) -> Result<ApspStatus> {
        match self.all_pairs(graph) {
            Ok(_) => Ok(ApspStatus::Ok),
            Err(Error::NegativeCycle) => Ok(ApspStatus::NegativeCycle),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_ignores_diagonal_and_missing_paths() {
        let mut m = DistanceMatrix::<i64>::new(3);
        assert_eq!(m.shortest_shortest_path(), None);

        m.set(0, 1, Some(4));
        m.set(1, 2, Some(-3));
        m.set(2, 0, Some(7));
        assert_eq!(m.shortest_shortest_path(), Some(-3));
    }

    #[test]
    fn rows_and_lookup() {
        let mut m = DistanceMatrix::<i64>::new(2);
        m.set(0, 1, Some(2));
        assert_eq!(m.rows(), vec![vec![Some(0), Some(2)], vec![None, Some(0)]]);
        assert_eq!(m.row(1).unwrap(), &[None, Some(0)]);
        assert_eq!(m.get(5, 0), None);
    }

    #[test]
    fn status_display() {
        assert_eq!(ApspStatus::Ok.to_string(), "OK");
        assert_eq!(ApspStatus::NegativeCycle.to_string(), "NEGATIVE_CYCLE");
    }
}
