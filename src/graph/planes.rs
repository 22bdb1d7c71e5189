use std::ops::Range;

use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::traits::Weight;
use crate::{Error, Result, MIN_VERTICES};

/// One of the three distance planes used by Floyd-Warshall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    /// Original edge weights, left untouched once set up
    Initial,
    /// Result of the previous iteration
    Previous,
    /// Iteration being computed
    Current,
}

impl Plane {
    fn slot(self) -> usize {
        match self {
            Plane::Initial => 0,
            Plane::Previous => 1,
            Plane::Current => 2,
        }
    }
}

/// Three parallel V×V distance matrices.
///
/// Missing edges are stored as `W::infinity()`, since zero is a legitimate
/// distance here. The diagonal starts at zero on every plane.
#[derive(Debug, Clone)]
pub struct ApspPlanes<W>
where
    W: Weight,
{
    size: usize,
    planes: [Vec<W>; 3],
}

impl<W> ApspPlanes<W>
where
    W: Weight,
{
    /// Creates planes with no edges: zero on the diagonal, infinity elsewhere
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_VERTICES {
            return Err(Error::InvalidSize(size));
        }
        Self::blank(size)
    }

    /// Copies every edge of the matrix onto all three planes
    pub fn from_matrix(graph: &AdjacencyMatrix<W>) -> Result<Self> {
        let size = graph.vertex_count();
        let mut planes = Self::blank(size)?;
        for (tail, head, weight) in graph.edges() {
            planes.put_all(tail, head, weight);
        }
        Ok(planes)
    }

    /// Builds planes one vertex larger than the matrix. Index 0 is a virtual
    /// source with a zero-weight edge to every real vertex; real vertex `v`
    /// is stored at index `v + 1`.
    pub fn with_virtual_source(graph: &AdjacencyMatrix<W>) -> Result<Self> {
        let size = graph.vertex_count() + 1;
        let mut planes = Self::blank(size)?;
        for (tail, head, weight) in graph.edges() {
            planes.put_all(tail + 1, head + 1, weight);
        }
        for v in 0..size {
            planes.put_all(0, v, W::zero());
        }
        Ok(planes)
    }

    fn blank(size: usize) -> Result<Self> {
        let cells = size.checked_mul(size).ok_or(Error::InvalidSize(size))?;
        let mut plane = vec![W::infinity(); cells];
        for i in 0..size {
            plane[i * size + i] = W::zero();
        }
        Ok(ApspPlanes {
            size,
            planes: [plane.clone(), plane.clone(), plane],
        })
    }

    fn put_all(&mut self, i: usize, j: usize, value: W) {
        let idx = i * self.size + j;
        for plane in self.planes.iter_mut() {
            plane[idx] = value;
        }
    }

    /// Number of vertices on each plane
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, i: usize, j: usize) -> Result<usize> {
        if i >= self.size {
            return Err(Error::InvalidVertex(i));
        }
        if j >= self.size {
            return Err(Error::InvalidVertex(j));
        }
        Ok(i * self.size + j)
    }

    /// Reads entry (i, j) of a plane
    pub fn get(&self, i: usize, j: usize, plane: Plane) -> Result<W> {
        let idx = self.index(i, j)?;
        Ok(self.planes[plane.slot()][idx])
    }

    /// Writes entry (i, j) of a plane
    pub fn set(&mut self, i: usize, j: usize, plane: Plane, value: W) -> Result<()> {
        let idx = self.index(i, j)?;
        self.planes[plane.slot()][idx] = value;
        Ok(())
    }

    // Unchecked accessors for the relaxation loops; callers stay in range.
    pub(crate) fn at(&self, i: usize, j: usize, plane: Plane) -> W {
        self.planes[plane.slot()][i * self.size + j]
    }

    pub(crate) fn put(&mut self, i: usize, j: usize, plane: Plane, value: W) {
        let idx = i * self.size + j;
        self.planes[plane.slot()][idx] = value;
    }

    /// Ends an iteration for the given rows: previous takes the values of
    /// current, then current is reseeded from initial.
    pub fn promote(&mut self, rows: Range<usize>) {
        let start = rows.start.min(self.size) * self.size;
        let end = rows.end.min(self.size) * self.size;
        let [initial, previous, current] = &mut self.planes;

        previous[start..end].copy_from_slice(&current[start..end]);
        current[start..end].copy_from_slice(&initial[start..end]);
    }

    /// Returns true if vertex k has at least one finite entry into it and one
    /// out of it on the previous plane, ignoring the diagonal. A vertex
    /// without both can never shorten a path as an intermediate.
    pub fn can_route_through(&self, k: usize) -> bool {
        let into = (0..self.size).any(|i| i != k && !self.at(i, k, Plane::Previous).is_infinity());
        let out = (0..self.size).any(|j| j != k && !self.at(k, j, Plane::Previous).is_infinity());
        into && out
    }
}
