use std::fmt::Debug;
use std::ops::Sub;
use num_traits::{Bounded, One, Zero};

use crate::Result;

/// Numeric edge weight usable by every structure in this crate.
///
/// Two sentinels are derived from the type itself: `zero()` marks a missing
/// edge on an adjacency matrix, `max_value()` marks "infinity" on the
/// all-pairs planes and in tentative distances.
pub trait Weight: Copy + Debug + PartialOrd + Zero + One + Bounded + Sub<Output = Self> {
    /// Value used for "unreachable" in distance computations
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Returns true if this value is the infinity sentinel
    fn is_infinity(&self) -> bool {
        *self == Self::max_value()
    }

    /// Addition where an infinite operand makes the sum infinite.
    ///
    /// A sum above the representable range is infinite as well; one below it
    /// saturates at `min_value()`.
    fn absorbing_add(self, other: Self) -> Self {
        if self.is_infinity() || other.is_infinity() {
            return Self::infinity();
        }
        let zero = Self::zero();
        if other > zero && self > Self::max_value() - other {
            Self::infinity()
        } else if other < zero && self < Self::min_value() - other {
            Self::min_value()
        } else {
            self + other
        }
    }

    /// Subtraction with the same saturation rules as `absorbing_add`
    fn absorbing_sub(self, other: Self) -> Self {
        if self.is_infinity() {
            return Self::infinity();
        }
        let zero = Self::zero();
        if other < zero && self > Self::max_value() + other {
            Self::infinity()
        } else if other > zero && self < Self::min_value() + other {
            Self::min_value()
        } else {
            self - other
        }
    }
}

impl<T> Weight for T where T: Copy + Debug + PartialOrd + Zero + One + Bounded + Sub<Output = T> {}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns an iterator over the incoming edges to a vertex
    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for single-edge mutation
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Sets the weight of the edge between two vertices, creating it if needed.
    /// A zero weight removes the edge.
    fn set_edge_weight(&mut self, from: usize, to: usize, weight: W) -> Result<()>;

    /// Removes an edge from the graph, returning whether it existed
    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool>;
}
