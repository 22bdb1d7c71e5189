//! Dense Paths - shortest paths over dense adjacency matrices
//!
//! This library stores weighted directed graphs as V×V adjacency matrices and
//! answers shortest-path questions over them:
//!
//! * single-pair queries with an O(V²) vertex-scan Dijkstra,
//! * all-pairs distances with Floyd-Warshall over a three-plane matrix,
//! * all-pairs distances with Johnson's algorithm for graphs that carry
//!   negative edges but no negative cycle.
//!
//! Two "no edge" conventions coexist: `0` on the [`AdjacencyMatrix`] and the
//! numeric maximum on the Floyd-Warshall planes. Results handed back to callers
//! use `Option` instead of either sentinel.

pub mod algorithm;
pub mod graph;
pub mod io;
pub mod solver;
pub mod web;

pub use algorithm::{
    apsp::{AllPairsShortestPath, ApspStatus, DistanceMatrix},
    dijkstra::{Dijkstra, PathQuery},
    floyd_warshall::FloydWarshall,
    johnson::Johnson,
    potentials::Potentials,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::matrix::AdjacencyMatrix;
pub use graph::traits::Weight;
pub use solver::ShortestPaths;

/// Smallest matrix the store accepts.
pub const MIN_VERTICES: usize = 2;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid graph size: {0} (at least 2 vertices are required)")]
    InvalidSize(usize),

    #[error("Negative-weight cycle detected")]
    NegativeCycle,

    #[error("No path from {from} to {to}")]
    UnreachableTarget { from: usize, to: usize },

    #[error("Potential vector has {actual} entries, expected {expected}")]
    PotentialMismatch { expected: usize, actual: usize },

    #[error("Parse error at token {position}: {message}")]
    Parse { position: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
