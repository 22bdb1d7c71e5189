pub mod traits;
pub mod matrix;
pub mod planes;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use matrix::AdjacencyMatrix;
pub use planes::{ApspPlanes, Plane};
