pub mod traits;
pub mod path;
pub mod potentials;
pub mod dijkstra;
pub mod apsp;
pub mod floyd_warshall;
pub mod johnson;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use path::build_path;
