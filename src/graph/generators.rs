use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::AdjacencyMatrix;
use crate::Result;

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generates a random directed graph on n vertices.
/// Each ordered pair (u, v), u != v, gets an edge with the given probability
/// and a weight drawn from `min_weight..=max_weight`, skipping zero.
pub fn generate_random_dense(
    n: usize,
    edge_probability: f64,
    min_weight: i64,
    max_weight: i64,
    seed: Option<u64>,
) -> Result<AdjacencyMatrix<i64>> {
    let mut graph = AdjacencyMatrix::new(n)?;
    let mut rng = rng_from(seed);
    let probability = edge_probability.clamp(0.0, 1.0);

    for u in 0..n {
        for v in 0..n {
            if u == v || !rng.gen_bool(probability) {
                continue;
            }
            let weight = rng.gen_range(min_weight..=max_weight);
            if weight != 0 {
                graph.set_weight(u, v, weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random graph that has negative edges but no negative cycle.
///
/// Every vertex gets a hidden height h(v) and every edge a positive base cost
/// c; the stored weight is `c + h(v) - h(u)`. Around any cycle the heights
/// cancel, so each cycle weighs the sum of its positive base costs.
pub fn generate_negative_acyclic_weights(
    n: usize,
    edge_probability: f64,
    max_height: i64,
    seed: Option<u64>,
) -> Result<AdjacencyMatrix<i64>> {
    let mut graph = AdjacencyMatrix::new(n)?;
    let mut rng = rng_from(seed);
    let probability = edge_probability.clamp(0.0, 1.0);
    let heights: Vec<i64> = (0..n).map(|_| rng.gen_range(0..=max_height.max(0))).collect();

    for u in 0..n {
        for v in 0..n {
            if u == v || !rng.gen_bool(probability) {
                continue;
            }
            let base = rng.gen_range(1..=10);
            let mut weight = base + heights[v] - heights[u];
            // Zero means "no edge"; raising the cost keeps cycles positive
            if weight == 0 {
                weight = 1;
            }
            graph.set_weight(u, v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a random geometric graph in 3D space
/// n: number of vertices
/// r: connection radius (vertices within distance r are connected)
pub fn generate_geometric_3d(
    n: usize,
    r: f64,
    seed: Option<u64>,
) -> Result<AdjacencyMatrix<OrderedFloat<f64>>> {
    let mut graph = AdjacencyMatrix::new(n)?;
    let mut rng = rng_from(seed);

    let points: Vec<(f64, f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (x1, y1, z1) = points[i];
            let (x2, y2, z2) = points[j];
            let dist = ((x1 - x2).powi(2) + (y1 - y2).powi(2) + (z1 - z2).powi(2)).sqrt();

            // Coincident points would need a zero-weight edge
            if dist <= r && dist > 0.0 {
                graph.set_weight(i, j, OrderedFloat(dist))?;
            }
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::johnson::Johnson;

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_random_dense(12, 0.4, 1, 20, Some(7)).unwrap();
        let b = generate_random_dense(12, 0.4, 1, 20, Some(7)).unwrap();
        assert_eq!(a, b);
        assert!(a.edges().all(|(u, v, w)| u != v && (1..=20).contains(&w)));
    }

    #[test]
    fn negative_weights_never_form_negative_cycles() {
        for seed in 0..5 {
            let g = generate_negative_acyclic_weights(10, 0.5, 15, Some(seed)).unwrap();
            assert!(Johnson::new().potentials(&g).is_ok());
        }
    }

    #[test]
    fn geometric_edges_are_symmetric() {
        let g = generate_geometric_3d(15, 0.6, Some(3)).unwrap();
        for (u, v, w) in g.edges() {
            assert_eq!(g.weight(v, u).unwrap(), w);
            assert!(w.into_inner() <= 0.6);
        }
    }
}
