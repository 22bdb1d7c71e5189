use dense_paths::io::parse_graph;
use dense_paths::graph::Graph;
use dense_paths::{AdjacencyMatrix, Dijkstra, Error, ShortestPathAlgorithm, ShortestPaths};

// 1-based input: (1,2,1), (2,3,2), (1,3,5) on four vertices
fn four_vertex_graph() -> AdjacencyMatrix<i64> {
    parse_graph("4 3\n1 2 1\n2 3 2\n1 3 5\n").unwrap()
}

#[test]
fn test_dijkstra_prefers_cheaper_detour() {
    let solver = ShortestPaths::new(four_vertex_graph());
    let query = solver.dijkstra(0, 2).unwrap();

    assert!(query.reached);
    assert_eq!(query.distance, 3);
    assert_eq!(query.path, vec![0, 1, 2]);
}

#[test]
fn test_unreachable_target_reports_zero() {
    let solver = ShortestPaths::new(four_vertex_graph());
    let query = solver.dijkstra(0, 3).unwrap();

    assert!(!query.reached);
    assert_eq!(query.distance, 0);
    assert!(query.path.is_empty());
}

#[test]
fn test_strict_mode_rejects_unreachable_target() {
    let solver = ShortestPaths::new(four_vertex_graph())
        .with_dijkstra(Dijkstra::new().with_strict_unreachable(true));

    match solver.dijkstra(2, 0) {
        Err(Error::UnreachableTarget { from, to }) => {
            assert_eq!((from, to), (2, 0));
        }
        other => panic!("expected UnreachableTarget, got {:?}", other),
    }
    assert_eq!(solver.dijkstra(0, 2).unwrap().distance, 3);
}

#[test]
fn test_same_vertex_query() {
    let solver = ShortestPaths::new(four_vertex_graph());
    let query = solver.dijkstra(1, 1).unwrap();

    assert!(query.reached);
    assert_eq!(query.distance, 0);
    assert!(query.path.is_empty());
}

#[test]
fn test_out_of_range_vertices() {
    let solver = ShortestPaths::new(four_vertex_graph());
    assert!(matches!(solver.dijkstra(0, 4), Err(Error::InvalidVertex(4))));
    assert!(matches!(solver.dijkstra(7, 0), Err(Error::InvalidVertex(7))));
    assert!(!solver.adjacent(0, 9));
}

// Every consecutive pair on a reported path is an edge and the weights add up
#[test]
fn test_paths_are_continuous() {
    let mut graph = AdjacencyMatrix::<i64>::new(6).unwrap();
    let edges = [
        (0, 1, 7),
        (0, 2, 9),
        (0, 5, 14),
        (1, 2, 10),
        (1, 3, 15),
        (2, 3, 11),
        (2, 5, 2),
        (3, 4, 6),
        (5, 4, 9),
    ];
    for (u, v, w) in edges {
        graph.set_weight(u, v, w).unwrap();
        graph.set_weight(v, u, w).unwrap();
    }
    let solver = ShortestPaths::new(graph);

    for target in 1..6 {
        let query = solver.dijkstra(0, target).unwrap();
        assert!(query.reached);
        assert_eq!(query.path.first(), Some(&0));
        assert_eq!(query.path.last(), Some(&target));

        let total: i64 = query
            .path
            .windows(2)
            .map(|pair| {
                assert!(solver.adjacent(pair[0], pair[1]));
                solver.weight(pair[0], pair[1]).unwrap()
            })
            .sum();
        assert_eq!(total, query.distance);
    }

    assert_eq!(solver.dijkstra(0, 4).unwrap().distance, 20);
    assert_eq!(solver.dijkstra(0, 4).unwrap().path, vec![0, 2, 5, 4]);
}

#[test]
fn test_dijkstra_matches_all_pairs_row() {
    let mut solver = ShortestPaths::new(four_vertex_graph());
    solver.floyd_warshall().unwrap();
    let distances = solver.all_pairs().unwrap().clone();

    for s in 0..4 {
        for t in 0..4 {
            let query = solver.dijkstra(s, t).unwrap();
            match distances.get(s, t) {
                Some(d) => {
                    assert!(query.reached);
                    assert_eq!(query.distance, d);
                }
                None => assert!(!query.reached),
            }
        }
    }
    assert!(distances.satisfies_triangle_inequality());
}

#[test]
fn test_single_source_tree() {
    let graph = four_vertex_graph();
    let dijkstra = Dijkstra::new();
    let algorithm: &dyn ShortestPathAlgorithm<i64, AdjacencyMatrix<i64>> = &dijkstra;
    let result = algorithm.compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(algorithm.name(), "Dijkstra");
    assert_eq!(result.distances, vec![Some(0), Some(1), Some(3), None]);
    assert_eq!(result.reached_count(), 3);
    assert_eq!(algorithm.get_path(&result, 2), Some(vec![0, 1, 2]));
    assert_eq!(algorithm.get_path(&result, 3), None);

    let incoming: Vec<(usize, i64)> = graph.incoming_edges(2).collect();
    assert_eq!(incoming, vec![(0, 5), (1, 2)]);
}
