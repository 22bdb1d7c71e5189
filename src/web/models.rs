use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::graph::AdjacencyMatrix;

/// A vertex as shown to web clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: usize,
    pub label: String,
}

/// A weighted directed edge, 0-based
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: i64,
}

/// A complete graph for web clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

impl From<&AdjacencyMatrix<i64>> for WebGraph {
    fn from(graph: &AdjacencyMatrix<i64>) -> Self {
        let nodes = (0..graph.vertex_count())
            .map(|id| WebNode {
                id,
                label: format!("Node {}", id),
            })
            .collect();
        let links = graph
            .edges()
            .map(|(source, target, weight)| WebEdge {
                source,
                target,
                weight,
            })
            .collect();
        WebGraph { nodes, links }
    }
}

/// Body of `POST /api/graphs`.
///
/// Either `text` in the edge-list file format (1-based vertices), or
/// `vertex_count` plus 0-based `edges`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateGraphRequest {
    #[serde(default)]
    pub vertex_count: Option<usize>,
    #[serde(default)]
    pub edges: Vec<WebEdge>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Body of `POST /api/graphs/:id/dijkstra`
#[derive(Debug, Deserialize)]
pub struct DijkstraRequest {
    pub source: usize,
    pub target: usize,
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DijkstraResponse {
    pub source: usize,
    pub target: usize,
    pub reached: bool,
    pub distance: i64,
    pub path: Vec<usize>,
    pub execution_time_ms: f64,
}

/// Body of `POST /api/graphs/:id/apsp`
#[derive(Debug, Deserialize)]
pub struct ApspRequest {
    pub algorithm: String,
    #[serde(default = "default_early_exit")]
    pub early_exit: bool,
}

fn default_early_exit() -> bool {
    true
}

/// All-pairs result. `distances` is absent when a negative cycle was found;
/// unreachable pairs are `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ApspResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<Vec<Vec<Option<i64>>>>,
    pub shortest_shortest_path: Option<i64>,
    pub execution_time_ms: f64,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub connected: bool,
    pub created_at: DateTime<Utc>,
}

/// Session holding one graph and its latest all-pairs result
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    #[serde(skip)]
    pub graph: AdjacencyMatrix<i64>,
    pub last_result: Option<ApspResponse>,
    pub created_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: AdjacencyMatrix<i64>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            graph,
            last_result: None,
            created_at: now,
            last_accessed: now,
        }
    }

    pub fn touch(&mut self) {
        self.last_accessed = Utc::now();
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            density: self.graph.density(),
            connected: self.graph.is_connected(),
            created_at: self.created_at,
        }
    }
}
