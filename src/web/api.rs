use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{Duration, Utc};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::apsp::ApspStatus;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::floyd_warshall::FloydWarshall;
use crate::graph::AdjacencyMatrix;
use crate::io::{parse_graph, parse_header};
use crate::solver::ShortestPaths;
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_vertices: usize,
    pub max_sessions: usize,
    pub session_timeout: Duration,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(&ServerConfig::default())
    }

    pub fn with_config(config: &ServerConfig) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_vertices: config.max_vertices,
            max_sessions: config.max_sessions.max(1),
            session_timeout: Duration::minutes(config.session_timeout_minutes as i64),
        }
    }

    fn check_size(&self, vertex_count: usize) -> Result<(), ApiError> {
        if vertex_count > self.max_vertices {
            warn!("rejected graph with {} vertices (limit {})", vertex_count, self.max_vertices);
            return Err(error(
                StatusCode::BAD_REQUEST,
                "graph_too_large",
                &format!(
                    "Graph has {} vertices, the limit is {}",
                    vertex_count, self.max_vertices
                ),
            ));
        }
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions
            .lock()
            .map_err(|_| error(StatusCode::INTERNAL_SERVER_ERROR, "state_poisoned", "Session store is unavailable"))
    }

    /// Drops sessions idle for longer than the timeout
    fn prune(&self, sessions: &mut HashMap<Uuid, Session>) {
        let cutoff = Utc::now() - self.session_timeout;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_accessed >= cutoff);
        if sessions.len() < before {
            debug!("expired {} idle sessions", before - sessions.len());
        }
    }

    /// Stores a session, evicting the least recently used one when full
    fn insert(&self, session: Session) -> Result<(), ApiError> {
        let mut sessions = self.lock()?;
        self.prune(&mut sessions);

        if sessions.len() >= self.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|s| s.last_accessed)
                .map(|s| s.id);
            if let Some(id) = oldest {
                info!("session limit {} reached, evicting {}", self.max_sessions, id);
                sessions.remove(&id);
            }
        }

        sessions.insert(session.id, session);
        Ok(())
    }

    /// Clones the graph of a live session and marks it used
    fn graph(&self, session_id: Uuid) -> Result<AdjacencyMatrix<i64>, ApiError> {
        let mut sessions = self.lock()?;
        self.prune(&mut sessions);
        match sessions.get_mut(&session_id) {
            Some(session) => {
                session.touch();
                Ok(session.graph.clone())
            }
            None => Err(session_not_found()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/graphs/:session_id/dijkstra", post(run_dijkstra))
        .route("/api/graphs/:session_id/apsp", post(run_all_pairs))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

/// Create a graph session from an edge list or loader-format text
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<CreateGraphRequest>,
) -> ApiResult<SessionSummary> {
    let graph = match (&request.text, request.vertex_count) {
        (Some(text), _) => {
            let (vertex_count, _) = parse_header(text).map_err(library_error)?;
            state.check_size(vertex_count)?;
            parse_graph::<i64>(text).map_err(library_error)?
        }
        (None, Some(vertex_count)) => {
            state.check_size(vertex_count)?;
            let mut graph = AdjacencyMatrix::new(vertex_count).map_err(library_error)?;
            for edge in &request.edges {
                graph
                    .set_weight(edge.source, edge.target, edge.weight)
                    .map_err(library_error)?;
            }
            graph
        }
        (None, None) => {
            return Err(error(
                StatusCode::BAD_REQUEST,
                "missing_graph",
                "Provide either `text` or `vertex_count` with `edges`",
            ));
        }
    };

    let session = Session::new(graph);
    let summary = session.summary();
    state.insert(session)?;
    info!(
        "created session {} ({} vertices, {} edges)",
        summary.id, summary.vertex_count, summary.edge_count
    );

    Ok(Json(summary))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<WebGraph> {
    let graph = state.graph(session_id)?;
    Ok(Json(WebGraph::from(&graph)))
}

/// Shortest path between two vertices of a session graph
pub async fn run_dijkstra(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<DijkstraRequest>,
) -> ApiResult<DijkstraResponse> {
    let graph = state.graph(session_id)?;
    let solver = ShortestPaths::new(graph)
        .with_dijkstra(Dijkstra::new().with_strict_unreachable(request.strict));

    let start_time = Instant::now();
    let query = solver
        .dijkstra(request.source, request.target)
        .map_err(library_error)?;
    let execution_time = start_time.elapsed();

    Ok(Json(DijkstraResponse {
        source: query.source,
        target: query.target,
        reached: query.reached,
        distance: query.distance,
        path: query.path,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// Run Floyd-Warshall or Johnson on a session graph
pub async fn run_all_pairs(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ApspRequest>,
) -> ApiResult<ApspResponse> {
    let graph = state.graph(session_id)?;
    let mut solver = ShortestPaths::new(graph)
        .with_floyd_warshall(FloydWarshall::new().with_early_exit(request.early_exit));

    let start_time = Instant::now();
    let status = match request.algorithm.as_str() {
        "floyd-warshall" => solver.floyd_warshall(),
        "johnson" => solver.johnson(),
        _ => {
            return Err(error(
                StatusCode::BAD_REQUEST,
                "invalid_algorithm",
                &format!("Unknown algorithm: {}", request.algorithm),
            ));
        }
    }
    .map_err(library_error)?;
    let execution_time = start_time.elapsed();

    if status == ApspStatus::NegativeCycle {
        warn!("session {}: negative cycle reported by {}", session_id, request.algorithm);
    }

    let response = ApspResponse {
        execution_id: Uuid::new_v4(),
        algorithm: request.algorithm.clone(),
        status: status.to_string(),
        distances: solver.all_pairs().map(|d| d.rows()),
        shortest_shortest_path: solver.shortest_shortest_path(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    };

    {
        let mut sessions = state.lock()?;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.last_result = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> ApiResult<Vec<SessionSummary>> {
    let mut sessions = state.lock()?;
    state.prune(&mut sessions);
    let mut summaries: Vec<SessionSummary> = sessions.values().map(Session::summary).collect();
    summaries.sort_by_key(|s| s.created_at);
    Ok(Json(summaries))
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn error(status: StatusCode, code: &str, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: message.to_string(),
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    error(StatusCode::NOT_FOUND, "session_not_found", "Session not found")
}

fn library_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::InvalidVertex(_) => (StatusCode::BAD_REQUEST, "invalid_vertex"),
        Error::InvalidSize(_) => (StatusCode::BAD_REQUEST, "invalid_size"),
        Error::Parse { .. } => (StatusCode::BAD_REQUEST, "parse_error"),
        Error::PotentialMismatch { .. } => (StatusCode::BAD_REQUEST, "potential_mismatch"),
        Error::UnreachableTarget { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "unreachable_target"),
        Error::NegativeCycle => (StatusCode::UNPROCESSABLE_ENTITY, "negative_cycle"),
        Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
    };
    error(status, code, &err.to_string())
}
