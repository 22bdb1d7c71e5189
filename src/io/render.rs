use std::fmt::{Display, Write};

use crate::algorithm::apsp::DistanceMatrix;
use crate::algorithm::dijkstra::PathQuery;
use crate::graph::{AdjacencyMatrix, Graph, Weight};

const CELL_WIDTH: usize = 7;

/// How vertex labels are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// 0, 1, 2, ...
    #[default]
    Numeric,
    /// a, b, c, ...
    Lowercase,
    /// A, B, C, ...
    Uppercase,
}

impl LabelStyle {
    /// Label of a vertex. Letter styles fall back to numbers past the alphabet.
    pub fn label(self, vertex: usize) -> String {
        let letter = |base: u8| {
            if vertex < 26 {
                char::from(base + vertex as u8).to_string()
            } else {
                vertex.to_string()
            }
        };
        match self {
            LabelStyle::Numeric => vertex.to_string(),
            LabelStyle::Lowercase => letter(b'a'),
            LabelStyle::Uppercase => letter(b'A'),
        }
    }

    /// Parses "numeric", "lower"/"lowercase" or "upper"/"uppercase"
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "numeric" => Some(LabelStyle::Numeric),
            "lower" | "lowercase" => Some(LabelStyle::Lowercase),
            "upper" | "uppercase" => Some(LabelStyle::Uppercase),
            _ => None,
        }
    }
}

fn header(out: &mut String, size: usize, style: LabelStyle) {
    let _ = write!(out, "{:>width$}", "", width = CELL_WIDTH);
    for j in 0..size {
        let _ = write!(out, "{:>width$}", style.label(j), width = CELL_WIDTH);
    }
    out.push('\n');
}

/// Vertex, edge and density counts
pub fn render_stats<W: Weight>(graph: &AdjacencyMatrix<W>) -> String {
    format!(
        "vertices = {}\nedges = {}\ndensity = {}\n",
        graph.vertex_count(),
        graph.edge_count(),
        graph.density()
    )
}

/// The adjacency matrix as a grid; zero entries mean no edge
pub fn render_matrix<W: Weight + Display>(graph: &AdjacencyMatrix<W>, style: LabelStyle) -> String {
    let n = graph.vertex_count();
    let mut out = String::from("Adjacency Matrix:\n\n");
    header(&mut out, n, style);

    for i in 0..n {
        let _ = write!(out, "{:>width$}", style.label(i), width = CELL_WIDTH);
        for j in 0..n {
            let value = graph.weight(i, j).unwrap_or_else(|_| W::zero());
            let _ = write!(out, "{:>width$}", value, width = CELL_WIDTH);
        }
        out.push('\n');
    }
    out
}

/// One line per vertex listing its outgoing edges as `-> head:weight`
pub fn render_edge_list<W: Weight + Display>(graph: &AdjacencyMatrix<W>, style: LabelStyle) -> String {
    let mut out = String::from("Edge List:\n\n");
    for i in 0..graph.vertex_count() {
        let _ = write!(out, " {}", style.label(i));
        for (head, weight) in graph.outgoing_edges(i) {
            let _ = write!(out, " -> {}:{}", style.label(head), weight);
        }
        out.push('\n');
    }
    out
}

/// Statistics, matrix and edge list together
pub fn render_graph<W: Weight + Display>(graph: &AdjacencyMatrix<W>, style: LabelStyle) -> String {
    format!(
        "{}\n{}\n{}",
        render_stats(graph),
        render_matrix(graph, style),
        render_edge_list(graph, style)
    )
}

/// All-pairs distances; unreachable pairs are left blank
pub fn render_distance_matrix<W: Weight + Display>(distances: &DistanceMatrix<W>, style: LabelStyle) -> String {
    let n = distances.size();
    let mut out = String::new();
    header(&mut out, n, style);

    for i in 0..n {
        let _ = write!(out, "{:>width$}", style.label(i), width = CELL_WIDTH);
        for j in 0..n {
            match distances.get(i, j) {
                Some(d) => {
                    let _ = write!(out, "{:>width$}", d, width = CELL_WIDTH);
                }
                None => {
                    let _ = write!(out, "{:>width$}", "", width = CELL_WIDTH);
                }
            }
        }
        out.push('\n');
    }
    out
}

/// `a -> b -> c = distance`, or a note when there is no path
pub fn render_path<W: Weight + Display>(query: &PathQuery<W>, style: LabelStyle) -> String {
    if !query.reached {
        return format!(
            "No path from {} to {} (distance reported as {})",
            style.label(query.source),
            style.label(query.target),
            query.distance
        );
    }

    let nodes = if query.path.is_empty() {
        style.label(query.source)
    } else {
        query
            .path
            .iter()
            .map(|&v| style.label(v))
            .collect::<Vec<_>>()
            .join(" -> ")
    };
    format!("{} = {}", nodes, query.distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdjacencyMatrix<i64> {
        AdjacencyMatrix::from_edges(3, vec![(0, 1, 4), (1, 2, -2)]).unwrap()
    }

    #[test]
    fn labels() {
        assert_eq!(LabelStyle::Numeric.label(3), "3");
        assert_eq!(LabelStyle::Lowercase.label(2), "c");
        assert_eq!(LabelStyle::Uppercase.label(0), "A");
        assert_eq!(LabelStyle::Uppercase.label(30), "30");
        assert_eq!(LabelStyle::parse("Upper"), Some(LabelStyle::Uppercase));
        assert_eq!(LabelStyle::parse("roman"), None);
    }

    #[test]
    fn edge_list_lines() {
        let text = render_edge_list(&sample(), LabelStyle::Uppercase);
        assert_eq!(text, "Edge List:\n\n A -> B:4\n B -> C:-2\n C\n");
    }

    #[test]
    fn matrix_grid() {
        let text = render_matrix(&sample(), LabelStyle::Numeric);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Adjacency Matrix:");
        assert_eq!(lines[2], format!("{:>7}{:>7}{:>7}{:>7}", "", 0, 1, 2));
        assert_eq!(lines[3], format!("{:>7}{:>7}{:>7}{:>7}", 0, 0, 4, 0));
    }

    #[test]
    fn stats_block() {
        let text = render_stats(&sample());
        assert!(text.starts_with("vertices = 3\nedges = 2\n"));
    }

    #[test]
    fn path_line() {
        let query = PathQuery {
            source: 0,
            target: 2,
            distance: 3i64,
            path: vec![0, 1, 2],
            reached: true,
        };
        assert_eq!(render_path(&query, LabelStyle::Numeric), "0 -> 1 -> 2 = 3");

        let missing = PathQuery {
            reached: false,
            distance: 0i64,
            path: vec![],
            ..query
        };
        assert_eq!(
            render_path(&missing, LabelStyle::Lowercase),
            "No path from a to c (distance reported as 0)"
        );
    }

    #[test]
    fn distance_matrix_blanks_unreachable() {
        let mut d = DistanceMatrix::<i64>::new(2);
        d.set(0, 1, Some(5));
        let text = render_distance_matrix(&d, LabelStyle::Numeric);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], format!("{:>7}{:>7}{:>7}", 0, 0, 5));
        assert_eq!(lines[2], format!("{:>7}{:>7}{:>7}", 1, "", 0));
    }
}
