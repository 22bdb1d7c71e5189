use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use crate::graph::{AdjacencyMatrix, MutableGraph, Weight};
use crate::{Error, Result};

/// Whitespace-separated tokens with their position, for error messages
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Tokens {
            inner: input.split_whitespace(),
            position: 0,
        }
    }

    fn next_raw(&mut self) -> Option<&'a str> {
        let token = self.inner.next()?;
        self.position += 1;
        Some(token)
    }

    fn parse<T: FromStr>(&self, token: &str, what: &str) -> Result<T> {
        token.parse().map_err(|_| Error::Parse {
            position: self.position,
            message: format!("expected {}, found {:?}", what, token),
        })
    }

    fn expect<T: FromStr>(&mut self, what: &str) -> Result<T> {
        match self.next_raw() {
            Some(token) => self.parse(token, what),
            None => Err(Error::Parse {
                position: self.position + 1,
                message: format!("expected {}, found end of input", what),
            }),
        }
    }
}

fn read_header(tokens: &mut Tokens<'_>) -> Result<(usize, usize)> {
    let vertex_count: usize = tokens.expect("vertex count")?;
    let declared_edges: usize = tokens.expect("edge count")?;
    Ok((vertex_count, declared_edges))
}

/// Reads only the `<vertex count> <edge count>` header, so a caller can
/// refuse an input before any matrix is allocated
pub fn parse_header(input: &str) -> Result<(usize, usize)> {
    read_header(&mut Tokens::new(input))
}

/// Parses a graph from the edge-list text format.
///
/// The input starts with `<vertex count> <edge count>` followed by
/// `<tail> <head> <weight>` triples. Vertices are numbered from 1 in the
/// text and from 0 in the returned matrix. A repeated pair overwrites the
/// earlier weight; a zero weight stores no edge.
pub fn parse_graph<W>(input: &str) -> Result<AdjacencyMatrix<W>>
where
    W: Weight + FromStr,
{
    let mut tokens = Tokens::new(input);

    let (vertex_count, declared_edges) = read_header(&mut tokens)?;
    let mut graph = AdjacencyMatrix::new(vertex_count)?;

    let mut triples = 0;
    while let Some(token) = tokens.next_raw() {
        let tail: usize = tokens.parse(token, "tail vertex")?;
        let head: usize = tokens.expect("head vertex")?;
        let weight: W = tokens.expect("edge weight")?;

        let (tail, head) = match (to_zero_based(tail, vertex_count), to_zero_based(head, vertex_count)) {
            (Some(t), Some(h)) => (t, h),
            (None, _) => return Err(Error::InvalidVertex(tail)),
            (_, None) => return Err(Error::InvalidVertex(head)),
        };

        if weight.is_zero() {
            warn!("edge {} -> {} has weight 0 and cannot be stored", tail + 1, head + 1);
        }
        graph.set_edge_weight(tail, head, weight)?;
        triples += 1;
    }

    if triples != declared_edges {
        warn!("header declares {} edges, found {}", declared_edges, triples);
    }
    debug!(
        "loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

fn to_zero_based(vertex: usize, vertex_count: usize) -> Option<usize> {
    if vertex >= 1 && vertex <= vertex_count {
        Some(vertex - 1)
    } else {
        None
    }
}

/// Reads a whole stream and parses it as a graph
pub fn read_graph<W, R>(mut reader: R) -> Result<AdjacencyMatrix<W>>
where
    W: Weight + FromStr,
    R: Read,
{
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_graph(&input)
}

/// Loads a graph from a file
pub fn load_graph<W, P>(path: P) -> Result<AdjacencyMatrix<W>>
where
    W: Weight + FromStr,
    P: AsRef<Path>,
{
    let input = fs::read_to_string(path.as_ref())?;
    parse_graph(&input)
}
