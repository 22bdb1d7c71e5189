use log::warn;

/// Rebuilds the source -> target vertex sequence from a predecessor array.
///
/// The walk runs backwards from `target` and appends each vertex after its
/// predecessor has been emitted, so the result comes out in source -> target
/// order. An unreached target yields an empty path.
pub fn build_path(predecessors: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    let mut path = Vec::new();
    if target < predecessors.len() {
        emit(predecessors, source, target, 0, &mut path);
    }
    path
}

fn emit(
    predecessors: &[Option<usize>],
    source: usize,
    node: usize,
    depth: usize,
    path: &mut Vec<usize>,
) -> bool {
    if node == source {
        path.push(node);
        return true;
    }

    // A shortest-path tree never holds more than V links
    if depth >= predecessors.len() {
        warn!("predecessor chain from {} does not reach source {}", node, source);
        return false;
    }

    match predecessors.get(node).copied().flatten() {
        Some(previous) if emit(predecessors, source, previous, depth + 1, path) => {
            path.push(node);
            true
        }
        _ => false,
    }
}
