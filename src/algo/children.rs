use crate::algo::traversal::PreOrderBfs;
use crate::interface::NavigableGraph;

/// Runs a breadth-first search from `start` and returns the vertex that discovered the most new vertices,
/// i.e. the vertex with the most children in the breadth-first search tree, together with its amount of children.
///
/// Ties are broken in favour of the vertex visited first.
/// Returns `None` if `start` is not a vertex of the graph.
pub fn max_new_children<'a, Graph: NavigableGraph<'a>>(
    graph: &'a Graph,
    start: Graph::VertexIndex,
) -> Option<(usize, Graph::VertexIndex)> {
    let mut bfs = PreOrderBfs::new_without_start(graph);
    if !bfs.continue_traversal_from(start) {
        return None;
    }

    let mut best: Option<(usize, Graph::VertexIndex)> = None;
    while let Some(vertex_id) = bfs.next() {
        let children = bfs.new_children_of_last();
        match best {
            Some((best_children, _)) if best_children >= children => {}
            _ => best = Some((children, vertex_id)),
        }
    }

    best
}
