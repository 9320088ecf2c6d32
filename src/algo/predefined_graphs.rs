use crate::error::Result;
use crate::interface::MutableGraphContainer;
use rand::Rng;

/// Adds a fresh vertex whose payload is the current vertex count of the graph.
fn add_numbered_vertex<Graph: MutableGraphContainer>(graph: &mut Graph) -> Result<Graph::VertexIndex>
where
    Graph::VertexData: From<usize>,
{
    let payload = graph.vertex_count().into();
    graph.try_add_vertex(payload)
}

/// Adds a chain of `length` vertices to the given graph, with an edge from each vertex to its successor.
/// Returns the first vertex of the chain, or `None` if `length` is zero.
///
/// Payloads are numbered consecutively starting from the vertex count of the graph,
/// so this fails with `DuplicateVertex` if the graph already contains one of them.
pub fn create_chain<Graph: MutableGraphContainer>(
    graph: &mut Graph,
    length: usize,
) -> Result<Option<Graph::VertexIndex>>
where
    Graph::VertexData: From<usize>,
    Graph::Weight: Default,
{
    if length == 0 {
        return Ok(None);
    }

    let first = add_numbered_vertex(graph)?;
    let mut last = first;
    for _ in 1..length {
        let next = add_numbered_vertex(graph)?;
        graph.try_add_edge_between(last, next, Default::default())?;
        last = next;
    }

    Ok(Some(first))
}

/// Adds a binary tree to the given graph, with edges pointing from parents to children.
/// The first added vertex is the root of the tree.
/// A negative depth adds no vertices to the graph, a depth of 0 just the root, a depth of 1 the root an its children, and so on.
pub fn create_binary_tree<Graph: MutableGraphContainer>(
    graph: &mut Graph,
    depth: i32,
) -> Result<Option<Graph::VertexIndex>>
where
    Graph::VertexData: From<usize>,
    Graph::Weight: Default,
{
    if depth < 0 {
        return Ok(None);
    }

    let root = add_numbered_vertex(graph)?;
    let mut level = vec![root];
    for _ in 0..depth {
        let mut next_level = Vec::with_capacity(level.len() * 2);
        for &parent in &level {
            for _ in 0..2 {
                let child = add_numbered_vertex(graph)?;
                graph.try_add_edge_between(parent, child, Default::default())?;
                next_level.push(child);
            }
        }
        level = next_level;
    }

    Ok(Some(root))
}

/// Adds `vertex_amount` vertices and `edge_amount` edges between the added vertices, with endpoints drawn uniformly at random.
/// Self loops and parallel edges may occur.
pub fn create_random_graph<Graph: MutableGraphContainer, Random: Rng>(
    graph: &mut Graph,
    vertex_amount: usize,
    edge_amount: usize,
    random: &mut Random,
) -> Result<()>
where
    Graph::VertexData: From<usize>,
    Graph::Weight: Default,
{
    let mut vertices = Vec::with_capacity(vertex_amount);
    for _ in 0..vertex_amount {
        vertices.push(add_numbered_vertex(graph)?);
    }

    if vertices.is_empty() {
        return Ok(());
    }

    for _ in 0..edge_amount {
        let from = vertices[random.gen_range(0..vertices.len())];
        let to = vertices[random.gen_range(0..vertices.len())];
        graph.try_add_edge_between(from, to, Default::default())?;
    }

    Ok(())
}
