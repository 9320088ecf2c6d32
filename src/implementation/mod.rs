/// An adjacency list graph with an arena of vertices.
pub mod adjacency_graph;
/// A visited set for traversals based on bitvectors.
pub mod bit_vector_visited;
