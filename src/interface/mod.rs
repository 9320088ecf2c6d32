//! The graph traits.
//!
//! The traits are roughly split up by different access types:
//!  - immutable reference (`ImmutableGraphContainer`)
//!  - mutable reference (`MutableGraphContainer`)
//!  - immutable reference that must outlive the return value (`NavigableGraph`)
//!
//! Vertices are identified by their payload when mutating the graph, and by their [VertexIndex](crate::index::VertexIndex) when navigating it.

use crate::error::Result;
use crate::index::GraphIndex;

/// An iterator over the vertex indices of a graph in vertex-set order.
pub type VertexIndices<'a, VertexIndex> = std::iter::Copied<std::slice::Iter<'a, VertexIndex>>;

/// Contains the associated types of a graph.
pub trait GraphBase {
    /// The payload type of the vertices, unique within a graph.
    type VertexData;
    /// The weight type of the edges.
    type Weight;
    /// The index type used for vertices.
    type VertexIndex: GraphIndex;
}

/// A container that contains a set of vertices and their outgoing edges.
pub trait ImmutableGraphContainer: GraphBase {
    /// Returns an iterator over the indices of the live vertices, in the order they were inserted.
    fn vertex_indices(&self) -> VertexIndices<'_, Self::VertexIndex>;

    /// Returns the amount of vertices in this graph.
    fn vertex_count(&self) -> usize;

    /// Returns the amount of edges in this graph.
    fn edge_count(&self) -> usize;

    /// Returns an exclusive upper bound for the `usize` value of all vertex indices of this graph.
    /// Used to size per-vertex bookkeeping such as visited sets.
    fn index_bound(&self) -> usize;

    /// Returns true if the given index refers to a live vertex of this graph.
    fn contains_vertex_index(&self, vertex_id: Self::VertexIndex) -> bool;

    /// Returns the payload of the vertex with the given index, or `None` if there is no such vertex.
    fn vertex_data(&self, vertex_id: Self::VertexIndex) -> Option<&Self::VertexData>;

    /// Returns the index of the vertex with the given payload, or `None` if there is no such vertex.
    fn find_vertex(&self, vertex_data: &Self::VertexData) -> Option<Self::VertexIndex>;

    /// Returns true if this graph contains a vertex with the given payload.
    fn contains_vertex(&self, vertex_data: &Self::VertexData) -> bool {
        self.find_vertex(vertex_data).is_some()
    }

    /// Returns true if the graph is empty, i.e. contains no vertices or edges.
    fn is_empty(&self) -> bool {
        // Zero vertices must imply zero edges.
        debug_assert!(self.vertex_count() != 0 || self.edge_count() == 0);
        self.vertex_count() == 0
    }
}

/// A container that allows adding and removing vertices and edges.
///
/// All methods leave the graph unchanged when they return an error.
pub trait MutableGraphContainer: ImmutableGraphContainer {
    /// Adds a new vertex with the given payload to the graph.
    /// Fails with `DuplicateVertex` if a vertex with an equal payload exists.
    fn try_add_vertex(&mut self, vertex_data: Self::VertexData) -> Result<Self::VertexIndex>;

    /// Removes the vertex with the given payload as well as all edges from and to it.
    /// Returns the payload stored in the graph.
    fn try_remove_vertex(&mut self, vertex_data: &Self::VertexData) -> Result<Self::VertexData>;

    /// Appends a new edge `(from, to)` to the adjacency list of `from`.
    /// Self loops and parallel edges are allowed.
    fn try_add_edge(
        &mut self,
        from: &Self::VertexData,
        to: &Self::VertexData,
        weight: Self::Weight,
    ) -> Result<()>;

    /// Like [try_add_edge](MutableGraphContainer::try_add_edge), but with the endpoints given as indices.
    fn try_add_edge_between(
        &mut self,
        from: Self::VertexIndex,
        to: Self::VertexIndex,
        weight: Self::Weight,
    ) -> Result<()>;

    /// Removes the first edge `(from, to)` in the adjacency list of `from` and returns its weight.
    fn try_remove_edge(
        &mut self,
        from: &Self::VertexData,
        to: &Self::VertexData,
    ) -> Result<Self::Weight>;

    /// Removes all vertices and edges from the graph.
    fn clear(&mut self);
}

/// A graph that can be navigated, i.e. that can iterate the neighbors of its vertices.
pub trait NavigableGraph<'a>: ImmutableGraphContainer + Sized {
    /// The iterator type used to iterate over the outgoing neighbors of a vertex.
    type OutNeighbors: Iterator<Item = Neighbor<Self::VertexIndex, Self::Weight>>;

    /// Returns an iterator over the outgoing neighbors of the given vertex in adjacency-list order.
    /// The iterator is empty if the vertex does not exist.
    fn out_neighbors(&'a self, vertex_id: Self::VertexIndex) -> Self::OutNeighbors;

    /// Returns the amount of outgoing edges from a vertex.
    fn out_degree(&'a self, vertex_id: Self::VertexIndex) -> usize {
        self.out_neighbors(vertex_id).count()
    }
}

/// The neighbor of a vertex, given as the neighbor itself together with the weight of the edge used to reach it.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Neighbor<VertexIndex, Weight> {
    /// The neighboring vertex.
    pub vertex_id: VertexIndex,
    /// The weight of the edge used to reach the neighboring vertex.
    pub weight: Weight,
}
