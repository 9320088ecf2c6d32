use crate::index::GraphIndex;
use crate::interface::ImmutableGraphContainer;
use bitvector::BitVector;

/// The set of vertices visited by a traversal, stored as a bitvector over the vertex arena of a graph.
///
/// Each traversal owns its own set, so the vertices themselves carry no traversal state.
pub struct VisitedSet {
    visited: BitVector,
}

impl VisitedSet {
    /// Creates a set with all vertices of the given graph unvisited.
    pub fn new<Graph: ImmutableGraphContainer>(graph: &Graph) -> Self {
        Self::with_bound(graph.index_bound())
    }

    /// Creates a set that can hold indices below `index_bound`, all unvisited.
    pub fn with_bound(index_bound: usize) -> Self {
        Self {
            visited: BitVector::new(index_bound),
        }
    }

    /// Returns true if the given vertex has been visited.
    /// Indices outside of the set are never visited.
    pub fn contains<VertexIndex: GraphIndex>(&self, vertex_id: VertexIndex) -> bool {
        let bit = vertex_id.as_usize();
        bit < self.visited.capacity() && self.visited.contains(bit)
    }

    /// Marks the given vertex as visited.
    /// Returns true if it was unvisited before.
    ///
    /// Panics if the index is not valid for the graph passed in the constructor.
    pub fn insert<VertexIndex: GraphIndex>(&mut self, vertex_id: VertexIndex) -> bool {
        let bit = vertex_id.as_usize();
        assert!(bit < self.visited.capacity());
        if self.visited.contains(bit) {
            false
        } else {
            self.visited.insert(bit);
            true
        }
    }

    /// Marks all vertices as unvisited.
    pub fn reset(&mut self) {
        self.visited = BitVector::new(self.visited.capacity());
    }
}

#[cfg(test)]
mod test {
    use crate::implementation::bit_vector_visited::VisitedSet;
    use crate::index::{GraphIndex, VertexIndex};

    #[test]
    fn test_vertices_are_visited_once() {
        let mut visited = VisitedSet::with_bound(10);
        let v3 = VertexIndex::<usize>::from_usize(3).unwrap();
        let v9 = VertexIndex::<usize>::from_usize(9).unwrap();
        let v12 = VertexIndex::<usize>::from_usize(12).unwrap();

        assert!(!visited.contains(v3));
        assert!(visited.insert(v3));
        assert!(!visited.insert(v3));
        assert!(visited.contains(v3));
        assert!(visited.insert(v9));
        assert!(!visited.contains(v12));

        visited.reset();
        assert!(!visited.contains(v3));
        assert!(!visited.contains(v9));
        assert!(visited.insert(v3));
    }
}
