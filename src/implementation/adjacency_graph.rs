use crate::algo::children::max_new_children;
use crate::algo::traversal;
use crate::error::{ErrorKind, Result};
use crate::index::{GraphIndex, RawIndex, VertexIndex};
use crate::interface::{
    GraphBase, ImmutableGraphContainer, MutableGraphContainer, NavigableGraph, Neighbor,
    VertexIndices,
};
use std::collections::HashMap;
use std::hash::Hash;
use std::iter::Map;

/// A directed edge, stored in the adjacency list of its source vertex.
/// The destination is referenced by index, so the edge does not own it.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W, IndexType> {
    dest: VertexIndex<IndexType>,
    weight: W,
}

impl<W, IndexType: RawIndex> Edge<W, IndexType> {
    /// The head of this edge.
    pub fn dest(&self) -> VertexIndex<IndexType> {
        self.dest
    }

    /// The weight of this edge.
    pub fn weight(&self) -> &W {
        &self.weight
    }
}

/// A vertex of a [Graph](Graph), owning its payload and its outgoing edges.
#[derive(Debug, Clone)]
pub struct Vertex<T, W, IndexType> {
    index: VertexIndex<IndexType>,
    info: T,
    edges: Vec<Edge<W, IndexType>>,
}

impl<T, W, IndexType: RawIndex> Vertex<T, W, IndexType> {
    fn new(index: VertexIndex<IndexType>, info: T) -> Self {
        Self {
            index,
            info,
            edges: Vec::new(),
        }
    }

    /// The index of this vertex in its graph.
    pub fn index(&self) -> VertexIndex<IndexType> {
        self.index
    }

    /// The payload of this vertex.
    pub fn info(&self) -> &T {
        &self.info
    }

    /// The outgoing edges of this vertex in insertion order.
    pub fn edges(&self) -> &[Edge<W, IndexType>] {
        &self.edges
    }

    /// The amount of outgoing edges of this vertex.
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    fn add_edge(&mut self, dest: VertexIndex<IndexType>, weight: W) {
        self.edges.push(Edge { dest, weight });
    }

    /// Removes the first edge to `dest` and returns its weight.
    fn remove_edge_to(&mut self, dest: VertexIndex<IndexType>) -> Option<W> {
        let position = self.edges.iter().position(|edge| edge.dest == dest)?;
        Some(self.edges.remove(position).weight)
    }

    /// Removes all edges to `dest` and returns how many there were.
    fn remove_edges_to(&mut self, dest: VertexIndex<IndexType>) -> usize {
        let len_before = self.edges.len();
        self.edges.retain(|edge| edge.dest != dest);
        len_before - self.edges.len()
    }
}

/// A mutable directed graph with weighted edges, stored as adjacency lists.
///
/// Vertices are identified by their payload `T`, which must be unique within the graph.
/// They live in an arena of slots addressed by [VertexIndex](VertexIndex), and edges refer to their destination by index.
/// The graph remembers the order in which the live vertices were inserted, and all whole-graph operations use that order.
#[derive(Debug, Clone)]
pub struct Graph<T, W = f64, IndexType = usize> {
    slots: Vec<Option<Vertex<T, W, IndexType>>>,
    free_slots: Vec<VertexIndex<IndexType>>,
    vertex_order: Vec<VertexIndex<IndexType>>,
    lookup: HashMap<T, VertexIndex<IndexType>>,
    edge_count: usize,
}

impl<T, W, IndexType> Default for Graph<T, W, IndexType> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free_slots: Vec::new(),
            vertex_order: Vec::new(),
            lookup: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<T, W, IndexType: RawIndex> Graph<T, W, IndexType> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with space for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_slots: Vec::new(),
            vertex_order: Vec::with_capacity(capacity),
            lookup: HashMap::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// Returns the vertex with the given index, or `None` if there is no such vertex.
    pub fn vertex(&self, vertex_id: VertexIndex<IndexType>) -> Option<&Vertex<T, W, IndexType>> {
        self.slots.get(vertex_id.as_usize())?.as_ref()
    }

    fn vertex_mut(
        &mut self,
        vertex_id: VertexIndex<IndexType>,
    ) -> Option<&mut Vertex<T, W, IndexType>> {
        self.slots.get_mut(vertex_id.as_usize())?.as_mut()
    }

    /// Returns the vertices of this graph in the order they were inserted.
    pub fn vertex_set(&self) -> Vec<&Vertex<T, W, IndexType>> {
        self.vertex_order
            .iter()
            .filter_map(|&vertex_id| self.vertex(vertex_id))
            .collect()
    }
}

impl<T: Eq + Hash + Clone, W, IndexType: RawIndex> Graph<T, W, IndexType> {
    /// Adds a vertex with the given payload.
    /// Returns false and leaves the graph unchanged if a vertex with an equal payload exists.
    pub fn add_vertex(&mut self, info: T) -> bool {
        self.try_add_vertex(info).is_ok()
    }

    /// Removes the vertex with the given payload, together with its outgoing edges and all edges pointing to it.
    /// Returns false if there is no such vertex.
    pub fn remove_vertex(&mut self, info: &T) -> bool {
        self.try_remove_vertex(info).is_ok()
    }

    /// Adds an edge from the vertex `source` to the vertex `dest`.
    /// Returns false and leaves the graph unchanged if one of the vertices does not exist.
    pub fn add_edge(&mut self, source: &T, dest: &T, weight: W) -> bool {
        self.try_add_edge(source, dest, weight).is_ok()
    }

    /// Removes the first edge from the vertex `source` to the vertex `dest`.
    /// Returns false if one of the vertices or the edge does not exist.
    pub fn remove_edge(&mut self, source: &T, dest: &T) -> bool {
        self.try_remove_edge(source, dest).is_ok()
    }

    /// Returns the amount of edges from the vertex `source` to the vertex `dest`.
    pub fn edge_count_between(&self, source: &T, dest: &T) -> usize {
        match (self.find_vertex(source), self.find_vertex(dest)) {
            (Some(source), Some(dest)) => self
                .vertex(source)
                .map(|vertex| vertex.edges.iter().filter(|edge| edge.dest == dest).count())
                .unwrap_or(0),
            _ => 0,
        }
    }

    fn resolve_endpoints(
        &self,
        source: &T,
        dest: &T,
    ) -> Result<(VertexIndex<IndexType>, VertexIndex<IndexType>)> {
        match (self.find_vertex(source), self.find_vertex(dest)) {
            (Some(source), Some(dest)) => Ok((source, dest)),
            _ => {
                debug!("Edge endpoint does not exist");
                Err(ErrorKind::MissingVertex.into())
            }
        }
    }
}

impl<T: Eq + Hash + Clone, W: Copy, IndexType: RawIndex> Graph<T, W, IndexType> {
    /// Returns the weight of the first edge from the vertex `source` to the vertex `dest`.
    pub fn edge_weight(&self, source: &T, dest: &T) -> Option<W> {
        let (source, dest) = self.resolve_endpoints(source, dest).ok()?;
        self.out_neighbors(source)
            .find(|neighbor| neighbor.vertex_id == dest)
            .map(|neighbor| neighbor.weight)
    }

    /// Returns the payloads of all vertices in depth-first preorder.
    ///
    /// The search starts from every vertex not yet visited, in insertion order, so all vertices are visited exactly once.
    /// Outgoing edges are followed in the order they were added.
    pub fn dfs(&self) -> Vec<T> {
        self.payloads(traversal::dfs(self))
    }

    /// Returns the payloads of all vertices reachable from `start` in breadth-first order.
    /// Returns an empty vector if `start` is not a vertex of this graph.
    pub fn bfs(&self, start: VertexIndex<IndexType>) -> Vec<T> {
        self.payloads(traversal::bfs(self, start))
    }

    /// Like [bfs](Graph::bfs), but with the start vertex given by its payload.
    pub fn bfs_from(&self, start: &T) -> Option<Vec<T>> {
        self.find_vertex(start).map(|start| self.bfs(start))
    }

    /// Runs a breadth-first search from `start` and returns the largest amount of vertices discovered through a single vertex,
    /// together with the payload of the first vertex in breadth-first order that discovered that many.
    pub fn max_new_children(&self, start: VertexIndex<IndexType>) -> Option<(usize, T)> {
        let (children, vertex_id) = max_new_children(self, start)?;
        Some((children, self.vertex_data(vertex_id)?.clone()))
    }

    fn payloads(&self, order: Vec<VertexIndex<IndexType>>) -> Vec<T> {
        order
            .into_iter()
            .filter_map(|vertex_id| self.vertex_data(vertex_id).cloned())
            .collect()
    }
}

impl<T, W, IndexType: RawIndex> GraphBase for Graph<T, W, IndexType> {
    type VertexData = T;
    type Weight = W;
    type VertexIndex = VertexIndex<IndexType>;
}

impl<T: Eq + Hash, W, IndexType: RawIndex> ImmutableGraphContainer for Graph<T, W, IndexType> {
    fn vertex_indices(&self) -> VertexIndices<'_, Self::VertexIndex> {
        self.vertex_order.iter().copied()
    }

    fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn index_bound(&self) -> usize {
        self.slots.len()
    }

    fn contains_vertex_index(&self, vertex_id: Self::VertexIndex) -> bool {
        self.vertex(vertex_id).is_some()
    }

    fn vertex_data(&self, vertex_id: Self::VertexIndex) -> Option<&T> {
        self.vertex(vertex_id).map(Vertex::info)
    }

    fn find_vertex(&self, vertex_data: &T) -> Option<Self::VertexIndex> {
        self.lookup.get(vertex_data).copied()
    }
}

impl<T: Eq + Hash + Clone, W, IndexType: RawIndex> MutableGraphContainer
    for Graph<T, W, IndexType>
{
    fn try_add_vertex(&mut self, info: T) -> Result<Self::VertexIndex> {
        if self.lookup.contains_key(&info) {
            debug!("Rejected duplicate vertex");
            return Err(ErrorKind::DuplicateVertex.into());
        }

        let vertex_id = if let Some(vertex_id) = self.free_slots.pop() {
            vertex_id
        } else {
            let vertex_id = VertexIndex::from_usize(self.slots.len())
                .ok_or_else(|| ErrorKind::IndexOverflow(self.slots.len()))?;
            self.slots.push(None);
            vertex_id
        };

        self.lookup.insert(info.clone(), vertex_id);
        self.slots[vertex_id.as_usize()] = Some(Vertex::new(vertex_id, info));
        self.vertex_order.push(vertex_id);
        trace!("Added vertex {:?}", vertex_id);
        Ok(vertex_id)
    }

    fn try_remove_vertex(&mut self, info: &T) -> Result<T> {
        let vertex_id = match self.find_vertex(info) {
            Some(vertex_id) => vertex_id,
            None => {
                debug!("Cannot remove vertex that does not exist");
                return Err(ErrorKind::MissingVertex.into());
            }
        };

        // Purge all edges to the vertex before its slot is released.
        let mut purged_edges = 0;
        for &other_id in &self.vertex_order {
            if other_id == vertex_id {
                continue;
            }
            if let Some(other) = self.slots[other_id.as_usize()].as_mut() {
                purged_edges += other.remove_edges_to(vertex_id);
            }
        }

        let vertex = match self.slots[vertex_id.as_usize()].take() {
            Some(vertex) => vertex,
            None => return Err(ErrorKind::MissingVertex.into()),
        };
        self.edge_count -= purged_edges + vertex.edges.len();
        if let Some(position) = self.vertex_order.iter().position(|&v| v == vertex_id) {
            self.vertex_order.remove(position);
        }
        self.lookup.remove(info);
        self.free_slots.push(vertex_id);

        trace!(
            "Removed vertex {:?} with {} outgoing and {} incoming edges",
            vertex_id,
            vertex.edges.len(),
            purged_edges
        );
        Ok(vertex.info)
    }

    fn try_add_edge(&mut self, from: &T, to: &T, weight: W) -> Result<()> {
        let (from, to) = self.resolve_endpoints(from, to)?;
        self.try_add_edge_between(from, to, weight)
    }

    fn try_add_edge_between(
        &mut self,
        from: Self::VertexIndex,
        to: Self::VertexIndex,
        weight: W,
    ) -> Result<()> {
        if !self.contains_vertex_index(to) {
            debug!("Edge head {:?} does not exist", to);
            return Err(ErrorKind::MissingVertex.into());
        }

        match self.vertex_mut(from) {
            Some(vertex) => vertex.add_edge(to, weight),
            None => {
                debug!("Edge tail {:?} does not exist", from);
                return Err(ErrorKind::MissingVertex.into());
            }
        }

        self.edge_count += 1;
        trace!("Added edge ({:?}, {:?})", from, to);
        Ok(())
    }

    fn try_remove_edge(&mut self, from: &T, to: &T) -> Result<W> {
        let (from, to) = self.resolve_endpoints(from, to)?;
        let weight = self
            .vertex_mut(from)
            .and_then(|vertex| vertex.remove_edge_to(to));

        match weight {
            Some(weight) => {
                self.edge_count -= 1;
                trace!("Removed edge ({:?}, {:?})", from, to);
                Ok(weight)
            }
            None => {
                debug!("No edge ({:?}, {:?}) to remove", from, to);
                Err(ErrorKind::MissingEdge.into())
            }
        }
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.free_slots.clear();
        self.vertex_order.clear();
        self.lookup.clear();
        self.edge_count = 0;
    }
}

type EdgeNeighborTranslator<'a, W, IndexType> = Map<
    std::slice::Iter<'a, Edge<W, IndexType>>,
    fn(&'a Edge<W, IndexType>) -> Neighbor<VertexIndex<IndexType>, W>,
>;

fn edge_to_neighbor<W: Copy, IndexType: RawIndex>(
    edge: &Edge<W, IndexType>,
) -> Neighbor<VertexIndex<IndexType>, W> {
    Neighbor {
        vertex_id: edge.dest,
        weight: edge.weight,
    }
}

impl<'a, T: Eq + Hash + 'a, W: Copy + 'a, IndexType: RawIndex + 'a> NavigableGraph<'a>
    for Graph<T, W, IndexType>
{
    type OutNeighbors = EdgeNeighborTranslator<'a, W, IndexType>;

    fn out_neighbors(&'a self, vertex_id: Self::VertexIndex) -> Self::OutNeighbors {
        let edges = self.vertex(vertex_id).map(Vertex::edges).unwrap_or(&[]);
        edges
            .iter()
            .map(edge_to_neighbor as fn(&'a Edge<W, IndexType>) -> _)
    }

    fn out_degree(&'a self, vertex_id: Self::VertexIndex) -> usize {
        self.vertex(vertex_id).map(Vertex::out_degree).unwrap_or(0)
    }
}

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use crate::implementation::adjacency_graph::Graph;
    use crate::index::{GraphIndex, VertexIndex};
    use crate::interface::{ImmutableGraphContainer, MutableGraphContainer, NavigableGraph};

    fn graph_with_vertices(vertices: &[i32]) -> Graph<i32> {
        let mut graph = Graph::new();
        for &vertex in vertices {
            assert!(graph.add_vertex(vertex));
        }
        graph
    }

    #[test]
    fn test_duplicate_vertex_is_rejected() {
        let mut graph = graph_with_vertices(&[1, 2]);
        assert!(!graph.add_vertex(1));
        assert_eq!(graph.vertex_count(), 2);

        let error = graph.try_add_vertex(2).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::DuplicateVertex));
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_remove_vertex_purges_incoming_edges() {
        let mut graph = graph_with_vertices(&[0, 1, 2, 3]);
        assert!(graph.add_edge(&0, &2, 1.0));
        assert!(graph.add_edge(&1, &2, 1.0));
        assert!(graph.add_edge(&1, &2, 2.0));
        assert!(graph.add_edge(&1, &3, 3.0));
        assert!(graph.add_edge(&2, &3, 4.0));
        assert!(graph.add_edge(&2, &2, 5.0));
        assert!(graph.add_edge(&3, &2, 6.0));
        assert_eq!(graph.edge_count(), 7);

        assert!(graph.remove_vertex(&2));
        assert!(!graph.remove_vertex(&2));
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.contains_vertex(&2));

        for vertex in graph.vertex_set() {
            for edge in vertex.edges() {
                assert!(graph.contains_vertex_index(edge.dest()));
            }
        }
        assert_eq!(graph.edge_weight(&1, &3), Some(3.0));
    }

    #[test]
    fn test_missing_vertex_fails_edge_operations() {
        let mut graph = graph_with_vertices(&[1, 2]);
        assert!(!graph.add_edge(&1, &3, 1.0));
        assert!(!graph.add_edge(&3, &1, 1.0));
        assert!(!graph.remove_edge(&1, &3));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);

        let error = graph.try_add_edge(&4, &1, 1.0).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::MissingVertex));
        let error = graph.try_remove_vertex(&4).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::MissingVertex));
    }

    #[test]
    fn test_remove_edge_twice() {
        let mut graph = graph_with_vertices(&[1, 2]);
        assert!(graph.add_edge(&1, &2, 0.5));
        assert!(graph.remove_edge(&1, &2));
        assert!(!graph.remove_edge(&1, &2));
        assert_eq!(graph.edge_count(), 0);

        let error = graph.try_remove_edge(&1, &2).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::MissingEdge));
    }

    #[test]
    fn test_remove_edge_removes_first_parallel_edge_only() {
        let mut graph = graph_with_vertices(&[1, 2]);
        assert!(graph.add_edge(&1, &2, 1.0));
        assert!(graph.add_edge(&1, &2, 2.0));
        assert!(graph.add_edge(&1, &1, 3.0));
        assert_eq!(graph.edge_count_between(&1, &2), 2);

        assert_eq!(graph.try_remove_edge(&1, &2).unwrap(), 1.0);
        assert_eq!(graph.edge_count_between(&1, &2), 1);
        assert_eq!(graph.edge_weight(&1, &2), Some(2.0));
        assert_eq!(graph.edge_weight(&1, &1), Some(3.0));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_reused_slot_is_appended_to_vertex_order() {
        let mut graph = graph_with_vertices(&[10, 20, 30]);
        let removed_index = graph.find_vertex(&10).unwrap();
        assert!(graph.remove_vertex(&10));
        assert!(graph.add_vertex(40));

        assert_eq!(graph.find_vertex(&40), Some(removed_index));
        assert_eq!(graph.index_bound(), 3);
        let order: Vec<_> = graph.vertex_set().iter().map(|v| *v.info()).collect();
        assert_eq!(order, vec![20, 30, 40]);
        assert_eq!(graph.dfs(), vec![20, 30, 40]);
    }

    #[test]
    fn test_out_neighbors_follow_insertion_order() {
        let mut graph = graph_with_vertices(&[1, 2, 3]);
        assert!(graph.add_edge(&1, &3, 5.0));
        assert!(graph.add_edge(&1, &2, 1.0));
        let v1 = graph.find_vertex(&1).unwrap();

        let neighbors: Vec<_> = graph
            .out_neighbors(v1)
            .map(|neighbor| (*graph.vertex_data(neighbor.vertex_id).unwrap(), neighbor.weight))
            .collect();
        assert_eq!(neighbors, vec![(3, 5.0), (2, 1.0)]);
        assert_eq!(graph.out_degree(v1), 2);

        let missing = VertexIndex::from_usize(7).unwrap();
        assert_eq!(graph.out_neighbors(missing).count(), 0);
        assert_eq!(graph.out_degree(missing), 0);
        assert_eq!(graph.vertex_data(missing), None);
    }

    #[test]
    fn test_small_index_type_overflows() {
        let mut graph = Graph::<u16, f64, u8>::new();
        for vertex in 0..256 {
            assert!(graph.add_vertex(vertex));
        }

        let error = graph.try_add_vertex(256).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::IndexOverflow(256)));
        assert_eq!(graph.vertex_count(), 256);
        assert!(graph.remove_vertex(&3));
        assert!(graph.add_vertex(256));
    }

    #[test]
    fn test_clear_and_clone() {
        let mut graph = graph_with_vertices(&[1, 2, 3]);
        assert!(graph.add_edge(&1, &2, 1.0));
        let copy = graph.clone();

        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.index_bound(), 0);

        assert_eq!(copy.vertex_count(), 3);
        assert_eq!(copy.edge_weight(&1, &2), Some(1.0));
        assert!(graph.add_vertex(1));
    }

    #[test]
    fn test_string_payloads() {
        let mut graph: Graph<String, u32> = Graph::new();
        assert!(graph.add_vertex("a".to_owned()));
        assert!(graph.add_vertex("b".to_owned()));
        assert!(graph.add_edge(&"a".to_owned(), &"b".to_owned(), 7));
        assert_eq!(graph.edge_weight(&"a".to_owned(), &"b".to_owned()), Some(7));
        assert_eq!(
            graph.try_remove_vertex(&"a".to_owned()).unwrap(),
            "a".to_owned()
        );
        assert_eq!(graph.edge_count(), 0);
    }
}
