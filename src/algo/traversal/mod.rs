use crate::implementation::bit_vector_visited::VisitedSet;
use crate::interface::NavigableGraph;
use std::collections::VecDeque;

/// Returns the vertices of the graph in depth-first preorder, covering all vertices.
///
/// Roots are tried in vertex-set order, and each root not visited by an earlier search starts a new search.
pub fn dfs<'a, Graph: NavigableGraph<'a>>(graph: &'a Graph) -> Vec<Graph::VertexIndex> {
    let mut traversal = PreOrderDfs::new_without_start(graph);
    let mut result = Vec::with_capacity(graph.vertex_count());

    for root in graph.vertex_indices() {
        if traversal.continue_traversal_from(root) {
            result.extend(&mut traversal);
        }
    }

    debug_assert_eq!(result.len(), graph.vertex_count());
    result
}

/// Returns the vertices reachable from `start` in breadth-first order.
/// The result is empty if `start` is not a vertex of the graph.
pub fn bfs<'a, Graph: NavigableGraph<'a>>(
    graph: &'a Graph,
    start: Graph::VertexIndex,
) -> Vec<Graph::VertexIndex> {
    let mut traversal = PreOrderBfs::new_without_start(graph);
    if traversal.continue_traversal_from(start) {
        traversal.collect()
    } else {
        Vec::new()
    }
}

/// A forward breadth-first search that yields each reached vertex once.
///
/// Vertices are marked visited when they are enqueued, so no vertex is ever enqueued twice.
/// The traversal owns its visited set, which can be kept across several starts with
/// [continue_traversal_from](PreOrderBfs::continue_traversal_from) or cleared with [reset](PreOrderBfs::reset).
pub struct PreOrderBfs<'a, Graph: NavigableGraph<'a>> {
    graph: &'a Graph,
    queue: VecDeque<Graph::VertexIndex>,
    visited: VisitedSet,
    new_children_of_last: usize,
}

impl<'a, Graph: NavigableGraph<'a>> PreOrderBfs<'a, Graph> {
    /// Creates a new traversal that operates on the given graph starting from the given vertex.
    pub fn new(graph: &'a Graph, start: Graph::VertexIndex) -> Self {
        let mut result = Self::new_without_start(graph);
        result.continue_traversal_from(start);
        result
    }

    /// Creates a new traversal that operates on the given graph.
    /// Does not start the traversal.
    pub fn new_without_start(graph: &'a Graph) -> Self {
        Self {
            graph,
            queue: VecDeque::new(),
            visited: VisitedSet::new(graph),
            new_children_of_last: 0,
        }
    }

    /// Resets the traversal to start from the given vertex, forgetting all visited vertices.
    pub fn reset(&mut self, start: Graph::VertexIndex) {
        self.queue.clear();
        self.visited.reset();
        self.new_children_of_last = 0;
        self.continue_traversal_from(start);
    }

    /// Continues the traversal from the given vertex without resetting the visited vertices.
    /// Returns false and does nothing if the vertex does not exist or was visited already.
    pub fn continue_traversal_from(&mut self, start: Graph::VertexIndex) -> bool {
        if !self.graph.contains_vertex_index(start) || !self.visited.insert(start) {
            return false;
        }

        self.queue.push_back(start);
        true
    }

    /// Returns true if the given vertex has been reached by this traversal.
    pub fn is_visited(&self, vertex_id: Graph::VertexIndex) -> bool {
        self.visited.contains(vertex_id)
    }

    /// Returns the amount of vertices that were first discovered when expanding the vertex returned last by `next`.
    pub fn new_children_of_last(&self) -> usize {
        self.new_children_of_last
    }
}

impl<'a, Graph: NavigableGraph<'a>> Iterator for PreOrderBfs<'a, Graph> {
    type Item = Graph::VertexIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.queue.pop_front()?;
        let mut new_children = 0;

        for neighbor in self.graph.out_neighbors(first) {
            if self.visited.insert(neighbor.vertex_id) {
                self.queue.push_back(neighbor.vertex_id);
                new_children += 1;
            }
        }

        self.new_children_of_last = new_children;
        Some(first)
    }
}

/// A forward depth-first search that yields each reached vertex once, in preorder.
///
/// The order is the same as that of the recursive formulation, which descends into each unvisited out-neighbor in adjacency-list order.
/// Instead of the call stack, the traversal keeps an explicit stack with one neighbor iterator per vertex on the current path,
/// so the depth of the search is only bounded by the available heap memory.
pub struct PreOrderDfs<'a, Graph: NavigableGraph<'a>> {
    graph: &'a Graph,
    stack: Vec<Graph::OutNeighbors>,
    pending_root: Option<Graph::VertexIndex>,
    visited: VisitedSet,
}

impl<'a, Graph: NavigableGraph<'a>> PreOrderDfs<'a, Graph> {
    /// Creates a new traversal that operates on the given graph starting from the given vertex.
    pub fn new(graph: &'a Graph, start: Graph::VertexIndex) -> Self {
        let mut result = Self::new_without_start(graph);
        result.continue_traversal_from(start);
        result
    }

    /// Creates a new traversal that operates on the given graph.
    /// Does not start the traversal.
    pub fn new_without_start(graph: &'a Graph) -> Self {
        Self {
            graph,
            stack: Vec::new(),
            pending_root: None,
            visited: VisitedSet::new(graph),
        }
    }

    /// Resets the traversal to start from the given vertex, forgetting all visited vertices.
    pub fn reset(&mut self, start: Graph::VertexIndex) {
        self.stack.clear();
        self.pending_root = None;
        self.visited.reset();
        self.continue_traversal_from(start);
    }

    /// Continues the traversal from the given vertex without resetting the visited vertices.
    /// Returns false and does nothing if the vertex does not exist or was visited already.
    ///
    /// The previous search must have been run to completion.
    pub fn continue_traversal_from(&mut self, start: Graph::VertexIndex) -> bool {
        debug_assert!(self.stack.is_empty());
        debug_assert!(self.pending_root.is_none());
        if !self.graph.contains_vertex_index(start) || !self.visited.insert(start) {
            return false;
        }

        self.pending_root = Some(start);
        true
    }

    /// Returns true if the given vertex has been reached by this traversal.
    pub fn is_visited(&self, vertex_id: Graph::VertexIndex) -> bool {
        self.visited.contains(vertex_id)
    }

    /// Returns the amount of vertices on the path from the current root to the vertex returned last by `next`.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<'a, Graph: NavigableGraph<'a>> Iterator for PreOrderDfs<'a, Graph> {
    type Item = Graph::VertexIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.pending_root.take() {
            self.stack.push(self.graph.out_neighbors(root));
            return Some(root);
        }

        loop {
            let neighbor = self.stack.last_mut()?.next();
            match neighbor {
                Some(neighbor) => {
                    if self.visited.insert(neighbor.vertex_id) {
                        self.stack
                            .push(self.graph.out_neighbors(neighbor.vertex_id));
                        return Some(neighbor.vertex_id);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
