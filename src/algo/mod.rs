/// The vertex discovering the most new vertices in a breadth-first search.
pub mod children;
/// Functions to fill graphs with parameterisable shapes, like chains and binary trees.
pub mod predefined_graphs;
/// Preorder breadth and depth first traversals.
pub mod traversal;
