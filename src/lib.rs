//! A mutable directed graph with weighted edges, stored as adjacency lists, together with preorder traversals.
//!
//! Vertices carry a unique payload that callers use to address them.
//! The graph owns its vertices in an arena, and edges reference their destination by [VertexIndex](index::VertexIndex),
//! so removing a vertex can never leave a dangling edge behind.
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// Algorithms on the graph traits, like traversals.
pub mod algo;
/// Contains the error types used by this crate.
pub mod error;
/// The graph implementation and its helpers.
pub mod implementation;
/// Strongly typed vertex indices.
pub mod index;
/// The graph traits.
pub mod interface;

pub use implementation::adjacency_graph::{Edge, Graph, Vertex};
pub use index::{GraphIndex, VertexIndex};
pub use interface::{ImmutableGraphContainer, MutableGraphContainer, NavigableGraph};
