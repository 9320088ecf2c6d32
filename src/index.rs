use num_traits::{NumCast, PrimInt};
use std::fmt::{Debug, Formatter};
use std::hash::Hash;

/// The primitive integer types that can back a [VertexIndex](VertexIndex).
/// The integer type bounds the amount of arena slots a graph can hold.
pub trait RawIndex: PrimInt + Hash + Debug {}
impl<T: PrimInt + Hash + Debug> RawIndex for T {}

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// The index of a vertex, i.e. the number of its slot in the vertex arena of a graph.
/// Indices stay stable while the vertex is alive, but the slot of a removed vertex may be reused by a later insertion.
pub struct VertexIndex<IndexType: Sized>(IndexType);

/// A strongly typed graph index.
pub trait GraphIndex: Debug + Eq + Ord + Hash + Copy + Sized {
    // We don't wanna have GraphIndex: Into<usize>, to make this type strong, i.e. make it hard to accidentally convert it to a different type.
    /// Get this index as `usize`.
    fn as_usize(self) -> usize;

    /// Create an index from a `usize`, or return `None` if the value does not fit into the underlying integer type.
    fn from_usize(raw: usize) -> Option<Self>;
}

impl<IndexType: RawIndex> GraphIndex for VertexIndex<IndexType> {
    fn as_usize(self) -> usize {
        // Every index is created from a `usize`, so the conversion back cannot fail.
        <usize as NumCast>::from(self.0).unwrap_or(usize::MAX)
    }

    fn from_usize(raw: usize) -> Option<Self> {
        <IndexType as NumCast>::from(raw).map(Self)
    }
}

impl<IndexType: Debug> Debug for VertexIndex<IndexType> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl<IndexType: RawIndex> std::fmt::Display for VertexIndex<IndexType> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}
