/*!
# Node Representation

Nodes are dense identifiers: a graph on `n` nodes uses exactly the values
`0..n`. We choose `Node = u32` as almost all use-cases involve less than
`2^32` nodes. This (1) saves space compared to `usize` and (2) lets node
values double as indices into per-node arrays without any abstraction layer.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
///
/// Used as sentinel for "no parent", "unranked", or "unreached" entries in
/// per-node arrays.
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
