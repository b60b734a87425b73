/*!
`densegraphs` is a graph data structure & algorithms library designed for graphs whose
nodes are **dense integer ids**: a graph on `n` nodes uses exactly the ids `0` to `n - 1`.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

All graphs behave as **edge multisets**: parallel edges are stored once per insertion and
self-loops are allowed. Once built, graphs are only read by the algorithms.

### Directed vs Undirected

We support both **directed** and **undirected** graphs:

- In an **undirected** graph, `Edge(u, v)` is treated as equivalent to `Edge(v, u)` (although we normalize edges often).
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are considered distinct.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir) / [`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir)
- [`AdjArray`](crate::repr::AdjArray) / [`SparseAdjArray`](crate::repr::SparseAdjArray) (directed)
- [`WeightedGraph`](crate::repr::WeightedGraph) (undirected, real-valued edge weights)

The `Sparse`-variants store small neighborhoods inline and only make different trade-offs
in terms of memory usage; all representations share the same behavior.

# Design

Algorithms are provided as structs that precompute their answers from a borrowed graph and
then serve queries in constant time (e.g. [`algo::BreadthFirstPaths`], [`algo::ConnectedComponents`]).
The most commonly used entry points are additionally implemented via traits on the graph itself,
making them usable without naming the algorithm struct (e.g. `graph.bfs(start_node)` or
`graph.connected_components()`).

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all standard graph representations,
- [`algo`] includes traversal iterators, shortest path queries, connectivity, cycle detection, topological orderings, and minimum spanning trees,
- [`gens`] includes random graph generators to generate `G(n,p)` graphs at runtime,
- [`io`] includes handlers for reading various graph formats from input or writing a given graph to an output,
- [`utils`] includes helper traits and structs such as the [`utils::Set`] abstraction and a union-find forest.

In most use-cases, `use densegraphs::{prelude::*, algo::*};` suffices for your needs.

# When to use
You should only use this library if the following apply:
- Your graphs use dense unlabelled integer ids
- You want to work in *Rust*
- You require only basic functionality for graphs.
- Performance is important

In all other cases, it might make sense for you to check out [petgraph](https://crates.io/crates/petgraph) who provide a more extensive library for general graphs in *Rust* or [NetworKit](https://networkit.github.io/) who provide high-performance graph algorithms in *C++* and *Python*.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `densegraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
