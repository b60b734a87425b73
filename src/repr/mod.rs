/*!
# Graph Representations

All graphs in this crate are adjacency-list based and behave as edge
multisets: inserting an edge never fails on valid endpoints, parallel edges
are kept once per insertion, and self-loops are stored with the convention
of the respective graph type. Once built, graphs are only read by the
algorithms; there is no removal API.

## Provided Representations

- [`AdjArrayUndir`] / [`SparseAdjArrayUndir`]: undirected graphs over
  `Vec`- or `SmallVec`-backed neighborhoods.
- [`AdjArray`] / [`SparseAdjArray`]: directed graphs storing outgoing
  neighborhoods plus an in-degree counter per node.
- [`WeightedGraph`]: undirected graphs with real-valued edge weights.

The unweighted representations are parameterized by a [`Neighborhood`]
container which controls how adjacency information is stored.
*/

mod directed;
mod neighborhood;
mod undirected;
mod weighted;

pub use directed::*;
pub use neighborhood::*;
pub use undirected::*;
pub use weighted::*;
