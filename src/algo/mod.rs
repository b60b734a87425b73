/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use densegraphs::algo::*;
```
and gain access to traversal, connectivity, cycle detection, ordering, and spanning tree routines.
Where it helps, algorithms are provided as **iterators**, making it easy to consume results lazily;
the path and order structures are computed eagerly and answer queries in constant time.
*/

mod connectivity;
mod cycle;
mod mst;
mod order;
mod traversal;

use crate::{prelude::*, utils::*};

pub use connectivity::*;
pub use cycle::*;
pub use mst::*;
pub use order::*;
pub use traversal::*;
