/*!
# Graph Generators

This module provides builder-style generators for random graphs.

Each graph generator allows parameterized control over structural properties of the graph
and can produce either a complete collection of edges or a stream of them through iterators.
The typical usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using its builder methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

In addition, the [`RandomGraph`] trait abstracts the generation of whole graph instances
into reusable constructors. These implementations internally rely on the edge generators
and filter the edge stream according to the type's requirements (directed, undirected,
with or without self-loops).

All graph types implementing `GraphFromScratch` and `GraphType` can leverage the
`RandomGraph` trait for convenient random graph construction.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;

pub use gnp::*;

/// Trait for generators that produce random edge collections.
pub trait GraphGenerator {
    /// Generates all edges at once.
    ///
    /// ** Panics if mandatory parameters of the generator are not set. **
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Edge> {
        self.stream(rng).collect()
    }

    /// Generates edges lazily as an iterator.
    ///
    /// ** Panics if mandatory parameters of the generator are not set. **
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge>;
}

/// Random constructors for whole graph instances.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph with `n` nodes where every possible edge
    /// exists with probability `p`, independent from each other.
    ///
    /// May include self-loops.
    ///
    /// # Examples
    /// ```
    /// use densegraphs::{prelude::*, gens::*};
    ///
    /// let graph: AdjArrayUndir = RandomGraph::gnp(&mut rand::rng(), 100, 0.1);
    /// assert_eq!(graph.number_of_nodes(), 100);
    /// ```
    fn gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Self;

    /// Creates a random `G(n,p)` graph with `n` nodes without self-loops.
    fn gnp_no_loops<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Self;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch + GraphType,
{
    fn gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Self {
        Self::from_edges(
            n,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .stream(rng)
                .filter(|e| Self::is_directed() || e.is_normalized()),
        )
    }

    fn gnp_no_loops<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Self {
        Self::from_edges(
            n,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .stream(rng)
                .filter(|e| !e.is_loop() && (Self::is_directed() || e.is_normalized())),
        )
    }
}
