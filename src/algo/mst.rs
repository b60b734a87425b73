/*!
Minimum spanning trees of edge-weighted undirected graphs.

Both engines compute a minimum spanning forest on disconnected inputs, i.e.
a minimum spanning tree of every connected component. [`KruskalMst`] grows
the forest globally cheapest-edge-first and rejects edges joining already
connected nodes via union-find. [`LazyPrimMst`] grows one tree per component
from its crossing edges, discarding edges that turned stale on the heap.

While the tree itself is only unique for pairwise distinct weights, all
minimum spanning trees of a graph share the same total weight.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use super::*;

/// Minimum spanning forest computed with Kruskal's algorithm.
pub struct KruskalMst {
    edges: Vec<WeightedEdge>,
    weight: f64,
}

impl KruskalMst {
    /// Computes a minimum spanning forest of `graph`.
    ///
    /// # Examples
    /// ```
    /// use densegraphs::{prelude::*, algo::*};
    ///
    /// let graph = WeightedGraph::from_weighted_edges(
    ///     3,
    ///     [(0, 1, 0.5), (1, 2, 0.3), (0, 2, 1.0)],
    /// );
    ///
    /// let mst = KruskalMst::new(&graph);
    /// assert_eq!(mst.edges().count(), 2);
    /// assert!((mst.total_weight() - 0.8).abs() < 1e-10);
    /// ```
    pub fn new(graph: &WeightedGraph) -> Self {
        let mut pq: BinaryHeap<_> = graph.edges().map(Reverse).collect();
        let mut union_find = UnionFind::new(graph.number_of_nodes());

        let mut edges = Vec::new();
        let mut weight = 0.0;

        while let Some(Reverse(edge)) = pq.pop() {
            // a spanning forest has at most n - 1 edges
            if edges.len() + 1 == graph.number_of_nodes() as usize {
                break;
            }

            let Edge(u, v) = edge.endpoints();
            if union_find.union(u, v) {
                weight += edge.weight();
                edges.push(edge);
            }
        }

        Self { edges, weight }
    }

    /// Returns the edges of the forest in order of insertion.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.edges.iter().copied()
    }

    /// Returns the summed weight of all forest edges.
    pub fn total_weight(&self) -> f64 {
        self.weight
    }
}

/// Minimum spanning forest computed with the lazy variant of Prim's algorithm.
///
/// The heap may hold edges whose endpoints both joined the tree after the
/// edge was pushed. Such stale edges are detected and skipped when popped.
pub struct LazyPrimMst {
    edges: Vec<WeightedEdge>,
    weight: f64,
}

impl LazyPrimMst {
    /// Computes a minimum spanning forest of `graph`.
    pub fn new(graph: &WeightedGraph) -> Self {
        let mut marked = graph.vertex_bitset_unset();
        let mut pq = BinaryHeap::new();

        let mut edges = Vec::new();
        let mut weight = 0.0;

        for root in graph.vertices_range() {
            if marked.get_bit(root) {
                continue;
            }

            Self::scan(graph, root, &mut marked, &mut pq);
            while let Some(Reverse(edge)) = pq.pop() {
                let u = edge.either();
                let v = edge.other(u);
                if marked.get_bit(u) && marked.get_bit(v) {
                    continue;
                }

                weight += edge.weight();
                edges.push(edge);
                if !marked.get_bit(u) {
                    Self::scan(graph, u, &mut marked, &mut pq);
                }
                if !marked.get_bit(v) {
                    Self::scan(graph, v, &mut marked, &mut pq);
                }
            }
        }

        Self { edges, weight }
    }

    /// Adds `v` to the tree and pushes all its edges crossing out of it.
    fn scan(
        graph: &WeightedGraph,
        v: Node,
        marked: &mut NodeBitSet,
        pq: &mut BinaryHeap<Reverse<WeightedEdge>>,
    ) {
        marked.set_bit(v);
        for edge in graph.edges_of(v) {
            if !marked.get_bit(edge.other(v)) {
                pq.push(Reverse(edge));
            }
        }
    }

    /// Returns the edges of the forest in order of insertion.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.edges.iter().copied()
    }

    /// Returns the summed weight of all forest edges.
    pub fn total_weight(&self) -> f64 {
        self.weight
    }
}
