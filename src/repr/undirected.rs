/*!
# Undirected Graph Representations

An undirected edge `{u, v}` is stored in the neighborhoods of both
endpoints. A self-loop `{u, u}` therefore contributes two entries to the
neighborhood of `u` and counts twice towards its degree, while the edge
itself is counted once in the edge total.

[`UndirectedGraph`] is parameterized by a [`Neighborhood`] type which
controls how adjacency information is stored.
*/

use std::fmt::{self, Display};

use crate::{
    prelude::*, repr::neighborhood::macros::impl_common_graph_ops, testing::test_graph_ops,
};

/// An undirected multigraph with one neighborhood container per node.
///
/// # Type parameters
/// - `Nbs`: [`Neighborhood`] implementation used for adjacency.
#[derive(Clone)]
pub struct UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Undirected graph using adjacency arrays (`Vec<Node>`).
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Undirected graph using sparse adjacency arrays (`SmallVec<[Node; N]>`).
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

impl_common_graph_ops!(UndirectedGraph<Nbs> => nbs, Undirected);

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        // Every non-loop edge appears once in normalized direction. The two
        // entries a self-loop leaves in its neighborhood collapse into one
        // reported edge by only emitting every second occurrence.
        self.vertices_range().flat_map(move |u| {
            let mut loops = 0;
            self.nbs[u as usize].neighbors().filter_map(move |v| {
                if u == v {
                    loops += 1;
                    (loops % 2 == 1).then_some(Edge(u, u))
                } else {
                    (u < v).then_some(Edge(u, v))
                }
            })
        })
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) {
        let n = self.number_of_nodes();
        assert!(u < n && v < n, "edge endpoints must be below {n}");

        self.nbs[u as usize].add_neighbor(v);
        self.nbs[v as usize].add_neighbor(u);
        self.num_edges += 1;
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        // Scan the smaller of the two neighborhoods
        if self.degree_of(u) <= self.degree_of(v) {
            self.nbs[u as usize].has_neighbor(v)
        } else {
            self.nbs[v as usize].has_neighbor(u)
        }
    }
}

impl<Nbs: Neighborhood> Display for UndirectedGraph<Nbs> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices; {} edges",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;
        for u in self.vertices_range() {
            write!(f, "{u}:")?;
            for v in self.neighbors_of(u) {
                write!(f, " {v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------- Testing ----------

test_graph_ops!(test_adj_array_undir, AdjArrayUndir, (GraphNew, AdjacencyList));

test_graph_ops!(
    test_sparse_adj_array_undir,
    SparseAdjArrayUndir,
    (GraphNew, AdjacencyList)
);

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn self_loop_is_stored_twice() {
        let mut graph = AdjArrayUndir::new(3);
        graph.add_edge(1, 1);

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degree_of(1), 2);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![1, 1]);
        assert_eq!(graph.edges().collect_vec(), vec![Edge(1, 1)]);
        assert!(graph.has_self_loop(1));
        assert!(!graph.has_self_loop(0));
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = AdjArrayUndir::new(2);
        graph.add_edge(0, 1);
        graph.add_edge(1, 0);

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_of(0), 2);
        assert_eq!(graph.degree_of(1), 2);
        assert_eq!(
            graph.ordered_edges().collect_vec(),
            vec![Edge(0, 1), Edge(0, 1)]
        );
    }

    #[test]
    fn display_layout() {
        let mut graph = AdjArrayUndir::new(3);
        graph.add_edges([(0, 1), (0, 2)].into_iter());

        assert_eq!(
            graph.to_string(),
            "3 vertices; 2 edges\n0: 1 2\n1: 0\n2: 0\n"
        );
    }

    #[test]
    #[should_panic]
    fn add_edge_rejects_invalid_endpoint() {
        let mut graph = AdjArrayUndir::new(2);
        graph.add_edge(0, 2);
    }
}
