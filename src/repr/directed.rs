/*!
# Directed Graph Representations

A directed edge `(u, v)` is stored once, in the outgoing neighborhood of
`u`. Since several algorithms only need in-degrees and never full
in-neighborhoods, [`DirectedGraph`] additionally maintains one in-degree
counter per node which is updated on every insertion. This keeps
`in_degree_of` at constant cost without storing reversed adjacency.

A full reversed view is available via [`DirectedGraph::reverse`] which
materializes a new graph with all edges flipped.
*/

use std::fmt::{self, Display};

use crate::{
    prelude::*, repr::neighborhood::macros::impl_common_graph_ops, testing::test_graph_ops,
};

/// A directed multigraph storing outgoing neighborhoods and in-degree counters.
///
/// # Type parameters
/// - `Nbs`: [`Neighborhood`] implementation used for outgoing adjacency.
#[derive(Clone)]
pub struct DirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    out_nbs: Vec<Nbs>,
    in_degs: Vec<NumNodes>,
    num_edges: NumEdges,
}

/// Directed graph using adjacency arrays (`Vec<Node>`).
pub type AdjArray = DirectedGraph<ArrNeighborhood>;

/// Directed graph using sparse adjacency arrays (`SmallVec<[Node; N]>`).
pub type SparseAdjArray = DirectedGraph<SparseNeighborhood>;

impl_common_graph_ops!(DirectedGraph<Nbs> => out_nbs, Directed);

impl<Nbs: Neighborhood> GraphNew for DirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            out_nbs: vec![Nbs::new(n); n as usize],
            in_degs: vec![0; n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> AdjacencyList for DirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].num_of_neighbors()
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.neighbors_of(u).map(move |v| Edge(u, v)))
    }
}

impl<Nbs: Neighborhood> DirectedAdjacencyList for DirectedGraph<Nbs> {
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_degs[u as usize]
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for DirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) {
        let n = self.number_of_nodes();
        assert!(u < n && v < n, "edge endpoints must be below {n}");

        self.out_nbs[u as usize].add_neighbor(v);
        self.in_degs[v as usize] += 1;
        self.num_edges += 1;
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for DirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> DirectedGraph<Nbs> {
    /// Returns the reverse graph in which every edge `(u, v)` becomes `(v, u)`
    pub fn reverse(&self) -> Self {
        Self::from_edges(self.number_of_nodes(), self.edges().map(|e| e.reverse()))
    }
}

impl<Nbs: Neighborhood> Display for DirectedGraph<Nbs> {
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

test_graph_ops!(
    test_adj_array,
    AdjArray,
    (GraphNew, AdjacencyList, DirectedAdjacencyList)
);

test_graph_ops!(
    test_sparse_adj_array,
    SparseAdjArray,
    (GraphNew, AdjacencyList, DirectedAdjacencyList)
);

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn self_loop_is_stored_once() {
        let mut graph = AdjArray::new(2);
        graph.add_edge(1, 1);

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.out_degree_of(1), 1);
        assert_eq!(graph.in_degree_of(1), 1);
        assert_eq!(graph.edges().collect_vec(), vec![Edge(1, 1)]);
    }

    #[test]
    fn in_degrees_are_maintained() {
        let mut graph = AdjArray::new(4);
        graph.add_edges([(0, 2), (1, 2), (3, 2), (2, 0)].into_iter());

        assert_eq!(graph.in_degrees().collect_vec(), vec![1, 0, 3, 0]);
        assert_eq!(graph.out_degrees().collect_vec(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn reverse_flips_all_edges() {
        let mut graph = AdjArray::new(3);
        graph.add_edges([(0, 1), (1, 2), (2, 0), (0, 1)].into_iter());

        let reverse = graph.reverse();
        assert_eq!(reverse.number_of_edges(), graph.number_of_edges());
        assert_eq!(
            reverse.ordered_edges().collect_vec(),
            vec![Edge(0, 2), Edge(1, 0), Edge(1, 0), Edge(2, 1)]
        );
        assert_eq!(
            reverse.reverse().ordered_edges().collect_vec(),
            graph.ordered_edges().collect_vec()
        );
        assert_eq!(reverse.in_degree_of(0), 2);
    }
}
