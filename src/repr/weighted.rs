/*!
# Weighted Graph Representation

Undirected graphs with a finite `f64` weight per edge, the input of the
minimum-spanning-tree algorithms. Every edge is stored in the incident
lists of both its endpoints; a self-loop hence appears twice in the single
list of its endpoint and counts twice towards the degree. Parallel edges
are kept once per insertion.
*/

use std::fmt::{self, Display};

use crate::prelude::*;

/// An undirected multigraph carrying a weight on each edge
#[derive(Clone)]
pub struct WeightedGraph {
    nbs: Vec<Vec<WeightedEdge>>,
    num_edges: NumEdges,
}

impl GraphType for WeightedGraph {
    type Dir = Undirected;
}

impl GraphNodeOrder for WeightedGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for WeightedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl WeightedGraph {
    /// Creates an empty graph with n singleton nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }

    /// Creates a graph from a number of nodes and an iterator over weighted edges
    pub fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self {
        let mut graph = Self::new(n);
        for edge in edges {
            graph.add_edge(edge.into());
        }
        graph
    }

    /// Adds an edge to the graph.
    /// ** Panics if an endpoint is `>= n`; the graph is left unchanged then **
    pub fn add_edge(&mut self, edge: WeightedEdge) {
        let n = self.number_of_nodes();
        let (u, v) = (edge.either(), edge.other(edge.either()));
        assert!(u < n && v < n, "edge endpoints must be below {n}");

        self.nbs[u as usize].push(edge);
        self.nbs[v as usize].push(edge);
        self.num_edges += 1;
    }

    /// Returns the number of incident edge entries of `u`.
    /// A self-loop counts twice.
    /// ** Panics if `u >= n` **
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }

    /// Returns an iterator over the edges incident to `u`.
    /// A self-loop is yielded twice.
    /// ** Panics if `u >= n` **
    pub fn edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    /// Returns an iterator over all edges in the graph.
    /// Every stored edge appears exactly once: each non-loop edge is reported
    /// from its smaller endpoint and the two incident entries of a self-loop
    /// collapse into one by only emitting every second occurrence.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices_range().flat_map(move |u| {
            let mut loops = 0;
            self.nbs[u as usize].iter().filter_map(move |e| {
                let w = e.other(u);
                if w == u {
                    loops += 1;
                    (loops % 2 == 1).then_some(*e)
                } else {
                    (w > u).then_some(*e)
                }
            })
        })
    }

    /// Returns the sum of all edge weights
    pub fn total_weight(&self) -> f64 {
        self.edges().map(|e| e.weight()).sum()
    }
}

impl Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices; {} edges",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;
        for u in self.vertices_range() {
            write!(f, "{u}:")?;
            for e in self.edges_of(u) {
                write!(f, " {e}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
