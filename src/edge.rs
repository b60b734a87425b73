use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use crate::node::Node;

/// An edge is defined by two nodes/endpoints.
/// It is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Simple bijection from `0..n^2` to all possible (directed) edges of `n` nodes
    pub fn from_u64(x: u64, n: u64) -> Self {
        debug_assert!(x < n * n);

        Edge((x / n) as Node, (x % n) as Node)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<(&Node, &Node)> for Edge {
    fn from(value: (&Node, &Node)) -> Self {
        Edge(*value.0, *value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An undirected edge with a real-valued weight on it.
///
/// Weights are restricted to finite values so that edges admit a total order
/// and can be put into ordered containers directly.
#[derive(Copy, Clone, PartialEq)]
pub struct WeightedEdge {
    u: Node,
    v: Node,
    weight: f64,
}

impl WeightedEdge {
    /// Creates a new weighted edge between `u` and `v`.
    ///
    /// ** Panics if `weight` is NaN or infinite **
    pub fn new(u: Node, v: Node, weight: f64) -> Self {
        assert!(weight.is_finite(), "edge weight must be a finite value");
        WeightedEdge { u, v, weight }
    }

    /// Returns the weight of the edge
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns one endpoint of the edge
    pub fn either(&self) -> Node {
        self.u
    }

    /// Returns the endpoint that is not `x`, or `x` itself for a loop.
    ///
    /// ** Panics if `x` is not an endpoint of the edge **
    pub fn other(&self, x: Node) -> Node {
        if x == self.u {
            self.v
        } else if x == self.v {
            self.u
        } else {
            panic!("node {x} is not an endpoint of {self}");
        }
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.u == self.v
    }

    /// Forgets the weight and returns the plain endpoint pair
    pub fn endpoints(&self) -> Edge {
        Edge(self.u, self.v)
    }
}

// Valid since weights are always finite
impl Eq for WeightedEdge {}

impl Ord for WeightedEdge {
    /// Orders by weight first, then by endpoints to break ties
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| (self.u, self.v).cmp(&(other.u, other.v)))
    }
}

impl PartialOrd for WeightedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.u, self.v, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node, f64)> for WeightedEdge {
    fn from(value: (Node, Node, f64)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}
