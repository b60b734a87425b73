/*!
Cycle detection.

[`UndirectedCycle`] finds a simple cycle in an undirected graph, treating
self-loops and parallel edges as cycles of length one and two. Both special
cases are handled by cheap pre-scans so that the main depth-first search can
rely on every neighborhood being duplicate-free.

[`DirectedCycle`] finds a directed cycle by tracking the set of nodes on the
active search path: an edge back into that set closes a cycle.

Both detectors stop at the first cycle found and expose it as a witness node
sequence that starts and ends on the same node, with every consecutive pair
joined by an edge of the graph.
*/

use itertools::Itertools;

use super::*;

/// Exposes cycle detection as methods on graph data structures.
pub trait CycleDetection: AdjacencyList + Sized {
    /// Searches for a simple cycle, self-loop, or parallel edge.
    ///
    /// # Examples
    /// ```
    /// use densegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
    /// assert!(g.find_cycle().has_cycle());
    ///
    /// let tree = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
    /// assert!(!tree.find_cycle().has_cycle());
    /// ```
    fn find_cycle(&self) -> UndirectedCycle
    where
        Self: IndexedAdjacencyList + GraphType<Dir = Undirected>;

    /// Searches for a directed cycle.
    ///
    /// # Examples
    /// ```
    /// use densegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    /// assert_eq!(g.find_directed_cycle().cycle(), Some(&[2, 0, 1, 2][..]));
    /// ```
    fn find_directed_cycle(&self) -> DirectedCycle
    where
        Self: IndexedAdjacencyList + GraphType<Dir = Directed>;
}

impl<G> CycleDetection for G
where
    G: AdjacencyList + Sized,
{
    fn find_cycle(&self) -> UndirectedCycle
    where
        Self: IndexedAdjacencyList + GraphType<Dir = Undirected>,
    {
        UndirectedCycle::new(self)
    }

    fn find_directed_cycle(&self) -> DirectedCycle
    where
        Self: IndexedAdjacencyList + GraphType<Dir = Directed>,
    {
        DirectedCycle::new(self)
    }
}

/// Closes the cycle formed by the tree path `w -> ... -> v` plus the edge
/// between `v` and `w`. Requires `w` to be an ancestor of `v`.
fn close_cycle(edge_to: &[Node], v: Node, w: Node) -> Vec<Node> {
    let mut cycle = Vec::new();
    let mut x = v;
    while x != w {
        cycle.push(x);
        x = edge_to[x as usize];
    }
    cycle.push(w);
    cycle.push(v);
    cycle.reverse();
    cycle
}

/// Result of searching an undirected graph for a simple cycle.
pub struct UndirectedCycle {
    cycle: Option<Vec<Node>>,
}

impl UndirectedCycle {
    /// Runs the search. A self-loop is reported as `[v, v]`, a parallel edge
    /// as `[v, w, v]`, and any other cycle as the closed node sequence found
    /// by the depth-first search.
    pub fn new<G>(graph: &G) -> Self
    where
        G: IndexedAdjacencyList + GraphType<Dir = Undirected>,
    {
        if let Some(cycle) = Self::self_loop(graph).or_else(|| Self::parallel_edge(graph)) {
            return Self { cycle: Some(cycle) };
        }

        let mut marked = graph.vertex_bitset_unset();
        let mut edge_to = vec![INVALID_NODE; graph.len()];
        let mut cycle = None;

        'roots: for root in graph.vertices_range() {
            if marked.get_bit(root) {
                continue;
            }
            marked.set_bit(root);

            let mut stack: Vec<(Node, NumNodes)> = vec![(root, 0)];
            while let Some(frame) = stack.last_mut() {
                let (v, i) = *frame;
                if i == graph.degree_of(v) {
                    stack.pop();
                    continue;
                }
                frame.1 += 1;

                let w = graph.ith_neighbor(v, i);
                if !marked.set_bit(w) {
                    edge_to[w as usize] = v;
                    stack.push((w, 0));
                } else if w != edge_to[v as usize] {
                    // marked neighbor other than the tree parent closes a cycle
                    cycle = Some(close_cycle(&edge_to, v, w));
                    break 'roots;
                }
            }
        }

        Self { cycle }
    }

    fn self_loop<G>(graph: &G) -> Option<Vec<Node>>
    where
        G: AdjacencyList,
    {
        graph
            .vertices()
            .find(|&v| graph.neighbors_of(v).any(|w| w == v))
            .map(|v| vec![v, v])
    }

    fn parallel_edge<G>(graph: &G) -> Option<Vec<Node>>
    where
        G: AdjacencyList,
    {
        for v in graph.vertices() {
            if let Some(w) = graph.neighbors_of(v).duplicates().next() {
                return Some(vec![v, w, v]);
            }
        }
        None
    }

    /// Returns *true* if the graph contains a cycle.
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the witness of the first cycle found, if any.
    pub fn cycle(&self) -> Option<&[Node]> {
        self.cycle.as_deref()
    }
}

/// Result of searching a directed graph for a directed cycle.
pub struct DirectedCycle {
    cycle: Option<Vec<Node>>,
}

impl DirectedCycle {
    /// Runs the search. A self-loop is reported as `[v, v]`; any other cycle
    /// as the closed node sequence found by the depth-first search. Parallel
    /// edges alone do not form a directed cycle.
    pub fn new<G>(graph: &G) -> Self
    where
        G: IndexedAdjacencyList + GraphType<Dir = Directed>,
    {
        let mut marked = graph.vertex_bitset_unset();
        let mut on_stack = graph.vertex_bitset_unset();
        let mut edge_to = vec![INVALID_NODE; graph.len()];
        let mut cycle = None;

        'roots: for root in graph.vertices_range() {
            if marked.get_bit(root) {
                continue;
            }
            marked.set_bit(root);
            on_stack.set_bit(root);

            let mut stack: Vec<(Node, NumNodes)> = vec![(root, 0)];
            while let Some(frame) = stack.last_mut() {
                let (v, i) = *frame;
                if i == graph.degree_of(v) {
                    on_stack.clear_bit(v);
                    stack.pop();
                    continue;
                }
                frame.1 += 1;

                let w = graph.ith_neighbor(v, i);
                if !marked.set_bit(w) {
                    edge_to[w as usize] = v;
                    on_stack.set_bit(w);
                    stack.push((w, 0));
                } else if on_stack.get_bit(w) {
                    // edge back into the active path closes a directed cycle
                    cycle = Some(close_cycle(&edge_to, v, w));
                    break 'roots;
                }
            }
        }

        Self { cycle }
    }

    /// Returns *true* if the graph contains a directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the witness of the first cycle found, if any.
    pub fn cycle(&self) -> Option<&[Node]> {
        self.cycle.as_deref()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;

    fn assert_closed_walk<G: AdjacencyTest>(graph: &G, witness: &[Node]) {
        assert!(witness.len() >= 2);
        assert_eq!(witness.first(), witness.last());
        for (u, v) in witness.iter().tuple_windows() {
            assert!(graph.has_edge(*u, *v));
        }
    }

    #[test]
    fn triangle() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (0, 2), (1, 2)]);
        let result = graph.find_cycle();

        assert!(result.has_cycle());
        let witness = result.cycle().unwrap();
        assert_eq!(witness.len(), 4);
        assert_closed_walk(&graph, witness);
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 2), (1, 1)]);
        assert_eq!(graph.find_cycle().cycle(), Some(&[1, 1][..]));
    }

    #[test]
    fn parallel_edge_is_a_cycle() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (0, 1)]);
        assert_eq!(graph.find_cycle().cycle(), Some(&[0, 1, 0][..]));
    }

    #[test]
    fn trees_are_acyclic() {
        let single_edge = AdjArrayUndir::from_edges(2, [(0, 1)]);
        assert!(!single_edge.find_cycle().has_cycle());

        let tree = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (1, 3), (3, 4)]);
        assert!(!tree.find_cycle().has_cycle());
    }

    #[test]
    fn directed_triangle() {
        let graph = AdjArray::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        let result = graph.find_directed_cycle();

        assert!(result.has_cycle());
        let witness = result.cycle().unwrap();
        assert_eq!(witness, [2, 0, 1, 2]);
        assert_closed_walk(&graph, witness);
    }

    #[test]
    fn two_cycle() {
        let graph = AdjArray::from_edges(2, [(0, 1), (1, 0)]);
        assert_eq!(graph.find_directed_cycle().cycle(), Some(&[1, 0, 1][..]));
    }

    #[test]
    fn directed_self_loop() {
        let graph = AdjArray::from_edges(2, [(0, 1), (1, 1)]);
        assert_eq!(graph.find_directed_cycle().cycle(), Some(&[1, 1][..]));
    }

    #[test]
    fn dag_is_acyclic() {
        // node 3 is reached twice but never while on the active path
        let graph = AdjArray::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert!(!graph.find_directed_cycle().has_cycle());
    }

    #[test]
    fn parallel_directed_edges_are_no_cycle() {
        let graph = AdjArray::from_edges(2, [(0, 1), (0, 1)]);
        assert!(!graph.find_directed_cycle().has_cycle());
    }

    #[test]
    fn deep_ring_does_not_overflow() {
        const N: NumNodes = 10_000;
        let graph = AdjArray::from_edges(N, (0..N).map(|u| (u, (u + 1) % N)));

        let result = graph.find_directed_cycle();
        let witness = result.cycle().unwrap();
        assert_eq!(witness.len(), N as usize + 1);
        assert_closed_walk(&graph, witness);
    }
}
