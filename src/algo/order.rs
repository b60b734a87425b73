/*!
Depth-first orderings of directed graphs.

[`DepthFirstOrder`] numbers every node with its entry (`pre`) and exit
(`post`) position of a depth-first search over the whole graph, restarting at
unvisited nodes in increasing order. [`Topological`] builds on it: a directed
graph has a topological order iff it is acyclic, and reverse postorder is such
an order.
*/

use super::*;

/// Exposes depth-first orderings as methods on directed graph types.
pub trait Orderings: AdjacencyList + Sized {
    /// Computes preorder and postorder numbers of a full depth-first search.
    fn depth_first_order(&self) -> DepthFirstOrder
    where
        Self: IndexedAdjacencyList + GraphType<Dir = Directed>;

    /// Computes a topological order, if one exists.
    ///
    /// # Examples
    /// ```
    /// use densegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let topo = g.topological();
    /// assert!(topo.has_order());
    /// assert!(topo.rank(0) < topo.rank(2));
    /// ```
    fn topological(&self) -> Topological
    where
        Self: IndexedAdjacencyList + GraphType<Dir = Directed>;
}

impl<G> Orderings for G
where
    G: AdjacencyList + Sized,
{
    fn depth_first_order(&self) -> DepthFirstOrder
    where
        Self: IndexedAdjacencyList + GraphType<Dir = Directed>,
    {
        DepthFirstOrder::new(self)
    }

    fn topological(&self) -> Topological
    where
        Self: IndexedAdjacencyList + GraphType<Dir = Directed>,
    {
        Topological::new(self)
    }
}

/// Entry and exit numbering of a depth-first search over all nodes.
///
/// `pre(v)` is the position at which `v` was discovered, `post(v)` the
/// position at which its neighborhood was exhausted. Since the search
/// restarts at every still unvisited node, both numberings are total.
pub struct DepthFirstOrder {
    pre: Vec<NumNodes>,
    post: Vec<NumNodes>,
    pre_order: Vec<Node>,
    post_order: Vec<Node>,
}

impl DepthFirstOrder {
    pub fn new<G>(graph: &G) -> Self
    where
        G: IndexedAdjacencyList + GraphType<Dir = Directed>,
    {
        // pre[v] == INVALID_NODE doubles as the unvisited marker
        let mut pre = vec![INVALID_NODE; graph.len()];
        let mut post = vec![INVALID_NODE; graph.len()];
        let mut pre_order = Vec::with_capacity(graph.len());
        let mut post_order = Vec::with_capacity(graph.len());

        for root in graph.vertices_range() {
            if pre[root as usize] != INVALID_NODE {
                continue;
            }
            pre[root as usize] = pre_order.len() as NumNodes;
            pre_order.push(root);

            let mut stack: Vec<(Node, NumNodes)> = vec![(root, 0)];
            while let Some(frame) = stack.last_mut() {
                let (v, i) = *frame;
                if i == graph.degree_of(v) {
                    stack.pop();
                    post[v as usize] = post_order.len() as NumNodes;
                    post_order.push(v);
                    continue;
                }
                frame.1 += 1;

                let w = graph.ith_neighbor(v, i);
                if pre[w as usize] == INVALID_NODE {
                    pre[w as usize] = pre_order.len() as NumNodes;
                    pre_order.push(w);
                    stack.push((w, 0));
                }
            }
        }

        Self {
            pre,
            post,
            pre_order,
            post_order,
        }
    }

    /// Returns the preorder number of `v`.
    pub fn pre(&self, v: Node) -> NumNodes {
        self.pre[v as usize]
    }

    /// Returns the postorder number of `v`.
    pub fn post(&self, v: Node) -> NumNodes {
        self.post[v as usize]
    }

    /// Returns all nodes in order of discovery.
    pub fn pre_order(&self) -> impl Iterator<Item = Node> + '_ {
        self.pre_order.iter().copied()
    }

    /// Returns all nodes in order of completion.
    pub fn post_order(&self) -> impl Iterator<Item = Node> + '_ {
        self.post_order.iter().copied()
    }

    /// Returns all nodes in reverse order of completion.
    pub fn reverse_post(&self) -> impl Iterator<Item = Node> + '_ {
        self.post_order.iter().rev().copied()
    }
}

/// Topological order of a directed acyclic graph.
///
/// Construction first runs cycle detection; on cyclic inputs no order exists
/// and every rank query returns `None`. Otherwise the order is the reverse
/// postorder of a full depth-first search, which places `u` before `v` for
/// every edge `u -> v`.
pub struct Topological {
    order: Option<Vec<Node>>,
    ranks: Vec<NumNodes>,
}

impl Topological {
    pub fn new<G>(graph: &G) -> Self
    where
        G: IndexedAdjacencyList + GraphType<Dir = Directed>,
    {
        let mut ranks = vec![INVALID_NODE; graph.len()];

        if DirectedCycle::new(graph).has_cycle() {
            return Self { order: None, ranks };
        }

        let order: Vec<Node> = DepthFirstOrder::new(graph).reverse_post().collect();
        for (rank, &v) in order.iter().enumerate() {
            ranks[v as usize] = rank as NumNodes;
        }

        Self {
            order: Some(order),
            ranks,
        }
    }

    /// Returns *true* if the graph is acyclic and therefore has an order.
    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    /// Returns the topological order, or `None` for cyclic graphs.
    pub fn order(&self) -> Option<&[Node]> {
        self.order.as_deref()
    }

    /// Returns the position of `v` in the order, or `None` for cyclic graphs.
    pub fn rank(&self, v: Node) -> Option<NumNodes> {
        let rank = self.ranks[v as usize];
        (rank != INVALID_NODE).then_some(rank)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use crate::gens::*;

    #[test]
    fn pre_and_post_orders() {
        let graph = AdjArray::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
        let order = graph.depth_first_order();

        assert_eq!(order.pre_order().collect_vec(), vec![0, 1, 3, 2]);
        assert_eq!(order.post_order().collect_vec(), vec![3, 1, 2, 0]);
        assert_eq!(order.reverse_post().collect_vec(), vec![0, 2, 1, 3]);

        assert_eq!(order.pre(3), 2);
        assert_eq!(order.post(3), 0);
        assert_eq!(order.post(0), 3);
    }

    #[test]
    fn disconnected_graphs_are_fully_numbered() {
        let graph = AdjArray::from_edges(4, [(0, 1), (2, 3)]);
        let order = graph.depth_first_order();

        assert_eq!(order.pre_order().collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(order.post_order().collect_vec(), vec![1, 0, 3, 2]);
        assert_eq!(order.reverse_post().collect_vec(), vec![2, 3, 0, 1]);
    }

    #[test]
    fn topological_rank_invariant() {
        let mut graph = AdjArray::from_edges(7, [(2, 0), (1, 0), (0, 3), (0, 4), (0, 5), (3, 6)]);

        {
            let topo = graph.topological();
            assert!(topo.has_order());

            let ranks = graph.vertices().map(|v| topo.rank(v).unwrap()).collect_vec();
            assert_eq!(*ranks.iter().min().unwrap(), 0);
            assert_eq!(*ranks.iter().max().unwrap(), graph.number_of_nodes() - 1);
            for Edge(u, v) in graph.edges() {
                assert!(ranks[u as usize] < ranks[v as usize]);
            }
        }

        graph.add_edge(6, 2); // introduce cycle
        {
            let topo = graph.topological();
            assert!(!topo.has_order());
            assert_eq!(topo.order(), None);
            assert_eq!(topo.rank(0), None);
        }
    }

    #[test]
    fn cyclic_graph_has_no_order() {
        let graph = AdjArray::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        assert!(!graph.topological().has_order());
    }

    #[test]
    fn trivial_graphs_have_an_order() {
        let empty = AdjArray::new(0);
        assert!(empty.topological().has_order());
        assert_eq!(empty.topological().order(), Some(&[][..]));

        let singleton = AdjArray::new(1);
        assert_eq!(singleton.topological().order(), Some(&[0][..]));
    }

    #[test]
    fn random_dags_are_ordered() {
        let mut rng = Pcg64::seed_from_u64(31337);

        for _ in 0..5 {
            // orienting every edge from smaller to larger endpoint yields a DAG
            let undirected: AdjArrayUndir = RandomGraph::gnp_no_loops(&mut rng, 60, 0.05);
            let dag = AdjArray::from_edges(undirected.number_of_nodes(), undirected.edges());

            let topo = dag.topological();
            assert!(topo.has_order());
            for Edge(u, v) in dag.edges() {
                assert!(topo.rank(u).unwrap() < topo.rank(v).unwrap());
            }
        }
    }
}
