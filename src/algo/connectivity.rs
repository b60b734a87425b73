/*!
Connected components of undirected graphs.

One depth-first pass per component assigns every node a dense component id in
discovery order. The resulting [`ConnectedComponents`] structure answers
`connected`, `id`, `size`, and `count` queries in constant time.
*/

use super::*;

/// Exposes connectivity algorithms as methods on undirected graph types.
pub trait Connectivity: AdjacencyList + Sized {
    /// Computes the connected components of the graph.
    ///
    /// # Examples
    /// ```
    /// use densegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);
    ///
    /// let cc = g.connected_components();
    /// assert_eq!(cc.count(), 2);
    /// assert!(cc.connected(0, 1));
    /// assert!(!cc.connected(1, 2));
    /// ```
    fn connected_components(&self) -> ConnectedComponents
    where
        Self: GraphType<Dir = Undirected>;
}

impl<G> Connectivity for G
where
    G: AdjacencyList + Sized,
{
    fn connected_components(&self) -> ConnectedComponents
    where
        Self: GraphType<Dir = Undirected>,
    {
        ConnectedComponents::new(self)
    }
}

/// Partition of an undirected graph into its connected components.
///
/// Component ids are dense in `0..count()` and assigned in order of the
/// smallest node of each component.
pub struct ConnectedComponents {
    ids: Vec<Node>,
    sizes: Vec<NumNodes>,
    count: NumNodes,
}

impl ConnectedComponents {
    /// Runs one depth-first search per component. Accepts graphs without
    /// nodes, which have zero components.
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphType<Dir = Undirected>,
    {
        let mut ids = vec![INVALID_NODE; graph.len()];
        let mut sizes = Vec::new();
        let mut count = 0;

        if graph.is_empty() {
            return Self { ids, sizes, count };
        }

        let mut search = DFS::new(graph, 0);
        loop {
            let mut size = 0;
            for u in search.by_ref() {
                ids[u as usize] = count;
                size += 1;
            }
            sizes.push(size);
            count += 1;

            if !search.try_restart_at_unvisited() {
                break;
            }
        }

        Self { ids, sizes, count }
    }

    /// Returns the number of connected components.
    pub fn count(&self) -> NumNodes {
        self.count
    }

    /// Returns the id of the component containing `v`.
    pub fn id(&self, v: Node) -> Node {
        self.ids[v as usize]
    }

    /// Returns the number of nodes in the component containing `v`.
    pub fn size(&self, v: Node) -> NumNodes {
        self.sizes[self.id(v) as usize]
    }

    /// Returns *true* if `v` and `w` lie in the same component.
    pub fn connected(&self, v: Node, w: Node) -> bool {
        self.id(v) == self.id(w)
    }
}
