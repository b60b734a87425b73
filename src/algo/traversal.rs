/*!
Breadth- and depth-first traversals.

The lazy half of this module is [`TraversalSearch`]: a generic iterator over
the nodes reachable from one or more source nodes, parameterized by the
frontier container (queue for BFS, stack for DFS), by the yielded item (plain
nodes or `(predecessor, node)` pairs), and by the visited-set implementation.
The [`Traversal`] extension trait exposes the common instantiations directly
as methods on every graph type.

The eager half answers path queries: [`BreadthFirstPaths`] stores a
shortest-path tree (minimum edge counts from one or more sources),
[`DepthFirstPaths`] stores one depth-first path tree, and
[`DepthFirstSearch`] only marks and counts the reachable nodes. All three run
to completion inside their constructors and use explicit work stacks, so deep
graphs cannot overflow the call stack.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
///
/// Two implementations are provided:
/// - [`Node`] stores only the node (no predecessor information).
/// - [`PredecessorOfNode`] stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)` where the predecessor
    /// may be `None` if not tracked.
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by setting both tuple
/// entries to the same node value. This never collides with a self-loop: by
/// the time a loop edge at `u` is scanned, `u` itself is already visited and
/// is not enqueued again.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` stores the "to be visited" items during a traversal.
/// The implementation determines the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(u: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of items to visit and a
/// set of visited nodes. Every node is marked visited when it enters the
/// frontier, so each reachable node is yielded exactly once. Parameterized by
/// the container type for the frontier and the type of items yielded (either
/// `Node` or `PredecessorOfNode`).
pub struct TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
    _item: PhantomData<I>,
}

/// Type alias for a **breadth-first search** iterator with a custom visited set.
pub type BFSWithSet<'a, G, V> = TraversalSearch<'a, G, VecDeque<Node>, Node, V>;

/// Type alias for a **depth-first search** iterator with a custom visited set.
pub type DFSWithSet<'a, G, V> = TraversalSearch<'a, G, Vec<Node>, Node, V>;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from the given source nodes.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node, NodeBitSet>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from the given source nodes.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node, NodeBitSet>;

/// A BFS traversal iterator that additionally yields the predecessor
/// of each node, producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

/// A DFS traversal iterator that additionally yields the predecessor
/// of each node, producing a spanning tree of the search.
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

impl<G, S, I, V> Iterator for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if !self.visited.contains(&v) {
                self.visited.insert(v);
                self.sequencer.push(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every item in the frontier is already marked visited
        (
            self.sequencer.cardinality(),
            Some(self.sequencer.cardinality() + self.graph.len() - self.visited.len()),
        )
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    ///
    /// ** Panics if `start` is not a vertex of the graph **
    pub fn new(graph: &'a G, start: Node) -> Self {
        Self::with_sources(graph, [start])
    }

    /// Creates a new traversal iterator seeded with every node of `sources`.
    /// All sources are yielded without a predecessor; duplicates are ignored.
    ///
    /// ** Panics if `sources` is empty or contains a non-vertex **
    ///
    /// # Examples
    /// ```
    /// use densegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
    ///
    /// let order: Vec<_> = BFS::with_sources(&g, [0, 5]).collect();
    /// assert_eq!(order, vec![0, 5, 1, 4, 2, 3]);
    /// ```
    pub fn with_sources<N>(graph: &'a G, sources: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        let len = graph.len();
        let mut visited = V::from_total_used_capacity(len, len);

        let mut sources = sources.into_iter();
        let first = match sources.next() {
            Some(u) => u,
            None => panic!("a traversal requires at least one source node"),
        };
        visited.insert(first);

        let mut sequencer = S::init(I::new_without_predecessor(first));
        for u in sources {
            if !visited.contains(&u) {
                visited.insert(u);
                sequencer.push(I::new_without_predecessor(u));
            }
        }

        Self {
            graph,
            visited,
            sequencer,
            _item: PhantomData,
        }
    }
}

impl<G, S, I, V> TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    /// Tries to restart the search at a yet unvisited node and returns
    /// true iff successful. Requires that the search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.graph.vertices().find(|u| !self.visited.contains(u)) {
            None => false,
            Some(x) => {
                self.visited.insert(x);
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }
}

/// Provides traversal iterators directly as methods on graph data structures.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use densegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(2, [(0, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use densegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(2, [(0, 1)]);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    ///
    /// # Examples
    /// ```
    /// use densegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(2, [(0, 1)]);
    ///
    /// let mut it = g.bfs_with_predecessor(0);
    /// assert_eq!(it.next().unwrap().item(), 0);
    /// assert_eq!(it.next().unwrap().predecessor(), Some(0));
    /// ```
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    ///
    /// # Examples
    /// ```
    /// use densegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(2, [(0, 1)]);
    ///
    /// let mut it = g.dfs_with_predecessor(0);
    /// assert_eq!(it.next().unwrap().item(), 0);
    /// assert_eq!(it.next().unwrap().predecessor(), Some(0));
    /// ```
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

/// Shortest paths (by edge count) from one or more source nodes.
///
/// Runs a complete BFS in the constructor and stores, for every reached node,
/// its distance to the nearest source and its parent in the shortest-path
/// tree. Queries then run in time linear in the answer.
///
/// # Examples
/// ```
/// use densegraphs::{prelude::*, algo::*};
///
/// let g = AdjArrayUndir::from_edges(5, [(0, 1), (0, 2), (1, 2), (2, 3), (3, 4)]);
///
/// let paths = BreadthFirstPaths::new(&g, 0);
/// assert_eq!(paths.dist_to(4), Some(3));
/// assert_eq!(paths.path_to(4).unwrap(), vec![0, 2, 3, 4]);
/// assert!(paths.has_path_to(3));
/// ```
pub struct BreadthFirstPaths {
    edge_to: Vec<Node>,
    dist_to: Vec<NumNodes>,
}

impl BreadthFirstPaths {
    /// Computes shortest paths from the single source `source`.
    ///
    /// ** Panics if `source` is not a vertex of the graph **
    pub fn new<G>(graph: &G, source: Node) -> Self
    where
        G: AdjacencyList,
    {
        Self::from_sources(graph, [source])
    }

    /// Computes shortest paths where the distance of a node is the minimum
    /// number of edges to *any* node of `sources`.
    ///
    /// ** Panics if `sources` is empty or contains a non-vertex **
    pub fn from_sources<G, N>(graph: &G, sources: N) -> Self
    where
        G: AdjacencyList,
        N: IntoIterator<Item = Node>,
    {
        let mut edge_to = vec![INVALID_NODE; graph.len()];
        let mut dist_to = vec![INVALID_NODE; graph.len()];

        // BFS pops a node only after its predecessor, so dist_to[p] is final here
        for item in BFSWithPredecessor::with_sources(graph, sources) {
            let v = item.item();
            match item.predecessor() {
                Some(p) => {
                    edge_to[v as usize] = p;
                    dist_to[v as usize] = dist_to[p as usize] + 1;
                }
                None => dist_to[v as usize] = 0,
            }
        }

        Self { edge_to, dist_to }
    }

    /// Returns *true* if some source reaches `v`.
    pub fn has_path_to(&self, v: Node) -> bool {
        self.dist_to[v as usize] != INVALID_NODE
    }

    /// Returns the minimum number of edges between `v` and the nearest
    /// source, or `None` if `v` is unreachable.
    pub fn dist_to(&self, v: Node) -> Option<NumNodes> {
        let dist = self.dist_to[v as usize];
        (dist != INVALID_NODE).then_some(dist)
    }

    /// Returns a shortest path from the nearest source to `v` (both
    /// inclusive), or `None` if `v` is unreachable.
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        self.has_path_to(v).then(|| {
            let mut path = Vec::with_capacity(self.dist_to[v as usize] as usize + 1);
            let mut x = v;
            while self.dist_to[x as usize] != 0 {
                path.push(x);
                x = self.edge_to[x as usize];
            }
            path.push(x);
            path.reverse();
            path
        })
    }
}

/// Paths from a single source node along a depth-first tree.
///
/// In contrast to [`BreadthFirstPaths`], the reported paths follow the
/// depth-first discovery order and are in general not shortest paths.
pub struct DepthFirstPaths {
    source: Node,
    marked: NodeBitSet,
    edge_to: Vec<Node>,
}

impl DepthFirstPaths {
    /// Runs a complete depth-first search from `source` and records the
    /// discovery tree.
    ///
    /// ** Panics if `source` is not a vertex of the graph **
    pub fn new<G>(graph: &G, source: Node) -> Self
    where
        G: IndexedAdjacencyList,
    {
        let mut marked = graph.vertex_bitset_unset();
        let mut edge_to = vec![INVALID_NODE; graph.len()];

        marked.set_bit(source);

        // Work stack of (node, next neighbor index) frames instead of recursion
        let mut stack: Vec<(Node, NumNodes)> = vec![(source, 0)];
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
            }
        }

        Self {
            source,
            marked,
            edge_to,
        }
    }

    /// Returns *true* if the source reaches `v`.
    pub fn has_path_to(&self, v: Node) -> bool {
        self.marked.get_bit(v)
    }

    /// Returns the discovered path from the source to `v` (both inclusive),
    /// or `None` if `v` is unreachable.
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        self.has_path_to(v).then(|| {
            let mut path = Vec::new();
            let mut x = v;
            while x != self.source {
                path.push(x);
                x = self.edge_to[x as usize];
            }
            path.push(self.source);
            path.reverse();
            path
        })
    }
}

/// Reachability from one or more source nodes.
///
/// Marks every node reachable from the sources (following edge directions on
/// directed graphs) and counts them. Cheaper than the path structures when
/// only membership queries are needed.
pub struct DepthFirstSearch {
    marked: NodeBitSet,
    count: NumNodes,
}

impl DepthFirstSearch {
    /// Marks all nodes reachable from `source`.
    ///
    /// ** Panics if `source` is not a vertex of the graph **
    pub fn new<G>(graph: &G, source: Node) -> Self
    where
        G: AdjacencyList,
    {
        Self::from_sources(graph, [source])
    }

    /// Marks all nodes reachable from any node of `sources`.
    ///
    /// ** Panics if `sources` is empty or contains a non-vertex **
    ///
    /// # Examples
    /// ```
    /// use densegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(6, [(0, 1), (1, 2), (3, 4)]);
    ///
    /// let reach = DepthFirstSearch::from_sources(&g, [0, 3]);
    /// assert!(reach.is_reachable(4));
    /// assert!(!reach.is_reachable(5));
    /// assert_eq!(reach.count(), 5);
    /// ```
    pub fn from_sources<G, N>(graph: &G, sources: N) -> Self
    where
        G: AdjacencyList,
        N: IntoIterator<Item = Node>,
    {
        let mut marked = graph.vertex_bitset_unset();
        let mut count = 0;

        for u in DFS::with_sources(graph, sources) {
            marked.set_bit(u);
            count += 1;
        }

        Self { marked, count }
    }

    /// Returns *true* if some source reaches `v`.
    pub fn is_reachable(&self, v: Node) -> bool {
        self.marked.get_bit(v)
    }

    /// Returns the number of nodes reachable from the sources (sources included).
    pub fn count(&self) -> NumNodes {
        self.count
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use fxhash::FxHashSet;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use crate::gens::*;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjArray::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        {
            let order: Vec<Node> = graph.bfs(1).collect();
            assert_eq!(order.len(), 6);

            assert_eq!(order[0], 1);
            assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
            assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
            assert_eq!(order[5], 3);
        }

        {
            let order: Vec<Node> = BFS::new(&graph, 5).collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = AdjArray::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let mut edges: Vec<_> = graph
            .bfs_with_predecessor(1)
            .map(|x| x.predecessor_with_item())
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjArray::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);

        {
            let order: Vec<Node> = DFS::new(&graph, 1).collect();
            assert_eq!(order.len(), 6);

            assert_eq!(order[0], 1);

            if order[1] == 2 {
                assert_eq!(order[2..6], [0, 5, 4, 3]);
            } else {
                assert_eq!(order[1..6], [0, 5, 4, 3, 2]);
            }
        }

        {
            let order: Vec<Node> = graph.dfs(5).collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }

    #[test]
    fn dfs_with_predecessor() {
        let graph = AdjArray::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);

        let mut edges: Vec<_> = graph
            .dfs_with_predecessor(1)
            .map(|x| x.predecessor_with_item())
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(4), 3),
                (Some(5), 4)
            ]
        );
    }

    #[test]
    fn multiple_sources() {
        // path 0 - 1 - 2 - 3 - 4 - 5
        let graph = AdjArrayUndir::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);

        let order = BFS::with_sources(&graph, [0, 5]).collect_vec();
        assert_eq!(order, vec![0, 5, 1, 4, 2, 3]);

        // duplicate sources are seeded once
        let order = BFS::with_sources(&graph, [3, 3]).collect_vec();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 3);
    }

    #[test]
    #[should_panic]
    fn empty_sources_panic() {
        let graph = AdjArrayUndir::new(3);
        let _ = BFS::with_sources(&graph, std::iter::empty());
    }

    #[test]
    fn custom_visited_set() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (0, 2), (1, 2), (2, 3), (3, 4)]);

        let with_bitset = graph.bfs(0).collect_vec();
        let with_hashset = BFSWithSet::<_, FxHashSet<Node>>::new(&graph, 0).collect_vec();
        assert_eq!(with_bitset, with_hashset);
    }

    #[test]
    fn restart_at_unvisited() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (2, 3)]);

        let mut search = BFS::new(&graph, 0);
        let mut visited = search.by_ref().count();

        assert!(search.try_restart_at_unvisited());
        visited += search.by_ref().count();
        assert!(search.try_restart_at_unvisited());
        visited += search.by_ref().count();

        assert!(!search.try_restart_at_unvisited());
        assert_eq!(visited, 5);
    }

    #[test]
    fn breadth_first_paths() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (0, 2), (1, 2), (2, 3), (3, 4)]);
        let paths = BreadthFirstPaths::new(&graph, 0);

        let dists = graph.vertices().map(|v| paths.dist_to(v)).collect_vec();
        assert_eq!(
            dists,
            vec![Some(0), Some(1), Some(1), Some(2), Some(3)]
        );

        assert_eq!(paths.path_to(0).unwrap(), vec![0]);
        assert_eq!(paths.path_to(4).unwrap(), vec![0, 2, 3, 4]);
    }

    #[test]
    fn breadth_first_paths_multi_source() {
        let graph = AdjArrayUndir::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
        let paths = BreadthFirstPaths::from_sources(&graph, [0, 5]);

        let dists = graph
            .vertices()
            .map(|v| paths.dist_to(v).unwrap())
            .collect_vec();
        assert_eq!(dists, vec![0, 1, 2, 2, 1, 0]);

        assert_eq!(paths.path_to(3).unwrap(), vec![5, 4, 3]);
    }

    #[test]
    fn unreachable_nodes() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1)]);

        let bfs_paths = BreadthFirstPaths::new(&graph, 0);
        assert!(!bfs_paths.has_path_to(2));
        assert_eq!(bfs_paths.dist_to(2), None);
        assert_eq!(bfs_paths.path_to(3), None);

        let dfs_paths = DepthFirstPaths::new(&graph, 0);
        assert!(!dfs_paths.has_path_to(2));
        assert_eq!(dfs_paths.path_to(3), None);

        let reach = DepthFirstSearch::new(&graph, 0);
        assert_eq!(reach.count(), 2);
        assert!(!reach.is_reachable(2));
    }

    #[test]
    fn depth_first_paths_are_valid_walks() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (0, 2), (1, 2), (2, 3), (3, 4)]);
        let paths = DepthFirstPaths::new(&graph, 0);

        for v in graph.vertices() {
            let path = paths.path_to(v).unwrap();
            assert_eq!(*path.first().unwrap(), 0);
            assert_eq!(*path.last().unwrap(), v);
            for (x, y) in path.iter().tuple_windows() {
                assert!(graph.has_edge(*x, *y));
            }
        }
    }

    #[test]
    fn directed_reachability() {
        let graph = AdjArray::from_edges(6, [(0, 1), (1, 2), (3, 4), (2, 0)]);

        let reach = DepthFirstSearch::new(&graph, 0);
        assert_eq!(reach.count(), 3);
        assert!(reach.is_reachable(2));
        assert!(!reach.is_reachable(4));

        // edges are only followed forwards
        let reach = DepthFirstSearch::new(&graph, 4);
        assert_eq!(reach.count(), 1);
    }

    #[test]
    fn deep_path_does_not_overflow() {
        const N: NumNodes = 10_000;
        let graph = AdjArrayUndir::from_edges(N, (0..N - 1).map(|u| (u, u + 1)));

        let dfs_paths = DepthFirstPaths::new(&graph, 0);
        assert_eq!(dfs_paths.path_to(N - 1).unwrap().len(), N as usize);

        let bfs_paths = BreadthFirstPaths::new(&graph, 0);
        assert_eq!(bfs_paths.dist_to(N - 1), Some(N - 1));
    }

    #[test]
    fn random_bfs_distance_invariant() {
        let mut rng = Pcg64::seed_from_u64(1234);

        for _ in 0..5 {
            let graph: AdjArrayUndir = RandomGraph::gnp(&mut rng, 100, 0.05);
            let paths = BreadthFirstPaths::new(&graph, 0);

            assert_eq!(paths.dist_to(0), Some(0));
            for Edge(u, v) in graph.edges() {
                // reachability and distances differ by at most one across an edge
                assert_eq!(paths.has_path_to(u), paths.has_path_to(v));
                if let (Some(du), Some(dv)) = (paths.dist_to(u), paths.dist_to(v)) {
                    assert!(du.abs_diff(dv) <= 1);
                }
            }
        }
    }
}
