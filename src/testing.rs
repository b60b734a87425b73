/// Every graph should implement `GraphNodeOrder` and `GraphEdgeOrder`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::test_graph_ops};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of `m` random edges for nodes `0..n`.
            /// Parallel edges and self-loops are allowed.
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec()
            }

            /// Expected sorted neighbor lists under multiset semantics
            fn expected_neighbors(n: NumNodes, edges: &[Edge]) -> Vec<Vec<Node>> {
                let mut neighbors = vec![Vec::new(); n as usize];
                for &Edge(u, v) in edges {
                    neighbors[u as usize].push(v);
                    if <$graph>::is_undirected() {
                        neighbors[v as usize].push(u);
                    }
                }
                neighbors.iter_mut().for_each(|adj| adj.sort_unstable());

                neighbors
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert!(graph.is_singleton());

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n * 2, n * 5] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m as NumEdges);
                        let expected = expected_neighbors(n, &edges);

                        let graph = <$graph>::from_edges(n, edges.clone());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), m as NumEdges);
                        assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());

                        for u in graph.vertices_range() {
                            assert_eq!(
                                graph.neighbors_of(u).sorted().collect_vec(),
                                expected[u as usize]
                            );
                            assert_eq!(
                                graph.degree_of(u),
                                expected[u as usize].len() as NumNodes
                            );
                        }

                        assert_eq!(
                            graph.max_degree() as usize,
                            expected.iter().map(|adj| adj.len()).max().unwrap_or(0)
                        );

                        let mut inserted = edges
                            .iter()
                            .map(|e| {
                                if <$graph>::is_undirected() {
                                    e.normalized()
                                } else {
                                    *e
                                }
                            })
                            .collect_vec();
                        inserted.sort_unstable();

                        assert_eq!(graph.ordered_edges().collect_vec(), inserted);
                    }
                }
            }
        }
    };
    ($graph:ident: DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            assert!(<$graph>::is_directed());

            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n * 2, n * 5] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m as NumEdges);

                        let mut expected_in = vec![Vec::new(); n as usize];
                        for &Edge(u, v) in &edges {
                            expected_in[v as usize].push(u);
                        }

                        let graph = <$graph>::from_edges(n, edges);

                        for u in graph.vertices_range() {
                            assert_eq!(
                                graph.in_degree_of(u),
                                expected_in[u as usize].len() as NumNodes
                            );
                            assert_eq!(graph.out_degree_of(u), graph.degree_of(u));
                        }

                        assert_eq!(graph.in_degrees().sum::<NumNodes>(), m);
                        assert_eq!(graph.out_degrees().sum::<NumNodes>(), m);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
