use rand_distr::{Distribution, Geometric};

use crate::{gens::*, utils::*};

/// `G(n,p)` graphs generate every possible edge in a graph with `n` nodes with probability `p`
/// independent from each other.
///
/// Due to this independence, we do not need to incorporate normalized-checks for undirected graphs
/// or self-loop checks in the generator itself as the overhead is minimal (`2 * n/(n - 1)` at most).
///
/// Filterings of this sort are thus up to the caller.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: u64,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `n`
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }

    /// Updates `p`
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = Some(prob);
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges.
    ///
    /// Instead of tossing a coin per possible edge, the stream samples the
    /// number of skipped candidates between two successive edges from a
    /// geometric distribution and jumps ahead accordingly. This takes time
    /// linear in the number of *emitted* edges.
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        assert!(self.n > 0, "At least one node must be generated!");
        let p = match self.p {
            None => panic!("Probability of Gnp was not set!"),
            Some(p) => p,
        };

        let n = self.n;

        // The maximum possible value an edge can be mapped to
        let max_value = n * n;

        // `p == 0` never emits; the distribution itself handles `p == 1`
        let distr = (p > 0.0).then(|| Geometric::new(p).unwrap());

        let mut cur = 0u64;
        std::iter::from_fn(move || {
            cur = cur.saturating_add(distr?.sample(rng));
            if cur >= max_value {
                return None;
            }

            let edge = Edge::from_u64(cur, n);
            cur += 1;
            Some(edge)
        })
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn no_edges_for_zero_probability() {
        let mut rng = Pcg64::seed_from_u64(654);
        assert!(Gnp::new().nodes(50).prob(0.0).generate(&mut rng).is_empty());
    }

    #[test]
    fn all_edges_for_unit_probability() {
        let mut rng = Pcg64::seed_from_u64(654);
        let edges = Gnp::new().nodes(20).prob(1.0).generate(&mut rng);

        assert_eq!(
            edges,
            (0..400).map(|x| Edge::from_u64(x, 20)).collect_vec()
        );
    }

    #[test]
    fn edges_are_emitted_in_increasing_order() {
        let mut rng = Pcg64::seed_from_u64(654);
        let edges = Gnp::new().nodes(100).prob(0.3).generate(&mut rng);

        assert!(!edges.is_empty());
        assert!(edges.iter().all(|e| e.0 < 100 && e.1 < 100));
        assert!(
            edges
                .iter()
                .map(|e| e.0 as u64 * 100 + e.1 as u64)
                .tuple_windows()
                .all(|(x, y)| x < y)
        );
    }

    #[test]
    fn streams_are_reproducible() {
        let gen = Gnp::new().nodes(80).prob(0.1);

        let edges1 = gen.generate(&mut Pcg64::seed_from_u64(1000));
        let edges2 = gen.generate(&mut Pcg64::seed_from_u64(1000));

        assert_eq!(edges1, edges2);
    }

    #[test]
    fn random_undirected_graphs_are_well_formed() {
        let mut rng = Pcg64::seed_from_u64(654);

        let graph: AdjArrayUndir = RandomGraph::gnp_no_loops(&mut rng, 40, 0.2);
        assert_eq!(graph.number_of_nodes(), 40);
        assert!(graph.vertices().all(|u| !graph.has_self_loop(u)));
        assert!(graph.edges().all(|e| e.is_normalized()));

        let loops_allowed: AdjArrayUndir = RandomGraph::gnp(&mut rng, 40, 0.2);
        assert_eq!(loops_allowed.number_of_nodes(), 40);
    }
}
