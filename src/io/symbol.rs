//! # SymbolList
//!
//! Reads graphs whose nodes are identified by names instead of dense integer ids.
//! Every line lists the name of a node followed by the names of its neighbors,
//! separated by a configurable delimiter. The reader assigns ids in order of first
//! encounter and connects the first name of each line to all remaining ones.

use std::io::BufRead;

use fxhash::FxHashMap;

use super::*;
use crate::algo::BreadthFirstPaths;

/// An undirected graph over named nodes.
///
/// Wraps an [`AdjArrayUndir`] together with the two-way mapping between names
/// and node ids. The graph is a multigraph: names repeated on several lines
/// accumulate parallel edges.
#[derive(Clone)]
pub struct SymbolGraph {
    /// Maps each name to its node id
    index: FxHashMap<String, Node>,
    /// Maps each node id back to its name
    names: Vec<String>,
    /// The underlying graph over dense ids
    graph: AdjArrayUndir,
}

impl SymbolGraph {
    /// Reads a symbol graph with default reader settings.
    pub fn try_read<R: BufRead>(reader: R) -> Result<Self> {
        SymbolGraphReader::default().try_read_graph(reader)
    }

    /// Returns *true* if a node named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the node id associated with `name` if it exists.
    pub fn index_of(&self, name: &str) -> Option<Node> {
        self.index.get(name).copied()
    }

    /// Returns the name associated with node `v`.
    ///
    /// ** Panics if `v >= n` **
    pub fn name_of(&self, v: Node) -> &str {
        &self.names[v as usize]
    }

    /// Returns the underlying graph over dense node ids.
    pub fn graph(&self) -> &AdjArrayUndir {
        &self.graph
    }

    /// Returns the names along a shortest path connecting `source` and `sink`,
    /// or `None` if either name is unknown or no path exists.
    ///
    /// Runs one full breadth-first search per call. For repeated queries from
    /// the same source, build a [`BreadthFirstPaths`] over [`Self::graph`]
    /// once and map the resulting ids through [`Self::name_of`].
    pub fn degrees_of_separation(&self, source: &str, sink: &str) -> Option<Vec<&str>> {
        let s = self.index_of(source)?;
        let t = self.index_of(sink)?;

        let paths = BreadthFirstPaths::new(&self.graph, s);
        let path = paths.path_to(t)?;
        Some(path.into_iter().map(|v| self.name_of(v)).collect())
    }
}

/// A GraphReader for the SymbolList-Format
#[derive(Debug, Clone)]
pub struct SymbolGraphReader {
    /// Names on a line are separated by this delimiter
    delimiter: String,
}

impl Default for SymbolGraphReader {
    fn default() -> Self {
        Self {
            delimiter: " ".to_string(),
        }
    }
}

impl SymbolGraphReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the delimiter separating the names on a line.
    ///
    /// Default is a single space.
    pub fn set_delimiter<S>(&mut self, d: S)
    where
        S: Into<String>,
    {
        self.delimiter = d.into();
    }

    /// Updates the delimiter, consuming and returning `self` for chaining.
    ///
    /// # Example
    /// ```
    /// use densegraphs::io::*;
    ///
    /// let reader = SymbolGraphReader::new()
    ///     .delimiter("/");
    /// ```
    pub fn delimiter<S>(mut self, d: S) -> Self
    where
        S: Into<String>,
    {
        self.set_delimiter(d);
        self
    }
}

impl GraphReader<SymbolGraph> for SymbolGraphReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<SymbolGraph> {
        let mut index = FxHashMap::default();
        let mut names = Vec::new();
        let mut lines = Vec::new();

        // first pass assigns ids to all distinct names in order of encounter
        for line in reader.lines() {
            let tokens: Vec<String> = line?
                .split(self.delimiter.as_str())
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
            if tokens.is_empty() {
                continue;
            }

            for token in &tokens {
                if !index.contains_key(token) {
                    index.insert(token.clone(), names.len() as Node);
                    names.push(token.clone());
                }
            }
            lines.push(tokens);
        }

        // second pass connects the first name of each line to all others
        let mut graph = AdjArrayUndir::new(names.len() as NumNodes);
        for tokens in &lines {
            let source = index[tokens[0].as_str()];
            for target in &tokens[1..] {
                graph.add_edge(source, index[target.as_str()]);
            }
        }

        Ok(SymbolGraph {
            index,
            names,
            graph,
        })
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::io::Cursor;

    const ROUTES: &str = "JFK MCO\nORD DEN\nORD HOU\nDFW PHX\nJFK ATL\nORD DFW\n\
                          ORD PHX\nATL HOU\nDEN PHX\nPHX LAX\nJFK ORD\nATL MCO\n\
                          HOU MCO\nLAS LAX\n";

    #[test]
    fn names_are_indexed_in_order_of_encounter() {
        let sg = SymbolGraph::try_read(Cursor::new(ROUTES)).unwrap();

        assert_eq!(sg.graph().number_of_nodes(), 10);
        assert_eq!(sg.graph().number_of_edges(), 14);

        assert_eq!(sg.index_of("JFK"), Some(0));
        assert_eq!(sg.index_of("MCO"), Some(1));
        assert_eq!(sg.index_of("ORD"), Some(2));
        assert_eq!(sg.name_of(3), "DEN");

        assert!(sg.contains("LAS"));
        assert!(!sg.contains("SFO"));
        assert_eq!(sg.index_of("SFO"), None);
    }

    #[test]
    fn ids_and_names_are_inverse_mappings() {
        let sg = SymbolGraph::try_read(Cursor::new(ROUTES)).unwrap();

        for v in sg.graph().vertices() {
            assert_eq!(sg.index_of(sg.name_of(v)), Some(v));
        }
    }

    #[test]
    fn first_name_is_connected_to_all_others() {
        let input = "A B C D\nB C\n";
        let sg = SymbolGraph::try_read(Cursor::new(input)).unwrap();

        let a = sg.index_of("A").unwrap();
        assert_eq!(sg.graph().degree_of(a), 3);
        assert_eq!(sg.graph().number_of_edges(), 4);
    }

    #[test]
    fn repeated_names_accumulate_parallel_edges() {
        let input = "A B B\n";
        let sg = SymbolGraph::try_read(Cursor::new(input)).unwrap();

        assert_eq!(sg.graph().number_of_edges(), 2);
        assert_eq!(sg.graph().degree_of(sg.index_of("A").unwrap()), 2);
    }

    #[test]
    fn empty_lines_and_custom_delimiters() {
        let input = "\nMovie A/Actor X/Actor Y\n\nMovie B/Actor Y/Actor Z\n";
        let sg = SymbolGraphReader::new()
            .delimiter("/")
            .try_read_graph(Cursor::new(input))
            .unwrap();

        assert_eq!(sg.graph().number_of_nodes(), 5);
        assert!(sg.contains("Movie A"));
        assert!(sg.contains("Actor Z"));
    }

    #[test]
    fn degrees_of_separation() {
        let input = "Movie A/Actor X/Actor Y\nMovie B/Actor Y/Actor Z\nMovie C/Actor W\n";
        let sg = SymbolGraphReader::new()
            .delimiter("/")
            .try_read_graph(Cursor::new(input))
            .unwrap();

        let source = sg.index_of("Actor X").unwrap();
        let bfs = BreadthFirstPaths::new(sg.graph(), source);
        assert_eq!(bfs.dist_to(sg.index_of("Actor Z").unwrap()), Some(4));

        assert_eq!(
            sg.degrees_of_separation("Actor X", "Actor Z").unwrap(),
            vec!["Actor X", "Movie A", "Actor Y", "Movie B", "Actor Z"]
        );

        // unknown names and unconnected pairs have no path
        assert_eq!(sg.degrees_of_separation("Actor X", "Kevin Bacon"), None);
        assert_eq!(sg.degrees_of_separation("Actor X", "Actor W"), None);
    }
}
