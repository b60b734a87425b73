//! # EdgeList
//!
//! The EdgeList-Format consists of the number of nodes, the number of edges, and one
//! `u v` token pair per edge. Tokens are separated by arbitrary whitespace including
//! line breaks, nodes are zero-based. Lines starting with a comment identifier are
//! skipped entirely.

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Lines, Write},
    path::Path,
};

use super::*;

/// Pulls whitespace separated tokens from all non-comment-lines of a reader.
struct TokenSource<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Tokens of the current line
    buffer: std::vec::IntoIter<String>,
    /// Lines starting with this identifier are skipped
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> TokenSource<'a, R> {
    fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            buffer: Vec::new().into_iter(),
            comment_identifier,
        }
    }

    /// Returns the next token or an error naming the value that is missing
    fn try_next(&mut self, name: &str) -> Result<String> {
        loop {
            if let Some(token) = self.buffer.next() {
                return Ok(token);
            }

            match self.lines.next() {
                None => {
                    return Err(io_error!(
                        ErrorKind::InvalidData,
                        format!("Premature end of input when parsing {name}.")
                    ));
                }
                Some(Err(e)) => return Err(e),
                Some(Ok(line)) if line.starts_with(self.comment_identifier) => continue,
                Some(Ok(line)) => {
                    self.buffer = line
                        .split_whitespace()
                        .map(String::from)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
            }
        }
    }
}

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the identifier used for detecting comment lines.
    ///
    /// Default is `"#"`.
    pub fn set_comment_identifier<S>(&mut self, c: S)
    where
        S: Into<String>,
    {
        self.comment_identifier = c.into();
    }

    /// Updates the comment identifier, consuming and returning `self` for chaining.
    ///
    /// # Example
    /// ```
    /// use densegraphs::io::*;
    ///
    /// let reader = EdgeListReader::new()
    ///     .comment_identifier("%");
    /// ```
    pub fn comment_identifier<S>(mut self, c: S) -> Self
    where
        S: Into<String>,
    {
        self.set_comment_identifier(c);
        self
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut tokens = TokenSource::new(reader, &self.comment_identifier);

        let n: NumNodes = parse_next_value!(tokens, "Number of nodes");
        let m: NumEdges = parse_next_value!(tokens, "Number of edges");

        let mut edges = Vec::with_capacity(m as usize);
        for _ in 0..m {
            let u: Node = parse_next_value!(tokens, "Source node");
            let v: Node = parse_next_value!(tokens, "Target node");
            raise_error_unless!(
                u < n && v < n,
                ErrorKind::InvalidData,
                format!("Edge ({u}, {v}) has endpoints out of range for {n} nodes.")
            );

            edges.push(Edge(u, v));
        }

        Ok(G::from_edges(n, edges))
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read a graph from a given buffered reader in **EdgeList format**.
    ///
    /// # Errors
    /// Returns an error if the input cannot be parsed as a valid edge list.
    ///
    /// # Example
    /// ```
    /// use densegraphs::prelude::*;
    /// use densegraphs::io::*;
    /// use std::io::Cursor;
    ///
    /// let data = b"3 2\n0 1\n1 2\n";
    /// let cursor = Cursor::new(&data[..]);
    /// let g: AdjArrayUndir = AdjArrayUndir::try_read_edge_list(cursor).unwrap();
    ///
    /// assert_eq!(g.number_of_nodes(), 3);
    /// assert_eq!(g.number_of_edges(), 2);
    /// ```
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read a graph from a file on disk in **EdgeList format**.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or is not a valid edge list.
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;
        writeln!(writer, "{}", graph.number_of_edges())?;

        for Edge(u, v) in graph.edges() {
            writeln!(writer, "{u} {v}")?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer in **EdgeList format**.
    ///
    /// # Example
    /// ```
    /// use densegraphs::prelude::*;
    /// use densegraphs::io::*;
    /// use std::io::Cursor;
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let mut buffer = Cursor::new(Vec::new());
    /// g.try_write_edge_list(&mut buffer).unwrap();
    ///
    /// assert_eq!(buffer.into_inner(), b"3\n2\n0 1\n1 2\n");
    /// ```
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

/// A GraphReader for the weighted EdgeList-Format storing `u v w` triples
#[derive(Debug, Clone)]
pub struct WeightedEdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for WeightedEdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl WeightedEdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the identifier used for detecting comment lines.
    ///
    /// Default is `"#"`.
    pub fn set_comment_identifier<S>(&mut self, c: S)
    where
        S: Into<String>,
    {
        self.comment_identifier = c.into();
    }

    /// Updates the comment identifier, consuming and returning `self` for chaining.
    pub fn comment_identifier<S>(mut self, c: S) -> Self
    where
        S: Into<String>,
    {
        self.set_comment_identifier(c);
        self
    }
}

impl GraphReader<WeightedGraph> for WeightedEdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<WeightedGraph> {
        let mut tokens = TokenSource::new(reader, &self.comment_identifier);

        let n: NumNodes = parse_next_value!(tokens, "Number of nodes");
        let m: NumEdges = parse_next_value!(tokens, "Number of edges");

        let mut edges: Vec<WeightedEdge> = Vec::with_capacity(m as usize);
        for _ in 0..m {
            let u: Node = parse_next_value!(tokens, "Source node");
            let v: Node = parse_next_value!(tokens, "Target node");
            let w: f64 = parse_next_value!(tokens, "Edge weight");
            raise_error_unless!(
                u < n && v < n,
                ErrorKind::InvalidData,
                format!("Edge ({u}, {v}) has endpoints out of range for {n} nodes.")
            );
            raise_error_unless!(
                w.is_finite(),
                ErrorKind::InvalidData,
                format!("Edge ({u}, {v}) has non-finite weight.")
            );

            edges.push(WeightedEdge::new(u, v, w));
        }

        Ok(WeightedGraph::from_weighted_edges(n, edges))
    }
}

/// A writer for the weighted EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct WeightedEdgeListWriter;

impl WeightedEdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphWriter<WeightedGraph> for WeightedEdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &WeightedGraph, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;
        writeln!(writer, "{}", graph.number_of_edges())?;

        for edge in graph.edges() {
            let Edge(u, v) = edge.endpoints();
            writeln!(writer, "{u} {v} {}", edge.weight())?;
        }

        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;
    use std::io::Cursor;

    #[test]
    fn reads_line_based_input() {
        let input = "4\n3\n0 1\n1 2\n2 3\n";
        let graph: AdjArrayUndir = EdgeListRead::try_read_edge_list(Cursor::new(input)).unwrap();

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(
            graph.edges().sorted().collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)]
        );
    }

    #[test]
    fn tokens_may_span_lines_arbitrarily() {
        let input = "4 3 0 1 1\n2 2 3";
        let graph: AdjArray = EdgeListRead::try_read_edge_list(Cursor::new(input)).unwrap();

        assert_eq!(
            graph.edges().sorted().collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)]
        );
    }

    #[test]
    fn comment_lines_are_skipped() {
        let input = "# a comment\n4\n3\n# another one\n0 1\n1 2\n2 3\n";
        let graph: AdjArrayUndir = EdgeListRead::try_read_edge_list(Cursor::new(input)).unwrap();

        assert_eq!(graph.number_of_edges(), 3);

        let input = "c pace style\n4 3 0 1 1 2 2 3";
        let graph: AdjArrayUndir = EdgeListReader::new()
            .comment_identifier("c")
            .try_read_graph(Cursor::new(input))
            .unwrap();

        assert_eq!(graph.number_of_edges(), 3);
    }

    #[test]
    fn truncated_input_is_rejected() {
        let input = "4\n3\n0 1\n1 2\n";
        let res: Result<AdjArrayUndir> = EdgeListRead::try_read_edge_list(Cursor::new(input));
        assert!(res.is_err());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for input in ["4\nthree\n", "4\n1\n0 one\n", "-4\n1\n0 1\n"] {
            let res: Result<AdjArrayUndir> = EdgeListRead::try_read_edge_list(Cursor::new(input));
            assert!(res.is_err());
        }
    }

    #[test]
    fn out_of_range_endpoints_are_rejected() {
        let input = "3\n1\n0 7\n";
        let res: Result<AdjArrayUndir> = EdgeListRead::try_read_edge_list(Cursor::new(input));
        assert_eq!(res.err().map(|e| e.kind()), Some(ErrorKind::InvalidData));
    }

    #[test]
    fn written_graphs_can_be_read_back() {
        let graph = AdjArray::from_edges(5, [(0, 1), (1, 2), (2, 0), (3, 3)]);

        let mut buffer = Vec::new();
        graph.try_write_edge_list(&mut buffer).unwrap();

        let read_back: AdjArray = EdgeListRead::try_read_edge_list(Cursor::new(buffer)).unwrap();
        assert_eq!(read_back.number_of_nodes(), graph.number_of_nodes());
        assert_eq!(
            read_back.edges().sorted().collect_vec(),
            graph.edges().sorted().collect_vec()
        );
    }

    #[test]
    fn weighted_graphs_roundtrip() {
        let graph = WeightedGraph::from_weighted_edges(
            3,
            [(0, 1, 0.5), (1, 2, 0.3), (0, 2, 0.9)],
        );

        let mut buffer = Vec::new();
        WeightedEdgeListWriter::new()
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        let read_back = WeightedEdgeListReader::new()
            .try_read_graph(Cursor::new(buffer))
            .unwrap();

        assert_eq!(read_back.number_of_edges(), graph.number_of_edges());
        assert!((read_back.total_weight() - graph.total_weight()).abs() < 1e-10);
    }

    #[test]
    fn weighted_reader_rejects_missing_weights() {
        let input = "3\n2\n0 1\n1 2\n";
        assert!(
            WeightedEdgeListReader::new()
                .try_read_graph(Cursor::new(input))
                .is_err()
        );
    }
}
