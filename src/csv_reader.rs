//! Loading graphs from delimited edge lists.
//!
//! Each non-comment line is one edge: `u,v` for static and bipartite
//! graphs, `u,v,start,end` for link streams.  Vertices are created with
//! their label the first time it appears, so vertex ids follow first-seen
//! order across the whole file.

use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    adjacency_graph::AdjacencyGraph,
    bipartite::Bipartite,
    directedness::Directedness,
    error::GraphError,
    interval_set::Time,
    stream_graph::StreamGraph,
    tracing_support::info_span,
};

/// Failure while loading a file.  File and parse problems are kept apart
/// from structural errors raised by the graph itself.
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected {expected} fields, found {found}")]
    Format {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: {field:?} is not a valid time")]
    Parse { line: u64, field: String },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

struct Record {
    line: u64,
    fields: Vec<String>,
}

/// Reader configuration: field delimiter (default `,`) and comment prefix
/// byte (default `#`).
#[derive(Clone, Debug)]
pub struct CsvReader {
    delimiter: u8,
    comment: Option<u8>,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment: Some(b'#'),
        }
    }
}

impl CsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Lines starting with `comment` are skipped; `None` disables comments.
    pub fn comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }

    pub fn read_graph<D: Directedness>(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<AdjacencyGraph<D>, CsvError> {
        self.read_graph_from_reader(open(path.as_ref())?)
    }

    pub fn read_graph_from_reader<D: Directedness, R: Read>(
        &self,
        reader: R,
    ) -> Result<AdjacencyGraph<D>, CsvError> {
        let _span = info_span!("read_graph").entered();
        let mut graph = AdjacencyGraph::new();
        for record in self.records(reader, 2)? {
            graph.add_edge_by_label(&record.fields[0], &record.fields[1])?;
        }
        Ok(graph)
    }

    /// Reads a bipartite graph: the first column names top vertices and the
    /// second bottom vertices.
    pub fn read_bipartite(&self, path: impl AsRef<Path>) -> Result<Bipartite, CsvError> {
        self.read_bipartite_from_reader(open(path.as_ref())?)
    }

    pub fn read_bipartite_from_reader<R: Read>(&self, reader: R) -> Result<Bipartite, CsvError> {
        let _span = info_span!("read_bipartite").entered();
        let mut graph = Bipartite::new();
        for record in self.records(reader, 2)? {
            graph.add_edge_by_label(&record.fields[0], &record.fields[1])?;
        }
        Ok(graph)
    }

    /// Reads a link stream whose definition range runs from the earliest
    /// start to the latest end in the file.
    pub fn read_link_stream<D: Directedness>(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<StreamGraph<D>, CsvError> {
        self.read_link_stream_from_reader(open(path.as_ref())?)
    }

    pub fn read_link_stream_from_reader<D: Directedness, R: Read>(
        &self,
        reader: R,
    ) -> Result<StreamGraph<D>, CsvError> {
        let _span = info_span!("read_link_stream").entered();
        let records = self.records(reader, 4)?;
        let mut timed = Vec::with_capacity(records.len());
        for record in &records {
            let start = parse_time(record, 2)?;
            let end = parse_time(record, 3)?;
            timed.push((record, start, end));
        }

        let lower = timed.iter().map(|&(_, start, _)| start).min().unwrap_or(0);
        let upper = timed.iter().map(|&(_, _, end)| end).max().unwrap_or(0);
        let mut stream = if timed.is_empty() {
            StreamGraph::new()
        } else {
            StreamGraph::with_definition(lower, upper)?
        };
        for (record, start, end) in timed {
            stream.add_edge_w_time_by_label(&record.fields[0], &record.fields[1], start, end)?;
        }
        Ok(stream)
    }

    fn records<R: Read>(&self, reader: R, expected: usize) -> Result<Vec<Record>, CsvError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .delimiter(self.delimiter)
            .comment(self.comment)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |position| position.line());
            if record.iter().all(str::is_empty) {
                continue;
            }
            if record.len() != expected {
                return Err(CsvError::Format {
                    line,
                    expected,
                    found: record.len(),
                });
            }
            records.push(Record {
                line,
                fields: record.iter().map(str::to_owned).collect(),
            });
        }
        Ok(records)
    }
}

fn open(path: &Path) -> Result<File, CsvError> {
    File::open(path).map_err(|source| CsvError::Open {
        path: path.to_owned(),
        source,
    })
}

fn parse_time(record: &Record, column: usize) -> Result<Time, CsvError> {
    let field = &record.fields[column];
    field.parse().map_err(|_| CsvError::Parse {
        line: record.line,
        field: field.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        directedness::{Directed, Undirected},
        error::ErrorKind,
        group::{Bipartition, Group},
        network::Network,
        vertex::VertexId,
    };

    #[test]
    fn test_read_graph_first_seen_order() {
        let data = "# edges\nb,a\na,c\n\nb,c\n";
        let graph: AdjacencyGraph<Undirected> =
            CsvReader::new().read_graph_from_reader(data.as_bytes()).unwrap();
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.vertex("b"), Ok(VertexId::new(0)));
        assert_eq!(graph.vertex("c"), Ok(VertexId::new(2)));
    }

    #[test]
    fn test_custom_delimiter() {
        let data = "a;b\nb;a\n";
        let graph: AdjacencyGraph<Directed> = CsvReader::new()
            .delimiter(b';')
            .read_graph_from_reader(data.as_bytes())
            .unwrap();
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn test_read_bipartite() {
        let data = "alice,book\nbob,book\n";
        let graph = CsvReader::new()
            .read_bipartite_from_reader(data.as_bytes())
            .unwrap();
        assert_eq!(graph.num_top_vertices(), 2);
        assert_eq!(graph.group_by_label("book"), Ok(Some(Group::Bottom)));
    }

    #[test]
    fn test_read_link_stream() {
        let data = "a,b,0,5\nb,c,5,10\na,b,3,7\n";
        let stream: StreamGraph<Undirected> = CsvReader::new()
            .read_link_stream_from_reader(data.as_bytes())
            .unwrap();
        assert_eq!(stream.definition_length(), 10);
        assert_eq!(stream.num_edges(), 1.2);
        assert_eq!(stream.edge_intervals(VertexId::new(0), VertexId::new(1)).unwrap().size(), 1);
    }

    #[test]
    fn test_wrong_field_count() {
        let data = "a,b\na,b,c\n";
        let err = CsvReader::new()
            .read_graph_from_reader::<Undirected, _>(data.as_bytes())
            .unwrap_err();
        assert!(matches!(err, CsvError::Format { line: 2, expected: 2, found: 3 }));
    }

    #[test]
    fn test_bad_time() {
        let data = "a,b,0,x\n";
        let err = CsvReader::new()
            .read_link_stream_from_reader::<Undirected, _>(data.as_bytes())
            .unwrap_err();
        assert!(matches!(err, CsvError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_graph_errors_are_distinct() {
        let data = "a,b,5,5\n";
        let err = CsvReader::new()
            .read_link_stream_from_reader::<Undirected, _>(data.as_bytes())
            .unwrap_err();
        match err {
            CsvError::Graph(err) => assert_eq!(err.kind(), ErrorKind::InvalidArgument),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_disabled_comments_read_hash_lines_as_edges() {
        let data = "#a,b\nb,c\n";
        let graph: AdjacencyGraph<Undirected> = CsvReader::new()
            .comment(None)
            .read_graph_from_reader(data.as_bytes())
            .unwrap();
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.has_edge_by_label("#a", "b"), Ok(true));

        let skipped: AdjacencyGraph<Undirected> =
            CsvReader::new().read_graph_from_reader(data.as_bytes()).unwrap();
        assert_eq!(skipped.num_edges(), 1);
        assert!(!skipped.has_label("#a"));
    }

    #[test]
    fn test_missing_file() {
        let err = CsvReader::new()
            .read_graph::<Undirected>("/nonexistent/edges.csv")
            .unwrap_err();
        assert!(matches!(err, CsvError::Open { .. }));
    }
}
