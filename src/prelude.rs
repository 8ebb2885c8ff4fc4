pub use crate::adjacency_graph::{AdjacencyGraph, DiGraph, Graph};
pub use crate::bipartite::{Bipartite, BipartiteGraph, DiBipartite};
pub use crate::bipartite_stream::{BiLinkStream, BipartiteStreamGraph, DiBiLinkStream};
pub use crate::csv_reader::{CsvError, CsvReader};
pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::edge_multiplicity::EdgeMultiplicity;
pub use crate::error::{ErrorKind, GraphError};
pub use crate::group::{Bipartition, Group};
pub use crate::interval_set::{RangePolicy, Time, TimeInterval, TimeIntervalSet};
pub use crate::matrix::Matrix;
pub use crate::network::{EdgeId, Network, Weight};
pub use crate::pairs::{OrderedPair, Pair, SortedPair};
pub use crate::projection::projected_graph;
pub use crate::stream_graph::{DiLinkStream, LinkStream, StreamGraph};
pub use crate::vertex::VertexId;
