//! In-memory static, bipartite and temporal graphs.
//!
//! Four graph families share one structural store ([`AdjacencyGraph`]) and
//! one query surface ([`Network`]):
//!
//! * [`Graph`] / [`DiGraph`]: static graphs counting edge multiplicities.
//! * [`Bipartite`]: static graphs with top/bottom vertex groups, and
//!   [`projected_graph`] to derive a one-mode graph from them.
//! * [`LinkStream`]: graphs whose edges are present during sub-intervals of
//!   a definition range, weighted by the fraction of time they are present.
//! * [`BiLinkStream`]: link streams over a strictly bipartite vertex set.
//!
//! ```
//! use linkgraph::prelude::*;
//!
//! let mut stream = LinkStream::with_definition(0, 10)?;
//! stream.add_edge_w_time_by_label("a", "b", 0, 5)?;
//! stream.add_edge_w_time_by_label("b", "c", 0, 5)?;
//! stream.add_edge_w_time_by_label("c", "a", 0, 5)?;
//! assert_eq!(stream.num_edges(), 1.5);
//! assert_eq!(stream.density(), 0.5);
//! # Ok::<(), GraphError>(())
//! ```

pub mod adjacency_graph;
pub mod bipartite;
pub mod bipartite_stream;
pub mod csv_reader;
pub mod directedness;
pub mod edge_multiplicity;
pub mod error;
pub mod group;
pub mod interval_set;
pub mod matrix;
pub mod network;
pub mod pairs;
pub mod prelude;
pub mod projection;
pub mod stream_graph;
pub mod tracing_support;
pub mod vertex;

#[doc(hidden)]
pub mod graph_test_support;

mod util;

pub use adjacency_graph::{AdjacencyGraph, DiGraph, Graph};
pub use bipartite::{Bipartite, DiBipartite};
pub use bipartite_stream::{BiLinkStream, DiBiLinkStream};
pub use error::{ErrorKind, GraphError, Result};
pub use network::Network;
pub use projection::projected_graph;
pub use stream_graph::{DiLinkStream, LinkStream};
