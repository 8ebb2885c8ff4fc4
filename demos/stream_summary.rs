//! Example that reads an edge list (or stdin) and prints a summary.
//!
//! Usage:
//!   cargo run --example stream_summary -- tests/data/contacts.csv
//!   cargo run --example stream_summary -- --kind bipartite tests/data/ratings.csv
//!   cat edges.csv | cargo run --example stream_summary -- --kind graph --directed

use std::fs::File;
use std::io::{self, Read};
use std::process;

use clap::{Parser, ValueEnum};
use linkgraph::prelude::*;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    /// `u,v` static graph
    Graph,
    /// `top,bottom` bipartite graph, summarized with both projections
    Bipartite,
    /// `u,v,start,end` link stream
    Stream,
}

/// Read an edge list, build the requested graph, and print its metrics.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file path (use '-' or omit to read from stdin)
    input: Option<String>,

    #[arg(long, value_enum, default_value_t = Kind::Stream)]
    kind: Kind,

    /// Treat edges as directed (graphs and streams only)
    #[arg(long)]
    directed: bool,

    /// Field delimiter (a single ASCII character)
    #[arg(long, default_value = ",")]
    delimiter: String,

    /// Max number of vertices to list with their degree
    #[arg(long, default_value_t = 10)]
    sample_vertices: usize,
}

fn main() {
    linkgraph::tracing_support::init_tracing();
    let args = Args::parse();
    let delimiter = delimiter_or_exit(&args.delimiter);
    let reader = CsvReader::new().delimiter(delimiter);
    let input = open_or_exit(args.input.as_deref());

    let result = match (args.kind, args.directed) {
        (Kind::Graph, false) => reader
            .read_graph_from_reader::<Undirected, _>(input)
            .map(|g| print_summary(&g, args.sample_vertices)),
        (Kind::Graph, true) => reader
            .read_graph_from_reader::<Directed, _>(input)
            .map(|g| print_summary(&g, args.sample_vertices)),
        (Kind::Stream, false) => reader
            .read_link_stream_from_reader::<Undirected, _>(input)
            .map(|s| print_summary(&s, args.sample_vertices)),
        (Kind::Stream, true) => reader
            .read_link_stream_from_reader::<Directed, _>(input)
            .map(|s| print_summary(&s, args.sample_vertices)),
        (Kind::Bipartite, _) => reader
            .read_bipartite_from_reader(input)
            .and_then(|g| print_bipartite(&g, args.sample_vertices).map_err(CsvError::from)),
    };

    if let Err(err) = result {
        eprintln!("Failed to load graph: {err}");
        process::exit(1);
    }
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        &[byte] if byte.is_ascii() => Ok(byte),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got {value:?}"
        )),
    }
}

fn delimiter_or_exit(value: &str) -> u8 {
    match parse_delimiter(value) {
        Ok(byte) => byte,
        Err(err) => {
            eprintln!("Invalid --delimiter: {err}");
            process::exit(1);
        }
    }
}

fn open_or_exit(path: Option<&str>) -> Box<dyn Read> {
    match path {
        Some("-") | None => Box::new(io::stdin()),
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(file),
            Err(err) => {
                eprintln!("Failed to read '{path}': {err}");
                process::exit(1);
            }
        },
    }
}

fn print_summary<N: Network + std::fmt::Display>(network: &N, sample: usize) {
    println!("{network}");
    println!("  density:    {:.4}", network.density());
    println!("  avg degree: {:.4}", network.avg_degree());
    for v in network.vertices().take(sample) {
        let name = network.label(v).map_or_else(|_| v.to_string(), str::to_owned);
        if let Ok(degree) = network.degree(v) {
            println!("  {name}: {degree}");
        }
    }
}

fn print_bipartite(graph: &Bipartite, sample: usize) -> Result<(), GraphError> {
    print_summary(graph, sample);
    println!(
        "  top: {}, bottom: {}",
        graph.num_top_vertices(),
        graph.num_bottom_vertices()
    );
    for group in [Group::Top, Group::Bottom] {
        let projection = projected_graph(group, graph)?;
        println!("{group} projection: {projection}");
    }
    Ok(())
}
