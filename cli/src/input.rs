use crate::{Error, ErrorKind};
use adjgraph::{Graph, ImmutableGraphContainer, MutableGraphContainer};
use log::{info, warn};
use std::io::Read;
use std::str::SplitWhitespace;

/// A graph read from the input, together with the amount of entries that could not be added.
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: Graph<String, f64>,
    pub rejected_vertices: usize,
    pub rejected_edges: usize,
}

pub fn read_graph_from_file(path: &str) -> crate::Result<LoadedGraph> {
    info!("Reading graph from: {}", path);
    let mut file = std::fs::File::open(path)?;
    read_graph(&mut file)
}

/// Reads a graph in the format
///
/// ```text
/// n m
/// label_1 ... label_n
/// source_1 dest_1 weight_1
/// ...
/// source_m dest_m weight_m
/// ```
///
/// Tokens may be separated by any whitespace.
/// Duplicate labels and edges with unknown endpoints are skipped with a warning.
pub fn read_graph<Reader: Read>(reader: &mut Reader) -> crate::Result<LoadedGraph> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let vertex_amount: usize = next_token(&mut tokens, "vertex amount")?.parse()?;
    let edge_amount: usize = next_token(&mut tokens, "edge amount")?.parse()?;

    // Each label takes at least two bytes including its separator.
    let mut loaded = LoadedGraph {
        graph: Graph::with_capacity(vertex_amount.min(text.len() / 2 + 1)),
        rejected_vertices: 0,
        rejected_edges: 0,
    };

    for _ in 0..vertex_amount {
        let label = next_token(&mut tokens, "vertex label")?.to_owned();
        if loaded.graph.contains_vertex(&label) {
            warn!("Skipping duplicate vertex '{}'", label);
            loaded.rejected_vertices += 1;
        } else {
            loaded.graph.try_add_vertex(label)?;
        }
    }

    for _ in 0..edge_amount {
        let source = next_token(&mut tokens, "edge source")?.to_owned();
        let dest = next_token(&mut tokens, "edge destination")?.to_owned();
        let weight: f64 = next_token(&mut tokens, "edge weight")?.parse()?;

        if !loaded.graph.add_edge(&source, &dest, weight) {
            warn!(
                "Skipping edge ({}, {}) since one of its endpoints does not exist",
                source, dest
            );
            loaded.rejected_edges += 1;
        }
    }

    if tokens.next().is_some() {
        return Err(Error::from(ErrorKind::MalformedInput(
            "unexpected data after the last edge".to_owned(),
        )));
    }

    info!(
        "Read {} vertices and {} edges",
        vertex_amount - loaded.rejected_vertices,
        edge_amount - loaded.rejected_edges
    );
    Ok(loaded)
}

fn next_token<'a>(tokens: &mut SplitWhitespace<'a>, expected: &str) -> crate::Result<&'a str> {
    tokens.next().ok_or_else(|| {
        Error::from(ErrorKind::MalformedInput(format!(
            "input ended while reading the {}",
            expected
        )))
    })
}
