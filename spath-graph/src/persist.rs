//! Plain-text edge list format.
//!
//! ```text
//! <node_count>,<edge_count>
//! <source>,<destination>,<weight>
//! ...
//! ```
//!
//! Exactly `edge_count` edge lines follow the header. Fields are decimal
//! integers, surrounding whitespace is ignored, blank lines are skipped.

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;

use crate::adjacency::AdjacencyList;
use crate::edge::{check_graph_size, Edge};
use crate::errors::PersistError;

type Result<T> = std::result::Result<T, PersistError>;

/// Read a graph. The graph is returned only if every line is valid.
pub fn load<R: BufRead>(reader: R) -> Result<AdjacencyList> {
    let mut lines = reader.lines().enumerate();

    let (header_line, (node_count, edge_count)) = loop {
        match lines.next() {
            Some((index, line)) => {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                break (index + 1, parse_header(&line)?);
            }
            None => return Err(PersistError::MalformedHeader("missing header line")),
        }
    };
    check_graph_size(node_count, edge_count).map_err(|source| PersistError::Graph { line: header_line, source })?;

    let mut graph = AdjacencyList::new(node_count, edge_count);
    let mut found = 0;
    for (index, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        let edge = parse_edge(&line).map_err(|reason| PersistError::MalformedEdge { line: line_no, reason })?;
        graph.insert_edge(edge).map_err(|source| PersistError::Graph { line: line_no, source })?;
        found += 1;
    }

    if found != edge_count {
        return Err(PersistError::EdgeCountMismatch { declared: edge_count, found });
    }

    debug!("loaded graph with {} nodes and {} edges", node_count, edge_count);
    Ok(graph)
}

/// Parse a graph from a string, see [`load`].
pub fn load_str(s: &str) -> Result<AdjacencyList> {
    load(s.as_bytes())
}

/// Write a graph: header, then edges with sources ascending and each source's edges in stored order.
pub fn save<W: Write>(graph: &AdjacencyList, mut writer: W) -> Result<()> {
    for line in format_lines(graph) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    debug!("saved graph with {} nodes and {} edges", graph.node_count(), graph.edge_count());
    Ok(())
}

/// Serialize a graph into a string, see [`save`].
pub fn save_string(graph: &AdjacencyList) -> String {
    format_lines(graph).map(|line| line + "\n").collect()
}

fn format_lines(graph: &AdjacencyList) -> impl Iterator<Item = String> + '_ {
    let header = format!("{},{}", graph.node_count(), graph.edge_count());
    let edges = graph
        .edges()
        .map(|Edge { source, destination, weight }| format!("{},{},{}", source, destination, weight));
    std::iter::once(header).chain(edges)
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let fields = split_fields(line);
    if fields.len() != 2 {
        return Err(PersistError::MalformedHeader("expected 2 comma-separated fields"));
    }
    let node_count = parse_field(fields[0]).ok_or(PersistError::MalformedHeader("node count is not a non-negative integer"))?;
    let edge_count = parse_field(fields[1]).ok_or(PersistError::MalformedHeader("edge count is not a non-negative integer"))?;
    Ok((node_count, edge_count))
}

fn parse_edge(line: &str) -> std::result::Result<Edge, &'static str> {
    let fields = split_fields(line);
    if fields.len() != 3 {
        return Err("expected 3 comma-separated fields");
    }
    let source = parse_field(fields[0]).ok_or("source is not a non-negative integer")?;
    let destination = parse_field(fields[1]).ok_or("destination is not a non-negative integer")?;
    let weight = parse_field(fields[2]).ok_or("weight is not a non-negative integer")?;
    Ok(Edge::new(source, destination, weight))
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

fn parse_field<T: FromStr>(field: &str) -> Option<T> {
    // `FromStr` for unsigned ints accepts a leading '+', the format doesn't
    if field.starts_with('+') {
        return None;
    }
    field.parse().ok()
}
