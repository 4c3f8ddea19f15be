//! Load an N-Quads file in memory, and run a SPARQL query against it.
//!
//! Usage: `query <file.nq> <query>`
//!
//! The query is classified first; its type, dataset and patterns
//! are logged at the `info` level (set `RUST_LOG=info` to see them).
//! Queries (`SELECT`, `ASK`) print their result on the standard output,
//! while updates print the resulting store as N-Quads.

use std::io::{stdout, BufWriter, Write};

use rdfkit::api::prelude::*;
use rdfkit::inmem::MemoryStore;
use rdfkit::sparql::classify;
use rdfkit::turtle::parser::nq::NQuadsParser;
use rdfkit::turtle::serializer::nq::NqSerializer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let [_, path, query] = &args[..] else {
        eprintln!("usage: {} <file.nq> <query>", args[0]);
        std::process::exit(1);
    };

    let info = classify(query)?;
    log::info!("query type: {}", info.query_type());
    for g in info.from_graphs() {
        log::info!("FROM {g}");
    }
    for p in info.patterns() {
        log::info!("pattern: {p}");
    }

    let mut store = MemoryStore::new();
    let n = store.add_statements(NQuadsParser {}.parse_file_to_iterator(path)?, None)?;
    log::info!("{n} statement(s) loaded from {path}");

    let mut out = BufWriter::new(stdout());
    match store.query(query)? {
        QueryResult::Set(set) => {
            writeln!(out, "{}", set.variables().join("\t"))?;
            for row in set.rows() {
                let cells: Vec<String> = set
                    .variables()
                    .iter()
                    .map(|v| row.get(v).map(Node::to_string).unwrap_or_default())
                    .collect();
                writeln!(out, "{}", cells.join("\t"))?;
            }
        }
        QueryResult::Value(value) => writeln!(out, "{}", value.value().lexical_form())?,
        QueryResult::Statements(mut statements) => {
            NqSerializer::new(out).serialize_statements(statements.iter_mut())?;
        }
        QueryResult::Empty => {
            let all = Statement::new(Node::Any, Node::Any, Node::Any, Some(Node::Any));
            let statements = store.get_matching_statements(&all, None)?;
            NqSerializer::new(out).serialize_statements(statements.into_inner())?;
        }
    }
    Ok(())
}
