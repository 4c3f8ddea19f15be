//! Parse RDF data from the standard input,
//! in the format specified in the first argument,
//! and write it back in [N-Triples]/[N-Quads] to the standard output.
//!
//! Alternatively, the input file name can be provided as a second argument.
//!
//! The base IRI (for Turtle, TriG and RDF/XML) can be set via the environment variable `RDFKIT_BASE`.
//!
//! Recognized formats are:
//! - [`ntriples`](https://www.w3.org/TR/n-triples/) (alias `nt`)
//! - [`turtle`](https://www.w3.org/TR/turtle/) (alias `ttl`)
//! - [`nquads`](https://www.w3.org/TR/n-quads/) (alias `nq`)
//! - [`trig`](https://www.w3.org/TR/trig/)
//! - `lines`: N-Quads read lazily, one line at a time (requires a file name)
//! - [`rdfxml`](https://www.w3.org/TR/rdf11-xml) (if compiled with the `xml` feature, alias `rdf`)
//! - `guess`: try to guess syntax from filename (default)
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [N-Quads]: https://www.w3.org/TR/n-quads/

use std::io::{stdin, stdout, BufReader, BufWriter};

use rdfkit::api::prelude::*;
use rdfkit::api::source::StreamError::{SinkError, SourceError};
use rdfkit::turtle::parser::{
    nq::NQuadsParser, nt::NTriplesParser, trig::TriGParser, turtle::TurtleParser,
    NQuadsFileIterator,
};
use rdfkit::turtle::serializer::{nq::NqSerializer, nt::NtSerializer};
#[cfg(feature = "xml")]
use rdfkit::xml::parser::RdfXmlParser;

fn main() {
    env_logger::init();
    let mut format = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "guess".to_string());
    let path = std::env::args().nth(2);
    if format == "guess" {
        let Some(filename) = &path else {
            eprintln!("Cannot guess format of stdin");
            std::process::exit(-2);
        };
        format = match filename.rsplit('.').next() {
            Some("nt") => "ntriples",
            Some("nq") => "nquads",
            Some("ttl") => "turtle",
            Some("trig") => "trig",
            Some("rdf" | "xml") => "rdfxml",
            _ => {
                eprintln!("Cannot guess format of {filename}");
                std::process::exit(-3);
            }
        }
        .to_string();
    }
    let base = std::env::var("RDFKIT_BASE").ok();
    log::debug!("parsing {path:?} as {format} with base {base:?}");

    let res = match &format[..] {
        "ntriples" | "nt" => dump(NTriplesParser {}, path, false),
        "turtle" | "ttl" => dump(TurtleParser { base }, path, false),
        "nquads" | "nq" => dump(NQuadsParser {}, path, true),
        "trig" => dump(TriGParser { base }, path, true),
        "lines" => match path.map(NQuadsFileIterator::open) {
            Some(Ok(statements)) => serialize(statements, true),
            Some(Err(e)) => Err(format!("Can not open file: {e}")),
            None => Err("The lines format requires a file name".to_string()),
        },
        #[cfg(feature = "xml")]
        "rdfxml" | "rdf" => dump(RdfXmlParser { base }, path, false),
        _ => {
            eprintln!("Unrecognized format: {format}");
            std::process::exit(-1);
        }
    };
    if let Err(msg) = res {
        eprintln!("{msg}");
        std::process::exit(1);
    }
}

fn dump<P: StatementParser>(parser: P, path: Option<String>, quads: bool) -> Result<(), String> {
    let statements = match path {
        Some(path) => parser.parse_file_to_iterator(path),
        None => parser.parse_reader_to_iterator(BufReader::new(stdin())),
    }
    .map_err(|e| format!("Can not open input: {e}"))?;
    serialize(statements, quads)
}

fn serialize<I: StatementIterator>(statements: I, quads: bool) -> Result<(), String> {
    let output = BufWriter::new(stdout());
    let res = if quads {
        NqSerializer::new(output)
            .serialize_statements(statements)
            .map(|_| ())
    } else {
        NtSerializer::new(output)
            .serialize_statements(statements)
            .map(|_| ())
    };
    match res {
        Ok(()) => Ok(()),
        Err(SourceError(e)) => Err(format!("Error while parsing input: {e}")),
        Err(SinkError(e)) => Err(format!("Error while writing statements: {e}")),
    }
}
