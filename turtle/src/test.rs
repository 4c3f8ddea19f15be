//! Tests combining parsers and serializers.
use crate::parser::nq::NQuadsParser;
use crate::parser::nt::NTriplesParser;
use crate::parser::turtle::TurtleParser;
use crate::serializer::nq::NqSerializer;
use crate::serializer::nt::NtSerializer;
use rdfkit_api::parser::StatementParser;
use rdfkit_api::serializer::{StatementSerializer, Stringifier};
use rdfkit_api::source::{ArrayStatementIterator, StatementIterator};
use rdfkit_api::statement::Statement;
use rdfkit_api::term::{Literal, Node};
use std::error::Error;

fn named(iri: &str) -> Node {
    Node::named(iri).unwrap()
}

fn sample() -> Vec<Statement> {
    let p = named("http://example.org/p");
    vec![
        Statement::triple(named("http://example.org/s"), p.clone(), named("http://example.org/o")),
        Statement::triple(
            Node::blank("b1").unwrap(),
            p.clone(),
            Literal::new(true, None, None).unwrap().into(),
        ),
        Statement::triple(
            named("http://example.org/s"),
            p.clone(),
            Literal::new(42, None, None).unwrap().into(),
        ),
        Statement::triple(
            named("http://example.org/s"),
            p.clone(),
            Literal::new(1.5, None, None).unwrap().into(),
        ),
        Statement::triple(
            named("http://example.org/s"),
            p.clone(),
            Literal::new("tab\there \"quoted\"\nnew line \\ é", None, None)
                .unwrap()
                .into(),
        ),
        Statement::new(
            named("http://example.org/s"),
            p.clone(),
            Literal::new("chat", None, Some("fr")).unwrap().into(),
            Some(named("http://example.org/g")),
        ),
        Statement::new(
            Node::blank("b2").unwrap(),
            p,
            Node::blank("b1").unwrap(),
            Some(Node::blank("g").unwrap()),
        ),
    ]
}

#[test]
fn nquads_round_trip() -> Result<(), Box<dyn Error>> {
    crate::test_setup();
    let mut ser = NqSerializer::new_stringifier();
    ser.serialize_statements(ArrayStatementIterator::new(sample()))?;
    let parsed = NQuadsParser {}
        .parse_str_to_iterator(ser.as_str())?
        .statements()
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(parsed, sample());
    Ok(())
}

#[test]
fn ntriples_round_trip_drops_graphs() -> Result<(), Box<dyn Error>> {
    let mut ser = NtSerializer::new_stringifier();
    ser.serialize_statements(ArrayStatementIterator::new(sample()))?;
    let parsed = NTriplesParser {}
        .parse_str_to_iterator(ser.as_str())?
        .statements()
        .collect::<Result<Vec<_>, _>>()?;
    let expected: Vec<_> = sample().iter().map(|st| st.with_graph(None)).collect();
    assert_eq!(parsed, expected);
    Ok(())
}

#[test]
fn to_nquads_is_parsable() -> Result<(), Box<dyn Error>> {
    for st in sample() {
        let txt = st.to_nquads()?;
        let mut it = NQuadsParser {}.parse_str_to_iterator(&txt)?;
        assert_eq!(it.current()?, Some(&st));
        assert!(!it.next()?);
    }
    Ok(())
}

#[test]
fn turtle_to_nquads() -> Result<(), Box<dyn Error>> {
    let ttl = r#"
        @prefix ex: <http://example.org/> .
        ex:s ex:p "foo", 42 .
    "#;
    let it = TurtleParser::default().parse_str_to_iterator(ttl)?;
    let mut ser = NqSerializer::new_stringifier();
    ser.serialize_statements(it)?;
    assert_eq!(
        ser.as_str(),
        "<http://example.org/s> <http://example.org/p> \"foo\"^^<http://www.w3.org/2001/XMLSchema#string> .\n\
         <http://example.org/s> <http://example.org/p> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n"
    );
    Ok(())
}

#[test]
fn rewind_file_iterator() -> Result<(), Box<dyn Error>> {
    let file = crate::TempFile::new(
        "rewind.ttl",
        "@prefix ex: <http://example.org/> .\nex:a ex:b ex:c, ex:d .\n",
    )?;
    let mut it = TurtleParser::default().parse_file_to_iterator(file.path())?;
    assert!(it.next()?);
    assert!(it.next()?);
    assert!(!it.next()?);
    it.rewind()?;
    assert_eq!(it.key(), 0);
    assert_eq!(it.to_array()?.len(), 2);
    Ok(())
}

#[test]
fn temp_file_is_removed_on_unwind() {
    let mut kept = None;
    let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let file = crate::TempFile::new("unwind.nq", "").unwrap();
        kept = Some(file.path().to_path_buf());
        panic!("failing test body");
    }));
    assert!(res.is_err());
    assert!(!kept.unwrap().exists());
}
