//! I define [`Statement`], the representation of RDF triples and quads,
//! also used as a pattern when some of its nodes are [variables](Node::Variable)
//! or [wildcards](Node::Any).
use crate::term::Node;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Variable bindings produced by a successful match, keyed by variable name.
pub type Bindings = HashMap<String, Node>;

/// An RDF statement: a triple, or a quad if it has a graph name.
///
/// Statements are immutable once built, and own their nodes.
/// Construction never fails:
/// whether a statement is fit for a given use is checked by that use
/// (see [`is_concrete`](Statement::is_concrete) and [`to_nquads`](Statement::to_nquads)).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Statement {
    subject: Node,
    predicate: Node,
    object: Node,
    graph: Option<Node>,
}

impl Statement {
    /// Build a statement.
    pub fn new(subject: Node, predicate: Node, object: Node, graph: Option<Node>) -> Self {
        Statement {
            subject,
            predicate,
            object,
            graph,
        }
    }

    /// Build a triple, i.e. a statement without graph name.
    pub fn triple(subject: Node, predicate: Node, object: Node) -> Self {
        Self::new(subject, predicate, object, None)
    }

    /// The subject of this statement.
    pub fn subject(&self) -> &Node {
        &self.subject
    }

    /// The predicate of this statement.
    pub fn predicate(&self) -> &Node {
        &self.predicate
    }

    /// The object of this statement.
    pub fn object(&self) -> &Node {
        &self.object
    }

    /// The graph name of this statement, if any.
    pub fn graph(&self) -> Option<&Node> {
        self.graph.as_ref()
    }

    /// A copy of this statement, placed in the given graph (or in none).
    pub fn with_graph(&self, graph: Option<Node>) -> Self {
        Statement {
            graph,
            ..self.clone()
        }
    }

    /// Whether this statement has a graph name.
    pub fn is_quad(&self) -> bool {
        self.graph.is_some()
    }

    /// Whether this statement has no graph name.
    pub fn is_triple(&self) -> bool {
        self.graph.is_none()
    }

    /// Whether none of the nodes of this statement is a pattern.
    pub fn is_concrete(&self) -> bool {
        self.nodes().all(Node::is_concrete)
    }

    /// Iterate over the nodes of this statement, in s, p, o, g order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        [&self.subject, &self.predicate, &self.object]
            .into_iter()
            .chain(self.graph.as_ref())
    }

    /// Check whether `candidate` matches this statement, used as a pattern.
    ///
    /// Variables and wildcards match any node.
    /// The graph position follows the same rule:
    /// a pattern without graph only matches candidates without graph,
    /// a wildcard or variable graph matches any graph (or none),
    /// and a concrete graph only matches candidates in that graph.
    /// Repeated variables are not required to match equal nodes;
    /// see [`bindings`](Statement::bindings) for that.
    pub fn matches(&self, candidate: &Statement) -> bool {
        match_node(&self.subject, &candidate.subject)
            && match_node(&self.predicate, &candidate.predicate)
            && match_node(&self.object, &candidate.object)
            && match_graph(self.graph.as_ref(), candidate.graph.as_ref())
    }

    /// Match `candidate` against this statement, used as a pattern,
    /// and return the values of the variables of the pattern.
    ///
    /// Return `None` if `candidate` does not match,
    /// including when a repeated variable would be bound to different nodes.
    /// A variable in the graph position of a pattern
    /// does not match a candidate without graph.
    pub fn bindings(&self, candidate: &Statement) -> Option<Bindings> {
        if !self.matches(candidate) {
            return None;
        }
        let mut bindings = Bindings::new();
        let pairs = [
            (Some(&self.subject), Some(&candidate.subject)),
            (Some(&self.predicate), Some(&candidate.predicate)),
            (Some(&self.object), Some(&candidate.object)),
            (self.graph.as_ref(), candidate.graph.as_ref()),
        ];
        for (pattern, value) in pairs {
            let Some(Node::Variable(var)) = pattern else {
                continue;
            };
            let value = value?;
            match bindings.get(var.name()) {
                Some(bound) if bound != value => return None,
                Some(_) => (),
                None => {
                    bindings.insert(var.name().to_string(), value.clone());
                }
            }
        }
        Some(bindings)
    }

    /// Check that this statement can be serialized as canonical N-Quads.
    pub fn check_canonical(&self) -> Result<(), CanonicalError> {
        if !self.is_concrete() {
            return Err(CanonicalError::NonConcreteStatement(self.to_string()));
        }
        if !self.predicate.is_named() {
            return Err(CanonicalError::InvalidPredicate(self.predicate.to_string()));
        }
        if let Some(lit) = self
            .nodes()
            .filter_map(Node::as_literal)
            .find(|lit| lit.language().is_none() && lit.datatype().as_str().is_empty())
        {
            return Err(CanonicalError::MissingDatatype(
                lit.lexical_value().to_string(),
            ));
        }
        Ok(())
    }

    /// The canonical N-Quads line for this statement, including the final `" .\n"`.
    pub fn to_nquads(&self) -> Result<String, CanonicalError> {
        self.check_canonical()?;
        Ok(format!("{self}\n"))
    }
}

fn match_node(pattern: &Node, candidate: &Node) -> bool {
    pattern.is_pattern() || pattern == candidate
}

fn match_graph(pattern: Option<&Node>, candidate: Option<&Node>) -> bool {
    match (pattern, candidate) {
        (None, None) => true,
        (None, Some(_)) => false,
        (Some(p), _) if p.is_pattern() => true,
        (Some(p), Some(c)) => p == c,
        (Some(_), None) => false,
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if let Some(g) = &self.graph {
            write!(f, " {g}")?;
        }
        f.write_str(" .")
    }
}

/// This error is raised when a statement has no canonical N-Quads form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    /// The statement contains a variable or a wildcard.
    #[error("Pattern statement can not be serialized: {0}")]
    NonConcreteStatement(String),
    /// A literal has no datatype (only possible with unchecked constructors).
    #[error("Literal '{0}' has no datatype")]
    MissingDatatype(String),
    /// The predicate is not a named node.
    #[error("Invalid predicate {0}")]
    InvalidPredicate(String),
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ns::rdf;
    use crate::term::{Literal, NamedNode};

    fn named(iri: &str) -> Node {
        Node::named(iri).unwrap()
    }

    fn var(name: &str) -> Node {
        Node::variable(name).unwrap()
    }

    fn alice_knows_bob(graph: Option<Node>) -> Statement {
        Statement::new(
            named("http://example.org/alice"),
            named("http://xmlns.com/foaf/0.1/knows"),
            named("http://example.org/bob"),
            graph,
        )
    }

    #[test]
    fn accessors() {
        let st = alice_knows_bob(Some(named("http://example.org/g")));
        assert_eq!(st.subject(), &named("http://example.org/alice"));
        assert_eq!(st.graph(), Some(&named("http://example.org/g")));
        assert!(st.is_quad());
        assert!(!st.is_triple());
        assert!(st.is_concrete());
        assert_eq!(st.nodes().count(), 4);
        assert!(st.with_graph(None).is_triple());
    }

    #[test]
    fn equality_includes_graph() {
        assert_eq!(alice_knows_bob(None), alice_knows_bob(None));
        assert_ne!(
            alice_knows_bob(None),
            alice_knows_bob(Some(named("http://example.org/g")))
        );
    }

    #[test]
    fn any_pattern_matching() {
        let pattern = Statement::new(Node::Any, named("http://xmlns.com/foaf/0.1/knows"), Node::Any, None);
        assert!(!pattern.is_concrete());
        assert!(pattern.matches(&alice_knows_bob(None)));
        assert!(!pattern.matches(&alice_knows_bob(Some(named("http://example.org/g")))));

        let other = Statement::triple(
            named("http://example.org/alice"),
            named("http://xmlns.com/foaf/0.1/name"),
            Literal::new("Alice", None, None).unwrap().into(),
        );
        assert!(!pattern.matches(&other));
    }

    #[test]
    fn graph_matching() {
        let g1 = named("http://example.org/g1");
        let g2 = named("http://example.org/g2");
        let in_g1 = Statement::new(Node::Any, Node::Any, Node::Any, Some(g1.clone()));
        assert!(in_g1.matches(&alice_knows_bob(Some(g1.clone()))));
        assert!(!in_g1.matches(&alice_knows_bob(Some(g2))));
        assert!(!in_g1.matches(&alice_knows_bob(None)));

        let any_graph = Statement::new(Node::Any, Node::Any, Node::Any, Some(Node::Any));
        assert!(any_graph.matches(&alice_knows_bob(None)));
        assert!(any_graph.matches(&alice_knows_bob(Some(g1))));
    }

    #[test]
    fn default_graph_pattern_does_not_match_named_graph() {
        let g = named("http://example.org/g");
        let pattern = Statement::triple(Node::Any, Node::Any, Node::Any);
        assert!(pattern.matches(&alice_knows_bob(None)));
        assert!(!pattern.matches(&alice_knows_bob(Some(g.clone()))));
        assert_eq!(pattern.bindings(&alice_knows_bob(Some(g))), None);
    }

    #[test]
    fn bindings() {
        let pattern = Statement::triple(var("s"), var("p"), named("http://example.org/bob"));
        let b = pattern.bindings(&alice_knows_bob(None)).unwrap();
        assert_eq!(b.len(), 2);
        assert_eq!(b["s"], named("http://example.org/alice"));
        assert_eq!(b["p"], named("http://xmlns.com/foaf/0.1/knows"));
    }

    #[test]
    fn bindings_repeated_variable() {
        let pattern = Statement::triple(var("x"), Node::Any, var("x"));
        assert!(pattern.matches(&alice_knows_bob(None)));
        assert_eq!(pattern.bindings(&alice_knows_bob(None)), None);

        let loop_ = Statement::triple(
            named("http://example.org/alice"),
            named(rdf::type_),
            named("http://example.org/alice"),
        );
        let b = pattern.bindings(&loop_).unwrap();
        assert_eq!(b["x"], named("http://example.org/alice"));
    }

    #[test]
    fn bindings_graph_variable() {
        let pattern = Statement::new(Node::Any, Node::Any, Node::Any, Some(var("g")));
        assert_eq!(pattern.bindings(&alice_knows_bob(None)), None);
        let b = pattern
            .bindings(&alice_knows_bob(Some(named("http://example.org/g"))))
            .unwrap();
        assert_eq!(b["g"], named("http://example.org/g"));
    }

    #[test]
    fn to_nquads() {
        let st = Statement::new(
            Node::blank("b0").unwrap(),
            named("http://example.org/p"),
            Literal::new("a \"quoted\"\nvalue", None, Some("en")).unwrap().into(),
            Some(named("http://example.org/g")),
        );
        assert_eq!(
            st.to_nquads().unwrap(),
            "_:b0 <http://example.org/p> \"a \\\"quoted\\\"\\nvalue\"@en <http://example.org/g> .\n"
        );
        assert_eq!(
            alice_knows_bob(None).to_nquads().unwrap(),
            "<http://example.org/alice> <http://xmlns.com/foaf/0.1/knows> <http://example.org/bob> .\n"
        );
    }

    #[test]
    fn to_nquads_errors() {
        let pattern = Statement::triple(var("s"), named(rdf::type_), Node::Any);
        assert_eq!(
            pattern.to_nquads(),
            Err(CanonicalError::NonConcreteStatement(
                "?s <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> ANY .".into()
            ))
        );

        let bad_predicate = Statement::triple(
            named("tag:s"),
            Node::blank("p").unwrap(),
            named("tag:o"),
        );
        assert_eq!(
            bad_predicate.to_nquads(),
            Err(CanonicalError::InvalidPredicate("_:p".into()))
        );

        let untyped = Literal::new_unchecked("x", NamedNode::new_unchecked(""), None);
        let missing = Statement::triple(named("tag:s"), named("tag:p"), untyped.into());
        assert_eq!(
            missing.to_nquads(),
            Err(CanonicalError::MissingDatatype("x".into()))
        );
    }
}
