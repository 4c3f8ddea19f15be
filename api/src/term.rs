//! I define how RDF terms
//! (such as [IRIs](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! and [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal))
//! are represented in rdfkit.
//!
//! I provide the main type [`Node`],
//! the concrete node types it wraps ([`NamedNode`], [`BlankNode`], [`Literal`], [`Variable`]),
//! and the [`NodeFactory`] trait for building them.
//!
//! All node types are immutable and cheap to clone:
//! their text is stored in a reference-counted `str`.
use std::sync::Arc;

mod _blank_node;
pub use _blank_node::*;
mod _display;
pub use _display::*;
mod _error;
pub use _error::*;
mod _factory;
pub use _factory::*;
mod _literal;
pub use _literal::*;
mod _named_node;
pub use _named_node::*;
mod _native;
pub use _native::*;
mod _variable;
pub use _variable::*;

/// The different kinds of nodes that a [`Node`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum NodeKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Named,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    Blank,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// A SPARQL variable
    Variable,
    /// A wildcard, matching any node
    Any,
}

/// A generalized RDF node.
///
/// Besides the three kinds of RDF terms,
/// a node can be a [`Variable`] or the [`Any`](Node::Any) wildcard;
/// these two kinds are only meaningful in patterns
/// (see [`Statement::matches`](crate::statement::Statement::matches)),
/// and are rejected by serializers.
///
/// Two nodes are equal iff they have the same kind and the same content;
/// in particular, literals are compared on their lexical value, datatype and language tag.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Node {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Named(NamedNode),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    Blank(BlankNode),
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal(Literal),
    /// A SPARQL variable
    Variable(Variable),
    /// A wildcard, matching any node
    Any,
}

impl Node {
    /// Build a named node, checking `uri`.
    pub fn named<T: AsRef<str>>(uri: T) -> Result<Self> {
        NamedNode::new(uri).map(Node::Named)
    }

    /// Build a blank node, checking `id`.
    pub fn blank<T: AsRef<str>>(id: T) -> Result<Self> {
        BlankNode::new(id).map(Node::Blank)
    }

    /// Build a variable, checking `name`.
    pub fn variable<T: AsRef<str>>(name: T) -> Result<Self> {
        Variable::new(name).map(Node::Variable)
    }

    /// The kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Named(_) => NodeKind::Named,
            Node::Blank(_) => NodeKind::Blank,
            Node::Literal(_) => NodeKind::Literal,
            Node::Variable(_) => NodeKind::Variable,
            Node::Any => NodeKind::Any,
        }
    }

    /// Whether this node is a named node.
    pub fn is_named(&self) -> bool {
        matches!(self, Node::Named(_))
    }

    /// Whether this node is a blank node.
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    /// Whether this node is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// Whether this node is a variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, Node::Variable(_))
    }

    /// Whether this node is the [`Any`](Node::Any) wildcard.
    pub fn is_any(&self) -> bool {
        matches!(self, Node::Any)
    }

    /// Whether this node is a variable or the wildcard.
    pub fn is_pattern(&self) -> bool {
        matches!(self, Node::Variable(_) | Node::Any)
    }

    /// Whether this node is an actual RDF term (i.e. not a pattern).
    pub fn is_concrete(&self) -> bool {
        !self.is_pattern()
    }

    /// Whether this node can be used as the subject of a statement
    /// (named node, blank node or pattern).
    pub fn is_resource(&self) -> bool {
        !self.is_literal()
    }

    /// Return the inner [`NamedNode`], if any.
    pub fn as_named(&self) -> Option<&NamedNode> {
        match self {
            Node::Named(n) => Some(n),
            _ => None,
        }
    }

    /// Return the inner [`BlankNode`], if any.
    pub fn as_blank(&self) -> Option<&BlankNode> {
        match self {
            Node::Blank(b) => Some(b),
            _ => None,
        }
    }

    /// Return the inner [`Literal`], if any.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Return the inner [`Variable`], if any.
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Node::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// The characteristic text of this node:
    /// the IRI of a named node, the label of a blank node,
    /// the lexical value of a literal, the name of a variable;
    /// `None` for the wildcard.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Named(n) => Some(n.as_str()),
            Node::Blank(b) => Some(b.id()),
            Node::Literal(l) => Some(l.lexical_value()),
            Node::Variable(v) => Some(v.name()),
            Node::Any => None,
        }
    }
}

impl From<NamedNode> for Node {
    fn from(value: NamedNode) -> Self {
        Node::Named(value)
    }
}

impl From<BlankNode> for Node {
    fn from(value: BlankNode) -> Self {
        Node::Blank(value)
    }
}

impl From<Literal> for Node {
    fn from(value: Literal) -> Self {
        Node::Literal(value)
    }
}

impl From<Variable> for Node {
    fn from(value: Variable) -> Self {
        Node::Variable(value)
    }
}

impl PartialEq<NamedNode> for Node {
    fn eq(&self, other: &NamedNode) -> bool {
        self.as_named() == Some(other)
    }
}
