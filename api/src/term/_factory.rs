use super::*;
use crate::statement::Statement;

/// A factory for nodes and statements.
///
/// Every method has a default implementation relying on the constructors
/// of the node types, so implementors only override what they need
/// (e.g. a store adapter interning IRIs, or generating blank node labels).
pub trait NodeFactory {
    /// Build a [`NamedNode`] from an absolute IRI.
    fn create_named_node(&self, uri: &str) -> Result<NamedNode> {
        NamedNode::new(uri)
    }

    /// Build a [`BlankNode`] from a label (without `_:`).
    fn create_blank_node(&self, id: &str) -> Result<BlankNode> {
        BlankNode::new(id)
    }

    /// Build a [`Literal`], see [`Literal::create`].
    fn create_literal<V: Into<NativeValue>>(
        &self,
        value: Option<V>,
        datatype: Option<&str>,
        language: Option<&str>,
    ) -> Result<Literal>
    where
        Self: Sized,
    {
        Literal::create(value, datatype, language)
    }

    /// Build a [`Variable`].
    fn create_variable(&self, name: &str) -> Result<Variable> {
        Variable::new(name)
    }

    /// Build the wildcard pattern.
    fn create_any_pattern(&self) -> Node {
        Node::Any
    }

    /// Build a [`Statement`]; this never fails.
    fn create_statement(
        &self,
        subject: Node,
        predicate: Node,
        object: Node,
        graph: Option<Node>,
    ) -> Statement {
        Statement::new(subject, predicate, object, graph)
    }
}

/// The [`NodeFactory`] using the validating constructors of each node type.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultNodeFactory;

impl NodeFactory for DefaultNodeFactory {}
