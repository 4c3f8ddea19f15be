//! General-use types and traits from the rdfkit API.

pub use crate::parser::StatementParser;
pub use crate::prefix::PrefixMap;
pub use crate::result::{QueryResult, SetResult, StatementResult, ValueResult};
pub use crate::serializer::{StatementSerializer, Stringifier};
pub use crate::source::{ArrayStatementIterator, StatementIterator, StreamResultExt};
pub use crate::statement::Statement;
pub use crate::store::Store;
pub use crate::term::{
    BlankNode, DefaultNodeFactory, Literal, NamedNode, NativeValue, Node, NodeFactory, NodeKind,
    Variable,
};
