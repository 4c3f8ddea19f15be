use rdfkit_api::prefix::PrefixMap;
use rdfkit_api::statement::Statement;
use rdfkit_api::term::NamedNode;
use std::fmt;

/// The form of a SPARQL query or update operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QueryType {
    /// `SELECT` query
    Select,
    /// `ASK` query
    Ask,
    /// `CONSTRUCT` query
    Construct,
    /// `DESCRIBE` query
    Describe,
    /// `INSERT` update (`INSERT DATA` or `INSERT ... WHERE`)
    Insert,
    /// `DELETE` update (`DELETE DATA`, `DELETE WHERE` or `DELETE ... WHERE`)
    Delete,
    /// `CLEAR` graph management
    Clear,
    /// `CREATE` graph management
    Create,
    /// `DROP` graph management
    Drop,
    /// `LOAD` graph management
    Load,
    /// `COPY` graph management
    Copy,
    /// `MOVE` graph management
    Move,
    /// `ADD` graph management
    Add,
}

impl QueryType {
    /// All query types, in the order in which they are documented.
    pub const ALL: [QueryType; 13] = [
        QueryType::Select,
        QueryType::Ask,
        QueryType::Construct,
        QueryType::Describe,
        QueryType::Insert,
        QueryType::Delete,
        QueryType::Clear,
        QueryType::Create,
        QueryType::Drop,
        QueryType::Load,
        QueryType::Copy,
        QueryType::Move,
        QueryType::Add,
    ];

    /// The (upper-case) SPARQL keyword introducing this form.
    pub fn keyword(self) -> &'static str {
        match self {
            QueryType::Select => "SELECT",
            QueryType::Ask => "ASK",
            QueryType::Construct => "CONSTRUCT",
            QueryType::Describe => "DESCRIBE",
            QueryType::Insert => "INSERT",
            QueryType::Delete => "DELETE",
            QueryType::Clear => "CLEAR",
            QueryType::Create => "CREATE",
            QueryType::Drop => "DROP",
            QueryType::Load => "LOAD",
            QueryType::Copy => "COPY",
            QueryType::Move => "MOVE",
            QueryType::Add => "ADD",
        }
    }

    /// Recognize a keyword, case-insensitively.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|qt| qt.keyword().eq_ignore_ascii_case(word))
    }

    /// Whether this is a read-only query form (`SELECT`, `ASK`, `CONSTRUCT`, `DESCRIBE`).
    pub fn is_query(self) -> bool {
        matches!(
            self,
            QueryType::Select | QueryType::Ask | QueryType::Construct | QueryType::Describe
        )
    }

    /// Whether this query form returns statements (`CONSTRUCT`, `DESCRIBE`).
    pub fn is_graph_query(self) -> bool {
        matches!(self, QueryType::Construct | QueryType::Describe)
    }

    /// Whether this is an update operation.
    pub fn is_update(self) -> bool {
        !self.is_query()
    }

    /// Whether this operation manages whole graphs
    /// (`CLEAR`, `CREATE`, `DROP`, `LOAD`, `COPY`, `MOVE`, `ADD`).
    pub fn is_graph_management(self) -> bool {
        matches!(
            self,
            QueryType::Clear
                | QueryType::Create
                | QueryType::Drop
                | QueryType::Load
                | QueryType::Copy
                | QueryType::Move
                | QueryType::Add
        )
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The sub-form of `INSERT` and `DELETE` updates.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UpdateForm {
    /// `INSERT DATA { ... }` or `DELETE DATA { ... }`
    Data,
    /// `DELETE WHERE { ... }`
    Where,
    /// `[WITH <g>] DELETE { ... } INSERT { ... } WHERE { ... }` and its variants
    Modify,
}

/// What [`classify`](crate::classify) could learn about a query string.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryInfo {
    pub(crate) query_type: QueryType,
    pub(crate) update_form: Option<UpdateForm>,
    pub(crate) base: Option<String>,
    pub(crate) prefixes: PrefixMap,
    pub(crate) from_graphs: Vec<NamedNode>,
    pub(crate) named_from_graphs: Vec<NamedNode>,
    pub(crate) target_graphs: Vec<NamedNode>,
    pub(crate) variables: Vec<String>,
    pub(crate) triple_patterns: Vec<Statement>,
    pub(crate) quad_patterns: Vec<Statement>,
    pub(crate) filter_patterns: Vec<String>,
    pub(crate) nested_patterns: Vec<Statement>,
    pub(crate) path_patterns: Vec<String>,
}

impl QueryInfo {
    pub(crate) fn new(query_type: QueryType) -> Self {
        QueryInfo {
            query_type,
            update_form: None,
            base: None,
            prefixes: PrefixMap::new(),
            from_graphs: vec![],
            named_from_graphs: vec![],
            target_graphs: vec![],
            variables: vec![],
            triple_patterns: vec![],
            quad_patterns: vec![],
            filter_patterns: vec![],
            nested_patterns: vec![],
            path_patterns: vec![],
        }
    }

    /// The form of the query.
    pub fn query_type(&self) -> QueryType {
        self.query_type
    }

    /// The sub-form of `INSERT` and `DELETE` updates; `None` for other forms.
    pub fn update_form(&self) -> Option<UpdateForm> {
        self.update_form
    }

    /// The IRI declared with `BASE`, if any.
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// The prefixes declared with `PREFIX`, in declaration order.
    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    /// The graphs declared with `FROM` and `FROM NAMED` (or `USING` and `USING NAMED`).
    pub fn from_graphs(&self) -> &[NamedNode] {
        &self.from_graphs
    }

    /// The graphs declared with `FROM NAMED` (or `USING NAMED`).
    pub fn named_from_graphs(&self) -> &[NamedNode] {
        &self.named_from_graphs
    }

    /// The graphs modified by the update: its `WITH` graph,
    /// or the graphs named by a graph-management operation.
    pub fn target_graphs(&self) -> &[NamedNode] {
        &self.target_graphs
    }

    /// The projected variables of a `SELECT` query,
    /// or all the variables of the patterns, in order of first appearance.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// The triple patterns (without graph).
    pub fn triple_patterns(&self) -> &[Statement] {
        &self.triple_patterns
    }

    /// The quad patterns, found inside `GRAPH` blocks.
    pub fn quad_patterns(&self) -> &[Statement] {
        &self.quad_patterns
    }

    /// The text of the `FILTER` clauses.
    pub fn filter_patterns(&self) -> &[String] {
        &self.filter_patterns
    }

    /// The triple and quad patterns of the groups nested in
    /// `OPTIONAL`, `MINUS`, `UNION` branches and sub-queries.
    ///
    /// They are not part of the main basic graph pattern
    /// ([`patterns`](Self::patterns)).
    pub fn nested_patterns(&self) -> &[Statement] {
        &self.nested_patterns
    }

    /// The triple patterns whose predicate is a property path,
    /// as `subject path object` text (nodes in canonical form).
    pub fn path_patterns(&self) -> &[String] {
        &self.path_patterns
    }

    /// Whether the query has at least one pattern,
    /// in its main group, in a nested group, or with a property path.
    pub fn has_patterns(&self) -> bool {
        !self.triple_patterns.is_empty()
            || !self.quad_patterns.is_empty()
            || !self.nested_patterns.is_empty()
            || !self.path_patterns.is_empty()
    }

    /// Whether all the patterns of the query are in its main basic graph pattern,
    /// i.e. there is no nested group and no property path.
    pub fn is_basic(&self) -> bool {
        self.nested_patterns.is_empty() && self.path_patterns.is_empty()
    }

    /// All the patterns of the main group, triple patterns first.
    pub fn patterns(&self) -> impl Iterator<Item = &Statement> {
        self.triple_patterns.iter().chain(self.quad_patterns.iter())
    }
}
