use crate::error::{ClassifyError, Result};
use crate::info::{QueryInfo, QueryType, UpdateForm};
use crate::lexer::{tokenize, Token, TokenKind};
use oxiri::Iri;
use rdfkit_api::ns::{rdf, xsd};
use rdfkit_api::prefix::PrefixMap;
use rdfkit_api::statement::Statement;
use rdfkit_api::term::{Literal, NamedNode, Node, NodeError};

/// Classify a SPARQL query or update.
///
/// This is a best-effort lexical analysis, not a SPARQL parser:
/// it finds the form of the query, its prologue, its dataset clause,
/// and the triple and quad patterns of its main group.
/// The patterns of `OPTIONAL`, `MINUS` and `UNION` groups and of sub-queries
/// are reported apart, as [nested patterns](QueryInfo::nested_patterns),
/// and triples whose predicate is a property path are kept as text
/// (see [`QueryInfo::path_patterns`]).
/// `SERVICE`, `VALUES` and `BIND` are skipped,
/// as well as triples that are not made of simple terms
/// (collections, anonymous blank nodes).
///
/// # Error
/// Fails with [`ClassifyError::MalformedQuery`]
/// if no query form can be found,
/// or if a query that is neither a graph query nor a graph-management operation
/// has no triple or quad pattern.
///
/// ```
/// # use rdfkit_sparql::{classify, QueryType};
/// # fn main() -> Result<(), rdfkit_sparql::ClassifyError> {
/// let info = classify("SELECT * FROM <http://g> WHERE { ?s ?p ?o }")?;
/// assert_eq!(info.query_type(), QueryType::Select);
/// assert_eq!(info.from_graphs()[0].as_str(), "http://g");
/// assert_eq!(info.triple_patterns().len(), 1);
/// # Ok(()) }
/// ```
pub fn classify(query: &str) -> Result<QueryInfo> {
    let tokens = tokenize(query)?;
    let mut classifier = Classifier {
        query,
        base: None,
        prefixes: PrefixMap::new(),
        variables: vec![],
        nesting: 0,
    };
    let mut i = classifier.prologue(&tokens)?;

    let mut with_graph = None;
    if tokens.get(i).map_or(false, |t| t.is_word("WITH")) {
        let g = tokens
            .get(i + 1)
            .filter(|t| t.is_iri_like())
            .ok_or_else(|| malformed("WITH must be followed by an IRI"))?;
        with_graph = Some(classifier.named_node(g)?);
        i += 2;
    }

    let query_type = tokens
        .get(i)
        .and_then(|t| match &t.kind {
            TokenKind::Word(w) => QueryType::from_keyword(w),
            _ => None,
        })
        .ok_or_else(|| malformed("no query form found"))?;
    log::trace!("query form {query_type}");
    let body = &tokens[i + 1..];

    let mut info = QueryInfo::new(query_type);
    info.update_form = update_form(query_type, body);
    info.target_graphs.extend(with_graph);
    classifier.dataset_clause(body, &mut info)?;

    if query_type.is_graph_management() {
        classifier.managed_graphs(query_type, body, &mut info)?;
    } else if let Some(block) = pattern_block(query_type, body)? {
        classifier.group(&body[block.open + 1..block.close], None, &mut info)?;
    }

    info.variables = match query_type {
        QueryType::Select => projection(body).unwrap_or_else(|| classifier.variables.clone()),
        _ => classifier.variables.clone(),
    };

    if !query_type.is_graph_query() && !query_type.is_graph_management() && !info.has_patterns()
    {
        return Err(malformed(format!(
            "{query_type} query has no triple or quad pattern"
        )));
    }

    info.base = classifier.base.map(Iri::into_inner);
    info.prefixes = classifier.prefixes;
    log::debug!(
        "classified {} query with {} triple pattern(s), {} quad pattern(s), {} nested pattern(s) and {} path pattern(s)",
        info.query_type,
        info.triple_patterns.len(),
        info.quad_patterns.len(),
        info.nested_patterns.len(),
        info.path_patterns.len(),
    );
    Ok(info)
}

struct Classifier<'a> {
    query: &'a str,
    base: Option<Iri<String>>,
    prefixes: PrefixMap,
    /// variables of the patterns, in order of first appearance
    variables: Vec<String>,
    /// depth of the `OPTIONAL`, `MINUS`, `UNION` or sub-query groups being read
    nesting: usize,
}

/// A triple read from a triples block.
enum Pattern {
    Triple(Node, Node, Node),
    /// subject, property path (as written), object
    Path(Node, String, Node),
}

/// The predicate position of a triple.
enum Verb {
    Node(Node),
    Path(String),
}

impl<'a> Classifier<'a> {
    /// Consume the `PREFIX` and `BASE` declarations,
    /// and return the index of the first token after them.
    fn prologue(&mut self, tokens: &[Token]) -> Result<usize> {
        let mut i = 0;
        loop {
            match tokens.get(i) {
                Some(t) if t.is_word("PREFIX") => {
                    let (prefix, iri) = match (tokens.get(i + 1), tokens.get(i + 2)) {
                        (
                            Some(Token {
                                kind: TokenKind::PrefixedName(prefix, local),
                                ..
                            }),
                            Some(Token {
                                kind: TokenKind::Iri(iri),
                                ..
                            }),
                        ) if local.is_empty() => (prefix, iri),
                        _ => return Err(malformed("PREFIX must be followed by 'name: <iri>'")),
                    };
                    let ns = self.resolve(iri)?;
                    log::trace!("prefix {prefix}: <{ns}>");
                    self.prefixes.insert(prefix.as_str(), ns);
                    i += 3;
                }
                Some(t) if t.is_word("BASE") => {
                    let Some(Token {
                        kind: TokenKind::Iri(iri),
                        ..
                    }) = tokens.get(i + 1)
                    else {
                        return Err(malformed("BASE must be followed by '<iri>'"));
                    };
                    let resolved = self.resolve(iri)?;
                    let base = Iri::parse(resolved)
                        .map_err(|_| NodeError::InvalidUri(iri.to_string()))?;
                    log::trace!("base <{}>", base.as_str());
                    self.base = Some(base);
                    i += 2;
                }
                _ => return Ok(i),
            }
        }
    }

    /// Collect the graphs of `FROM [NAMED]` and `USING [NAMED]` clauses.
    fn dataset_clause(&self, body: &[Token], info: &mut QueryInfo) -> Result<()> {
        let top = top_level(body);
        for (n, &i) in top.iter().enumerate() {
            if !(body[i].is_word("FROM") || body[i].is_word("USING")) {
                continue;
            }
            let mut next = top.get(n + 1).map(|&j| &body[j]);
            let named = next.map_or(false, |t| t.is_word("NAMED"));
            if named {
                next = top.get(n + 2).map(|&j| &body[j]);
            }
            let graph = match next {
                Some(t) if t.is_iri_like() => self.named_node(t)?,
                _ => return Err(malformed("FROM must be followed by an IRI")),
            };
            if named {
                info.named_from_graphs.push(graph.clone());
            }
            info.from_graphs.push(graph);
        }
        Ok(())
    }

    /// Collect the graphs named by a graph-management operation.
    fn managed_graphs(
        &self,
        query_type: QueryType,
        body: &[Token],
        info: &mut QueryInfo,
    ) -> Result<()> {
        let end = body
            .iter()
            .position(|t| t.is_punct(';'))
            .unwrap_or(body.len());
        let mut operation = &body[..end];
        if query_type == QueryType::Load {
            // the first IRI is the loaded document
            operation = match operation.iter().position(|t| t.is_word("INTO")) {
                Some(into) => &operation[into + 1..],
                None => &[],
            };
        }
        for t in operation.iter().filter(|t| t.is_iri_like()) {
            info.target_graphs.push(self.named_node(t)?);
        }
        Ok(())
    }

    /// Extract the patterns of a group (the content of a `{ ... }` block).
    fn group(&mut self, tokens: &[Token], graph: Option<&Node>, info: &mut QueryInfo) -> Result<()> {
        let mut run = 0;
        let mut i = 0;
        while i < tokens.len() {
            let t = &tokens[i];
            if t.is_punct('.') {
                self.triples(&tokens[run..i], graph, info)?;
                i += 1;
                run = i;
                continue;
            }
            if t.is_punct('{') {
                self.triples(&tokens[run..i], graph, info)?;
                let close = closing(tokens, i)?;
                let inner = &tokens[i + 1..close];
                let union = tokens.get(close + 1).map_or(false, |t| t.is_word("UNION"))
                    || (i > 0 && tokens[i - 1].is_word("UNION"));
                if inner.first().map_or(false, |t| t.is_word("SELECT")) {
                    let sub = &inner[1..];
                    if let Some(block) = pattern_block(QueryType::Select, sub)? {
                        self.nested(&sub[block.open + 1..block.close], graph, info)?;
                    }
                } else if union {
                    self.nested(inner, graph, info)?;
                } else {
                    self.group(inner, graph, info)?;
                }
                i = close + 1;
                run = i;
                continue;
            }
            let TokenKind::Word(word) = &t.kind else {
                i += 1;
                continue;
            };
            match word.to_ascii_uppercase().as_str() {
                "GRAPH" => {
                    self.triples(&tokens[run..i], graph, info)?;
                    let open = i + 2;
                    if !tokens.get(open).map_or(false, |t| t.is_punct('{')) {
                        return Err(malformed("GRAPH must be followed by a name and a group"));
                    }
                    let close = closing(tokens, open)?;
                    let name = match tokens.get(i + 1).map(|t| &t.kind) {
                        Some(TokenKind::Var(v)) => {
                            self.add_variable(v);
                            Node::variable(v)?
                        }
                        Some(TokenKind::Iri(_) | TokenKind::PrefixedName(..)) => {
                            Node::Named(self.named_node(&tokens[i + 1])?)
                        }
                        _ => return Err(malformed("GRAPH must be followed by an IRI or a variable")),
                    };
                    self.group(&tokens[open + 1..close], Some(&name), info)?;
                    i = close + 1;
                }
                "OPTIONAL" | "MINUS" => {
                    self.triples(&tokens[run..i], graph, info)?;
                    let (open, close) = group_after(tokens, i, word)?;
                    self.nested(&tokens[open + 1..close], graph, info)?;
                    i = close + 1;
                }
                "SERVICE" | "VALUES" => {
                    self.triples(&tokens[run..i], graph, info)?;
                    let (_, close) = group_after(tokens, i, word)?;
                    log::debug!("skipping opaque group {}", self.text(tokens, i, close));
                    i = close + 1;
                }
                "FILTER" => {
                    self.triples(&tokens[run..i], graph, info)?;
                    let end = constraint_end(tokens, i + 1)?;
                    let filter = self.text(tokens, i, end);
                    log::trace!("filter {filter}");
                    info.filter_patterns.push(filter.to_string());
                    i = end + 1;
                }
                "BIND" => {
                    self.triples(&tokens[run..i], graph, info)?;
                    if !tokens.get(i + 1).map_or(false, |t| t.is_punct('(')) {
                        return Err(malformed("BIND must be followed by '('"));
                    }
                    let end = closing(tokens, i + 1)?;
                    log::debug!("skipping {}", self.text(tokens, i, end));
                    i = end + 1;
                }
                "UNION" => i += 1,
                _ => {
                    i += 1;
                    continue;
                }
            }
            run = i;
        }
        self.triples(&tokens[run..], graph, info)
    }

    /// Extract the patterns of a group nested in an `OPTIONAL`, `MINUS`,
    /// `UNION` or sub-query into [`QueryInfo::nested_patterns`].
    fn nested(&mut self, tokens: &[Token], graph: Option<&Node>, info: &mut QueryInfo) -> Result<()> {
        self.nesting += 1;
        let res = self.group(tokens, graph, info);
        self.nesting -= 1;
        res
    }

    /// Add the statements of a triples block (without its final `.`) to `info`.
    fn triples(&mut self, run: &[Token], graph: Option<&Node>, info: &mut QueryInfo) -> Result<()> {
        if run.is_empty() {
            return Ok(());
        }
        let Some(patterns) = self.parse_triples(run)? else {
            log::debug!(
                "skipping group with complex terms {}",
                self.text(run, 0, run.len() - 1)
            );
            return Ok(());
        };
        for pattern in patterns {
            match pattern {
                Pattern::Triple(s, p, o) => {
                    for node in [&s, &p, &o] {
                        if let Node::Variable(v) = node {
                            self.add_variable(v.name());
                        }
                    }
                    let st = Statement::new(s, p, o, graph.cloned());
                    if self.nesting > 0 {
                        info.nested_patterns.push(st);
                    } else if st.is_quad() {
                        info.quad_patterns.push(st);
                    } else {
                        info.triple_patterns.push(st);
                    }
                }
                Pattern::Path(s, path, o) => {
                    for node in [&s, &o] {
                        if let Node::Variable(v) = node {
                            self.add_variable(v.name());
                        }
                    }
                    let text = match graph {
                        None => format!("{s} {path} {o}"),
                        Some(g) => format!("GRAPH {g} {{ {s} {path} {o} }}"),
                    };
                    log::trace!("property path {text}");
                    info.path_patterns.push(text);
                }
            }
        }
        Ok(())
    }

    /// Parse `subject verb object (, object)* (; verb object (, object)*)*`.
    ///
    /// Return `None` if the group contains anything else than simple terms
    /// and property paths.
    fn parse_triples(&self, run: &[Token]) -> Result<Option<Vec<Pattern>>> {
        let mut pos = 0;
        let mut triples = vec![];
        let Some(subject) = self.term(run, &mut pos)? else {
            return Ok(None);
        };
        loop {
            let Some(verb) = self.verb(run, &mut pos)? else {
                return Ok(None);
            };
            loop {
                let Some(object) = self.term(run, &mut pos)? else {
                    return Ok(None);
                };
                triples.push(match &verb {
                    Verb::Node(p) => Pattern::Triple(subject.clone(), p.clone(), object),
                    Verb::Path(path) => Pattern::Path(subject.clone(), path.clone(), object),
                });
                if run.get(pos).map_or(false, |t| t.is_punct(',')) {
                    pos += 1;
                } else {
                    break;
                }
            }
            let mut semicolon = false;
            while run.get(pos).map_or(false, |t| t.is_punct(';')) {
                pos += 1;
                semicolon = true;
            }
            if !semicolon || pos == run.len() {
                break;
            }
        }
        Ok((pos == run.len()).then_some(triples))
    }

    fn verb(&self, run: &[Token], pos: &mut usize) -> Result<Option<Verb>> {
        if let Some(end) = path_end(run, *pos).filter(|&end| end > *pos + 1) {
            let path = self.text(run, *pos, end - 1);
            *pos = end;
            return Ok(Some(Verb::Path(path.to_string())));
        }
        match run.get(*pos).map(|t| &t.kind) {
            Some(TokenKind::Word(w)) if w == "a" => {
                *pos += 1;
                Ok(Some(Verb::Node(Node::Named(NamedNode::new_unchecked(
                    rdf::type_,
                )))))
            }
            Some(TokenKind::Iri(_) | TokenKind::PrefixedName(..) | TokenKind::Var(_)) => {
                Ok(self.term(run, pos)?.map(Verb::Node))
            }
            _ => Ok(None),
        }
    }

    fn term(&self, run: &[Token], pos: &mut usize) -> Result<Option<Node>> {
        let Some(t) = run.get(*pos) else {
            return Ok(None);
        };
        *pos += 1;
        let node = match &t.kind {
            TokenKind::Iri(_) | TokenKind::PrefixedName(..) => Node::Named(self.named_node(t)?),
            TokenKind::Var(v) => Node::variable(v)?,
            TokenKind::BlankNode(b) => Node::blank(b)?,
            TokenKind::Number(n) => {
                let datatype = if n.contains(&['e', 'E'][..]) {
                    xsd::double
                } else if n.contains('.') {
                    xsd::decimal
                } else {
                    xsd::integer
                };
                Literal::new_typed(n, NamedNode::new_unchecked(datatype)).into()
            }
            TokenKind::Word(w) if w == "true" || w == "false" => {
                Literal::new_typed(w, NamedNode::new_unchecked(xsd::boolean)).into()
            }
            TokenKind::Str(value, language) => {
                if run.get(*pos).map(|t| &t.kind) == Some(&TokenKind::DoubleCaret) {
                    let datatype = run
                        .get(*pos + 1)
                        .filter(|t| t.is_iri_like())
                        .ok_or_else(|| malformed("'^^' must be followed by an IRI"))?;
                    *pos += 2;
                    Literal::new_typed(value, self.named_node(datatype)?).into()
                } else if let Some(tag) = language {
                    Literal::new_lang(value, tag)?.into()
                } else {
                    Literal::new(value.as_str(), None, None)?.into()
                }
            }
            _ => return Ok(None),
        };
        Ok(Some(node))
    }

    /// Convert an IRI or prefixed name token into a named node.
    fn named_node(&self, token: &Token) -> Result<NamedNode> {
        let iri = match &token.kind {
            TokenKind::Iri(iri) => self.resolve(iri)?,
            TokenKind::PrefixedName(prefix, local) => {
                let ns = self
                    .prefixes
                    .get(prefix)
                    .ok_or_else(|| ClassifyError::UnknownPrefix(prefix.clone()))?;
                format!("{ns}{local}")
            }
            _ => return Err(malformed(format!("expected an IRI, got {:?}", token.kind))),
        };
        Ok(NamedNode::new(iri)?)
    }

    /// Resolve `iri` against the base IRI, if any.
    fn resolve(&self, iri: &str) -> Result<String> {
        match &self.base {
            None => Ok(iri.to_string()),
            Some(base) => base
                .resolve(iri)
                .map(Iri::into_inner)
                .map_err(|_| NodeError::InvalidUri(iri.to_string()).into()),
        }
    }

    fn add_variable(&mut self, name: &str) {
        if !self.variables.iter().any(|v| v == name) {
            self.variables.push(name.to_string());
        }
    }

    /// The text of the query from `tokens[first]` to `tokens[last]` (included).
    fn text(&self, tokens: &[Token], first: usize, last: usize) -> &'a str {
        let query = self.query;
        &query[tokens[first].span.start..tokens[last].span.end]
    }
}

fn malformed<T: Into<String>>(msg: T) -> ClassifyError {
    ClassifyError::MalformedQuery(msg.into())
}

fn update_form(query_type: QueryType, body: &[Token]) -> Option<UpdateForm> {
    if !matches!(query_type, QueryType::Insert | QueryType::Delete) {
        return None;
    }
    Some(match body.first() {
        Some(t) if t.is_word("DATA") => UpdateForm::Data,
        Some(t) if query_type == QueryType::Delete && t.is_word("WHERE") => UpdateForm::Where,
        _ => UpdateForm::Modify,
    })
}

/// Return the indexes of the `{` following the keyword at `tokens[keyword]`,
/// and of the matching `}`.
fn group_after(tokens: &[Token], keyword: usize, word: &str) -> Result<(usize, usize)> {
    let open = tokens[keyword..]
        .iter()
        .position(|t| t.is_punct('{'))
        .map(|p| keyword + p)
        .ok_or_else(|| malformed(format!("{word} must be followed by a group")))?;
    Ok((open, closing(tokens, open)?))
}

/// If a property path starts at `run[start]`, return the index just after it.
///
/// Paths are sequences (`/`) and alternatives (`|`) of IRIs or `a`,
/// possibly inverted (`^`), negated (`!`), parenthesized or
/// followed by a `*`, `+` or `?` modifier.
fn path_end(run: &[Token], start: usize) -> Option<usize> {
    let is = |pos: usize, c: char| run.get(pos).map_or(false, |t| t.is_punct(c));
    let mut pos = start;
    loop {
        if is(pos, '^') {
            pos += 1;
        }
        if is(pos, '!') {
            pos += 1;
        }
        match run.get(pos) {
            Some(t) if t.is_iri_like() || matches!(&t.kind, TokenKind::Word(w) if w == "a") => {
                pos += 1
            }
            Some(t) if t.is_punct('(') => pos = closing(run, pos).ok()? + 1,
            _ => return None,
        }
        if is(pos, '*') || is(pos, '+') || is(pos, '?') {
            pos += 1;
        }
        if is(pos, '/') || is(pos, '|') {
            pos += 1;
        } else {
            return Some(pos);
        }
    }
}

/// Return the index of the bracket closing the one at `tokens[open]`.
fn closing(tokens: &[Token], open: usize) -> Result<usize> {
    let (o, c) = match &tokens[open].kind {
        TokenKind::Punct('{') => ('{', '}'),
        TokenKind::Punct('(') => ('(', ')'),
        TokenKind::Punct('[') => ('[', ']'),
        other => return Err(malformed(format!("expected a bracket, got {other:?}"))),
    };
    let mut depth = 0;
    for (i, t) in tokens.iter().enumerate().skip(open) {
        if t.is_punct(o) {
            depth += 1;
        } else if t.is_punct(c) {
            depth -= 1;
            if depth == 0 {
                return Ok(i);
            }
        }
    }
    Err(malformed(format!(
        "unbalanced '{o}' at byte {}",
        tokens[open].span.start
    )))
}

/// Return the index of the last token of the constraint of a `FILTER`,
/// starting at `tokens[start]`.
fn constraint_end(tokens: &[Token], start: usize) -> Result<usize> {
    let t = tokens
        .get(start)
        .ok_or_else(|| malformed("FILTER must be followed by a constraint"))?;
    if t.is_punct('(') {
        return closing(tokens, start);
    }
    let mut i = start;
    if t.is_word("NOT") {
        i += 1;
    }
    if tokens.get(i).map_or(false, |t| t.is_word("EXISTS")) {
        if tokens.get(i + 1).map_or(false, |t| t.is_punct('{')) {
            return closing(tokens, i + 1);
        }
    } else if tokens.get(start + 1).map_or(false, |t| t.is_punct('(')) {
        // function call
        return closing(tokens, start + 1);
    }
    Err(malformed("invalid FILTER constraint"))
}

/// Return the indexes of the tokens that are not inside a `{ ... }` block.
fn top_level(tokens: &[Token]) -> Vec<usize> {
    let mut depth = 0_usize;
    let mut top = vec![];
    for (i, t) in tokens.iter().enumerate() {
        if t.is_punct('{') {
            depth += 1;
        } else if t.is_punct('}') {
            depth = depth.saturating_sub(1);
        } else if depth == 0 {
            top.push(i);
        }
    }
    top
}

/// A top-level `{ ... }` block.
struct Block {
    open: usize,
    close: usize,
    /// the last keyword before the block, upper-cased
    introducer: Option<String>,
}

fn top_level_blocks(tokens: &[Token]) -> Result<Vec<Block>> {
    let mut blocks = vec![];
    let mut last_word = None;
    let mut i = 0;
    while i < tokens.len() {
        let t = &tokens[i];
        if t.is_punct('{') {
            let close = closing(tokens, i)?;
            blocks.push(Block {
                open: i,
                close,
                introducer: last_word.take(),
            });
            i = close + 1;
            continue;
        }
        if t.is_punct('}') {
            return Err(malformed(format!("unbalanced '}}' at byte {}", t.span.start)));
        }
        if let TokenKind::Word(w) = &t.kind {
            last_word = Some(w.to_ascii_uppercase());
        }
        i += 1;
    }
    Ok(blocks)
}

/// Find the block holding the patterns:
/// the `WHERE` block (or the last block) of queries, the first block of updates.
fn pattern_block(query_type: QueryType, body: &[Token]) -> Result<Option<Block>> {
    let mut blocks = top_level_blocks(body)?;
    if !query_type.is_query() {
        return Ok((!blocks.is_empty()).then(|| blocks.swap_remove(0)));
    }
    let is = |b: &Block, kw: &str| b.introducer.as_deref() == Some(kw);
    let found = match blocks.iter().position(|b| is(b, "WHERE")) {
        Some(n) => Some(n),
        None => blocks.iter().rposition(|b| !is(b, "VALUES")),
    };
    Ok(found.map(|n| blocks.swap_remove(n)))
}

/// The projected variables of a `SELECT` query, or `None` for `SELECT *`.
fn projection(body: &[Token]) -> Option<Vec<String>> {
    let mut variables: Vec<String> = vec![];
    let mut depth = 0_usize;
    for (i, t) in body.iter().enumerate() {
        if t.is_punct('{') || (depth == 0 && (t.is_word("FROM") || t.is_word("WHERE"))) {
            break;
        }
        match &t.kind {
            TokenKind::Punct('(') => depth += 1,
            TokenKind::Punct(')') => depth = depth.saturating_sub(1),
            TokenKind::Punct('*') if depth == 0 => return None,
            TokenKind::Var(v) if depth == 0 || (i > 0 && body[i - 1].is_word("AS")) => {
                if !variables.contains(v) {
                    variables.push(v.clone());
                }
            }
            _ => (),
        }
    }
    Some(variables)
}
