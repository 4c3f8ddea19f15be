//! I define [`MemoryStore`], an in-memory implementation of [`Store`].
use crate::bgp::{evaluate, substitute};
use crate::error::{MemoryStoreError, Result};
use rdfkit_api::result::{QueryResult, SetResult, StatementResult, ValueResult};
use rdfkit_api::source::{StatementIterator, StreamResult};
use rdfkit_api::statement::{Bindings, Statement};
use rdfkit_api::store::{effective_pattern, Store};
use rdfkit_api::term::Node;
use rdfkit_sparql::{classify, QueryInfo, QueryType, UpdateForm};
use resiter::Filter;
use std::collections::HashSet;

/// A store keeping its statements in memory.
///
/// Statements are kept in insertion order, and without duplicates.
/// Only concrete statements (without variables or wildcards) can be stored.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    statements: Vec<Statement>,
    index: HashSet<Statement>,
}

impl MemoryStore {
    /// Build an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of statements in this store.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether this store contains no statement.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Borrow the statements of this store, in insertion order.
    pub fn as_slice(&self) -> &[Statement] {
        &self.statements
    }

    /// Whether this store contains `statement` (exactly, graph included).
    pub fn contains(&self, statement: &Statement) -> bool {
        self.index.contains(statement)
    }

    /// Insert one statement, and return whether it was not already present.
    pub fn insert(&mut self, statement: Statement) -> Result<bool> {
        if !statement.is_concrete() {
            return Err(MemoryStoreError::NonConcreteStatement(
                statement.to_string(),
            ));
        }
        if self.index.contains(&statement) {
            return Ok(false);
        }
        self.index.insert(statement.clone());
        self.statements.push(statement);
        Ok(true)
    }

    /// Remove one statement, and return whether it was present.
    pub fn remove(&mut self, statement: &Statement) -> bool {
        if !self.index.remove(statement) {
            return false;
        }
        self.statements.retain(|st| st != statement);
        true
    }

    /// Remove all the statements satisfying `pred`, and return how many were removed.
    fn remove_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&Statement) -> bool,
    {
        let before = self.statements.len();
        let index = &mut self.index;
        self.statements.retain(|st| {
            if pred(st) {
                index.remove(st);
                false
            } else {
                true
            }
        });
        before - self.statements.len()
    }

    fn select(&self, info: &QueryInfo) -> QueryResult {
        let rows = evaluate(info.patterns(), &self.statements, info.from_graphs())
            .into_iter()
            .map(|row| project(row, info.variables()))
            .collect();
        QueryResult::Set(SetResult::new(info.variables().to_vec(), rows))
    }

    fn ask(&self, info: &QueryInfo) -> QueryResult {
        let found = !evaluate(info.patterns(), &self.statements, info.from_graphs()).is_empty();
        QueryResult::Value(ValueResult::new(found))
    }

    fn insert_data(&mut self, info: &QueryInfo) -> Result<usize> {
        // all statements are checked before the first one is inserted
        let statements = info
            .patterns()
            .cloned()
            .map(concrete)
            .collect::<Result<Vec<_>>>()?;
        let mut inserted = 0;
        for st in statements {
            if self.insert(st)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    fn delete_data(&mut self, info: &QueryInfo) -> Result<usize> {
        let statements = info
            .patterns()
            .cloned()
            .map(concrete)
            .collect::<Result<Vec<_>>>()?;
        Ok(statements.iter().filter(|st| self.remove(st)).count())
    }

    fn delete_where(&mut self, info: &QueryInfo) -> usize {
        let rows = evaluate(info.patterns(), &self.statements, info.from_graphs());
        let doomed: Vec<Statement> = rows
            .iter()
            .flat_map(|row| info.patterns().map(move |p| substitute(p, row)))
            .map(concrete)
            .filter_ok(|st| self.contains(st))
            .filter_map(Result::ok)
            .collect();
        doomed.iter().filter(|st| self.remove(st)).count()
    }

    fn clear(&mut self, info: &QueryInfo) -> usize {
        let targets = info.target_graphs();
        if targets.is_empty() {
            let removed = self.statements.len();
            self.statements.clear();
            self.index.clear();
            return removed;
        }
        self.remove_where(|st| {
            st.graph()
                .map_or(false, |g| targets.iter().any(|t| g == t))
        })
    }

    fn update(&mut self, info: &QueryInfo) -> Result<()> {
        let qt = info.query_type();
        match (qt, info.update_form()) {
            (QueryType::Insert, Some(UpdateForm::Data)) => {
                let n = self.insert_data(info)?;
                log::debug!("INSERT DATA: {n} statement(s) inserted");
            }
            (QueryType::Delete, Some(UpdateForm::Data)) => {
                let n = self.delete_data(info)?;
                log::debug!("DELETE DATA: {n} statement(s) removed");
            }
            (QueryType::Delete, Some(UpdateForm::Where)) => {
                let n = self.delete_where(info);
                log::debug!("DELETE WHERE: {n} statement(s) removed");
            }
            (QueryType::Clear | QueryType::Drop, _) => {
                let n = self.clear(info);
                log::debug!("{qt}: {n} statement(s) removed");
            }
            (QueryType::Create, _) => log::debug!("CREATE: nothing to do"),
            (qt, form) => {
                return Err(MemoryStoreError::Unsupported(match form {
                    Some(form) => format!("{qt} ({form:?})"),
                    None => qt.to_string(),
                }))
            }
        }
        Ok(())
    }
}

impl Store for MemoryStore {
    type Error = MemoryStoreError;

    fn add_statements<I>(
        &mut self,
        mut statements: I,
        graph: Option<&Node>,
    ) -> StreamResult<usize, I::Error, MemoryStoreError>
    where
        I: StatementIterator,
    {
        let mut inserted = 0;
        statements.try_for_each_statement(|st| -> Result<()> {
            if self.insert(effective_pattern(st, graph))? {
                inserted += 1;
            }
            Ok(())
        })?;
        log::debug!("{inserted} statement(s) added, {} in store", self.len());
        Ok(inserted)
    }

    fn delete_matching_statements(
        &mut self,
        pattern: &Statement,
        graph: Option<&Node>,
    ) -> Result<usize> {
        let pattern = effective_pattern(pattern, graph);
        let removed = self.remove_where(|st| pattern.matches(st));
        log::debug!("{removed} statement(s) matching {pattern} removed");
        Ok(removed)
    }

    fn get_matching_statements(
        &self,
        pattern: &Statement,
        graph: Option<&Node>,
    ) -> Result<StatementResult> {
        let pattern = effective_pattern(pattern, graph);
        Ok(StatementResult::new(
            self.statements
                .iter()
                .filter(|st| pattern.matches(st))
                .cloned()
                .collect(),
        ))
    }

    fn has_matching_statement(&self, pattern: &Statement, graph: Option<&Node>) -> Result<bool> {
        let pattern = effective_pattern(pattern, graph);
        Ok(self.statements.iter().any(|st| pattern.matches(st)))
    }

    fn graphs(&self) -> Result<Vec<Node>> {
        let mut seen = HashSet::new();
        Ok(self
            .statements
            .iter()
            .filter_map(Statement::graph)
            .filter(|g| seen.insert(*g))
            .cloned()
            .collect())
    }

    fn query(&mut self, query: &str) -> Result<QueryResult> {
        let info = classify(query)?;
        log::debug!(
            "evaluating {} with {} pattern(s)",
            info.query_type(),
            info.patterns().count()
        );
        if !info.filter_patterns().is_empty() {
            log::warn!(
                "ignoring {} FILTER clause(s)",
                info.filter_patterns().len()
            );
        }
        let evaluates_patterns = matches!(info.query_type(), QueryType::Select | QueryType::Ask)
            || info.update_form() == Some(UpdateForm::Where);
        if evaluates_patterns && !info.is_basic() {
            return Err(MemoryStoreError::Unsupported(format!(
                "{} with {} nested pattern(s) and {} property path(s)",
                info.query_type(),
                info.nested_patterns().len(),
                info.path_patterns().len(),
            )));
        }
        match info.query_type() {
            QueryType::Select => Ok(self.select(&info)),
            QueryType::Ask => Ok(self.ask(&info)),
            qt if qt.is_update() => {
                self.update(&info)?;
                Ok(QueryResult::Empty)
            }
            qt => Err(MemoryStoreError::Unsupported(qt.to_string())),
        }
    }
}

fn concrete(st: Statement) -> Result<Statement> {
    if st.is_concrete() {
        Ok(st)
    } else {
        Err(MemoryStoreError::NonConcreteStatement(st.to_string()))
    }
}

fn project(mut row: Bindings, variables: &[String]) -> Bindings {
    row.retain(|name, _| variables.contains(name));
    row
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
