//! Evaluation of basic graph patterns by nested-loop join.
use rdfkit_api::statement::{Bindings, Statement};
use rdfkit_api::term::{NamedNode, Node};

/// Replace the variables of `pattern` that are bound in `row` by their value.
pub(crate) fn substitute(pattern: &Statement, row: &Bindings) -> Statement {
    let node = |n: &Node| match n {
        Node::Variable(v) => row.get(v.name()).cloned().unwrap_or_else(|| n.clone()),
        _ => n.clone(),
    };
    Statement::new(
        node(pattern.subject()),
        node(pattern.predicate()),
        node(pattern.object()),
        pattern.graph().map(node),
    )
}

/// Evaluate the conjunction of `patterns` against `statements`.
///
/// The default graph is the union of `default_graphs`,
/// or of all the graphs (the unnamed one included) when `default_graphs` is empty:
/// patterns without graph match the statements of that union, whatever their graph.
/// Solutions are produced in the order of the statements,
/// the first pattern varying slowest.
pub(crate) fn evaluate<'a, P>(
    patterns: P,
    statements: &[Statement],
    default_graphs: &[NamedNode],
) -> Vec<Bindings>
where
    P: IntoIterator<Item = &'a Statement>,
{
    let mut rows = vec![Bindings::new()];
    for pattern in patterns {
        let mut next_rows = vec![];
        for row in &rows {
            let bound = substitute(pattern, row);
            for st in statements {
                let found = if pattern.is_triple() {
                    if !in_default_graph(st, default_graphs) {
                        continue;
                    }
                    bound.bindings(&st.with_graph(None))
                } else {
                    bound.bindings(st)
                };
                if let Some(found) = found {
                    let mut extended = row.clone();
                    extended.extend(found);
                    next_rows.push(extended);
                }
            }
        }
        log::trace!("{pattern} -> {} solution(s)", next_rows.len());
        rows = next_rows;
        if rows.is_empty() {
            break;
        }
    }
    rows
}

fn in_default_graph(st: &Statement, default_graphs: &[NamedNode]) -> bool {
    default_graphs.is_empty()
        || st
            .graph()
            .map_or(false, |g| default_graphs.iter().any(|d| g == d))
}
