//! Visitor protocol tests: exactly-once visitation, proper enter/leave
//! nesting, fixed child order, and error propagation.

use clickhouse_sql::error::{Error, Result};
use clickhouse_sql::{parse_one, Node, Visitor};

/// Records enter/leave pairing and counts hook invocations
#[derive(Default)]
struct CountingVisitor {
    enters: usize,
    leaves: usize,
    depth: usize,
    max_depth: usize,
    idents: Vec<String>,
    number_literals: usize,
    select_queries: usize,
}

impl Visitor for CountingVisitor {
    fn enter(&mut self, _node: &Node<'_>) {
        self.enters += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    fn leave(&mut self, _node: &Node<'_>) {
        assert!(self.depth > 0, "leave without matching enter");
        self.depth -= 1;
        self.leaves += 1;
    }

    fn visit_ident(&mut self, expr: &clickhouse_sql::ast::Ident) -> Result<()> {
        self.idents.push(expr.name.clone());
        Ok(())
    }

    fn visit_number_literal(&mut self, _expr: &clickhouse_sql::ast::NumberLiteral) -> Result<()> {
        self.number_literals += 1;
        Ok(())
    }

    fn visit_select_query(&mut self, _expr: &clickhouse_sql::ast::SelectQuery) -> Result<()> {
        self.select_queries += 1;
        Ok(())
    }
}

#[test]
fn test_enter_leave_are_balanced() {
    let statement = parse_one("SELECT a, b FROM t WHERE a > 1").expect("statement");
    let mut visitor = CountingVisitor::default();
    statement.accept(&mut visitor).expect("traversal");
    assert_eq!(visitor.enters, visitor.leaves);
    assert_eq!(visitor.depth, 0);
    assert!(visitor.max_depth > 2);
}

#[test]
fn test_each_node_visited_once() {
    let statement = parse_one("SELECT 1 UNION ALL SELECT 2").expect("statement");
    let mut visitor = CountingVisitor::default();
    statement.accept(&mut visitor).expect("traversal");
    assert_eq!(visitor.select_queries, 2);
    assert_eq!(visitor.number_literals, 2);
}

#[test]
fn test_child_order_is_source_order() {
    let statement = parse_one("SELECT a + b, c FROM t").expect("statement");
    let mut visitor = CountingVisitor::default();
    statement.accept(&mut visitor).expect("traversal");
    assert_eq!(visitor.idents, vec!["a", "b", "c", "t"]);
}

/// Fails on the first number literal and records whether leave still ran
struct FailingVisitor {
    visited: usize,
    leaves_after_error: usize,
    failed: bool,
}

impl Visitor for FailingVisitor {
    fn leave(&mut self, _node: &Node<'_>) {
        if self.failed {
            self.leaves_after_error += 1;
        }
    }

    fn visit_number_literal(&mut self, _expr: &clickhouse_sql::ast::NumberLiteral) -> Result<()> {
        self.failed = true;
        Err(Error::Invariant("stop".to_string()))
    }

    fn visit_ident(&mut self, _expr: &clickhouse_sql::ast::Ident) -> Result<()> {
        self.visited += 1;
        Ok(())
    }
}

#[test]
fn test_error_short_circuits_and_unwinds() {
    let statement = parse_one("SELECT 1, a, b").expect("statement");
    let mut visitor = FailingVisitor {
        visited: 0,
        leaves_after_error: 0,
        failed: false,
    };
    let result = statement.accept(&mut visitor);
    assert!(matches!(result, Err(Error::Invariant(_))));
    // idents after the failing literal are never visited
    assert_eq!(visitor.visited, 0);
    // unwinding still leaves every entered node
    assert!(visitor.leaves_after_error > 0);
}

#[test]
fn test_visitor_on_ddl() {
    let statement = parse_one(
        "CREATE TABLE db.t (a UInt32, b String DEFAULT 'x') ENGINE = MergeTree() ORDER BY a",
    )
    .expect("statement");
    let mut visitor = CountingVisitor::default();
    statement.accept(&mut visitor).expect("traversal");
    // db, t, column and type names, engine order-by column all show up
    assert!(visitor.idents.contains(&"db".to_string()));
    assert!(visitor.idents.contains(&"UInt32".to_string()));
    assert!(visitor.enters > 10);
}

#[test]
fn test_walk_from_node() {
    let statement = parse_one("SELECT 1").expect("statement");
    let mut visitor = CountingVisitor::default();
    clickhouse_sql::walk(&mut visitor, Node::from(&statement)).expect("traversal");
    assert_eq!(visitor.number_literals, 1);
}
