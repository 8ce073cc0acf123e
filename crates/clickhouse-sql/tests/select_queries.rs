//! SELECT parsing tests: projections, FROM/joins, sampling, clauses,
//! CTEs, windows, and set operations.

use clickhouse_sql::ast::*;
use clickhouse_sql::tokens::TokenType;
use clickhouse_sql::{parse, parse_one, Expr};

fn parse_select(sql: &str) -> SelectQuery {
    match parse_one(sql).unwrap_or_else(|e| panic!("failed to parse {sql}: {e}")) {
        Expr::SelectQuery(select) => *select,
        other => panic!("expected SelectQuery, got {other:?}"),
    }
}

#[test]
fn test_select_single_literal() {
    let select = parse_select("SELECT 1");
    assert_eq!(select.select_columns.items.len(), 1);
    match &select.select_columns.items[0] {
        Expr::NumberLiteral(number) => {
            assert_eq!(number.literal, "1");
            assert_eq!(number.base, 10);
        }
        other => panic!("expected NumberLiteral, got {other:?}"),
    }
    assert!(select.from.is_none());
    assert!(select.where_clause.is_none());
    assert_eq!(select.sql(0), "\nSELECT \n  1");
}

#[test]
fn test_select_column_list_and_aliases() {
    let select = parse_select("SELECT a, b AS renamed, t.c, db.t.d FROM t");
    assert_eq!(select.select_columns.items.len(), 4);
    assert!(matches!(select.select_columns.items[0], Expr::Ident(_)));
    match &select.select_columns.items[1] {
        Expr::AliasExpr(alias) => {
            assert!(matches!(alias.expr, Expr::Ident(_)));
        }
        other => panic!("expected AliasExpr, got {other:?}"),
    }
    match &select.select_columns.items[3] {
        Expr::ColumnIdentifier(column) => {
            assert!(column.database.is_some());
            assert!(column.table.is_some());
        }
        other => panic!("expected ColumnIdentifier, got {other:?}"),
    }
}

#[test]
fn test_select_star() {
    let select = parse_select("SELECT * FROM t");
    match &select.select_columns.items[0] {
        Expr::Ident(ident) => assert_eq!(ident.name, "*"),
        other => panic!("expected *, got {other:?}"),
    }
}

#[test]
fn test_select_distinct() {
    let select = parse_select("SELECT DISTINCT a FROM t");
    assert!(select.select_columns.has_distinct);
}

#[test]
fn test_select_top_with_ties() {
    let select = parse_select("SELECT TOP 5 WITH TIES a FROM t");
    let top = select.top.expect("TOP clause");
    assert_eq!(top.number.literal, "5");
    assert!(top.with_ties);
}

#[test]
fn test_final_and_sample() {
    // FROM t FINAL SAMPLE 1/10 OFFSET 0, IN list, ORDER BY DESC, LIMIT n OFFSET m
    let select = parse_select(
        "SELECT a FROM t FINAL SAMPLE 1/10 OFFSET 0 WHERE a IN (1,2) ORDER BY a DESC LIMIT 5 OFFSET 10",
    );

    let from = select.from.expect("FROM clause");
    let join_table = match &from.expr {
        Expr::JoinTableExpr(join_table) => join_table,
        other => panic!("expected JoinTableExpr, got {other:?}"),
    };
    assert!(join_table.has_final);
    let sample = join_table.sample_ratio.as_ref().expect("SAMPLE clause");
    assert_eq!(sample.ratio.numerator.literal, "1");
    assert_eq!(
        sample.ratio.denominator.as_ref().expect("denominator").literal,
        "10"
    );
    assert_eq!(sample.offset.as_ref().expect("offset").numerator.literal, "0");

    let where_clause = select.where_clause.expect("WHERE clause");
    match &where_clause.expr {
        Expr::BinaryExpr(binary) => {
            assert_eq!(binary.op, TokenType::In);
            assert!(matches!(binary.right, Expr::ParamExprList(_)));
        }
        other => panic!("expected IN expression, got {other:?}"),
    }

    let order_by = select.order_by.expect("ORDER BY clause");
    match &order_by.items[0] {
        Expr::OrderByExpr(item) => assert_eq!(item.direction, OrderDirection::Desc),
        other => panic!("expected OrderByExpr, got {other:?}"),
    }

    let limit = select.limit.expect("LIMIT clause");
    assert!(matches!(&limit.limit, Expr::NumberLiteral(n) if n.literal == "5"));
    assert!(matches!(&limit.offset, Some(Expr::NumberLiteral(n)) if n.literal == "10"));
}

#[test]
fn test_cte_and_union_all() {
    let select = parse_select("WITH x AS (SELECT 1) SELECT * FROM x UNION ALL SELECT 2");
    let with = select.with.expect("WITH clause");
    assert_eq!(with.ctes.len(), 1);
    match &with.ctes[0].expr {
        Expr::Ident(ident) => assert_eq!(ident.name, "x"),
        other => panic!("expected Ident, got {other:?}"),
    }
    assert!(matches!(with.ctes[0].alias, Expr::SelectQuery(_)));
    let union_all = select.union_all.expect("UNION ALL branch");
    assert_eq!(union_all.select_columns.items.len(), 1);
}

#[test]
fn test_union_distinct_and_except() {
    let select = parse_select("SELECT 1 UNION DISTINCT SELECT 2");
    assert!(select.union_distinct.is_some());

    let select = parse_select("SELECT 1 EXCEPT SELECT 2");
    assert!(select.except.is_some());
}

#[test]
fn test_scalar_cte() {
    let select = parse_select("WITH 1 AS one SELECT one");
    let with = select.with.expect("WITH clause");
    assert!(matches!(with.ctes[0].expr, Expr::NumberLiteral(_)));
    assert!(matches!(with.ctes[0].alias, Expr::Ident(_)));
}

#[test]
fn test_join_tree_shape() {
    let select = parse_select("SELECT a FROM t1 LEFT ANY JOIN t2 ON t1.a = t2.a");
    let from = select.from.expect("FROM clause");
    let join = match &from.expr {
        Expr::JoinExpr(join) => join,
        other => panic!("expected JoinExpr, got {other:?}"),
    };
    assert!(matches!(join.left, Expr::JoinTableExpr(_)));
    let right = match join.right.as_ref().expect("right subtree") {
        Expr::JoinExpr(right) => right,
        other => panic!("expected nested JoinExpr, got {other:?}"),
    };
    assert_eq!(right.modifiers, vec!["LEFT", "ANY", "JOIN"]);
    match right.constraints.as_ref().expect("ON constraint") {
        Expr::JoinConstraintExpr(constraint) => assert!(constraint.on.is_some()),
        other => panic!("expected JoinConstraintExpr, got {other:?}"),
    }
}

#[test]
fn test_comma_join_has_no_modifiers() {
    let select = parse_select("SELECT a FROM t1, t2");
    let from = select.from.expect("FROM clause");
    let join = match &from.expr {
        Expr::JoinExpr(join) => join,
        other => panic!("expected JoinExpr, got {other:?}"),
    };
    let right = match join.right.as_ref().expect("right subtree") {
        Expr::JoinExpr(right) => right,
        other => panic!("expected nested JoinExpr, got {other:?}"),
    };
    assert!(right.modifiers.is_empty());
}

#[test]
fn test_join_using() {
    let select = parse_select("SELECT a FROM t1 INNER JOIN t2 USING (a, b)");
    let from = select.from.expect("FROM clause");
    let join = match &from.expr {
        Expr::JoinExpr(join) => join,
        other => panic!("expected JoinExpr, got {other:?}"),
    };
    let right = match join.right.as_ref().expect("right subtree") {
        Expr::JoinExpr(right) => right,
        other => panic!("expected nested JoinExpr, got {other:?}"),
    };
    match right.constraints.as_ref().expect("USING constraint") {
        Expr::JoinConstraintExpr(constraint) => {
            let using = constraint.using.as_ref().expect("USING list");
            assert_eq!(using.items.len(), 2);
        }
        other => panic!("expected JoinConstraintExpr, got {other:?}"),
    }
}

#[test]
fn test_subquery_in_from() {
    let select = parse_select("SELECT a FROM (SELECT b FROM t) AS sub");
    let from = select.from.expect("FROM clause");
    let join_table = match &from.expr {
        Expr::JoinTableExpr(join_table) => join_table,
        other => panic!("expected JoinTableExpr, got {other:?}"),
    };
    assert!(matches!(join_table.table.expr, Expr::SelectQuery(_)));
    assert_eq!(join_table.table.alias.as_ref().expect("alias").name, "sub");
}

#[test]
fn test_table_function_source() {
    let select = parse_select("SELECT a FROM numbers(10)");
    let from = select.from.expect("FROM clause");
    let join_table = match &from.expr {
        Expr::JoinTableExpr(join_table) => join_table,
        other => panic!("expected JoinTableExpr, got {other:?}"),
    };
    match &join_table.table.expr {
        Expr::TableFunctionExpr(function) => {
            assert_eq!(function.name.name, "numbers");
            assert_eq!(function.args.args.len(), 1);
        }
        other => panic!("expected TableFunctionExpr, got {other:?}"),
    }
}

#[test]
fn test_array_join() {
    let select = parse_select("SELECT a FROM t ARRAY JOIN arr");
    let array_join = select.array_join.expect("ARRAY JOIN clause");
    assert_eq!(array_join.kind, "");

    let select = parse_select("SELECT a FROM t LEFT ARRAY JOIN arr AS item");
    let array_join = select.array_join.expect("LEFT ARRAY JOIN clause");
    assert_eq!(array_join.kind, "LEFT");
    assert!(matches!(array_join.expr, Expr::AliasExpr(_)));
}

#[test]
fn test_prewhere_and_where() {
    let select = parse_select("SELECT a FROM t PREWHERE b = 1 WHERE c = 2");
    assert!(select.prewhere.is_some());
    assert!(select.where_clause.is_some());
}

#[test]
fn test_group_by_modifiers() {
    let select = parse_select("SELECT a FROM t GROUP BY a WITH TOTALS");
    let group_by = select.group_by.expect("GROUP BY clause");
    assert!(group_by.with_totals);
    assert!(group_by.aggregate_type.is_empty());

    let select = parse_select("SELECT a FROM t GROUP BY CUBE(a, b)");
    let group_by = select.group_by.expect("GROUP BY CUBE clause");
    assert_eq!(group_by.aggregate_type, "CUBE");
}

#[test]
fn test_having() {
    let select = parse_select("SELECT a FROM t GROUP BY a HAVING count() > 1");
    assert!(select.having.is_some());
}

#[test]
fn test_limit_comma_form_swaps() {
    // LIMIT m, n means offset m, limit n
    let select = parse_select("SELECT a FROM t LIMIT 5, 10");
    let limit = select.limit.expect("LIMIT clause");
    assert!(matches!(&limit.limit, Expr::NumberLiteral(n) if n.literal == "10"));
    assert!(matches!(&limit.offset, Some(Expr::NumberLiteral(n)) if n.literal == "5"));
}

#[test]
fn test_limit_by() {
    let select = parse_select("SELECT a FROM t LIMIT 2 BY a LIMIT 10");
    let limit_by = select.limit_by.expect("LIMIT BY clause");
    assert!(matches!(&limit_by.limit.limit, Expr::NumberLiteral(n) if n.literal == "2"));
    assert_eq!(limit_by.by.items.len(), 1);
    let limit = select.limit.expect("final LIMIT clause");
    assert!(matches!(&limit.limit, Expr::NumberLiteral(n) if n.literal == "10"));
}

#[test]
fn test_settings_clause() {
    let select = parse_select("SELECT a FROM t SETTINGS max_threads=4, optimize_read=1");
    let settings = select.settings.expect("SETTINGS clause");
    assert_eq!(settings.items.len(), 2);
    assert_eq!(settings.items[0].name.name, "max_threads");
}

#[test]
fn test_named_window() {
    let select = parse_select(
        "SELECT sum(x) OVER w FROM t WINDOW w AS (PARTITION BY a ORDER BY b ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW)",
    );
    let window = select.window.expect("WINDOW clause");
    assert_eq!(window.name.name, "w");
    assert!(window.condition.partition_by.is_some());
    assert!(window.condition.order_by.is_some());
    let frame = window.condition.frame.as_ref().expect("frame");
    assert_eq!(frame.kind, "ROWS");
    assert!(matches!(frame.extend, Expr::WindowFrameRangeExpr(_)));
}

#[test]
fn test_window_function_over_condition() {
    let select = parse_select("SELECT row_number() OVER (PARTITION BY a) FROM t");
    match &select.select_columns.items[0] {
        Expr::WindowFunctionExpr(window_function) => {
            assert_eq!(window_function.function.name.name, "row_number");
            assert!(matches!(window_function.over, Expr::WindowConditionExpr(_)));
        }
        other => panic!("expected WindowFunctionExpr, got {other:?}"),
    }
}

#[test]
fn test_expression_forms() {
    parse_select("SELECT a ? b : c");
    parse_select("SELECT NOT a AND b OR c");
    parse_select("SELECT a BETWEEN 1 AND 10");
    parse_select("SELECT a NOT IN (1, 2)");
    parse_select("SELECT a GLOBAL IN (1, 2)");
    parse_select("SELECT a LIKE 'x%' OR b ILIKE '%y'");
    parse_select("SELECT a IS NULL, b IS NOT NULL");
    parse_select("SELECT x::UInt32");
    parse_select("SELECT CAST(a AS UInt64)");
    parse_select("SELECT EXTRACT(YEAR FROM d)");
    parse_select("SELECT INTERVAL 1 DAY");
    parse_select("SELECT CASE WHEN a THEN 1 ELSE 2 END");
    parse_select("SELECT arr[1], [1, 2, 3]");
    parse_select("SELECT arrayMap(x -> x + 1, arr)");
    parse_select("SELECT quantile(0.5)(x)");
    parse_select("SELECT count(DISTINCT a)");
}

#[test]
fn test_number_base_preserved() {
    let select = parse_select("SELECT 0x1A, 0o17, 42, 3.14");
    let bases: Vec<u32> = select
        .select_columns
        .items
        .iter()
        .map(|item| match item {
            Expr::NumberLiteral(number) => number.base,
            other => panic!("expected NumberLiteral, got {other:?}"),
        })
        .collect();
    assert_eq!(bases, vec![16, 8, 10, 10]);
}

#[test]
fn test_multiple_statements() {
    let statements = parse("SELECT 1; SELECT 2;").expect("two statements");
    assert_eq!(statements.len(), 2);
}

#[test]
fn test_empty_input() {
    assert!(parse("").expect("empty input").is_empty());
    assert!(parse("  ;;  ").expect("semicolons only").is_empty());
}

#[test]
fn test_position_containment() {
    let sql = "SELECT a FROM t WHERE a > 1";
    let statement = parse_one(sql).expect("statement");
    assert!(statement.pos() <= statement.end());
    assert!(statement.end() <= sql.len());
    match statement {
        Expr::SelectQuery(select) => {
            let where_clause = select.where_clause.expect("WHERE clause");
            assert!(select.span.start <= where_clause.span.start);
            assert!(where_clause.span.end <= select.span.end);
            assert!(where_clause.expr.pos() >= where_clause.span.start);
        }
        other => panic!("expected SelectQuery, got {other:?}"),
    }
}
