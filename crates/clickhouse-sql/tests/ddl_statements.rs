//! DDL and statement parsing tests: CREATE/ALTER/DROP families, INSERT,
//! DELETE, SYSTEM, OPTIMIZE, GRANT, EXPLAIN.

use clickhouse_sql::{parse_one, Expr};

fn parse_stmt(sql: &str) -> Expr {
    parse_one(sql).unwrap_or_else(|e| panic!("failed to parse {sql}: {e}"))
}

#[test]
fn test_create_table_with_engine() {
    let statement = parse_stmt(
        "CREATE TABLE db.t (a UInt32, b String DEFAULT 'x') ENGINE = MergeTree() ORDER BY a",
    );
    let create = match statement {
        Expr::CreateTable(create) => *create,
        other => panic!("expected CreateTable, got {other:?}"),
    };
    assert_eq!(create.name.sql(0), "db.t");

    let schema = create.table_schema.expect("column list");
    assert_eq!(schema.columns.len(), 2);
    match &schema.columns[0] {
        Expr::Column(column) => {
            assert_eq!(column.name.sql(0), "a");
            assert!(matches!(
                column.column_type.as_ref().expect("type"),
                Expr::ScalarTypeExpr(_)
            ));
        }
        other => panic!("expected Column, got {other:?}"),
    }
    match &schema.columns[1] {
        Expr::Column(column) => {
            let property = column.property.as_ref().expect("DEFAULT property");
            assert_eq!(property.keyword, "DEFAULT");
            assert!(matches!(
                property.expr.as_ref().expect("default value"),
                Expr::StringLiteral(_)
            ));
        }
        other => panic!("expected Column, got {other:?}"),
    }

    let engine = create.engine.expect("engine clause");
    assert_eq!(engine.name, "MergeTree");
    assert!(engine.params.is_some());
    let order_by = engine.order_by.expect("ORDER BY storage clause");
    assert_eq!(order_by.items.len(), 1);
}

#[test]
fn test_create_table_storage_clauses_any_order() {
    let statement = parse_stmt(
        "CREATE TABLE t (a UInt8, d Date) ENGINE = MergeTree PARTITION BY toYYYYMM(d) \
         PRIMARY KEY a ORDER BY (a, d) SAMPLE BY a TTL d + INTERVAL 30 DAY \
         SETTINGS index_granularity=8192",
    );
    let create = match statement {
        Expr::CreateTable(create) => *create,
        other => panic!("expected CreateTable, got {other:?}"),
    };
    let engine = create.engine.expect("engine clause");
    assert!(engine.partition_by.is_some());
    assert!(engine.primary_key.is_some());
    assert!(engine.order_by.is_some());
    assert!(engine.sample_by.is_some());
    assert!(engine.ttl.is_some());
    assert!(engine.settings.is_some());
}

#[test]
fn test_create_table_column_extras() {
    let statement = parse_stmt(
        "CREATE TABLE t (a UInt8 CODEC(ZSTD(3)) TTL d + INTERVAL 1 DAY COMMENT 'compressed', \
         b Nullable(String) NULL, c String NOT NULL MATERIALIZED upper(b), e EPHEMERAL)",
    );
    let create = match statement {
        Expr::CreateTable(create) => *create,
        other => panic!("expected CreateTable, got {other:?}"),
    };
    let schema = create.table_schema.expect("column list");
    match &schema.columns[0] {
        Expr::Column(column) => {
            let codec = column.codec.as_ref().expect("codec");
            assert_eq!(codec.name.name, "ZSTD");
            assert_eq!(codec.level.as_ref().expect("level").literal, "3");
            assert!(column.ttl.is_some());
            assert_eq!(column.comment.as_ref().expect("comment").literal, "compressed");
        }
        other => panic!("expected Column, got {other:?}"),
    }
    match &schema.columns[1] {
        Expr::Column(column) => assert!(column.nullable.is_some()),
        other => panic!("expected Column, got {other:?}"),
    }
    match &schema.columns[2] {
        Expr::Column(column) => {
            assert!(column.not_null.is_some());
            assert_eq!(column.property.as_ref().expect("property").keyword, "MATERIALIZED");
        }
        other => panic!("expected Column, got {other:?}"),
    }
    match &schema.columns[3] {
        Expr::Column(column) => {
            let property = column.property.as_ref().expect("property");
            assert_eq!(property.keyword, "EPHEMERAL");
            assert!(property.expr.is_none());
        }
        other => panic!("expected Column, got {other:?}"),
    }
}

#[test]
fn test_create_table_index_and_constraint() {
    let statement = parse_stmt(
        "CREATE TABLE t (a UInt8, INDEX idx a TYPE minmax GRANULARITY 4, \
         CONSTRAINT positive CHECK a > 0)",
    );
    let create = match statement {
        Expr::CreateTable(create) => *create,
        other => panic!("expected CreateTable, got {other:?}"),
    };
    let schema = create.table_schema.expect("column list");
    match &schema.columns[1] {
        Expr::TableIndex(index) => {
            assert_eq!(index.name.sql(0), "idx");
            assert_eq!(index.granularity.literal, "4");
        }
        other => panic!("expected TableIndex, got {other:?}"),
    }
    match &schema.columns[2] {
        Expr::ConstraintExpr(constraint) => {
            assert_eq!(constraint.constraint.name, "positive");
        }
        other => panic!("expected ConstraintExpr, got {other:?}"),
    }
}

#[test]
fn test_create_table_enum_and_nested_types() {
    let statement = parse_stmt(
        "CREATE TABLE t (e Enum8('a' = 1, 'b' = 2), n Nested(x UInt8, y String), \
         f FixedString(32), m Map(String, UInt64))",
    );
    let create = match statement {
        Expr::CreateTable(create) => *create,
        other => panic!("expected CreateTable, got {other:?}"),
    };
    let schema = create.table_schema.expect("column list");
    let type_of = |i: usize| match &schema.columns[i] {
        Expr::Column(column) => column.column_type.clone().expect("type"),
        other => panic!("expected Column, got {other:?}"),
    };
    assert!(matches!(type_of(0), Expr::TypeWithParamsExpr(_)));
    assert!(matches!(type_of(1), Expr::NestedTypeExpr(_)));
    assert!(matches!(type_of(2), Expr::TypeWithParamsExpr(_)));
    assert!(matches!(type_of(3), Expr::ComplexTypeExpr(_)));
}

#[test]
fn test_create_table_as_select_and_as_table() {
    let statement = parse_stmt("CREATE TABLE t ENGINE = Memory AS SELECT 1");
    match statement {
        Expr::CreateTable(create) => assert!(create.sub_query.is_some()),
        other => panic!("expected CreateTable, got {other:?}"),
    }

    let statement = parse_stmt("CREATE TABLE t2 AS db.t1");
    match statement {
        Expr::CreateTable(create) => {
            let schema = create.table_schema.expect("schema");
            assert!(schema.alias_table.is_some());
        }
        other => panic!("expected CreateTable, got {other:?}"),
    }

    let statement = parse_stmt("CREATE TABLE t3 AS numbers(10)");
    match statement {
        Expr::CreateTable(create) => {
            let schema = create.table_schema.expect("schema");
            assert!(schema.table_function.is_some());
        }
        other => panic!("expected CreateTable, got {other:?}"),
    }
}

#[test]
fn test_create_temporary_table_and_uuid() {
    let statement = parse_stmt(
        "CREATE TEMPORARY TABLE t UUID '123e4567-e89b-12d3-a456-426614174000' (a UInt8)",
    );
    match statement {
        Expr::CreateTable(create) => {
            assert!(create.has_temporary);
            assert!(create.uuid.is_some());
        }
        other => panic!("expected CreateTable, got {other:?}"),
    }
}

#[test]
fn test_attach_parses_as_create() {
    let statement = parse_stmt("ATTACH TABLE db.t");
    assert!(matches!(statement, Expr::CreateTable(_)));
}

#[test]
fn test_create_database() {
    let statement = parse_stmt("CREATE DATABASE IF NOT EXISTS analytics ON CLUSTER main");
    match statement {
        Expr::CreateDatabase(create) => {
            assert!(create.if_not_exists);
            assert_eq!(create.name.name, "analytics");
            assert!(create.on_cluster.is_some());
        }
        other => panic!("expected CreateDatabase, got {other:?}"),
    }
}

#[test]
fn test_create_views() {
    let statement = parse_stmt("CREATE VIEW v AS SELECT a FROM t");
    assert!(matches!(statement, Expr::CreateView(_)));

    let statement = parse_stmt(
        "CREATE MATERIALIZED VIEW mv TO db.dst AS SELECT a, count() FROM t GROUP BY a",
    );
    match statement {
        Expr::CreateMaterializedView(create) => {
            let destination = create.destination.expect("TO destination");
            assert_eq!(destination.table.sql(0), "db.dst");
            assert!(create.sub_query.is_some());
        }
        other => panic!("expected CreateMaterializedView, got {other:?}"),
    }

    let statement = parse_stmt(
        "CREATE MATERIALIZED VIEW mv2 ENGINE = MergeTree ORDER BY a POPULATE AS SELECT a FROM t",
    );
    match statement {
        Expr::CreateMaterializedView(create) => {
            assert!(create.engine.is_some());
            assert!(create.populate);
        }
        other => panic!("expected CreateMaterializedView, got {other:?}"),
    }

    let statement = parse_stmt("CREATE LIVE VIEW lv WITH TIMEOUT 300 AS SELECT a FROM t");
    match statement {
        Expr::CreateLiveView(create) => {
            let timeout = create.with_timeout.expect("WITH TIMEOUT clause");
            assert_eq!(timeout.number.literal, "300");
        }
        other => panic!("expected CreateLiveView, got {other:?}"),
    }
}

#[test]
fn test_create_function() {
    let statement = parse_stmt("CREATE FUNCTION linear AS (x, k, b) -> k * x + b");
    match statement {
        Expr::CreateFunction(create) => {
            assert_eq!(create.name.name, "linear");
            assert_eq!(create.params.items.items.len(), 3);
            assert!(matches!(create.expr, Expr::BinaryExpr(_)));
        }
        other => panic!("expected CreateFunction, got {other:?}"),
    }
}

#[test]
fn test_create_role_and_user() {
    let statement = parse_stmt("CREATE ROLE IF NOT EXISTS accountant, auditor");
    match statement {
        Expr::CreateRole(create) => {
            assert_eq!(create.target, "ROLE");
            assert!(create.if_not_exists);
            assert_eq!(create.names.len(), 2);
        }
        other => panic!("expected CreateRole, got {other:?}"),
    }

    let statement = parse_stmt("CREATE USER u SETTINGS max_memory_usage 10000 READONLY");
    match statement {
        Expr::CreateRole(create) => {
            assert_eq!(create.target, "USER");
            assert_eq!(create.settings.len(), 1);
            let setting = &create.settings[0];
            assert_eq!(setting.pairs.len(), 1);
            assert_eq!(setting.modifier.as_ref().expect("modifier").name, "READONLY");
        }
        other => panic!("expected CreateRole, got {other:?}"),
    }
}

#[test]
fn test_alter_table_add_and_drop_column() {
    let statement =
        parse_stmt("ALTER TABLE t ADD COLUMN IF NOT EXISTS c UInt8 AFTER b, DROP COLUMN d");
    let alter = match statement {
        Expr::AlterTable(alter) => *alter,
        other => panic!("expected AlterTable, got {other:?}"),
    };
    assert_eq!(alter.alter_exprs.len(), 2);
    match &alter.alter_exprs[0] {
        Expr::AlterTableAddColumn(add) => {
            assert!(add.if_not_exists);
            assert_eq!(add.column.name.sql(0), "c");
            assert_eq!(add.after.as_ref().expect("AFTER column").sql(0), "b");
        }
        other => panic!("expected AlterTableAddColumn, got {other:?}"),
    }
    match &alter.alter_exprs[1] {
        Expr::AlterTableDropColumn(drop) => {
            assert_eq!(drop.column_name.sql(0), "d");
        }
        other => panic!("expected AlterTableDropColumn, got {other:?}"),
    }
}

#[test]
fn test_alter_table_partition_ops() {
    let cases = [
        ("ALTER TABLE t ATTACH PARTITION 201901 FROM backup", "attach"),
        ("ALTER TABLE t DETACH PARTITION ALL", "detach"),
        ("ALTER TABLE t DROP PARTITION '2019-01-01'", "drop"),
        ("ALTER TABLE t FREEZE", "freeze"),
        ("ALTER TABLE t FREEZE PARTITION ID 'x'", "freeze-id"),
        ("ALTER TABLE t REPLACE PARTITION 2 FROM t2", "replace"),
    ];
    for (sql, what) in cases {
        let statement = parse_stmt(sql);
        let alter = match statement {
            Expr::AlterTable(alter) => *alter,
            other => panic!("expected AlterTable for {what}, got {other:?}"),
        };
        assert_eq!(alter.alter_exprs.len(), 1, "{what}");
    }
}

#[test]
fn test_alter_table_partition_id() {
    let statement = parse_stmt("ALTER TABLE t FREEZE PARTITION ID 'x'");
    let alter = match statement {
        Expr::AlterTable(alter) => *alter,
        other => panic!("expected AlterTable, got {other:?}"),
    };
    match &alter.alter_exprs[0] {
        Expr::AlterTableFreezePartition(freeze) => {
            let partition = freeze.partition.as_ref().expect("partition");
            assert_eq!(partition.id.as_ref().expect("id").literal, "x");
        }
        other => panic!("expected AlterTableFreezePartition, got {other:?}"),
    }
}

#[test]
fn test_alter_table_column_ops() {
    parse_stmt("ALTER TABLE t MODIFY COLUMN IF EXISTS c UInt64");
    parse_stmt("ALTER TABLE t MODIFY COLUMN c REMOVE DEFAULT");
    parse_stmt("ALTER TABLE t RENAME COLUMN a TO b");
    parse_stmt("ALTER TABLE t CLEAR COLUMN IF EXISTS c IN PARTITION 5");
    parse_stmt("ALTER TABLE t CLEAR INDEX idx IN PARTITION 5");
    parse_stmt("ALTER TABLE t ADD INDEX idx a TYPE minmax GRANULARITY 1");
    parse_stmt("ALTER TABLE t DROP INDEX IF EXISTS idx");
    parse_stmt("ALTER TABLE t MODIFY TTL d + INTERVAL 1 DAY");
    parse_stmt("ALTER TABLE t REMOVE TTL");
}

#[test]
fn test_alter_role() {
    let statement = parse_stmt("ALTER ROLE IF EXISTS r RENAME TO r2");
    match statement {
        Expr::AlterRole(alter) => {
            assert!(alter.if_exists);
            assert_eq!(alter.rename_pairs.len(), 1);
            assert_eq!(
                alter.rename_pairs[0].new_name.as_ref().expect("new name").name,
                "r2"
            );
        }
        other => panic!("expected AlterRole, got {other:?}"),
    }
}

#[test]
fn test_drop_family() {
    let statement = parse_stmt("DROP TABLE IF EXISTS db.t ON CLUSTER main SYNC");
    match statement {
        Expr::DropStmt(drop) => {
            assert_eq!(drop.drop_target, "TABLE");
            assert!(drop.if_exists);
            assert!(!drop.detach);
            assert_eq!(drop.modifier.as_deref(), Some("SYNC"));
        }
        other => panic!("expected DropStmt, got {other:?}"),
    }

    let statement = parse_stmt("DETACH TABLE t");
    match statement {
        Expr::DropStmt(drop) => assert!(drop.detach),
        other => panic!("expected DropStmt, got {other:?}"),
    }

    let statement = parse_stmt("DROP DATABASE IF EXISTS d");
    assert!(matches!(statement, Expr::DropDatabase(_)));

    let statement = parse_stmt("DROP FUNCTION linear");
    match statement {
        Expr::DropStmt(drop) => assert_eq!(drop.drop_target, "FUNCTION"),
        other => panic!("expected DropStmt, got {other:?}"),
    }

    let statement = parse_stmt("DROP USER u1, u2 FROM ldap");
    match statement {
        Expr::DropUserOrRole(drop) => {
            assert_eq!(drop.target, "USER");
            assert_eq!(drop.names.len(), 2);
            assert!(drop.from.is_some());
        }
        other => panic!("expected DropUserOrRole, got {other:?}"),
    }
}

#[test]
fn test_rename_and_truncate() {
    let statement = parse_stmt("RENAME TABLE a TO b, c TO d ON CLUSTER main");
    match statement {
        Expr::RenameStmt(rename) => {
            assert_eq!(rename.rename_target, "TABLE");
            assert_eq!(rename.target_pairs.len(), 2);
        }
        other => panic!("expected RenameStmt, got {other:?}"),
    }

    let statement = parse_stmt("TRUNCATE TEMPORARY TABLE IF EXISTS t");
    match statement {
        Expr::TruncateTable(truncate) => {
            assert!(truncate.is_temporary);
            assert!(truncate.if_exists);
        }
        other => panic!("expected TruncateTable, got {other:?}"),
    }
}

#[test]
fn test_insert_values_and_select() {
    let statement = parse_stmt("INSERT INTO t (a, b) VALUES (1, 'x'), (2, 'y')");
    match statement {
        Expr::InsertExpr(insert) => {
            assert_eq!(
                insert.column_names.expect("column list").column_names.len(),
                2
            );
            assert_eq!(insert.values.len(), 2);
            assert!(insert.select.is_none());
        }
        other => panic!("expected InsertExpr, got {other:?}"),
    }

    let statement = parse_stmt("INSERT INTO t SELECT a FROM s");
    match statement {
        Expr::InsertExpr(insert) => assert!(insert.select.is_some()),
        other => panic!("expected InsertExpr, got {other:?}"),
    }

    let statement = parse_stmt("INSERT INTO FUNCTION remote('host', db.t) VALUES (1)");
    match statement {
        Expr::InsertExpr(insert) => {
            assert!(matches!(insert.table, Expr::TableFunctionExpr(_)));
        }
        other => panic!("expected InsertExpr, got {other:?}"),
    }

    let statement = parse_stmt("INSERT INTO t FORMAT CSV");
    match statement {
        Expr::InsertExpr(insert) => {
            assert_eq!(insert.format.expect("format").format.name, "CSV");
            assert!(insert.values.is_empty());
        }
        other => panic!("expected InsertExpr, got {other:?}"),
    }
}

#[test]
fn test_delete_from() {
    let statement = parse_stmt("DELETE FROM t WHERE a = 1");
    match statement {
        Expr::DeleteFromExpr(delete) => {
            assert_eq!(delete.table.sql(0), "t");
            assert!(delete.where_expr.is_some());
        }
        other => panic!("expected DeleteFromExpr, got {other:?}"),
    }
}

#[test]
fn test_use_and_set() {
    let statement = parse_stmt("USE analytics");
    assert!(matches!(statement, Expr::UseExpr(_)));

    let statement = parse_stmt("SET max_threads = 4, log_queries = 1");
    match statement {
        Expr::SetExpr(set) => assert_eq!(set.settings.items.len(), 2),
        other => panic!("expected SetExpr, got {other:?}"),
    }
}

#[test]
fn test_system_statements() {
    let cases = [
        "SYSTEM FLUSH LOGS",
        "SYSTEM FLUSH DISTRIBUTED db.dist",
        "SYSTEM RELOAD DICTIONARIES",
        "SYSTEM RELOAD DICTIONARY db.dict",
        "SYSTEM RELOAD CONFIG",
        "SYSTEM SYNC REPLICA db.t",
        "SYSTEM START MERGES",
        "SYSTEM STOP REPLICATED SENDS db.t",
        "SYSTEM START DISTRIBUTED SENDS",
        "SYSTEM DROP DNS CACHE",
    ];
    for sql in cases {
        let statement = parse_stmt(sql);
        assert!(matches!(statement, Expr::SystemExpr(_)), "{sql}");
    }
}

#[test]
fn test_optimize() {
    let statement =
        parse_stmt("OPTIMIZE TABLE t PARTITION 201901 FINAL DEDUPLICATE BY a, b");
    match statement {
        Expr::OptimizeExpr(optimize) => {
            assert!(optimize.has_final);
            assert!(optimize.partition.is_some());
            let deduplicate = optimize.deduplicate.expect("DEDUPLICATE clause");
            assert_eq!(deduplicate.by.expect("BY list").items.len(), 2);
        }
        other => panic!("expected OptimizeExpr, got {other:?}"),
    }
}

#[test]
fn test_check_table() {
    let statement = parse_stmt("CHECK TABLE t PARTITION 5");
    match statement {
        Expr::CheckExpr(check) => assert!(check.partition.is_some()),
        other => panic!("expected CheckExpr, got {other:?}"),
    }
}

#[test]
fn test_grant_privileges() {
    let statement = parse_stmt("GRANT SELECT, INSERT ON db.t TO alice WITH GRANT OPTION");
    let grant = match statement {
        Expr::GrantPrivilegeExpr(grant) => *grant,
        other => panic!("expected GrantPrivilegeExpr, got {other:?}"),
    };
    assert_eq!(grant.privileges.len(), 2);
    assert_eq!(grant.privileges[0].keywords, vec!["SELECT"]);
    assert_eq!(grant.privileges[1].keywords, vec!["INSERT"]);
    assert_eq!(grant.on.sql(0), "db.t");
    assert_eq!(grant.to.len(), 1);
    assert_eq!(grant.to[0].name, "alice");
    assert_eq!(grant.with_options, vec!["GRANT"]);
}

#[test]
fn test_grant_column_privileges_and_star_target() {
    let statement = parse_stmt("GRANT SELECT(a, b) ON db.* TO reader");
    let grant = match statement {
        Expr::GrantPrivilegeExpr(grant) => *grant,
        other => panic!("expected GrantPrivilegeExpr, got {other:?}"),
    };
    assert!(grant.privileges[0].params.is_some());
    assert_eq!(grant.on.sql(0), "db.*");
}

#[test]
fn test_explain() {
    let statement = parse_stmt("EXPLAIN AST SELECT 1");
    match statement {
        Expr::ExplainExpr(explain) => {
            assert_eq!(explain.kind, "AST");
            assert!(matches!(explain.statement, Expr::SelectQuery(_)));
        }
        other => panic!("expected ExplainExpr, got {other:?}"),
    }

    let statement = parse_stmt("EXPLAIN SELECT 1");
    match statement {
        Expr::ExplainExpr(explain) => assert!(explain.kind.is_empty()),
        other => panic!("expected ExplainExpr, got {other:?}"),
    }
}

#[test]
fn test_describe() {
    let statement = parse_stmt("DESCRIBE TABLE db.t");
    assert!(matches!(statement, Expr::DescribeStmt(_)));
    let statement = parse_stmt("DESC TABLE t");
    assert!(matches!(statement, Expr::DescribeStmt(_)));
}

#[test]
fn test_ddl_predicate() {
    assert!(parse_stmt("CREATE TABLE t (a UInt8)").is_ddl());
    assert!(parse_stmt("DROP TABLE t").is_ddl());
    assert!(!parse_stmt("SELECT 1").is_ddl());
    assert!(!parse_stmt("USE db").is_ddl());
}

#[test]
fn test_statement_json_discriminator() {
    let statement = parse_stmt("SELECT 1");
    let json = serde_json::to_value(&statement).expect("serialize");
    assert!(json.get("select_query").is_some());
}
