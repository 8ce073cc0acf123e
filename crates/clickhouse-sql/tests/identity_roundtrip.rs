//! Round-trip tests
//!
//! Every accepted statement must print to SQL that parses back to an
//! equivalent tree. The check used here is print stability: format the
//! parsed tree, re-parse the output, format again, and require the two
//! renderings to match byte for byte.

use clickhouse_sql::parse;

fn roundtrip(sql: &str) -> String {
    let first = parse(sql).unwrap_or_else(|e| panic!("failed to parse {sql}: {e}"));
    assert!(!first.is_empty(), "no statements in {sql}");
    let printed: Vec<String> = first.iter().map(|statement| statement.sql(0)).collect();
    let joined = printed.join(";\n");
    let second = parse(&joined).unwrap_or_else(|e| panic!("failed to re-parse {joined}: {e}"));
    assert_eq!(first.len(), second.len(), "statement count changed for {sql}");
    let reprinted: Vec<String> = second.iter().map(|statement| statement.sql(0)).collect();
    assert_eq!(
        printed, reprinted,
        "pretty-print not stable for {sql}\nfirst:  {printed:?}\nsecond: {reprinted:?}"
    );
    joined
}

#[test]
fn test_literal_roundtrips() {
    roundtrip("SELECT 1");
    roundtrip("SELECT 1.5, 0x1A, 0o17, 1e10, 2.5E-3");
    roundtrip("SELECT 'hello', '', 'it''s', 'a\\'b'");
    roundtrip("SELECT NULL");
    roundtrip("SELECT -1, +1");
    roundtrip("SELECT INTERVAL 30 DAY");
}

#[test]
fn test_identifier_quote_preservation() {
    let out = roundtrip("SELECT `a b`, \"c d\", plain FROM `my table`");
    assert!(out.contains("`a b`"));
    assert!(out.contains("\"c d\""));
    assert!(out.contains("`my table`"));
}

#[test]
fn test_numeric_lexeme_preservation() {
    let out = roundtrip("SELECT 0x1A, 0o17, 1e10");
    assert!(out.contains("0x1A"));
    assert!(out.contains("0o17"));
    assert!(out.contains("1e10"));
}

#[test]
fn test_operator_roundtrips() {
    roundtrip("SELECT a + b * c - d / e % f");
    roundtrip("SELECT a = b, a != c, a < d, a <= e, a > f, a >= g");
    roundtrip("SELECT a AND b OR NOT c");
    roundtrip("SELECT a || b");
    roundtrip("SELECT a ? b : c");
    roundtrip("SELECT x::UInt32");
    roundtrip("SELECT a BETWEEN 1 AND 10");
    roundtrip("SELECT a IN (1, 2), b NOT IN (3), c GLOBAL IN (4)");
    roundtrip("SELECT a LIKE 'x%', b NOT LIKE 'y%', c ILIKE 'z%'");
    roundtrip("SELECT a IS NULL, b IS NOT NULL");
    roundtrip("SELECT (a + b) * c");
}

#[test]
fn test_function_roundtrips() {
    roundtrip("SELECT now(), length(s), if(a, 1, 2)");
    roundtrip("SELECT count(DISTINCT a)");
    roundtrip("SELECT quantile(0.5)(x)");
    roundtrip("SELECT arrayMap(x -> x + 1, arr)");
    roundtrip("SELECT arr[1], [1, 2, 3]");
    roundtrip("SELECT CAST(a AS UInt64), CAST(b, UInt8)");
    roundtrip("SELECT EXTRACT(YEAR FROM d)");
    roundtrip("SELECT CASE WHEN a THEN 1 WHEN b THEN 2 ELSE 3 END");
    roundtrip("SELECT CASE x WHEN 1 THEN 'a' END");
    roundtrip("SELECT row_number() OVER (PARTITION BY a ORDER BY b DESC)");
    roundtrip("SELECT sum(x) OVER w FROM t WINDOW w AS (PARTITION BY a)");
}

#[test]
fn test_select_clause_roundtrips() {
    roundtrip("SELECT DISTINCT a FROM t");
    roundtrip("SELECT TOP 5 a FROM t");
    roundtrip("SELECT TOP 5 WITH TIES a FROM t");
    roundtrip("SELECT a FROM t PREWHERE b = 1 WHERE c = 2");
    roundtrip("SELECT a FROM t GROUP BY a WITH TOTALS HAVING count() > 1");
    roundtrip("SELECT a FROM t GROUP BY CUBE(a, b) WITH ROLLUP");
    roundtrip("SELECT a FROM t ORDER BY a ASC, b DESC, c");
    roundtrip("SELECT a FROM t LIMIT 10");
    roundtrip("SELECT a FROM t LIMIT 10 OFFSET 5");
    roundtrip("SELECT a FROM t LIMIT 2 BY a LIMIT 10");
    roundtrip("SELECT a FROM t SETTINGS max_threads=4");
    roundtrip("SELECT a FROM t FINAL SAMPLE 1/10 OFFSET 0 WHERE a IN (1, 2) ORDER BY a DESC LIMIT 5 OFFSET 10");
}

#[test]
fn test_limit_comma_normalizes_to_offset() {
    let out = roundtrip("SELECT a FROM t LIMIT 5, 10");
    assert!(out.contains("LIMIT 10 OFFSET 5"));
}

#[test]
fn test_from_roundtrips() {
    roundtrip("SELECT a FROM db.t");
    roundtrip("SELECT a FROM t AS x");
    roundtrip("SELECT a FROM t FINAL");
    roundtrip("SELECT a FROM t SAMPLE 0.1");
    roundtrip("SELECT a FROM numbers(10)");
    roundtrip("SELECT a FROM (SELECT b FROM t) AS sub");
    roundtrip("SELECT a FROM t1, t2");
    roundtrip("SELECT a FROM t1 JOIN t2 ON t1.a = t2.a");
    roundtrip("SELECT a FROM t1 LEFT ANY JOIN t2 ON a = b");
    roundtrip("SELECT a FROM t1 CROSS JOIN t2");
    roundtrip("SELECT a FROM t1 INNER JOIN t2 USING (a, b)");
    roundtrip("SELECT a FROM t1 ASOF JOIN t2 ON t1.a = t2.a");
    roundtrip("SELECT a FROM t ARRAY JOIN arr");
    roundtrip("SELECT a FROM t LEFT ARRAY JOIN arr AS item");
}

#[test]
fn test_cte_and_union_roundtrips() {
    roundtrip("WITH x AS (SELECT 1) SELECT * FROM x UNION ALL SELECT 2");
    roundtrip("WITH 1 AS one SELECT one");
    roundtrip("SELECT 1 UNION DISTINCT SELECT 2");
    roundtrip("SELECT 1 EXCEPT SELECT 2");
    roundtrip("SELECT (SELECT 1)");
    roundtrip("SELECT a IN (SELECT b FROM t) FROM s");
}

#[test]
fn test_create_table_roundtrips() {
    roundtrip("CREATE TABLE db.t (a UInt32, b String DEFAULT 'x') ENGINE = MergeTree() ORDER BY a");
    roundtrip(
        "CREATE TABLE t (a UInt8, d Date) ENGINE = MergeTree PARTITION BY toYYYYMM(d) \
         PRIMARY KEY a ORDER BY (a, d) SAMPLE BY a TTL d + INTERVAL 30 DAY \
         SETTINGS index_granularity=8192",
    );
    roundtrip("CREATE TABLE t (a UInt8 CODEC(ZSTD(3)) COMMENT 'small')");
    roundtrip("CREATE TABLE t (e Enum8('a' = 1, 'b' = 2))");
    roundtrip("CREATE TABLE t (n Nested(x UInt8, y String))");
    roundtrip("CREATE TABLE t (a Nullable(String) NULL, b String NOT NULL)");
    roundtrip("CREATE TABLE t (a UInt8, INDEX idx a TYPE minmax GRANULARITY 4)");
    roundtrip("CREATE TABLE t (a UInt8, CONSTRAINT positive CHECK a > 0)");
    roundtrip("CREATE TABLE t ENGINE = Memory AS SELECT 1");
    roundtrip("CREATE TABLE t2 AS db.t1");
    roundtrip("CREATE TEMPORARY TABLE t (a UInt8)");
    roundtrip("CREATE TABLE IF NOT EXISTS t ON CLUSTER main (a UInt8)");
}

#[test]
fn test_create_view_roundtrips() {
    roundtrip("CREATE VIEW v AS SELECT a FROM t");
    roundtrip("CREATE MATERIALIZED VIEW mv TO db.dst AS SELECT a FROM t");
    roundtrip("CREATE MATERIALIZED VIEW mv ENGINE = MergeTree ORDER BY a POPULATE AS SELECT a FROM t");
    roundtrip("CREATE LIVE VIEW lv WITH TIMEOUT 300 AS SELECT a FROM t");
    roundtrip("CREATE FUNCTION linear AS (x, k, b) -> k * x + b");
}

#[test]
fn test_role_roundtrips() {
    roundtrip("CREATE ROLE IF NOT EXISTS accountant, auditor");
    roundtrip("CREATE USER u SETTINGS max_memory_usage 10000 READONLY");
    roundtrip("ALTER ROLE r RENAME TO r2");
    roundtrip("DROP ROLE IF EXISTS r");
    roundtrip("DROP USER u1, u2 FROM ldap");
}

#[test]
fn test_alter_table_roundtrips() {
    roundtrip("ALTER TABLE t ADD COLUMN IF NOT EXISTS c UInt8 AFTER b, DROP COLUMN d");
    roundtrip("ALTER TABLE t ON CLUSTER main ADD COLUMN c UInt8");
    roundtrip("ALTER TABLE t ATTACH PARTITION 201901 FROM backup");
    roundtrip("ALTER TABLE t DETACH PARTITION ALL");
    roundtrip("ALTER TABLE t DROP PARTITION '2019-01-01'");
    roundtrip("ALTER TABLE t FREEZE");
    roundtrip("ALTER TABLE t FREEZE PARTITION ID 'x'");
    roundtrip("ALTER TABLE t REPLACE PARTITION 2 FROM t2");
    roundtrip("ALTER TABLE t ADD INDEX idx a TYPE minmax GRANULARITY 1");
    roundtrip("ALTER TABLE t DROP INDEX IF EXISTS idx");
    roundtrip("ALTER TABLE t CLEAR COLUMN IF EXISTS c IN PARTITION 5");
    roundtrip("ALTER TABLE t RENAME COLUMN a TO b");
    roundtrip("ALTER TABLE t MODIFY COLUMN c UInt64");
    roundtrip("ALTER TABLE t MODIFY COLUMN c REMOVE DEFAULT");
    roundtrip("ALTER TABLE t MODIFY TTL d + INTERVAL 1 DAY");
    roundtrip("ALTER TABLE t REMOVE TTL");
}

#[test]
fn test_statement_roundtrips() {
    roundtrip("DROP TABLE IF EXISTS db.t ON CLUSTER main SYNC");
    roundtrip("DETACH TABLE t");
    roundtrip("DROP DATABASE IF EXISTS d");
    roundtrip("DROP FUNCTION IF EXISTS linear");
    roundtrip("RENAME TABLE a TO b, c TO d");
    roundtrip("TRUNCATE TABLE IF EXISTS t");
    roundtrip("INSERT INTO t (a, b) VALUES (1, 'x'), (2, 'y')");
    roundtrip("INSERT INTO t SELECT a FROM s");
    roundtrip("INSERT INTO FUNCTION remote('host', db.t) VALUES (1)");
    roundtrip("DELETE FROM t WHERE a = 1");
    roundtrip("USE analytics");
    roundtrip("SET max_threads = 4, log_queries = 1");
    roundtrip("SYSTEM FLUSH LOGS");
    roundtrip("SYSTEM FLUSH DISTRIBUTED db.dist");
    roundtrip("SYSTEM RELOAD DICTIONARIES");
    roundtrip("SYSTEM RELOAD DICTIONARY db.dict");
    roundtrip("SYSTEM SYNC REPLICA db.t");
    roundtrip("SYSTEM START MERGES");
    roundtrip("SYSTEM STOP REPLICATED SENDS db.t");
    roundtrip("SYSTEM DROP DNS CACHE");
    roundtrip("OPTIMIZE TABLE t PARTITION 201901 FINAL DEDUPLICATE BY a, b");
    roundtrip("CHECK TABLE t PARTITION 5");
    roundtrip("GRANT SELECT, INSERT ON db.t TO alice WITH GRANT OPTION");
    roundtrip("GRANT SELECT(a, b) ON db.* TO reader");
    roundtrip("EXPLAIN SELECT 1");
    roundtrip("EXPLAIN AST SELECT 1");
    roundtrip("DESCRIBE TABLE db.t");
}

#[test]
fn test_multi_statement_roundtrip() {
    roundtrip("SELECT 1; SELECT 2; USE db");
}

#[test]
fn test_double_format_is_idempotent() {
    // formatting a formatted statement changes nothing
    let sql = "SELECT a, b FROM t WHERE a > 1 ORDER BY b LIMIT 3";
    let once = parse(sql).expect("parse")[0].sql(0);
    let twice = parse(&once).expect("re-parse")[0].sql(0);
    let thrice = parse(&twice).expect("re-re-parse")[0].sql(0);
    assert_eq!(once, twice);
    assert_eq!(twice, thrice);
}
