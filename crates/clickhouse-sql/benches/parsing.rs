use clickhouse_sql::{parse, Tokenizer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SIMPLE_SELECT: &str = "SELECT a, b, c FROM table1";

const MEDIUM_SELECT: &str = r#"
SELECT
    u.id,
    u.name,
    count(o.id) AS order_count,
    sum(o.total) AS total_spent
FROM users AS u
LEFT ANY JOIN orders AS o ON u.id = o.user_id
PREWHERE u.created_at > '2024-01-01'
WHERE u.status = 'active'
GROUP BY u.id, u.name
HAVING count(o.id) > 5
ORDER BY total_spent DESC
LIMIT 100
"#;

const CREATE_TABLE: &str = r#"
CREATE TABLE analytics.events
(
    event_date Date,
    event_time DateTime,
    user_id UInt64,
    event_type Enum8('view' = 1, 'click' = 2),
    payload String CODEC(ZSTD(3)),
    INDEX type_idx event_type TYPE minmax GRANULARITY 4
)
ENGINE = MergeTree
PARTITION BY toYYYYMM(event_date)
ORDER BY (event_date, user_id)
TTL event_date + INTERVAL 90 DAY
SETTINGS index_granularity=8192
"#;

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    group.bench_function("simple", |b| {
        b.iter(|| Tokenizer::new(black_box(SIMPLE_SELECT)).tokenize().unwrap())
    });
    group.bench_function("medium", |b| {
        b.iter(|| Tokenizer::new(black_box(MEDIUM_SELECT)).tokenize().unwrap())
    });
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.bench_function("simple_select", |b| {
        b.iter(|| parse(black_box(SIMPLE_SELECT)).unwrap())
    });
    group.bench_function("medium_select", |b| {
        b.iter(|| parse(black_box(MEDIUM_SELECT)).unwrap())
    });
    group.bench_function("create_table", |b| {
        b.iter(|| parse(black_box(CREATE_TABLE)).unwrap())
    });
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let statements = parse(MEDIUM_SELECT).unwrap();
    c.bench_function("format/medium_select", |b| {
        b.iter(|| black_box(&statements[0]).sql(0))
    });
}

criterion_group!(benches, bench_tokenize, bench_parse, bench_format);
criterion_main!(benches);
