//! Error reporting tests: kinds, positions, and failure semantics.

use clickhouse_sql::{parse, Error};

#[test]
fn test_unterminated_string() {
    let err = parse("SELECT 'abc").unwrap_err();
    match err {
        Error::Tokenize { pos, .. } => assert_eq!(pos, 7),
        other => panic!("expected Tokenize error, got {other:?}"),
    }
}

#[test]
fn test_unterminated_block_comment() {
    let err = parse("SELECT 1 /* never closed").unwrap_err();
    assert!(matches!(err, Error::Tokenize { .. }));
}

#[test]
fn test_illegal_character() {
    let err = parse("SELECT ^").unwrap_err();
    assert!(matches!(err, Error::Tokenize { .. }));
}

#[test]
fn test_unexpected_token_has_position() {
    let err = parse("SELECT 1 2").unwrap_err();
    match err {
        Error::Parse { pos, message } => {
            assert_eq!(pos, 9);
            assert!(message.contains("2"), "message should name the lexeme: {message}");
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_truncated_expression() {
    assert!(matches!(parse("SELECT 1 +"), Err(Error::Parse { .. })));
    assert!(matches!(parse("SELECT (1"), Err(Error::Parse { .. })));
}

#[test]
fn test_expected_keyword() {
    let err = parse("CREATE TABLE t (a UInt8) ENGINE = MergeTree ORDER a").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));

    let err = parse("ALTER TABLE t FROB COLUMN c").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_union_requires_all_or_distinct() {
    assert!(matches!(
        parse("SELECT 1 UNION SELECT 2"),
        Err(Error::Parse { .. })
    ));
}

#[test]
fn test_no_partial_results() {
    // the first statement is fine, the second is broken; nothing is returned
    let err = parse("SELECT 1; SELECT FROM FROM").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_error_message_mentions_expected() {
    let err = parse("DELETE FROM t").unwrap_err();
    match err {
        Error::Parse { message, .. } => {
            assert!(message.contains("Where"), "unexpected message: {message}");
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}
