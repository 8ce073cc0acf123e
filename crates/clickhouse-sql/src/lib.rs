//! ClickHouse SQL parser
//!
//! This library parses ClickHouse SQL into a typed AST and renders the AST
//! back to SQL.
//!
//! # Architecture
//!
//! The crate follows a pipeline architecture:
//! 1. **Tokenizer** - Converts the SQL string to a positioned token stream
//! 2. **Parser** - Builds the AST by recursive descent over the tokens
//! 3. **Formatter** - Renders the AST back to indented SQL
//!
//! Trees are traversed with the visitor protocol in the `visitor` module,
//! and every node serializes to JSON through serde.
//!
//! # Example
//!
//! ```rust,ignore
//! use clickhouse_sql::parse;
//!
//! let statements = parse("SELECT a FROM t WHERE a > 1")?;
//! for statement in &statements {
//!     println!("{}", statement.sql(0));
//! }
//! ```

pub mod ast;
pub mod error;
pub mod format;
pub mod parser;
pub mod tokens;
pub mod visitor;

pub use ast::{Expr, OrderDirection};
pub use error::{Error, Result};
pub use format::{new_line, operator_str};
pub use parser::Parser;
pub use tokens::{Pos, QuoteStyle, Span, Token, TokenType, Tokenizer};
pub use visitor::{walk, Node, Visitor};

/// Parse SQL into a list of statement ASTs.
///
/// # Arguments
/// * `sql` - The SQL string, containing zero or more semicolon-separated
///   statements
pub fn parse(sql: &str) -> Result<Vec<Expr>> {
    Parser::new(sql).parse_statements()
}

/// Parse a single SQL statement.
///
/// Returns an error if the input holds anything other than exactly one
/// statement.
pub fn parse_one(sql: &str) -> Result<Expr> {
    let mut statements = parse(sql)?;
    if statements.len() != 1 {
        return Err(Error::parse(
            format!("expected 1 statement, found {}", statements.len()),
            0,
        ));
    }
    Ok(statements.remove(0))
}
