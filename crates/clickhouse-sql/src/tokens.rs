//! Token types and tokenization for ClickHouse SQL
//!
//! This module defines the token model and the tokenizer that turns a SQL
//! string into a positioned token stream. Whitespace and comments are
//! discarded; everything else is preserved byte-for-byte in the token text
//! so that the pretty-printer can reproduce identifiers, string escapes,
//! and numeric literals exactly as written.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A byte offset into the source SQL
pub type Pos = usize;

/// A half-open byte range in the source SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Starting byte offset
    pub start: Pos,
    /// Ending byte offset (exclusive)
    pub end: Pos,
}

impl Span {
    pub fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    /// Covering span of `self` and `other`
    pub fn merge(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// How an identifier was quoted in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    #[default]
    None,
    BackTicks,
    DoubleQuote,
}

/// A token in the SQL token stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub token_type: TokenType,
    /// The raw text of the token. Identifiers keep their case, numbers keep
    /// their base prefix, string literals hold the content between the
    /// quotes with escapes untouched.
    pub text: String,
    /// Position information
    pub span: Span,
    /// Quote style for identifier tokens
    #[serde(default)]
    pub quote_style: QuoteStyle,
}

impl Token {
    pub fn new(token_type: TokenType, text: impl Into<String>, span: Span) -> Self {
        Self {
            token_type,
            text: text.into(),
            span,
            quote_style: QuoteStyle::None,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }

    /// True for reserved-word tokens
    pub fn is_keyword(&self) -> bool {
        self.token_type.is_keyword()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.token_type, self.text)
    }
}

/// All possible token types in ClickHouse SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Dot,
    Semicolon,
    Colon,
    QMark,
    At,

    // Operators
    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    Pipe,
    DPipe,
    Arrow,
    DColon,

    // Literals
    Number,
    String,
    Identifier,
    QuotedIdentifier,

    // Keywords
    Add,
    Admin,
    After,
    Alias,
    All,
    Alter,
    And,
    Anti,
    Any,
    Array,
    As,
    Asc,
    Asof,
    Attach,
    Between,
    By,
    Case,
    Cast,
    Check,
    Clear,
    Cluster,
    Codec,
    Column,
    Comment,
    Constraint,
    Create,
    Cross,
    Cube,
    Current,
    Database,
    Deduplicate,
    Default,
    Delete,
    Desc,
    Describe,
    Detach,
    Dictionaries,
    Dictionary,
    Distinct,
    Distributed,
    Drop,
    Else,
    End,
    Engine,
    Ephemeral,
    Except,
    Exists,
    Explain,
    Extract,
    Fetches,
    Final,
    Flush,
    Following,
    Format,
    Freeze,
    From,
    Full,
    Function,
    Global,
    Grant,
    Granularity,
    Group,
    Having,
    If,
    ILike,
    In,
    Index,
    Inner,
    Insert,
    Intersect,
    Interval,
    Into,
    Is,
    Join,
    Key,
    Left,
    Like,
    Limit,
    Live,
    Logs,
    Materialized,
    Merges,
    Modify,
    Moves,
    Not,
    Null,
    Offset,
    On,
    Optimize,
    Option,
    Or,
    Order,
    Outer,
    Over,
    Partition,
    Populate,
    Preceding,
    Prewhere,
    Primary,
    Privileges,
    Range,
    Reload,
    Remove,
    Rename,
    Replace,
    Replica,
    Replicated,
    Right,
    Role,
    Rollup,
    Row,
    Rows,
    Sample,
    Select,
    Semi,
    Sends,
    Set,
    Settings,
    Start,
    Stop,
    Sync,
    System,
    Table,
    Temporary,
    Then,
    Ties,
    Timeout,
    To,
    Top,
    Totals,
    Truncate,
    Ttl,
    Type,
    Unbounded,
    Union,
    Use,
    User,
    Using,
    Uuid,
    Values,
    View,
    When,
    Where,
    Window,
    With,

    // Special
    Eof,
}

impl TokenType {
    /// True for reserved-word token types
    pub fn is_keyword(&self) -> bool {
        use TokenType::*;
        !matches!(
            self,
            LParen | RParen | LBracket | RBracket | LBrace | RBrace | Comma | Dot | Semicolon
                | Colon | QMark | At | Plus | Dash | Star | Slash | Percent | Eq | Neq | Lt
                | Lte | Gt | Gte | Pipe | DPipe | Arrow | DColon | Number | String | Identifier
                | QuotedIdentifier | Eof
        )
    }
}

/// Read-only keyword table, initialized on first use. Lookup keys are
/// ASCII-uppercased, making keyword matching case-insensitive.
pub static KEYWORDS: Lazy<HashMap<&'static str, TokenType>> = Lazy::new(|| {
    use TokenType::*;
    HashMap::from([
        ("ADD", Add),
        ("ADMIN", Admin),
        ("AFTER", After),
        ("ALIAS", Alias),
        ("ALL", All),
        ("ALTER", Alter),
        ("AND", And),
        ("ANTI", Anti),
        ("ANY", Any),
        ("ARRAY", Array),
        ("AS", As),
        ("ASC", Asc),
        ("ASOF", Asof),
        ("ATTACH", Attach),
        ("BETWEEN", Between),
        ("BY", By),
        ("CASE", Case),
        ("CAST", Cast),
        ("CHECK", Check),
        ("CLEAR", Clear),
        ("CLUSTER", Cluster),
        ("CODEC", Codec),
        ("COLUMN", Column),
        ("COMMENT", Comment),
        ("CONSTRAINT", Constraint),
        ("CREATE", Create),
        ("CROSS", Cross),
        ("CUBE", Cube),
        ("CURRENT", Current),
        ("DATABASE", Database),
        ("DEDUPLICATE", Deduplicate),
        ("DEFAULT", Default),
        ("DELETE", Delete),
        ("DESC", Desc),
        ("DESCRIBE", Describe),
        ("DETACH", Detach),
        ("DICTIONARIES", Dictionaries),
        ("DICTIONARY", Dictionary),
        ("DISTINCT", Distinct),
        ("DISTRIBUTED", Distributed),
        ("DROP", Drop),
        ("ELSE", Else),
        ("END", End),
        ("ENGINE", Engine),
        ("EPHEMERAL", Ephemeral),
        ("EXCEPT", Except),
        ("EXISTS", Exists),
        ("EXPLAIN", Explain),
        ("EXTRACT", Extract),
        ("FETCHES", Fetches),
        ("FINAL", Final),
        ("FLUSH", Flush),
        ("FOLLOWING", Following),
        ("FORMAT", Format),
        ("FREEZE", Freeze),
        ("FROM", From),
        ("FULL", Full),
        ("FUNCTION", Function),
        ("GLOBAL", Global),
        ("GRANT", Grant),
        ("GRANULARITY", Granularity),
        ("GROUP", Group),
        ("HAVING", Having),
        ("IF", If),
        ("ILIKE", ILike),
        ("IN", In),
        ("INDEX", Index),
        ("INNER", Inner),
        ("INSERT", Insert),
        ("INTERSECT", Intersect),
        ("INTERVAL", Interval),
        ("INTO", Into),
        ("IS", Is),
        ("JOIN", Join),
        ("KEY", Key),
        ("LEFT", Left),
        ("LIKE", Like),
        ("LIMIT", Limit),
        ("LIVE", Live),
        ("LOGS", Logs),
        ("MATERIALIZED", Materialized),
        ("MERGES", Merges),
        ("MODIFY", Modify),
        ("MOVES", Moves),
        ("NOT", Not),
        ("NULL", Null),
        ("OFFSET", Offset),
        ("ON", On),
        ("OPTIMIZE", Optimize),
        ("OPTION", Option),
        ("OR", Or),
        ("ORDER", Order),
        ("OUTER", Outer),
        ("OVER", Over),
        ("PARTITION", Partition),
        ("POPULATE", Populate),
        ("PRECEDING", Preceding),
        ("PREWHERE", Prewhere),
        ("PRIMARY", Primary),
        ("PRIVILEGES", Privileges),
        ("RANGE", Range),
        ("RELOAD", Reload),
        ("REMOVE", Remove),
        ("RENAME", Rename),
        ("REPLACE", Replace),
        ("REPLICA", Replica),
        ("REPLICATED", Replicated),
        ("RIGHT", Right),
        ("ROLE", Role),
        ("ROLLUP", Rollup),
        ("ROW", Row),
        ("ROWS", Rows),
        ("SAMPLE", Sample),
        ("SELECT", Select),
        ("SEMI", Semi),
        ("SENDS", Sends),
        ("SET", Set),
        ("SETTINGS", Settings),
        ("START", Start),
        ("STOP", Stop),
        ("SYNC", Sync),
        ("SYSTEM", System),
        ("TABLE", Table),
        ("TEMPORARY", Temporary),
        ("THEN", Then),
        ("TIES", Ties),
        ("TIMEOUT", Timeout),
        ("TO", To),
        ("TOP", Top),
        ("TOTALS", Totals),
        ("TRUNCATE", Truncate),
        ("TTL", Ttl),
        ("TYPE", Type),
        ("UNBOUNDED", Unbounded),
        ("UNION", Union),
        ("USE", Use),
        ("USER", User),
        ("USING", Using),
        ("UUID", Uuid),
        ("VALUES", Values),
        ("VIEW", View),
        ("WHEN", When),
        ("WHERE", Where),
        ("WINDOW", Window),
        ("WITH", With),
    ])
});

/// Streaming ClickHouse SQL tokenizer.
///
/// `next_token` advances one token per call and keeps returning an EOF token
/// once the input is exhausted. The cursor is the only mutable state.
pub struct Tokenizer {
    chars: Vec<char>,
    size: usize,
    current: usize,
    byte_pos: Pos,
}

impl Tokenizer {
    pub fn new(sql: &str) -> Self {
        let chars: Vec<char> = sql.chars().collect();
        let size = chars.len();
        Self {
            chars,
            size,
            current: 0,
            byte_pos: 0,
        }
    }

    /// Tokenize the whole input, excluding the trailing EOF token
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.is_eof() {
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Scan and return the next token
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace()?;
        if self.is_at_end() {
            return Ok(Token::new(
                TokenType::Eof,
                "",
                Span::new(self.byte_pos, self.byte_pos),
            ));
        }

        let c = self.peek();
        match c {
            '\'' => self.scan_string(),
            '`' => self.scan_quoted_identifier('`', QuoteStyle::BackTicks),
            '"' => self.scan_quoted_identifier('"', QuoteStyle::DoubleQuote),
            _ if c.is_ascii_digit() => self.scan_number(),
            _ if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier_or_keyword(),
            _ => self.scan_operator(),
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.size
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.size {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn advance(&mut self) -> char {
        let c = self.peek();
        if !self.is_at_end() {
            self.current += 1;
            self.byte_pos += c.len_utf8();
        }
        c
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '-' if self.peek_next() == '-' => {
                    self.skip_line_comment();
                }
                '/' if self.peek_next() == '*' => {
                    self.skip_block_comment()?;
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<()> {
        let start = self.byte_pos;
        self.advance(); // /
        self.advance(); // *
        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return Ok(());
            }
            self.advance();
        }
        Err(Error::tokenize("unterminated block comment", start))
    }

    fn scan_identifier_or_keyword(&mut self) -> Result<Token> {
        let start = self.byte_pos;
        let mut text = String::new();
        while !self.is_at_end() {
            let c = self.peek();
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(self.advance());
            } else {
                break;
            }
        }
        let token_type = KEYWORDS
            .get(text.to_ascii_uppercase().as_str())
            .copied()
            .unwrap_or(TokenType::Identifier);
        Ok(Token::new(token_type, text, Span::new(start, self.byte_pos)))
    }

    fn scan_quoted_identifier(&mut self, quote: char, style: QuoteStyle) -> Result<Token> {
        let start = self.byte_pos;
        self.advance(); // opening quote
        let mut text = String::new();
        while !self.is_at_end() {
            let c = self.peek();
            if c == quote {
                self.advance();
                let mut token =
                    Token::new(TokenType::QuotedIdentifier, text, Span::new(start, self.byte_pos));
                token.quote_style = style;
                return Ok(token);
            }
            if c == '\\' {
                text.push(self.advance());
                if !self.is_at_end() {
                    text.push(self.advance());
                }
                continue;
            }
            text.push(self.advance());
        }
        Err(Error::tokenize("unterminated quoted identifier", start))
    }

    fn scan_string(&mut self) -> Result<Token> {
        let start = self.byte_pos;
        self.advance(); // opening '
        let mut text = String::new();
        while !self.is_at_end() {
            let c = self.peek();
            if c == '\'' {
                // doubled quote stays part of the literal
                if self.peek_next() == '\'' {
                    text.push(self.advance());
                    text.push(self.advance());
                    continue;
                }
                self.advance();
                return Ok(Token::new(TokenType::String, text, Span::new(start, self.byte_pos)));
            }
            if c == '\\' {
                text.push(self.advance());
                if self.is_at_end() {
                    break;
                }
                text.push(self.advance());
                continue;
            }
            text.push(self.advance());
        }
        Err(Error::tokenize("unterminated string literal", start))
    }

    fn scan_number(&mut self) -> Result<Token> {
        let start = self.byte_pos;
        let mut text = String::new();

        // hex and octal forms
        if self.peek() == '0' && (self.peek_next() == 'x' || self.peek_next() == 'X') {
            text.push(self.advance());
            text.push(self.advance());
            if !self.peek().is_ascii_hexdigit() {
                return Err(Error::tokenize("malformed hex literal", start));
            }
            while self.peek().is_ascii_hexdigit() {
                text.push(self.advance());
            }
            return Ok(Token::new(TokenType::Number, text, Span::new(start, self.byte_pos)));
        }
        if self.peek() == '0' && (self.peek_next() == 'o' || self.peek_next() == 'O') {
            text.push(self.advance());
            text.push(self.advance());
            if !('0'..='7').contains(&self.peek()) {
                return Err(Error::tokenize("malformed octal literal", start));
            }
            while ('0'..='7').contains(&self.peek()) {
                text.push(self.advance());
            }
            return Ok(Token::new(TokenType::Number, text, Span::new(start, self.byte_pos)));
        }

        while self.peek().is_ascii_digit() {
            text.push(self.advance());
        }
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            text.push(self.advance());
            while self.peek().is_ascii_digit() {
                text.push(self.advance());
            }
        }
        if self.peek() == 'e' || self.peek() == 'E' {
            let mut lookahead = 1;
            let mut sign = false;
            if self.peek_next() == '+' || self.peek_next() == '-' {
                sign = true;
                lookahead = 2;
            }
            let digit_at = self.current + lookahead;
            if digit_at < self.size && self.chars[digit_at].is_ascii_digit() {
                text.push(self.advance()); // e
                if sign {
                    text.push(self.advance());
                }
                while self.peek().is_ascii_digit() {
                    text.push(self.advance());
                }
            }
        }
        Ok(Token::new(TokenType::Number, text, Span::new(start, self.byte_pos)))
    }

    fn scan_operator(&mut self) -> Result<Token> {
        let start = self.byte_pos;
        let c = self.advance();
        let (token_type, text): (TokenType, &str) = match c {
            '(' => (TokenType::LParen, "("),
            ')' => (TokenType::RParen, ")"),
            '[' => (TokenType::LBracket, "["),
            ']' => (TokenType::RBracket, "]"),
            '{' => (TokenType::LBrace, "{"),
            '}' => (TokenType::RBrace, "}"),
            ',' => (TokenType::Comma, ","),
            ';' => (TokenType::Semicolon, ";"),
            '.' => (TokenType::Dot, "."),
            '?' => (TokenType::QMark, "?"),
            '@' => (TokenType::At, "@"),
            '+' => (TokenType::Plus, "+"),
            '*' => (TokenType::Star, "*"),
            '/' => (TokenType::Slash, "/"),
            '%' => (TokenType::Percent, "%"),
            '=' if self.peek() == '=' => {
                self.advance();
                (TokenType::Eq, "==")
            }
            '=' => (TokenType::Eq, "="),
            '-' if self.peek() == '>' => {
                self.advance();
                (TokenType::Arrow, "->")
            }
            '-' => (TokenType::Dash, "-"),
            ':' if self.peek() == ':' => {
                self.advance();
                (TokenType::DColon, "::")
            }
            ':' => (TokenType::Colon, ":"),
            '|' if self.peek() == '|' => {
                self.advance();
                (TokenType::DPipe, "||")
            }
            '|' => (TokenType::Pipe, "|"),
            '<' if self.peek() == '=' => {
                self.advance();
                (TokenType::Lte, "<=")
            }
            '<' if self.peek() == '>' => {
                self.advance();
                (TokenType::Neq, "<>")
            }
            '<' => (TokenType::Lt, "<"),
            '>' if self.peek() == '=' => {
                self.advance();
                (TokenType::Gte, ">=")
            }
            '>' => (TokenType::Gt, ">"),
            '!' if self.peek() == '=' => {
                self.advance();
                (TokenType::Neq, "!=")
            }
            _ => {
                return Err(Error::tokenize(format!("illegal character {c:?}"), start));
            }
        };
        Ok(Token::new(token_type, text, Span::new(start, self.byte_pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(sql: &str) -> Vec<TokenType> {
        Tokenizer::new(sql)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token_type)
            .collect()
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            kinds("select Select SELECT"),
            vec![TokenType::Select, TokenType::Select, TokenType::Select]
        );
    }

    #[test]
    fn test_identifier_case_preserved() {
        let tokens = Tokenizer::new("MyTable").tokenize().unwrap();
        assert_eq!(tokens[0].token_type, TokenType::Identifier);
        assert_eq!(tokens[0].text, "MyTable");
    }

    #[test]
    fn test_quoted_identifiers() {
        let tokens = Tokenizer::new("`a b` \"c d\"").tokenize().unwrap();
        assert_eq!(tokens[0].quote_style, QuoteStyle::BackTicks);
        assert_eq!(tokens[0].text, "a b");
        assert_eq!(tokens[1].quote_style, QuoteStyle::DoubleQuote);
        assert_eq!(tokens[1].text, "c d");
    }

    #[test]
    fn test_string_escapes() {
        let tokens = Tokenizer::new(r"'a\'b' 'c''d'").tokenize().unwrap();
        assert_eq!(tokens[0].text, r"a\'b");
        assert_eq!(tokens[1].text, "c''d");
    }

    #[test]
    fn test_number_forms() {
        let tokens = Tokenizer::new("42 0x1A 0o17 3.14 1e10 2.5E-3").tokenize().unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["42", "0x1A", "0o17", "3.14", "1e10", "2.5E-3"]);
        assert!(tokens.iter().all(|t| t.token_type == TokenType::Number));
    }

    #[test]
    fn test_operators_maximal_munch() {
        assert_eq!(
            kinds("<= >= != <> || -> :: < >"),
            vec![
                TokenType::Lte,
                TokenType::Gte,
                TokenType::Neq,
                TokenType::Neq,
                TokenType::DPipe,
                TokenType::Arrow,
                TokenType::DColon,
                TokenType::Lt,
                TokenType::Gt,
            ]
        );
    }

    #[test]
    fn test_comments_discarded() {
        assert_eq!(
            kinds("SELECT -- trailing\n 1 /* block */ + 2"),
            vec![
                TokenType::Select,
                TokenType::Number,
                TokenType::Plus,
                TokenType::Number
            ]
        );
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = Tokenizer::new("SELECT a").tokenize().unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(7, 8));
    }

    #[test]
    fn test_unterminated_string() {
        let err = Tokenizer::new("'abc").tokenize().unwrap_err();
        assert_eq!(err.pos(), Some(0));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = Tokenizer::new("SELECT /* nope").tokenize().unwrap_err();
        assert_eq!(err.pos(), Some(7));
    }

    #[test]
    fn test_illegal_character() {
        let err = Tokenizer::new("SELECT ^").tokenize().unwrap_err();
        assert!(matches!(err, Error::Tokenize { .. }));
    }

    #[test]
    fn test_sticky_eof() {
        let mut tokenizer = Tokenizer::new("a");
        assert_eq!(tokenizer.next_token().unwrap().token_type, TokenType::Identifier);
        assert!(tokenizer.next_token().unwrap().is_eof());
        assert!(tokenizer.next_token().unwrap().is_eof());
    }
}
