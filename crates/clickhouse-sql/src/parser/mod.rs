//! Recursive-descent parser for ClickHouse SQL
//!
//! The parser pulls tokens lazily from the [`Tokenizer`] through a small
//! lookahead buffer. Most decisions need a single token of lookahead; a
//! couple of forks (join modifiers vs `LEFT ARRAY JOIN`, `PARTITION ID`)
//! peek one token further. Parsing is predictive and performs no error
//! recovery: the first unexpected token aborts the parse and no partial
//! tree is returned.
//!
//! The grammar is split across submodules by statement family:
//! expressions in `expr`, SELECT in `query`, schema statements in `ddl`,
//! and the remaining statements in `stmt`.

mod ddl;
mod expr;
mod query;
mod stmt;

use crate::ast::Expr;
use crate::error::{Error, Result};
use crate::tokens::{Pos, Span, Token, TokenType, Tokenizer};
use std::collections::VecDeque;

/// Parser over a single source buffer. One instance parses one input.
pub struct Parser {
    tokenizer: Tokenizer,
    lookahead: VecDeque<Token>,
    last_end: Pos,
}

impl Parser {
    /// Construct a parser over a source buffer
    pub fn new(source: &str) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
            lookahead: VecDeque::new(),
            last_end: 0,
        }
    }

    /// Parse zero or more semicolon-separated statements up to EOF.
    /// Empty input yields an empty list.
    pub fn parse_statements(&mut self) -> Result<Vec<Expr>> {
        let mut statements = Vec::new();
        loop {
            while self.accept(TokenType::Semicolon)? {}
            if self.peek_type()? == TokenType::Eof {
                break;
            }
            statements.push(self.parse_statement()?);
            match self.peek_type()? {
                TokenType::Semicolon | TokenType::Eof => {}
                _ => return self.unexpected("; or end of input"),
            }
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Expr> {
        match self.peek_type()? {
            TokenType::Select | TokenType::With | TokenType::LParen => {
                let select = self.parse_select_query()?;
                Ok(Expr::SelectQuery(Box::new(select)))
            }
            TokenType::Insert => self.parse_insert(),
            TokenType::Create | TokenType::Attach => self.parse_create(),
            TokenType::Alter => self.parse_alter(),
            TokenType::Drop | TokenType::Detach => self.parse_drop(),
            TokenType::Rename => self.parse_rename(),
            TokenType::Truncate => self.parse_truncate(),
            TokenType::Optimize => self.parse_optimize(),
            TokenType::System => self.parse_system(),
            TokenType::Check => self.parse_check(),
            TokenType::Delete => self.parse_delete(),
            TokenType::Use => self.parse_use(),
            TokenType::Set => self.parse_set(),
            TokenType::Grant => self.parse_grant(),
            TokenType::Explain => self.parse_explain(),
            TokenType::Describe | TokenType::Desc => self.parse_describe(),
            _ => self.unexpected("a statement"),
        }
    }

    // -- token plumbing ----------------------------------------------------

    fn fill(&mut self, n: usize) -> Result<()> {
        while self.lookahead.len() < n {
            let token = self.tokenizer.next_token()?;
            self.lookahead.push_back(token);
        }
        Ok(())
    }

    pub(crate) fn peek(&mut self) -> Result<&Token> {
        self.fill(1)?;
        Ok(&self.lookahead[0])
    }

    pub(crate) fn peek_type(&mut self) -> Result<TokenType> {
        Ok(self.peek()?.token_type)
    }

    pub(crate) fn peek_type_at(&mut self, n: usize) -> Result<TokenType> {
        self.fill(n + 1)?;
        Ok(self.lookahead[n].token_type)
    }

    pub(crate) fn next(&mut self) -> Result<Token> {
        self.fill(1)?;
        match self.lookahead.pop_front() {
            Some(token) => {
                if !token.is_eof() {
                    self.last_end = token.span.end;
                }
                Ok(token)
            }
            None => Err(Error::Invariant("token lookahead underflow".to_string())),
        }
    }

    /// Consume the next token if it has the given type
    pub(crate) fn accept(&mut self, token_type: TokenType) -> Result<bool> {
        if self.peek_type()? == token_type {
            self.next()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume the next token, failing if it does not have the given type
    pub(crate) fn expect(&mut self, token_type: TokenType) -> Result<Token> {
        let (found, text, pos) = {
            let token = self.peek()?;
            (token.token_type, token.text.clone(), token.span.start)
        };
        if found == token_type {
            self.next()
        } else {
            let message = format!("expected {:?}, found {:?} {:?}", token_type, found, text);
            Err(Error::parse(message, pos))
        }
    }

    /// Fail with an unexpected-token error at the current position
    pub(crate) fn unexpected<T>(&mut self, wanted: &str) -> Result<T> {
        let (found, text, pos) = {
            let token = self.peek()?;
            (token.token_type, token.text.clone(), token.span.start)
        };
        let message = format!("expected {}, found {:?} {:?}", wanted, found, text);
        Err(Error::parse(message, pos))
    }

    /// Start position of the next token
    pub(crate) fn pos(&mut self) -> Result<Pos> {
        Ok(self.peek()?.span.start)
    }

    /// Span from `start` to the end of the last consumed token
    pub(crate) fn span_from(&self, start: Pos) -> Span {
        Span::new(start, self.last_end)
    }

    /// `IF NOT EXISTS`, returning whether it was present
    pub(crate) fn parse_if_not_exists(&mut self) -> Result<bool> {
        if self.accept(TokenType::If)? {
            self.expect(TokenType::Not)?;
            self.expect(TokenType::Exists)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// `IF EXISTS`, returning whether it was present
    pub(crate) fn parse_if_exists(&mut self) -> Result<bool> {
        if self.accept(TokenType::If)? {
            self.expect(TokenType::Exists)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
