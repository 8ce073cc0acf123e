//! Remaining statements: INSERT, DELETE, USE, SET, SYSTEM, OPTIMIZE,
//! CHECK, GRANT, EXPLAIN, DESCRIBE

use super::Parser;
use crate::ast::*;
use crate::error::Result;
use crate::tokens::TokenType;

impl Parser {
    pub(crate) fn parse_insert(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Insert)?;
        self.expect(TokenType::Into)?;
        self.accept(TokenType::Table)?;

        let table = if self.accept(TokenType::Function)? {
            let name_start = self.pos()?;
            let name = self.parse_ident()?;
            let args = self.parse_table_arg_list()?;
            Expr::TableFunctionExpr(Box::new(TableFunctionExpr {
                span: self.span_from(name_start),
                name,
                args,
            }))
        } else {
            Expr::TableIdentifier(Box::new(self.parse_table_identifier()?))
        };

        let column_names = if self.peek_type()? == TokenType::LParen {
            let names_start = self.pos()?;
            self.next()?;
            let mut column_names = Vec::new();
            column_names.push(self.parse_nested_identifier()?);
            while self.accept(TokenType::Comma)? {
                column_names.push(self.parse_nested_identifier()?);
            }
            self.expect(TokenType::RParen)?;
            Some(ColumnNamesExpr {
                span: self.span_from(names_start),
                column_names,
            })
        } else {
            None
        };

        let format = if self.peek_type()? == TokenType::Format {
            let format_start = self.pos()?;
            self.next()?;
            let format = self.parse_ident()?;
            Some(FormatExpr {
                span: self.span_from(format_start),
                format,
            })
        } else {
            None
        };

        let mut values = Vec::new();
        let mut select = None;
        match self.peek_type()? {
            TokenType::Values => {
                self.next()?;
                values.push(self.parse_values_tuple()?);
                while self.accept(TokenType::Comma)? {
                    values.push(self.parse_values_tuple()?);
                }
            }
            TokenType::Select | TokenType::With => {
                select = Some(Box::new(self.parse_select_query()?));
            }
            _ if format.is_some() => {
                // INSERT INTO t FORMAT fmt: data arrives out of band
            }
            _ => return self.unexpected("VALUES, SELECT, or FORMAT"),
        }

        Ok(Expr::InsertExpr(Box::new(InsertExpr {
            span: self.span_from(start),
            table,
            column_names,
            format,
            values,
            select,
        })))
    }

    fn parse_values_tuple(&mut self) -> Result<ValuesExpr> {
        let start = self.pos()?;
        self.expect(TokenType::LParen)?;
        let mut values = Vec::new();
        if self.peek_type()? != TokenType::RParen {
            values.push(self.parse_expr()?);
            while self.accept(TokenType::Comma)? {
                values.push(self.parse_expr()?);
            }
        }
        self.expect(TokenType::RParen)?;
        Ok(ValuesExpr {
            span: self.span_from(start),
            values,
        })
    }

    pub(crate) fn parse_delete(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Delete)?;
        self.expect(TokenType::From)?;
        let table = self.parse_table_identifier()?;
        let on_cluster = self.parse_on_cluster()?;
        self.expect(TokenType::Where)?;
        let where_expr = self.parse_expr()?;
        Ok(Expr::DeleteFromExpr(Box::new(DeleteFromExpr {
            span: self.span_from(start),
            table,
            on_cluster,
            where_expr: Some(where_expr),
        })))
    }

    pub(crate) fn parse_use(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Use)?;
        let database = self.parse_ident()?;
        Ok(Expr::UseExpr(Box::new(UseExpr {
            span: self.span_from(start),
            database,
        })))
    }

    pub(crate) fn parse_set(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Set)?;
        let settings_start = self.pos()?;
        let mut items = Vec::new();
        items.push(self.parse_set_pair()?);
        while self.accept(TokenType::Comma)? {
            items.push(self.parse_set_pair()?);
        }
        Ok(Expr::SetExpr(Box::new(SetExpr {
            span: self.span_from(start),
            settings: SettingsExprList {
                span: self.span_from(settings_start),
                items,
            },
        })))
    }

    fn parse_set_pair(&mut self) -> Result<SettingsExpr> {
        let start = self.pos()?;
        let name = self.parse_ident()?;
        self.expect(TokenType::Eq)?;
        let expr = self.parse_expr()?;
        Ok(SettingsExpr {
            span: self.span_from(start),
            name,
            expr,
        })
    }

    // -- SYSTEM ------------------------------------------------------------

    pub(crate) fn parse_system(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::System)?;
        let inner = match self.peek_type()? {
            TokenType::Flush => self.parse_system_flush()?,
            TokenType::Reload => self.parse_system_reload()?,
            TokenType::Sync => self.parse_system_sync()?,
            TokenType::Start | TokenType::Stop => self.parse_system_ctrl()?,
            TokenType::Drop => self.parse_system_drop()?,
            _ => return self.unexpected("FLUSH, RELOAD, SYNC, START, STOP, or DROP"),
        };
        Ok(Expr::SystemExpr(Box::new(SystemExpr {
            span: self.span_from(start),
            expr: inner,
        })))
    }

    fn parse_system_flush(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Flush)?;
        if self.accept(TokenType::Logs)? {
            return Ok(Expr::SystemFlushExpr(Box::new(SystemFlushExpr {
                span: self.span_from(start),
                logs: true,
                distributed: None,
            })));
        }
        self.expect(TokenType::Distributed)?;
        let distributed = self.parse_table_identifier()?;
        Ok(Expr::SystemFlushExpr(Box::new(SystemFlushExpr {
            span: self.span_from(start),
            logs: false,
            distributed: Some(distributed),
        })))
    }

    fn parse_system_reload(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Reload)?;
        let (kind, dictionary) = match self.peek_type()? {
            TokenType::Dictionaries => {
                self.next()?;
                ("DICTIONARIES".to_string(), None)
            }
            TokenType::Dictionary => {
                self.next()?;
                let table = self.parse_table_identifier()?;
                ("DICTIONARY".to_string(), Some(table))
            }
            TokenType::Identifier => {
                let token = self.next()?;
                (token.text.to_ascii_uppercase(), None)
            }
            _ => return self.unexpected("DICTIONARIES, DICTIONARY, or a reload target"),
        };
        Ok(Expr::SystemReloadExpr(Box::new(SystemReloadExpr {
            span: self.span_from(start),
            kind,
            dictionary,
        })))
    }

    fn parse_system_sync(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Sync)?;
        self.expect(TokenType::Replica)?;
        let cluster = self.parse_table_identifier()?;
        Ok(Expr::SystemSyncExpr(Box::new(SystemSyncExpr {
            span: self.span_from(start),
            cluster,
        })))
    }

    fn parse_system_ctrl(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let command = self.next()?.text.to_ascii_uppercase();
        let kind = match self.peek_type()? {
            TokenType::Replicated => {
                self.next()?;
                self.expect(TokenType::Sends)?;
                "REPLICATED SENDS".to_string()
            }
            TokenType::Distributed => {
                self.next()?;
                self.expect(TokenType::Sends)?;
                "DISTRIBUTED SENDS".to_string()
            }
            TokenType::Fetches => {
                self.next()?;
                "FETCHES".to_string()
            }
            TokenType::Merges => {
                self.next()?;
                "MERGES".to_string()
            }
            TokenType::Moves => {
                self.next()?;
                "MOVES".to_string()
            }
            TokenType::Ttl => {
                self.next()?;
                self.expect(TokenType::Merges)?;
                "TTL MERGES".to_string()
            }
            _ => return self.unexpected("a START/STOP target"),
        };
        let cluster = match self.peek_type()? {
            TokenType::Identifier | TokenType::QuotedIdentifier => {
                Some(self.parse_table_identifier()?)
            }
            _ => None,
        };
        Ok(Expr::SystemCtrlExpr(Box::new(SystemCtrlExpr {
            span: self.span_from(start),
            command,
            kind,
            cluster,
        })))
    }

    fn parse_system_drop(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Drop)?;
        // cache names read as free words: DNS CACHE, MARK CACHE, ...
        let mut words = Vec::new();
        while matches!(self.peek_type()?, TokenType::Identifier) {
            words.push(self.next()?.text.to_ascii_uppercase());
        }
        if words.is_empty() {
            return self.unexpected("a SYSTEM DROP target");
        }
        Ok(Expr::SystemDropExpr(Box::new(SystemDropExpr {
            span: self.span_from(start),
            kind: words.join(" "),
        })))
    }

    // -- OPTIMIZE / CHECK ---------------------------------------------------

    pub(crate) fn parse_optimize(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Optimize)?;
        self.expect(TokenType::Table)?;
        let table = self.parse_table_identifier()?;
        let on_cluster = self.parse_on_cluster()?;
        let partition = if self.peek_type()? == TokenType::Partition {
            Some(self.parse_partition_expr()?)
        } else {
            None
        };
        let has_final = self.accept(TokenType::Final)?;
        let deduplicate = if self.peek_type()? == TokenType::Deduplicate {
            let dedup_start = self.pos()?;
            self.next()?;
            let by = if self.accept(TokenType::By)? {
                Some(self.parse_column_expr_list()?)
            } else {
                None
            };
            let except = if self.accept(TokenType::Except)? {
                Some(self.parse_column_expr_list()?)
            } else {
                None
            };
            Some(DeduplicateExpr {
                span: self.span_from(dedup_start),
                by,
                except,
            })
        } else {
            None
        };
        Ok(Expr::OptimizeExpr(Box::new(OptimizeExpr {
            span: self.span_from(start),
            table,
            on_cluster,
            partition,
            has_final,
            deduplicate,
        })))
    }

    pub(crate) fn parse_check(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Check)?;
        self.expect(TokenType::Table)?;
        let table = self.parse_table_identifier()?;
        let partition = if self.peek_type()? == TokenType::Partition {
            Some(self.parse_partition_expr()?)
        } else {
            None
        };
        Ok(Expr::CheckExpr(Box::new(CheckExpr {
            span: self.span_from(start),
            table,
            partition,
        })))
    }

    // -- GRANT --------------------------------------------------------------

    pub(crate) fn parse_grant(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Grant)?;
        let on_cluster = self.parse_on_cluster()?;

        let mut privileges = Vec::new();
        privileges.push(self.parse_privilege()?);
        while self.accept(TokenType::Comma)? {
            privileges.push(self.parse_privilege()?);
        }

        self.expect(TokenType::On)?;
        let on = self.parse_table_identifier()?;

        self.expect(TokenType::To)?;
        let mut to = Vec::new();
        to.push(self.parse_ident()?);
        while self.accept(TokenType::Comma)? {
            to.push(self.parse_ident()?);
        }

        let mut with_options = Vec::new();
        while self.accept(TokenType::With)? {
            let option = self.parse_ident()?.name.to_ascii_uppercase();
            self.expect(TokenType::Option)?;
            with_options.push(option);
        }

        Ok(Expr::GrantPrivilegeExpr(Box::new(GrantPrivilegeExpr {
            span: self.span_from(start),
            on_cluster,
            privileges,
            on,
            to,
            with_options,
        })))
    }

    /// A privilege keyword sequence such as `SELECT`, `ALTER DELETE`, or
    /// `CREATE TEMPORARY TABLE`, optionally followed by a column list
    fn parse_privilege(&mut self) -> Result<PrivilegeExpr> {
        let start = self.pos()?;
        let mut keywords = Vec::new();
        loop {
            let token_type = self.peek_type()?;
            let is_word = token_type == TokenType::Identifier || token_type.is_keyword();
            if !is_word || token_type == TokenType::On {
                break;
            }
            keywords.push(self.next()?.text.to_ascii_uppercase());
        }
        if keywords.is_empty() {
            return self.unexpected("a privilege");
        }
        let params = if self.peek_type()? == TokenType::LParen {
            let params_start = self.pos()?;
            self.next()?;
            let mut items = Vec::new();
            if self.peek_type()? != TokenType::RParen {
                items.push(self.parse_expr()?);
                while self.accept(TokenType::Comma)? {
                    items.push(self.parse_expr()?);
                }
            }
            self.expect(TokenType::RParen)?;
            let span = self.span_from(params_start);
            Some(ParamExprList {
                span,
                items: ColumnExprList {
                    span,
                    has_distinct: false,
                    items,
                },
                column_arg_list: None,
            })
        } else {
            None
        };
        Ok(PrivilegeExpr {
            span: self.span_from(start),
            keywords,
            params,
        })
    }

    // -- EXPLAIN / DESCRIBE -------------------------------------------------

    pub(crate) fn parse_explain(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Explain)?;
        let kind = {
            let token = self.peek()?;
            if token.token_type == TokenType::Identifier
                && matches!(
                    token.text.to_ascii_uppercase().as_str(),
                    "AST" | "SYNTAX" | "PLAN" | "PIPELINE" | "ESTIMATE"
                )
            {
                self.next()?.text.to_ascii_uppercase()
            } else {
                String::new()
            }
        };
        let statement = self.parse_statement()?;
        Ok(Expr::ExplainExpr(Box::new(ExplainExpr {
            span: self.span_from(start),
            kind,
            statement,
        })))
    }

    pub(crate) fn parse_describe(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.next()?;
        self.accept(TokenType::Table)?;
        let table = self.parse_table_identifier()?;
        Ok(Expr::DescribeStmt(Box::new(DescribeStmt {
            span: self.span_from(start),
            table,
        })))
    }
}
