//! Schema statements: CREATE, ALTER, DROP, RENAME, TRUNCATE

use super::Parser;
use crate::ast::*;
use crate::error::Result;
use crate::tokens::{Pos, TokenType};

impl Parser {
    pub(crate) fn parse_create(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        // ATTACH re-creates an existing object and parses like CREATE
        self.next()?;
        match self.peek_type()? {
            TokenType::Database => {
                self.next()?;
                self.parse_create_database(start)
            }
            TokenType::Temporary => {
                self.next()?;
                self.expect(TokenType::Table)?;
                self.parse_create_table(start, true)
            }
            TokenType::Table => {
                self.next()?;
                self.parse_create_table(start, false)
            }
            TokenType::Materialized => {
                self.next()?;
                self.expect(TokenType::View)?;
                self.parse_create_materialized_view(start)
            }
            TokenType::Live => {
                self.next()?;
                self.expect(TokenType::View)?;
                self.parse_create_live_view(start)
            }
            TokenType::View => {
                self.next()?;
                self.parse_create_view(start)
            }
            TokenType::Function => {
                self.next()?;
                self.parse_create_function(start)
            }
            TokenType::Role => {
                self.next()?;
                self.parse_create_role(start, "ROLE")
            }
            TokenType::User => {
                self.next()?;
                self.parse_create_role(start, "USER")
            }
            _ => self.unexpected("DATABASE, TABLE, VIEW, FUNCTION, ROLE, or USER"),
        }
    }

    fn parse_create_database(&mut self, start: Pos) -> Result<Expr> {
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_ident()?;
        let on_cluster = self.parse_on_cluster()?;
        let engine = if self.peek_type()? == TokenType::Engine {
            Some(self.parse_engine()?)
        } else {
            None
        };
        Ok(Expr::CreateDatabase(Box::new(CreateDatabase {
            span: self.span_from(start),
            name,
            if_not_exists,
            on_cluster,
            engine,
        })))
    }

    fn parse_create_table(&mut self, start: Pos, has_temporary: bool) -> Result<Expr> {
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_table_identifier()?;
        let uuid = self.parse_uuid_clause()?;
        let on_cluster = self.parse_on_cluster()?;

        let mut table_schema = if self.peek_type()? == TokenType::LParen {
            Some(self.parse_table_schema_columns()?)
        } else {
            None
        };

        let mut engine = if self.peek_type()? == TokenType::Engine {
            Some(self.parse_engine()?)
        } else {
            None
        };

        let mut sub_query = None;
        if self.peek_type()? == TokenType::As {
            let as_start = self.pos()?;
            self.next()?;
            match self.peek_type()? {
                TokenType::Select | TokenType::With => {
                    let select = self.parse_select_query()?;
                    sub_query = Some(SubQueryExpr {
                        span: self.span_from(as_start),
                        select,
                    });
                }
                TokenType::LParen => {
                    self.next()?;
                    let select = self.parse_select_query()?;
                    self.expect(TokenType::RParen)?;
                    sub_query = Some(SubQueryExpr {
                        span: self.span_from(as_start),
                        select,
                    });
                }
                _ => {
                    table_schema = Some(self.parse_table_schema_source(as_start)?);
                }
            }
        }

        if engine.is_none() && self.peek_type()? == TokenType::Engine {
            engine = Some(self.parse_engine()?);
        }

        if sub_query.is_none() && self.accept(TokenType::As)? {
            let as_start = self.pos()?;
            let select = if self.accept(TokenType::LParen)? {
                let select = self.parse_select_query()?;
                self.expect(TokenType::RParen)?;
                select
            } else {
                self.parse_select_query()?
            };
            sub_query = Some(SubQueryExpr {
                span: self.span_from(as_start),
                select,
            });
        }

        Ok(Expr::CreateTable(Box::new(CreateTable {
            span: self.span_from(start),
            name,
            if_not_exists,
            uuid,
            on_cluster,
            table_schema,
            engine,
            sub_query,
            has_temporary,
        })))
    }

    /// `AS other_table` or `AS table_function(...)` clone sources
    fn parse_table_schema_source(&mut self, start: Pos) -> Result<TableSchemaExpr> {
        let first = self.parse_ident()?;
        if self.peek_type()? == TokenType::LParen {
            let args = self.parse_table_arg_list()?;
            let span = self.span_from(start);
            return Ok(TableSchemaExpr {
                span,
                columns: Vec::new(),
                alias_table: None,
                table_function: Some(TableFunctionExpr {
                    span,
                    name: first,
                    args,
                }),
            });
        }
        let alias_table = if self.accept(TokenType::Dot)? {
            let table = self.parse_ident()?;
            TableIdentifier {
                span: self.span_from(start),
                database: Some(first),
                table,
            }
        } else {
            TableIdentifier {
                span: self.span_from(start),
                database: None,
                table: first,
            }
        };
        Ok(TableSchemaExpr {
            span: self.span_from(start),
            columns: Vec::new(),
            alias_table: Some(alias_table),
            table_function: None,
        })
    }

    fn parse_create_view(&mut self, start: Pos) -> Result<Expr> {
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_table_identifier()?;
        let uuid = self.parse_uuid_clause()?;
        let on_cluster = self.parse_on_cluster()?;
        let table_schema = if self.peek_type()? == TokenType::LParen {
            Some(self.parse_table_schema_columns()?)
        } else {
            None
        };
        let sub_query = self.parse_as_select()?;
        Ok(Expr::CreateView(Box::new(CreateView {
            span: self.span_from(start),
            name,
            if_not_exists,
            uuid,
            on_cluster,
            table_schema,
            sub_query,
        })))
    }

    fn parse_create_materialized_view(&mut self, start: Pos) -> Result<Expr> {
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_table_identifier()?;
        let on_cluster = self.parse_on_cluster()?;

        let destination = if self.peek_type()? == TokenType::To {
            Some(self.parse_destination()?)
        } else {
            None
        };
        let engine = if self.peek_type()? == TokenType::Engine {
            Some(self.parse_engine()?)
        } else {
            None
        };
        let populate = self.accept(TokenType::Populate)?;
        let sub_query = self.parse_as_select()?;

        Ok(Expr::CreateMaterializedView(Box::new(
            CreateMaterializedView {
                span: self.span_from(start),
                name,
                if_not_exists,
                on_cluster,
                engine,
                destination,
                populate,
                sub_query,
            },
        )))
    }

    fn parse_create_live_view(&mut self, start: Pos) -> Result<Expr> {
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_table_identifier()?;
        let uuid = self.parse_uuid_clause()?;
        let on_cluster = self.parse_on_cluster()?;

        let with_timeout = if self.peek_type()? == TokenType::With
            && self.peek_type_at(1)? == TokenType::Timeout
        {
            let timeout_start = self.pos()?;
            self.next()?;
            self.next()?;
            let token = self.expect(TokenType::Number)?;
            let number = NumberLiteral::new(token.span, token.text);
            Some(WithTimeoutExpr {
                span: self.span_from(timeout_start),
                number,
            })
        } else {
            None
        };

        let destination = if self.peek_type()? == TokenType::To {
            Some(self.parse_destination()?)
        } else {
            None
        };
        let table_schema = if self.peek_type()? == TokenType::LParen {
            Some(self.parse_table_schema_columns()?)
        } else {
            None
        };
        let sub_query = self.parse_as_select()?;

        Ok(Expr::CreateLiveView(Box::new(CreateLiveView {
            span: self.span_from(start),
            name,
            if_not_exists,
            uuid,
            on_cluster,
            destination,
            table_schema,
            with_timeout,
            sub_query,
        })))
    }

    fn parse_create_function(&mut self, start: Pos) -> Result<Expr> {
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_ident()?;
        let on_cluster = self.parse_on_cluster()?;
        self.expect(TokenType::As)?;

        let params_start = self.pos()?;
        let mut items = Vec::new();
        if self.accept(TokenType::LParen)? {
            if self.peek_type()? != TokenType::RParen {
                items.push(Expr::Ident(Box::new(self.parse_ident()?)));
                while self.accept(TokenType::Comma)? {
                    items.push(Expr::Ident(Box::new(self.parse_ident()?)));
                }
            }
            self.expect(TokenType::RParen)?;
        } else {
            items.push(Expr::Ident(Box::new(self.parse_ident()?)));
        }
        let params_span = self.span_from(params_start);
        let params = ParamExprList {
            span: params_span,
            items: ColumnExprList {
                span: params_span,
                has_distinct: false,
                items,
            },
            column_arg_list: None,
        };

        self.expect(TokenType::Arrow)?;
        let expr = self.parse_expr()?;

        Ok(Expr::CreateFunction(Box::new(CreateFunction {
            span: self.span_from(start),
            if_not_exists,
            name,
            on_cluster,
            params,
            expr,
        })))
    }

    fn parse_create_role(&mut self, start: Pos, target: &str) -> Result<Expr> {
        let or_replace = if self.peek_type()? == TokenType::Or {
            self.next()?;
            self.expect(TokenType::Replace)?;
            true
        } else {
            false
        };
        let if_not_exists = self.parse_if_not_exists()?;

        let mut names = Vec::new();
        names.push(self.parse_role_name()?);
        while self.accept(TokenType::Comma)? {
            names.push(self.parse_role_name()?);
        }

        let access_storage_type = if self.accept(TokenType::In)? {
            Some(self.parse_ident()?)
        } else {
            None
        };

        let settings = if self.accept(TokenType::Settings)? {
            self.parse_role_settings()?
        } else {
            Vec::new()
        };

        Ok(Expr::CreateRole(Box::new(CreateRole {
            span: self.span_from(start),
            target: target.to_string(),
            if_not_exists,
            or_replace,
            names,
            access_storage_type,
            settings,
        })))
    }

    pub(crate) fn parse_role_name(&mut self) -> Result<RoleName> {
        let start = self.pos()?;
        let name = self.parse_ident()?;
        let scope = if self.accept(TokenType::At)? {
            let token = self.expect(TokenType::String)?;
            Some(StringLiteral {
                span: token.span,
                literal: token.text,
            })
        } else {
            None
        };
        let on_cluster = self.parse_on_cluster()?;
        Ok(RoleName {
            span: self.span_from(start),
            name,
            scope,
            on_cluster,
        })
    }

    fn parse_role_settings(&mut self) -> Result<Vec<RoleSetting>> {
        let mut settings = Vec::new();
        settings.push(self.parse_role_setting()?);
        while self.accept(TokenType::Comma)? {
            settings.push(self.parse_role_setting()?);
        }
        Ok(settings)
    }

    /// One role setting: `name [= value] ... [modifier]`. The trailing
    /// bare word, if any, is the modifier (READONLY, WRITABLE, CONST).
    fn parse_role_setting(&mut self) -> Result<RoleSetting> {
        let start = self.pos()?;
        let mut pairs = Vec::new();
        while self.peek_type()? == TokenType::Identifier {
            let pair_start = self.pos()?;
            let name = self.parse_ident()?;
            self.accept(TokenType::Eq)?;
            let value = match self.peek_type()? {
                TokenType::Number | TokenType::String => Some(self.parse_expr()?),
                _ => None,
            };
            pairs.push(SettingPair {
                span: self.span_from(pair_start),
                name,
                value,
            });
        }
        let modifier = if pairs.len() > 1 && pairs.last().map_or(false, |p| p.value.is_none()) {
            pairs.pop().map(|p| p.name)
        } else {
            None
        };
        Ok(RoleSetting {
            span: self.span_from(start),
            pairs,
            modifier,
        })
    }

    // -- ALTER -------------------------------------------------------------

    pub(crate) fn parse_alter(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Alter)?;
        match self.peek_type()? {
            TokenType::Table => {
                self.next()?;
                self.parse_alter_table(start)
            }
            TokenType::Role => {
                self.next()?;
                self.parse_alter_role(start, "ROLE")
            }
            TokenType::User => {
                self.next()?;
                self.parse_alter_role(start, "USER")
            }
            _ => self.unexpected("TABLE, ROLE, or USER"),
        }
    }

    fn parse_alter_table(&mut self, start: Pos) -> Result<Expr> {
        let table = self.parse_table_identifier()?;
        let on_cluster = self.parse_on_cluster()?;
        let mut alter_exprs = Vec::new();
        alter_exprs.push(self.parse_alter_table_op()?);
        while self.accept(TokenType::Comma)? {
            alter_exprs.push(self.parse_alter_table_op()?);
        }
        Ok(Expr::AlterTable(Box::new(AlterTable {
            span: self.span_from(start),
            table,
            on_cluster,
            alter_exprs,
        })))
    }

    fn parse_alter_table_op(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        match self.peek_type()? {
            TokenType::Add => {
                self.next()?;
                match self.peek_type()? {
                    TokenType::Column => {
                        self.next()?;
                        let if_not_exists = self.parse_if_not_exists()?;
                        let column = self.parse_column_def()?;
                        let after = if self.accept(TokenType::After)? {
                            Some(self.parse_nested_identifier()?)
                        } else {
                            None
                        };
                        Ok(Expr::AlterTableAddColumn(Box::new(AlterTableAddColumn {
                            span: self.span_from(start),
                            if_not_exists,
                            column,
                            after,
                        })))
                    }
                    TokenType::Index => {
                        self.next()?;
                        let if_not_exists = self.parse_if_not_exists()?;
                        let index = self.parse_table_index()?;
                        let after = if self.accept(TokenType::After)? {
                            Some(self.parse_nested_identifier()?)
                        } else {
                            None
                        };
                        Ok(Expr::AlterTableAddIndex(Box::new(AlterTableAddIndex {
                            span: self.span_from(start),
                            if_not_exists,
                            index,
                            after,
                        })))
                    }
                    _ => self.unexpected("COLUMN or INDEX"),
                }
            }
            TokenType::Drop => {
                self.next()?;
                match self.peek_type()? {
                    TokenType::Column => {
                        self.next()?;
                        let if_exists = self.parse_if_exists()?;
                        let column_name = self.parse_nested_identifier()?;
                        Ok(Expr::AlterTableDropColumn(Box::new(AlterTableDropColumn {
                            span: self.span_from(start),
                            if_exists,
                            column_name,
                        })))
                    }
                    TokenType::Index => {
                        self.next()?;
                        let if_exists = self.parse_if_exists()?;
                        let index_name = self.parse_nested_identifier()?;
                        Ok(Expr::AlterTableDropIndex(Box::new(AlterTableDropIndex {
                            span: self.span_from(start),
                            if_exists,
                            index_name,
                        })))
                    }
                    TokenType::Partition => {
                        let partition = self.parse_partition_expr()?;
                        Ok(Expr::AlterTableDropPartition(Box::new(
                            AlterTableDropPartition {
                                span: self.span_from(start),
                                partition,
                            },
                        )))
                    }
                    _ => self.unexpected("COLUMN, INDEX, or PARTITION"),
                }
            }
            TokenType::Modify => {
                self.next()?;
                match self.peek_type()? {
                    TokenType::Column => {
                        self.next()?;
                        let if_exists = self.parse_if_exists()?;
                        let column = self.parse_column_def()?;
                        let remove_property = if self.peek_type()? == TokenType::Remove {
                            let remove_start = self.pos()?;
                            self.next()?;
                            let prop_start = self.pos()?;
                            let name = self.parse_ident()?;
                            Some(RemovePropertyType {
                                span: self.span_from(remove_start),
                                property_type: PropertyTypeExpr {
                                    span: self.span_from(prop_start),
                                    name,
                                },
                            })
                        } else {
                            None
                        };
                        Ok(Expr::AlterTableModifyColumn(Box::new(
                            AlterTableModifyColumn {
                                span: self.span_from(start),
                                if_exists,
                                column,
                                remove_property,
                            },
                        )))
                    }
                    TokenType::Ttl => {
                        self.next()?;
                        let ttl_start = self.pos()?;
                        let expr = self.parse_expr()?;
                        Ok(Expr::AlterTableModifyTtl(Box::new(AlterTableModifyTtl {
                            span: self.span_from(start),
                            ttl: TtlExpr {
                                span: self.span_from(ttl_start),
                                expr,
                            },
                        })))
                    }
                    _ => self.unexpected("COLUMN or TTL"),
                }
            }
            TokenType::Rename => {
                self.next()?;
                self.expect(TokenType::Column)?;
                let if_exists = self.parse_if_exists()?;
                let old_name = self.parse_nested_identifier()?;
                self.expect(TokenType::To)?;
                let new_name = self.parse_nested_identifier()?;
                Ok(Expr::AlterTableRenameColumn(Box::new(
                    AlterTableRenameColumn {
                        span: self.span_from(start),
                        if_exists,
                        old_name,
                        new_name,
                    },
                )))
            }
            TokenType::Clear => {
                self.next()?;
                match self.peek_type()? {
                    TokenType::Column => {
                        self.next()?;
                        let if_exists = self.parse_if_exists()?;
                        let column_name = self.parse_nested_identifier()?;
                        let partition = if self.accept(TokenType::In)? {
                            Some(self.parse_partition_expr()?)
                        } else {
                            None
                        };
                        Ok(Expr::AlterTableClearColumn(Box::new(
                            AlterTableClearColumn {
                                span: self.span_from(start),
                                if_exists,
                                column_name,
                                partition,
                            },
                        )))
                    }
                    TokenType::Index => {
                        self.next()?;
                        let if_exists = self.parse_if_exists()?;
                        let index_name = self.parse_nested_identifier()?;
                        let partition = if self.accept(TokenType::In)? {
                            Some(self.parse_partition_expr()?)
                        } else {
                            None
                        };
                        Ok(Expr::AlterTableClearIndex(Box::new(AlterTableClearIndex {
                            span: self.span_from(start),
                            if_exists,
                            index_name,
                            partition,
                        })))
                    }
                    _ => self.unexpected("COLUMN or INDEX"),
                }
            }
            TokenType::Attach => {
                self.next()?;
                let partition = self.parse_partition_expr()?;
                let from = if self.accept(TokenType::From)? {
                    Some(self.parse_table_identifier()?)
                } else {
                    None
                };
                Ok(Expr::AlterTableAttachPartition(Box::new(
                    AlterTableAttachPartition {
                        span: self.span_from(start),
                        partition,
                        from,
                    },
                )))
            }
            TokenType::Detach => {
                self.next()?;
                let partition = self.parse_partition_expr()?;
                let settings = if self.peek_type()? == TokenType::Settings {
                    Some(self.parse_settings_list()?)
                } else {
                    None
                };
                Ok(Expr::AlterTableDetachPartition(Box::new(
                    AlterTableDetachPartition {
                        span: self.span_from(start),
                        partition,
                        settings,
                    },
                )))
            }
            TokenType::Freeze => {
                self.next()?;
                let partition = if self.peek_type()? == TokenType::Partition {
                    Some(self.parse_partition_expr()?)
                } else {
                    None
                };
                Ok(Expr::AlterTableFreezePartition(Box::new(
                    AlterTableFreezePartition {
                        span: self.span_from(start),
                        partition,
                    },
                )))
            }
            TokenType::Replace => {
                self.next()?;
                let partition = self.parse_partition_expr()?;
                self.expect(TokenType::From)?;
                let table = self.parse_table_identifier()?;
                Ok(Expr::AlterTableReplacePartition(Box::new(
                    AlterTableReplacePartition {
                        span: self.span_from(start),
                        partition,
                        table,
                    },
                )))
            }
            TokenType::Remove => {
                self.next()?;
                self.expect(TokenType::Ttl)?;
                Ok(Expr::AlterTableRemoveTtl(Box::new(AlterTableRemoveTtl {
                    span: self.span_from(start),
                })))
            }
            _ => self.unexpected("an ALTER TABLE operation"),
        }
    }

    fn parse_alter_role(&mut self, start: Pos, target: &str) -> Result<Expr> {
        let if_exists = self.parse_if_exists()?;
        let mut rename_pairs = Vec::new();
        rename_pairs.push(self.parse_role_rename_pair()?);
        while self.accept(TokenType::Comma)? {
            rename_pairs.push(self.parse_role_rename_pair()?);
        }
        let settings = if self.accept(TokenType::Settings)? {
            self.parse_role_settings()?
        } else {
            Vec::new()
        };
        Ok(Expr::AlterRole(Box::new(AlterRole {
            span: self.span_from(start),
            target: target.to_string(),
            if_exists,
            rename_pairs,
            settings,
        })))
    }

    fn parse_role_rename_pair(&mut self) -> Result<RoleRenamePair> {
        let start = self.pos()?;
        let role_name = self.parse_role_name()?;
        let new_name = if self.peek_type()? == TokenType::Rename {
            self.next()?;
            self.expect(TokenType::To)?;
            Some(self.parse_ident()?)
        } else {
            None
        };
        Ok(RoleRenamePair {
            span: self.span_from(start),
            role_name,
            new_name,
        })
    }

    // -- DROP / RENAME / TRUNCATE -------------------------------------------

    pub(crate) fn parse_drop(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let verb = self.next()?;
        let detach = verb.token_type == TokenType::Detach;
        match self.peek_type()? {
            TokenType::Database if !detach => {
                self.next()?;
                let if_exists = self.parse_if_exists()?;
                let name = self.parse_ident()?;
                let on_cluster = self.parse_on_cluster()?;
                Ok(Expr::DropDatabase(Box::new(DropDatabase {
                    span: self.span_from(start),
                    name,
                    if_exists,
                    on_cluster,
                })))
            }
            TokenType::Database
            | TokenType::Temporary
            | TokenType::Table
            | TokenType::View
            | TokenType::Dictionary
            | TokenType::Function => {
                let is_temporary = self.accept(TokenType::Temporary)?;
                let target = match self.peek_type()? {
                    TokenType::Database
                    | TokenType::Table
                    | TokenType::View
                    | TokenType::Dictionary
                    | TokenType::Function => self.next()?.text.to_ascii_uppercase(),
                    _ if is_temporary => {
                        self.expect(TokenType::Table)?;
                        "TABLE".to_string()
                    }
                    _ => return self.unexpected("TABLE, VIEW, DICTIONARY, or FUNCTION"),
                };
                let if_exists = self.parse_if_exists()?;
                let name = self.parse_table_identifier()?;
                let on_cluster = self.parse_on_cluster()?;
                let modifier = if self.accept(TokenType::Sync)? {
                    Some("SYNC".to_string())
                } else {
                    None
                };
                Ok(Expr::DropStmt(Box::new(DropStmt {
                    span: self.span_from(start),
                    drop_target: target,
                    name,
                    if_exists,
                    on_cluster,
                    is_temporary,
                    detach,
                    modifier,
                })))
            }
            TokenType::User | TokenType::Role => {
                let target = self.next()?.text.to_ascii_uppercase();
                let if_exists = self.parse_if_exists()?;
                let mut names = Vec::new();
                names.push(self.parse_role_name()?);
                while self.accept(TokenType::Comma)? {
                    names.push(self.parse_role_name()?);
                }
                let modifier = if self.accept(TokenType::Sync)? {
                    Some("SYNC".to_string())
                } else {
                    None
                };
                let from = if self.accept(TokenType::From)? {
                    Some(self.parse_ident()?)
                } else {
                    None
                };
                Ok(Expr::DropUserOrRole(Box::new(DropUserOrRole {
                    span: self.span_from(start),
                    target,
                    names,
                    if_exists,
                    modifier,
                    from,
                })))
            }
            _ => self.unexpected("DATABASE, TABLE, VIEW, DICTIONARY, FUNCTION, USER, or ROLE"),
        }
    }

    pub(crate) fn parse_rename(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Rename)?;
        let rename_target = match self.peek_type()? {
            TokenType::Table | TokenType::Dictionary | TokenType::Database => {
                self.next()?.text.to_ascii_uppercase()
            }
            _ => return self.unexpected("TABLE, DICTIONARY, or DATABASE"),
        };
        let mut target_pairs = Vec::new();
        target_pairs.push(self.parse_target_pair()?);
        while self.accept(TokenType::Comma)? {
            target_pairs.push(self.parse_target_pair()?);
        }
        let on_cluster = self.parse_on_cluster()?;
        Ok(Expr::RenameStmt(Box::new(RenameStmt {
            span: self.span_from(start),
            rename_target,
            target_pairs,
            on_cluster,
        })))
    }

    fn parse_target_pair(&mut self) -> Result<TargetPair> {
        let start = self.pos()?;
        let old = self.parse_table_identifier()?;
        self.expect(TokenType::To)?;
        let new = self.parse_table_identifier()?;
        Ok(TargetPair {
            span: self.span_from(start),
            old,
            new,
        })
    }

    pub(crate) fn parse_truncate(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Truncate)?;
        let is_temporary = self.accept(TokenType::Temporary)?;
        self.expect(TokenType::Table)?;
        let if_exists = self.parse_if_exists()?;
        let name = self.parse_table_identifier()?;
        let on_cluster = self.parse_on_cluster()?;
        Ok(Expr::TruncateTable(Box::new(TruncateTable {
            span: self.span_from(start),
            is_temporary,
            if_exists,
            name,
            on_cluster,
        })))
    }

    // -- shared table clauses -----------------------------------------------

    pub(crate) fn parse_on_cluster(&mut self) -> Result<Option<OnClusterExpr>> {
        if self.peek_type()? != TokenType::On || self.peek_type_at(1)? != TokenType::Cluster {
            return Ok(None);
        }
        let start = self.pos()?;
        self.next()?;
        self.next()?;
        let expr = if self.peek_type()? == TokenType::String {
            let token = self.next()?;
            Expr::StringLiteral(Box::new(StringLiteral {
                span: token.span,
                literal: token.text,
            }))
        } else {
            Expr::Ident(Box::new(self.parse_ident()?))
        };
        Ok(Some(OnClusterExpr {
            span: self.span_from(start),
            expr,
        }))
    }

    fn parse_uuid_clause(&mut self) -> Result<Option<Uuid>> {
        if self.peek_type()? != TokenType::Uuid {
            return Ok(None);
        }
        let start = self.pos()?;
        self.next()?;
        let token = self.expect(TokenType::String)?;
        Ok(Some(Uuid {
            span: self.span_from(start),
            value: StringLiteral {
                span: token.span,
                literal: token.text,
            },
        }))
    }

    fn parse_destination(&mut self) -> Result<DestinationExpr> {
        let start = self.pos()?;
        self.expect(TokenType::To)?;
        let table = self.parse_table_identifier()?;
        let table_schema = if self.peek_type()? == TokenType::LParen {
            Some(self.parse_table_schema_columns()?)
        } else {
            None
        };
        Ok(DestinationExpr {
            span: self.span_from(start),
            table,
            table_schema,
        })
    }

    fn parse_as_select(&mut self) -> Result<Option<SubQueryExpr>> {
        if !self.accept(TokenType::As)? {
            return Ok(None);
        }
        let start = self.pos()?;
        let select = if self.accept(TokenType::LParen)? {
            let select = self.parse_select_query()?;
            self.expect(TokenType::RParen)?;
            select
        } else {
            self.parse_select_query()?
        };
        Ok(Some(SubQueryExpr {
            span: self.span_from(start),
            select,
        }))
    }

    /// Parenthesized column/constraint/index list of a CREATE statement
    fn parse_table_schema_columns(&mut self) -> Result<TableSchemaExpr> {
        let start = self.pos()?;
        self.expect(TokenType::LParen)?;
        let mut columns = Vec::new();
        columns.push(self.parse_table_element()?);
        while self.accept(TokenType::Comma)? {
            columns.push(self.parse_table_element()?);
        }
        self.expect(TokenType::RParen)?;
        Ok(TableSchemaExpr {
            span: self.span_from(start),
            columns,
            alias_table: None,
            table_function: None,
        })
    }

    fn parse_table_element(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        match self.peek_type()? {
            TokenType::Index => {
                self.next()?;
                let mut index = self.parse_table_index()?;
                index.span = self.span_from(start);
                Ok(Expr::TableIndex(Box::new(index)))
            }
            TokenType::Constraint => {
                self.next()?;
                let constraint = self.parse_ident()?;
                self.expect(TokenType::Check)?;
                let expr = self.parse_expr()?;
                Ok(Expr::ConstraintExpr(Box::new(ConstraintExpr {
                    span: self.span_from(start),
                    constraint,
                    expr,
                })))
            }
            TokenType::Primary if self.peek_type_at(1)? == TokenType::Key => {
                self.next()?;
                self.next()?;
                let expr = self.parse_expr()?;
                Ok(Expr::PrimaryKeyExpr(Box::new(PrimaryKeyExpr {
                    span: self.span_from(start),
                    expr,
                })))
            }
            _ => {
                let column = self.parse_column_def()?;
                Ok(Expr::Column(Box::new(column)))
            }
        }
    }

    /// `name expr TYPE type GRANULARITY n` of a data-skipping index
    fn parse_table_index(&mut self) -> Result<TableIndex> {
        let start = self.pos()?;
        let name = self.parse_nested_identifier()?;
        let column_expr = self.parse_expr()?;
        self.expect(TokenType::Type)?;
        let column_type = self.parse_column_type()?;
        self.expect(TokenType::Granularity)?;
        let token = self.expect(TokenType::Number)?;
        let granularity = NumberLiteral::new(token.span, token.text);
        Ok(TableIndex {
            span: self.span_from(start),
            name,
            column_expr,
            column_type,
            granularity,
        })
    }

    /// Column definition with nullability, property, codec, TTL, comment
    pub(crate) fn parse_column_def(&mut self) -> Result<Column> {
        let start = self.pos()?;
        let name = self.parse_nested_identifier()?;

        let column_type = match self.peek_type()? {
            TokenType::Identifier | TokenType::QuotedIdentifier | TokenType::Uuid => {
                Some(self.parse_column_type()?)
            }
            _ => None,
        };

        let mut not_null = None;
        let mut nullable = None;
        if self.peek_type()? == TokenType::Not && self.peek_type_at(1)? == TokenType::Null {
            let not_start = self.pos()?;
            self.next()?;
            let null_token = self.next()?;
            not_null = Some(NotNullLiteral {
                span: self.span_from(not_start),
                null: NullLiteral {
                    span: null_token.span,
                },
            });
        } else if self.peek_type()? == TokenType::Null {
            let token = self.next()?;
            nullable = Some(NullLiteral { span: token.span });
        }

        let property = match self.peek_type()? {
            TokenType::Default | TokenType::Materialized | TokenType::Alias => {
                let property_start = self.pos()?;
                let keyword = self.next()?.text.to_ascii_uppercase();
                let expr = self.parse_expr()?;
                Some(ColumnPropertyExpr {
                    span: self.span_from(property_start),
                    keyword,
                    expr: Some(expr),
                })
            }
            TokenType::Ephemeral => {
                let property_start = self.pos()?;
                self.next()?;
                let expr = match self.peek_type()? {
                    TokenType::Comma
                    | TokenType::RParen
                    | TokenType::Codec
                    | TokenType::Ttl
                    | TokenType::Comment
                    | TokenType::Eof => None,
                    _ => Some(self.parse_expr()?),
                };
                Some(ColumnPropertyExpr {
                    span: self.span_from(property_start),
                    keyword: "EPHEMERAL".to_string(),
                    expr,
                })
            }
            _ => None,
        };

        let codec = if self.peek_type()? == TokenType::Codec {
            Some(self.parse_codec()?)
        } else {
            None
        };

        let ttl = if self.accept(TokenType::Ttl)? {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let comment = if self.accept(TokenType::Comment)? {
            let token = self.expect(TokenType::String)?;
            Some(StringLiteral {
                span: token.span,
                literal: token.text,
            })
        } else {
            None
        };

        Ok(Column {
            span: self.span_from(start),
            name,
            column_type,
            not_null,
            nullable,
            property,
            codec,
            ttl,
            comment,
        })
    }

    fn parse_codec(&mut self) -> Result<CompressionCodec> {
        let start = self.pos()?;
        self.expect(TokenType::Codec)?;
        self.expect(TokenType::LParen)?;
        let name = self.parse_ident()?;
        let level = if self.accept(TokenType::LParen)? {
            let token = self.expect(TokenType::Number)?;
            let level = NumberLiteral::new(token.span, token.text);
            self.expect(TokenType::RParen)?;
            Some(level)
        } else {
            None
        };
        self.expect(TokenType::RParen)?;
        Ok(CompressionCodec {
            span: self.span_from(start),
            name,
            level,
        })
    }

    /// Engine clause: `ENGINE [=] name[(params)]` followed by its storage
    /// sub-clauses in any order
    pub(crate) fn parse_engine(&mut self) -> Result<EngineExpr> {
        let start = self.pos()?;
        self.expect(TokenType::Engine)?;
        self.accept(TokenType::Eq)?;
        let name = self.parse_ident()?.name;
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

        let mut primary_key = None;
        let mut partition_by = None;
        let mut sample_by = None;
        let mut ttl = None;
        let mut settings = None;
        let mut order_by = None;
        loop {
            match self.peek_type()? {
                TokenType::Primary if self.peek_type_at(1)? == TokenType::Key => {
                    let clause_start = self.pos()?;
                    self.next()?;
                    self.next()?;
                    let expr = self.parse_expr()?;
                    primary_key = Some(PrimaryKeyExpr {
                        span: self.span_from(clause_start),
                        expr,
                    });
                }
                TokenType::Partition if self.peek_type_at(1)? == TokenType::By => {
                    let clause_start = self.pos()?;
                    self.next()?;
                    self.next()?;
                    let expr = self.parse_expr()?;
                    partition_by = Some(PartitionByExpr {
                        span: self.span_from(clause_start),
                        expr,
                    });
                }
                TokenType::Order if self.peek_type_at(1)? == TokenType::By => {
                    self.next()?;
                    self.next()?;
                    order_by = Some(self.parse_order_by_list()?);
                }
                TokenType::Sample if self.peek_type_at(1)? == TokenType::By => {
                    let clause_start = self.pos()?;
                    self.next()?;
                    self.next()?;
                    let expr = self.parse_expr()?;
                    sample_by = Some(SampleByExpr {
                        span: self.span_from(clause_start),
                        expr,
                    });
                }
                TokenType::Ttl => {
                    let clause_start = self.pos()?;
                    self.next()?;
                    let mut items = Vec::new();
                    loop {
                        let item_start = self.pos()?;
                        let expr = self.parse_expr()?;
                        items.push(TtlExpr {
                            span: self.span_from(item_start),
                            expr,
                        });
                        if !self.accept(TokenType::Comma)? {
                            break;
                        }
                    }
                    ttl = Some(TtlExprList {
                        span: self.span_from(clause_start),
                        items,
                    });
                }
                TokenType::Settings => {
                    settings = Some(self.parse_settings_list()?);
                }
                _ => break,
            }
        }

        Ok(EngineExpr {
            span: self.span_from(start),
            name,
            params,
            primary_key,
            partition_by,
            sample_by,
            ttl,
            settings,
            order_by,
        })
    }

    /// `PARTITION expr`, `PARTITION ID 'id'`, or `PARTITION ALL`
    pub(crate) fn parse_partition_expr(&mut self) -> Result<PartitionExpr> {
        let start = self.pos()?;
        self.expect(TokenType::Partition)?;
        if self.accept(TokenType::All)? {
            return Ok(PartitionExpr {
                span: self.span_from(start),
                expr: None,
                id: None,
                all: true,
            });
        }
        let is_id = {
            let token = self.peek()?;
            token.token_type == TokenType::Identifier && token.text.eq_ignore_ascii_case("ID")
        };
        if is_id && self.peek_type_at(1)? == TokenType::String {
            self.next()?;
            let token = self.next()?;
            return Ok(PartitionExpr {
                span: self.span_from(start),
                expr: None,
                id: Some(StringLiteral {
                    span: token.span,
                    literal: token.text,
                }),
                all: false,
            });
        }
        let expr = self.parse_expr()?;
        Ok(PartitionExpr {
            span: self.span_from(start),
            expr: Some(expr),
            id: None,
            all: false,
        })
    }
}
