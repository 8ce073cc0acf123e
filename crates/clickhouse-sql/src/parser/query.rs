//! SELECT parsing: clause assembly, CTEs, join trees, sampling, windows

use super::Parser;
use crate::ast::*;
use crate::error::Result;
use crate::tokens::TokenType;

fn last_in_union_chain(select: &mut SelectQuery) -> &mut SelectQuery {
    match select {
        SelectQuery {
            union_all: Some(next),
            ..
        }
        | SelectQuery {
            union_distinct: Some(next),
            ..
        }
        | SelectQuery {
            except: Some(next), ..
        } => last_in_union_chain(next),
        _ => select,
    }
}

impl Parser {
    /// A full SELECT query, optionally parenthesized, including any
    /// trailing UNION/EXCEPT chain
    pub(crate) fn parse_select_query(&mut self) -> Result<SelectQuery> {
        let start = self.pos()?;

        if self.peek_type()? == TokenType::LParen {
            self.next()?;
            let mut select = self.parse_select_query()?;
            self.expect(TokenType::RParen)?;
            // the select inside the parens may already carry a union chain;
            // anything following the parens extends the end of that chain
            self.parse_union_tail(last_in_union_chain(&mut select))?;
            select.span = self.span_from(start);
            return Ok(select);
        }

        let with = if self.peek_type()? == TokenType::With {
            Some(self.parse_with()?)
        } else {
            None
        };

        self.expect(TokenType::Select)?;

        let top = if self.peek_type()? == TokenType::Top {
            let top_start = self.pos()?;
            self.next()?;
            let number_token = self.expect(TokenType::Number)?;
            let number = NumberLiteral::new(number_token.span, number_token.text);
            let with_ties = if self.peek_type()? == TokenType::With
                && self.peek_type_at(1)? == TokenType::Ties
            {
                self.next()?;
                self.next()?;
                true
            } else {
                false
            };
            Some(TopExpr {
                span: self.span_from(top_start),
                number,
                with_ties,
            })
        } else {
            None
        };

        let has_distinct = self.accept(TokenType::Distinct)?;
        let mut select_columns = self.parse_column_expr_list()?;
        select_columns.has_distinct = has_distinct;

        let from = if self.peek_type()? == TokenType::From {
            let from_start = self.pos()?;
            self.next()?;
            let expr = self.parse_join_tree()?;
            Some(FromExpr {
                span: self.span_from(from_start),
                expr,
            })
        } else {
            None
        };

        let array_join = self.parse_array_join()?;

        let window = if self.peek_type()? == TokenType::Window {
            let window_start = self.pos()?;
            self.next()?;
            let name = self.parse_ident()?;
            self.expect(TokenType::As)?;
            let condition = self.parse_window_condition()?;
            Some(WindowExpr {
                span: self.span_from(window_start),
                name,
                condition,
            })
        } else {
            None
        };

        let prewhere = if self.peek_type()? == TokenType::Prewhere {
            let clause_start = self.pos()?;
            self.next()?;
            let expr = self.parse_expr()?;
            Some(PrewhereExpr {
                span: self.span_from(clause_start),
                expr,
            })
        } else {
            None
        };

        let where_clause = if self.peek_type()? == TokenType::Where {
            let clause_start = self.pos()?;
            self.next()?;
            let expr = self.parse_expr()?;
            Some(WhereExpr {
                span: self.span_from(clause_start),
                expr,
            })
        } else {
            None
        };

        let group_by = if self.peek_type()? == TokenType::Group {
            Some(self.parse_group_by()?)
        } else {
            None
        };

        let having = if self.peek_type()? == TokenType::Having {
            let clause_start = self.pos()?;
            self.next()?;
            let expr = self.parse_expr()?;
            Some(HavingExpr {
                span: self.span_from(clause_start),
                expr,
            })
        } else {
            None
        };

        let order_by = if self.peek_type()? == TokenType::Order {
            self.next()?;
            self.expect(TokenType::By)?;
            Some(self.parse_order_by_list()?)
        } else {
            None
        };

        let (limit_by, limit) = self.parse_limit_clauses()?;

        let settings = if self.peek_type()? == TokenType::Settings {
            Some(self.parse_settings_list()?)
        } else {
            None
        };

        let mut select = SelectQuery {
            span: self.span_from(start),
            with,
            top,
            select_columns,
            from,
            array_join,
            window,
            prewhere,
            where_clause,
            group_by,
            having,
            order_by,
            limit_by,
            limit,
            settings,
            union_all: None,
            union_distinct: None,
            except: None,
        };
        self.parse_union_tail(&mut select)?;
        select.span = self.span_from(start);
        Ok(select)
    }

    fn parse_union_tail(&mut self, select: &mut SelectQuery) -> Result<()> {
        if self.peek_type()? == TokenType::Union {
            self.next()?;
            if self.accept(TokenType::All)? {
                select.union_all = Some(Box::new(self.parse_select_query()?));
            } else if self.accept(TokenType::Distinct)? {
                select.union_distinct = Some(Box::new(self.parse_select_query()?));
            } else {
                return self.unexpected("ALL or DISTINCT after UNION");
            }
        } else if self.peek_type()? == TokenType::Except
            && matches!(
                self.peek_type_at(1)?,
                TokenType::Select | TokenType::With | TokenType::LParen
            )
        {
            self.next()?;
            select.except = Some(Box::new(self.parse_select_query()?));
        }
        Ok(())
    }

    fn parse_with(&mut self) -> Result<WithExpr> {
        let start = self.pos()?;
        self.expect(TokenType::With)?;
        let mut ctes = Vec::new();
        ctes.push(self.parse_cte()?);
        while self.accept(TokenType::Comma)? {
            ctes.push(self.parse_cte()?);
        }
        Ok(WithExpr {
            span: self.span_from(start),
            ctes,
        })
    }

    fn parse_cte(&mut self) -> Result<CteExpr> {
        let start = self.pos()?;
        let expr = self.parse_expr()?;
        self.expect(TokenType::As)?;
        let alias = if self.peek_type()? == TokenType::LParen
            && matches!(
                self.peek_type_at(1)?,
                TokenType::Select | TokenType::With
            ) {
            self.next()?;
            let select = self.parse_select_query()?;
            self.expect(TokenType::RParen)?;
            Expr::SelectQuery(Box::new(select))
        } else {
            Expr::Ident(Box::new(self.parse_ident()?))
        };
        Ok(CteExpr {
            span: self.span_from(start),
            expr,
            alias,
        })
    }

    fn parse_array_join(&mut self) -> Result<Option<ArrayJoinExpr>> {
        let start = self.pos()?;
        let kind = match self.peek_type()? {
            TokenType::Left if self.peek_type_at(1)? == TokenType::Array => {
                self.next()?;
                "LEFT"
            }
            TokenType::Inner if self.peek_type_at(1)? == TokenType::Array => {
                self.next()?;
                "INNER"
            }
            TokenType::Array if self.peek_type_at(1)? == TokenType::Join => "",
            _ => return Ok(None),
        };
        self.expect(TokenType::Array)?;
        self.expect(TokenType::Join)?;
        let list_start = self.pos()?;
        let list = self.parse_column_expr_list()?;
        let expr = if list.items.len() == 1 {
            list.items.into_iter().next().expect("one item")
        } else {
            let mut list = list;
            list.span = self.span_from(list_start);
            Expr::ColumnExprList(Box::new(list))
        };
        Ok(Some(ArrayJoinExpr {
            span: self.span_from(start),
            kind: kind.to_string(),
            expr,
        }))
    }

    // -- FROM and joins ----------------------------------------------------

    /// FROM source: a single table source or a join chain. A lone table
    /// stays a `JoinTableExpr`; joins become a `JoinExpr` whose right side
    /// nests the rest of the chain.
    fn parse_join_tree(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let first = self.parse_join_table()?;
        if !self.join_follows()? {
            return Ok(first);
        }
        let right = self.parse_join_chain()?;
        Ok(Expr::JoinExpr(Box::new(JoinExpr {
            span: self.span_from(start),
            left: first,
            right: Some(right),
            modifiers: Vec::new(),
            constraints: None,
        })))
    }

    fn join_follows(&mut self) -> Result<bool> {
        Ok(match self.peek_type()? {
            TokenType::Comma
            | TokenType::Cross
            | TokenType::Right
            | TokenType::Full
            | TokenType::Outer
            | TokenType::Semi
            | TokenType::Anti
            | TokenType::Any
            | TokenType::All
            | TokenType::Asof
            | TokenType::Join => true,
            // LEFT/INNER may open a join or an ARRAY JOIN clause
            TokenType::Left | TokenType::Inner => {
                self.peek_type_at(1)? != TokenType::Array
            }
            _ => false,
        })
    }

    fn parse_join_chain(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let mut modifiers = Vec::new();
        if !self.accept(TokenType::Comma)? {
            loop {
                match self.peek_type()? {
                    TokenType::Cross
                    | TokenType::Left
                    | TokenType::Right
                    | TokenType::Full
                    | TokenType::Inner
                    | TokenType::Outer
                    | TokenType::Semi
                    | TokenType::Anti
                    | TokenType::Any
                    | TokenType::All
                    | TokenType::Asof => {
                        let token = self.next()?;
                        modifiers.push(token.text.to_ascii_uppercase());
                    }
                    TokenType::Join => {
                        self.next()?;
                        modifiers.push("JOIN".to_string());
                        break;
                    }
                    _ => return self.unexpected("JOIN"),
                }
            }
        }

        let left = self.parse_join_table()?;

        let constraints = if self.peek_type()? == TokenType::On {
            let constraint_start = self.pos()?;
            self.next()?;
            let on = self.parse_column_expr_list()?;
            Some(Expr::JoinConstraintExpr(Box::new(JoinConstraintExpr {
                span: self.span_from(constraint_start),
                on: Some(on),
                using: None,
            })))
        } else if self.peek_type()? == TokenType::Using {
            let constraint_start = self.pos()?;
            self.next()?;
            let parenthesized = self.accept(TokenType::LParen)?;
            let using = self.parse_column_expr_list()?;
            if parenthesized {
                self.expect(TokenType::RParen)?;
            }
            Some(Expr::JoinConstraintExpr(Box::new(JoinConstraintExpr {
                span: self.span_from(constraint_start),
                on: None,
                using: Some(using),
            })))
        } else {
            None
        };

        let right = if self.join_follows()? {
            Some(self.parse_join_chain()?)
        } else {
            None
        };

        Ok(Expr::JoinExpr(Box::new(JoinExpr {
            span: self.span_from(start),
            left,
            right,
            modifiers,
            constraints,
        })))
    }

    fn parse_join_table(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let table = self.parse_table_expr()?;
        let has_final = self.accept(TokenType::Final)?;
        let sample_ratio = if self.peek_type()? == TokenType::Sample {
            let sample_start = self.pos()?;
            self.next()?;
            let ratio = self.parse_ratio()?;
            let offset = if self.accept(TokenType::Offset)? {
                Some(self.parse_ratio()?)
            } else {
                None
            };
            Some(SampleRatioExpr {
                span: self.span_from(sample_start),
                ratio,
                offset,
            })
        } else {
            None
        };
        Ok(Expr::JoinTableExpr(Box::new(JoinTableExpr {
            span: self.span_from(start),
            table,
            sample_ratio,
            has_final,
        })))
    }

    fn parse_table_expr(&mut self) -> Result<TableExpr> {
        let start = self.pos()?;
        let expr = if self.peek_type()? == TokenType::LParen {
            self.next()?;
            let select = self.parse_select_query()?;
            self.expect(TokenType::RParen)?;
            Expr::SelectQuery(Box::new(select))
        } else {
            let first = self.parse_ident()?;
            if self.peek_type()? == TokenType::Dot {
                self.next()?;
                let table = self.parse_ident()?;
                Expr::TableIdentifier(Box::new(TableIdentifier {
                    span: self.span_from(start),
                    database: Some(first),
                    table,
                }))
            } else if self.peek_type()? == TokenType::LParen {
                let args = self.parse_table_arg_list()?;
                Expr::TableFunctionExpr(Box::new(TableFunctionExpr {
                    span: self.span_from(start),
                    name: first,
                    args,
                }))
            } else {
                Expr::TableIdentifier(Box::new(TableIdentifier {
                    span: self.span_from(start),
                    database: None,
                    table: first,
                }))
            }
        };

        let alias = if self.accept(TokenType::As)? {
            Some(self.parse_ident()?)
        } else if matches!(
            self.peek_type()?,
            TokenType::Identifier | TokenType::QuotedIdentifier
        ) {
            Some(self.parse_ident()?)
        } else {
            None
        };

        Ok(TableExpr {
            span: self.span_from(start),
            expr,
            alias,
            has_final: false,
        })
    }

    pub(crate) fn parse_table_arg_list(&mut self) -> Result<TableArgListExpr> {
        let start = self.pos()?;
        self.expect(TokenType::LParen)?;
        let mut args = Vec::new();
        if self.peek_type()? != TokenType::RParen {
            args.push(self.parse_expr()?);
            while self.accept(TokenType::Comma)? {
                args.push(self.parse_expr()?);
            }
        }
        self.expect(TokenType::RParen)?;
        Ok(TableArgListExpr {
            span: self.span_from(start),
            args,
        })
    }

    fn parse_ratio(&mut self) -> Result<RatioExpr> {
        let start = self.pos()?;
        let numerator_token = self.expect(TokenType::Number)?;
        let numerator = NumberLiteral::new(numerator_token.span, numerator_token.text);
        let denominator = if self.accept(TokenType::Slash)? {
            let token = self.expect(TokenType::Number)?;
            Some(NumberLiteral::new(token.span, token.text))
        } else {
            None
        };
        Ok(RatioExpr {
            span: self.span_from(start),
            numerator,
            denominator,
        })
    }

    // -- clauses -----------------------------------------------------------

    fn parse_group_by(&mut self) -> Result<GroupByExpr> {
        let start = self.pos()?;
        self.expect(TokenType::Group)?;
        self.expect(TokenType::By)?;

        let mut aggregate_type = String::new();
        let expr = if matches!(self.peek_type()?, TokenType::Cube | TokenType::Rollup)
            && self.peek_type_at(1)? == TokenType::LParen
        {
            let keyword = self.next()?;
            aggregate_type = keyword.text.to_ascii_uppercase();
            self.expect(TokenType::LParen)?;
            let list = self.parse_column_expr_list()?;
            self.expect(TokenType::RParen)?;
            Expr::ColumnExprList(Box::new(list))
        } else {
            Expr::ColumnExprList(Box::new(self.parse_column_expr_list()?))
        };

        let mut with_cube = false;
        let mut with_rollup = false;
        let mut with_totals = false;
        while self.peek_type()? == TokenType::With {
            match self.peek_type_at(1)? {
                TokenType::Cube => {
                    self.next()?;
                    self.next()?;
                    with_cube = true;
                }
                TokenType::Rollup => {
                    self.next()?;
                    self.next()?;
                    with_rollup = true;
                }
                TokenType::Totals => {
                    self.next()?;
                    self.next()?;
                    with_totals = true;
                }
                _ => break,
            }
        }

        Ok(GroupByExpr {
            span: self.span_from(start),
            aggregate_type,
            expr,
            with_cube,
            with_rollup,
            with_totals,
        })
    }

    pub(crate) fn parse_order_by_list(&mut self) -> Result<OrderByListExpr> {
        let start = self.pos()?;
        let mut items = Vec::new();
        items.push(self.parse_order_by_item()?);
        while self.accept(TokenType::Comma)? {
            items.push(self.parse_order_by_item()?);
        }
        Ok(OrderByListExpr {
            span: self.span_from(start),
            items,
        })
    }

    fn parse_order_by_item(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let expr = self.parse_column_expr()?;
        let direction = if self.accept(TokenType::Asc)? {
            OrderDirection::Asc
        } else if self.accept(TokenType::Desc)? {
            OrderDirection::Desc
        } else {
            OrderDirection::None
        };
        Ok(Expr::OrderByExpr(Box::new(OrderByExpr {
            span: self.span_from(start),
            expr,
            direction,
        })))
    }

    /// `LIMIT n BY cols` and/or `LIMIT n [OFFSET m]`. `LIMIT m, n` swaps
    /// into offset `m`, limit `n`.
    fn parse_limit_clauses(&mut self) -> Result<(Option<LimitByExpr>, Option<LimitExpr>)> {
        if self.peek_type()? != TokenType::Limit {
            return Ok((None, None));
        }
        let first = self.parse_limit_expr()?;
        if self.peek_type()? == TokenType::By {
            let by_start = first.span.start;
            self.next()?;
            let by = self.parse_column_expr_list()?;
            let limit_by = LimitByExpr {
                span: self.span_from(by_start),
                limit: first,
                by,
            };
            let limit = if self.peek_type()? == TokenType::Limit {
                Some(self.parse_limit_expr()?)
            } else {
                None
            };
            return Ok((Some(limit_by), limit));
        }
        Ok((None, Some(first)))
    }

    fn parse_limit_expr(&mut self) -> Result<LimitExpr> {
        let start = self.pos()?;
        self.expect(TokenType::Limit)?;
        let first = self.parse_expr()?;
        if self.accept(TokenType::Comma)? {
            let second = self.parse_expr()?;
            return Ok(LimitExpr {
                span: self.span_from(start),
                limit: second,
                offset: Some(first),
            });
        }
        let offset = if self.accept(TokenType::Offset)? {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(LimitExpr {
            span: self.span_from(start),
            limit: first,
            offset,
        })
    }

    pub(crate) fn parse_settings_list(&mut self) -> Result<SettingsExprList> {
        let start = self.pos()?;
        self.expect(TokenType::Settings)?;
        let mut items = Vec::new();
        items.push(self.parse_settings_pair()?);
        while self.accept(TokenType::Comma)? {
            items.push(self.parse_settings_pair()?);
        }
        Ok(SettingsExprList {
            span: self.span_from(start),
            items,
        })
    }

    fn parse_settings_pair(&mut self) -> Result<SettingsExpr> {
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

    pub(crate) fn parse_window_condition(&mut self) -> Result<WindowConditionExpr> {
        let start = self.pos()?;
        self.expect(TokenType::LParen)?;

        let partition_by = if self.peek_type()? == TokenType::Partition {
            let clause_start = self.pos()?;
            self.next()?;
            self.expect(TokenType::By)?;
            let list = self.parse_column_expr_list()?;
            Some(PartitionByExpr {
                span: self.span_from(clause_start),
                expr: Expr::ColumnExprList(Box::new(list)),
            })
        } else {
            None
        };

        let order_by = if self.peek_type()? == TokenType::Order {
            self.next()?;
            self.expect(TokenType::By)?;
            Some(self.parse_order_by_list()?)
        } else {
            None
        };

        let frame = if matches!(self.peek_type()?, TokenType::Rows | TokenType::Range) {
            let frame_start = self.pos()?;
            let keyword = self.next()?;
            let kind = keyword.text.to_ascii_uppercase();
            let extend = if self.peek_type()? == TokenType::Between {
                let range_start = self.pos()?;
                self.next()?;
                let between = self.parse_frame_bound()?;
                self.expect(TokenType::And)?;
                let and_expr = self.parse_frame_bound()?;
                Expr::WindowFrameRangeExpr(Box::new(WindowFrameRangeExpr {
                    span: self.span_from(range_start),
                    between,
                    and_expr,
                }))
            } else {
                let extend_start = self.pos()?;
                let expr = self.parse_frame_bound()?;
                Expr::WindowFrameExtendExpr(Box::new(WindowFrameExtendExpr {
                    span: self.span_from(extend_start),
                    expr,
                }))
            };
            Some(WindowFrameExpr {
                span: self.span_from(frame_start),
                kind,
                extend,
            })
        } else {
            None
        };

        self.expect(TokenType::RParen)?;
        Ok(WindowConditionExpr {
            span: self.span_from(start),
            partition_by,
            order_by,
            frame,
        })
    }

    fn parse_frame_bound(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        match self.peek_type()? {
            TokenType::Current => {
                self.next()?;
                self.expect(TokenType::Row)?;
                Ok(Expr::WindowFrameCurrentRow(Box::new(WindowFrameCurrentRow {
                    span: self.span_from(start),
                })))
            }
            TokenType::Unbounded => {
                self.next()?;
                let direction = match self.peek_type()? {
                    TokenType::Preceding | TokenType::Following => {
                        self.next()?.text.to_ascii_uppercase()
                    }
                    _ => return self.unexpected("PRECEDING or FOLLOWING"),
                };
                Ok(Expr::WindowFrameUnbounded(Box::new(WindowFrameUnbounded {
                    span: self.span_from(start),
                    direction,
                })))
            }
            TokenType::Number => {
                let token = self.next()?;
                let number = NumberLiteral::new(token.span, token.text);
                let direction = match self.peek_type()? {
                    TokenType::Preceding | TokenType::Following => {
                        self.next()?.text.to_ascii_uppercase()
                    }
                    _ => return self.unexpected("PRECEDING or FOLLOWING"),
                };
                Ok(Expr::WindowFrameNumber(Box::new(WindowFrameNumber {
                    span: self.span_from(start),
                    number,
                    direction,
                })))
            }
            _ => self.unexpected("a window frame bound"),
        }
    }
}
