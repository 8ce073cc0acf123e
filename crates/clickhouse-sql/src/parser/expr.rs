//! Expression parsing: precedence climbing and primary expressions
//!
//! Precedence, lowest to highest: lambda `->`, ternary `?:`, `OR`, `AND`,
//! prefix `NOT`, comparisons (including `IN`/`LIKE`/`BETWEEN`/`IS NULL`),
//! `||`, additive, multiplicative, the `::` cast operator, unary minus,
//! and postfix subscripts. Infix ties resolve left-associatively; `?:` and
//! `->` are right-associative.

use super::Parser;
use crate::ast::*;
use crate::error::Result;
use crate::tokens::{QuoteStyle, TokenType};

impl Parser {
    pub(crate) fn parse_expr(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let left = self.parse_ternary()?;
        if self.accept(TokenType::Arrow)? {
            let right = self.parse_expr()?;
            return Ok(Expr::BinaryExpr(Box::new(BinaryExpr {
                span: self.span_from(start),
                left,
                op: TokenType::Arrow,
                right,
                has_global: false,
                has_not: false,
            })));
        }
        Ok(left)
    }

    fn parse_ternary(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let condition = self.parse_or()?;
        if !self.accept(TokenType::QMark)? {
            return Ok(condition);
        }
        let true_expr = self.parse_ternary()?;
        self.expect(TokenType::Colon)?;
        let false_expr = self.parse_ternary()?;
        Ok(Expr::TernaryExpr(Box::new(TernaryExpr {
            span: self.span_from(start),
            condition,
            true_expr,
            false_expr,
        })))
    }

    fn parse_or(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let mut left = self.parse_and()?;
        while self.accept(TokenType::Or)? {
            let right = self.parse_and()?;
            left = Expr::BinaryExpr(Box::new(BinaryExpr {
                span: self.span_from(start),
                left,
                op: TokenType::Or,
                right,
                has_global: false,
                has_not: false,
            }));
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let mut left = self.parse_not()?;
        while self.accept(TokenType::And)? {
            let right = self.parse_not()?;
            left = Expr::BinaryExpr(Box::new(BinaryExpr {
                span: self.span_from(start),
                left,
                op: TokenType::And,
                right,
                has_global: false,
                has_not: false,
            }));
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        if self.accept(TokenType::Not)? {
            let expr = self.parse_not()?;
            return Ok(Expr::NotExpr(Box::new(NotExpr {
                span: self.span_from(start),
                expr,
            })));
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let mut left = self.parse_concat()?;
        loop {
            let mut has_not = false;
            let mut has_global = false;
            let op = match self.peek_type()? {
                TokenType::Eq
                | TokenType::Neq
                | TokenType::Lt
                | TokenType::Lte
                | TokenType::Gt
                | TokenType::Gte
                | TokenType::In
                | TokenType::Like
                | TokenType::ILike
                | TokenType::Between => self.next()?.token_type,
                TokenType::Not => {
                    // NOT IN / NOT LIKE / NOT ILIKE / NOT BETWEEN
                    match self.peek_type_at(1)? {
                        TokenType::In
                        | TokenType::Like
                        | TokenType::ILike
                        | TokenType::Between => {
                            self.next()?;
                            has_not = true;
                            self.next()?.token_type
                        }
                        _ => break,
                    }
                }
                TokenType::Global => {
                    // GLOBAL IN / GLOBAL NOT IN
                    match self.peek_type_at(1)? {
                        TokenType::In => {
                            self.next()?;
                            has_global = true;
                            self.next()?.token_type
                        }
                        TokenType::Not => {
                            self.next()?;
                            self.next()?;
                            has_not = true;
                            self.expect(TokenType::In)?.token_type
                        }
                        _ => break,
                    }
                }
                TokenType::Is => {
                    self.next()?;
                    let not = self.accept(TokenType::Not)?;
                    self.expect(TokenType::Null)?;
                    let span = self.span_from(start);
                    left = if not {
                        Expr::IsNotNullExpr(Box::new(IsNotNullExpr { span, expr: left }))
                    } else {
                        Expr::IsNullExpr(Box::new(IsNullExpr { span, expr: left }))
                    };
                    continue;
                }
                _ => break,
            };
            let right = if op == TokenType::Between {
                let between_start = self.pos()?;
                let low = self.parse_concat()?;
                self.expect(TokenType::And)?;
                let high = self.parse_concat()?;
                Expr::BinaryExpr(Box::new(BinaryExpr {
                    span: self.span_from(between_start),
                    left: low,
                    op: TokenType::And,
                    right: high,
                    has_global: false,
                    has_not: false,
                }))
            } else {
                self.parse_concat()?
            };
            left = Expr::BinaryExpr(Box::new(BinaryExpr {
                span: self.span_from(start),
                left,
                op,
                right,
                has_global,
                has_not,
            }));
        }
        Ok(left)
    }

    fn parse_concat(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.peek_type()? {
                TokenType::DPipe => TokenType::DPipe,
                TokenType::Pipe => TokenType::Pipe,
                _ => break,
            };
            self.next()?;
            let right = self.parse_additive()?;
            left = Expr::BinaryExpr(Box::new(BinaryExpr {
                span: self.span_from(start),
                left,
                op,
                right,
                has_global: false,
                has_not: false,
            }));
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek_type()? {
                TokenType::Plus => TokenType::Plus,
                TokenType::Dash => TokenType::Dash,
                _ => break,
            };
            self.next()?;
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryExpr(Box::new(BinaryExpr {
                span: self.span_from(start),
                left,
                op,
                right,
                has_global: false,
                has_not: false,
            }));
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let mut left = self.parse_cast_op()?;
        loop {
            let op = match self.peek_type()? {
                TokenType::Star => TokenType::Star,
                TokenType::Slash => TokenType::Slash,
                TokenType::Percent => TokenType::Percent,
                _ => break,
            };
            self.next()?;
            let right = self.parse_cast_op()?;
            left = Expr::BinaryExpr(Box::new(BinaryExpr {
                span: self.span_from(start),
                left,
                op,
                right,
                has_global: false,
                has_not: false,
            }));
        }
        Ok(left)
    }

    fn parse_cast_op(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let mut left = self.parse_unary()?;
        while self.accept(TokenType::DColon)? {
            let right = self.parse_unary()?;
            left = Expr::BinaryExpr(Box::new(BinaryExpr {
                span: self.span_from(start),
                left,
                op: TokenType::DColon,
                right,
                has_global: false,
                has_not: false,
            }));
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        if self.accept(TokenType::Dash)? {
            let expr = self.parse_unary()?;
            return Ok(Expr::NegateExpr(Box::new(NegateExpr {
                span: self.span_from(start),
                expr,
            })));
        }
        if self.accept(TokenType::Plus)? {
            let expr = self.parse_unary()?;
            return Ok(Expr::UnaryExpr(Box::new(UnaryExpr {
                span: self.span_from(start),
                kind: TokenType::Plus,
                expr,
            })));
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let mut expr = self.parse_primary()?;
        while self.peek_type()? == TokenType::LBracket {
            let params = self.parse_array_param_list()?;
            expr = Expr::ObjectParams(Box::new(ObjectParams {
                span: self.span_from(start),
                object: expr,
                params,
            }));
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        match self.peek_type()? {
            TokenType::Number => {
                let token = self.next()?;
                Ok(Expr::NumberLiteral(Box::new(NumberLiteral::new(
                    token.span, token.text,
                ))))
            }
            TokenType::String => {
                let token = self.next()?;
                Ok(Expr::StringLiteral(Box::new(StringLiteral {
                    span: token.span,
                    literal: token.text,
                })))
            }
            TokenType::Null => {
                let token = self.next()?;
                Ok(Expr::NullLiteral(Box::new(NullLiteral { span: token.span })))
            }
            TokenType::Star => {
                let token = self.next()?;
                Ok(Expr::Ident(Box::new(Ident::new(
                    token.span,
                    "*",
                    QuoteStyle::None,
                ))))
            }
            TokenType::Case => self.parse_case(),
            TokenType::Cast => self.parse_cast(),
            TokenType::Extract => self.parse_extract(),
            TokenType::Interval => self.parse_interval(),
            // bare subquery argument, e.g. exists(SELECT ...)
            TokenType::Select => {
                let select = self.parse_select_query()?;
                Ok(Expr::SelectQuery(Box::new(select)))
            }
            TokenType::LParen => {
                self.next()?;
                if matches!(self.peek_type()?, TokenType::Select | TokenType::With) {
                    // a parenthesized subquery keeps its parens by living in
                    // a one-element list
                    let select = self.parse_select_query()?;
                    self.expect(TokenType::RParen)?;
                    let span = self.span_from(start);
                    return Ok(Expr::ParamExprList(Box::new(ParamExprList {
                        span,
                        items: ColumnExprList {
                            span,
                            has_distinct: false,
                            items: vec![Expr::SelectQuery(Box::new(select))],
                        },
                        column_arg_list: None,
                    })));
                }
                let mut items = Vec::new();
                if self.peek_type()? != TokenType::RParen {
                    items.push(self.parse_expr()?);
                    while self.accept(TokenType::Comma)? {
                        items.push(self.parse_expr()?);
                    }
                }
                self.expect(TokenType::RParen)?;
                let span = self.span_from(start);
                Ok(Expr::ParamExprList(Box::new(ParamExprList {
                    span,
                    items: ColumnExprList {
                        span,
                        has_distinct: false,
                        items,
                    },
                    column_arg_list: None,
                })))
            }
            TokenType::LBracket => {
                let params = self.parse_array_param_list()?;
                Ok(Expr::ArrayParamList(Box::new(params)))
            }
            _ => self.parse_ident_expr(),
        }
    }

    /// Identifier-led expressions: plain and qualified names, function
    /// calls, parameterized functions, and window functions
    fn parse_ident_expr(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let first = self.parse_ident()?;

        if self.peek_type()? == TokenType::Dot {
            self.next()?;
            let second = self.parse_ident_or_star()?;
            if self.peek_type()? == TokenType::Dot {
                self.next()?;
                let third = self.parse_ident_or_star()?;
                return Ok(Expr::ColumnIdentifier(Box::new(ColumnIdentifier {
                    span: self.span_from(start),
                    database: Some(first),
                    table: Some(second),
                    column: third,
                })));
            }
            return Ok(Expr::ColumnIdentifier(Box::new(ColumnIdentifier {
                span: self.span_from(start),
                database: None,
                table: Some(first),
                column: second,
            })));
        }

        if self.peek_type()? == TokenType::LParen {
            let params = self.parse_function_params()?;
            let function = FunctionExpr {
                span: self.span_from(start),
                name: first,
                params,
            };
            if self.accept(TokenType::Over)? {
                let over = if self.peek_type()? == TokenType::LParen {
                    let condition = self.parse_window_condition()?;
                    Expr::WindowConditionExpr(Box::new(condition))
                } else {
                    let name = self.parse_ident()?;
                    Expr::Ident(Box::new(name))
                };
                return Ok(Expr::WindowFunctionExpr(Box::new(WindowFunctionExpr {
                    span: self.span_from(start),
                    function,
                    over,
                })));
            }
            return Ok(Expr::FunctionExpr(Box::new(function)));
        }

        Ok(Expr::Ident(Box::new(first)))
    }

    /// Accept an identifier, quoted identifier, or keyword used as a name;
    /// the original text and quote style are preserved
    pub(crate) fn parse_ident(&mut self) -> Result<Ident> {
        let token_type = self.peek_type()?;
        if token_type == TokenType::Identifier
            || token_type == TokenType::QuotedIdentifier
            || token_type.is_keyword()
        {
            let token = self.next()?;
            Ok(Ident::new(token.span, token.text, token.quote_style))
        } else {
            self.unexpected("an identifier")
        }
    }

    fn parse_ident_or_star(&mut self) -> Result<Ident> {
        if self.peek_type()? == TokenType::Star {
            let token = self.next()?;
            return Ok(Ident::new(token.span, "*", QuoteStyle::None));
        }
        self.parse_ident()
    }

    /// `a` or `a.b`
    pub(crate) fn parse_nested_identifier(&mut self) -> Result<NestedIdentifier> {
        let start = self.pos()?;
        let ident = self.parse_ident()?;
        let dot_ident = if self.accept(TokenType::Dot)? {
            Some(self.parse_ident()?)
        } else {
            None
        };
        Ok(NestedIdentifier {
            span: self.span_from(start),
            ident,
            dot_ident,
        })
    }

    /// `[db.]table`; parts may be `*` in GRANT targets
    pub(crate) fn parse_table_identifier(&mut self) -> Result<TableIdentifier> {
        let start = self.pos()?;
        let first = self.parse_ident_or_star()?;
        if self.accept(TokenType::Dot)? {
            let table = self.parse_ident_or_star()?;
            return Ok(TableIdentifier {
                span: self.span_from(start),
                database: Some(first),
                table,
            });
        }
        Ok(TableIdentifier {
            span: self.span_from(start),
            database: None,
            table: first,
        })
    }

    /// Function argument lists: `(args)`, `(DISTINCT args)`, and the
    /// parameterized form `(params)(args)`
    fn parse_function_params(&mut self) -> Result<ParamExprList> {
        let start = self.pos()?;
        self.expect(TokenType::LParen)?;
        let has_distinct = self.accept(TokenType::Distinct)?;
        let mut items = Vec::new();
        if self.peek_type()? != TokenType::RParen {
            items.push(self.parse_expr()?);
            while self.accept(TokenType::Comma)? {
                items.push(self.parse_expr()?);
            }
        }
        self.expect(TokenType::RParen)?;
        let items = ColumnExprList {
            span: self.span_from(start),
            has_distinct,
            items,
        };

        let column_arg_list = if self.peek_type()? == TokenType::LParen {
            let args_start = self.pos()?;
            self.next()?;
            let distinct = self.accept(TokenType::Distinct)?;
            let mut args = Vec::new();
            if self.peek_type()? != TokenType::RParen {
                args.push(self.parse_expr()?);
                while self.accept(TokenType::Comma)? {
                    args.push(self.parse_expr()?);
                }
            }
            self.expect(TokenType::RParen)?;
            Some(ColumnArgList {
                span: self.span_from(args_start),
                distinct,
                items: args,
            })
        } else {
            None
        };

        Ok(ParamExprList {
            span: self.span_from(start),
            items,
            column_arg_list,
        })
    }

    fn parse_array_param_list(&mut self) -> Result<ArrayParamList> {
        let start = self.pos()?;
        self.expect(TokenType::LBracket)?;
        let mut items = Vec::new();
        if self.peek_type()? != TokenType::RBracket {
            items.push(self.parse_expr()?);
            while self.accept(TokenType::Comma)? {
                items.push(self.parse_expr()?);
            }
        }
        self.expect(TokenType::RBracket)?;
        let span = self.span_from(start);
        Ok(ArrayParamList {
            span,
            items: ColumnExprList {
                span,
                has_distinct: false,
                items,
            },
        })
    }

    fn parse_case(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Case)?;
        let expr = if self.peek_type()? != TokenType::When {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let mut whens = Vec::new();
        while self.peek_type()? == TokenType::When {
            let when_start = self.pos()?;
            self.next()?;
            let when = self.parse_expr()?;
            self.expect(TokenType::Then)?;
            let then = self.parse_expr()?;
            whens.push(WhenExpr {
                span: self.span_from(when_start),
                when,
                then,
            });
        }
        let else_expr = if self.accept(TokenType::Else)? {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(TokenType::End)?;
        Ok(Expr::CaseExpr(Box::new(CaseExpr {
            span: self.span_from(start),
            expr,
            whens,
            else_expr,
        })))
    }

    fn parse_cast(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Cast)?;
        self.expect(TokenType::LParen)?;
        let expr = self.parse_expr()?;
        let comma_separated = if self.accept(TokenType::Comma)? {
            true
        } else {
            self.expect(TokenType::As)?;
            false
        };
        let as_type = self.parse_column_type()?;
        self.expect(TokenType::RParen)?;
        Ok(Expr::CastExpr(Box::new(CastExpr {
            span: self.span_from(start),
            expr,
            as_type,
            comma_separated,
        })))
    }

    fn parse_extract(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Extract)?;
        self.expect(TokenType::LParen)?;
        let interval = self.parse_ident()?;
        self.expect(TokenType::From)?;
        let from_expr = self.parse_expr()?;
        self.expect(TokenType::RParen)?;
        Ok(Expr::ExtractExpr(Box::new(ExtractExpr {
            span: self.span_from(start),
            interval,
            from_expr,
        })))
    }

    fn parse_interval(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        self.expect(TokenType::Interval)?;
        let expr = self.parse_unary()?;
        let unit = self.parse_ident()?;
        Ok(Expr::IntervalExpr(Box::new(IntervalExpr {
            span: self.span_from(start),
            expr,
            unit,
        })))
    }

    /// Column types: `UInt32`, `FixedString(32)`, `Array(T)`,
    /// `Enum8('a' = 1)`, `Nested(col T, ...)`
    pub(crate) fn parse_column_type(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let name = self.parse_ident()?;
        if self.peek_type()? != TokenType::LParen {
            return Ok(Expr::ScalarTypeExpr(Box::new(ScalarTypeExpr {
                span: self.span_from(start),
                name,
            })));
        }
        self.next()?;

        if name.name.to_ascii_uppercase().starts_with("ENUM")
            && self.peek_type()? == TokenType::String
        {
            let list_start = self.pos()?;
            let mut enums = Vec::new();
            enums.push(self.parse_enum_value()?);
            while self.accept(TokenType::Comma)? {
                enums.push(self.parse_enum_value()?);
            }
            self.expect(TokenType::RParen)?;
            let list = EnumValueExprList {
                span: self.span_from(list_start),
                enums,
            };
            return Ok(Expr::TypeWithParamsExpr(Box::new(TypeWithParamsExpr {
                span: self.span_from(start),
                name,
                params: vec![Expr::EnumValueExprList(Box::new(list))],
            })));
        }

        if name.name.eq_ignore_ascii_case("Nested") {
            let mut columns = Vec::new();
            columns.push(self.parse_nested_type_column()?);
            while self.accept(TokenType::Comma)? {
                columns.push(self.parse_nested_type_column()?);
            }
            self.expect(TokenType::RParen)?;
            return Ok(Expr::NestedTypeExpr(Box::new(NestedTypeExpr {
                span: self.span_from(start),
                name,
                columns,
            })));
        }

        let mut params = Vec::new();
        if self.peek_type()? != TokenType::RParen {
            params.push(self.parse_type_param()?);
            while self.accept(TokenType::Comma)? {
                params.push(self.parse_type_param()?);
            }
        }
        self.expect(TokenType::RParen)?;
        let span = self.span_from(start);

        let all_literal = params.iter().all(|param| {
            matches!(
                param,
                Expr::NumberLiteral(_)
                    | Expr::StringLiteral(_)
                    | Expr::NegateExpr(_)
                    | Expr::EnumValueExpr(_)
            )
        });
        if all_literal && !params.is_empty() {
            Ok(Expr::TypeWithParamsExpr(Box::new(TypeWithParamsExpr {
                span,
                name,
                params,
            })))
        } else {
            Ok(Expr::ComplexTypeExpr(Box::new(ComplexTypeExpr {
                span,
                name,
                params,
            })))
        }
    }

    fn parse_enum_value(&mut self) -> Result<EnumValueExpr> {
        let start = self.pos()?;
        let token = self.expect(TokenType::String)?;
        let name = StringLiteral {
            span: token.span,
            literal: token.text,
        };
        self.expect(TokenType::Eq)?;
        let negative = self.accept(TokenType::Dash)?;
        let number = self.expect(TokenType::Number)?;
        let mut value = NumberLiteral::new(number.span, number.text);
        if negative {
            value.literal.insert(0, '-');
        }
        Ok(EnumValueExpr {
            span: self.span_from(start),
            name,
            value,
        })
    }

    fn parse_type_param(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        match self.peek_type()? {
            TokenType::Number => {
                let token = self.next()?;
                Ok(Expr::NumberLiteral(Box::new(NumberLiteral::new(
                    token.span, token.text,
                ))))
            }
            TokenType::Dash => {
                self.next()?;
                let token = self.expect(TokenType::Number)?;
                let literal = NumberLiteral::new(token.span, token.text);
                Ok(Expr::NegateExpr(Box::new(NegateExpr {
                    span: self.span_from(start),
                    expr: Expr::NumberLiteral(Box::new(literal)),
                })))
            }
            TokenType::String => {
                let token = self.next()?;
                let name = StringLiteral {
                    span: token.span,
                    literal: token.text,
                };
                if self.accept(TokenType::Eq)? {
                    let negative = self.accept(TokenType::Dash)?;
                    let number = self.expect(TokenType::Number)?;
                    let mut literal = NumberLiteral::new(number.span, number.text);
                    if negative {
                        literal.literal.insert(0, '-');
                    }
                    return Ok(Expr::EnumValueExpr(Box::new(EnumValueExpr {
                        span: self.span_from(start),
                        name,
                        value: literal,
                    })));
                }
                Ok(Expr::StringLiteral(Box::new(name)))
            }
            _ => self.parse_column_type(),
        }
    }

    fn parse_nested_type_column(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let name = self.parse_nested_identifier()?;
        let column_type = self.parse_column_type()?;
        Ok(Expr::Column(Box::new(Column {
            span: self.span_from(start),
            name,
            column_type: Some(column_type),
            not_null: None,
            nullable: None,
            property: None,
            codec: None,
            ttl: None,
            comment: None,
        })))
    }

    /// Comma-separated expression list with optional `expr AS alias` items
    pub(crate) fn parse_column_expr_list(&mut self) -> Result<ColumnExprList> {
        let start = self.pos()?;
        let mut items = Vec::new();
        items.push(self.parse_column_expr()?);
        while self.accept(TokenType::Comma)? {
            items.push(self.parse_column_expr()?);
        }
        Ok(ColumnExprList {
            span: self.span_from(start),
            has_distinct: false,
            items,
        })
    }

    pub(crate) fn parse_column_expr(&mut self) -> Result<Expr> {
        let start = self.pos()?;
        let expr = self.parse_expr()?;
        if self.accept(TokenType::As)? {
            let alias = self.parse_ident()?;
            return Ok(Expr::AliasExpr(Box::new(AliasExpr {
                span: self.span_from(start),
                expr,
                alias: Expr::Ident(Box::new(alias)),
            })));
        }
        Ok(expr)
    }
}
