//! Level-aware SQL rendering for the AST
//!
//! Every node knows how to print itself back to ClickHouse SQL via
//! `sql(level)`. `level` is the indentation depth; [`new_line`] produces a
//! newline followed by two spaces per level. Keywords are emitted in upper
//! case, identifiers keep their captured quote style, and numeric literals
//! keep their original lexeme, so printing a parsed tree and re-parsing the
//! output yields a structurally identical tree.

use crate::ast::*;
use crate::tokens::{QuoteStyle, TokenType};

/// Newline followed by `2 * level` spaces
pub fn new_line(level: usize) -> String {
    let mut s = String::with_capacity(1 + level * 2);
    s.push('\n');
    for _ in 0..level * 2 {
        s.push(' ');
    }
    s
}

/// SQL text of a binary operator token
pub fn operator_str(op: TokenType) -> &'static str {
    match op {
        TokenType::Eq => "=",
        TokenType::Neq => "!=",
        TokenType::Lt => "<",
        TokenType::Lte => "<=",
        TokenType::Gt => ">",
        TokenType::Gte => ">=",
        TokenType::Plus => "+",
        TokenType::Dash => "-",
        TokenType::Star => "*",
        TokenType::Slash => "/",
        TokenType::Percent => "%",
        TokenType::Pipe => "|",
        TokenType::DPipe => "||",
        TokenType::Arrow => "->",
        TokenType::DColon => "::",
        TokenType::In => "IN",
        TokenType::Like => "LIKE",
        TokenType::ILike => "ILIKE",
        TokenType::Between => "BETWEEN",
        TokenType::And => "AND",
        TokenType::Or => "OR",
        _ => "",
    }
}

impl Expr {
    /// Render this node as SQL at the given indentation level
    pub fn sql(&self, level: usize) -> String {
        use Expr::*;
        match self {
            NumberLiteral(x) => x.sql(level),
            StringLiteral(x) => x.sql(level),
            NullLiteral(x) => x.sql(level),
            NotNullLiteral(x) => x.sql(level),
            IntervalExpr(x) => x.sql(level),
            RatioExpr(x) => x.sql(level),
            EnumValueExpr(x) => x.sql(level),
            EnumValueExprList(x) => x.sql(level),
            Ident(x) => x.sql(level),
            NestedIdentifier(x) => x.sql(level),
            ColumnIdentifier(x) => x.sql(level),
            TableIdentifier(x) => x.sql(level),
            Uuid(x) => x.sql(level),
            TernaryExpr(x) => x.sql(level),
            BinaryExpr(x) => x.sql(level),
            UnaryExpr(x) => x.sql(level),
            NegateExpr(x) => x.sql(level),
            NotExpr(x) => x.sql(level),
            GlobalInExpr(x) => x.sql(level),
            IsNullExpr(x) => x.sql(level),
            IsNotNullExpr(x) => x.sql(level),
            CaseExpr(x) => x.sql(level),
            WhenExpr(x) => x.sql(level),
            CastExpr(x) => x.sql(level),
            ExtractExpr(x) => x.sql(level),
            FunctionExpr(x) => x.sql(level),
            WindowFunctionExpr(x) => x.sql(level),
            ObjectParams(x) => x.sql(level),
            AliasExpr(x) => x.sql(level),
            SubQueryExpr(x) => x.sql(level),
            ParamExprList(x) => x.sql(level),
            ArrayParamList(x) => x.sql(level),
            ColumnArgList(x) => x.sql(level),
            ColumnExprList(x) => x.sql(level),
            ScalarTypeExpr(x) => x.sql(level),
            PropertyTypeExpr(x) => x.sql(level),
            TypeWithParamsExpr(x) => x.sql(level),
            ComplexTypeExpr(x) => x.sql(level),
            NestedTypeExpr(x) => x.sql(level),
            CompressionCodec(x) => x.sql(level),
            SelectQuery(x) => x.sql(level),
            WithExpr(x) => x.sql(level),
            CteExpr(x) => x.sql(level),
            TopExpr(x) => x.sql(level),
            FromExpr(x) => x.sql(level),
            TableExpr(x) => x.sql(level),
            JoinExpr(x) => x.sql(level),
            JoinTableExpr(x) => x.sql(level),
            JoinConstraintExpr(x) => x.sql(level),
            SampleRatioExpr(x) => x.sql(level),
            ArrayJoinExpr(x) => x.sql(level),
            WindowExpr(x) => x.sql(level),
            WindowConditionExpr(x) => x.sql(level),
            WindowFrameExpr(x) => x.sql(level),
            WindowFrameExtendExpr(x) => x.sql(level),
            WindowFrameRangeExpr(x) => x.sql(level),
            WindowFrameCurrentRow(x) => x.sql(level),
            WindowFrameUnbounded(x) => x.sql(level),
            WindowFrameNumber(x) => x.sql(level),
            PrewhereExpr(x) => x.sql(level),
            WhereExpr(x) => x.sql(level),
            GroupByExpr(x) => x.sql(level),
            HavingExpr(x) => x.sql(level),
            OrderByExpr(x) => x.sql(level),
            OrderByListExpr(x) => x.sql(level),
            LimitExpr(x) => x.sql(level),
            LimitByExpr(x) => x.sql(level),
            SettingsExpr(x) => x.sql(level),
            SettingsExprList(x) => x.sql(level),
            CreateDatabase(x) => x.sql(level),
            CreateTable(x) => x.sql(level),
            CreateView(x) => x.sql(level),
            CreateMaterializedView(x) => x.sql(level),
            CreateLiveView(x) => x.sql(level),
            WithTimeoutExpr(x) => x.sql(level),
            CreateFunction(x) => x.sql(level),
            CreateRole(x) => x.sql(level),
            AlterRole(x) => x.sql(level),
            RoleName(x) => x.sql(level),
            RoleSetting(x) => x.sql(level),
            SettingPair(x) => x.sql(level),
            RoleRenamePair(x) => x.sql(level),
            AlterTable(x) => x.sql(level),
            AlterTableAttachPartition(x) => x.sql(level),
            AlterTableDetachPartition(x) => x.sql(level),
            AlterTableDropPartition(x) => x.sql(level),
            AlterTableFreezePartition(x) => x.sql(level),
            AlterTableReplacePartition(x) => x.sql(level),
            AlterTableAddColumn(x) => x.sql(level),
            AlterTableAddIndex(x) => x.sql(level),
            AlterTableDropColumn(x) => x.sql(level),
            AlterTableDropIndex(x) => x.sql(level),
            AlterTableClearColumn(x) => x.sql(level),
            AlterTableClearIndex(x) => x.sql(level),
            AlterTableRenameColumn(x) => x.sql(level),
            AlterTableModifyColumn(x) => x.sql(level),
            AlterTableModifyTtl(x) => x.sql(level),
            AlterTableRemoveTtl(x) => x.sql(level),
            RemovePropertyType(x) => x.sql(level),
            TableIndex(x) => x.sql(level),
            DropDatabase(x) => x.sql(level),
            DropStmt(x) => x.sql(level),
            DropUserOrRole(x) => x.sql(level),
            TruncateTable(x) => x.sql(level),
            RenameStmt(x) => x.sql(level),
            TargetPair(x) => x.sql(level),
            ExplainExpr(x) => x.sql(level),
            DescribeStmt(x) => x.sql(level),
            UseExpr(x) => x.sql(level),
            SetExpr(x) => x.sql(level),
            SystemExpr(x) => x.sql(level),
            SystemFlushExpr(x) => x.sql(level),
            SystemReloadExpr(x) => x.sql(level),
            SystemSyncExpr(x) => x.sql(level),
            SystemCtrlExpr(x) => x.sql(level),
            SystemDropExpr(x) => x.sql(level),
            OptimizeExpr(x) => x.sql(level),
            DeduplicateExpr(x) => x.sql(level),
            CheckExpr(x) => x.sql(level),
            InsertExpr(x) => x.sql(level),
            ColumnNamesExpr(x) => x.sql(level),
            ValuesExpr(x) => x.sql(level),
            FormatExpr(x) => x.sql(level),
            DeleteFromExpr(x) => x.sql(level),
            GrantPrivilegeExpr(x) => x.sql(level),
            PrivilegeExpr(x) => x.sql(level),
            OnClusterExpr(x) => x.sql(level),
            EngineExpr(x) => x.sql(level),
            DestinationExpr(x) => x.sql(level),
            TableSchemaExpr(x) => x.sql(level),
            TableArgListExpr(x) => x.sql(level),
            TableFunctionExpr(x) => x.sql(level),
            Column(x) => x.sql(level),
            ColumnPropertyExpr(x) => x.sql(level),
            ConstraintExpr(x) => x.sql(level),
            PartitionExpr(x) => x.sql(level),
            PartitionByExpr(x) => x.sql(level),
            PrimaryKeyExpr(x) => x.sql(level),
            SampleByExpr(x) => x.sql(level),
            TtlExpr(x) => x.sql(level),
            TtlExprList(x) => x.sql(level),
        }
    }
}

fn join_sql(items: &[Expr], level: usize, sep: &str) -> String {
    items
        .iter()
        .map(|item| item.sql(level))
        .collect::<Vec<_>>()
        .join(sep)
}

// ---------------------------------------------------------------------------
// Literals and identifiers
// ---------------------------------------------------------------------------

impl NumberLiteral {
    pub fn sql(&self, _level: usize) -> String {
        self.literal.clone()
    }
}

impl StringLiteral {
    pub fn sql(&self, _level: usize) -> String {
        format!("'{}'", self.literal)
    }
}

impl NullLiteral {
    pub fn sql(&self, _level: usize) -> String {
        "NULL".to_string()
    }
}

impl NotNullLiteral {
    pub fn sql(&self, _level: usize) -> String {
        "NOT NULL".to_string()
    }
}

impl IntervalExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("INTERVAL {} {}", self.expr.sql(level), self.unit.sql(level))
    }
}

impl RatioExpr {
    pub fn sql(&self, level: usize) -> String {
        match &self.denominator {
            Some(denominator) => {
                format!("{}/{}", self.numerator.sql(level), denominator.sql(level))
            }
            None => self.numerator.sql(level),
        }
    }
}

impl EnumValueExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("{}={}", self.name.sql(level), self.value.sql(level))
    }
}

impl EnumValueExprList {
    pub fn sql(&self, level: usize) -> String {
        self.enums
            .iter()
            .map(|e| e.sql(level))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Ident {
    pub fn sql(&self, _level: usize) -> String {
        match self.quote_style {
            QuoteStyle::BackTicks => format!("`{}`", self.name),
            QuoteStyle::DoubleQuote => format!("\"{}\"", self.name),
            QuoteStyle::None => self.name.clone(),
        }
    }
}

impl NestedIdentifier {
    pub fn sql(&self, _level: usize) -> String {
        match &self.dot_ident {
            Some(dot_ident) => format!("{}.{}", self.ident.sql(0), dot_ident.sql(0)),
            None => self.ident.sql(0),
        }
    }
}

impl ColumnIdentifier {
    pub fn sql(&self, _level: usize) -> String {
        match (&self.database, &self.table) {
            (Some(database), Some(table)) => {
                format!("{}.{}.{}", database.sql(0), table.sql(0), self.column.sql(0))
            }
            (None, Some(table)) => format!("{}.{}", table.sql(0), self.column.sql(0)),
            _ => self.column.sql(0),
        }
    }
}

impl TableIdentifier {
    pub fn sql(&self, _level: usize) -> String {
        match &self.database {
            Some(database) => format!("{}.{}", database.sql(0), self.table.sql(0)),
            None => self.table.sql(0),
        }
    }
}

impl Uuid {
    pub fn sql(&self, level: usize) -> String {
        format!("UUID {}", self.value.sql(level))
    }
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

impl TernaryExpr {
    pub fn sql(&self, level: usize) -> String {
        format!(
            "{} ? {} : {}",
            self.condition.sql(level),
            self.true_expr.sql(level),
            self.false_expr.sql(level)
        )
    }
}

impl BinaryExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::new();
        out.push_str(&self.left.sql(level));
        if self.op != TokenType::DColon {
            out.push(' ');
        }
        if self.has_not {
            out.push_str("NOT ");
        } else if self.has_global {
            out.push_str("GLOBAL ");
        }
        out.push_str(operator_str(self.op));
        if self.op != TokenType::DColon {
            out.push(' ');
        }
        out.push_str(&self.right.sql(level));
        out
    }
}

impl UnaryExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("{}{}", operator_str(self.kind), self.expr.sql(level + 1))
    }
}

impl NegateExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("-{}", self.expr.sql(level + 1))
    }
}

impl NotExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("NOT {}", self.expr.sql(level + 1))
    }
}

impl GlobalInExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("GLOBAL {}", self.expr.sql(level + 1))
    }
}

impl IsNullExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("{} IS NULL", self.expr.sql(level))
    }
}

impl IsNotNullExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("{} IS NOT NULL", self.expr.sql(level))
    }
}

impl CaseExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("CASE");
        if let Some(expr) = &self.expr {
            out.push(' ');
            out.push_str(&expr.sql(level));
        }
        for when in &self.whens {
            out.push_str(&new_line(level + 1));
            out.push_str(&when.sql(level + 1));
        }
        if let Some(else_expr) = &self.else_expr {
            out.push_str(&new_line(level + 1));
            out.push_str("ELSE ");
            out.push_str(&else_expr.sql(level + 1));
        }
        out.push_str(&new_line(level));
        out.push_str("END");
        out
    }
}

impl WhenExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("WHEN {} THEN {}", self.when.sql(level), self.then.sql(level))
    }
}

impl CastExpr {
    pub fn sql(&self, level: usize) -> String {
        let separator = if self.comma_separated { ", " } else { " AS " };
        format!(
            "CAST({}{}{})",
            self.expr.sql(level),
            separator,
            self.as_type.sql(level)
        )
    }
}

impl ExtractExpr {
    pub fn sql(&self, level: usize) -> String {
        format!(
            "EXTRACT({} FROM {})",
            self.interval.sql(level),
            self.from_expr.sql(level)
        )
    }
}

impl FunctionExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("{}{}", self.name.sql(level), self.params.sql(level))
    }
}

impl WindowFunctionExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("{} OVER {}", self.function.sql(level), self.over.sql(level))
    }
}

impl ObjectParams {
    pub fn sql(&self, level: usize) -> String {
        format!("{}{}", self.object.sql(level), self.params.sql(level))
    }
}

impl AliasExpr {
    pub fn sql(&self, level: usize) -> String {
        let expr = if matches!(self.expr, Expr::SelectQuery(_)) {
            format!("({})", self.expr.sql(level))
        } else {
            self.expr.sql(level)
        };
        format!("{} AS {}", expr, self.alias.sql(level))
    }
}

impl SubQueryExpr {
    pub fn sql(&self, level: usize) -> String {
        format!(
            " AS ({}{})",
            self.select.sql(level + 1),
            new_line(level)
        )
    }
}

impl ParamExprList {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("(");
        if self.items.has_distinct {
            out.push_str("DISTINCT ");
        }
        out.push_str(&join_sql(&self.items.items, level, ", "));
        out.push(')');
        if let Some(column_arg_list) = &self.column_arg_list {
            out.push_str(&column_arg_list.sql(level));
        }
        out
    }
}

impl ArrayParamList {
    pub fn sql(&self, level: usize) -> String {
        format!("[{}]", join_sql(&self.items.items, level, ", "))
    }
}

impl ColumnArgList {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("(");
        if self.distinct {
            out.push_str("DISTINCT ");
        }
        out.push_str(&join_sql(&self.items, level, ", "));
        out.push(')');
        out
    }
}

impl ColumnExprList {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::new();
        if self.has_distinct {
            out.push_str("DISTINCT ");
        }
        out.push_str(&join_sql(&self.items, level, ", "));
        out
    }
}

// ---------------------------------------------------------------------------
// Type expressions
// ---------------------------------------------------------------------------

impl ScalarTypeExpr {
    pub fn sql(&self, level: usize) -> String {
        self.name.sql(level)
    }
}

impl PropertyTypeExpr {
    pub fn sql(&self, level: usize) -> String {
        self.name.sql(level)
    }
}

impl TypeWithParamsExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("{}({})", self.name.sql(level), join_sql(&self.params, level, ", "))
    }
}

impl ComplexTypeExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("{}({})", self.name.sql(level), join_sql(&self.params, level, ", "))
    }
}

impl NestedTypeExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::new();
        out.push_str(&self.name.sql(level));
        out.push('(');
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&new_line(level + 2));
            out.push_str(&column.sql(level));
        }
        out.push(')');
        out
    }
}

impl CompressionCodec {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("CODEC(");
        out.push_str(&self.name.sql(level));
        if let Some(codec_level) = &self.level {
            out.push('(');
            out.push_str(&codec_level.sql(level));
            out.push(')');
        }
        out.push(')');
        out
    }
}

// ---------------------------------------------------------------------------
// SELECT
// ---------------------------------------------------------------------------

impl SelectQuery {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::new();
        if let Some(with) = &self.with {
            out.push_str("WITH");
            for (i, cte) in with.ctes.iter().enumerate() {
                out.push_str(&new_line(level + 1));
                out.push_str(&cte.sql(level));
                if i != with.ctes.len() - 1 {
                    out.push(',');
                }
            }
        }
        out.push_str(&new_line(level));
        out.push_str("SELECT ");
        if let Some(top) = &self.top {
            out.push_str(&top.sql(level));
            out.push(' ');
        }
        if self.select_columns.has_distinct {
            out.push_str("DISTINCT ");
        }
        for (i, column) in self.select_columns.items.iter().enumerate() {
            out.push_str(&new_line(level + 1));
            out.push_str(&column.sql(level));
            if i != self.select_columns.items.len() - 1 {
                out.push(',');
            }
        }
        if let Some(from) = &self.from {
            out.push_str(&new_line(level));
            out.push_str(&from.sql(level));
        }
        if let Some(array_join) = &self.array_join {
            out.push_str(&new_line(level));
            out.push_str(&array_join.sql(level));
        }
        if let Some(window) = &self.window {
            out.push_str(&new_line(level));
            out.push_str(&window.sql(level));
        }
        if let Some(prewhere) = &self.prewhere {
            out.push_str(&new_line(level));
            out.push_str(&prewhere.sql(level));
        }
        if let Some(where_clause) = &self.where_clause {
            out.push_str(&new_line(level));
            out.push_str(&where_clause.sql(level));
        }
        if let Some(group_by) = &self.group_by {
            out.push_str(&new_line(level));
            out.push_str(&group_by.sql(level));
        }
        if let Some(having) = &self.having {
            out.push_str(&new_line(level));
            out.push_str(&having.sql(level));
        }
        if let Some(order_by) = &self.order_by {
            out.push_str(&new_line(level));
            out.push_str(&order_by.sql(level));
        }
        if let Some(limit_by) = &self.limit_by {
            out.push_str(&new_line(level));
            out.push_str(&limit_by.sql(level));
        }
        if let Some(limit) = &self.limit {
            out.push_str(&new_line(level));
            out.push_str(&limit.sql(level));
        }
        if let Some(settings) = &self.settings {
            out.push_str(&new_line(level));
            out.push_str(&settings.sql(level));
        }
        if let Some(union_all) = &self.union_all {
            out.push_str(&new_line(level));
            out.push_str(" UNION ALL ");
            out.push_str(&union_all.sql(level));
        } else if let Some(union_distinct) = &self.union_distinct {
            out.push_str(&new_line(level));
            out.push_str(" UNION DISTINCT ");
            out.push_str(&union_distinct.sql(level));
        } else if let Some(except) = &self.except {
            out.push_str(&new_line(level));
            out.push_str(" EXCEPT ");
            out.push_str(&except.sql(level));
        }
        out
    }
}

impl WithExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("WITH ");
        for (i, cte) in self.ctes.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&cte.sql(level + 1));
        }
        out
    }
}

impl CteExpr {
    pub fn sql(&self, level: usize) -> String {
        let alias = if matches!(self.alias, Expr::SelectQuery(_)) {
            format!("({})", self.alias.sql(level + 2))
        } else {
            self.alias.sql(level)
        };
        format!("{} AS {}", self.expr.sql(level), alias)
    }
}

impl TopExpr {
    pub fn sql(&self, _level: usize) -> String {
        let mut out = format!("TOP {}", self.number.literal);
        if self.with_ties {
            out.push_str(" WITH TIES");
        }
        out
    }
}

impl FromExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("FROM{}{}", new_line(level + 1), self.expr.sql(level + 1))
    }
}

impl TableExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = if matches!(self.expr, Expr::SelectQuery(_)) {
            format!("({})", self.expr.sql(level + 1))
        } else {
            self.expr.sql(level + 1)
        };
        if let Some(alias) = &self.alias {
            out.push_str(" AS ");
            out.push_str(&alias.sql(level + 1));
        }
        if self.has_final {
            out.push_str(" FINAL");
        }
        out
    }
}

fn build_join_sql(out: &mut String, expr: &Expr, level: usize) {
    let join = match expr {
        Expr::JoinExpr(join) => join,
        other => {
            out.push(',');
            out.push_str(&other.sql(level));
            return;
        }
    };
    if join.modifiers.is_empty() {
        out.push(',');
    } else {
        out.push_str(&new_line(level));
        out.push_str(&join.modifiers.join(" "));
        out.push(' ');
    }
    out.push_str(&join.left.sql(level));
    if let Some(constraints) = &join.constraints {
        out.push(' ');
        out.push_str(&constraints.sql(level));
    }
    if let Some(right) = &join.right {
        build_join_sql(out, right, level);
    }
}

impl JoinExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = self.left.sql(level);
        if let Some(right) = &self.right {
            build_join_sql(&mut out, right, level);
        }
        out
    }
}

impl JoinTableExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = self.table.sql(level);
        if self.has_final {
            out.push_str(" FINAL");
        }
        if let Some(sample_ratio) = &self.sample_ratio {
            out.push(' ');
            out.push_str(&sample_ratio.sql(level));
        }
        out
    }
}

impl JoinConstraintExpr {
    pub fn sql(&self, level: usize) -> String {
        match (&self.on, &self.using) {
            (Some(on), _) => format!("ON {}", on.sql(level)),
            (None, Some(using)) => format!("USING {}", using.sql(level)),
            (None, None) => String::new(),
        }
    }
}

impl SampleRatioExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = format!("SAMPLE {}", self.ratio.sql(level));
        if let Some(offset) = &self.offset {
            out.push_str(" OFFSET ");
            out.push_str(&offset.sql(level));
        }
        out
    }
}

impl ArrayJoinExpr {
    pub fn sql(&self, level: usize) -> String {
        if self.kind.is_empty() {
            format!("ARRAY JOIN {}", self.expr.sql(level))
        } else {
            format!("{} ARRAY JOIN {}", self.kind, self.expr.sql(level))
        }
    }
}

impl WindowExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("WINDOW {} AS {}", self.name.sql(level), self.condition.sql(level))
    }
}

impl WindowConditionExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("(");
        if let Some(partition_by) = &self.partition_by {
            out.push_str(&new_line(level + 1));
            out.push_str(&partition_by.sql(level));
        }
        if let Some(order_by) = &self.order_by {
            out.push_str(&new_line(level + 1));
            out.push_str(&order_by.sql(level));
        }
        if let Some(frame) = &self.frame {
            out.push_str(&new_line(level + 1));
            out.push_str(&frame.sql(level));
        }
        out.push(')');
        out
    }
}

impl WindowFrameExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("{} {}", self.kind, self.extend.sql(level))
    }
}

impl WindowFrameExtendExpr {
    pub fn sql(&self, _level: usize) -> String {
        self.expr.sql(0)
    }
}

impl WindowFrameRangeExpr {
    pub fn sql(&self, level: usize) -> String {
        format!(
            "BETWEEN {} AND {}",
            self.between.sql(level),
            self.and_expr.sql(level)
        )
    }
}

impl WindowFrameCurrentRow {
    pub fn sql(&self, _level: usize) -> String {
        "CURRENT ROW".to_string()
    }
}

impl WindowFrameUnbounded {
    pub fn sql(&self, _level: usize) -> String {
        format!("UNBOUNDED {}", self.direction)
    }
}

impl WindowFrameNumber {
    pub fn sql(&self, level: usize) -> String {
        format!("{} {}", self.number.sql(level), self.direction)
    }
}

impl PrewhereExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("PREWHERE {}", self.expr.sql(level + 1))
    }
}

impl WhereExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("WHERE{}{}", new_line(level + 1), self.expr.sql(level))
    }
}

impl GroupByExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("GROUP BY ");
        if !self.aggregate_type.is_empty() {
            out.push_str(&self.aggregate_type);
            out.push('(');
        }
        out.push_str(&self.expr.sql(level));
        if !self.aggregate_type.is_empty() {
            out.push(')');
        }
        if self.with_cube {
            out.push_str(" WITH CUBE");
        }
        if self.with_rollup {
            out.push_str(" WITH ROLLUP");
        }
        if self.with_totals {
            out.push_str(" WITH TOTALS");
        }
        out
    }
}

impl HavingExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("HAVING {}", self.expr.sql(level))
    }
}

impl OrderByExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = self.expr.sql(level);
        match self.direction {
            OrderDirection::Asc => out.push_str(" ASC"),
            OrderDirection::Desc => out.push_str(" DESC"),
            OrderDirection::None => {}
        }
        out
    }
}

impl OrderByListExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("ORDER BY {}", join_sql(&self.items, level, ", "))
    }
}

impl LimitExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = format!("LIMIT {}", self.limit.sql(level));
        if let Some(offset) = &self.offset {
            out.push_str(" OFFSET ");
            out.push_str(&offset.sql(level));
        }
        out
    }
}

impl LimitByExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("{} BY {}", self.limit.sql(level), self.by.sql(level))
    }
}

impl SettingsExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("{}={}", self.name.sql(level), self.expr.sql(level))
    }
}

impl SettingsExprList {
    pub fn sql(&self, level: usize) -> String {
        let items = self
            .items
            .iter()
            .map(|item| item.sql(level))
            .collect::<Vec<_>>()
            .join(", ");
        format!("SETTINGS {}", items)
    }
}

// ---------------------------------------------------------------------------
// DDL
// ---------------------------------------------------------------------------

impl CreateDatabase {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("CREATE DATABASE ");
        if self.if_not_exists {
            out.push_str("IF NOT EXISTS ");
        }
        out.push_str(&self.name.sql(level));
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&new_line(level));
            out.push_str(&on_cluster.sql(level));
        }
        if let Some(engine) = &self.engine {
            out.push_str(&engine.sql(level));
        }
        out
    }
}

impl CreateTable {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("CREATE");
        if self.has_temporary {
            out.push_str(" TEMPORARY");
        }
        out.push_str(" TABLE ");
        if self.if_not_exists {
            out.push_str("IF NOT EXISTS ");
        }
        out.push_str(&self.name.sql(level));
        if let Some(uuid) = &self.uuid {
            out.push(' ');
            out.push_str(&uuid.sql(level));
        }
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&new_line(level));
            out.push_str(&on_cluster.sql(level));
        }
        if let Some(table_schema) = &self.table_schema {
            out.push_str(&new_line(level));
            out.push_str(&table_schema.sql(level));
        }
        if let Some(engine) = &self.engine {
            out.push_str(&engine.sql(level));
        }
        if let Some(sub_query) = &self.sub_query {
            out.push_str(&sub_query.sql(level));
        }
        out
    }
}

impl CreateView {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("CREATE VIEW ");
        if self.if_not_exists {
            out.push_str("IF NOT EXISTS ");
        }
        out.push_str(&self.name.sql(level));
        if let Some(uuid) = &self.uuid {
            out.push(' ');
            out.push_str(&uuid.sql(level));
        }
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&new_line(level));
            out.push_str(&on_cluster.sql(level));
        }
        if let Some(table_schema) = &self.table_schema {
            out.push_str(&new_line(level));
            out.push_str(&table_schema.sql(level));
        }
        if let Some(sub_query) = &self.sub_query {
            out.push_str(&sub_query.sql(level));
        }
        out
    }
}

impl CreateMaterializedView {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("CREATE MATERIALIZED VIEW ");
        if self.if_not_exists {
            out.push_str("IF NOT EXISTS ");
        }
        out.push_str(&self.name.sql(level));
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&new_line(level));
            out.push_str(&on_cluster.sql(level));
        }
        if let Some(destination) = &self.destination {
            out.push_str(&new_line(level));
            out.push_str(&destination.sql(level));
            if let Some(table_schema) = &destination.table_schema {
                out.push_str(&new_line(level));
                out.push_str(&table_schema.sql(level + 1));
            }
        }
        if let Some(engine) = &self.engine {
            out.push_str(&engine.sql(level));
        }
        if self.populate {
            out.push_str(" POPULATE");
        }
        if let Some(sub_query) = &self.sub_query {
            out.push_str(&sub_query.sql(level));
        }
        out
    }
}

impl CreateLiveView {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("CREATE LIVE VIEW ");
        if self.if_not_exists {
            out.push_str("IF NOT EXISTS ");
        }
        out.push_str(&self.name.sql(level));
        if let Some(uuid) = &self.uuid {
            out.push(' ');
            out.push_str(&uuid.sql(level));
        }
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&new_line(level));
            out.push_str(&on_cluster.sql(level));
        }
        if let Some(with_timeout) = &self.with_timeout {
            out.push_str(&new_line(level));
            out.push_str(&with_timeout.sql(level));
        }
        if let Some(destination) = &self.destination {
            out.push_str(&new_line(level));
            out.push_str(&destination.sql(level));
        }
        if let Some(table_schema) = &self.table_schema {
            out.push_str(&new_line(level));
            out.push_str(&table_schema.sql(level));
        }
        if let Some(sub_query) = &self.sub_query {
            out.push_str(&sub_query.sql(level));
        }
        out
    }
}

impl WithTimeoutExpr {
    pub fn sql(&self, _level: usize) -> String {
        format!("WITH TIMEOUT {}", self.number.sql(0))
    }
}

impl CreateFunction {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("CREATE FUNCTION ");
        if self.if_not_exists {
            out.push_str("IF NOT EXISTS ");
        }
        out.push_str(&self.name.sql(level));
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&new_line(level));
            out.push_str(&on_cluster.sql(level));
        }
        out.push_str(" AS ");
        out.push_str(&self.params.sql(level));
        out.push_str(" -> ");
        out.push_str(&self.expr.sql(level));
        out
    }
}

impl CreateRole {
    pub fn sql(&self, level: usize) -> String {
        let mut out = format!("CREATE {} ", self.target);
        if self.or_replace {
            out.push_str("OR REPLACE ");
        }
        if self.if_not_exists {
            out.push_str("IF NOT EXISTS ");
        }
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&name.sql(level));
        }
        if let Some(access_storage_type) = &self.access_storage_type {
            out.push_str(&new_line(level));
            out.push_str("IN ");
            out.push_str(&access_storage_type.sql(level));
        }
        if !self.settings.is_empty() {
            out.push_str(" SETTINGS ");
            for (i, setting) in self.settings.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&setting.sql(level));
            }
        }
        out
    }
}

impl AlterRole {
    pub fn sql(&self, level: usize) -> String {
        let mut out = format!("ALTER {} ", self.target);
        if self.if_exists {
            out.push_str("IF EXISTS ");
        }
        for (i, pair) in self.rename_pairs.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&pair.sql(level));
        }
        if !self.settings.is_empty() {
            out.push_str(" SETTINGS ");
            for (i, setting) in self.settings.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&setting.sql(level));
            }
        }
        out
    }
}

impl RoleName {
    pub fn sql(&self, level: usize) -> String {
        let mut out = self.name.sql(level);
        if let Some(scope) = &self.scope {
            out.push('@');
            out.push_str(&scope.sql(level));
        }
        if let Some(on_cluster) = &self.on_cluster {
            out.push(' ');
            out.push_str(&on_cluster.sql(level));
        }
        out
    }
}

impl RoleSetting {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::new();
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&pair.sql(level));
        }
        if let Some(modifier) = &self.modifier {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&modifier.sql(level));
        }
        out
    }
}

impl SettingPair {
    pub fn sql(&self, level: usize) -> String {
        match &self.value {
            Some(value) => format!("{} {}", self.name.sql(level), value.sql(level)),
            None => self.name.sql(level),
        }
    }
}

impl RoleRenamePair {
    pub fn sql(&self, level: usize) -> String {
        match &self.new_name {
            Some(new_name) => format!(
                "{} RENAME TO {}",
                self.role_name.sql(level),
                new_name.sql(level)
            ),
            None => self.role_name.sql(level),
        }
    }
}

impl AlterTable {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("ALTER TABLE ");
        out.push_str(&self.table.sql(level));
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&new_line(level));
            out.push_str(&on_cluster.sql(level));
        }
        for (i, expr) in self.alter_exprs.iter().enumerate() {
            out.push_str(&new_line(level));
            out.push_str(&expr.sql(level));
            if i != self.alter_exprs.len() - 1 {
                out.push(',');
            }
        }
        out
    }
}

impl AlterTableAttachPartition {
    pub fn sql(&self, level: usize) -> String {
        let mut out = format!("ATTACH {}", self.partition.sql(level));
        if let Some(from) = &self.from {
            out.push_str(" FROM ");
            out.push_str(&from.sql(level));
        }
        out
    }
}

impl AlterTableDetachPartition {
    pub fn sql(&self, level: usize) -> String {
        let mut out = format!("DETACH {}", self.partition.sql(level));
        if let Some(settings) = &self.settings {
            out.push(' ');
            out.push_str(&settings.sql(level));
        }
        out
    }
}

impl AlterTableDropPartition {
    pub fn sql(&self, level: usize) -> String {
        format!("DROP {}", self.partition.sql(level))
    }
}

impl AlterTableFreezePartition {
    pub fn sql(&self, level: usize) -> String {
        match &self.partition {
            Some(partition) => format!("FREEZE {}", partition.sql(level)),
            None => "FREEZE".to_string(),
        }
    }
}

impl AlterTableReplacePartition {
    pub fn sql(&self, level: usize) -> String {
        format!(
            "REPLACE {} FROM {}",
            self.partition.sql(level),
            self.table.sql(level)
        )
    }
}

impl AlterTableAddColumn {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("ADD COLUMN ");
        if self.if_not_exists {
            out.push_str("IF NOT EXISTS ");
        }
        out.push_str(&self.column.sql(level));
        if let Some(after) = &self.after {
            out.push_str(" AFTER ");
            out.push_str(&after.sql(level));
        }
        out
    }
}

impl AlterTableAddIndex {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("ADD INDEX ");
        if self.if_not_exists {
            out.push_str("IF NOT EXISTS ");
        }
        out.push_str(&self.index.sql(level));
        if let Some(after) = &self.after {
            out.push_str(" AFTER ");
            out.push_str(&after.sql(level));
        }
        out
    }
}

impl AlterTableDropColumn {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("DROP COLUMN ");
        if self.if_exists {
            out.push_str("IF EXISTS ");
        }
        out.push_str(&self.column_name.sql(level));
        out
    }
}

impl AlterTableDropIndex {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("DROP INDEX ");
        if self.if_exists {
            out.push_str("IF EXISTS ");
        }
        out.push_str(&self.index_name.sql(level));
        out
    }
}

impl AlterTableClearColumn {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("CLEAR COLUMN ");
        if self.if_exists {
            out.push_str("IF EXISTS ");
        }
        out.push_str(&self.column_name.sql(level));
        if let Some(partition) = &self.partition {
            out.push_str(" IN ");
            out.push_str(&partition.sql(level));
        }
        out
    }
}

impl AlterTableClearIndex {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("CLEAR INDEX ");
        if self.if_exists {
            out.push_str("IF EXISTS ");
        }
        out.push_str(&self.index_name.sql(level));
        if let Some(partition) = &self.partition {
            out.push_str(" IN ");
            out.push_str(&partition.sql(level));
        }
        out
    }
}

impl AlterTableRenameColumn {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("RENAME COLUMN ");
        if self.if_exists {
            out.push_str("IF EXISTS ");
        }
        out.push_str(&self.old_name.sql(level));
        out.push_str(" TO ");
        out.push_str(&self.new_name.sql(level));
        out
    }
}

impl AlterTableModifyColumn {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("MODIFY COLUMN ");
        if self.if_exists {
            out.push_str("IF EXISTS ");
        }
        out.push_str(&self.column.sql(level));
        if let Some(remove_property) = &self.remove_property {
            out.push_str(&remove_property.sql(level));
        }
        out
    }
}

impl AlterTableModifyTtl {
    pub fn sql(&self, level: usize) -> String {
        format!("MODIFY TTL {}", self.ttl.sql(level))
    }
}

impl AlterTableRemoveTtl {
    pub fn sql(&self, _level: usize) -> String {
        "REMOVE TTL".to_string()
    }
}

impl RemovePropertyType {
    pub fn sql(&self, level: usize) -> String {
        format!(" REMOVE {}", self.property_type.sql(level))
    }
}

impl TableIndex {
    pub fn sql(&self, level: usize) -> String {
        format!(
            "{} {} TYPE {} GRANULARITY {}",
            self.name.sql(0),
            self.column_expr.sql(level),
            self.column_type.sql(level),
            self.granularity.sql(level)
        )
    }
}

impl DropDatabase {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("DROP DATABASE ");
        if self.if_exists {
            out.push_str("IF EXISTS ");
        }
        out.push_str(&self.name.sql(level));
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&new_line(level));
            out.push_str(&on_cluster.sql(level));
        }
        out
    }
}

impl DropStmt {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from(if self.detach { "DETACH " } else { "DROP " });
        if self.is_temporary {
            out.push_str("TEMPORARY ");
        }
        out.push_str(&self.drop_target);
        out.push(' ');
        if self.if_exists {
            out.push_str("IF EXISTS ");
        }
        out.push_str(&self.name.sql(level));
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&new_line(level));
            out.push_str(&on_cluster.sql(level));
        }
        if let Some(modifier) = &self.modifier {
            out.push(' ');
            out.push_str(modifier);
        }
        out
    }
}

impl DropUserOrRole {
    pub fn sql(&self, level: usize) -> String {
        let mut out = format!("DROP {} ", self.target);
        if self.if_exists {
            out.push_str("IF EXISTS ");
        }
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&name.sql(level));
        }
        if let Some(modifier) = &self.modifier {
            out.push(' ');
            out.push_str(modifier);
        }
        if let Some(from) = &self.from {
            out.push_str(" FROM ");
            out.push_str(&from.sql(level));
        }
        out
    }
}

impl TruncateTable {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("TRUNCATE ");
        if self.is_temporary {
            out.push_str("TEMPORARY ");
        }
        out.push_str("TABLE ");
        if self.if_exists {
            out.push_str("IF EXISTS ");
        }
        out.push_str(&self.name.sql(level));
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&new_line(level));
            out.push_str(&on_cluster.sql(level));
        }
        out
    }
}

impl RenameStmt {
    pub fn sql(&self, level: usize) -> String {
        let mut out = format!("RENAME {} ", self.rename_target);
        for (i, pair) in self.target_pairs.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&pair.sql(level));
        }
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&new_line(level));
            out.push_str(&on_cluster.sql(level));
        }
        out
    }
}

impl TargetPair {
    pub fn sql(&self, _level: usize) -> String {
        format!("{} TO {}", self.old.sql(0), self.new.sql(0))
    }
}

impl ExplainExpr {
    pub fn sql(&self, level: usize) -> String {
        if self.kind.is_empty() {
            format!("EXPLAIN {}", self.statement.sql(level))
        } else {
            format!("EXPLAIN {} {}", self.kind, self.statement.sql(level))
        }
    }
}

impl DescribeStmt {
    pub fn sql(&self, level: usize) -> String {
        format!("DESCRIBE TABLE {}", self.table.sql(level))
    }
}

impl UseExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("USE {}", self.database.sql(level + 1))
    }
}

impl SetExpr {
    pub fn sql(&self, level: usize) -> String {
        let items = self
            .settings
            .items
            .iter()
            .map(|item| item.sql(level))
            .collect::<Vec<_>>()
            .join(", ");
        format!("SET {}", items)
    }
}

impl SystemExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("SYSTEM {}", self.expr.sql(level))
    }
}

impl SystemFlushExpr {
    pub fn sql(&self, level: usize) -> String {
        match &self.distributed {
            Some(distributed) => format!("FLUSH DISTRIBUTED {}", distributed.sql(level)),
            None => "FLUSH LOGS".to_string(),
        }
    }
}

impl SystemReloadExpr {
    pub fn sql(&self, level: usize) -> String {
        match &self.dictionary {
            Some(dictionary) => format!("RELOAD {} {}", self.kind, dictionary.sql(level)),
            None => format!("RELOAD {}", self.kind),
        }
    }
}

impl SystemSyncExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("SYNC REPLICA {}", self.cluster.sql(level))
    }
}

impl SystemCtrlExpr {
    pub fn sql(&self, level: usize) -> String {
        match &self.cluster {
            Some(cluster) => format!("{} {} {}", self.command, self.kind, cluster.sql(level)),
            None => format!("{} {}", self.command, self.kind),
        }
    }
}

impl SystemDropExpr {
    pub fn sql(&self, _level: usize) -> String {
        format!("DROP {}", self.kind)
    }
}

impl OptimizeExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("OPTIMIZE TABLE ");
        out.push_str(&self.table.sql(level));
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&new_line(level));
            out.push_str(&on_cluster.sql(level));
        }
        if let Some(partition) = &self.partition {
            out.push(' ');
            out.push_str(&partition.sql(level));
        }
        if self.has_final {
            out.push_str(" FINAL");
        }
        if let Some(deduplicate) = &self.deduplicate {
            out.push_str(&deduplicate.sql(level));
        }
        out
    }
}

impl DeduplicateExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from(" DEDUPLICATE");
        if let Some(by) = &self.by {
            out.push_str(" BY ");
            out.push_str(&by.sql(level));
        }
        if let Some(except) = &self.except {
            out.push_str(" EXCEPT ");
            out.push_str(&except.sql(level));
        }
        out
    }
}

impl CheckExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = format!("CHECK TABLE {}", self.table.sql(level));
        if let Some(partition) = &self.partition {
            out.push(' ');
            out.push_str(&partition.sql(level));
        }
        out
    }
}

impl InsertExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("INSERT INTO TABLE ");
        out.push_str(&self.table.sql(level));
        if let Some(column_names) = &self.column_names {
            out.push_str(&new_line(level + 1));
            out.push_str(&column_names.sql(level));
        }
        if let Some(format) = &self.format {
            out.push_str(&new_line(level));
            out.push_str(&format.sql(level));
        }
        if let Some(select) = &self.select {
            out.push_str(&select.sql(level));
        } else if !self.values.is_empty() {
            out.push_str(&new_line(level));
            out.push_str("VALUES ");
            for (i, value) in self.values.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&new_line(level + 1));
                out.push_str(&value.sql(level));
            }
        }
        out
    }
}

impl ColumnNamesExpr {
    pub fn sql(&self, level: usize) -> String {
        let names = self
            .column_names
            .iter()
            .map(|name| name.sql(level))
            .collect::<Vec<_>>()
            .join(", ");
        format!("({})", names)
    }
}

impl ValuesExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("({})", join_sql(&self.values, level, ", "))
    }
}

impl FormatExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("FORMAT {}", self.format.sql(level))
    }
}

impl DeleteFromExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = format!("DELETE FROM {}", self.table.sql(level));
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&new_line(level));
            out.push_str(&on_cluster.sql(level));
        }
        if let Some(where_expr) = &self.where_expr {
            out.push_str(&new_line(level));
            out.push_str("WHERE ");
            out.push_str(&where_expr.sql(level));
        }
        out
    }
}

impl GrantPrivilegeExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("GRANT ");
        if let Some(on_cluster) = &self.on_cluster {
            out.push_str(&on_cluster.sql(level));
            out.push(' ');
        }
        for (i, privilege) in self.privileges.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&privilege.sql(level));
        }
        out.push_str(" ON ");
        out.push_str(&self.on.sql(level));
        out.push_str(" TO ");
        for (i, role) in self.to.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&role.sql(level));
        }
        for option in &self.with_options {
            out.push_str(" WITH ");
            out.push_str(option);
            out.push_str(" OPTION");
        }
        out
    }
}

impl PrivilegeExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = self.keywords.join(" ");
        if let Some(params) = &self.params {
            out.push_str(&params.sql(level));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Table support
// ---------------------------------------------------------------------------

impl OnClusterExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("ON CLUSTER {}", self.expr.sql(level + 1))
    }
}

impl EngineExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = new_line(level);
        out.push_str("ENGINE = ");
        out.push_str(&self.name);
        if let Some(params) = &self.params {
            out.push_str(&params.sql(level));
        }
        if let Some(primary_key) = &self.primary_key {
            out.push_str(&new_line(level));
            out.push_str(&primary_key.sql(level + 1));
        }
        if let Some(partition_by) = &self.partition_by {
            out.push_str(&new_line(level));
            out.push_str(&partition_by.sql(level + 1));
        }
        if let Some(sample_by) = &self.sample_by {
            out.push_str(&new_line(level));
            out.push_str(&sample_by.sql(level + 1));
        }
        if let Some(ttl) = &self.ttl {
            out.push_str(&new_line(level));
            out.push_str(&ttl.sql(level + 1));
        }
        if let Some(settings) = &self.settings {
            out.push_str(&new_line(level));
            out.push_str(&settings.sql(level + 1));
        }
        if let Some(order_by) = &self.order_by {
            out.push_str(&new_line(level));
            out.push_str(&order_by.sql(level + 1));
        }
        out
    }
}

impl DestinationExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("TO {}", self.table.sql(level))
    }
}

impl TableSchemaExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::new();
        if !self.columns.is_empty() {
            out.push('(');
            for (i, column) in self.columns.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&new_line(level + 1));
                out.push_str(&column.sql(level));
            }
            out.push_str(&new_line(level.saturating_sub(1)));
            out.push(')');
        }
        if let Some(alias_table) = &self.alias_table {
            out.push_str(" AS ");
            out.push_str(&alias_table.sql(level));
        }
        if let Some(table_function) = &self.table_function {
            out.push_str(" AS ");
            out.push_str(&table_function.sql(level));
        }
        out
    }
}

impl TableArgListExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("({})", join_sql(&self.args, level, ", "))
    }
}

impl TableFunctionExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("{}{}", self.name.sql(level), self.args.sql(level))
    }
}

impl Column {
    pub fn sql(&self, level: usize) -> String {
        let mut out = self.name.sql(level);
        if let Some(column_type) = &self.column_type {
            out.push(' ');
            out.push_str(&column_type.sql(level));
        }
        if self.not_null.is_some() {
            out.push_str(" NOT NULL");
        } else if self.nullable.is_some() {
            out.push_str(" NULL");
        }
        if let Some(property) = &self.property {
            out.push(' ');
            out.push_str(&property.sql(level));
        }
        if let Some(codec) = &self.codec {
            out.push(' ');
            out.push_str(&codec.sql(level));
        }
        if let Some(ttl) = &self.ttl {
            out.push_str(" TTL ");
            out.push_str(&ttl.sql(level));
        }
        if let Some(comment) = &self.comment {
            out.push_str(" COMMENT ");
            out.push_str(&comment.sql(level));
        }
        out
    }
}

impl ColumnPropertyExpr {
    pub fn sql(&self, level: usize) -> String {
        match &self.expr {
            Some(expr) => format!("{} {}", self.keyword, expr.sql(level + 1)),
            None => self.keyword.clone(),
        }
    }
}

impl ConstraintExpr {
    pub fn sql(&self, level: usize) -> String {
        format!(
            "CONSTRAINT {} CHECK {}",
            self.constraint.sql(level),
            self.expr.sql(level)
        )
    }
}

impl PartitionExpr {
    pub fn sql(&self, level: usize) -> String {
        let mut out = String::from("PARTITION ");
        if let Some(id) = &self.id {
            out.push_str("ID ");
            out.push_str(&id.sql(level));
        } else if self.all {
            out.push_str("ALL");
        } else if let Some(expr) = &self.expr {
            out.push_str(&expr.sql(level));
        }
        out
    }
}

impl PartitionByExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("PARTITION BY {}", self.expr.sql(level))
    }
}

impl PrimaryKeyExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("PRIMARY KEY {}", self.expr.sql(level))
    }
}

impl SampleByExpr {
    pub fn sql(&self, level: usize) -> String {
        format!("SAMPLE BY {}", self.expr.sql(level))
    }
}

impl TtlExpr {
    pub fn sql(&self, level: usize) -> String {
        self.expr.sql(level)
    }
}

impl TtlExprList {
    pub fn sql(&self, level: usize) -> String {
        let items = self
            .items
            .iter()
            .map(|item| item.sql(level))
            .collect::<Vec<_>>()
            .join(", ");
        format!("TTL {}", items)
    }
}
