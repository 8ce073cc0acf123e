//! ClickHouse SQL AST (Abstract Syntax Tree)
//!
//! This module defines all the node types used to represent parsed ClickHouse
//! statements and expressions. The central type is [`Expr`], a tagged enum
//! with one variant per syntactic construct; inner structs carry the fields
//! for each variant and are boxed to keep the enum small.
//!
//! Every node records the byte [`Span`] it was parsed from. Spans satisfy the
//! containment invariants: a node's span starts at or before its first child
//! and ends at or after its last child.
//!
//! SQL text is reproduced from a node with [`Expr::sql`] (see the `format`
//! module) and trees are traversed with the visitor protocol (see the
//! `visitor` module).

use crate::tokens::{Pos, QuoteStyle, Span, TokenType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction of an ORDER BY item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    #[default]
    None,
    Asc,
    Desc,
}

// ---------------------------------------------------------------------------
// Literals and identifiers
// ---------------------------------------------------------------------------

/// Numeric literal with its original lexeme and base (10, 16, or 8)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub span: Span,
    pub literal: String,
    pub base: u32,
}

impl NumberLiteral {
    /// Derive the base from the lexeme prefix
    pub fn new(span: Span, literal: impl Into<String>) -> Self {
        let literal = literal.into();
        let base = if literal.starts_with("0x") || literal.starts_with("0X") {
            16
        } else if literal.starts_with("0o") || literal.starts_with("0O") {
            8
        } else {
            10
        };
        Self { span, literal, base }
    }
}

/// Single-quoted string literal; `literal` holds the content between the
/// quotes with escapes untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub span: Span,
    pub literal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullLiteral {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotNullLiteral {
    pub span: Span,
    pub null: NullLiteral,
}

/// `INTERVAL expr unit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalExpr {
    pub span: Span,
    pub expr: Expr,
    pub unit: Ident,
}

/// `numerator [/ denominator]`, used by SAMPLE clauses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioExpr {
    pub span: Span,
    pub numerator: NumberLiteral,
    pub denominator: Option<NumberLiteral>,
}

/// `'name' = value` inside an Enum type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValueExpr {
    pub span: Span,
    pub name: StringLiteral,
    pub value: NumberLiteral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValueExprList {
    pub span: Span,
    pub enums: Vec<EnumValueExpr>,
}

/// Identifier with its original quote style preserved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ident {
    pub span: Span,
    pub name: String,
    pub quote_style: QuoteStyle,
}

impl Ident {
    pub fn new(span: Span, name: impl Into<String>, quote_style: QuoteStyle) -> Self {
        Self {
            span,
            name: name.into(),
            quote_style,
        }
    }
}

/// `a` or `a.b`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedIdentifier {
    pub span: Span,
    pub ident: Ident,
    pub dot_ident: Option<Ident>,
}

/// `[db.][table.]column`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnIdentifier {
    pub span: Span,
    pub database: Option<Ident>,
    pub table: Option<Ident>,
    pub column: Ident,
}

/// `[db.]table`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableIdentifier {
    pub span: Span,
    pub database: Option<Ident>,
    pub table: Ident,
}

/// `UUID 'xxxx'` clause on CREATE statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uuid {
    pub span: Span,
    pub value: StringLiteral,
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

/// `condition ? true_expr : false_expr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TernaryExpr {
    pub span: Span,
    pub condition: Expr,
    pub true_expr: Expr,
    pub false_expr: Expr,
}

/// Infix operation. `has_not` marks `NOT IN`/`NOT LIKE`, `has_global` marks
/// `GLOBAL IN`; the `::` cast operator prints without surrounding spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub span: Span,
    pub left: Expr,
    pub op: TokenType,
    pub right: Expr,
    pub has_global: bool,
    pub has_not: bool,
}

/// Prefix operator application, e.g. signed numeric arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub span: Span,
    pub kind: TokenType,
    pub expr: Expr,
}

/// `-expr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegateExpr {
    pub span: Span,
    pub expr: Expr,
}

/// `NOT expr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotExpr {
    pub span: Span,
    pub expr: Expr,
}

/// `GLOBAL expr`, wrapping an IN expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalInExpr {
    pub span: Span,
    pub expr: Expr,
}

/// `expr IS NULL`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsNullExpr {
    pub span: Span,
    pub expr: Expr,
}

/// `expr IS NOT NULL`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsNotNullExpr {
    pub span: Span,
    pub expr: Expr,
}

/// `CASE [expr] WHEN ... THEN ... [ELSE ...] END`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseExpr {
    pub span: Span,
    pub expr: Option<Expr>,
    pub whens: Vec<WhenExpr>,
    pub else_expr: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhenExpr {
    pub span: Span,
    pub when: Expr,
    pub then: Expr,
}

/// `CAST(expr AS type)` or `CAST(expr, type)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastExpr {
    pub span: Span,
    pub expr: Expr,
    pub as_type: Expr,
    pub comma_separated: bool,
}

/// `EXTRACT(unit FROM expr)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractExpr {
    pub span: Span,
    pub interval: Ident,
    pub from_expr: Expr,
}

/// `name(args...)`, optionally parameterized: `name(params)(args)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionExpr {
    pub span: Span,
    pub name: Ident,
    pub params: ParamExprList,
}

/// `function(...) OVER (window)` or `function(...) OVER name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFunctionExpr {
    pub span: Span,
    pub function: FunctionExpr,
    pub over: Expr,
}

/// Subscript form `expr[params]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectParams {
    pub span: Span,
    pub object: Expr,
    pub params: ArrayParamList,
}

/// `expr AS alias`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasExpr {
    pub span: Span,
    pub expr: Expr,
    pub alias: Expr,
}

/// ` AS (SELECT ...)` clause of CREATE statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubQueryExpr {
    pub span: Span,
    pub select: SelectQuery,
}

/// Parenthesized expression list; a second parenthesis group holds the call
/// arguments of a parameterized function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamExprList {
    pub span: Span,
    pub items: ColumnExprList,
    pub column_arg_list: Option<ColumnArgList>,
}

/// Bracketed expression list `[a, b, c]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayParamList {
    pub span: Span,
    pub items: ColumnExprList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnArgList {
    pub span: Span,
    pub distinct: bool,
    pub items: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnExprList {
    pub span: Span,
    pub has_distinct: bool,
    pub items: Vec<Expr>,
}

// ---------------------------------------------------------------------------
// Type expressions
// ---------------------------------------------------------------------------

/// Bare type name such as `UInt32`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarTypeExpr {
    pub span: Span,
    pub name: Ident,
}

/// Column property name in `MODIFY COLUMN ... REMOVE <property>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTypeExpr {
    pub span: Span,
    pub name: Ident,
}

/// Type with literal parameters such as `FixedString(32)` or `Decimal(9, 2)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeWithParamsExpr {
    pub span: Span,
    pub name: Ident,
    pub params: Vec<Expr>,
}

/// Generic type such as `Array(T)`, `Nullable(T)`, `Map(K, V)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexTypeExpr {
    pub span: Span,
    pub name: Ident,
    pub params: Vec<Expr>,
}

/// `Nested(col T, ...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedTypeExpr {
    pub span: Span,
    pub name: Ident,
    pub columns: Vec<Expr>,
}

/// `CODEC(name)` or `CODEC(name(level))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionCodec {
    pub span: Span,
    pub name: Ident,
    pub level: Option<NumberLiteral>,
}

// ---------------------------------------------------------------------------
// SELECT
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectQuery {
    pub span: Span,
    pub with: Option<WithExpr>,
    pub top: Option<TopExpr>,
    pub select_columns: ColumnExprList,
    pub from: Option<FromExpr>,
    pub array_join: Option<ArrayJoinExpr>,
    pub window: Option<WindowExpr>,
    pub prewhere: Option<PrewhereExpr>,
    pub where_clause: Option<WhereExpr>,
    pub group_by: Option<GroupByExpr>,
    pub having: Option<HavingExpr>,
    pub order_by: Option<OrderByListExpr>,
    pub limit_by: Option<LimitByExpr>,
    pub limit: Option<LimitExpr>,
    pub settings: Option<SettingsExprList>,
    pub union_all: Option<Box<SelectQuery>>,
    pub union_distinct: Option<Box<SelectQuery>>,
    pub except: Option<Box<SelectQuery>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithExpr {
    pub span: Span,
    pub ctes: Vec<CteExpr>,
}

/// One WITH binding; either `name AS (SELECT ...)` or `expr AS name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CteExpr {
    pub span: Span,
    pub expr: Expr,
    pub alias: Expr,
}

/// `TOP n [WITH TIES]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopExpr {
    pub span: Span,
    pub number: NumberLiteral,
    pub with_ties: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FromExpr {
    pub span: Span,
    pub expr: Expr,
}

/// A table source: table identifier, table function, or subquery, with an
/// optional alias and FINAL modifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableExpr {
    pub span: Span,
    pub expr: Expr,
    pub alias: Option<Ident>,
    pub has_final: bool,
}

/// Node of the join tree. `left` is a table source, `right` the remainder of
/// the chain; `modifiers` hold the join words (`LEFT ANY JOIN`), empty for a
/// comma join. The constraint belongs to the node whose `left` it follows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinExpr {
    pub span: Span,
    pub left: Expr,
    pub right: Option<Expr>,
    pub modifiers: Vec<String>,
    pub constraints: Option<Expr>,
}

/// Table source wrapped with sampling and FINAL, as it appears in FROM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinTableExpr {
    pub span: Span,
    pub table: TableExpr,
    pub sample_ratio: Option<SampleRatioExpr>,
    pub has_final: bool,
}

/// `ON exprs` or `USING exprs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinConstraintExpr {
    pub span: Span,
    pub on: Option<ColumnExprList>,
    pub using: Option<ColumnExprList>,
}

/// `SAMPLE ratio [OFFSET ratio]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRatioExpr {
    pub span: Span,
    pub ratio: RatioExpr,
    pub offset: Option<RatioExpr>,
}

/// `[LEFT] ARRAY JOIN exprs`; `kind` is the leading modifier or empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayJoinExpr {
    pub span: Span,
    pub kind: String,
    pub expr: Expr,
}

/// `WINDOW name AS (condition)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowExpr {
    pub span: Span,
    pub name: Ident,
    pub condition: WindowConditionExpr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConditionExpr {
    pub span: Span,
    pub partition_by: Option<PartitionByExpr>,
    pub order_by: Option<OrderByListExpr>,
    pub frame: Option<WindowFrameExpr>,
}

/// `ROWS|RANGE extent`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFrameExpr {
    pub span: Span,
    pub kind: String,
    pub extend: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFrameExtendExpr {
    pub span: Span,
    pub expr: Expr,
}

/// `BETWEEN bound AND bound`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFrameRangeExpr {
    pub span: Span,
    pub between: Expr,
    pub and_expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFrameCurrentRow {
    pub span: Span,
}

/// `UNBOUNDED PRECEDING|FOLLOWING`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFrameUnbounded {
    pub span: Span,
    pub direction: String,
}

/// `n PRECEDING|FOLLOWING`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFrameNumber {
    pub span: Span,
    pub number: NumberLiteral,
    pub direction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrewhereExpr {
    pub span: Span,
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhereExpr {
    pub span: Span,
    pub expr: Expr,
}

/// `GROUP BY [CUBE(...)|ROLLUP(...)] exprs [WITH CUBE|ROLLUP|TOTALS]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupByExpr {
    pub span: Span,
    pub aggregate_type: String,
    pub expr: Expr,
    pub with_cube: bool,
    pub with_rollup: bool,
    pub with_totals: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HavingExpr {
    pub span: Span,
    pub expr: Expr,
}

/// One ORDER BY item with its direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderByExpr {
    pub span: Span,
    pub expr: Expr,
    pub direction: OrderDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderByListExpr {
    pub span: Span,
    pub items: Vec<Expr>,
}

/// `LIMIT n [OFFSET m]`; `LIMIT m, n` is recorded as offset `m`, limit `n`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitExpr {
    pub span: Span,
    pub limit: Expr,
    pub offset: Option<Expr>,
}

/// `LIMIT n BY exprs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitByExpr {
    pub span: Span,
    pub limit: LimitExpr,
    pub by: ColumnExprList,
}

/// `name = value` inside a SETTINGS list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsExpr {
    pub span: Span,
    pub name: Ident,
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsExprList {
    pub span: Span,
    pub items: Vec<SettingsExpr>,
}

// ---------------------------------------------------------------------------
// DDL
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDatabase {
    pub span: Span,
    pub name: Ident,
    pub if_not_exists: bool,
    pub on_cluster: Option<OnClusterExpr>,
    pub engine: Option<EngineExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTable {
    pub span: Span,
    pub name: TableIdentifier,
    pub if_not_exists: bool,
    pub uuid: Option<Uuid>,
    pub on_cluster: Option<OnClusterExpr>,
    pub table_schema: Option<TableSchemaExpr>,
    pub engine: Option<EngineExpr>,
    pub sub_query: Option<SubQueryExpr>,
    pub has_temporary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateView {
    pub span: Span,
    pub name: TableIdentifier,
    pub if_not_exists: bool,
    pub uuid: Option<Uuid>,
    pub on_cluster: Option<OnClusterExpr>,
    pub table_schema: Option<TableSchemaExpr>,
    pub sub_query: Option<SubQueryExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMaterializedView {
    pub span: Span,
    pub name: TableIdentifier,
    pub if_not_exists: bool,
    pub on_cluster: Option<OnClusterExpr>,
    pub engine: Option<EngineExpr>,
    pub destination: Option<DestinationExpr>,
    pub populate: bool,
    pub sub_query: Option<SubQueryExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLiveView {
    pub span: Span,
    pub name: TableIdentifier,
    pub if_not_exists: bool,
    pub uuid: Option<Uuid>,
    pub on_cluster: Option<OnClusterExpr>,
    pub destination: Option<DestinationExpr>,
    pub table_schema: Option<TableSchemaExpr>,
    pub with_timeout: Option<WithTimeoutExpr>,
    pub sub_query: Option<SubQueryExpr>,
}

/// `WITH TIMEOUT n` on a live view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithTimeoutExpr {
    pub span: Span,
    pub number: NumberLiteral,
}

/// `CREATE FUNCTION name AS (params) -> expr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFunction {
    pub span: Span,
    pub if_not_exists: bool,
    pub name: Ident,
    pub on_cluster: Option<OnClusterExpr>,
    pub params: ParamExprList,
    pub expr: Expr,
}

/// `CREATE ROLE|USER ...`; `target` records which word was used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRole {
    pub span: Span,
    pub target: String,
    pub if_not_exists: bool,
    pub or_replace: bool,
    pub names: Vec<RoleName>,
    pub access_storage_type: Option<Ident>,
    pub settings: Vec<RoleSetting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterRole {
    pub span: Span,
    pub target: String,
    pub if_exists: bool,
    pub rename_pairs: Vec<RoleRenamePair>,
    pub settings: Vec<RoleSetting>,
}

/// `name[@'scope'] [ON CLUSTER ...]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleName {
    pub span: Span,
    pub name: Ident,
    pub scope: Option<StringLiteral>,
    pub on_cluster: Option<OnClusterExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSetting {
    pub span: Span,
    pub pairs: Vec<SettingPair>,
    pub modifier: Option<Ident>,
}

/// `name [value]` inside role SETTINGS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingPair {
    pub span: Span,
    pub name: Ident,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRenamePair {
    pub span: Span,
    pub role_name: RoleName,
    pub new_name: Option<Ident>,
}

/// `ALTER TABLE table [ON CLUSTER ...] op [, op ...]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTable {
    pub span: Span,
    pub table: TableIdentifier,
    pub on_cluster: Option<OnClusterExpr>,
    pub alter_exprs: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableAttachPartition {
    pub span: Span,
    pub partition: PartitionExpr,
    pub from: Option<TableIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableDetachPartition {
    pub span: Span,
    pub partition: PartitionExpr,
    pub settings: Option<SettingsExprList>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableDropPartition {
    pub span: Span,
    pub partition: PartitionExpr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableFreezePartition {
    pub span: Span,
    pub partition: Option<PartitionExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableReplacePartition {
    pub span: Span,
    pub partition: PartitionExpr,
    pub table: TableIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableAddColumn {
    pub span: Span,
    pub if_not_exists: bool,
    pub column: Column,
    pub after: Option<NestedIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableAddIndex {
    pub span: Span,
    pub if_not_exists: bool,
    pub index: TableIndex,
    pub after: Option<NestedIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableDropColumn {
    pub span: Span,
    pub if_exists: bool,
    pub column_name: NestedIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableDropIndex {
    pub span: Span,
    pub if_exists: bool,
    pub index_name: NestedIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableClearColumn {
    pub span: Span,
    pub if_exists: bool,
    pub column_name: NestedIdentifier,
    pub partition: Option<PartitionExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableClearIndex {
    pub span: Span,
    pub if_exists: bool,
    pub index_name: NestedIdentifier,
    pub partition: Option<PartitionExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableRenameColumn {
    pub span: Span,
    pub if_exists: bool,
    pub old_name: NestedIdentifier,
    pub new_name: NestedIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableModifyColumn {
    pub span: Span,
    pub if_exists: bool,
    pub column: Column,
    pub remove_property: Option<RemovePropertyType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableModifyTtl {
    pub span: Span,
    pub ttl: TtlExpr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableRemoveTtl {
    pub span: Span,
}

/// ` REMOVE <property>` suffix of MODIFY COLUMN
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovePropertyType {
    pub span: Span,
    pub property_type: PropertyTypeExpr,
}

/// `name expr TYPE type GRANULARITY n`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableIndex {
    pub span: Span,
    pub name: NestedIdentifier,
    pub column_expr: Expr,
    pub column_type: Expr,
    pub granularity: NumberLiteral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropDatabase {
    pub span: Span,
    pub name: Ident,
    pub if_exists: bool,
    pub on_cluster: Option<OnClusterExpr>,
}

/// `DROP|DETACH [TEMPORARY] TABLE|VIEW|DICTIONARY ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropStmt {
    pub span: Span,
    pub drop_target: String,
    pub name: TableIdentifier,
    pub if_exists: bool,
    pub on_cluster: Option<OnClusterExpr>,
    pub is_temporary: bool,
    pub detach: bool,
    pub modifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropUserOrRole {
    pub span: Span,
    pub target: String,
    pub names: Vec<RoleName>,
    pub if_exists: bool,
    pub modifier: Option<String>,
    pub from: Option<Ident>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruncateTable {
    pub span: Span,
    pub is_temporary: bool,
    pub if_exists: bool,
    pub name: TableIdentifier,
    pub on_cluster: Option<OnClusterExpr>,
}

/// `RENAME TABLE|DICTIONARY|DATABASE a TO b [, c TO d ...]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameStmt {
    pub span: Span,
    pub rename_target: String,
    pub target_pairs: Vec<TargetPair>,
    pub on_cluster: Option<OnClusterExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetPair {
    pub span: Span,
    pub old: TableIdentifier,
    pub new: TableIdentifier,
}

/// `EXPLAIN [AST|SYNTAX|PLAN|PIPELINE|ESTIMATE] statement`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainExpr {
    pub span: Span,
    pub kind: String,
    pub statement: Expr,
}

/// `DESCRIBE|DESC TABLE table`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescribeStmt {
    pub span: Span,
    pub table: TableIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseExpr {
    pub span: Span,
    pub database: Ident,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetExpr {
    pub span: Span,
    pub settings: SettingsExprList,
}

/// `SYSTEM <sub-command>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemExpr {
    pub span: Span,
    pub expr: Expr,
}

/// `FLUSH LOGS` or `FLUSH DISTRIBUTED table`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemFlushExpr {
    pub span: Span,
    pub logs: bool,
    pub distributed: Option<TableIdentifier>,
}

/// `RELOAD DICTIONARIES|DICTIONARY table|...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemReloadExpr {
    pub span: Span,
    pub kind: String,
    pub dictionary: Option<TableIdentifier>,
}

/// `SYNC REPLICA table`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSyncExpr {
    pub span: Span,
    pub cluster: TableIdentifier,
}

/// `START|STOP REPLICATED SENDS|DISTRIBUTED SENDS|FETCHES|MERGES [table]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemCtrlExpr {
    pub span: Span,
    pub command: String,
    pub kind: String,
    pub cluster: Option<TableIdentifier>,
}

/// `DROP DNS CACHE|MARK CACHE|...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemDropExpr {
    pub span: Span,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeExpr {
    pub span: Span,
    pub table: TableIdentifier,
    pub on_cluster: Option<OnClusterExpr>,
    pub partition: Option<PartitionExpr>,
    pub has_final: bool,
    pub deduplicate: Option<DeduplicateExpr>,
}

/// `DEDUPLICATE [BY exprs] [EXCEPT exprs]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeduplicateExpr {
    pub span: Span,
    pub by: Option<ColumnExprList>,
    pub except: Option<ColumnExprList>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckExpr {
    pub span: Span,
    pub table: TableIdentifier,
    pub partition: Option<PartitionExpr>,
}

/// INSERT with either VALUES tuples or a SELECT source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertExpr {
    pub span: Span,
    pub table: Expr,
    pub column_names: Option<ColumnNamesExpr>,
    pub format: Option<FormatExpr>,
    pub values: Vec<ValuesExpr>,
    pub select: Option<Box<SelectQuery>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnNamesExpr {
    pub span: Span,
    pub column_names: Vec<NestedIdentifier>,
}

/// One `(v, v, ...)` tuple of an INSERT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuesExpr {
    pub span: Span,
    pub values: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatExpr {
    pub span: Span,
    pub format: Ident,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteFromExpr {
    pub span: Span,
    pub table: TableIdentifier,
    pub on_cluster: Option<OnClusterExpr>,
    pub where_expr: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantPrivilegeExpr {
    pub span: Span,
    pub on_cluster: Option<OnClusterExpr>,
    pub privileges: Vec<PrivilegeExpr>,
    pub on: TableIdentifier,
    pub to: Vec<Ident>,
    pub with_options: Vec<String>,
}

/// A privilege keyword sequence, optionally with a column list:
/// `SELECT(col1, col2)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivilegeExpr {
    pub span: Span,
    pub keywords: Vec<String>,
    pub params: Option<ParamExprList>,
}

// ---------------------------------------------------------------------------
// Table support
// ---------------------------------------------------------------------------

/// `ON CLUSTER name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnClusterExpr {
    pub span: Span,
    pub expr: Expr,
}

/// Table engine with its storage clauses, accepted in any order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineExpr {
    pub span: Span,
    pub name: String,
    pub params: Option<ParamExprList>,
    pub primary_key: Option<PrimaryKeyExpr>,
    pub partition_by: Option<PartitionByExpr>,
    pub sample_by: Option<SampleByExpr>,
    pub ttl: Option<TtlExprList>,
    pub settings: Option<SettingsExprList>,
    pub order_by: Option<OrderByListExpr>,
}

/// `TO table [schema]` of a materialized or live view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationExpr {
    pub span: Span,
    pub table: TableIdentifier,
    pub table_schema: Option<TableSchemaExpr>,
}

/// Column/constraint/index list, `AS other_table`, or `AS table_function(...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchemaExpr {
    pub span: Span,
    pub columns: Vec<Expr>,
    pub alias_table: Option<TableIdentifier>,
    pub table_function: Option<TableFunctionExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableArgListExpr {
    pub span: Span,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFunctionExpr {
    pub span: Span,
    pub name: Ident,
    pub args: TableArgListExpr,
}

/// Column definition in a CREATE TABLE schema or ALTER operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub span: Span,
    pub name: NestedIdentifier,
    pub column_type: Option<Expr>,
    pub not_null: Option<NotNullLiteral>,
    pub nullable: Option<NullLiteral>,
    pub property: Option<ColumnPropertyExpr>,
    pub codec: Option<CompressionCodec>,
    pub ttl: Option<Expr>,
    pub comment: Option<StringLiteral>,
}

/// `DEFAULT expr`, `MATERIALIZED expr`, `ALIAS expr`, or `EPHEMERAL [expr]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnPropertyExpr {
    pub span: Span,
    pub keyword: String,
    pub expr: Option<Expr>,
}

/// `CONSTRAINT name CHECK expr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintExpr {
    pub span: Span,
    pub constraint: Ident,
    pub expr: Expr,
}

/// `PARTITION expr | PARTITION ID 'id' | PARTITION ALL`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionExpr {
    pub span: Span,
    pub expr: Option<Expr>,
    pub id: Option<StringLiteral>,
    pub all: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionByExpr {
    pub span: Span,
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryKeyExpr {
    pub span: Span,
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleByExpr {
    pub span: Span,
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtlExpr {
    pub span: Span,
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtlExprList {
    pub span: Span,
    pub items: Vec<TtlExpr>,
}

// ---------------------------------------------------------------------------
// The Expr enum
// ---------------------------------------------------------------------------

/// Any ClickHouse SQL node: statements, clauses, expressions, and literals.
///
/// Payloads are boxed so that `size_of::<Expr>()` stays small. Variants are
/// serialized with the variant name as the discriminator (snake_case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    // Literals
    NumberLiteral(Box<NumberLiteral>),
    StringLiteral(Box<StringLiteral>),
    NullLiteral(Box<NullLiteral>),
    NotNullLiteral(Box<NotNullLiteral>),
    IntervalExpr(Box<IntervalExpr>),
    RatioExpr(Box<RatioExpr>),
    EnumValueExpr(Box<EnumValueExpr>),
    EnumValueExprList(Box<EnumValueExprList>),

    // Identifiers
    Ident(Box<Ident>),
    NestedIdentifier(Box<NestedIdentifier>),
    ColumnIdentifier(Box<ColumnIdentifier>),
    TableIdentifier(Box<TableIdentifier>),
    Uuid(Box<Uuid>),

    // Expressions
    TernaryExpr(Box<TernaryExpr>),
    BinaryExpr(Box<BinaryExpr>),
    UnaryExpr(Box<UnaryExpr>),
    NegateExpr(Box<NegateExpr>),
    NotExpr(Box<NotExpr>),
    GlobalInExpr(Box<GlobalInExpr>),
    IsNullExpr(Box<IsNullExpr>),
    IsNotNullExpr(Box<IsNotNullExpr>),
    CaseExpr(Box<CaseExpr>),
    WhenExpr(Box<WhenExpr>),
    CastExpr(Box<CastExpr>),
    ExtractExpr(Box<ExtractExpr>),
    FunctionExpr(Box<FunctionExpr>),
    WindowFunctionExpr(Box<WindowFunctionExpr>),
    ObjectParams(Box<ObjectParams>),
    AliasExpr(Box<AliasExpr>),
    SubQueryExpr(Box<SubQueryExpr>),
    ParamExprList(Box<ParamExprList>),
    ArrayParamList(Box<ArrayParamList>),
    ColumnArgList(Box<ColumnArgList>),
    ColumnExprList(Box<ColumnExprList>),

    // Type expressions
    ScalarTypeExpr(Box<ScalarTypeExpr>),
    PropertyTypeExpr(Box<PropertyTypeExpr>),
    TypeWithParamsExpr(Box<TypeWithParamsExpr>),
    ComplexTypeExpr(Box<ComplexTypeExpr>),
    NestedTypeExpr(Box<NestedTypeExpr>),
    CompressionCodec(Box<CompressionCodec>),

    // SELECT
    SelectQuery(Box<SelectQuery>),
    WithExpr(Box<WithExpr>),
    CteExpr(Box<CteExpr>),
    TopExpr(Box<TopExpr>),
    FromExpr(Box<FromExpr>),
    TableExpr(Box<TableExpr>),
    JoinExpr(Box<JoinExpr>),
    JoinTableExpr(Box<JoinTableExpr>),
    JoinConstraintExpr(Box<JoinConstraintExpr>),
    SampleRatioExpr(Box<SampleRatioExpr>),
    ArrayJoinExpr(Box<ArrayJoinExpr>),
    WindowExpr(Box<WindowExpr>),
    WindowConditionExpr(Box<WindowConditionExpr>),
    WindowFrameExpr(Box<WindowFrameExpr>),
    WindowFrameExtendExpr(Box<WindowFrameExtendExpr>),
    WindowFrameRangeExpr(Box<WindowFrameRangeExpr>),
    WindowFrameCurrentRow(Box<WindowFrameCurrentRow>),
    WindowFrameUnbounded(Box<WindowFrameUnbounded>),
    WindowFrameNumber(Box<WindowFrameNumber>),
    PrewhereExpr(Box<PrewhereExpr>),
    WhereExpr(Box<WhereExpr>),
    GroupByExpr(Box<GroupByExpr>),
    HavingExpr(Box<HavingExpr>),
    OrderByExpr(Box<OrderByExpr>),
    OrderByListExpr(Box<OrderByListExpr>),
    LimitExpr(Box<LimitExpr>),
    LimitByExpr(Box<LimitByExpr>),
    SettingsExpr(Box<SettingsExpr>),
    SettingsExprList(Box<SettingsExprList>),

    // DDL
    CreateDatabase(Box<CreateDatabase>),
    CreateTable(Box<CreateTable>),
    CreateView(Box<CreateView>),
    CreateMaterializedView(Box<CreateMaterializedView>),
    CreateLiveView(Box<CreateLiveView>),
    WithTimeoutExpr(Box<WithTimeoutExpr>),
    CreateFunction(Box<CreateFunction>),
    CreateRole(Box<CreateRole>),
    AlterRole(Box<AlterRole>),
    RoleName(Box<RoleName>),
    RoleSetting(Box<RoleSetting>),
    SettingPair(Box<SettingPair>),
    RoleRenamePair(Box<RoleRenamePair>),
    AlterTable(Box<AlterTable>),
    AlterTableAttachPartition(Box<AlterTableAttachPartition>),
    AlterTableDetachPartition(Box<AlterTableDetachPartition>),
    AlterTableDropPartition(Box<AlterTableDropPartition>),
    AlterTableFreezePartition(Box<AlterTableFreezePartition>),
    AlterTableReplacePartition(Box<AlterTableReplacePartition>),
    AlterTableAddColumn(Box<AlterTableAddColumn>),
    AlterTableAddIndex(Box<AlterTableAddIndex>),
    AlterTableDropColumn(Box<AlterTableDropColumn>),
    AlterTableDropIndex(Box<AlterTableDropIndex>),
    AlterTableClearColumn(Box<AlterTableClearColumn>),
    AlterTableClearIndex(Box<AlterTableClearIndex>),
    AlterTableRenameColumn(Box<AlterTableRenameColumn>),
    AlterTableModifyColumn(Box<AlterTableModifyColumn>),
    AlterTableModifyTtl(Box<AlterTableModifyTtl>),
    AlterTableRemoveTtl(Box<AlterTableRemoveTtl>),
    RemovePropertyType(Box<RemovePropertyType>),
    TableIndex(Box<TableIndex>),
    DropDatabase(Box<DropDatabase>),
    DropStmt(Box<DropStmt>),
    DropUserOrRole(Box<DropUserOrRole>),
    TruncateTable(Box<TruncateTable>),
    RenameStmt(Box<RenameStmt>),
    TargetPair(Box<TargetPair>),
    ExplainExpr(Box<ExplainExpr>),
    DescribeStmt(Box<DescribeStmt>),
    UseExpr(Box<UseExpr>),
    SetExpr(Box<SetExpr>),
    SystemExpr(Box<SystemExpr>),
    SystemFlushExpr(Box<SystemFlushExpr>),
    SystemReloadExpr(Box<SystemReloadExpr>),
    SystemSyncExpr(Box<SystemSyncExpr>),
    SystemCtrlExpr(Box<SystemCtrlExpr>),
    SystemDropExpr(Box<SystemDropExpr>),
    OptimizeExpr(Box<OptimizeExpr>),
    DeduplicateExpr(Box<DeduplicateExpr>),
    CheckExpr(Box<CheckExpr>),
    InsertExpr(Box<InsertExpr>),
    ColumnNamesExpr(Box<ColumnNamesExpr>),
    ValuesExpr(Box<ValuesExpr>),
    FormatExpr(Box<FormatExpr>),
    DeleteFromExpr(Box<DeleteFromExpr>),
    GrantPrivilegeExpr(Box<GrantPrivilegeExpr>),
    PrivilegeExpr(Box<PrivilegeExpr>),

    // Table support
    OnClusterExpr(Box<OnClusterExpr>),
    EngineExpr(Box<EngineExpr>),
    DestinationExpr(Box<DestinationExpr>),
    TableSchemaExpr(Box<TableSchemaExpr>),
    TableArgListExpr(Box<TableArgListExpr>),
    TableFunctionExpr(Box<TableFunctionExpr>),
    Column(Box<Column>),
    ColumnPropertyExpr(Box<ColumnPropertyExpr>),
    ConstraintExpr(Box<ConstraintExpr>),
    PartitionExpr(Box<PartitionExpr>),
    PartitionByExpr(Box<PartitionByExpr>),
    PrimaryKeyExpr(Box<PrimaryKeyExpr>),
    SampleByExpr(Box<SampleByExpr>),
    TtlExpr(Box<TtlExpr>),
    TtlExprList(Box<TtlExprList>),
}

impl Expr {
    /// The source span covered by this node
    pub fn span(&self) -> Span {
        use Expr::*;
        match self {
            NumberLiteral(x) => x.span,
            StringLiteral(x) => x.span,
            NullLiteral(x) => x.span,
            NotNullLiteral(x) => x.span,
            IntervalExpr(x) => x.span,
            RatioExpr(x) => x.span,
            EnumValueExpr(x) => x.span,
            EnumValueExprList(x) => x.span,
            Ident(x) => x.span,
            NestedIdentifier(x) => x.span,
            ColumnIdentifier(x) => x.span,
            TableIdentifier(x) => x.span,
            Uuid(x) => x.span,
            TernaryExpr(x) => x.span,
            BinaryExpr(x) => x.span,
            UnaryExpr(x) => x.span,
            NegateExpr(x) => x.span,
            NotExpr(x) => x.span,
            GlobalInExpr(x) => x.span,
            IsNullExpr(x) => x.span,
            IsNotNullExpr(x) => x.span,
            CaseExpr(x) => x.span,
            WhenExpr(x) => x.span,
            CastExpr(x) => x.span,
            ExtractExpr(x) => x.span,
            FunctionExpr(x) => x.span,
            WindowFunctionExpr(x) => x.span,
            ObjectParams(x) => x.span,
            AliasExpr(x) => x.span,
            SubQueryExpr(x) => x.span,
            ParamExprList(x) => x.span,
            ArrayParamList(x) => x.span,
            ColumnArgList(x) => x.span,
            ColumnExprList(x) => x.span,
            ScalarTypeExpr(x) => x.span,
            PropertyTypeExpr(x) => x.span,
            TypeWithParamsExpr(x) => x.span,
            ComplexTypeExpr(x) => x.span,
            NestedTypeExpr(x) => x.span,
            CompressionCodec(x) => x.span,
            SelectQuery(x) => x.span,
            WithExpr(x) => x.span,
            CteExpr(x) => x.span,
            TopExpr(x) => x.span,
            FromExpr(x) => x.span,
            TableExpr(x) => x.span,
            JoinExpr(x) => x.span,
            JoinTableExpr(x) => x.span,
            JoinConstraintExpr(x) => x.span,
            SampleRatioExpr(x) => x.span,
            ArrayJoinExpr(x) => x.span,
            WindowExpr(x) => x.span,
            WindowConditionExpr(x) => x.span,
            WindowFrameExpr(x) => x.span,
            WindowFrameExtendExpr(x) => x.span,
            WindowFrameRangeExpr(x) => x.span,
            WindowFrameCurrentRow(x) => x.span,
            WindowFrameUnbounded(x) => x.span,
            WindowFrameNumber(x) => x.span,
            PrewhereExpr(x) => x.span,
            WhereExpr(x) => x.span,
            GroupByExpr(x) => x.span,
            HavingExpr(x) => x.span,
            OrderByExpr(x) => x.span,
            OrderByListExpr(x) => x.span,
            LimitExpr(x) => x.span,
            LimitByExpr(x) => x.span,
            SettingsExpr(x) => x.span,
            SettingsExprList(x) => x.span,
            CreateDatabase(x) => x.span,
            CreateTable(x) => x.span,
            CreateView(x) => x.span,
            CreateMaterializedView(x) => x.span,
            CreateLiveView(x) => x.span,
            WithTimeoutExpr(x) => x.span,
            CreateFunction(x) => x.span,
            CreateRole(x) => x.span,
            AlterRole(x) => x.span,
            RoleName(x) => x.span,
            RoleSetting(x) => x.span,
            SettingPair(x) => x.span,
            RoleRenamePair(x) => x.span,
            AlterTable(x) => x.span,
            AlterTableAttachPartition(x) => x.span,
            AlterTableDetachPartition(x) => x.span,
            AlterTableDropPartition(x) => x.span,
            AlterTableFreezePartition(x) => x.span,
            AlterTableReplacePartition(x) => x.span,
            AlterTableAddColumn(x) => x.span,
            AlterTableAddIndex(x) => x.span,
            AlterTableDropColumn(x) => x.span,
            AlterTableDropIndex(x) => x.span,
            AlterTableClearColumn(x) => x.span,
            AlterTableClearIndex(x) => x.span,
            AlterTableRenameColumn(x) => x.span,
            AlterTableModifyColumn(x) => x.span,
            AlterTableModifyTtl(x) => x.span,
            AlterTableRemoveTtl(x) => x.span,
            RemovePropertyType(x) => x.span,
            TableIndex(x) => x.span,
            DropDatabase(x) => x.span,
            DropStmt(x) => x.span,
            DropUserOrRole(x) => x.span,
            TruncateTable(x) => x.span,
            RenameStmt(x) => x.span,
            TargetPair(x) => x.span,
            ExplainExpr(x) => x.span,
            DescribeStmt(x) => x.span,
            UseExpr(x) => x.span,
            SetExpr(x) => x.span,
            SystemExpr(x) => x.span,
            SystemFlushExpr(x) => x.span,
            SystemReloadExpr(x) => x.span,
            SystemSyncExpr(x) => x.span,
            SystemCtrlExpr(x) => x.span,
            SystemDropExpr(x) => x.span,
            OptimizeExpr(x) => x.span,
            DeduplicateExpr(x) => x.span,
            CheckExpr(x) => x.span,
            InsertExpr(x) => x.span,
            ColumnNamesExpr(x) => x.span,
            ValuesExpr(x) => x.span,
            FormatExpr(x) => x.span,
            DeleteFromExpr(x) => x.span,
            GrantPrivilegeExpr(x) => x.span,
            PrivilegeExpr(x) => x.span,
            OnClusterExpr(x) => x.span,
            EngineExpr(x) => x.span,
            DestinationExpr(x) => x.span,
            TableSchemaExpr(x) => x.span,
            TableArgListExpr(x) => x.span,
            TableFunctionExpr(x) => x.span,
            Column(x) => x.span,
            ColumnPropertyExpr(x) => x.span,
            ConstraintExpr(x) => x.span,
            PartitionExpr(x) => x.span,
            PartitionByExpr(x) => x.span,
            PrimaryKeyExpr(x) => x.span,
            SampleByExpr(x) => x.span,
            TtlExpr(x) => x.span,
            TtlExprList(x) => x.span,
        }
    }

    /// First byte of the node in the source
    pub fn pos(&self) -> Pos {
        self.span().start
    }

    /// One past the last byte of the node in the source
    pub fn end(&self) -> Pos {
        self.span().end
    }

    /// True for top-level schema-changing statements
    pub fn is_ddl(&self) -> bool {
        matches!(
            self,
            Expr::CreateDatabase(_)
                | Expr::CreateTable(_)
                | Expr::CreateView(_)
                | Expr::CreateMaterializedView(_)
                | Expr::CreateLiveView(_)
                | Expr::CreateFunction(_)
                | Expr::CreateRole(_)
                | Expr::AlterRole(_)
                | Expr::AlterTable(_)
                | Expr::DropDatabase(_)
                | Expr::DropStmt(_)
                | Expr::DropUserOrRole(_)
                | Expr::TruncateTable(_)
                | Expr::RenameStmt(_)
                | Expr::GrantPrivilegeExpr(_)
        )
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql(0))
    }
}
