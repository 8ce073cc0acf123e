//! Visitor protocol for the AST
//!
//! A [`Visitor`] receives `enter`/`leave` callbacks around every node plus
//! one `visit_*` hook per node variant. The built-in traversal [`walk`] is
//! depth-first: it enters a node, walks its children in source order,
//! dispatches the variant hook, and leaves the node. `leave` fires on the
//! error path too, so enter/leave pairs are always properly nested. The
//! first hook failure aborts the traversal and propagates unchanged.
//!
//! All hooks have no-op defaults, so partial visitors implement only the
//! variants they care about.

use crate::ast::*;
use crate::error::Result;

/// Borrowed reference to any AST node, the uniform currency of traversal
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    NumberLiteral(&'a NumberLiteral),
    StringLiteral(&'a StringLiteral),
    NullLiteral(&'a NullLiteral),
    NotNullLiteral(&'a NotNullLiteral),
    IntervalExpr(&'a IntervalExpr),
    RatioExpr(&'a RatioExpr),
    EnumValueExpr(&'a EnumValueExpr),
    EnumValueExprList(&'a EnumValueExprList),
    Ident(&'a Ident),
    NestedIdentifier(&'a NestedIdentifier),
    ColumnIdentifier(&'a ColumnIdentifier),
    TableIdentifier(&'a TableIdentifier),
    Uuid(&'a Uuid),
    TernaryExpr(&'a TernaryExpr),
    BinaryExpr(&'a BinaryExpr),
    UnaryExpr(&'a UnaryExpr),
    NegateExpr(&'a NegateExpr),
    NotExpr(&'a NotExpr),
    GlobalInExpr(&'a GlobalInExpr),
    IsNullExpr(&'a IsNullExpr),
    IsNotNullExpr(&'a IsNotNullExpr),
    CaseExpr(&'a CaseExpr),
    WhenExpr(&'a WhenExpr),
    CastExpr(&'a CastExpr),
    ExtractExpr(&'a ExtractExpr),
    FunctionExpr(&'a FunctionExpr),
    WindowFunctionExpr(&'a WindowFunctionExpr),
    ObjectParams(&'a ObjectParams),
    AliasExpr(&'a AliasExpr),
    SubQueryExpr(&'a SubQueryExpr),
    ParamExprList(&'a ParamExprList),
    ArrayParamList(&'a ArrayParamList),
    ColumnArgList(&'a ColumnArgList),
    ColumnExprList(&'a ColumnExprList),
    ScalarTypeExpr(&'a ScalarTypeExpr),
    PropertyTypeExpr(&'a PropertyTypeExpr),
    TypeWithParamsExpr(&'a TypeWithParamsExpr),
    ComplexTypeExpr(&'a ComplexTypeExpr),
    NestedTypeExpr(&'a NestedTypeExpr),
    CompressionCodec(&'a CompressionCodec),
    SelectQuery(&'a SelectQuery),
    WithExpr(&'a WithExpr),
    CteExpr(&'a CteExpr),
    TopExpr(&'a TopExpr),
    FromExpr(&'a FromExpr),
    TableExpr(&'a TableExpr),
    JoinExpr(&'a JoinExpr),
    JoinTableExpr(&'a JoinTableExpr),
    JoinConstraintExpr(&'a JoinConstraintExpr),
    SampleRatioExpr(&'a SampleRatioExpr),
    ArrayJoinExpr(&'a ArrayJoinExpr),
    WindowExpr(&'a WindowExpr),
    WindowConditionExpr(&'a WindowConditionExpr),
    WindowFrameExpr(&'a WindowFrameExpr),
    WindowFrameExtendExpr(&'a WindowFrameExtendExpr),
    WindowFrameRangeExpr(&'a WindowFrameRangeExpr),
    WindowFrameCurrentRow(&'a WindowFrameCurrentRow),
    WindowFrameUnbounded(&'a WindowFrameUnbounded),
    WindowFrameNumber(&'a WindowFrameNumber),
    PrewhereExpr(&'a PrewhereExpr),
    WhereExpr(&'a WhereExpr),
    GroupByExpr(&'a GroupByExpr),
    HavingExpr(&'a HavingExpr),
    OrderByExpr(&'a OrderByExpr),
    OrderByListExpr(&'a OrderByListExpr),
    LimitExpr(&'a LimitExpr),
    LimitByExpr(&'a LimitByExpr),
    SettingsExpr(&'a SettingsExpr),
    SettingsExprList(&'a SettingsExprList),
    CreateDatabase(&'a CreateDatabase),
    CreateTable(&'a CreateTable),
    CreateView(&'a CreateView),
    CreateMaterializedView(&'a CreateMaterializedView),
    CreateLiveView(&'a CreateLiveView),
    WithTimeoutExpr(&'a WithTimeoutExpr),
    CreateFunction(&'a CreateFunction),
    CreateRole(&'a CreateRole),
    AlterRole(&'a AlterRole),
    RoleName(&'a RoleName),
    RoleSetting(&'a RoleSetting),
    SettingPair(&'a SettingPair),
    RoleRenamePair(&'a RoleRenamePair),
    AlterTable(&'a AlterTable),
    AlterTableAttachPartition(&'a AlterTableAttachPartition),
    AlterTableDetachPartition(&'a AlterTableDetachPartition),
    AlterTableDropPartition(&'a AlterTableDropPartition),
    AlterTableFreezePartition(&'a AlterTableFreezePartition),
    AlterTableReplacePartition(&'a AlterTableReplacePartition),
    AlterTableAddColumn(&'a AlterTableAddColumn),
    AlterTableAddIndex(&'a AlterTableAddIndex),
    AlterTableDropColumn(&'a AlterTableDropColumn),
    AlterTableDropIndex(&'a AlterTableDropIndex),
    AlterTableClearColumn(&'a AlterTableClearColumn),
    AlterTableClearIndex(&'a AlterTableClearIndex),
    AlterTableRenameColumn(&'a AlterTableRenameColumn),
    AlterTableModifyColumn(&'a AlterTableModifyColumn),
    AlterTableModifyTtl(&'a AlterTableModifyTtl),
    AlterTableRemoveTtl(&'a AlterTableRemoveTtl),
    RemovePropertyType(&'a RemovePropertyType),
    TableIndex(&'a TableIndex),
    DropDatabase(&'a DropDatabase),
    DropStmt(&'a DropStmt),
    DropUserOrRole(&'a DropUserOrRole),
    TruncateTable(&'a TruncateTable),
    RenameStmt(&'a RenameStmt),
    TargetPair(&'a TargetPair),
    ExplainExpr(&'a ExplainExpr),
    DescribeStmt(&'a DescribeStmt),
    UseExpr(&'a UseExpr),
    SetExpr(&'a SetExpr),
    SystemExpr(&'a SystemExpr),
    SystemFlushExpr(&'a SystemFlushExpr),
    SystemReloadExpr(&'a SystemReloadExpr),
    SystemSyncExpr(&'a SystemSyncExpr),
    SystemCtrlExpr(&'a SystemCtrlExpr),
    SystemDropExpr(&'a SystemDropExpr),
    OptimizeExpr(&'a OptimizeExpr),
    DeduplicateExpr(&'a DeduplicateExpr),
    CheckExpr(&'a CheckExpr),
    InsertExpr(&'a InsertExpr),
    ColumnNamesExpr(&'a ColumnNamesExpr),
    ValuesExpr(&'a ValuesExpr),
    FormatExpr(&'a FormatExpr),
    DeleteFromExpr(&'a DeleteFromExpr),
    GrantPrivilegeExpr(&'a GrantPrivilegeExpr),
    PrivilegeExpr(&'a PrivilegeExpr),
    OnClusterExpr(&'a OnClusterExpr),
    EngineExpr(&'a EngineExpr),
    DestinationExpr(&'a DestinationExpr),
    TableSchemaExpr(&'a TableSchemaExpr),
    TableArgListExpr(&'a TableArgListExpr),
    TableFunctionExpr(&'a TableFunctionExpr),
    Column(&'a Column),
    ColumnPropertyExpr(&'a ColumnPropertyExpr),
    ConstraintExpr(&'a ConstraintExpr),
    PartitionExpr(&'a PartitionExpr),
    PartitionByExpr(&'a PartitionByExpr),
    PrimaryKeyExpr(&'a PrimaryKeyExpr),
    SampleByExpr(&'a SampleByExpr),
    TtlExpr(&'a TtlExpr),
    TtlExprList(&'a TtlExprList),
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::NumberLiteral(x) => Node::NumberLiteral(x),
            Expr::StringLiteral(x) => Node::StringLiteral(x),
            Expr::NullLiteral(x) => Node::NullLiteral(x),
            Expr::NotNullLiteral(x) => Node::NotNullLiteral(x),
            Expr::IntervalExpr(x) => Node::IntervalExpr(x),
            Expr::RatioExpr(x) => Node::RatioExpr(x),
            Expr::EnumValueExpr(x) => Node::EnumValueExpr(x),
            Expr::EnumValueExprList(x) => Node::EnumValueExprList(x),
            Expr::Ident(x) => Node::Ident(x),
            Expr::NestedIdentifier(x) => Node::NestedIdentifier(x),
            Expr::ColumnIdentifier(x) => Node::ColumnIdentifier(x),
            Expr::TableIdentifier(x) => Node::TableIdentifier(x),
            Expr::Uuid(x) => Node::Uuid(x),
            Expr::TernaryExpr(x) => Node::TernaryExpr(x),
            Expr::BinaryExpr(x) => Node::BinaryExpr(x),
            Expr::UnaryExpr(x) => Node::UnaryExpr(x),
            Expr::NegateExpr(x) => Node::NegateExpr(x),
            Expr::NotExpr(x) => Node::NotExpr(x),
            Expr::GlobalInExpr(x) => Node::GlobalInExpr(x),
            Expr::IsNullExpr(x) => Node::IsNullExpr(x),
            Expr::IsNotNullExpr(x) => Node::IsNotNullExpr(x),
            Expr::CaseExpr(x) => Node::CaseExpr(x),
            Expr::WhenExpr(x) => Node::WhenExpr(x),
            Expr::CastExpr(x) => Node::CastExpr(x),
            Expr::ExtractExpr(x) => Node::ExtractExpr(x),
            Expr::FunctionExpr(x) => Node::FunctionExpr(x),
            Expr::WindowFunctionExpr(x) => Node::WindowFunctionExpr(x),
            Expr::ObjectParams(x) => Node::ObjectParams(x),
            Expr::AliasExpr(x) => Node::AliasExpr(x),
            Expr::SubQueryExpr(x) => Node::SubQueryExpr(x),
            Expr::ParamExprList(x) => Node::ParamExprList(x),
            Expr::ArrayParamList(x) => Node::ArrayParamList(x),
            Expr::ColumnArgList(x) => Node::ColumnArgList(x),
            Expr::ColumnExprList(x) => Node::ColumnExprList(x),
            Expr::ScalarTypeExpr(x) => Node::ScalarTypeExpr(x),
            Expr::PropertyTypeExpr(x) => Node::PropertyTypeExpr(x),
            Expr::TypeWithParamsExpr(x) => Node::TypeWithParamsExpr(x),
            Expr::ComplexTypeExpr(x) => Node::ComplexTypeExpr(x),
            Expr::NestedTypeExpr(x) => Node::NestedTypeExpr(x),
            Expr::CompressionCodec(x) => Node::CompressionCodec(x),
            Expr::SelectQuery(x) => Node::SelectQuery(x),
            Expr::WithExpr(x) => Node::WithExpr(x),
            Expr::CteExpr(x) => Node::CteExpr(x),
            Expr::TopExpr(x) => Node::TopExpr(x),
            Expr::FromExpr(x) => Node::FromExpr(x),
            Expr::TableExpr(x) => Node::TableExpr(x),
            Expr::JoinExpr(x) => Node::JoinExpr(x),
            Expr::JoinTableExpr(x) => Node::JoinTableExpr(x),
            Expr::JoinConstraintExpr(x) => Node::JoinConstraintExpr(x),
            Expr::SampleRatioExpr(x) => Node::SampleRatioExpr(x),
            Expr::ArrayJoinExpr(x) => Node::ArrayJoinExpr(x),
            Expr::WindowExpr(x) => Node::WindowExpr(x),
            Expr::WindowConditionExpr(x) => Node::WindowConditionExpr(x),
            Expr::WindowFrameExpr(x) => Node::WindowFrameExpr(x),
            Expr::WindowFrameExtendExpr(x) => Node::WindowFrameExtendExpr(x),
            Expr::WindowFrameRangeExpr(x) => Node::WindowFrameRangeExpr(x),
            Expr::WindowFrameCurrentRow(x) => Node::WindowFrameCurrentRow(x),
            Expr::WindowFrameUnbounded(x) => Node::WindowFrameUnbounded(x),
            Expr::WindowFrameNumber(x) => Node::WindowFrameNumber(x),
            Expr::PrewhereExpr(x) => Node::PrewhereExpr(x),
            Expr::WhereExpr(x) => Node::WhereExpr(x),
            Expr::GroupByExpr(x) => Node::GroupByExpr(x),
            Expr::HavingExpr(x) => Node::HavingExpr(x),
            Expr::OrderByExpr(x) => Node::OrderByExpr(x),
            Expr::OrderByListExpr(x) => Node::OrderByListExpr(x),
            Expr::LimitExpr(x) => Node::LimitExpr(x),
            Expr::LimitByExpr(x) => Node::LimitByExpr(x),
            Expr::SettingsExpr(x) => Node::SettingsExpr(x),
            Expr::SettingsExprList(x) => Node::SettingsExprList(x),
            Expr::CreateDatabase(x) => Node::CreateDatabase(x),
            Expr::CreateTable(x) => Node::CreateTable(x),
            Expr::CreateView(x) => Node::CreateView(x),
            Expr::CreateMaterializedView(x) => Node::CreateMaterializedView(x),
            Expr::CreateLiveView(x) => Node::CreateLiveView(x),
            Expr::WithTimeoutExpr(x) => Node::WithTimeoutExpr(x),
            Expr::CreateFunction(x) => Node::CreateFunction(x),
            Expr::CreateRole(x) => Node::CreateRole(x),
            Expr::AlterRole(x) => Node::AlterRole(x),
            Expr::RoleName(x) => Node::RoleName(x),
            Expr::RoleSetting(x) => Node::RoleSetting(x),
            Expr::SettingPair(x) => Node::SettingPair(x),
            Expr::RoleRenamePair(x) => Node::RoleRenamePair(x),
            Expr::AlterTable(x) => Node::AlterTable(x),
            Expr::AlterTableAttachPartition(x) => Node::AlterTableAttachPartition(x),
            Expr::AlterTableDetachPartition(x) => Node::AlterTableDetachPartition(x),
            Expr::AlterTableDropPartition(x) => Node::AlterTableDropPartition(x),
            Expr::AlterTableFreezePartition(x) => Node::AlterTableFreezePartition(x),
            Expr::AlterTableReplacePartition(x) => Node::AlterTableReplacePartition(x),
            Expr::AlterTableAddColumn(x) => Node::AlterTableAddColumn(x),
            Expr::AlterTableAddIndex(x) => Node::AlterTableAddIndex(x),
            Expr::AlterTableDropColumn(x) => Node::AlterTableDropColumn(x),
            Expr::AlterTableDropIndex(x) => Node::AlterTableDropIndex(x),
            Expr::AlterTableClearColumn(x) => Node::AlterTableClearColumn(x),
            Expr::AlterTableClearIndex(x) => Node::AlterTableClearIndex(x),
            Expr::AlterTableRenameColumn(x) => Node::AlterTableRenameColumn(x),
            Expr::AlterTableModifyColumn(x) => Node::AlterTableModifyColumn(x),
            Expr::AlterTableModifyTtl(x) => Node::AlterTableModifyTtl(x),
            Expr::AlterTableRemoveTtl(x) => Node::AlterTableRemoveTtl(x),
            Expr::RemovePropertyType(x) => Node::RemovePropertyType(x),
            Expr::TableIndex(x) => Node::TableIndex(x),
            Expr::DropDatabase(x) => Node::DropDatabase(x),
            Expr::DropStmt(x) => Node::DropStmt(x),
            Expr::DropUserOrRole(x) => Node::DropUserOrRole(x),
            Expr::TruncateTable(x) => Node::TruncateTable(x),
            Expr::RenameStmt(x) => Node::RenameStmt(x),
            Expr::TargetPair(x) => Node::TargetPair(x),
            Expr::ExplainExpr(x) => Node::ExplainExpr(x),
            Expr::DescribeStmt(x) => Node::DescribeStmt(x),
            Expr::UseExpr(x) => Node::UseExpr(x),
            Expr::SetExpr(x) => Node::SetExpr(x),
            Expr::SystemExpr(x) => Node::SystemExpr(x),
            Expr::SystemFlushExpr(x) => Node::SystemFlushExpr(x),
            Expr::SystemReloadExpr(x) => Node::SystemReloadExpr(x),
            Expr::SystemSyncExpr(x) => Node::SystemSyncExpr(x),
            Expr::SystemCtrlExpr(x) => Node::SystemCtrlExpr(x),
            Expr::SystemDropExpr(x) => Node::SystemDropExpr(x),
            Expr::OptimizeExpr(x) => Node::OptimizeExpr(x),
            Expr::DeduplicateExpr(x) => Node::DeduplicateExpr(x),
            Expr::CheckExpr(x) => Node::CheckExpr(x),
            Expr::InsertExpr(x) => Node::InsertExpr(x),
            Expr::ColumnNamesExpr(x) => Node::ColumnNamesExpr(x),
            Expr::ValuesExpr(x) => Node::ValuesExpr(x),
            Expr::FormatExpr(x) => Node::FormatExpr(x),
            Expr::DeleteFromExpr(x) => Node::DeleteFromExpr(x),
            Expr::GrantPrivilegeExpr(x) => Node::GrantPrivilegeExpr(x),
            Expr::PrivilegeExpr(x) => Node::PrivilegeExpr(x),
            Expr::OnClusterExpr(x) => Node::OnClusterExpr(x),
            Expr::EngineExpr(x) => Node::EngineExpr(x),
            Expr::DestinationExpr(x) => Node::DestinationExpr(x),
            Expr::TableSchemaExpr(x) => Node::TableSchemaExpr(x),
            Expr::TableArgListExpr(x) => Node::TableArgListExpr(x),
            Expr::TableFunctionExpr(x) => Node::TableFunctionExpr(x),
            Expr::Column(x) => Node::Column(x),
            Expr::ColumnPropertyExpr(x) => Node::ColumnPropertyExpr(x),
            Expr::ConstraintExpr(x) => Node::ConstraintExpr(x),
            Expr::PartitionExpr(x) => Node::PartitionExpr(x),
            Expr::PartitionByExpr(x) => Node::PartitionByExpr(x),
            Expr::PrimaryKeyExpr(x) => Node::PrimaryKeyExpr(x),
            Expr::SampleByExpr(x) => Node::SampleByExpr(x),
            Expr::TtlExpr(x) => Node::TtlExpr(x),
            Expr::TtlExprList(x) => Node::TtlExprList(x),
        }
    }
}

impl<'a> Node<'a> {
    /// Children of this node in source order. The order is fixed per
    /// variant and is the order `walk` visits them in.
    pub fn children(&self) -> Vec<Node<'a>> {
        let mut out = Vec::new();
        match *self {
            Node::NumberLiteral(_)
            | Node::StringLiteral(_)
            | Node::NullLiteral(_)
            | Node::Ident(_)
            | Node::WindowFrameCurrentRow(_)
            | Node::WindowFrameUnbounded(_)
            | Node::AlterTableRemoveTtl(_)
            | Node::SystemDropExpr(_) => {}
            Node::NotNullLiteral(x) => {
                out.push(Node::NullLiteral(&x.null));
            }
            Node::IntervalExpr(x) => {
                out.push(Node::from(&x.expr));
                out.push(Node::Ident(&x.unit));
            }
            Node::RatioExpr(x) => {
                out.push(Node::NumberLiteral(&x.numerator));
                if let Some(denominator) = &x.denominator {
                    out.push(Node::NumberLiteral(denominator));
                }
            }
            Node::EnumValueExpr(x) => {
                out.push(Node::StringLiteral(&x.name));
                out.push(Node::NumberLiteral(&x.value));
            }
            Node::EnumValueExprList(x) => {
                out.extend(x.enums.iter().map(Node::EnumValueExpr));
            }
            Node::NestedIdentifier(x) => {
                out.push(Node::Ident(&x.ident));
                if let Some(dot_ident) = &x.dot_ident {
                    out.push(Node::Ident(dot_ident));
                }
            }
            Node::ColumnIdentifier(x) => {
                if let Some(database) = &x.database {
                    out.push(Node::Ident(database));
                }
                if let Some(table) = &x.table {
                    out.push(Node::Ident(table));
                }
                out.push(Node::Ident(&x.column));
            }
            Node::TableIdentifier(x) => {
                if let Some(database) = &x.database {
                    out.push(Node::Ident(database));
                }
                out.push(Node::Ident(&x.table));
            }
            Node::Uuid(x) => {
                out.push(Node::StringLiteral(&x.value));
            }
            Node::TernaryExpr(x) => {
                out.push(Node::from(&x.condition));
                out.push(Node::from(&x.true_expr));
                out.push(Node::from(&x.false_expr));
            }
            Node::BinaryExpr(x) => {
                out.push(Node::from(&x.left));
                out.push(Node::from(&x.right));
            }
            Node::UnaryExpr(x) => out.push(Node::from(&x.expr)),
            Node::NegateExpr(x) => out.push(Node::from(&x.expr)),
            Node::NotExpr(x) => out.push(Node::from(&x.expr)),
            Node::GlobalInExpr(x) => out.push(Node::from(&x.expr)),
            Node::IsNullExpr(x) => out.push(Node::from(&x.expr)),
            Node::IsNotNullExpr(x) => out.push(Node::from(&x.expr)),
            Node::CaseExpr(x) => {
                if let Some(expr) = &x.expr {
                    out.push(Node::from(expr));
                }
                out.extend(x.whens.iter().map(Node::WhenExpr));
                if let Some(else_expr) = &x.else_expr {
                    out.push(Node::from(else_expr));
                }
            }
            Node::WhenExpr(x) => {
                out.push(Node::from(&x.when));
                out.push(Node::from(&x.then));
            }
            Node::CastExpr(x) => {
                out.push(Node::from(&x.expr));
                out.push(Node::from(&x.as_type));
            }
            Node::ExtractExpr(x) => {
                out.push(Node::Ident(&x.interval));
                out.push(Node::from(&x.from_expr));
            }
            Node::FunctionExpr(x) => {
                out.push(Node::Ident(&x.name));
                out.push(Node::ParamExprList(&x.params));
            }
            Node::WindowFunctionExpr(x) => {
                out.push(Node::FunctionExpr(&x.function));
                out.push(Node::from(&x.over));
            }
            Node::ObjectParams(x) => {
                out.push(Node::from(&x.object));
                out.push(Node::ArrayParamList(&x.params));
            }
            Node::AliasExpr(x) => {
                out.push(Node::from(&x.expr));
                out.push(Node::from(&x.alias));
            }
            Node::SubQueryExpr(x) => {
                out.push(Node::SelectQuery(&x.select));
            }
            Node::ParamExprList(x) => {
                out.push(Node::ColumnExprList(&x.items));
                if let Some(column_arg_list) = &x.column_arg_list {
                    out.push(Node::ColumnArgList(column_arg_list));
                }
            }
            Node::ArrayParamList(x) => {
                out.push(Node::ColumnExprList(&x.items));
            }
            Node::ColumnArgList(x) => {
                out.extend(x.items.iter().map(Node::from));
            }
            Node::ColumnExprList(x) => {
                out.extend(x.items.iter().map(Node::from));
            }
            Node::ScalarTypeExpr(x) => out.push(Node::Ident(&x.name)),
            Node::PropertyTypeExpr(x) => out.push(Node::Ident(&x.name)),
            Node::TypeWithParamsExpr(x) => {
                out.push(Node::Ident(&x.name));
                out.extend(x.params.iter().map(Node::from));
            }
            Node::ComplexTypeExpr(x) => {
                out.push(Node::Ident(&x.name));
                out.extend(x.params.iter().map(Node::from));
            }
            Node::NestedTypeExpr(x) => {
                out.push(Node::Ident(&x.name));
                out.extend(x.columns.iter().map(Node::from));
            }
            Node::CompressionCodec(x) => {
                out.push(Node::Ident(&x.name));
                if let Some(level) = &x.level {
                    out.push(Node::NumberLiteral(level));
                }
            }
            Node::SelectQuery(x) => {
                if let Some(with) = &x.with {
                    out.push(Node::WithExpr(with));
                }
                if let Some(top) = &x.top {
                    out.push(Node::TopExpr(top));
                }
                out.push(Node::ColumnExprList(&x.select_columns));
                if let Some(from) = &x.from {
                    out.push(Node::FromExpr(from));
                }
                if let Some(array_join) = &x.array_join {
                    out.push(Node::ArrayJoinExpr(array_join));
                }
                if let Some(window) = &x.window {
                    out.push(Node::WindowExpr(window));
                }
                if let Some(prewhere) = &x.prewhere {
                    out.push(Node::PrewhereExpr(prewhere));
                }
                if let Some(where_clause) = &x.where_clause {
                    out.push(Node::WhereExpr(where_clause));
                }
                if let Some(group_by) = &x.group_by {
                    out.push(Node::GroupByExpr(group_by));
                }
                if let Some(having) = &x.having {
                    out.push(Node::HavingExpr(having));
                }
                if let Some(order_by) = &x.order_by {
                    out.push(Node::OrderByListExpr(order_by));
                }
                if let Some(limit_by) = &x.limit_by {
                    out.push(Node::LimitByExpr(limit_by));
                }
                if let Some(limit) = &x.limit {
                    out.push(Node::LimitExpr(limit));
                }
                if let Some(settings) = &x.settings {
                    out.push(Node::SettingsExprList(settings));
                }
                if let Some(union_all) = &x.union_all {
                    out.push(Node::SelectQuery(union_all));
                }
                if let Some(union_distinct) = &x.union_distinct {
                    out.push(Node::SelectQuery(union_distinct));
                }
                if let Some(except) = &x.except {
                    out.push(Node::SelectQuery(except));
                }
            }
            Node::WithExpr(x) => {
                out.extend(x.ctes.iter().map(Node::CteExpr));
            }
            Node::CteExpr(x) => {
                out.push(Node::from(&x.expr));
                out.push(Node::from(&x.alias));
            }
            Node::TopExpr(x) => out.push(Node::NumberLiteral(&x.number)),
            Node::FromExpr(x) => out.push(Node::from(&x.expr)),
            Node::TableExpr(x) => {
                out.push(Node::from(&x.expr));
                if let Some(alias) = &x.alias {
                    out.push(Node::Ident(alias));
                }
            }
            Node::JoinExpr(x) => {
                out.push(Node::from(&x.left));
                if let Some(right) = &x.right {
                    out.push(Node::from(right));
                }
                if let Some(constraints) = &x.constraints {
                    out.push(Node::from(constraints));
                }
            }
            Node::JoinTableExpr(x) => {
                out.push(Node::TableExpr(&x.table));
                if let Some(sample_ratio) = &x.sample_ratio {
                    out.push(Node::SampleRatioExpr(sample_ratio));
                }
            }
            Node::JoinConstraintExpr(x) => {
                if let Some(on) = &x.on {
                    out.push(Node::ColumnExprList(on));
                }
                if let Some(using) = &x.using {
                    out.push(Node::ColumnExprList(using));
                }
            }
            Node::SampleRatioExpr(x) => {
                out.push(Node::RatioExpr(&x.ratio));
                if let Some(offset) = &x.offset {
                    out.push(Node::RatioExpr(offset));
                }
            }
            Node::ArrayJoinExpr(x) => out.push(Node::from(&x.expr)),
            Node::WindowExpr(x) => {
                out.push(Node::Ident(&x.name));
                out.push(Node::WindowConditionExpr(&x.condition));
            }
            Node::WindowConditionExpr(x) => {
                if let Some(partition_by) = &x.partition_by {
                    out.push(Node::PartitionByExpr(partition_by));
                }
                if let Some(order_by) = &x.order_by {
                    out.push(Node::OrderByListExpr(order_by));
                }
                if let Some(frame) = &x.frame {
                    out.push(Node::WindowFrameExpr(frame));
                }
            }
            Node::WindowFrameExpr(x) => out.push(Node::from(&x.extend)),
            Node::WindowFrameExtendExpr(x) => out.push(Node::from(&x.expr)),
            Node::WindowFrameRangeExpr(x) => {
                out.push(Node::from(&x.between));
                out.push(Node::from(&x.and_expr));
            }
            Node::WindowFrameNumber(x) => out.push(Node::NumberLiteral(&x.number)),
            Node::PrewhereExpr(x) => out.push(Node::from(&x.expr)),
            Node::WhereExpr(x) => out.push(Node::from(&x.expr)),
            Node::GroupByExpr(x) => out.push(Node::from(&x.expr)),
            Node::HavingExpr(x) => out.push(Node::from(&x.expr)),
            Node::OrderByExpr(x) => out.push(Node::from(&x.expr)),
            Node::OrderByListExpr(x) => {
                out.extend(x.items.iter().map(Node::from));
            }
            Node::LimitExpr(x) => {
                out.push(Node::from(&x.limit));
                if let Some(offset) = &x.offset {
                    out.push(Node::from(offset));
                }
            }
            Node::LimitByExpr(x) => {
                out.push(Node::LimitExpr(&x.limit));
                out.push(Node::ColumnExprList(&x.by));
            }
            Node::SettingsExpr(x) => {
                out.push(Node::Ident(&x.name));
                out.push(Node::from(&x.expr));
            }
            Node::SettingsExprList(x) => {
                out.extend(x.items.iter().map(Node::SettingsExpr));
            }
            Node::CreateDatabase(x) => {
                out.push(Node::Ident(&x.name));
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
                if let Some(engine) = &x.engine {
                    out.push(Node::EngineExpr(engine));
                }
            }
            Node::CreateTable(x) => {
                out.push(Node::TableIdentifier(&x.name));
                if let Some(uuid) = &x.uuid {
                    out.push(Node::Uuid(uuid));
                }
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
                if let Some(table_schema) = &x.table_schema {
                    out.push(Node::TableSchemaExpr(table_schema));
                }
                if let Some(engine) = &x.engine {
                    out.push(Node::EngineExpr(engine));
                }
                if let Some(sub_query) = &x.sub_query {
                    out.push(Node::SubQueryExpr(sub_query));
                }
            }
            Node::CreateView(x) => {
                out.push(Node::TableIdentifier(&x.name));
                if let Some(uuid) = &x.uuid {
                    out.push(Node::Uuid(uuid));
                }
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
                if let Some(table_schema) = &x.table_schema {
                    out.push(Node::TableSchemaExpr(table_schema));
                }
                if let Some(sub_query) = &x.sub_query {
                    out.push(Node::SubQueryExpr(sub_query));
                }
            }
            Node::CreateMaterializedView(x) => {
                out.push(Node::TableIdentifier(&x.name));
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
                if let Some(destination) = &x.destination {
                    out.push(Node::DestinationExpr(destination));
                }
                if let Some(engine) = &x.engine {
                    out.push(Node::EngineExpr(engine));
                }
                if let Some(sub_query) = &x.sub_query {
                    out.push(Node::SubQueryExpr(sub_query));
                }
            }
            Node::CreateLiveView(x) => {
                out.push(Node::TableIdentifier(&x.name));
                if let Some(uuid) = &x.uuid {
                    out.push(Node::Uuid(uuid));
                }
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
                if let Some(with_timeout) = &x.with_timeout {
                    out.push(Node::WithTimeoutExpr(with_timeout));
                }
                if let Some(destination) = &x.destination {
                    out.push(Node::DestinationExpr(destination));
                }
                if let Some(table_schema) = &x.table_schema {
                    out.push(Node::TableSchemaExpr(table_schema));
                }
                if let Some(sub_query) = &x.sub_query {
                    out.push(Node::SubQueryExpr(sub_query));
                }
            }
            Node::WithTimeoutExpr(x) => out.push(Node::NumberLiteral(&x.number)),
            Node::CreateFunction(x) => {
                out.push(Node::Ident(&x.name));
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
                out.push(Node::ParamExprList(&x.params));
                out.push(Node::from(&x.expr));
            }
            Node::CreateRole(x) => {
                out.extend(x.names.iter().map(Node::RoleName));
                if let Some(access_storage_type) = &x.access_storage_type {
                    out.push(Node::Ident(access_storage_type));
                }
                out.extend(x.settings.iter().map(Node::RoleSetting));
            }
            Node::AlterRole(x) => {
                out.extend(x.rename_pairs.iter().map(Node::RoleRenamePair));
                out.extend(x.settings.iter().map(Node::RoleSetting));
            }
            Node::RoleName(x) => {
                out.push(Node::Ident(&x.name));
                if let Some(scope) = &x.scope {
                    out.push(Node::StringLiteral(scope));
                }
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
            }
            Node::RoleSetting(x) => {
                out.extend(x.pairs.iter().map(Node::SettingPair));
                if let Some(modifier) = &x.modifier {
                    out.push(Node::Ident(modifier));
                }
            }
            Node::SettingPair(x) => {
                out.push(Node::Ident(&x.name));
                if let Some(value) = &x.value {
                    out.push(Node::from(value));
                }
            }
            Node::RoleRenamePair(x) => {
                out.push(Node::RoleName(&x.role_name));
                if let Some(new_name) = &x.new_name {
                    out.push(Node::Ident(new_name));
                }
            }
            Node::AlterTable(x) => {
                out.push(Node::TableIdentifier(&x.table));
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
                out.extend(x.alter_exprs.iter().map(Node::from));
            }
            Node::AlterTableAttachPartition(x) => {
                out.push(Node::PartitionExpr(&x.partition));
                if let Some(from) = &x.from {
                    out.push(Node::TableIdentifier(from));
                }
            }
            Node::AlterTableDetachPartition(x) => {
                out.push(Node::PartitionExpr(&x.partition));
                if let Some(settings) = &x.settings {
                    out.push(Node::SettingsExprList(settings));
                }
            }
            Node::AlterTableDropPartition(x) => {
                out.push(Node::PartitionExpr(&x.partition));
            }
            Node::AlterTableFreezePartition(x) => {
                if let Some(partition) = &x.partition {
                    out.push(Node::PartitionExpr(partition));
                }
            }
            Node::AlterTableReplacePartition(x) => {
                out.push(Node::PartitionExpr(&x.partition));
                out.push(Node::TableIdentifier(&x.table));
            }
            Node::AlterTableAddColumn(x) => {
                out.push(Node::Column(&x.column));
                if let Some(after) = &x.after {
                    out.push(Node::NestedIdentifier(after));
                }
            }
            Node::AlterTableAddIndex(x) => {
                out.push(Node::TableIndex(&x.index));
                if let Some(after) = &x.after {
                    out.push(Node::NestedIdentifier(after));
                }
            }
            Node::AlterTableDropColumn(x) => {
                out.push(Node::NestedIdentifier(&x.column_name));
            }
            Node::AlterTableDropIndex(x) => {
                out.push(Node::NestedIdentifier(&x.index_name));
            }
            Node::AlterTableClearColumn(x) => {
                out.push(Node::NestedIdentifier(&x.column_name));
                if let Some(partition) = &x.partition {
                    out.push(Node::PartitionExpr(partition));
                }
            }
            Node::AlterTableClearIndex(x) => {
                out.push(Node::NestedIdentifier(&x.index_name));
                if let Some(partition) = &x.partition {
                    out.push(Node::PartitionExpr(partition));
                }
            }
            Node::AlterTableRenameColumn(x) => {
                out.push(Node::NestedIdentifier(&x.old_name));
                out.push(Node::NestedIdentifier(&x.new_name));
            }
            Node::AlterTableModifyColumn(x) => {
                out.push(Node::Column(&x.column));
                if let Some(remove_property) = &x.remove_property {
                    out.push(Node::RemovePropertyType(remove_property));
                }
            }
            Node::AlterTableModifyTtl(x) => out.push(Node::TtlExpr(&x.ttl)),
            Node::RemovePropertyType(x) => {
                out.push(Node::PropertyTypeExpr(&x.property_type));
            }
            Node::TableIndex(x) => {
                out.push(Node::NestedIdentifier(&x.name));
                out.push(Node::from(&x.column_expr));
                out.push(Node::from(&x.column_type));
                out.push(Node::NumberLiteral(&x.granularity));
            }
            Node::DropDatabase(x) => {
                out.push(Node::Ident(&x.name));
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
            }
            Node::DropStmt(x) => {
                out.push(Node::TableIdentifier(&x.name));
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
            }
            Node::DropUserOrRole(x) => {
                out.extend(x.names.iter().map(Node::RoleName));
                if let Some(from) = &x.from {
                    out.push(Node::Ident(from));
                }
            }
            Node::TruncateTable(x) => {
                out.push(Node::TableIdentifier(&x.name));
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
            }
            Node::RenameStmt(x) => {
                out.extend(x.target_pairs.iter().map(Node::TargetPair));
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
            }
            Node::TargetPair(x) => {
                out.push(Node::TableIdentifier(&x.old));
                out.push(Node::TableIdentifier(&x.new));
            }
            Node::ExplainExpr(x) => out.push(Node::from(&x.statement)),
            Node::DescribeStmt(x) => out.push(Node::TableIdentifier(&x.table)),
            Node::UseExpr(x) => out.push(Node::Ident(&x.database)),
            Node::SetExpr(x) => out.push(Node::SettingsExprList(&x.settings)),
            Node::SystemExpr(x) => out.push(Node::from(&x.expr)),
            Node::SystemFlushExpr(x) => {
                if let Some(distributed) = &x.distributed {
                    out.push(Node::TableIdentifier(distributed));
                }
            }
            Node::SystemReloadExpr(x) => {
                if let Some(dictionary) = &x.dictionary {
                    out.push(Node::TableIdentifier(dictionary));
                }
            }
            Node::SystemSyncExpr(x) => out.push(Node::TableIdentifier(&x.cluster)),
            Node::SystemCtrlExpr(x) => {
                if let Some(cluster) = &x.cluster {
                    out.push(Node::TableIdentifier(cluster));
                }
            }
            Node::OptimizeExpr(x) => {
                out.push(Node::TableIdentifier(&x.table));
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
                if let Some(partition) = &x.partition {
                    out.push(Node::PartitionExpr(partition));
                }
                if let Some(deduplicate) = &x.deduplicate {
                    out.push(Node::DeduplicateExpr(deduplicate));
                }
            }
            Node::DeduplicateExpr(x) => {
                if let Some(by) = &x.by {
                    out.push(Node::ColumnExprList(by));
                }
                if let Some(except) = &x.except {
                    out.push(Node::ColumnExprList(except));
                }
            }
            Node::CheckExpr(x) => {
                out.push(Node::TableIdentifier(&x.table));
                if let Some(partition) = &x.partition {
                    out.push(Node::PartitionExpr(partition));
                }
            }
            Node::InsertExpr(x) => {
                out.push(Node::from(&x.table));
                if let Some(column_names) = &x.column_names {
                    out.push(Node::ColumnNamesExpr(column_names));
                }
                if let Some(format) = &x.format {
                    out.push(Node::FormatExpr(format));
                }
                out.extend(x.values.iter().map(Node::ValuesExpr));
                if let Some(select) = &x.select {
                    out.push(Node::SelectQuery(select));
                }
            }
            Node::ColumnNamesExpr(x) => {
                out.extend(x.column_names.iter().map(Node::NestedIdentifier));
            }
            Node::ValuesExpr(x) => {
                out.extend(x.values.iter().map(Node::from));
            }
            Node::FormatExpr(x) => out.push(Node::Ident(&x.format)),
            Node::DeleteFromExpr(x) => {
                out.push(Node::TableIdentifier(&x.table));
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
                if let Some(where_expr) = &x.where_expr {
                    out.push(Node::from(where_expr));
                }
            }
            Node::GrantPrivilegeExpr(x) => {
                if let Some(on_cluster) = &x.on_cluster {
                    out.push(Node::OnClusterExpr(on_cluster));
                }
                out.extend(x.privileges.iter().map(Node::PrivilegeExpr));
                out.push(Node::TableIdentifier(&x.on));
                out.extend(x.to.iter().map(Node::Ident));
            }
            Node::PrivilegeExpr(x) => {
                if let Some(params) = &x.params {
                    out.push(Node::ParamExprList(params));
                }
            }
            Node::OnClusterExpr(x) => out.push(Node::from(&x.expr)),
            Node::EngineExpr(x) => {
                if let Some(params) = &x.params {
                    out.push(Node::ParamExprList(params));
                }
                if let Some(primary_key) = &x.primary_key {
                    out.push(Node::PrimaryKeyExpr(primary_key));
                }
                if let Some(partition_by) = &x.partition_by {
                    out.push(Node::PartitionByExpr(partition_by));
                }
                if let Some(sample_by) = &x.sample_by {
                    out.push(Node::SampleByExpr(sample_by));
                }
                if let Some(ttl) = &x.ttl {
                    out.push(Node::TtlExprList(ttl));
                }
                if let Some(settings) = &x.settings {
                    out.push(Node::SettingsExprList(settings));
                }
                if let Some(order_by) = &x.order_by {
                    out.push(Node::OrderByListExpr(order_by));
                }
            }
            Node::DestinationExpr(x) => {
                out.push(Node::TableIdentifier(&x.table));
                if let Some(table_schema) = &x.table_schema {
                    out.push(Node::TableSchemaExpr(table_schema));
                }
            }
            Node::TableSchemaExpr(x) => {
                out.extend(x.columns.iter().map(Node::from));
                if let Some(alias_table) = &x.alias_table {
                    out.push(Node::TableIdentifier(alias_table));
                }
                if let Some(table_function) = &x.table_function {
                    out.push(Node::TableFunctionExpr(table_function));
                }
            }
            Node::TableArgListExpr(x) => {
                out.extend(x.args.iter().map(Node::from));
            }
            Node::TableFunctionExpr(x) => {
                out.push(Node::Ident(&x.name));
                out.push(Node::TableArgListExpr(&x.args));
            }
            Node::Column(x) => {
                out.push(Node::NestedIdentifier(&x.name));
                if let Some(column_type) = &x.column_type {
                    out.push(Node::from(column_type));
                }
                if let Some(not_null) = &x.not_null {
                    out.push(Node::NotNullLiteral(not_null));
                }
                if let Some(nullable) = &x.nullable {
                    out.push(Node::NullLiteral(nullable));
                }
                if let Some(property) = &x.property {
                    out.push(Node::ColumnPropertyExpr(property));
                }
                if let Some(codec) = &x.codec {
                    out.push(Node::CompressionCodec(codec));
                }
                if let Some(ttl) = &x.ttl {
                    out.push(Node::from(ttl));
                }
                if let Some(comment) = &x.comment {
                    out.push(Node::StringLiteral(comment));
                }
            }
            Node::ColumnPropertyExpr(x) => {
                if let Some(expr) = &x.expr {
                    out.push(Node::from(expr));
                }
            }
            Node::ConstraintExpr(x) => {
                out.push(Node::Ident(&x.constraint));
                out.push(Node::from(&x.expr));
            }
            Node::PartitionExpr(x) => {
                if let Some(expr) = &x.expr {
                    out.push(Node::from(expr));
                }
                if let Some(id) = &x.id {
                    out.push(Node::StringLiteral(id));
                }
            }
            Node::PartitionByExpr(x) => out.push(Node::from(&x.expr)),
            Node::PrimaryKeyExpr(x) => out.push(Node::from(&x.expr)),
            Node::SampleByExpr(x) => out.push(Node::from(&x.expr)),
            Node::TtlExpr(x) => out.push(Node::from(&x.expr)),
            Node::TtlExprList(x) => {
                out.extend(x.items.iter().map(Node::TtlExpr));
            }
        }
        out
    }

    fn dispatch<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<()> {
        match *self {
            Node::NumberLiteral(x) => visitor.visit_number_literal(x),
            Node::StringLiteral(x) => visitor.visit_string_literal(x),
            Node::NullLiteral(x) => visitor.visit_null_literal(x),
            Node::NotNullLiteral(x) => visitor.visit_not_null_literal(x),
            Node::IntervalExpr(x) => visitor.visit_interval_expr(x),
            Node::RatioExpr(x) => visitor.visit_ratio_expr(x),
            Node::EnumValueExpr(x) => visitor.visit_enum_value_expr(x),
            Node::EnumValueExprList(x) => visitor.visit_enum_value_expr_list(x),
            Node::Ident(x) => visitor.visit_ident(x),
            Node::NestedIdentifier(x) => visitor.visit_nested_identifier(x),
            Node::ColumnIdentifier(x) => visitor.visit_column_identifier(x),
            Node::TableIdentifier(x) => visitor.visit_table_identifier(x),
            Node::Uuid(x) => visitor.visit_uuid(x),
            Node::TernaryExpr(x) => visitor.visit_ternary_expr(x),
            Node::BinaryExpr(x) => visitor.visit_binary_expr(x),
            Node::UnaryExpr(x) => visitor.visit_unary_expr(x),
            Node::NegateExpr(x) => visitor.visit_negate_expr(x),
            Node::NotExpr(x) => visitor.visit_not_expr(x),
            Node::GlobalInExpr(x) => visitor.visit_global_in_expr(x),
            Node::IsNullExpr(x) => visitor.visit_is_null_expr(x),
            Node::IsNotNullExpr(x) => visitor.visit_is_not_null_expr(x),
            Node::CaseExpr(x) => visitor.visit_case_expr(x),
            Node::WhenExpr(x) => visitor.visit_when_expr(x),
            Node::CastExpr(x) => visitor.visit_cast_expr(x),
            Node::ExtractExpr(x) => visitor.visit_extract_expr(x),
            Node::FunctionExpr(x) => visitor.visit_function_expr(x),
            Node::WindowFunctionExpr(x) => visitor.visit_window_function_expr(x),
            Node::ObjectParams(x) => visitor.visit_object_params(x),
            Node::AliasExpr(x) => visitor.visit_alias_expr(x),
            Node::SubQueryExpr(x) => visitor.visit_sub_query_expr(x),
            Node::ParamExprList(x) => visitor.visit_param_expr_list(x),
            Node::ArrayParamList(x) => visitor.visit_array_param_list(x),
            Node::ColumnArgList(x) => visitor.visit_column_arg_list(x),
            Node::ColumnExprList(x) => visitor.visit_column_expr_list(x),
            Node::ScalarTypeExpr(x) => visitor.visit_scalar_type_expr(x),
            Node::PropertyTypeExpr(x) => visitor.visit_property_type_expr(x),
            Node::TypeWithParamsExpr(x) => visitor.visit_type_with_params_expr(x),
            Node::ComplexTypeExpr(x) => visitor.visit_complex_type_expr(x),
            Node::NestedTypeExpr(x) => visitor.visit_nested_type_expr(x),
            Node::CompressionCodec(x) => visitor.visit_compression_codec(x),
            Node::SelectQuery(x) => visitor.visit_select_query(x),
            Node::WithExpr(x) => visitor.visit_with_expr(x),
            Node::CteExpr(x) => visitor.visit_cte_expr(x),
            Node::TopExpr(x) => visitor.visit_top_expr(x),
            Node::FromExpr(x) => visitor.visit_from_expr(x),
            Node::TableExpr(x) => visitor.visit_table_expr(x),
            Node::JoinExpr(x) => visitor.visit_join_expr(x),
            Node::JoinTableExpr(x) => visitor.visit_join_table_expr(x),
            Node::JoinConstraintExpr(x) => visitor.visit_join_constraint_expr(x),
            Node::SampleRatioExpr(x) => visitor.visit_sample_ratio_expr(x),
            Node::ArrayJoinExpr(x) => visitor.visit_array_join_expr(x),
            Node::WindowExpr(x) => visitor.visit_window_expr(x),
            Node::WindowConditionExpr(x) => visitor.visit_window_condition_expr(x),
            Node::WindowFrameExpr(x) => visitor.visit_window_frame_expr(x),
            Node::WindowFrameExtendExpr(x) => visitor.visit_window_frame_extend_expr(x),
            Node::WindowFrameRangeExpr(x) => visitor.visit_window_frame_range_expr(x),
            Node::WindowFrameCurrentRow(x) => visitor.visit_window_frame_current_row(x),
            Node::WindowFrameUnbounded(x) => visitor.visit_window_frame_unbounded(x),
            Node::WindowFrameNumber(x) => visitor.visit_window_frame_number(x),
            Node::PrewhereExpr(x) => visitor.visit_prewhere_expr(x),
            Node::WhereExpr(x) => visitor.visit_where_expr(x),
            Node::GroupByExpr(x) => visitor.visit_group_by_expr(x),
            Node::HavingExpr(x) => visitor.visit_having_expr(x),
            Node::OrderByExpr(x) => visitor.visit_order_by_expr(x),
            Node::OrderByListExpr(x) => visitor.visit_order_by_list_expr(x),
            Node::LimitExpr(x) => visitor.visit_limit_expr(x),
            Node::LimitByExpr(x) => visitor.visit_limit_by_expr(x),
            Node::SettingsExpr(x) => visitor.visit_settings_expr(x),
            Node::SettingsExprList(x) => visitor.visit_settings_expr_list(x),
            Node::CreateDatabase(x) => visitor.visit_create_database(x),
            Node::CreateTable(x) => visitor.visit_create_table(x),
            Node::CreateView(x) => visitor.visit_create_view(x),
            Node::CreateMaterializedView(x) => visitor.visit_create_materialized_view(x),
            Node::CreateLiveView(x) => visitor.visit_create_live_view(x),
            Node::WithTimeoutExpr(x) => visitor.visit_with_timeout_expr(x),
            Node::CreateFunction(x) => visitor.visit_create_function(x),
            Node::CreateRole(x) => visitor.visit_create_role(x),
            Node::AlterRole(x) => visitor.visit_alter_role(x),
            Node::RoleName(x) => visitor.visit_role_name(x),
            Node::RoleSetting(x) => visitor.visit_role_setting(x),
            Node::SettingPair(x) => visitor.visit_setting_pair(x),
            Node::RoleRenamePair(x) => visitor.visit_role_rename_pair(x),
            Node::AlterTable(x) => visitor.visit_alter_table(x),
            Node::AlterTableAttachPartition(x) => visitor.visit_alter_table_attach_partition(x),
            Node::AlterTableDetachPartition(x) => visitor.visit_alter_table_detach_partition(x),
            Node::AlterTableDropPartition(x) => visitor.visit_alter_table_drop_partition(x),
            Node::AlterTableFreezePartition(x) => visitor.visit_alter_table_freeze_partition(x),
            Node::AlterTableReplacePartition(x) => visitor.visit_alter_table_replace_partition(x),
            Node::AlterTableAddColumn(x) => visitor.visit_alter_table_add_column(x),
            Node::AlterTableAddIndex(x) => visitor.visit_alter_table_add_index(x),
            Node::AlterTableDropColumn(x) => visitor.visit_alter_table_drop_column(x),
            Node::AlterTableDropIndex(x) => visitor.visit_alter_table_drop_index(x),
            Node::AlterTableClearColumn(x) => visitor.visit_alter_table_clear_column(x),
            Node::AlterTableClearIndex(x) => visitor.visit_alter_table_clear_index(x),
            Node::AlterTableRenameColumn(x) => visitor.visit_alter_table_rename_column(x),
            Node::AlterTableModifyColumn(x) => visitor.visit_alter_table_modify_column(x),
            Node::AlterTableModifyTtl(x) => visitor.visit_alter_table_modify_ttl(x),
            Node::AlterTableRemoveTtl(x) => visitor.visit_alter_table_remove_ttl(x),
            Node::RemovePropertyType(x) => visitor.visit_remove_property_type(x),
            Node::TableIndex(x) => visitor.visit_table_index(x),
            Node::DropDatabase(x) => visitor.visit_drop_database(x),
            Node::DropStmt(x) => visitor.visit_drop_stmt(x),
            Node::DropUserOrRole(x) => visitor.visit_drop_user_or_role(x),
            Node::TruncateTable(x) => visitor.visit_truncate_table(x),
            Node::RenameStmt(x) => visitor.visit_rename_stmt(x),
            Node::TargetPair(x) => visitor.visit_target_pair(x),
            Node::ExplainExpr(x) => visitor.visit_explain_expr(x),
            Node::DescribeStmt(x) => visitor.visit_describe_stmt(x),
            Node::UseExpr(x) => visitor.visit_use_expr(x),
            Node::SetExpr(x) => visitor.visit_set_expr(x),
            Node::SystemExpr(x) => visitor.visit_system_expr(x),
            Node::SystemFlushExpr(x) => visitor.visit_system_flush_expr(x),
            Node::SystemReloadExpr(x) => visitor.visit_system_reload_expr(x),
            Node::SystemSyncExpr(x) => visitor.visit_system_sync_expr(x),
            Node::SystemCtrlExpr(x) => visitor.visit_system_ctrl_expr(x),
            Node::SystemDropExpr(x) => visitor.visit_system_drop_expr(x),
            Node::OptimizeExpr(x) => visitor.visit_optimize_expr(x),
            Node::DeduplicateExpr(x) => visitor.visit_deduplicate_expr(x),
            Node::CheckExpr(x) => visitor.visit_check_expr(x),
            Node::InsertExpr(x) => visitor.visit_insert_expr(x),
            Node::ColumnNamesExpr(x) => visitor.visit_column_names_expr(x),
            Node::ValuesExpr(x) => visitor.visit_values_expr(x),
            Node::FormatExpr(x) => visitor.visit_format_expr(x),
            Node::DeleteFromExpr(x) => visitor.visit_delete_from_expr(x),
            Node::GrantPrivilegeExpr(x) => visitor.visit_grant_privilege_expr(x),
            Node::PrivilegeExpr(x) => visitor.visit_privilege_expr(x),
            Node::OnClusterExpr(x) => visitor.visit_on_cluster_expr(x),
            Node::EngineExpr(x) => visitor.visit_engine_expr(x),
            Node::DestinationExpr(x) => visitor.visit_destination_expr(x),
            Node::TableSchemaExpr(x) => visitor.visit_table_schema_expr(x),
            Node::TableArgListExpr(x) => visitor.visit_table_arg_list_expr(x),
            Node::TableFunctionExpr(x) => visitor.visit_table_function_expr(x),
            Node::Column(x) => visitor.visit_column(x),
            Node::ColumnPropertyExpr(x) => visitor.visit_column_property_expr(x),
            Node::ConstraintExpr(x) => visitor.visit_constraint_expr(x),
            Node::PartitionExpr(x) => visitor.visit_partition_expr(x),
            Node::PartitionByExpr(x) => visitor.visit_partition_by_expr(x),
            Node::PrimaryKeyExpr(x) => visitor.visit_primary_key_expr(x),
            Node::SampleByExpr(x) => visitor.visit_sample_by_expr(x),
            Node::TtlExpr(x) => visitor.visit_ttl_expr(x),
            Node::TtlExprList(x) => visitor.visit_ttl_expr_list(x),
        }
    }
}

/// Depth-first traversal: enter, children, variant hook, leave.
/// `leave` always runs, also when a child or hook failed.
pub fn walk<V: Visitor + ?Sized>(visitor: &mut V, node: Node<'_>) -> Result<()> {
    visitor.enter(&node);
    let result = (|| {
        for child in node.children() {
            walk(visitor, child)?;
        }
        node.dispatch(visitor)
    })();
    visitor.leave(&node);
    result
}

impl Expr {
    /// Traverse this tree depth-first with the given visitor
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<()> {
        walk(visitor, Node::from(self))
    }
}

/// AST visitor with one hook per node variant plus generic enter/leave.
/// Every hook defaults to a no-op, so implementors override only what they
/// need.
#[allow(unused_variables)]
pub trait Visitor {
    fn enter(&mut self, node: &Node<'_>) {}
    fn leave(&mut self, node: &Node<'_>) {}

    fn visit_number_literal(&mut self, expr: &NumberLiteral) -> Result<()> {
        Ok(())
    }
    fn visit_string_literal(&mut self, expr: &StringLiteral) -> Result<()> {
        Ok(())
    }
    fn visit_null_literal(&mut self, expr: &NullLiteral) -> Result<()> {
        Ok(())
    }
    fn visit_not_null_literal(&mut self, expr: &NotNullLiteral) -> Result<()> {
        Ok(())
    }
    fn visit_interval_expr(&mut self, expr: &IntervalExpr) -> Result<()> {
        Ok(())
    }
    fn visit_ratio_expr(&mut self, expr: &RatioExpr) -> Result<()> {
        Ok(())
    }
    fn visit_enum_value_expr(&mut self, expr: &EnumValueExpr) -> Result<()> {
        Ok(())
    }
    fn visit_enum_value_expr_list(&mut self, expr: &EnumValueExprList) -> Result<()> {
        Ok(())
    }
    fn visit_ident(&mut self, expr: &Ident) -> Result<()> {
        Ok(())
    }
    fn visit_nested_identifier(&mut self, expr: &NestedIdentifier) -> Result<()> {
        Ok(())
    }
    fn visit_column_identifier(&mut self, expr: &ColumnIdentifier) -> Result<()> {
        Ok(())
    }
    fn visit_table_identifier(&mut self, expr: &TableIdentifier) -> Result<()> {
        Ok(())
    }
    fn visit_uuid(&mut self, expr: &Uuid) -> Result<()> {
        Ok(())
    }
    fn visit_ternary_expr(&mut self, expr: &TernaryExpr) -> Result<()> {
        Ok(())
    }
    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> Result<()> {
        Ok(())
    }
    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> Result<()> {
        Ok(())
    }
    fn visit_negate_expr(&mut self, expr: &NegateExpr) -> Result<()> {
        Ok(())
    }
    fn visit_not_expr(&mut self, expr: &NotExpr) -> Result<()> {
        Ok(())
    }
    fn visit_global_in_expr(&mut self, expr: &GlobalInExpr) -> Result<()> {
        Ok(())
    }
    fn visit_is_null_expr(&mut self, expr: &IsNullExpr) -> Result<()> {
        Ok(())
    }
    fn visit_is_not_null_expr(&mut self, expr: &IsNotNullExpr) -> Result<()> {
        Ok(())
    }
    fn visit_case_expr(&mut self, expr: &CaseExpr) -> Result<()> {
        Ok(())
    }
    fn visit_when_expr(&mut self, expr: &WhenExpr) -> Result<()> {
        Ok(())
    }
    fn visit_cast_expr(&mut self, expr: &CastExpr) -> Result<()> {
        Ok(())
    }
    fn visit_extract_expr(&mut self, expr: &ExtractExpr) -> Result<()> {
        Ok(())
    }
    fn visit_function_expr(&mut self, expr: &FunctionExpr) -> Result<()> {
        Ok(())
    }
    fn visit_window_function_expr(&mut self, expr: &WindowFunctionExpr) -> Result<()> {
        Ok(())
    }
    fn visit_object_params(&mut self, expr: &ObjectParams) -> Result<()> {
        Ok(())
    }
    fn visit_alias_expr(&mut self, expr: &AliasExpr) -> Result<()> {
        Ok(())
    }
    fn visit_sub_query_expr(&mut self, expr: &SubQueryExpr) -> Result<()> {
        Ok(())
    }
    fn visit_param_expr_list(&mut self, expr: &ParamExprList) -> Result<()> {
        Ok(())
    }
    fn visit_array_param_list(&mut self, expr: &ArrayParamList) -> Result<()> {
        Ok(())
    }
    fn visit_column_arg_list(&mut self, expr: &ColumnArgList) -> Result<()> {
        Ok(())
    }
    fn visit_column_expr_list(&mut self, expr: &ColumnExprList) -> Result<()> {
        Ok(())
    }
    fn visit_scalar_type_expr(&mut self, expr: &ScalarTypeExpr) -> Result<()> {
        Ok(())
    }
    fn visit_property_type_expr(&mut self, expr: &PropertyTypeExpr) -> Result<()> {
        Ok(())
    }
    fn visit_type_with_params_expr(&mut self, expr: &TypeWithParamsExpr) -> Result<()> {
        Ok(())
    }
    fn visit_complex_type_expr(&mut self, expr: &ComplexTypeExpr) -> Result<()> {
        Ok(())
    }
    fn visit_nested_type_expr(&mut self, expr: &NestedTypeExpr) -> Result<()> {
        Ok(())
    }
    fn visit_compression_codec(&mut self, expr: &CompressionCodec) -> Result<()> {
        Ok(())
    }
    fn visit_select_query(&mut self, expr: &SelectQuery) -> Result<()> {
        Ok(())
    }
    fn visit_with_expr(&mut self, expr: &WithExpr) -> Result<()> {
        Ok(())
    }
    fn visit_cte_expr(&mut self, expr: &CteExpr) -> Result<()> {
        Ok(())
    }
    fn visit_top_expr(&mut self, expr: &TopExpr) -> Result<()> {
        Ok(())
    }
    fn visit_from_expr(&mut self, expr: &FromExpr) -> Result<()> {
        Ok(())
    }
    fn visit_table_expr(&mut self, expr: &TableExpr) -> Result<()> {
        Ok(())
    }
    fn visit_join_expr(&mut self, expr: &JoinExpr) -> Result<()> {
        Ok(())
    }
    fn visit_join_table_expr(&mut self, expr: &JoinTableExpr) -> Result<()> {
        Ok(())
    }
    fn visit_join_constraint_expr(&mut self, expr: &JoinConstraintExpr) -> Result<()> {
        Ok(())
    }
    fn visit_sample_ratio_expr(&mut self, expr: &SampleRatioExpr) -> Result<()> {
        Ok(())
    }
    fn visit_array_join_expr(&mut self, expr: &ArrayJoinExpr) -> Result<()> {
        Ok(())
    }
    fn visit_window_expr(&mut self, expr: &WindowExpr) -> Result<()> {
        Ok(())
    }
    fn visit_window_condition_expr(&mut self, expr: &WindowConditionExpr) -> Result<()> {
        Ok(())
    }
    fn visit_window_frame_expr(&mut self, expr: &WindowFrameExpr) -> Result<()> {
        Ok(())
    }
    fn visit_window_frame_extend_expr(&mut self, expr: &WindowFrameExtendExpr) -> Result<()> {
        Ok(())
    }
    fn visit_window_frame_range_expr(&mut self, expr: &WindowFrameRangeExpr) -> Result<()> {
        Ok(())
    }
    fn visit_window_frame_current_row(&mut self, expr: &WindowFrameCurrentRow) -> Result<()> {
        Ok(())
    }
    fn visit_window_frame_unbounded(&mut self, expr: &WindowFrameUnbounded) -> Result<()> {
        Ok(())
    }
    fn visit_window_frame_number(&mut self, expr: &WindowFrameNumber) -> Result<()> {
        Ok(())
    }
    fn visit_prewhere_expr(&mut self, expr: &PrewhereExpr) -> Result<()> {
        Ok(())
    }
    fn visit_where_expr(&mut self, expr: &WhereExpr) -> Result<()> {
        Ok(())
    }
    fn visit_group_by_expr(&mut self, expr: &GroupByExpr) -> Result<()> {
        Ok(())
    }
    fn visit_having_expr(&mut self, expr: &HavingExpr) -> Result<()> {
        Ok(())
    }
    fn visit_order_by_expr(&mut self, expr: &OrderByExpr) -> Result<()> {
        Ok(())
    }
    fn visit_order_by_list_expr(&mut self, expr: &OrderByListExpr) -> Result<()> {
        Ok(())
    }
    fn visit_limit_expr(&mut self, expr: &LimitExpr) -> Result<()> {
        Ok(())
    }
    fn visit_limit_by_expr(&mut self, expr: &LimitByExpr) -> Result<()> {
        Ok(())
    }
    fn visit_settings_expr(&mut self, expr: &SettingsExpr) -> Result<()> {
        Ok(())
    }
    fn visit_settings_expr_list(&mut self, expr: &SettingsExprList) -> Result<()> {
        Ok(())
    }
    fn visit_create_database(&mut self, expr: &CreateDatabase) -> Result<()> {
        Ok(())
    }
    fn visit_create_table(&mut self, expr: &CreateTable) -> Result<()> {
        Ok(())
    }
    fn visit_create_view(&mut self, expr: &CreateView) -> Result<()> {
        Ok(())
    }
    fn visit_create_materialized_view(&mut self, expr: &CreateMaterializedView) -> Result<()> {
        Ok(())
    }
    fn visit_create_live_view(&mut self, expr: &CreateLiveView) -> Result<()> {
        Ok(())
    }
    fn visit_with_timeout_expr(&mut self, expr: &WithTimeoutExpr) -> Result<()> {
        Ok(())
    }
    fn visit_create_function(&mut self, expr: &CreateFunction) -> Result<()> {
        Ok(())
    }
    fn visit_create_role(&mut self, expr: &CreateRole) -> Result<()> {
        Ok(())
    }
    fn visit_alter_role(&mut self, expr: &AlterRole) -> Result<()> {
        Ok(())
    }
    fn visit_role_name(&mut self, expr: &RoleName) -> Result<()> {
        Ok(())
    }
    fn visit_role_setting(&mut self, expr: &RoleSetting) -> Result<()> {
        Ok(())
    }
    fn visit_setting_pair(&mut self, expr: &SettingPair) -> Result<()> {
        Ok(())
    }
    fn visit_role_rename_pair(&mut self, expr: &RoleRenamePair) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table(&mut self, expr: &AlterTable) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_attach_partition(
        &mut self,
        expr: &AlterTableAttachPartition,
    ) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_detach_partition(
        &mut self,
        expr: &AlterTableDetachPartition,
    ) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_drop_partition(&mut self, expr: &AlterTableDropPartition) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_freeze_partition(
        &mut self,
        expr: &AlterTableFreezePartition,
    ) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_replace_partition(
        &mut self,
        expr: &AlterTableReplacePartition,
    ) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_add_column(&mut self, expr: &AlterTableAddColumn) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_add_index(&mut self, expr: &AlterTableAddIndex) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_drop_column(&mut self, expr: &AlterTableDropColumn) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_drop_index(&mut self, expr: &AlterTableDropIndex) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_clear_column(&mut self, expr: &AlterTableClearColumn) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_clear_index(&mut self, expr: &AlterTableClearIndex) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_rename_column(&mut self, expr: &AlterTableRenameColumn) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_modify_column(&mut self, expr: &AlterTableModifyColumn) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_modify_ttl(&mut self, expr: &AlterTableModifyTtl) -> Result<()> {
        Ok(())
    }
    fn visit_alter_table_remove_ttl(&mut self, expr: &AlterTableRemoveTtl) -> Result<()> {
        Ok(())
    }
    fn visit_remove_property_type(&mut self, expr: &RemovePropertyType) -> Result<()> {
        Ok(())
    }
    fn visit_table_index(&mut self, expr: &TableIndex) -> Result<()> {
        Ok(())
    }
    fn visit_drop_database(&mut self, expr: &DropDatabase) -> Result<()> {
        Ok(())
    }
    fn visit_drop_stmt(&mut self, expr: &DropStmt) -> Result<()> {
        Ok(())
    }
    fn visit_drop_user_or_role(&mut self, expr: &DropUserOrRole) -> Result<()> {
        Ok(())
    }
    fn visit_truncate_table(&mut self, expr: &TruncateTable) -> Result<()> {
        Ok(())
    }
    fn visit_rename_stmt(&mut self, expr: &RenameStmt) -> Result<()> {
        Ok(())
    }
    fn visit_target_pair(&mut self, expr: &TargetPair) -> Result<()> {
        Ok(())
    }
    fn visit_explain_expr(&mut self, expr: &ExplainExpr) -> Result<()> {
        Ok(())
    }
    fn visit_describe_stmt(&mut self, expr: &DescribeStmt) -> Result<()> {
        Ok(())
    }
    fn visit_use_expr(&mut self, expr: &UseExpr) -> Result<()> {
        Ok(())
    }
    fn visit_set_expr(&mut self, expr: &SetExpr) -> Result<()> {
        Ok(())
    }
    fn visit_system_expr(&mut self, expr: &SystemExpr) -> Result<()> {
        Ok(())
    }
    fn visit_system_flush_expr(&mut self, expr: &SystemFlushExpr) -> Result<()> {
        Ok(())
    }
    fn visit_system_reload_expr(&mut self, expr: &SystemReloadExpr) -> Result<()> {
        Ok(())
    }
    fn visit_system_sync_expr(&mut self, expr: &SystemSyncExpr) -> Result<()> {
        Ok(())
    }
    fn visit_system_ctrl_expr(&mut self, expr: &SystemCtrlExpr) -> Result<()> {
        Ok(())
    }
    fn visit_system_drop_expr(&mut self, expr: &SystemDropExpr) -> Result<()> {
        Ok(())
    }
    fn visit_optimize_expr(&mut self, expr: &OptimizeExpr) -> Result<()> {
        Ok(())
    }
    fn visit_deduplicate_expr(&mut self, expr: &DeduplicateExpr) -> Result<()> {
        Ok(())
    }
    fn visit_check_expr(&mut self, expr: &CheckExpr) -> Result<()> {
        Ok(())
    }
    fn visit_insert_expr(&mut self, expr: &InsertExpr) -> Result<()> {
        Ok(())
    }
    fn visit_column_names_expr(&mut self, expr: &ColumnNamesExpr) -> Result<()> {
        Ok(())
    }
    fn visit_values_expr(&mut self, expr: &ValuesExpr) -> Result<()> {
        Ok(())
    }
    fn visit_format_expr(&mut self, expr: &FormatExpr) -> Result<()> {
        Ok(())
    }
    fn visit_delete_from_expr(&mut self, expr: &DeleteFromExpr) -> Result<()> {
        Ok(())
    }
    fn visit_grant_privilege_expr(&mut self, expr: &GrantPrivilegeExpr) -> Result<()> {
        Ok(())
    }
    fn visit_privilege_expr(&mut self, expr: &PrivilegeExpr) -> Result<()> {
        Ok(())
    }
    fn visit_on_cluster_expr(&mut self, expr: &OnClusterExpr) -> Result<()> {
        Ok(())
    }
    fn visit_engine_expr(&mut self, expr: &EngineExpr) -> Result<()> {
        Ok(())
    }
    fn visit_destination_expr(&mut self, expr: &DestinationExpr) -> Result<()> {
        Ok(())
    }
    fn visit_table_schema_expr(&mut self, expr: &TableSchemaExpr) -> Result<()> {
        Ok(())
    }
    fn visit_table_arg_list_expr(&mut self, expr: &TableArgListExpr) -> Result<()> {
        Ok(())
    }
    fn visit_table_function_expr(&mut self, expr: &TableFunctionExpr) -> Result<()> {
        Ok(())
    }
    fn visit_column(&mut self, expr: &Column) -> Result<()> {
        Ok(())
    }
    fn visit_column_property_expr(&mut self, expr: &ColumnPropertyExpr) -> Result<()> {
        Ok(())
    }
    fn visit_constraint_expr(&mut self, expr: &ConstraintExpr) -> Result<()> {
        Ok(())
    }
    fn visit_partition_expr(&mut self, expr: &PartitionExpr) -> Result<()> {
        Ok(())
    }
    fn visit_partition_by_expr(&mut self, expr: &PartitionByExpr) -> Result<()> {
        Ok(())
    }
    fn visit_primary_key_expr(&mut self, expr: &PrimaryKeyExpr) -> Result<()> {
        Ok(())
    }
    fn visit_sample_by_expr(&mut self, expr: &SampleByExpr) -> Result<()> {
        Ok(())
    }
    fn visit_ttl_expr(&mut self, expr: &TtlExpr) -> Result<()> {
        Ok(())
    }
    fn visit_ttl_expr_list(&mut self, expr: &TtlExprList) -> Result<()> {
        Ok(())
    }
}
