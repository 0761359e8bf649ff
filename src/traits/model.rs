use super::from_row::FromRow;
use super::hooks::Hooks;
use crate::value::ColumnType;
use crate::value::Value;

/// Static description of one mapped field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    /// Rust field name
    pub field:          &'static str,
    /// Column name in the database
    pub name:           &'static str,
    pub column_type:    ColumnType,
    pub nullable:       bool,
    pub primary_key:    bool,
    pub auto_increment: bool,
    pub unique:         bool,
    pub default:        Option<&'static str>,
}

/// A struct mapped onto one table, usually through `#[derive(Model)]`
///
/// ```ignore
/// #[derive(Clone, Debug, Model)]
/// #[sorm(table_name = "users")]
/// pub struct User {
///     #[sorm(primary_key, auto_increment)]
///     pub id:   i64,
///     pub name: String,
///     pub age:  Option<i64>,
/// }
/// ```
pub trait Model: FromRow + Hooks + Send + 'static {
    fn table_name() -> &'static str;

    /// Every mapped column, in declaration order
    fn columns() -> &'static [ColumnDef];

    /// Values for [`Model::insert_columns`], in the same order
    fn insert_values(&self) -> Vec<Value>;

    fn column_names() -> Vec<&'static str> {
        Self::columns().iter().map(|c| c.name).collect()
    }

    /// Columns written on insert; auto-increment columns are left to the database
    fn insert_columns() -> Vec<&'static str> {
        Self::columns().iter().filter(|c| !c.auto_increment).map(|c| c.name).collect()
    }
}
