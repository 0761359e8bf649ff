//! SQL dialects
//!
//! A dialect knows the DDL type names of its database, how to ask whether a
//! table exists and which positional placeholder syntax its driver expects.

mod postgres;
mod sqlite3;

pub use postgres::Postgres;
pub use sqlite3::Sqlite3;

use crate::value::Arg;
use crate::value::ColumnType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `?`
    Question,
    /// `$1, $2, ...`
    Dollar,
}

pub trait Dialect: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn data_type_of(&self, column_type: ColumnType) -> &'static str;

    /// Constraint text for an auto-incrementing primary key
    fn auto_increment_tag(&self) -> &'static str;

    /// Query returning the table name when `table` exists
    fn table_exist_sql(&self, table: &str) -> (String, Vec<Arg>);

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Question
    }
}

static SQLITE3: Sqlite3 = Sqlite3;
static POSTGRES: Postgres = Postgres;

/// Looks a dialect up by driver name
///
/// Statements always execute on turso. `postgres` only changes how they are
/// rendered (`$n` placeholders, DDL type names, the `pg_tables` lookup), so its
/// DDL and table lookup are meant for a Postgres server, not the local database.
pub fn get_dialect(name: &str) -> Option<&'static dyn Dialect> {
    match name {
        "sqlite3" | "sqlite" | "turso" => Some(&SQLITE3),
        "postgres" | "postgresql" => Some(&POSTGRES),
        _ => None,
    }
}
