//! # sorm
//!
//! A small ORM for [Turso](https://turso.tech) built around a SQL clause
//! composition engine.
//!
//! ## Features
//!
//! - Derive macro mapping structs onto tables
//! - Per-statement clause accumulator with AND-accumulating `WHERE`
//! - `IN ?` expansion for sequence arguments, `$n` placeholders for dialects that need them
//! - Hooks around queries, inserts, updates and deletes
//! - Optional support for chrono, uuid, and JSON types
//!
//! ## Quick Start
//!
//! ```ignore
//! use sorm::prelude::*;
//!
//! #[derive(Clone, Debug, Model)]
//! #[sorm(table_name = "users")]
//! pub struct User {
//!     #[sorm(primary_key, auto_increment)]
//!     pub id:   i64,
//!     pub name: String,
//!     pub age:  i64,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut session = sorm::open("sqlite3", ":memory:").await?;
//!
//!     session.model::<User>().create_table().await?;
//!     session.insert(vec![User { id: 0, name: "Tom".into(), age: 18 }]).await?;
//!
//!     let users = session
//!         .where_("age > ?", args![10])
//!         .where_("name in (?)", args![Arg::list(["Tom", "Sam"])])
//!         .order_by("age DESC")
//!         .limit(10)
//!         .find::<User>()
//!         .await?;
//!
//!     session.model::<User>().where_("name = ?", args!["Tom"]).update([("age", 30)]).await?;
//!     let remaining = session.model::<User>().count().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Model Attributes
//!
//! On the struct, `#[sorm(...)]` supports:
//!
//! - `table_name = "..."` - Set the table name (default: struct name in snake_case)
//! - `hooks` - Skip the generated empty `Hooks` impl so you can write your own
//!
//! On fields:
//!
//! - `primary_key` - Mark a field as (part of) the primary key
//! - `auto_increment` - Leave the column to the database on insert
//! - `unique` - Add a `UNIQUE` constraint
//! - `column_name = "..."` - Set a custom column name
//! - `default = "..."` - Add a `DEFAULT` clause, inserted verbatim
//!
//! ## Raw statements
//!
//! ```ignore
//! let affected = session
//!     .raw("DELETE FROM users WHERE id IN ?", args![Arg::list([1, 2, 3])])
//!     .exec()
//!     .await?;
//! ```

extern crate self as sorm;

pub mod clause;
pub mod connection;
pub mod dialect;
pub mod error;
pub mod prelude;
pub mod schema;
pub mod session;
pub mod traits;
pub mod value;

pub use clause::Clause;
pub use clause::ClauseArgs;
pub use clause::ClauseKind;
pub use clause::Fragment;
pub use connection::Connection;
pub use connection::prelude::Builder;
pub use connection::prelude::Engine;
pub use connection::prelude::TxFuture;
pub use dialect::Dialect;
pub use dialect::PlaceholderStyle;
pub use dialect::get_dialect;
pub use error::Error;
pub use error::Result;
pub use schema::Field;
pub use schema::Schema;
pub use session::Session;
// Re-export the derive macro
pub use sorm_macros::Model;
pub use traits::prelude::ColumnDef;
pub use traits::prelude::FromRow;
pub use traits::prelude::Hooks;
pub use traits::prelude::Model;
pub use turso::Row;
pub use turso::Rows;
pub use value::Arg;
pub use value::ColumnType;
pub use value::FromValue;
pub use value::IntoValue;
#[cfg(feature = "with-json")]
pub use value::Json;
pub use value::Value;

/// Opens a local database with `dialect` and returns a session on it
///
/// ```ignore
/// let mut session = sorm::open("sqlite3", "app.db").await?;
/// ```
pub async fn open(dialect: &str, path: impl AsRef<str>) -> Result<Session> {
    let engine = Builder::new_local(path.as_ref()).dialect(dialect).build().await?;
    engine.new_session()
}
