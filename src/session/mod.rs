//! Statement builder
//!
//! A [`Session`] collects fluent calls into a [`Clause`], decides which clause
//! kinds a verb needs (`find` reads `SELECT, TABLE, WHERE, ORDER BY, LIMIT,
//! OFFSET`; `update` writes `UPDATE, WHERE`; ...), then hands the composed
//! statement to its connection. Every execution resets the session, so one
//! fluent chain maps to exactly one statement.
//!
//! ```ignore
//! let adults = session
//!     .where_("age > ?", args![18])
//!     .where_("id in (?)", args![Arg::list([1, 2, 3])])
//!     .order_by("age DESC")
//!     .limit(10)
//!     .find::<User>()
//!     .await?;
//! ```
//!
//! A session is plain mutable state; give each task its own.

mod raw;
mod record;
mod table;
mod transaction;

use crate::clause::Clause;
use crate::clause::ClauseArgs;
use crate::clause::ClauseKind;
use crate::clause::Fragment;
use crate::connection::Connection;
use crate::dialect::Dialect;
use crate::error::Error;
use crate::error::Result;
use crate::schema::Schema;
use crate::value::Arg;

#[derive(Debug)]
pub struct Session {
    conn:      Connection,
    ref_table: Option<Schema>,
    clause:    Clause,
    sql:       String,
    sql_vars:  Vec<Arg>,
}

impl Session {
    pub fn new(conn: Connection) -> Self {
        Self { conn, ref_table: None, clause: Clause::default(), sql: String::new(), sql_vars: Vec::new() }
    }

    /// Drops the buffered statement and every pending clause
    pub fn clear(&mut self) {
        self.sql.clear();
        self.sql_vars.clear();
        self.clause.clear();
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn dialect(&self) -> &'static dyn Dialect {
        self.conn.dialect()
    }

    pub fn clause(&self) -> &Clause {
        &self.clause
    }

    /// Restricts the selected columns; defaults to every column of the model
    pub fn select<S: Into<String>>(&mut self, fields: impl IntoIterator<Item = S>) -> &mut Self {
        self.clause.push(ClauseArgs::select(fields));
        self
    }

    /// Adds a predicate; repeated calls are ANDed together
    ///
    /// An [`Arg::Sequence`] bound right after `IN` expands to one placeholder
    /// per element when the statement runs.
    pub fn where_(&mut self, predicate: &str, args: Vec<Arg>) -> &mut Self {
        self.clause.push(ClauseArgs::where_(predicate, args));
        self
    }

    pub fn order_by(&mut self, expr: &str) -> &mut Self {
        self.clause.push(ClauseArgs::order_by(expr));
        self
    }

    pub fn limit(&mut self, n: i64) -> &mut Self {
        self.clause.push(ClauseArgs::Limit(n));
        self
    }

    pub fn offset(&mut self, n: i64) -> &mut Self {
        self.clause.push(ClauseArgs::Offset(n));
        self
    }

    /// Like [`Session::ref_table`], but resets pending clauses when no model is set
    fn require_table(&mut self) -> Result<&Schema> {
        if self.ref_table.is_none() {
            self.clear();
            return Err(Error::ModelNotSet);
        }
        self.ref_table()
    }

    /// Builds `kinds` from the pending clauses, resetting the session on failure
    fn build(&mut self, kinds: &[ClauseKind]) -> Result<Fragment> {
        let fragment = self.clause.build(kinds);
        if fragment.is_err() {
            self.clear();
        }
        fragment
    }

    /// Runs a table hook of the current model, resetting the session on failure
    fn run_hook(&mut self, hook: fn(&mut Session) -> Result<()>) -> Result<()> {
        let result = hook(self);
        if result.is_err() {
            self.clear();
        }
        result
    }
}
