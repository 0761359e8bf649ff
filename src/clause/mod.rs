//! Clause accumulation and statement composition
//!
//! A [`Clause`] keeps, per [`ClauseKind`], the latest arguments handed to it.
//! `WHERE` is the exception: every new predicate is ANDed onto the ones
//! already held. [`Clause::build`] then walks a caller-chosen list of kinds and
//! joins each present kind's [`Fragment`] with a single space.
//!
//! ```ignore
//! let mut clause = Clause::default();
//! clause.push(ClauseArgs::select(["*"]));
//! clause.push(ClauseArgs::table("users"));
//! clause.push(ClauseArgs::where_("age > ?", args![18]));
//! clause.push(ClauseArgs::Limit(10));
//!
//! let fragment = clause.build(&[ClauseKind::Select, ClauseKind::Table, ClauseKind::Where, ClauseKind::Limit])?;
//! assert_eq!(fragment.sql, "SELECT * FROM users  WHERE age > ? LIMIT ?");
//! ```

pub(crate) mod generator;
pub mod rewrite;

use std::collections::HashMap;

use crate::error::Error;
use crate::error::Result;
use crate::value::Arg;
use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClauseKind {
    Insert,
    Values,
    Select,
    Table,
    Limit,
    Offset,
    Where,
    OrderBy,
    Update,
    Delete,
    Count,
}

impl std::fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            ClauseKind::Insert => "INSERT",
            ClauseKind::Values => "VALUES",
            ClauseKind::Select => "SELECT",
            ClauseKind::Table => "TABLE",
            ClauseKind::Limit => "LIMIT",
            ClauseKind::Offset => "OFFSET",
            ClauseKind::Where => "WHERE",
            ClauseKind::OrderBy => "ORDER BY",
            ClauseKind::Update => "UPDATE",
            ClauseKind::Delete => "DELETE",
            ClauseKind::Count => "COUNT",
        };
        f.write_str(keyword)
    }
}

/// Arguments of one clause kind
#[derive(Clone, Debug, PartialEq)]
pub enum ClauseArgs {
    Insert { table: String, fields: Vec<String> },
    /// `rows` are laid out in the same column order as the matching `Insert`
    Values { returning: Vec<String>, rows: Vec<Vec<Value>> },
    Select { fields: Vec<String> },
    Table { name: String },
    Limit(i64),
    Offset(i64),
    Where { predicate: String, args: Vec<Arg> },
    OrderBy { expr: String },
    Update { table: String, sets: Vec<(String, Value)> },
    Delete { table: String },
    Count { table: String },
}

impl ClauseArgs {
    pub fn kind(&self) -> ClauseKind {
        match self {
            ClauseArgs::Insert { .. } => ClauseKind::Insert,
            ClauseArgs::Values { .. } => ClauseKind::Values,
            ClauseArgs::Select { .. } => ClauseKind::Select,
            ClauseArgs::Table { .. } => ClauseKind::Table,
            ClauseArgs::Limit(_) => ClauseKind::Limit,
            ClauseArgs::Offset(_) => ClauseKind::Offset,
            ClauseArgs::Where { .. } => ClauseKind::Where,
            ClauseArgs::OrderBy { .. } => ClauseKind::OrderBy,
            ClauseArgs::Update { .. } => ClauseKind::Update,
            ClauseArgs::Delete { .. } => ClauseKind::Delete,
            ClauseArgs::Count { .. } => ClauseKind::Count,
        }
    }

    pub fn select<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Self {
        ClauseArgs::Select { fields: fields.into_iter().map(Into::into).collect() }
    }

    pub fn table(name: impl Into<String>) -> Self {
        ClauseArgs::Table { name: name.into() }
    }

    pub fn where_(predicate: impl Into<String>, args: Vec<Arg>) -> Self {
        ClauseArgs::Where { predicate: predicate.into(), args }
    }

    pub fn order_by(expr: impl Into<String>) -> Self {
        ClauseArgs::OrderBy { expr: expr.into() }
    }
}

/// Generated SQL text plus the arguments its placeholders bind to
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fragment {
    pub sql:  String,
    pub args: Vec<Arg>,
}

impl Fragment {
    pub(crate) fn new(sql: impl Into<String>, args: Vec<Arg>) -> Self {
        Self { sql: sql.into(), args }
    }

    pub(crate) fn text(sql: impl Into<String>) -> Self {
        Self::new(sql, Vec::new())
    }
}

/// Per-statement clause accumulator
///
/// Not meant to outlive one statement: the session clears it after every
/// execution.
#[derive(Clone, Debug, Default)]
pub struct Clause {
    entries: HashMap<ClauseKind, ClauseArgs>,
}

impl Clause {
    /// Stores `args` under `kind`, rejecting arguments that belong to another kind
    pub fn set(&mut self, kind: ClauseKind, args: ClauseArgs) -> Result<()> {
        if args.kind() != kind {
            return Err(Error::malformed(kind, format!("got {} arguments", args.kind())));
        }
        self.push(args);
        Ok(())
    }

    /// Stores `args` under its own kind. `WHERE` predicates accumulate, every
    /// other kind is overwritten.
    pub fn push(&mut self, args: ClauseArgs) {
        let (next, mut extra) = match args {
            ClauseArgs::Where { predicate, args } => (predicate, args),
            other => {
                self.entries.insert(other.kind(), other);
                return;
            }
        };

        match self.entries.get_mut(&ClauseKind::Where) {
            Some(ClauseArgs::Where { predicate, args: held }) => {
                match (predicate.is_empty(), next.is_empty()) {
                    (_, true) => {}
                    (true, false) => *predicate = next,
                    (false, false) => {
                        predicate.push_str(" AND ");
                        predicate.push_str(&next);
                    }
                }
                held.append(&mut extra);
            }
            _ => {
                self.entries.insert(ClauseKind::Where, ClauseArgs::Where { predicate: next, args: extra });
            }
        }
    }

    pub fn contains(&self, kind: ClauseKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// What `kind` currently generates, without any placeholder rewriting
    pub fn get(&self, kind: ClauseKind) -> Result<Fragment> {
        let args = self.entries.get(&kind).ok_or(Error::AbsentClause(kind))?;
        generator::generate(args)
    }

    /// Joins the fragments of `kinds`, in that order, skipping kinds never set
    pub fn build(&self, kinds: &[ClauseKind]) -> Result<Fragment> {
        let mut parts = Vec::with_capacity(kinds.len());
        let mut args = Vec::new();

        for kind in kinds {
            let Some(entry) = self.entries.get(kind) else {
                continue;
            };
            let fragment = generator::generate(entry)?;
            if !fragment.sql.is_empty() {
                parts.push(fragment.sql);
            }
            args.extend(fragment.args);
        }

        Ok(Fragment { sql: parts.join(" "), args })
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
