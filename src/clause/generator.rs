use super::ClauseArgs;
use super::ClauseKind;
use super::Fragment;
use crate::error::Error;
use crate::error::Result;
use crate::value::Arg;
use crate::value::Value;

/// Renders one clause kind. The set of kinds is closed, so dispatch is a plain `match`.
pub(crate) fn generate(args: &ClauseArgs) -> Result<Fragment> {
    match args {
        ClauseArgs::Insert { table, fields } => insert(table, fields),
        ClauseArgs::Values { returning, rows } => values(returning, rows),
        ClauseArgs::Select { fields } => select(fields),
        ClauseArgs::Table { name } => table(name),
        ClauseArgs::Limit(n) => Ok(Fragment::new("LIMIT ?", vec![Arg::from(*n)])),
        ClauseArgs::Offset(n) => Ok(Fragment::new("OFFSET ?", vec![Arg::from(*n)])),
        ClauseArgs::Where { predicate, args } if predicate.is_empty() => Ok(Fragment::new("", args.clone())),
        ClauseArgs::Where { predicate, args } => Ok(Fragment::new(format!("WHERE {}", predicate), args.clone())),
        ClauseArgs::OrderBy { expr } => Ok(Fragment::text(format!("ORDER BY {}", expr))),
        ClauseArgs::Update { table, sets } => update(table, sets),
        ClauseArgs::Delete { table } => {
            require_table(ClauseKind::Delete, table)?;
            Ok(Fragment::text(format!("DELETE FROM {}", table)))
        }
        ClauseArgs::Count { table } => count(table),
    }
}

fn require_table(kind: ClauseKind, table: &str) -> Result<()> {
    if table.is_empty() { Err(Error::malformed(kind, "empty table name")) } else { Ok(()) }
}

/// `?,?,...` with `count` placeholders
pub(crate) fn bind_vars(count: usize) -> String {
    vec!["?"; count].join(",")
}

fn insert(table: &str, fields: &[String]) -> Result<Fragment> {
    require_table(ClauseKind::Insert, table)?;
    if fields.is_empty() {
        return Err(Error::malformed(ClauseKind::Insert, "no columns to insert"));
    }
    Ok(Fragment::text(format!("INSERT INTO {}({})", table, fields.join(","))))
}

fn values(returning: &[String], rows: &[Vec<Value>]) -> Result<Fragment> {
    if rows.is_empty() {
        return Err(Error::malformed(ClauseKind::Values, "no rows to insert"));
    }

    let tuples: Vec<String> = rows.iter().map(|row| format!("({})", bind_vars(row.len()))).collect();
    let mut sql = format!("VALUES {}", tuples.join(","));
    if !returning.is_empty() {
        sql.push_str(" RETURNING ");
        sql.push_str(&returning.join(","));
    }

    let args = rows.iter().flatten().cloned().map(Arg::Scalar).collect();
    Ok(Fragment::new(sql, args))
}

fn select(fields: &[String]) -> Result<Fragment> {
    if fields.is_empty() {
        return Err(Error::malformed(ClauseKind::Select, "no fields to select"));
    }
    Ok(Fragment::text(format!("SELECT {} FROM", fields.join(","))))
}

// Trailing space is part of the fragment; joined output reads `FROM users  WHERE`.
fn table(name: &str) -> Result<Fragment> {
    require_table(ClauseKind::Table, name)?;
    Ok(Fragment::text(format!("{} ", name)))
}

fn update(table: &str, sets: &[(String, Value)]) -> Result<Fragment> {
    require_table(ClauseKind::Update, table)?;
    if sets.is_empty() {
        return Err(Error::malformed(ClauseKind::Update, "no columns to set"));
    }

    let assignments: Vec<String> = sets.iter().map(|(column, _)| format!("{}=?", column)).collect();
    let args = sets.iter().map(|(_, value)| Arg::Scalar(value.clone())).collect();
    Ok(Fragment::new(format!("UPDATE {} SET {}", table, assignments.join(",")), args))
}

fn count(table: &str) -> Result<Fragment> {
    require_table(ClauseKind::Count, table)?;
    let fragment = select(&["count(*)".to_string()])?;
    Ok(Fragment::text(format!("{} {}", fragment.sql, table)))
}
