//! Placeholder rewriting applied to a fully composed statement
//!
//! Two passes run, in this order, right before execution:
//!
//! 1. [`expand_in`] turns `IN ?` bound to an [`Arg::Sequence`] into `IN ?,?,...`
//!    and splices the sequence's elements into the argument list.
//! 2. [`renumber`] turns every `?` into `$1, $2, ...` for dialects that need it.

use std::sync::OnceLock;

use regex::Regex;

use super::generator::bind_vars;
use crate::error::Error;
use crate::error::Result;
use crate::value::Arg;
use crate::value::Value;

const IN_KEYWORD: &str = " IN ";

fn in_keyword() -> &'static Regex {
    static IN_RE: OnceLock<Regex> = OnceLock::new();
    IN_RE.get_or_init(|| Regex::new(r"(?i) in ").expect("invalid built-in IN regex"))
}

/// Expands every `IN ?` whose argument is a sequence
///
/// The text is split on the (case-normalized) ` IN ` keyword. A running count
/// of `?` seen so far tells which argument the first placeholder after each
/// keyword binds to. A sequence of `L` elements replaces that one `?` with `L`
/// placeholders and takes `L` slots in the argument list. Segments without any
/// placeholder bind nothing and are left alone.
///
/// # Errors
///
/// [`Error::PlaceholderArgumentMismatch`] when a placeholder after `IN` has no
/// argument to bind.
pub fn expand_in(sql: &str, mut args: Vec<Arg>) -> Result<(String, Vec<Arg>)> {
    let normalized = in_keyword().replace_all(sql, IN_KEYWORD);
    if !normalized.contains(IN_KEYWORD) {
        return Ok((normalized.into_owned(), args));
    }

    let mut segments: Vec<String> = normalized.split(IN_KEYWORD).map(str::to_owned).collect();
    let mut count = segments[0].matches('?').count();

    for segment in segments.iter_mut().skip(1) {
        if segment.contains('?') {
            let elements = match args.get_mut(count) {
                Some(Arg::Sequence(values)) => Some(std::mem::take(values)),
                Some(Arg::Scalar(_)) => None,
                None => return Err(Error::PlaceholderArgumentMismatch { index: count, available: args.len() }),
            };

            if let Some(elements) = elements {
                *segment = segment.replacen('?', &bind_vars(elements.len()), 1);
                args.splice(count..=count, elements.into_iter().map(Arg::Scalar));
            }
        }

        count += segment.matches('?').count();
    }

    Ok((segments.join(IN_KEYWORD), args))
}

/// Rewrites `?` placeholders into 1-based `$n` placeholders, left to right
pub fn renumber(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut next = 1usize;
    for ch in sql.chars() {
        if ch == '?' {
            out.push('$');
            out.push_str(&next.to_string());
            next += 1;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Substitutes each `?` with its value's SQL-ish text. For logs only.
pub fn render(sql: &str, values: &[Value]) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut values = values.iter();
    for ch in sql.chars() {
        if ch != '?' {
            out.push(ch);
            continue;
        }
        match values.next() {
            Some(value) => out.push_str(&display_value(value)),
            None => out.push('?'),
        }
    }
    out
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(v) => v.to_string(),
        Value::Real(v) => v.to_string(),
        Value::Text(v) => format!("'{}'", v.replace('\'', "''")),
        Value::Blob(bytes) => {
            let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
            format!("X'{}'", hex)
        }
    }
}
