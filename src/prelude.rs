//! Prelude module for sorm
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use sorm::prelude::*;
//! ```

// Re-export the derive macro
pub use sorm_macros::Model;

pub use crate::args;
pub use crate::clause::ClauseKind;
pub use crate::connection::prelude::*;
pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::session::Session;
pub use crate::traits::prelude::*;
pub use crate::value::Arg;
pub use crate::value::ColumnType;
pub use crate::value::FromValue;
pub use crate::value::IntoValue;
// Re-export optional types
#[cfg(feature = "with-json")]
pub use crate::value::Json;
pub use crate::value::Value;
