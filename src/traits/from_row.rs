use crate::error::Result;

/// Decodes a row whose columns come in [`Model::columns`](super::model::Model::columns) order
pub trait FromRow: Sized {
    fn from_row(row: &turso::Row) -> Result<Self>;
}
