pub(crate) mod from_row;
pub(crate) mod hooks;
pub(crate) mod model;

pub mod prelude {
    pub use super::from_row::FromRow;
    pub use super::hooks::Hooks;
    pub use super::model::ColumnDef;
    pub use super::model::Model;
}
