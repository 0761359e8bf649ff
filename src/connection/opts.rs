use super::builder::Builder;
use crate::dialect::Dialect;

#[derive(Debug, Clone)]
pub struct EngineOpts {
    pub(super) path:        String,
    pub(super) dialect:     &'static dyn Dialect,
    pub(super) enable_mvcc: bool,
}

impl EngineOpts {
    pub(super) fn new(builder: &Builder, dialect: &'static dyn Dialect) -> Self {
        Self { path: builder.path.clone(), dialect, enable_mvcc: builder.enable_mvcc }
    }
}
