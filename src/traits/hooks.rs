use crate::error::Result;
use crate::session::Session;

/// Lifecycle callbacks around session verbs
///
/// Record hooks run on each record read or written. Table hooks run once per
/// statement and receive the session, so they can add clauses before it is
/// built (e.g. a soft-delete filter in `before_query`).
///
/// `#[derive(Model)]` writes an empty impl unless the struct carries
/// `#[sorm(hooks)]`, in which case the impl is yours to write.
pub trait Hooks: Sized {
    fn before_query(_session: &mut Session) -> Result<()> {
        Ok(())
    }

    fn after_query(&mut self) -> Result<()> {
        Ok(())
    }

    fn before_insert(&mut self) -> Result<()> {
        Ok(())
    }

    fn after_insert(&mut self) -> Result<()> {
        Ok(())
    }

    fn before_update(_session: &mut Session) -> Result<()> {
        Ok(())
    }

    fn after_update(_session: &mut Session) -> Result<()> {
        Ok(())
    }

    fn before_delete(_session: &mut Session) -> Result<()> {
        Ok(())
    }

    fn after_delete(_session: &mut Session) -> Result<()> {
        Ok(())
    }
}
