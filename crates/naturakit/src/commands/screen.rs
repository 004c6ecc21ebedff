//! Screen control (cls, clear)

use async_trait::async_trait;

use super::{Command, Context};
use crate::error::Result;
use crate::interpreter::ExecResult;

/// The cls command - clear the terminal. Registered twice: `clear` is
/// an alias.
pub struct Cls;

#[async_trait]
impl Command for Cls {
    async fn execute(&self, _ctx: Context<'_>) -> Result<ExecResult> {
        Ok(ExecResult::clear())
    }
}
