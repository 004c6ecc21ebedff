//! echo command

use async_trait::async_trait;

use super::{Command, Context};
use crate::error::Result;
use crate::interpreter::ExecResult;

/// The echo command - print the arguments joined by single spaces.
/// No option parsing; this is the DOS echo, not the shell one.
pub struct Echo;

#[async_trait]
impl Command for Echo {
    async fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        Ok(ExecResult::ok(format!("{}\n", ctx.args.join(" "))))
    }
}
