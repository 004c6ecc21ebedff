//! Session flow commands (exit)

use async_trait::async_trait;

use super::{Command, Context};
use crate::error::Result;
use crate::interpreter::ExecResult;

/// The exit command - end the session. The host stops reading input
/// once the finished flag is set; the working path and disk stay
/// intact so prompts still render.
pub struct Exit;

#[async_trait]
impl Command for Exit {
    async fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        *ctx.finished = true;
        Ok(ExecResult::ok("Session ended.\n"))
    }
}
