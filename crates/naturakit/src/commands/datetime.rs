//! Clock commands (date, time, uptime)

use async_trait::async_trait;
use chrono::Local;

use super::{Command, Context};
use crate::error::Result;
use crate::interpreter::ExecResult;

/// The date command - print the current local date.
pub struct Date;

#[async_trait]
impl Command for Date {
    async fn execute(&self, _ctx: Context<'_>) -> Result<ExecResult> {
        Ok(ExecResult::ok(format!(
            "{}\n",
            Local::now().format("%m/%d/%Y")
        )))
    }
}

/// The time command - print the current local time.
pub struct Time;

#[async_trait]
impl Command for Time {
    async fn execute(&self, _ctx: Context<'_>) -> Result<ExecResult> {
        Ok(ExecResult::ok(format!(
            "{}\n",
            Local::now().format("%H:%M:%S")
        )))
    }
}

/// The uptime command - time since the session started.
pub struct Uptime;

#[async_trait]
impl Command for Uptime {
    async fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let secs = ctx.started.elapsed().as_secs();
        Ok(ExecResult::ok(format!(
            "Uptime: {}h {}m {}s\n",
            secs / 3600,
            (secs / 60) % 60,
            secs % 60
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{Disk, WorkingPath};
    use std::sync::Arc;

    #[tokio::test]
    async fn uptime_starts_near_zero() {
        let disk = Arc::new(Disk::standard());
        let mut cwd = WorkingPath::root();
        let mut finished = false;
        let args: Vec<String> = vec![];

        let ctx = Context::new_for_test(&args, &mut cwd, disk, &mut finished);
        let result = Uptime.execute(ctx).await.unwrap();
        assert_eq!(result.stdout, "Uptime: 0h 0m 0s\n");
    }
}
