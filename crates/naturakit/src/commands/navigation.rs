//! Navigation commands (cd, dir)

use async_trait::async_trait;

use super::{Command, Context};
use crate::error::{Error, Result};
use crate::fs::{self, EntryKind};
use crate::interpreter::ExecResult;

/// Canned DOS-style message for any path failure.
pub(crate) const PATH_NOT_FOUND_MSG: &str = "The system cannot find the path specified.\n";

/// The cd command - change the working directory.
pub struct Cd;

#[async_trait]
impl Command for Cd {
    async fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let Some(target) = ctx.args.first() else {
            // Plain `cd` reports where you are.
            return Ok(ExecResult::ok(format!("{}\n", ctx.cwd.display())));
        };

        match ctx.cwd.change_directory(&ctx.disk, target) {
            Ok(()) => Ok(ExecResult::ok("")),
            Err(Error::PathNotFound) => Ok(ExecResult::err(PATH_NOT_FOUND_MSG, 1)),
        }
    }
}

/// The dir command - list a directory.
pub struct Dir;

#[async_trait]
impl Command for Dir {
    async fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let path = ctx.args.first().map(String::as_str);

        let entries = match fs::list_directory(&ctx.disk, ctx.cwd, path) {
            Ok(entries) => entries,
            Err(Error::PathNotFound) => return Ok(ExecResult::err(PATH_NOT_FOUND_MSG, 1)),
        };

        let header = match path {
            Some(p) => p.to_string(),
            None => ctx.cwd.display(),
        };

        let mut output = format!(" Directory of {}\n", header);
        for entry in &entries {
            let marker = match entry.kind {
                EntryKind::Directory => "<DIR>",
                EntryKind::File => "     ",
            };
            output.push_str(&format!("{}    {}\n", marker, entry.name));
        }
        output.push('\n');

        Ok(ExecResult::ok(output))
    }
}
