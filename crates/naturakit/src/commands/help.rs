//! The help command

use async_trait::async_trait;

use super::{Command, Context};
use crate::error::Result;
use crate::interpreter::ExecResult;

const HELP_TEXT: &str = "Supported commands:
  help           - Show this help
  cls            - Clear the screen
  dir [path]     - List directory contents
  cd [path]      - Change directory
  echo [text]    - Display text
  date           - Show current date
  time           - Show current time
  ver            - Show Natura version
  exit           - End the session
  hostname       - Show system name
  systeminfo     - Show basic system info
  tasklist       - Simulated task list
  visit [url]    - Open URL
  ping [host]    - Ping a hostname or IP
  calc [expr]    - Simple calculator (e.g. calc 2+2)
  clear          - Clear the screen (alias of cls)
  uptime         - Show time since session start
  ascii [name]   - Show built-in ascii art (e.g. ascii tree)
  about          - Show info about this terminal
";

/// The help command - fixed usage table.
pub struct Help;

#[async_trait]
impl Command for Help {
    async fn execute(&self, _ctx: Context<'_>) -> Result<ExecResult> {
        Ok(ExecResult::ok(HELP_TEXT))
    }
}
