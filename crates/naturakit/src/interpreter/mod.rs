//! Command dispatch
//!
//! One typed line in, one [`ExecResult`] out. The dispatcher owns the
//! session state: the shared disk, the working path, the session start
//! instant, and the finished flag set by `exit`. The command table is
//! fixed at construction; there is no way to register commands later.

mod state;

pub use state::ExecResult;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::commands::{self, Command};
use crate::error::Result;
use crate::fs::{Disk, WorkingPath};

/// Dispatcher state.
pub struct Interpreter {
    disk: Arc<Disk>,
    cwd: WorkingPath,
    started: Instant,
    finished: bool,
    commands: HashMap<&'static str, Box<dyn Command>>,
}

impl Interpreter {
    /// Create a new interpreter over the given disk.
    pub fn new(disk: Arc<Disk>) -> Self {
        let mut commands: HashMap<&'static str, Box<dyn Command>> = HashMap::new();

        // Register the fixed command table
        commands.insert("help", Box::new(commands::Help));
        commands.insert("cls", Box::new(commands::Cls));
        commands.insert("clear", Box::new(commands::Cls));
        commands.insert("dir", Box::new(commands::Dir));
        commands.insert("cd", Box::new(commands::Cd));
        commands.insert("echo", Box::new(commands::Echo));
        commands.insert("date", Box::new(commands::Date));
        commands.insert("time", Box::new(commands::Time));
        commands.insert("ver", Box::new(commands::Ver));
        commands.insert("exit", Box::new(commands::Exit));
        commands.insert("hostname", Box::new(commands::Hostname));
        commands.insert("systeminfo", Box::new(commands::SystemInfo));
        commands.insert("tasklist", Box::new(commands::TaskList));
        commands.insert("visit", Box::new(commands::Visit));
        commands.insert("ping", Box::new(commands::Ping));
        commands.insert("calc", Box::new(commands::Calc));
        commands.insert("uptime", Box::new(commands::Uptime));
        commands.insert("ascii", Box::new(commands::Ascii));
        commands.insert("about", Box::new(commands::About));

        Self {
            disk,
            cwd: WorkingPath::root(),
            started: Instant::now(),
            finished: false,
            commands,
        }
    }

    /// Replace the working path.
    pub fn set_cwd(&mut self, cwd: WorkingPath) {
        self.cwd = cwd;
    }

    /// Prompt string for the current working path.
    pub fn prompt(&self) -> String {
        self.cwd.prompt()
    }

    /// True once `exit` has run.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Evaluate one raw input line.
    pub async fn execute(&mut self, line: &str) -> Result<ExecResult> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(ExecResult::ok(""));
        }

        let mut words = trimmed.split_whitespace();
        let name = match words.next() {
            Some(word) => word.to_lowercase(),
            None => return Ok(ExecResult::ok("")),
        };
        let args: Vec<String> = words.map(str::to_string).collect();

        #[cfg(feature = "logging")]
        tracing::debug!(command = %name, argc = args.len(), "dispatch");

        match self.commands.get(name.as_str()) {
            Some(command) => {
                let ctx = commands::Context {
                    args: &args,
                    cwd: &mut self.cwd,
                    disk: Arc::clone(&self.disk),
                    started: self.started,
                    finished: &mut self.finished,
                };
                command.execute(ctx).await
            }
            None => Ok(ExecResult::err(
                format!(
                    "'{}' is not recognized as an internal or external command,\noperable program or batch file.\n",
                    name
                ),
                1,
            )),
        }
    }
}
