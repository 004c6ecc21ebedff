//! Console commands
//!
//! Every command in the fixed table implements [`Command`] and receives
//! a [`Context`] with the session state. The table itself lives in the
//! interpreter; there is no runtime registration.

mod ascii;
mod calc;
mod datetime;
mod echo;
mod flow;
mod help;
mod navigation;
mod network;
mod screen;
mod system;

pub use ascii::Ascii;
pub use calc::Calc;
pub use datetime::{Date, Time, Uptime};
pub use echo::Echo;
pub use flow::Exit;
pub use help::Help;
pub use navigation::{Cd, Dir};
pub use network::{Ping, Visit};
pub use screen::Cls;
pub use system::{About, Hostname, SystemInfo, TaskList, Ver, SYSTEM_HOSTNAME};

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use crate::error::Result;
use crate::fs::{Disk, WorkingPath};
use crate::interpreter::ExecResult;

/// Execution context handed to each command.
pub struct Context<'a> {
    /// Command arguments (not including the command name).
    ///
    /// For `cd Users\Player`, this contains `["Users\\Player"]`.
    pub args: &'a [String],

    /// Current working path. Mutable, but only `cd` writes it.
    pub cwd: &'a mut WorkingPath,

    /// The read-only disk.
    pub disk: Arc<Disk>,

    /// When the session started, for `uptime`.
    pub started: Instant,

    /// Set by `exit`; the host stops reading input once true.
    pub finished: &'a mut bool,
}

impl<'a> Context<'a> {
    /// Create a Context for testing purposes.
    #[cfg(test)]
    pub fn new_for_test(
        args: &'a [String],
        cwd: &'a mut WorkingPath,
        disk: Arc<Disk>,
        finished: &'a mut bool,
    ) -> Self {
        Self {
            args,
            cwd,
            disk,
            started: Instant::now(),
            finished,
        }
    }
}

/// Trait implemented by every console command.
///
/// The trait is async so commands share one shape with the host's
/// runtime, though none of the canned commands suspend.
#[async_trait]
pub trait Command: Send + Sync {
    /// Execute the command.
    async fn execute(&self, ctx: Context<'_>) -> Result<ExecResult>;
}
