//! NaturaKit - simulated survival-console shell with a virtual
//! filesystem
//!
//! Part of the OpenNatura project.
//!
//! # Example
//!
//! ```rust
//! use naturakit::Console;
//!
//! #[tokio::main]
//! async fn main() -> naturakit::Result<()> {
//!     let mut console = Console::new();
//!     let result = console.exec("cd Users\\Player").await?;
//!     assert!(result.is_success());
//!     assert_eq!(console.prompt(), "C:\\Users\\Player>");
//!     Ok(())
//! }
//! ```

mod commands;
mod error;
mod fs;
mod interpreter;
pub mod intro;

pub use commands::SYSTEM_HOSTNAME;
pub use error::{Error, Result};
pub use fs::{
    list_directory, resolve, DirEntry, Disk, EntryKind, Node, WorkingPath, ROOT_LABEL, SEPARATOR,
};
pub use interpreter::ExecResult;

use std::sync::Arc;

use interpreter::Interpreter;

/// Name of the simulated system.
pub const SYSTEM_NAME: &str = "Natura Survival Console";

/// Version string shown by `ver` and the boot banner. This is the
/// simulated system's version, not the crate's.
pub const SYSTEM_VERSION: &str = "0.01";

/// Main entry point for NaturaKit.
///
/// Hosts the simulated console: a read-only virtual disk plus the
/// fixed command table.
pub struct Console {
    disk: Arc<Disk>,
    interpreter: Interpreter,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Create a console over the stock disk image.
    pub fn new() -> Self {
        let disk = Arc::new(Disk::standard());
        let interpreter = Interpreter::new(Arc::clone(&disk));
        Self { disk, interpreter }
    }

    /// Create a new ConsoleBuilder for customized configuration.
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::default()
    }

    /// Evaluate one console line and return the result.
    pub async fn exec(&mut self, line: &str) -> Result<ExecResult> {
        self.interpreter.execute(line).await
    }

    /// Prompt string for the current working path, e.g. `C:\>`.
    pub fn prompt(&self) -> String {
        self.interpreter.prompt()
    }

    /// True once `exit` has run.
    pub fn is_finished(&self) -> bool {
        self.interpreter.is_finished()
    }

    /// The disk this console runs on.
    pub fn disk(&self) -> &Disk {
        &self.disk
    }
}

/// Builder for customized Console configuration.
#[derive(Default)]
pub struct ConsoleBuilder {
    disk: Option<Arc<Disk>>,
    cwd: Option<String>,
}

impl ConsoleBuilder {
    /// Set a custom disk.
    pub fn disk(mut self, disk: Arc<Disk>) -> Self {
        self.disk = Some(disk);
        self
    }

    /// Start the session at the given path instead of the root. Paths
    /// that do not exist on the disk are ignored and the session starts
    /// at the root.
    pub fn cwd(mut self, path: impl Into<String>) -> Self {
        self.cwd = Some(path.into());
        self
    }

    /// Build the Console instance.
    pub fn build(self) -> Console {
        let disk = self.disk.unwrap_or_else(|| Arc::new(Disk::standard()));
        let mut interpreter = Interpreter::new(Arc::clone(&disk));

        if let Some(path) = self.cwd {
            let mut cwd = WorkingPath::root();
            if cwd.change_directory(&disk, &path).is_ok() {
                interpreter.set_cwd(cwd);
            }
        }

        Console { disk, interpreter }
    }
}
