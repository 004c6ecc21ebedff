//! System identity commands (ver, hostname, systeminfo, tasklist, about)
//!
//! Everything here is canned. The console simulates a machine; none of
//! these values come from the host.

use async_trait::async_trait;

use super::{Command, Context};
use crate::error::Result;
use crate::interpreter::ExecResult;
use crate::{SYSTEM_NAME, SYSTEM_VERSION};

/// Hostname of the simulated machine.
pub const SYSTEM_HOSTNAME: &str = "NATURA-CONSOLE";

/// The ver command - version banner line.
pub struct Ver;

#[async_trait]
impl Command for Ver {
    async fn execute(&self, _ctx: Context<'_>) -> Result<ExecResult> {
        Ok(ExecResult::ok(format!(
            "{} [Version {}]\n",
            SYSTEM_NAME, SYSTEM_VERSION
        )))
    }
}

/// The hostname command.
pub struct Hostname;

#[async_trait]
impl Command for Hostname {
    async fn execute(&self, _ctx: Context<'_>) -> Result<ExecResult> {
        Ok(ExecResult::ok(format!("{}\n", SYSTEM_HOSTNAME)))
    }
}

/// The systeminfo command - fixed report about the simulated machine.
pub struct SystemInfo;

#[async_trait]
impl Command for SystemInfo {
    async fn execute(&self, _ctx: Context<'_>) -> Result<ExecResult> {
        Ok(ExecResult::ok(format!(
            "Host Name: {}\n\
             OS Name: Natura Survival OS\n\
             OS Version: {} Alpha\n\
             Manufacturer: OpenNatura Labs\n\
             Model: FossilShell-v1\n",
            SYSTEM_HOSTNAME, SYSTEM_VERSION
        )))
    }
}

/// The tasklist command - simulated process table.
pub struct TaskList;

#[async_trait]
impl Command for TaskList {
    async fn execute(&self, _ctx: Context<'_>) -> Result<ExecResult> {
        Ok(ExecResult::ok(
            "Image Name                   PID Session Name        Mem Usage\n\
             ========================= ====== ================ ===========\n\
             explorer.exe                1024 Console                    1    42,000 K\n\
             natura.exe                  4520 Console                    1   150,000 K\n",
        ))
    }
}

/// The about command - terminal credits.
pub struct About;

#[async_trait]
impl Command for About {
    async fn execute(&self, _ctx: Context<'_>) -> Result<ExecResult> {
        Ok(ExecResult::ok(format!(
            "{} Terminal\nVersion {}\nDeveloped by OpenNatura Labs\n",
            SYSTEM_NAME, SYSTEM_VERSION
        )))
    }
}
