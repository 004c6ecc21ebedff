//! Simulated network commands (visit, ping)
//!
//! The console has no network stack. `visit` normalizes a URL and
//! reports it for the host to open; `ping` fabricates replies with
//! random latencies.

use std::fmt::Write;

use async_trait::async_trait;
use rand::Rng;
use url::Url;

use super::{Command, Context};
use crate::error::Result;
use crate::interpreter::ExecResult;

/// The visit command - normalize a URL and report it.
///
/// Scheme-less input gets `https://` prepended, like a browser address
/// bar. Opening anything is the host's business.
pub struct Visit;

#[async_trait]
impl Command for Visit {
    async fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let Some(raw) = ctx.args.first() else {
            return Ok(ExecResult::err("Usage: visit [url]\n", 1));
        };

        let candidate = if raw.contains("://") {
            raw.clone()
        } else {
            format!("https://{}", raw)
        };

        match Url::parse(&candidate) {
            Ok(parsed) => Ok(ExecResult::ok(format!("Opening {}...\n", parsed))),
            Err(_) => Ok(ExecResult::err("Usage: visit [url]\n", 1)),
        }
    }
}

/// The ping command - four fabricated replies and a statistics block.
pub struct Ping;

#[async_trait]
impl Command for Ping {
    async fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let Some(host) = ctx.args.first() else {
            return Ok(ExecResult::err("Usage: ping [host]\n", 1));
        };

        let mut rng = rand::rng();
        let mut output = format!("Pinging {} with 32 bytes of data:\n", host);
        for _ in 0..4 {
            let latency: u32 = rng.random_range(1..=100);
            let _ = writeln!(
                output,
                "Reply from {}: bytes=32 time={}ms TTL=128",
                host, latency
            );
        }
        let _ = writeln!(output, "Ping statistics for {}:", host);
        output.push_str("    Packets: Sent = 4, Received = 4, Lost = 0 (0% loss),\n");

        Ok(ExecResult::ok(output))
    }
}
