//! Virtual filesystem for NaturaKit
//!
//! Provides the read-only directory tree and the navigation primitives:
//! - `node`: the `Node` tree and the stock `Disk` image
//! - `resolve`: pure path-string lookup
//! - `cwd`: the working path with `cd`/`dir` semantics

mod cwd;
mod node;
mod resolve;

pub use cwd::{list_directory, WorkingPath};
pub use node::{DirEntry, Disk, EntryKind, Node};
pub use resolve::{resolve, ROOT_LABEL, SEPARATOR};
