//! Path resolution
//!
//! Pure lookup from a path string to a node in the tree. Three input
//! shapes, matching the console's DOS-style paths:
//! - absolute: starts with the `C:\` root label, walked from the root
//! - root-relative: starts with `\`, walked from the root
//! - relative: anything else, walked from the current directory
//!
//! Segments match case-sensitively and runs of consecutive separators
//! collapse. `.` and `..` are NOT special here - they are ordinary
//! (never present) child names, so resolving them fails. The navigator
//! applies its own dot handling before validating a target; the two
//! deliberately disagree (see [`super::cwd`]).

use super::cwd::WorkingPath;
use super::node::{Disk, Node};
use crate::error::{Error, Result};

/// Root label of the single virtual drive.
pub const ROOT_LABEL: &str = "C:\\";

/// Path separator.
pub const SEPARATOR: char = '\\';

/// Split a path remainder into segments, discarding the empty strings
/// produced by leading, trailing, or repeated separators.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// Walk `segs` down from `start`, requiring a directory with an exactly
/// matching child at every step. Any miss fails the whole walk; there
/// are no partial results.
pub(crate) fn walk<'a, S, I>(start: &'a Node, segs: I) -> Result<&'a Node>
where
    S: AsRef<str>,
    I: IntoIterator<Item = S>,
{
    let mut node = start;
    for seg in segs {
        node = node.child(seg.as_ref()).ok_or(Error::PathNotFound)?;
    }
    Ok(node)
}

/// Resolve a path string to the node it names.
pub fn resolve<'a>(disk: &'a Disk, cwd: &WorkingPath, input: &str) -> Result<&'a Node> {
    if input.is_empty() {
        return Err(Error::PathNotFound);
    }

    if let Some(rest) = input.strip_prefix(ROOT_LABEL) {
        walk(disk.root(), segments(rest))
    } else if let Some(rest) = input.strip_prefix(SEPARATOR) {
        walk(disk.root(), segments(rest))
    } else {
        let here = walk(disk.root(), cwd.interior())?;
        walk(here, segments(input))
    }
}
