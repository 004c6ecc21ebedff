//! Working path and navigation
//!
//! [`WorkingPath`] is the navigator's notion of where the user is: the
//! root label followed by the directory names walked so far. `cd`
//! computes a candidate path first (this is where `.` and `..` mean
//! something), validates the candidate against the tree, and only then
//! replaces the path in a single assignment. A failed `cd` leaves the
//! path untouched.

use super::node::{DirEntry, Disk, Node};
use super::resolve::{self, ROOT_LABEL, SEPARATOR};
use crate::error::{Error, Result};

/// Current working path: the root label plus the directory names below
/// it, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingPath {
    segments: Vec<String>,
}

impl Default for WorkingPath {
    fn default() -> Self {
        Self::root()
    }
}

impl WorkingPath {
    /// The path of the root directory, `C:\`.
    pub fn root() -> Self {
        Self {
            segments: vec![ROOT_LABEL.to_string()],
        }
    }

    /// Number of segments, root label included. Never less than 1.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Render the path, e.g. `C:\Users\Player`. The root label already
    /// carries the trailing separator, so the root renders as `C:\`.
    pub fn display(&self) -> String {
        let mut out = String::from(ROOT_LABEL);
        out.push_str(&self.segments[1..].join("\\"));
        out
    }

    /// Prompt string shown by the host, e.g. `C:\Users\Player>`.
    pub fn prompt(&self) -> String {
        format!("{}>", self.display())
    }

    /// Segment names below the root, in order.
    pub(crate) fn interior(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments[1..].iter().map(String::as_str)
    }

    /// Apply a `cd`.
    ///
    /// The candidate path is computed exactly the way the console's
    /// navigation works: absolute and root-relative inputs replace the
    /// path verbatim; relative inputs are applied segment by segment,
    /// where `..` pops (the root label is never popped), `.` is a no-op
    /// and anything else is appended. The candidate is then validated
    /// as a directory walk from the root before it becomes current.
    pub fn change_directory(&mut self, disk: &Disk, input: &str) -> Result<()> {
        if input.is_empty() {
            return Err(Error::PathNotFound);
        }

        let candidate = if let Some(rest) = input.strip_prefix(ROOT_LABEL) {
            Self::rooted(rest)
        } else if let Some(rest) = input.strip_prefix(SEPARATOR) {
            Self::rooted(rest)
        } else {
            let mut segs = self.segments.clone();
            for seg in resolve::segments(input) {
                match seg {
                    ".." => {
                        if segs.len() > 1 {
                            segs.pop();
                        }
                    }
                    "." => {}
                    other => segs.push(other.to_string()),
                }
            }
            segs
        };

        let target = resolve::walk(disk.root(), candidate[1..].iter())?;
        if !target.is_dir() {
            return Err(Error::PathNotFound);
        }

        self.segments = candidate;

        #[cfg(feature = "logging")]
        tracing::debug!(path = %self.display(), "changed directory");

        Ok(())
    }

    fn rooted(rest: &str) -> Vec<String> {
        let mut segs = vec![ROOT_LABEL.to_string()];
        segs.extend(resolve::segments(rest).map(str::to_string));
        segs
    }
}

/// List the immediate children of `input`, or of the current directory
/// when `input` is absent or empty. Fails with [`Error::PathNotFound`]
/// unless the target is a directory. Entries come back sorted by name;
/// the order carries no meaning, it just keeps output stable.
pub fn list_directory(
    disk: &Disk,
    cwd: &WorkingPath,
    input: Option<&str>,
) -> Result<Vec<DirEntry>> {
    let node = match input {
        Some(path) if !path.is_empty() => resolve::resolve(disk, cwd, path)?,
        _ => resolve::walk(disk.root(), cwd.interior())?,
    };

    let children = match node {
        Node::Directory { children } => children,
        Node::File { .. } => return Err(Error::PathNotFound),
    };

    let mut entries: Vec<DirEntry> = children
        .iter()
        .map(|(name, child)| DirEntry {
            name: name.clone(),
            kind: child.kind(),
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::node::EntryKind;

    #[test]
    fn parent_from_root_is_a_no_op() {
        let disk = Disk::standard();
        let mut cwd = WorkingPath::root();
        cwd.change_directory(&disk, "..").unwrap();
        assert_eq!(cwd.depth(), 1);
        assert_eq!(cwd.display(), "C:\\");
    }

    #[test]
    fn parent_pops_exactly_one_segment() {
        let disk = Disk::standard();
        let mut cwd = WorkingPath::root();
        cwd.change_directory(&disk, "Users\\Player").unwrap();
        cwd.change_directory(&disk, "..").unwrap();
        assert_eq!(cwd.display(), "C:\\Users");
    }

    #[test]
    fn dot_never_changes_the_path() {
        let disk = Disk::standard();
        let mut cwd = WorkingPath::root();
        cwd.change_directory(&disk, "Users").unwrap();
        let before = cwd.clone();
        cwd.change_directory(&disk, ".").unwrap();
        assert_eq!(cwd, before);
    }

    #[test]
    fn absolute_input_replaces_the_path() {
        let disk = Disk::standard();
        let mut cwd = WorkingPath::root();
        cwd.change_directory(&disk, "Users\\Player").unwrap();
        cwd.change_directory(&disk, "C:\\System").unwrap();
        assert_eq!(cwd.display(), "C:\\System");
    }

    #[test]
    fn root_relative_input_replaces_the_path() {
        let disk = Disk::standard();
        let mut cwd = WorkingPath::root();
        cwd.change_directory(&disk, "Users\\Player").unwrap();
        cwd.change_directory(&disk, "\\Users").unwrap();
        assert_eq!(cwd.display(), "C:\\Users");
    }

    #[test]
    fn mixed_relative_segments_apply_left_to_right() {
        let disk = Disk::standard();
        let mut cwd = WorkingPath::root();
        cwd.change_directory(&disk, "Users\\Player\\Documents\\..\\Desktop")
            .unwrap();
        assert_eq!(cwd.display(), "C:\\Users\\Player\\Desktop");
    }

    #[test]
    fn failed_cd_leaves_the_path_unchanged() {
        let disk = Disk::standard();
        let mut cwd = WorkingPath::root();
        cwd.change_directory(&disk, "Users").unwrap();
        let before = cwd.clone();
        assert_eq!(
            cwd.change_directory(&disk, "NoSuchDir"),
            Err(Error::PathNotFound)
        );
        assert_eq!(cwd, before);
    }

    #[test]
    fn cd_to_a_file_fails() {
        let disk = Disk::standard();
        let mut cwd = WorkingPath::root();
        assert_eq!(
            cwd.change_directory(&disk, "autoexec.ntr"),
            Err(Error::PathNotFound)
        );
        assert_eq!(cwd.depth(), 1);
    }

    #[test]
    fn empty_input_is_rejected() {
        let disk = Disk::standard();
        let mut cwd = WorkingPath::root();
        assert_eq!(cwd.change_directory(&disk, ""), Err(Error::PathNotFound));
    }

    #[test]
    fn list_current_directory_when_no_path_given() {
        let disk = Disk::standard();
        let mut cwd = WorkingPath::root();
        cwd.change_directory(&disk, "Users\\Player").unwrap();

        let entries = list_directory(&disk, &cwd, None).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Desktop", "Documents", "readme.txt"]);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[2].kind, EntryKind::File);
    }

    #[test]
    fn list_of_a_file_fails() {
        let disk = Disk::standard();
        let cwd = WorkingPath::root();
        assert_eq!(
            list_directory(&disk, &cwd, Some("C:\\autoexec.ntr")),
            Err(Error::PathNotFound)
        );
    }

    #[test]
    fn list_round_trips_with_cd() {
        let disk = Disk::standard();
        let origin = WorkingPath::root();
        let direct = list_directory(&disk, &origin, Some("Users\\Player")).unwrap();

        let mut moved = origin.clone();
        moved.change_directory(&disk, "Users\\Player").unwrap();
        let after_cd = list_directory(&disk, &moved, None).unwrap();

        assert_eq!(direct, after_cd);
    }

    #[test]
    fn prompt_joins_segments_with_the_separator() {
        let disk = Disk::standard();
        let mut cwd = WorkingPath::root();
        assert_eq!(cwd.prompt(), "C:\\>");
        cwd.change_directory(&disk, "Users\\Player").unwrap();
        assert_eq!(cwd.prompt(), "C:\\Users\\Player>");
    }
}
