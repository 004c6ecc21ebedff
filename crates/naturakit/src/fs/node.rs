//! Virtual filesystem tree
//!
//! The console's disk is a static nested tree built once at startup.
//! There is no mutation API: no command creates, deletes, or renames
//! nodes, so the tree is shared immutably for the whole session.

use std::collections::HashMap;

use serde::Serialize;

/// A single entry in the virtual tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Directory with named children. Names are unique within a parent;
    /// order is insignificant.
    Directory {
        /// Child nodes keyed by name.
        children: HashMap<String, Node>,
    },
    /// Regular file with text content.
    File {
        /// File text.
        content: String,
    },
}

impl Node {
    /// Build a directory node from `(name, node)` pairs.
    pub fn dir<N, I>(entries: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Node)>,
    {
        Node::Directory {
            children: entries
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }

    /// Build a file node.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File {
            content: content.into(),
        }
    }

    /// Entry kind reported for this node.
    pub fn kind(&self) -> EntryKind {
        match self {
            Node::Directory { .. } => EntryKind::Directory,
            Node::File { .. } => EntryKind::File,
        }
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Look up an immediate child by exact, case-sensitive name.
    /// Files have no children.
    pub fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Directory { children } => children.get(name),
            Node::File { .. } => None,
        }
    }

    /// File text, if this is a file.
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory { .. } => None,
        }
    }
}

/// Entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    /// Directory
    Directory,
    /// Regular file
    File,
}

impl EntryKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File)
    }
}

/// Directory entry as reported by `dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirEntry {
    /// Entry name (not a full path).
    pub name: String,
    /// Entry kind.
    pub kind: EntryKind,
}

/// The console's disk: a single read-only root directory.
#[derive(Debug, Clone)]
pub struct Disk {
    root: Node,
}

impl Default for Disk {
    fn default() -> Self {
        Self::standard()
    }
}

impl Disk {
    /// Wrap a custom tree. A file at the root cannot be navigated, so
    /// a non-directory root is normalized to an empty directory.
    pub fn new(root: Node) -> Self {
        let root = if root.is_dir() {
            root
        } else {
            Node::dir::<String, _>([])
        };
        Self { root }
    }

    /// The stock survival-console disk image.
    pub fn standard() -> Self {
        Self::new(Node::dir([
            (
                "Users",
                Node::dir([(
                    "Player",
                    Node::dir([
                        ("Documents", Node::dir::<String, _>([])),
                        ("Desktop", Node::dir::<String, _>([])),
                        (
                            "readme.txt",
                            Node::file(
                                "Welcome to Natura Survival Console.\nUse 'help' to see commands.",
                            ),
                        ),
                    ]),
                )]),
            ),
            ("System", Node::dir::<String, _>([])),
            (
                "autoexec.ntr",
                Node::file("Boot sequence config for Natura Terminal."),
            ),
        ]))
    }

    /// The root directory node.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_image_shape() {
        let disk = Disk::standard();
        let root = disk.root();

        assert!(root.child("Users").is_some_and(Node::is_dir));
        assert!(root.child("System").is_some_and(Node::is_dir));
        assert_eq!(
            root.child("autoexec.ntr").map(Node::kind),
            Some(EntryKind::File)
        );
    }

    #[test]
    fn child_lookup_is_case_sensitive() {
        let disk = Disk::standard();
        assert!(disk.root().child("users").is_none());
        assert!(disk.root().child("Users").is_some());
    }

    #[test]
    fn files_have_no_children() {
        let file = Node::file("data");
        assert!(file.child("anything").is_none());
        assert_eq!(file.content(), Some("data"));
    }

    #[test]
    fn file_root_normalizes_to_empty_directory() {
        let disk = Disk::new(Node::file("oops"));
        assert!(disk.root().is_dir());
    }
}
