use indexmap::IndexMap;

/// Ordered mapping from an entry name to the node that should be created under it.
///
/// Keys are unique among siblings, so a name can only ever describe one entry.
pub type Tree = IndexMap<String, TreeNode>;

/// Represents an entry of a scaffold description, staged in memory before anything is
/// written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A directory and the entries that live inside it.
    Directory(Tree),
    /// A file and the exact contents it is written with (may be empty).
    File(String),
}
impl TreeNode {
    pub fn file(contents: impl Into<String>) -> Self {
        Self::File(contents.into())
    }

    pub fn directory<N, I>(children: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, TreeNode)>,
    {
        Self::Directory(tree(children))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}

/// Builds a [`Tree`] from `(name, node)` pairs, keeping their order.
///
/// A repeated name replaces the earlier node in place.
pub fn tree<N, I>(entries: I) -> Tree
where
    N: Into<String>,
    I: IntoIterator<Item = (N, TreeNode)>,
{
    entries
        .into_iter()
        .map(|(name, node)| (name.into(), node))
        .collect()
}
