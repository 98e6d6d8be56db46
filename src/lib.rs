pub mod api;
pub mod blueprint;
pub mod builder;
pub mod errors;
pub mod preview;
pub mod tree;

pub use errors::FilesystemError;
pub use tree::{Tree, TreeNode};
