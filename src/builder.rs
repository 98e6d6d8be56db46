use crate::{
    errors::{FileOperation, FilesystemError},
    tree::{Tree, TreeNode},
};
use std::{fs::File, io::Write, path::Path};

/// Recursively materializes `tree` under `base_path`.
///
/// Directories are created (with any missing parents) before their children are visited,
/// files are created or truncated and then written with their exact contents. Nothing is
/// rolled back: the first failure is returned and entries created before it stay on disk.
///
/// # Errors
///
/// Returns a [`FilesystemError`] if a directory cannot be created or a file cannot be
/// written, including when a file's parent directory does not exist.
pub fn build(base_path: &Path, tree: &Tree) -> Result<(), FilesystemError> {
    log::trace!("walking: {}", base_path.display());

    for (name, node) in tree {
        let child_path = base_path.join(name);

        match node {
            TreeNode::Directory(children) => {
                create_directory(&child_path)?;

                build(&child_path, children)?;
            }
            TreeNode::File(contents) => {
                write_file(&child_path, contents)?;
            }
        }
    }

    Ok(())
}
/// Creates all directories in the specified path if they do not exist.
pub(crate) fn create_directory(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path)
        .map_err(|error| FilesystemError::new(FileOperation::Mkdir, path.into(), error))?;

    log::debug!("mkdir {}", path.display());

    Ok(())
}
/// Writes `contents` to `path`, truncating whatever was there before.
///
/// Parent directories are never created here.
fn write_file(path: &Path, contents: &str) -> Result<(), FilesystemError> {
    let to_error = |error| FilesystemError::new(FileOperation::Write, path.into(), error);

    let mut file = File::create(path).map_err(to_error)?;

    file.write_all(contents.as_bytes()).map_err(to_error)?;

    log::debug!("create {}", path.display());

    Ok(())
}
