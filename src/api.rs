use crate::{
    builder::{self, create_directory},
    errors::FilesystemError,
    preview,
    tree::Tree,
};
use colored::Colorize;
use std::path::Path;

/// Creates `base_path` if needed, materializes `tree` inside it and prints a confirmation line.
///
/// The confirmation is only printed once every entry has been created.
///
/// # Errors
///
/// Returns a [`FilesystemError`] if:
///
/// - `base_path` could not be created.
/// - A directory of the tree could not be created.
/// - A file of the tree could not be written.
pub fn scaffold(base_path: &Path, tree: &Tree) -> Result<(), FilesystemError> {
    log::info!("scaffolding into: {}", base_path.display());

    create_directory(base_path)?;

    builder::build(base_path, tree)?;

    println!(
        "Estrutura do projeto '{}' {}",
        base_path.display(),
        "criada com sucesso!".green()
    );

    Ok(())
}

/// Prints the entries `tree` would create under `base_path` without writing anything.
pub fn preview(base_path: &Path, tree: &Tree) {
    log::info!("previewing: {}", base_path.display());

    print!("{}", preview::render(base_path, tree));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::FileOperation,
        tree::{tree, TreeNode},
    };
    use std::fs;

    #[test]
    fn creates_missing_base_path_before_root_files() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("out");

        scaffold(
            &base,
            &tree([
                ("a.txt", TreeNode::file("hello")),
                ("sub", TreeNode::directory([("b.txt", TreeNode::file(""))])),
            ]),
        )
        .unwrap();

        assert_eq!(fs::read_to_string(base.join("a.txt")).unwrap(), "hello");
        assert!(base.join("sub").is_dir());
        assert_eq!(fs::read_to_string(base.join("sub/b.txt")).unwrap(), "");
    }

    #[test]
    fn base_path_blocked_by_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("out");
        fs::write(&base, "").unwrap();

        let error = scaffold(&base, &tree([("a.txt", TreeNode::file("a"))])).unwrap_err();

        assert_eq!(error.operation, FileOperation::Mkdir);
        assert_eq!(error.path, base);
    }
}
