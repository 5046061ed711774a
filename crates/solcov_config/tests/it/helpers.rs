use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Path of a file in the `tests/fixtures` directory.
pub fn fixture_path(file_name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file_name)
}

/// Creates a project directory containing a single file.
pub fn project_with_file(file_name: &str, contents: &str) -> anyhow::Result<TempDir> {
    let project = tempfile::tempdir()?;
    std::fs::write(project.path().join(file_name), contents)?;
    Ok(project)
}
