use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use crate::taxonomy::Taxonomy;

/// Test fixture providing an isolated directory for documents and taxonomy files.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl UnitTestFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {}", data_path.display());

        Self {
            temp_dir,
            data_path,
        }
    }

    /// Create a test file with content.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {} ({} bytes)",
            full_path.display(),
            content.len()
        );
        full_path
    }

    /// Write a custom taxonomy file and load it over the built-in data.
    #[must_use]
    pub fn load_taxonomy(&self, file_name: &str, content: &str) -> Arc<Taxonomy> {
        let path = self.create_file(file_name, content);
        Arc::new(Taxonomy::load(Some(&path)).expect("Failed to load taxonomy"))
    }
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!(
            "[FIXTURE] Cleaning up temp directory: {}",
            self.data_path.display()
        );
    }
}

/// The built-in taxonomy behind an `Arc`.
#[must_use]
pub fn builtin_taxonomy() -> Arc<Taxonomy> {
    Arc::new(Taxonomy::builtin().expect("built-in taxonomy is valid"))
}
