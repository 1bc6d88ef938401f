use derive_new::new;
use std::path::{Path, PathBuf};

/// A file to be materialized inside a test repository.
#[derive(Debug, Clone, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(spec: FileSpec) {
    if let Some(parent) = spec.path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directories");
    }

    std::fs::write(&spec.path, spec.content).expect("Failed to write file");
}

pub fn remove_file(path: &Path) {
    std::fs::remove_file(path).expect("Failed to remove file");
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read file")
}
