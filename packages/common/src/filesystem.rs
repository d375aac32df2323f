use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File writing abstraction for export delivery and testing
pub trait FileWriter {
    /// Write contents to the named file
    fn write(&mut self, filename: &str, contents: &str) -> Result<(), std::io::Error>;
}

/// Real file writer rooted at a base directory
pub struct RealFileWriter {
    base_dir: PathBuf,
}

impl RealFileWriter {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }
}

impl FileWriter for RealFileWriter {
    fn write(&mut self, filename: &str, contents: &str) -> Result<(), std::io::Error> {
        std::fs::create_dir_all(&self.base_dir)?;
        std::fs::write(self.base_dir.join(filename), contents)
    }
}

/// Mock file writer for testing
pub struct MockFileWriter {
    pub written_files: HashMap<String, String>,
}

impl MockFileWriter {
    pub fn new() -> Self {
        Self {
            written_files: HashMap::new(),
        }
    }

    pub fn contents_of(&self, filename: &str) -> Option<&str> {
        self.written_files.get(filename).map(|s| s.as_str())
    }
}

impl Default for MockFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileWriter for MockFileWriter {
    fn write(&mut self, filename: &str, contents: &str) -> Result<(), std::io::Error> {
        self.written_files
            .insert(filename.to_string(), contents.to_string());
        Ok(())
    }
}
