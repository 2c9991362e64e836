use std::path::{Path, PathBuf};

/// Where and how the external tool is invoked. Built once per run from the
/// command line and handed to the dispatcher; nothing here is read from the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitConfig {
    pub program: String,
    pub repo_path: PathBuf,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            repo_path: PathBuf::from("."),
        }
    }
}

impl GitConfig {
    pub fn new(program: impl Into<String>, repo_path: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }
}
