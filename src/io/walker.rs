use crate::config::DiscoveryConfig;
use crate::errors::{Error, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Finds the source files a run should look at.
///
/// Honours `.gitignore`, skips configured directory names at any depth and
/// keeps only configured extensions. A single file root is returned as is
/// when its extension matches.
pub struct FileWalker {
    root: PathBuf,
    config: DiscoveryConfig,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: DiscoveryConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DiscoveryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            return Err(Error::file_system("path does not exist", &self.root));
        }
        if self.root.is_file() {
            return Ok(if self.config.matches_extension(&self.root) {
                vec![self.root.clone()]
            } else {
                vec![]
            });
        }

        let ignore_dirs = self.config.ignore_dirs.clone();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .require_git(false)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir
                    && entry.depth() > 0
                    && ignore_dirs
                        .iter()
                        .any(|dir| entry.file_name() == dir.as_str()))
            })
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| Error::file_system(e.to_string(), &self.root))?;
            let path = entry.path();

            if self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        log::debug!("Found {} candidate files under {}", files.len(), self.root.display());
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        path.is_file() && self.config.matches_extension(path)
    }
}

pub fn find_source_files(root: &Path, config: DiscoveryConfig) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf()).with_config(config).walk()
}
