use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// File looked up in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".formshift.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Which files a run looks at.
///
/// ```toml
/// extensions = ["js", "jsx", "ts", "tsx"]
/// ignore_dirs = ["node_modules", "storybook-static"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// File extensions to analyse, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names skipped wherever they appear in the tree
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore_dirs: default_ignore_dirs(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    ["js", "jsx", "ts", "tsx", "mjs", "cjs"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_ignore_dirs() -> Vec<String> {
    ["node_modules", "dist", "build", ".next", "coverage", ".git"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl DiscoveryConfig {
    /// Replace fields the command line set explicitly.
    pub fn with_overrides(
        mut self,
        extensions: Option<Vec<String>>,
        ignore_dirs: Option<Vec<String>>,
    ) -> Result<Self> {
        if let Some(extensions) = extensions.filter(|v| !v.is_empty()) {
            self.extensions = extensions;
        }
        if let Some(ignore_dirs) = ignore_dirs {
            self.ignore_dirs = ignore_dirs;
        }
        self.normalized()
    }

    /// Strip leading dots, lowercase extensions and reject an empty list.
    fn normalized(mut self) -> Result<Self> {
        self.extensions = self
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        let mut seen = HashSet::new();
        self.extensions.retain(|ext| seen.insert(ext.clone()));

        if self.extensions.is_empty() {
            return Err(Error::Configuration(
                "at least one file extension is required".to_string(),
            ));
        }
        Ok(self)
    }

    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }

    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignore_dirs.iter().any(|dir| dir == name)
    }
}

pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate a config file's contents.
pub fn parse_config(contents: &str) -> Result<DiscoveryConfig> {
    toml::from_str::<DiscoveryConfig>(contents)
        .map_err(|e| Error::Configuration(format!("failed to parse {CONFIG_FILE_NAME}: {e}")))?
        .normalized()
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<DiscoveryConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            Some(DiscoveryConfig::default())
        }
    }
}

pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load the nearest config file at or above `start`.
pub fn load_config_from(start: &Path) -> DiscoveryConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            DiscoveryConfig::default()
        })
}

/// Load the nearest config file at or above the working directory.
pub fn load_config() -> DiscoveryConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            DiscoveryConfig::default()
        }
    }
}
