use std::path::PathBuf;

/// Grammar flavour used to parse a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceVariant {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl SourceVariant {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }
}

/// A parsed source file: the tree-sitter tree plus the text it was built
/// from. Node byte ranges index into `source`.
#[derive(Clone, Debug)]
pub struct SourceTree {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: PathBuf,
    pub variant: SourceVariant,
}

impl SourceTree {
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}
