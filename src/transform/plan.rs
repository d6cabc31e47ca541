//! Rewrite plan: a set of whole-subtree replacements applied in one pass.
//!
//! tree-sitter trees are immutable, so a rewrite is expressed as freshly
//! built replacement text for each changed subtree. Every replacement
//! covers the full byte range of one node, and no two may overlap, so the
//! output is produced by a single left-to-right splice with no offset
//! bookkeeping.

use crate::analyzers::parser::node_line;
use crate::errors::{Error, Result};
use std::ops::Range;
use tree_sitter::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeReplacement {
    pub range: Range<usize>,
    pub line: usize,
    pub text: String,
    pub description: String,
}

#[derive(Debug, Default)]
pub struct RewritePlan {
    replacements: Vec<NodeReplacement>,
}

impl RewritePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole of `node` with `text`.
    pub fn replace(&mut self, node: &Node, text: impl Into<String>, description: impl Into<String>) {
        let line = node_line(node);
        self.replacements.push(NodeReplacement {
            range: node.start_byte()..node.end_byte(),
            line,
            text: text.into(),
            description: format!("line {line}: {}", description.into()),
        });
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// Regenerate source text. Returns the new text and the change log in
    /// document order.
    pub fn apply(mut self, source: &str) -> Result<(String, Vec<String>)> {
        self.replacements.sort_by_key(|r| (r.range.start, r.range.end));

        if let Some(pair) = self
            .replacements
            .windows(2)
            .find(|pair| pair[0].range.end > pair[1].range.start)
        {
            return Err(Error::OverlappingEdits {
                first: pair[0].range.clone(),
                second: pair[1].range.clone(),
            });
        }

        let mut output = String::with_capacity(source.len());
        let mut cursor = 0;
        for replacement in &self.replacements {
            output.push_str(&source[cursor..replacement.range.start]);
            output.push_str(&replacement.text);
            cursor = replacement.range.end;
        }
        output.push_str(&source[cursor..]);

        let changes = self
            .replacements
            .into_iter()
            .map(|r| r.description)
            .collect();

        Ok((output, changes))
    }
}
