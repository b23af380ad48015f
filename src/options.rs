use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreexportOptions {
    pub root: PathBuf,
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
}
impl Default for TreexportOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_depth: None,
            include_hidden: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct TreexportBuilder {
    options: TreexportOptions,
}
impl TreexportBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: TreexportOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn build(self) -> TreexportOptions {
        self.options
    }
}
