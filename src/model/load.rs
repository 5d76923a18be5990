//! One-time loading of search tree documents
//!
//! A document is parsed completely and checked before anything is drawn, so a
//! malformed file never produces a half-rendered tree.

use super::search::SearchNode;
use super::tree::Tree;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Sample tree shipped with the viewer, used when no file is given
pub const BUNDLED_TREE: &str = include_str!("../../data/tree.json");

/// Errors raised while loading a tree document
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read
    Io { path: PathBuf, source: io::Error },
    /// The document is not valid JSON or does not have the tree shape
    Parse(serde_json::Error),
    /// The tree nests deeper than an explicitly configured limit
    TooDeep { depth: usize, max_depth: usize },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            LoadError::Parse(e) => write!(f, "malformed search tree: {e}"),
            LoadError::TooDeep { depth, max_depth } => write!(
                f,
                "search tree is {depth} levels deep, more than the limit of {max_depth}"
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse(e) => Some(e),
            LoadError::TooDeep { .. } => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e)
    }
}

/// Loads `Tree<SearchNode>` documents.
///
/// Nesting depth is unbounded unless a limit is set with `with_max_depth`.
/// Parsing does not use serde_json's recursion limit and grows the stack on
/// demand, so deep trees load like shallow ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeLoader {
    max_depth: Option<usize>,
}

impl TreeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject trees nested deeper than `max_depth` levels
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Load a tree from a file on disk
    pub fn load_file(&self, path: &Path) -> Result<Tree<SearchNode>, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loading search tree from {}", path.display());
        self.load_reader(BufReader::new(file))
    }

    /// Load a tree from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Tree<SearchNode>, LoadError> {
        let tree = parse(serde_json::Deserializer::from_reader(reader))?;
        self.check(tree)
    }

    /// Load a tree from a string
    pub fn load_str(&self, text: &str) -> Result<Tree<SearchNode>, LoadError> {
        let tree = parse(serde_json::Deserializer::from_str(text))?;
        self.check(tree)
    }

    /// Load the sample tree compiled into the binary
    pub fn load_bundled(&self) -> Result<Tree<SearchNode>, LoadError> {
        self.load_str(BUNDLED_TREE)
    }

    fn check(&self, tree: Tree<SearchNode>) -> Result<Tree<SearchNode>, LoadError> {
        let depth = tree.depth();
        if let Some(max_depth) = self.max_depth {
            if depth > max_depth {
                tracing::warn!(
                    "Rejecting search tree with depth {} (limit {})",
                    depth,
                    max_depth
                );
                return Err(LoadError::TooDeep { depth, max_depth });
            }
        }
        tracing::info!(
            "Loaded search tree: {} nodes, depth {}",
            tree.node_count(),
            depth
        );
        Ok(tree)
    }
}

/// Parse a whole document, with no nesting limit and no trailing data
fn parse<'de, R>(mut de: serde_json::Deserializer<R>) -> Result<Tree<SearchNode>, LoadError>
where
    R: serde_json::de::Read<'de>,
{
    de.disable_recursion_limit();
    let tree = Tree::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(tree)
}
