//! Trie construction from the symbol table

use super::{DfsIter, TrieNode};
use crate::symbols::{DASH, DOT};
use crate::{Error, Result};

/// A prefix tree built from Morse symbol entries
///
/// Owns the root node. Built once, then read-only: the serializer and the
/// graph projector both consume it through [`MorseTrie::iter`].
#[derive(Debug)]
pub struct MorseTrie {
    root: TrieNode,
}

impl MorseTrie {
    /// Build a trie from symbol entries in input order.
    ///
    /// Each entry is a dot/dash path followed by one display character.
    /// Empty entries are skipped. The whole build fails on the first
    /// malformed entry, so a partially built trie is never returned.
    pub fn build<'a, I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut root = TrieNode::new();
        for entry in symbols {
            if entry.is_empty() {
                continue;
            }
            insert_entry(&mut root, entry)?;
        }
        Ok(MorseTrie { root })
    }

    /// The root node (the empty prefix)
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Pre-order depth-first traversal over all nodes, root first
    pub fn iter(&self) -> DfsIter<'_> {
        DfsIter::new(&self.root)
    }

    /// Total number of nodes, including the root
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of nodes that end at least one complete symbol path
    pub fn terminal_count(&self) -> usize {
        self.iter().filter(|visit| visit.node.is_terminal()).count()
    }
}

/// Validate one entry, then walk its path from the root, creating missing
/// children, and mark the final path node with the trailing payload.
fn insert_entry(root: &mut TrieNode, entry: &str) -> Result<()> {
    let chars: Vec<char> = entry.chars().collect();
    // A lone payload has no path and would mark the root terminal
    if chars.len() < 2 {
        return Err(Error::InvalidSymbolFormat(entry.to_string()));
    }
    let payload = chars[chars.len() - 1];
    let path = &chars[..chars.len() - 1];
    if path.iter().any(|ch| *ch != DOT && *ch != DASH) {
        return Err(Error::InvalidSymbolFormat(entry.to_string()));
    }

    let mut node = root;
    for symbol in path {
        node = node.child_or_insert(*symbol);
    }
    node.mark_terminal(payload);
    Ok(())
}
