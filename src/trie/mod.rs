//! Prefix tree over the Morse symbol table
//!
//! The trie is built once from the static table, then handed read-only to
//! the serializer and the graph projector. Sibling order is insertion
//! order, which fixes every downstream traversal deterministically.

mod node;
mod traversal;
mod tree;

pub use node::TrieNode;
pub use traversal::{DfsIter, Visit};
pub use tree::MorseTrie;
