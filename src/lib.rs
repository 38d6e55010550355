//! # morsegraph
//!
//! Builds a prefix tree (trie) of International Morse code from the ITU-R
//! M.1677 symbol table and exports it as a JSON document and as a Graphviz
//! diagram (DOT plus PDF/PNG/SVG renderings).
//!
//! ## Core Concepts
//!
//! - **Trie**: each edge is a dot or dash; a node marks the sequence of
//!   path symbols from the root to it
//! - **Terminal node**: ends at least one complete symbol path and carries
//!   the character that path encodes
//! - **Projection**: a pure transformation of the trie into an abstract
//!   graph with stable node identifiers, ready for layout
//!
//! ## Example
//!
//! ```ignore
//! use morsegraph::{export, Rankdir, MORSE_TABLE};
//!
//! let paths = export(MORSE_TABLE, "./output".as_ref(), "morsegraph", Rankdir::TopBottom)?;
//! println!("wrote {}", paths.json.display());
//! ```

pub mod json;
pub mod symbols;
pub mod trie;
pub mod viz;

mod error;
mod export;

pub use error::{Error, Result};
pub use export::{export, ExportPaths};
pub use symbols::{DASH, DOT, MORSE_TABLE};
pub use trie::{MorseTrie, TrieNode};
pub use viz::{project, Graph, GraphEdge, GraphNode, NodeKind, Rankdir};
