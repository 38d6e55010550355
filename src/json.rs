//! Lossless structural serialization of the trie
//!
//! Each node becomes a JSON object: the terminal flag under the reserved
//! `_end` key, the display character under `_char` (terminal nodes only),
//! and one nested object per child keyed by its path symbol, in insertion
//! order. The reserved keys are longer than one character, so they can
//! never collide with a child key.

use crate::trie::TrieNode;
use crate::{Error, Result};
use serde_json::{Map, Value};

/// Reserved key holding the terminal flag
pub const END_KEY: &str = "_end";

/// Reserved key holding a terminal node's display character
pub const CHAR_KEY: &str = "_char";

/// Serialize a trie to its nested document form
pub fn to_value(node: &TrieNode) -> Value {
    let mut map = Map::new();
    map.insert(END_KEY.to_string(), Value::Bool(node.is_terminal()));
    if let Some(label) = node.label() {
        map.insert(CHAR_KEY.to_string(), Value::String(label.to_string()));
    }
    for (symbol, child) in node.children() {
        map.insert(symbol.to_string(), to_value(child));
    }
    Value::Object(map)
}

/// Parse a document produced by [`to_value`] back into a trie node.
///
/// Together with [`to_value`] this round-trips: the reconstructed trie has
/// the same children keys in the same order, the same terminal flags and
/// the same display characters at every node.
pub fn from_value(value: &Value) -> Result<TrieNode> {
    let map = value
        .as_object()
        .ok_or_else(|| Error::MalformedDocument(format!("expected object, got {}", value)))?;

    let mut node = TrieNode::new();
    for (key, child_value) in map {
        match key.as_str() {
            END_KEY => {
                let terminal = child_value.as_bool().ok_or_else(|| {
                    Error::MalformedDocument(format!("{} must be a boolean", END_KEY))
                })?;
                node.set_terminal(terminal);
            }
            CHAR_KEY => {
                let label = child_value
                    .as_str()
                    .and_then(single_char)
                    .ok_or_else(|| {
                        Error::MalformedDocument(format!(
                            "{} must be a one-character string",
                            CHAR_KEY
                        ))
                    })?;
                node.set_label(Some(label));
            }
            _ => {
                let symbol = single_char(key).ok_or_else(|| {
                    Error::MalformedDocument(format!("bad child key {:?}", key))
                })?;
                node.push_child(symbol, from_value(child_value)?);
            }
        }
    }
    Ok(node)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
