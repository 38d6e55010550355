//! Graph projection of the trie
//!
//! This module turns the built trie into an abstract directed graph —
//! nodes with stable identifiers, labels and style categories, plus an
//! edge list — that the Graphviz collaborator renders. The projection is
//! pure and deterministic: identifiers come straight from the shared
//! pre-order traversal.

mod dot;
mod render;

pub use dot::to_dot;
pub use render::render_formats;

use crate::trie::MorseTrie;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Style category of a graph node, derived from its role in the trie
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The empty prefix
    Root,
    /// Ends at least one complete symbol path
    Terminal,
    /// A dot/dash position on the way to a terminal
    Intermediate,
}

/// One node of the abstract graph
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Sequential identifier assigned in pre-order, root = 0
    pub id: usize,
    /// Display label: `root`, a path symbol, or a terminal's character
    pub label: String,
    /// Style category
    pub kind: NodeKind,
}

/// A directed edge from a parent node to one of its children
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: usize,
    pub target: usize,
}

/// Requested drawing direction for the rendered diagram
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rankdir {
    /// Top to bottom
    #[default]
    #[serde(rename = "TB")]
    TopBottom,
    /// Bottom to top
    #[serde(rename = "BT")]
    BottomTop,
    /// Left to right
    #[serde(rename = "LR")]
    LeftRight,
    /// Right to left
    #[serde(rename = "RL")]
    RightLeft,
}

impl Rankdir {
    /// The Graphviz `rankdir` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Rankdir::TopBottom => "TB",
            Rankdir::BottomTop => "BT",
            Rankdir::LeftRight => "LR",
            Rankdir::RightLeft => "RL",
        }
    }
}

impl fmt::Display for Rankdir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Rankdir {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "TB" => Ok(Rankdir::TopBottom),
            "BT" => Ok(Rankdir::BottomTop),
            "LR" => Ok(Rankdir::LeftRight),
            "RL" => Ok(Rankdir::RightLeft),
            other => Err(Error::InvalidLayoutDirection(other.to_string())),
        }
    }
}

/// The abstract graph handed to the rendering collaborator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Drawing orientation, carried as a graph-level attribute
    pub rankdir: Rankdir,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Project the trie into an abstract graph.
///
/// Visits nodes in pre-order with siblings in insertion order; the visit
/// index is the node identifier, so two calls over the same trie produce
/// identical graphs. Every parent/child relation becomes one edge, so the
/// edge count is always the node count minus one.
pub fn project(trie: &MorseTrie, rankdir: Rankdir) -> Graph {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for visit in trie.iter() {
        let kind = if visit.parent.is_none() {
            NodeKind::Root
        } else if visit.node.is_terminal() {
            NodeKind::Terminal
        } else {
            NodeKind::Intermediate
        };

        let label = match (kind, visit.node.label(), visit.symbol) {
            (NodeKind::Root, _, _) => "root".to_string(),
            (NodeKind::Terminal, Some(ch), _) => ch.to_string(),
            // Hand-built tries may lack a display character; fall back to
            // the incoming path symbol
            (_, _, Some(symbol)) => symbol.to_string(),
            (_, _, None) => String::new(),
        };

        nodes.push(GraphNode {
            id: visit.index,
            label,
            kind,
        });

        if let Some(parent) = visit.parent {
            edges.push(GraphEdge {
                source: parent,
                target: visit.index,
            });
        }
    }

    Graph {
        rankdir,
        nodes,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::MORSE_TABLE;

    fn build(symbols: &[&str]) -> MorseTrie {
        MorseTrie::build(symbols.iter().copied()).unwrap()
    }

    #[test]
    fn test_rankdir_parses_all_four() {
        for (text, dir) in [
            ("TB", Rankdir::TopBottom),
            ("BT", Rankdir::BottomTop),
            ("LR", Rankdir::LeftRight),
            ("RL", Rankdir::RightLeft),
        ] {
            assert_eq!(text.parse::<Rankdir>().unwrap(), dir);
            assert_eq!(dir.as_str(), text);
        }
    }

    #[test]
    fn test_rankdir_rejects_unknown() {
        let err = "XY".parse::<Rankdir>().unwrap_err();
        assert!(matches!(err, Error::InvalidLayoutDirection(dir) if dir == "XY"));
    }

    #[test]
    fn test_projection_of_small_table() {
        let trie = build(&[".-A", "-...B"]);
        let graph = project(&trie, Rankdir::TopBottom);

        let summary: Vec<(usize, &str, NodeKind)> = graph
            .nodes
            .iter()
            .map(|n| (n.id, n.label.as_str(), n.kind))
            .collect();
        assert_eq!(
            summary,
            vec![
                (0, "root", NodeKind::Root),
                (1, ".", NodeKind::Intermediate),
                (2, "A", NodeKind::Terminal),
                (3, "-", NodeKind::Intermediate),
                (4, ".", NodeKind::Intermediate),
                (5, ".", NodeKind::Intermediate),
                (6, "B", NodeKind::Terminal),
            ]
        );

        let edge_pairs: Vec<(usize, usize)> =
            graph.edges.iter().map(|e| (e.source, e.target)).collect();
        assert_eq!(
            edge_pairs,
            vec![(0, 1), (1, 2), (0, 3), (3, 4), (4, 5), (5, 6)]
        );
    }

    #[test]
    fn test_node_and_edge_counts_match_trie() {
        let trie = build(MORSE_TABLE);
        let graph = project(&trie, Rankdir::TopBottom);
        assert_eq!(graph.nodes.len(), trie.node_count());
        assert_eq!(graph.edges.len(), graph.nodes.len() - 1);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let first = project(&build(MORSE_TABLE), Rankdir::LeftRight);
        let second = project(&build(MORSE_TABLE), Rankdir::LeftRight);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rankdir_is_carried_through() {
        let graph = project(&build(&[".E"]), Rankdir::RightLeft);
        assert_eq!(graph.rankdir, Rankdir::RightLeft);
    }

    #[test]
    fn test_empty_trie_projects_to_lone_root() {
        let graph = project(&build(&[]), Rankdir::TopBottom);
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].kind, NodeKind::Root);
        assert!(graph.edges.is_empty());
    }
}
