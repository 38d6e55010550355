//! DOT text emission for the abstract graph

use super::{Graph, NodeKind};

const BANNER: &str = "INTERNATIONAL MORSE CODE TRIE";

/// Render the abstract graph as Graphviz DOT text.
///
/// Node identifiers are `n<id>`, so the output is fully determined by the
/// projection. Styling mirrors the trie roles: the root is a plain box,
/// terminals are green double circles showing their character, and
/// dot/dash positions are filled circles in two shades of gray.
pub fn to_dot(graph: &Graph) -> String {
    let mut output = String::new();

    output.push_str("digraph morse {\n");
    output.push_str(&format!("  rankdir={};\n", graph.rankdir.as_str()));
    output.push_str(&format!("  label=\"{}\";\n", BANNER));
    output.push_str("  labelloc=\"b\";\n");
    output.push_str("  labeljust=\"r\";\n");
    output.push_str("  fontsize=24;\n");

    for node in &graph.nodes {
        let label = escape(&node.label);
        let attrs = match node.kind {
            NodeKind::Root => format!("label=\"{}\", shape=box", label),
            NodeKind::Terminal => format!(
                "label=\"{}\", shape=doublecircle, style=filled, \
                 fillcolor=\"#007F01\", fontcolor=white",
                label
            ),
            NodeKind::Intermediate => {
                // Dots read lighter than dashes
                let fillcolor = if node.label == "." { "#808080" } else { "#3b3b3b" };
                format!(
                    "label=\"{}\", shape=circle, style=filled, fillcolor=\"{}\", \
                     fontcolor=white, fontname=\"Courier-Bold\", fontsize=18",
                    label, fillcolor
                )
            }
        };
        output.push_str(&format!("  n{} [{}];\n", node.id, attrs));
    }

    for edge in &graph.edges {
        output.push_str(&format!("  n{} -> n{};\n", edge.source, edge.target));
    }

    output.push_str("}\n");
    output
}

/// Escape a label for use inside a DOT double-quoted string
fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
