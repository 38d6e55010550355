//! Export coordinator
//!
//! Builds the trie once, then feeds the same tree to both export paths:
//! the JSON document and the Graphviz pipeline. Collaborator failures
//! propagate immediately; outputs already on disk stay there, since each
//! file is independently overwritten by the next successful run.

use crate::trie::MorseTrie;
use crate::viz::{self, Rankdir};
use crate::{json, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths written by a successful [`export`]
#[derive(Clone, Debug)]
pub struct ExportPaths {
    /// The structural JSON document
    pub json: PathBuf,
    /// The DOT graph description
    pub dot: PathBuf,
    /// Rendered outputs (PDF, PNG, SVG)
    pub renders: Vec<PathBuf>,
}

/// Build the trie from `symbols` and write every output under
/// `<directory>/<basename>.<ext>`.
pub fn export(
    symbols: &[&str],
    directory: &Path,
    basename: &str,
    rankdir: Rankdir,
) -> Result<ExportPaths> {
    let trie = MorseTrie::build(symbols.iter().copied())?;
    log::info!(
        "built trie: {} nodes, {} terminals",
        trie.node_count(),
        trie.terminal_count()
    );

    fs::create_dir_all(directory)?;
    let base = directory.join(basename);

    let json_path = base.with_extension("json");
    let document = json::to_value(trie.root());
    let mut text = serde_json::to_string_pretty(&document)?;
    text.push('\n');
    fs::write(&json_path, text)?;
    log::info!("wrote {}", json_path.display());

    let graph = viz::project(&trie, rankdir);
    let dot_path = base.with_extension("gv");
    fs::write(&dot_path, viz::to_dot(&graph))?;
    log::info!("wrote {}", dot_path.display());

    let renders = viz::render_formats(&dot_path, &base)?;

    Ok(ExportPaths {
        json: json_path,
        dot: dot_path,
        renders,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::MORSE_TABLE;
    use crate::Error;
    use std::process::Command;

    fn graphviz_available() -> bool {
        Command::new("dot")
            .arg("-V")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    #[test]
    fn test_export_writes_json_and_dot() {
        let dir = tempfile::tempdir().unwrap();
        let result = export(MORSE_TABLE, dir.path(), "morse", Rankdir::TopBottom);

        // Renderings depend on graphviz being installed; the document and
        // graph description must exist either way (no rollback)
        let json_path = dir.path().join("morse.json");
        let dot_path = dir.path().join("morse.gv");
        assert!(json_path.exists());
        assert!(dot_path.exists());

        let document: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        let parsed = json::from_value(&document).unwrap();
        let trie = MorseTrie::build(MORSE_TABLE.iter().copied()).unwrap();
        assert_eq!(&parsed, trie.root());

        let dot_text = fs::read_to_string(&dot_path).unwrap();
        assert!(dot_text.starts_with("digraph"));

        if graphviz_available() {
            let paths = result.unwrap();
            assert_eq!(paths.renders.len(), 3);
            for path in &paths.renders {
                assert!(path.exists());
            }
        }
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("deep");
        let _ = export(&[".-A"], &nested, "morse", Rankdir::TopBottom);
        assert!(nested.join("morse.json").exists());
    }

    #[test]
    fn test_export_rejects_bad_symbols_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let err = export(&["x.A"], dir.path(), "morse", Rankdir::TopBottom).unwrap_err();
        assert!(matches!(err, Error::InvalidSymbolFormat(_)));
        assert!(!dir.path().join("morse.json").exists());
        assert!(!dir.path().join("morse.gv").exists());
    }
}
