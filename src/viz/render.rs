//! Rendering collaborator: drives the external Graphviz `dot` executable

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Image and document formats produced from the DOT description
const RENDER_FORMATS: &[&str] = &["pdf", "png", "svg"];

/// Render a written DOT file into every output format.
///
/// Invokes `dot -T<fmt> -o <base>.<fmt> <dot_path>` once per format and
/// returns the paths written. A missing `dot` executable surfaces as the
/// underlying IO error; a failed run surfaces its stderr. Failures are not
/// retried and leave any already-written outputs in place.
pub fn render_formats(dot_path: &Path, base: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(RENDER_FORMATS.len());

    for format in RENDER_FORMATS {
        let out_path = base.with_extension(format);
        log::debug!("rendering {}", out_path.display());

        let output = Command::new("dot")
            .arg(format!("-T{}", format))
            .arg("-o")
            .arg(&out_path)
            .arg(dot_path)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Render(format!(
                "dot -T{} exited with {}: {}",
                format,
                output.status,
                stderr.trim()
            )));
        }

        written.push(out_path);
    }

    Ok(written)
}
