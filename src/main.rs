//! morsegraph CLI - Builds and renders the Morse code trie
//!
//! Constructs the ITU-R M.1677 prefix tree and writes a JSON document plus
//! Graphviz outputs (.gv, .pdf, .png, .svg) into the output directory.

use clap::Parser;
use morsegraph::{export, Rankdir, MORSE_TABLE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "morsegraph")]
#[command(about = "Builds and renders a trie of International Morse code (ITU-R M.1677)")]
#[command(version)]
struct Cli {
    /// Base filename for generated outputs
    #[arg(short, long, default_value = "morsegraph")]
    basename: String,

    /// Directory for generated outputs
    #[arg(short, long, default_value = "./output")]
    dir: PathBuf,

    /// Direction of the graph: TB, BT, LR or RL
    #[arg(short, long, default_value = "TB")]
    rankdir: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Reject a bad direction before anything touches the filesystem
    let rankdir: Rankdir = cli.rankdir.parse()?;

    export(MORSE_TABLE, &cli.dir, &cli.basename, rankdir)?;
    println!("Visualizations saved to '{}'", cli.dir.display());

    Ok(())
}
