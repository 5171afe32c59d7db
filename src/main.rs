//! myers-graph driver — renders the two documentation diagrams.
//!
//! Fixed inputs, no arguments: the classic and rhombic projections of the
//! edit graph for A="ABCABBA", B="CBABAC".

use std::fs;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};

use myers_graph::{draw_myers_graph, transform_classic, transform_rhombic};

fn run() -> Result<()> {
    fs::create_dir_all("doc/img").context("cannot create doc/img")?;

    draw_myers_graph(
        "Myers Diff Graph",
        20.0,
        "ABCABBA",
        "CBABAC",
        transform_classic,
        Path::new("doc/img/plot_classic.png"),
    )?;

    draw_myers_graph(
        "Myers Diff Rhombous Graph",
        0.0,
        "ABCABBA",
        "CBABAC",
        transform_rhombic,
        Path::new("doc/img/plot_classic_rhombous.png"),
    )?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
