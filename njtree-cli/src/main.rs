mod cli;

use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use njtree_core::io::read_distance_csv;
use njtree_core::tree::{
    neighbor_joining, neighbor_joining_with, select_outlier, to_newick, write_matrix_csv,
    DistanceTable, Edge,
};

fn main() {
    env_logger::init();
    let args = cli::Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: cli::Args) -> Result<()> {
    let mut table = read_input(args.input.as_deref())?;

    // Everything is rendered into memory first; nothing reaches stdout
    // until the whole result exists.
    let mut buf: Vec<u8> = Vec::new();
    match args.command {
        cli::Commands::Edges => {
            let mut edges: Vec<Edge> = Vec::new();
            neighbor_joining_with(&mut table, |e| edges.push(*e))?;
            for edge in &edges {
                writeln!(
                    buf,
                    "{},{},{:.2}",
                    table.name(edge.a)?,
                    table.name(edge.b)?,
                    edge.length
                )?;
            }
        }
        cli::Commands::Newick { outlier } => {
            let graph = neighbor_joining(&mut table)?;
            let id = select_outlier(&table, outlier.as_deref())?;
            let text = to_newick(&table, &graph, id)?;
            writeln!(buf, "{text}")?;
        }
        cli::Commands::Matrix => {
            neighbor_joining(&mut table)?;
            write_matrix_csv(&table, &mut buf)?;
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(&buf)?;
    out.flush()?;
    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<DistanceTable> {
    let table = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            read_distance_csv(file)?
        }
        None => read_distance_csv(io::stdin().lock())?,
    };
    Ok(table)
}
