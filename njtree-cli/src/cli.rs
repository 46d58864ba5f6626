use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV distance matrix to read (standard input when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one line per synthesized edge: nodeA,nodeB,length
    Edges,

    /// Print the tree in Newick format, rooted at the outlier's neighbor
    Newick {
        /// Leaf to use as the rooting outlier (defaults to the leaf
        /// with the greatest total distance to the others)
        #[arg(short, long)]
        outlier: Option<String>,
    },

    /// Print the synthesized distance matrix as CSV
    Matrix,
}
