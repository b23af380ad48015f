//! Command-line interface for treexport.
//!
//! This binary walks a directory tree, renders it as an ASCII diagram, and
//! routes the result to the clipboard (default), a file, or stdout. Status
//! messages go to stderr so stdout stays clean for the tree itself.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use treexport::output::{Destination, deliver};
use treexport::{TreexportBuilder, TreexportOptions, treexport};

/// treexport — export a directory structure as an ASCII tree
#[derive(Parser)]
#[command(name = "treexport", version, about, long_about = None)]
struct Cli {
    /// Directory to export
    directory: PathBuf,

    /// Write output to FILE (default: copy to clipboard)
    #[arg(short, long, value_name = "FILE", conflicts_with = "print")]
    file: Option<PathBuf>,

    /// Maximum depth to traverse
    #[arg(short, long)]
    depth: Option<usize>,

    /// Include hidden files and directories
    #[arg(short, long)]
    all: bool,

    /// Print to stdout instead of the clipboard
    #[arg(short, long)]
    print: bool,
}

impl Cli {
    fn into_parts(self) -> (TreexportOptions, Destination) {
        let mut builder = TreexportBuilder::new(self.directory).include_hidden(self.all);

        builder = if let Some(depth) = self.depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        let destination = if let Some(path) = self.file {
            Destination::File(path)
        } else if self.print {
            Destination::Stdout
        } else {
            Destination::Clipboard
        };

        (builder.build(), destination)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, destination) = cli.into_parts();

    eprintln!("Generating folder structure...");
    let result = match treexport(options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    match destination {
        Destination::File(path) => {
            if let Err(e) = deliver(&result.tree, &Destination::File(path.clone())) {
                eprintln!("Error writing to file: {}", e);
                exit(1);
            }
            eprintln!("Tree structure saved to '{}'", path.display());
        }
        Destination::Stdout => {
            if let Err(e) = deliver(&result.tree, &Destination::Stdout) {
                eprintln!("Error: {}", e);
                exit(1);
            }
        }
        Destination::Clipboard => match deliver(&result.tree, &Destination::Clipboard) {
            Ok(()) => {
                eprintln!(
                    "Tree structure copied to clipboard! ({} items)",
                    result.entries
                );
            }
            Err(e) => {
                // Still a usable run without a clipboard; show the tree.
                eprintln!("Error copying to clipboard: {}", e);
                eprintln!("Falling back to print:");
                println!("{}", result.tree);
            }
        },
    }
}
