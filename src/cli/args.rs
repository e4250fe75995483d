use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docstamp", version, about = "Docblock annotator for PHP sources")]
pub struct Cli {
    /// Files or directories to annotate (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// A line to ensure is present in matching docblocks (repeatable)
    #[arg(long = "comment", short = 'c', value_name = "LINE")]
    pub comments: Vec<String>,

    /// Visibility levels to target (public, protected, private)
    #[arg(long, value_delimiter = ',', value_name = "VIS")]
    pub visibility: Vec<String>,

    /// Declaration kinds to target (method, property, constant, class,
    /// interface, trait, enum, enum_case, function, free_constant)
    #[arg(long, value_delimiter = ',', value_name = "KIND")]
    pub kind: Vec<String>,

    /// Do not descend into subdirectories
    #[arg(long)]
    pub no_recursive: bool,

    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Read one source from stdin and write the result to stdout
    #[arg(long)]
    pub stdin: bool,

    /// Emit the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}
