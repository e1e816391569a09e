//! Command line tool to inspect 2DM meshes
//!
//! Reads and validates a 2DM mesh, then prints a summary of what is in it.
//! Saves opening the mesh in SMS or similar just to check a few simple
//! properties.
//!
//! # Usage
//!
//! ```text
//! Usage: meshinfo <file> [options]
//! ```
//!
//! Help is printed with the `-h` flag, and `--help` will show examples, default
//! values, examples, and any important behaviour.
//!
//! ## Options
//!
//! By default a summary of the mesh is printed, i.e. the number of nodes,
//! elements by type, node strings, and the horizontal extent.
//!
//! ```bash
//! # Print a summary of the mesh
//! meshinfo channel.2dm
//! ```
//!
//! ### List the node strings
//!
//! Node strings are often used for boundary conditions, so it can be useful to
//! see exactly which nodes they run through.
//!
//! ```bash
//! meshinfo channel.2dm --strings
//! ```
//!
//! ### Convert to JSON file
//!
//! The whole mesh can be dumped to JSON for use in other languages. The file
//! name defaults to 'mesh.json'.
//!
//! ```bash
//! # Output a file named 'mesh.json'
//! meshinfo channel.2dm --json
//!
//! # Output a file named 'channel.json'
//! meshinfo channel.2dm --json channel.json
//! ```
//!
//! ### Parsing options
//!
//! Zero-indexed meshes are rejected unless `--zero-index` is given, and
//! floating point material IDs are rejected with `--no-float-matid`.
//!

// standard libraries
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use mesh2dm::mesh::{Mesh, NodeString};
use mesh2dm::readers::{MeshReader, ParseOptions};
use mesh2dm::utils::*;

// external crates
use anyhow::Result;
use clap::{arg, Parser};
use itertools::Itertools;
use log::*;

#[doc(hidden)]
fn main() -> Result<()> {
    // set up the command line interface and match arguments
    let cli: Cli = Cli::parse();

    // set up logging (+2 to make 'Info' the default)
    let verbosity = cli.verbose as usize + 2;
    logging_init(verbosity, cli.quiet);

    // Try to read the mesh
    info!("Reading {}", &cli.file);
    let mut reader = MeshReader::with_options(ParseOptions {
        allow_zero_index: cli.zero_index,
        allow_float_matid: !cli.no_float_matid,
    });
    if cli.quiet || cli.verbose > 0 {
        reader.disable_progress();
    }
    let mesh = reader.parse(Path::new(&cli.file))?;

    // Summary goes to stdout so it can be piped
    println!("{}", summary(&mesh));

    if cli.strings {
        println!("{}", node_string_list(&mesh.node_strings));
    }

    if let Some(output) = &cli.json {
        write_json(&mesh, output)?;
    }

    Ok(())
}

/// Summarise a 2DM mesh
///
/// Reads in a 2DM mesh file, checking every line along the way, and prints
/// a summary of the contents.
///
/// Use --strings to list the nodes of every node string, and --json to dump
/// the full mesh to a JSON file.
///
/// Examples
/// --------
///
///  Typical use
///     $ meshinfo channel.2dm
///
///  List all node strings
///     $ meshinfo channel.2dm --strings
///
///  Write the mesh to 'channel.json'
///     $ meshinfo channel.2dm --json channel.json
///
///  Read a mesh numbered from 0
///     $ meshinfo channel.2dm --zero-index
///
#[doc(hidden)]
#[derive(Parser)]
#[command(
    verbatim_doc_comment,
    arg_required_else_help(true),
    before_help(banner()),
    after_help("Typical use: meshinfo channel.2dm --strings\n\nNOTE: --help shows more detail and examples"),
    term_width(70),
    hide_possible_values(true),
    override_usage("meshinfo <file> [options]")
)]
struct Cli {
    // * Positional
    /// Path to input 2DM file
    #[arg(name = "file")]
    file: String,

    /// List the nodes of every node string
    #[arg(help_heading("Output options"))]
    #[arg(short, long)]
    strings: bool,

    /// Write the full mesh to JSON ('mesh.json' default)
    ///
    /// The file name may be given directly after the flag, otherwise the
    /// mesh is written to 'mesh.json'.
    #[arg(help_heading("Output options"))]
    #[arg(short, long)]
    #[arg(value_name = "path")]
    #[arg(num_args = 0..=1, default_missing_value = "mesh.json")]
    json: Option<String>,

    /// Allow IDs to start from 0
    ///
    /// By default any ID of 0 is an error. With this flag meshes numbered
    /// from 0 or from 1 are both accepted.
    #[arg(help_heading("Parse options"))]
    #[arg(long)]
    zero_index: bool,

    /// Only accept integer material IDs
    ///
    /// Some tools write floats as material IDs, which are read as floats by
    /// default. With this flag they are an error.
    #[arg(help_heading("Parse options"))]
    #[arg(long)]
    no_float_matid: bool,

    // * Flags
    /// Verbose logging (-v, -vv)
    ///
    /// If specified, the default log level of INFO is increased to DEBUG (-v)
    /// or TRACE (-vv). Errors and Warnings are always logged unless in quiet
    /// (-q) mode.
    #[arg(short, long)]
    #[arg(action = clap::ArgAction::Count)]
    verbose: u8,

    /// Supress all log output (overrules --verbose)
    #[arg(short, long)]
    quiet: bool,
}

/// Sets up logging at runtime to allow for multiple verbosity levels
#[doc(hidden)]
fn logging_init(verbosity: usize, quiet: bool) {
    stderrlog::new()
        .modules(vec![module_path!(), "mesh2dm"])
        .quiet(quiet)
        .verbosity(verbosity)
        .show_level(false)
        .color(stderrlog::ColorChoice::Never)
        .timestamp(stderrlog::Timestamp::Off)
        .init()
        .unwrap();
}

/// Creates a banner for the command line
#[doc(hidden)]
fn banner() -> String {
    let mut s = f!("{:-<1$}\n", "", 70);
    s += &f!("{:^70}\n", "Mesh2dm :: MeshInfo");
    s += &f!("{:-<1$}", "", 70);
    s
}

#[doc(hidden)]
/// Helper function for cleaning up file IO boilerplate
fn get_writer(path: &str) -> Result<BufWriter<File>> {
    let file: File = File::create(path)?;
    trace!("New bufwriter for {path}");
    Ok(BufWriter::new(file))
}

#[doc(hidden)]
/// Write the mesh to json
fn write_json(mesh: &Mesh, output: &str) -> Result<()> {
    info!("Writing JSON format to {}", output);
    let mut writer = get_writer(output)?;
    serde_json::to_writer_pretty(&mut writer, mesh)?;
    writer.flush()?;
    Ok(())
}

#[doc(hidden)]
/// Everything worth knowing at a glance
fn summary(mesh: &Mesh) -> String {
    let mut s = f!("{mesh}\n");

    if mesh.num_elements() > 0 {
        s += "\nElement types:\n";
        for (kind, count) in mesh.element_counts() {
            s += &f!("    {kind}: {count}\n");
        }
    }

    if let Some([min_x, max_x, min_y, max_y]) = mesh.extent() {
        s += "\nExtent:\n";
        s += &f!("    x: {} to {}\n", min_x.sci(5, 2), max_x.sci(5, 2));
        s += &f!("    y: {} to {}\n", min_y.sci(5, 2), max_y.sci(5, 2));
    }

    if mesh.zero_index {
        s += "\nIDs are numbered from 0\n";
    }
    s
}

#[doc(hidden)]
/// Node strings with their nodes wrapped to a sensible width
fn node_string_list(node_strings: &[NodeString]) -> String {
    if node_strings.is_empty() {
        return "No node strings found".to_string();
    }

    node_strings
        .iter()
        .enumerate()
        .map(|(i, ns)| {
            let name = ns.name.as_deref().unwrap_or("unnamed");
            let nodes = textwrap::indent(&textwrap::fill(&ns.nodes.iter().join(" "), 76), "    ");
            f!("Node string {} \"{name}\" ({} nodes):\n{nodes}", i + 1, ns.num_nodes())
        })
        .join("\n")
}
