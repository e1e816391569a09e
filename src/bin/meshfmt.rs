//! Command line tool to validate and reformat 2DM meshes
//!
//! Reads a 2DM mesh, checking every line along the way, and writes it back out
//! in a canonical layout. Comments, unsupported cards and unterminated node
//! strings are dropped.
//!
//! # Usage
//!
//! ```text
//! Usage: meshfmt <file> [options]
//! ```
//!
//! Help is printed with the `-h` flag, and `--help` will show examples, default
//! values, examples, and any important behaviour.
//!
//! ## Options
//!
//! By default the formatted mesh is written to 'formatted.2dm' with 8 decimal
//! places for all coordinates.
//!
//! ```bash
//! meshfmt channel.2dm
//! ```
//!
//! ### Change the output
//!
//! ```bash
//! # Write to 'clean.2dm' with 3 decimal places
//! meshfmt channel.2dm --output clean.2dm --decimals 3
//! ```
//!
//! ### Add a signature
//!
//! A comment can be added to the `MESH2D` line to mark where the file came
//! from.
//!
//! ```bash
//! meshfmt channel.2dm --signature "cleaned up for BASEMENT"
//! ```
//!
//! ### Only check the mesh
//!
//! Use `--check` to read and validate the mesh without writing anything.
//!

// standard libraries
use std::path::Path;

// crate modules
use mesh2dm::mesh::DEFAULT_FOLD;
use mesh2dm::readers::{MeshReader, ParseOptions};
use mesh2dm::utils::f;
use mesh2dm::writer::MeshWriter;

// external crates
use anyhow::Result;
use clap::{arg, Parser};
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
    info!(
        "  - {} nodes, {} elements, {} node strings",
        mesh.num_nodes(),
        mesh.num_elements(),
        mesh.num_node_strings()
    );

    if cli.check {
        info!("No problems found");
        return Ok(());
    }

    // Write the mesh back out
    let writer = MeshWriter {
        decimals: cli.decimals,
        signature: cli.signature.clone(),
        allow_float_matid: !cli.no_float_matid,
        fold: cli.fold,
    };

    info!("Writing to {}", cli.output);
    writer.write_file(&mesh, &cli.output)?;

    info!("Formatting complete");
    Ok(())
}

/// Validate and reformat a 2DM mesh
///
/// Reads in a 2DM mesh file, checking every line along the way, and writes
/// it back out in a consistent layout.
///
/// Coordinates and float material IDs are written in scientific notation
/// with --decimals decimal places. Node strings are folded to --fold node
/// IDs per line.
///
/// Examples
/// --------
///
///  Typical use
///     $ meshfmt channel.2dm
///
///  Change the output file and precision
///     $ meshfmt channel.2dm -o clean.2dm -d 3
///
///  Sign the output file
///     $ meshfmt channel.2dm --signature "cleaned up by me"
///
///  Just check for errors
///     $ meshfmt channel.2dm --check
///
#[doc(hidden)]
#[derive(Parser)]
#[command(
    verbatim_doc_comment,
    arg_required_else_help(true),
    before_help(banner()),
    after_help("Typical use: meshfmt channel.2dm -o clean.2dm\n\nNOTE: --help shows more detail and examples"),
    term_width(70),
    hide_possible_values(true),
    override_usage("meshfmt <file> [options]")
)]
struct Cli {
    // * Positional
    /// Path to input 2DM file
    #[arg(name = "file")]
    file: String,

    /// Name of output file ('formatted.2dm' default)
    #[arg(help_heading("Output options"))]
    #[arg(short, long)]
    #[arg(value_name = "path")]
    #[arg(default_value = "formatted.2dm")]
    output: String,

    /// Decimal places for floats (8 default)
    #[arg(help_heading("Output options"))]
    #[arg(short, long)]
    #[arg(value_name = "num")]
    #[arg(default_value = "8")]
    decimals: usize,

    /// Node IDs per NS line (10 default)
    ///
    /// Long node strings are split over several lines. Use 0 to keep every
    /// node string on a single line.
    #[arg(help_heading("Output options"))]
    #[arg(long)]
    #[arg(value_name = "num")]
    #[arg(default_value_t = DEFAULT_FOLD)]
    fold: usize,

    /// Comment to add to the MESH2D line
    #[arg(help_heading("Output options"))]
    #[arg(long)]
    #[arg(value_name = "text")]
    signature: Option<String>,

    /// Only check the mesh, do not write anything
    #[arg(help_heading("Output options"))]
    #[arg(long)]
    check: bool,

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
    s += &f!("{:^70}\n", "Mesh2dm :: MeshFmt");
    s += &f!("{:-<1$}", "", 70);
    s
}
