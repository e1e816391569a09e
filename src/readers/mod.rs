//! Readers for complete 2DM files
//!
//! The [MeshReader] drives the [line parsers](crate::parsers) over a whole
//! file and checks everything that needs more than one line to validate.
//! Most of the time the convenience functions below are all that is needed.

// internal modules
use crate::mesh::Mesh;

// standard library
use std::path::Path;

// external crates
use anyhow::Result;

// files under the readers module
mod mesh_file;

// inline important the reader types for a nice API
#[doc(inline)]
pub use crate::readers::mesh_file::{MeshReader, ParseOptions};

/// Read a mesh from a 2DM file with default options
///
/// Returns a result containing the [Mesh] extracted from the file at `path`
/// by the parser. Zero-indexed IDs are rejected and material IDs may be
/// floats.
///
/// - `path` - Path to the 2DM file, can be [&str], [String], [Path], etc...
///
/// Example
/// ```rust
/// // Read every node, element, and node string in the file
/// let mesh = mesh2dm::read_2dm("./data/meshes/channel.2dm").unwrap();
/// # assert_eq!(mesh.num_nodes(), 12);
/// ```
pub fn read_2dm<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    read_2dm_with(path, ParseOptions::default())
}

/// Read a mesh from a 2DM file with explicit parse options
///
/// - `path` - Path to the 2DM file, can be [&str], [String], [Path], etc...
/// - `options` - Zero-indexing and material ID handling
///
/// Example
/// ```rust
/// # use mesh2dm::readers::ParseOptions;
/// // Only accept integer material IDs
/// let options = ParseOptions {
///     allow_float_matid: false,
///     ..Default::default()
/// };
/// let mesh = mesh2dm::read_2dm_with("./data/meshes/channel.2dm", options).unwrap();
/// # assert!(mesh.elements.iter().all(|e| e.materials.iter().all(|m| !m.is_float())));
/// ```
pub fn read_2dm_with<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Mesh> {
    let path: &Path = Path::new(path.as_ref());
    let mut reader = MeshReader::with_options(options);
    reader.disable_progress();
    reader.parse(path)
}
