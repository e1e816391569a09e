//! Writing meshes back out to 2DM files
//!
//! The [MeshWriter] produces the layout most 2DM tools expect, with
//! everything in blocks:
//!
//! | Block      | Cards                                   |
//! | ---------- | --------------------------------------- |
//! | header     | `MESH2D`, `MESHNAME`, `NUM_MATERIALS_PER_ELEM` |
//! | nodes      | `ND`                                    |
//! | elements   | `E2L`, `E3L`, `E3T`, `E4Q`, `E6T`, `E8Q`, `E9Q` |
//! | strings    | `NS`                                    |
//!
//! Coordinates and float material IDs are written in scientific notation with
//! a fixed number of decimal places, 8 unless told otherwise.
//!
//! # Example
//!
//! ```rust
//! # use mesh2dm::writer::MeshWriter;
//! // Read in a mesh from a file
//! let mesh = mesh2dm::read_2dm("./data/meshes/channel.2dm").unwrap();
//!
//! // Set up a writer with a signature and fewer decimal places
//! let writer = MeshWriter {
//!     decimals: 3,
//!     signature: Some("generated by meshfmt".to_string()),
//!     ..Default::default()
//! };
//!
//! // Write to file, or just build the content
//! // writer.write_file(&mesh, "channel_fmt.2dm").unwrap();
//! let content = writer.file_content(&mesh).unwrap();
//! # assert!(content.starts_with("MESH2D # generated by meshfmt\n"));
//! ```

// internal modules
use crate::mesh::{Element, Mesh, Node, NodeString, DEFAULT_FOLD};
use crate::utils::*;

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// external crates
use anyhow::{bail, Context, Result};
use itertools::Itertools;
use log::{debug, trace, warn};

/// Write a mesh to a 2DM file with default settings
///
/// - `mesh` - The mesh to write
/// - `path` - Path to the output file, can be [&str], [String], [Path], etc...
///
/// Example
/// ```rust,no_run
/// let mesh = mesh2dm::read_2dm("./data/meshes/channel.2dm").unwrap();
/// mesh2dm::write_2dm(&mesh, "channel_copy.2dm").unwrap();
/// ```
pub fn write_2dm<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    MeshWriter::new().write_file(mesh, path)
}

/// Configurable writer for 2DM files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshWriter {
    /// Decimal places for coordinates and float material IDs
    pub decimals: usize,
    /// Comment written after the `MESH2D` identifier, may be multi-line
    pub signature: Option<String>,
    /// Write float material IDs, otherwise they are an error
    pub allow_float_matid: bool,
    /// Node IDs per `NS` line, where 0 puts every node string on one line
    pub fold: usize,
}

impl Default for MeshWriter {
    fn default() -> Self {
        Self {
            decimals: 8,
            signature: None,
            allow_float_matid: true,
            fold: DEFAULT_FOLD,
        }
    }
}

// Public API
impl MeshWriter {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Write the mesh to a file at `path`
    pub fn write_file<P: AsRef<Path>>(&self, mesh: &Mesh, path: P) -> Result<()> {
        let path = path.as_ref();
        let f = File::create(path).with_context(|| f!("Unable to create {}", path.display()))?;
        self.write(mesh, BufWriter::new(f))
            .with_context(|| f!("Failed to write mesh to {}", path.display()))
    }

    /// Write the mesh to anything implementing [Write]
    ///
    /// Lines are written one at a time, so this is fine for large meshes.
    pub fn write<W: Write>(&self, mesh: &Mesh, mut writer: W) -> Result<()> {
        debug!("Writing {} nodes", mesh.num_nodes());
        writer.write_all(self.header(mesh).as_bytes())?;

        for node in &mesh.nodes {
            writeln!(writer, "{}", self.node_line(node))?;
        }

        debug!("Writing {} elements", mesh.num_elements());
        let num_materials = mesh.num_materials();
        for element in &mesh.elements {
            writeln!(writer, "{}", self.element_line(element, num_materials)?)?;
        }

        debug!("Writing {} node strings", mesh.num_node_strings());
        for node_string in &mesh.node_strings {
            for line in self.node_string_lines(node_string) {
                writeln!(writer, "{line}")?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    /// Generate file content as a string (not for large meshes)
    ///
    /// Fails for the same elements as [MeshWriter::element_line].
    ///
    /// ```rust
    /// # use mesh2dm::mesh::{Mesh, Node};
    /// # use mesh2dm::writer::MeshWriter;
    /// let mut mesh = Mesh::new();
    /// mesh.nodes.push(Node { id: 1, x: 0.5, y: -2.0, z: 0.0 });
    ///
    /// let writer = MeshWriter { decimals: 2, ..Default::default() };
    /// assert_eq!(
    ///     writer.file_content(&mesh).unwrap(),
    ///     "MESH2D\nNUM_MATERIALS_PER_ELEM 0\nND 1  5.00e-01 -2.00e+00  0.00e+00\n"
    /// );
    /// ```
    pub fn file_content(&self, mesh: &Mesh) -> Result<String> {
        let mut s = self.header(mesh);
        for node in &mesh.nodes {
            s += &f!("{}\n", self.node_line(node));
        }
        let num_materials = mesh.num_materials();
        for element in &mesh.elements {
            s += &f!("{}\n", self.element_line(element, num_materials)?);
        }
        for node_string in &mesh.node_strings {
            for line in self.node_string_lines(node_string) {
                s += &f!("{line}\n");
            }
        }
        Ok(s)
    }
}

/// Formatting of the individual blocks
impl MeshWriter {
    /// `MESH2D` identifier, signature, name and material count
    pub fn header(&self, mesh: &Mesh) -> String {
        let mut s = String::from("MESH2D");

        // first line of the signature shares the MESH2D line
        match &self.signature {
            Some(signature) if !signature.is_empty() => {
                s += &f!(" {}\n", signature.lines().map(|l| f!("# {l}")).join("\n"));
            }
            _ => s.push('\n'),
        }

        if let Some(name) = &mesh.name {
            s += &f!("MESHNAME \"{name}\"\n");
        }

        s += &f!("NUM_MATERIALS_PER_ELEM {}\n", mesh.num_materials());
        trace!("Header written");
        s
    }

    /// `ND` line with scientific coordinates
    pub fn node_line(&self, node: &Node) -> String {
        f!(
            "ND {} {} {} {}",
            node.id,
            format_float(node.x, self.decimals),
            format_float(node.y, self.decimals),
            format_float(node.z, self.decimals)
        )
    }

    /// Element line with exactly `num_materials` material IDs
    ///
    /// Extra materials are dropped with a warning. Too few materials, or a
    /// float material when they are not allowed, is an error since the line
    /// would not match the `NUM_MATERIALS_PER_ELEM` header.
    pub fn element_line(&self, element: &Element, num_materials: usize) -> Result<String> {
        let found = element.num_materials();
        if found < num_materials {
            bail!(
                "Element {} has {found} materials, mesh requires {num_materials}",
                element.id
            );
        } else if found > num_materials {
            warn!(
                "Element {}: {} extra materials dropped (mesh requires {num_materials})",
                element.id,
                found - num_materials
            );
        }

        let materials = &element.materials[..num_materials];
        if !self.allow_float_matid && materials.iter().any(|m| m.is_float()) {
            bail!("Element {} has a float material ID, only integers allowed", element.id);
        }

        Ok(f!(
            "{} {} {}{}",
            element.kind,
            element.id,
            element.nodes.iter().join(" "),
            materials
                .iter()
                .map(|m| f!(" {}", m.to_scientific(self.decimals)))
                .join("")
        ))
    }

    /// `NS` lines, folded to the configured width
    ///
    /// Node strings that will not read back as written are still written, but
    /// with a warning.
    pub fn node_string_lines(&self, node_string: &NodeString) -> Vec<String> {
        for problem in read_back_problems(node_string) {
            warn!("{problem}");
        }
        node_string.to_lines(self.fold)
    }
}

/// Reasons a node string would not be read back the way it is written
fn read_back_problems(node_string: &NodeString) -> Vec<String> {
    let mut problems = Vec::new();

    if let Some(name) = &node_string.name {
        if name.contains(char::is_whitespace) {
            problems.push(f!(
                "Node string name \"{name}\" will only read back up to the first space"
            ));
        }
    }

    // "-0" is just zero, so nothing marks the end of the node string
    if node_string.nodes.last() == Some(&0) {
        problems.push(f!(
            "Node string \"{}\" ends on node 0 and will be discarded when read back",
            node_string.name.as_deref().unwrap_or("unnamed")
        ));
    }

    problems
}
