// internal modules
use crate::mesh::{Mesh, NodeString};
use crate::parsers::{self, Card};
use crate::utils::*;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// external crates
use anyhow::{anyhow, bail, Context, Result};
use kdam::{Bar, BarBuilder, BarExt};
use log::{debug, trace, warn};

/// Options shared by every line parser
///
/// - `allow_zero_index` - IDs may start at 0 rather than 1
/// - `allow_float_matid` - material IDs that are not integers are read as floats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub allow_zero_index: bool,
    pub allow_float_matid: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_zero_index: false,
            allow_float_matid: true,
        }
    }
}

/// Reader for complete 2DM mesh files
///
/// Every line is handed to the appropriate line parser, and the results are
/// collected into a single [Mesh]. On top of the per-line checks the reader
/// makes sure that:
///     - The first meaningful line is the `MESH2D` format identifier
///     - Node and element IDs are consecutive, starting at 1 (or 0)
///     - Node strings split over several lines are joined back together
///
/// Notes:
///     - Comments and blank lines are skipped
///     - Cards not relevant to the mesh geometry are ignored
///     - Node strings left open at the end of the file are dropped
///
/// Example:
/// ```rust
/// # use mesh2dm::readers::MeshReader;
/// # use std::path::Path;
/// let mut reader = MeshReader::new();
/// reader.disable_progress();
/// let mesh = reader.parse(Path::new("./data/meshes/channel.2dm")).unwrap();
/// # assert_eq!(mesh.name.as_deref(), Some("channel"));
/// ```
#[derive(Debug, Default)]
pub struct MeshReader {
    /// Mesh being built up line by line
    mesh: Mesh,
    /// Flags passed on to the line parsers
    options: ParseOptions,
    /// Disable progress bar?
    disable_progress: bool,
    /// `MESH2D` identifier has been seen
    is_mesh2d_found: bool,
    /// Node IDs of a node string still waiting for its terminator
    open_node_string: Vec<i64>,
    /// Last node ID, for checking consecutive numbering
    last_node: Option<i64>,
    /// Last element ID, for checking consecutive numbering
    last_element: Option<i64>,
}

/// High level methods
impl MeshReader {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Reader using the given parse options
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Parses a full mesh from a 2DM file
    pub fn parse(&mut self, path: &Path) -> Result<Mesh> {
        let file = File::open(path).with_context(|| f!("Could not open {}", path.display()))?;
        self.parse_lines(BufReader::new(file))
            .with_context(|| f!("Failed to read mesh from {}", path.display()))
    }

    /// Parses a full mesh from anything that provides lines of 2DM text
    ///
    /// ```rust
    /// # use mesh2dm::readers::MeshReader;
    /// let text = "MESH2D\nND 1 0.0 0.0 0.0\nND 2 1.0 0.0 0.0\nE2L 1 1 2 1\n";
    /// let mut reader = MeshReader::new();
    /// reader.disable_progress();
    /// let mesh = reader.parse_lines(text.as_bytes()).unwrap();
    /// assert_eq!((mesh.num_nodes(), mesh.num_elements()), (2, 1));
    /// ```
    pub fn parse_lines<R: BufRead>(&mut self, reader: R) -> Result<Mesh> {
        self.reset();
        let mut progress_bar = self.init_progress_bar();

        debug!("Parsing mesh data");

        if !self.disable_progress {
            progress_bar.refresh()?;
        };

        for (index, line) in reader.lines().enumerate() {
            progress_bar.update(1)?;
            let line = line.with_context(|| f!("Could not read line {}", index + 1))?;
            self.parse_line(&line)
                .with_context(|| f!("Error on line {}: \"{}\"", index + 1, line.trim()))?;
        }

        // need an extra line for clean spacing if the progress bar is printed
        if !self.disable_progress {
            eprintln!()
        };

        self.finish()
    }

    /// Setter for the allow_zero_index parse option
    pub fn allow_zero_index(&mut self, allow: bool) {
        self.options.allow_zero_index = allow;
    }

    /// Setter for the allow_float_matid parse option
    pub fn allow_float_matid(&mut self, allow: bool) {
        self.options.allow_float_matid = allow;
    }

    /// Do not print the tqdm progress indicators
    pub fn disable_progress(&mut self) {
        debug!("Progress bar disabled");
        self.disable_progress = true;
    }
}

/// Line handling
impl MeshReader {
    /// Dispatch a single line to the relevant parser
    fn parse_line(&mut self, line: &str) -> Result<()> {
        let data = clean_line(line);
        if data.is_empty() {
            return Ok(());
        }

        if !self.is_mesh2d_found {
            if data.starts_with("MESH2D") {
                trace!("Found MESH2D format identifier");
                self.is_mesh2d_found = true;
                return Ok(());
            }
            bail!("File is not a 2DM mesh file, expected MESH2D");
        }

        match Card::from_line(data) {
            Some(Card::Node) => self.parse_node(data)?,
            Some(Card::Element(_)) => self.parse_element(data)?,
            Some(Card::NodeString) => self.parse_node_string(data)?,
            Some(Card::MeshName) => {
                let name = mesh_name(data)?;
                debug!("Mesh name: {name}");
                self.mesh.name = Some(name);
            }
            Some(Card::NumMaterials) => {
                let n = num_materials(data)?;
                debug!("Materials per element: {n}");
                self.mesh.materials_per_element = Some(n);
            }
            Some(Card::Mesh2d) => debug!("Ignoring repeated MESH2D card"),
            Some(Card::Unsupported) | None => debug!("Skipping unsupported card: {data}"),
        }

        Ok(())
    }

    fn parse_node(&mut self, line: &str) -> Result<()> {
        let node = parsers::parse_node(line, self.options.allow_zero_index)?;

        let n_fields = parsers::chunks_from_line(line).len();
        if n_fields > 5 {
            warn!("Ignoring {} unused field(s) on node {}", n_fields - 5, node.id);
        }

        self.last_node = Some(self.check_consecutive(self.last_node, node.id, "Node")?);
        self.mesh.nodes.push(node);
        Ok(())
    }

    fn parse_element(&mut self, line: &str) -> Result<()> {
        let element = parsers::parse_element(
            line,
            self.options.allow_zero_index,
            self.options.allow_float_matid,
        )?;

        if let Some(n) = self.mesh.materials_per_element {
            if element.num_materials() < n {
                warn!(
                    "Element {} has {} material(s), expected {}",
                    element.id,
                    element.num_materials(),
                    n
                );
            }
        }

        self.last_element = Some(self.check_consecutive(self.last_element, element.id, "Element")?);
        self.mesh.elements.push(element);
        Ok(())
    }

    fn parse_node_string(&mut self, line: &str) -> Result<()> {
        let status = parsers::parse_node_string(
            line,
            self.options.allow_zero_index,
            &mut self.open_node_string,
        )?;

        if status.is_closed {
            let name = match unquote(&status.label) {
                "" => None,
                name => Some(name.to_string()),
            };
            let node_string = NodeString {
                nodes: std::mem::take(&mut self.open_node_string),
                name,
            };
            trace!("Closed {node_string}");
            self.mesh.node_strings.push(node_string);
        }
        Ok(())
    }

    /// IDs must follow on from the previous one, or start the numbering
    fn check_consecutive(&self, last: Option<i64>, id: i64, entity: &str) -> Result<i64> {
        let expected = match last {
            Some(last) => last + 1,
            None => i64::from(!self.options.allow_zero_index),
        };

        // a zero-indexed option still accepts meshes numbered from 1
        let is_first_one_indexed = last.is_none() && id == 1;
        if id != expected && !is_first_one_indexed {
            bail!("{entity} IDs have holes, expected {expected} but found {id}");
        }
        Ok(id)
    }
}

/// Setup and wrap up
impl MeshReader {
    /// Clear anything left over from a previous parse
    fn reset(&mut self) {
        self.mesh = Mesh::new();
        self.is_mesh2d_found = false;
        self.open_node_string.clear();
        self.last_node = None;
        self.last_element = None;
    }

    /// Final checks, then hand the mesh over to the caller
    fn finish(&mut self) -> Result<Mesh> {
        if !self.is_mesh2d_found {
            bail!("MESH2D tag not found");
        }

        if !self.open_node_string.is_empty() {
            warn!(
                "Discarding unterminated node string of {} node(s) at end of file",
                self.open_node_string.len()
            );
            self.open_node_string.clear();
        }

        // only treat the mesh as zero indexed if it actually is
        self.mesh.zero_index = self.mesh.nodes.first().map(|n| n.id) == Some(0)
            || self.mesh.elements.first().map(|e| e.id) == Some(0);

        debug!(
            "Found {} nodes, {} elements, {} node strings",
            self.mesh.num_nodes(),
            self.mesh.num_elements(),
            self.mesh.num_node_strings()
        );

        // do not care about the reader, so give the mesh to the caller
        Ok(std::mem::take(&mut self.mesh))
    }

    /// Initialise the progress bar, if wanted
    fn init_progress_bar(&self) -> Bar {
        BarBuilder::default()
            .delay(0.0)
            .unit(" lines")
            .unit_scale(true)
            .disable(self.disable_progress)
            .build()
            .unwrap()
    }
}

/// Name from a `MESHNAME`/`GM` card, quoted or otherwise
fn mesh_name(line: &str) -> Result<String> {
    let mut quoted = line.splitn(3, '"');
    if let (Some(_), Some(name)) = (quoted.next(), quoted.next()) {
        return Ok(name.to_string());
    }

    line.split_whitespace()
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Mesh name card without a name"))
}

/// Count from a `NUM_MATERIALS_PER_ELEM` card
fn num_materials(line: &str) -> Result<usize> {
    let field = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| anyhow!("NUM_MATERIALS_PER_ELEM card without a count"))?;
    let n = parsers::string_to_integer(field)?;
    usize::try_from(n).with_context(|| f!("Invalid number of materials per element: {n}"))
}
