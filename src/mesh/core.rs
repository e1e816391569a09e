// internal modules
use crate::mesh::{Element, ElementKind, Node, NodeString};
use crate::utils::*;

// standard library
use std::collections::BTreeMap;

// external crates
use serde::Serialize;

/// Complete representation of a 2DM mesh
///
/// Nodes and elements are stored in file order. Files read through the
/// [readers](crate::readers) are guaranteed to have consecutive IDs starting
/// at 1 (or 0 for zero-indexed meshes), which allows ID lookups by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mesh {
    /// Name from the `MESHNAME`/`GM` card, if any
    pub name: Option<String>,
    /// Declared `NUM_MATERIALS_PER_ELEM`, if any
    pub materials_per_element: Option<usize>,
    /// IDs start at 0 rather than 1
    pub zero_index: bool,
    /// All `ND` nodes
    pub nodes: Vec<Node>,
    /// All element definitions
    pub elements: Vec<Element>,
    /// All complete node strings
    pub node_strings: Vec<NodeString>,
}

impl Mesh {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Number of nodes in the mesh
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements in the mesh
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Number of node strings in the mesh
    pub fn num_node_strings(&self) -> usize {
        self.node_strings.len()
    }

    /// Number of materials per element
    ///
    /// The declared value if there is one, otherwise inferred from the first
    /// element, and zero for a mesh with no elements.
    pub fn num_materials(&self) -> usize {
        match self.materials_per_element {
            Some(n) => n,
            None => self
                .elements
                .first()
                .map(|e| e.num_materials())
                .unwrap_or(0),
        }
    }

    /// Find a node by its ID
    ///
    /// ```rust
    /// # use mesh2dm::mesh::{Mesh, Node};
    /// let mut mesh = Mesh::new();
    /// mesh.nodes.push(Node { id: 1, x: 0.0, y: 0.0, z: 0.0 });
    /// mesh.nodes.push(Node { id: 2, x: 1.0, y: 0.0, z: 0.0 });
    /// assert_eq!(mesh.node(2).unwrap().x, 1.0);
    /// assert!(mesh.node(3).is_none());
    /// ```
    pub fn node(&self, id: i64) -> Option<&Node> {
        match self.position(id).and_then(|i| self.nodes.get(i)) {
            Some(node) if node.id == id => Some(node),
            _ => self.nodes.iter().find(|n| n.id == id),
        }
    }

    /// Find an element by its ID
    pub fn element(&self, id: i64) -> Option<&Element> {
        match self.position(id).and_then(|i| self.elements.get(i)) {
            Some(element) if element.id == id => Some(element),
            _ => self.elements.iter().find(|e| e.id == id),
        }
    }

    /// Find a node string by name
    pub fn node_string(&self, name: &str) -> Option<&NodeString> {
        self.node_strings
            .iter()
            .find(|ns| ns.name.as_deref() == Some(name))
    }

    /// Horizontal extent of the mesh as `[min_x, max_x, min_y, max_y]`
    ///
    /// Returns `None` for a mesh without any nodes.
    pub fn extent(&self) -> Option<[f64; 4]> {
        let first = self.nodes.first()?;
        let init = [first.x, first.x, first.y, first.y];

        Some(self.nodes.iter().fold(init, |[x0, x1, y0, y1], n| {
            [x0.min(n.x), x1.max(n.x), y0.min(n.y), y1.max(n.y)]
        }))
    }

    /// Number of elements of each kind present in the mesh
    pub fn element_counts(&self) -> BTreeMap<ElementKind, usize> {
        let mut counts = BTreeMap::new();
        for element in &self.elements {
            *counts.entry(element.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Expected index for an ID with consecutive numbering
    fn position(&self, id: i64) -> Option<usize> {
        let offset = if self.zero_index { 0 } else { 1 };
        id.checked_sub(offset).and_then(|i| usize::try_from(i).ok())
    }
}

impl std::fmt::Display for Mesh {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = self.name.as_deref().unwrap_or("Unnamed mesh");
        let mut s = f!("Mesh \"{name}\" {{\n");
        s += &f!("    nodes: {}\n", self.num_nodes());
        s += &f!("    elements: {}\n", self.num_elements());
        s += &f!("    node strings: {}\n", self.num_node_strings());
        s += &f!("    materials per element: {}\n}}", self.num_materials());
        write!(f, "{}", s)
    }
}
