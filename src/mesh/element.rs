//! Mesh elements and their material IDs

// internal modules
use crate::utils::*;

// external crates
use itertools::Itertools;
use serde::Serialize;

/// The seven element cards of the 2DM format
///
/// | Card  | Shape                  | Nodes |
/// | ----- | ---------------------- | ----- |
/// | `E2L` | linear, 2-noded        | 2     |
/// | `E3L` | linear, 3-noded        | 3     |
/// | `E3T` | triangle, 3-noded      | 3     |
/// | `E4Q` | quadrilateral, 4-noded | 4     |
/// | `E6T` | triangle, 6-noded      | 6     |
/// | `E8Q` | quadrilateral, 8-noded | 8     |
/// | `E9Q` | quadrilateral, 9-noded | 9     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ElementKind {
    E2L,
    E3L,
    E3T,
    E4Q,
    E6T,
    E8Q,
    E9Q,
}

impl ElementKind {
    /// All element kinds, in order of increasing node count
    pub const ALL: [ElementKind; 7] = [
        ElementKind::E2L,
        ElementKind::E3L,
        ElementKind::E3T,
        ElementKind::E4Q,
        ElementKind::E6T,
        ElementKind::E8Q,
        ElementKind::E9Q,
    ];

    /// Look up an element card, `None` if it is not an element
    pub fn from_card(card: &str) -> Option<Self> {
        match card {
            "E2L" => Some(ElementKind::E2L),
            "E3L" => Some(ElementKind::E3L),
            "E3T" => Some(ElementKind::E3T),
            "E4Q" => Some(ElementKind::E4Q),
            "E6T" => Some(ElementKind::E6T),
            "E8Q" => Some(ElementKind::E8Q),
            "E9Q" => Some(ElementKind::E9Q),
            _ => None,
        }
    }

    /// The 2DM card keyword
    pub fn card(&self) -> &'static str {
        match self {
            ElementKind::E2L => "E2L",
            ElementKind::E3L => "E3L",
            ElementKind::E3T => "E3T",
            ElementKind::E4Q => "E4Q",
            ElementKind::E6T => "E6T",
            ElementKind::E8Q => "E8Q",
            ElementKind::E9Q => "E9Q",
        }
    }

    /// Number of nodes required by the card
    ///
    /// ```rust
    /// # use mesh2dm::mesh::ElementKind;
    /// assert_eq!(ElementKind::E4Q.num_nodes(), 4);
    /// assert_eq!(ElementKind::E3L.num_nodes(), ElementKind::E3T.num_nodes());
    /// ```
    pub fn num_nodes(&self) -> usize {
        match self {
            ElementKind::E2L => 2,
            ElementKind::E3L | ElementKind::E3T => 3,
            ElementKind::E4Q => 4,
            ElementKind::E6T => 6,
            ElementKind::E8Q => 8,
            ElementKind::E9Q => 9,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.card())
    }
}

/// Material ID of an element
///
/// Usually an integer category, but some 2DM flavours (BASEMENT 3.x for
/// example) store floating point values such as the element elevation. The
/// variant read from the file is always kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MaterialId {
    Int(i64),
    Float(f64),
}

impl MaterialId {
    /// True for floating point material values
    pub fn is_float(&self) -> bool {
        matches!(self, MaterialId::Float(_))
    }

    /// Value as a float regardless of variant
    pub fn as_f64(&self) -> f64 {
        match self {
            MaterialId::Int(i) => *i as f64,
            MaterialId::Float(v) => *v,
        }
    }

    /// Formatting used by the [MeshWriter](crate::writer::MeshWriter)
    ///
    /// Integers are written as-is, floats as scientific with `decimals`
    /// decimal places.
    pub fn to_scientific(&self, decimals: usize) -> String {
        match self {
            MaterialId::Int(i) => f!("{i}"),
            MaterialId::Float(v) => format_float(*v, decimals),
        }
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MaterialId::Int(i) => write!(f, "{i}"),
            // debug formatting keeps the decimal point, so 7.0 stays a float
            MaterialId::Float(v) => write!(f, "{v:?}"),
        }
    }
}

/// Representation of a single mesh element
///
/// The number of `nodes` always matches [ElementKind::num_nodes] for elements
/// produced by the parsers, while any number of `materials` may follow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    /// Card the element was defined with
    pub kind: ElementKind,
    /// Unique element ID
    pub id: i64,
    /// Node IDs making up the element
    pub nodes: Vec<i64>,
    /// Material IDs, in file order
    pub materials: Vec<MaterialId>,
}

impl Element {
    /// Number of materials defined for this element
    pub fn num_materials(&self) -> usize {
        self.materials.len()
    }

    /// Canonical 2DM line for the element, without a line ending
    ///
    /// ```rust
    /// # use mesh2dm::mesh::{Element, ElementKind, MaterialId};
    /// let element = Element {
    ///     kind: ElementKind::E3T,
    ///     id: 1,
    ///     nodes: vec![1, 2, 3],
    ///     materials: vec![MaterialId::Int(1), MaterialId::Float(7.0)],
    /// };
    /// assert_eq!(element.to_line(), "E3T 1 1 2 3 1 7.0");
    /// ```
    pub fn to_line(&self) -> String {
        let mut s = f!("{} {}", self.kind, self.id);
        for node in &self.nodes {
            s += &f!(" {node}");
        }
        for material in &self.materials {
            s += &f!(" {material}");
        }
        s
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Element {} [{}]: nodes ({})",
            self.id,
            self.kind,
            self.nodes.iter().join(", ")
        )
    }
}
