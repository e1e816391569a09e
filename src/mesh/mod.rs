//! Core mesh library
//!
//! # Overview
//!
//! Module for storing and using 2DM mesh data. The line parsers produce the
//! individual entities, and the file reader collects them into a [Mesh].
//!
//! ```rust
//! // Read a whole mesh from a file
//! let mesh = mesh2dm::read_2dm("./data/meshes/channel.2dm").unwrap();
//!
//! // Look up entities by ID or name
//! let node = mesh.node(1).unwrap();
//! let inflow = mesh.node_string("Inflow").unwrap();
//! # assert_eq!(node.id, 1);
//! # assert_eq!(inflow.nodes, vec![1, 5, 9]);
//! ```
//!
//! | Entity         | 2DM card(s)                               |
//! | -------------- | ----------------------------------------- |
//! | [Node]         | `ND`                                      |
//! | [Element]      | `E2L`, `E3L`, `E3T`, `E4Q`, `E6T`, `E8Q`, `E9Q` |
//! | [NodeString]   | `NS`                                      |
//!
//! Every entity can produce its own canonical 2DM line(s), which read back to
//! exactly the same entity.

// Split into subfiles for development, but anything important is re-exported
mod core;
mod element;
mod node;
mod node_string;

// inline important the mesh-related modules for a nice public API
#[doc(inline)]
pub use crate::mesh::core::Mesh;

#[doc(inline)]
pub use crate::mesh::element::{Element, ElementKind, MaterialId};

#[doc(inline)]
pub use crate::mesh::node::Node;

#[doc(inline)]
pub use crate::mesh::node_string::{NodeString, DEFAULT_FOLD};

#[doc(inline)]
pub use crate::readers::{read_2dm, read_2dm_with};
