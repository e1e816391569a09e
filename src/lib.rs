//! # The mesh2dm crate
//!
//! A collection of tools for reading, validating and writing 2DM mesh files
//!
//! ## Installation
//!
//! Direct install from github:
//!
//! ```shell
//! cargo install --git https://github.com/repositony/mesh2dm.git
//! ```
//!
//! ## Overview
//!
//! The 2DM format is a plain text mesh format used by SMS, BASEMENT, TUFLOW
//! and plenty of other hydraulic modelling tools. Every line starts with a card
//! naming the record type, followed by whitespace separated fields.
//!
//! The crate contains a couple of command line tools for quickly performing
//! common tasks on 2DM meshes.
//!
//! | Command line   | Description                                             |
//! | -------------- | ------------------------------------------------------- |
//! | `meshinfo`     | Summarise a mesh, optionally dumping it to JSON         |
//! | `meshfmt`      | Validate a mesh and rewrite it in a canonical layout    |
//!
//! All tools are fully documented with detailed `--help` messages, including
//! examples for common use cases.
//!
//! ### Supported cards
//!
//! | Card(s)                                         | Record                       |
//! | ----------------------------------------------- | ---------------------------- |
//! | `MESH2D`                                        | format identifier (required) |
//! | `MESHNAME`, `GM`                                | mesh name                    |
//! | `NUM_MATERIALS_PER_ELEM`                        | declared materials           |
//! | `ND`                                            | [Node](crate::mesh::Node)    |
//! | `E2L`, `E3L`, `E3T`, `E4Q`, `E6T`, `E8Q`, `E9Q` | [Element](crate::mesh::Element) |
//! | `NS`                                            | [NodeString](crate::mesh::NodeString) |
//!
//! Anything else is valid 2DM that is simply skipped over.
//!
//! ## Advanced use
//!
//! The line parsers are exposed directly for anyone streaming 2DM data from
//! somewhere other than a file. Each one handles a single line, and the first
//! problem found is returned as an [Error] of a given [ErrorKind].
//!
//! ```rust
//! use mesh2dm::{parse_element, parse_node, ErrorKind};
//!
//! let node = parse_node("ND 1 0.0 5.0 10.0", false).unwrap();
//! assert_eq!(node.pos(), [0.0, 5.0, 10.0]);
//!
//! let error = parse_element("E4Q 1 1 2 3", false, true).unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::Card);
//! ```
//!
//! Most of the time it is simpler to read a whole file into a
//! [Mesh](crate::mesh::Mesh) with a one-liner and go from there.
//!
//! ```rust
//! // read a full mesh, checking everything along the way
//! let mesh = mesh2dm::read_2dm("./data/meshes/channel.2dm").unwrap();
//!
//! // now do whatever you want with it:
//! //  - look up nodes, elements, and node strings
//! //  - dump it to JSON with serde
//! //  - write it back out with mesh2dm::write_2dm()
//! # assert_eq!(mesh.num_elements(), 8);
//! ```
//!
//! As an overview:
//! - The [parsers] module holds the line-level parsers for each card.
//! - The [mesh] module contains all of the relevant data structures.
//! - The [readers] module collects whole files into a mesh.
//! - The [writer] module writes meshes back out to 2DM.
//!
//! In the background, the `nom` parser combinator library handles the numeric
//! literals, `thiserror` and `anyhow` cover errors, and `clap` is used for the
//! command line interface.

// Public facing modules
pub mod error;
pub mod mesh;
pub mod parsers;
pub mod readers;
pub mod utils;
pub mod writer;

// Re-exports of useful data structures
#[doc(inline)]
pub use crate::error::{Error, ErrorKind, Result};

#[doc(inline)]
pub use crate::parsers::{parse_element, parse_node, parse_node_string};

#[doc(inline)]
pub use crate::readers::{read_2dm, read_2dm_with};

#[doc(inline)]
pub use crate::writer::write_2dm;
