//! Line-level parsers for 2DM cards
//!
//! # Overview
//!
//! Every parser takes exactly one physical line of a 2DM file and turns it
//! into a typed record, or fails with a single [Error](crate::Error).
//!
//! | Parser                | Cards                                         | Output                                |
//! | --------------------- | --------------------------------------------- | ------------------------------------- |
//! | [parse_node]          | `ND`                                          | [Node](crate::mesh::Node)             |
//! | [parse_element]       | `E2L`, `E3L`, `E3T`, `E4Q`, `E6T`, `E8Q`, `E9Q` | [Element](crate::mesh::Element)       |
//! | [parse_node_string]   | `NS`                                          | [NodeStringStatus]                    |
//!
//! All of them share the same steps: tokenise with [chunks_from_line], check
//! the field count, check the card, then coerce the numeric fields in order.
//! The first problem aborts the line and nothing partial is handed back.
//!
//! Node strings may run over several lines, so the caller owns the list of
//! node IDs collected so far and passes it into every call until the
//! terminating negative ID is seen.
//!
//! ```rust
//! # use mesh2dm::parsers::parse_node_string;
//! let mut nodes = Vec::new();
//! let status = parse_node_string("NS 1 2 3", false, &mut nodes).unwrap();
//! assert!(!status.is_closed);
//!
//! let status = parse_node_string("NS 4 -5 MyLabel", false, &mut nodes).unwrap();
//! assert!(status.is_closed);
//! assert_eq!(status.label, "MyLabel");
//! assert_eq!(nodes, vec![1, 2, 3, 4, 5]);
//! ```
//!
//! None of the parsers log or hold any state between calls.

// Split into subfiles for development, but anything important is re-exported
mod cards;
mod element;
mod node;
mod node_string;
mod numeric;

#[doc(inline)]
pub use crate::parsers::cards::Card;

#[doc(inline)]
pub use crate::parsers::element::parse_element;

#[doc(inline)]
pub use crate::parsers::node::parse_node;

#[doc(inline)]
pub use crate::parsers::node_string::{parse_node_string, NodeStringStatus};

#[doc(inline)]
pub use crate::parsers::numeric::{string_to_float, string_to_integer};

// internal modules
use crate::error::{Entity, Error, Result};

/// Split a line into whitespace separated fields, ignoring comments
///
/// Anything from the first `#` onwards is a comment, even without whitespace
/// in front of it. Fields are separated by runs of ASCII whitespace.
///
/// ```rust
/// # use mesh2dm::parsers::chunks_from_line;
/// assert_eq!(chunks_from_line("ND 1  2.0\t3.0 4.0#note"), ["ND", "1", "2.0", "3.0", "4.0"]);
/// assert!(chunks_from_line("# just a comment").is_empty());
/// ```
pub fn chunks_from_line(line: &str) -> Vec<&str> {
    let data = match line.split_once('#') {
        Some((data, _)) => data,
        None => line,
    };

    data.split(is_field_separator)
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

fn is_field_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Fail early if there are not enough fields on the line
///
/// `required` counts data fields only, i.e. excluding the card itself.
fn ensure_fields(
    chunks: &[&str],
    required: usize,
    entity: Entity,
    card: Option<&str>,
) -> Result<()> {
    if chunks.len() < required + 1 {
        return Err(Error::InsufficientFields {
            entity,
            card: card.map(str::to_string),
            required,
            found: chunks.len().saturating_sub(1),
        });
    }
    Ok(())
}

/// Parse and validate an identifier field
///
/// Identifiers must be positive, with zero also allowed for zero-indexed
/// meshes.
fn parse_id(field: &str, allow_zero_index: bool, entity: Entity) -> Result<i64> {
    let id = string_to_integer(field)?;
    if id > 0 || (id == 0 && allow_zero_index) {
        Ok(id)
    } else {
        Err(Error::InvalidId { entity, value: id })
    }
}
