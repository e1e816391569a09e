//! Errors raised while parsing individual 2DM lines
//!
//! Every failure of the line parsers ends up as exactly one [Error] variant,
//! carrying enough context to build a readable message. Variants are grouped
//! into broad categories by [ErrorKind] so callers can decide to skip a line,
//! abort a file, or collect problems for a report.
//!
//! Whole-file operations wrap these in `anyhow` errors with line numbers
//! attached, see [readers](crate::readers).

// external crates
use thiserror::Error;

/// Convenience alias for results of the line parsers
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of record a card or identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Node,
    Element,
    NodeString,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Entity::Node => "node",
            Entity::Element => "element",
            Entity::NodeString => "node string",
        };
        write!(f, "{s}")
    }
}

/// Broad categories of line errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or unrecognised card, or too few fields for the card
    Card,
    /// A number was read but is not a valid identifier
    Format,
    /// A field is not a valid integer or float literal
    NumericLiteral,
}

/// Failure to parse a single line of a 2DM file
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Fewer data fields than required
    ///
    /// `card` is `None` while the exact element card is not yet known, in
    /// which case `required` is the generic minimum for any element.
    #[error(
        "{} requires at least {required} fields ({}), got {found}",
        definition(.entity, .card),
        field_names(.entity, .required)
    )]
    InsufficientFields {
        entity: Entity,
        card: Option<String>,
        required: usize,
        found: usize,
    },

    /// First field is not the card expected by the parser
    #[error("Invalid {entity} card \"{card}\"")]
    UnrecognisedCard { entity: Entity, card: String },

    /// Identifier is negative, or zero without zero-indexing enabled
    #[error("Invalid {entity} ID: {value}")]
    InvalidId { entity: Entity, value: i64 },

    /// Not an integer literal, or out of range for i64
    #[error("Invalid integer literal \"{0}\"")]
    IntegerLiteral(String),

    /// Not a floating point literal
    #[error("Invalid float literal \"{0}\"")]
    FloatLiteral(String),
}

impl Error {
    /// Category of the error
    ///
    /// ```rust
    /// # use mesh2dm::{parse_node, ErrorKind};
    /// let error = parse_node("ND 0 1.0 2.0 3.0", false).unwrap_err();
    /// assert_eq!(error.kind(), ErrorKind::Format);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InsufficientFields { .. } | Error::UnrecognisedCard { .. } => ErrorKind::Card,
            Error::InvalidId { .. } => ErrorKind::Format,
            Error::IntegerLiteral(_) | Error::FloatLiteral(_) => ErrorKind::NumericLiteral,
        }
    }

    /// The card involved, if the error concerns one
    pub fn card(&self) -> Option<&str> {
        match self {
            Error::InsufficientFields { card, .. } => card.as_deref(),
            Error::UnrecognisedCard { card, .. } => Some(card),
            _ => None,
        }
    }
}

fn definition(entity: &Entity, card: &Option<String>) -> String {
    match (entity, card) {
        (Entity::Element, Some(card)) => format!("{card} element definition"),
        (Entity::Node, _) => "Node definition".to_string(),
        (Entity::Element, None) => "Element definition".to_string(),
        (Entity::NodeString, _) => "Node string definition".to_string(),
    }
}

fn field_names(entity: &Entity, required: &usize) -> String {
    match entity {
        Entity::Node => "id, x, y, z".to_string(),
        Entity::NodeString => "node_id".to_string(),
        Entity::Element => match *required {
            3 => "id, node_1, node_2".to_string(),
            n => format!("id, node_1, ..., node_{}", n - 1),
        },
    }
}
