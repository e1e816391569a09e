// internal modules
use crate::error::{Entity, Error, Result};
use crate::parsers::{chunks_from_line, ensure_fields, parse_id, string_to_integer};

/// State of a node string after parsing one `NS` line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeStringStatus {
    /// The terminating negative node ID has been seen
    pub is_closed: bool,
    /// Field directly after the terminator, verbatim, or empty if there is none
    pub label: String,
}

/// Parse an `NS` line, appending its node IDs to `nodes`
///
/// Node strings may continue over any number of lines, so the caller owns
/// the list of nodes and passes the same one in for every line until the
/// returned status is closed. Start a new node string with an empty list.
///
/// A negative ID marks the end of the node string. Its absolute value is the
/// last node, and the field after it (if any) is the label. Anything beyond
/// the label is ignored.
///
/// If the line fails to parse, `nodes` is left exactly as it was.
///
/// ```rust
/// # use mesh2dm::parsers::parse_node_string;
/// let mut nodes = vec![1, 2, 3];
/// let status = parse_node_string("NS 4 -5 MyLabel", false, &mut nodes).unwrap();
/// assert_eq!(nodes, vec![1, 2, 3, 4, 5]);
/// assert!(status.is_closed);
/// assert_eq!(status.label, "MyLabel");
/// ```
pub fn parse_node_string(
    line: &str,
    allow_zero_index: bool,
    nodes: &mut Vec<i64>,
) -> Result<NodeStringStatus> {
    let chunks = chunks_from_line(line);
    ensure_fields(&chunks, 1, Entity::NodeString, None)?;

    let card = chunks[0];
    if card != "NS" {
        return Err(Error::UnrecognisedCard {
            entity: Entity::NodeString,
            card: card.to_string(),
        });
    }

    let initial_len = nodes.len();
    let result = walk_fields(&chunks[1..], allow_zero_index, nodes);
    if result.is_err() {
        nodes.truncate(initial_len);
    }
    result
}

fn walk_fields(
    fields: &[&str],
    allow_zero_index: bool,
    nodes: &mut Vec<i64>,
) -> Result<NodeStringStatus> {
    for (i, field) in fields.iter().enumerate() {
        let value = string_to_integer(field)?;

        if value < 0 {
            // i64::MIN has no positive counterpart
            let id = value.checked_abs().ok_or(Error::InvalidId {
                entity: Entity::Node,
                value,
            })?;
            nodes.push(id);

            return Ok(NodeStringStatus {
                is_closed: true,
                label: fields.get(i + 1).map(|s| s.to_string()).unwrap_or_default(),
            });
        }

        nodes.push(parse_id(field, allow_zero_index, Entity::Node)?);
    }

    Ok(NodeStringStatus::default())
}
