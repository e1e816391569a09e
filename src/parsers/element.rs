// internal modules
use crate::error::{Entity, Error, Result};
use crate::mesh::{Element, ElementKind, MaterialId};
use crate::parsers::{
    chunks_from_line, ensure_fields, parse_id, string_to_float, string_to_integer,
};

/// Minimum data fields of any element, i.e. an ID and two nodes
const MIN_ELEMENT_FIELDS: usize = 3;

/// Parse an element line into an [Element]
///
/// Expects `<card> <id> <node_1> ... <node_n> [material ...]`, with the number
/// of nodes fixed by the card. The element ID and node IDs must be positive,
/// or zero if `allow_zero_index` is set.
///
/// Everything after the nodes is a material ID. Each one is read as an
/// integer if possible, and otherwise as a float when `allow_float_matid` is
/// set.
///
/// ```rust
/// # use mesh2dm::parsers::parse_element;
/// # use mesh2dm::mesh::{ElementKind, MaterialId};
/// let element = parse_element("E3T 1 1 2 3 7 12.5", false, true).unwrap();
/// assert_eq!(element.kind, ElementKind::E3T);
/// assert_eq!(element.nodes, vec![1, 2, 3]);
/// assert_eq!(element.materials, vec![MaterialId::Int(7), MaterialId::Float(12.5)]);
///
/// assert!(parse_element("E3T 1 1 2 3 7 12.5", false, false).is_err());
/// ```
pub fn parse_element(
    line: &str,
    allow_zero_index: bool,
    allow_float_matid: bool,
) -> Result<Element> {
    let chunks = chunks_from_line(line);
    ensure_fields(&chunks, MIN_ELEMENT_FIELDS, Entity::Element, None)?;

    let card = chunks[0];
    let kind = ElementKind::from_card(card).ok_or_else(|| Error::UnrecognisedCard {
        entity: Entity::Element,
        card: card.to_string(),
    })?;

    // now the card is known the real minimum can be checked
    let num_nodes = kind.num_nodes();
    ensure_fields(&chunks, num_nodes + 1, Entity::Element, Some(card))?;

    let id = parse_id(chunks[1], allow_zero_index, Entity::Element)?;

    let nodes = chunks[2..num_nodes + 2]
        .iter()
        .map(|field| parse_id(field, allow_zero_index, Entity::Node))
        .collect::<Result<Vec<i64>>>()?;

    let materials = chunks[num_nodes + 2..]
        .iter()
        .map(|field| parse_material(field, allow_float_matid))
        .collect::<Result<Vec<MaterialId>>>()?;

    Ok(Element {
        kind,
        id,
        nodes,
        materials,
    })
}

/// Integer first, with an optional fallback to float
fn parse_material(field: &str, allow_float_matid: bool) -> Result<MaterialId> {
    match string_to_integer(field) {
        Ok(i) => Ok(MaterialId::Int(i)),
        Err(e) if !allow_float_matid => Err(e),
        Err(_) => string_to_float(field).map(MaterialId::Float),
    }
}
