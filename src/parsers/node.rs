// internal modules
use crate::error::{Entity, Error, Result};
use crate::mesh::Node;
use crate::parsers::{chunks_from_line, ensure_fields, parse_id, string_to_float};

/// Parse an `ND` line into a [Node]
///
/// Expects `ND <id> <x> <y> <z>`. The ID must be positive, or zero if
/// `allow_zero_index` is set. Any fields after the z coordinate are ignored.
///
/// ```rust
/// # use mesh2dm::parsers::parse_node;
/// let node = parse_node("ND 4 1.0 -2.5 3e2 # comment", false).unwrap();
/// assert_eq!((node.id, node.x, node.y, node.z), (4, 1.0, -2.5, 300.0));
/// ```
pub fn parse_node(line: &str, allow_zero_index: bool) -> Result<Node> {
    let chunks = chunks_from_line(line);
    ensure_fields(&chunks, 4, Entity::Node, None)?;

    let card = chunks[0];
    if card != "ND" {
        return Err(Error::UnrecognisedCard {
            entity: Entity::Node,
            card: card.to_string(),
        });
    }

    let id = parse_id(chunks[1], allow_zero_index, Entity::Node)?;
    let x = string_to_float(chunks[2])?;
    let y = string_to_float(chunks[3])?;
    let z = string_to_float(chunks[4])?;

    Ok(Node { id, x, y, z })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case("ND 1 0.0 0.0 0.0", 1, [0.0, 0.0, 0.0])]
    #[case("ND 2 1.5 -2.25 10", 2, [1.5, -2.25, 10.0])]
    #[case("  ND\t3   1e3 2E-2 -.5  ", 3, [1000.0, 0.02, -0.5])]
    #[case("ND 4 1 2 3 99 extra", 4, [1.0, 2.0, 3.0])]
    #[case("ND 5 1 2 3#4 5", 5, [1.0, 2.0, 3.0])]
    #[case("ND +6 2 3 4", 6, [2.0, 3.0, 4.0])]
    fn valid(#[case] line: &str, #[case] id: i64, #[case] pos: [f64; 3]) {
        let node = parse_node(line, false).unwrap();
        assert_eq!(node.id, id);
        assert_eq!(node.pos(), pos);
    }

    #[test]
    fn exact_values() {
        let node = parse_node("ND 7 0.1 123456.789012345 -4.9e-324", false).unwrap();
        assert_eq!(node.x, 0.1);
        assert_eq!(node.y, 123456.789012345);
        assert_eq!(node.z, -4.9e-324);
    }

    #[rstest]
    #[case("")]
    #[case("ND")]
    #[case("ND 1 2.0 3.0")]
    #[case("ND 1 2.0 3.0 # 4.0")]
    fn too_few_fields(#[case] line: &str) {
        let error = parse_node(line, false).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Card);
        match error {
            Error::InsufficientFields {
                required, found, ..
            } => {
                assert_eq!(required, 4);
                assert_eq!(found, chunks_from_line(line).len().saturating_sub(1));
            }
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[rstest]
    #[case("NS 1 2.0 3.0 4.0", "NS")]
    #[case("nd 1 2.0 3.0 4.0", "nd")]
    #[case("E3T 1 2 3 4", "E3T")]
    fn wrong_card(#[case] line: &str, #[case] card: &str) {
        assert_eq!(
            parse_node(line, false).unwrap_err(),
            Error::UnrecognisedCard {
                entity: Entity::Node,
                card: card.into()
            }
        );
    }

    #[test]
    fn zero_index() {
        let error = parse_node("ND 0 1.0 2.0 3.0", false).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Format);
        assert_eq!(parse_node("ND 0 1.0 2.0 3.0", true).unwrap().id, 0);

        // negative IDs are never allowed
        for allow_zero_index in [false, true] {
            assert_eq!(
                parse_node("ND -1 1.0 2.0 3.0", allow_zero_index).unwrap_err(),
                Error::InvalidId {
                    entity: Entity::Node,
                    value: -1
                }
            );
        }
    }

    #[rstest]
    #[case("ND 1.0 1.0 2.0 3.0", Error::IntegerLiteral("1.0".into()))]
    #[case("ND 1 x 2.0 3.0", Error::FloatLiteral("x".into()))]
    #[case("ND 1 1.0 2.0 3,0", Error::FloatLiteral("3,0".into()))]
    #[case("ND 99999999999999999999 1 2 3", Error::IntegerLiteral("99999999999999999999".into()))]
    fn bad_literals(#[case] line: &str, #[case] expected: Error) {
        let error = parse_node(line, false).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NumericLiteral);
        assert_eq!(error, expected);
    }

    #[test]
    fn error_precedence() {
        // field count is checked before the card
        assert_eq!(
            parse_node("XX 1", false).unwrap_err().kind(),
            ErrorKind::Card
        );
        // the ID is checked before the coordinates
        assert_eq!(
            parse_node("ND 0 a b c", false).unwrap_err().kind(),
            ErrorKind::Format
        );
        // coordinates are checked in order
        assert_eq!(
            parse_node("ND 1 1.0 b c", false).unwrap_err(),
            Error::FloatLiteral("b".into())
        );
    }
}
