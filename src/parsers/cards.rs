// internal modules
use crate::mesh::ElementKind;

/// Every card the crate knows how to deal with
///
/// Cards are the first word on a line and are case sensitive. Anything not
/// listed is [Card::Unsupported] and left for the caller to skip or report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    /// `MESH2D` format identifier
    Mesh2d,
    /// `MESHNAME` or `GM` mesh name
    MeshName,
    /// `NUM_MATERIALS_PER_ELEM` declared number of materials
    NumMaterials,
    /// `ND` node definition
    Node,
    /// Any of the element definitions
    Element(ElementKind),
    /// `NS` node string definition
    NodeString,
    /// Valid 2DM, but nothing this crate reads
    Unsupported,
}

impl Card {
    /// Identify the card of a keyword
    ///
    /// ```rust
    /// # use mesh2dm::parsers::Card;
    /// # use mesh2dm::mesh::ElementKind;
    /// assert_eq!(Card::from_keyword("E6T"), Card::Element(ElementKind::E6T));
    /// assert_eq!(Card::from_keyword("nd"), Card::Unsupported);
    /// ```
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "MESH2D" => Card::Mesh2d,
            "MESHNAME" | "GM" => Card::MeshName,
            "NUM_MATERIALS_PER_ELEM" => Card::NumMaterials,
            "ND" => Card::Node,
            "NS" => Card::NodeString,
            other => match ElementKind::from_card(other) {
                Some(kind) => Card::Element(kind),
                None => Card::Unsupported,
            },
        }
    }

    /// Identify the card of a full line, comments ignored
    pub fn from_line(line: &str) -> Option<Self> {
        super::chunks_from_line(line)
            .first()
            .map(|keyword| Self::from_keyword(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("MESH2D", Card::Mesh2d)]
    #[case("MESHNAME", Card::MeshName)]
    #[case("GM", Card::MeshName)]
    #[case("NUM_MATERIALS_PER_ELEM", Card::NumMaterials)]
    #[case("ND", Card::Node)]
    #[case("NS", Card::NodeString)]
    #[case("E2L", Card::Element(ElementKind::E2L))]
    #[case("E9Q", Card::Element(ElementKind::E9Q))]
    #[case("MAT", Card::Unsupported)]
    #[case("BEGPARAMDEF", Card::Unsupported)]
    #[case("e3t", Card::Unsupported)]
    fn keywords(#[case] keyword: &str, #[case] expected: Card) {
        assert_eq!(Card::from_keyword(keyword), expected);
    }

    #[test]
    fn lines() {
        assert_eq!(Card::from_line("  ND 1 0 0 0"), Some(Card::Node));
        assert_eq!(Card::from_line("E4Q# 1 2 3 4"), Some(Card::Element(ElementKind::E4Q)));
        assert_eq!(Card::from_line("   # nothing"), None);
    }
}
